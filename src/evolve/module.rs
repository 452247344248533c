//! Per-module copy capability invoked during body-state propagation.

use crate::body::Body;

/// Equation-of-tides model selected for the session, passed through to modules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TidesModel {
    #[default]
    ConstantPhaseLag,
    ConstantTimeLag,
    Db15,
}

/// A physics module attached to a body that owns extra state.
///
/// `copy_body` receives the whole destination and source arrays so modules that
/// couple bodies (tides, for example) can read their partners. The shared fields
/// of `dest[body_index]` are already written when it runs and must not be changed.
pub trait BodyModule {
    fn name(&self) -> &str;

    fn copy_body(&self, dest: &mut [Body], src: &[Body], tides_model: TidesModel, body_index: usize);
}

/// Copies a fixed set of [`ModuleState`](crate::body::ModuleState) keys verbatim.
///
/// A key missing on the source body is removed from the destination.
#[derive(Debug, Clone)]
pub struct FieldCopy {
    name: String,
    fields: Vec<String>,
}

impl FieldCopy {
    pub fn new<I, S>(name: impl Into<String>, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }
}

impl BodyModule for FieldCopy {
    fn name(&self) -> &str {
        &self.name
    }

    fn copy_body(&self, dest: &mut [Body], src: &[Body], _tides_model: TidesModel, body_index: usize) {
        let source = &src[body_index].module_state;
        let target = &mut dest[body_index].module_state;
        for field in &self.fields {
            match source.get(field) {
                Some(value) => target.set(field.as_str(), value),
                None => {
                    target.remove(field);
                }
            }
        }
    }
}
