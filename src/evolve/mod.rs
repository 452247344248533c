//! Propagation of the shared body state between integration steps.
//!
//! The evolution driver owns two body arrays and calls [`body_copy`] once per
//! accepted step. Only fields needed by more than one module are copied here;
//! everything else travels through the [`BodyModule`]s attached to each body.

pub mod module;

use std::fmt;

use thiserror::Error;

use crate::body::Body;

pub use module::{BodyModule, FieldCopy, TidesModel};

/// Errors raised before any body is mutated.
#[derive(Debug, Error, PartialEq)]
pub enum PropagationError {
    #[error("body arrays do not match the session: expected {expected}, dest has {dest}, src has {src}")]
    LengthMismatch {
        expected: usize,
        dest: usize,
        src: usize,
    },
    #[error("body index {index} is out of range for {num_bodies} bodies")]
    BodyIndexOutOfRange { index: usize, num_bodies: usize },
    #[error("body {index}: {reason}")]
    Layout { index: usize, reason: &'static str },
}

/// Session context: which modules are attached to which body.
pub struct Evolve {
    tides_model: TidesModel,
    binary: bool,
    modules: Vec<Vec<Box<dyn BodyModule>>>,
}

impl Evolve {
    pub fn new(num_bodies: usize, tides_model: TidesModel) -> Self {
        Self {
            tides_model,
            binary: false,
            modules: (0..num_bodies).map(|_| Vec::new()).collect(),
        }
    }

    /// Mark the session as a binary configuration, where body 0 carries an orbit.
    pub fn with_binary(mut self, binary: bool) -> Self {
        self.binary = binary;
        self
    }

    /// Append a module to the body's ordered module list.
    pub fn attach<M>(&mut self, body_index: usize, module: M) -> Result<(), PropagationError>
    where
        M: BodyModule + 'static,
    {
        let num_bodies = self.num_bodies();
        let slot = self
            .modules
            .get_mut(body_index)
            .ok_or(PropagationError::BodyIndexOutOfRange {
                index: body_index,
                num_bodies,
            })?;
        slot.push(Box::new(module));
        Ok(())
    }

    pub fn num_bodies(&self) -> usize {
        self.modules.len()
    }

    /// Number of modules attached to a body; zero for an unknown index.
    pub fn num_modules(&self, body_index: usize) -> usize {
        self.modules.get(body_index).map_or(0, Vec::len)
    }

    pub fn modules(&self, body_index: usize) -> &[Box<dyn BodyModule>] {
        self.modules
            .get(body_index)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn tides_model(&self) -> TidesModel {
        self.tides_model
    }

    pub fn is_binary(&self) -> bool {
        self.binary
    }
}

impl fmt::Debug for Evolve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let modules: Vec<Vec<&str>> = self
            .modules
            .iter()
            .map(|body| body.iter().map(|m| m.name()).collect())
            .collect();
        f.debug_struct("Evolve")
            .field("tides_model", &self.tides_model)
            .field("binary", &self.binary)
            .field("modules", &modules)
            .finish()
    }
}

/// Copy the shared physical state of every body from `src` into `dest`, then
/// run each body's module copies in attachment order.
///
/// `src` must satisfy [`validate_layout`] for the session's binary flag; a
/// violating source is rejected before `dest` is touched. Orbital elements are
/// copied for bodies after the first, and for body 0 only in a binary.
pub fn body_copy(dest: &mut [Body], src: &[Body], evolve: &Evolve) -> Result<(), PropagationError> {
    let expected = evolve.num_bodies();
    if dest.len() != expected || src.len() != expected {
        return Err(PropagationError::LengthMismatch {
            expected,
            dest: dest.len(),
            src: src.len(),
        });
    }
    validate_layout(src, evolve.is_binary())?;

    for body_index in 0..expected {
        let carries_orbit = body_index > 0 || evolve.is_binary();
        copy_shared_fields(&mut dest[body_index], &src[body_index], carries_orbit);
        tracing::trace!(body_index, name = %src[body_index].name, "copied shared body state");

        for module in evolve.modules(body_index) {
            let _span =
                tracing::debug_span!("module_copy", module = module.name(), body_index).entered();
            module.copy_body(dest, src, evolve.tides_model(), body_index);
        }
    }
    Ok(())
}

fn copy_shared_fields(dest: &mut Body, src: &Body, carries_orbit: bool) {
    dest.body_type = src.body_type;
    dest.mass = src.mass;
    dest.radius = src.radius;
    dest.rad_gyra = src.rad_gyra;
    dest.obliquity_vector = src.obliquity_vector;
    dest.rot_rate = src.rot_rate;
    dest.age = src.age;

    if carries_orbit {
        dest.orbit = src.orbit;
    }
}

/// Check that only body 0 is a primary, unless the system is a binary.
pub fn validate_layout(bodies: &[Body], binary: bool) -> Result<(), PropagationError> {
    for (index, body) in bodies.iter().enumerate() {
        match (index, body.orbit.is_primary()) {
            (0, false) if !binary => {
                return Err(PropagationError::Layout {
                    index,
                    reason: "the primary carries orbital elements outside a binary configuration",
                });
            }
            (0, true) if binary => {
                return Err(PropagationError::Layout {
                    index,
                    reason: "a binary configuration needs orbital elements on body 0",
                });
            }
            (i, true) if i > 0 => {
                return Err(PropagationError::Layout {
                    index,
                    reason: "orbiting body has no orbital elements",
                });
            }
            _ => {}
        }
    }
    Ok(())
}
