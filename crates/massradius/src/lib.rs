//! Empirical mass-radius correlations and the dispatch between them.
//!
//! Callers map a relation name or integer id to a [`MassRadiusRelation`] and
//! convert between a body's input parameter (mass or radius) and the other
//! quantity. Unknown ids and fit evaluations that leave the real line are
//! reported as [`MassRadiusError`]s rather than propagated as NaN or infinity.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

pub mod fits;

/// Selects one empirical fit family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MassRadiusRelation {
    ReidHawley = 0,
    GordaSvechnikov = 1,
    BaylessOrosz = 2,
    Sotin = 3,
}

/// Errors surfaced at the dispatch boundary.
#[derive(Debug, Error, PartialEq)]
pub enum MassRadiusError {
    #[error("mass-radius relation id {0} is not supported")]
    UnsupportedRelation(i32),
    #[error("unknown mass-radius relation `{0}`")]
    UnknownRelationName(String),
    #[error("{relation} fit is undefined for input {input:e}")]
    OutOfDomain {
        relation: MassRadiusRelation,
        input: f64,
    },
}

impl MassRadiusRelation {
    /// Every supported relation, ordered by id.
    pub const ALL: [MassRadiusRelation; 4] = [
        MassRadiusRelation::ReidHawley,
        MassRadiusRelation::GordaSvechnikov,
        MassRadiusRelation::BaylessOrosz,
        MassRadiusRelation::Sotin,
    ];

    /// Integer id used by manifests and the legacy dispatch functions.
    pub fn id(self) -> i32 {
        self as i32
    }

    /// Canonical human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            MassRadiusRelation::ReidHawley => "reid-hawley",
            MassRadiusRelation::GordaSvechnikov => "gorda-svechnikov",
            MassRadiusRelation::BaylessOrosz => "bayless-orosz",
            MassRadiusRelation::Sotin => "sotin",
        }
    }

    /// Radius (m) of a body of the given mass (kg).
    ///
    /// A fit that yields a zero or negative radius is out of its domain.
    pub fn mass_to_radius(self, mass: f64) -> Result<f64, MassRadiusError> {
        let radius = match self {
            MassRadiusRelation::ReidHawley => fits::mass_to_radius_reid_hawley(mass),
            MassRadiusRelation::GordaSvechnikov => fits::mass_to_radius_gorda_svechnikov(mass),
            MassRadiusRelation::BaylessOrosz => fits::mass_to_radius_bayless_orosz(mass),
            MassRadiusRelation::Sotin => fits::mass_to_radius_sotin(mass),
        };
        if radius <= 0.0 {
            return Err(self.out_of_domain(mass));
        }
        self.checked(mass, radius)
    }

    /// Mass of a body of the given radius (m).
    ///
    /// Units follow the underlying fit; see [`fits::radius_to_mass_gorda_svechnikov`].
    pub fn radius_to_mass(self, radius: f64) -> Result<f64, MassRadiusError> {
        let mass = match self {
            MassRadiusRelation::ReidHawley => fits::radius_to_mass_reid_hawley(radius),
            MassRadiusRelation::GordaSvechnikov => fits::radius_to_mass_gorda_svechnikov(radius),
            MassRadiusRelation::BaylessOrosz => fits::radius_to_mass_bayless_orosz(radius),
            MassRadiusRelation::Sotin => fits::radius_to_mass_sotin(radius),
        };
        self.checked(radius, mass)
    }

    fn checked(self, input: f64, value: f64) -> Result<f64, MassRadiusError> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(self.out_of_domain(input))
        }
    }

    fn out_of_domain(self, input: f64) -> MassRadiusError {
        tracing::warn!(relation = self.name(), input, "mass-radius fit left its domain");
        MassRadiusError::OutOfDomain {
            relation: self,
            input,
        }
    }
}

impl fmt::Display for MassRadiusRelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<i32> for MassRadiusRelation {
    type Error = MassRadiusError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        MassRadiusRelation::ALL
            .into_iter()
            .find(|relation| relation.id() == value)
            .ok_or(MassRadiusError::UnsupportedRelation(value))
    }
}

impl FromStr for MassRadiusRelation {
    type Err = MassRadiusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        MassRadiusRelation::ALL
            .into_iter()
            .find(|relation| relation.name() == normalized)
            .ok_or_else(|| MassRadiusError::UnknownRelationName(s.to_string()))
    }
}

/// Radius (m) from mass (kg) using the relation with the given id.
pub fn mass_to_radius(mass: f64, relation_id: i32) -> Result<f64, MassRadiusError> {
    MassRadiusRelation::try_from(relation_id)?.mass_to_radius(mass)
}

/// Mass from radius (m) using the relation with the given id.
pub fn radius_to_mass(radius: f64, relation_id: i32) -> Result<f64, MassRadiusError> {
    MassRadiusRelation::try_from(relation_id)?.radius_to_mass(radius)
}
