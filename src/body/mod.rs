//! Physical state of a simulated body and the relationships derived from it.

pub mod properties;

use std::collections::BTreeMap;

use body_core::math::{frequency_to_period, period_to_frequency};

/// Allowed floating-point overshoot of the obliquity vector's z component.
pub const OBLIQUITY_TOLERANCE: f64 = 1e-12;

/// Broad category of a body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BodyType {
    #[default]
    Planet,
    Star,
}

/// Orbital elements carried by bodies that orbit the primary.
///
/// Eccentricity is stored as the `h = e sin ϖ`, `k = e cos ϖ` pair.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OrbitalElements {
    pub hecc: f64,
    pub kecc: f64,
    /// Semi-major axis (m).
    pub semi_major_axis: f64,
    /// Mean motion (rad/s).
    pub mean_motion: f64,
}

impl OrbitalElements {
    pub fn from_eccentricity(
        eccentricity: f64,
        longitude_of_pericenter: f64,
        semi_major_axis: f64,
        mean_motion: f64,
    ) -> Self {
        Self {
            hecc: eccentricity * longitude_of_pericenter.sin(),
            kecc: eccentricity * longitude_of_pericenter.cos(),
            semi_major_axis,
            mean_motion,
        }
    }

    pub fn eccentricity(&self) -> f64 {
        self.hecc.hypot(self.kecc)
    }

    /// Longitude of pericenter (rad), in `(-π, π]`.
    pub fn longitude_of_pericenter(&self) -> f64 {
        self.hecc.atan2(self.kecc)
    }
}

/// Whether a body is the system's primary or orbits it.
///
/// The primary of a single-star system carries no orbital elements. Binary
/// configurations give the body at index 0 an orbit too.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Orbit {
    #[default]
    Primary,
    Orbiting(OrbitalElements),
}

impl Orbit {
    pub fn elements(&self) -> Option<&OrbitalElements> {
        match self {
            Orbit::Primary => None,
            Orbit::Orbiting(elements) => Some(elements),
        }
    }

    pub fn is_primary(&self) -> bool {
        matches!(self, Orbit::Primary)
    }
}

/// Unit vector of the spin axis projected onto the orbital frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObliquityVector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Default for ObliquityVector {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 1.0,
        }
    }
}

impl ObliquityVector {
    /// Build a vector, clamping a `z` that overshoots 1.
    ///
    /// Overshoot inside [`OBLIQUITY_TOLERANCE`] is rounding noise and logged as a
    /// warning; anything larger is logged as an error. Both are clamped.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        let z = if z > 1.0 {
            let overshoot = z - 1.0;
            if overshoot <= OBLIQUITY_TOLERANCE {
                tracing::warn!(zobl = z, overshoot, "obliquity vector z exceeds 1, clamping");
            } else {
                tracing::error!(
                    zobl = z,
                    overshoot,
                    "obliquity vector z exceeds 1 beyond tolerance, clamping"
                );
            }
            1.0
        } else {
            z
        };
        Self { x, y, z }
    }

    /// Decompose an obliquity and precession angle (rad) into vector components.
    pub fn from_angles(obliquity: f64, precession_angle: f64) -> Self {
        let (sin_obl, cos_obl) = obliquity.sin_cos();
        Self::new(
            sin_obl * precession_angle.cos(),
            sin_obl * precession_angle.sin(),
            cos_obl,
        )
    }

    /// Obliquity (rad) in `[0, π]`.
    pub fn obliquity(&self) -> f64 {
        self.z.clamp(-1.0, 1.0).acos()
    }

    /// Precession angle (rad) in `(-π, π]`; zero when the spin axis is aligned.
    pub fn precession_angle(&self) -> f64 {
        self.y.atan2(self.x)
    }

    pub fn norm(&self) -> f64 {
        body_core::vector::norm(&[self.x, self.y, self.z])
    }
}

/// Module-owned scalar fields attached to a body.
///
/// The shared propagation step leaves these alone; modules copy their own keys.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModuleState(BTreeMap<String, f64>);

impl ModuleState {
    pub fn get(&self, key: &str) -> Option<f64> {
        self.0.get(key).copied()
    }

    pub fn set(&mut self, key: impl Into<String>, value: f64) {
        self.0.insert(key.into(), value);
    }

    pub fn remove(&mut self, key: &str) -> Option<f64> {
        self.0.remove(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for ModuleState {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// One simulated celestial object.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub name: String,
    pub body_type: BodyType,
    /// Mass (kg).
    pub mass: f64,
    /// Radius (m).
    pub radius: f64,
    /// Radius of gyration coefficient `k`, with `I = k² M R²`.
    pub rad_gyra: f64,
    /// Obliquity (rad).
    pub obliquity: f64,
    /// Precession angle (rad).
    pub precession_angle: f64,
    pub obliquity_vector: ObliquityVector,
    /// Rotation rate (rad/s).
    pub rot_rate: f64,
    /// Age (s).
    pub age: f64,
    pub orbit: Orbit,
    pub module_state: ModuleState,
}

impl Body {
    /// A non-rotating primary with zero obliquity and `k = 0.5`.
    pub fn new(name: impl Into<String>, body_type: BodyType, mass: f64, radius: f64) -> Self {
        Self {
            name: name.into(),
            body_type,
            mass,
            radius,
            rad_gyra: 0.5,
            obliquity: 0.0,
            precession_angle: 0.0,
            obliquity_vector: ObliquityVector::default(),
            rot_rate: 0.0,
            age: 0.0,
            orbit: Orbit::Primary,
            module_state: ModuleState::default(),
        }
    }

    pub fn with_orbit(mut self, elements: OrbitalElements) -> Self {
        self.orbit = Orbit::Orbiting(elements);
        self
    }

    pub fn with_rotation_rate(mut self, rot_rate: f64) -> Self {
        self.rot_rate = rot_rate;
        self
    }

    pub fn with_obliquity(mut self, obliquity: f64, precession_angle: f64) -> Self {
        self.obliquity = obliquity;
        self.precession_angle = precession_angle;
        self.update_obliquity_vector();
        self
    }

    /// Recompute the obliquity vector from the stored angles.
    pub fn update_obliquity_vector(&mut self) {
        self.obliquity_vector = ObliquityVector::from_angles(self.obliquity, self.precession_angle);
    }

    pub fn potential_energy(&self) -> f64 {
        properties::body_potential_energy(self.mass, self.radius)
    }

    pub fn rotational_angular_momentum(&self) -> f64 {
        properties::rotational_angular_momentum(self.rad_gyra, self.mass, self.radius, self.rot_rate)
    }

    pub fn rotational_kinetic_energy(&self) -> f64 {
        properties::rotational_kinetic_energy(self.mass, self.radius, self.rad_gyra, self.rot_rate)
    }

    pub fn rotational_velocity(&self) -> f64 {
        properties::rotational_velocity(self.radius, self.rot_rate)
    }

    /// Rotation period (s). Infinite for a non-rotating body.
    pub fn rotation_period(&self) -> f64 {
        frequency_to_period(self.rot_rate)
    }

    pub fn set_rotation_period(&mut self, period: f64) {
        self.rot_rate = period_to_frequency(period);
    }

    pub fn dynamical_ellipticity_equilibrium(&self) -> f64 {
        properties::dynamical_ellipticity_equilibrium(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    #[test]
    fn obliquity_vector_is_unit_length() {
        for (obl, prec) in [(0.0, 0.0), (0.41, 1.2), (FRAC_PI_2, -2.0), (PI, 3.0)] {
            let v = ObliquityVector::from_angles(obl, prec);
            assert!((v.norm() - 1.0).abs() < 1e-14, "|v| = {}", v.norm());
        }
    }

    #[test]
    fn obliquity_vector_inverts_to_angles() {
        let v = ObliquityVector::from_angles(0.4, FRAC_PI_4);
        assert!((v.obliquity() - 0.4).abs() < 1e-14);
        assert!((v.precession_angle() - FRAC_PI_4).abs() < 1e-14);
    }

    #[test]
    fn overshooting_z_is_clamped() {
        let v = ObliquityVector::new(0.0, 0.0, 1.0 + 1e-15);
        assert_eq!(v.z, 1.0);
        let v = ObliquityVector::new(0.0, 0.0, 1.5);
        assert_eq!(v.z, 1.0);
    }

    #[test]
    fn eccentricity_components_round_trip() {
        let el = OrbitalElements::from_eccentricity(0.2, 1.0, 1.0e11, 2.0e-7);
        assert!((el.eccentricity() - 0.2).abs() < 1e-15);
        assert!((el.longitude_of_pericenter() - 1.0).abs() < 1e-14);
    }

    #[test]
    fn rotation_period_setter_matches_rate() {
        let mut body = Body::new("earth", BodyType::Planet, 5.97e24, 6.37e6);
        body.set_rotation_period(86_400.0);
        assert!((body.rotation_period() - 86_400.0).abs() < 1e-9);
    }
}
