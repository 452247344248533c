//! Closed-form physical relationships of a single body.
//!
//! All inputs and outputs are SI. None of these functions guard against zero
//! radii or rates; callers hand in physical bodies.

use std::f64::consts::PI;

use body_core::constants::{BIGG, DAYSEC, MEARTH, REARTH};
use body_core::reference::{C_EARTH, J2_EARTH, J2_VENUS, VENUS_INERTIA_COEFF};

use super::Body;

/// Gravitational self-energy of a uniform sphere.
pub fn body_potential_energy(mass: f64, radius: f64) -> f64 {
    -0.6 * BIGG * mass * mass / radius
}

/// Spin angular momentum `k² M R² ω`.
pub fn rotational_angular_momentum(rad_gyra: f64, mass: f64, radius: f64, omega: f64) -> f64 {
    rad_gyra * rad_gyra * mass * radius * radius * omega
}

/// Spin kinetic energy `½ k² M R² ω²`.
pub fn rotational_kinetic_energy(mass: f64, radius: f64, rad_gyra: f64, omega: f64) -> f64 {
    0.5 * rad_gyra * rad_gyra * mass * radius * radius * omega * omega
}

pub fn radius_frequency_to_rotational_velocity(radius: f64, freq: f64) -> f64 {
    radius * freq
}

pub fn rotational_velocity_to_frequency(rot_vel: f64, radius: f64) -> f64 {
    rot_vel / radius
}

/// Legacy density/mass to radius conversion.
///
/// Evaluates `(3ρ / (4πM))^(1/3)`, which is not the uniform-sphere radius
/// `(3M / (4πρ))^(1/3)`. Kept as-is until the intended form is confirmed.
pub fn density_mass_to_radius(density: f64, mass: f64) -> f64 {
    (3.0 * density / (4.0 * PI * mass)).powf(1.0 / 3.0)
}

/// Legacy radius/density to mass conversion, `4πR³ / (3ρ)`.
///
/// Divides by the density rather than multiplying; see [`density_mass_to_radius`].
pub fn mass_from_radius_density(radius: f64, density: f64) -> f64 {
    4.0 * PI * radius.powi(3) / (3.0 * density)
}

/// Equatorial surface speed of a body spinning at `rot_rate`.
pub fn rotational_velocity(radius: f64, rot_rate: f64) -> f64 {
    radius * rot_rate
}

/// Equilibrium dynamical ellipticity from Earth-scaled rotational flattening.
///
/// Scales Earth's dynamical ellipticity by `ω² R³ / M` relative to Earth, and
/// never returns less than Venus's value `J2_Venus / 0.336`.
pub fn dynamical_ellipticity_equilibrium(body: &Body) -> f64 {
    let ed_earth = J2_EARTH * MEARTH * REARTH.powi(2) / C_EARTH;
    let ed_venus = venus_dynamical_ellipticity();
    let nu_earth = 2.0 * PI / DAYSEC;

    let scale = ed_earth * MEARTH / (nu_earth.powi(2) * REARTH.powi(3));
    let dyn_ellip = scale * body.rot_rate.powi(2) * body.radius.powi(3) / body.mass;

    dyn_ellip.max(ed_venus)
}

/// Floor applied by [`dynamical_ellipticity_equilibrium`].
pub fn venus_dynamical_ellipticity() -> f64 {
    J2_VENUS / VENUS_INERTIA_COEFF
}
