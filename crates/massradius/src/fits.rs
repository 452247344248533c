//! Published mass-radius fits.
//!
//! Forward and reverse fits are independent regressions, so only the Sotin
//! power laws are (nearly) inverses of each other. Coefficients are reproduced
//! as published, quirks included.

use body_core::constants::{MEARTH, MSUN, REARTH, RSUN};

/// Stellar radius from mass, log-polynomial fit from *New Light on Dark Stars*
/// Table 4.1 (Reid & Hawley).
pub fn mass_to_radius_reid_hawley(mass: f64) -> f64 {
    let x = (mass / MSUN).log10();
    let y = 0.1424 + 1.568 * x - 0.2342 * x * x - 0.5581 * x * x * x;
    10f64.powf(y) * RSUN
}

/// Stellar mass from radius (Reid & Hawley).
pub fn radius_to_mass_reid_hawley(radius: f64) -> f64 {
    let x = (radius / RSUN).log10();
    let y = 0.1277 + 2.185 * x + 3.135 * x * x + 1.9031 * x * x * x;
    10f64.powf(y) * MSUN
}

/// Stellar radius from mass, Gorda & Svechnikov (1999), Astronomy Reports 43, 521.
///
/// The break at 0.14 applies to `log10(M/Msun)`, and the branch polynomials take
/// another `log10` of that value. Exactly one solar mass evaluates to a zero
/// radius and smaller masses to NaN.
pub fn mass_to_radius_gorda_svechnikov(mass: f64) -> f64 {
    let log_mass = (mass / MSUN).log10();
    if log_mass > 0.14 {
        10f64.powf(0.096 + 0.652 * log_mass.log10()) * RSUN
    } else {
        10f64.powf(0.1 + 1.03 * log_mass.log10()) * RSUN
    }
}

/// Reverse Gorda & Svechnikov fit from Barnes et al. (2013), Astrobiology 13, 225.
///
/// The result is in solar masses, not kilograms.
pub fn radius_to_mass_gorda_svechnikov(radius: f64) -> f64 {
    let x = (radius / RSUN).log10();
    let y = -0.09709 + 0.9709 * x - 2.502e-5 * x * x - 1.34e-5 * x * x * x;
    10f64.powf(y)
}

/// Stellar radius from mass, Bayless & Orosz (2006), ApJ 651, 1155.
pub fn mass_to_radius_bayless_orosz(mass: f64) -> f64 {
    let m = mass / MSUN;
    let radius = 0.0324 + 0.9343 * m + 0.0374 * m * m;
    radius * RSUN
}

/// Stellar mass from radius (Bayless & Orosz).
pub fn radius_to_mass_bayless_orosz(radius: f64) -> f64 {
    let r = radius / RSUN;
    let mass = -0.03477 + 1.07146 * r - 8.171 * r * r - 0.0412 * r * r * r;
    mass * MSUN
}

/// Terrestrial planet radius from mass, Sotin et al. (2007), Icarus 191, 337.
pub fn mass_to_radius_sotin(mass: f64) -> f64 {
    (mass / MEARTH).powf(0.272) * REARTH
}

/// Terrestrial planet mass from radius (Sotin et al.).
pub fn radius_to_mass_sotin(radius: f64) -> f64 {
    (radius / REARTH).powf(3.6765) * MEARTH
}
