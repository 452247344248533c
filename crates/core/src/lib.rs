//! Core units, constants, and shared primitives for the body physics workspace.

pub mod math;

/// Physical constants expressed in SI units (unless stated otherwise).
pub mod constants {
    /// Newtonian gravitational constant (m³ kg⁻¹ s⁻²).
    pub const BIGG: f64 = 6.67428e-11;
    /// Solar mass (kg).
    pub const MSUN: f64 = 1.988416e30;
    /// Nominal solar radius (m).
    pub const RSUN: f64 = 6.957e8;
    /// Earth mass (kg).
    pub const MEARTH: f64 = 5.972186e24;
    /// Earth equatorial radius (m).
    pub const REARTH: f64 = 6.3781e6;
    /// Jupiter mass (kg).
    pub const MJUP: f64 = 1.898130e27;
    /// Jupiter equatorial radius (m).
    pub const RJUP: f64 = 7.1492e7;
    /// Metres per astronomical unit.
    pub const AUM: f64 = 1.495_978_707e11;
    /// Seconds per day.
    pub const DAYSEC: f64 = 86_400.0;
    /// Seconds per Julian year.
    pub const YEARSEC: f64 = 3.15576e7;
    /// Magnitude below which a value is treated as zero.
    pub const EPS: f64 = 1e-10;
}

/// Solar-system reference values used to scale shape estimates for other bodies.
pub mod reference {
    /// Earth's second zonal harmonic.
    pub const J2_EARTH: f64 = 1.08262668e-3;
    /// Venus's second zonal harmonic.
    pub const J2_VENUS: f64 = 4.56e-6;
    /// Earth's polar moment of inertia (kg m²).
    pub const C_EARTH: f64 = 8.034e37;
    /// Venus's moment-of-inertia coefficient C/(MR²).
    pub const VENUS_INERTIA_COEFF: f64 = 0.336;
}

/// Basic unit conversion helpers.
pub mod units {
    use super::constants::{AUM, MEARTH, MJUP, MSUN, REARTH, RJUP, RSUN};

    /// Convert Earth masses to kilograms.
    #[inline]
    pub fn earth_masses_to_kg(v: f64) -> f64 {
        v * MEARTH
    }

    /// Convert Jupiter masses to kilograms.
    #[inline]
    pub fn jupiter_masses_to_kg(v: f64) -> f64 {
        v * MJUP
    }

    /// Convert solar masses to kilograms.
    #[inline]
    pub fn solar_masses_to_kg(v: f64) -> f64 {
        v * MSUN
    }

    /// Convert Earth radii to metres.
    #[inline]
    pub fn earth_radii_to_m(v: f64) -> f64 {
        v * REARTH
    }

    /// Convert Jupiter radii to metres.
    #[inline]
    pub fn jupiter_radii_to_m(v: f64) -> f64 {
        v * RJUP
    }

    /// Convert solar radii to metres.
    #[inline]
    pub fn solar_radii_to_m(v: f64) -> f64 {
        v * RSUN
    }

    /// Convert astronomical units to metres.
    #[inline]
    pub fn au_to_m(v: f64) -> f64 {
        v * AUM
    }

    /// Convert metres to astronomical units.
    #[inline]
    pub fn m_to_au(v: f64) -> f64 {
        v / AUM
    }
}

/// Lightweight time utilities shared across crates.
pub mod time {
    use super::constants::{DAYSEC, YEARSEC};

    /// Convert days to seconds.
    #[inline]
    pub fn days_to_seconds(days: f64) -> f64 {
        days * DAYSEC
    }

    /// Convert seconds to days.
    #[inline]
    pub fn seconds_to_days(seconds: f64) -> f64 {
        seconds / DAYSEC
    }

    /// Convert Julian years to seconds.
    #[inline]
    pub fn years_to_seconds(years: f64) -> f64 {
        years * YEARSEC
    }

    /// Convert seconds to Julian years.
    #[inline]
    pub fn seconds_to_years(seconds: f64) -> f64 {
        seconds / YEARSEC
    }
}

/// Minimal vector helpers to avoid ad-hoc `[f64; 3]` math everywhere.
pub mod vector {
    /// Alias for a 3D vector; units depend on context.
    pub type Vector3 = [f64; 3];

    /// Euclidean norm of a vector.
    #[inline]
    pub fn norm(v: &Vector3) -> f64 {
        dot(v, v).sqrt()
    }

    /// Dot product of two vectors.
    #[inline]
    pub fn dot(a: &Vector3, b: &Vector3) -> f64 {
        a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
    }
}
