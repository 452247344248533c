//! Scalar math relationships shared across the body models.
//!
//! Near-zero denominators degrade to a zero result instead of raising an error;
//! callers treat a zero timescale as "not evolving".

use std::f64::consts::PI;

use crate::constants::EPS;

/// Sign of `value` as -1, 0, or 1. Magnitudes at or below [`EPS`] count as zero.
pub fn sign(value: f64) -> i32 {
    if value.abs() > EPS {
        (value / value.abs()) as i32
    } else {
        0
    }
}

/// Convert a rotation-rate derivative into the derivative of the rotation period.
///
/// Returns a non-finite value when `rot_rate` is zero; callers must not pass a
/// non-rotating body.
pub fn rotation_rate_derivative_to_period_derivative(rot_rate: f64, drot_rate_dt: f64) -> f64 {
    -2.0 * PI * drot_rate_dt / (rot_rate * rot_rate)
}

/// Order-of-magnitude evolution timescale `|value / derivative|`, or zero when the
/// derivative vanishes.
pub fn timescale(value: f64, derivative: f64) -> f64 {
    if derivative != 0.0 {
        (value / derivative).abs()
    } else {
        0.0
    }
}

/// Running timescale over several perturbing derivatives.
///
/// Each non-zero derivative is added to the running quantity, which is then
/// replaced by `|value / running|`. The result depends on the order of
/// `derivatives`.
pub fn timescale_multi(value: f64, derivatives: &[f64]) -> f64 {
    let mut running = 0.0;
    for &derivative in derivatives {
        if derivative != 0.0 {
            running += derivative;
        }
        running = (value / running).abs();
    }
    running
}

/// Convert an angular frequency (rad/s) to a period (s).
#[inline]
pub fn frequency_to_period(freq: f64) -> f64 {
    2.0 * PI / freq
}

/// Convert a period (s) to an angular frequency (rad/s).
#[inline]
pub fn period_to_frequency(period: f64) -> f64 {
    2.0 * PI / period
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_respects_tolerance_band() {
        assert_eq!(sign(0.0), 0);
        assert_eq!(sign(EPS), 0);
        assert_eq!(sign(-EPS), 0);
        assert_eq!(sign(EPS * 2.0), 1);
        assert_eq!(sign(-EPS * 2.0), -1);
        assert_eq!(sign(1.0e30), 1);
        assert_eq!(sign(-3.5), -1);
    }

    #[test]
    fn timescale_multi_is_order_sensitive() {
        let forward = timescale_multi(10.0, &[1.0, 4.0]);
        let reverse = timescale_multi(10.0, &[4.0, 1.0]);
        // [1, 4]: |10/1| = 10, then |10/(10+4)|
        assert!((forward - 10.0 / 14.0).abs() < 1e-15);
        // [4, 1]: |10/4| = 2.5, then |10/(2.5+1)|
        assert!((reverse - 10.0 / 3.5).abs() < 1e-15);
        assert!((forward - reverse).abs() > 1.0);
    }

    #[test]
    fn timescale_multi_skips_zero_derivatives_in_running_sum() {
        // The zero entry still re-divides the running quantity.
        let value = timescale_multi(6.0, &[2.0, 0.0]);
        assert!((value - 2.0).abs() < 1e-15, "got {value}");
        assert_eq!(timescale_multi(6.0, &[]), 0.0);
    }

    #[test]
    fn period_derivative_from_spin_down() {
        let rate = period_to_frequency(86_400.0);
        let dp = rotation_rate_derivative_to_period_derivative(rate, -1e-12);
        assert!(dp > 0.0, "spin-down must lengthen the period");
    }
}
