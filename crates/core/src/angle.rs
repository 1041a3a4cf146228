use std::f64::consts::{PI, TAU};

/// Magnitude above which an angle is reduced by remainder before shifting.
///
/// Keeps the shift loops in [`normalize`] to a handful of iterations for
/// arbitrarily large finite input.
const REDUCE_ABOVE: f64 = 64.0 * TAU;

/// Wraps an angle in radians into `[-π, π]`.
///
/// The angle is shifted by whole turns (±2π) until it lies in range, so values
/// already in range are returned unchanged. Non-finite input is returned as-is.
///
/// # Example
///
/// ```
/// use std::f64::consts::PI;
/// use pendulum_core::normalize;
///
/// assert_eq!(normalize(0.5), 0.5);
/// assert!((normalize(3.0 * PI) - PI).abs() < 1e-12);
/// ```
#[must_use]
pub fn normalize(angle: f64) -> f64 {
    if !angle.is_finite() {
        return angle;
    }

    let mut angle = if angle.abs() > REDUCE_ABOVE {
        angle % TAU
    } else {
        angle
    };

    while angle > PI {
        angle -= TAU;
    }
    while angle < -PI {
        angle += TAU;
    }

    angle
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn in_range_angles_are_unchanged() {
        for angle in [-PI, -1.0, 0.0, 0.25, 1.5, PI] {
            assert_eq!(normalize(angle), angle);
        }
    }

    #[test]
    fn wraps_by_whole_turns() {
        assert_relative_eq!(normalize(PI + 0.5), -PI + 0.5, epsilon = 1e-12);
        assert_relative_eq!(normalize(-PI - 0.5), PI - 0.5, epsilon = 1e-12);
        assert_relative_eq!(normalize(7.0 * TAU + 1.0), 1.0, epsilon = 1e-9);
        assert_relative_eq!(normalize(-3.0 * TAU - 1.0), -1.0, epsilon = 1e-12);
    }

    #[test]
    fn large_angles_terminate_in_range() {
        let wrapped = normalize(1.0e12);
        assert!((-PI..=PI).contains(&wrapped));
    }

    #[test]
    fn non_finite_passes_through() {
        assert!(normalize(f64::NAN).is_nan());
        assert_eq!(normalize(f64::INFINITY), f64::INFINITY);
    }

    proptest! {
        #[test]
        fn result_is_always_in_range(angle in -1.0e6_f64..1.0e6) {
            let wrapped = normalize(angle);
            prop_assert!((-PI..=PI).contains(&wrapped));
        }

        #[test]
        fn result_differs_by_whole_turns(angle in -100.0_f64..100.0) {
            let turns = (angle - normalize(angle)) / TAU;
            prop_assert!((turns - turns.round()).abs() < 1e-9);
        }
    }
}
