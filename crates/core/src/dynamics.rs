//! Closed-form angular accelerations of a double pendulum.
//!
//! With `δ = θ2 − θ1`, the Lagrangian equations of motion give
//!
//! ```text
//! d1 = (m1 + m2)·L1 − m2·L1·cos²δ
//! d2 = (L2 / L1)·d1
//!
//! α1 = [ m2·L1·ω1²·sinδ·cosδ + m2·g·sinθ2·cosδ
//!        + m2·L2·ω2²·sinδ − (m1 + m2)·g·sinθ1 ] / d1
//!
//! α2 = [ −m2·L2·ω2²·sinδ·cosδ + (m1 + m2)·g·sinθ1·cosδ
//!        − (m1 + m2)·L1·ω1²·sinδ − (m1 + m2)·g·sinθ2 ] / d2
//! ```
//!
//! Both denominators vanish in degenerate configurations (a zero-length upper
//! arm, or massless bobs with the arms aligned). Before dividing, a
//! denominator smaller in magnitude than [`Limits::denominator_floor`] is
//! raised to that magnitude, keeping its sign. The resulting accelerations are
//! then clamped to `±`[`Limits::acceleration_limit`]. Together these keep the
//! integration bounded at the cost of physical accuracy in those
//! configurations; the counts in [`Diagnostics`] show when that happened.

use thiserror::Error;
use uom::si::{
    acceleration::meter_per_second_squared, length::meter, mass::kilogram,
};

use crate::{Config, PendulumState};

/// Smallest denominator magnitude used when evaluating accelerations.
pub const DENOMINATOR_FLOOR: f64 = 1e-10;

/// Largest angular acceleration magnitude (rad/s²) the integrator will apply.
pub const ACCELERATION_LIMIT: f64 = 1000.0;

/// Numerical safeguards applied when evaluating accelerations.
///
/// The defaults are [`DENOMINATOR_FLOOR`] and [`ACCELERATION_LIMIT`]. They are
/// empirical values tuned for SI units and time steps around a millisecond to
/// a centisecond.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Limits {
    denominator_floor: f64,
    acceleration_limit: f64,
}

/// Errors that can occur when validating [`Limits`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LimitsError {
    #[error("denominator_floor must be finite and positive")]
    DenominatorFloor,

    #[error("acceleration_limit must be finite and positive")]
    AccelerationLimit,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            denominator_floor: DENOMINATOR_FLOOR,
            acceleration_limit: ACCELERATION_LIMIT,
        }
    }
}

impl Limits {
    /// Creates validated limits.
    ///
    /// # Errors
    ///
    /// Returns an error if either value is non-finite or not positive.
    pub fn new(denominator_floor: f64, acceleration_limit: f64) -> Result<Self, LimitsError> {
        if !denominator_floor.is_finite() || denominator_floor <= 0.0 {
            return Err(LimitsError::DenominatorFloor);
        }
        if !acceleration_limit.is_finite() || acceleration_limit <= 0.0 {
            return Err(LimitsError::AccelerationLimit);
        }

        Ok(Self {
            denominator_floor,
            acceleration_limit,
        })
    }

    /// Returns the smallest denominator magnitude.
    #[must_use]
    pub fn denominator_floor(&self) -> f64 {
        self.denominator_floor
    }

    /// Returns the largest acceleration magnitude in rad/s².
    #[must_use]
    pub fn acceleration_limit(&self) -> f64 {
        self.acceleration_limit
    }
}

/// Angular accelerations of both arms, in rad/s².
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Accelerations {
    pub alpha1: f64,
    pub alpha2: f64,
}

/// Counts of how often the numerical safeguards engaged.
///
/// Only evaluations made while integrating are counted; calling
/// [`DoublePendulum::accelerations`] directly leaves the counts alone.
///
/// [`DoublePendulum::accelerations`]: crate::DoublePendulum::accelerations
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Diagnostics {
    /// Number of acceleration evaluations.
    pub evaluations: u64,

    /// Number of denominators raised to the floor.
    pub denominator_clamps: u64,

    /// Number of accelerations limited, or replaced because they were NaN.
    pub acceleration_clamps: u64,
}

impl Diagnostics {
    /// Returns `true` if any safeguard engaged.
    #[must_use]
    pub fn any_clamped(&self) -> bool {
        self.denominator_clamps > 0 || self.acceleration_clamps > 0
    }

    pub(crate) fn record(&mut self, evaluation: &Evaluation) {
        self.evaluations += 1;
        self.denominator_clamps += u64::from(evaluation.denominator_clamps);
        self.acceleration_clamps += u64::from(evaluation.acceleration_clamps);
    }
}

/// Pendulum parameters in SI units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Parameters {
    pub(crate) length1: f64,
    pub(crate) length2: f64,
    pub(crate) mass1: f64,
    pub(crate) mass2: f64,
    pub(crate) gravity: f64,
}

impl From<&Config> for Parameters {
    fn from(config: &Config) -> Self {
        Self {
            length1: config.length1.get::<meter>(),
            length2: config.length2.get::<meter>(),
            mass1: config.mass1.get::<kilogram>(),
            mass2: config.mass2.get::<kilogram>(),
            gravity: config.gravity.get::<meter_per_second_squared>(),
        }
    }
}

/// The outcome of one acceleration evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Evaluation {
    pub(crate) accelerations: Accelerations,
    pub(crate) denominator_clamps: u8,
    pub(crate) acceleration_clamps: u8,
}

/// Evaluates the angular accelerations at the given state.
pub(crate) fn evaluate(params: &Parameters, limits: &Limits, state: &PendulumState) -> Evaluation {
    let Parameters {
        length1: l1,
        length2: l2,
        mass1: m1,
        mass2: m2,
        gravity: g,
    } = *params;
    let PendulumState {
        theta1,
        theta2,
        omega1,
        omega2,
        ..
    } = *state;

    let total_mass = m1 + m2;
    let (sin_delta, cos_delta) = (theta2 - theta1).sin_cos();

    let denom1 = total_mass * l1 - m2 * l1 * cos_delta * cos_delta;
    let denom2 = (l2 / l1) * denom1;

    let (denom1, floored1) = floor_denominator(denom1, limits.denominator_floor);
    let (denom2, floored2) = floor_denominator(denom2, limits.denominator_floor);

    let alpha1 = (m2 * l1 * omega1 * omega1 * sin_delta * cos_delta
        + m2 * g * theta2.sin() * cos_delta
        + m2 * l2 * omega2 * omega2 * sin_delta
        - total_mass * g * theta1.sin())
        / denom1;

    let alpha2 = (-m2 * l2 * omega2 * omega2 * sin_delta * cos_delta
        + total_mass * g * theta1.sin() * cos_delta
        - total_mass * l1 * omega1 * omega1 * sin_delta
        - total_mass * g * theta2.sin())
        / denom2;

    let (alpha1, limited1) = limit_acceleration(alpha1, limits.acceleration_limit);
    let (alpha2, limited2) = limit_acceleration(alpha2, limits.acceleration_limit);

    Evaluation {
        accelerations: Accelerations { alpha1, alpha2 },
        denominator_clamps: u8::from(floored1) + u8::from(floored2),
        acceleration_clamps: u8::from(limited1) + u8::from(limited2),
    }
}

/// Raises a denominator's magnitude to `floor`, keeping its sign.
///
/// Zero and NaN are treated as positive.
fn floor_denominator(denom: f64, floor: f64) -> (f64, bool) {
    if denom.is_nan() || denom.abs() < floor {
        let floored = if denom < 0.0 { -floor } else { floor };
        (floored, true)
    } else {
        (denom, false)
    }
}

/// Clamps an acceleration to `±limit`, mapping NaN to zero.
fn limit_acceleration(alpha: f64, limit: f64) -> (f64, bool) {
    if alpha.is_nan() {
        (0.0, true)
    } else if alpha.abs() > limit {
        (limit.copysign(alpha), true)
    } else {
        (alpha, false)
    }
}
