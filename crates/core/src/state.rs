use uom::si::{angle::radian, angular_velocity::radian_per_second};

use crate::{Config, normalize};

/// The integrator's working memory.
///
/// Angles are in radians and angular velocities in rad/s. The current angles
/// `theta1` and `theta2` are kept in `[-π, π]`. The previous-step angles
/// `theta1_old` and `theta2_old` are not normalized on their own: whenever a
/// current angle wraps by a whole turn, its history is moved by the same turn,
/// so the difference `theta - theta_old` stays continuous across the wrap.
///
/// The angular velocities are derived by central difference during each step
/// and lag the current angles by one step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendulumState {
    pub theta1: f64,
    pub theta2: f64,
    pub omega1: f64,
    pub omega2: f64,
    pub theta1_old: f64,
    pub theta2_old: f64,
}

impl PendulumState {
    /// Creates the initial state for a configuration.
    ///
    /// Angles are normalized, velocities are copied unchanged, and the history
    /// is set equal to the current angles as a placeholder until the
    /// integrator is bootstrapped.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let theta1 = normalize(config.theta1.get::<radian>());
        let theta2 = normalize(config.theta2.get::<radian>());

        Self {
            theta1,
            theta2,
            omega1: config.omega1.get::<radian_per_second>(),
            omega2: config.omega2.get::<radian_per_second>(),
            theta1_old: theta1,
            theta2_old: theta2,
        }
    }
}
