//! Physical parameters, initial conditions, and time stepping for a run.
//!
//! A [`Config`] is built once, usually from a flat `KEY=value` text file via
//! [`Config::from_file`], and handed to [`DoublePendulum::new`].
//!
//! [`DoublePendulum::new`]: crate::DoublePendulum::new

mod loader;

pub use loader::LoadError;

use uom::si::{
    acceleration::meter_per_second_squared,
    angle::radian,
    angular_velocity::radian_per_second,
    f64::{Acceleration, Angle, AngularVelocity, Length, Mass, Time},
    length::meter,
    mass::kilogram,
    time::second,
};

/// Configuration of a double pendulum simulation.
///
/// Lengths, masses, and gravity describe the pendulum; angles and angular
/// velocities give the initial conditions; `dt` and `total_time` control the
/// step loop. Angles are measured from the downward vertical.
///
/// No cross-field invariants are enforced here. Degenerate values such as a
/// zero upper arm length are tolerated by the integrator's numerical
/// safeguards, and the time step is checked when the run is scheduled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Length of the upper arm.
    pub length1: Length,
    /// Length of the lower arm.
    pub length2: Length,
    /// Mass of the upper bob.
    pub mass1: Mass,
    /// Mass of the lower bob.
    pub mass2: Mass,
    /// Gravitational acceleration.
    pub gravity: Acceleration,
    /// Initial angle of the upper arm.
    pub theta1: Angle,
    /// Initial angle of the lower arm.
    pub theta2: Angle,
    /// Initial angular velocity of the upper arm.
    pub omega1: AngularVelocity,
    /// Initial angular velocity of the lower arm.
    pub omega2: AngularVelocity,
    /// Integration time step.
    pub dt: Time,
    /// Simulated time horizon.
    pub total_time: Time,
}

impl Default for Config {
    /// Unit arms and masses released from rest at 1.5 and 1.0 rad, stepped at
    /// 10 ms for 20 s.
    fn default() -> Self {
        Self {
            length1: Length::new::<meter>(1.0),
            length2: Length::new::<meter>(1.0),
            mass1: Mass::new::<kilogram>(1.0),
            mass2: Mass::new::<kilogram>(1.0),
            gravity: Acceleration::new::<meter_per_second_squared>(9.81),
            theta1: Angle::new::<radian>(1.5),
            theta2: Angle::new::<radian>(1.0),
            omega1: AngularVelocity::new::<radian_per_second>(0.0),
            omega2: AngularVelocity::new::<radian_per_second>(0.0),
            dt: Time::new::<second>(0.01),
            total_time: Time::new::<second>(20.0),
        }
    }
}

impl Config {
    /// Sets the upper arm length in SI units (m).
    #[must_use]
    pub fn length1_si(mut self, length: f64) -> Self {
        self.length1 = Length::new::<meter>(length);
        self
    }

    /// Sets the lower arm length in SI units (m).
    #[must_use]
    pub fn length2_si(mut self, length: f64) -> Self {
        self.length2 = Length::new::<meter>(length);
        self
    }

    /// Sets the upper bob mass in SI units (kg).
    #[must_use]
    pub fn mass1_si(mut self, mass: f64) -> Self {
        self.mass1 = Mass::new::<kilogram>(mass);
        self
    }

    /// Sets the lower bob mass in SI units (kg).
    #[must_use]
    pub fn mass2_si(mut self, mass: f64) -> Self {
        self.mass2 = Mass::new::<kilogram>(mass);
        self
    }

    /// Sets gravitational acceleration in SI units (m/s²).
    #[must_use]
    pub fn gravity_si(mut self, gravity: f64) -> Self {
        self.gravity = Acceleration::new::<meter_per_second_squared>(gravity);
        self
    }

    /// Sets the initial upper arm angle in radians.
    #[must_use]
    pub fn theta1_si(mut self, theta: f64) -> Self {
        self.theta1 = Angle::new::<radian>(theta);
        self
    }

    /// Sets the initial lower arm angle in radians.
    #[must_use]
    pub fn theta2_si(mut self, theta: f64) -> Self {
        self.theta2 = Angle::new::<radian>(theta);
        self
    }

    /// Sets the initial upper arm angular velocity in rad/s.
    #[must_use]
    pub fn omega1_si(mut self, omega: f64) -> Self {
        self.omega1 = AngularVelocity::new::<radian_per_second>(omega);
        self
    }

    /// Sets the initial lower arm angular velocity in rad/s.
    #[must_use]
    pub fn omega2_si(mut self, omega: f64) -> Self {
        self.omega2 = AngularVelocity::new::<radian_per_second>(omega);
        self
    }

    /// Sets the time step in seconds.
    #[must_use]
    pub fn dt_si(mut self, dt: f64) -> Self {
        self.dt = Time::new::<second>(dt);
        self
    }

    /// Sets the simulated time horizon in seconds.
    #[must_use]
    pub fn total_time_si(mut self, total_time: f64) -> Self {
        self.total_time = Time::new::<second>(total_time);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn defaults_match_documented_values() {
        let config = Config::default();

        assert_relative_eq!(config.length1.get::<meter>(), 1.0);
        assert_relative_eq!(config.length2.get::<meter>(), 1.0);
        assert_relative_eq!(config.mass1.get::<kilogram>(), 1.0);
        assert_relative_eq!(config.mass2.get::<kilogram>(), 1.0);
        assert_relative_eq!(config.gravity.get::<meter_per_second_squared>(), 9.81);
        assert_relative_eq!(config.theta1.get::<radian>(), 1.5);
        assert_relative_eq!(config.theta2.get::<radian>(), 1.0);
        assert_relative_eq!(config.omega1.get::<radian_per_second>(), 0.0);
        assert_relative_eq!(config.omega2.get::<radian_per_second>(), 0.0);
        assert_relative_eq!(config.dt.get::<second>(), 0.01);
        assert_relative_eq!(config.total_time.get::<second>(), 20.0);
    }

    #[test]
    fn si_setters_replace_single_fields() {
        let config = Config::default()
            .length1_si(2.0)
            .omega2_si(-0.5)
            .total_time_si(3.0);

        assert_relative_eq!(config.length1.get::<meter>(), 2.0);
        assert_relative_eq!(config.omega2.get::<radian_per_second>(), -0.5);
        assert_relative_eq!(config.total_time.get::<second>(), 3.0);
        assert_eq!(config.length2, Config::default().length2);
    }
}
