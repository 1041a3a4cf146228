//! Core types for simulating a double pendulum.
//!
//! This crate defines the physical model and the integrator that the step
//! loop, trajectory writers, and command line tool build on:
//!
//! - [`Config`]: physical parameters, initial conditions, and time stepping
//! - [`DoublePendulum`]: a position-Verlet integrator that owns the
//!   [`PendulumState`] and evaluates the closed-form accelerations
//! - [`Sample`]: a trajectory record derived from the current state
//! - [`Observer`]: receives step loop events and optionally returns control
//!   actions
//!
//! # Example
//!
//! ```
//! use pendulum_core::{Config, DoublePendulum};
//!
//! let config = Config::default().dt_si(0.001);
//! let mut pendulum = DoublePendulum::new(&config);
//!
//! pendulum.bootstrap();
//! for _ in 0..1000 {
//!     pendulum.step();
//! }
//!
//! let (theta1, theta2) = pendulum.angles();
//! assert!(theta1.abs() <= std::f64::consts::PI);
//! assert!(theta2.abs() <= std::f64::consts::PI);
//! ```

pub mod config;

mod angle;
mod dynamics;
mod observer;
mod pendulum;
mod sample;
mod state;

pub use angle::normalize;
pub use config::Config;
pub use dynamics::{
    ACCELERATION_LIMIT, Accelerations, DENOMINATOR_FLOOR, Diagnostics, Limits, LimitsError,
};
pub use observer::Observer;
pub use pendulum::DoublePendulum;
pub use sample::{Point, Sample};
pub use state::PendulumState;
