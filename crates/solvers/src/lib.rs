//! Step loops for the double pendulum integrator.
//!
//! # Modules
//!
//! - [`transient`]: fixed-step time integration that samples the trajectory
//!   at a regular cadence and reports each sample to an observer

pub mod transient;
