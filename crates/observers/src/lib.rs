//! Reusable observers for double pendulum step loops.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work with any step loop whose events carry a trajectory sample.
//!
//! # Modules
//!
//! - [`traits`]: Capability traits for cross-loop observers
//!   ([`HasSample`], [`CanStopEarly`])
//! - [`trajectory`]: [`TrajectoryWriter`], which writes samples as
//!   whitespace-separated text lines behind a comment header
//!
//! [`Observer`]: pendulum_core::Observer
//! [`HasSample`]: traits::HasSample
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;
pub mod trajectory;

pub use trajectory::{Format, TrajectoryWriter, WriteError};
