//! Capability traits for cross-loop observers.
//!
//! These traits abstract over loop-specific event and action types, enabling
//! observers to work generically across step loops.
//!
//! # Event traits
//!
//! - [`HasSample`]: events that carry a trajectory sample
//!
//! # Action traits
//!
//! - [`CanStopEarly`]: actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use pendulum_core::Observer;
//! use pendulum_observers::traits::{CanStopEarly, HasSample};
//!
//! /// Stops once the lower bob rises above the pivot.
//! struct StopWhenInverted;
//!
//! impl<E: HasSample, A: CanStopEarly> Observer<E, A> for StopWhenInverted {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.sample().position2.y > 0.0).then(A::stop_early)
//!     }
//! }
//! ```

use pendulum_core::Sample;
use pendulum_solvers::transient::verlet;

/// An event that carries a trajectory sample.
pub trait HasSample {
    /// Returns the sample for this event.
    fn sample(&self) -> Sample;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the loop early.
    fn stop_early() -> Self;
}

impl HasSample for verlet::Event {
    fn sample(&self) -> Sample {
        self.sample
    }
}

impl CanStopEarly for verlet::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
