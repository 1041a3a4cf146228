use pendulum_core::{Diagnostics, DoublePendulum, Sample};

/// Indicates how the loop terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Completed all scheduled steps.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The result of a Verlet integration.
#[derive(Debug, Clone)]
pub struct Solution {
    /// How the loop terminated.
    pub status: Status,

    /// Samples in the order they were taken.
    ///
    /// Empty when the schedule does not keep history.
    pub history: Vec<Sample>,

    /// Number of samples taken, whether or not they were kept.
    pub samples: usize,

    /// Number of step indices processed, the bootstrap included.
    pub steps: usize,

    /// Safeguard counts accumulated over the run.
    pub diagnostics: Diagnostics,

    /// The integrator in its final state.
    pub pendulum: DoublePendulum,
}
