use pendulum_core::Sample;

/// Event emitted by the Verlet loop for each sampled step.
///
/// Step 0 is the bootstrapped initial state. Later events follow at multiples
/// of the schedule's sample interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// The step index of this sample.
    pub step: usize,

    /// The trajectory sample taken at this step.
    pub sample: Sample,
}
