use pendulum_core::Config;
use thiserror::Error;
use uom::si::time::second;

/// Number of steps between samples unless configured otherwise.
pub const DEFAULT_SAMPLE_INTERVAL: usize = 100;

/// How many steps a run takes and how often it is sampled.
///
/// Samples are taken at step indices `0, n, 2n, …` below `steps`, where `n`
/// is the sample interval. By default every sample is also kept in the
/// returned [`Solution`](super::Solution); see [`Schedule::keep_history`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schedule {
    steps: usize,
    sample_interval: usize,
    keep_history: bool,
}

/// Errors that can occur when building a [`Schedule`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ScheduleError {
    #[error("time step must be finite and positive, got {0}")]
    TimeStep(f64),

    #[error("total time must be finite and non-negative, got {0}")]
    TotalTime(f64),

    #[error("sample interval must be at least one step")]
    SampleInterval,
}

impl Schedule {
    /// Creates a schedule with an explicit step count.
    ///
    /// # Errors
    ///
    /// Returns an error if `sample_interval` is zero.
    pub fn new(steps: usize, sample_interval: usize) -> Result<Self, ScheduleError> {
        if sample_interval == 0 {
            return Err(ScheduleError::SampleInterval);
        }

        Ok(Self {
            steps,
            sample_interval,
            keep_history: true,
        })
    }

    /// Creates a schedule covering a configuration's time horizon.
    ///
    /// The step count is `total_time / dt`, truncated toward zero.
    ///
    /// # Errors
    ///
    /// Returns an error if the time step is not finite and positive, the total
    /// time is negative or non-finite, or `sample_interval` is zero.
    pub fn from_config(config: &Config, sample_interval: usize) -> Result<Self, ScheduleError> {
        let dt = config.dt.get::<second>();
        let total_time = config.total_time.get::<second>();

        check_time_step(dt)?;
        if !total_time.is_finite() || total_time < 0.0 {
            return Err(ScheduleError::TotalTime(total_time));
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let steps = (total_time / dt) as usize;

        Self::new(steps, sample_interval)
    }

    /// Sets whether samples are kept in the solution's history.
    ///
    /// Observers still see every sample. Turn this off when an observer
    /// streams the samples elsewhere and the run is long.
    #[must_use]
    pub fn keep_history(mut self, keep: bool) -> Self {
        self.keep_history = keep;
        self
    }

    #[must_use]
    pub fn keeps_history(&self) -> bool {
        self.keep_history
    }

    /// Returns the number of step indices in the run.
    #[must_use]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Returns the number of steps between samples.
    #[must_use]
    pub fn sample_interval(&self) -> usize {
        self.sample_interval
    }

    /// Returns the number of samples the run will produce.
    #[must_use]
    pub fn sample_count(&self) -> usize {
        self.steps.div_ceil(self.sample_interval)
    }

    /// Returns `true` if the given step index is sampled.
    #[must_use]
    pub fn is_sampled(&self, step: usize) -> bool {
        step % self.sample_interval == 0
    }
}

/// Checks that a time step is finite and positive.
pub(crate) fn check_time_step(dt: f64) -> Result<(), ScheduleError> {
    if dt.is_finite() && dt > 0.0 {
        Ok(())
    } else {
        Err(ScheduleError::TimeStep(dt))
    }
}
