//! Position Verlet step loop for a double pendulum.
//!
//! The loop walks step indices `0..steps`. Index 0 bootstraps the integrator's
//! history; every later index advances it by one Verlet step:
//!
//! ```text
//! θ_{n+1} = 2·θ_n − θ_{n−1} + α_n·dt²
//! ```
//!
//! After processing an index that is a multiple of the sample interval, the
//! loop takes a [`Sample`] at `t = index·dt` and emits it as an [`Event`].
//!
//! # Example
//!
//! ```
//! use pendulum_core::{Config, DoublePendulum};
//! use pendulum_solvers::transient::verlet::{self, Schedule};
//!
//! let config = Config::default().total_time_si(10.0);
//! let schedule = Schedule::from_config(&config, 100)?;
//!
//! let solution = verlet::solve_unobserved(DoublePendulum::new(&config), &schedule)?;
//!
//! assert_eq!(solution.history.len(), 10);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! [`Sample`]: pendulum_core::Sample

mod action;
mod error;
mod event;
mod schedule;
mod solution;

pub use action::Action;
pub use error::Error;
pub use event::Event;
pub use schedule::{DEFAULT_SAMPLE_INTERVAL, Schedule, ScheduleError};
pub use solution::{Solution, Status};

use pendulum_core::{DoublePendulum, Observer};
use tracing::{debug, warn};
use uom::si::time::second;

/// Integrates a freshly constructed pendulum over a schedule.
///
/// # Algorithm
///
/// For each step index `i` in `0..steps`:
///
/// - If `i == 0`, bootstrap the history with the Euler expansion.
/// - Otherwise, advance one Verlet step.
/// - If `i` is a multiple of the sample interval, take a sample at `i·dt`,
///   record it in the history if the schedule keeps one, and emit an
///   [`Event`] to the observer.
/// - If the observer returns [`Action::StopEarly`], terminate.
///
/// The time step is taken from the pendulum's configuration.
///
/// # Errors
///
/// Returns [`Error::Schedule`] if the pendulum's time step is not finite and
/// positive.
pub fn solve<Obs>(
    mut pendulum: DoublePendulum,
    schedule: &Schedule,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    Obs: Observer<Event, Action>,
{
    let dt = pendulum.config().dt.get::<second>();
    schedule::check_time_step(dt)?;

    debug!(
        steps = schedule.steps(),
        sample_interval = schedule.sample_interval(),
        dt,
        "starting verlet integration"
    );

    // Grows as samples arrive; the scheduled count can exceed memory.
    let mut history = Vec::new();
    let mut samples = 0;
    let mut status = Status::Complete;
    let mut processed = 0;

    for step in 0..schedule.steps() {
        if step == 0 {
            pendulum.bootstrap();
        } else {
            pendulum.step();
        }
        processed = step + 1;

        if !schedule.is_sampled(step) {
            continue;
        }

        #[allow(clippy::cast_precision_loss)]
        let sample = pendulum.sample(step as f64 * dt);
        samples += 1;
        if schedule.keeps_history() {
            history.push(sample);
        }

        if let Some(Action::StopEarly) = observer.observe(&Event { step, sample }) {
            debug!(step, "stopped early by observer");
            status = Status::StoppedByObserver;
            break;
        }
    }

    let diagnostics = pendulum.diagnostics();
    if diagnostics.any_clamped() {
        warn!(
            evaluations = diagnostics.evaluations,
            denominator_clamps = diagnostics.denominator_clamps,
            acceleration_clamps = diagnostics.acceleration_clamps,
            "numerical safeguards altered the dynamics"
        );
    }
    debug!(steps = processed, samples, "verlet integration finished");

    Ok(Solution {
        status,
        history,
        samples,
        steps: processed,
        diagnostics,
        pendulum,
    })
}

/// Integrates a pendulum without observation.
///
/// This is a convenience wrapper around [`solve`] that discards events.
///
/// # Errors
///
/// Returns an error under the same conditions as [`solve`].
pub fn solve_unobserved(pendulum: DoublePendulum, schedule: &Schedule) -> Result<Solution, Error> {
    solve(pendulum, schedule, ())
}
