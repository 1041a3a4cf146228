//! Command line front end for the double pendulum simulator.
//!
//! Loads a configuration file, runs the Verlet step loop, and writes the
//! sampled trajectory as text for downstream plotting:
//!
//! ```text
//! pendulum [CONFIG] [OUTPUT] [--angles PATH] [--every N] [-v | -q]
//! ```
//!
//! A missing configuration file is not an error; the built-in defaults are
//! used instead. Any failure while simulating or writing output is returned
//! as an error, which the binary turns into a non-zero exit status.

use std::{
    fs::{self, File},
    io::BufWriter,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use pendulum_core::{Config, Diagnostics, DoublePendulum};
use pendulum_observers::{Format, TrajectoryWriter};
use pendulum_solvers::transient::verlet::{self, DEFAULT_SAMPLE_INTERVAL, Schedule, Status};
use tracing::{debug, info, warn};
use uom::si::energy::joule;

/// Simulate a double pendulum and write its trajectory.
#[derive(Debug, Clone, Parser)]
#[command(name = "pendulum", version, about)]
pub struct Cli {
    /// Configuration file with one KEY=value per line.
    #[arg(default_value = "./config/config")]
    pub config: PathBuf,

    /// Output file for bob positions (time x1 y1 x2 y2).
    #[arg(default_value = "pendulum_data.txt")]
    pub output: PathBuf,

    /// Also write joint angles (time theta1 theta2) to this file.
    #[arg(long, value_name = "PATH")]
    pub angles: Option<PathBuf>,

    /// Number of integration steps between written samples.
    #[arg(long, value_name = "N", default_value_t = DEFAULT_SAMPLE_INTERVAL)]
    pub every: usize,

    /// Log more detail (repeat for more).
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only log warnings and errors.
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Returns the log filter implied by the verbosity flags.
    #[must_use]
    pub fn log_level(&self) -> &'static str {
        match (self.quiet, self.verbose) {
            (true, _) => "warn",
            (false, 0) => "info",
            (false, 1) => "debug",
            (false, _) => "trace",
        }
    }
}

/// What a completed run produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    /// How the step loop terminated.
    pub status: Status,

    /// Step indices processed, the bootstrap included.
    pub steps: usize,

    /// Samples written to each output.
    pub samples: usize,

    /// Total mechanical energy before the first step, in joules.
    pub initial_energy: f64,

    /// Total mechanical energy after the last step, in joules.
    pub final_energy: f64,

    /// How often the numerical safeguards engaged.
    pub diagnostics: Diagnostics,
}

/// Runs a simulation as described by the command line.
///
/// # Errors
///
/// Returns an error if the configuration file exists but cannot be read, the
/// time stepping is invalid, or an output file cannot be created or written.
pub fn run(cli: &Cli) -> Result<Summary> {
    let config = Config::from_file(&cli.config)?;
    let schedule = Schedule::from_config(&config, cli.every)
        .context("invalid time stepping")?
        .keep_history(false);

    info!(
        steps = schedule.steps(),
        samples = schedule.sample_count(),
        output = %cli.output.display(),
        "starting double pendulum simulation"
    );

    let pendulum = DoublePendulum::new(&config);
    let initial_energy = pendulum.energy().get::<joule>();

    let mut positions = create_writer(&cli.output, Format::Cartesian, &config)?;
    let angles = match &cli.angles {
        Some(path) => match create_writer(path, Format::Angles, &config) {
            Ok(writer) => Some((writer, path)),
            Err(err) => {
                discard_writer(positions, &cli.output);
                return Err(err);
            }
        },
        None => None,
    };

    let solution = match angles {
        Some((mut angles, path)) => {
            let solution = verlet::solve(pendulum, &schedule, (&mut positions, &mut angles))?;
            finish_writer(angles, path)?;
            solution
        }
        None => verlet::solve(pendulum, &schedule, &mut positions)?,
    };
    finish_writer(positions, &cli.output)?;

    if solution.status == Status::StoppedByObserver {
        warn!(
            steps = solution.steps,
            scheduled = schedule.steps(),
            "simulation stopped before the end of the schedule"
        );
    }

    let final_energy = solution.pendulum.energy().get::<joule>();
    if initial_energy == 0.0 {
        info!(final_energy, "simulation complete");
    } else {
        let drift = (final_energy - initial_energy) / initial_energy.abs();
        info!(
            initial_energy,
            final_energy,
            drift_percent = drift * 100.0,
            "simulation complete"
        );
    }

    Ok(Summary {
        status: solution.status,
        steps: solution.steps,
        samples: solution.samples,
        initial_energy,
        final_energy,
        diagnostics: solution.diagnostics,
    })
}

fn create_writer(
    path: &Path,
    format: Format,
    config: &Config,
) -> Result<TrajectoryWriter<BufWriter<File>>> {
    TrajectoryWriter::create(path, format, config)
        .with_context(|| format!("cannot open output `{}`", path.display()))
}

/// Removes an output file whose run was abandoned before any samples.
fn discard_writer(writer: TrajectoryWriter<BufWriter<File>>, path: &Path) {
    drop(writer);
    if let Err(err) = fs::remove_file(path) {
        debug!(path = %path.display(), error = %err, "could not remove abandoned output");
    }
}

fn finish_writer(writer: TrajectoryWriter<BufWriter<File>>, path: &Path) -> Result<()> {
    writer
        .finish()
        .with_context(|| format!("cannot write output `{}`", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_arguments() {
        let cli = Cli::try_parse_from(["pendulum"]).expect("no arguments is valid");

        assert_eq!(cli.config, PathBuf::from("./config/config"));
        assert_eq!(cli.output, PathBuf::from("pendulum_data.txt"));
        assert_eq!(cli.angles, None);
        assert_eq!(cli.every, 100);
        assert_eq!(cli.log_level(), "info");
    }

    #[test]
    fn parses_positional_paths_and_flags() {
        let cli = Cli::try_parse_from([
            "pendulum",
            "run.conf",
            "out.txt",
            "--angles",
            "angles.txt",
            "--every",
            "10",
            "-vv",
        ])
        .expect("valid arguments");

        assert_eq!(cli.config, PathBuf::from("run.conf"));
        assert_eq!(cli.output, PathBuf::from("out.txt"));
        assert_eq!(cli.angles, Some(PathBuf::from("angles.txt")));
        assert_eq!(cli.every, 10);
        assert_eq!(cli.log_level(), "trace");
    }

    #[test]
    fn quiet_lowers_the_log_level() {
        let cli = Cli::try_parse_from(["pendulum", "-q"]).expect("valid arguments");
        assert_eq!(cli.log_level(), "warn");

        assert!(Cli::try_parse_from(["pendulum", "-q", "-v"]).is_err());
    }
}
