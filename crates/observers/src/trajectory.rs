//! Text trajectory output.
//!
//! A [`TrajectoryWriter`] writes a comment header describing the run followed
//! by one line per sample, fields separated by single spaces:
//!
//! ```text
//! # Double pendulum simulation data
//! # L1=1 L2=1
//! # M1=1 M2=1
//! # G=9.81 dt=0.01
//! # Data format: time x1 y1 x2 y2
//! 0 0.9974949866040544 -0.0707372016677029 1.8389659704012148 -0.6110395323582016
//! ```
//!
//! The `key=value` tokens in the header stay parseable by plotting scripts
//! that split header lines on whitespace.

use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use pendulum_core::{Config, Observer, Sample};
use thiserror::Error;
use tracing::{debug, warn};
use uom::si::{
    acceleration::meter_per_second_squared, length::meter, mass::kilogram, time::second,
};

use crate::traits::{CanStopEarly, HasSample};

/// Which form of each sample to write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// `time x1 y1 x2 y2`
    Cartesian,

    /// `time theta1 theta2`
    Angles,
}

impl Format {
    /// Returns the column names, space separated.
    #[must_use]
    pub fn columns(self) -> &'static str {
        match self {
            Format::Cartesian => "time x1 y1 x2 y2",
            Format::Angles => "time theta1 theta2",
        }
    }

    fn write_record(self, out: &mut impl Write, sample: &Sample) -> io::Result<()> {
        match self {
            Format::Cartesian => writeln!(
                out,
                "{} {} {} {} {}",
                sample.time,
                sample.position1.x,
                sample.position1.y,
                sample.position2.x,
                sample.position2.y
            ),
            Format::Angles => writeln!(out, "{} {} {}", sample.time, sample.theta1, sample.theta2),
        }
    }
}

/// Errors that can occur when writing a trajectory.
#[derive(Debug, Error)]
pub enum WriteError {
    #[error("failed to create trajectory file `{}`", .path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write trajectory")]
    Io(#[from] io::Error),
}

/// An observer that writes each sampled event as a line of text.
///
/// The header is written on construction. Each observed event appends one
/// record. If a write fails, the writer asks the loop to stop early, keeps the
/// error, and reports it from [`finish`](TrajectoryWriter::finish).
///
/// # Example
///
/// ```
/// use pendulum_core::{Config, DoublePendulum};
/// use pendulum_observers::{Format, TrajectoryWriter};
/// use pendulum_solvers::transient::verlet::{self, Schedule};
///
/// let config = Config::default().total_time_si(2.0);
/// let schedule = Schedule::from_config(&config, 100)?;
///
/// let mut writer = TrajectoryWriter::new(Vec::new(), Format::Angles, &config)?;
/// verlet::solve(DoublePendulum::new(&config), &schedule, &mut writer)?;
///
/// let text = String::from_utf8(writer.finish()?)?;
/// assert_eq!(text.lines().filter(|line| !line.starts_with('#')).count(), 2);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct TrajectoryWriter<W: Write> {
    out: W,
    format: Format,
    records: usize,
    error: Option<io::Error>,
}

impl TrajectoryWriter<BufWriter<File>> {
    /// Creates a buffered writer for a new file at `path`.
    ///
    /// An existing file is truncated.
    ///
    /// # Errors
    ///
    /// Returns [`WriteError::Create`] if the file cannot be created, or
    /// [`WriteError::Io`] if the header cannot be written.
    pub fn create(
        path: impl AsRef<Path>,
        format: Format,
        config: &Config,
    ) -> Result<Self, WriteError> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| WriteError::Create {
            path: path.to_owned(),
            source,
        })?;

        debug!(path = %path.display(), columns = format.columns(), "writing trajectory");
        Self::new(BufWriter::new(file), format, config)
    }
}

impl<W: Write> TrajectoryWriter<W> {
    /// Creates a writer and writes the header describing `config`.
    ///
    /// # Errors
    ///
    /// Returns [`WriteError::Io`] if the header cannot be written.
    pub fn new(mut out: W, format: Format, config: &Config) -> Result<Self, WriteError> {
        write_header(&mut out, format, config)?;

        Ok(Self {
            out,
            format,
            records: 0,
            error: None,
        })
    }

    /// Writes one sample.
    ///
    /// # Errors
    ///
    /// Returns [`WriteError::Io`] if the record cannot be written.
    pub fn record(&mut self, sample: &Sample) -> Result<(), WriteError> {
        self.format.write_record(&mut self.out, sample)?;
        self.records += 1;
        Ok(())
    }

    /// Returns the number of records written so far.
    #[must_use]
    pub fn records(&self) -> usize {
        self.records
    }

    #[must_use]
    pub fn format(&self) -> Format {
        self.format
    }

    /// Flushes the output and returns the underlying writer.
    ///
    /// # Errors
    ///
    /// Returns the first error hit while observing, or [`WriteError::Io`] if
    /// the final flush fails.
    pub fn finish(mut self) -> Result<W, WriteError> {
        if let Some(err) = self.error.take() {
            return Err(WriteError::Io(err));
        }
        self.out.flush()?;
        Ok(self.out)
    }
}

impl<W, E, A> Observer<E, A> for TrajectoryWriter<W>
where
    W: Write,
    E: HasSample,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        if self.error.is_some() {
            return Some(A::stop_early());
        }

        match self.format.write_record(&mut self.out, &event.sample()) {
            Ok(()) => {
                self.records += 1;
                None
            }
            Err(err) => {
                warn!(error = %err, records = self.records, "trajectory write failed");
                self.error = Some(err);
                Some(A::stop_early())
            }
        }
    }
}

/// Allows `&mut TrajectoryWriter<W>` to be passed to loops that take an
/// observer by value, so [`TrajectoryWriter::finish`] can be called after the
/// run completes.
impl<W, E, A> Observer<E, A> for &mut TrajectoryWriter<W>
where
    W: Write,
    E: HasSample,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}

fn write_header(out: &mut impl Write, format: Format, config: &Config) -> io::Result<()> {
    writeln!(out, "# Double pendulum simulation data")?;
    writeln!(
        out,
        "# L1={} L2={}",
        config.length1.get::<meter>(),
        config.length2.get::<meter>()
    )?;
    writeln!(
        out,
        "# M1={} M2={}",
        config.mass1.get::<kilogram>(),
        config.mass2.get::<kilogram>()
    )?;
    writeln!(
        out,
        "# G={} dt={}",
        config.gravity.get::<meter_per_second_squared>(),
        config.dt.get::<second>()
    )?;
    writeln!(out, "# Data format: {}", format.columns())
}
