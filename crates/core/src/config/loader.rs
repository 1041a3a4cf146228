use std::{fs, io, path::Path, path::PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

use super::Config;

/// Errors that can occur when loading a configuration file.
///
/// A missing file is not an error; [`Config::from_file`] falls back to
/// [`Config::default`] in that case.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read config file `{}`", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Config {
    /// Loads a configuration from a flat `KEY=value` text file.
    ///
    /// If the file does not exist, a warning is logged and the defaults are
    /// returned. See [`Config::parse`] for the file format.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Read`] if the file exists but cannot be read.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();

        match fs::read_to_string(path) {
            Ok(text) => {
                debug!(path = %path.display(), "loaded config file");
                Ok(Self::parse(&text))
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                warn!(path = %path.display(), "config file not found, using defaults");
                Ok(Self::default())
            }
            Err(source) => Err(LoadError::Read {
                path: path.to_owned(),
                source,
            }),
        }
    }

    /// Parses a configuration from flat `KEY=value` text.
    ///
    /// Parsing starts from [`Config::default`] and overrides each recognized
    /// key it finds:
    ///
    /// ```text
    /// # full-line comment
    /// L1 = 1.0        # inline comment
    /// THETA1=1.5
    /// ```
    ///
    /// Recognized keys are `L1`, `L2`, `M1`, `M2`, `G`, `THETA1`, `THETA2`,
    /// `OMEGA1`, `OMEGA2`, `DT`, and `TOTAL_TIME`, all in SI units.
    /// Blank lines, lines without `=`, and unknown keys are skipped. A value
    /// that is not a number leaves the default in place and logs a warning.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let mut config = Self::default();

        for (index, line) in text.lines().enumerate() {
            let line_number = index + 1;
            let line = line.trim_matches([' ', '\t']);
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let value = value.split_once('#').map_or(value, |(value, _)| value);
            let key = key.trim_matches([' ', '\t']);
            let value = value.trim_matches([' ', '\t']);

            let Some(set) = setter(key) else {
                debug!(line = line_number, key, "ignoring unknown config key");
                continue;
            };

            match value.parse::<f64>() {
                Ok(number) => config = set(config, number),
                Err(err) => {
                    warn!(
                        line = line_number,
                        key,
                        value,
                        error = %err,
                        "invalid config value, keeping default"
                    );
                }
            }
        }

        config
    }
}

/// Maps a config key to the setter for its field.
fn setter(key: &str) -> Option<fn(Config, f64) -> Config> {
    let set: fn(Config, f64) -> Config = match key {
        "L1" => Config::length1_si,
        "L2" => Config::length2_si,
        "M1" => Config::mass1_si,
        "M2" => Config::mass2_si,
        "G" => Config::gravity_si,
        "THETA1" => Config::theta1_si,
        "THETA2" => Config::theta2_si,
        "OMEGA1" => Config::omega1_si,
        "OMEGA2" => Config::omega2_si,
        "DT" => Config::dt_si,
        "TOTAL_TIME" => Config::total_time_si,
        _ => return None,
    };
    Some(set)
}
