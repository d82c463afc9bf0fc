//! Configuration for the qfourier CLI.
//!
//! Values are resolved in this order (highest precedence first):
//! 1. Environment variables (`QFOURIER_` prefix)
//! 2. Configuration file (YAML)
//! 3. Default values
//!
//! Command-line flags override the resolved configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Resolved CLI configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Measurement shots for `demo`.
    pub shots: u32,

    /// RNG seed for sampling; random when unset.
    pub seed: Option<u64>,

    /// Log filter used when no `-v` flag or `RUST_LOG` is given.
    pub log_level: Option<String>,

    /// Largest register `verify` checks.
    pub max_qubits: u32,

    /// Largest amplitude error `verify` accepts.
    pub tolerance: f64,
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// The file is not valid YAML for [`CliConfig`].
    #[error("Failed to parse config file {path}: {message}")]
    Parse {
        /// File that failed.
        path: PathBuf,
        /// Parser message.
        message: String,
    },

    /// An environment variable holds an unparsable value.
    #[error("Invalid value for {key}: '{value}'")]
    InvalidEnv {
        /// Variable name.
        key: &'static str,
        /// Offending value.
        value: String,
    },

    /// A value is out of range.
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

fn default_shots() -> u32 {
    1000
}

fn default_max_qubits() -> u32 {
    5
}

fn default_tolerance() -> f64 {
    1e-9
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            shots: default_shots(),
            seed: None,
            log_level: None,
            max_qubits: default_max_qubits(),
            tolerance: default_tolerance(),
        }
    }
}

impl CliConfig {
    /// Location of the per-user config file (`~/.qfourier/config.yaml`).
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".qfourier").join("config.yaml"))
    }

    /// Load configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&contents).map_err(|e| match e {
            ConfigError::Parse { message, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                message,
            },
            other => other,
        })
    }

    /// Parse configuration from YAML text.
    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        let config: CliConfig =
            serde_yaml_ng::from_str(contents).map_err(|e| ConfigError::Parse {
                path: PathBuf::new(),
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve the full configuration.
    ///
    /// An explicit `path` must exist; otherwise the default file is used
    /// when present. Environment variables are applied last.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_path() {
                Some(default) if default.is_file() => Self::from_file(default)?,
                _ => Self::default(),
            },
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Override values from environment variables read through `lookup`.
    ///
    /// Recognized: `QFOURIER_SHOTS`, `QFOURIER_SEED`, `QFOURIER_LOG_LEVEL`,
    /// `QFOURIER_MAX_QUBITS`, `QFOURIER_TOLERANCE`.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(shots) = parse_env(&lookup, "QFOURIER_SHOTS")? {
            self.shots = shots;
        }
        if let Some(seed) = parse_env(&lookup, "QFOURIER_SEED")? {
            self.seed = Some(seed);
        }
        if let Some(level) = lookup("QFOURIER_LOG_LEVEL") {
            self.log_level = Some(level);
        }
        if let Some(max) = parse_env(&lookup, "QFOURIER_MAX_QUBITS")? {
            self.max_qubits = max;
        }
        if let Some(tolerance) = parse_env(&lookup, "QFOURIER_TOLERANCE")? {
            self.tolerance = tolerance;
        }
        Ok(())
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.shots == 0 {
            return Err(ConfigError::Invalid("shots must be greater than 0".into()));
        }
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "tolerance must be a positive number, got {}",
                self.tolerance
            )));
        }
        Ok(())
    }
}

fn parse_env<T, F>(lookup: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidEnv { key, value }),
        None => Ok(None),
    }
}
