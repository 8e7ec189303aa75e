//! Sweep configuration.
//!
//! Load the trial matrix from a TOML file so sizes, shapes and sample
//! points can change without code changes. Every section has defaults.
//!
//! # Examples
//!
//! ```
//! use micro_sweep_algo::config::SweepConfig;
//! use micro_sweep_algo::dataset::Shape;
//!
//! let config = SweepConfig::from_toml_str(r#"
//!     seed = 42
//!
//!     [sorting]
//!     sizes = [10, 100]
//!     shapes = ["sorted", "nearly_sorted"]
//!
//!     [fibonacci]
//!     upper_bound = 90
//!     samples = 10
//! "#).unwrap();
//!
//! assert_eq!(config.seed, Some(42));
//! assert_eq!(config.sorting.shapes, vec![Shape::Sorted, Shape::NearlySorted]);
//! assert_eq!(config.fibonacci.modulus, 1_000_000_007);
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::dataset::Shape;
use crate::fibonacci::DEFAULT_MODULUS;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Full sweep configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct SweepConfig {
    /// Seed for dataset generation; time-based when absent
    pub seed: Option<u64>,
    pub sorting: SortSweepConfig,
    pub fibonacci: ScalarSweepConfig,
    pub timing: TimingConfig,
    pub output: OutputConfig,
}

impl SweepConfig {
    /// Loads and validates configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file is missing, is not valid TOML, or
    /// describes an invalid trial matrix.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses and validates configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the trial matrix is well formed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.sorting.validate()?;
        self.fibonacci.validate()
    }
}

/// Sizes and shapes for the sorting sweep.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct SortSweepConfig {
    pub sizes: Vec<usize>,
    pub shapes: Vec<Shape>,
}

impl Default for SortSweepConfig {
    fn default() -> Self {
        Self {
            sizes: vec![100, 1000, 5000, 10000],
            shapes: Shape::ALL.to_vec(),
        }
    }
}

impl SortSweepConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.sizes.is_empty() {
            return invalid("sorting.sizes must not be empty");
        }
        if self.sizes.contains(&0) {
            return invalid("sorting.sizes must all be positive");
        }
        if self.shapes.is_empty() {
            return invalid("sorting.shapes must not be empty");
        }
        if has_duplicates(&self.sizes) || has_duplicates(&self.shapes) {
            return invalid("sorting.sizes and sorting.shapes must not repeat entries");
        }
        Ok(())
    }
}

/// Sample points for the Fibonacci sweep: `samples` evenly spaced values
/// over `[1, upper_bound]`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScalarSweepConfig {
    pub upper_bound: i64,
    pub samples: usize,
    pub modulus: u64,
}

impl Default for ScalarSweepConfig {
    fn default() -> Self {
        Self {
            upper_bound: 180,
            samples: 40,
            modulus: DEFAULT_MODULUS,
        }
    }
}

impl ScalarSweepConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.upper_bound < 1 {
            return invalid("fibonacci.upper_bound must be at least 1");
        }
        if self.samples == 0 {
            return invalid("fibonacci.samples must be at least 1");
        }
        if self.modulus < 2 {
            return invalid("fibonacci.modulus must be at least 2");
        }
        Ok(())
    }
}

/// When the memoization cache is cleared during a Fibonacci sweep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MemoReset {
    /// Keep the cache for the whole process; later trials reuse earlier terms
    #[default]
    Never,
    /// Clear once at the start of each sweep
    PerSweep,
    /// Clear before every Memoization trial (outside the timed region)
    PerTrial,
}

/// Measurement settings.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct TimingConfig {
    /// Pin the thread to its current core while a candidate runs
    pub pin_to_core: bool,
    pub memo_reset: MemoReset,
}

/// Where results go.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// CSV destination; stdout when absent
    pub csv_path: Option<PathBuf>,
}

fn invalid(msg: &str) -> Result<(), ConfigError> {
    Err(ConfigError::Invalid(msg.to_string()))
}

fn has_duplicates<T: PartialEq>(items: &[T]) -> bool {
    items
        .iter()
        .enumerate()
        .any(|(i, item)| items[..i].contains(item))
}
