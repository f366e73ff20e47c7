//! Analyzer configuration
//!
//! Values come from three layers, later ones winning: built-in defaults, an
//! optional TOML file, then command-line flags.

use crate::aggregate::DEFAULT_THRESHOLD;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Roster used by the synthetic source when none is configured
pub const DEFAULT_ROSTER: [&str; 5] = ["Aarav", "Vihaan", "Aditya", "Reyansh", "Saanvi"];

/// Number of synthetic time-units (days) when none is configured
pub const DEFAULT_TIME_UNITS: usize = 10;

/// Seed for reproducible synthetic data
pub const DEFAULT_SEED: u64 = 42;

/// Configuration for one analysis run
///
/// # Example
/// ```
/// use rollcall::config::AnalyzerConfig;
///
/// let config = AnalyzerConfig::default();
/// assert_eq!(config.threshold, 75.0);
/// assert!(config.input.is_none()); // synthetic data
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalyzerConfig {
    /// Minimum attendance percentage that counts as passing (inclusive)
    pub threshold: f64,

    /// Days generated per student by the synthetic source
    pub time_unit_count: usize,

    /// Seed for the synthetic source
    pub random_seed: u64,

    /// Student names for the synthetic source, in display order
    pub roster: Vec<String>,

    /// CSV file to load instead of generating data
    pub input: Option<PathBuf>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            time_unit_count: DEFAULT_TIME_UNITS,
            random_seed: DEFAULT_SEED,
            roster: DEFAULT_ROSTER.iter().map(|s| s.to_string()).collect(),
            input: None,
        }
    }
}

impl AnalyzerConfig {
    /// Load configuration from a TOML file, filling gaps with defaults
    ///
    /// # Errors
    /// Returns error if the file can't be read or isn't valid TOML for this
    /// structure.
    ///
    /// # Example TOML
    /// ```toml
    /// threshold = 80.0
    /// time_unit_count = 20
    /// random_seed = 7
    /// roster = ["Ana", "Ben"]
    /// ```
    pub fn from_toml<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).with_context(|| {
            format!("Failed to read config file: {}", path.as_ref().display())
        })?;

        Self::from_toml_str(&content).with_context(|| {
            format!("Failed to parse config file: {}", path.as_ref().display())
        })
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML")
    }

    /// Validate configuration
    pub fn validate(&self) -> std::result::Result<(), String> {
        if !self.threshold.is_finite() || !(0.0..=100.0).contains(&self.threshold) {
            return Err(format!(
                "threshold must be in [0, 100], got {}",
                self.threshold
            ));
        }

        Ok(())
    }
}
