// In: src/config.rs

//! The single source of truth for all sortbench run configuration.
//!
//! `BenchConfig` is created once at the application boundary (a JSON file,
//! command-line flags, or `Default`) and handed read-only to the engine and
//! the report builder. Only numeric parseability is guaranteed here; range
//! validation of the size interval belongs to the size series.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::SortBenchError;

//==================================================================================
// I. Core Configuration Enums
//==================================================================================

/// The unit timings are expressed in when a matrix is handed to a report.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum TimeUnit {
    /// **Default:** the resolution the engine measures at.
    #[default]
    Nanoseconds,
    Microseconds,
    Milliseconds,
    Seconds,
}

impl TimeUnit {
    /// Expresses `elapsed` in this unit.
    pub fn convert(self, elapsed: Duration) -> f64 {
        let nanos = elapsed.as_nanos() as f64;
        match self {
            TimeUnit::Nanoseconds => nanos,
            TimeUnit::Microseconds => nanos / 1e3,
            TimeUnit::Milliseconds => nanos / 1e6,
            TimeUnit::Seconds => nanos / 1e9,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            TimeUnit::Nanoseconds => "ns",
            TimeUnit::Microseconds => "us",
            TimeUnit::Milliseconds => "ms",
            TimeUnit::Seconds => "s",
        }
    }
}

//==================================================================================
// II. The Unified BenchConfig
//==================================================================================

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct BenchConfig {
    /// Initial value of the array size interval.
    #[serde(default = "default_min_size")]
    pub min_size: i64,

    /// Final value of the array size interval.
    #[serde(default = "default_max_size")]
    pub max_size: i64,

    /// Number of sizes sampled on the interval.
    #[serde(default = "default_step_count")]
    pub step_count: i64,

    /// Restricts the run to these generators. `None` runs every registered one.
    #[serde(default)]
    pub generators: Option<Vec<String>>,

    /// Restricts the run to these algorithms. `None` runs every registered one.
    #[serde(default)]
    pub algorithms: Option<Vec<String>>,

    /// Unit used when rendering a report.
    #[serde(default)]
    pub report_unit: TimeUnit,

    /// If true, run progress is logged at `info` level.
    #[serde(default)]
    pub verbose: bool,

    /// Appends log output to this file instead of stderr.
    #[serde(default)]
    pub log_file: Option<String>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            min_size: default_min_size(),
            max_size: default_max_size(),
            step_count: default_step_count(),
            generators: None,
            algorithms: None,
            report_unit: TimeUnit::default(),
            verbose: false,
            log_file: None,
        }
    }
}

impl BenchConfig {
    /// A default configuration over a specific interval.
    pub fn with_bounds(min_size: i64, max_size: i64, step_count: i64) -> Self {
        Self {
            min_size,
            max_size,
            step_count,
            ..Self::default()
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, SortBenchError> {
        let config: Self = serde_json::from_str(json)?;
        config.check_selections()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SortBenchError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// An explicit selection must name at least one plugin.
    pub(crate) fn check_selections(&self) -> Result<(), SortBenchError> {
        if matches!(&self.generators, Some(names) if names.is_empty()) {
            return Err(SortBenchError::Config(
                "'generators' must name at least one generator when present".to_string(),
            ));
        }
        if matches!(&self.algorithms, Some(names) if names.is_empty()) {
            return Err(SortBenchError::Config(
                "'algorithms' must name at least one algorithm when present".to_string(),
            ));
        }
        Ok(())
    }
}

/// Helper for `serde` to provide a default for `min_size`.
fn default_min_size() -> i64 {
    1000
}

/// Helper for `serde` to provide a default for `max_size`.
fn default_max_size() -> i64 {
    30_000
}

/// Helper for `serde` to provide a default for `step_count`.
fn default_step_count() -> i64 {
    20
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_uses_defaults() {
        let config = BenchConfig::from_json_str("{}").unwrap();
        assert_eq!(config, BenchConfig::default());
        assert_eq!((config.min_size, config.max_size, config.step_count), (1000, 30_000, 20));
    }

    #[test]
    fn test_full_json_is_parsed() {
        let json = r#"{
            "min_size": 500,
            "max_size": 30000,
            "step_count": 10,
            "generators": ["Sorted", "Reversed"],
            "algorithms": ["MergeSort"],
            "report_unit": "milliseconds",
            "verbose": true
        }"#;
        let config = BenchConfig::from_json_str(json).unwrap();
        assert_eq!(config.min_size, 500);
        assert_eq!(config.step_count, 10);
        assert_eq!(config.generators.as_deref(), Some(&["Sorted".to_string(), "Reversed".to_string()][..]));
        assert_eq!(config.report_unit, TimeUnit::Milliseconds);
        assert!(config.verbose);
        assert!(config.log_file.is_none());
    }

    #[test]
    fn test_out_of_range_numbers_still_parse() {
        // Range checks happen when the size series is built, not here.
        let config = BenchConfig::from_json_str(r#"{"min_size": -1, "step_count": 0}"#).unwrap();
        assert_eq!(config.min_size, -1);
        assert_eq!(config.step_count, 0);
    }

    #[test]
    fn test_non_numeric_bounds_are_rejected() {
        let result = BenchConfig::from_json_str(r#"{"min_size": "five hundred"}"#);
        assert!(matches!(result, Err(SortBenchError::SerdeJson(_))));
    }

    #[test]
    fn test_empty_selection_is_rejected() {
        let result = BenchConfig::from_json_str(r#"{"algorithms": []}"#);
        assert!(matches!(result, Err(SortBenchError::Config(_))));
    }

    #[test]
    fn test_time_unit_conversion() {
        let elapsed = Duration::from_micros(1500);
        assert_eq!(TimeUnit::Nanoseconds.convert(elapsed), 1_500_000.0);
        assert_eq!(TimeUnit::Microseconds.convert(elapsed), 1500.0);
        assert_eq!(TimeUnit::Milliseconds.convert(elapsed), 1.5);
        assert_eq!(TimeUnit::Seconds.convert(elapsed), 0.0015);
        assert_eq!(TimeUnit::Milliseconds.symbol(), "ms");
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let result = BenchConfig::from_file("/definitely/not/here/sortbench.json");
        assert!(matches!(result, Err(SortBenchError::Io(_))));
    }
}
