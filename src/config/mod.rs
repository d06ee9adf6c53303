//! Configuration for the ETL pipeline.

use std::path::PathBuf;

/// Configuration for one ETL run
///
/// Every stage receives this by reference; no stage reads global state.
/// The defaults reproduce the reference population: a 2000-day observation
/// window, a 30-day prediction window, and the count/sum split at feature
/// index 2680. The threshold is a property of the supplied feature-mapping
/// table, not of the event data, so it is a parameter here rather than a
/// constant in the aggregation code.
#[derive(Debug, Clone)]
pub struct EtlConfig {
    /// Directory holding `events.csv`, `mortality_events.csv` and
    /// `event_feature_map.csv`
    pub input_dir: PathBuf,
    /// Directory receiving checkpoint tables and sparse feature files
    pub deliverables_dir: PathBuf,
    /// Length of the observation window in days, ending at the index date
    pub observation_window_days: u64,
    /// Days subtracted from the death date to obtain a deceased patient's
    /// index date
    pub prediction_window_days: u64,
    /// Highest feature index aggregated by occurrence count; indices above
    /// it aggregate by value sum
    pub count_threshold: u32,
}

impl EtlConfig {
    /// Build a configuration for the given directories with the reference
    /// window and threshold parameters.
    #[must_use]
    pub fn new(input_dir: impl Into<PathBuf>, deliverables_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            deliverables_dir: deliverables_dir.into(),
            ..Self::default()
        }
    }
}

impl Default for EtlConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("data/train"),
            deliverables_dir: PathBuf::from("deliverables"),
            observation_window_days: 2000,
            prediction_window_days: 30,
            count_threshold: 2680,
        }
    }
}
