//! ETL transforms for the mortality-prediction feature pipeline.
//!
//! The stages are pure functions over in-memory relations; persistence
//! lives in [`crate::output`] so each transform is unit-testable without
//! touching a filesystem. [`run_pipeline`] wires them together in the only
//! valid order: every stage needs the whole output of its predecessor (the
//! index date must exist for every patient before filtering, and
//! normalization bounds span the entire aggregated column).

pub mod aggregate;
pub mod features;
pub mod index_date;
pub mod window;

use std::fs;
use std::time::Instant;

use log::info;

use crate::config::EtlConfig;
use crate::error::{EtlError, Result};
use crate::output::{checkpoint, svmlight};
use crate::registry;

/// Row and patient counts from a completed run
#[derive(Debug, Clone, Copy)]
pub struct PipelineSummary {
    /// Events loaded from the source log
    pub events_loaded: usize,
    /// Mortality records loaded
    pub mortality_records: usize,
    /// Feature mappings loaded
    pub feature_mappings: usize,
    /// Patients that received an index date
    pub patients_indexed: usize,
    /// Events surviving the observation window filter
    pub events_in_window: usize,
    /// Aggregated (patient, feature) rows
    pub aggregated_rows: usize,
    /// Patients written to the sparse feature files
    pub patients_serialized: usize,
}

/// Run the full batch pipeline described by `config`.
///
/// Loads the three source tables, derives index dates, filters to the
/// observation window, aggregates and normalizes, then serializes the
/// sparse feature files. Each intermediate relation is checkpointed to the
/// deliverables directory as a side effect; later stages never read the
/// checkpoints back. Any failure aborts the run with no retry.
pub fn run_pipeline(config: &EtlConfig) -> Result<PipelineSummary> {
    let run_start = Instant::now();

    fs::create_dir_all(&config.deliverables_dir)
        .map_err(|e| EtlError::io(&config.deliverables_dir, e))?;

    let tables = registry::load_source_tables(&config.input_dir)?;

    let start = Instant::now();
    let index_dates = index_date::calculate_index_dates(
        &tables.events,
        &tables.mortality,
        config.prediction_window_days,
    );
    info!(
        "Derived index dates for {} patients in {:?}",
        index_dates.len(),
        start.elapsed()
    );
    checkpoint::write_index_dates(&config.deliverables_dir, &index_dates)?;

    let start = Instant::now();
    let filtered = window::filter_events(
        &tables.events,
        &index_dates,
        config.observation_window_days,
    );
    info!(
        "Retained {} of {} events in the observation window in {:?}",
        filtered.len(),
        tables.events.len(),
        start.elapsed()
    );
    checkpoint::write_filtered_events(&config.deliverables_dir, &filtered)?;

    let start = Instant::now();
    let aggregated =
        aggregate::aggregate_events(&filtered, &tables.feature_map, config.count_threshold);
    info!(
        "Aggregated {} (patient, feature) rows in {:?}",
        aggregated.len(),
        start.elapsed()
    );
    checkpoint::write_aggregated_events(&config.deliverables_dir, &aggregated)?;

    let (patient_features, deceased) =
        features::build_patient_features(&aggregated, &index_dates, &tables.mortality);
    svmlight::write_sparse_features(
        &patient_features,
        &deceased,
        &config.deliverables_dir.join(svmlight::TRAINING_FILE),
        &config.deliverables_dir.join(svmlight::DELIVERABLE_FILE),
    )?;

    info!("Pipeline completed in {:?}", run_start.elapsed());

    Ok(PipelineSummary {
        events_loaded: tables.events.len(),
        mortality_records: tables.mortality.len(),
        feature_mappings: tables.feature_map.len(),
        patients_indexed: index_dates.len(),
        events_in_window: filtered.len(),
        aggregated_rows: aggregated.len(),
        patients_serialized: patient_features.len(),
    })
}
