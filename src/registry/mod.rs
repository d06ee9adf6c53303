//! Loaders for the raw clinical source tables.
//!
//! This module contains one loader per source file, each parsing its CSV
//! into a typed relation. Loading is fail-fast: a missing file, an
//! unreadable file or any row that fails structural parsing (including an
//! unparseable date) aborts the run with no partial results.
//!
//! Available sources:
//! - events: the clinical event log (diagnoses, drug administrations, labs)
//! - mortality: mortality outcome records
//! - `feature_map`: the event-id to feature-index mapping

pub mod events;
pub mod feature_map;
pub mod mortality;

use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{EtlError, Result};
use crate::models::{Event, FeatureMapping, MortalityRecord};

/// File name of the clinical event log inside the input directory
pub const EVENTS_FILE: &str = "events.csv";
/// File name of the mortality outcome table
pub const MORTALITY_FILE: &str = "mortality_events.csv";
/// File name of the event-id to feature-index mapping
pub const FEATURE_MAP_FILE: &str = "event_feature_map.csv";

/// The three raw relations consumed by the pipeline
#[derive(Debug, Clone)]
pub struct SourceTables {
    /// Clinical event log, in input row order
    pub events: Vec<Event>,
    /// Mortality outcome records
    pub mortality: Vec<MortalityRecord>,
    /// Event-id to feature-index mapping
    pub feature_map: Vec<FeatureMapping>,
}

/// Load all three source tables from `input_dir`.
///
/// # Arguments
/// * `input_dir` - Directory holding the three source CSV files
///
/// # Returns
/// * `Result<SourceTables>` - The typed relations, or the first load error
pub fn load_source_tables(input_dir: &Path) -> Result<SourceTables> {
    validate_directory(input_dir)?;

    let events = events::load(&input_dir.join(EVENTS_FILE))?;
    let mortality = mortality::load(&input_dir.join(MORTALITY_FILE))?;
    let feature_map = feature_map::load(&input_dir.join(FEATURE_MAP_FILE))?;

    Ok(SourceTables {
        events,
        mortality,
        feature_map,
    })
}

/// Check that a supplied input path exists and is a readable directory.
pub fn validate_directory(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(EtlError::Directory {
            path: path.to_path_buf(),
            reason: "directory not found".to_string(),
        });
    }

    if !path.is_dir() {
        return Err(EtlError::Directory {
            path: path.to_path_buf(),
            reason: "path is not a directory".to_string(),
        });
    }

    // Read the directory once to surface permission problems early
    match fs::read_dir(path) {
        Ok(_) => Ok(()),
        Err(e) => Err(EtlError::Directory {
            path: path.to_path_buf(),
            reason: format!("directory is not readable: {e}"),
        }),
    }
}

/// Read a whole CSV file into typed rows, fail-fast on the first bad row.
fn load_csv<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let file = File::open(path).map_err(|e| EtlError::io(path, e))?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(BufReader::new(file));

    let mut rows = Vec::new();
    for record in reader.deserialize() {
        rows.push(record.map_err(|e| EtlError::csv(path, e))?);
    }
    Ok(rows)
}
