//! Intermediate checkpoint tables.
//!
//! Each stage's output relation is persisted once per run for audit; later
//! stages never read these files back. All three are CSV with a header row,
//! dates formatted `%Y-%m-%d`, and an empty cell for a missing value.

use std::path::Path;

use crate::error::{EtlError, Result};
use crate::models::dates::OUTPUT_DATE_FORMAT;
use crate::models::{AggregatedFeature, Event, IndexDate};

/// File name of the index date checkpoint
pub const INDEX_DATES_FILE: &str = "etl_index_dates.csv";
/// File name of the filtered events checkpoint
pub const FILTERED_EVENTS_FILE: &str = "etl_filtered_events.csv";
/// File name of the aggregated events checkpoint
pub const AGGREGATED_EVENTS_FILE: &str = "etl_aggregated_events.csv";

/// Persist the index date relation as `etl_index_dates.csv`.
pub fn write_index_dates(dir: &Path, index_dates: &[IndexDate]) -> Result<()> {
    let path = dir.join(INDEX_DATES_FILE);
    let mut writer = csv::Writer::from_path(&path).map_err(|e| EtlError::csv(&path, e))?;

    writer
        .write_record(["patient_id", "indx_date"])
        .map_err(|e| EtlError::csv(&path, e))?;
    for row in index_dates {
        writer
            .write_record([
                row.patient_id.to_string(),
                row.indx_date.format(OUTPUT_DATE_FORMAT).to_string(),
            ])
            .map_err(|e| EtlError::csv(&path, e))?;
    }
    writer.flush().map_err(|e| EtlError::io(&path, e))?;

    log::info!(
        "Wrote {} index dates to {}",
        index_dates.len(),
        path.display()
    );
    Ok(())
}

/// Persist the filtered event relation as `etl_filtered_events.csv`.
///
/// Only the `patient_id,event_id,value` columns are part of the checkpoint
/// contract; the timestamp has served its purpose once filtering is done.
pub fn write_filtered_events(dir: &Path, filtered: &[Event]) -> Result<()> {
    let path = dir.join(FILTERED_EVENTS_FILE);
    let mut writer = csv::Writer::from_path(&path).map_err(|e| EtlError::csv(&path, e))?;

    writer
        .write_record(["patient_id", "event_id", "value"])
        .map_err(|e| EtlError::csv(&path, e))?;
    for event in filtered {
        let value = event.value.map(|v| v.to_string()).unwrap_or_default();
        writer
            .write_record([
                event.patient_id.to_string(),
                event.event_id.clone(),
                value,
            ])
            .map_err(|e| EtlError::csv(&path, e))?;
    }
    writer.flush().map_err(|e| EtlError::io(&path, e))?;

    log::info!(
        "Wrote {} filtered events to {}",
        filtered.len(),
        path.display()
    );
    Ok(())
}

/// Persist the aggregated feature relation as `etl_aggregated_events.csv`.
pub fn write_aggregated_events(dir: &Path, aggregated: &[AggregatedFeature]) -> Result<()> {
    let path = dir.join(AGGREGATED_EVENTS_FILE);
    let mut writer = csv::Writer::from_path(&path).map_err(|e| EtlError::csv(&path, e))?;

    writer
        .write_record(["patient_id", "feature_id", "feature_value"])
        .map_err(|e| EtlError::csv(&path, e))?;
    for row in aggregated {
        writer
            .write_record([
                row.patient_id.to_string(),
                row.feature_id.to_string(),
                row.feature_value.to_string(),
            ])
            .map_err(|e| EtlError::csv(&path, e))?;
    }
    writer.flush().map_err(|e| EtlError::io(&path, e))?;

    log::info!(
        "Wrote {} aggregated rows to {}",
        aggregated.len(),
        path.display()
    );
    Ok(())
}
