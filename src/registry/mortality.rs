//! Loader for the mortality outcome table (`mortality_events.csv`).
//!
//! Columns: `patient_id,timestamp,label`. Downstream logic derives the
//! deceased label from membership in this relation; the `label` column is a
//! documented redundancy and only checked here so a disagreement is visible
//! in the logs instead of silently discarded.

use std::path::Path;

use crate::error::Result;
use crate::models::MortalityRecord;

/// Load the mortality relation from `path`.
pub fn load(path: &Path) -> Result<Vec<MortalityRecord>> {
    let records: Vec<MortalityRecord> = super::load_csv(path)?;

    for record in &records {
        if record.label != 1 {
            log::warn!(
                "mortality record for patient {} carries label {}; membership still marks the patient deceased",
                record.patient_id,
                record.label
            );
        }
    }

    log::info!(
        "Loaded {} mortality records from {}",
        records.len(),
        path.display()
    );
    Ok(records)
}
