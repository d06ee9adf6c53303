//! Loader for the clinical event log (`events.csv`).
//!
//! Columns: `patient_id,event_id,event_description,timestamp,value`. The
//! `value` column may be empty; empty cells load as `None` and are excluded
//! later by the aggregator, never coerced to zero.

use std::path::Path;

use crate::error::Result;
use crate::models::Event;

/// Load the event relation from `path`, preserving input row order.
pub fn load(path: &Path) -> Result<Vec<Event>> {
    let events: Vec<Event> = super::load_csv(path)?;
    log::info!("Loaded {} events from {}", events.len(), path.display());
    Ok(events)
}
