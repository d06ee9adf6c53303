//! Per-patient index date derivation.
//!
//! The index date anchors the observation window. For a deceased patient it
//! is the death date minus the prediction window; for an alive patient it
//! is the date of their most recent recorded event. Deceased status takes
//! precedence: a patient present in both relations is anchored on the death
//! date, and a deceased patient with no events still receives an index
//! date.

use chrono::Days;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::models::{Event, IndexDate, MortalityRecord};

/// Compute the index date for every patient present in either relation.
///
/// # Arguments
/// * `events` - The full event relation
/// * `mortality` - Mortality outcome records
/// * `prediction_window_days` - Days subtracted from a death date
///
/// # Returns
/// One `IndexDate` per patient, sorted ascending by patient id.
#[must_use]
pub fn calculate_index_dates(
    events: &[Event],
    mortality: &[MortalityRecord],
    prediction_window_days: u64,
) -> Vec<IndexDate> {
    let deceased: FxHashSet<u64> = mortality.iter().map(|m| m.patient_id).collect();

    let mut anchor_dates: FxHashMap<u64, chrono::NaiveDate> = FxHashMap::default();

    for record in mortality {
        let indx_date = record.timestamp - Days::new(prediction_window_days);
        anchor_dates.insert(record.patient_id, indx_date);
    }

    for event in events {
        if deceased.contains(&event.patient_id) {
            continue;
        }
        anchor_dates
            .entry(event.patient_id)
            .and_modify(|latest| {
                if event.timestamp > *latest {
                    *latest = event.timestamp;
                }
            })
            .or_insert(event.timestamp);
    }

    let mut index_dates: Vec<IndexDate> = anchor_dates
        .into_iter()
        .map(|(patient_id, indx_date)| IndexDate {
            patient_id,
            indx_date,
        })
        .collect();
    index_dates.sort_unstable_by_key(|row| row.patient_id);
    index_dates
}
