//! Observation window filtering.
//!
//! Events are considered for feature extraction only inside a fixed-length
//! window ending at (and including) the patient's index date. Events for a
//! patient with no index date drop silently; that is a join miss, not an
//! error.

use chrono::Days;
use rustc_hash::FxHashMap;

use crate::models::{Event, IndexDate};

/// Keep the events falling inside the inclusive observation window.
///
/// Both window ends are inclusive: an event on the index date itself and an
/// event exactly `observation_window_days` before it are retained. Input
/// row order is preserved.
#[must_use]
pub fn filter_events(
    events: &[Event],
    index_dates: &[IndexDate],
    observation_window_days: u64,
) -> Vec<Event> {
    let anchor_by_patient: FxHashMap<u64, chrono::NaiveDate> = index_dates
        .iter()
        .map(|row| (row.patient_id, row.indx_date))
        .collect();

    events
        .iter()
        .filter(|event| {
            anchor_by_patient
                .get(&event.patient_id)
                .is_some_and(|&indx_date| {
                    let window_start = indx_date - Days::new(observation_window_days);
                    event.timestamp >= window_start && event.timestamp <= indx_date
                })
        })
        .cloned()
        .collect()
}
