//! Event aggregation and normalization.
//!
//! Qualifying events reduce to one value per (patient, feature): features
//! at or below the configured threshold aggregate by occurrence count (lab
//! events), features above it by value sum (diagnosis and medication
//! events). Each partition is then min-max normalized as one pooled column,
//! using the minimum and maximum across all features of that aggregation
//! type rather than one scaler per feature id. The pooled scope is required
//! for compatibility with the reference numeric output.

use itertools::{Itertools, MinMaxResult};
use rustc_hash::FxHashMap;

use crate::models::{AggregatedFeature, Event, FeatureMapping};

/// Aggregate filtered events into normalized per-patient feature values.
///
/// Rows with an empty or NaN value are excluded before aggregation, and
/// events whose id has no feature mapping drop silently. The result holds
/// the count partition followed by the sum partition, each sorted by
/// (patient id, feature id).
#[must_use]
pub fn aggregate_events(
    filtered: &[Event],
    feature_map: &[FeatureMapping],
    count_threshold: u32,
) -> Vec<AggregatedFeature> {
    let index_by_event: FxHashMap<&str, u32> = feature_map
        .iter()
        .map(|mapping| (mapping.event_id.as_str(), mapping.idx))
        .collect();

    let mut counts: FxHashMap<(u64, u32), f64> = FxHashMap::default();
    let mut sums: FxHashMap<(u64, u32), f64> = FxHashMap::default();

    for event in filtered {
        let Some(value) = event.value else { continue };
        if value.is_nan() {
            continue;
        }
        let Some(&idx) = index_by_event.get(event.event_id.as_str()) else {
            continue;
        };

        if idx <= count_threshold {
            *counts.entry((event.patient_id, idx)).or_insert(0.0) += 1.0;
        } else {
            *sums.entry((event.patient_id, idx)).or_insert(0.0) += value;
        }
    }

    let mut aggregated = Vec::with_capacity(counts.len() + sums.len());
    aggregated.extend(normalize_partition(counts));
    aggregated.extend(normalize_partition(sums));
    aggregated
}

/// Min-max normalize one aggregation partition as a single pooled column.
///
/// The rows achieving the partition maximum map to 1.0 and the minimum to
/// 0.0. A zero-variance partition (min == max) maps every row to 1.0, since
/// every row is the partition maximum. Rows come out sorted by (patient id,
/// feature id).
fn normalize_partition(reduced: FxHashMap<(u64, u32), f64>) -> Vec<AggregatedFeature> {
    let (min, max) = match reduced.values().copied().minmax() {
        MinMaxResult::NoElements => return Vec::new(),
        MinMaxResult::OneElement(value) => (value, value),
        MinMaxResult::MinMax(min, max) => (min, max),
    };
    let range = max - min;

    reduced
        .into_iter()
        .map(|((patient_id, feature_id), raw)| {
            let feature_value = if range == 0.0 {
                1.0
            } else {
                (raw - min) / range
            };
            AggregatedFeature {
                patient_id,
                feature_id,
                feature_value,
            }
        })
        .sorted_unstable_by_key(|row| (row.patient_id, row.feature_id))
        .collect()
}
