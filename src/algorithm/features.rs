//! Assembly of per-patient sparse feature vectors and labels.
//!
//! Aggregated rows fold into one ordered pair list per patient. Every
//! patient holding an index date appears in the map, so a patient whose
//! events all fell outside the window (or never qualified) still serializes
//! as a valid all-zero sparse vector. The mortality label is derived from
//! relation membership, the single source of truth.

use rustc_hash::FxHashSet;

use crate::models::{AggregatedFeature, IndexDate, MortalityRecord, PatientFeatures};

/// Fold aggregated features into per-patient vectors and the deceased set.
///
/// # Returns
/// The patient-to-pairs map (pairs ascending by feature id, patients
/// ascending by id) and the set of deceased patient ids.
#[must_use]
pub fn build_patient_features(
    aggregated: &[AggregatedFeature],
    index_dates: &[IndexDate],
    mortality: &[MortalityRecord],
) -> (PatientFeatures, FxHashSet<u64>) {
    let mut features: PatientFeatures = index_dates
        .iter()
        .map(|row| (row.patient_id, Vec::new()))
        .collect();

    for row in aggregated {
        features
            .entry(row.patient_id)
            .or_default()
            .push((row.feature_id, row.feature_value));
    }

    for pairs in features.values_mut() {
        pairs.sort_unstable_by_key(|&(feature_id, _)| feature_id);
    }

    let deceased: FxHashSet<u64> = mortality.iter().map(|m| m.patient_id).collect();

    (features, deceased)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn anchor(patient_id: u64) -> IndexDate {
        IndexDate {
            patient_id,
            indx_date: NaiveDate::from_ymd_opt(2017, 1, 1).unwrap(),
        }
    }

    fn row(patient_id: u64, feature_id: u32, feature_value: f64) -> AggregatedFeature {
        AggregatedFeature {
            patient_id,
            feature_id,
            feature_value,
        }
    }

    #[test]
    fn test_pairs_sorted_by_feature_id() {
        let aggregated = vec![row(1, 3000, 1.0), row(1, 100, 0.5), row(1, 200, 0.25)];
        let (features, _) = build_patient_features(&aggregated, &[anchor(1)], &[]);

        assert_eq!(
            features[&1],
            vec![(100, 0.5), (200, 0.25), (3000, 1.0)]
        );
    }

    #[test]
    fn test_featureless_patient_gets_empty_vector() {
        let (features, _) = build_patient_features(&[], &[anchor(7)], &[]);
        assert_eq!(features[&7], Vec::new());
    }

    #[test]
    fn test_deceased_set_is_membership_derived() {
        let mortality = vec![MortalityRecord {
            patient_id: 9,
            timestamp: NaiveDate::from_ymd_opt(2017, 4, 11).unwrap(),
            label: 1,
        }];
        let (_, deceased) = build_patient_features(&[], &[anchor(9)], &mortality);
        assert!(deceased.contains(&9));
        assert!(!deceased.contains(&1));
    }

    #[test]
    fn test_patients_iterate_in_ascending_order() {
        let anchors = vec![anchor(20), anchor(5), anchor(11)];
        let (features, _) = build_patient_features(&[], &anchors, &[]);
        let ids: Vec<u64> = features.keys().copied().collect();
        assert_eq!(ids, vec![5, 11, 20]);
    }
}
