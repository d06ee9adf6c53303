//! Typed relations for the clinical event tables.
//!
//! The loaders in [`crate::registry`] deserialize the raw CSV rows directly
//! into these structs; everything downstream of loading works on typed
//! values. `IndexDate` and `AggregatedFeature` are computed relations and
//! never appear in the inputs.

pub mod dates;

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Deserialize;

/// A single time-stamped clinical observation for a patient
///
/// One row per diagnosis, drug administration or lab result. `value` is
/// `None` when the source cell is empty; such rows never contribute to
/// aggregation and are never treated as zero.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Event {
    /// Numeric patient identifier
    pub patient_id: u64,
    /// Raw event-type identifier, e.g. `DIAG319049` or `LAB3013682`
    pub event_id: String,
    /// Human-readable description of the event type
    pub event_description: String,
    /// Calendar date the event was recorded on
    #[serde(deserialize_with = "dates::deserialize_date")]
    pub timestamp: NaiveDate,
    /// Observed value, absent for events recorded without one
    pub value: Option<f64>,
}

/// A mortality outcome row
///
/// Membership of a `patient_id` in this relation is what marks the patient
/// deceased. The `label` column is redundant with membership and is kept
/// only so the loader can warn if the two ever disagree.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MortalityRecord {
    /// Numeric patient identifier
    pub patient_id: u64,
    /// Date of death
    #[serde(deserialize_with = "dates::deserialize_date")]
    pub timestamp: NaiveDate,
    /// Outcome flag carried by the source table; always 1 in reference data
    pub label: i64,
}

/// One row of the event-id to feature-index mapping
///
/// The mapping is a bijection. Indices at or below the configured threshold
/// denote count-type features (labs); indices above it denote sum-type
/// features (diagnoses and medications). The split is a contract with the
/// mapping table's construction, never inferred from the `event_id` string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FeatureMapping {
    /// Compact integer feature index
    pub idx: u32,
    /// Raw event-type identifier the index stands for
    pub event_id: String,
}

/// The per-patient anchor date for the observation window
///
/// Computed, never loaded: death date minus the prediction window for
/// deceased patients, last recorded event date for alive patients.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexDate {
    /// Numeric patient identifier
    pub patient_id: u64,
    /// Anchor date ending the observation window
    pub indx_date: NaiveDate,
}

/// One aggregated, normalized feature value for a patient
///
/// Sparse: a (patient, feature) pair with no qualifying events has no row.
/// `feature_value` lies in `[0, 1]` after partition-pooled min-max
/// normalization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AggregatedFeature {
    /// Numeric patient identifier
    pub patient_id: u64,
    /// Compact integer feature index
    pub feature_id: u32,
    /// Normalized aggregate value
    pub feature_value: f64,
}

/// Per-patient sparse feature vectors, keyed by patient id
///
/// The `BTreeMap` keeps patients in ascending id order; each pair list is
/// sorted ascending by feature id. A patient with an index date but no
/// aggregated features maps to an empty list.
pub type PatientFeatures = BTreeMap<u64, Vec<(u32, f64)>>;
