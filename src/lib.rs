//! A Rust library for transforming clinical event logs into sparse,
//! per-patient feature vectors suitable for mortality prediction.
//!
//! The pipeline is a strictly sequential batch transform: load the raw
//! tables, derive a per-patient index date, restrict events to the
//! observation window, aggregate and normalize feature values, and
//! serialize the result in a sorted sparse text format. Each stage also
//! persists a checkpoint table for audit.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod registry;

// Re-export the most common types for easier use
// Core types
pub use config::EtlConfig;
pub use error::{EtlError, Result};

// Relations
pub use models::{
    AggregatedFeature, Event, FeatureMapping, IndexDate, MortalityRecord, PatientFeatures,
};

// Pipeline entry point
pub use algorithm::{PipelineSummary, run_pipeline};
