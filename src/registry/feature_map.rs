//! Loader for the event-id to feature-index mapping
//! (`event_feature_map.csv`).
//!
//! Columns: `idx,event_id`. The mapping is expected to be a bijection; a
//! duplicated event id would make feature lookup depend on row order, so
//! duplicates are reported in the logs.

use std::path::Path;

use rustc_hash::FxHashSet;

use crate::error::Result;
use crate::models::FeatureMapping;

/// Load the feature mapping from `path`.
pub fn load(path: &Path) -> Result<Vec<FeatureMapping>> {
    let mappings: Vec<FeatureMapping> = super::load_csv(path)?;

    let mut seen = FxHashSet::default();
    for mapping in &mappings {
        if !seen.insert(mapping.event_id.as_str()) {
            log::warn!(
                "event id {} appears more than once in the feature mapping",
                mapping.event_id
            );
        }
    }

    log::info!(
        "Loaded {} feature mappings from {}",
        mappings.len(),
        path.display()
    );
    Ok(mappings)
}
