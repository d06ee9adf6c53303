//! Sparse feature serialization.
//!
//! Two layouts of the same data, written in one pass:
//! - training: `<label> <feature_id>:<feature_value> ...`
//! - deliverable: `<patient_id> <label> <feature_id>:<feature_value> ...`
//!
//! Every token is followed by a single space, values are fixed to six
//! decimal places, pairs ascend by feature id and patients by id. A patient
//! with no aggregated features emits a label-only line, a valid all-zero
//! sparse vector.

use std::fmt::Write as _;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use rustc_hash::FxHashSet;

use crate::error::{EtlError, Result};
use crate::models::PatientFeatures;

/// File name of the bare-label training layout
pub const TRAINING_FILE: &str = "features_svmlight.train";
/// File name of the patient-id-prefixed deliverable layout
pub const DELIVERABLE_FILE: &str = "features.train";

/// Write both sparse layouts.
///
/// The label is 1 exactly when the patient id is a member of the mortality
/// relation. Files are flushed before returning so write failures surface
/// as errors.
pub fn write_sparse_features(
    features: &PatientFeatures,
    deceased: &FxHashSet<u64>,
    training_path: &Path,
    deliverable_path: &Path,
) -> Result<()> {
    let training_file = File::create(training_path).map_err(|e| EtlError::io(training_path, e))?;
    let deliverable_file =
        File::create(deliverable_path).map_err(|e| EtlError::io(deliverable_path, e))?;
    let mut training = BufWriter::new(training_file);
    let mut deliverable = BufWriter::new(deliverable_file);

    for (&patient_id, pairs) in features {
        let label = i32::from(deceased.contains(&patient_id));
        let encoded = render_pairs(pairs);

        writeln!(training, "{label} {encoded}").map_err(|e| EtlError::io(training_path, e))?;
        writeln!(deliverable, "{patient_id} {label} {encoded}")
            .map_err(|e| EtlError::io(deliverable_path, e))?;
    }

    training
        .flush()
        .map_err(|e| EtlError::io(training_path, e))?;
    deliverable
        .flush()
        .map_err(|e| EtlError::io(deliverable_path, e))?;

    log::info!(
        "Wrote {} patients to {} and {}",
        features.len(),
        training_path.display(),
        deliverable_path.display()
    );
    Ok(())
}

/// Render the `id:value` tokens for one patient, each trailed by a space.
///
/// An empty pair list renders to an empty string, so a featureless patient's
/// line ends right after the space that follows its label.
fn render_pairs(pairs: &[(u32, f64)]) -> String {
    let mut rendered = String::with_capacity(pairs.len() * 16);
    for &(feature_id, feature_value) in pairs {
        let _ = write!(rendered, "{feature_id}:{feature_value:.6} ");
    }
    rendered
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_pairs_format() {
        let rendered = render_pairs(&[(100, 1.0), (3000, 0.5)]);
        assert_eq!(rendered, "100:1.000000 3000:0.500000 ");
    }

    #[test]
    fn test_render_pairs_empty() {
        assert_eq!(render_pairs(&[]), "");
    }

    #[test]
    fn test_render_pairs_six_decimal_places() {
        let rendered = render_pairs(&[(7, 1.0 / 3.0)]);
        assert_eq!(rendered, "7:0.333333 ");
    }
}
