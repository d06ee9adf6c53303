//! Persistence for checkpoint tables and sparse feature files.
//!
//! The transforms in [`crate::algorithm`] stay pure; everything that
//! touches the filesystem lives here. All writers flush explicitly so a
//! failed write surfaces as an error instead of being swallowed on drop.

pub mod checkpoint;
pub mod svmlight;
