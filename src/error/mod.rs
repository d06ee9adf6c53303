//! Error handling for the ETL pipeline.
//!
//! Only load and persistence failures are errors: a missing or unreadable
//! input file, a row that fails structural parsing, or a failed checkpoint
//! write aborts the run with no partial results. Join misses and missing
//! event values are expected data conditions and drop silently inside the
//! transforms instead of raising.

use std::io;
use std::path::PathBuf;

/// Errors that can occur while loading sources or persisting deliverables
#[derive(Debug, thiserror::Error)]
pub enum EtlError {
    /// Error opening, reading or writing a file
    #[error("I/O error on {path}: {source}")]
    Io {
        /// File the operation was touching
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: io::Error,
    },

    /// A row failed structural CSV parsing (wrong arity, bad number, bad date)
    #[error("failed to parse {path}: {source}")]
    Csv {
        /// File holding the malformed row
        path: PathBuf,
        /// Parser error, including row position
        #[source]
        source: csv::Error,
    },

    /// A supplied path is not a readable directory
    #[error("invalid directory {path}: {reason}")]
    Directory {
        /// The offending path
        path: PathBuf,
        /// Why the directory was rejected
        reason: String,
    },
}

impl EtlError {
    /// Attach a path to an I/O failure.
    #[must_use]
    pub fn io(path: &std::path::Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Attach a path to a CSV parse or write failure.
    #[must_use]
    pub fn csv(path: &std::path::Path, source: csv::Error) -> Self {
        Self::Csv {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Alias for Result with `EtlError`
pub type Result<T> = std::result::Result<T, EtlError>;
