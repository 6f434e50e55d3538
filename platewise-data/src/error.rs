//! Errors raised while loading a restaurant dataset.

use camino::Utf8PathBuf;
use platewise_core::MissingColumnsError;
use thiserror::Error;

/// Failure to turn a CSV file into restaurant records.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The file could not be opened.
    #[error("failed to open dataset at {path}")]
    Open {
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
        /// Path that was requested.
        path: Utf8PathBuf,
    },
    /// The header row could not be read.
    #[error("failed to read the dataset header row")]
    ReadHeaders {
        /// Underlying CSV failure.
        #[source]
        source: csv::Error,
    },
    /// One or more required columns are absent.
    #[error(transparent)]
    MissingColumns(#[from] MissingColumnsError),
    /// A data row could not be decoded.
    #[error("failed to decode dataset row on line {line}")]
    Decode {
        /// One-based line number of the offending row, when known.
        line: u64,
        /// Underlying CSV failure.
        #[source]
        source: csv::Error,
    },
}
