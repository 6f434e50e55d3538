//! Error types raised by the rating prediction pipeline.
#![forbid(unsafe_code)]

use aprender::AprenderError;
use thiserror::Error;

/// Errors raised while fitting or querying a [`RatingPredictor`](crate::RatingPredictor).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PredictorError {
    /// `predict` was called before a successful `fit`.
    #[error("model needs to be trained with `fit` before making predictions")]
    NotTrained,
    /// A boolean-like field held something other than `"Yes"` or `"No"`.
    #[error("unrecognised value {value:?} for {field} at row {row}; expected \"Yes\" or \"No\"")]
    UnrecognizedValue {
        /// Name of the offending field.
        field: &'static str,
        /// Value found on the record.
        value: String,
        /// Zero-based position of the record in the input.
        row: usize,
    },
    /// A numeric field was NaN or infinite.
    #[error("{field} at row {row} must be a finite number, got {value}")]
    NonFiniteValue {
        /// Name of the offending field.
        field: &'static str,
        /// Value found on the record.
        value: f64,
        /// Zero-based position of the record in the input.
        row: usize,
    },
    /// A training record had no aggregate rating to learn from.
    #[error("restaurant {name:?} at row {row} has no aggregate rating to train on")]
    MissingTarget {
        /// Zero-based position of the record in the input.
        row: usize,
        /// Name of the affected restaurant.
        name: String,
    },
    /// Too few records to build both a training and a validation partition.
    #[error("at least two rated restaurants are required to fit, got {rows}")]
    InsufficientData {
        /// Number of records supplied.
        rows: usize,
    },
    /// A hyper-parameter was out of range.
    #[error("invalid predictor configuration: {reason}")]
    InvalidConfig {
        /// Description of the rejected setting.
        reason: &'static str,
    },
    /// The scaler or forest rejected its input.
    #[error("model stage failed: {reason}")]
    Model {
        /// Message reported by the failing stage.
        reason: String,
    },
}

impl From<AprenderError> for PredictorError {
    fn from(err: AprenderError) -> Self {
        Self::Model {
            reason: err.to_string(),
        }
    }
}
