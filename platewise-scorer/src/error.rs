//! Error types raised while ranking restaurants.
#![forbid(unsafe_code)]

use thiserror::Error;

/// Errors raised while configuring the scorer or ranking a dataset.
#[derive(Debug, Error, PartialEq)]
pub enum RecommendError {
    /// A restaurant's cost cannot take part in budget scoring.
    #[error("restaurant {name:?} at row {row} has unusable cost {cost}")]
    InvalidCost {
        /// Zero-based position of the record in the dataset.
        row: usize,
        /// Name of the affected restaurant.
        name: String,
        /// Cost found on the record.
        cost: f64,
    },
    /// Provided weights were unusable.
    #[error("weights must be finite and non-negative with a positive budget span")]
    InvalidWeights,
}
