//! Rating prediction for Platewise restaurants.
//!
//! [`RatingPredictor`] learns aggregate ratings from a restaurant table and
//! estimates ratings for hypothetical [`RestaurantProfile`]s. The pipeline is
//! assembled from small, independently usable stages:
//!
//! - [`FeatureRow`] engineers cuisine count, booking and delivery flags and
//!   the primary cuisine from a record.
//! - [`train_validation_split`] partitions rows reproducibly from a seed.
//! - [`TargetEncoder`] replaces a category with its mean rating.
//! - `aprender`'s `StandardScaler` standardises the numeric features, its
//!   `RandomForestRegressor` learns the ratings, and its `r_squared` scores
//!   the held-out rows.
//!
//! Everything is seeded by [`PredictorConfig::seed`], so fitting the same
//! table twice yields the same model and the same validation score.
//!
//! [`RestaurantProfile`]: platewise_core::RestaurantProfile

#![forbid(unsafe_code)]

mod config;
mod encoder;
mod error;
mod features;
mod predictor;
mod split;

pub use config::{EncoderSmoothing, PredictorConfig};
pub use encoder::TargetEncoder;
pub use error::PredictorError;
pub use features::{FeatureRow, MODEL_FEATURES, NUMERIC_FEATURES};
pub use predictor::RatingPredictor;
pub use split::{Split, train_validation_split};
