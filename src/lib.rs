//! Facade crate for the Platewise restaurant finder.
//!
//! This crate re-exports the domain types, the recommendation ranking, the
//! rating predictor, and the CSV dataset loader. Enable `test-support` for the
//! deterministic sample datasets used across the workspace tests.

#![forbid(unsafe_code)]

pub use platewise_core::{
    Column, FilterOutcome, MAX_RATING, MIN_RATING, MISSING_CUISINES, MissingColumnsError,
    Preferences, PreferencesError, Restaurant, RestaurantProfile, RestaurantSummary,
    ScoreBreakdown, Scorer, check_columns, distinct_cuisines, filter_by_cuisine,
};

#[cfg(feature = "test-support")]
pub use platewise_core::test_support;

pub use platewise_data::{DatasetError, load_restaurants, read_restaurants};
pub use platewise_predictor::{EncoderSmoothing, PredictorConfig, PredictorError, RatingPredictor};
pub use platewise_scorer::{
    DEFAULT_LIMIT, RecommendError, RecommendationWeights, ScoredRestaurant, WeightedScorer,
    recommend, recommend_with,
};
