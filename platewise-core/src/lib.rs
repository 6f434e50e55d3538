//! Core domain types for the Platewise restaurant finder.
//!
//! The crate holds the fixed-schema [`Restaurant`] record, the caller-supplied
//! [`Preferences`], the [`Scorer`] seam used by the recommendation engine, and
//! the cuisine filter. Constructors that accept user input return `Result` so
//! invalid values surface at the boundary rather than deep inside scoring.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod filter;
pub mod preferences;
pub mod restaurant;
pub mod schema;
pub mod scorer;
#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use filter::{FilterOutcome, distinct_cuisines, filter_by_cuisine};
pub use preferences::{Preferences, PreferencesError};
pub use restaurant::{MISSING_CUISINES, Restaurant, RestaurantProfile, RestaurantSummary};
pub use schema::{Column, MissingColumnsError, check_columns};
pub use scorer::{ScoreBreakdown, Scorer};

/// Lowest rating a restaurant can hold.
pub const MIN_RATING: f64 = 0.0;

/// Highest rating a restaurant can hold.
pub const MAX_RATING: f64 = 5.0;
