//! Application state for one user session.
//!
//! A [`Session`] owns the loaded dataset, the cuisine search history, and a
//! lazily trained [`RatingPredictor`]. The library crates stay stateless;
//! anything remembered between calls lives here.

use camino::Utf8Path;
use log::info;
use platewise_core::{
    FilterOutcome, MAX_RATING, MIN_RATING, Preferences, Restaurant, RestaurantProfile,
    distinct_cuisines, filter_by_cuisine,
};
use platewise_data::{DatasetError, load_restaurants};
use platewise_predictor::{PredictorConfig, PredictorError, RatingPredictor};
use platewise_scorer::{RecommendError, ScoredRestaurant, WeightedScorer, recommend_with};
use serde::Serialize;

/// Number of recent searches reported by [`Session::history`].
pub const HISTORY_LIMIT: usize = 5;

/// A rating estimate ready for display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Prediction {
    /// Raw model output; not clamped to the rating scale.
    pub estimate: f64,
    /// Estimate rounded to whole stars, see [`star_rating`].
    pub stars: u8,
    /// R² of the model on its held-out validation split.
    pub validation_score: f64,
}

/// Loaded dataset plus per-session state.
///
/// # Examples
/// ```
/// use platewise_cli::Session;
/// use platewise_core::Restaurant;
///
/// let mut session = Session::new(vec![Restaurant {
///     name: "Tasty Bites".into(),
///     cuisines: "italian, pizza".into(),
///     ..Restaurant::default()
/// }]);
/// assert!(session.search("Pizza").matches().is_some());
/// assert_eq!(session.history(), ["pizza"]);
/// ```
#[derive(Debug, Default)]
pub struct Session {
    restaurants: Vec<Restaurant>,
    history: Vec<String>,
    predictor: RatingPredictor,
}

impl Session {
    /// Start a session over `restaurants` with the default predictor
    /// settings.
    #[must_use]
    pub fn new(restaurants: Vec<Restaurant>) -> Self {
        Self {
            restaurants,
            history: Vec::new(),
            predictor: RatingPredictor::new(),
        }
    }

    /// Replace the predictor with an untrained one using `config`.
    #[must_use]
    pub fn with_predictor_config(mut self, config: PredictorConfig) -> Self {
        self.predictor = RatingPredictor::with_config(config);
        self
    }

    /// Load the CSV dataset at `path` into a new session.
    ///
    /// # Errors
    /// Propagates every [`DatasetError`] raised by the loader.
    pub fn load(path: &Utf8Path) -> Result<Self, DatasetError> {
        load_restaurants(path).map(Self::new)
    }

    /// Every loaded restaurant, in dataset order.
    #[must_use]
    pub fn restaurants(&self) -> &[Restaurant] {
        &self.restaurants
    }

    /// Search by cuisine and remember the query.
    ///
    /// Surrounding whitespace is ignored. The trimmed, lowercased query joins
    /// the history the first time it is seen; blank queries are not recorded.
    pub fn search(&mut self, query: &str) -> FilterOutcome {
        let trimmed = query.trim();
        let recorded = trimmed.to_lowercase();
        if !recorded.is_empty() && !self.history.contains(&recorded) {
            self.history.push(recorded);
        }
        filter_by_cuisine(&self.restaurants, trimmed)
    }

    /// The most recent [`HISTORY_LIMIT`] distinct searches, oldest first.
    #[must_use]
    pub fn history(&self) -> &[String] {
        let start = self.history.len().saturating_sub(HISTORY_LIMIT);
        self.history.get(start..).unwrap_or_default()
    }

    /// Sorted cuisine vocabulary of the dataset.
    #[must_use]
    pub fn cuisines(&self) -> Vec<String> {
        distinct_cuisines(&self.restaurants)
    }

    /// Rank the dataset for `preferences`, keeping at most `limit` entries.
    ///
    /// # Errors
    /// Returns [`RecommendError::InvalidCost`] when a record has a negative
    /// or non-finite cost.
    pub fn recommend(
        &self,
        preferences: &Preferences,
        limit: usize,
    ) -> Result<Vec<ScoredRestaurant>, RecommendError> {
        recommend_with(
            &WeightedScorer::default(),
            &self.restaurants,
            preferences,
            limit,
        )
    }

    /// Estimate the rating of `profile`, training the predictor on first use.
    ///
    /// Training uses the rated records only. Later calls reuse the trained
    /// model until the session ends.
    ///
    /// # Errors
    /// Returns the [`PredictorError`] raised while training or predicting.
    /// A failed training attempt is retried on the next call.
    pub fn predict(&mut self, profile: &RestaurantProfile) -> Result<Prediction, PredictorError> {
        if !self.predictor.is_trained() {
            self.train()?;
        }
        let estimate = self.predictor.predict_one(profile)?;
        let validation_score = self
            .predictor
            .validation_score()
            .ok_or(PredictorError::NotTrained)?;
        Ok(Prediction {
            estimate,
            stars: star_rating(estimate),
            validation_score,
        })
    }

    /// Validation R² of the trained predictor, if it has been trained.
    #[must_use]
    pub fn validation_score(&self) -> Option<f64> {
        self.predictor.validation_score()
    }

    fn train(&mut self) -> Result<(), PredictorError> {
        let rated: Vec<Restaurant> = self
            .restaurants
            .iter()
            .filter(|restaurant| restaurant.aggregate_rating.is_some())
            .cloned()
            .collect();
        let skipped = self.restaurants.len().saturating_sub(rated.len());
        if skipped > 0 {
            info!("skipping {skipped} unrated restaurants when training the predictor");
        }
        let score = self.predictor.fit(&rated)?;
        info!(
            "trained rating predictor on {} restaurants (validation R² {score:.3})",
            rated.len()
        );
        Ok(())
    }
}

/// Round a rating estimate to whole stars on the 0 to 5 scale.
///
/// Estimates outside the scale are clamped first; `NaN` maps to zero.
///
/// # Examples
/// ```
/// use platewise_cli::star_rating;
///
/// assert_eq!(star_rating(3.6), 4);
/// assert_eq!(star_rating(7.2), 5);
/// assert_eq!(star_rating(-0.4), 0);
/// ```
#[must_use]
pub fn star_rating(estimate: f64) -> u8 {
    let rounded = estimate.clamp(MIN_RATING, MAX_RATING).round();
    (1..=5_u8)
        .rev()
        .find(|stars| rounded >= f64::from(*stars))
        .unwrap_or(0)
}
