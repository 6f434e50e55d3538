//! Public configuration and output types for recommendation scoring.
#![forbid(unsafe_code)]

use platewise_core::{Restaurant, ScoreBreakdown};
use serde::Serialize;

use crate::RecommendError;

/// Tunable constants of the composite recommendation score.
///
/// The defaults reproduce the published formula:
/// `30` points per matched cuisine, `8` points per rating step above the
/// floor, and up to `30` points for affordability, decaying linearly to zero
/// at twice the budget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecommendationWeights {
    /// Points awarded for each preferred cuisine a restaurant serves.
    pub cuisine_match: f64,
    /// Multiplier applied to the distance between rating and rating floor.
    pub rating_multiplier: f64,
    /// Maximum points awarded for affordability.
    pub budget_weight: f64,
    /// Multiple of the budget at which affordability reaches zero.
    pub budget_span: f64,
}

impl RecommendationWeights {
    /// Validate the weights and return a copy.
    ///
    /// # Errors
    /// Returns [`RecommendError::InvalidWeights`] when any weight is negative
    /// or not finite, or when `budget_span` is not positive.
    pub fn validate(self) -> Result<Self, RecommendError> {
        let weights = [
            self.cuisine_match,
            self.rating_multiplier,
            self.budget_weight,
            self.budget_span,
        ];
        let usable = weights.iter().all(|w| w.is_finite() && *w >= 0.0) && self.budget_span > 0.0;
        if usable {
            Ok(self)
        } else {
            Err(RecommendError::InvalidWeights)
        }
    }
}

impl Default for RecommendationWeights {
    fn default() -> Self {
        Self {
            cuisine_match: 30.0,
            rating_multiplier: 8.0,
            budget_weight: 30.0,
            budget_span: 2.0,
        }
    }
}

/// A restaurant paired with the score that ranked it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredRestaurant {
    /// The ranked record.
    pub restaurant: Restaurant,
    /// Per-term score contributions.
    pub score: ScoreBreakdown,
}

impl ScoredRestaurant {
    /// Composite score used for ranking.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.score.total()
    }
}
