//! The weighted multi-criteria scorer behind recommendations.
//!
//! Each restaurant earns three independent terms: a flat bonus per preferred
//! cuisine it serves, a rating term relative to the diner's floor, and an
//! affordability term that shrinks as cost approaches `budget_span` times the
//! budget. Terms are reported separately in a [`ScoreBreakdown`].

#![forbid(unsafe_code)]

use platewise_core::{Preferences, Restaurant, ScoreBreakdown, Scorer};

use crate::{RecommendError, RecommendationWeights};

/// [`Scorer`] implementing the cuisine + rating + budget formula.
///
/// # Examples
/// ```
/// use platewise_core::{Preferences, Restaurant, Scorer};
/// use platewise_scorer::WeightedScorer;
///
/// let restaurant = Restaurant {
///     cuisines: "italian, pizza".into(),
///     average_cost_for_two: 40.0,
///     aggregate_rating: Some(4.0),
///     ..Restaurant::default()
/// };
/// let prefs = Preferences::new(["italian"], 50.0, 3.5).unwrap();
/// let score = WeightedScorer::default().score(&restaurant, &prefs);
///
/// assert_eq!(score.cuisine, 30.0);
/// assert_eq!(score.rating, 4.0);
/// assert_eq!(score.budget, 18.0);
/// assert_eq!(score.total(), 52.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WeightedScorer {
    weights: RecommendationWeights,
}

impl WeightedScorer {
    /// Build a scorer from validated weights.
    ///
    /// # Errors
    /// Returns [`RecommendError::InvalidWeights`] when the weights fail
    /// [`RecommendationWeights::validate`].
    pub fn new(weights: RecommendationWeights) -> Result<Self, RecommendError> {
        Ok(Self {
            weights: weights.validate()?,
        })
    }

    /// Weights in use.
    #[must_use]
    pub const fn weights(&self) -> RecommendationWeights {
        self.weights
    }

    /// Flat bonus for every preferred cuisine contained in the record.
    ///
    /// Matches are additive and uncapped: two matched cuisines earn twice the
    /// bonus.
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_precision_loss,
        reason = "cuisine term multiplies the match count by the bonus"
    )]
    fn cuisine_term(&self, restaurant: &Restaurant, preferences: &Preferences) -> f64 {
        let matched = preferences
            .cuisines()
            .iter()
            .filter(|cuisine| restaurant.cuisines.contains(cuisine.as_str()))
            .count();
        matched as f64 * self.weights.cuisine_match
    }

    /// Rating distance from the floor; unrated records contribute nothing.
    #[expect(
        clippy::float_arithmetic,
        reason = "rating term scales the distance from the rating floor"
    )]
    fn rating_term(&self, restaurant: &Restaurant, preferences: &Preferences) -> f64 {
        restaurant
            .aggregate_rating
            .filter(|rating| rating.is_finite())
            .map_or(0.0, |rating| {
                (rating - preferences.min_rating()) * self.weights.rating_multiplier
            })
    }

    /// Affordability, floored at zero for anything beyond the budget span.
    #[expect(
        clippy::float_arithmetic,
        reason = "budget term decays linearly with cost"
    )]
    fn budget_term(&self, restaurant: &Restaurant, preferences: &Preferences) -> f64 {
        let ceiling = self.weights.budget_span * preferences.max_budget();
        let share = restaurant.average_cost_for_two / ceiling;
        (self.weights.budget_weight * (1.0 - share)).max(0.0)
    }
}

impl Scorer for WeightedScorer {
    fn score(&self, restaurant: &Restaurant, preferences: &Preferences) -> ScoreBreakdown {
        ScoreBreakdown {
            cuisine: self.cuisine_term(restaurant, preferences),
            rating: self.rating_term(restaurant, preferences),
            budget: self.budget_term(restaurant, preferences),
        }
    }
}
