//! Recommendation ranking for Platewise restaurants.
//!
//! The crate turns a diner's [`Preferences`] into an ordered shortlist:
//! - **Scoring** is handled by [`WeightedScorer`], which implements the
//!   [`Scorer`](platewise_core::Scorer) trait with a cuisine bonus, a rating
//!   term relative to the diner's floor, and a budget term.
//! - **Ranking** via [`recommend`] scores every record, sorts by descending
//!   total with ties kept in dataset order, and returns the top
//!   [`DEFAULT_LIMIT`] entries. [`recommend_with`] accepts any scorer and
//!   limit.
//!
//! Filtering is purely by score: expensive or poorly rated restaurants are
//! never excluded outright, they simply rank lower.
//!
//! # Examples
//!
//! ```
//! use platewise_core::{Preferences, Restaurant};
//! use platewise_scorer::recommend;
//!
//! let restaurants = vec![
//!     Restaurant { name: "A".into(), cuisines: "chinese".into(), ..Restaurant::default() },
//!     Restaurant { name: "B".into(), cuisines: "italian".into(), ..Restaurant::default() },
//! ];
//! let prefs = Preferences::new(["italian"], 50.0, 3.0).unwrap();
//! let ranked = recommend(&restaurants, &prefs).unwrap();
//! assert_eq!(ranked[0].restaurant.name, "B");
//! ```

#![forbid(unsafe_code)]

use log::debug;
use platewise_core::{Preferences, Restaurant, Scorer};

mod error;
mod types;
mod weighted;

pub use error::RecommendError;
pub use types::{RecommendationWeights, ScoredRestaurant};
pub use weighted::WeightedScorer;

/// Number of restaurants returned by [`recommend`].
pub const DEFAULT_LIMIT: usize = 10;

/// Rank `restaurants` for `preferences` with the default weights and limit.
///
/// # Errors
/// Returns [`RecommendError::InvalidCost`] when any record has a negative or
/// non-finite cost; no partial ranking is produced.
pub fn recommend(
    restaurants: &[Restaurant],
    preferences: &Preferences,
) -> Result<Vec<ScoredRestaurant>, RecommendError> {
    recommend_with(
        &WeightedScorer::default(),
        restaurants,
        preferences,
        DEFAULT_LIMIT,
    )
}

/// Rank `restaurants` with `scorer`, keeping at most `limit` entries.
///
/// Sorting is stable, so restaurants with equal totals keep their dataset
/// order.
///
/// # Errors
/// Returns [`RecommendError::InvalidCost`] when any record has a negative or
/// non-finite cost.
pub fn recommend_with<S>(
    scorer: &S,
    restaurants: &[Restaurant],
    preferences: &Preferences,
    limit: usize,
) -> Result<Vec<ScoredRestaurant>, RecommendError>
where
    S: Scorer + ?Sized,
{
    check_costs(restaurants)?;

    let mut ranked: Vec<(&Restaurant, _)> = restaurants
        .iter()
        .map(|restaurant| (restaurant, scorer.score(restaurant, preferences)))
        .collect();
    ranked.sort_by(|(_, left), (_, right)| right.total().total_cmp(&left.total()));
    ranked.truncate(limit);

    debug!(
        "ranked {} restaurants for {} preferred cuisines; kept {}",
        restaurants.len(),
        preferences.cuisines().len(),
        ranked.len()
    );

    Ok(ranked
        .into_iter()
        .map(|(restaurant, score)| ScoredRestaurant {
            restaurant: restaurant.clone(),
            score,
        })
        .collect())
}

fn check_costs(restaurants: &[Restaurant]) -> Result<(), RecommendError> {
    restaurants
        .iter()
        .enumerate()
        .find(|(_, restaurant)| {
            let cost = restaurant.average_cost_for_two;
            !cost.is_finite() || cost < 0.0
        })
        .map_or(Ok(()), |(row, restaurant)| {
            Err(RecommendError::InvalidCost {
                row,
                name: restaurant.name.clone(),
                cost: restaurant.average_cost_for_two,
            })
        })
}
