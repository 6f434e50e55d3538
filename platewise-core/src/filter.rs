//! Cuisine search over the denormalised `cuisines` field.

use std::collections::BTreeSet;

use crate::{MISSING_CUISINES, Restaurant, RestaurantSummary};

/// Result of a cuisine search.
///
/// An empty search is a normal outcome rather than an error; callers branch
/// on the variant to decide between rendering a table and a notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterOutcome {
    /// At least one restaurant serves the cuisine, in dataset order.
    Matches(Vec<RestaurantSummary>),
    /// Nothing matched; `message` is ready for display.
    NoMatches {
        /// Human-readable notice naming the cuisine.
        message: String,
    },
}

impl FilterOutcome {
    /// Return the matches, or `None` for an empty search.
    #[must_use]
    pub fn matches(&self) -> Option<&[RestaurantSummary]> {
        match self {
            Self::Matches(rows) => Some(rows),
            Self::NoMatches { .. } => None,
        }
    }
}

/// Find restaurants whose cuisine list contains `query`, ignoring case.
///
/// The query is a plain substring, so `"ind"` matches both `"indian"` and
/// `"indonesian"`.
///
/// # Examples
/// ```
/// use platewise_core::{FilterOutcome, Restaurant, filter_by_cuisine};
///
/// let rows = vec![Restaurant {
///     name: "Tasty Bites".into(),
///     cuisines: "italian, pizza".into(),
///     ..Restaurant::default()
/// }];
///
/// assert_eq!(filter_by_cuisine(&rows, "PIZZA").matches().map(<[_]>::len), Some(1));
/// assert_eq!(
///     filter_by_cuisine(&rows, "Sushi"),
///     FilterOutcome::NoMatches {
///         message: "No restaurants found serving sushi cuisine.".into()
///     }
/// );
/// ```
#[must_use]
pub fn filter_by_cuisine(restaurants: &[Restaurant], query: &str) -> FilterOutcome {
    let needle = query.to_lowercase();
    let matches: Vec<RestaurantSummary> = restaurants
        .iter()
        .filter(|restaurant| restaurant.cuisines.to_lowercase().contains(&needle))
        .map(Restaurant::summary)
        .collect();

    if matches.is_empty() {
        FilterOutcome::NoMatches {
            message: format!("No restaurants found serving {needle} cuisine."),
        }
    } else {
        FilterOutcome::Matches(matches)
    }
}

/// Collect the sorted set of individual cuisines offered across `restaurants`.
///
/// Tokens are trimmed and de-duplicated; the [`MISSING_CUISINES`] placeholder
/// is not a cuisine and is skipped.
#[must_use]
pub fn distinct_cuisines(restaurants: &[Restaurant]) -> Vec<String> {
    restaurants
        .iter()
        .flat_map(|restaurant| restaurant.cuisine_tokens())
        .filter(|token| *token != MISSING_CUISINES)
        .map(str::to_owned)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
