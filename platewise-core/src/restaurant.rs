//! Restaurant records and the projections derived from them.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Placeholder stored when a record arrives without any cuisines.
///
/// Upstream tabular loaders stringify missing cells, so the value is kept
/// verbatim rather than treated as absent.
pub const MISSING_CUISINES: &str = "nan";

/// A single row of the restaurant dataset.
///
/// `cuisines` is a comma-separated list that is always lowercase; use
/// [`Restaurant::normalise_cuisines`] when building records from raw input.
/// The booking and delivery fields keep the dataset's `"Yes"`/`"No"` text so
/// consumers decide how strictly to interpret them.
///
/// # Examples
/// ```
/// use platewise_core::Restaurant;
///
/// let restaurant = Restaurant {
///     name: "Tasty Bites".into(),
///     cuisines: Restaurant::normalise_cuisines(Some("Italian, Pizza")),
///     average_cost_for_two: 40.0,
///     aggregate_rating: Some(4.0),
///     ..Restaurant::default()
/// };
/// assert_eq!(restaurant.cuisines, "italian, pizza");
/// assert_eq!(restaurant.cuisine_tokens().count(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Restaurant {
    /// Display name.
    pub name: String,
    /// Lowercase, comma-separated cuisine list.
    pub cuisines: String,
    /// Street address.
    pub address: String,
    /// City the restaurant trades in.
    pub city: String,
    /// Typical bill for two diners, in `currency`.
    pub average_cost_for_two: f64,
    /// Currency label for `average_cost_for_two`.
    pub currency: String,
    /// Table booking availability, `"Yes"` or `"No"`.
    pub has_table_booking: String,
    /// Online delivery availability, `"Yes"` or `"No"`.
    pub has_online_delivery: String,
    /// Aggregate rating in `0.0..=5.0`, absent for unrated restaurants.
    pub aggregate_rating: Option<f64>,
}

impl Restaurant {
    /// Lowercase a raw cuisine cell, substituting [`MISSING_CUISINES`] for an
    /// absent or blank value.
    ///
    /// # Examples
    /// ```
    /// use platewise_core::{MISSING_CUISINES, Restaurant};
    ///
    /// assert_eq!(Restaurant::normalise_cuisines(Some("Sushi")), "sushi");
    /// assert_eq!(Restaurant::normalise_cuisines(None), MISSING_CUISINES);
    /// ```
    #[must_use]
    pub fn normalise_cuisines(raw: Option<&str>) -> String {
        match raw {
            Some(value) if !value.trim().is_empty() => value.to_lowercase(),
            _ => MISSING_CUISINES.to_owned(),
        }
    }

    /// Iterate over trimmed, non-empty cuisine tokens.
    pub fn cuisine_tokens(&self) -> impl Iterator<Item = &str> {
        self.cuisines
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
    }

    /// Project the record onto the fields the rating predictor consumes.
    #[must_use]
    pub fn profile(&self) -> RestaurantProfile {
        RestaurantProfile {
            cuisines: self.cuisines.clone(),
            city: self.city.clone(),
            average_cost_for_two: self.average_cost_for_two,
            has_table_booking: self.has_table_booking.clone(),
            has_online_delivery: self.has_online_delivery.clone(),
        }
    }

    /// Project the record onto its display fields.
    #[must_use]
    pub fn summary(&self) -> RestaurantSummary {
        RestaurantSummary {
            name: self.name.clone(),
            cuisines: self.cuisines.clone(),
            address: self.address.clone(),
        }
    }
}

/// Attributes describing a restaurant, real or hypothetical, for rating
/// prediction.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RestaurantProfile {
    /// Comma-separated cuisine list; the first entry is the primary cuisine.
    pub cuisines: String,
    /// City the restaurant trades in.
    pub city: String,
    /// Typical bill for two diners.
    pub average_cost_for_two: f64,
    /// Table booking availability, `"Yes"` or `"No"`.
    pub has_table_booking: String,
    /// Online delivery availability, `"Yes"` or `"No"`.
    pub has_online_delivery: String,
}

/// Display projection returned by the cuisine filter.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RestaurantSummary {
    /// Display name.
    pub name: String,
    /// Lowercase, comma-separated cuisine list.
    pub cuisines: String,
    /// Street address.
    pub address: String,
}
