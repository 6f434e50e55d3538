//! Feature engineering shared by `fit` and `predict`.
//!
//! Each record becomes four numeric features, in this column order, plus two
//! categorical ones that the target encoders turn into numbers:
//!
//! | Column | Source |
//! | ------ | ------ |
//! | 0 | `Average Cost for two`, unchanged |
//! | 1 | cuisine count: commas in `Cuisines` plus one |
//! | 2 | table booking flag: `"Yes"` is 1, `"No"` is 0 |
//! | 3 | online delivery flag, same mapping |
//!
//! The primary cuisine is the text before the first comma; secondary
//! cuisines are not modelled.

use platewise_core::{Column, Restaurant, RestaurantProfile};

use crate::PredictorError;

/// Number of numeric feature columns fed to the scaler.
pub const NUMERIC_FEATURES: usize = 4;

/// Total model columns: the numeric block followed by the encoded cuisine and
/// city.
pub const MODEL_FEATURES: usize = NUMERIC_FEATURES + 2;

/// Borrowed view over the fields the features are derived from.
#[derive(Debug, Clone, Copy)]
struct FeatureInput<'a> {
    cuisines: &'a str,
    city: &'a str,
    average_cost_for_two: f64,
    has_table_booking: &'a str,
    has_online_delivery: &'a str,
}

impl<'a> From<&'a Restaurant> for FeatureInput<'a> {
    fn from(restaurant: &'a Restaurant) -> Self {
        Self {
            cuisines: &restaurant.cuisines,
            city: &restaurant.city,
            average_cost_for_two: restaurant.average_cost_for_two,
            has_table_booking: &restaurant.has_table_booking,
            has_online_delivery: &restaurant.has_online_delivery,
        }
    }
}

impl<'a> From<&'a RestaurantProfile> for FeatureInput<'a> {
    fn from(profile: &'a RestaurantProfile) -> Self {
        Self {
            cuisines: &profile.cuisines,
            city: &profile.city,
            average_cost_for_two: profile.average_cost_for_two,
            has_table_booking: &profile.has_table_booking,
            has_online_delivery: &profile.has_online_delivery,
        }
    }
}

/// Engineered features for one record.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRow {
    /// Numeric block in scaler column order.
    pub numeric: [f64; NUMERIC_FEATURES],
    /// Text before the first comma of the cuisine list.
    pub primary_cuisine: String,
    /// City, unchanged.
    pub city: String,
}

impl FeatureRow {
    /// Engineer the features of a restaurant record.
    ///
    /// `row` is reported in errors.
    ///
    /// # Errors
    /// Returns [`PredictorError::UnrecognizedValue`] for a booking or delivery
    /// flag other than `"Yes"` or `"No"`, and
    /// [`PredictorError::NonFiniteValue`] for a NaN or infinite cost.
    ///
    /// # Examples
    /// ```
    /// use platewise_core::RestaurantProfile;
    /// use platewise_predictor::FeatureRow;
    ///
    /// let profile = RestaurantProfile {
    ///     cuisines: "italian, pizza, cafe".into(),
    ///     city: "Manila".into(),
    ///     average_cost_for_two: 800.0,
    ///     has_table_booking: "Yes".into(),
    ///     has_online_delivery: "No".into(),
    /// };
    /// let row = FeatureRow::from_profile(&profile, 0).unwrap();
    /// assert_eq!(row.numeric, [800.0, 3.0, 1.0, 0.0]);
    /// assert_eq!(row.primary_cuisine, "italian");
    /// ```
    pub fn from_restaurant(restaurant: &Restaurant, row: usize) -> Result<Self, PredictorError> {
        Self::engineer(FeatureInput::from(restaurant), row)
    }

    /// Engineer the features of a hypothetical profile.
    ///
    /// # Errors
    /// As for [`FeatureRow::from_restaurant`].
    pub fn from_profile(profile: &RestaurantProfile, row: usize) -> Result<Self, PredictorError> {
        Self::engineer(FeatureInput::from(profile), row)
    }

    fn engineer(input: FeatureInput<'_>, row: usize) -> Result<Self, PredictorError> {
        let cost = input.average_cost_for_two;
        if !cost.is_finite() {
            return Err(PredictorError::NonFiniteValue {
                field: Column::AverageCostForTwo.header(),
                value: cost,
                row,
            });
        }
        let booking = yes_no_flag(Column::HasTableBooking, input.has_table_booking, row)?;
        let delivery = yes_no_flag(Column::HasOnlineDelivery, input.has_online_delivery, row)?;

        Ok(Self {
            numeric: [cost, cuisine_count(input.cuisines), booking, delivery],
            primary_cuisine: primary_cuisine(input.cuisines).to_owned(),
            city: input.city.to_owned(),
        })
    }
}

/// Commas plus one, so an empty list still counts as one cuisine.
fn cuisine_count(cuisines: &str) -> f64 {
    let commas = cuisines.matches(',').count();
    let count = u32::try_from(commas).unwrap_or(u32::MAX).saturating_add(1);
    f64::from(count)
}

fn primary_cuisine(cuisines: &str) -> &str {
    cuisines.split(',').next().unwrap_or(cuisines)
}

fn yes_no_flag(column: Column, value: &str, row: usize) -> Result<f64, PredictorError> {
    match value {
        "Yes" => Ok(1.0),
        "No" => Ok(0.0),
        other => Err(PredictorError::UnrecognizedValue {
            field: column.header(),
            value: other.to_owned(),
            row,
        }),
    }
}
