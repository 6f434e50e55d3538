//! Raw CSV row layout.

use platewise_core::Restaurant;
use serde::Deserialize;

/// One dataset row as it appears on disk; extra columns are ignored.
#[derive(Debug, Deserialize)]
pub(crate) struct RawRecord {
    #[serde(rename = "Restaurant Name")]
    name: String,
    #[serde(rename = "Cuisines")]
    cuisines: Option<String>,
    #[serde(rename = "Address")]
    address: String,
    #[serde(rename = "City")]
    city: String,
    #[serde(rename = "Average Cost for two")]
    average_cost_for_two: f64,
    #[serde(rename = "Currency")]
    currency: String,
    #[serde(rename = "Has Table booking")]
    has_table_booking: String,
    #[serde(rename = "Has Online delivery")]
    has_online_delivery: String,
    #[serde(rename = "Aggregate rating")]
    aggregate_rating: Option<f64>,
}

impl From<RawRecord> for Restaurant {
    fn from(raw: RawRecord) -> Self {
        Self {
            cuisines: Self::normalise_cuisines(raw.cuisines.as_deref()),
            name: raw.name,
            address: raw.address,
            city: raw.city,
            average_cost_for_two: raw.average_cost_for_two,
            currency: raw.currency,
            has_table_booking: raw.has_table_booking,
            has_online_delivery: raw.has_online_delivery,
            aggregate_rating: raw.aggregate_rating,
        }
    }
}
