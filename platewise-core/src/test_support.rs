//! Deterministic restaurant fixtures shared by unit and behaviour tests.

use crate::Restaurant;

const CUISINES: [&str; 6] = [
    "north indian, mughlai",
    "italian, pizza",
    "cafe, desserts",
    "chinese",
    "japanese, sushi",
    "fast food, burger, pizza",
];
const CUISINE_BONUS: [f64; 6] = [0.2, 0.9, 0.5, -0.3, 1.1, -0.6];
const CITIES: [&str; 4] = ["New Delhi", "Gurgaon", "Noida", "Manila"];
const CITY_BONUS: [f64; 4] = [0.0, 0.3, -0.2, 0.6];

/// A small hand-written dataset covering every scoring branch.
///
/// Includes an unrated restaurant, one costing well above any typical budget,
/// and a record whose cuisines were missing upstream.
#[must_use]
pub fn sample_restaurants() -> Vec<Restaurant> {
    vec![
        restaurant("Tasty Bites", "italian, pizza", 40.0, Some(4.0)),
        restaurant("Curry House", "north indian, mughlai", 30.0, Some(3.6)),
        restaurant("Bean There", "cafe, desserts", 15.0, Some(4.4)),
        restaurant("Golden Wok", "chinese", 25.0, Some(3.1)),
        restaurant("Trattoria Nonna", "italian", 95.0, Some(4.7)),
        restaurant("Slice Society", "pizza, fast food", 20.0, Some(3.3)),
        restaurant("Mystery Diner", "cafe", 35.0, None),
        restaurant("Le Grand", "french, italian", 400.0, Some(4.9)),
        restaurant("Dosa Point", "south indian", 12.0, Some(2.4)),
        restaurant("Unknown Corner", crate::MISSING_CUISINES, 18.0, Some(0.0)),
        restaurant("Pasta & Co", "italian, cafe", 55.0, Some(3.9)),
        restaurant("Burger Barn", "fast food, burger", 22.0, Some(3.0)),
    ]
}

/// Generate `count` restaurants whose ratings follow a learnable pattern.
///
/// Ratings depend on primary cuisine, city, cost, and table booking, with a
/// small deterministic wobble, so a regression model fitted on the output
/// achieves a clearly positive validation score.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    clippy::indexing_slicing,
    clippy::integer_division,
    clippy::integer_division_remainder_used,
    reason = "fixture generation derives values from the row index"
)]
pub fn synthetic_restaurants(count: usize) -> Vec<Restaurant> {
    (0..count)
        .map(|index| {
            let cuisine = index % CUISINES.len();
            let city = (index / CUISINES.len()) % CITIES.len();
            let cost = 100.0 + ((index * 37) % 900) as f64;
            let booking = index % 3 == 0;
            let delivery = index % 2 == 0;
            let wobble = (((index * 7919) % 11) as f64 - 5.0) * 0.02;
            let rating = 2.0
                + CUISINE_BONUS[cuisine]
                + CITY_BONUS[city]
                + cost / 1000.0
                + if booking { 0.4 } else { 0.0 }
                + wobble;
            Restaurant {
                name: format!("Restaurant {index}"),
                cuisines: CUISINES[cuisine].to_owned(),
                address: format!("{index} High Street"),
                city: CITIES[city].to_owned(),
                average_cost_for_two: cost,
                currency: "Indian Rupees(Rs.)".to_owned(),
                has_table_booking: yes_no(booking).to_owned(),
                has_online_delivery: yes_no(delivery).to_owned(),
                aggregate_rating: Some(rating.clamp(0.0, 5.0)),
            }
        })
        .collect()
}

fn restaurant(name: &str, cuisines: &str, cost: f64, rating: Option<f64>) -> Restaurant {
    Restaurant {
        name: name.to_owned(),
        cuisines: cuisines.to_owned(),
        address: format!("1 {name} Lane"),
        city: "Springfield".to_owned(),
        average_cost_for_two: cost,
        currency: "$".to_owned(),
        has_table_booking: "No".to_owned(),
        has_online_delivery: "Yes".to_owned(),
        aggregate_rating: rating,
    }
}

const fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}
