#![expect(
    clippy::expect_used,
    reason = "tests should fail fast when setup breaks"
)]

//! Behavioural coverage for recommendation ranking.

use std::cell::RefCell;

use platewise_core::test_support::synthetic_restaurants;
use platewise_core::{Preferences, Restaurant};
use platewise_scorer::{ScoredRestaurant, recommend};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

/// Aggregate fixtures shared across the BDD scenarios.
pub struct TestContext {
    restaurants: RefCell<Vec<Restaurant>>,
    preferences: RefCell<Option<Preferences>>,
    ranked: RefCell<Vec<ScoredRestaurant>>,
}

#[fixture]
/// Build a fresh `TestContext` for each scenario run.
pub fn context() -> TestContext {
    TestContext {
        restaurants: RefCell::new(Vec::new()),
        preferences: RefCell::new(None),
        ranked: RefCell::new(Vec::new()),
    }
}

#[given("a restaurant serving italian and pizza for 40 rated 4.0")]
fn tasty_bites(context: &TestContext) {
    *context.restaurants.borrow_mut() = vec![Restaurant {
        name: "Tasty Bites".into(),
        cuisines: "italian, pizza".into(),
        average_cost_for_two: 40.0,
        currency: "$".into(),
        aggregate_rating: Some(4.0),
        ..Restaurant::default()
    }];
}

#[given("forty restaurants of varying cost")]
fn forty_restaurants(context: &TestContext) {
    *context.restaurants.borrow_mut() = synthetic_restaurants(40);
}

#[given("a diner who likes italian with a budget of 50 and a floor of 3.5")]
fn italian_diner(context: &TestContext) {
    set_preferences(context, &["italian"]);
}

#[given("a diner who likes italian and pizza with a budget of 50 and a floor of 3.5")]
fn italian_and_pizza_diner(context: &TestContext) {
    set_preferences(context, &["italian", "pizza"]);
}

#[when("I ask for recommendations")]
fn ask_for_recommendations(context: &TestContext) {
    let preferences = context.preferences.borrow();
    let ranked = recommend(
        &context.restaurants.borrow(),
        preferences.as_ref().expect("preferences must be set"),
    )
    .expect("ranking succeeds");
    *context.ranked.borrow_mut() = ranked;
}

#[then("the restaurant scores 52")]
fn scores_fifty_two(context: &TestContext) {
    assert_top_score(context, 52.0);
}

#[then("the restaurant scores 82")]
fn scores_eighty_two(context: &TestContext) {
    assert_top_score(context, 82.0);
}

#[then("ten restaurants are returned in descending score order")]
fn ten_in_order(context: &TestContext) {
    let ranked = context.ranked.borrow();
    assert_eq!(ranked.len(), 10);
    assert!(
        ranked
            .windows(2)
            .all(|pair| matches!(pair, [a, b] if a.total() >= b.total()))
    );
}

fn set_preferences(context: &TestContext, cuisines: &[&str]) {
    let preferences = Preferences::new(cuisines, 50.0, 3.5).expect("valid preferences");
    *context.preferences.borrow_mut() = Some(preferences);
}

#[expect(
    clippy::float_arithmetic,
    reason = "assertions compare floating point values"
)]
fn assert_top_score(context: &TestContext, expected: f64) {
    let ranked = context.ranked.borrow();
    let top = ranked.first().expect("one restaurant is ranked");
    assert!(
        (top.total() - expected).abs() < 1e-9,
        "expected {expected}, got {}",
        top.total()
    );
}

#[scenario(path = "tests/features/recommendation.feature", index = 0)]
fn worked_example(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/recommendation.feature", index = 1)]
fn additive_cuisine_bonus(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/recommendation.feature", index = 2)]
fn shortlist_is_capped(context: TestContext) {
    let _ = context;
}
