//! Unit tests covering session state: history, lazy training, and stars.

use super::*;
use platewise_core::test_support::{sample_restaurants, synthetic_restaurants};
use platewise_core::{FilterOutcome, Preferences, Restaurant};
use platewise_predictor::{PredictorConfig, PredictorError};
use rstest::{fixture, rstest};

#[fixture]
fn session() -> Session {
    Session::new(sample_restaurants())
}

fn quick_config() -> PredictorConfig {
    PredictorConfig::default().with_n_estimators(10)
}

#[rstest]
fn search_records_each_query_once(mut session: Session) {
    let outcome = session.search("Pizza");
    let names: Vec<&str> = outcome
        .matches()
        .expect("pizza is served")
        .iter()
        .map(|summary| summary.name.as_str())
        .collect();
    assert_eq!(names, ["Tasty Bites", "Slice Society"]);

    session.search(" pizza ");
    session.search("cafe");
    session.search("   ");
    assert_eq!(session.history(), ["pizza", "cafe"]);
}

#[rstest]
fn padded_queries_match_like_their_history_entry(mut session: Session) {
    let outcome = session.search("  pizza  ");
    let names: Vec<&str> = outcome
        .matches()
        .expect("pizza is served")
        .iter()
        .map(|summary| summary.name.as_str())
        .collect();
    assert_eq!(names, ["Tasty Bites", "Slice Society"]);
    assert_eq!(session.history(), ["pizza"]);

    assert_eq!(
        session.search(" Sushi\t"),
        FilterOutcome::NoMatches {
            message: "No restaurants found serving sushi cuisine.".to_owned(),
        }
    );
}

#[rstest]
fn history_keeps_the_five_most_recent_queries(mut session: Session) {
    for query in ["italian", "cafe", "chinese", "pizza", "burger", "sushi"] {
        session.search(query);
    }
    session.search("cafe");
    assert_eq!(
        session.history(),
        ["cafe", "chinese", "pizza", "burger", "sushi"]
    );
    assert_eq!(session.history().len(), HISTORY_LIMIT);
}

#[rstest]
fn unmatched_searches_are_still_recorded(mut session: Session) {
    let outcome = session.search("Sushi");
    assert!(outcome.matches().is_none());
    assert_eq!(session.history(), ["sushi"]);
}

#[rstest]
fn cuisines_skip_the_missing_marker(session: Session) {
    let cuisines = session.cuisines();
    assert!(cuisines.contains(&"italian".to_owned()));
    assert!(!cuisines.contains(&platewise_core::MISSING_CUISINES.to_owned()));
    assert!(cuisines.windows(2).all(|pair| pair.first() < pair.get(1)));
}

#[rstest]
fn recommend_honours_the_limit(session: Session) {
    let prefs = Preferences::new(["italian"], 60.0, 0.0).expect("valid preferences");
    let ranked = session.recommend(&prefs, 3).expect("costs are valid");
    let names: Vec<&str> = ranked
        .iter()
        .map(|entry| entry.restaurant.name.as_str())
        .collect();
    assert_eq!(names, ["Tasty Bites", "Pasta & Co", "Trattoria Nonna"]);
}

#[rstest]
fn predict_trains_once_on_rated_records() {
    let mut restaurants = synthetic_restaurants(80);
    restaurants.push(Restaurant {
        aggregate_rating: None,
        ..synthetic_restaurants(1).remove(0)
    });
    let profile = restaurants.first().expect("rows").profile();
    let mut session = Session::new(restaurants).with_predictor_config(quick_config());
    assert_eq!(session.validation_score(), None);

    let first = session.predict(&profile).expect("model trains");
    let score = session.validation_score().expect("trained");
    assert!(first.estimate.is_finite());
    assert_eq!(first.validation_score, score);
    assert_eq!(first.stars, star_rating(first.estimate));

    let second = session.predict(&profile).expect("model is reused");
    assert_eq!(second, first);
    assert_eq!(session.validation_score(), Some(score));
}

#[rstest]
fn failed_training_leaves_the_session_untrained() {
    let unrated: Vec<Restaurant> = synthetic_restaurants(3)
        .into_iter()
        .map(|restaurant| Restaurant {
            aggregate_rating: None,
            ..restaurant
        })
        .collect();
    let profile = unrated.first().expect("rows").profile();
    let mut session = Session::new(unrated).with_predictor_config(quick_config());

    let err = session.predict(&profile).expect_err("nothing to learn from");
    assert_eq!(err, PredictorError::InsufficientData { rows: 0 });
    assert_eq!(session.validation_score(), None);
}

#[rstest]
fn unrecognised_flags_are_reported_after_training() {
    let restaurants = synthetic_restaurants(60);
    let mut profile = restaurants.first().expect("rows").profile();
    profile.has_table_booking = "Maybe".to_owned();
    let mut session = Session::new(restaurants).with_predictor_config(quick_config());

    let err = session.predict(&profile).expect_err("flag is not Yes or No");
    assert!(
        matches!(err, PredictorError::UnrecognizedValue { ref value, .. } if value == "Maybe"),
        "{err:?}"
    );
    assert!(session.validation_score().is_some());
}

#[rstest]
#[case(3.6, 4)]
#[case(3.4, 3)]
#[case(2.5, 3)]
#[case(0.2, 0)]
#[case(5.0, 5)]
#[case(7.2, 5)]
#[case(-1.0, 0)]
#[case(f64::NAN, 0)]
fn star_rating_rounds_and_clamps(#[case] estimate: f64, #[case] expected: u8) {
    assert_eq!(star_rating(estimate), expected);
}
