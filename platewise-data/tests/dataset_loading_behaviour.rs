#![expect(
    clippy::expect_used,
    reason = "tests should fail fast when setup breaks"
)]

//! Behavioural coverage for loading the restaurant dataset from disk.

use std::cell::RefCell;

use camino::Utf8PathBuf;
use platewise_core::{Column, Restaurant};
use platewise_data::{DatasetError, load_restaurants};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use tempfile::TempDir;

/// Temporary directory and load outcome shared by each scenario.
pub struct TestContext {
    dir: TempDir,
    path: RefCell<Option<Utf8PathBuf>>,
    outcome: RefCell<Option<Result<Vec<Restaurant>, DatasetError>>>,
}

#[fixture]
/// Build a fresh `TestContext` backed by its own temporary directory.
pub fn context() -> TestContext {
    TestContext {
        dir: TempDir::new().expect("tempdir"),
        path: RefCell::new(None),
        outcome: RefCell::new(None),
    }
}

fn write_dataset(context: &TestContext, contents: &str) {
    let root = Utf8PathBuf::from_path_buf(context.dir.path().to_path_buf()).expect("utf8 path");
    let path = root.join("dataset.csv");
    std::fs::write(&path, contents).expect("write dataset");
    *context.path.borrow_mut() = Some(path);
}

#[given("a dataset file with two restaurants")]
fn two_restaurants(context: &TestContext) {
    write_dataset(
        context,
        "Restaurant Name,Cuisines,Address,City,Average Cost for two,Currency,\
Has Table booking,Has Online delivery,Aggregate rating\n\
Tasty Bites,\"Italian, Pizza\",1 Main St,Manila,40,$,No,Yes,4.0\n\
Golden Wok,Chinese,2 Ring Rd,Manila,25,$,No,No,3.1\n",
    );
}

#[given("a dataset file without rating and city columns")]
fn missing_columns(context: &TestContext) {
    write_dataset(
        context,
        "Restaurant Name,Cuisines,Address,Average Cost for two,Currency,\
Has Table booking,Has Online delivery\n\
Tasty Bites,Italian,1 Main St,40,$,No,Yes\n",
    );
}

#[when("I load the dataset")]
fn load(context: &TestContext) {
    let path = context.path.borrow();
    let outcome = load_restaurants(path.as_ref().expect("dataset was written"));
    *context.outcome.borrow_mut() = Some(outcome);
}

#[then("two restaurants are loaded with lowercase cuisines")]
fn loaded(context: &TestContext) {
    let outcome = context.outcome.borrow();
    let restaurants = outcome
        .as_ref()
        .expect("load was attempted")
        .as_ref()
        .expect("dataset loads");
    let cuisines: Vec<&str> = restaurants
        .iter()
        .map(|restaurant| restaurant.cuisines.as_str())
        .collect();
    assert_eq!(cuisines, ["italian, pizza", "chinese"]);
}

#[then("loading fails naming City and Aggregate rating")]
fn rejected(context: &TestContext) {
    let outcome = context.outcome.borrow();
    let err = outcome
        .as_ref()
        .expect("load was attempted")
        .as_ref()
        .expect_err("columns are missing");
    let DatasetError::MissingColumns(missing) = err else {
        panic!("expected a missing-columns error, got {err:?}");
    };
    assert_eq!(missing.missing, [Column::City, Column::AggregateRating]);
    let message = err.to_string();
    assert!(message.contains("City") && message.contains("Aggregate rating"));
}

#[scenario(path = "tests/features/dataset_loading.feature", index = 0)]
fn well_formed_file(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/dataset_loading.feature", index = 1)]
fn missing_columns_rejected(context: TestContext) {
    let _ = context;
}
