//! Behaviour-driven step definitions driving the CLI subcommands end to end.

use super::helpers::DatasetFile;
use super::*;
use crate::cuisines::run_cuisines_with;
use crate::predict::run_predict_with;
use crate::recommend::run_recommend_with;
use crate::search::run_search_with;
use clap::Parser;
use platewise_core::test_support::{sample_restaurants, synthetic_restaurants};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use serde_json::Value;
use std::cell::RefCell;

struct CommandWorld {
    dataset: DatasetFile,
    stdout: RefCell<Vec<u8>>,
    result: RefCell<Option<Result<(), CliError>>>,
}

impl CommandWorld {
    fn new() -> Self {
        Self {
            dataset: DatasetFile::empty(),
            stdout: RefCell::new(Vec::new()),
            result: RefCell::new(None),
        }
    }

    fn run(&self, arguments: &[&str]) {
        let mut argv = vec!["platewise".to_owned()];
        argv.extend(arguments.iter().map(|argument| (*argument).to_owned()));
        argv.extend([format!("--{ARG_DATASET}"), self.dataset.path().to_string()]);

        let parsed = Cli::try_parse_from(argv).map_err(CliError::from);
        let mut buffer = self.stdout.borrow_mut();
        let outcome = parsed.and_then(|cli| match cli.command {
            Command::Search(args) => run_search_with(args, &mut *buffer),
            Command::Cuisines(args) => run_cuisines_with(args, &mut *buffer),
            Command::Recommend(args) => run_recommend_with(args, &mut *buffer),
            Command::Predict(args) => run_predict_with(args, &mut *buffer),
        });
        self.result.replace(Some(outcome));
    }

    fn output(&self) -> Value {
        let borrowed = self.result.borrow();
        let result = borrowed.as_ref().expect("result recorded");
        if let Err(err) = result {
            panic!("expected success, found {err:?}");
        }
        let stdout = String::from_utf8(self.stdout.borrow().clone()).expect("stdout utf-8");
        serde_json::from_str(&stdout).expect("output should be JSON")
    }
}

#[fixture]
fn world() -> CommandWorld {
    CommandWorld::new()
}

fn names(entries: &Value, pointer: &str) -> Vec<String> {
    entries
        .as_array()
        .expect("array output")
        .iter()
        .map(|entry| {
            entry
                .pointer(pointer)
                .and_then(Value::as_str)
                .expect("string field")
                .to_owned()
        })
        .collect()
}

#[given("the sample dataset on disk")]
fn sample_dataset(#[from(world)] world: &CommandWorld) {
    world.dataset.write(&sample_restaurants());
}

#[given("a synthetic dataset of 80 restaurants on disk")]
fn synthetic_dataset(#[from(world)] world: &CommandWorld) {
    world.dataset.write(&synthetic_restaurants(80));
}

#[given("no dataset file exists")]
fn no_dataset(#[from(world)] world: &CommandWorld) {
    let _ = world;
}

#[when("I search for pizza")]
fn search_pizza(#[from(world)] world: &CommandWorld) {
    world.run(&["search", "Pizza"]);
}

#[when("I search for sushi")]
fn search_sushi(#[from(world)] world: &CommandWorld) {
    world.run(&["search", "sushi"]);
}

#[when("I ask for three italian recommendations under 60")]
fn recommend_italian(#[from(world)] world: &CommandWorld) {
    world.run(&[
        "recommend",
        "--cuisines",
        "italian",
        "--max-budget",
        "60",
        "--limit",
        "3",
    ]);
}

#[when("I predict the rating of an italian restaurant in Manila")]
fn predict_italian(#[from(world)] world: &CommandWorld) {
    world.run(&[
        "predict",
        "--cuisines",
        "Italian, Pizza",
        "--city",
        "Manila",
        "--cost",
        "450",
        "--table-booking",
        "Yes",
        "--trees",
        "10",
    ]);
}

#[when("I list the cuisines")]
fn list_cuisines(#[from(world)] world: &CommandWorld) {
    world.run(&["cuisines"]);
}

#[then("two pizza restaurants are printed and the search is in the history")]
fn pizza_printed(#[from(world)] world: &CommandWorld) {
    let output = world.output();
    let matches = output.get("matches").expect("matches field");
    assert_eq!(names(matches, "/name"), ["Tasty Bites", "Slice Society"]);
    assert_eq!(output.get("message"), None);
    assert_eq!(
        output.get("history"),
        Some(&Value::from(vec!["pizza"]))
    );
}

#[then("no restaurants are printed and the notice names sushi")]
fn sushi_notice(#[from(world)] world: &CommandWorld) {
    let output = world.output();
    let matches = output.get("matches").expect("matches field");
    assert!(names(matches, "/name").is_empty());
    assert_eq!(
        output.get("message").and_then(Value::as_str),
        Some("No restaurants found serving sushi cuisine.")
    );
}

#[then("Tasty Bites leads three italian recommendations")]
fn italian_ranked(#[from(world)] world: &CommandWorld) {
    let output = world.output();
    assert_eq!(
        names(&output, "/restaurant/name"),
        ["Tasty Bites", "Pasta & Co", "Trattoria Nonna"]
    );
    assert!(
        names(&output, "/restaurant/cuisines")
            .iter()
            .all(|cuisines| cuisines.contains("italian"))
    );
}

#[then("a finite estimate is printed with its star rating and validation score")]
fn estimate_printed(#[from(world)] world: &CommandWorld) {
    let output = world.output();
    let estimate = output
        .get("estimate")
        .and_then(Value::as_f64)
        .expect("numeric estimate");
    assert!(estimate.is_finite());
    let stars = output
        .get("stars")
        .and_then(Value::as_u64)
        .expect("integer stars");
    assert_eq!(stars, u64::from(star_rating(estimate)));
    assert!(
        output
            .get("validation_score")
            .and_then(Value::as_f64)
            .is_some_and(f64::is_finite)
    );
}

#[then("the command fails because the dataset is missing")]
fn dataset_missing(#[from(world)] world: &CommandWorld) {
    let borrowed = world.result.borrow();
    let error = borrowed
        .as_ref()
        .expect("result recorded")
        .as_ref()
        .expect_err("expected error");
    match error {
        CliError::MissingSourceFile { field, path } => {
            assert_eq!(*field, ARG_DATASET);
            assert_eq!(path, world.dataset.path());
        }
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

macro_rules! register_command_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/commands.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: CommandWorld) {
            let _ = world;
        }
    };
}

register_command_scenario!(
    search_happy_path,
    "searching for a cuisine prints the matching restaurants"
);
register_command_scenario!(
    search_without_matches,
    "searching for an unknown cuisine prints a notice"
);
register_command_scenario!(
    recommend_happy_path,
    "recommending italian food under a budget"
);
register_command_scenario!(
    predict_happy_path,
    "predicting the rating of a new restaurant"
);
register_command_scenario!(
    missing_dataset,
    "listing cuisines without a dataset fails"
);
