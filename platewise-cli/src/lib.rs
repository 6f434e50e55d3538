//! Command-line interface for the Platewise restaurant finder.
//!
//! Each subcommand loads the CSV dataset into a [`Session`], runs one
//! operation against it, and prints the result to stdout as pretty JSON.
//! Options are layered with `ortho_config`: defaults, configuration files,
//! `PLATEWISE_CMDS_*` environment variables, then command-line flags.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod cuisines;
mod error;
mod output;
mod predict;
mod recommend;
mod search;
mod session;
mod source;

pub use error::CliError;
pub use session::{HISTORY_LIMIT, Prediction, Session, star_rating};

use cuisines::{CuisinesArgs, run_cuisines};
use predict::{PredictArgs, run_predict};
use recommend::{RecommendArgs, run_recommend};
use search::{SearchArgs, run_search};

const DEFAULT_DATASET: &str = "dataset.csv";

const ARG_DATASET: &str = "dataset";
const ARG_SEARCH_CUISINE: &str = "cuisine";
const ARG_RECOMMEND_CUISINES: &str = "cuisines";
const ARG_RECOMMEND_MAX_BUDGET: &str = "max-budget";
const ARG_RECOMMEND_MIN_RATING: &str = "min-rating";
const ARG_RECOMMEND_LIMIT: &str = "limit";
const ARG_PREDICT_CUISINES: &str = "cuisines";
const ARG_PREDICT_CITY: &str = "city";
const ARG_PREDICT_COST: &str = "cost";
const ARG_PREDICT_TABLE_BOOKING: &str = "table-booking";
const ARG_PREDICT_ONLINE_DELIVERY: &str = "online-delivery";
const ARG_PREDICT_TREES: &str = "trees";
const ARG_PREDICT_SEED: &str = "seed";

const ENV_SEARCH_CUISINE: &str = "PLATEWISE_CMDS_SEARCH_CUISINE";
const ENV_RECOMMEND_MAX_BUDGET: &str = "PLATEWISE_CMDS_RECOMMEND_MAX_BUDGET";
const ENV_PREDICT_CUISINES: &str = "PLATEWISE_CMDS_PREDICT_CUISINES";
const ENV_PREDICT_CITY: &str = "PLATEWISE_CMDS_PREDICT_CITY";
const ENV_PREDICT_COST: &str = "PLATEWISE_CMDS_PREDICT_COST";

/// Run the Platewise CLI with the current process arguments and environment.
///
/// # Errors
/// Returns a [`CliError`] describing the first failure: argument parsing,
/// configuration layering, dataset loading, or the command itself.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Search(args) => run_search(args),
        Command::Cuisines(args) => run_cuisines(args),
        Command::Recommend(args) => run_recommend(args),
        Command::Predict(args) => run_predict(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "platewise",
    about = "Search, rank, and rate restaurants from a CSV dataset",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Find restaurants serving a cuisine.
    Search(SearchArgs),
    /// List every cuisine offered in the dataset.
    Cuisines(CuisinesArgs),
    /// Rank restaurants against cuisine, budget, and rating preferences.
    Recommend(RecommendArgs),
    /// Estimate the rating of a hypothetical restaurant.
    Predict(PredictArgs),
}

#[cfg(test)]
mod tests;
