//! Predict command implementation for the Platewise CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use platewise_core::{Restaurant, RestaurantProfile};
use platewise_predictor::PredictorConfig;
use serde::{Deserialize, Serialize};

use crate::output::write_json;
use crate::source::{open_session, resolve_dataset};
use crate::{
    ARG_DATASET, ARG_PREDICT_CITY, ARG_PREDICT_COST, ARG_PREDICT_CUISINES,
    ARG_PREDICT_ONLINE_DELIVERY, ARG_PREDICT_SEED, ARG_PREDICT_TABLE_BOOKING, ARG_PREDICT_TREES,
    CliError, ENV_PREDICT_CITY, ENV_PREDICT_COST, ENV_PREDICT_CUISINES,
};

const DEFAULT_FLAG: &str = "No";

/// CLI arguments for the `predict` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Train a random forest on the rated restaurants in the \
                 dataset and estimate the aggregate rating of a restaurant \
                 described by its cuisines, city, cost for two, and service \
                 flags. The estimate is printed with a star rounding and the \
                 model's validation R².",
    about = "Estimate the rating of a hypothetical restaurant"
)]
#[ortho_config(prefix = "PLATEWISE")]
pub(crate) struct PredictArgs {
    /// Comma-separated cuisines; the first one is the primary cuisine.
    #[arg(long = ARG_PREDICT_CUISINES, value_name = "list")]
    #[serde(default)]
    pub(crate) cuisines: Option<String>,
    /// City the restaurant operates in.
    #[arg(long = ARG_PREDICT_CITY, value_name = "name")]
    #[serde(default)]
    pub(crate) city: Option<String>,
    /// Average cost for two diners.
    #[arg(long = ARG_PREDICT_COST, value_name = "amount")]
    #[serde(default)]
    pub(crate) cost: Option<f64>,
    /// Whether tables can be booked: "Yes" or "No" (default "No").
    #[arg(long = ARG_PREDICT_TABLE_BOOKING, value_name = "flag")]
    #[serde(default)]
    pub(crate) table_booking: Option<String>,
    /// Whether online delivery is offered: "Yes" or "No" (default "No").
    #[arg(long = ARG_PREDICT_ONLINE_DELIVERY, value_name = "flag")]
    #[serde(default)]
    pub(crate) online_delivery: Option<String>,
    /// Number of trees in the forest (default 100).
    #[arg(long = ARG_PREDICT_TREES, value_name = "count")]
    #[serde(default)]
    pub(crate) trees: Option<usize>,
    /// Seed for the validation split and bootstrap sampling (default 42).
    #[arg(long = ARG_PREDICT_SEED, value_name = "seed")]
    #[serde(default)]
    pub(crate) seed: Option<u64>,
    /// Path to the restaurant CSV dataset.
    #[arg(long = ARG_DATASET, value_name = "path")]
    #[serde(default)]
    pub(crate) dataset: Option<Utf8PathBuf>,
}

impl PredictArgs {
    pub(crate) fn into_config(self) -> Result<PredictConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        PredictConfig::try_from(merged)
    }
}

/// Resolved `predict` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PredictConfig {
    pub(crate) profile: RestaurantProfile,
    pub(crate) predictor: PredictorConfig,
    pub(crate) dataset: Utf8PathBuf,
}

impl TryFrom<PredictArgs> for PredictConfig {
    type Error = CliError;

    fn try_from(args: PredictArgs) -> Result<Self, Self::Error> {
        let cuisines = args.cuisines.ok_or(CliError::MissingArgument {
            field: ARG_PREDICT_CUISINES,
            env: ENV_PREDICT_CUISINES,
        })?;
        let city = args.city.ok_or(CliError::MissingArgument {
            field: ARG_PREDICT_CITY,
            env: ENV_PREDICT_CITY,
        })?;
        let cost = args.cost.ok_or(CliError::MissingArgument {
            field: ARG_PREDICT_COST,
            env: ENV_PREDICT_COST,
        })?;

        let profile = RestaurantProfile {
            cuisines: Restaurant::normalise_cuisines(Some(cuisines.as_str())),
            city,
            average_cost_for_two: cost,
            has_table_booking: args
                .table_booking
                .unwrap_or_else(|| DEFAULT_FLAG.to_owned()),
            has_online_delivery: args
                .online_delivery
                .unwrap_or_else(|| DEFAULT_FLAG.to_owned()),
        };

        let mut predictor = PredictorConfig::default();
        if let Some(trees) = args.trees {
            predictor = predictor.with_n_estimators(trees);
        }
        if let Some(seed) = args.seed {
            predictor = predictor.with_seed(seed);
        }

        Ok(Self {
            profile,
            predictor,
            dataset: resolve_dataset(args.dataset),
        })
    }
}

pub(crate) fn run_predict(args: PredictArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_predict_with(args, &mut stdout)
}

pub(crate) fn run_predict_with(args: PredictArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    let mut session = open_session(&config.dataset)?.with_predictor_config(config.predictor);
    let prediction = session.predict(&config.profile)?;
    write_json(writer, &prediction)
}
