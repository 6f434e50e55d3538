//! Recommend command implementation for the Platewise CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use platewise_core::{MIN_RATING, Preferences};
use platewise_scorer::DEFAULT_LIMIT;
use serde::{Deserialize, Serialize};

use crate::output::write_json;
use crate::source::{open_session, resolve_dataset};
use crate::{
    ARG_DATASET, ARG_RECOMMEND_CUISINES, ARG_RECOMMEND_LIMIT, ARG_RECOMMEND_MAX_BUDGET,
    ARG_RECOMMEND_MIN_RATING, CliError, ENV_RECOMMEND_MAX_BUDGET,
};

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Score every restaurant against preferred cuisines, a \
                 budget for two, and a minimum rating, then print the \
                 highest scoring entries with their score breakdown. \
                 Nothing is excluded outright; poor matches rank lower.",
    about = "Rank restaurants against diner preferences"
)]
#[ortho_config(prefix = "PLATEWISE")]
pub(crate) struct RecommendArgs {
    /// Comma-separated preferred cuisines, e.g. "italian,cafe".
    #[arg(long = ARG_RECOMMEND_CUISINES, value_name = "list")]
    #[serde(default)]
    pub(crate) cuisines: Option<String>,
    /// Maximum budget for two diners.
    #[arg(long = ARG_RECOMMEND_MAX_BUDGET, value_name = "amount")]
    #[serde(default)]
    pub(crate) max_budget: Option<f64>,
    /// Minimum acceptable rating on the 0 to 5 scale (default 0).
    #[arg(long = ARG_RECOMMEND_MIN_RATING, value_name = "rating")]
    #[serde(default)]
    pub(crate) min_rating: Option<f64>,
    /// Number of restaurants to print (default 10).
    #[arg(long = ARG_RECOMMEND_LIMIT, value_name = "count")]
    #[serde(default)]
    pub(crate) limit: Option<usize>,
    /// Path to the restaurant CSV dataset.
    #[arg(long = ARG_DATASET, value_name = "path")]
    #[serde(default)]
    pub(crate) dataset: Option<Utf8PathBuf>,
}

impl RecommendArgs {
    pub(crate) fn into_config(self) -> Result<RecommendConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RecommendConfig::try_from(merged)
    }
}

/// Resolved `recommend` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RecommendConfig {
    pub(crate) preferences: Preferences,
    pub(crate) limit: usize,
    pub(crate) dataset: Utf8PathBuf,
}

impl TryFrom<RecommendArgs> for RecommendConfig {
    type Error = CliError;

    fn try_from(args: RecommendArgs) -> Result<Self, Self::Error> {
        let max_budget = args.max_budget.ok_or(CliError::MissingArgument {
            field: ARG_RECOMMEND_MAX_BUDGET,
            env: ENV_RECOMMEND_MAX_BUDGET,
        })?;
        let cuisines = args.cuisines.unwrap_or_default();
        let preferences = Preferences::new(
            cuisines.split(','),
            max_budget,
            args.min_rating.unwrap_or(MIN_RATING),
        )?;
        Ok(Self {
            preferences,
            limit: args.limit.unwrap_or(DEFAULT_LIMIT),
            dataset: resolve_dataset(args.dataset),
        })
    }
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_recommend_with(args, &mut stdout)
}

pub(crate) fn run_recommend_with(
    args: RecommendArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    let session = open_session(&config.dataset)?;
    let ranked = session.recommend(&config.preferences, config.limit)?;
    write_json(writer, &ranked)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RecommendConfig, CliError> {
    let merged = RecommendArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RecommendConfig::try_from(merged)
}
