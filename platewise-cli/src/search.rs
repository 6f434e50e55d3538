//! Search command implementation for the Platewise CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use platewise_core::{FilterOutcome, RestaurantSummary};
use serde::{Deserialize, Serialize};

use crate::output::write_json;
use crate::source::{open_session, resolve_dataset};
use crate::{ARG_DATASET, ARG_SEARCH_CUISINE, CliError, ENV_SEARCH_CUISINE};

/// CLI arguments for the `search` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Find restaurants whose cuisine list contains the given \
                 text, ignoring case. Matches are printed as JSON with the \
                 restaurant name, cuisines, and address.",
    about = "Find restaurants serving a cuisine"
)]
#[ortho_config(prefix = "PLATEWISE")]
pub(crate) struct SearchArgs {
    /// Cuisine to look for, e.g. "italian".
    #[arg(value_name = "cuisine")]
    #[serde(default)]
    pub(crate) cuisine: Option<String>,
    /// Path to the restaurant CSV dataset.
    #[arg(long = ARG_DATASET, value_name = "path")]
    #[serde(default)]
    pub(crate) dataset: Option<Utf8PathBuf>,
}

impl SearchArgs {
    pub(crate) fn into_config(self) -> Result<SearchConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        SearchConfig::try_from(merged)
    }
}

/// Resolved `search` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SearchConfig {
    pub(crate) cuisine: String,
    pub(crate) dataset: Utf8PathBuf,
}

impl TryFrom<SearchArgs> for SearchConfig {
    type Error = CliError;

    fn try_from(args: SearchArgs) -> Result<Self, Self::Error> {
        let cuisine = args
            .cuisine
            .filter(|cuisine| !cuisine.trim().is_empty())
            .ok_or(CliError::MissingArgument {
                field: ARG_SEARCH_CUISINE,
                env: ENV_SEARCH_CUISINE,
            })?;
        Ok(Self {
            cuisine,
            dataset: resolve_dataset(args.dataset),
        })
    }
}

/// JSON payload printed by `search`.
#[derive(Debug, Serialize)]
pub(crate) struct SearchReport {
    pub(crate) cuisine: String,
    pub(crate) matches: Vec<RestaurantSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) message: Option<String>,
    pub(crate) history: Vec<String>,
}

pub(crate) fn run_search(args: SearchArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_search_with(args, &mut stdout)
}

pub(crate) fn run_search_with(args: SearchArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    let mut session = open_session(&config.dataset)?;
    let (matches, message) = match session.search(&config.cuisine) {
        FilterOutcome::Matches(rows) => (rows, None),
        FilterOutcome::NoMatches { message } => (Vec::new(), Some(message)),
    };
    let report = SearchReport {
        cuisine: config.cuisine,
        matches,
        message,
        history: session.history().to_vec(),
    };
    write_json(writer, &report)
}
