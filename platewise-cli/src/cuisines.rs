//! Cuisine vocabulary command.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::output::write_json;
use crate::source::{open_session, resolve_dataset};
use crate::{ARG_DATASET, CliError};

/// CLI arguments for the `cuisines` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Print the sorted list of individual cuisines offered \
                 across the dataset, suitable for autocomplete.",
    about = "List every cuisine offered in the dataset"
)]
#[ortho_config(prefix = "PLATEWISE")]
pub(crate) struct CuisinesArgs {
    /// Path to the restaurant CSV dataset.
    #[arg(long = ARG_DATASET, value_name = "path")]
    #[serde(default)]
    pub(crate) dataset: Option<Utf8PathBuf>,
}

impl CuisinesArgs {
    pub(crate) fn into_config(self) -> Result<CuisinesConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        Ok(CuisinesConfig {
            dataset: resolve_dataset(merged.dataset),
        })
    }
}

/// Resolved `cuisines` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CuisinesConfig {
    pub(crate) dataset: Utf8PathBuf,
}

pub(crate) fn run_cuisines(args: CuisinesArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_cuisines_with(args, &mut stdout)
}

pub(crate) fn run_cuisines_with(
    args: CuisinesArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    let session = open_session(&config.dataset)?;
    write_json(writer, &session.cuisines())
}
