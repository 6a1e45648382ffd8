//! Command-line host for the configurator recommendation engine.
//!
//! The `recommend` subcommand reads a JSON catalogue and a JSON request,
//! runs the filter, score and rank pipeline, and prints recommendation
//! cards as JSON. Options layer from configuration files, environment
//! variables prefixed with `CONFIGURATOR_`, and command-line flags.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod fs;
mod recommend;

pub use error::CliError;

use recommend::{RecommendArgs, run_recommend};

const ARG_REQUEST: &str = "request";
const ARG_CATALOG: &str = "catalog";
const ARG_WIDENING_STEP: &str = "widening-step";
const ARG_MAX_WIDENINGS: &str = "max-widenings";
const ARG_MIN_REVIEWS: &str = "min-reviews";
const ARG_REQUIRE_IN_STOCK: &str = "require-in-stock";
const ENV_REQUEST: &str = "CONFIGURATOR_CMDS_RECOMMEND_REQUEST_PATH";
const ENV_CATALOG: &str = "CONFIGURATOR_CMDS_RECOMMEND_CATALOG";

/// Run the configurator CLI with the current process arguments and
/// environment.
///
/// # Errors
/// Returns [`CliError`] when arguments fail to parse, inputs are missing or
/// malformed, or the request is rejected.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Recommend(args) => run_recommend(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "configurator",
    about = "Rank storefront PCs for a usage and budget",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Recommend catalogue products for a JSON request.
    Recommend(RecommendArgs),
}

#[cfg(test)]
mod tests;
