//! Recommend command implementation for the configurator CLI.

use std::io::{BufReader, Write};

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use configurator_core::{
    MemoryCatalog, Outcome, Product, RecommendRequest, RecommendResponse, Recommender,
};
use configurator_pipeline::{
    CategoryCompatibility, FilterConfig, PipelineRecommender, WideningPolicy,
};
use configurator_scorer::{ProfileScorer, ScorerConfig};
use log::info;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::fs::{file_is_file, open_utf8_file};
use crate::{
    ARG_CATALOG, ARG_MAX_WIDENINGS, ARG_MIN_REVIEWS, ARG_REQUEST, ARG_REQUIRE_IN_STOCK,
    ARG_WIDENING_STEP, CliError, ENV_CATALOG, ENV_REQUEST,
};

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Rank catalogue products for a shopper's usage and budget. \
                 The catalogue is a JSON array of products and the request \
                 is a JSON object with usage, budgetMin and budgetMax. \
                 Ranked cards are printed to stdout as JSON.",
    about = "Recommend products for a usage and budget"
)]
#[ortho_config(prefix = "CONFIGURATOR")]
pub(crate) struct RecommendArgs {
    /// Path to a JSON file containing the recommendation request.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Path to the JSON product catalogue.
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Fraction of each budget bound added per widening step.
    #[arg(long = ARG_WIDENING_STEP, value_name = "ratio")]
    #[serde(default)]
    pub(crate) widening_step: Option<f64>,
    /// Maximum number of widening steps when nothing matches.
    #[arg(long = ARG_MAX_WIDENINGS, value_name = "count")]
    #[serde(default)]
    pub(crate) max_widenings: Option<u32>,
    /// Reviews needed before a rating counts at full strength.
    #[arg(long = ARG_MIN_REVIEWS, value_name = "count")]
    #[serde(default)]
    pub(crate) min_reviews: Option<u32>,
    /// Exclude products that are out of stock.
    #[arg(
        long = ARG_REQUIRE_IN_STOCK,
        value_name = "bool",
        num_args = 0..=1,
        default_missing_value = "true"
    )]
    #[serde(default)]
    pub(crate) require_in_stock: Option<bool>,
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
    /// Path to the JSON request file.
    pub(crate) request_path: Utf8PathBuf,
    /// Path to the JSON catalogue.
    pub(crate) catalog: Utf8PathBuf,
    /// Budget widening policy.
    pub(crate) widening: WideningPolicy,
    /// Scoring rules.
    pub(crate) scorer: ScorerConfig,
    /// Whether out-of-stock products are dropped.
    pub(crate) require_in_stock: bool,
}

impl RecommendConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.request_path, ARG_REQUEST)?;
        Self::require_existing(&self.catalog, ARG_CATALOG)?;
        Ok(())
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    fn filter_config(&self) -> FilterConfig {
        FilterConfig {
            compatibility: CategoryCompatibility::default(),
            widening: self.widening,
            require_in_stock: self.require_in_stock,
        }
    }
}

impl TryFrom<RecommendArgs> for RecommendConfig {
    type Error = CliError;

    fn try_from(args: RecommendArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_REQUEST,
            env: ENV_REQUEST,
        })?;
        let catalog = args.catalog.ok_or(CliError::MissingArgument {
            field: ARG_CATALOG,
            env: ENV_CATALOG,
        })?;

        let defaults = WideningPolicy::default();
        let widening = WideningPolicy::new(
            args.widening_step.unwrap_or_else(|| defaults.step_ratio()),
            args.max_widenings.unwrap_or_else(|| defaults.max_steps()),
        )?;

        let mut scorer = ScorerConfig::default();
        if let Some(min_reviews) = args.min_reviews {
            scorer = scorer.with_min_reviews(min_reviews);
        }

        Ok(Self {
            request_path,
            catalog,
            widening,
            scorer,
            require_in_stock: args.require_in_stock.unwrap_or(false),
        })
    }
}

pub(super) fn run_recommend(args: RecommendArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_recommend_with(args, &mut stdout)
}

pub(super) fn run_recommend_with(
    args: RecommendArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = resolve_recommend_config(args)?;
    let response = execute_recommend(&config)?;
    write_cards(writer, &response)
}

fn resolve_recommend_config(args: RecommendArgs) -> Result<RecommendConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

pub(super) fn execute_recommend(config: &RecommendConfig) -> Result<RecommendResponse, CliError> {
    let catalog = load_catalog(&config.catalog)?;
    let request = load_request(&config.request_path)?;
    let recommender = PipelineRecommender::with_config(
        catalog,
        ProfileScorer::new(config.scorer.clone()),
        config.filter_config(),
    );
    let response = recommender
        .recommend(&request)
        .map_err(|source| CliError::Recommend {
            path: config.request_path.clone(),
            source,
        })?;
    if response.diagnostics.outcome == Outcome::NoResults {
        info!(
            "no products matched {} within [{:.0}, {:.0}] XOF",
            request.usage,
            response.diagnostics.effective_budget.min(),
            response.diagnostics.effective_budget.max()
        );
    }
    Ok(response)
}

/// Loads and validates a JSON catalogue from disk.
pub(super) fn load_catalog(path: &Utf8Path) -> Result<MemoryCatalog, CliError> {
    let products: Vec<Product> = load_json(path, ARG_CATALOG)?;
    MemoryCatalog::new(products).map_err(|source| CliError::InvalidCatalog {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads a JSON-encoded [`RecommendRequest`] from disk.
pub(super) fn load_request(path: &Utf8Path) -> Result<RecommendRequest, CliError> {
    load_json(path, ARG_REQUEST)
}

fn load_json<T: DeserializeOwned>(path: &Utf8Path, field: &'static str) -> Result<T, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenInput {
        field,
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParseInput {
        field,
        path: path.to_path_buf(),
        source,
    })
}

fn write_cards(writer: &mut dyn Write, response: &RecommendResponse) -> Result<(), CliError> {
    let payload =
        serde_json::to_string_pretty(&response.cards()).map_err(CliError::SerialiseCards)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RecommendConfig, CliError> {
    let merged = RecommendArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RecommendConfig::try_from(merged)
}
