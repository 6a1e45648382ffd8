//! Facade crate for the configurator recommendation engine.
//!
//! This crate re-exports the core domain types and exposes the default scorer
//! and the filter, score and rank pipeline behind feature flags.
//!
//! # Examples
//! ```
//! use configurator_engine::{
//!     MemoryCatalog, PipelineRecommender, Product, RecommendRequest, Recommender, SpecKey,
//! };
//!
//! let catalog = MemoryCatalog::new(vec![
//!     Product::new("pc-1", "Tour Bureau", "office", 400_000)
//!         .with_spec(SpecKey::Ram, 8)
//!         .with_stock(3),
//! ])?;
//! let recommender = PipelineRecommender::from_catalog(catalog);
//! let response = recommender.recommend(&RecommendRequest::new("office", 300_000.0, 700_000.0))?;
//!
//! let cards = response.cards();
//! assert_eq!(cards.first().map(|card| card.product_id.as_str()), Some("pc-1"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![forbid(unsafe_code)]

pub use configurator_core::{
    Budget, Catalog, Diagnostics, InvalidProfile, MemoryCatalog, Outcome, Product, ProductError,
    Rating, RecommendError, RecommendRequest, RecommendResponse, RecommendationCard, Recommender,
    Score, ScoredCandidate, Scorer, SpecKey, Specs, Usage, UsageProfile,
};

#[cfg(feature = "scorer")]
pub use configurator_scorer::{ProfileScorer, ScoreWeights, ScorerConfig, UsageRules};

#[cfg(feature = "pipeline")]
pub use configurator_pipeline::{FilterConfig, PipelineRecommender, WideningPolicy};
