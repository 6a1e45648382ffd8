//! Core domain types for the PC configurator recommendation engine.
//!
//! These models validate at construction so the filter, scoring and ranking
//! stages can stay total functions. Constructors return `Result` to surface
//! invalid shopper input or catalogue faults early.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod catalog;
pub mod product;
pub mod profile;
mod recommender;
pub mod score;
pub mod scorer;
pub mod spec;
#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;
pub mod usage;

pub use catalog::{Catalog, MemoryCatalog};
pub use product::{MAX_RATING, Product, ProductError, Rating};
pub use profile::{Budget, InvalidProfile, UsageProfile};
pub use recommender::{
    Diagnostics, Outcome, RecommendError, RecommendRequest, RecommendResponse,
    RecommendationCard, Recommender,
};
pub use score::{Score, ScoredCandidate};
pub use scorer::Scorer;
pub use spec::{SpecKey, Specs};
pub use usage::Usage;
