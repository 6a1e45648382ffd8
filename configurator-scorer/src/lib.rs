//! Weighted-sum scoring for PC configurator recommendations.
//!
//! [`ProfileScorer`] implements [`Scorer`](configurator_core::Scorer) by
//! blending three criteria, each normalised to `0.0..=100.0`:
//! - **price-fit**: closeness of the price to the centre of the budget;
//! - **spec-fit**: the weighted share of usage thresholds the product meets,
//!   with profile preferences overriding threshold weights;
//! - **review quality**: the star rating scaled to 100 and pulled toward a
//!   neutral 50 when there are few reviews.
//!
//! Blend weights and thresholds are set per usage in [`ScorerConfig`]. Every
//! candidate also carries pros and cons explaining its score.
//!
//! # Examples
//!
//! ```
//! use configurator_core::{Budget, Product, Scorer, SpecKey, Usage, UsageProfile};
//! use configurator_scorer::ProfileScorer;
//!
//! let scorer = ProfileScorer::with_defaults();
//! let profile = UsageProfile::new(Usage::Gaming, Budget::new(600_000.0, 1_000_000.0).unwrap());
//! let rig = Product::new("rig", "Rig", "gaming", 800_000).with_spec(SpecKey::GpuMemory, 8);
//! let candidate = scorer.score(&rig, &profile);
//! assert!(candidate.pros.iter().any(|pro| pro.contains("graphics memory")));
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod config;
pub mod criteria;
mod error;
mod explain;
mod profile_scorer;
mod weights;

pub use config::{
    DEFAULT_LOW_STOCK, DEFAULT_MIN_REVIEWS, ScorerConfig, SpecThreshold, UsageRules,
    default_thresholds,
};
pub use error::ScorerConfigError;
pub use explain::{HIGH_RATING, LOW_RATING};
pub use profile_scorer::{ProfileScorer, ScoreBreakdown};
pub use weights::{ScoreWeights, WEIGHT_SUM_TOLERANCE};
