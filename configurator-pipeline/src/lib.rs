//! Recommendation pipeline for the PC configurator.
//!
//! [`PipelineRecommender`] implements
//! [`Recommender`](configurator_core::Recommender) by running three stages
//! over an injected [`Catalog`](configurator_core::Catalog):
//!
//! 1. [`filter`] keeps products inside the budget whose category suits the
//!    usage, widening the budget in bounded steps when nothing matches;
//! 2. a [`Scorer`](configurator_core::Scorer) scores each survivor against the
//!    effective budget;
//! 3. [`rank`] orders them by score, then by price, keeping catalogue order
//!    for exact ties.
//!
//! An empty result is reported as
//! [`Outcome::NoResults`](configurator_core::Outcome::NoResults), never as an
//! error.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
mod filter;
mod rank;
mod recommender;

pub use error::WideningPolicyError;
pub use filter::{
    CategoryCompatibility, FilterConfig, FilterOutcome, MAX_WIDENING_STEPS, WideningPolicy, filter,
};
pub use rank::{rank, rank_owned};
pub use recommender::PipelineRecommender;
