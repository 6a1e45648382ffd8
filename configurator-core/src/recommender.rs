//! Requests, responses and the trait that turns one into the other.

use std::collections::BTreeMap;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Budget, InvalidProfile, ScoredCandidate, SpecKey, Usage, UsageProfile};

/// Parameters for a recommendation request.
///
/// Mirrors the JSON body sent by the storefront: `usage`, `budgetMin`,
/// `budgetMax`, optional `preferences` keyed by spec name and an optional
/// `limit` on the number of results.
///
/// # Examples
/// ```rust
/// use configurator_core::{RecommendRequest, Usage};
///
/// let request = RecommendRequest::new("office", 300_000.0, 700_000.0);
/// let profile = request.to_profile().unwrap();
/// assert_eq!(profile.usage(), Usage::Office);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct RecommendRequest {
    /// Requested usage name or alias.
    pub usage: String,
    /// Inclusive lower price bound in XOF.
    pub budget_min: f64,
    /// Inclusive upper price bound in XOF.
    pub budget_max: f64,
    /// Per-attribute importance in `0.0..=1.0`, keyed by spec name.
    #[cfg_attr(feature = "serde", serde(default))]
    pub preferences: BTreeMap<String, f32>,
    /// Maximum number of ranked results to return.
    #[cfg_attr(feature = "serde", serde(default))]
    pub limit: Option<u16>,
}

impl RecommendRequest {
    /// Construct a request without preferences or limit.
    #[must_use]
    pub fn new(usage: impl Into<String>, budget_min: f64, budget_max: f64) -> Self {
        Self {
            usage: usage.into(),
            budget_min,
            budget_max,
            preferences: BTreeMap::new(),
            limit: None,
        }
    }

    /// Validate the request and build the profile it describes.
    ///
    /// # Errors
    /// Returns [`InvalidProfile`] for an unknown usage, an invalid budget,
    /// an unknown preference key or an out-of-range preference weight.
    pub fn to_profile(&self) -> Result<UsageProfile, InvalidProfile> {
        let usage = Usage::from_str(&self.usage)
            .map_err(|_| InvalidProfile::UnknownUsage(self.usage.clone()))?;
        let budget = Budget::new(self.budget_min, self.budget_max)?;
        let mut profile = UsageProfile::new(usage, budget);
        for (name, weight) in &self.preferences {
            let key = SpecKey::from_str(name)
                .map_err(|_| InvalidProfile::UnknownPreference(name.clone()))?;
            profile.try_set_preference(key, *weight)?;
        }
        Ok(profile)
    }
}

/// How a recommendation run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
pub enum Outcome {
    /// At least one product passed the filter and was scored.
    Ranked,
    /// Nothing matched, even after budget widening. A normal empty state.
    NoResults,
}

/// Runtime information about a recommendation run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(rename_all = "camelCase"))]
pub struct Diagnostics {
    /// Whether any product matched.
    pub outcome: Outcome,
    /// Number of products that passed the filter and were scored.
    pub candidates_evaluated: u64,
    /// Widening steps applied before the filter found candidates.
    pub widening_steps: u32,
    /// Budget the returned candidates were filtered and scored against.
    pub effective_budget: Budget,
}

/// Response from a successful recommendation run.
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendResponse {
    /// Ranked candidates, best first.
    pub candidates: Vec<ScoredCandidate>,
    /// Runtime information.
    pub diagnostics: Diagnostics,
}

impl RecommendResponse {
    /// Report whether nothing was ranked.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Presentation cards in rank order.
    #[must_use]
    pub fn cards(&self) -> Vec<RecommendationCard> {
        self.candidates
            .iter()
            .map(RecommendationCard::from)
            .collect()
    }
}

/// The shape the storefront renders for each result.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct RecommendationCard {
    /// Catalogue identifier of the product.
    pub product_id: String,
    /// Integer fitness in `0..=100`.
    pub score: u8,
    /// Strengths for the requested usage.
    pub pros: Vec<String>,
    /// Weaknesses for the requested usage.
    pub cons: Vec<String>,
}

impl From<&ScoredCandidate> for RecommendationCard {
    fn from(candidate: &ScoredCandidate) -> Self {
        Self {
            product_id: candidate.product.id.clone(),
            score: candidate.score.value(),
            pros: candidate.pros.clone(),
            cons: candidate.cons.clone(),
        }
    }
}

/// Errors returned by [`Recommender::recommend`].
///
/// An empty result is not an error; see [`Outcome::NoResults`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecommendError {
    /// Request parameters were malformed or contradictory.
    #[error("invalid profile: {0}")]
    InvalidProfile(#[from] InvalidProfile),
}

/// Produce ranked product recommendations for a request.
///
/// Implementations validate the request before touching the catalogue and
/// return [`RecommendError::InvalidProfile`] rather than panicking.
/// Recommenders must be `Send + Sync` so hosts can share one across workers.
pub trait Recommender: Send + Sync {
    /// Run a request, producing ranked candidates or an error.
    ///
    /// # Errors
    /// Returns [`RecommendError::InvalidProfile`] when the request does not
    /// describe a valid profile.
    fn recommend(&self, request: &RecommendRequest) -> Result<RecommendResponse, RecommendError>;
}
