//! `PipelineRecommender`: Filter, then Score, then Rank.

use configurator_core::{
    Catalog, Diagnostics, Outcome, RecommendError, RecommendRequest, RecommendResponse,
    Recommender, Scorer,
};
use configurator_scorer::ProfileScorer;
use log::{debug, info};

use crate::filter::{FilterConfig, filter};
use crate::rank::rank_owned;

/// Recommender that runs the filter, scoring and ranking stages over an
/// injected catalogue.
///
/// The recommender holds no state between calls. Every request reads the
/// catalogue afresh.
///
/// # Examples
/// ```
/// use configurator_core::{MemoryCatalog, Outcome, Product, RecommendRequest, Recommender};
/// use configurator_pipeline::PipelineRecommender;
///
/// let catalog = MemoryCatalog::new(vec![
///     Product::new("a", "A", "office", 400_000),
///     Product::new("b", "B", "office", 650_000),
/// ])
/// .unwrap();
/// let recommender = PipelineRecommender::from_catalog(catalog);
///
/// let response = recommender
///     .recommend(&RecommendRequest::new("office", 300_000.0, 700_000.0))
///     .unwrap();
/// assert_eq!(response.diagnostics.outcome, Outcome::Ranked);
/// assert_eq!(response.candidates.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct PipelineRecommender<C, S = ProfileScorer>
where
    C: Catalog,
    S: Scorer,
{
    catalog: C,
    scorer: S,
    config: FilterConfig,
}

impl<C> PipelineRecommender<C>
where
    C: Catalog,
{
    /// Construct a recommender with the default scorer and filter settings.
    #[must_use]
    pub fn from_catalog(catalog: C) -> Self {
        Self::new(catalog, ProfileScorer::with_defaults())
    }
}

impl<C, S> PipelineRecommender<C, S>
where
    C: Catalog,
    S: Scorer,
{
    /// Construct a recommender using default filter settings.
    #[must_use]
    pub fn new(catalog: C, scorer: S) -> Self {
        Self::with_config(catalog, scorer, FilterConfig::default())
    }

    /// Construct a recommender with explicit filter settings.
    #[must_use]
    pub const fn with_config(catalog: C, scorer: S, config: FilterConfig) -> Self {
        Self {
            catalog,
            scorer,
            config,
        }
    }

    /// Filter settings in use.
    #[must_use]
    pub const fn config(&self) -> &FilterConfig {
        &self.config
    }
}

impl<C, S> Recommender for PipelineRecommender<C, S>
where
    C: Catalog + Send + Sync,
    S: Scorer,
{
    fn recommend(&self, request: &RecommendRequest) -> Result<RecommendResponse, RecommendError> {
        let profile = request.to_profile()?;
        let filtered = filter(&self.catalog, &profile, &self.config);
        let effective = profile.with_budget(filtered.effective_budget);

        let scored = filtered
            .products
            .iter()
            .map(|product| self.scorer.score(product, &effective))
            .collect::<Vec<_>>();
        let candidates_evaluated = scored.len() as u64;
        debug!("scored {candidates_evaluated} candidates for {}", profile.usage());

        let mut candidates = rank_owned(scored);
        if let Some(limit) = request.limit {
            candidates.truncate(usize::from(limit));
        }

        // A zero limit still counts as a match.
        let outcome = if candidates_evaluated == 0 {
            Outcome::NoResults
        } else {
            Outcome::Ranked
        };
        info!(
            "{} recommendation: {outcome:?} with {} of {candidates_evaluated} candidates after {} widening steps",
            profile.usage(),
            candidates.len(),
            filtered.widening_steps
        );

        Ok(RecommendResponse {
            candidates,
            diagnostics: Diagnostics {
                outcome,
                candidates_evaluated,
                widening_steps: filtered.widening_steps,
                effective_budget: filtered.effective_budget,
            },
        })
    }
}
