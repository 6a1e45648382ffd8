//! Weighted-sum scorer driven by per-usage rules.

use configurator_core::{Product, Score, ScoredCandidate, Scorer, UsageProfile};
use log::trace;

use crate::ScorerConfig;
use crate::criteria::{price_fit, review_quality, spec_fit};
use crate::explain::{ExplainLimits, explain};

/// Per-criterion results behind a score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBreakdown {
    /// Closeness to the budget midpoint, `0.0..=100.0`.
    pub price_fit: f64,
    /// Weighted share of met thresholds, `0.0..=100.0`.
    pub spec_fit: f64,
    /// Confidence-adjusted rating, `0.0..=100.0`.
    pub reviews: f64,
    /// Blend of the three criteria before rounding.
    pub blended: f64,
}

impl ScoreBreakdown {
    /// Rounded, clamped score.
    #[must_use]
    pub fn score(&self) -> Score {
        Score::from_raw(self.blended)
    }
}

/// Scores products by blending price-fit, spec-fit and review quality with
/// the weights configured for the profile's usage.
///
/// # Examples
/// ```
/// use configurator_core::{Budget, Product, Rating, Scorer, SpecKey, Usage, UsageProfile};
/// use configurator_scorer::ProfileScorer;
///
/// let scorer = ProfileScorer::default();
/// let profile = UsageProfile::new(Usage::Office, Budget::new(300_000.0, 700_000.0).unwrap());
/// let product = Product::new("pc-1", "Tour Bureau", "office", 500_000)
///     .with_spec(SpecKey::Ram, 8)
///     .with_spec(SpecKey::Storage, 256)
///     .with_spec(SpecKey::CpuCores, 4)
///     .with_rating(Rating::new(5.0, 50))
///     .with_stock(10);
///
/// let candidate = scorer.score(&product, &profile);
/// assert_eq!(candidate.score.value(), 100);
/// assert!(candidate.cons.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ProfileScorer {
    config: ScorerConfig,
}

impl ProfileScorer {
    /// Build a scorer from a validated configuration.
    #[must_use]
    pub const fn new(config: ScorerConfig) -> Self {
        Self { config }
    }

    /// Build a scorer with the default weights and thresholds.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &ScorerConfig {
        &self.config
    }

    /// Evaluate each criterion for `product` without explanations.
    #[must_use]
    pub fn breakdown(&self, product: &Product, profile: &UsageProfile) -> ScoreBreakdown {
        let rules = self.config.rules(profile.usage());
        let price_fit = price_fit(product.price, profile.budget());
        let spec_fit = spec_fit(product, rules.thresholds(), profile);
        let reviews = review_quality(product.rating, self.config.min_reviews());
        let blended = rules.weights().blend(price_fit, spec_fit, reviews);
        ScoreBreakdown {
            price_fit,
            spec_fit,
            reviews,
            blended,
        }
    }
}

impl Scorer for ProfileScorer {
    fn score(&self, product: &Product, profile: &UsageProfile) -> ScoredCandidate {
        let usage = profile.usage();
        let breakdown = self.breakdown(product, profile);
        let score = breakdown.score();
        trace!(
            "scored {} for {usage}: price {:.1}, spec {:.1}, reviews {:.1} -> {score}",
            product.id, breakdown.price_fit, breakdown.spec_fit, breakdown.reviews
        );
        let explanation = explain(
            product,
            usage,
            self.config.rules(usage).thresholds(),
            ExplainLimits {
                min_reviews: self.config.min_reviews(),
                low_stock: self.config.low_stock(),
            },
        );
        ScoredCandidate {
            product: product.clone(),
            score,
            pros: explanation.pros,
            cons: explanation.cons,
        }
    }
}
