//! Scoring rules per usage: blend weights and spec thresholds.
#![forbid(unsafe_code)]

use std::collections::BTreeSet;

use configurator_core::{SpecKey, Usage};

use crate::{ScoreWeights, ScorerConfigError};

/// Reviews needed before a rating counts at full strength.
pub const DEFAULT_MIN_REVIEWS: u32 = 10;
/// Stock level at or below which a "only N left" con is emitted.
pub const DEFAULT_LOW_STOCK: u32 = 3;

/// A minimum value an attribute should reach for a usage.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SpecThreshold {
    /// Attribute being checked.
    pub key: SpecKey,
    /// Smallest value that meets the recommendation.
    pub minimum: u32,
    /// Importance of this attribute within spec-fit, unless the profile
    /// supplies a preference for it.
    pub weight: f64,
}

impl SpecThreshold {
    /// Construct a threshold.
    #[must_use]
    pub const fn new(key: SpecKey, minimum: u32, weight: f64) -> Self {
        Self {
            key,
            minimum,
            weight,
        }
    }

    const fn has_valid_weight(&self) -> bool {
        self.weight.is_finite() && self.weight >= 0.0
    }
}

const GAMING_THRESHOLDS: [SpecThreshold; 4] = [
    SpecThreshold::new(SpecKey::Ram, 16, 0.30),
    SpecThreshold::new(SpecKey::GpuMemory, 6, 0.35),
    SpecThreshold::new(SpecKey::CpuCores, 6, 0.20),
    SpecThreshold::new(SpecKey::Storage, 512, 0.15),
];

const OFFICE_THRESHOLDS: [SpecThreshold; 3] = [
    SpecThreshold::new(SpecKey::Ram, 8, 0.40),
    SpecThreshold::new(SpecKey::Storage, 256, 0.35),
    SpecThreshold::new(SpecKey::CpuCores, 4, 0.25),
];

const CREATIVE_THRESHOLDS: [SpecThreshold; 4] = [
    SpecThreshold::new(SpecKey::Ram, 32, 0.30),
    SpecThreshold::new(SpecKey::CpuCores, 8, 0.30),
    SpecThreshold::new(SpecKey::Storage, 1000, 0.20),
    SpecThreshold::new(SpecKey::GpuMemory, 4, 0.20),
];

/// Default spec thresholds for `usage`.
#[must_use]
pub fn default_thresholds(usage: Usage) -> Vec<SpecThreshold> {
    match usage {
        Usage::Gaming => GAMING_THRESHOLDS.to_vec(),
        Usage::Office => OFFICE_THRESHOLDS.to_vec(),
        Usage::Creative => CREATIVE_THRESHOLDS.to_vec(),
    }
}

/// Weights and thresholds for a single usage.
#[derive(Debug, Clone, PartialEq)]
pub struct UsageRules {
    weights: ScoreWeights,
    thresholds: Vec<SpecThreshold>,
}

impl UsageRules {
    /// Validate and construct rules.
    ///
    /// # Errors
    /// Returns [`ScorerConfigError`] when the weights are invalid, a
    /// threshold weight is negative or non-finite, or an attribute repeats.
    pub fn new(
        weights: ScoreWeights,
        thresholds: Vec<SpecThreshold>,
    ) -> Result<Self, ScorerConfigError> {
        let validated = weights.validate()?;
        let mut seen = BTreeSet::new();
        for threshold in &thresholds {
            if !threshold.has_valid_weight() {
                return Err(ScorerConfigError::InvalidThresholdWeight { key: threshold.key });
            }
            if !seen.insert(threshold.key) {
                return Err(ScorerConfigError::DuplicateThreshold { key: threshold.key });
            }
        }
        Ok(Self {
            weights: validated,
            thresholds,
        })
    }

    /// Default rules for `usage`.
    #[must_use]
    pub fn for_usage(usage: Usage) -> Self {
        Self {
            weights: ScoreWeights::for_usage(usage),
            thresholds: default_thresholds(usage),
        }
    }

    /// Criterion blend weights.
    #[must_use]
    pub const fn weights(&self) -> ScoreWeights {
        self.weights
    }

    /// Spec thresholds in evaluation order.
    #[must_use]
    pub fn thresholds(&self) -> &[SpecThreshold] {
        &self.thresholds
    }
}

/// Complete scorer configuration.
///
/// # Examples
/// ```
/// use configurator_core::Usage;
/// use configurator_scorer::{ScoreWeights, ScorerConfig, UsageRules};
///
/// let rules = UsageRules::new(ScoreWeights::new(0.7, 0.2, 0.1).unwrap(), Vec::new()).unwrap();
/// let config = ScorerConfig::default()
///     .with_rules(Usage::Office, rules)
///     .with_min_reviews(5);
/// assert_eq!(config.rules(Usage::Office).weights().price_fit(), 0.7);
/// assert_eq!(config.min_reviews(), 5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ScorerConfig {
    gaming: UsageRules,
    office: UsageRules,
    creative: UsageRules,
    min_reviews: u32,
    low_stock: u32,
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self {
            gaming: UsageRules::for_usage(Usage::Gaming),
            office: UsageRules::for_usage(Usage::Office),
            creative: UsageRules::for_usage(Usage::Creative),
            min_reviews: DEFAULT_MIN_REVIEWS,
            low_stock: DEFAULT_LOW_STOCK,
        }
    }
}

impl ScorerConfig {
    /// Replace the rules for `usage`.
    #[must_use]
    pub fn with_rules(mut self, usage: Usage, rules: UsageRules) -> Self {
        match usage {
            Usage::Gaming => self.gaming = rules,
            Usage::Office => self.office = rules,
            Usage::Creative => self.creative = rules,
        }
        self
    }

    /// Set the review count needed for full rating confidence.
    ///
    /// Zero disables the confidence adjustment.
    #[must_use]
    pub const fn with_min_reviews(mut self, min_reviews: u32) -> Self {
        self.min_reviews = min_reviews;
        self
    }

    /// Set the stock level that triggers a low-stock con.
    #[must_use]
    pub const fn with_low_stock(mut self, low_stock: u32) -> Self {
        self.low_stock = low_stock;
        self
    }

    /// Rules for `usage`.
    #[must_use]
    pub const fn rules(&self, usage: Usage) -> &UsageRules {
        match usage {
            Usage::Gaming => &self.gaming,
            Usage::Office => &self.office,
            Usage::Creative => &self.creative,
        }
    }

    /// Review count needed for full rating confidence.
    #[must_use]
    pub const fn min_reviews(&self) -> u32 {
        self.min_reviews
    }

    /// Stock level that triggers a low-stock con.
    #[must_use]
    pub const fn low_stock(&self) -> u32 {
        self.low_stock
    }
}
