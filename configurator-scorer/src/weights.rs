//! Per-usage blend weights for the three scoring criteria.
#![forbid(unsafe_code)]

use configurator_core::Usage;

use crate::ScorerConfigError;

/// Allowed drift of the weight total from exactly `1.0`.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Relative importance of price-fit, spec-fit and review quality.
///
/// The three weights are non-negative and sum to `1.0`, so the blended
/// score stays on the same 0-100 scale as its inputs.
///
/// # Examples
/// ```
/// use configurator_scorer::ScoreWeights;
///
/// let weights = ScoreWeights::new(0.6, 0.2, 0.2).unwrap();
/// assert_eq!(weights.price_fit(), 0.6);
/// assert!(ScoreWeights::new(0.6, 0.6, 0.2).is_err());
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ScoreWeights {
    price_fit: f64,
    spec_fit: f64,
    reviews: f64,
}

impl ScoreWeights {
    /// Gaming leans on hardware.
    pub const GAMING: Self = Self::unchecked(0.25, 0.55, 0.20);
    /// Office leans on price.
    pub const OFFICE: Self = Self::unchecked(0.50, 0.25, 0.25);
    /// Creative work leans on hardware, with some price sensitivity.
    pub const CREATIVE: Self = Self::unchecked(0.30, 0.50, 0.20);

    const fn unchecked(price_fit: f64, spec_fit: f64, reviews: f64) -> Self {
        Self {
            price_fit,
            spec_fit,
            reviews,
        }
    }

    /// Validate and construct a set of weights.
    ///
    /// # Errors
    /// Returns [`ScorerConfigError::NonFiniteWeight`],
    /// [`ScorerConfigError::NegativeWeight`] or
    /// [`ScorerConfigError::WeightSum`] when the weights cannot form a
    /// convex blend.
    pub fn new(price_fit: f64, spec_fit: f64, reviews: f64) -> Result<Self, ScorerConfigError> {
        Self::unchecked(price_fit, spec_fit, reviews).validate()
    }

    /// Validate the weights and return a copy.
    ///
    /// # Errors
    /// See [`ScoreWeights::new`].
    #[expect(
        clippy::float_arithmetic,
        reason = "the sum is checked against one within a tolerance"
    )]
    pub fn validate(self) -> Result<Self, ScorerConfigError> {
        if !self.has_finite_values() {
            return Err(ScorerConfigError::NonFiniteWeight);
        }
        if !self.has_non_negative_values() {
            return Err(ScorerConfigError::NegativeWeight);
        }
        let sum = self.sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ScorerConfigError::WeightSum { sum });
        }
        Ok(self)
    }

    /// Default weights for `usage`.
    #[must_use]
    pub const fn for_usage(usage: Usage) -> Self {
        match usage {
            Usage::Gaming => Self::GAMING,
            Usage::Office => Self::OFFICE,
            Usage::Creative => Self::CREATIVE,
        }
    }

    /// Weight of the price-fit criterion.
    #[must_use]
    pub const fn price_fit(&self) -> f64 {
        self.price_fit
    }

    /// Weight of the spec-fit criterion.
    #[must_use]
    pub const fn spec_fit(&self) -> f64 {
        self.spec_fit
    }

    /// Weight of the review-quality criterion.
    #[must_use]
    pub const fn reviews(&self) -> f64 {
        self.reviews
    }

    const fn has_finite_values(self) -> bool {
        self.price_fit.is_finite() && self.spec_fit.is_finite() && self.reviews.is_finite()
    }

    const fn has_non_negative_values(self) -> bool {
        self.price_fit >= 0.0 && self.spec_fit >= 0.0 && self.reviews >= 0.0
    }

    #[expect(clippy::float_arithmetic, reason = "weights are validated by their sum")]
    fn sum(self) -> f64 {
        self.price_fit + self.spec_fit + self.reviews
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "score blending requires a weighted sum"
    )]
    pub(crate) fn blend(self, price_fit: f64, spec_fit: f64, reviews: f64) -> f64 {
        price_fit * self.price_fit + spec_fit * self.spec_fit + reviews * self.reviews
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Usage::Gaming)]
    #[case(Usage::Office)]
    #[case(Usage::Creative)]
    fn default_weights_sum_to_one(#[case] usage: Usage) {
        assert!(ScoreWeights::for_usage(usage).validate().is_ok());
    }

    #[test]
    fn office_weights_price_highest() {
        let office = ScoreWeights::OFFICE;
        assert!(office.price_fit() > office.spec_fit());
        assert!(office.price_fit() > office.reviews());
    }

    #[test]
    fn gaming_weights_spec_highest() {
        let gaming = ScoreWeights::GAMING;
        assert!(gaming.spec_fit() > gaming.price_fit());
        assert!(gaming.spec_fit() > gaming.reviews());
    }

    #[rstest]
    #[case(f64::NAN, 0.5, 0.5)]
    #[case(0.5, f64::INFINITY, 0.5)]
    fn rejects_non_finite(#[case] price: f64, #[case] spec: f64, #[case] reviews: f64) {
        assert_eq!(
            ScoreWeights::new(price, spec, reviews),
            Err(ScorerConfigError::NonFiniteWeight)
        );
    }

    #[test]
    fn rejects_negative() {
        assert_eq!(
            ScoreWeights::new(1.2, -0.2, 0.0),
            Err(ScorerConfigError::NegativeWeight)
        );
    }

    #[rstest]
    #[case(0.3, 0.3, 0.3)]
    #[case(0.5, 0.5, 0.5)]
    #[case(0.0, 0.0, 0.0)]
    fn rejects_totals_other_than_one(#[case] price: f64, #[case] spec: f64, #[case] reviews: f64) {
        assert!(matches!(
            ScoreWeights::new(price, spec, reviews),
            Err(ScorerConfigError::WeightSum { .. })
        ));
    }

    #[test]
    fn blend_of_equal_inputs_is_identity() {
        let blended = ScoreWeights::CREATIVE.blend(70.0, 70.0, 70.0);
        assert!((blended - 70.0).abs() < 1e-9);
    }
}
