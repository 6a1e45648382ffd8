//! The three scoring criteria, each normalised to `0.0..=100.0`.

use configurator_core::{Budget, MAX_RATING, Product, Rating, UsageProfile};

use crate::SpecThreshold;

/// Upper end of every criterion's scale.
pub const CRITERION_MAX: f64 = 100.0;

/// Neutral review score given to products nobody has rated.
pub const NEUTRAL_REVIEW_SCORE: f64 = 50.0;

/// Closeness of `price` to the centre of `budget`.
///
/// The midpoint scores 100 and either bound scores 0. A single-value budget
/// scores 100 for an exact match and 0 otherwise.
///
/// # Examples
/// ```
/// use configurator_core::Budget;
/// use configurator_scorer::criteria::price_fit;
///
/// let budget = Budget::new(300_000.0, 700_000.0).unwrap();
/// assert!((price_fit(500_000, &budget) - 100.0).abs() < 1e-9);
/// assert!((price_fit(400_000, &budget) - 50.0).abs() < 1e-9);
/// assert_eq!(price_fit(900_000, &budget), 0.0);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "price-fit is a linear distance from the budget midpoint"
)]
#[expect(
    clippy::cast_precision_loss,
    reason = "XOF prices sit far below the 2^53 limit of exact f64 integers"
)]
pub fn price_fit(price: u64, budget: &Budget) -> f64 {
    let half_width = budget.half_width();
    if half_width <= 0.0 {
        return if budget.contains(price) {
            CRITERION_MAX
        } else {
            0.0
        };
    }
    let distance = (price as f64 - budget.midpoint()).abs();
    (CRITERION_MAX * (1.0 - distance / half_width)).clamp(0.0, CRITERION_MAX)
}

/// Share of threshold weight the product meets.
///
/// A profile preference for an attribute replaces that threshold's weight.
/// Attributes the product does not list never meet their threshold. A zero
/// total weight scores 0.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "spec-fit is a weighted share of met thresholds"
)]
pub fn spec_fit(product: &Product, thresholds: &[SpecThreshold], profile: &UsageProfile) -> f64 {
    let mut total = 0.0_f64;
    let mut met = 0.0_f64;
    for threshold in thresholds {
        let weight = profile
            .preference(threshold.key)
            .map_or(threshold.weight, f64::from);
        total += weight;
        if meets(product, threshold) {
            met += weight;
        }
    }
    if total <= 0.0 {
        return 0.0;
    }
    (CRITERION_MAX * met / total).clamp(0.0, CRITERION_MAX)
}

/// Report whether `product` lists a value at or above the threshold.
pub(crate) fn meets(product: &Product, threshold: &SpecThreshold) -> bool {
    product
        .specs
        .get(threshold.key)
        .is_some_and(|value| value >= threshold.minimum)
}

/// Star rating scaled to 0-100, pulled toward neutral when reviews are few.
///
/// Below `min_reviews` the score moves linearly from
/// [`NEUTRAL_REVIEW_SCORE`] at zero reviews to the raw rating score at
/// `min_reviews`. A `min_reviews` of zero uses the raw score directly.
///
/// # Examples
/// ```
/// use configurator_core::Rating;
/// use configurator_scorer::criteria::review_quality;
///
/// assert!((review_quality(Rating::new(4.0, 40), 10) - 80.0).abs() < 1e-6);
/// assert!((review_quality(Rating::new(4.0, 5), 10) - 65.0).abs() < 1e-6);
/// assert!((review_quality(Rating::new(5.0, 0), 10) - 50.0).abs() < 1e-6);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "review confidence interpolates between neutral and raw scores"
)]
pub fn review_quality(rating: Rating, min_reviews: u32) -> f64 {
    let average = if rating.average.is_finite() {
        f64::from(rating.average.clamp(0.0, MAX_RATING))
    } else {
        0.0
    };
    let raw = average * CRITERION_MAX / f64::from(MAX_RATING);
    if min_reviews == 0 || rating.count >= min_reviews {
        return raw;
    }
    let confidence = f64::from(rating.count) / f64::from(min_reviews);
    NEUTRAL_REVIEW_SCORE + (raw - NEUTRAL_REVIEW_SCORE) * confidence
}
