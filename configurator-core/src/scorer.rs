//! Score products for a usage profile.
//!
//! The `Scorer` trait assigns a [`Score`](crate::Score) and explanations to a
//! [`Product`](crate::Product) given a shopper's
//! [`UsageProfile`](crate::UsageProfile).

use crate::{Product, ScoredCandidate, UsageProfile};

/// Calculate how well a product suits a profile.
///
/// Implementations must be thread-safe (`Send` + `Sync`) so a single scorer
/// can serve concurrent requests. The method is infallible: the profile has
/// already been validated and products come from a validated catalogue.
///
/// Implementations must:
/// - Be deterministic. The same inputs always give the same candidate.
/// - Build the score with [`Score::from_raw`](crate::Score::from_raw) or
///   another constructor that keeps it within `0..=100`.
///
/// # Examples
///
/// ```rust
/// use configurator_core::{Budget, Product, Score, ScoredCandidate, Scorer, Usage, UsageProfile};
///
/// struct FullMarks;
///
/// impl Scorer for FullMarks {
///     fn score(&self, product: &Product, _profile: &UsageProfile) -> ScoredCandidate {
///         ScoredCandidate::new(product.clone(), Score::MAX)
///     }
/// }
///
/// let product = Product::new("pc-1", "Tour", "office", 400_000);
/// let profile = UsageProfile::new(Usage::Office, Budget::new(0.0, 500_000.0).unwrap());
/// assert_eq!(FullMarks.score(&product, &profile).score, Score::MAX);
/// ```
pub trait Scorer: Send + Sync {
    /// Return a scored candidate for `product` according to `profile`.
    fn score(&self, product: &Product, profile: &UsageProfile) -> ScoredCandidate;
}
