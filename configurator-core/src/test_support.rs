//! Test-only helpers shared by unit and behaviour tests across the workspace.

use crate::{Product, Score, ScoredCandidate, Scorer, UsageProfile};

/// Build a named product with the given category and price.
///
/// The name mirrors the identifier and stock defaults to one unit.
#[must_use]
pub fn product(id: &str, category: &str, price: u64) -> Product {
    Product::new(id, id, category, price).with_stock(1)
}

/// Wrap a product and a raw score into a candidate.
#[must_use]
pub fn candidate(id: &str, price: u64, score: u8) -> ScoredCandidate {
    ScoredCandidate::new(
        product(id, "office", price),
        Score::from_raw(f64::from(score)),
    )
}

/// Test `Scorer` that gives every product the same score.
#[derive(Debug, Copy, Clone)]
pub struct ConstantScorer(pub Score);

impl Default for ConstantScorer {
    fn default() -> Self {
        Self(Score::from_raw(50.0))
    }
}

impl Scorer for ConstantScorer {
    fn score(&self, product: &Product, _profile: &UsageProfile) -> ScoredCandidate {
        ScoredCandidate::new(product.clone(), self.0)
    }
}
