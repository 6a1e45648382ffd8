//! Fitness scores and scored candidates.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Product;

/// Fitness of a product for a profile, as an integer in `0..=100`.
///
/// # Examples
/// ```
/// use configurator_core::Score;
///
/// assert_eq!(Score::from_raw(47.5).value(), 48);
/// assert_eq!(Score::from_raw(140.0), Score::MAX);
/// assert_eq!(Score::from_raw(f64::NAN), Score::MIN);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct Score(u8);

impl Score {
    /// Lowest possible score.
    pub const MIN: Self = Self(0);
    /// Highest possible score.
    pub const MAX: Self = Self(100);

    /// Wrap an integer, returning `None` above 100.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value > 100 { None } else { Some(Self(value)) }
    }

    /// Round and clamp a raw weighted sum into a score.
    ///
    /// Non-finite input yields [`Score::MIN`]. Halves round away from zero.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "value is clamped to 0..=100 before the cast"
    )]
    pub const fn from_raw(raw: f64) -> Self {
        if !raw.is_finite() {
            return Self::MIN;
        }
        Self(raw.clamp(0.0, 100.0).round() as u8)
    }

    /// Return the integer value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Score> for u8 {
    fn from(score: Score) -> Self {
        score.value()
    }
}

/// A product paired with its score and the reasons behind it.
///
/// Built fresh for every request and never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate {
    /// The catalogue product.
    pub product: Product,
    /// Fitness against the requested profile.
    pub score: Score,
    /// Strengths for this usage.
    pub pros: Vec<String>,
    /// Weaknesses for this usage.
    pub cons: Vec<String>,
}

impl ScoredCandidate {
    /// Pair a product with a score and no explanations.
    #[must_use]
    pub const fn new(product: Product, score: Score) -> Self {
        Self {
            product,
            score,
            pros: Vec::new(),
            cons: Vec::new(),
        }
    }

    /// Price of the underlying product.
    #[must_use]
    pub const fn price(&self) -> u64 {
        self.product.price
    }
}
