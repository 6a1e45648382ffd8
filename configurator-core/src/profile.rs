//! Usage profiles: what the shopper wants and how much they will spend.
//!
//! A [`UsageProfile`] is only ever built through validating constructors, so
//! every downstream stage can assume an ordered, finite, non-negative
//! [`Budget`].

use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::Serialize;
use thiserror::Error;

use crate::{SpecKey, Usage};

/// Malformed or contradictory shopper input.
///
/// Reported before any pipeline stage runs. Hosts should surface it as a
/// client error.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InvalidProfile {
    /// A budget bound was NaN or infinite.
    #[error("budget bounds must be finite numbers")]
    BudgetNotFinite,
    /// A budget bound was below zero.
    #[error("budget bounds must not be negative")]
    NegativeBudget,
    /// The lower bound exceeded the upper bound.
    #[error("budget minimum {min} exceeds maximum {max}")]
    BudgetInverted {
        /// Requested lower bound.
        min: f64,
        /// Requested upper bound.
        max: f64,
    },
    /// The usage matched neither a category nor an alias.
    #[error("unknown usage category '{0}'")]
    UnknownUsage(String),
    /// A preference named an attribute the engine does not know.
    #[error("unknown preference attribute '{0}'")]
    UnknownPreference(String),
    /// A preference weight was not a finite value in `0.0..=1.0`.
    #[error("preference weight {weight} for {key} must be between 0.0 and 1.0")]
    PreferenceOutOfRange {
        /// Attribute the weight was given for.
        key: SpecKey,
        /// Offending weight.
        weight: f32,
    },
}

/// Inclusive price range in XOF.
///
/// # Examples
/// ```
/// use configurator_core::Budget;
///
/// # fn main() -> Result<(), configurator_core::InvalidProfile> {
/// let budget = Budget::new(300_000.0, 700_000.0)?;
/// assert!(budget.contains(300_000));
/// assert!(budget.contains(700_000));
/// assert!(!budget.contains(700_001));
/// assert_eq!(budget.midpoint(), 500_000.0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Budget {
    min: f64,
    max: f64,
}

impl Budget {
    /// Validate and construct a budget.
    ///
    /// # Errors
    /// Returns [`InvalidProfile`] when either bound is non-finite or
    /// negative, or when `min > max`.
    pub fn new(min: f64, max: f64) -> Result<Self, InvalidProfile> {
        if !min.is_finite() || !max.is_finite() {
            return Err(InvalidProfile::BudgetNotFinite);
        }
        if min < 0.0 || max < 0.0 {
            return Err(InvalidProfile::NegativeBudget);
        }
        if min > max {
            return Err(InvalidProfile::BudgetInverted { min, max });
        }
        Ok(Self { min, max })
    }

    /// Lower bound.
    #[must_use]
    pub const fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound.
    #[must_use]
    pub const fn max(&self) -> f64 {
        self.max
    }

    /// Report whether `price` lies inside the range. Both ends are inclusive.
    #[must_use]
    #[expect(
        clippy::cast_precision_loss,
        reason = "XOF prices sit far below the 2^53 limit of exact f64 integers"
    )]
    pub fn contains(&self, price: u64) -> bool {
        let value = price as f64;
        self.min <= value && value <= self.max
    }

    /// Centre of the range.
    #[must_use]
    #[expect(clippy::float_arithmetic, reason = "midpoint of a float range")]
    pub fn midpoint(&self) -> f64 {
        self.min + (self.max - self.min) / 2.0
    }

    /// Distance from the midpoint to either bound.
    #[must_use]
    #[expect(clippy::float_arithmetic, reason = "half the width of a float range")]
    pub fn half_width(&self) -> f64 {
        (self.max - self.min) / 2.0
    }

    /// Widen both bounds by `ratio` of their own value.
    ///
    /// The lower bound is floored at zero. Non-finite or negative ratios
    /// leave the budget unchanged.
    ///
    /// # Examples
    /// ```
    /// use configurator_core::Budget;
    ///
    /// let budget = Budget::new(100.0, 200.0).unwrap().widened(0.2);
    /// assert!((budget.min() - 80.0).abs() < 1e-9);
    /// assert!((budget.max() - 240.0).abs() < 1e-9);
    /// ```
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "widening scales bounds by a ratio"
    )]
    pub fn widened(&self, ratio: f64) -> Self {
        if !ratio.is_finite() || ratio <= 0.0 {
            return *self;
        }
        Self {
            min: (self.min * (1.0 - ratio)).max(0.0),
            max: self.max * (1.0 + ratio),
        }
    }
}

/// A shopper's usage, budget and optional attribute preferences.
///
/// Preference weights live in `0.0..=1.0` and override the default
/// importance of an attribute during scoring.
///
/// # Examples
/// ```
/// use configurator_core::{Budget, SpecKey, Usage, UsageProfile};
///
/// let budget = Budget::new(500_000.0, 900_000.0).unwrap();
/// let profile = UsageProfile::new(Usage::Gaming, budget)
///     .with_preference(SpecKey::GpuMemory, 0.9);
/// assert_eq!(profile.preference(SpecKey::GpuMemory), Some(0.9));
/// assert!(profile.preference(SpecKey::Ram).is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct UsageProfile {
    usage: Usage,
    budget: Budget,
    preferences: BTreeMap<SpecKey, f32>,
}

impl UsageProfile {
    /// Construct a profile without preferences.
    #[must_use]
    pub const fn new(usage: Usage, budget: Budget) -> Self {
        Self {
            usage,
            budget,
            preferences: BTreeMap::new(),
        }
    }

    /// Requested usage.
    #[must_use]
    pub const fn usage(&self) -> Usage {
        self.usage
    }

    /// Requested (or effective) budget.
    #[must_use]
    pub const fn budget(&self) -> &Budget {
        &self.budget
    }

    /// Return the preference weight for `key`, if present.
    #[must_use]
    pub fn preference(&self, key: SpecKey) -> Option<f32> {
        self.preferences.get(&key).copied()
    }

    /// Iterate over preferences in key order.
    pub fn preferences(&self) -> impl Iterator<Item = (SpecKey, f32)> + '_ {
        self.preferences.iter().map(|(key, weight)| (*key, *weight))
    }

    /// Insert or update a preference weight.
    ///
    /// Values are clamped into `0.0..=1.0`; non-finite values become `0.0`.
    pub fn set_preference(&mut self, key: SpecKey, weight: f32) {
        let clamped = if weight.is_finite() {
            weight.clamp(0.0, 1.0)
        } else {
            0.0
        };
        self.preferences.insert(key, clamped);
    }

    /// Insert a preference weight, rejecting values outside `0.0..=1.0`.
    ///
    /// # Errors
    /// Returns [`InvalidProfile::PreferenceOutOfRange`] for non-finite or
    /// out-of-range weights. The profile is left unchanged.
    pub fn try_set_preference(&mut self, key: SpecKey, weight: f32) -> Result<(), InvalidProfile> {
        if !weight.is_finite() || !(0.0..=1.0).contains(&weight) {
            return Err(InvalidProfile::PreferenceOutOfRange { key, weight });
        }
        self.preferences.insert(key, weight);
        Ok(())
    }

    /// Add a preference while returning `self` for chaining.
    #[must_use]
    pub fn with_preference(mut self, key: SpecKey, weight: f32) -> Self {
        self.set_preference(key, weight);
        self
    }

    /// Copy of this profile with a different budget.
    ///
    /// Used to score against a widened budget.
    #[must_use]
    pub fn with_budget(&self, budget: Budget) -> Self {
        Self {
            budget,
            ..self.clone()
        }
    }
}
