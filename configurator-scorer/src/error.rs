//! Error types raised while configuring the scorer.
#![forbid(unsafe_code)]

use configurator_core::SpecKey;
use thiserror::Error;

/// Configuration faults detected when building a [`ScorerConfig`](crate::ScorerConfig).
///
/// These never occur while scoring: a scorer can only be built from a
/// configuration that passed validation.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ScorerConfigError {
    /// A criterion weight was NaN or infinite.
    #[error("criterion weights must be finite")]
    NonFiniteWeight,
    /// A criterion weight was negative.
    #[error("criterion weights must not be negative")]
    NegativeWeight,
    /// Criterion weights did not add up to one.
    #[error("criterion weights must sum to 1.0, found {sum}")]
    WeightSum {
        /// Actual total of the weights.
        sum: f64,
    },
    /// A spec threshold weight was negative or non-finite.
    #[error("threshold weight for {key} must be a finite, non-negative number")]
    InvalidThresholdWeight {
        /// Attribute the threshold applies to.
        key: SpecKey,
    },
    /// The same attribute appeared twice in one usage's thresholds.
    #[error("duplicate threshold for {key}")]
    DuplicateThreshold {
        /// Repeated attribute.
        key: SpecKey,
    },
}
