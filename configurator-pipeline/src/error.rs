//! Error types raised while configuring the pipeline.

use thiserror::Error;

/// Faults in a [`WideningPolicy`](crate::WideningPolicy).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum WideningPolicyError {
    /// The step ratio was NaN or infinite.
    #[error("widening step ratio must be finite, found {step_ratio}")]
    NonFiniteStep {
        /// Rejected ratio.
        step_ratio: f64,
    },
    /// The step ratio was negative.
    #[error("widening step ratio must not be negative, found {step_ratio}")]
    NegativeStep {
        /// Rejected ratio.
        step_ratio: f64,
    },
    /// More widening steps were requested than the pipeline allows.
    #[error("at most {limit} widening steps are allowed, found {max_steps}")]
    TooManySteps {
        /// Requested step count.
        max_steps: u32,
        /// Highest permitted step count.
        limit: u32,
    },
}
