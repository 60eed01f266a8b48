//! Error taxonomy for risk detection
//!
//! Two failure kinds exist: a series too short for an estimator
//! (`InsufficientData`) and caller-supplied parameters that violate their
//! constraints (`InvalidConfiguration`). Numerical degeneracies such as empty
//! bins or zero-variance windows are expected in real return data and are
//! handled inside the estimators, never surfaced as errors.

use std::fmt;
use thiserror::Error;

/// Identifies which estimator raised an error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Estimator {
    /// Normalized Shannon entropy of the return distribution
    Entropy,
    /// Normalized lagged mutual information
    MutualInformation,
    /// Hurst exponent via rescaled-range analysis
    Hurst,
}

impl fmt::Display for Estimator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Entropy => write!(f, "entropy"),
            Self::MutualInformation => write!(f, "mutual information"),
            Self::Hurst => write!(f, "hurst"),
        }
    }
}

/// Errors that can occur during risk detection
#[derive(Debug, Error)]
pub enum RiskError {
    /// The series (or a lag/window-derived substructure) is too short for a
    /// meaningful estimate. Never silently defaulted: a fabricated value
    /// would misclassify risk.
    #[error("insufficient data for {estimator} estimation: need at least {required}, got {actual}")]
    InsufficientData {
        /// Estimator that raised the error
        estimator: Estimator,
        /// Minimum required observations (or derived samples)
        required: usize,
        /// Actual observations (or derived samples) available
        actual: usize,
    },

    /// Caller-supplied parameters violate their stated constraints.
    /// Validated before any computation begins.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}
