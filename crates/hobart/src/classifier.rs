//! Risk Classification
//!
//! Folds the three scalar measures into a discrete risk flag via a fixed
//! decision tree. Rules are checked top to bottom and the first match wins,
//! so a series that is both high-entropy-persistent and weakly correlated
//! lands in the chaotic-memory band rather than being double-counted.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Hurst exponent above which a series counts as persistent.
const PERSISTENCE_THRESHOLD: f64 = 0.5;
/// Entropy above which the distribution counts as near-unpredictable.
const HIGH_ENTROPY_THRESHOLD: f64 = 0.9;
/// Entropy above which the distribution counts as elevated.
const ELEVATED_ENTROPY_THRESHOLD: f64 = 0.8;
/// Mutual information below which lagged returns count as decoupled.
const DECOUPLED_MI_THRESHOLD: f64 = 0.05;
/// Mutual information below which temporal correlation counts as weak.
const WEAK_MI_THRESHOLD: f64 = 0.1;

/// Discrete risk category summarizing the three scalar measures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskFlag {
    /// No elevated pattern detected (latent)
    Low,
    /// Persistent and high-entropy: chaotic dynamics with memory
    MediumChaoticMemory,
    /// Weak temporal correlation: information flow is blocked
    MediumBlockedFlow,
    /// Persistent, near-unpredictable, and decoupled at lag
    High,
}

impl fmt::Display for RiskFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Low => "low",
            Self::MediumChaoticMemory => "medium_chaotic_memory",
            Self::MediumBlockedFlow => "medium_blocked_flow",
            Self::High => "high",
        };
        write!(f, "{name}")
    }
}

/// Classify a (entropy, mutual information, hurst exponent) triple.
///
/// Stateless single-step decision; no memory across calls.
pub fn classify(entropy: f64, mutual_information: f64, hurst_exponent: f64) -> RiskFlag {
    let persistent = hurst_exponent > PERSISTENCE_THRESHOLD;

    if persistent && entropy > HIGH_ENTROPY_THRESHOLD && mutual_information < DECOUPLED_MI_THRESHOLD
    {
        RiskFlag::High
    } else if persistent && entropy > ELEVATED_ENTROPY_THRESHOLD {
        RiskFlag::MediumChaoticMemory
    } else if mutual_information < WEAK_MI_THRESHOLD {
        RiskFlag::MediumBlockedFlow
    } else {
        RiskFlag::Low
    }
}
