//! Risk Detector
//!
//! Façade over the three estimators and the classifier. A single call takes
//! a return series, runs entropy, mutual information, and Hurst estimation
//! independently, and folds the scalars into a `RiskAssessment`. The first
//! estimator failure aborts the remaining computation and is surfaced as-is;
//! a partially computed assessment would be misleading.
//!
//! Everything here is pure computation over borrowed data, so one detector
//! may serve concurrent calls across threads without synchronization.

use crate::classifier::{RiskFlag, classify};
use crate::entropy::{EntropyConfig, EntropyEstimator};
use crate::error::RiskError;
use crate::histogram::DEFAULT_BIN_COUNT;
use crate::hurst::{HurstConfig, HurstEstimator};
use crate::mutual_information::{MutualInformationConfig, MutualInformationEstimator};
use ndarray::Array1;
use serde::{Deserialize, Serialize};

/// Configuration for the risk detector
///
/// Entropy and mutual information always share `bins`, so both normalized
/// measures are comparable across calls under a fixed configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectorConfig {
    /// Number of equal-width bins for entropy and mutual information
    /// (default: 30, must be >= 2)
    pub bins: usize,
    /// Lag between paired observations for mutual information
    /// (default: 1, must be >= 1)
    pub lag: usize,
    /// Smallest derived rescaled-range window length (default: 8)
    pub min_window: usize,
    /// Number of log-spaced rescaled-range window lengths (default: 10)
    pub num_windows: usize,
    /// Explicit rescaled-range window lengths, overriding the derived
    /// progression (default: none; at least 3 distinct lengths if set)
    pub window_lengths: Option<Vec<usize>>,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            bins: DEFAULT_BIN_COUNT,
            lag: 1,
            min_window: 8,
            num_windows: 10,
            window_lengths: None,
        }
    }
}

/// Result record of one detection call
///
/// Created once per call and immutable thereafter. `entropy` and
/// `mutual_information` are normalized to [0, 1] (mutual information may
/// nudge past 1 under coarse binning of strongly dependent data);
/// `hurst_exponent` is not clamped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Normalized Shannon entropy of the return distribution
    pub entropy: f64,
    /// Normalized mutual information between lagged returns
    pub mutual_information: f64,
    /// Hurst exponent estimate (> 0.5 persistent, < 0.5 mean-reverting)
    pub hurst_exponent: f64,
    /// Discrete risk category
    pub risk_flag: RiskFlag,
}

/// Latent risk detector
///
/// Composes the entropy, mutual information, and Hurst estimators with the
/// threshold classifier. Construction validates the whole configuration, so
/// a built detector never fails on configuration grounds.
#[derive(Debug, Clone)]
pub struct RiskDetector {
    entropy: EntropyEstimator,
    mutual_information: MutualInformationEstimator,
    hurst: HurstEstimator,
}

impl RiskDetector {
    /// Create a new detector with the given configuration
    pub fn new(config: DetectorConfig) -> Result<Self, RiskError> {
        let entropy = EntropyEstimator::new(EntropyConfig { bins: config.bins })?;
        let mutual_information = MutualInformationEstimator::new(MutualInformationConfig {
            bins: config.bins,
            lag: config.lag,
        })?;
        let hurst = HurstEstimator::new(HurstConfig {
            min_window: config.min_window,
            num_windows: config.num_windows,
            window_lengths: config.window_lengths,
        })?;
        Ok(Self {
            entropy,
            mutual_information,
            hurst,
        })
    }

    /// Create with default configuration.
    ///
    /// # Errors
    /// Returns an error if the default configuration is invalid (should not happen).
    pub fn try_default() -> Result<Self, RiskError> {
        Self::new(DetectorConfig::default())
    }

    /// Run all three estimators on a return series and classify the result.
    ///
    /// # Arguments
    /// * `returns` - Time-ordered periodic fractional price changes
    ///
    /// # Errors
    /// Surfaces the first `InsufficientData` failure, naming the estimator
    /// that raised it.
    pub fn detect(&self, returns: &Array1<f64>) -> Result<RiskAssessment, RiskError> {
        let entropy = self.entropy.estimate(returns)?;
        let mutual_information = self.mutual_information.estimate(returns)?;
        let hurst_exponent = self.hurst.estimate(returns)?;

        Ok(RiskAssessment {
            entropy,
            mutual_information,
            hurst_exponent,
            risk_flag: classify(entropy, mutual_information, hurst_exponent),
        })
    }
}

/// Detect latent risk factors in a return series.
///
/// Single-call form of [`RiskDetector`]: validates `config`, runs the three
/// estimators, and returns the assessment record.
pub fn detect_risk_factors(
    returns: &Array1<f64>,
    config: DetectorConfig,
) -> Result<RiskAssessment, RiskError> {
    RiskDetector::new(config)?.detect(returns)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_series() -> Array1<f64> {
        Array1::from_iter((0..512).map(|t| {
            let t = t as f64;
            (t * 0.61).sin() * 0.012 + (t * 0.173).cos() * 0.007
        }))
    }

    #[test]
    fn test_config_default() {
        let config = DetectorConfig::default();
        assert_eq!(config.bins, 30);
        assert_eq!(config.lag, 1);
        assert_eq!(config.min_window, 8);
        assert_eq!(config.num_windows, 10);
        assert!(config.window_lengths.is_none());
    }

    #[test]
    fn test_invalid_bins_rejected_before_estimation() {
        let result = RiskDetector::new(DetectorConfig {
            bins: 1,
            ..Default::default()
        });
        assert!(matches!(result, Err(RiskError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_detect_produces_bounded_measures() {
        let detector = RiskDetector::try_default().unwrap();
        let assessment = detector.detect(&sample_series()).unwrap();
        assert!((0.0..=1.0).contains(&assessment.entropy));
        assert!(assessment.mutual_information >= 0.0);
        assert!(assessment.hurst_exponent.is_finite());
    }

    #[test]
    fn test_detect_is_deterministic() {
        let detector = RiskDetector::try_default().unwrap();
        let series = sample_series();
        let first = detector.detect(&series).unwrap();
        let second = detector.detect(&series).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_first_failure_aborts() {
        // One observation: entropy is the first estimator to run and fail
        let detector = RiskDetector::try_default().unwrap();
        let returns = Array1::from(vec![0.01]);
        assert!(matches!(
            detector.detect(&returns),
            Err(RiskError::InsufficientData {
                estimator: crate::error::Estimator::Entropy,
                ..
            })
        ));
    }

    #[test]
    fn test_free_function_matches_detector() {
        let series = sample_series();
        let via_fn = detect_risk_factors(&series, DetectorConfig::default()).unwrap();
        let via_detector = RiskDetector::try_default().unwrap().detect(&series).unwrap();
        assert_eq!(via_fn, via_detector);
    }
}
