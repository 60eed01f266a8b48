//! Shannon Entropy Estimator
//!
//! Measures the unpredictability of the return distribution. Returns are
//! discretized into equal-width bins over their observed range and the
//! empirical entropy is normalized by ln(bins), so a well-populated
//! distribution scores in [0, 1]: 0 for a distribution concentrated in one
//! bin, 1 for a uniform spread across all bins.

use crate::error::{Estimator, RiskError};
use crate::histogram::{BinGrid, DEFAULT_BIN_COUNT};
use ndarray::Array1;
use serde::{Deserialize, Serialize};

/// Configuration for the entropy estimator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntropyConfig {
    /// Number of equal-width bins (default: 30, must be >= 2)
    pub bins: usize,
}

impl Default for EntropyConfig {
    fn default() -> Self {
        Self {
            bins: DEFAULT_BIN_COUNT,
        }
    }
}

/// Normalized Shannon entropy estimator
#[derive(Debug, Clone)]
pub struct EntropyEstimator {
    config: EntropyConfig,
}

impl EntropyEstimator {
    /// Create a new entropy estimator with the given configuration
    pub fn new(config: EntropyConfig) -> Result<Self, RiskError> {
        if config.bins < 2 {
            return Err(RiskError::InvalidConfiguration(format!(
                "bin count must be at least 2, got {}",
                config.bins
            )));
        }
        Ok(Self { config })
    }

    /// Create with default configuration.
    ///
    /// # Errors
    /// Returns an error if the default configuration is invalid (should not happen).
    pub fn try_default() -> Result<Self, RiskError> {
        Self::new(EntropyConfig::default())
    }

    /// Estimate the normalized Shannon entropy of a return series.
    ///
    /// Zero-probability bins contribute nothing to the sum, so sparse
    /// distributions never evaluate ln(0). A constant series occupies a
    /// single bin and yields 0.
    pub fn estimate(&self, returns: &Array1<f64>) -> Result<f64, RiskError> {
        let n = returns.len();
        if n < 2 {
            return Err(RiskError::InsufficientData {
                estimator: Estimator::Entropy,
                required: 2,
                actual: n,
            });
        }

        let grid = BinGrid::fit(returns.view(), self.config.bins);
        let counts = grid.counts(returns.view());
        let total = n as f64;

        let entropy: f64 = counts
            .iter()
            .filter(|&&c| c > 0)
            .map(|&c| {
                let p = c as f64 / total;
                -p * p.ln()
            })
            .sum();

        Ok(entropy / (self.config.bins as f64).ln())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_config_default() {
        let config = EntropyConfig::default();
        assert_eq!(config.bins, 30);
    }

    #[test]
    fn test_single_bin_count_rejected() {
        let result = EntropyEstimator::new(EntropyConfig { bins: 1 });
        assert!(matches!(result, Err(RiskError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_constant_series_has_zero_entropy() {
        let estimator = EntropyEstimator::try_default().unwrap();
        let returns = Array1::from(vec![0.01; 50]);
        let entropy = estimator.estimate(&returns).unwrap();
        assert_relative_eq!(entropy, 0.0);
    }

    #[test]
    fn test_two_value_series_entropy() {
        let estimator = EntropyEstimator::try_default().unwrap();
        // Equal mass in two bins: H = ln(2), normalized by ln(30)
        let mut values = vec![-0.05; 25];
        values.extend(vec![0.05; 25]);
        let entropy = estimator.estimate(&Array1::from(values)).unwrap();
        assert_relative_eq!(entropy, 2.0_f64.ln() / 30.0_f64.ln(), epsilon = 1e-12);
    }

    #[test]
    fn test_uniform_spread_is_near_one() {
        let estimator = EntropyEstimator::new(EntropyConfig { bins: 10 }).unwrap();
        // One observation per bin
        let values: Vec<f64> = (0..10).map(|i| i as f64).collect();
        let entropy = estimator.estimate(&Array1::from(values)).unwrap();
        assert_relative_eq!(entropy, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_entropy_bounded() {
        let estimator = EntropyEstimator::try_default().unwrap();
        let values: Vec<f64> = (0..200).map(|i| ((i * 37) % 101) as f64 / 100.0).collect();
        let entropy = estimator.estimate(&Array1::from(values)).unwrap();
        assert!((0.0..=1.0).contains(&entropy));
    }

    #[test]
    fn test_insufficient_data() {
        let estimator = EntropyEstimator::try_default().unwrap();
        let returns = Array1::from(vec![0.01]);
        assert!(matches!(
            estimator.estimate(&returns),
            Err(RiskError::InsufficientData {
                estimator: Estimator::Entropy,
                ..
            })
        ));
    }
}
