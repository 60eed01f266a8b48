//! Lagged Mutual Information Estimator
//!
//! Measures temporal dependency between returns separated by a fixed lag.
//! Each value x_t is paired with x_{t+lag}, both marginals are discretized
//! with the same equal-width scheme as the entropy estimator, and
//! I = sum p(x,y) * ln(p(x,y) / (p(x) * p(y))) is computed over the joint
//! occupancy histogram.
//!
//! The result is normalized by ln(bins) — the same denominator as the
//! entropy estimator — rather than by the minimum marginal entropy, so the
//! normalization constant is stable across calls instead of data-dependent.

use crate::error::{Estimator, RiskError};
use crate::histogram::{BinGrid, DEFAULT_BIN_COUNT};
use ndarray::{Array1, s};
use serde::{Deserialize, Serialize};

/// Configuration for the mutual information estimator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MutualInformationConfig {
    /// Number of equal-width bins per marginal (default: 30, must be >= 2)
    pub bins: usize,
    /// Lag between paired observations (default: 1, must be >= 1)
    pub lag: usize,
}

impl Default for MutualInformationConfig {
    fn default() -> Self {
        Self {
            bins: DEFAULT_BIN_COUNT,
            lag: 1,
        }
    }
}

/// Normalized lagged mutual information estimator
#[derive(Debug, Clone)]
pub struct MutualInformationEstimator {
    config: MutualInformationConfig,
}

impl MutualInformationEstimator {
    /// Create a new mutual information estimator with the given configuration
    pub fn new(config: MutualInformationConfig) -> Result<Self, RiskError> {
        if config.bins < 2 {
            return Err(RiskError::InvalidConfiguration(format!(
                "bin count must be at least 2, got {}",
                config.bins
            )));
        }
        if config.lag < 1 {
            return Err(RiskError::InvalidConfiguration(format!(
                "lag must be at least 1, got {}",
                config.lag
            )));
        }
        Ok(Self { config })
    }

    /// Create with default configuration.
    ///
    /// # Errors
    /// Returns an error if the default configuration is invalid (should not happen).
    pub fn try_default() -> Result<Self, RiskError> {
        Self::new(MutualInformationConfig::default())
    }

    /// Estimate the normalized mutual information between x_t and x_{t+lag}.
    ///
    /// Cells with zero joint probability are skipped, never evaluated. The
    /// result is clamped at 0: mutual information is non-negative by
    /// construction, but round-off can produce tiny negative sums.
    pub fn estimate(&self, returns: &Array1<f64>) -> Result<f64, RiskError> {
        let n = returns.len();
        let lag = self.config.lag;
        if n <= lag {
            return Err(RiskError::InsufficientData {
                estimator: Estimator::MutualInformation,
                required: lag + 1,
                actual: n,
            });
        }

        let pairs = n - lag;
        let x = returns.slice(s![..pairs]);
        let y = returns.slice(s![lag..]);

        let bins = self.config.bins;
        let grid_x = BinGrid::fit(x, bins);
        let grid_y = BinGrid::fit(y, bins);

        // Joint occupancy over (bin_x, bin_y); marginals are its row and
        // column sums so the three distributions stay consistent.
        let mut joint = vec![0usize; bins * bins];
        for (&xv, &yv) in x.iter().zip(y.iter()) {
            joint[grid_x.index(xv) * bins + grid_y.index(yv)] += 1;
        }

        let mut marginal_x = vec![0usize; bins];
        let mut marginal_y = vec![0usize; bins];
        for i in 0..bins {
            for j in 0..bins {
                let c = joint[i * bins + j];
                marginal_x[i] += c;
                marginal_y[j] += c;
            }
        }

        let total = pairs as f64;
        let mut mi = 0.0;
        for i in 0..bins {
            for j in 0..bins {
                let c = joint[i * bins + j];
                if c == 0 {
                    continue;
                }
                let p_xy = c as f64 / total;
                let p_x = marginal_x[i] as f64 / total;
                let p_y = marginal_y[j] as f64 / total;
                mi += p_xy * (p_xy / (p_x * p_y)).ln();
            }
        }

        Ok((mi / (bins as f64).ln()).max(0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_config_default() {
        let config = MutualInformationConfig::default();
        assert_eq!(config.bins, 30);
        assert_eq!(config.lag, 1);
    }

    #[test]
    fn test_zero_lag_rejected() {
        let result = MutualInformationEstimator::new(MutualInformationConfig {
            lag: 0,
            ..Default::default()
        });
        assert!(matches!(result, Err(RiskError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_series_not_longer_than_lag() {
        let estimator = MutualInformationEstimator::new(MutualInformationConfig {
            lag: 5,
            ..Default::default()
        })
        .unwrap();
        let returns = Array1::from(vec![0.01, -0.02, 0.03, 0.0, 0.01]);
        assert!(matches!(
            estimator.estimate(&returns),
            Err(RiskError::InsufficientData {
                estimator: Estimator::MutualInformation,
                required: 6,
                actual: 5,
            })
        ));
    }

    #[test]
    fn test_constant_series_has_zero_mi() {
        let estimator = MutualInformationEstimator::try_default().unwrap();
        let returns = Array1::from(vec![0.02; 100]);
        let mi = estimator.estimate(&returns).unwrap();
        assert_relative_eq!(mi, 0.0);
    }

    #[test]
    fn test_alternating_series_is_fully_determined() {
        let estimator = MutualInformationEstimator::try_default().unwrap();
        // x_{t+1} is a deterministic function of x_t, so I = H(X) = ln(2)
        let values: Vec<f64> = (0..200)
            .map(|i| if i % 2 == 0 { -0.01 } else { 0.01 })
            .collect();
        let mi = estimator.estimate(&Array1::from(values)).unwrap();
        // 199 pairs split 100/99, so the estimate sits a hair below ln(2)
        assert_relative_eq!(mi, 2.0_f64.ln() / 30.0_f64.ln(), epsilon = 1e-3);
    }

    #[test]
    fn test_mi_is_non_negative() {
        let estimator = MutualInformationEstimator::try_default().unwrap();
        let values: Vec<f64> = (0..500).map(|i| ((i * 73) % 211) as f64 / 210.0).collect();
        let mi = estimator.estimate(&Array1::from(values)).unwrap();
        assert!(mi >= 0.0);
    }
}
