//! Hurst Exponent Estimator (rescaled-range analysis)
//!
//! Characterizes long-range persistence of a return series. For each window
//! length n in a log-spaced progression, the series is split into
//! non-overlapping windows; each window contributes the range R of its
//! mean-centered cumulative sum divided by its standard deviation S. The
//! slope of ln(mean R/S) against ln(n), fitted by ordinary least squares,
//! is the Hurst estimate: above 0.5 indicates persistence, below 0.5
//! mean-reversion.

use crate::error::{Estimator, RiskError};
use ndarray::{Array1, ArrayView1};
use serde::{Deserialize, Serialize};

/// Configuration for the Hurst exponent estimator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HurstConfig {
    /// Smallest derived window length (default: 8, must be >= 2)
    pub min_window: usize,
    /// Number of log-spaced window lengths to derive between `min_window`
    /// and half the series length (default: 10, must be >= 3)
    pub num_windows: usize,
    /// Explicit window lengths, overriding the derived progression.
    /// Requires at least 3 distinct lengths, each >= 2.
    pub window_lengths: Option<Vec<usize>>,
}

impl Default for HurstConfig {
    fn default() -> Self {
        Self {
            min_window: 8,
            num_windows: 10,
            window_lengths: None,
        }
    }
}

/// Hurst exponent estimator via rescaled-range analysis
#[derive(Debug, Clone)]
pub struct HurstEstimator {
    config: HurstConfig,
}

impl HurstEstimator {
    /// Create a new Hurst estimator with the given configuration
    pub fn new(config: HurstConfig) -> Result<Self, RiskError> {
        if config.min_window < 2 {
            return Err(RiskError::InvalidConfiguration(format!(
                "minimum window length must be at least 2, got {}",
                config.min_window
            )));
        }
        if config.num_windows < 3 {
            return Err(RiskError::InvalidConfiguration(format!(
                "window progression needs at least 3 lengths, got {}",
                config.num_windows
            )));
        }
        if let Some(lengths) = &config.window_lengths {
            if lengths.iter().any(|&w| w < 2) {
                return Err(RiskError::InvalidConfiguration(
                    "explicit window lengths must all be at least 2".to_string(),
                ));
            }
            let mut distinct = lengths.clone();
            distinct.sort_unstable();
            distinct.dedup();
            if distinct.len() < 3 {
                return Err(RiskError::InvalidConfiguration(format!(
                    "explicit window lengths need at least 3 distinct values, got {}",
                    distinct.len()
                )));
            }
        }
        Ok(Self { config })
    }

    /// Create with default configuration.
    ///
    /// # Errors
    /// Returns an error if the default configuration is invalid (should not happen).
    pub fn try_default() -> Result<Self, RiskError> {
        Self::new(HurstConfig::default())
    }

    /// Estimate the Hurst exponent of a return series.
    ///
    /// Windows with zero standard deviation (flat sub-series) are excluded
    /// from the average for their length; lengths with no surviving window
    /// are excluded from the regression. Fewer than 2 surviving (n, R/S)
    /// points is `InsufficientData` — a constant series always ends there.
    pub fn estimate(&self, returns: &Array1<f64>) -> Result<f64, RiskError> {
        let n = returns.len();
        let lengths = self.window_lengths(n)?;

        let mut points: Vec<(f64, f64)> = Vec::with_capacity(lengths.len());
        for &w in &lengths {
            let segments = n / w;
            if segments == 0 {
                continue;
            }
            let mut rs_sum = 0.0;
            let mut rs_count = 0usize;
            for seg in 0..segments {
                let window = returns.slice(ndarray::s![seg * w..(seg + 1) * w]);
                if let Some(rs) = rescaled_range(window) {
                    rs_sum += rs;
                    rs_count += 1;
                }
            }
            if rs_count > 0 {
                let mean_rs = rs_sum / rs_count as f64;
                if mean_rs > 0.0 {
                    points.push(((w as f64).ln(), mean_rs.ln()));
                }
            }
        }

        if points.len() < 2 {
            return Err(RiskError::InsufficientData {
                estimator: Estimator::Hurst,
                required: 2,
                actual: points.len(),
            });
        }

        Ok(ols_slope(&points))
    }

    /// Resolve the window-length progression for a series of length `n`:
    /// either the caller's explicit set or `num_windows` log-spaced lengths
    /// from `min_window` up to n/2, deduplicated after rounding.
    fn window_lengths(&self, n: usize) -> Result<Vec<usize>, RiskError> {
        if let Some(lengths) = &self.config.window_lengths {
            let mut sorted = lengths.clone();
            sorted.sort_unstable();
            sorted.dedup();
            return Ok(sorted);
        }

        let min_w = self.config.min_window;
        let max_w = n / 2;
        if max_w < min_w {
            return Err(RiskError::InsufficientData {
                estimator: Estimator::Hurst,
                required: 2 * min_w,
                actual: n,
            });
        }

        let count = self.config.num_windows;
        let ratio = max_w as f64 / min_w as f64;
        let mut lengths: Vec<usize> = (0..count)
            .map(|i| {
                let t = i as f64 / (count - 1) as f64;
                (min_w as f64 * ratio.powf(t)).round() as usize
            })
            .collect();
        lengths.sort_unstable();
        lengths.dedup();

        if lengths.len() < 3 {
            return Err(RiskError::InsufficientData {
                estimator: Estimator::Hurst,
                required: 3,
                actual: lengths.len(),
            });
        }
        Ok(lengths)
    }
}

/// R/S statistic of one window: range of the mean-centered cumulative sum
/// over the population standard deviation. Returns `None` for a flat window
/// (S = 0), which the caller excludes rather than dividing through.
fn rescaled_range(window: ArrayView1<'_, f64>) -> Option<f64> {
    let w = window.len() as f64;
    let mean = window.sum() / w;

    let mut cumulative = 0.0;
    let mut max = f64::NEG_INFINITY;
    let mut min = f64::INFINITY;
    let mut sq_dev = 0.0;
    for &v in window {
        let centered = v - mean;
        cumulative += centered;
        max = max.max(cumulative);
        min = min.min(cumulative);
        sq_dev += centered * centered;
    }

    let std_dev = (sq_dev / w).sqrt();
    if std_dev > 0.0 {
        Some((max - min) / std_dev)
    } else {
        None
    }
}

/// Ordinary least squares slope through (x, y) points.
fn ols_slope(points: &[(f64, f64)]) -> f64 {
    let k = points.len() as f64;
    let mean_x = points.iter().map(|&(x, _)| x).sum::<f64>() / k;
    let mean_y = points.iter().map(|&(_, y)| y).sum::<f64>() / k;

    let mut numerator = 0.0;
    let mut denominator = 0.0;
    for &(x, y) in points {
        let dx = x - mean_x;
        numerator += dx * (y - mean_y);
        denominator += dx * dx;
    }
    numerator / denominator
}
