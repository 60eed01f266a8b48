#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/hobart/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod classifier;
pub mod detector;
pub mod entropy;
pub mod error;
mod histogram;
pub mod hurst;
pub mod mutual_information;

// Re-export main types
pub use classifier::RiskFlag;
pub use detector::{DetectorConfig, RiskAssessment, RiskDetector, detect_risk_factors};
pub use entropy::{EntropyConfig, EntropyEstimator};
pub use error::{Estimator, RiskError};
pub use hurst::{HurstConfig, HurstEstimator};
pub use mutual_information::{MutualInformationConfig, MutualInformationEstimator};
