//! Model risk scores published by the simulated scoring pipeline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A snapshot of the model's risk sub-scores.
///
/// Every sub-score is drawn independently from its own bounded range, so
/// no cross-field consistency holds: `overall` is not an aggregate of the
/// others and may well sit below any of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskScore {
    pub overall: f64,
    pub aml: f64,
    pub sanctions: f64,
    pub geographic: f64,
    pub behavioral: f64,
    pub network: f64,
    pub velocity: f64,
    pub timestamp: DateTime<Utc>,
}
