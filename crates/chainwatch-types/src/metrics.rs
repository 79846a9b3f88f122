//! Aggregate dashboard metrics.

use serde::{Deserialize, Serialize};

/// Flat snapshot of dashboard-level aggregates.
///
/// The eight counters are regenerated wholesale by the generator; they are
/// never derived incrementally from the live collections, so they need not
/// be consistent with them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardMetrics {
    pub total_transactions: u64,
    pub total_volume: f64,
    pub high_risk_transactions: u64,
    pub alerts_today: u64,
    pub average_risk: f64,
    pub network_size: u64,
    pub compliance_score: f64,
    /// Throughput in transactions per second
    pub processing_speed: u64,
}

impl Default for DashboardMetrics {
    fn default() -> Self {
        Self {
            total_transactions: 0,
            total_volume: 0.0,
            high_risk_transactions: 0,
            alerts_today: 0,
            average_risk: 0.0,
            network_size: 0,
            compliance_score: 0.95,
            processing_speed: 1200,
        }
    }
}
