//! Compliance alerts raised against entities and transactions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// A compliance alert raised by the monitoring pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    /// Unique alert identifier
    pub id: String,
    /// Compliance category the alert belongs to
    pub category: AlertCategory,
    /// Operational severity
    pub severity: AlertSeverity,
    /// Short headline, fixed per category
    pub title: String,
    /// Free-text description
    pub description: String,
    /// When the alert was raised
    pub timestamp: DateTime<Utc>,
    /// Lifecycle status
    pub status: AlertStatus,
    /// Ids of entities referenced by the alert
    pub entities: Vec<String>,
    /// Ids of transactions referenced by the alert
    pub transactions: Vec<String>,
    /// Analyst notes
    pub notes: Vec<String>,
}

/// Compliance category of an alert.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AlertCategory {
    Aml,
    Sanctions,
    UnusualActivity,
    TravelRule,
    Kyc,
}

impl AlertCategory {
    pub const ALL: [AlertCategory; 5] = [
        AlertCategory::Aml,
        AlertCategory::Sanctions,
        AlertCategory::UnusualActivity,
        AlertCategory::TravelRule,
        AlertCategory::Kyc,
    ];

    /// Fixed headline used for alerts of this category.
    pub fn title(&self) -> &'static str {
        match self {
            AlertCategory::Aml => "Potential Money Laundering Activity",
            AlertCategory::Sanctions => "OFAC Sanctions List Match",
            AlertCategory::UnusualActivity => "Unusual Transaction Pattern",
            AlertCategory::TravelRule => "Travel Rule Compliance Required",
            AlertCategory::Kyc => "KYC Verification Failed",
        }
    }

    /// Human-readable category name ("travel_rule" becomes "travel rule").
    pub fn human_label(&self) -> String {
        self.to_string().replace('_', " ")
    }
}

/// Operational severity of an alert.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Display, EnumIter, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AlertSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl AlertSeverity {
    pub const ALL: [AlertSeverity; 4] = [
        AlertSeverity::Low,
        AlertSeverity::Medium,
        AlertSeverity::High,
        AlertSeverity::Critical,
    ];
}

/// Lifecycle status of an alert.
///
/// The generator draws this uniformly, so a freshly raised alert can be
/// born already resolved or marked false positive. That mirrors the
/// observed behavior of the system being simulated and is preserved
/// deliberately, pending product clarification.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AlertStatus {
    Open,
    Investigating,
    Resolved,
    FalsePositive,
}

impl AlertStatus {
    pub const ALL: [AlertStatus; 4] = [
        AlertStatus::Open,
        AlertStatus::Investigating,
        AlertStatus::Resolved,
        AlertStatus::FalsePositive,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_a_title() {
        for category in AlertCategory::ALL {
            assert!(!category.title().is_empty());
        }
    }

    #[test]
    fn human_label_replaces_underscores() {
        assert_eq!(AlertCategory::TravelRule.human_label(), "travel rule");
        assert_eq!(AlertCategory::Aml.human_label(), "aml");
    }

    #[test]
    fn severity_orders_low_to_critical() {
        assert!(AlertSeverity::Low < AlertSeverity::Critical);
        assert!(AlertSeverity::Medium < AlertSeverity::High);
    }
}
