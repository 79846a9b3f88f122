//! Entities tracked by the dashboard: wallets, exchanges, mixers, services.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// An address-level actor observed on the network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Unique entity identifier
    pub id: String,
    /// Primary on-chain address
    pub address: String,
    /// Human-readable label, populated only for known exchanges
    pub label: Option<String>,
    /// Classification of the entity
    pub kind: EntityKind,
    /// Composite risk in `[0, 1)`
    pub risk: f64,
    /// Aggregate transacted volume
    pub total_volume: f64,
    /// Number of transactions attributed to the entity
    pub transaction_count: u64,
    /// First observation. Drawn independently of `last_seen`, so ordering
    /// between the two is not guaranteed.
    pub first_seen: DateTime<Utc>,
    /// Most recent observation
    pub last_seen: DateTime<Utc>,
    /// Free-form classification tags
    pub tags: Vec<String>,
    /// Whether the entity is blacklisted (risk above 0.9)
    pub blacklisted: bool,
    /// Country of registration or most likely jurisdiction
    pub country: Option<String>,
    /// Compliance posture of the entity
    pub compliance: ComplianceInfo,
}

/// Compliance posture attached to an entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceInfo {
    /// Identity-verification status
    pub kyc_status: KycStatus,
    /// Anti-money-laundering risk in `[0, 1)`
    pub aml_risk: f64,
    /// Whether the entity matches a sanctions list
    pub sanctions: bool,
}

/// Classification of an observed entity.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum EntityKind {
    Wallet,
    Exchange,
    Mixer,
    Service,
    Unknown,
}

impl EntityKind {
    pub const ALL: [EntityKind; 5] = [
        EntityKind::Wallet,
        EntityKind::Exchange,
        EntityKind::Mixer,
        EntityKind::Service,
        EntityKind::Unknown,
    ];
}

/// Identity-verification status of an entity.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum KycStatus {
    Verified,
    Pending,
    Failed,
    None,
}

impl KycStatus {
    pub const ALL: [KycStatus; 4] = [
        KycStatus::Verified,
        KycStatus::Pending,
        KycStatus::Failed,
        KycStatus::None,
    ];
}

/// Partial update applied to a stored entity by id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntityPatch {
    pub label: Option<String>,
    pub risk: Option<f64>,
    pub total_volume: Option<f64>,
    pub transaction_count: Option<u64>,
    pub last_seen: Option<DateTime<Utc>>,
    pub tags: Option<Vec<String>>,
    pub blacklisted: Option<bool>,
}

impl EntityPatch {
    /// Merges the populated fields into `entity`.
    pub fn apply(&self, entity: &mut Entity) {
        if let Some(label) = &self.label {
            entity.label = Some(label.clone());
        }
        if let Some(risk) = self.risk {
            entity.risk = risk;
        }
        if let Some(total_volume) = self.total_volume {
            entity.total_volume = total_volume;
        }
        if let Some(transaction_count) = self.transaction_count {
            entity.transaction_count = transaction_count;
        }
        if let Some(last_seen) = self.last_seen {
            entity.last_seen = last_seen;
        }
        if let Some(tags) = &self.tags {
            entity.tags = tags.clone();
        }
        if let Some(blacklisted) = self.blacklisted {
            entity.blacklisted = blacklisted;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_entity() -> Entity {
        Entity {
            id: "entity_1".to_string(),
            address: "1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa".to_string(),
            label: None,
            kind: EntityKind::Wallet,
            risk: 0.4,
            total_volume: 125_000.0,
            transaction_count: 42,
            first_seen: Utc::now(),
            last_seen: Utc::now(),
            tags: vec![],
            blacklisted: false,
            country: None,
            compliance: ComplianceInfo {
                kyc_status: KycStatus::None,
                aml_risk: 0.4,
                sanctions: false,
            },
        }
    }

    #[test]
    fn patch_merges_only_populated_fields() {
        let mut entity = sample_entity();
        let patch = EntityPatch {
            risk: Some(0.95),
            blacklisted: Some(true),
            ..Default::default()
        };
        patch.apply(&mut entity);

        assert_eq!(entity.risk, 0.95);
        assert!(entity.blacklisted);
        assert_eq!(entity.transaction_count, 42);
        assert_eq!(entity.label, None);
    }

    #[test]
    fn kyc_status_serializes_snake_case() {
        let json = serde_json::to_string(&KycStatus::None).unwrap();
        assert_eq!(json, "\"none\"");
        assert_eq!(KycStatus::Verified.to_string(), "verified");
    }
}
