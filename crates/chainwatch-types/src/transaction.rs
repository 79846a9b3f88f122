//! Transaction records observed by the monitoring dashboard.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// A single observed on-chain transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique transaction identifier
    pub id: String,
    /// On-chain transaction hash
    pub hash: String,
    /// Transferred amount in the transaction currency, always positive
    pub amount: f64,
    /// Currency of the transfer
    pub currency: Currency,
    /// Source address
    pub from: String,
    /// Destination address (may equal the source)
    pub to: String,
    /// Observation timestamp
    pub timestamp: DateTime<Utc>,
    /// Composite risk in `[0, 1)`
    pub risk: f64,
    /// Risk-factor labels that contributed to the score (0..=3 entries)
    pub risk_factors: Vec<String>,
    /// Review status, derived from the risk score
    pub status: TransactionStatus,
    /// What kind of movement this transaction represents
    pub kind: TransactionKind,
    /// Name of the network the transaction settled on
    pub network: String,
    /// Network fee paid, always positive
    pub fee: f64,
    /// Block the transaction was included in, if confirmed on-chain
    pub block_height: Option<u64>,
    /// Number of confirmations observed so far
    pub confirmations: Option<u32>,
}

/// Review status of a transaction, derived deterministically from risk.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TransactionStatus {
    Confirmed,
    Pending,
    Flagged,
}

impl TransactionStatus {
    /// Derives the status from a risk score: risk above 0.8 is flagged,
    /// above 0.6 pending review, anything else confirmed.
    pub fn from_risk(risk: f64) -> Self {
        if risk > 0.8 {
            TransactionStatus::Flagged
        } else if risk > 0.6 {
            TransactionStatus::Pending
        } else {
            TransactionStatus::Confirmed
        }
    }
}

/// Kind of value movement a transaction represents.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
    Transfer,
    Trade,
}

impl TransactionKind {
    pub const ALL: [TransactionKind; 4] = [
        TransactionKind::Deposit,
        TransactionKind::Withdrawal,
        TransactionKind::Transfer,
        TransactionKind::Trade,
    ];
}

/// Currencies tracked by the dashboard.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum Currency {
    Btc,
    Eth,
    Usdt,
    Usdc,
    Bnb,
    Ada,
    Sol,
    Xrp,
    Dot,
    Avax,
}

impl Currency {
    pub const ALL: [Currency; 10] = [
        Currency::Btc,
        Currency::Eth,
        Currency::Usdt,
        Currency::Usdc,
        Currency::Bnb,
        Currency::Ada,
        Currency::Sol,
        Currency::Xrp,
        Currency::Dot,
        Currency::Avax,
    ];

    /// Name of the network a transaction in this currency settles on.
    pub fn network(&self) -> &'static str {
        match self {
            Currency::Btc => "Bitcoin",
            Currency::Eth => "Ethereum",
            _ => "Binance Smart Chain",
        }
    }
}

/// Partial update applied to a stored transaction by id.
///
/// Only the populated fields are merged; everything else is left as is.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransactionPatch {
    pub risk: Option<f64>,
    pub status: Option<TransactionStatus>,
    pub fee: Option<f64>,
    pub block_height: Option<u64>,
    pub confirmations: Option<u32>,
}

impl TransactionPatch {
    /// Merges the populated fields into `transaction`.
    pub fn apply(&self, transaction: &mut Transaction) {
        if let Some(risk) = self.risk {
            transaction.risk = risk;
        }
        if let Some(status) = self.status {
            transaction.status = status;
        }
        if let Some(fee) = self.fee {
            transaction.fee = fee;
        }
        if let Some(block_height) = self.block_height {
            transaction.block_height = Some(block_height);
        }
        if let Some(confirmations) = self.confirmations {
            transaction.confirmations = Some(confirmations);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, TransactionStatus::Confirmed)]
    #[case(0.6, TransactionStatus::Confirmed)]
    #[case(0.600001, TransactionStatus::Pending)]
    #[case(0.8, TransactionStatus::Pending)]
    #[case(0.800001, TransactionStatus::Flagged)]
    #[case(0.999, TransactionStatus::Flagged)]
    fn status_thresholds(#[case] risk: f64, #[case] expected: TransactionStatus) {
        assert_eq!(TransactionStatus::from_risk(risk), expected);
    }

    #[test]
    fn currency_serializes_as_symbol() {
        let json = serde_json::to_string(&Currency::Btc).unwrap();
        assert_eq!(json, "\"BTC\"");
        assert_eq!(Currency::Avax.to_string(), "AVAX");
    }

    #[test]
    fn fixed_pools_cover_every_variant() {
        use strum::IntoEnumIterator;
        assert_eq!(Currency::iter().count(), Currency::ALL.len());
        assert_eq!(TransactionKind::iter().count(), TransactionKind::ALL.len());
    }

    #[test]
    fn network_derivation() {
        assert_eq!(Currency::Btc.network(), "Bitcoin");
        assert_eq!(Currency::Eth.network(), "Ethereum");
        assert_eq!(Currency::Usdt.network(), "Binance Smart Chain");
    }

    #[test]
    fn patch_merges_only_populated_fields() {
        let mut tx = Transaction {
            id: "tx_1".to_string(),
            hash: "0xabc".to_string(),
            amount: 500.0,
            currency: Currency::Eth,
            from: "a".to_string(),
            to: "b".to_string(),
            timestamp: Utc::now(),
            risk: 0.2,
            risk_factors: vec![],
            status: TransactionStatus::Confirmed,
            kind: TransactionKind::Transfer,
            network: "Ethereum".to_string(),
            fee: 2.0,
            block_height: None,
            confirmations: None,
        };

        let patch = TransactionPatch {
            confirmations: Some(6),
            ..Default::default()
        };
        patch.apply(&mut tx);

        assert_eq!(tx.confirmations, Some(6));
        assert_eq!(tx.risk, 0.2);
        assert_eq!(tx.status, TransactionStatus::Confirmed);
    }
}
