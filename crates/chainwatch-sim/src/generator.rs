//! Programmatic generator for simulated compliance records.
//!
//! Every record kind the dashboard displays is produced here from bounded
//! random distributions over the fixed pools in [`crate::constants`]. A
//! generator is a pure function of its random source: seeding two
//! generators identically reproduces every id, pick, and amount (only the
//! wall-clock timestamps differ between runs).

use chrono::{DateTime, Duration, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use chainwatch_types::{
    Alert, AlertCategory, AlertSeverity, AlertStatus, ComplianceInfo, Currency, DashboardMetrics,
    Entity, EntityKind, GraphLink, GraphNode, KycStatus, NetworkGraph, NodeKind, RiskScore,
    Transaction, TransactionKind, TransactionStatus,
};

use crate::constants::{COUNTRIES, ENTITY_TAGS, EXCHANGE_NAMES, RISK_FACTORS, WALLET_ADDRESSES};

/// Number of nodes in every generated network graph.
pub const GRAPH_NODE_COUNT: usize = 20;

/// Collection sizes of the initial snapshot.
pub const INITIAL_TRANSACTIONS: usize = 50;
pub const INITIAL_ENTITIES: usize = 25;
pub const INITIAL_ALERTS: usize = 10;
pub const INITIAL_RISK_SCORES: usize = 20;

/// Generator for simulated compliance records.
pub struct EventGenerator {
    rng: rand::rngs::StdRng,
}

impl Default for EventGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl EventGenerator {
    /// Create a generator seeded from system entropy.
    pub fn new() -> Self {
        use rand::SeedableRng;
        Self {
            rng: rand::rngs::StdRng::from_entropy(),
        }
    }

    /// Create a generator with a specific seed, for reproducible output.
    pub fn with_seed(seed: u64) -> Self {
        use rand::SeedableRng;
        Self {
            rng: rand::rngs::StdRng::seed_from_u64(seed),
        }
    }

    /// Uniform draw in `[0, 1)`.
    fn unit(&mut self) -> f64 {
        self.rng.gen()
    }

    /// Uniform pick from a fixed pool.
    fn pick<T: Copy>(&mut self, pool: &[T]) -> T {
        pool[self.rng.gen_range(0..pool.len())]
    }

    /// Record id with a domain prefix, derived from the random source so
    /// seeded generators reproduce it.
    fn record_id(&mut self, prefix: &str) -> String {
        format!("{prefix}_{:016x}", self.rng.gen::<u64>())
    }

    /// 32-byte transaction hash in `0x`-prefixed hex.
    fn transaction_hash(&mut self) -> String {
        let mut hash = String::with_capacity(66);
        hash.push_str("0x");
        for _ in 0..4 {
            hash.push_str(&format!("{:016x}", self.rng.gen::<u64>()));
        }
        hash
    }

    /// Timestamp a uniform amount of time in the past, within `window`.
    fn backdated(&mut self, window: Duration) -> DateTime<Utc> {
        let offset_ms = self.rng.gen_range(0..window.num_milliseconds());
        Utc::now() - Duration::milliseconds(offset_ms)
    }

    /// Generate one transaction observed within the past hour.
    pub fn transaction(&mut self) -> Transaction {
        let currency = self.pick(&Currency::ALL);
        let risk = self.unit();
        let factor_count = self.rng.gen_range(0..=3);
        let risk_factors = RISK_FACTORS
            .choose_multiple(&mut self.rng, factor_count)
            .map(|factor| factor.to_string())
            .collect();

        Transaction {
            id: self.record_id("tx"),
            hash: self.transaction_hash(),
            amount: self.unit() * 100_000.0 + 100.0,
            currency,
            from: self.pick(&WALLET_ADDRESSES).to_string(),
            to: self.pick(&WALLET_ADDRESSES).to_string(),
            timestamp: self.backdated(Duration::hours(1)),
            risk,
            risk_factors,
            status: TransactionStatus::from_risk(risk),
            kind: self.pick(&TransactionKind::ALL),
            network: currency.network().to_string(),
            fee: self.unit() * 50.0 + 1.0,
            block_height: Some(self.rng.gen_range(700_000..1_700_000)),
            confirmations: Some(self.rng.gen_range(1..=20)),
        }
    }

    /// Generate one entity. Only exchanges carry a label.
    pub fn entity(&mut self) -> Entity {
        let kind = self.pick(&EntityKind::ALL);
        let risk = self.unit();
        let label = if kind == EntityKind::Exchange {
            Some(self.pick(&EXCHANGE_NAMES).to_string())
        } else {
            None
        };
        let tags = ENTITY_TAGS
            .iter()
            .filter(|_| self.rng.gen_bool(0.3))
            .map(|tag| tag.to_string())
            .collect();

        Entity {
            id: self.record_id("entity"),
            address: self.pick(&WALLET_ADDRESSES).to_string(),
            label,
            kind,
            risk,
            total_volume: self.unit() * 10_000_000.0 + 10_000.0,
            transaction_count: self.rng.gen_range(10..10_010),
            // first_seen and last_seen are drawn independently; last_seen
            // can precede first_seen and that is preserved as observed.
            first_seen: self.backdated(Duration::days(365)),
            last_seen: self.backdated(Duration::days(1)),
            tags,
            blacklisted: risk > 0.9,
            country: Some(self.pick(&COUNTRIES).to_string()),
            compliance: ComplianceInfo {
                kyc_status: self.pick(&KycStatus::ALL),
                aml_risk: risk,
                sanctions: risk > 0.95,
            },
        }
    }

    /// Generate one alert raised within the past day.
    ///
    /// The lifecycle status is drawn uniformly, so an alert can be born
    /// already resolved or marked false positive.
    pub fn alert(&mut self) -> Alert {
        let category = self.pick(&AlertCategory::ALL);

        Alert {
            id: self.record_id("alert"),
            category,
            severity: self.pick(&AlertSeverity::ALL),
            title: category.title().to_string(),
            description: format!(
                "Automated system detected {} requiring immediate attention.",
                category.human_label()
            ),
            timestamp: self.backdated(Duration::days(1)),
            status: self.pick(&AlertStatus::ALL),
            entities: vec![self.record_id("entity")],
            transactions: vec![self.record_id("tx")],
            notes: Vec::new(),
        }
    }

    /// Generate the entity network graph.
    ///
    /// Always [`GRAPH_NODE_COUNT`] nodes: the first five are exchanges
    /// named from the exchange pool, the next ten wallets, the last five
    /// mixers. Candidate links are drawn as random endpoint pairs and
    /// self-loop pairs are discarded rather than re-drawn, so the realized
    /// link count is probabilistic with an upper bound of 1.5x the node
    /// count.
    pub fn network_graph(&mut self) -> NetworkGraph {
        let nodes = (0..GRAPH_NODE_COUNT)
            .map(|i| {
                let kind = if i < 5 {
                    NodeKind::Exchange
                } else if i < 15 {
                    NodeKind::Wallet
                } else {
                    NodeKind::Mixer
                };
                let label = if i < 5 {
                    EXCHANGE_NAMES[i].to_string()
                } else {
                    format!("Wallet {i}")
                };
                GraphNode {
                    id: format!("node_{i}"),
                    label,
                    kind,
                    risk: self.unit(),
                    volume: self.unit() * 1_000_000.0 + 10_000.0,
                }
            })
            .collect();

        let mut links = Vec::new();
        for _ in 0..GRAPH_NODE_COUNT * 3 / 2 {
            let source = self.rng.gen_range(0..GRAPH_NODE_COUNT);
            let target = self.rng.gen_range(0..GRAPH_NODE_COUNT);
            if source == target {
                continue;
            }
            links.push(GraphLink {
                source: format!("node_{source}"),
                target: format!("node_{target}"),
                value: self.unit() * 100_000.0 + 1_000.0,
                risk: self.unit(),
            });
        }

        NetworkGraph { nodes, links }
    }

    /// Generate one aggregate metrics snapshot.
    ///
    /// The eight fields are independent draws; no cross-field consistency
    /// is enforced.
    pub fn metrics(&mut self) -> DashboardMetrics {
        DashboardMetrics {
            total_transactions: self.rng.gen_range(50_000..150_000),
            total_volume: self.unit() * 1_000_000_000.0 + 100_000_000.0,
            high_risk_transactions: self.rng.gen_range(50..550),
            alerts_today: self.rng.gen_range(5..55),
            average_risk: self.unit() * 0.3 + 0.2,
            network_size: self.rng.gen_range(5_000..15_000),
            compliance_score: self.unit() * 0.1 + 0.9,
            processing_speed: self.rng.gen_range(800..1300),
        }
    }

    /// Generate one risk-score snapshot stamped with the current time.
    pub fn risk_score(&mut self) -> RiskScore {
        RiskScore {
            overall: self.unit() * 0.8 + 0.1,
            aml: self.unit() * 0.7 + 0.1,
            sanctions: self.unit() * 0.3,
            geographic: self.unit() * 0.5 + 0.1,
            behavioral: self.unit() * 0.6 + 0.1,
            network: self.unit() * 0.8 + 0.1,
            velocity: self.unit() * 0.7 + 0.1,
            timestamp: Utc::now(),
        }
    }

    /// Generate the full initial snapshot the dashboard is seeded with.
    pub fn initial_snapshot(&mut self) -> InitialSnapshot {
        InitialSnapshot {
            transactions: (0..INITIAL_TRANSACTIONS).map(|_| self.transaction()).collect(),
            entities: (0..INITIAL_ENTITIES).map(|_| self.entity()).collect(),
            alerts: (0..INITIAL_ALERTS).map(|_| self.alert()).collect(),
            network_graph: self.network_graph(),
            metrics: self.metrics(),
            risk_scores: (0..INITIAL_RISK_SCORES).map(|_| self.risk_score()).collect(),
        }
    }
}

/// Everything the dashboard is seeded with on first activation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InitialSnapshot {
    pub transactions: Vec<Transaction>,
    pub entities: Vec<Entity>,
    pub alerts: Vec<Alert>,
    pub network_graph: NetworkGraph,
    pub metrics: DashboardMetrics,
    pub risk_scores: Vec<RiskScore>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transaction_fields_stay_in_bounds() {
        let mut generator = EventGenerator::with_seed(7);
        for _ in 0..200 {
            let tx = generator.transaction();
            assert!(tx.amount >= 100.0 && tx.amount < 100_100.0);
            assert!((0.0..1.0).contains(&tx.risk));
            assert!(tx.fee >= 1.0 && tx.fee < 51.0);
            assert!(tx.risk_factors.len() <= 3);
            assert_eq!(tx.network, tx.currency.network());
            assert!(tx.hash.starts_with("0x"));
            assert_eq!(tx.hash.len(), 66);
        }
    }

    #[test]
    fn risk_factors_are_distinct() {
        let mut generator = EventGenerator::with_seed(11);
        for _ in 0..200 {
            let tx = generator.transaction();
            let mut factors = tx.risk_factors.clone();
            factors.sort();
            factors.dedup();
            assert_eq!(factors.len(), tx.risk_factors.len());
        }
    }

    #[test]
    fn only_exchanges_are_labeled() {
        let mut generator = EventGenerator::with_seed(13);
        for _ in 0..200 {
            let entity = generator.entity();
            assert_eq!(entity.label.is_some(), entity.kind == EntityKind::Exchange);
            assert_eq!(entity.blacklisted, entity.risk > 0.9);
            assert_eq!(entity.compliance.aml_risk, entity.risk);
            assert_eq!(entity.compliance.sanctions, entity.risk > 0.95);
        }
    }

    #[test]
    fn alert_title_matches_category() {
        let mut generator = EventGenerator::with_seed(17);
        for _ in 0..100 {
            let alert = generator.alert();
            assert_eq!(alert.title, alert.category.title());
            assert!(alert.description.contains(&alert.category.human_label()));
            assert!(alert.notes.is_empty());
            assert_eq!(alert.entities.len(), 1);
            assert_eq!(alert.transactions.len(), 1);
        }
    }

    #[test]
    fn risk_score_ranges() {
        let mut generator = EventGenerator::with_seed(19);
        for _ in 0..100 {
            let score = generator.risk_score();
            assert!((0.1..0.9).contains(&score.overall));
            assert!((0.1..0.8).contains(&score.aml));
            assert!((0.0..0.3).contains(&score.sanctions));
            assert!((0.1..0.6).contains(&score.geographic));
            assert!((0.1..0.7).contains(&score.behavioral));
            assert!((0.1..0.9).contains(&score.network));
            assert!((0.1..0.8).contains(&score.velocity));
        }
    }
}
