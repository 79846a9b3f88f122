//! The shared observable store behind the dashboard.

use std::sync::{Mutex, PoisonError, RwLock, RwLockWriteGuard};

use chrono::{DateTime, Utc};
use serde::Serialize;
use strum::Display;
use tokio::sync::mpsc;
use tracing::debug;

use chainwatch_types::{
    Alert, AlertStatus, DashboardMetrics, Entity, EntityPatch, NetworkGraph, RiskScore,
    Transaction, TransactionPatch,
};

/// Upper bound on the stored transaction collection.
pub const MAX_TRANSACTIONS: usize = 100;
/// Upper bound on the stored risk-score collection.
pub const MAX_RISK_SCORES: usize = 100;

/// Owned copy of the full store state, handed to renderers.
///
/// Collections bounded by the store are ordered newest-first.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSnapshot {
    pub transactions: Vec<Transaction>,
    pub entities: Vec<Entity>,
    pub alerts: Vec<Alert>,
    pub metrics: DashboardMetrics,
    pub network_graph: NetworkGraph,
    pub risk_scores: Vec<RiskScore>,

    /// Id of the transaction highlighted in the UI
    pub selected_transaction: Option<String>,
    /// Id of the entity highlighted in the UI
    pub selected_entity: Option<String>,
    pub sidebar_open: bool,
    pub loading: bool,
    pub error: Option<String>,

    /// Whether the live feed is attached
    pub connected: bool,
    /// Stamped on every domain-data mutation
    pub last_update: Option<DateTime<Utc>>,
}

impl Default for DashboardSnapshot {
    fn default() -> Self {
        Self {
            transactions: Vec::new(),
            entities: Vec::new(),
            alerts: Vec::new(),
            metrics: DashboardMetrics::default(),
            network_graph: NetworkGraph::default(),
            risk_scores: Vec::new(),
            selected_transaction: None,
            selected_entity: None,
            sidebar_open: true,
            loading: false,
            error: None,
            connected: false,
            last_update: None,
        }
    }
}

/// Names a bulk-replaceable collection in store events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum CollectionKind {
    Transactions,
    Entities,
    Alerts,
    Metrics,
    NetworkGraph,
    RiskScores,
}

/// Notification fanned out to subscribers after every effective mutation.
///
/// No-op mutations (patching or resolving an absent id, re-resolving an
/// already resolved alert) emit nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    CollectionReplaced(CollectionKind),
    TransactionInserted { id: String },
    TransactionUpdated { id: String },
    EntityUpdated { id: String },
    AlertInserted { id: String },
    AlertResolved { id: String },
    RiskScoreInserted,
    ConnectionChanged { connected: bool },
    UiChanged,
}

/// Single authoritative holder of UI-visible state.
///
/// All mutation methods are synchronous and infallible: they run to
/// completion atomically and notify every live subscriber before
/// returning. Operating on an id that is not present is a silent no-op by
/// contract, not an error.
#[derive(Default)]
pub struct DashboardStore {
    state: RwLock<DashboardSnapshot>,
    subscribers: Mutex<Vec<mpsc::UnboundedSender<StoreEvent>>>,
}

impl DashboardStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a subscriber. Every effective mutation is delivered to the
    /// returned receiver in mutation order.
    pub fn subscribe(&self) -> mpsc::UnboundedReceiver<StoreEvent> {
        let (sender, receiver) = mpsc::unbounded_channel();
        self.subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(sender);
        receiver
    }

    /// Owned copy of the current state.
    pub fn snapshot(&self) -> DashboardSnapshot {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, DashboardSnapshot> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn notify(&self, event: StoreEvent) {
        let mut subscribers = self
            .subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        subscribers.retain(|sender| sender.send(event.clone()).is_ok());
    }

    /// Stamped mutation: runs `mutate` under the write lock, stamps
    /// `last_update`, then notifies.
    fn apply(&self, event: StoreEvent, mutate: impl FnOnce(&mut DashboardSnapshot)) {
        {
            let mut state = self.write_state();
            mutate(&mut state);
            state.last_update = Some(Utc::now());
        }
        self.notify(event);
    }

    /// Bulk replacement of one named collection.
    fn replace(&self, kind: CollectionKind, mutate: impl FnOnce(&mut DashboardSnapshot)) {
        debug!(collection = %kind, "collection replaced");
        self.apply(StoreEvent::CollectionReplaced(kind), mutate);
    }

    // Bulk collection replacement.

    pub fn set_transactions(&self, transactions: Vec<Transaction>) {
        self.replace(CollectionKind::Transactions, |state| {
            state.transactions = transactions
        });
    }

    pub fn set_entities(&self, entities: Vec<Entity>) {
        self.replace(CollectionKind::Entities, |state| state.entities = entities);
    }

    pub fn set_alerts(&self, alerts: Vec<Alert>) {
        self.replace(CollectionKind::Alerts, |state| state.alerts = alerts);
    }

    pub fn set_metrics(&self, metrics: DashboardMetrics) {
        self.replace(CollectionKind::Metrics, |state| state.metrics = metrics);
    }

    pub fn set_network_graph(&self, graph: NetworkGraph) {
        self.replace(CollectionKind::NetworkGraph, |state| {
            state.network_graph = graph
        });
    }

    pub fn set_risk_scores(&self, scores: Vec<RiskScore>) {
        self.replace(CollectionKind::RiskScores, |state| {
            state.risk_scores = scores
        });
    }

    // Incremental insertion.

    /// Prepend a transaction, evicting the oldest beyond
    /// [`MAX_TRANSACTIONS`].
    pub fn insert_transaction(&self, transaction: Transaction) {
        let id = transaction.id.clone();
        debug!(id = %id, "transaction inserted");
        self.apply(StoreEvent::TransactionInserted { id }, |state| {
            state.transactions.insert(0, transaction);
            state.transactions.truncate(MAX_TRANSACTIONS);
        });
    }

    /// Prepend an alert. The alert collection is unbounded.
    pub fn insert_alert(&self, alert: Alert) {
        let id = alert.id.clone();
        debug!(id = %id, "alert inserted");
        self.apply(StoreEvent::AlertInserted { id }, |state| {
            state.alerts.insert(0, alert);
        });
    }

    /// Prepend a risk score, evicting the oldest beyond
    /// [`MAX_RISK_SCORES`].
    pub fn insert_risk_score(&self, score: RiskScore) {
        self.apply(StoreEvent::RiskScoreInserted, |state| {
            state.risk_scores.insert(0, score);
            state.risk_scores.truncate(MAX_RISK_SCORES);
        });
    }

    // Targeted updates. Absent ids degrade to silent no-ops.

    /// Merge `patch` into the transaction with the given id.
    pub fn update_transaction(&self, id: &str, patch: TransactionPatch) {
        let updated = {
            let mut state = self.write_state();
            match state.transactions.iter_mut().find(|t| t.id == id) {
                Some(transaction) => {
                    patch.apply(transaction);
                    state.last_update = Some(Utc::now());
                    true
                }
                None => false,
            }
        };
        if updated {
            self.notify(StoreEvent::TransactionUpdated { id: id.to_string() });
        }
    }

    /// Merge `patch` into the entity with the given id.
    pub fn update_entity(&self, id: &str, patch: EntityPatch) {
        let updated = {
            let mut state = self.write_state();
            match state.entities.iter_mut().find(|e| e.id == id) {
                Some(entity) => {
                    patch.apply(entity);
                    state.last_update = Some(Utc::now());
                    true
                }
                None => false,
            }
        };
        if updated {
            self.notify(StoreEvent::EntityUpdated { id: id.to_string() });
        }
    }

    /// Mark the alert with the given id resolved. A no-op when the id is
    /// absent or the alert is already resolved.
    pub fn resolve_alert(&self, id: &str) {
        let resolved = {
            let mut state = self.write_state();
            match state
                .alerts
                .iter_mut()
                .find(|a| a.id == id && a.status != AlertStatus::Resolved)
            {
                Some(alert) => {
                    alert.status = AlertStatus::Resolved;
                    state.last_update = Some(Utc::now());
                    true
                }
                None => false,
            }
        };
        if resolved {
            debug!(id = %id, "alert resolved");
            self.notify(StoreEvent::AlertResolved { id: id.to_string() });
        }
    }

    /// Update the connectivity flag.
    pub fn set_connected(&self, connected: bool) {
        self.apply(StoreEvent::ConnectionChanged { connected }, |state| {
            state.connected = connected;
        });
    }

    // UI-only setters: they touch nothing beyond their own field and do
    // not stamp `last_update`.

    pub fn set_sidebar_open(&self, open: bool) {
        self.write_state().sidebar_open = open;
        self.notify(StoreEvent::UiChanged);
    }

    pub fn set_selected_transaction(&self, id: Option<String>) {
        self.write_state().selected_transaction = id;
        self.notify(StoreEvent::UiChanged);
    }

    pub fn set_selected_entity(&self, id: Option<String>) {
        self.write_state().selected_entity = id;
        self.notify(StoreEvent::UiChanged);
    }

    pub fn set_loading(&self, loading: bool) {
        self.write_state().loading = loading;
        self.notify(StoreEvent::UiChanged);
    }

    pub fn set_error(&self, error: Option<String>) {
        self.write_state().error = error;
        self.notify(StoreEvent::UiChanged);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chainwatch_sim::EventGenerator;

    fn transaction_with_id(generator: &mut EventGenerator, id: &str) -> Transaction {
        let mut tx = generator.transaction();
        tx.id = id.to_string();
        tx
    }

    #[test]
    fn transaction_collection_is_bounded_newest_first() {
        let store = DashboardStore::new();
        let mut generator = EventGenerator::with_seed(1);

        for i in 0..150 {
            let tx = transaction_with_id(&mut generator, &format!("tx_{i}"));
            store.insert_transaction(tx);
            let snapshot = store.snapshot();
            assert_eq!(snapshot.transactions.len(), (i + 1).min(MAX_TRANSACTIONS));
            assert_eq!(snapshot.transactions[0].id, format!("tx_{i}"));
        }
    }

    #[test]
    fn eviction_drops_the_oldest() {
        let store = DashboardStore::new();
        let mut generator = EventGenerator::with_seed(2);

        for i in 1..=105 {
            store.insert_transaction(transaction_with_id(&mut generator, &format!("tx_{i}")));
        }

        let snapshot = store.snapshot();
        assert_eq!(snapshot.transactions.len(), MAX_TRANSACTIONS);
        // T105 down to T6; T1..=T5 evicted.
        for (offset, tx) in snapshot.transactions.iter().enumerate() {
            assert_eq!(tx.id, format!("tx_{}", 105 - offset));
        }
    }

    #[test]
    fn risk_score_collection_is_bounded() {
        let store = DashboardStore::new();
        let mut generator = EventGenerator::with_seed(3);

        for _ in 0..130 {
            store.insert_risk_score(generator.risk_score());
        }
        assert_eq!(store.snapshot().risk_scores.len(), MAX_RISK_SCORES);
    }

    #[test]
    fn alerts_prepend_and_are_unbounded() {
        let store = DashboardStore::new();
        let mut generator = EventGenerator::with_seed(4);

        for _ in 0..120 {
            store.insert_alert(generator.alert());
        }
        let snapshot = store.snapshot();
        assert_eq!(snapshot.alerts.len(), 120);
    }

    #[test]
    fn resolve_alert_with_unknown_id_is_a_noop() {
        let store = DashboardStore::new();
        let mut generator = EventGenerator::with_seed(5);
        store.set_alerts((0..5).map(|_| generator.alert()).collect());

        let before = store.snapshot();
        let mut events = store.subscribe();

        store.resolve_alert("alert_does_not_exist");

        let after = store.snapshot();
        assert_eq!(before.alerts, after.alerts);
        assert_eq!(before.last_update, after.last_update);
        assert!(events.try_recv().is_err(), "no-op must not notify");
    }

    #[test]
    fn resolve_alert_is_idempotent() {
        let store = DashboardStore::new();
        let mut generator = EventGenerator::with_seed(6);
        let mut alert = generator.alert();
        alert.status = AlertStatus::Open;
        let id = alert.id.clone();
        store.set_alerts(vec![alert]);

        store.resolve_alert(&id);
        let first = store.snapshot();
        assert_eq!(first.alerts[0].status, AlertStatus::Resolved);

        let mut events = store.subscribe();
        store.resolve_alert(&id);
        let second = store.snapshot();
        assert_eq!(first.alerts, second.alerts);
        assert_eq!(first.last_update, second.last_update);
        assert!(events.try_recv().is_err());
    }

    #[test]
    fn update_entity_merges_fields_by_id() {
        let store = DashboardStore::new();
        let mut generator = EventGenerator::with_seed(7);
        let entity = generator.entity();
        let id = entity.id.clone();
        store.set_entities(vec![entity]);

        store.update_entity(
            &id,
            EntityPatch {
                risk: Some(0.99),
                blacklisted: Some(true),
                ..Default::default()
            },
        );

        let snapshot = store.snapshot();
        assert_eq!(snapshot.entities[0].risk, 0.99);
        assert!(snapshot.entities[0].blacklisted);
    }

    #[test]
    fn update_entity_with_unknown_id_is_a_noop() {
        let store = DashboardStore::new();
        let mut generator = EventGenerator::with_seed(8);
        store.set_entities(vec![generator.entity()]);

        let before = store.snapshot();
        store.update_entity("entity_missing", EntityPatch::default());
        let after = store.snapshot();

        assert_eq!(before.entities, after.entities);
        assert_eq!(before.last_update, after.last_update);
    }

    #[test]
    fn domain_mutations_stamp_last_update() {
        let store = DashboardStore::new();
        assert!(store.snapshot().last_update.is_none());

        store.set_connected(true);
        let stamped = store.snapshot().last_update;
        assert!(stamped.is_some());

        let mut generator = EventGenerator::with_seed(9);
        store.insert_transaction(generator.transaction());
        assert!(store.snapshot().last_update >= stamped);
    }

    #[test]
    fn ui_setters_do_not_stamp_last_update() {
        let store = DashboardStore::new();
        store.set_sidebar_open(false);
        store.set_loading(true);
        store.set_error(Some("backend unavailable".to_string()));
        store.set_selected_transaction(Some("tx_1".to_string()));

        let snapshot = store.snapshot();
        assert!(!snapshot.sidebar_open);
        assert!(snapshot.loading);
        assert_eq!(snapshot.error.as_deref(), Some("backend unavailable"));
        assert_eq!(snapshot.selected_transaction.as_deref(), Some("tx_1"));
        assert!(snapshot.last_update.is_none());
    }

    #[test]
    fn subscribers_see_mutations_in_order() {
        let store = DashboardStore::new();
        let mut events = store.subscribe();
        let mut generator = EventGenerator::with_seed(10);

        let tx = generator.transaction();
        let tx_id = tx.id.clone();
        store.insert_transaction(tx);
        store.insert_risk_score(generator.risk_score());
        store.set_connected(true);

        assert_eq!(
            events.try_recv().unwrap(),
            StoreEvent::TransactionInserted { id: tx_id }
        );
        assert_eq!(events.try_recv().unwrap(), StoreEvent::RiskScoreInserted);
        assert_eq!(
            events.try_recv().unwrap(),
            StoreEvent::ConnectionChanged { connected: true }
        );
        assert!(events.try_recv().is_err());
    }

    #[test]
    fn dropped_subscribers_are_pruned() {
        let store = DashboardStore::new();
        let events = store.subscribe();
        drop(events);

        // Must not fail or grow the subscriber list forever.
        store.set_connected(true);
        store.set_connected(false);

        let mut live = store.subscribe();
        store.set_connected(true);
        assert_eq!(
            live.try_recv().unwrap(),
            StoreEvent::ConnectionChanged { connected: true }
        );
    }
}
