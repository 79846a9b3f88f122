//! Live-feed orchestration: seed once, then tick forever until stopped.

use std::sync::{Arc, Mutex, PoisonError};

use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant};
use tracing::{debug, info};
use uuid::Uuid;

use chainwatch_sim::EventGenerator;

use crate::config::FeedConfig;
use crate::error::FeedError;
use crate::store::DashboardStore;

/// Drives the illusion of a live data stream.
///
/// On `start` the feed seeds the store with one generated snapshot, marks
/// the store connected, and spawns two independent periodic tasks: one
/// inserting a fresh transaction per transaction tick, one inserting a
/// fresh risk score per risk tick. `stop` aborts both tasks and awaits
/// their termination, so once it returns no further store mutation can
/// originate from the feed.
pub struct LiveFeed {
    store: Arc<DashboardStore>,
    config: FeedConfig,
    generator: Arc<Mutex<EventGenerator>>,
    tasks: Mutex<Vec<JoinHandle<()>>>,
    session_id: String,
}

impl LiveFeed {
    /// Create a feed over `store`. The generator is seeded from
    /// `config.seed` when present, from entropy otherwise.
    pub fn new(store: Arc<DashboardStore>, config: FeedConfig) -> Self {
        let generator = match config.seed {
            Some(seed) => EventGenerator::with_seed(seed),
            None => EventGenerator::new(),
        };

        Self {
            store,
            config,
            generator: Arc::new(Mutex::new(generator)),
            tasks: Mutex::new(Vec::new()),
            session_id: Uuid::new_v4().to_string(),
        }
    }

    /// Handle to the store this feed mutates.
    pub fn store(&self) -> Arc<DashboardStore> {
        self.store.clone()
    }

    /// Whether the periodic tasks are currently running.
    pub fn is_running(&self) -> bool {
        !self
            .tasks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty()
    }

    /// Seed the store and start both periodic tasks.
    ///
    /// Must be called within a tokio runtime. Errors when the feed is
    /// already running.
    pub fn start(&self) -> Result<(), FeedError> {
        let mut tasks = self.tasks.lock().unwrap_or_else(PoisonError::into_inner);
        if !tasks.is_empty() {
            return Err(FeedError::AlreadyRunning);
        }

        info!(
            session_id = %self.session_id,
            tx_interval_ms = %self.config.transaction_interval.as_millis(),
            risk_interval_ms = %self.config.risk_score_interval.as_millis(),
            "starting live feed"
        );

        self.seed_store();

        let store = self.store.clone();
        let generator = self.generator.clone();
        let period = self.config.transaction_interval;
        tasks.push(tokio::spawn(async move {
            // First tick lands one full period after start; the seed
            // snapshot already populated the collection.
            let mut ticks = interval_at(Instant::now() + period, period);
            loop {
                ticks.tick().await;
                let tx = generator
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .transaction();
                debug!(id = %tx.id, status = %tx.status, "feed tick: transaction");
                store.insert_transaction(tx);
            }
        }));

        let store = self.store.clone();
        let generator = self.generator.clone();
        let period = self.config.risk_score_interval;
        tasks.push(tokio::spawn(async move {
            let mut ticks = interval_at(Instant::now() + period, period);
            loop {
                ticks.tick().await;
                let score = generator
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .risk_score();
                debug!(overall = %score.overall, "feed tick: risk score");
                store.insert_risk_score(score);
            }
        }));

        Ok(())
    }

    /// Stop both periodic tasks.
    ///
    /// Aborts the task handles and awaits their termination before
    /// returning, which makes the no-mutation-after-teardown guarantee
    /// structural. The store itself is left untouched. Errors when the
    /// feed was never started.
    pub async fn stop(&self) -> Result<(), FeedError> {
        let handles: Vec<JoinHandle<()>> = {
            let mut tasks = self.tasks.lock().unwrap_or_else(PoisonError::into_inner);
            if tasks.is_empty() {
                return Err(FeedError::NotStarted);
            }
            tasks.drain(..).collect()
        };

        for handle in handles {
            handle.abort();
            let _ = handle.await;
        }

        info!(session_id = %self.session_id, "live feed stopped");
        Ok(())
    }

    /// One-time seeding: every collection is bulk-replaced from a fresh
    /// snapshot, then the store is marked connected.
    fn seed_store(&self) {
        let snapshot = self
            .generator
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .initial_snapshot();

        debug!(
            transactions = snapshot.transactions.len(),
            entities = snapshot.entities.len(),
            alerts = snapshot.alerts.len(),
            risk_scores = snapshot.risk_scores.len(),
            "seeding store"
        );

        self.store.set_transactions(snapshot.transactions);
        self.store.set_entities(snapshot.entities);
        self.store.set_alerts(snapshot.alerts);
        self.store.set_network_graph(snapshot.network_graph);
        self.store.set_metrics(snapshot.metrics);
        self.store.set_risk_scores(snapshot.risk_scores);
        self.store.set_connected(true);
    }
}
