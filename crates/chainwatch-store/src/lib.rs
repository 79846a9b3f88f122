//! Shared observable state for the chainwatch dashboard.
//!
//! The [`DashboardStore`] is the single authoritative holder of everything
//! the UI renders. It is explicitly constructed and passed to whoever
//! needs it; there is no global. Renderers consume owned snapshots and
//! subscribe to a synchronous event channel, and all mutation goes through
//! the store's action surface. The [`LiveFeed`] drives the illusion of a
//! live data stream by seeding the store once and then inserting freshly
//! generated records on two independent timers.

pub mod config;
pub mod error;
pub mod feed;
pub mod store;

pub use config::FeedConfig;
pub use error::FeedError;
pub use feed::LiveFeed;
pub use store::{CollectionKind, DashboardSnapshot, DashboardStore, StoreEvent};
pub use store::{MAX_RISK_SCORES, MAX_TRANSACTIONS};
