//! Synthetic event generation for the chainwatch simulation.
//!
//! This crate produces plausible-looking compliance records (transactions,
//! entities, alerts, risk scores, a network graph, aggregate metrics) from
//! bounded random distributions over fixed reference pools. Generation is
//! infallible and free of I/O; all randomness flows through an injectable,
//! seedable generator so behavior is reproducible in tests.

pub mod constants;
pub mod generator;

pub use generator::*;
