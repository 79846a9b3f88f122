//! Feed lifecycle errors.
//!
//! Store mutations themselves are infallible; the only failure surface in
//! this crate is misuse of the feed lifecycle.

use thiserror::Error;

/// Errors raised by the live-feed lifecycle.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum FeedError {
    /// `start` was called while the feed tasks were already running
    #[error("live feed is already running")]
    AlreadyRunning,

    /// `stop` was called before the feed was started
    #[error("live feed has not been started")]
    NotStarted,
}
