//! Live-feed configuration.

use std::time::Duration;

/// Environment variable overriding the transaction tick period, in ms.
pub const ENV_TX_INTERVAL_MS: &str = "CHAINWATCH_TX_INTERVAL_MS";
/// Environment variable overriding the risk-score tick period, in ms.
pub const ENV_RISK_INTERVAL_MS: &str = "CHAINWATCH_RISK_INTERVAL_MS";
/// Environment variable fixing the generator seed.
pub const ENV_SEED: &str = "CHAINWATCH_SEED";

/// Configuration for the live feed.
#[derive(Debug, Clone)]
pub struct FeedConfig {
    /// Period between generated transaction insertions
    pub transaction_interval: Duration,
    /// Period between generated risk-score insertions
    pub risk_score_interval: Duration,
    /// Fixed generator seed; entropy-seeded when absent
    pub seed: Option<u64>,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            transaction_interval: Duration::from_secs(3),
            risk_score_interval: Duration::from_secs(5),
            seed: None,
        }
    }
}

impl FeedConfig {
    /// Create a configuration with default tick periods.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration from the environment, falling back to
    /// defaults for anything unset or unparsable.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(ms) = read_env_u64(ENV_TX_INTERVAL_MS) {
            config.transaction_interval = Duration::from_millis(ms);
        }
        if let Some(ms) = read_env_u64(ENV_RISK_INTERVAL_MS) {
            config.risk_score_interval = Duration::from_millis(ms);
        }
        config.seed = read_env_u64(ENV_SEED);
        config
    }

    /// Set the transaction tick period.
    pub fn with_transaction_interval(mut self, interval: Duration) -> Self {
        self.transaction_interval = interval;
        self
    }

    /// Set the risk-score tick period.
    pub fn with_risk_score_interval(mut self, interval: Duration) -> Self {
        self.risk_score_interval = interval;
        self
    }

    /// Fix the generator seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

fn read_env_u64(name: &str) -> Option<u64> {
    std::env::var(name).ok().and_then(|value| value.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_feed_contract() {
        let config = FeedConfig::default();
        assert_eq!(config.transaction_interval, Duration::from_secs(3));
        assert_eq!(config.risk_score_interval, Duration::from_secs(5));
        assert!(config.seed.is_none());
    }

    #[test]
    fn builder_chain() {
        let config = FeedConfig::new()
            .with_transaction_interval(Duration::from_millis(250))
            .with_risk_score_interval(Duration::from_millis(400))
            .with_seed(7);
        assert_eq!(config.transaction_interval, Duration::from_millis(250));
        assert_eq!(config.risk_score_interval, Duration::from_millis(400));
        assert_eq!(config.seed, Some(7));
    }
}
