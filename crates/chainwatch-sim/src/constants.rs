//! Fixed reference pools the generator draws from.

/// Well-known wallet addresses used for sources, destinations, and entities.
pub const WALLET_ADDRESSES: [&str; 10] = [
    "1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa", // Genesis block
    "1BvBMSEYstWetqTFn5Au4m4GFg7xJaNVN2",
    "3J98t1WpEZ73CNmQviecrnyiWrnqRhWNLy",
    "1FeexV6bAHb8ybZjqQMjJrcCrHGW9sb6uF",
    "3QJmV3qfvL9SuYo34YihAf3sRCW3qSinyC",
    "bc1qxy2kgdygjrsqtzq2n0yrf2493p83kkfjhx0wlh",
    "3FupnqBvnSjgdHPP5yCzYzCBSRVNfXjXUx",
    "1LdRcdxfbSnmCYYNdeYpUnztiYzVfBEQeC",
    "3BMEXqHOFPzUQFCKleCK3C3NwULF8pZK6p",
    "1NDyJtNTjmwk5xPNhjgAMu4HDHigtobu1s",
];

/// Exchange names used for labels and the first graph nodes.
pub const EXCHANGE_NAMES: [&str; 10] = [
    "Binance", "Coinbase", "Kraken", "Gemini", "Bitfinex", "KuCoin", "Huobi", "OKX", "Bybit",
    "Gate.io",
];

/// Catalog of risk-factor labels attached to transactions.
pub const RISK_FACTORS: [&str; 10] = [
    "High frequency transactions",
    "Multiple inputs/outputs",
    "Connection to mixer",
    "Sanctions list match",
    "Unusual geographic pattern",
    "Round amount transactions",
    "Quick succession transfers",
    "Connection to darknet",
    "AML compliance flag",
    "Velocity threshold exceeded",
];

/// Jurisdictions entities may be attributed to. Some are sanctioned.
pub const COUNTRIES: [&str; 15] = [
    "United States",
    "China",
    "Germany",
    "United Kingdom",
    "Japan",
    "South Korea",
    "Singapore",
    "Switzerland",
    "Netherlands",
    "Russia",
    "Iran",
    "North Korea",
    "Venezuela",
    "Syria",
    "Cuba",
];

/// Candidate classification tags for entities.
pub const ENTITY_TAGS: [&str; 4] = ["DeFi", "CEX", "High Volume", "Suspicious"];
