//! Static symbol-to-beta reference table.
//!
//! Betas here are coarse single-snapshot stand-ins, not estimates from
//! return regressions. The table is immutable and injected into the
//! analytics configuration so a real market-data feed can replace it
//! without changing call sites.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Beta assumed for any symbol not present in the table.
pub const DEFAULT_BETA: f64 = 1.0;

/// Low-beta defensive names (staples, healthcare, telecom, utilities).
const DEFENSIVE: &[(&str, f64)] = &[
    ("JNJ", 0.55),
    ("PG", 0.45),
    ("KO", 0.60),
    ("PEP", 0.55),
    ("WMT", 0.50),
    ("MCD", 0.65),
    ("VZ", 0.40),
    ("T", 0.60),
    ("SO", 0.50),
    ("DUK", 0.45),
    ("ABT", 0.70),
    ("PFE", 0.65),
    // India
    ("HINDUNILVR", 0.45),
    ("NESTLEIND", 0.40),
    ("ITC", 0.65),
    ("SUNPHARMA", 0.60),
    ("DRREDDY", 0.55),
    ("POWERGRID", 0.50),
    ("NTPC", 0.60),
];

/// High-beta cyclical and growth names.
const CYCLICAL: &[(&str, f64)] = &[
    ("TSLA", 2.00),
    ("NVDA", 1.70),
    ("AMD", 1.85),
    ("COIN", 2.50),
    ("SQ", 1.90),
    ("SHOP", 1.80),
    ("PLTR", 1.95),
    ("UBER", 1.40),
    ("CAT", 1.30),
    ("BA", 1.45),
    ("GE", 1.35),
    // India
    ("TATAMOTORS", 1.60),
    ("ADANIENT", 1.90),
    ("SBIN", 1.35),
    ("BAJFINANCE", 1.50),
    ("TATASTEEL", 1.55),
    ("JSWSTEEL", 1.45),
];

/// Large caps near market beta.
const BROAD_MARKET: &[(&str, f64)] = &[
    ("AAPL", 1.20),
    ("MSFT", 1.10),
    ("GOOGL", 1.05),
    ("GOOG", 1.05),
    ("AMZN", 1.15),
    ("META", 1.25),
    ("NFLX", 1.25),
    ("JPM", 1.10),
    ("V", 0.95),
    ("MA", 1.00),
    ("SPY", 1.00),
    ("VOO", 1.00),
    ("QQQ", 1.15),
    // India
    ("RELIANCE", 1.10),
    ("TCS", 0.90),
    ("INFY", 0.95),
    ("HDFCBANK", 1.05),
    ("ICICIBANK", 1.15),
    ("WIPRO", 0.90),
    ("NIFTYBEES", 1.00),
];

/// Immutable symbol-to-beta lookup table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BetaTable {
    betas: HashMap<String, f64>,
}

impl BetaTable {
    /// Creates a table from explicit symbol/beta pairs.
    ///
    /// Useful for tests and for substituting a real market-data feed.
    #[must_use]
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        Self {
            betas: pairs.into_iter().map(|(s, b)| (s.into(), b)).collect(),
        }
    }

    /// Creates an empty table; every lookup falls back to [`DEFAULT_BETA`].
    #[must_use]
    pub fn empty() -> Self {
        Self {
            betas: HashMap::new(),
        }
    }

    /// Returns the beta for a symbol, falling back to [`DEFAULT_BETA`]
    /// for symbols not in the table.
    #[must_use]
    pub fn beta(&self, symbol: &str) -> f64 {
        self.betas.get(symbol).copied().unwrap_or(DEFAULT_BETA)
    }

    /// Returns true if the symbol has an explicit entry.
    #[must_use]
    pub fn contains(&self, symbol: &str) -> bool {
        self.betas.contains_key(symbol)
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.betas.len()
    }

    /// Returns true if the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.betas.is_empty()
    }
}

impl Default for BetaTable {
    /// Builds the built-in table from the defensive, cyclical, and
    /// broad-market buckets.
    fn default() -> Self {
        Self::from_pairs(
            DEFENSIVE
                .iter()
                .chain(CYCLICAL)
                .chain(BROAD_MARKET)
                .map(|&(s, b)| (s, b)),
        )
    }
}
