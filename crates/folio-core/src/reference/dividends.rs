//! Static symbol-to-dividend-rate reference table.
//!
//! Rates are annual dividend yields in percent of current price. Symbols
//! absent from the table are treated as non-dividend payers and excluded
//! from income estimates entirely (not reported as zero).

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Known dividend payers with approximate annual yields (percent).
const DIVIDEND_RATES: &[(&str, f64)] = &[
    // US
    ("AAPL", 0.50),
    ("MSFT", 0.80),
    ("JNJ", 3.00),
    ("PG", 2.40),
    ("KO", 3.10),
    ("PEP", 2.80),
    ("VZ", 6.50),
    ("T", 6.00),
    ("XOM", 3.50),
    ("CVX", 4.00),
    ("JPM", 2.50),
    ("IBM", 4.50),
    ("MMM", 5.50),
    ("O", 5.50),
    ("SPY", 1.40),
    ("VOO", 1.40),
    ("SCHD", 3.50),
    // India
    ("ITC", 3.40),
    ("COALINDIA", 7.00),
    ("ONGC", 5.00),
    ("IOC", 6.50),
    ("POWERGRID", 4.50),
    ("NTPC", 4.00),
    ("HINDUNILVR", 1.50),
    ("TCS", 1.40),
    ("INFY", 2.30),
];

/// Immutable symbol-to-annual-dividend-rate lookup table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DividendTable {
    rates: HashMap<String, f64>,
}

impl DividendTable {
    /// Creates a table from explicit symbol/rate pairs (rates in percent).
    #[must_use]
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        Self {
            rates: pairs.into_iter().map(|(s, r)| (s.into(), r)).collect(),
        }
    }

    /// Creates an empty table (no symbol pays dividends).
    #[must_use]
    pub fn empty() -> Self {
        Self {
            rates: HashMap::new(),
        }
    }

    /// Returns the annual dividend rate in percent for a symbol, or `None`
    /// if the symbol is not a known payer.
    #[must_use]
    pub fn rate(&self, symbol: &str) -> Option<f64> {
        self.rates.get(symbol).copied()
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Returns true if the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

impl Default for DividendTable {
    fn default() -> Self {
        Self::from_pairs(DIVIDEND_RATES.iter().map(|&(s, r)| (s, r)))
    }
}
