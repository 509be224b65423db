//! Configuration for analytics computation.
//!
//! Carries the model constants and the injected reference tables. Every
//! calculation takes the configuration explicitly; nothing reads global
//! state.

use folio_core::{BetaTable, DividendTable};
use serde::{Deserialize, Serialize};

/// Annual risk-free rate used by the risk-adjusted return ratios.
pub const DEFAULT_RISK_FREE_RATE: f64 = 0.045;

/// Flat tax rate assumed when estimating tax-loss harvesting savings.
pub const DEFAULT_TAX_RATE: f64 = 0.25;

/// Constant correlation assumed between any two distinct holdings.
///
/// The volatility proxy has no historical return series to estimate real
/// pairwise correlations from; this constant stands in for all of them.
pub const DEFAULT_PAIR_CORRELATION: f64 = 0.5;

/// Configuration for portfolio analytics computation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    /// Annual risk-free rate as a fraction (0.045 = 4.5%).
    pub risk_free_rate: f64,

    /// Flat assumed tax rate for loss-harvesting estimates.
    pub assumed_tax_rate: f64,

    /// Correlation assumed between distinct holdings in the volatility
    /// proxy. Same-holding correlation is always 1.0.
    pub pair_correlation: f64,

    /// Enable parallel processing (requires the 'parallel' feature).
    pub parallel: bool,

    /// Minimum holdings count to trigger parallel processing.
    /// Below this threshold, sequential is faster due to thread overhead.
    pub parallel_threshold: usize,

    /// Symbol-to-beta reference table.
    pub betas: BetaTable,

    /// Symbol-to-annual-dividend-rate reference table.
    pub dividends: DividendTable,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            risk_free_rate: DEFAULT_RISK_FREE_RATE,
            assumed_tax_rate: DEFAULT_TAX_RATE,
            pair_correlation: DEFAULT_PAIR_CORRELATION,
            parallel: true,
            parallel_threshold: 100, // Use parallel if >100 holdings
            betas: BetaTable::default(),
            dividends: DividendTable::default(),
        }
    }
}

impl AnalyticsConfig {
    /// Creates a new config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a config that always uses sequential processing.
    #[must_use]
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }

    /// Sets the risk-free rate.
    #[must_use]
    pub fn with_risk_free_rate(mut self, rate: f64) -> Self {
        self.risk_free_rate = rate;
        self
    }

    /// Sets the assumed tax rate.
    #[must_use]
    pub fn with_tax_rate(mut self, rate: f64) -> Self {
        self.assumed_tax_rate = rate;
        self
    }

    /// Sets the pairwise correlation constant.
    #[must_use]
    pub fn with_pair_correlation(mut self, correlation: f64) -> Self {
        self.pair_correlation = correlation;
        self
    }

    /// Sets whether to use parallel processing.
    #[must_use]
    pub fn with_parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    /// Sets the threshold for parallel processing.
    #[must_use]
    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Sets the beta reference table.
    #[must_use]
    pub fn with_betas(mut self, betas: BetaTable) -> Self {
        self.betas = betas;
        self
    }

    /// Sets the dividend reference table.
    #[must_use]
    pub fn with_dividends(mut self, dividends: DividendTable) -> Self {
        self.dividends = dividends;
        self
    }

    /// Returns true if parallel processing should be used for the given count.
    #[must_use]
    pub fn should_parallelize(&self, count: usize) -> bool {
        cfg!(feature = "parallel") && self.parallel && count >= self.parallel_threshold
    }
}
