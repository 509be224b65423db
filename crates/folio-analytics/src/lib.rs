//! # Folio Analytics
//!
//! Risk, diversification, performance, and tax analytics for portfolio
//! snapshots.
//!
//! The engine consumes a normalized list of [`folio_core::Holding`] values
//! (one point-in-time snapshot, no return history) and derives every metric
//! a dashboard needs: totals and performers, allocation breakdowns,
//! risk-adjusted ratios, concentration and diversification indices, and
//! tax/income estimates.
//!
//! ## Design Philosophy
//!
//! - **Pure functions**: synchronous, stateless, no I/O; results depend
//!   only on the input list and the explicit configuration
//! - **Total over the domain**: every function is defined for every
//!   well-formed holdings list, the empty list included - sentinel values
//!   (0, 1.0, 999) instead of errors
//! - **Snapshot proxies, preserved verbatim**: volatility, correlation, and
//!   drawdown are single-snapshot approximations whose exact scale the
//!   downstream ratios depend on; they are not to be upgraded in place
//! - **Injected reference data**: beta and dividend tables travel inside
//!   [`AnalyticsConfig`], never as global state
//!
//! ## Quick Start
//!
//! ```rust
//! use folio_analytics::prelude::*;
//!
//! let holdings = vec![
//!     Holding::builder()
//!         .symbol("AAPL")
//!         .quantity(dec!(10))
//!         .cost_basis(dec!(150))
//!         .current_price(dec!(180))
//!         .sector("Technology")
//!         .build()
//!         .unwrap(),
//! ];
//!
//! let config = AnalyticsConfig::default();
//! let report = PortfolioReport::calculate(&holdings, &config);
//!
//! assert_eq!(report.holding_count, 1);
//! assert_eq!(report.concentration_risk, 100.0);
//! ```
//!
//! ## Module Overview
//!
//! - [`aggregates`] - totals, best/worst performer, average return
//! - [`allocation`] - asset/sector breakdowns, concentration risk
//! - [`scores`] - basic heuristic risk/diversification scores
//! - [`risk`] - beta, volatility proxy, Sharpe/Sortino/Treynor, VaR,
//!   drawdown proxy, composite risk score
//! - [`diversification`] - HHI, effective stocks, sector ratio,
//!   correlation heuristic, diversification score
//! - [`tax`] - loss-harvesting candidates, holding-period buckets,
//!   dividend income estimates
//! - [`report`] - the composite [`PortfolioReport`]
//! - [`config`] - constants and reference-table injection
//!
//! ## Feature Flags
//!
//! - `parallel`: rayon-based parallel processing for large portfolios

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

// Module declarations
pub mod aggregates;
pub mod allocation;
pub mod config;
pub mod diversification;
pub mod parallel;
pub mod report;
pub mod risk;
pub mod scores;
pub mod tax;

// Re-export configuration at crate root
pub use config::{
    AnalyticsConfig, DEFAULT_PAIR_CORRELATION, DEFAULT_RISK_FREE_RATE, DEFAULT_TAX_RATE,
};

// Re-export aggregate types and functions
pub use aggregates::{
    average_return, best_performer, portfolio_totals, worst_performer, PortfolioTotals,
};

// Re-export allocation types and functions
pub use allocation::{
    asset_allocation, concentration_risk, sector_allocation, AllocationSlice,
    DEFAULT_CONCENTRATION_TOP_N,
};

// Re-export basic scores
pub use scores::{diversification_score_basic, risk_score_basic};

// Re-export risk types and functions
pub use risk::{
    max_drawdown_proxy, portfolio_beta, portfolio_volatility, risk_metrics, risk_score,
    sharpe_ratio, sortino_ratio, treynor_ratio, value_at_risk, z_score, RiskMetrics,
    SORTINO_NO_DOWNSIDE, TRADING_DAYS_PER_YEAR,
};

// Re-export diversification types and functions
pub use diversification::{
    average_correlation, diversification_metrics, diversification_score, effective_stocks,
    herfindahl_index, sector_diversification_ratio, DiversificationMetrics,
};

// Re-export tax types and functions
pub use tax::{
    dividend_holdings, gains_by_holding_period, tax_loss_opportunities, DividendEstimate,
    GainBucket, HoldingPeriodGains, TaxLossCandidate,
};

// Re-export the composite report
pub use report::{calculate_portfolio_report, PortfolioReport};

// Re-export parallel utilities
pub use parallel::{maybe_parallel_filter_map, maybe_parallel_fold, maybe_parallel_map};

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use folio_analytics::prelude::*;
/// ```
pub mod prelude {
    // Configuration
    pub use crate::config::AnalyticsConfig;

    // Aggregates
    pub use crate::aggregates::{
        average_return, best_performer, portfolio_totals, worst_performer, PortfolioTotals,
    };

    // Allocation
    pub use crate::allocation::{
        asset_allocation, concentration_risk, sector_allocation, AllocationSlice,
    };

    // Basic scores
    pub use crate::scores::{diversification_score_basic, risk_score_basic};

    // Risk
    pub use crate::risk::{
        max_drawdown_proxy, portfolio_beta, portfolio_volatility, risk_metrics, risk_score,
        sharpe_ratio, sortino_ratio, treynor_ratio, value_at_risk, RiskMetrics,
    };

    // Diversification
    pub use crate::diversification::{
        average_correlation, diversification_metrics, diversification_score, effective_stocks,
        herfindahl_index, sector_diversification_ratio, DiversificationMetrics,
    };

    // Tax
    pub use crate::tax::{
        dividend_holdings, gains_by_holding_period, tax_loss_opportunities, DividendEstimate,
        GainBucket, HoldingPeriodGains, TaxLossCandidate,
    };

    // Report
    pub use crate::report::{calculate_portfolio_report, PortfolioReport};

    // Re-export commonly used types from folio-core and dependencies
    pub use folio_core::prelude::*;
}
