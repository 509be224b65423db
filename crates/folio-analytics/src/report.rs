//! Composite portfolio report.
//!
//! Merges the aggregate, allocation, risk, and diversification outputs
//! into one serializable record - the input contract for presentation
//! surfaces and narrative (LLM) consumers. Field selection only: every
//! value equals its standalone function on the same input. Tax and
//! dividend metrics stay on their own surfaces and are computed on demand.

use crate::aggregates::{
    average_return, best_performer, portfolio_totals, worst_performer, PortfolioTotals,
};
use crate::allocation::{
    asset_allocation, concentration_risk, sector_allocation, AllocationSlice,
    DEFAULT_CONCENTRATION_TOP_N,
};
use crate::config::AnalyticsConfig;
use crate::diversification::{diversification_metrics, DiversificationMetrics};
use crate::risk::{risk_metrics, RiskMetrics};
use crate::scores::{diversification_score_basic, risk_score_basic};
use folio_core::{AssetType, Holding};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Full analytics report for one portfolio snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioReport {
    /// Number of holdings in the snapshot.
    pub holding_count: usize,

    /// Value/cost totals and overall return.
    pub totals: PortfolioTotals,

    /// Unweighted mean of per-holding returns.
    pub average_return: f64,

    /// Holding with the highest gain/loss percent, if any.
    pub best_performer: Option<Holding>,

    /// Holding with the lowest gain/loss percent, if any.
    pub worst_performer: Option<Holding>,

    /// Value breakdown by asset type.
    pub asset_allocation: HashMap<AssetType, AllocationSlice>,

    /// Value breakdown by sector.
    pub sector_allocation: HashMap<String, AllocationSlice>,

    /// Share of value in the top 5 positions, percent.
    pub concentration_risk: f64,

    /// Basic heuristic risk score (0-100).
    pub risk_score_basic: f64,

    /// Basic heuristic diversification score (0-100).
    pub diversification_score_basic: f64,

    /// Model-based risk metrics.
    pub risk: RiskMetrics,

    /// Model-based diversification metrics.
    pub diversification: DiversificationMetrics,
}

impl PortfolioReport {
    /// Calculates the complete report for a holdings list.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use folio_analytics::prelude::*;
    ///
    /// let config = AnalyticsConfig::default();
    /// let report = PortfolioReport::calculate(&holdings, &config);
    ///
    /// println!("Value: {}", report.totals.total_value);
    /// println!("Risk score: {:.0}", report.risk.risk_score);
    /// ```
    #[must_use]
    pub fn calculate(holdings: &[Holding], config: &AnalyticsConfig) -> Self {
        Self {
            holding_count: holdings.len(),
            totals: portfolio_totals(holdings, config),
            average_return: average_return(holdings),
            best_performer: best_performer(holdings).cloned(),
            worst_performer: worst_performer(holdings).cloned(),
            asset_allocation: asset_allocation(holdings),
            sector_allocation: sector_allocation(holdings),
            concentration_risk: concentration_risk(holdings, DEFAULT_CONCENTRATION_TOP_N),
            risk_score_basic: risk_score_basic(holdings),
            diversification_score_basic: diversification_score_basic(holdings),
            risk: risk_metrics(holdings, config),
            diversification: diversification_metrics(holdings),
        }
    }
}

/// Convenience function to calculate the composite report.
#[must_use]
pub fn calculate_portfolio_report(
    holdings: &[Holding],
    config: &AnalyticsConfig,
) -> PortfolioReport {
    PortfolioReport::calculate(holdings, config)
}
