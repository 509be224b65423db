//! Aggregate totals and per-holding performance extremes.

use crate::config::AnalyticsConfig;
use crate::parallel::maybe_parallel_fold;
use folio_core::Holding;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Portfolio-level value and cost totals.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PortfolioTotals {
    /// Sum of holding market values.
    pub total_value: Decimal,

    /// Sum of holding acquisition costs.
    pub total_cost: Decimal,

    /// `total_value − total_cost`.
    pub total_gain_loss: Decimal,

    /// Value-weighted total return in percent.
    /// 0 when `total_cost` is zero.
    pub total_return_pct: f64,
}

impl PortfolioTotals {
    /// Returns the portfolio return as a fraction (0.10 = 10%).
    ///
    /// The risk-adjusted ratios consume this fractional form while
    /// `total_return_pct` stays on the conventional percent scale.
    #[must_use]
    pub fn return_fraction(&self) -> f64 {
        if self.total_cost.is_zero() {
            return 0.0;
        }
        (self.total_gain_loss / self.total_cost)
            .to_f64()
            .unwrap_or(0.0)
    }
}

/// Calculates value/cost totals for a holdings list.
///
/// `total_gain_loss` is exact Decimal arithmetic: it always equals
/// `total_value − total_cost` with no float rounding.
#[must_use]
pub fn portfolio_totals(holdings: &[Holding], config: &AnalyticsConfig) -> PortfolioTotals {
    let (total_value, total_cost) = maybe_parallel_fold(
        holdings,
        config,
        (Decimal::ZERO, Decimal::ZERO),
        |(value, cost), h| (value + h.market_value, cost + h.total_cost),
        |(v1, c1), (v2, c2)| (v1 + v2, c1 + c2),
    );

    let total_gain_loss = total_value - total_cost;
    let total_return_pct = if total_cost.is_zero() {
        0.0
    } else {
        (total_gain_loss / total_cost * Decimal::ONE_HUNDRED)
            .to_f64()
            .unwrap_or(0.0)
    };

    PortfolioTotals {
        total_value,
        total_cost,
        total_gain_loss,
        total_return_pct,
    }
}

/// Returns the holding with the highest `gain_loss_percent`.
///
/// Ties resolve to the first-encountered holding, so the result is stable
/// for a fixed input order. Returns `None` on empty input.
#[must_use]
pub fn best_performer(holdings: &[Holding]) -> Option<&Holding> {
    let mut best: Option<&Holding> = None;
    for h in holdings {
        match best {
            Some(b) if h.gain_loss_percent() <= b.gain_loss_percent() => {}
            _ => best = Some(h),
        }
    }
    best
}

/// Returns the holding with the lowest `gain_loss_percent`.
///
/// Ties resolve to the first-encountered holding. Returns `None` on empty
/// input.
#[must_use]
pub fn worst_performer(holdings: &[Holding]) -> Option<&Holding> {
    let mut worst: Option<&Holding> = None;
    for h in holdings {
        match worst {
            Some(w) if h.gain_loss_percent() >= w.gain_loss_percent() => {}
            _ => worst = Some(h),
        }
    }
    worst
}

/// Returns the unweighted mean of `gain_loss_percent` across holdings.
///
/// Deliberately NOT value-weighted: a tiny position counts the same as a
/// large one. This is a distinct metric from
/// [`PortfolioTotals::total_return_pct`] (which is value-weighted by
/// construction) and must not be "fixed" to match it.
#[must_use]
pub fn average_return(holdings: &[Holding]) -> f64 {
    if holdings.is_empty() {
        return 0.0;
    }
    let sum: f64 = holdings.iter().map(Holding::gain_loss_percent).sum();
    sum / holdings.len() as f64
}
