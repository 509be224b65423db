//! Tax and income analytics.
//!
//! Estimates only: a flat assumed tax rate, a 365-day long-term boundary,
//! and table-driven dividend yields. Nothing here is regulatory-grade tax
//! computation.

use crate::config::AnalyticsConfig;
use crate::parallel::maybe_parallel_filter_map;
use chrono::{Days, NaiveDate};
use folio_core::Holding;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A losing position that could be sold to realize a deductible loss.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxLossCandidate {
    /// Ticker symbol.
    pub symbol: String,

    /// Display name.
    pub name: String,

    /// The unrealized loss (negative).
    pub gain_loss: Decimal,

    /// Loss as a percentage of cost.
    pub gain_loss_percent: f64,

    /// `|gain_loss| × assumed_tax_rate`.
    pub potential_tax_savings: Decimal,
}

/// Finds tax-loss harvesting candidates: every losing holding, largest
/// loss first.
///
/// Savings use the flat `assumed_tax_rate` from the configuration
/// (default 25%).
#[must_use]
pub fn tax_loss_opportunities(
    holdings: &[Holding],
    config: &AnalyticsConfig,
) -> Vec<TaxLossCandidate> {
    let tax_rate = Decimal::from_f64(config.assumed_tax_rate).unwrap_or(Decimal::ZERO);

    let mut candidates: Vec<TaxLossCandidate> =
        maybe_parallel_filter_map(holdings, config, |h| {
            if !h.is_losing() {
                return None;
            }
            let gain_loss = h.gain_loss();
            Some(TaxLossCandidate {
                symbol: h.symbol.clone(),
                name: h.name.clone(),
                gain_loss,
                gain_loss_percent: h.gain_loss_percent(),
                potential_tax_savings: gain_loss.abs() * tax_rate,
            })
        });

    // Ascending by gain_loss puts the largest loss first
    candidates.sort_by(|a, b| a.gain_loss.cmp(&b.gain_loss));
    candidates
}

/// Accumulated gains and losses for one holding-period bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GainBucket {
    /// Sum of positive gain/loss values.
    pub gains: Decimal,

    /// Sum of losses, as a positive magnitude.
    pub losses: Decimal,

    /// Number of holdings in the bucket.
    pub count: usize,
}

impl GainBucket {
    fn add(&mut self, gain_loss: Decimal) {
        if gain_loss > Decimal::ZERO {
            self.gains += gain_loss;
        } else {
            self.losses += gain_loss.abs();
        }
        self.count += 1;
    }

    /// Net result for the bucket: gains minus losses.
    #[must_use]
    pub fn net(&self) -> Decimal {
        self.gains - self.losses
    }
}

/// Gains and losses partitioned by holding period.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HoldingPeriodGains {
    /// Positions held one year or less.
    pub short_term: GainBucket,

    /// Positions held longer than one year.
    pub long_term: GainBucket,
}

/// Partitions unrealized gains/losses into short- and long-term buckets.
///
/// A position is long-term only when its purchase date is strictly before
/// `reference_date − 365 days`; the boundary day itself is short-term.
/// Holdings without a purchase date bucket as long-term.
#[must_use]
pub fn gains_by_holding_period(
    holdings: &[Holding],
    reference_date: NaiveDate,
) -> HoldingPeriodGains {
    let cutoff = reference_date
        .checked_sub_days(Days::new(365))
        .unwrap_or(NaiveDate::MIN);

    let mut result = HoldingPeriodGains::default();
    for h in holdings {
        let long_term = match h.purchase_date {
            Some(date) => date < cutoff,
            None => true,
        };
        if long_term {
            result.long_term.add(h.gain_loss());
        } else {
            result.short_term.add(h.gain_loss());
        }
    }
    result
}

/// Estimated dividend income for one holding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DividendEstimate {
    /// Ticker symbol.
    pub symbol: String,

    /// Display name.
    pub name: String,

    /// Annual dividend yield in percent, from the reference table.
    pub dividend_yield: f64,

    /// `yield/100 × current_price × quantity`.
    pub estimated_annual_dividend: Decimal,
}

/// Estimates annual dividend income for holdings found in the configured
/// dividend table.
///
/// Symbols absent from the table are excluded entirely - they are treated
/// as non-payers, not as zero-dividend entries.
#[must_use]
pub fn dividend_holdings(holdings: &[Holding], config: &AnalyticsConfig) -> Vec<DividendEstimate> {
    maybe_parallel_filter_map(holdings, config, |h| {
        let rate = config.dividends.rate(&h.symbol)?;
        let rate_fraction = Decimal::from_f64(rate / 100.0).unwrap_or(Decimal::ZERO);
        Some(DividendEstimate {
            symbol: h.symbol.clone(),
            name: h.name.clone(),
            dividend_yield: rate,
            estimated_annual_dividend: rate_fraction * h.current_price * h.quantity,
        })
    })
}
