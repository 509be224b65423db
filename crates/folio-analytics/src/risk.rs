//! Risk analytics for portfolio snapshots.
//!
//! All statistics here are single-snapshot proxies: there is no historical
//! return series behind them. Volatility uses a constant-correlation
//! double-sum, drawdown uses current unrealized losses, and beta comes from
//! a static reference table. The formulas are intentional simplifications
//! carried over from the original model; downstream ratios depend on their
//! exact scale, so they must not be replaced with textbook estimators
//! without revisiting every consumer.

use crate::aggregates::{average_return, portfolio_totals};
use crate::config::AnalyticsConfig;
use crate::parallel::maybe_parallel_fold;
use folio_core::{Holding, DEFAULT_BETA};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Trading days per year, used to scale volatility to a daily figure.
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Sentinel Sortino ratio when there is no downside at all and the
/// portfolio beats the risk-free rate.
pub const SORTINO_NO_DOWNSIDE: f64 = 999.0;

/// Returns the one-tailed z-score for a confidence level.
///
/// Recognizes 0.90, 0.95, and 0.99; anything else falls back to the 95%
/// z-score.
#[must_use]
pub fn z_score(confidence: f64) -> f64 {
    if (confidence - 0.90).abs() < 1e-9 {
        1.282
    } else if (confidence - 0.95).abs() < 1e-9 {
        1.645
    } else if (confidence - 0.99).abs() < 1e-9 {
        2.326
    } else {
        1.645
    }
}

/// Calculates the value-weighted portfolio beta.
///
/// ## Formula
///
/// ```text
/// beta = Σ (market_value_i / total_value) × beta_i
/// ```
///
/// Per-symbol betas come from the configured [`folio_core::BetaTable`],
/// falling back to 1.0 for unknown symbols. Returns 1.0 (market beta) for
/// an empty or zero-value portfolio.
#[must_use]
pub fn portfolio_beta(holdings: &[Holding], config: &AnalyticsConfig) -> f64 {
    let total: Decimal = holdings.iter().map(|h| h.market_value).sum();
    let total = total.to_f64().unwrap_or(0.0);
    if holdings.is_empty() || total == 0.0 {
        return DEFAULT_BETA;
    }

    maybe_parallel_fold(
        holdings,
        config,
        0.0_f64,
        |acc, h| {
            let weight = h.market_value.to_f64().unwrap_or(0.0) / total;
            acc + weight * config.betas.beta(&h.symbol)
        },
        |a, b| a + b,
    )
}

/// Calculates the portfolio volatility proxy, on a percent scale.
///
/// ## Formula
///
/// A full double-sum over all ordered pairs of holdings:
///
/// ```text
/// variance = Σ_i Σ_j w_i × w_j × |r_i − r̄| × |r_j − r̄| × ρ_ij
/// volatility = sqrt(variance)
/// ```
///
/// where `r_i` is the holding's gain/loss percent, `r̄` the unweighted
/// average return, `ρ_ii = 1`, and `ρ_ij` the configured constant (0.5 by
/// default). Not a textbook standard deviation of returns - there is no
/// return series - but Sharpe, VaR, and the risk score all depend on this
/// exact scale.
///
/// O(n²) in the holding count. Returns 0 for empty or zero-value input.
#[must_use]
pub fn portfolio_volatility(holdings: &[Holding], config: &AnalyticsConfig) -> f64 {
    let total: Decimal = holdings.iter().map(|h| h.market_value).sum();
    let total = total.to_f64().unwrap_or(0.0);
    if holdings.is_empty() || total == 0.0 {
        return 0.0;
    }

    let avg = average_return(holdings);

    // Weighted absolute deviation per holding; the pairwise term factors
    // as deviation_i × deviation_j × ρ_ij.
    let deviations: Vec<f64> = holdings
        .iter()
        .map(|h| {
            let weight = h.market_value.to_f64().unwrap_or(0.0) / total;
            weight * (h.gain_loss_percent() - avg).abs()
        })
        .collect();

    let mut variance = 0.0;
    for (i, di) in deviations.iter().enumerate() {
        for (j, dj) in deviations.iter().enumerate() {
            let correlation = if i == j { 1.0 } else { config.pair_correlation };
            variance += di * dj * correlation;
        }
    }

    variance.max(0.0).sqrt()
}

fn sharpe_from(return_fraction: f64, volatility: f64, risk_free_rate: f64) -> f64 {
    if volatility == 0.0 {
        return 0.0;
    }
    (return_fraction - risk_free_rate) / (volatility / 100.0)
}

/// Calculates the Sharpe ratio.
///
/// `(return_fraction − risk_free_rate) / (volatility / 100)` where the
/// return is the portfolio's unrealized return as a fraction. Returns 0
/// when volatility is 0 or the input is empty.
#[must_use]
pub fn sharpe_ratio(holdings: &[Holding], config: &AnalyticsConfig) -> f64 {
    let totals = portfolio_totals(holdings, config);
    sharpe_from(
        totals.return_fraction(),
        portfolio_volatility(holdings, config),
        config.risk_free_rate,
    )
}

fn sortino_from(holdings: &[Holding], return_fraction: f64, risk_free_rate: f64) -> f64 {
    if holdings.is_empty() {
        return 0.0;
    }

    let losing: Vec<f64> = holdings
        .iter()
        .map(Holding::gain_loss_percent)
        .filter(|&r| r < 0.0)
        .collect();

    if losing.is_empty() {
        return if return_fraction > risk_free_rate {
            SORTINO_NO_DOWNSIDE
        } else {
            0.0
        };
    }

    // Root-mean-square of losing returns ("downside deviation")
    let downside = (losing.iter().map(|r| r * r).sum::<f64>() / losing.len() as f64).sqrt();
    if downside == 0.0 {
        return 0.0;
    }

    (return_fraction - risk_free_rate) / (downside / 100.0)
}

/// Calculates the Sortino ratio.
///
/// Like Sharpe but the denominator is the root-mean-square of
/// `gain_loss_percent` over losing holdings only. With no losing holdings
/// the ratio is [`SORTINO_NO_DOWNSIDE`] when the return beats the
/// risk-free rate, else 0.
#[must_use]
pub fn sortino_ratio(holdings: &[Holding], config: &AnalyticsConfig) -> f64 {
    let totals = portfolio_totals(holdings, config);
    sortino_from(holdings, totals.return_fraction(), config.risk_free_rate)
}

fn treynor_from(return_fraction: f64, beta: f64, risk_free_rate: f64) -> f64 {
    if beta == 0.0 {
        return 0.0;
    }
    (return_fraction - risk_free_rate) / beta
}

/// Calculates the Treynor ratio: excess return per unit of systematic risk.
///
/// Returns 0 when beta is 0 or the input is empty.
#[must_use]
pub fn treynor_ratio(holdings: &[Holding], config: &AnalyticsConfig) -> f64 {
    if holdings.is_empty() {
        return 0.0;
    }
    let totals = portfolio_totals(holdings, config);
    treynor_from(
        totals.return_fraction(),
        portfolio_beta(holdings, config),
        config.risk_free_rate,
    )
}

fn value_at_risk_from(total_value: f64, volatility: f64, days: f64, confidence: f64) -> f64 {
    let daily_volatility = volatility / TRADING_DAYS_PER_YEAR.sqrt();
    z_score(confidence) * (daily_volatility / 100.0) * total_value * days.sqrt()
}

/// Calculates parametric Value-at-Risk over a horizon, in currency units.
///
/// ## Formula
///
/// ```text
/// VaR = z(confidence) × (daily_volatility / 100) × total_value × √days
/// ```
///
/// with `daily_volatility = volatility / √252`. Returns 0 for an empty
/// portfolio (total value 0).
#[must_use]
pub fn value_at_risk(
    holdings: &[Holding],
    config: &AnalyticsConfig,
    days: f64,
    confidence: f64,
) -> f64 {
    let total: Decimal = holdings.iter().map(|h| h.market_value).sum();
    value_at_risk_from(
        total.to_f64().unwrap_or(0.0),
        portfolio_volatility(holdings, config),
        days,
        confidence,
    )
}

/// Calculates the maximum-drawdown proxy, in percent.
///
/// ## Formula
///
/// ```text
/// drawdown = total_unrealized_losses / (total_value + total_unrealized_losses) × 100
/// ```
///
/// A snapshot proxy - NOT a true peak-to-trough drawdown, which would need
/// a value history. Returns 0 when no holding is at a loss.
#[must_use]
pub fn max_drawdown_proxy(holdings: &[Holding]) -> f64 {
    let losses: Decimal = holdings
        .iter()
        .filter(|h| h.is_losing())
        .map(|h| h.gain_loss().abs())
        .sum();

    if losses.is_zero() {
        return 0.0;
    }

    let total: Decimal = holdings.iter().map(|h| h.market_value).sum();
    let denominator = total + losses;
    if denominator.is_zero() {
        return 0.0;
    }

    (losses / denominator * Decimal::ONE_HUNDRED)
        .to_f64()
        .unwrap_or(0.0)
}

fn risk_score_from(beta: f64, volatility: f64) -> f64 {
    let beta_component = (beta / 2.0 * 50.0).min(50.0);
    let volatility_component = (volatility / 50.0 * 50.0).min(50.0);
    (beta_component + volatility_component).min(100.0)
}

/// Calculates the composite risk score on a 0-100 scale.
///
/// ```text
/// min(100, min(beta/2 × 50, 50) + min(volatility/50 × 50, 50))
/// ```
///
/// Returns 0 for empty input.
#[must_use]
pub fn risk_score(holdings: &[Holding], config: &AnalyticsConfig) -> f64 {
    if holdings.is_empty() {
        return 0.0;
    }
    risk_score_from(
        portfolio_beta(holdings, config),
        portfolio_volatility(holdings, config),
    )
}

/// Bundle of every risk metric for one snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RiskMetrics {
    /// Value-weighted portfolio beta.
    pub beta: f64,

    /// Volatility proxy, percent scale.
    pub volatility: f64,

    /// Sharpe ratio.
    pub sharpe_ratio: f64,

    /// Sortino ratio (999 sentinel when there is no downside).
    pub sortino_ratio: f64,

    /// Treynor ratio.
    pub treynor_ratio: f64,

    /// 1-day Value-at-Risk at 95% confidence, in currency units.
    pub value_at_risk_95: f64,

    /// 1-day Value-at-Risk at 99% confidence, in currency units.
    pub value_at_risk_99: f64,

    /// Maximum-drawdown proxy, percent.
    pub max_drawdown: f64,

    /// Composite risk score, 0-100.
    pub risk_score: f64,
}

/// Calculates the full risk bundle, computing shared intermediates
/// (totals, volatility, beta) once instead of per metric.
///
/// Every field equals its standalone function evaluated on the same input.
#[must_use]
pub fn risk_metrics(holdings: &[Holding], config: &AnalyticsConfig) -> RiskMetrics {
    if holdings.is_empty() {
        return RiskMetrics {
            beta: DEFAULT_BETA,
            ..RiskMetrics::default()
        };
    }

    let totals = portfolio_totals(holdings, config);
    let return_fraction = totals.return_fraction();
    let total_value = totals.total_value.to_f64().unwrap_or(0.0);
    let beta = portfolio_beta(holdings, config);
    let volatility = portfolio_volatility(holdings, config);

    RiskMetrics {
        beta,
        volatility,
        sharpe_ratio: sharpe_from(return_fraction, volatility, config.risk_free_rate),
        sortino_ratio: sortino_from(holdings, return_fraction, config.risk_free_rate),
        treynor_ratio: treynor_from(return_fraction, beta, config.risk_free_rate),
        value_at_risk_95: value_at_risk_from(total_value, volatility, 1.0, 0.95),
        value_at_risk_99: value_at_risk_from(total_value, volatility, 1.0, 0.99),
        max_drawdown: max_drawdown_proxy(holdings),
        risk_score: risk_score_from(beta, volatility),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use folio_core::BetaTable;
    use rust_decimal_macros::dec;

    fn create_holding(symbol: &str, qty: Decimal, cost: Decimal, price: Decimal) -> Holding {
        Holding::builder()
            .symbol(symbol)
            .quantity(qty)
            .cost_basis(cost)
            .current_price(price)
            .build()
            .unwrap()
    }

    fn test_config() -> AnalyticsConfig {
        AnalyticsConfig::sequential()
    }

    #[test]
    fn test_z_score_table() {
        assert_relative_eq!(z_score(0.90), 1.282);
        assert_relative_eq!(z_score(0.95), 1.645);
        assert_relative_eq!(z_score(0.99), 2.326);
        // Unrecognized levels fall back to 95%
        assert_relative_eq!(z_score(0.80), 1.645);
    }

    #[test]
    fn test_beta_weighted() {
        let config = test_config().with_betas(BetaTable::from_pairs([("HI", 2.0), ("LO", 0.5)]));
        let holdings = vec![
            create_holding("HI", dec!(1), dec!(300), dec!(300)),
            create_holding("LO", dec!(1), dec!(100), dec!(100)),
        ];

        // 0.75 × 2.0 + 0.25 × 0.5 = 1.625
        assert_relative_eq!(portfolio_beta(&holdings, &config), 1.625, epsilon = 1e-10);
    }

    #[test]
    fn test_beta_unknown_symbol_defaults() {
        let config = test_config().with_betas(BetaTable::empty());
        let holdings = vec![create_holding("MYSTERY", dec!(1), dec!(100), dec!(100))];

        assert_relative_eq!(portfolio_beta(&holdings, &config), 1.0, epsilon = 1e-10);
    }

    #[test]
    fn test_beta_empty() {
        assert_relative_eq!(portfolio_beta(&[], &test_config()), 1.0);
    }

    #[test]
    fn test_volatility_double_sum() {
        let config = test_config();
        // Two equal-value holdings at +20% and -10%; avg = 5
        let holdings = vec![
            create_holding("A", dec!(1), dec!(100), dec!(120)),
            create_holding("B", dec!(1), dec!(200), dec!(180)),
        ];

        // weights: 120/300 = 0.4, 180/300 = 0.6
        // deviations: 0.4 × 15 = 6, 0.6 × 15 = 9
        // variance = 36 + 81 + 2 × (6 × 9 × 0.5) = 171
        let expected = 171.0_f64.sqrt();
        assert_relative_eq!(
            portfolio_volatility(&holdings, &config),
            expected,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_volatility_single_holding_zero() {
        let config = test_config();
        // One holding: its return equals the average, deviation 0
        let holdings = vec![create_holding("A", dec!(1), dec!(100), dec!(150))];

        assert_relative_eq!(portfolio_volatility(&holdings, &config), 0.0);
    }

    #[test]
    fn test_volatility_empty() {
        assert_eq!(portfolio_volatility(&[], &test_config()), 0.0);
    }

    #[test]
    fn test_sharpe_ratio() {
        let config = test_config();
        let holdings = vec![
            create_holding("A", dec!(1), dec!(100), dec!(120)),
            create_holding("B", dec!(1), dec!(200), dec!(180)),
        ];

        // return fraction = 0/300... value 300, cost 300 -> 0
        // (0 − 0.045) / (vol/100)
        let vol = portfolio_volatility(&holdings, &config);
        let expected = (0.0 - 0.045) / (vol / 100.0);
        assert_relative_eq!(sharpe_ratio(&holdings, &config), expected, epsilon = 1e-9);
    }

    #[test]
    fn test_sharpe_zero_volatility() {
        let config = test_config();
        let holdings = vec![create_holding("A", dec!(1), dec!(100), dec!(150))];

        // Single holding has zero proxy volatility
        assert_eq!(sharpe_ratio(&holdings, &config), 0.0);
        assert_eq!(sharpe_ratio(&[], &config), 0.0);
    }

    #[test]
    fn test_sortino_with_losers() {
        let config = test_config();
        let holdings = vec![
            create_holding("UP", dec!(1), dec!(100), dec!(140)),   // +40%
            create_holding("DOWN1", dec!(1), dec!(100), dec!(80)), // -20%
            create_holding("DOWN2", dec!(1), dec!(100), dec!(90)), // -10%
        ];

        // return fraction = 10/300
        // downside = sqrt((400 + 100) / 2) = sqrt(250)
        let ret = 10.0 / 300.0;
        let downside = 250.0_f64.sqrt();
        let expected = (ret - 0.045) / (downside / 100.0);
        assert_relative_eq!(sortino_ratio(&holdings, &config), expected, epsilon = 1e-9);
    }

    #[test]
    fn test_sortino_no_losers_sentinel() {
        let config = test_config();
        let winners = vec![create_holding("UP", dec!(1), dec!(100), dec!(150))];
        assert_relative_eq!(sortino_ratio(&winners, &config), SORTINO_NO_DOWNSIDE);

        // Flat portfolio: return below risk-free, no losers -> 0
        let flat = vec![create_holding("FLAT", dec!(1), dec!(100), dec!(100))];
        assert_eq!(sortino_ratio(&flat, &config), 0.0);

        assert_eq!(sortino_ratio(&[], &config), 0.0);
    }

    #[test]
    fn test_treynor_ratio() {
        let config = test_config().with_betas(BetaTable::from_pairs([("A", 1.5)]));
        let holdings = vec![create_holding("A", dec!(1), dec!(100), dec!(120))];

        // (0.2 − 0.045) / 1.5
        assert_relative_eq!(
            treynor_ratio(&holdings, &config),
            (0.2 - 0.045) / 1.5,
            epsilon = 1e-10
        );
        assert_eq!(treynor_ratio(&[], &config), 0.0);
    }

    #[test]
    fn test_value_at_risk() {
        let config = test_config();
        let holdings = vec![
            create_holding("A", dec!(1), dec!(100), dec!(120)),
            create_holding("B", dec!(1), dec!(200), dec!(180)),
        ];

        let vol = portfolio_volatility(&holdings, &config);
        let daily = vol / 252.0_f64.sqrt();
        let expected = 1.645 * (daily / 100.0) * 300.0;
        assert_relative_eq!(
            value_at_risk(&holdings, &config, 1.0, 0.95),
            expected,
            epsilon = 1e-9
        );

        // Multi-day horizon scales by sqrt(days)
        assert_relative_eq!(
            value_at_risk(&holdings, &config, 4.0, 0.95),
            expected * 2.0,
            epsilon = 1e-9
        );

        assert_eq!(value_at_risk(&[], &config, 1.0, 0.95), 0.0);
    }

    #[test]
    fn test_max_drawdown_proxy() {
        let holdings = vec![
            create_holding("UP", dec!(1), dec!(100), dec!(150)), // +50
            create_holding("DOWN", dec!(1), dec!(200), dec!(150)), // -50
        ];

        // losses = 50, total = 300: 50 / 350 × 100
        assert_relative_eq!(
            max_drawdown_proxy(&holdings),
            50.0 / 350.0 * 100.0,
            epsilon = 1e-10
        );
    }

    #[test]
    fn test_max_drawdown_no_losers() {
        let holdings = vec![create_holding("UP", dec!(1), dec!(100), dec!(150))];
        assert_eq!(max_drawdown_proxy(&holdings), 0.0);
        assert_eq!(max_drawdown_proxy(&[]), 0.0);
    }

    #[test]
    fn test_risk_score_bounds() {
        let config = test_config();
        assert_eq!(risk_score(&[], &config), 0.0);

        // Single flat holding: beta 1.0 (default), volatility 0
        let holdings = vec![create_holding("A", dec!(1), dec!(100), dec!(100))];
        assert_relative_eq!(risk_score(&holdings, &config), 25.0, epsilon = 1e-10);
    }

    #[test]
    fn test_risk_score_caps_at_100() {
        // beta and volatility components cap at 50 each
        assert_relative_eq!(risk_score_from(10.0, 500.0), 100.0);
    }

    #[test]
    fn test_bundle_matches_standalone() {
        let config = test_config();
        let holdings = vec![
            create_holding("AAPL", dec!(10), dec!(150), dec!(180)),
            create_holding("TSLA", dec!(5), dec!(250), dec!(200)),
            create_holding("KO", dec!(20), dec!(55), dec!(60)),
        ];

        let bundle = risk_metrics(&holdings, &config);

        assert_relative_eq!(bundle.beta, portfolio_beta(&holdings, &config));
        assert_relative_eq!(bundle.volatility, portfolio_volatility(&holdings, &config));
        assert_relative_eq!(bundle.sharpe_ratio, sharpe_ratio(&holdings, &config));
        assert_relative_eq!(bundle.sortino_ratio, sortino_ratio(&holdings, &config));
        assert_relative_eq!(bundle.treynor_ratio, treynor_ratio(&holdings, &config));
        assert_relative_eq!(
            bundle.value_at_risk_95,
            value_at_risk(&holdings, &config, 1.0, 0.95)
        );
        assert_relative_eq!(
            bundle.value_at_risk_99,
            value_at_risk(&holdings, &config, 1.0, 0.99)
        );
        assert_relative_eq!(bundle.max_drawdown, max_drawdown_proxy(&holdings));
        assert_relative_eq!(bundle.risk_score, risk_score(&holdings, &config));
    }

    #[test]
    fn test_bundle_empty() {
        let bundle = risk_metrics(&[], &test_config());
        assert_relative_eq!(bundle.beta, 1.0);
        assert_eq!(bundle.volatility, 0.0);
        assert_eq!(bundle.sharpe_ratio, 0.0);
        assert_eq!(bundle.risk_score, 0.0);
        assert_eq!(bundle.value_at_risk_95, 0.0);
    }
}
