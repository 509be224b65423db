//! Diversification analytics for portfolio snapshots.
//!
//! Correlation here is a sector-concentration heuristic, not an estimate
//! from return series; see the module notes in [`crate::risk`] about
//! preserving the proxy formulas.

use crate::scores::unique_sector_count;
use folio_core::Holding;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Lower bound of the correlation heuristic.
const CORRELATION_FLOOR: f64 = 0.3;

/// Spread of the correlation heuristic above the floor.
const CORRELATION_SPAN: f64 = 0.4;

/// Calculates the Herfindahl-Hirschman Index on market-value weights.
///
/// ## Formula
///
/// ```text
/// HHI = Σ (market_value_i / total_value)²
/// ```
///
/// A fraction in (0, 1]: 1/n for an equal-weight portfolio, 1.0 for a
/// single holding. Empty or zero-value input returns the maximally
/// concentrated sentinel 1.0.
#[must_use]
pub fn herfindahl_index(holdings: &[Holding]) -> f64 {
    let total: Decimal = holdings.iter().map(|h| h.market_value).sum();
    let total = total.to_f64().unwrap_or(0.0);
    if holdings.is_empty() || total == 0.0 {
        return 1.0;
    }

    holdings
        .iter()
        .map(|h| {
            let weight = h.market_value.to_f64().unwrap_or(0.0) / total;
            weight * weight
        })
        .sum()
}

/// Returns the effective number of independent positions: `1 / HHI`.
///
/// Equals the holding count for an equal-weight portfolio and degrades
/// toward 1 as value concentrates. Guarded to 0 if HHI is somehow 0.
#[must_use]
pub fn effective_stocks(holdings: &[Holding]) -> f64 {
    let hhi = herfindahl_index(holdings);
    if hhi == 0.0 {
        return 0.0;
    }
    1.0 / hhi
}

/// Returns the ratio of unique sector labels to holding count.
///
/// Missing sectors collapse into one "Unknown" label. 1.0 means every
/// holding sits in its own sector. Returns 0 for empty input.
#[must_use]
pub fn sector_diversification_ratio(holdings: &[Holding]) -> f64 {
    if holdings.is_empty() {
        return 0.0;
    }
    unique_sector_count(holdings) as f64 / holdings.len() as f64
}

/// Estimates the average pairwise correlation between holdings.
///
/// ## Formula
///
/// ```text
/// 0.3 + 0.4 × (largest_sector_count / holding_count)
/// ```
///
/// A heuristic on sector concentration, not a statistic over return
/// series; ranges over [0.3, 0.7]. Empty input returns the 0.3 floor.
#[must_use]
pub fn average_correlation(holdings: &[Holding]) -> f64 {
    if holdings.is_empty() {
        return CORRELATION_FLOOR;
    }

    let mut sector_counts: HashMap<&str, usize> = HashMap::new();
    for h in holdings {
        *sector_counts.entry(h.sector_label()).or_insert(0) += 1;
    }

    let max_sector_count = sector_counts.values().copied().max().unwrap_or(0);
    CORRELATION_FLOOR + CORRELATION_SPAN * (max_sector_count as f64 / holdings.len() as f64)
}

/// Calculates the composite diversification score on a 0-100 scale.
///
/// HHI is normalized against the perfect-diversification value `1/n`
/// (worth up to 80 points), a sector bonus `unique_sectors/n × 20` is
/// added, and a correlation penalty `avg_correlation × 20` subtracted:
///
/// ```text
/// base    = (1 − (HHI − 1/n) / (1 − 1/n)) × 80    (0 for n = 1)
/// score   = clamp(base + sectors/n × 20 − corr × 20, 0, 100)
/// ```
///
/// Returns 0 for empty input.
#[must_use]
pub fn diversification_score(holdings: &[Holding]) -> f64 {
    if holdings.is_empty() {
        return 0.0;
    }

    let n = holdings.len() as f64;
    let hhi = herfindahl_index(holdings);
    let ideal = 1.0 / n;

    let base = if holdings.len() > 1 {
        (1.0 - (hhi - ideal) / (1.0 - ideal)) * 80.0
    } else {
        0.0
    };

    let sector_bonus = unique_sector_count(holdings) as f64 / n * 20.0;
    let correlation_penalty = average_correlation(holdings) * 20.0;

    (base + sector_bonus - correlation_penalty).clamp(0.0, 100.0)
}

/// Bundle of every diversification metric for one snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiversificationMetrics {
    /// Herfindahl-Hirschman Index, fraction in (0, 1].
    pub herfindahl_index: f64,

    /// Effective number of independent positions (1/HHI).
    pub effective_stocks: f64,

    /// Unique sectors / holding count.
    pub sector_ratio: f64,

    /// Average pairwise correlation heuristic, [0.3, 0.7].
    pub average_correlation: f64,

    /// Composite diversification score, 0-100.
    pub diversification_score: f64,
}

/// Calculates the full diversification bundle.
///
/// Every field equals its standalone function evaluated on the same input.
#[must_use]
pub fn diversification_metrics(holdings: &[Holding]) -> DiversificationMetrics {
    DiversificationMetrics {
        herfindahl_index: herfindahl_index(holdings),
        effective_stocks: effective_stocks(holdings),
        sector_ratio: sector_diversification_ratio(holdings),
        average_correlation: average_correlation(holdings),
        diversification_score: diversification_score(holdings),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rust_decimal_macros::dec;

    fn create_holding(symbol: &str, value: Decimal, sector: &str) -> Holding {
        Holding::builder()
            .symbol(symbol)
            .quantity(dec!(1))
            .cost_basis(value)
            .current_price(value)
            .sector(sector)
            .build()
            .unwrap()
    }

    #[test]
    fn test_hhi_single_holding() {
        let holdings = vec![create_holding("ONLY", dec!(1000), "Tech")];
        assert_relative_eq!(herfindahl_index(&holdings), 1.0, epsilon = 1e-12);
        assert_relative_eq!(effective_stocks(&holdings), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_hhi_equal_weights() {
        let holdings = vec![
            create_holding("A", dec!(500), "Tech"),
            create_holding("B", dec!(500), "Energy"),
        ];

        assert_relative_eq!(herfindahl_index(&holdings), 0.5, epsilon = 1e-12);
        assert_relative_eq!(effective_stocks(&holdings), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_hhi_concentrated() {
        let holdings = vec![
            create_holding("BIG", dec!(900), "Tech"),
            create_holding("SMALL", dec!(100), "Energy"),
        ];

        // 0.81 + 0.01
        assert_relative_eq!(herfindahl_index(&holdings), 0.82, epsilon = 1e-12);
        assert!(effective_stocks(&holdings) < 2.0);
    }

    #[test]
    fn test_hhi_empty_sentinel() {
        assert_relative_eq!(herfindahl_index(&[]), 1.0);
    }

    #[test]
    fn test_sector_ratio() {
        let holdings = vec![
            create_holding("A", dec!(100), "Tech"),
            create_holding("B", dec!(100), "Energy"),
        ];
        assert_relative_eq!(sector_diversification_ratio(&holdings), 1.0);

        let same = vec![
            create_holding("A", dec!(100), "Tech"),
            create_holding("B", dec!(100), "Tech"),
        ];
        assert_relative_eq!(sector_diversification_ratio(&same), 0.5);

        assert_eq!(sector_diversification_ratio(&[]), 0.0);
    }

    #[test]
    fn test_average_correlation_range() {
        // All one sector: 0.3 + 0.4 × 1 = 0.7
        let same = vec![
            create_holding("A", dec!(100), "Tech"),
            create_holding("B", dec!(100), "Tech"),
        ];
        assert_relative_eq!(average_correlation(&same), 0.7, epsilon = 1e-12);

        // Four holdings, largest sector 2: 0.3 + 0.4 × 0.5 = 0.5
        let mixed = vec![
            create_holding("A", dec!(100), "Tech"),
            create_holding("B", dec!(100), "Tech"),
            create_holding("C", dec!(100), "Energy"),
            create_holding("D", dec!(100), "Health"),
        ];
        assert_relative_eq!(average_correlation(&mixed), 0.5, epsilon = 1e-12);

        assert_relative_eq!(average_correlation(&[]), 0.3);
    }

    #[test]
    fn test_diversification_score_two_sectors() {
        // Equal weights, two sectors: base 80, bonus 20, penalty 0.5×20
        let holdings = vec![
            create_holding("A", dec!(500), "Tech"),
            create_holding("B", dec!(500), "Energy"),
        ];

        assert_relative_eq!(diversification_score(&holdings), 90.0, epsilon = 1e-9);
    }

    #[test]
    fn test_diversification_score_single() {
        let holdings = vec![create_holding("ONLY", dec!(1000), "Tech")];

        // base 0, bonus 20, penalty 0.7 × 20 = 14
        assert_relative_eq!(diversification_score(&holdings), 6.0, epsilon = 1e-9);
    }

    #[test]
    fn test_diversification_score_empty() {
        assert_eq!(diversification_score(&[]), 0.0);
    }

    #[test]
    fn test_score_rewards_spreading() {
        let concentrated = vec![
            create_holding("BIG", dec!(950), "Tech"),
            create_holding("SMALL", dec!(50), "Tech"),
        ];
        let spread = vec![
            create_holding("A", dec!(500), "Tech"),
            create_holding("B", dec!(500), "Energy"),
        ];

        assert!(diversification_score(&spread) > diversification_score(&concentrated));
    }

    #[test]
    fn test_bundle_matches_standalone() {
        let holdings = vec![
            create_holding("A", dec!(400), "Tech"),
            create_holding("B", dec!(350), "Energy"),
            create_holding("C", dec!(250), "Tech"),
        ];

        let bundle = diversification_metrics(&holdings);

        assert_relative_eq!(bundle.herfindahl_index, herfindahl_index(&holdings));
        assert_relative_eq!(bundle.effective_stocks, effective_stocks(&holdings));
        assert_relative_eq!(bundle.sector_ratio, sector_diversification_ratio(&holdings));
        assert_relative_eq!(bundle.average_correlation, average_correlation(&holdings));
        assert_relative_eq!(
            bundle.diversification_score,
            diversification_score(&holdings)
        );
    }

    #[test]
    fn test_bundle_empty() {
        let bundle = diversification_metrics(&[]);
        assert_relative_eq!(bundle.herfindahl_index, 1.0);
        assert_relative_eq!(bundle.effective_stocks, 1.0);
        assert_eq!(bundle.sector_ratio, 0.0);
        assert_relative_eq!(bundle.average_correlation, 0.3);
        assert_eq!(bundle.diversification_score, 0.0);
    }
}
