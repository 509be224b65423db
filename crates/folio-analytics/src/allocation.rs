//! Allocation breakdowns and concentration.

use folio_core::{AssetType, Holding};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Default number of top holdings used for concentration risk.
pub const DEFAULT_CONCENTRATION_TOP_N: usize = 5;

/// Aggregated value for one allocation group.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AllocationSlice {
    /// Total market value of the group.
    pub value: Decimal,

    /// Group value as a percentage of total portfolio value (0-100).
    /// 0 when the portfolio's total value is zero.
    pub percentage: f64,

    /// Number of holdings in the group.
    pub count: usize,
}

/// Groups holdings by asset type.
///
/// Returns an empty map for empty input. Percentages are 0 (not NaN) when
/// the total portfolio value is zero.
#[must_use]
pub fn asset_allocation(holdings: &[Holding]) -> HashMap<AssetType, AllocationSlice> {
    group_allocation(holdings, |h| h.asset_type)
}

/// Groups holdings by sector label.
///
/// Holdings without a sector fall into the `"Unknown"` group.
#[must_use]
pub fn sector_allocation(holdings: &[Holding]) -> HashMap<String, AllocationSlice> {
    group_allocation(holdings, |h| h.sector_label().to_string())
}

fn group_allocation<K, F>(holdings: &[Holding], key: F) -> HashMap<K, AllocationSlice>
where
    K: std::hash::Hash + Eq,
    F: Fn(&Holding) -> K,
{
    let total: Decimal = holdings.iter().map(|h| h.market_value).sum();

    let mut groups: HashMap<K, AllocationSlice> = HashMap::new();
    for h in holdings {
        let slice = groups.entry(key(h)).or_default();
        slice.value += h.market_value;
        slice.count += 1;
    }

    if !total.is_zero() {
        for slice in groups.values_mut() {
            slice.percentage = (slice.value / total * Decimal::ONE_HUNDRED)
                .to_f64()
                .unwrap_or(0.0);
        }
    }

    groups
}

/// Calculates concentration risk: the share of total value held in the
/// `top_n` largest positions, in percent.
///
/// Positions are ranked by market value descending; ties keep input order
/// (stable sort). Returns 0 for an empty list or a zero-value portfolio,
/// and 100 whenever `top_n >= holdings.len()` with positive total value.
#[must_use]
pub fn concentration_risk(holdings: &[Holding], top_n: usize) -> f64 {
    if holdings.is_empty() {
        return 0.0;
    }

    let total: Decimal = holdings.iter().map(|h| h.market_value).sum();
    if total.is_zero() {
        return 0.0;
    }

    let mut values: Vec<Decimal> = holdings.iter().map(|h| h.market_value).collect();
    values.sort_by(|a, b| b.cmp(a));

    let top: Decimal = values.iter().take(top_n).copied().sum();

    (top / total * Decimal::ONE_HUNDRED).to_f64().unwrap_or(0.0)
}
