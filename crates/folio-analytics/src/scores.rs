//! Basic (heuristic) risk and diversification scores.
//!
//! These are the original count-and-concentration heuristics. The display
//! layer prefers the model-based scores from [`crate::risk`] and
//! [`crate::diversification`], but the basic variants stay implemented and
//! tested because other surfaces still reference them.

use crate::allocation::{concentration_risk, DEFAULT_CONCENTRATION_TOP_N};
use folio_core::Holding;
use std::collections::HashSet;

/// Basic diversification score on a 0-100 scale (higher is better).
///
/// Blend of holding count, sector count, asset-type count, and top-5
/// concentration:
///
/// ```text
/// min(n × 5, 30) + min(sectors × 8, 30) + min(types × 10, 20)
///   + (100 − concentration_top5) × 0.2
/// ```
///
/// clamped to [0, 100]. Returns 0 for empty input.
#[must_use]
pub fn diversification_score_basic(holdings: &[Holding]) -> f64 {
    if holdings.is_empty() {
        return 0.0;
    }

    let n = holdings.len() as f64;
    let sectors = unique_sector_count(holdings) as f64;
    let types = unique_asset_type_count(holdings) as f64;
    let concentration = concentration_risk(holdings, DEFAULT_CONCENTRATION_TOP_N);

    let score = (n * 5.0).min(30.0)
        + (sectors * 8.0).min(30.0)
        + (types * 10.0).min(20.0)
        + (100.0 - concentration) * 0.2;

    score.clamp(0.0, 100.0)
}

/// Basic risk score on a 0-100 scale (higher is riskier).
///
/// Concentration contributes up to 50 points; thin sector and asset-type
/// coverage add fixed penalties:
///
/// ```text
/// concentration_top5 × 0.5 + max(0, 30 − sectors × 5)
///   + max(0, 20 − types × 5)
/// ```
///
/// clamped to [0, 100]. Returns 0 for empty input.
#[must_use]
pub fn risk_score_basic(holdings: &[Holding]) -> f64 {
    if holdings.is_empty() {
        return 0.0;
    }

    let sectors = unique_sector_count(holdings) as f64;
    let types = unique_asset_type_count(holdings) as f64;
    let concentration = concentration_risk(holdings, DEFAULT_CONCENTRATION_TOP_N);

    let score =
        concentration * 0.5 + (30.0 - sectors * 5.0).max(0.0) + (20.0 - types * 5.0).max(0.0);

    score.clamp(0.0, 100.0)
}

/// Counts distinct sector labels, with missing sectors collapsing into the
/// single "Unknown" label.
pub(crate) fn unique_sector_count(holdings: &[Holding]) -> usize {
    holdings
        .iter()
        .map(Holding::sector_label)
        .collect::<HashSet<_>>()
        .len()
}

pub(crate) fn unique_asset_type_count(holdings: &[Holding]) -> usize {
    holdings
        .iter()
        .map(|h| h.asset_type)
        .collect::<HashSet<_>>()
        .len()
}
