//! Asset type and market classification enums.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Asset class of a holding.
///
/// Broker exports carry free-form type labels; the parsing layer normalizes
/// them into this enum. Unrecognized labels map to [`AssetType::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AssetType {
    /// Common stock / equity share.
    #[default]
    Stock,
    /// Exchange-traded fund.
    Etf,
    /// Mutual fund.
    MutualFund,
    /// Bond or other fixed income instrument.
    Bond,
    /// Cryptocurrency.
    Crypto,
    /// Anything the parsing layer could not classify.
    Other,
}

impl AssetType {
    /// Returns the display label for this asset type.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Stock => "Stock",
            Self::Etf => "ETF",
            Self::MutualFund => "Mutual Fund",
            Self::Bond => "Bond",
            Self::Crypto => "Crypto",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Market a holding trades in.
///
/// A display/locale tag only - no calculation depends on it. The
/// presentation layer uses it to pick currency symbols and number
/// formatting (e.g., lakhs/crores for Indian holdings).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Market {
    /// United States exchanges (NYSE, NASDAQ, ...).
    #[default]
    Usa,
    /// Indian exchanges (NSE, BSE).
    India,
}

impl Market {
    /// Returns the ISO currency code for this market.
    #[must_use]
    pub fn currency_code(&self) -> &'static str {
        match self {
            Self::Usa => "USD",
            Self::India => "INR",
        }
    }
}

impl fmt::Display for Market {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Usa => f.write_str("USA"),
            Self::India => f.write_str("India"),
        }
    }
}
