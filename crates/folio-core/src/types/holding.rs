//! Holding representation - one position in a portfolio snapshot.

use super::{AssetType, Market};
use crate::error::{CoreError, CoreResult};
use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Sector label used when a holding's sector could not be determined.
pub const UNKNOWN_SECTOR: &str = "Unknown";

/// A single position in a portfolio snapshot.
///
/// Holdings are produced by the parsing layer (broker CSV/Excel import) and
/// are immutable inputs to the analytics engine. Duplicate symbols are
/// tolerated as separate line items and never merged.
///
/// Monetary fields use [`Decimal`]; percentage/ratio outputs are `f64`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Holding {
    /// Ticker symbol, unique within a snapshot (not globally).
    pub symbol: String,

    /// Display name.
    pub name: String,

    /// Number of units held. Always positive.
    pub quantity: Decimal,

    /// Average unit purchase price. Never negative.
    pub cost_basis: Decimal,

    /// Current unit price. Never negative.
    pub current_price: Decimal,

    /// Market value of the position.
    ///
    /// Some broker exports supply this directly; when supplied it is
    /// trusted as given, otherwise it is `quantity × current_price`.
    pub market_value: Decimal,

    /// Total acquisition cost of the position.
    ///
    /// Trusted when supplied by the source, otherwise
    /// `quantity × cost_basis`.
    pub total_cost: Decimal,

    /// Asset class.
    pub asset_type: AssetType,

    /// Issuer sector, `None` when undeterminable.
    pub sector: Option<String>,

    /// Purchase date, used only for holding-period bucketing.
    pub purchase_date: Option<NaiveDate>,

    /// Market the position trades in (display/locale tag only).
    pub market: Market,

    /// Exchange name (display tag only).
    pub exchange: Option<String>,
}

impl Holding {
    /// Creates a new holding builder.
    #[must_use]
    pub fn builder() -> HoldingBuilder {
        HoldingBuilder::new()
    }

    /// Returns the unrealized gain or loss: `market_value − total_cost`.
    #[must_use]
    pub fn gain_loss(&self) -> Decimal {
        self.market_value - self.total_cost
    }

    /// Returns the gain/loss as a percentage of total cost.
    ///
    /// Defined as 0 when `total_cost` is zero (free acquisitions, bonus
    /// shares) so downstream statistics stay free of NaN/infinity.
    #[must_use]
    pub fn gain_loss_percent(&self) -> f64 {
        if self.total_cost.is_zero() {
            return 0.0;
        }
        (self.gain_loss() / self.total_cost * Decimal::ONE_HUNDRED)
            .to_f64()
            .unwrap_or(0.0)
    }

    /// Returns true if the position is currently at a loss.
    #[must_use]
    pub fn is_losing(&self) -> bool {
        self.gain_loss() < Decimal::ZERO
    }

    /// Returns the sector label, substituting [`UNKNOWN_SECTOR`] when the
    /// sector is not set.
    #[must_use]
    pub fn sector_label(&self) -> &str {
        self.sector.as_deref().unwrap_or(UNKNOWN_SECTOR)
    }
}

/// Builder for constructing a [`Holding`].
#[derive(Debug, Clone, Default)]
pub struct HoldingBuilder {
    symbol: Option<String>,
    name: Option<String>,
    quantity: Option<Decimal>,
    cost_basis: Option<Decimal>,
    current_price: Option<Decimal>,
    market_value: Option<Decimal>,
    total_cost: Option<Decimal>,
    asset_type: AssetType,
    sector: Option<String>,
    purchase_date: Option<NaiveDate>,
    market: Market,
    exchange: Option<String>,
}

impl HoldingBuilder {
    /// Creates a new builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the ticker symbol.
    #[must_use]
    pub fn symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    /// Sets the display name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the quantity held.
    #[must_use]
    pub fn quantity(mut self, quantity: Decimal) -> Self {
        self.quantity = Some(quantity);
        self
    }

    /// Sets the average unit purchase price.
    #[must_use]
    pub fn cost_basis(mut self, cost_basis: Decimal) -> Self {
        self.cost_basis = Some(cost_basis);
        self
    }

    /// Sets the current unit price.
    #[must_use]
    pub fn current_price(mut self, price: Decimal) -> Self {
        self.current_price = Some(price);
        self
    }

    /// Sets an explicit market value (trusted, not recomputed).
    #[must_use]
    pub fn market_value(mut self, value: Decimal) -> Self {
        self.market_value = Some(value);
        self
    }

    /// Sets an explicit total cost (trusted, not recomputed).
    #[must_use]
    pub fn total_cost(mut self, cost: Decimal) -> Self {
        self.total_cost = Some(cost);
        self
    }

    /// Sets the asset type.
    #[must_use]
    pub fn asset_type(mut self, asset_type: AssetType) -> Self {
        self.asset_type = asset_type;
        self
    }

    /// Sets the sector.
    #[must_use]
    pub fn sector(mut self, sector: impl Into<String>) -> Self {
        self.sector = Some(sector.into());
        self
    }

    /// Sets the purchase date.
    #[must_use]
    pub fn purchase_date(mut self, date: NaiveDate) -> Self {
        self.purchase_date = Some(date);
        self
    }

    /// Sets the market.
    #[must_use]
    pub fn market(mut self, market: Market) -> Self {
        self.market = market;
        self
    }

    /// Sets the exchange name.
    #[must_use]
    pub fn exchange(mut self, exchange: impl Into<String>) -> Self {
        self.exchange = Some(exchange.into());
        self
    }

    /// Builds the holding.
    ///
    /// When `market_value` or `total_cost` were not supplied by the source
    /// they are derived as `quantity × current_price` and
    /// `quantity × cost_basis` respectively.
    ///
    /// # Errors
    ///
    /// Returns an error if required fields are missing, quantity is not
    /// positive, or a price/cost field is negative.
    pub fn build(self) -> CoreResult<Holding> {
        let symbol = self
            .symbol
            .ok_or_else(|| CoreError::missing_field("symbol"))?;

        let quantity = self
            .quantity
            .ok_or_else(|| CoreError::missing_field("quantity"))?;

        let cost_basis = self
            .cost_basis
            .ok_or_else(|| CoreError::missing_field("cost_basis"))?;

        let current_price = self
            .current_price
            .ok_or_else(|| CoreError::missing_field("current_price"))?;

        if quantity <= Decimal::ZERO {
            return Err(CoreError::invalid_holding(
                &symbol,
                "quantity must be positive",
            ));
        }

        if cost_basis < Decimal::ZERO {
            return Err(CoreError::invalid_holding(
                &symbol,
                "cost_basis cannot be negative",
            ));
        }

        if current_price < Decimal::ZERO {
            return Err(CoreError::invalid_holding(
                &symbol,
                "current_price cannot be negative",
            ));
        }

        let market_value = self.market_value.unwrap_or(quantity * current_price);
        let total_cost = self.total_cost.unwrap_or(quantity * cost_basis);
        let name = self.name.unwrap_or_else(|| symbol.clone());

        Ok(Holding {
            symbol,
            name,
            quantity,
            cost_basis,
            current_price,
            market_value,
            total_cost,
            asset_type: self.asset_type,
            sector: self.sector,
            purchase_date: self.purchase_date,
            market: self.market,
            exchange: self.exchange,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn create_test_holding() -> Holding {
        Holding::builder()
            .symbol("AAPL")
            .name("Apple Inc.")
            .quantity(dec!(10))
            .cost_basis(dec!(150))
            .current_price(dec!(180))
            .asset_type(AssetType::Stock)
            .sector("Technology")
            .build()
            .unwrap()
    }

    #[test]
    fn test_derived_values() {
        let holding = create_test_holding();

        // MV = 10 × 180 = 1800, cost = 10 × 150 = 1500
        assert_eq!(holding.market_value, dec!(1800));
        assert_eq!(holding.total_cost, dec!(1500));
        assert_eq!(holding.gain_loss(), dec!(300));

        // 300 / 1500 × 100 = 20%
        assert!((holding.gain_loss_percent() - 20.0).abs() < 1e-10);
        assert!(!holding.is_losing());
    }

    #[test]
    fn test_supplied_market_value_trusted() {
        // Some broker files carry the market value directly; it must be
        // trusted as given, not recomputed from quantity × price.
        let holding = Holding::builder()
            .symbol("RELIANCE")
            .quantity(dec!(5))
            .cost_basis(dec!(2400))
            .current_price(dec!(2500))
            .market_value(dec!(12600))
            .market(Market::India)
            .build()
            .unwrap();

        assert_eq!(holding.market_value, dec!(12600));
        assert_eq!(holding.total_cost, dec!(12000));
    }

    #[test]
    fn test_zero_cost_gain_percent() {
        let holding = Holding::builder()
            .symbol("FREE")
            .quantity(dec!(1))
            .cost_basis(dec!(0))
            .current_price(dec!(50))
            .build()
            .unwrap();

        // Division-by-zero guard: 0, not NaN/infinity
        assert_eq!(holding.gain_loss_percent(), 0.0);
        assert_eq!(holding.gain_loss(), dec!(50));
    }

    #[test]
    fn test_sector_label_fallback() {
        let holding = Holding::builder()
            .symbol("XYZ")
            .quantity(dec!(1))
            .cost_basis(dec!(10))
            .current_price(dec!(10))
            .build()
            .unwrap();

        assert_eq!(holding.sector_label(), UNKNOWN_SECTOR);
        assert_eq!(create_test_holding().sector_label(), "Technology");
    }

    #[test]
    fn test_name_defaults_to_symbol() {
        let holding = Holding::builder()
            .symbol("TCS")
            .quantity(dec!(1))
            .cost_basis(dec!(100))
            .current_price(dec!(100))
            .build()
            .unwrap();

        assert_eq!(holding.name, "TCS");
    }

    #[test]
    fn test_builder_validation() {
        // Missing symbol
        let result = Holding::builder()
            .quantity(dec!(1))
            .cost_basis(dec!(10))
            .current_price(dec!(10))
            .build();
        assert!(result.is_err());

        // Zero quantity
        let result = Holding::builder()
            .symbol("ZERO")
            .quantity(dec!(0))
            .cost_basis(dec!(10))
            .current_price(dec!(10))
            .build();
        assert!(result.is_err());

        // Negative quantity
        let result = Holding::builder()
            .symbol("NEG")
            .quantity(dec!(-5))
            .cost_basis(dec!(10))
            .current_price(dec!(10))
            .build();
        assert!(result.is_err());

        // Negative price
        let result = Holding::builder()
            .symbol("NEGPX")
            .quantity(dec!(1))
            .cost_basis(dec!(10))
            .current_price(dec!(-10))
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_losing_position() {
        let holding = Holding::builder()
            .symbol("DOWN")
            .quantity(dec!(10))
            .cost_basis(dec!(100))
            .current_price(dec!(60))
            .build()
            .unwrap();

        assert!(holding.is_losing());
        assert_eq!(holding.gain_loss(), dec!(-400));
        assert!((holding.gain_loss_percent() + 40.0).abs() < 1e-10);
    }

    #[test]
    fn test_serde_round_trip() {
        let holding = create_test_holding();
        let json = serde_json::to_string(&holding).unwrap();
        let parsed: Holding = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.symbol, holding.symbol);
        assert_eq!(parsed.market_value, holding.market_value);
        assert_eq!(parsed.asset_type, holding.asset_type);
    }
}
