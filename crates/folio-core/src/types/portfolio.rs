//! Portfolio snapshot container.

use super::{Holding, Market};
use crate::error::{CoreError, CoreResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A portfolio snapshot: a named collection of holdings from one import.
///
/// A thin container - every analytics function accepts `&[Holding]`
/// directly, so callers that only have a holdings list never need to build
/// one of these. Holdings keep their import order; several calculations
/// (best/worst performer, top-N concentration) break ties by that order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Portfolio {
    /// Identifier for the portfolio (browser-storage key upstream).
    pub id: String,

    /// Display name.
    pub name: String,

    /// Market used for display formatting of aggregate values.
    pub base_market: Market,

    /// The holdings, in import order.
    pub holdings: Vec<Holding>,
}

impl Portfolio {
    /// Creates a new portfolio builder.
    #[must_use]
    pub fn builder(name: impl Into<String>) -> PortfolioBuilder {
        PortfolioBuilder::new().name(name)
    }

    /// Returns the number of holdings.
    #[must_use]
    pub fn holding_count(&self) -> usize {
        self.holdings.len()
    }

    /// Returns true if the portfolio has no holdings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.holdings.is_empty()
    }

    /// Returns the total market value of all holdings.
    #[must_use]
    pub fn total_value(&self) -> Decimal {
        self.holdings.iter().map(|h| h.market_value).sum()
    }

    /// Returns the total acquisition cost of all holdings.
    #[must_use]
    pub fn total_cost(&self) -> Decimal {
        self.holdings.iter().map(|h| h.total_cost).sum()
    }
}

/// Builder for constructing a [`Portfolio`].
#[derive(Debug, Clone, Default)]
pub struct PortfolioBuilder {
    id: Option<String>,
    name: Option<String>,
    base_market: Market,
    holdings: Vec<Holding>,
}

impl PortfolioBuilder {
    /// Creates a new builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the portfolio id.
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the portfolio name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the base market.
    #[must_use]
    pub fn base_market(mut self, market: Market) -> Self {
        self.base_market = market;
        self
    }

    /// Adds a single holding.
    #[must_use]
    pub fn add_holding(mut self, holding: Holding) -> Self {
        self.holdings.push(holding);
        self
    }

    /// Adds multiple holdings, preserving their order.
    #[must_use]
    pub fn add_holdings(mut self, holdings: impl IntoIterator<Item = Holding>) -> Self {
        self.holdings.extend(holdings);
        self
    }

    /// Builds the portfolio.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is missing.
    pub fn build(self) -> CoreResult<Portfolio> {
        let name = self.name.ok_or_else(|| CoreError::missing_field("name"))?;

        if name.trim().is_empty() {
            return Err(CoreError::invalid_portfolio("name cannot be blank"));
        }

        Ok(Portfolio {
            id: self.id.unwrap_or_else(|| name.clone()),
            name,
            base_market: self.base_market,
            holdings: self.holdings,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
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

    #[test]
    fn test_build_portfolio() {
        let portfolio = Portfolio::builder("My Stocks")
            .id("pf-1")
            .add_holding(create_holding("AAPL", dec!(10), dec!(150), dec!(180)))
            .add_holding(create_holding("MSFT", dec!(5), dec!(300), dec!(330)))
            .build()
            .unwrap();

        assert_eq!(portfolio.holding_count(), 2);
        assert_eq!(portfolio.total_value(), dec!(3450));
        assert_eq!(portfolio.total_cost(), dec!(3000));
        assert!(!portfolio.is_empty());
    }

    #[test]
    fn test_empty_portfolio() {
        let portfolio = Portfolio::builder("Empty").build().unwrap();

        assert!(portfolio.is_empty());
        assert_eq!(portfolio.total_value(), Decimal::ZERO);
    }

    #[test]
    fn test_id_defaults_to_name() {
        let portfolio = Portfolio::builder("Retirement").build().unwrap();
        assert_eq!(portfolio.id, "Retirement");
    }

    #[test]
    fn test_blank_name_rejected() {
        let result = Portfolio::builder("   ").build();
        assert!(result.is_err());
    }
}
