//! # Folio Core
//!
//! Data model and reference data for the Folio portfolio analytics engine.
//!
//! This crate defines the normalized [`Holding`] every calculation consumes,
//! the [`Portfolio`] snapshot container, and the static reference tables
//! (beta, dividend rates) the analytics configuration injects.
//!
//! ## Design Philosophy
//!
//! - **Validate at the boundary**: builders reject malformed positions
//!   (non-positive quantity, negative prices) so the analytics layer can be
//!   total over its inputs
//! - **Immutable inputs**: holdings are constructed once per file import and
//!   never mutated downstream
//! - **Trust supplied values**: broker files that carry `market_value` or
//!   `total_cost` directly are taken as given, not recomputed
//! - **Injected reference data**: beta/dividend tables are plain immutable
//!   values, never global mutable state, so a live market-data feed can
//!   replace them without changing call sites
//!
//! ## Quick Start
//!
//! ```rust
//! use folio_core::prelude::*;
//!
//! let holding = Holding::builder()
//!     .symbol("AAPL")
//!     .name("Apple Inc.")
//!     .quantity(dec!(10))
//!     .cost_basis(dec!(150))
//!     .current_price(dec!(180))
//!     .asset_type(AssetType::Stock)
//!     .sector("Technology")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(holding.gain_loss(), dec!(300));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod reference;
pub mod types;

// Re-export error types at crate root
pub use error::{CoreError, CoreResult};

// Re-export main types
pub use reference::{BetaTable, DividendTable, DEFAULT_BETA};
pub use types::{
    AssetType, Holding, HoldingBuilder, Market, Portfolio, PortfolioBuilder, UNKNOWN_SECTOR,
};

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use folio_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::reference::{BetaTable, DividendTable, DEFAULT_BETA};
    pub use crate::types::{
        AssetType, Holding, HoldingBuilder, Market, Portfolio, PortfolioBuilder, UNKNOWN_SECTOR,
    };

    // Re-export commonly used types from dependencies
    pub use chrono::NaiveDate;
    pub use rust_decimal::Decimal;
    pub use rust_decimal_macros::dec;
}
