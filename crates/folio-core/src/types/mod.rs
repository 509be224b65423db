//! Core model types.

mod asset;
mod holding;
mod portfolio;

pub use asset::{AssetType, Market};
pub use holding::{Holding, HoldingBuilder, UNKNOWN_SECTOR};
pub use portfolio::{Portfolio, PortfolioBuilder};
