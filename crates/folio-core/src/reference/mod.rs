//! Static reference data injected into the analytics configuration.

mod beta;
mod dividends;

pub use beta::{BetaTable, DEFAULT_BETA};
pub use dividends::DividendTable;
