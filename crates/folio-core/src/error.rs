//! Error types for the data model.
//!
//! Errors only occur at construction boundaries (builders). Analytics
//! functions downstream are total over well-formed holdings and never fail.

use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur while constructing model types.
#[derive(Error, Debug, Clone)]
pub enum CoreError {
    /// Missing required field during construction.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The name of the missing field.
        field: String,
    },

    /// Invalid holding data.
    #[error("Invalid holding '{symbol}': {reason}")]
    InvalidHolding {
        /// The holding symbol.
        symbol: String,
        /// The reason the holding is invalid.
        reason: String,
    },

    /// Invalid portfolio configuration.
    #[error("Invalid portfolio: {reason}")]
    InvalidPortfolio {
        /// The reason the portfolio is invalid.
        reason: String,
    },
}

impl CoreError {
    /// Create a missing field error.
    #[must_use]
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Create an invalid holding error.
    #[must_use]
    pub fn invalid_holding(symbol: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidHolding {
            symbol: symbol.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid portfolio error.
    #[must_use]
    pub fn invalid_portfolio(reason: impl Into<String>) -> Self {
        Self::InvalidPortfolio {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CoreError::missing_field("symbol");
        assert!(err.to_string().contains("symbol"));

        let err = CoreError::invalid_holding("AAPL", "quantity must be positive");
        assert!(err.to_string().contains("AAPL"));
        assert!(err.to_string().contains("quantity must be positive"));

        let err = CoreError::invalid_portfolio("no name");
        assert!(err.to_string().contains("no name"));
    }

    #[test]
    fn test_error_clone() {
        let err = CoreError::missing_field("quantity");
        let cloned = err.clone();
        assert_eq!(err.to_string(), cloned.to_string());
    }
}
