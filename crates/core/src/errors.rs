//! Core error types.
//!
//! Every failure the performance pipeline can produce is bad client input,
//! missing market data, a failing upstream provider, a failing
//! default-portfolio store, or arithmetic that leaves the decimal range.
//! The HTTP layer maps each kind to a status.

use rust_decimal::Decimal;
use thiserror::Error;
use vnfolio_market_data::MarketDataError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the core crate.
#[derive(Error, Debug)]
pub enum Error {
    /// Client input rejected before any data is fetched.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// The provider returned no rows for a symbol, the benchmark, or the join.
    #[error("{0}")]
    NotFound(String),

    /// The provider failed outright.
    #[error("{context}: {source}")]
    Upstream {
        context: String,
        #[source]
        source: MarketDataError,
    },

    /// Reading or writing the default portfolio failed.
    #[error("{0}")]
    Persistence(String),

    /// A computed figure does not fit in a `Decimal`.
    #[error("{0}")]
    Calculation(String),
}

impl Error {
    pub fn upstream(context: impl Into<String>, source: MarketDataError) -> Self {
        Error::Upstream {
            context: context.into(),
            source,
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Error::NotFound(message.into())
    }
}

/// Reasons a portfolio request or default-portfolio update is rejected.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Total percentage ({0}%) exceeds 100%")]
    TotalPercentageExceeded(Decimal),

    #[error("Percentage for {symbol} must be between 0 and 100, got {percentage}")]
    PercentageOutOfRange { symbol: String, percentage: Decimal },

    #[error("Stock symbol must not be empty")]
    EmptySymbol,

    #[error("Initial value must be positive, got {0}")]
    NonPositiveInitialValue(Decimal),

    #[error("Lookback window must be at least 1 day")]
    EmptyWindow,

    #[error("Lookback window of {days} days exceeds the maximum of {max} days")]
    WindowTooLong { days: u32, max: u32 },

    #[error("Initial value {value} exceeds the maximum of {max}")]
    InitialValueTooLarge { value: Decimal, max: Decimal },
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_total_percentage_message() {
        let err: Error = ValidationError::TotalPercentageExceeded(dec!(105)).into();
        assert_eq!(err.to_string(), "Total percentage (105%) exceeds 100%");
    }

    #[test]
    fn test_upstream_message_keeps_context() {
        let err = Error::upstream(
            "Error fetching data for VNM",
            MarketDataError::Api("VCI history request failed for VNM: 502".into()),
        );
        assert_eq!(
            err.to_string(),
            "Error fetching data for VNM: API error: VCI history request failed for VNM: 502"
        );
    }
}
