//! Error types for the market data crate.

use thiserror::Error;

/// Errors that can occur while fetching quotes from a provider.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// HTTP transport failed (connect, timeout, TLS, body read).
    #[error("HTTP request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The provider answered with a non-success status.
    #[error("API error: {0}")]
    Api(String),

    /// The provider rate limited the request (HTTP 429).
    #[error("Rate limited: {provider}")]
    RateLimited {
        /// The provider that rate limited the request
        provider: String,
    },

    /// The provider response could not be decoded.
    #[error("Parse error: {0}")]
    Parse(String),

    /// The symbol is empty or otherwise unusable.
    #[error("Invalid symbol: {0}")]
    InvalidSymbol(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = MarketDataError::Api("VCI history request failed for VNM: 502".to_string());
        assert_eq!(
            format!("{}", error),
            "API error: VCI history request failed for VNM: 502"
        );

        let error = MarketDataError::RateLimited {
            provider: "VCI".to_string(),
        };
        assert_eq!(format!("{}", error), "Rate limited: VCI");
    }
}
