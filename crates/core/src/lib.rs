//! Vnfolio Core - portfolio performance domain.
//!
//! Aligns quote series, computes weighted returns against a benchmark and
//! manages the default portfolio. Quotes come from any
//! [`vnfolio_market_data::QuoteSource`]; storage is behind
//! [`portfolio::DefaultPortfolioStore`].

pub mod constants;
pub mod errors;
pub mod portfolio;

pub use portfolio::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
