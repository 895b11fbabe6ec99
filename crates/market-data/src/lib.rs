//! Vnfolio Market Data Crate
//!
//! Daily historical quotes for Vietnamese equities and indices.
//!
//! # Overview
//!
//! - [`QuoteSource`] - the provider abstraction the rest of the workspace depends on
//! - [`VciProvider`] - Vietcap (VCI) chart API implementation
//! - [`CachedQuoteSource`] - TTL cache decorator for any source
//! - [`QuoteRecord`] - one OHLCV row per trading date
//!
//! ```text
//! PerformanceService --> CachedQuoteSource --> VciProvider --> trading.vietcap.com.vn
//! ```

pub mod cache;
pub mod errors;
pub mod models;
pub mod provider;

pub use cache::CachedQuoteSource;
pub use errors::MarketDataError;
pub use models::QuoteRecord;
pub use provider::vci::VciProvider;
pub use provider::{QuoteSource, LATEST_QUOTE_LOOKBACK_DAYS};
