//! Market data models
//!
//! - `quote` - Daily OHLCV record (QuoteRecord)

mod quote;

pub(crate) use quote::normalize_records;
pub use quote::QuoteRecord;
