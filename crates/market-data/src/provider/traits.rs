//! Quote source trait definition.

use async_trait::async_trait;
use chrono::{Duration, NaiveDate};

use crate::errors::MarketDataError;
use crate::models::QuoteRecord;

/// Calendar days searched backwards when looking for the latest session.
/// Covers weekends plus the longest regular exchange holiday.
pub const LATEST_QUOTE_LOOKBACK_DAYS: i64 = 7;

/// A source of daily historical quotes.
///
/// Implementations return records ordered by date ascending with unique
/// dates. An empty vector means the source has no data for the range; it is
/// not an error.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use chrono::NaiveDate;
/// use vnfolio_market_data::{MarketDataError, QuoteRecord, QuoteSource};
///
/// struct FixtureSource;
///
/// #[async_trait]
/// impl QuoteSource for FixtureSource {
///     fn id(&self) -> &'static str {
///         "FIXTURE"
///     }
///
///     async fn get_history(
///         &self,
///         symbol: &str,
///         start: NaiveDate,
///         end: NaiveDate,
///     ) -> Result<Vec<QuoteRecord>, MarketDataError> {
///         Ok(vec![])
///     }
/// }
/// ```
#[async_trait]
pub trait QuoteSource: Send + Sync {
    /// Identifier used in logs, e.g. "VCI".
    fn id(&self) -> &'static str;

    /// Fetch daily quotes for `symbol` with `start <= date <= end`.
    async fn get_history(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<QuoteRecord>, MarketDataError>;

    /// Most recent session at or before `as_of`, if any within the lookback window.
    async fn get_latest(
        &self,
        symbol: &str,
        as_of: NaiveDate,
    ) -> Result<Option<QuoteRecord>, MarketDataError> {
        let start = as_of - Duration::days(LATEST_QUOTE_LOOKBACK_DAYS);
        let quotes = self.get_history(symbol, start, as_of).await?;
        Ok(quotes.into_iter().last())
    }
}
