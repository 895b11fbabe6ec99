//! In-memory TTL cache in front of a quote source, using moka.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use log::debug;
use moka::future::Cache;

use crate::errors::MarketDataError;
use crate::models::QuoteRecord;
use crate::provider::QuoteSource;

const MAX_CACHED_SERIES: u64 = 1_000;

type HistoryKey = (String, NaiveDate, NaiveDate);

/// Wraps a [`QuoteSource`] and memoizes successful history lookups.
///
/// Failures are never cached. A zero TTL turns the wrapper into a passthrough.
pub struct CachedQuoteSource<S> {
    inner: S,
    history: Option<Cache<HistoryKey, Arc<Vec<QuoteRecord>>>>,
}

impl<S: QuoteSource> CachedQuoteSource<S> {
    pub fn new(inner: S, ttl: Duration) -> Self {
        let history = (!ttl.is_zero()).then(|| {
            Cache::builder()
                .time_to_live(ttl)
                .max_capacity(MAX_CACHED_SERIES)
                .build()
        });
        Self { inner, history }
    }
}

#[async_trait]
impl<S: QuoteSource> QuoteSource for CachedQuoteSource<S> {
    fn id(&self) -> &'static str {
        self.inner.id()
    }

    async fn get_history(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<QuoteRecord>, MarketDataError> {
        let Some(cache) = &self.history else {
            return self.inner.get_history(symbol, start, end).await;
        };

        let key = (symbol.trim().to_uppercase(), start, end);
        if let Some(hit) = cache.get(&key).await {
            debug!("Quote cache hit for {} {}..{}", key.0, start, end);
            return Ok(hit.as_ref().clone());
        }

        let quotes = self.inner.get_history(symbol, start, end).await?;
        cache.insert(key, Arc::new(quotes.clone())).await;
        Ok(quotes)
    }
}
