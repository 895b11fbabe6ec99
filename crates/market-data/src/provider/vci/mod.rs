//! VCI (Vietcap) quote source for HOSE, HNX and UPCoM stocks and indices.

mod headers;
mod models;

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate};
use log::{debug, warn};
use reqwest::{Client, StatusCode};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

use crate::errors::MarketDataError;
use crate::models::{normalize_records, QuoteRecord};
use crate::provider::QuoteSource;

pub use headers::vci_headers;
pub use models::{map_index_symbol, VciOhlcResponse, DAILY_TIME_FRAME};
use models::OhlcRequest;

const VCI_BASE_URL: &str = "https://trading.vietcap.com.vn/api";
const PROVIDER_ID: &str = "VCI";
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// VCI quotes stock prices in thousands of VND; index levels are sent as points.
const STOCK_PRICE_MULTIPLIER: Decimal = Decimal::ONE_THOUSAND;

/// Quote source backed by the VCI chart API.
#[derive(Clone)]
pub struct VciProvider {
    client: Client,
    base_url: String,
}

impl VciProvider {
    /// Create a provider pointed at the public VCI endpoint.
    pub fn new() -> Result<Self, MarketDataError> {
        Self::with_base_url(VCI_BASE_URL)
    }

    /// Create a provider against another base URL (mirrors, test servers).
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, MarketDataError> {
        let client = Client::builder()
            .default_headers(vci_headers())
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl QuoteSource for VciProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn get_history(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<QuoteRecord>, MarketDataError> {
        let symbol = symbol.trim().to_uppercase();
        if symbol.is_empty() {
            return Err(MarketDataError::InvalidSymbol(symbol));
        }
        if end < start {
            return Ok(Vec::new());
        }

        let (api_symbol, multiplier) = match map_index_symbol(&symbol) {
            Some(code) => (code.to_string(), Decimal::ONE),
            None => (symbol.clone(), STOCK_PRICE_MULTIPLIER),
        };

        // Calendar days over-count trading sessions; out-of-range rows are filtered below.
        let count_back = (end - start).num_days() + 1;
        let to = end
            .and_hms_opt(23, 59, 59)
            .map(|dt| dt.and_utc().timestamp())
            .ok_or_else(|| MarketDataError::Parse(format!("invalid end date {}", end)))?;

        let payload = OhlcRequest {
            time_frame: DAILY_TIME_FRAME,
            symbols: vec![api_symbol],
            to,
            count_back,
        };

        let url = format!("{}/chart/OHLCChart/gap-chart", self.base_url);
        debug!(
            "VCI history request for {} from {} to {} (countBack={})",
            symbol, start, end, count_back
        );

        let response = self.client.post(&url).json(&payload).send().await?;
        let status = response.status();

        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(MarketDataError::RateLimited {
                provider: PROVIDER_ID.to_string(),
            });
        }
        if !status.is_success() {
            return Err(MarketDataError::Api(format!(
                "VCI history request failed for {}: {}",
                symbol, status
            )));
        }

        let body = response.text().await?;
        let data: Vec<VciOhlcResponse> = serde_json::from_str(&body)
            .map_err(|e| MarketDataError::Parse(format!("VCI response for {}: {}", symbol, e)))?;

        let Some(series) = data.first() else {
            return Ok(Vec::new());
        };

        Ok(transform_ohlc_response(
            &symbol, series, start, end, multiplier,
        ))
    }
}

/// Convert the parallel-array VCI payload into ordered records within `[start, end]`.
///
/// Rows with missing array entries or unrepresentable floats are dropped.
pub(crate) fn transform_ohlc_response(
    symbol: &str,
    data: &VciOhlcResponse,
    start: NaiveDate,
    end: NaiveDate,
    multiplier: Decimal,
) -> Vec<QuoteRecord> {
    let mut dropped = 0usize;

    let records: Vec<QuoteRecord> = data
        .t
        .iter()
        .enumerate()
        .filter_map(|(i, &ts)| {
            let date = DateTime::from_timestamp(ts, 0)?.date_naive();
            if date < start || date > end {
                return None;
            }

            let scale = |values: &[f64]| -> Option<Decimal> {
                let raw = Decimal::from_f64(*values.get(i)?)?;
                Some((raw * multiplier).normalize())
            };

            let record = (|| {
                Some(QuoteRecord {
                    date,
                    open: scale(&data.o)?,
                    high: scale(&data.h)?,
                    low: scale(&data.l)?,
                    close: scale(&data.c)?,
                    volume: u64::try_from(*data.v.get(i)?).unwrap_or(0),
                })
            })();

            if record.is_none() {
                dropped += 1;
            }
            record
        })
        .collect();

    if dropped > 0 {
        warn!("Dropped {} malformed VCI rows for {}", dropped, symbol);
    }

    normalize_records(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn ts(d: u32) -> i64 {
        day(d).and_hms_opt(0, 0, 0).unwrap().and_utc().timestamp()
    }

    fn response(days: &[u32], closes: &[f64]) -> VciOhlcResponse {
        VciOhlcResponse {
            symbol: Some("VNM".to_string()),
            t: days.iter().map(|d| ts(*d)).collect(),
            o: closes.to_vec(),
            h: closes.to_vec(),
            l: closes.to_vec(),
            c: closes.to_vec(),
            v: vec![1000; closes.len()],
        }
    }

    #[test]
    fn test_transform_scales_stock_prices() {
        let data = response(&[2, 3], &[65.25, 65.75]);
        let quotes = transform_ohlc_response("VNM", &data, day(1), day(31), STOCK_PRICE_MULTIPLIER);

        assert_eq!(quotes.len(), 2);
        assert_eq!(quotes[0].date, day(2));
        assert_eq!(quotes[0].close, dec!(65250));
        assert_eq!(quotes[1].close, dec!(65750));
        assert_eq!(quotes[1].volume, 1000);
    }

    #[test]
    fn test_transform_keeps_index_points() {
        let data = response(&[2], &[1129.5]);
        let quotes = transform_ohlc_response("VNINDEX", &data, day(1), day(31), Decimal::ONE);
        assert_eq!(quotes[0].close, dec!(1129.5));
    }

    #[test]
    fn test_transform_filters_to_range() {
        let data = response(&[1, 2, 3, 4], &[1.0, 2.0, 3.0, 4.0]);
        let quotes = transform_ohlc_response("VNM", &data, day(2), day(3), Decimal::ONE);
        let dates: Vec<_> = quotes.iter().map(|q| q.date).collect();
        assert_eq!(dates, vec![day(2), day(3)]);
    }

    #[test]
    fn test_transform_drops_ragged_rows() {
        let mut data = response(&[2, 3, 4], &[1.0, 2.0, 3.0]);
        data.c.pop();
        let quotes = transform_ohlc_response("VNM", &data, day(1), day(31), Decimal::ONE);
        assert_eq!(quotes.len(), 2);
        assert_eq!(quotes.last().unwrap().date, day(3));
    }

    #[test]
    fn test_transform_clamps_negative_volume() {
        let mut data = response(&[2], &[10.0]);
        data.v = vec![-5];
        let quotes = transform_ohlc_response("VNM", &data, day(1), day(31), Decimal::ONE);
        assert_eq!(quotes[0].volume, 0);
    }

    #[tokio::test]
    async fn test_empty_symbol_is_rejected() {
        let provider = VciProvider::new().unwrap();
        let err = provider.get_history("  ", day(1), day(2)).await.unwrap_err();
        assert!(matches!(err, MarketDataError::InvalidSymbol(_)));
    }

    #[tokio::test]
    #[ignore] // Requires network access
    async fn test_get_stock_history() {
        let provider = VciProvider::new().unwrap();
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();

        let quotes = provider.get_history("VNM", start, end).await.unwrap();

        assert!(!quotes.is_empty());
        // Prices should be in VND (thousands range for VNM)
        assert!(quotes[0].close > dec!(10000));
    }

    #[tokio::test]
    #[ignore] // Requires network access
    async fn test_get_index_history() {
        let provider = VciProvider::new().unwrap();
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();

        let quotes = provider.get_history("VNINDEX", start, end).await.unwrap();

        assert!(!quotes.is_empty());
        assert!(quotes[0].close < dec!(10000));
    }
}
