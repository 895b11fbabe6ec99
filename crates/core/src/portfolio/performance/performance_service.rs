use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Days, NaiveDate};
use futures::future::join_all;
use log::debug;
use vnfolio_market_data::{QuoteRecord, QuoteSource};

use super::performance_model::{PerformanceReport, SymbolHistory, SymbolSnapshot};
use super::comparison::{benchmark_not_found, has_benchmark_data};
use super::{
    align_series, build_summary, compare_with_benchmark, sample_rows, weight_fractions,
    weighted_returns,
};
use crate::errors::{Error, Result, ValidationError};
use crate::portfolio::portfolio_model::PortfolioRequest;
use crate::portfolio::validation::{validate_request, validate_window};

#[async_trait]
pub trait PerformanceServiceTrait: Send + Sync {
    /// Weighted portfolio vs. benchmark over `[as_of - window_days, as_of]`.
    async fn calculate_performance(
        &self,
        request: &PortfolioRequest,
        as_of: NaiveDate,
    ) -> Result<PerformanceReport>;

    async fn get_benchmark_history(&self, days: u32, as_of: NaiveDate) -> Result<SymbolHistory>;

    async fn get_symbol_history(
        &self,
        symbol: &str,
        days: u32,
        as_of: NaiveDate,
    ) -> Result<SymbolHistory>;

    /// Latest session at or before `as_of`.
    async fn get_symbol_snapshot(&self, symbol: &str, as_of: NaiveDate) -> Result<SymbolSnapshot>;
}

pub struct PerformanceService {
    quote_source: Arc<dyn QuoteSource>,
    benchmark_symbol: String,
}

impl PerformanceService {
    pub fn new(quote_source: Arc<dyn QuoteSource>, benchmark_symbol: impl Into<String>) -> Self {
        Self {
            quote_source,
            benchmark_symbol: benchmark_symbol.into().trim().to_uppercase(),
        }
    }

    /// Name used for the benchmark in user-facing messages.
    pub fn benchmark_label(&self) -> &str {
        match self.benchmark_symbol.as_str() {
            "VNINDEX" => "VNIndex",
            other => other,
        }
    }

    async fn fetch(&self, symbol: &str, start: NaiveDate, end: NaiveDate) -> Result<Vec<QuoteRecord>> {
        debug!("Fetching {} from {} to {}", symbol, start, end);
        self.quote_source
            .get_history(symbol, start, end)
            .await
            .map_err(|e| Error::upstream(format!("Error fetching data for {}", symbol), e))
    }

    async fn history(
        &self,
        symbol: &str,
        label: &str,
        days: u32,
        as_of: NaiveDate,
    ) -> Result<SymbolHistory> {
        let start = window_start(as_of, days)?;
        let records = self.fetch(symbol, start, as_of).await?;
        if records.is_empty() {
            return Err(Error::not_found(format!("No data found for {}", label)));
        }
        Ok(SymbolHistory {
            symbol: symbol.to_string(),
            records,
        })
    }
}

fn window_start(as_of: NaiveDate, days: u32) -> Result<NaiveDate> {
    validate_window(days)?;
    as_of.checked_sub_days(Days::new(u64::from(days))).ok_or_else(|| {
        Error::Calculation(format!("Lookback of {} days from {} is out of range", days, as_of))
    })
}

fn normalize_symbol(symbol: &str) -> Result<String> {
    let symbol = symbol.trim().to_uppercase();
    if symbol.is_empty() {
        return Err(ValidationError::EmptySymbol.into());
    }
    Ok(symbol)
}

#[async_trait]
impl PerformanceServiceTrait for PerformanceService {
    async fn calculate_performance(
        &self,
        request: &PortfolioRequest,
        as_of: NaiveDate,
    ) -> Result<PerformanceReport> {
        let request = validate_request(request)?;
        if request.holdings.is_empty() {
            return Err(Error::not_found("No portfolio data found"));
        }

        let start = window_start(as_of, request.window_days)?;
        let (benchmark, holdings) = futures::join!(
            self.fetch(&self.benchmark_symbol, start, as_of),
            join_all(
                request
                    .holdings
                    .iter()
                    .map(|h| self.fetch(&h.symbol, start, as_of)),
            ),
        );

        let benchmark = benchmark?;
        if !has_benchmark_data(&benchmark) {
            return Err(benchmark_not_found(self.benchmark_label()));
        }

        let mut series = Vec::with_capacity(holdings.len());
        for (holding, records) in request.holdings.iter().zip(holdings) {
            series.push((holding.symbol.clone(), records?));
        }

        let aligned = align_series(&series)?;
        let points = weighted_returns(&aligned, &weight_fractions(&request.holdings))?;
        let rows = compare_with_benchmark(
            &points,
            &benchmark,
            self.benchmark_label(),
            request.initial_value,
        )?;
        let summary = build_summary(&rows, request.initial_value)?;
        let data = sample_rows(&rows, request.window_days);

        debug!(
            "Computed performance over {} rows ({} sampled) for {} holdings",
            rows.len(),
            data.len(),
            request.holdings.len()
        );

        Ok(PerformanceReport { data, summary })
    }

    async fn get_benchmark_history(&self, days: u32, as_of: NaiveDate) -> Result<SymbolHistory> {
        self.history(&self.benchmark_symbol, self.benchmark_label(), days, as_of)
            .await
    }

    async fn get_symbol_history(
        &self,
        symbol: &str,
        days: u32,
        as_of: NaiveDate,
    ) -> Result<SymbolHistory> {
        let symbol = normalize_symbol(symbol)?;
        self.history(&symbol, &symbol, days, as_of).await
    }

    async fn get_symbol_snapshot(&self, symbol: &str, as_of: NaiveDate) -> Result<SymbolSnapshot> {
        let symbol = normalize_symbol(symbol)?;
        let latest = self
            .quote_source
            .get_latest(&symbol, as_of)
            .await
            .map_err(|e| Error::upstream(format!("Error fetching data for {}", symbol), e))?;

        match latest {
            Some(quote) => Ok(SymbolSnapshot { symbol, quote }),
            None => Err(Error::not_found(format!("No data found for {}", symbol))),
        }
    }
}
