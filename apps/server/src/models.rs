//! Wire types for the HTTP API.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use vnfolio_core::{
    constants::DEFAULT_WINDOW_DAYS,
    performance::{ComparisonRow, PerformanceReport, PerformanceSummary, SymbolHistory, SymbolSnapshot},
    DefaultPortfolioConfig, HoldingSpec, PortfolioRequest,
};
use vnfolio_market_data::QuoteRecord;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StockAllocation {
    pub symbol: String,
    /// Share of NAV in percent
    pub percentage: Decimal,
}

impl From<StockAllocation> for HoldingSpec {
    fn from(s: StockAllocation) -> Self {
        HoldingSpec::new(s.symbol, s.percentage)
    }
}

impl From<HoldingSpec> for StockAllocation {
    fn from(h: HoldingSpec) -> Self {
        Self {
            symbol: h.symbol,
            percentage: h.weight_percent,
        }
    }
}

/// Portfolio definition sent by clients.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct PortfolioBody {
    #[serde(alias = "holdings")]
    pub stocks: Vec<StockAllocation>,
    /// NAV base; defaults to 100,000,000
    #[serde(default, alias = "initial_value")]
    pub total_nav: Option<Decimal>,
}

impl PortfolioBody {
    pub fn holdings(&self) -> Vec<HoldingSpec> {
        self.stocks.iter().cloned().map(HoldingSpec::from).collect()
    }

    pub fn into_request(self, window_days: u32) -> PortfolioRequest {
        let mut request = PortfolioRequest::new(self.holdings()).with_window_days(window_days);
        if let Some(nav) = self.total_nav {
            request = request.with_initial_value(nav);
        }
        request
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DaysQuery {
    /// Lookback window in calendar days (default 30)
    pub days: Option<u32>,
}

impl DaysQuery {
    pub fn days(&self) -> u32 {
        self.days.unwrap_or(DEFAULT_WINDOW_DAYS)
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct QuoteBar {
    pub time: NaiveDate,
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub close: Decimal,
    pub volume: u64,
}

impl From<QuoteRecord> for QuoteBar {
    fn from(q: QuoteRecord) -> Self {
        Self {
            time: q.date,
            open: q.open,
            high: q.high,
            low: q.low,
            close: q.close,
            volume: q.volume,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HistoryResponse {
    pub symbol: String,
    pub data: Vec<QuoteBar>,
    pub count: usize,
}

impl From<SymbolHistory> for HistoryResponse {
    fn from(h: SymbolHistory) -> Self {
        let data: Vec<QuoteBar> = h.records.into_iter().map(QuoteBar::from).collect();
        Self {
            symbol: h.symbol,
            count: data.len(),
            data,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StockInfoResponse {
    pub symbol: String,
    pub current_price: Decimal,
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub volume: u64,
    pub date: NaiveDate,
}

impl From<SymbolSnapshot> for StockInfoResponse {
    fn from(s: SymbolSnapshot) -> Self {
        Self {
            symbol: s.symbol,
            current_price: s.quote.close,
            open: s.quote.open,
            high: s.quote.high,
            low: s.quote.low,
            volume: s.quote.volume,
            date: s.quote.date,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PerformancePoint {
    pub time: NaiveDate,
    pub portfolio_value: Decimal,
    pub vnindex_value: Decimal,
    pub portfolio_return: Decimal,
    pub vnindex_return: Decimal,
}

impl From<ComparisonRow> for PerformancePoint {
    fn from(r: ComparisonRow) -> Self {
        Self {
            time: r.date,
            portfolio_value: r.portfolio_value,
            vnindex_value: r.benchmark_value,
            portfolio_return: r.portfolio_return_pct,
            vnindex_return: r.benchmark_return_pct,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PerformanceSummaryResponse {
    pub portfolio_return: Decimal,
    pub vnindex_return: Decimal,
    pub outperformance: Decimal,
    pub initial_value: Decimal,
    pub final_value: Decimal,
}

impl From<PerformanceSummary> for PerformanceSummaryResponse {
    fn from(s: PerformanceSummary) -> Self {
        Self {
            portfolio_return: s.portfolio_return,
            vnindex_return: s.benchmark_return,
            outperformance: s.outperformance,
            initial_value: s.initial_value,
            final_value: s.final_value,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PerformanceResponse {
    pub data: Vec<PerformancePoint>,
    pub summary: PerformanceSummaryResponse,
}

impl From<PerformanceReport> for PerformanceResponse {
    fn from(r: PerformanceReport) -> Self {
        Self {
            data: r.data.into_iter().map(PerformancePoint::from).collect(),
            summary: r.summary.into(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PortfolioConfigResponse {
    pub stocks: Vec<StockAllocation>,
}

impl From<DefaultPortfolioConfig> for PortfolioConfigResponse {
    fn from(c: DefaultPortfolioConfig) -> Self {
        Self {
            stocks: c.holdings.into_iter().map(StockAllocation::from).collect(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SavedPortfolioResponse {
    pub message: String,
    pub portfolio: PortfolioConfigResponse,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StatusResponse {
    pub message: String,
    pub status: String,
}
