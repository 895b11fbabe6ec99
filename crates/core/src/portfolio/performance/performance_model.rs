use chrono::NaiveDate;
use rust_decimal::Decimal;
use vnfolio_market_data::QuoteRecord;

/// Closing prices for several symbols on one shared date axis.
///
/// `prices[i]` of every [`SymbolPrices`] belongs to `dates[i]`. A `None`
/// means the symbol had not been observed yet on that date; after the first
/// observation gaps are forward-filled, so no `None` follows a `Some`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AlignedSeries {
    pub dates: Vec<NaiveDate>,
    pub series: Vec<SymbolPrices>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SymbolPrices {
    pub symbol: String,
    pub prices: Vec<Option<Decimal>>,
}

impl SymbolPrices {
    /// First observed price; the anchor for this symbol's relative return.
    pub fn anchor(&self) -> Option<Decimal> {
        self.prices.iter().flatten().next().copied()
    }
}

impl AlignedSeries {
    pub fn symbol(&self, symbol: &str) -> Option<&SymbolPrices> {
        self.series.iter().find(|s| s.symbol == symbol)
    }

    pub fn price(&self, symbol: &str, date: NaiveDate) -> Option<Decimal> {
        let idx = self.dates.binary_search(&date).ok()?;
        self.symbol(symbol)?.prices.get(idx).copied().flatten()
    }
}

/// Weight of one symbol as a fraction of NAV (0..=1).
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolWeight {
    pub symbol: String,
    pub weight: Decimal,
}

/// Portfolio cumulative return on one date, as a fraction (0.05 = +5%).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightedReturnPoint {
    pub date: NaiveDate,
    pub cumulative_return: Decimal,
}

/// Joined portfolio/benchmark figures for one date.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonRow {
    pub date: NaiveDate,
    /// NAV base scaled by the portfolio's cumulative return
    pub portfolio_value: Decimal,
    /// Benchmark close on this date
    pub benchmark_value: Decimal,
    pub portfolio_return_pct: Decimal,
    pub benchmark_return_pct: Decimal,
}

/// Headline figures over the full comparison, rounded to 2 dp.
#[derive(Debug, Clone, PartialEq)]
pub struct PerformanceSummary {
    pub portfolio_return: Decimal,
    pub benchmark_return: Decimal,
    pub outperformance: Decimal,
    pub initial_value: Decimal,
    pub final_value: Decimal,
}

/// Result of one performance request: chart rows plus summary.
#[derive(Debug, Clone, PartialEq)]
pub struct PerformanceReport {
    /// Sampled rows for charting
    pub data: Vec<ComparisonRow>,
    /// Computed from the unsampled rows
    pub summary: PerformanceSummary,
}

/// Raw quote history for one symbol over a lookback window.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolHistory {
    pub symbol: String,
    pub records: Vec<QuoteRecord>,
}

/// Most recent session for a symbol.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolSnapshot {
    pub symbol: String,
    pub quote: QuoteRecord,
}
