use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{BUILTIN_DEFAULT_HOLDINGS, DEFAULT_INITIAL_VALUE, DEFAULT_WINDOW_DAYS};

/// One position of a portfolio, as a share of NAV.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoldingSpec {
    pub symbol: String,
    /// Target weight in percent, 0..=100
    #[serde(rename = "percentage")]
    pub weight_percent: Decimal,
}

impl HoldingSpec {
    pub fn new(symbol: impl Into<String>, weight_percent: Decimal) -> Self {
        Self {
            symbol: symbol.into(),
            weight_percent,
        }
    }

    /// Weight as a fraction of NAV.
    pub fn weight_fraction(&self) -> Decimal {
        self.weight_percent / Decimal::ONE_HUNDRED
    }
}

/// Input to a single performance computation.
#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioRequest {
    pub holdings: Vec<HoldingSpec>,
    /// NAV base used to express returns as currency figures
    pub initial_value: Decimal,
    /// Calendar days to look back from the as-of date
    pub window_days: u32,
}

impl PortfolioRequest {
    pub fn new(holdings: Vec<HoldingSpec>) -> Self {
        Self {
            holdings,
            initial_value: DEFAULT_INITIAL_VALUE,
            window_days: DEFAULT_WINDOW_DAYS,
        }
    }

    pub fn with_initial_value(mut self, initial_value: Decimal) -> Self {
        self.initial_value = initial_value;
        self
    }

    pub fn with_window_days(mut self, window_days: u32) -> Self {
        self.window_days = window_days;
        self
    }
}

/// The persisted default portfolio.
///
/// Serialized as `{ "stocks": [ { "symbol": "VNM", "percentage": 30 }, ... ] }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefaultPortfolioConfig {
    #[serde(rename = "stocks")]
    pub holdings: Vec<HoldingSpec>,
}

impl DefaultPortfolioConfig {
    pub fn new(holdings: Vec<HoldingSpec>) -> Self {
        Self { holdings }
    }

    /// VNM 30%, VIC 30%, HPG 40%.
    pub fn builtin() -> Self {
        Self {
            holdings: BUILTIN_DEFAULT_HOLDINGS
                .iter()
                .map(|(symbol, pct)| HoldingSpec::new(*symbol, Decimal::from(*pct)))
                .collect(),
        }
    }
}

impl Default for DefaultPortfolioConfig {
    fn default() -> Self {
        Self::builtin()
    }
}

pub fn total_percentage(holdings: &[HoldingSpec]) -> Decimal {
    holdings.iter().map(|h| h.weight_percent).sum()
}
