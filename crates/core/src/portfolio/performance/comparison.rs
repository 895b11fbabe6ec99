use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use vnfolio_market_data::QuoteRecord;

use super::performance_model::{ComparisonRow, WeightedReturnPoint};
use crate::errors::{Error, Result};

/// Whether `benchmark` has at least one close usable as an anchor.
pub(crate) fn has_benchmark_data(benchmark: &[QuoteRecord]) -> bool {
    benchmark.iter().any(|r| r.close > Decimal::ZERO)
}

pub(crate) fn benchmark_not_found(label: &str) -> Error {
    Error::not_found(format!("No {} data found", label))
}

fn overflow(what: &str, date: NaiveDate) -> Error {
    Error::Calculation(format!("{} on {} is out of range", what, date))
}

/// Join portfolio returns with the benchmark on common dates.
///
/// The benchmark is anchored at its own first positive close in `benchmark`,
/// independent of where the portfolio series starts. Dates missing on either
/// side are dropped. `benchmark_label` names the benchmark in errors.
pub fn compare_with_benchmark(
    portfolio: &[WeightedReturnPoint],
    benchmark: &[QuoteRecord],
    benchmark_label: &str,
    initial_value: Decimal,
) -> Result<Vec<ComparisonRow>> {
    let closes: BTreeMap<NaiveDate, Decimal> = benchmark
        .iter()
        .filter(|r| r.close > Decimal::ZERO)
        .map(|r| (r.date, r.close))
        .collect();

    let Some(anchor) = closes.values().next().copied() else {
        return Err(benchmark_not_found(benchmark_label));
    };

    let mut rows = Vec::new();
    for point in portfolio {
        let Some(close) = closes.get(&point.date).copied() else {
            continue;
        };

        let portfolio_value = (Decimal::ONE + point.cumulative_return)
            .checked_mul(initial_value)
            .ok_or_else(|| overflow("Portfolio value", point.date))?;
        let portfolio_return_pct = point
            .cumulative_return
            .checked_mul(Decimal::ONE_HUNDRED)
            .ok_or_else(|| overflow("Portfolio return", point.date))?;
        let benchmark_return_pct = close
            .checked_div(anchor)
            .and_then(|ratio| (ratio - Decimal::ONE).checked_mul(Decimal::ONE_HUNDRED))
            .ok_or_else(|| overflow("Benchmark return", point.date))?;

        rows.push(ComparisonRow {
            date: point.date,
            portfolio_value,
            benchmark_value: close,
            portfolio_return_pct,
            benchmark_return_pct,
        });
    }

    if rows.is_empty() {
        return Err(Error::not_found(
            "No overlapping dates between portfolio and benchmark",
        ));
    }

    Ok(rows)
}
