use rust_decimal::Decimal;

use super::performance_model::{ComparisonRow, PerformanceSummary};
use crate::errors::{Error, Result};

const SUMMARY_DECIMALS: u32 = 2;

/// Headline figures from the full, unsampled comparison.
pub fn build_summary(rows: &[ComparisonRow], initial_value: Decimal) -> Result<PerformanceSummary> {
    let last = rows
        .last()
        .ok_or_else(|| Error::not_found("No overlapping dates between portfolio and benchmark"))?;

    let portfolio_return = last.portfolio_return_pct;
    let benchmark_return = last.benchmark_return_pct;
    let final_value = (portfolio_return / Decimal::ONE_HUNDRED + Decimal::ONE)
        .checked_mul(initial_value)
        .ok_or_else(|| Error::Calculation("Final portfolio value is out of range".to_string()))?;
    let outperformance = portfolio_return
        .checked_sub(benchmark_return)
        .ok_or_else(|| Error::Calculation("Outperformance is out of range".to_string()))?;

    Ok(PerformanceSummary {
        portfolio_return: portfolio_return.round_dp(SUMMARY_DECIMALS),
        benchmark_return: benchmark_return.round_dp(SUMMARY_DECIMALS),
        outperformance: outperformance.round_dp(SUMMARY_DECIMALS),
        initial_value: initial_value.round_dp(SUMMARY_DECIMALS),
        final_value: final_value.round_dp(SUMMARY_DECIMALS),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn row(d: u32, p: Decimal, b: Decimal) -> ComparisonRow {
        ComparisonRow {
            date: NaiveDate::from_ymd_opt(2024, 7, d).unwrap(),
            portfolio_value: Decimal::ZERO,
            benchmark_value: Decimal::ZERO,
            portfolio_return_pct: p,
            benchmark_return_pct: b,
        }
    }

    #[test]
    fn test_uses_last_row() {
        let rows = vec![row(1, dec!(0), dec!(0)), row(2, dec!(12.5), dec!(4))];
        let summary = build_summary(&rows, dec!(100000000)).unwrap();

        assert_eq!(summary.portfolio_return, dec!(12.5));
        assert_eq!(summary.benchmark_return, dec!(4));
        assert_eq!(summary.outperformance, dec!(8.5));
        assert_eq!(summary.initial_value, dec!(100000000));
        assert_eq!(summary.final_value, dec!(112500000));
    }

    #[test]
    fn test_rounds_only_at_the_end() {
        // 1.006 - 0.004 = 1.002, while round(1.006) - round(0.004) would be 1.01
        let rows = vec![row(1, dec!(1.006), dec!(0.004))];
        let summary = build_summary(&rows, dec!(1000)).unwrap();

        assert_eq!(summary.portfolio_return, dec!(1.01));
        assert_eq!(summary.benchmark_return, dec!(0.00));
        assert_eq!(summary.outperformance, dec!(1.00));
        assert_eq!(summary.final_value, dec!(1010.06));
    }

    #[test]
    fn test_final_value_overflow_is_calculation_error() {
        let rows = vec![row(1, dec!(50), dec!(0))];
        let err = build_summary(&rows, Decimal::MAX).unwrap_err();
        assert!(matches!(err, Error::Calculation(_)));
    }

    #[test]
    fn test_empty_rows_are_not_found() {
        assert!(matches!(build_summary(&[], dec!(1)), Err(Error::NotFound(_))));
    }
}
