use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use vnfolio_market_data::QuoteRecord;

use super::performance_model::{AlignedSeries, SymbolPrices};
use crate::errors::{Error, Result};

/// Put every symbol's closes on the union of all reported trading dates.
///
/// Gaps after a symbol's first observation carry the last known close forward;
/// dates before it stay `None`. Non-positive closes count as missing. A symbol
/// with no usable observation at all is a not-found error.
pub fn align_series(inputs: &[(String, Vec<QuoteRecord>)]) -> Result<AlignedSeries> {
    let mut observed: Vec<(&str, BTreeMap<NaiveDate, Decimal>)> = Vec::with_capacity(inputs.len());

    for (symbol, records) in inputs {
        let closes: BTreeMap<NaiveDate, Decimal> = records
            .iter()
            .filter(|r| r.close > Decimal::ZERO)
            .map(|r| (r.date, r.close))
            .collect();

        if closes.is_empty() {
            return Err(Error::not_found(format!("No data found for {}", symbol)));
        }
        observed.push((symbol.as_str(), closes));
    }

    let dates: Vec<NaiveDate> = observed
        .iter()
        .flat_map(|(_, closes)| closes.keys().copied())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let series = observed
        .into_iter()
        .map(|(symbol, closes)| {
            let mut last: Option<Decimal> = None;
            let prices = dates
                .iter()
                .map(|date| {
                    if let Some(close) = closes.get(date) {
                        last = Some(*close);
                    }
                    last
                })
                .collect();
            SymbolPrices {
                symbol: symbol.to_string(),
                prices,
            }
        })
        .collect();

    Ok(AlignedSeries { dates, series })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    fn quotes(points: &[(u32, Decimal)]) -> Vec<QuoteRecord> {
        points
            .iter()
            .map(|(d, close)| QuoteRecord::flat(day(*d), *close))
            .collect()
    }

    #[test]
    fn test_union_axis_with_forward_fill() {
        let inputs = vec![
            ("AAA".to_string(), quotes(&[(1, dec!(10)), (3, dec!(12))])),
            ("BBB".to_string(), quotes(&[(2, dec!(20)), (4, dec!(22))])),
        ];

        let aligned = align_series(&inputs).unwrap();

        assert_eq!(aligned.dates, vec![day(1), day(2), day(3), day(4)]);
        assert_eq!(
            aligned.symbol("AAA").unwrap().prices,
            vec![Some(dec!(10)), Some(dec!(10)), Some(dec!(12)), Some(dec!(12))]
        );
        assert_eq!(
            aligned.symbol("BBB").unwrap().prices,
            vec![None, Some(dec!(20)), Some(dec!(20)), Some(dec!(22))]
        );
        assert_eq!(aligned.price("BBB", day(3)), Some(dec!(20)));
        assert_eq!(aligned.symbol("BBB").unwrap().anchor(), Some(dec!(20)));
    }

    #[test]
    fn test_single_day() {
        let inputs = vec![("AAA".to_string(), quotes(&[(5, dec!(10))]))];
        let aligned = align_series(&inputs).unwrap();
        assert_eq!(aligned.dates, vec![day(5)]);
        assert_eq!(aligned.series[0].prices, vec![Some(dec!(10))]);
    }

    #[test]
    fn test_symbol_without_data_is_not_found() {
        let inputs = vec![
            ("AAA".to_string(), quotes(&[(1, dec!(10))])),
            ("ZZZ".to_string(), Vec::new()),
        ];

        let err = align_series(&inputs).unwrap_err();
        assert!(matches!(&err, Error::NotFound(msg) if msg == "No data found for ZZZ"));
    }

    #[test]
    fn test_non_positive_closes_are_missing() {
        let inputs = vec![(
            "AAA".to_string(),
            quotes(&[(1, dec!(0)), (2, dec!(10)), (3, dec!(-1))]),
        )];

        let aligned = align_series(&inputs).unwrap();
        assert_eq!(aligned.dates, vec![day(2)]);

        let only_zero = vec![("AAA".to_string(), quotes(&[(1, dec!(0))]))];
        assert!(matches!(align_series(&only_zero), Err(Error::NotFound(_))));
    }

    #[test]
    fn test_preserves_input_order() {
        let inputs = vec![
            ("HPG".to_string(), quotes(&[(1, dec!(1))])),
            ("AAA".to_string(), quotes(&[(1, dec!(2))])),
        ];
        let aligned = align_series(&inputs).unwrap();
        let symbols: Vec<_> = aligned.series.iter().map(|s| s.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["HPG", "AAA"]);
    }
}
