use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One trading day of OHLCV data for a symbol.
///
/// Sequences returned by a [`QuoteSource`](crate::QuoteSource) are ordered by
/// `date` ascending with no duplicate dates.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRecord {
    /// Trading date
    pub date: NaiveDate,
    /// Opening price
    pub open: Decimal,
    /// Session high
    pub high: Decimal,
    /// Session low
    pub low: Decimal,
    /// Closing price
    pub close: Decimal,
    /// Traded volume
    pub volume: u64,
}

impl QuoteRecord {
    /// Create a record where open, high and low all equal the close.
    pub fn flat(date: NaiveDate, close: Decimal) -> Self {
        Self {
            date,
            open: close,
            high: close,
            low: close,
            close,
            volume: 0,
        }
    }
}

/// Sort ascending by date and keep the last record seen for any repeated date.
pub(crate) fn normalize_records(mut records: Vec<QuoteRecord>) -> Vec<QuoteRecord> {
    // stable sort keeps arrival order among equal dates
    records.sort_by_key(|r| r.date);
    let mut out: Vec<QuoteRecord> = Vec::with_capacity(records.len());
    for record in records {
        match out.last_mut() {
            Some(prev) if prev.date == record.date => *prev = record,
            _ => out.push(record),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[test]
    fn test_flat_record() {
        let record = QuoteRecord::flat(day(2), dec!(65200));
        assert_eq!(record.open, dec!(65200));
        assert_eq!(record.low, record.high);
        assert_eq!(record.volume, 0);
    }

    #[test]
    fn test_normalize_sorts_and_dedupes_last_wins() {
        let records = vec![
            QuoteRecord::flat(day(4), dec!(3)),
            QuoteRecord::flat(day(2), dec!(1)),
            QuoteRecord::flat(day(4), dec!(4)),
            QuoteRecord::flat(day(3), dec!(2)),
        ];
        let normalized = normalize_records(records);
        let dates: Vec<_> = normalized.iter().map(|r| r.date).collect();
        assert_eq!(dates, vec![day(2), day(3), day(4)]);
        assert_eq!(normalized[2].close, dec!(4));
    }
}
