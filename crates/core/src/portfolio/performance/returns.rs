use rust_decimal::Decimal;

use super::performance_model::{AlignedSeries, SymbolWeight, WeightedReturnPoint};
use crate::errors::{Error, Result, ValidationError};
use crate::portfolio::portfolio_model::HoldingSpec;

/// Convert percentage holdings into NAV fractions.
pub fn weight_fractions(holdings: &[HoldingSpec]) -> Vec<SymbolWeight> {
    holdings
        .iter()
        .map(|h| SymbolWeight {
            symbol: h.symbol.clone(),
            weight: h.weight_fraction(),
        })
        .collect()
}

/// Weighted cumulative return on every date of the aligned axis.
///
/// Each symbol is anchored at its first observed close. A symbol not yet
/// observed on a date contributes 0; weights are not renormalized over the
/// symbols that are present.
pub fn weighted_returns(
    aligned: &AlignedSeries,
    weights: &[SymbolWeight],
) -> Result<Vec<WeightedReturnPoint>> {
    let total: Decimal = weights.iter().map(|w| w.weight).sum();
    if total > Decimal::ONE {
        return Err(ValidationError::TotalPercentageExceeded(
            (total * Decimal::ONE_HUNDRED).normalize(),
        )
        .into());
    }

    let weighted: Vec<_> = weights
        .iter()
        .filter_map(|w| {
            let prices = aligned.symbol(&w.symbol)?;
            let anchor = prices.anchor()?;
            Some((w.weight, anchor, &prices.prices))
        })
        .collect();

    let mut points = Vec::with_capacity(aligned.dates.len());
    for (i, date) in aligned.dates.iter().enumerate() {
        let mut cumulative_return = Decimal::ZERO;
        for (weight, anchor, prices) in &weighted {
            let Some(price) = prices.get(i).copied().flatten() else {
                continue;
            };
            cumulative_return = price
                .checked_div(*anchor)
                .and_then(|ratio| weight.checked_mul(ratio - Decimal::ONE))
                .and_then(|contribution| cumulative_return.checked_add(contribution))
                .ok_or_else(|| {
                    Error::Calculation(format!("Weighted return on {} is out of range", date))
                })?;
        }
        points.push(WeightedReturnPoint {
            date: *date,
            cumulative_return,
        });
    }

    Ok(points)
}
