//! Input checks applied before any quote is fetched.

use rust_decimal::Decimal;

use super::portfolio_model::{total_percentage, HoldingSpec, PortfolioRequest};
use crate::constants::{MAX_INITIAL_VALUE, MAX_WINDOW_DAYS};
use crate::errors::{Result, ValidationError};

/// Trim and upper-case symbols, merge repeated symbols (summing their weights),
/// and enforce the per-holding and total percentage bounds.
///
/// Order of first appearance is kept.
pub fn normalize_holdings(holdings: &[HoldingSpec]) -> Result<Vec<HoldingSpec>> {
    let mut merged: Vec<HoldingSpec> = Vec::with_capacity(holdings.len());

    for holding in holdings {
        let symbol = holding.symbol.trim().to_uppercase();
        if symbol.is_empty() {
            return Err(ValidationError::EmptySymbol.into());
        }
        if holding.weight_percent < Decimal::ZERO
            || holding.weight_percent > Decimal::ONE_HUNDRED
        {
            return Err(ValidationError::PercentageOutOfRange {
                symbol,
                percentage: holding.weight_percent,
            }
            .into());
        }

        match merged.iter_mut().find(|h| h.symbol == symbol) {
            Some(existing) => existing.weight_percent += holding.weight_percent,
            None => merged.push(HoldingSpec::new(symbol, holding.weight_percent)),
        }
    }

    let total = total_percentage(&merged);
    if total > Decimal::ONE_HUNDRED {
        return Err(ValidationError::TotalPercentageExceeded(total.normalize()).into());
    }

    Ok(merged)
}

/// Validate a whole request, returning it with normalized holdings.
pub fn validate_request(request: &PortfolioRequest) -> Result<PortfolioRequest> {
    validate_window(request.window_days)?;
    if request.initial_value <= Decimal::ZERO {
        return Err(ValidationError::NonPositiveInitialValue(request.initial_value).into());
    }
    if request.initial_value > MAX_INITIAL_VALUE {
        return Err(ValidationError::InitialValueTooLarge {
            value: request.initial_value,
            max: MAX_INITIAL_VALUE,
        }
        .into());
    }

    Ok(PortfolioRequest {
        holdings: normalize_holdings(&request.holdings)?,
        initial_value: request.initial_value,
        window_days: request.window_days,
    })
}

/// Lookback windows must cover 1..=MAX_WINDOW_DAYS days.
pub fn validate_window(days: u32) -> Result<()> {
    if days == 0 {
        return Err(ValidationError::EmptyWindow.into());
    }
    if days > MAX_WINDOW_DAYS {
        return Err(ValidationError::WindowTooLong {
            days,
            max: MAX_WINDOW_DAYS,
        }
        .into());
    }
    Ok(())
}
