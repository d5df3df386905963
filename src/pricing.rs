//! Pricing

use rust_decimal::{Decimal, prelude::ToPrimitive};
use rusty_money::{
    Money, MoneyError,
    iso::{self, Currency},
};
use thiserror::Error;

use crate::cart::CartLine;

/// Currency every price in the storefront is expressed in.
pub const CURRENCY: &Currency = iso::BRL;

/// Errors that can occur while calculating totals.
#[derive(Debug, Error, PartialEq)]
pub enum TotalPriceError {
    /// Wrapped money arithmetic or currency mismatch error.
    #[error(transparent)]
    Money(#[from] MoneyError),

    /// The total does not fit in the minor unit range.
    #[error("total overflows the representable amount")]
    Overflow,
}

/// Errors that can occur while parsing a decimal price.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PriceParseError {
    /// Not a decimal number.
    #[error("invalid price: {0}")]
    Invalid(String),

    /// Prices can't be negative.
    #[error("negative price: {0}")]
    Negative(String),

    /// More decimal places than the currency has.
    #[error("price has more than two decimal places: {0}")]
    TooPrecise(String),
}

/// Parse a decimal amount (e.g. `"44.99"`) into BRL minor units.
///
/// # Errors
///
/// Returns a [`PriceParseError`] if the amount isn't a non-negative decimal that fits in minor units.
pub fn parse_minor_units(s: &str) -> Result<i64, PriceParseError> {
    let amount = s
        .trim()
        .parse::<Decimal>()
        .map_err(|_err| PriceParseError::Invalid(s.to_string()))?;

    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(PriceParseError::Negative(s.to_string()));
    }

    if amount.normalize().scale() > 2 {
        return Err(PriceParseError::TooPrecise(s.to_string()));
    }

    amount
        .checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|value| value.to_i64())
        .ok_or_else(|| PriceParseError::Invalid(s.to_string()))
}

/// Parse a decimal amount into BRL money.
///
/// # Errors
///
/// Returns a [`PriceParseError`] if the amount can't be parsed.
pub fn parse_price(s: &str) -> Result<Money<'static, Currency>, PriceParseError> {
    Ok(Money::from_minor(parse_minor_units(s)?, CURRENCY))
}

/// Price of a single line: unit price multiplied by quantity.
///
/// # Errors
///
/// Returns [`TotalPriceError::Overflow`] if the product doesn't fit in minor units.
pub fn line_total(line: &CartLine) -> Result<Money<'static, Currency>, TotalPriceError> {
    let quantity = i64::try_from(line.quantity()).map_err(|_err| TotalPriceError::Overflow)?;

    let minor = line
        .unit_price()
        .to_minor_units()
        .checked_mul(quantity)
        .ok_or(TotalPriceError::Overflow)?;

    Ok(Money::from_minor(minor, line.unit_price().currency()))
}

/// Calculates the total price of a list of cart lines.
///
/// Accumulates in minor units, so no rounding happens until presentation.
///
/// # Errors
///
/// - [`TotalPriceError::Money`]: Wrapped money arithmetic or currency mismatch error.
/// - [`TotalPriceError::Overflow`]: A line total or the sum doesn't fit in minor units.
pub fn total_price(lines: &[CartLine]) -> Result<Money<'static, Currency>, TotalPriceError> {
    lines
        .iter()
        .try_fold(Money::from_minor(0, CURRENCY), |acc, line| {
            let subtotal = line_total(line)?;

            acc.to_minor_units()
                .checked_add(subtotal.to_minor_units())
                .ok_or(TotalPriceError::Overflow)?;

            Ok(acc.add(subtotal)?)
        })
}

/// Two-decimal presentation of an amount, e.g. `97.98`.
pub fn format_amount(money: &Money<'_, Currency>) -> String {
    Decimal::new(money.to_minor_units(), 2).to_string()
}
