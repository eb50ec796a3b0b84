//! Display formatting for minor-unit amounts.

use rusty_money::{Money, iso};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum MoneyFormatError {
    #[error("unknown currency code {0}")]
    UnknownCurrency(String),

    #[error("amount {0} does not fit a signed minor-unit value")]
    OutOfRange(u64),
}

/// Format an amount held in minor units of the given ISO 4217 currency.
pub(crate) fn format_minor(amount: u64, currency: &str) -> Result<String, MoneyFormatError> {
    let currency =
        iso::find(currency).ok_or_else(|| MoneyFormatError::UnknownCurrency(currency.to_string()))?;

    let minor = i64::try_from(amount).map_err(|_error| MoneyFormatError::OutOfRange(amount))?;

    Ok(Money::from_minor(minor, currency).to_string())
}
