//! Locale-tolerant decimal parsing for prices scraped from page text.
//!
//! Page text is noisy: prices arrive wrapped in whitespace and, in many
//! locales, with a comma as the decimal separator. Everything here works on
//! [`Decimal`] so threshold comparisons are exact.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PriceError {
    #[error("price text is empty")]
    Empty,

    #[error("\"{0}\" is not a decimal amount")]
    NotANumber(String),

    #[error("\"{0}\" is a negative amount")]
    Negative(String),

    #[error("\"{0}\" has more than {MAX_FRACTION_DIGITS} decimal places")]
    TooPrecise(String),
}

/// Largest scale a [`Decimal`] can hold. Longer fractions would be rounded
/// silently, so they are rejected instead.
pub const MAX_FRACTION_DIGITS: usize = 28;

/// Trims surrounding whitespace and turns every `,` into `.`.
///
/// Text that already uses `.` passes through unchanged.
#[must_use]
pub fn normalize_price_text(text: &str) -> String {
    text.trim().replace(',', ".")
}

/// Parses page or config text as an exact decimal amount.
///
/// `"19,99"` and `"19.99"` yield the same value. Scientific notation is
/// accepted as a fallback (`"1e3"`). A price is never below zero, so a
/// leading `-` is an error; `"-0"` is zero and passes.
///
/// # Errors
///
/// - [`PriceError::Empty`] for blank text.
/// - [`PriceError::TooPrecise`] for more than [`MAX_FRACTION_DIGITS`]
///   decimal places.
/// - [`PriceError::NotANumber`] when the normalized text is not a decimal.
/// - [`PriceError::Negative`] for an amount below zero.
pub fn parse_price(text: &str) -> Result<Decimal, PriceError> {
    let normalized = normalize_price_text(text);
    if normalized.is_empty() {
        return Err(PriceError::Empty);
    }
    if fraction_digits(&normalized) > MAX_FRACTION_DIGITS {
        return Err(PriceError::TooPrecise(text.trim().to_owned()));
    }

    let amount = Decimal::from_str(&normalized)
        .or_else(|_| Decimal::from_scientific(&normalized))
        .map_err(|_| PriceError::NotANumber(text.trim().to_owned()))?;

    if amount < Decimal::ZERO {
        return Err(PriceError::Negative(text.trim().to_owned()));
    }
    Ok(amount)
}

/// Digits after the first `.`, up to an exponent or any other non-digit.
fn fraction_digits(normalized: &str) -> usize {
    normalized.split_once('.').map_or(0, |(_, fraction)| {
        fraction.chars().take_while(char::is_ascii_digit).count()
    })
}

/// Renders an amount with exactly two decimal places, rounding half to even.
#[must_use]
pub fn format_price(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven);
    format!("{rounded:.2}")
}
