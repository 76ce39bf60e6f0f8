//! Bounds on the numbers the engine accepts.
//!
//! Every boundary that builds or edits an [`Item`](super::Item) or a
//! [`TaxConfig`](super::TaxConfig) checks against these. Within them the
//! engine's intermediates stay inside `Decimal` range for any realistic
//! project; beyond them the engine saturates instead of panicking.

use rust_decimal::Decimal;
use thiserror::Error;

/// Largest accepted quantity (one billion units).
pub const MAX_QUANTITY: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

/// Largest accepted cost price per unit (one quadrillion).
pub const MAX_UNIT_PRICE: Decimal =
    Decimal::from_parts(2_764_472_320, 232_830, 0, false, 0);

/// Largest accepted margin or tax rate, in percent. Margins may also go down to its negative.
pub const MAX_PERCENT: Decimal = Decimal::from_parts(1_000, 0, 0, false, 0);

/// Most decimal places accepted on any input number.
pub const MAX_SCALE: u32 = 4;

/// A number outside the accepted bounds.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LimitError {
    /// Value below `min` or above `max`.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        /// Offending field.
        field: &'static str,
        /// Lower bound.
        min: Decimal,
        /// Upper bound.
        max: Decimal,
    },

    /// Value with more than [`MAX_SCALE`] decimal places.
    #[error("{field} has more than {MAX_SCALE} decimal places")]
    TooPrecise {
        /// Offending field.
        field: &'static str,
    },
}

/// Checks `min <= value <= max` and the decimal places of `value`.
pub fn check_bounded(
    field: &'static str,
    value: Decimal,
    min: Decimal,
    max: Decimal,
) -> Result<(), LimitError> {
    if value < min || value > max {
        return Err(LimitError::OutOfRange { field, min, max });
    }
    if value.normalize().scale() > MAX_SCALE {
        return Err(LimitError::TooPrecise { field });
    }
    Ok(())
}

/// Checks a tax or contingency rate: `0..=MAX_PERCENT`.
pub fn check_rate(field: &'static str, rate: Decimal) -> Result<(), LimitError> {
    check_bounded(field, rate, Decimal::ZERO, MAX_PERCENT)
}

/// Checks a margin: `-MAX_PERCENT..=MAX_PERCENT`.
pub fn check_margin(margin: Decimal) -> Result<(), LimitError> {
    check_bounded("margin", margin, -MAX_PERCENT, MAX_PERCENT)
}
