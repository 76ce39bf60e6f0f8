//! Shared parsing steps for raw AI responses.

use garde::Validate;
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde_json::{Number, Value};

use super::error::SuggestionError;
use crate::budget::limits::{MAX_QUANTITY, MAX_UNIT_PRICE, check_bounded};
use crate::input::number_to_decimal;

/// Removes Markdown code fences the model wraps around JSON.
pub(crate) fn strip_code_fences(raw: &str) -> String {
    raw.trim().replace("```json", "").replace("```", "")
}

/// Parses the response text into a typed, validated value.
///
/// Syntax errors, shape mismatches and failed field rules are all rejections;
/// nothing is returned for partial data.
pub(crate) fn parse_validated<T>(raw: &str) -> Result<T, SuggestionError>
where
    T: DeserializeOwned + Validate<Context = ()>,
{
    let text = strip_code_fences(raw);
    let text = text.trim();
    if text.is_empty() {
        return Err(SuggestionError::EmptyResponse);
    }

    let value: Value =
        serde_json::from_str(text).map_err(|e| SuggestionError::InvalidJson(e.to_string()))?;
    if value.is_null() {
        return Err(SuggestionError::EmptyResponse);
    }

    let parsed: T =
        serde_json::from_value(value).map_err(|e| SuggestionError::SchemaMismatch(e.to_string()))?;
    parsed
        .validate()
        .map_err(|report| SuggestionError::SchemaMismatch(report.to_string()))?;
    Ok(parsed)
}

fn bounded_number(value: &Number, field: &'static str, max: Decimal) -> garde::Result {
    match number_to_decimal(value) {
        Some(d) if d < Decimal::ZERO => Err(garde::Error::new("must not be negative")),
        Some(d) => check_bounded(field, d, Decimal::ZERO, max).map_err(garde::Error::new),
        None => Err(garde::Error::new("number out of range")),
    }
}

/// garde rule: a non-negative quantity within the engine's bounds.
pub(crate) fn valid_quantity(value: &Number, _ctx: &()) -> garde::Result {
    bounded_number(value, "quantity", MAX_QUANTITY)
}

/// garde rule: a non-negative price within the engine's bounds.
pub(crate) fn valid_unit_price(value: &Number, _ctx: &()) -> garde::Result {
    bounded_number(value, "unit_price", MAX_UNIT_PRICE)
}

/// Converts a number that already passed [`valid_quantity`] or [`valid_unit_price`].
pub(crate) fn to_decimal(value: &Number) -> Decimal {
    number_to_decimal(value).unwrap_or(Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_code_fences() {
        let raw = "```json\n{\"categories\": []}\n```";
        assert_eq!(strip_code_fences(raw).trim(), "{\"categories\": []}");
    }

    #[test]
    fn test_strip_plain_text_untouched() {
        assert_eq!(strip_code_fences("  {}  "), "{}");
    }

    #[test]
    fn test_number_rules() {
        assert!(valid_quantity(&Number::from(0), &()).is_ok());
        assert!(valid_quantity(&Number::from(12), &()).is_ok());
        assert!(valid_quantity(&Number::from(-1), &()).is_err());
        assert!(valid_quantity(&Number::from(1_000_000_001_u64), &()).is_err());

        assert!(valid_unit_price(&Number::from(1_000_000_000_000_000_u64), &()).is_ok());
        assert!(valid_unit_price(&Number::from(u64::MAX), &()).is_err());

        let too_precise: Number = serde_json::from_str("0.00001").unwrap();
        assert!(valid_unit_price(&too_precise, &()).is_err());

        let huge: Number = serde_json::from_str("1e300").unwrap();
        assert!(valid_unit_price(&huge, &()).is_err());
    }
}
