//! Coercion of raw user input into engine numbers.
//!
//! Form fields and loosely typed payloads never reach the engine as-is:
//! anything that does not read as a number becomes zero here.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde_json::{Number, Value};

/// Reads the leading number of a text field, or zero.
///
/// Leading whitespace is skipped and trailing garbage is ignored, so
/// `"12.5 m2"` reads as `12.5`. Empty input, text without a leading number,
/// and values outside `Decimal` range all read as zero.
#[must_use]
pub fn coerce_decimal(raw: &str) -> Decimal {
    numeric_prefix(raw.trim_start())
        .and_then(|prefix| parse_decimal(&prefix))
        .unwrap_or(Decimal::ZERO)
}

/// Reads a JSON form value as a number.
///
/// Numbers are taken as-is, strings go through [`coerce_decimal`], and
/// everything else (null, booleans, arrays, objects) reads as zero.
#[must_use]
pub fn coerce_json_number(value: &Value) -> Decimal {
    match value {
        Value::Number(n) => number_to_decimal(n).unwrap_or(Decimal::ZERO),
        Value::String(s) => coerce_decimal(s),
        _ => Decimal::ZERO,
    }
}

/// Converts a JSON number without going through float arithmetic.
///
/// Returns `None` when the value does not fit in a `Decimal`.
#[must_use]
pub fn number_to_decimal(n: &Number) -> Option<Decimal> {
    if let Some(i) = n.as_i64() {
        return Some(Decimal::from(i));
    }
    if let Some(u) = n.as_u64() {
        return Some(Decimal::from(u));
    }
    parse_decimal(&n.to_string())
}

fn parse_decimal(text: &str) -> Option<Decimal> {
    if text.contains(['e', 'E']) {
        Decimal::from_scientific(text).ok()
    } else {
        Decimal::from_str(text).ok()
    }
}

/// Normalized copy of the longest numeric prefix: `[+-]digits[.digits][e[+-]digits]`.
fn numeric_prefix(s: &str) -> Option<String> {
    let bytes = s.as_bytes();
    let mut i = 0;
    let mut out = String::new();

    if let Some(&sign @ (b'+' | b'-')) = bytes.first() {
        if sign == b'-' {
            out.push('-');
        }
        i += 1;
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let int_digits = &s[int_start..i];

    let mut frac_digits = "";
    if i < bytes.len() && bytes[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        frac_digits = &s[frac_start..j];
        if !int_digits.is_empty() || !frac_digits.is_empty() {
            i = j;
        }
    }

    if int_digits.is_empty() && frac_digits.is_empty() {
        return None;
    }

    out.push_str(if int_digits.is_empty() { "0" } else { int_digits });
    if !frac_digits.is_empty() {
        out.push('.');
        out.push_str(frac_digits);
    }

    if i < bytes.len() && matches!(bytes[i], b'e' | b'E') {
        let mut j = i + 1;
        let exp_sign = match bytes.get(j) {
            Some(b'-') => {
                j += 1;
                "-"
            }
            Some(b'+') => {
                j += 1;
                ""
            }
            _ => "",
        };
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            out.push('e');
            out.push_str(exp_sign);
            out.push_str(&s[exp_start..j]);
        }
    }

    Some(out)
}
