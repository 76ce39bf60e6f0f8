//! Per-request tax overrides.
//!
//! Rates arrive from form controls and query strings, so they are coerced
//! rather than rejected: unreadable input counts as zero. Rates outside
//! the engine's bounds are still refused.

use rab_core::budget::{LimitError, TaxConfig};
use rab_core::input::{coerce_decimal, coerce_json_number};
use serde::Deserialize;
use serde_json::Value;

/// Tax overrides taken from the query string.
#[derive(Debug, Default, Deserialize)]
pub struct TaxQuery {
    /// Toggle PPN.
    pub include_vat: Option<bool>,
    /// PPN rate in percent.
    pub vat_rate: Option<String>,
    /// Toggle PPh 23.
    pub include_withholding: Option<bool>,
    /// PPh 23 rate in percent.
    pub withholding_rate: Option<String>,
    /// Contingency rate in percent.
    pub contingency_rate: Option<String>,
}

impl TaxQuery {
    /// Applies the given overrides on top of `base`.
    ///
    /// # Errors
    ///
    /// Returns an error if a resulting rate is out of range.
    pub fn resolve(&self, base: TaxConfig) -> Result<TaxConfig, LimitError> {
        let tax = TaxConfig {
            include_vat: self.include_vat.unwrap_or(base.include_vat),
            vat_rate: self.vat_rate.as_deref().map_or(base.vat_rate, coerce_decimal),
            include_withholding: self
                .include_withholding
                .unwrap_or(base.include_withholding),
            withholding_rate: self
                .withholding_rate
                .as_deref()
                .map_or(base.withholding_rate, coerce_decimal),
            contingency_rate: self
                .contingency_rate
                .as_deref()
                .map_or(base.contingency_rate, coerce_decimal),
        };
        tax.check()?;
        Ok(tax)
    }
}

/// Tax overrides taken from a JSON body. Rates may be numbers or strings.
#[derive(Debug, Default, Deserialize)]
pub struct TaxOverrides {
    /// Toggle PPN.
    pub include_vat: Option<bool>,
    /// PPN rate in percent.
    pub vat_rate: Option<Value>,
    /// Toggle PPh 23.
    pub include_withholding: Option<bool>,
    /// PPh 23 rate in percent.
    pub withholding_rate: Option<Value>,
    /// Contingency rate in percent.
    pub contingency_rate: Option<Value>,
}

impl TaxOverrides {
    /// Applies the given overrides on top of `base`.
    ///
    /// # Errors
    ///
    /// Returns an error if a resulting rate is out of range.
    pub fn resolve(&self, base: TaxConfig) -> Result<TaxConfig, LimitError> {
        let tax = TaxConfig {
            include_vat: self.include_vat.unwrap_or(base.include_vat),
            vat_rate: self
                .vat_rate
                .as_ref()
                .map_or(base.vat_rate, coerce_json_number),
            include_withholding: self
                .include_withholding
                .unwrap_or(base.include_withholding),
            withholding_rate: self
                .withholding_rate
                .as_ref()
                .map_or(base.withholding_rate, coerce_json_number),
            contingency_rate: self
                .contingency_rate
                .as_ref()
                .map_or(base.contingency_rate, coerce_json_number),
        };
        tax.check()?;
        Ok(tax)
    }
}
