//! Tax and markup configuration passed into the engine.

use rab_shared::TaxSettings;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::limits::{LimitError, check_rate};

/// Conventional PPN (VAT) rate, in percent.
pub const DEFAULT_VAT_RATE: Decimal = Decimal::from_parts(11, 0, 0, false, 0);

/// Conventional PPh 23 withholding rate, in percent.
pub const DEFAULT_WITHHOLDING_RATE: Decimal = Decimal::from_parts(2, 0, 0, false, 0);

/// Contingency rate the builder starts with, in percent.
pub const DEFAULT_CONTINGENCY_RATE: Decimal = Decimal::from_parts(5, 0, 0, false, 0);

/// Immutable tax settings for one summary run. Rates are percentages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxConfig {
    /// Add PPN to the grand total.
    pub include_vat: bool,
    /// PPN rate.
    pub vat_rate: Decimal,
    /// Report PPh 23 withholding on the labor bucket.
    pub include_withholding: bool,
    /// PPh 23 rate.
    pub withholding_rate: Decimal,
    /// Contingency buffer applied to the subtotal.
    pub contingency_rate: Decimal,
}

impl Default for TaxConfig {
    fn default() -> Self {
        Self {
            include_vat: true,
            vat_rate: DEFAULT_VAT_RATE,
            include_withholding: true,
            withholding_rate: DEFAULT_WITHHOLDING_RATE,
            contingency_rate: DEFAULT_CONTINGENCY_RATE,
        }
    }
}

impl TaxConfig {
    /// No VAT, no withholding, no contingency: the plain cost total.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            include_vat: false,
            vat_rate: DEFAULT_VAT_RATE,
            include_withholding: false,
            withholding_rate: DEFAULT_WITHHOLDING_RATE,
            contingency_rate: Decimal::ZERO,
        }
    }

    /// Returns a copy with VAT toggled.
    #[must_use]
    pub fn with_vat(mut self, include: bool) -> Self {
        self.include_vat = include;
        self
    }

    /// Returns a copy with withholding toggled.
    #[must_use]
    pub fn with_withholding(mut self, include: bool) -> Self {
        self.include_withholding = include;
        self
    }

    /// Checks that every rate is within `0..=1000` percent with at most four decimal places.
    pub fn check(&self) -> Result<(), LimitError> {
        check_rate("vat_rate", self.vat_rate)?;
        check_rate("withholding_rate", self.withholding_rate)?;
        check_rate("contingency_rate", self.contingency_rate)
    }

    /// Returns a copy with a different contingency rate.
    #[must_use]
    pub fn with_contingency_rate(mut self, rate: Decimal) -> Self {
        self.contingency_rate = rate;
        self
    }
}

impl From<&TaxSettings> for TaxConfig {
    fn from(settings: &TaxSettings) -> Self {
        Self {
            include_vat: settings.include_vat,
            vat_rate: settings.vat_rate,
            include_withholding: settings.include_withholding,
            withholding_rate: settings.withholding_rate,
            contingency_rate: settings.contingency_rate,
        }
    }
}
