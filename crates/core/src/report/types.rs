//! Report data types.

use rab_shared::types::{Currency, Money};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::budget::types::{BudgetSummary, DocumentInfo, ItemType};

/// An exact amount together with its display string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportAmount {
    /// Exact value.
    pub amount: Decimal,
    /// Rounded, locale-formatted value (e.g. "Rp 839.160").
    pub display: String,
}

impl ReportAmount {
    /// Pairs an amount with its formatted form.
    #[must_use]
    pub fn new(amount: Decimal, currency: Currency) -> Self {
        Self {
            amount,
            display: Money::new(amount, currency).format(),
        }
    }
}

/// One printed item row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportLine {
    /// Row number within its section, e.g. "2.3".
    pub number: String,
    /// Item name.
    pub name: String,
    /// Unit of measure.
    pub unit: String,
    /// Quantity.
    pub quantity: Decimal,
    /// Item classification.
    pub item_type: ItemType,
    /// Selling price per unit.
    pub unit_price: ReportAmount,
    /// Line total.
    pub total: ReportAmount,
    /// Vendor, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor_name: Option<String>,
}

/// One category as printed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSection {
    /// 1-based section number.
    pub number: usize,
    /// Category name.
    pub name: String,
    /// Rows in display order.
    pub lines: Vec<ReportLine>,
    /// Section subtotal.
    pub subtotal: ReportAmount,
}

/// How a recap line is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecapKind {
    /// A component of the total.
    Line,
    /// A running or final total.
    Total,
    /// Shown for reference; not part of the grand total.
    Informational,
}

/// One row of the recapitulation ("rekapitulasi") block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecapLine {
    /// Printed label.
    pub label: String,
    /// Presentation hint.
    pub kind: RecapKind,
    /// Amount.
    pub amount: ReportAmount,
}

/// A complete RAB document ready for an export renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RabReport {
    /// Project title.
    pub title: String,
    /// Letterhead fields.
    pub document: DocumentInfo,
    /// Display currency.
    pub currency: Currency,
    /// One section per category.
    pub sections: Vec<ReportSection>,
    /// Recapitulation rows.
    pub recap: Vec<RecapLine>,
    /// The exact figures the report was built from.
    pub summary: BudgetSummary,
}
