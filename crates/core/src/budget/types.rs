//! Budget data types.

use chrono::{DateTime, Utc};
use rab_shared::types::{CategoryId, ItemId, ProjectId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Title of a project started without one.
pub const DEFAULT_PROJECT_TITLE: &str = "Draft RAB Baru";

/// Default name for a freshly added category.
pub const DEFAULT_CATEGORY_NAME: &str = "Bagian Baru";

/// Default name for a freshly added item.
pub const DEFAULT_ITEM_NAME: &str = "Item Baru";

/// Default unit for a freshly added item.
pub const DEFAULT_ITEM_UNIT: &str = "Unit";

/// Item classification. Decides the aggregate bucket and the tax treatment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    /// Goods, material, hardware.
    #[default]
    Perangkat,
    /// Labor or service. Subject to PPh 23 withholding.
    Jasa,
}

impl ItemType {
    /// Wire name of the type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Perangkat => "perangkat",
            Self::Jasa => "jasa",
        }
    }
}

impl std::str::FromStr for ItemType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "perangkat" => Ok(Self::Perangkat),
            "jasa" => Ok(Self::Jasa),
            _ => Err(format!("Unknown item type: {s}")),
        }
    }
}

/// A leaf line in the budget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Item ID.
    pub id: ItemId,
    /// Free-text description.
    pub name: String,
    /// Unit of measure (e.g. "m2", "Unit", "Lot").
    pub unit: String,
    /// Volume or count. Never negative.
    pub quantity: Decimal,
    /// Cost basis ("modal") per unit. Never negative.
    pub unit_price: Decimal,
    /// Markup percentage over `unit_price`. Absent means 0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin: Option<Decimal>,
    /// Item classification.
    #[serde(rename = "type")]
    pub item_type: ItemType,
    /// Store or vendor the price came from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor_name: Option<String>,
    /// Reference link for the price.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
}

impl Item {
    /// Creates an item with quantity 1, unit price 0 and no margin.
    #[must_use]
    pub fn new(name: impl Into<String>, unit: impl Into<String>, item_type: ItemType) -> Self {
        Self {
            id: ItemId::new(),
            name: name.into(),
            unit: unit.into(),
            quantity: Decimal::ONE,
            unit_price: Decimal::ZERO,
            margin: None,
            item_type,
            vendor_name: None,
            source_url: None,
        }
    }

    /// Creates the placeholder row the builder inserts on "add item".
    #[must_use]
    pub fn placeholder(item_type: ItemType) -> Self {
        Self::new(DEFAULT_ITEM_NAME, DEFAULT_ITEM_UNIT, item_type)
    }

    /// Sets quantity and unit price.
    #[must_use]
    pub fn priced(mut self, quantity: Decimal, unit_price: Decimal) -> Self {
        self.quantity = quantity;
        self.unit_price = unit_price;
        self
    }

    /// Sets the markup percentage.
    #[must_use]
    pub fn with_margin(mut self, margin: Decimal) -> Self {
        self.margin = Some(margin);
        self
    }
}

/// A named, ordered group of items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Category ID.
    pub id: CategoryId,
    /// Display name.
    pub name: String,
    /// Items in display order.
    #[serde(default)]
    pub items: Vec<Item>,
}

impl Category {
    /// Creates an empty category.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: CategoryId::new(),
            name: name.into(),
            items: Vec::new(),
        }
    }

    /// Appends an item, returning the category for chaining.
    #[must_use]
    pub fn with_item(mut self, item: Item) -> Self {
        self.items.push(item);
        self
    }
}

/// Letterhead ("kop surat") fields printed on the document. Not used in computation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentInfo {
    /// Client or company name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,
    /// Document number, e.g. "RAB/2024/001".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_number: Option<String>,
    /// Project location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_location: Option<String>,
    /// Document date as entered (ISO `YYYY-MM-DD`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_date: Option<String>,
    /// Name of the person preparing the estimate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator_name: Option<String>,
}

/// The root aggregate: one RAB document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Project ID.
    pub id: ProjectId,
    /// Project title.
    pub title: String,
    /// Kind of project (e.g. "instalasi server", "pembangunan rumah").
    #[serde(default)]
    pub project_type: String,
    /// Free-text requirements.
    #[serde(default)]
    pub specifications: String,
    /// Categories in display order.
    #[serde(default)]
    pub categories: Vec<Category>,
    /// Letterhead fields.
    #[serde(default, flatten)]
    pub document: DocumentInfo,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Creates an empty project.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: ProjectId::new(),
            title: title.into(),
            project_type: String::new(),
            specifications: String::new(),
            categories: Vec::new(),
            document: DocumentInfo::default(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Total number of items across all categories.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.categories.iter().map(|c| c.items.len()).sum()
    }
}

/// Subtotal of one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySubtotal {
    /// Category ID.
    pub category_id: CategoryId,
    /// Category name.
    pub name: String,
    /// Sum of item totals in this category.
    pub subtotal: Decimal,
}

/// Result of summarizing a project. All amounts are exact and unrounded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetSummary {
    /// Revenue from `perangkat` items.
    pub total_goods: Decimal,
    /// Revenue from `jasa` items.
    pub total_labor: Decimal,
    /// Cost basis of all items.
    pub total_cost: Decimal,
    /// `total_goods + total_labor`.
    pub subtotal: Decimal,
    /// `subtotal - total_cost`.
    pub gross_profit: Decimal,
    /// Contingency on the subtotal.
    pub contingency_amount: Decimal,
    /// `subtotal + contingency_amount`.
    pub base_before_tax: Decimal,
    /// PPN on `base_before_tax`, zero when disabled.
    pub vat_amount: Decimal,
    /// PPh 23 on `total_labor`, zero when disabled. Informational only.
    pub withholding_amount: Decimal,
    /// `base_before_tax + vat_amount`.
    pub grand_total: Decimal,
    /// `total_labor - withholding_amount`.
    pub net_to_labor_vendors: Decimal,
    /// Per-category subtotals in category order.
    pub category_subtotals: Vec<CategorySubtotal>,
}
