//! Catalog of previously priced items, reused across projects.
//!
//! Entries are keyed by a slug of the item name, so re-recording an item with
//! the same name overwrites the earlier price instead of adding a duplicate.

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::budget::types::{Item, ItemType};

/// One remembered item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Slug the entry is stored under.
    pub slug: String,
    /// Item name as last recorded.
    pub name: String,
    /// Unit of measure.
    pub unit: String,
    /// Last known cost price per unit.
    pub unit_price: Decimal,
    /// Item classification.
    pub item_type: ItemType,
    /// Vendor, empty when unknown.
    pub vendor_name: String,
    /// When the entry was last written.
    pub last_used: DateTime<Utc>,
}

/// Thread-safe in-memory item catalog.
#[derive(Debug, Default)]
pub struct ItemCatalog {
    entries: DashMap<String, CatalogEntry>,
}

/// Lowercases the name and collapses whitespace runs into `-`.
#[must_use]
pub fn catalog_slug(name: &str) -> String {
    name.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

impl ItemCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Upserts an item. Items without a name or without a positive price are skipped.
    pub fn record(&self, item: &Item) -> Option<CatalogEntry> {
        let slug = catalog_slug(&item.name);
        if slug.is_empty() || item.unit_price <= Decimal::ZERO {
            return None;
        }

        let entry = CatalogEntry {
            slug: slug.clone(),
            name: item.name.clone(),
            unit: item.unit.clone(),
            unit_price: item.unit_price,
            item_type: item.item_type,
            vendor_name: item.vendor_name.clone().unwrap_or_default(),
            last_used: Utc::now(),
        };
        self.entries.insert(slug, entry.clone());
        Some(entry)
    }

    /// Finds the entry for an item name.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<CatalogEntry> {
        self.entries
            .get(&catalog_slug(name))
            .map(|entry| entry.value().clone())
    }

    /// All entries, most recently used first.
    #[must_use]
    pub fn list(&self) -> Vec<CatalogEntry> {
        let mut entries: Vec<_> = self.entries.iter().map(|e| e.value().clone()).collect();
        entries.sort_by(|a, b| {
            b.last_used
                .cmp(&a.last_used)
                .then_with(|| a.slug.cmp(&b.slug))
        });
        entries
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
