//! Editing operations on the category/item tree.
//!
//! Every operation either applies completely or returns an error with the
//! project untouched.

use chrono::Utc;
use rab_shared::types::{CategoryId, ItemId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::ProjectError;
use crate::budget::limits::{MAX_QUANTITY, MAX_UNIT_PRICE, check_bounded, check_margin};
use crate::budget::types::{Category, DEFAULT_CATEGORY_NAME, Item, ItemType, Project};

/// Quick-add category templates offered by the builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryPreset {
    /// Main equipment and hardware.
    Perangkat,
    /// Installation and configuration labor.
    Jasa,
    /// Mobilization and work tools.
    Mobilisasi,
}

impl CategoryPreset {
    /// Name given to the created category.
    #[must_use]
    pub const fn category_name(self) -> &'static str {
        match self {
            Self::Perangkat => "Perangkat & Hardware",
            Self::Jasa => "Jasa Instalasi & Konfigurasi",
            Self::Mobilisasi => "Mobilisasi & Alat Kerja",
        }
    }
}

/// Partial update of an item. `None` leaves the field as it is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemPatch {
    /// New name.
    #[serde(default)]
    pub name: Option<String>,
    /// New unit.
    #[serde(default)]
    pub unit: Option<String>,
    /// New quantity.
    #[serde(default)]
    pub quantity: Option<Decimal>,
    /// New cost price per unit.
    #[serde(default)]
    pub unit_price: Option<Decimal>,
    /// New markup percentage.
    #[serde(default)]
    pub margin: Option<Decimal>,
    /// New classification.
    #[serde(default, rename = "type")]
    pub item_type: Option<ItemType>,
    /// New vendor name.
    #[serde(default)]
    pub vendor_name: Option<String>,
    /// New source link.
    #[serde(default)]
    pub source_url: Option<String>,
}

/// Checks item numbers against the engine's input bounds.
fn check_quantity(quantity: Decimal) -> Result<(), ProjectError> {
    if quantity < Decimal::ZERO {
        return Err(ProjectError::NegativeQuantity);
    }
    check_bounded("quantity", quantity, Decimal::ZERO, MAX_QUANTITY)?;
    Ok(())
}

fn check_unit_price(unit_price: Decimal) -> Result<(), ProjectError> {
    if unit_price < Decimal::ZERO {
        return Err(ProjectError::NegativeUnitPrice);
    }
    check_bounded("unit_price", unit_price, Decimal::ZERO, MAX_UNIT_PRICE)?;
    Ok(())
}

fn check_item(item: &Item) -> Result<(), ProjectError> {
    check_quantity(item.quantity)?;
    check_unit_price(item.unit_price)?;
    if let Some(margin) = item.margin {
        check_margin(margin)?;
    }
    Ok(())
}

impl ItemPatch {
    fn validate(&self) -> Result<(), ProjectError> {
        if let Some(quantity) = self.quantity {
            check_quantity(quantity)?;
        }
        if let Some(unit_price) = self.unit_price {
            check_unit_price(unit_price)?;
        }
        if let Some(margin) = self.margin {
            check_margin(margin)?;
        }
        Ok(())
    }

    fn apply(self, item: &mut Item) {
        if let Some(name) = self.name {
            item.name = name;
        }
        if let Some(unit) = self.unit {
            item.unit = unit;
        }
        if let Some(quantity) = self.quantity {
            item.quantity = quantity;
        }
        if let Some(unit_price) = self.unit_price {
            item.unit_price = unit_price;
        }
        if let Some(margin) = self.margin {
            item.margin = Some(margin);
        }
        if let Some(item_type) = self.item_type {
            item.item_type = item_type;
        }
        if let Some(vendor_name) = self.vendor_name {
            item.vendor_name = Some(vendor_name);
        }
        if let Some(source_url) = self.source_url {
            item.source_url = Some(source_url);
        }
    }
}

/// Partial update of the project header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentPatch {
    /// New title.
    #[serde(default)]
    pub title: Option<String>,
    /// New project type.
    #[serde(default)]
    pub project_type: Option<String>,
    /// New specifications.
    #[serde(default)]
    pub specifications: Option<String>,
    /// New client name.
    #[serde(default)]
    pub client_name: Option<String>,
    /// New document number.
    #[serde(default)]
    pub document_number: Option<String>,
    /// New project location.
    #[serde(default)]
    pub project_location: Option<String>,
    /// New document date.
    #[serde(default)]
    pub document_date: Option<String>,
    /// New creator name.
    #[serde(default)]
    pub creator_name: Option<String>,
}

impl Project {
    /// Looks up a category.
    pub fn category(&self, category_id: CategoryId) -> Result<&Category, ProjectError> {
        self.categories
            .iter()
            .find(|c| c.id == category_id)
            .ok_or(ProjectError::CategoryNotFound(category_id))
    }

    fn category_mut(&mut self, category_id: CategoryId) -> Result<&mut Category, ProjectError> {
        self.categories
            .iter_mut()
            .find(|c| c.id == category_id)
            .ok_or(ProjectError::CategoryNotFound(category_id))
    }

    /// Looks up an item inside a category.
    pub fn item(&self, category_id: CategoryId, item_id: ItemId) -> Result<&Item, ProjectError> {
        self.category(category_id)?
            .items
            .iter()
            .find(|i| i.id == item_id)
            .ok_or(ProjectError::ItemNotFound(item_id))
    }

    pub(crate) fn item_mut(
        &mut self,
        category_id: CategoryId,
        item_id: ItemId,
    ) -> Result<&mut Item, ProjectError> {
        self.category_mut(category_id)?
            .items
            .iter_mut()
            .find(|i| i.id == item_id)
            .ok_or(ProjectError::ItemNotFound(item_id))
    }

    pub(crate) fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Appends an empty category. A blank name falls back to "Bagian Baru".
    pub fn add_category(&mut self, name: Option<&str>) -> CategoryId {
        let name = name
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or(DEFAULT_CATEGORY_NAME);
        let category = Category::new(name);
        let id = category.id;
        self.categories.push(category);
        self.touch();
        id
    }

    /// Appends a category from one of the quick-add templates.
    pub fn add_preset_category(&mut self, preset: CategoryPreset) -> CategoryId {
        self.add_category(Some(preset.category_name()))
    }

    /// Renames a category.
    pub fn rename_category(
        &mut self,
        category_id: CategoryId,
        name: impl Into<String>,
    ) -> Result<(), ProjectError> {
        self.category_mut(category_id)?.name = name.into();
        self.touch();
        Ok(())
    }

    /// Removes a category and all its items.
    pub fn delete_category(&mut self, category_id: CategoryId) -> Result<Category, ProjectError> {
        let index = self
            .categories
            .iter()
            .position(|c| c.id == category_id)
            .ok_or(ProjectError::CategoryNotFound(category_id))?;
        let removed = self.categories.remove(index);
        self.touch();
        Ok(removed)
    }

    /// Appends a placeholder item to a category.
    pub fn add_item(
        &mut self,
        category_id: CategoryId,
        item_type: ItemType,
    ) -> Result<ItemId, ProjectError> {
        self.push_item(category_id, Item::placeholder(item_type))
    }

    /// Appends a fully specified item to a category.
    pub fn push_item(&mut self, category_id: CategoryId, item: Item) -> Result<ItemId, ProjectError> {
        check_item(&item)?;
        let id = item.id;
        self.category_mut(category_id)?.items.push(item);
        self.touch();
        Ok(id)
    }

    /// Applies a partial update to an item.
    pub fn update_item(
        &mut self,
        category_id: CategoryId,
        item_id: ItemId,
        patch: ItemPatch,
    ) -> Result<&Item, ProjectError> {
        patch.validate()?;
        patch.apply(self.item_mut(category_id, item_id)?);
        self.touch();
        self.item(category_id, item_id)
    }

    /// Removes an item from a category.
    pub fn delete_item(
        &mut self,
        category_id: CategoryId,
        item_id: ItemId,
    ) -> Result<Item, ProjectError> {
        let category = self.category_mut(category_id)?;
        let index = category
            .items
            .iter()
            .position(|i| i.id == item_id)
            .ok_or(ProjectError::ItemNotFound(item_id))?;
        let removed = category.items.remove(index);
        self.touch();
        Ok(removed)
    }

    /// Updates title, project type, specifications and letterhead fields.
    pub fn update_document(&mut self, patch: DocumentPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(project_type) = patch.project_type {
            self.project_type = project_type;
        }
        if let Some(specifications) = patch.specifications {
            self.specifications = specifications;
        }
        let doc = &mut self.document;
        if let Some(v) = patch.client_name {
            doc.client_name = Some(v);
        }
        if let Some(v) = patch.document_number {
            doc.document_number = Some(v);
        }
        if let Some(v) = patch.project_location {
            doc.project_location = Some(v);
        }
        if let Some(v) = patch.document_date {
            doc.document_date = Some(v);
        }
        if let Some(v) = patch.creator_name {
            doc.creator_name = Some(v);
        }
        self.touch();
    }

    /// Checks every item of the tree against the same rules as [`Project::push_item`].
    ///
    /// Used for trees that arrive whole, e.g. a posted project snapshot.
    pub fn check_items(&self) -> Result<(), ProjectError> {
        self.categories
            .iter()
            .flat_map(|c| &c.items)
            .try_for_each(check_item)
    }

    /// Appends already validated categories, e.g. an accepted AI suggestion.
    ///
    /// Returns how many categories were added.
    pub fn append_categories(&mut self, categories: Vec<Category>) -> usize {
        let added = categories.len();
        self.categories.extend(categories);
        self.touch();
        added
    }
}
