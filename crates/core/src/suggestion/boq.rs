//! Drafted category/item trees from the AI estimator.

use garde::Validate;
use serde::Deserialize;
use serde_json::Number;

use super::error::SuggestionError;
use super::parse::{parse_validated, to_decimal, valid_quantity, valid_unit_price};
use crate::budget::types::{Category, Item, ItemType};

/// Used when the request leaves specifications blank.
pub const DEFAULT_SPECIFICATIONS: &str = "Standar umum";

/// Input for a BoQ draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoqSuggestionRequest {
    /// Kind of project, e.g. "instalasi server" or "sistem keamanan CCTV".
    pub project_type: String,
    /// Requirements or site conditions.
    pub specifications: String,
}

impl BoqSuggestionRequest {
    /// Builds a request. The project type is mandatory.
    pub fn new(project_type: &str, specifications: &str) -> Result<Self, SuggestionError> {
        let project_type = project_type.trim();
        if project_type.is_empty() {
            return Err(SuggestionError::MissingProjectType);
        }
        let specifications = match specifications.trim() {
            "" => DEFAULT_SPECIFICATIONS,
            s => s,
        };
        Ok(Self {
            project_type: project_type.to_string(),
            specifications: specifications.to_string(),
        })
    }
}

#[derive(Debug, Deserialize, Validate)]
struct RawSuggestion {
    #[garde(dive)]
    categories: Vec<RawCategory>,
}

#[derive(Debug, Deserialize, Validate)]
struct RawCategory {
    #[garde(length(min = 1))]
    name: String,
    #[garde(dive)]
    items: Vec<RawItem>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
struct RawItem {
    #[garde(length(min = 1))]
    name: String,
    #[garde(skip)]
    unit: String,
    #[serde(default = "default_quantity")]
    #[garde(custom(valid_quantity))]
    quantity: Number,
    #[serde(default = "default_unit_price")]
    #[garde(custom(valid_unit_price))]
    unit_price: Number,
    #[serde(rename = "type")]
    #[garde(skip)]
    item_type: ItemType,
}

fn default_quantity() -> Number {
    Number::from(1)
}

fn default_unit_price() -> Number {
    Number::from(0)
}

impl From<RawItem> for Item {
    fn from(raw: RawItem) -> Self {
        Item::new(raw.name, raw.unit, raw.item_type)
            .priced(to_decimal(&raw.quantity), to_decimal(&raw.unit_price))
    }
}

impl From<RawCategory> for Category {
    fn from(raw: RawCategory) -> Self {
        let mut category = Category::new(raw.name);
        category.items = raw.items.into_iter().map(Item::from).collect();
        category
    }
}

/// Validates a drafted BoQ and turns it into categories with fresh IDs.
///
/// Expected shape:
///
/// ```json
/// { "categories": [ { "name": "...", "items": [
///     { "name": "...", "unit": "...", "quantity": 1, "unitPrice": 0, "type": "perangkat" }
/// ] } ] }
/// ```
///
/// `quantity` defaults to 1 and `unitPrice` to 0 when absent. Any other
/// deviation rejects the whole draft.
pub fn parse_boq_suggestion(raw: &str) -> Result<Vec<Category>, SuggestionError> {
    let suggestion: RawSuggestion = parse_validated(raw)?;
    Ok(suggestion.categories.into_iter().map(Category::from).collect())
}
