//! High-end market price lookups for a single item.

use garde::Validate;
use rab_shared::types::{CategoryId, ItemId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Number;

use super::error::SuggestionError;
use super::parse::{parse_validated, to_decimal, valid_unit_price};
use crate::budget::types::{Item, ItemType, Project};
use crate::project::ProjectError;

/// Marker left in names the user has not edited yet ("Item Baru", "Bagian Baru").
const PLACEHOLDER_MARKER: &str = "Baru";

/// Input for a price lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceSuggestionRequest {
    /// Name of the device or service.
    pub item_name: String,
    /// Item classification.
    pub item_type: ItemType,
}

impl PriceSuggestionRequest {
    /// Builds a lookup for an item, refusing empty or placeholder names.
    pub fn for_item(item: &Item) -> Result<Self, SuggestionError> {
        let name = item.name.trim();
        if name.is_empty() || name.contains(PLACEHOLDER_MARKER) {
            return Err(SuggestionError::UnspecificItemName(item.name.clone()));
        }
        Ok(Self {
            item_name: name.to_string(),
            item_type: item.item_type,
        })
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
struct RawPriceSuggestion {
    #[garde(custom(valid_unit_price))]
    suggested_price: Number,
    #[garde(url)]
    source_url: String,
    #[garde(length(min = 1))]
    source_name: String,
    #[garde(skip)]
    price_range_note: String,
}

/// A validated price lookup result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceSuggestion {
    /// Upper-bound market price per unit.
    pub suggested_price: Decimal,
    /// Link to the listing the price came from.
    pub source_url: String,
    /// Store or vendor name.
    pub source_name: String,
    /// Short note on the market price range.
    pub price_range_note: String,
}

impl From<RawPriceSuggestion> for PriceSuggestion {
    fn from(raw: RawPriceSuggestion) -> Self {
        Self {
            suggested_price: to_decimal(&raw.suggested_price),
            source_url: raw.source_url,
            source_name: raw.source_name,
            price_range_note: raw.price_range_note,
        }
    }
}

/// Validates a price lookup response.
///
/// Requires `suggestedPrice` (non-negative number), `sourceUrl` (URL),
/// `sourceName` (non-empty) and `priceRangeNote`.
pub fn parse_price_suggestion(raw: &str) -> Result<PriceSuggestion, SuggestionError> {
    parse_validated::<RawPriceSuggestion>(raw).map(PriceSuggestion::from)
}

impl Project {
    /// Takes over the suggested price as the item's cost basis, with its source.
    pub fn apply_price_suggestion(
        &mut self,
        category_id: CategoryId,
        item_id: ItemId,
        suggestion: &PriceSuggestion,
    ) -> Result<&Item, ProjectError> {
        let item = self.item_mut(category_id, item_id)?;
        item.unit_price = suggestion.suggested_price;
        item.source_url = Some(suggestion.source_url.clone());
        item.vendor_name = Some(suggestion.source_name.clone());
        self.touch();
        self.item(category_id, item_id)
    }
}
