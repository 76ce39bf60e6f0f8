//! Project editing errors.

use rab_shared::types::{CategoryId, ItemId};
use thiserror::Error;

use crate::budget::LimitError;

/// Errors raised while editing the category/item tree.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProjectError {
    /// Category not found in the project.
    #[error("Category not found: {0}")]
    CategoryNotFound(CategoryId),

    /// Item not found in the category.
    #[error("Item not found: {0}")]
    ItemNotFound(ItemId),

    /// Quantity cannot be negative.
    #[error("Quantity cannot be negative")]
    NegativeQuantity,

    /// Unit price cannot be negative.
    #[error("Unit price cannot be negative")]
    NegativeUnitPrice,

    /// A number is outside the accepted bounds.
    #[error(transparent)]
    Limit(#[from] LimitError),
}
