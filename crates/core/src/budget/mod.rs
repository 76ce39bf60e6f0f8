//! Budget model and the engine that prices it.

pub mod engine;
pub mod limits;
pub mod tax;
pub mod types;

#[cfg(test)]
mod tests;

pub use engine::BudgetEngine;
pub use limits::LimitError;
pub use tax::TaxConfig;
pub use types::{
    BudgetSummary, Category, CategorySubtotal, DocumentInfo, Item, ItemType, Project,
};
