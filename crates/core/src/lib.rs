//! Core business logic for the RAB (Rencana Anggaran Biaya) builder.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//!
//! # Modules
//!
//! - `budget` - Item/category/project model and the budget engine
//! - `project` - Editing operations on the category/item tree
//! - `suggestion` - Validation of AI-drafted items and prices
//! - `catalog` - Remembered item prices
//! - `report` - Printable report layout
//! - `input` - Coercion of raw form input into numbers

pub mod budget;
pub mod catalog;
pub mod input;
pub mod project;
pub mod report;
pub mod suggestion;
