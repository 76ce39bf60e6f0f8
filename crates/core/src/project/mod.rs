//! Category and item editing on a project.

pub mod editor;
pub mod error;

pub use editor::{CategoryPreset, DocumentPatch, ItemPatch};
pub use error::ProjectError;
