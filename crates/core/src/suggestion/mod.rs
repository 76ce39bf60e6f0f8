//! Validation of responses from the AI suggestion service.
//!
//! The hosted model is untrusted: its raw text is parsed and checked against
//! the expected shape before any of it may become an [`Item`](crate::budget::Item).
//! A response that fails any check is dropped whole.

pub mod boq;
pub mod error;
mod parse;
pub mod price;

pub use boq::{BoqSuggestionRequest, parse_boq_suggestion};
pub use error::SuggestionError;
pub use price::{PriceSuggestion, PriceSuggestionRequest, parse_price_suggestion};
