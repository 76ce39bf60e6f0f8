//! Shared types, errors, and configuration for the RAB builder.
//!
//! This crate provides common types used across all other crates:
//! - Typed IDs for projects, categories and items
//! - Money type with decimal precision and Indonesian-locale formatting
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::{AppConfig, DisplayConfig, ServerConfig, TaxSettings};
pub use error::{AppError, AppResult};
