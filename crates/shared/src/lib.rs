//! Shared errors and configuration for Coinage.
//!
//! This crate provides the ambient pieces used across all other crates:
//! - Application-wide error types
//! - Configuration management (catalog extensions, logging)

pub mod config;
pub mod error;

pub use config::{AppConfig, CatalogConfig, CurrencyDefinition, LoggingConfig};
pub use error::{AppError, AppResult};
