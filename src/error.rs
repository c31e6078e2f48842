//! Error types for the profile links host layer.
//!
//! The widget operations themselves never fail; these cover configuration,
//! instance files and widget registration.

use thiserror::Error;

/// Widget registration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Widget already registered: {0}")]
    Duplicate(String),

    #[error("Widget not registered: {0}")]
    NotFound(String),
}

/// Host and CLI errors
#[derive(Debug, Error)]
pub enum WidgetError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid instance data: {0}")]
    InvalidInstance(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl From<config::ConfigError> for WidgetError {
    fn from(err: config::ConfigError) -> Self {
        WidgetError::ConfigError(err.to_string())
    }
}
