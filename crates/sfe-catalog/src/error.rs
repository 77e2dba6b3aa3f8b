//! Error types for sfe-catalog.

use thiserror::Error;

/// Errors from registry lookups, parameter lists and catalog files.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Unknown transform: {0}")]
    UnknownTransform(String),

    #[error("Transform '{transform}' has no parameter '{parameter}'")]
    UnknownParameter { transform: String, parameter: String },

    #[error("Malformed parameter '{0}', expected name=value")]
    MalformedParameter(String),

    #[error("Parameter '{0}' given more than once")]
    DuplicateParameter(String),

    #[error("Invalid catalog: {0}")]
    InvalidConfig(String),

    #[error("Failed to parse catalog: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias.
pub type Result<T> = std::result::Result<T, CatalogError>;
