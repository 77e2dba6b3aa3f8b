//! Error types for sfe-core.

use thiserror::Error;

/// Error type for descriptor construction.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Cannot convert value of type `{type_name}` to text")]
    TypeConversion { type_name: &'static str },
}

/// Result type alias.
pub type Result<T> = core::result::Result<T, Error>;
