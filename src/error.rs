//! Centralized error type for the sfe umbrella crate.
//!
//! Wraps all subsystem errors so `?` propagates naturally across crate boundaries.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] sfe_core::Error),

    #[cfg(feature = "catalog")]
    #[error("Catalog: {0}")]
    Catalog(#[from] sfe_catalog::CatalogError),
}

pub type Result<T> = std::result::Result<T, Error>;
