//! Transform catalog for the sound feature extraction engine.
//!
//! Everything that sits next to the descriptors of [`sfe_core`] and deals with
//! *collections* of them:
//!
//! - [`TransformRegistry`]: shared, read-mostly table of transform types,
//!   instantiation by name and the `--help` style listing
//! - [`parse_parameters`] / [`format_parameters`]: the `"key=value, ..."`
//!   parameter list syntax the engine uses
//! - [`FeatureChain`]: a named sequence of transform instances
//! - [`CatalogConfig`]: transform types declared in TOML
//! - [`builtin_transforms`]: the types every registry starts with
//!
//! # Example
//!
//! ```
//! use sfe_catalog::TransformRegistry;
//!
//! let registry = TransformRegistry::default();
//! let beat = registry.instantiate_str("Beat", "bands=2, min_bpm=90")?;
//! assert_eq!(beat.description(), "Beat(bands=2, min_bpm=90)");
//! # Ok::<(), sfe_catalog::CatalogError>(())
//! ```

pub mod error;
pub use error::{CatalogError, Result};

mod params;
pub use params::{format_parameters, parse_parameters};

pub mod registry;
pub use registry::TransformRegistry;

mod chain;
pub use chain::FeatureChain;

pub mod config;
pub use config::{CatalogConfig, TransformEntry};

mod builtin;
pub use builtin::builtin_transforms;
