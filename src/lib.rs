//! # sfe - Sound Feature Extraction descriptors
//!
//! Metadata layer for the transforms of a feature extraction engine: names,
//! declared parameters, bound values, format tags, and their text renderings
//! for help listings and logs. No audio is processed here.
//!
//! ## Architecture
//!
//! sfe is an umbrella crate that coordinates:
//! - **sfe-core** - Descriptor value types (transform, parameter, value, condition)
//! - **sfe-catalog** - Registry, help listing, parameter lists, feature chains, TOML catalogs
//!
//! ## Quick Start
//!
//! ```
//! use sfe::prelude::*;
//!
//! let registry = TransformRegistry::default();
//!
//! // Bind parameters the way the engine spells them
//! let beat = registry.instantiate_str("Beat", "bands=2")?;
//! assert_eq!(beat.description(), "Beat(bands=2)");
//!
//! // Full listing for `--help`
//! print!("{}", registry.help());
//! # Ok::<(), sfe::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `default` - Descriptors and catalog
//! - `catalog` - Registry, chains, TOML catalogs

mod error;
pub use error::{Error, Result};

/// Re-export of sfe-core for direct access
pub use sfe_core as core;

pub use sfe_core::{
    format_parameters, BoundParameters, Condition, ParameterDescriptor, ParameterValue,
    SupportedParameters, TransformDescriptor, TransformDescriptorBuilder,
};

#[cfg(feature = "catalog")]
pub use sfe_catalog as catalog;

#[cfg(feature = "catalog")]
pub use sfe_catalog::{
    builtin_transforms, parse_parameters, CatalogConfig, CatalogError,
    FeatureChain, TransformEntry, TransformRegistry,
};

/// Common imports.
pub mod prelude {
    pub use crate::{Error, Result};
    pub use sfe_core::{
        Condition, ParameterDescriptor, ParameterValue, TransformDescriptor,
    };

    #[cfg(feature = "catalog")]
    pub use sfe_catalog::{parse_parameters, FeatureChain, TransformRegistry};
}
