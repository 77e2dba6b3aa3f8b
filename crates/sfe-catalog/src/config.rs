//! Transform catalogs declared in TOML.
//!
//! # Example TOML:
//! ```toml
//! [[transforms]]
//! name = "Window"
//! description = "Splits the signal into overlapping windows."
//! input_format = "RawFormat16"
//! output_format = "WindowFormatF"
//!
//! [[transforms.parameters]]
//! name = "length"
//! description = "Window length in samples."
//! default = 512
//! ```
//!
//! An entry without a `parameters` key declares no schema at all, while
//! `parameters = []` declares an empty one.

use crate::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use sfe_core::{ParameterDescriptor, TransformDescriptor};
use std::collections::HashSet;
use std::path::Path;

/// Contents of a catalog file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub transforms: Vec<TransformEntry>,
}

/// One transform type in a catalog file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransformEntry {
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub input_format: String,

    #[serde(default)]
    pub output_format: String,

    /// Declared schema; `None` when the key is absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<ParameterDescriptor>>,
}

impl TransformEntry {
    pub fn into_descriptor(self) -> TransformDescriptor {
        let builder = TransformDescriptor::builder(self.name)
            .description(self.description)
            .input_format(self.input_format)
            .output_format(self.output_format);

        let builder = match self.parameters {
            Some(params) => builder.supported_parameters(params),
            None => builder,
        };
        builder.build()
    }
}

impl CatalogConfig {
    /// Parse and validate a catalog.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a catalog file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Names must be non-empty and unique, both for transforms and for the
    /// parameters of one transform.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();

        for entry in &self.transforms {
            if entry.name.trim().is_empty() {
                return Err(CatalogError::InvalidConfig(
                    "transform with empty name".to_string(),
                ));
            }
            if !seen.insert(entry.name.as_str()) {
                return Err(CatalogError::InvalidConfig(format!(
                    "transform '{}' declared twice",
                    entry.name
                )));
            }

            let mut params = HashSet::new();
            for param in entry.parameters.iter().flatten() {
                if param.name().trim().is_empty() {
                    return Err(CatalogError::InvalidConfig(format!(
                        "transform '{}' has a parameter with an empty name",
                        entry.name
                    )));
                }
                if !params.insert(param.name()) {
                    return Err(CatalogError::InvalidConfig(format!(
                        "transform '{}' declares parameter '{}' twice",
                        entry.name,
                        param.name()
                    )));
                }
            }
        }

        Ok(())
    }

    pub fn into_descriptors(self) -> Vec<TransformDescriptor> {
        self.transforms
            .into_iter()
            .map(TransformEntry::into_descriptor)
            .collect()
    }
}
