//! Transform Registry
//!
//! Shared table of the transform types the engine exposes, keyed by name.
//! The table is read-mostly: lookups and listings take a read lock, while
//! registration takes a short write lock. Clones share the same table.

use crate::{builtin_transforms, parse_parameters, CatalogConfig, CatalogError, FeatureChain, Result};
use parking_lot::RwLock;
use sfe_core::{ParameterValue, TransformDescriptor};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// Registry of transform types.
///
/// # Example
/// ```
/// use sfe_catalog::TransformRegistry;
/// use sfe_core::TransformDescriptor;
///
/// let registry = TransformRegistry::new();
/// registry.register(TransformDescriptor::builder("RDFT").input_format("WindowFormatF").build());
///
/// assert!(registry.has_type("RDFT"));
/// assert!(registry.help().contains("Input format: WindowFormatF"));
/// ```
pub struct TransformRegistry {
    types: Arc<RwLock<HashMap<String, TransformDescriptor>>>,
}

impl TransformRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            types: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Register a transform type, replacing any type with the same name.
    ///
    /// Returns the replaced descriptor.
    pub fn register(&self, descriptor: TransformDescriptor) -> Option<TransformDescriptor> {
        let name = descriptor.name().to_string();
        let previous = self.types.write().insert(name.clone(), descriptor);
        if previous.is_some() {
            tracing::warn!("Replaced transform registration: {}", name);
        } else {
            tracing::debug!("Registered transform: {}", name);
        }
        previous
    }

    /// Look up a transform type.
    pub fn get(&self, name: &str) -> Option<TransformDescriptor> {
        self.types.read().get(name).cloned()
    }

    /// Check if a type is registered
    pub fn has_type(&self, name: &str) -> bool {
        self.types.read().contains_key(name)
    }

    /// All registered type names, sorted.
    pub fn list_types(&self) -> Vec<String> {
        let mut names: Vec<String> = self.types.read().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.types.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.read().is_empty()
    }

    /// Unregister a transform type
    pub fn unregister(&self, name: &str) -> bool {
        self.types.write().remove(name).is_some()
    }

    /// Clear all registrations
    pub fn clear(&self) {
        self.types.write().clear();
    }

    /// Instantiate a registered type with bound parameter values.
    ///
    /// When the type declares a schema, every bound name must be part of it.
    /// Values themselves are not checked; the engine interprets them.
    pub fn instantiate<K, V>(
        &self,
        name: &str,
        params: impl IntoIterator<Item = (K, V)>,
    ) -> Result<TransformDescriptor>
    where
        K: Into<String>,
        V: Into<ParameterValue>,
    {
        let ty = self
            .get(name)
            .ok_or_else(|| CatalogError::UnknownTransform(name.to_string()))?;

        let params: Vec<(String, ParameterValue)> = params
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();

        if ty.supported_parameters().is_some() {
            if let Some((unknown, _)) = params.iter().find(|(k, _)| !ty.supports(k)) {
                return Err(CatalogError::UnknownParameter {
                    transform: name.to_string(),
                    parameter: unknown.clone(),
                });
            }
        }

        Ok(ty.with_parameters(params))
    }

    /// Instantiate from a textual parameter list such as `"length=32"`.
    pub fn instantiate_str(&self, name: &str, params: &str) -> Result<TransformDescriptor> {
        self.instantiate(name, parse_parameters(params)?)
    }

    /// Resolve a feature chain from `(transform, parameter list)` steps.
    ///
    /// # Example
    /// ```
    /// use sfe_catalog::TransformRegistry;
    ///
    /// let registry = TransformRegistry::default();
    /// let chain = registry.chain("Tempo", &[("Beat", "bands=2"), ("LPC", "")])?;
    /// assert_eq!(chain.description(), "Tempo: Beat(bands=2) -> LPC");
    /// # Ok::<(), sfe_catalog::CatalogError>(())
    /// ```
    pub fn chain(&self, name: impl Into<String>, steps: &[(&str, &str)]) -> Result<FeatureChain> {
        steps
            .iter()
            .try_fold(FeatureChain::new(name), |chain, (transform, params)| {
                Ok(chain.push(self.instantiate_str(transform, params)?))
            })
    }

    /// Help listing: every registered type's report, sorted by name.
    pub fn help(&self) -> String {
        let types = self.types.read();
        let mut names: Vec<&String> = types.keys().collect();
        names.sort();
        names
            .into_iter()
            .map(|name| types[name].to_string())
            .collect()
    }

    /// Register every transform declared in a TOML catalog.
    ///
    /// The catalog is validated first; nothing is registered if it is invalid.
    /// Returns the registered names in catalog order.
    pub fn load_toml_str(&self, text: &str) -> Result<Vec<String>> {
        let config = CatalogConfig::from_toml_str(text)?;
        Ok(self.load_config(config))
    }

    /// Register every transform declared in a TOML catalog file.
    pub fn load_file(&self, path: impl AsRef<Path>) -> Result<Vec<String>> {
        let config = CatalogConfig::load(path.as_ref())?;
        Ok(self.load_config(config))
    }

    fn load_config(&self, config: CatalogConfig) -> Vec<String> {
        let registered: Vec<String> = config
            .into_descriptors()
            .into_iter()
            .map(|descriptor| {
                let name = descriptor.name().to_string();
                self.register(descriptor);
                name
            })
            .collect();
        tracing::info!("Loaded {} transforms from catalog", registered.len());
        registered
    }
}

impl Default for TransformRegistry {
    fn default() -> Self {
        let registry = Self::new();
        for descriptor in builtin_transforms() {
            registry.register(descriptor);
        }
        registry
    }
}

impl Clone for TransformRegistry {
    fn clone(&self) -> Self {
        Self {
            types: Arc::clone(&self.types),
        }
    }
}
