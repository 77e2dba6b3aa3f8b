//! Declared transform parameters.

use crate::{ParameterValue, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::any::Any;
use std::fmt;

/// Describes one configurable parameter of a transform type.
///
/// All three fields are stored as text, whatever the logical type of the
/// parameter is. Created once when a transform type is declared and never
/// changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterDescriptor {
    name: String,
    #[serde(default)]
    description: String,
    #[serde(alias = "default", deserialize_with = "value_as_text")]
    default_value: String,
}

impl ParameterDescriptor {
    /// Create a descriptor; the default is rendered to text once.
    ///
    /// ```
    /// use sfe_core::ParameterDescriptor;
    ///
    /// let p = ParameterDescriptor::new("window_size", "Samples per frame", 512);
    /// assert_eq!(p.default_value(), "512");
    /// ```
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        default_value: impl Into<ParameterValue>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            default_value: default_value.into().to_string(),
        }
    }

    /// Create a descriptor from type-erased inputs.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeConversion`](crate::Error::TypeConversion) if any
    /// input has no text form.
    pub fn from_any(name: &dyn Any, description: &dyn Any, default_value: &dyn Any) -> Result<Self> {
        Ok(Self {
            name: ParameterValue::from_any(name)?.to_string(),
            description: ParameterValue::from_any(description)?.to_string(),
            default_value: ParameterValue::from_any(default_value)?.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn default_value(&self) -> &str {
        &self.default_value
    }
}

impl fmt::Display for ParameterDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}\nDescription: {}\nDefault: {}",
            self.name, self.description, self.default_value
        )
    }
}

fn value_as_text<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    ParameterValue::deserialize(deserializer).map(|v| v.to_string())
}
