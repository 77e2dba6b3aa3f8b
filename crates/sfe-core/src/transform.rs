//! Transform descriptors.
//!
//! A [`TransformDescriptor`] describes either a transform *type* (its declared
//! parameter schema) or one *instance* of it (the values bound for a run), or
//! both at once. Descriptors are immutable; a new instance of the same type is
//! made with [`TransformDescriptor::with_parameters`], which shares the schema.
//!
//! # Rendering
//!
//! [`Display`](fmt::Display) produces the multi-line report used by help
//! listings. It is meant for people and cannot be parsed back.
//!
//! ```text
//!
//! Beat
//! ====
//!
//! Find the tempo of a musical signal.
//!
//! Input format: ArrayFormatF
//! Output format: ArrayFormat<FixedArray<2>>
//! Supported parameters:
//!     Name: bands
//!     Description: The number of bands to sum.
//!     Default: 1
//! Parameters:
//!     bands = 2
//!
//! ```
//!
//! (indentation is a single tab). [`TransformDescriptor::description`] gives
//! the one-line form, e.g. `Beat(bands=2)`.

use crate::{Condition, ParameterDescriptor, ParameterValue};
use std::any::Any;
use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Declared parameter schema of a transform type, keyed by parameter name.
///
/// Shared between every descriptor instantiated from the same type.
pub type SupportedParameters = Arc<BTreeMap<String, ParameterDescriptor>>;

/// Values bound to one transform instance, keyed by parameter name.
pub type BoundParameters = BTreeMap<String, ParameterValue>;

/// Render bound parameters as `"name=value, ..."` in name order.
///
/// This is the argument list of [`TransformDescriptor::description`].
pub fn format_parameters(params: &BoundParameters) -> String {
    params
        .iter()
        .map(|(name, value)| format!("{name}={value}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Metadata of one transform exposed by the engine.
///
/// Equality (and hashing) only looks at the name and the two format tags.
#[derive(Debug, Clone)]
pub struct TransformDescriptor {
    name: String,
    description: String,
    supported_parameters: Option<SupportedParameters>,
    parameters: BoundParameters,
    input_format: String,
    output_format: String,
    condition: Option<Condition>,
}

impl TransformDescriptor {
    /// Descriptor with just a name; everything else empty.
    pub fn new(name: impl Into<String>) -> Self {
        Self::builder(name).build()
    }

    pub fn builder(name: impl Into<String>) -> TransformDescriptorBuilder {
        TransformDescriptorBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Free-text description of the transform.
    ///
    /// Not to be confused with [`description`](Self::description), which
    /// builds the one-line signature.
    pub fn description_text(&self) -> &str {
        &self.description
    }

    /// Declared schema, or `None` if the type declares none.
    ///
    /// `Some` with an empty map means "declares no parameters", which is not
    /// the same thing as `None`.
    pub fn supported_parameters(&self) -> Option<&SupportedParameters> {
        self.supported_parameters.as_ref()
    }

    /// Whether the declared schema contains `name` (false without a schema).
    pub fn supports(&self, name: &str) -> bool {
        self.supported_parameters
            .as_ref()
            .is_some_and(|schema| schema.contains_key(name))
    }

    pub fn parameters(&self) -> &BoundParameters {
        &self.parameters
    }

    pub fn parameter(&self, name: &str) -> Option<&ParameterValue> {
        self.parameters.get(name)
    }

    pub fn input_format(&self) -> &str {
        &self.input_format
    }

    pub fn output_format(&self) -> &str {
        &self.output_format
    }

    pub fn condition(&self) -> Option<&Condition> {
        self.condition.as_ref()
    }

    /// A new instance of the same transform type with `parameters` bound.
    ///
    /// Previously bound values are dropped; the schema `Arc` is shared.
    pub fn with_parameters<K, V>(&self, parameters: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<ParameterValue>,
    {
        Self {
            parameters: parameters
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            ..self.clone()
        }
    }

    /// One-line signature: the name, then the bound parameters in key order.
    ///
    /// ```
    /// use sfe_core::TransformDescriptor;
    ///
    /// let t = TransformDescriptor::builder("mfcc")
    ///     .parameter("window_size", 512)
    ///     .parameter("num_coefficients", 13)
    ///     .build();
    /// assert_eq!(t.description(), "mfcc(num_coefficients=13, window_size=512)");
    /// ```
    pub fn description(&self) -> String {
        let res = if self.parameters.is_empty() {
            self.name.clone()
        } else {
            format!("{}({})", self.name, format_parameters(&self.parameters))
        };
        tracing::debug!("Constructed transform string: {}", res);
        res
    }

    /// Equality against a type-erased value; false unless it is a descriptor.
    pub fn eq_dyn(&self, other: &dyn Any) -> bool {
        other
            .downcast_ref::<TransformDescriptor>()
            .is_some_and(|other| self == other)
    }
}

impl PartialEq for TransformDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.input_format == other.input_format
            && self.output_format == other.output_format
    }
}

impl Eq for TransformDescriptor {}

impl Hash for TransformDescriptor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.input_format.hash(state);
        self.output_format.hash(state);
    }
}

impl fmt::Display for TransformDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let underline = "=".repeat(self.name.chars().count());
        write!(
            f,
            "\n{}\n{}\n\n{}\n\n",
            self.name, underline, self.description
        )?;
        writeln!(f, "Input format: {}", self.input_format)?;
        writeln!(f, "Output format: {}", self.output_format)?;

        if let Some(schema) = self.supported_parameters.as_ref().filter(|s| !s.is_empty()) {
            writeln!(f, "Supported parameters:")?;
            for param in schema.values() {
                writeln!(f, "\t{}", param.to_string().replace('\n', "\n\t"))?;
            }
        }

        if !self.parameters.is_empty() {
            writeln!(f, "Parameters:")?;
            for (name, value) in &self.parameters {
                writeln!(f, "\t{name} = {value}")?;
            }
        }

        writeln!(f)
    }
}

/// Builder for [`TransformDescriptor`].
#[derive(Debug, Clone)]
pub struct TransformDescriptorBuilder {
    inner: TransformDescriptor,
}

impl TransformDescriptorBuilder {
    fn new(name: impl Into<String>) -> Self {
        Self {
            inner: TransformDescriptor {
                name: name.into(),
                description: String::new(),
                supported_parameters: None,
                parameters: BTreeMap::new(),
                input_format: String::new(),
                output_format: String::new(),
                condition: None,
            },
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.inner.description = description.into();
        self
    }

    /// Declare the schema from parameter descriptors, keyed by their names.
    ///
    /// A later descriptor with the same name replaces an earlier one.
    pub fn supported_parameters(
        mut self,
        parameters: impl IntoIterator<Item = ParameterDescriptor>,
    ) -> Self {
        let schema = parameters
            .into_iter()
            .map(|p| (p.name().to_string(), p))
            .collect();
        self.inner.supported_parameters = Some(Arc::new(schema));
        self
    }

    /// Declare the schema by sharing an existing one.
    pub fn shared_parameters(mut self, schema: SupportedParameters) -> Self {
        self.inner.supported_parameters = Some(schema);
        self
    }

    pub fn input_format(mut self, format: impl Into<String>) -> Self {
        self.inner.input_format = format.into();
        self
    }

    pub fn output_format(mut self, format: impl Into<String>) -> Self {
        self.inner.output_format = format.into();
        self
    }

    pub fn condition(mut self, condition: Condition) -> Self {
        self.inner.condition = Some(condition);
        self
    }

    /// Bind one parameter value.
    pub fn parameter(mut self, name: impl Into<String>, value: impl Into<ParameterValue>) -> Self {
        self.inner.parameters.insert(name.into(), value.into());
        self
    }

    /// Bind several parameter values.
    pub fn parameters<K, V>(mut self, parameters: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<ParameterValue>,
    {
        self.inner
            .parameters
            .extend(parameters.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    pub fn build(self) -> TransformDescriptor {
        self.inner
    }
}
