//! Named sequences of transform instances.

use sfe_core::TransformDescriptor;
use std::fmt;

/// A feature: a name plus the ordered transform instances that compute it,
/// e.g. `MFCC: Window(length=32) -> RDFT -> ... -> DCT`.
///
/// Build one step by step with [`push`](Self::push), or resolve it against a
/// registry with [`TransformRegistry::chain`](crate::TransformRegistry::chain).
/// Format compatibility between steps is left to the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureChain {
    name: String,
    transforms: Vec<TransformDescriptor>,
}

impl FeatureChain {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transforms: Vec::new(),
        }
    }

    /// Append a step.
    pub fn push(mut self, transform: TransformDescriptor) -> Self {
        self.transforms.push(transform);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn transforms(&self) -> &[TransformDescriptor] {
        &self.transforms
    }

    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    /// `"{name}: step -> step -> ..."`, each step in its one-line form.
    pub fn description(&self) -> String {
        if self.transforms.is_empty() {
            return self.name.clone();
        }
        let steps: Vec<String> = self.transforms.iter().map(|t| t.description()).collect();
        format!("{}: {}", self.name, steps.join(" -> "))
    }
}

impl fmt::Display for FeatureChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description())
    }
}
