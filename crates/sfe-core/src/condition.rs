//! Opaque applicability guards.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Applicability guard attached to a transform by the engine.
///
/// Descriptors store and hand back the guard but never evaluate it; only the
/// engine that created it knows the concrete type.
///
/// ```
/// use sfe_core::Condition;
///
/// let cond = Condition::new("input == WindowFormatF");
/// assert_eq!(cond.downcast_ref::<&str>(), Some(&"input == WindowFormatF"));
/// ```
#[derive(Clone)]
pub struct Condition(Arc<dyn Any + Send + Sync>);

impl Condition {
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self(Arc::new(value))
    }

    /// The wrapped value, if it is a `T`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref::<T>()
    }

    pub fn is<T: Any>(&self) -> bool {
        self.0.is::<T>()
    }
}

impl fmt::Debug for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Condition(..)")
    }
}
