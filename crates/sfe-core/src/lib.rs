//! Descriptors for sound feature extraction transforms.
//!
//! This crate models the *metadata* of the transforms exposed by the native
//! feature extraction engine: what a transform is called, what it consumes and
//! produces, which parameters it declares and which values one instance binds.
//! Nothing here processes audio.
//!
//! # Primary API
//!
//! - [`TransformDescriptor`] / [`TransformDescriptorBuilder`]: one transform type or instance
//! - [`ParameterDescriptor`]: one declared parameter of a transform type
//! - [`ParameterValue`]: a bound parameter value
//! - [`Condition`]: opaque applicability guard owned by the engine
//!
//! # Example
//!
//! ```
//! use sfe_core::{ParameterDescriptor, TransformDescriptor};
//!
//! let mfcc = TransformDescriptor::builder("mfcc")
//!     .supported_parameters([ParameterDescriptor::new(
//!         "num_coefficients",
//!         "Number of cepstral coefficients",
//!         13,
//!     )])
//!     .parameter("num_coefficients", 13)
//!     .build();
//!
//! assert_eq!(mfcc.description(), "mfcc(num_coefficients=13)");
//! ```

pub mod error;
pub use error::{Error, Result};

mod value;
pub use value::ParameterValue;

mod parameter;
pub use parameter::ParameterDescriptor;

mod condition;
pub use condition::Condition;

mod transform;
pub use transform::{
    format_parameters, BoundParameters, SupportedParameters, TransformDescriptor,
    TransformDescriptorBuilder,
};
