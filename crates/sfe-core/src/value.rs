//! Bound parameter values.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::any::{type_name, Any};
use std::fmt;

/// A value bound to a transform parameter.
///
/// The engine consumes every value as text, so each kind has exactly one
/// rendering (see the [`Display`](fmt::Display) impl).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParameterValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl ParameterValue {
    /// Infer a value from its textual form.
    ///
    /// `true`/`false` become [`Bool`](Self::Bool), integers [`Int`](Self::Int)
    /// and float literals [`Float`](Self::Float), but only when the typed value
    /// renders back to exactly `text`. Anything else (`"02"`, `"+32"`, `"1e3"`,
    /// `"90.50"`, integers beyond `i64`) stays [`Text`](Self::Text), so the
    /// caller's spelling survives into [`description`] and parameter lists.
    ///
    /// [`description`]: crate::TransformDescriptor::description
    pub fn parse(text: &str) -> Self {
        match text {
            "true" => return Self::Bool(true),
            "false" => return Self::Bool(false),
            _ => {}
        }

        if let Ok(i) = text.parse::<i64>() {
            let value = Self::Int(i);
            if value.to_string() == text {
                return value;
            }
        }

        // f64's parser also takes "inf"/"nan"; those stay text.
        if text.bytes().any(|b| b.is_ascii_digit()) {
            if let Ok(f) = text.parse::<f64>() {
                let value = Self::Float(f);
                if value.to_string() == text {
                    return value;
                }
            }
        }

        Self::Text(text.to_string())
    }

    /// Coerce a type-erased value.
    ///
    /// Accepts strings, primitive integers that fit `i64`, `f32`, `f64`, `bool`
    /// and `ParameterValue` itself. Everything else fails with
    /// [`Error::TypeConversion`].
    pub fn from_any(value: &dyn Any) -> Result<Self> {
        macro_rules! lossless {
            ($($ty:ty),*) => {
                $(
                    if let Some(v) = value.downcast_ref::<$ty>() {
                        return Ok(Self::from(*v));
                    }
                )*
            };
        }

        macro_rules! checked {
            ($($ty:ty),*) => {
                $(
                    if let Some(v) = value.downcast_ref::<$ty>() {
                        return i64::try_from(*v)
                            .map(Self::Int)
                            .map_err(|_| Error::TypeConversion { type_name: type_name::<$ty>() });
                    }
                )*
            };
        }

        if let Some(v) = value.downcast_ref::<ParameterValue>() {
            return Ok(v.clone());
        }
        if let Some(s) = value.downcast_ref::<String>() {
            return Ok(Self::Text(s.clone()));
        }
        if let Some(s) = value.downcast_ref::<&'static str>() {
            return Ok(Self::Text((*s).to_string()));
        }

        lossless!(bool, i8, i16, i32, i64, u8, u16, u32, f32, f64);
        checked!(u64, usize, isize, i128, u128);

        Err(Error::TypeConversion {
            type_name: "<unsupported>",
        })
    }

    /// Text value, if this is [`Text`](Self::Text).
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Integer value, if this is [`Int`](Self::Int).
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Numeric value; integers are widened.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            Self::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Boolean value, if this is [`Bool`](Self::Bool).
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for ParameterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Int(i) => write!(f, "{i}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Float(x) => {
                let magnitude = x.abs();
                if x.is_finite() && magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
                    // Exponent form with a sign and at least two digits: 1e+300, 2.5e-07.
                    let text = format!("{x:e}");
                    let (mantissa, exponent) = text.split_once('e').unwrap_or((text.as_str(), "0"));
                    let (sign, digits) = match exponent.strip_prefix('-') {
                        Some(digits) => ('-', digits),
                        None => ('+', exponent),
                    };
                    return write!(f, "{mantissa}e{sign}{digits:0>2}");
                }

                let text = x.to_string();
                // Integral floats keep a fractional part so they read as floats.
                if text.bytes().all(|b| b.is_ascii_digit() || b == b'-') {
                    write!(f, "{text}.0")
                } else {
                    f.write_str(&text)
                }
            }
        }
    }
}

impl From<String> for ParameterValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for ParameterValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<bool> for ParameterValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<f64> for ParameterValue {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<f32> for ParameterValue {
    fn from(f: f32) -> Self {
        // Widen through the shortest decimal form so 0.1f32 stays 0.1.
        Self::Float(f.to_string().parse().unwrap_or(f as f64))
    }
}

macro_rules! impl_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ParameterValue {
                fn from(i: $ty) -> Self {
                    Self::Int(i64::from(i))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);
