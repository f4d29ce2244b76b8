//! Dynamic value representation for XML encoding.
//!
//! [`Value`] is the closed set of shapes the encoder understands: mappings, sequences,
//! scalars and typed values with their own native XML projection.
//!
//! ## Core Types
//!
//! - [`Value`]: mapping, sequence, scalar or structured
//! - [`Scalar`]: null, boolean, number or string leaf
//! - [`Number`]: signed integer, unsigned integer or float
//!
//! ## Creating Values
//!
//! ```rust
//! use anyxml::{value, Scalar, Value};
//!
//! let null = Value::Scalar(Scalar::Null);
//! let number = Value::from(42);
//! let text = Value::from("hello");
//!
//! let doc = value!({
//!     "name": "Alice",
//!     "tags": ["a", "b"]
//! });
//! assert!(doc.is_mapping());
//! ```
//!
//! ## Decoding From Other Formats
//!
//! `Value` implements [`serde::Deserialize`], so any serde decoder can produce one:
//!
//! ```rust
//! use anyxml::Value;
//!
//! let value: Value = serde_json::from_str(r#"{"a": [1, true, null]}"#).unwrap();
//! assert!(value.is_mapping());
//! ```

use crate::{Mapping, Structured};
use serde::{Deserialize, Deserializer};
use std::fmt;

/// A dynamically-typed value that can be encoded as XML.
///
/// # Examples
///
/// ```rust
/// use anyxml::{Mapping, Value};
///
/// let seq = Value::Sequence(vec![Value::from(1), Value::from("two")]);
/// assert!(seq.is_sequence());
///
/// let map = Value::Mapping(Mapping::new());
/// assert!(map.is_mapping());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Mapping(Mapping),
    Sequence(Vec<Value>),
    Scalar(Scalar),
    Structured(Structured),
}

/// A leaf value.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Scalar {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
}

/// A numeric scalar.
///
/// Integers render in decimal. Floats render in the shortest form that reads back to the
/// same value; non-finite floats use the XML Schema lexical forms `INF`, `-INF` and `NaN`.
///
/// # Examples
///
/// ```rust
/// use anyxml::Number;
///
/// assert_eq!(Number::Integer(-7).to_string(), "-7");
/// assert_eq!(Number::Float(2.75).to_string(), "2.75");
/// assert_eq!(Number::Float(f64::NEG_INFINITY).to_string(), "-INF");
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
    Integer(i64),
    Unsigned(u64),
    Float(f64),
}

impl Number {
    /// Converts this number to an `i64` if it is an integer that fits.
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Number::Integer(i) => Some(i),
            Number::Unsigned(u) => i64::try_from(u).ok(),
            Number::Float(_) => None,
        }
    }

    /// Converts this number to an `f64`.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match *self {
            Number::Integer(i) => i as f64,
            Number::Unsigned(u) => u as f64,
            Number::Float(f) => f,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::Unsigned(u) => write!(f, "{}", u),
            Number::Float(fl) if fl.is_nan() => f.write_str("NaN"),
            Number::Float(fl) if fl.is_infinite() => {
                f.write_str(if fl > 0.0 { "INF" } else { "-INF" })
            }
            Number::Float(fl) => write!(f, "{}", fl),
        }
    }
}

impl Scalar {
    /// Returns the element text for this scalar, or `None` for null.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use anyxml::{Number, Scalar};
    ///
    /// assert_eq!(Scalar::Bool(true).text().as_deref(), Some("true"));
    /// assert_eq!(Scalar::Number(Number::Float(2.5)).text().as_deref(), Some("2.5"));
    /// assert_eq!(Scalar::Null.text(), None);
    /// ```
    #[must_use]
    pub fn text(&self) -> Option<std::borrow::Cow<'_, str>> {
        use std::borrow::Cow;
        match self {
            Scalar::Null => None,
            Scalar::Bool(b) => Some(Cow::Borrowed(if *b { "true" } else { "false" })),
            Scalar::Number(n) => Some(Cow::Owned(n.to_string())),
            Scalar::String(s) => Some(Cow::Borrowed(s)),
        }
    }
}

impl Value {
    /// Returns `true` if the value is a mapping.
    #[inline]
    #[must_use]
    pub const fn is_mapping(&self) -> bool {
        matches!(self, Value::Mapping(_))
    }

    /// Returns `true` if the value is a sequence.
    #[inline]
    #[must_use]
    pub const fn is_sequence(&self) -> bool {
        matches!(self, Value::Sequence(_))
    }

    /// Returns `true` if the value is a scalar, including null.
    #[inline]
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        matches!(self, Value::Scalar(_))
    }

    /// Returns `true` if the value is null.
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Scalar(Scalar::Null))
    }

    /// Returns `true` if the value is a typed value for the native marshaller.
    #[inline]
    #[must_use]
    pub const fn is_structured(&self) -> bool {
        matches!(self, Value::Structured(_))
    }

    /// Short name of the variant, used in log events.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Value::Mapping(_) => "mapping",
            Value::Sequence(_) => "sequence",
            Value::Scalar(_) => "scalar",
            Value::Structured(_) => "structured",
        }
    }

    /// If the value is a string, returns a reference to it. Otherwise returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use anyxml::Value;
    ///
    /// assert_eq!(Value::from("hello").as_str(), Some("hello"));
    /// assert_eq!(Value::from(42).as_str(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Scalar(Scalar::String(s)) => Some(s),
            _ => None,
        }
    }

    /// If the value is an integer that fits in `i64`, returns it.
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Scalar(Scalar::Number(n)) => n.as_i64(),
            _ => None,
        }
    }

    /// If the value is a sequence, returns a reference to it.
    #[inline]
    #[must_use]
    pub fn as_sequence(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Sequence(seq) => Some(seq),
            _ => None,
        }
    }

    /// If the value is a mapping, returns a reference to it.
    #[inline]
    #[must_use]
    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Value::Mapping(map) => Some(map),
            _ => None,
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Scalar(Scalar::Null)
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a mapping, sequence or scalar")
            }

            fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E> {
                Ok(Value::from(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
                Ok(Value::from(value))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
                Ok(Value::from(value))
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E> {
                Ok(Value::from(value))
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
                Ok(Value::from(value))
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
                Ok(Value::from(value))
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E> {
                Ok(Value::Scalar(Scalar::Null))
            }

            fn visit_none<E>(self) -> Result<Self::Value, E> {
                Ok(Value::Scalar(Scalar::Null))
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut vec = Vec::with_capacity(seq.size_hint().unwrap_or(0));
                while let Some(elem) = seq.next_element()? {
                    vec.push(elem);
                }
                Ok(Value::Sequence(vec))
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut values = Mapping::new();
                while let Some((key, value)) = map.next_entry()? {
                    values.insert(key, value);
                }
                Ok(Value::Mapping(values))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Scalar(Scalar::Bool(value))
    }
}

macro_rules! from_signed {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Scalar(Scalar::Number(Number::Integer(value as i64)))
                }
            }
        )*
    };
}

macro_rules! from_unsigned {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Scalar(Scalar::Number(Number::Unsigned(value as u64)))
                }
            }
        )*
    };
}

from_signed!(i8, i16, i32, i64);
from_unsigned!(u8, u16, u32, u64);

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Scalar(Scalar::Number(Number::Float(value as f64)))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Scalar(Scalar::Number(Number::Float(value)))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Scalar(Scalar::String(value))
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Scalar(Scalar::String(value.to_string()))
    }
}

impl From<Scalar> for Value {
    fn from(value: Scalar) -> Self {
        Value::Scalar(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Sequence(value)
    }
}

impl From<Mapping> for Value {
    fn from(value: Mapping) -> Self {
        Value::Mapping(value)
    }
}

impl From<Structured> for Value {
    fn from(value: Structured) -> Self {
        Value::Structured(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_primitives() {
        assert_eq!(Value::from(true), Value::Scalar(Scalar::Bool(true)));
        assert_eq!(
            Value::from(42i32),
            Value::Scalar(Scalar::Number(Number::Integer(42)))
        );
        assert_eq!(
            Value::from(42u8),
            Value::Scalar(Scalar::Number(Number::Unsigned(42)))
        );
        assert_eq!(
            Value::from(3.5f64),
            Value::Scalar(Scalar::Number(Number::Float(3.5)))
        );
        assert_eq!(Value::from("test"), Value::from("test".to_string()));
    }

    #[test]
    fn test_number_display() {
        assert_eq!(Number::Integer(i64::MIN).to_string(), "-9223372036854775808");
        assert_eq!(Number::Unsigned(u64::MAX).to_string(), "18446744073709551615");
        assert_eq!(Number::Float(1.0).to_string(), "1");
        assert_eq!(Number::Float(0.1).to_string(), "0.1");
        assert_eq!(Number::Float(f64::INFINITY).to_string(), "INF");
        assert_eq!(Number::Float(f64::NAN).to_string(), "NaN");
    }

    #[test]
    fn test_number_conversions() {
        assert_eq!(Number::Unsigned(7).as_i64(), Some(7));
        assert_eq!(Number::Unsigned(u64::MAX).as_i64(), None);
        assert_eq!(Number::Float(2.0).as_i64(), None);
        assert_eq!(Number::Integer(-2).as_f64(), -2.0);
    }

    #[test]
    fn test_deserialize_from_json() {
        let value: Value =
            serde_json::from_str(r#"{"a": 1, "b": [true, null, "x"], "c": 2.5}"#).unwrap();

        let map = value.as_mapping().unwrap();
        assert_eq!(map.get("a").and_then(Value::as_i64), Some(1));
        assert_eq!(
            map.get("b"),
            Some(&Value::Sequence(vec![
                Value::from(true),
                Value::Scalar(Scalar::Null),
                Value::from("x"),
            ]))
        );
        assert_eq!(map.get("c"), Some(&Value::from(2.5)));
    }

    #[test]
    fn test_kind() {
        assert_eq!(Value::default().kind(), "scalar");
        assert_eq!(Value::Sequence(vec![]).kind(), "sequence");
        assert_eq!(Value::Mapping(Mapping::new()).kind(), "mapping");
    }
}
