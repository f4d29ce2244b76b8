//! Error types for XML encoding.
//!
//! Encoding is total for mappings, sequences and scalars, so the error surface is small:
//!
//! - **Nested typed values**: a [`Structured`](crate::Structured) value found below the
//!   top level, where the native marshaller cannot be used
//! - **Indentation invariants**: unbalanced nesting inside the encoder (a bug, never user input)
//! - **Native marshalling**: failures reported by the `quick-xml` serializer for typed values
//! - **I/O Errors**: writing the encoded bytes to a sink failed
//!
//! ## Examples
//!
//! ```rust
//! use anyxml::{to_string, Error, Mapping, Structured, Value};
//!
//! #[derive(Debug, serde::Serialize)]
//! struct Point { x: i32, y: i32 }
//!
//! let mut map = Mapping::new();
//! map.insert("point".to_string(), Value::Structured(Structured::new(Point { x: 1, y: 2 })));
//!
//! let err = to_string(&Value::Mapping(map)).unwrap_err();
//! assert!(matches!(err, Error::UnsupportedNestedTypedValue { .. }));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur while encoding a value as XML.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A typed value appeared below the top level
    #[error("Unsupported nested typed value under <{tag}>: typed values are only accepted at the top level")]
    UnsupportedNestedTypedValue { tag: String },

    /// The indentation depth was decremented below zero
    #[error("Indentation underflow: leave() called at depth 0")]
    IndentUnderflow,

    /// The native marshaller rejected a typed value
    #[error("Native marshalling failed: {0}")]
    Marshal(String),

    /// IO error during writing
    #[error("IO error: {0}")]
    Io(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates the error reported when a typed value is nested under `tag`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use anyxml::Error;
    ///
    /// let err = Error::nested_typed_value("point");
    /// assert!(err.to_string().contains("<point>"));
    /// ```
    pub fn nested_typed_value(tag: &str) -> Self {
        Error::UnsupportedNestedTypedValue {
            tag: tag.to_string(),
        }
    }

    /// Creates a native marshalling error.
    pub fn marshal<T: fmt::Display>(msg: T) -> Self {
        Error::Marshal(msg.to_string())
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use anyxml::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for writing failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
