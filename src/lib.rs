//! # anyxml
//!
//! Encode arbitrary dynamic values (mappings, sequences and scalars) as XML.
//!
//! Values typically come from a JSON or config decoder, or are built in code with the
//! [`value!`] macro. The encoder picks a tag for every sub-value, sanitizes keys into
//! legal element names and writes either compact or pretty-printed output.
//!
//! ## Quick Start
//!
//! ```rust
//! use anyxml::{to_string, to_string_pretty, value};
//!
//! let data = value!([
//!     {"somekey": "somevalue"},
//!     "string",
//!     3.5,
//!     true
//! ]);
//!
//! assert_eq!(
//!     to_string(&data).unwrap(),
//!     "<doc><somekey>somevalue</somekey><element>string</element><element>3.5</element><element>true</element></doc>"
//! );
//!
//! assert_eq!(
//!     to_string_pretty(&data).unwrap(),
//!     "<doc>\n  <somekey>somevalue</somekey>\n  <element>string</element>\n  <element>3.5</element>\n  <element>true</element>\n</doc>"
//! );
//! ```
//!
//! ## Tag Rules
//!
//! - Mapping entries become child elements named after their sanitized key
//!   (`"1st-name!"` becomes `<_1st-name_>`)
//! - Sequence elements become siblings sharing the enclosing tag, except single-key
//!   mappings, which are named after their key
//! - A bare top-level sequence is wrapped in the root tag (`doc` by default) and its
//!   anonymous elements use the element tag (`element` by default)
//! - A top-level [`Structured`] value is rendered by `quick-xml`'s serde serializer
//!
//! See [`encode`] for the full rules and [`XmlOptions`] for configuration.
//!
//! ## Output
//!
//! The result is an XML fragment without a prolog. Mapping entries are written in the
//! mapping's iteration order, which for [`Mapping`] is insertion order; decoding the
//! output gives back an equivalent tree except for promoted sequence elements, key order
//! and scalar types (everything decodes as text).

pub mod encode;
pub mod error;
pub mod escape;
pub mod indent;
pub mod macros;
pub mod map;
pub mod options;
pub mod sanitize;
pub mod ser;
pub mod structured;
pub mod value;

pub use encode::{encode_document, Encoder};
pub use error::{Error, Result};
pub use escape::{Escaping, ExtraEscapes};
pub use map::Mapping;
pub use options::{XmlOptions, DEFAULT_ELEMENT_TAG, DEFAULT_ROOT_TAG};
pub use sanitize::{sanitize, UNNAMED_ELEMENT};
pub use ser::{to_value, ValueSerializer};
pub use structured::{Marshal, NativeIndent, Structured};
pub use value::{Number, Scalar, Value};

use std::io;

/// Encode a value as a compact XML string with the default tags.
///
/// # Examples
///
/// ```rust
/// use anyxml::{to_string, value};
///
/// let xml = to_string(&value!({"a": 1, "b": "two"})).unwrap();
/// assert_eq!(xml, "<doc><a>1</a><b>two</b></doc>");
/// ```
///
/// # Errors
///
/// Returns an error if a [`Structured`] value is nested inside the tree.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string(value: &Value) -> Result<String> {
    to_string_with_options(value, &XmlOptions::default())
}

/// Encode a value as XML indented by two spaces per level.
///
/// # Examples
///
/// ```rust
/// use anyxml::{to_string_pretty, value};
///
/// let xml = to_string_pretty(&value!({"a": {"b": 1}, "c": 2})).unwrap();
/// assert_eq!(xml, "<doc>\n  <a>\n    <b>1</b>\n  </a>\n  <c>2</c>\n</doc>");
/// ```
///
/// # Errors
///
/// Returns an error if a [`Structured`] value is nested inside the tree.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_pretty(value: &Value) -> Result<String> {
    to_string_with_options(value, &XmlOptions::pretty())
}

/// Encode a value as an XML string with custom options.
///
/// # Examples
///
/// ```rust
/// use anyxml::{to_string_with_options, value, XmlOptions};
///
/// let options = XmlOptions::new().with_root_tag("r").with_element_tag("e");
/// let xml = to_string_with_options(&value!([{"a": 1}, {"b": 2}, "x"]), &options).unwrap();
/// assert_eq!(xml, "<r><a>1</a><b>2</b><e>x</e></r>");
/// ```
///
/// # Errors
///
/// Returns an error if a [`Structured`] value is nested inside the tree, or if the native
/// marshaller fails on a top-level one.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options(value: &Value, options: &XmlOptions) -> Result<String> {
    encode::encode_to_string(value, options)
}

/// Encode a value as compact XML bytes with the default tags.
///
/// # Errors
///
/// Returns an error if a [`Structured`] value is nested inside the tree.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_vec(value: &Value) -> Result<Vec<u8>> {
    encode_document(value, &XmlOptions::default())
}

/// Encode a value as XML bytes with custom options.
///
/// # Errors
///
/// Returns an error if a [`Structured`] value is nested inside the tree, or if the native
/// marshaller fails on a top-level one.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_vec_with_options(value: &Value, options: &XmlOptions) -> Result<Vec<u8>> {
    encode_document(value, options)
}

/// Encode a value as compact XML into a writer.
///
/// Nothing is written when encoding fails.
///
/// # Examples
///
/// ```rust
/// use anyxml::{to_writer, value};
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &value!("hi")).unwrap();
/// assert_eq!(buffer, b"<doc>hi</doc>");
/// ```
///
/// # Errors
///
/// Returns an error if encoding fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W>(writer: W, value: &Value) -> Result<()>
where
    W: io::Write,
{
    to_writer_with_options(writer, value, &XmlOptions::default())
}

/// Encode a value as XML into a writer with custom options.
///
/// # Errors
///
/// Returns an error if encoding fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W>(mut writer: W, value: &Value, options: &XmlOptions) -> Result<()>
where
    W: io::Write,
{
    let bytes = encode_document(value, options)?;
    writer
        .write_all(&bytes)
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value;
    use serde::Serialize;

    #[derive(Serialize, Debug)]
    struct User {
        id: u32,
        name: String,
        active: bool,
        tags: Vec<String>,
    }

    fn alice() -> User {
        User {
            id: 123,
            name: "Alice".to_string(),
            active: true,
            tags: vec!["admin".to_string(), "user".to_string()],
        }
    }

    #[test]
    fn test_struct_through_dynamic_encoder() {
        let value = to_value(&alice()).unwrap();
        assert_eq!(
            to_string(&value).unwrap(),
            "<doc><id>123</id><name>Alice</name><active>true</active><tags>admin</tags><tags>user</tags></doc>"
        );
    }

    #[test]
    fn test_struct_through_native_marshaller() {
        let value = Value::Structured(Structured::new(alice()));
        let options = XmlOptions::new().with_root_tag("ignored");
        let xml = to_string_with_options(&value, &options).unwrap();
        assert!(xml.starts_with("<User>"));
        assert!(xml.contains("<name>Alice</name>"));
    }

    #[test]
    fn test_to_vec_matches_to_string() {
        let value = value!({"k": [1, 2]});
        assert_eq!(to_vec(&value).unwrap(), to_string(&value).unwrap().into_bytes());
        assert_eq!(
            to_vec_with_options(&value, &XmlOptions::pretty()).unwrap(),
            to_string_pretty(&value).unwrap().into_bytes()
        );
    }

    #[test]
    fn test_string_matches_document_bytes() {
        let value = value!({"name": "Zoë", "tags": ["a<b"]});
        let options = XmlOptions::pretty().with_root_tag("r");
        assert_eq!(
            to_string_with_options(&value, &options).unwrap().into_bytes(),
            encode_document(&value, &options).unwrap()
        );
    }

    #[test]
    fn test_writer_untouched_on_error() {
        let mut map = Mapping::new();
        map.insert("nested".to_string(), Value::Structured(Structured::new(1)));
        let mut buffer = Vec::new();
        let result = to_writer(&mut buffer, &Value::Mapping(map));
        assert!(result.is_err());
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_writer_error() {
        struct Broken;

        impl io::Write for Broken {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::other("disk full"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let err = to_writer(Broken, &value!("x")).unwrap_err();
        assert!(matches!(err, Error::Io(msg) if msg.contains("disk full")));
    }
}
