//! XML encoding of dynamic values.
//!
//! ## Tag Resolution
//!
//! - **Scalars** become `<tag>text</tag>`; null becomes `<tag/>`
//! - **Mappings** become `<tag>` with one child per entry, named after the sanitized key
//! - **Sequences** have no wrapper of their own: every element is emitted as a sibling.
//!   An element that is a single-key mapping is promoted, so its key names the element.
//!   Every other element reuses the enclosing key's tag, or the configured element tag
//!   when the sequence is the bare top-level value.
//! - **Structured** values are only valid at the top level, where the native marshaller
//!   renders them.
//!
//! ```rust
//! use anyxml::{encode_document, value, XmlOptions};
//!
//! let data = value!([{"a": 1}, {"b": 2}, "x"]);
//! let options = XmlOptions::new().with_root_tag("r").with_element_tag("e");
//! let xml = encode_document(&data, &options).unwrap();
//! assert_eq!(xml, b"<r><a>1</a><b>2</b><e>x</e></r>");
//! ```
//!
//! Compact and pretty output differ only by the whitespace between tags:
//!
//! ```rust
//! use anyxml::{to_string_pretty, value};
//!
//! let data = value!({"name": "Alice", "roles": ["admin", "dev"], "meta": {}});
//! assert_eq!(
//!     to_string_pretty(&data).unwrap(),
//!     "<doc>\n  <name>Alice</name>\n  <roles>admin</roles>\n  <roles>dev</roles>\n  <meta></meta>\n</doc>"
//! );
//! ```

use crate::escape::Escaping;
use crate::indent::Indentation;
use crate::sanitize::sanitize;
use crate::structured::NativeIndent;
use crate::{Error, Result, Scalar, Value, XmlOptions};

/// Recursive encoder appending elements to an in-memory buffer.
///
/// Tags passed to [`Encoder::encode`] are written as given; callers sanitize them first.
/// Mapping keys met during recursion are sanitized by the encoder.
pub struct Encoder<'a> {
    output: String,
    indent: Indentation,
    escaping: &'a Escaping,
}

impl<'a> Encoder<'a> {
    pub fn new(options: &'a XmlOptions) -> Self {
        Encoder {
            output: String::with_capacity(256),
            indent: Indentation::new(&options.indent, &options.prefix),
            escaping: &options.escaping,
        }
    }

    pub fn into_inner(self) -> String {
        self.output
    }

    /// Appends `value` wrapped in `tag`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedNestedTypedValue`] when a structured value is reached.
    pub fn encode(&mut self, tag: &str, value: &Value) -> Result<()> {
        match value {
            Value::Scalar(scalar) => {
                self.write_scalar(tag, scalar);
                Ok(())
            }
            Value::Mapping(map) => self.write_block(tag, map.is_empty(), |enc| {
                for (key, child) in map {
                    enc.encode(&sanitize(key), child)?;
                }
                Ok(())
            }),
            Value::Sequence(items) if items.is_empty() => {
                self.write_empty(tag);
                Ok(())
            }
            Value::Sequence(items) => self.encode_items(items, tag),
            Value::Structured(_) => Err(Error::nested_typed_value(tag)),
        }
    }

    /// Appends a bare top-level sequence inside `root`, naming anonymous elements `element_tag`.
    pub fn encode_root_sequence(
        &mut self,
        root: &str,
        items: &[Value],
        element_tag: &str,
    ) -> Result<()> {
        self.write_block(root, items.is_empty(), |enc| {
            enc.encode_items(items, element_tag)
        })
    }

    fn encode_items(&mut self, items: &[Value], fallback: &str) -> Result<()> {
        for item in items {
            match promoted(item) {
                Some((key, inner)) => self.encode(&sanitize(key), inner)?,
                None => self.encode(fallback, item)?,
            }
        }
        Ok(())
    }

    fn write_scalar(&mut self, tag: &str, scalar: &Scalar) {
        self.indent.break_line(&mut self.output);
        match scalar.text() {
            Some(text) => {
                self.start_tag(tag);
                let escaped = self.escaping.escape(&text);
                self.output.push_str(&escaped);
                self.end_tag(tag);
            }
            None => self.empty_tag(tag),
        }
        self.indent.mark_mid_line();
    }

    fn write_empty(&mut self, tag: &str) {
        self.indent.break_line(&mut self.output);
        self.empty_tag(tag);
        self.indent.mark_mid_line();
    }

    // Open tag, children one level deeper, close tag on its own line. Without children
    // the close tag stays on the open tag's line.
    fn write_block<F>(&mut self, tag: &str, empty: bool, children: F) -> Result<()>
    where
        F: FnOnce(&mut Self) -> Result<()>,
    {
        self.indent.break_line(&mut self.output);
        self.start_tag(tag);
        self.indent.mark_mid_line();

        if !empty {
            self.indent.enter();
            children(self)?;
            self.indent.leave()?;
            self.indent.break_line(&mut self.output);
        }

        self.end_tag(tag);
        self.indent.mark_mid_line();
        Ok(())
    }

    fn start_tag(&mut self, tag: &str) {
        self.output.push('<');
        self.output.push_str(tag);
        self.output.push('>');
    }

    fn end_tag(&mut self, tag: &str) {
        self.output.push_str("</");
        self.output.push_str(tag);
        self.output.push('>');
    }

    fn empty_tag(&mut self, tag: &str) {
        self.output.push('<');
        self.output.push_str(tag);
        self.output.push_str("/>");
    }
}

/// The key and value of a single-key mapping, which names its own element inside a sequence.
fn promoted(item: &Value) -> Option<(&String, &Value)> {
    match item {
        Value::Mapping(map) => map.single_entry(),
        _ => None,
    }
}

/// Encodes a complete value as an XML fragment (no prolog).
///
/// Only the top-level value decides the entry point; see the [module docs](self) for the
/// per-variant rules. Nothing is returned on error.
///
/// # Errors
///
/// - [`Error::UnsupportedNestedTypedValue`] if a structured value appears below the top level
/// - [`Error::Marshal`] if the native marshaller rejects a top-level structured value
pub fn encode_document(value: &Value, options: &XmlOptions) -> Result<Vec<u8>> {
    encode_to_string(value, options).map(String::into_bytes)
}

pub(crate) fn encode_to_string(value: &Value, options: &XmlOptions) -> Result<String> {
    tracing::trace!(
        kind = value.kind(),
        pretty = options.is_pretty(),
        "encoding document"
    );

    if let Value::Structured(structured) = value {
        let indent = options.is_pretty().then(|| NativeIndent {
            prefix: &options.prefix,
            unit: &options.indent,
        });
        return structured.marshal(indent);
    }

    let root = options.root_tag();
    let mut encoder = Encoder::new(options);
    match value {
        Value::Sequence(items) => {
            encoder.encode_root_sequence(&root, items, &options.element_tag())?;
        }
        Value::Mapping(_) | Value::Scalar(_) | Value::Structured(_) => {
            encoder.encode(&root, value)?;
        }
    }
    Ok(encoder.into_inner())
}
