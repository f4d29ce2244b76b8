//! Typed values with a native XML projection.
//!
//! A [`Structured`] value wraps any `serde::Serialize` type. When it is the top-level
//! value of an encode call, the whole document is produced by `quick-xml`'s serde
//! serializer instead of the dynamic encoder: element names come from the type and its
//! field names, and `root_tag`/`element_tag` options do not apply.
//!
//! ```rust
//! use anyxml::{to_string, Structured, Value};
//! use serde::Serialize;
//!
//! #[derive(Debug, Serialize)]
//! struct Point { x: i32, y: i32 }
//!
//! let xml = to_string(&Value::Structured(Structured::new(Point { x: 1, y: 2 }))).unwrap();
//! assert_eq!(xml, "<Point><x>1</x><y>2</y></Point>");
//! ```

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::{Error, Result};

/// Indentation handed to a native marshaller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NativeIndent<'a> {
    pub prefix: &'a str,
    pub unit: &'a str,
}

/// A value that renders itself as a complete XML document.
pub trait Marshal: fmt::Debug + Send + Sync {
    /// Renders the value; `indent` is `None` for compact output.
    fn marshal(&self, indent: Option<NativeIndent<'_>>) -> Result<String>;
}

/// A shared handle to a typed value.
///
/// Cloning is cheap. Two handles compare equal only when they point at the same value.
#[derive(Clone)]
pub struct Structured(Arc<dyn Marshal>);

impl Structured {
    /// Wraps a serializable value, rendered with `quick-xml` when encoded.
    pub fn new<T>(value: T) -> Self
    where
        T: Serialize + fmt::Debug + Send + Sync + 'static,
    {
        Structured(Arc::new(Native(value)))
    }

    /// Wraps a custom [`Marshal`] implementation.
    pub fn from_marshal<M: Marshal + 'static>(marshal: M) -> Self {
        Structured(Arc::new(marshal))
    }

    pub(crate) fn marshal(&self, indent: Option<NativeIndent<'_>>) -> Result<String> {
        tracing::debug!(pretty = indent.is_some(), "delegating typed value to native marshaller");
        self.0.marshal(indent)
    }
}

impl fmt::Debug for Structured {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Structured").field(&self.0).finish()
    }
}

impl PartialEq for Structured {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

#[derive(Debug)]
struct Native<T>(T);

impl<T> Marshal for Native<T>
where
    T: Serialize + fmt::Debug + Send + Sync,
{
    fn marshal(&self, indent: Option<NativeIndent<'_>>) -> Result<String> {
        let mut out = String::new();
        let mut ser = quick_xml::se::Serializer::new(&mut out);
        if let Some(indent) = indent {
            let (ch, size) = indent_char(indent.unit)?;
            ser.indent(ch, size);
        }
        self.0.serialize(ser).map_err(Error::marshal)?;

        match indent {
            Some(indent) if !indent.prefix.is_empty() => Ok(prefix_lines(&out, indent.prefix)),
            _ => Ok(out),
        }
    }
}

// quick-xml indents with `size` copies of a single character.
fn indent_char(unit: &str) -> Result<(char, usize)> {
    let mut chars = unit.chars();
    let first = chars
        .next()
        .ok_or_else(|| Error::marshal("empty indent unit in pretty mode"))?;
    if chars.any(|c| c != first) {
        return Err(Error::marshal(format!(
            "indent unit {:?} must repeat a single character for typed values",
            unit
        )));
    }
    Ok((first, unit.chars().count()))
}

fn prefix_lines(xml: &str, prefix: &str) -> String {
    let mut out = String::with_capacity(xml.len() + prefix.len() * 8);
    for (i, line) in xml.split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(prefix);
        out.push_str(line);
    }
    out
}
