//! Configuration options for XML encoding.
//!
//! - [`XmlOptions`]: root/element tags, indentation, line prefix and escaping policy
//!
//! ## Examples
//!
//! ```rust
//! use anyxml::{to_string_with_options, value, Escaping, XmlOptions};
//!
//! let data = value!(["a", "b"]);
//!
//! let options = XmlOptions::new().with_root_tag("list").with_element_tag("entry");
//! let xml = to_string_with_options(&data, &options).unwrap();
//! assert_eq!(xml, "<list><entry>a</entry><entry>b</entry></list>");
//!
//! let options = XmlOptions::pretty().with_indent("\t").with_escaping(Escaping::strict());
//! let xml = to_string_with_options(&data, &options).unwrap();
//! assert_eq!(xml, "<doc>\n\t<element>a</element>\n\t<element>b</element>\n</doc>");
//! ```

use std::borrow::Cow;

use crate::escape::Escaping;
use crate::sanitize::sanitize;

/// Root tag used when none is supplied.
pub const DEFAULT_ROOT_TAG: &str = "doc";

/// Tag for elements of a bare top-level sequence that do not carry their own name.
pub const DEFAULT_ELEMENT_TAG: &str = "element";

/// Configuration options for XML encoding.
///
/// # Examples
///
/// ```rust
/// use anyxml::XmlOptions;
///
/// // Compact output, default tags
/// let options = XmlOptions::new();
/// assert!(options.indent.is_empty());
///
/// // Two-space indentation
/// let options = XmlOptions::pretty();
/// assert_eq!(options.indent, "  ");
///
/// // Custom configuration
/// let options = XmlOptions::pretty()
///     .with_prefix("    ")
///     .with_root_tag("config");
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct XmlOptions {
    /// Root element name; `None` means [`DEFAULT_ROOT_TAG`].
    pub root_tag: Option<String>,
    /// Fallback element name inside a bare top-level sequence; `None` means
    /// [`DEFAULT_ELEMENT_TAG`].
    pub element_tag: Option<String>,
    /// Indent unit repeated per nesting level. Empty means compact output.
    pub indent: String,
    /// String written at the start of every line in pretty mode.
    pub prefix: String,
    /// Escaping policy for element text.
    pub escaping: Escaping,
}

impl XmlOptions {
    /// Creates default options (compact, `doc` root, `element` items, standard escaping).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options for pretty-printed output with a two-space indent.
    #[must_use]
    pub fn pretty() -> Self {
        XmlOptions {
            indent: "  ".to_string(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_root_tag(mut self, tag: &str) -> Self {
        self.root_tag = Some(tag.to_string());
        self
    }

    #[must_use]
    pub fn with_element_tag(mut self, tag: &str) -> Self {
        self.element_tag = Some(tag.to_string());
        self
    }

    /// Sets the indent unit. An empty string switches back to compact output.
    #[must_use]
    pub fn with_indent(mut self, indent: &str) -> Self {
        self.indent = indent.to_string();
        self
    }

    /// Sets the line prefix. Only affects pretty-printed output.
    #[must_use]
    pub fn with_prefix(mut self, prefix: &str) -> Self {
        self.prefix = prefix.to_string();
        self
    }

    #[must_use]
    pub fn with_escaping(mut self, escaping: Escaping) -> Self {
        self.escaping = escaping;
        self
    }

    /// Returns `true` when output is pretty-printed.
    #[must_use]
    pub fn is_pretty(&self) -> bool {
        !self.indent.is_empty()
    }

    /// The sanitized root tag.
    pub(crate) fn root_tag(&self) -> Cow<'_, str> {
        sanitize(self.root_tag.as_deref().unwrap_or(DEFAULT_ROOT_TAG))
    }

    /// The sanitized element tag.
    pub(crate) fn element_tag(&self) -> Cow<'_, str> {
        sanitize(self.element_tag.as_deref().unwrap_or(DEFAULT_ELEMENT_TAG))
    }
}
