//! Escaping policies for element text.
//!
//! [`Escaping::Standard`] replaces the five markup characters `< > & ' "` with their
//! predefined entities. [`Escaping::Extended`] does the same and also writes an explicit
//! set of extra characters as hexadecimal character references, for consumers that
//! normalize or reject raw whitespace and non-ASCII text.
//!
//! ```rust
//! use anyxml::{Escaping, ExtraEscapes};
//!
//! assert_eq!(Escaping::Standard.escape("a<b>&c"), "a&lt;b&gt;&amp;c");
//!
//! let strict = Escaping::strict();
//! assert_eq!(strict.escape("line\nbreak"), "line&#xA;break");
//!
//! let ascii = Escaping::Extended(ExtraEscapes::new().non_ascii(true));
//! assert_eq!(ascii.escape("café"), "caf&#xE9;");
//! ```

use std::borrow::Cow;

/// Characters escaped on top of the standard five.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExtraEscapes {
    chars: Vec<char>,
    non_ascii: bool,
}

impl ExtraEscapes {
    /// An empty set: behaves like [`Escaping::Standard`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a single character to the set.
    #[must_use]
    pub fn with_char(mut self, ch: char) -> Self {
        if !self.chars.contains(&ch) {
            self.chars.push(ch);
        }
        self
    }

    /// Adds every character of `chars` to the set.
    #[must_use]
    pub fn with_chars<I: IntoIterator<Item = char>>(self, chars: I) -> Self {
        chars.into_iter().fold(self, Self::with_char)
    }

    /// Also escapes every character outside ASCII.
    #[must_use]
    pub fn non_ascii(mut self, enabled: bool) -> Self {
        self.non_ascii = enabled;
        self
    }

    /// Returns `true` if `ch` is escaped by this set.
    #[must_use]
    pub fn contains(&self, ch: char) -> bool {
        (self.non_ascii && !ch.is_ascii()) || self.chars.contains(&ch)
    }
}

/// How element text is escaped.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Escaping {
    /// `< > & ' "` only.
    #[default]
    Standard,
    /// The standard five plus the given characters as `&#x..;` references.
    Extended(ExtraEscapes),
}

impl Escaping {
    /// The standard five plus tab, line feed and carriage return, which attribute-value
    /// normalization and many line-oriented consumers would otherwise rewrite.
    #[must_use]
    pub fn strict() -> Self {
        Escaping::Extended(ExtraEscapes::new().with_chars(['\t', '\n', '\r']))
    }

    /// Escapes `text` according to this policy, borrowing when nothing changes.
    #[must_use]
    pub fn escape<'a>(&self, text: &'a str) -> Cow<'a, str> {
        match self {
            Escaping::Standard => quick_xml::escape::escape(text),
            Escaping::Extended(extra) => {
                if !text.chars().any(|ch| is_markup_char(ch) || extra.contains(ch)) {
                    return Cow::Borrowed(text);
                }
                let mut out = String::with_capacity(text.len() + 16);
                for ch in text.chars() {
                    match ch {
                        '<' => out.push_str("&lt;"),
                        '>' => out.push_str("&gt;"),
                        '&' => out.push_str("&amp;"),
                        '\'' => out.push_str("&apos;"),
                        '"' => out.push_str("&quot;"),
                        c if extra.contains(c) => {
                            out.push_str(&format!("&#x{:X};", c as u32));
                        }
                        c => out.push(c),
                    }
                }
                Cow::Owned(out)
            }
        }
    }
}

fn is_markup_char(ch: char) -> bool {
    matches!(ch, '<' | '>' | '&' | '\'' | '"')
}
