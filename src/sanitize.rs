//! Element name sanitization.
//!
//! Mapping keys are arbitrary strings, while element names must follow the XML 1.0
//! `Name` production. [`sanitize`] turns any string into a legal name:
//!
//! 1. An empty string becomes [`UNNAMED_ELEMENT`].
//! 2. Every character outside `NameChar` is replaced with `_`.
//! 3. If the first character is not a `NameStartChar` (a digit, `-`, `.`, ...), `_` is
//!    prepended.
//!
//! Names with the reserved `xml` prefix are left alone so keys that used it on purpose
//! survive a round trip. `:` is legal and passes through untouched.
//!
//! ```rust
//! use anyxml::sanitize;
//!
//! assert_eq!(sanitize("1st-name!"), "_1st-name_");
//! assert_eq!(sanitize("valid_name"), "valid_name");
//! assert_eq!(sanitize(""), "_unnamed");
//! ```

use std::borrow::Cow;

/// Name used for empty keys and tags.
pub const UNNAMED_ELEMENT: &str = "_unnamed";

/// Maps an arbitrary string to a legal element name.
///
/// Borrows the input when it is already legal. The result is a fixed point:
/// `sanitize(&sanitize(s)) == sanitize(s)`.
#[must_use]
pub fn sanitize(raw: &str) -> Cow<'_, str> {
    if raw.is_empty() {
        return Cow::Borrowed(UNNAMED_ELEMENT);
    }

    let name = if is_legal_name(raw) {
        Cow::Borrowed(raw)
    } else {
        let mut name = String::with_capacity(raw.len() + 1);
        for (i, ch) in raw.chars().enumerate() {
            if !is_name_char(ch) {
                name.push('_');
                continue;
            }
            if i == 0 && !is_name_start_char(ch) {
                name.push('_');
            }
            name.push(ch);
        }
        Cow::Owned(name)
    };

    if has_reserved_prefix(&name) {
        tracing::debug!(name = %name, "element name uses the reserved `xml` prefix");
    }
    name
}

fn is_legal_name(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if is_name_start_char(first) => chars.all(is_name_char),
        _ => false,
    }
}

fn has_reserved_prefix(name: &str) -> bool {
    name.len() >= 3 && name.as_bytes()[..3].eq_ignore_ascii_case(b"xml")
}

/// `NameStartChar` from XML 1.0 (fifth edition).
pub(crate) fn is_name_start_char(ch: char) -> bool {
    matches!(ch,
        ':' | 'A'..='Z' | '_' | 'a'..='z'
        | '\u{C0}'..='\u{D6}'
        | '\u{D8}'..='\u{F6}'
        | '\u{F8}'..='\u{2FF}'
        | '\u{370}'..='\u{37D}'
        | '\u{37F}'..='\u{1FFF}'
        | '\u{200C}'..='\u{200D}'
        | '\u{2070}'..='\u{218F}'
        | '\u{2C00}'..='\u{2FEF}'
        | '\u{3001}'..='\u{D7FF}'
        | '\u{F900}'..='\u{FDCF}'
        | '\u{FDF0}'..='\u{FFFD}'
        | '\u{10000}'..='\u{EFFFF}')
}

/// `NameChar` from XML 1.0 (fifth edition).
pub(crate) fn is_name_char(ch: char) -> bool {
    is_name_start_char(ch)
        || matches!(ch,
            '-' | '.' | '0'..='9' | '\u{B7}'
            | '\u{300}'..='\u{36F}'
            | '\u{203F}'..='\u{2040}')
}
