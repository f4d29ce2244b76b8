//! Indentation state threaded through the encoder.
//!
//! Compact and pretty output share one algorithm: an empty indent unit turns every
//! line break into a no-op.

use crate::{Error, Result};

/// Per-call cursor tracking nesting depth and whether the current line already holds
/// content.
#[derive(Clone, Debug)]
pub struct Indentation {
    unit: String,
    prefix: String,
    depth: usize,
    mid_line: bool,
}

impl Indentation {
    /// Pretty-printing state with `unit` repeated per level and `prefix` starting each line.
    ///
    /// An empty `unit` gives compact output and the prefix is ignored.
    pub fn new(unit: &str, prefix: &str) -> Self {
        Indentation {
            unit: unit.to_string(),
            prefix: prefix.to_string(),
            depth: 0,
            mid_line: false,
        }
    }

    /// Compact state: no line breaks, no indentation.
    pub fn compact() -> Self {
        Self::new("", "")
    }

    #[inline]
    pub fn is_pretty(&self) -> bool {
        !self.unit.is_empty()
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn enter(&mut self) {
        self.depth += 1;
    }

    pub fn leave(&mut self) -> Result<()> {
        self.depth = self.depth.checked_sub(1).ok_or(Error::IndentUnderflow)?;
        Ok(())
    }

    /// `prefix + unit * depth`, or an empty string in compact mode.
    pub fn current_indent(&self) -> String {
        let mut indent = String::new();
        self.write_indent(&mut indent);
        indent
    }

    fn write_indent(&self, out: &mut String) {
        if !self.is_pretty() {
            return;
        }
        out.push_str(&self.prefix);
        for _ in 0..self.depth {
            out.push_str(&self.unit);
        }
    }

    #[inline]
    pub fn mark_mid_line(&mut self) {
        self.mid_line = true;
    }

    #[inline]
    pub fn clear_mid_line(&mut self) {
        self.mid_line = false;
    }

    #[inline]
    pub fn is_mid_line(&self) -> bool {
        self.mid_line
    }

    /// Starts a fresh line at the current depth.
    ///
    /// In pretty mode a newline is written only if the current line already holds
    /// content, so the first element of a document starts right after the prefix.
    pub fn break_line(&mut self, out: &mut String) {
        if self.is_pretty() {
            if self.mid_line {
                out.push('\n');
            }
            self.write_indent(out);
        }
        self.clear_mid_line();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_indent() {
        let mut state = Indentation::new("  ", "> ");
        assert_eq!(state.current_indent(), "> ");
        state.enter();
        state.enter();
        assert_eq!(state.current_indent(), ">     ");
        assert_eq!(state.depth(), 2);
    }

    #[test]
    fn test_compact_indent_is_empty() {
        let mut state = Indentation::new("", "> ");
        state.enter();
        assert!(!state.is_pretty());
        assert_eq!(state.current_indent(), "");
    }

    #[test]
    fn test_leave_underflow() {
        let mut state = Indentation::compact();
        state.enter();
        assert!(state.leave().is_ok());
        assert_eq!(state.leave(), Err(Error::IndentUnderflow));
        assert_eq!(state.depth(), 0);
    }

    #[test]
    fn test_break_line() {
        let mut state = Indentation::new("\t", "");
        let mut out = String::new();

        state.break_line(&mut out);
        out.push_str("<a>");
        state.mark_mid_line();
        state.enter();
        state.break_line(&mut out);
        assert!(!state.is_mid_line());
        assert_eq!(out, "<a>\n\t");
    }

    #[test]
    fn test_break_line_compact() {
        let mut state = Indentation::compact();
        let mut out = String::from("<a>");
        state.mark_mid_line();
        state.break_line(&mut out);
        assert_eq!(out, "<a>");
        assert!(!state.is_mid_line());
    }
}
