//! Tokenizer: raw text to an ordered sequence of lines.
//!
//! Splitting follows plain separator semantics: the text is cut at every
//! `'\n'`, nothing is trimmed, and no trailing empty segment is dropped.
//! `""` yields `[""]` and `"a\n"` yields `["a", ""]`, so joining the lines
//! back with `'\n'` always reproduces the input.

use std::ops::Index;

/// Line separator used for both splitting and joining.
pub const LINE_BREAK: char = '\n';

/// Ordered, immutable sequence of lines borrowed from a source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineSequence<'a> {
    lines: Vec<&'a str>,
}

impl<'a> LineSequence<'a> {
    /// Number of lines. Never zero.
    #[inline]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Always false: even the empty text has one (empty) line.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Lines as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[&'a str] {
        &self.lines
    }

    /// Iterate over the lines in document order.
    pub fn iter(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.lines.iter().copied()
    }

    /// Line at a 0-based index.
    #[inline]
    pub fn get(&self, idx: usize) -> Option<&'a str> {
        self.lines.get(idx).copied()
    }

    /// Join the lines with `'\n'`, reproducing the tokenized text.
    pub fn join(&self) -> String {
        self.lines.join("\n")
    }
}

impl<'a> Index<usize> for LineSequence<'a> {
    type Output = str;

    #[inline]
    fn index(&self, idx: usize) -> &str {
        self.lines[idx]
    }
}

impl<'a> From<&'a str> for LineSequence<'a> {
    fn from(text: &'a str) -> Self {
        tokenize(text)
    }
}

/// Split `text` into lines on `'\n'` exactly.
pub fn tokenize(text: &str) -> LineSequence<'_> {
    LineSequence {
        lines: text.split(LINE_BREAK).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_is_one_empty_line() {
        let seq = tokenize("");
        assert_eq!(seq.as_slice(), &[""]);
        assert_eq!(seq.len(), 1);
        assert!(!seq.is_empty());
    }

    #[test]
    fn test_trailing_newline_keeps_empty_segment() {
        assert_eq!(tokenize("a\n").as_slice(), &["a", ""]);
        assert_eq!(tokenize("\n").as_slice(), &["", ""]);
        assert_eq!(tokenize("a\n\nb").as_slice(), &["a", "", "b"]);
    }

    #[test]
    fn test_no_whitespace_normalization() {
        let seq = tokenize("  x \r\n\ty");
        assert_eq!(seq.as_slice(), &["  x \r", "\ty"]);
    }

    #[test]
    fn test_join_round_trips() {
        for text in ["", "\n", "a", "a\n", "\na\n\n", "x\r\ny", "üñí\ncode"] {
            assert_eq!(tokenize(text).join(), text);
        }
    }

    #[test]
    fn test_index_and_get() {
        let seq = tokenize("one\ntwo");
        assert_eq!(&seq[1], "two");
        assert_eq!(seq.get(0), Some("one"));
        assert_eq!(seq.get(2), None);
        assert_eq!(seq.iter().collect::<Vec<_>>(), vec!["one", "two"]);
    }
}
