/// A reference to a single source line and its index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRef<'a> {
    /// Zero-based line index in the source.
    pub index: usize,
    /// The line text without its line terminator.
    pub text: &'a str,
}

/// Returns an iterator over the lines of `text` with their indices.
///
/// Lines are separated by `\n` or `\r\n`, and the terminator is not part of
/// the line text.
/// A final newline does not start an extra empty line, so `""` has no lines
/// and `"a\n"` has exactly one.
pub fn lines_with_spans(text: &str) -> impl Iterator<Item = LineRef<'_>> + '_ {
    text.lines()
        .enumerate()
        .map(|(index, text)| LineRef { index, text })
}

/// A half-open range `[start, end)` of line indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LineSpan {
    /// First line consumed by the block.
    pub start: usize,
    /// One past the last line consumed by the block.
    pub end: usize,
}

impl LineSpan {
    /// Returns the number of lines. Uses saturating subtraction for safety.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span is empty (start >= end).
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }
}
