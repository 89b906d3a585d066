use std::sync::OnceLock;

use regex::Regex;

/// Ordered list items: `1. `, `42. ` and so on.
pub struct OrderedList;

impl OrderedList {
    /// ASCII digits only, then a dot and one whitespace character.
    pub const MARKER_PATTERN: &'static str = r"^[0-9]+\.\s";

    fn marker() -> &'static Regex {
        static MARKER: OnceLock<Regex> = OnceLock::new();
        MARKER.get_or_init(|| Regex::new(Self::MARKER_PATTERN).expect("Invalid ordered list regex"))
    }

    /// Returns the item text after the numeric marker, if `line` is an item.
    ///
    /// The line is trimmed first; numbers are not checked for sequence.
    pub fn item(line: &str) -> Option<&str> {
        let trimmed = line.trim();
        Self::marker()
            .find(trimmed)
            .map(|m| &trimmed[m.end()..])
    }
}

/// Unordered list items: `- ` or `* `.
pub struct UnorderedList;

impl UnorderedList {
    pub const MARKERS: [&'static str; 2] = ["- ", "* "];

    /// Returns the item text after the two-character marker, if `line` is an item.
    pub fn item(line: &str) -> Option<&str> {
        let trimmed = line.trim();
        Self::MARKERS
            .iter()
            .find_map(|marker| trimmed.strip_prefix(marker))
    }
}
