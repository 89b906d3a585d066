use crate::parsing::lines::LineRef;

use super::{
    HeadingLevel,
    kinds::{CodeFence, FenceSig, Heading, OrderedList, UnorderedList},
};

/// What a single line looks like, judged without any context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// A line whose trimmed form starts with three backticks.
    FenceMarker(FenceSig),
    Heading { level: HeadingLevel, text: &'a str },
    OrderedItem(&'a str),
    UnorderedItem(&'a str),
    Blank,
    Text,
}

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to surrounding context. Inside an open code fence the
/// builder only looks at whether the line is a fence marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineClass<'a> {
    /// Index of this line in the source.
    pub line: usize,
    /// The raw line text.
    pub text: &'a str,
    pub kind: LineKind<'a>,
}

/// Classifies individual lines for the block parsing phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a line into a [`LineClass`], first match wins.
    pub fn classify<'a>(&self, lr: &LineRef<'a>) -> LineClass<'a> {
        let text = lr.text;
        let kind = if let Some(sig) = CodeFence::sig(text) {
            LineKind::FenceMarker(sig)
        } else if let Some((level, rest)) = Heading::detect(text) {
            LineKind::Heading { level, text: rest }
        } else if let Some(item) = OrderedList::item(text) {
            LineKind::OrderedItem(item)
        } else if let Some(item) = UnorderedList::item(text) {
            LineKind::UnorderedItem(item)
        } else if text.trim().is_empty() {
            LineKind::Blank
        } else {
            LineKind::Text
        };

        LineClass {
            line: lr.index,
            text,
            kind,
        }
    }
}
