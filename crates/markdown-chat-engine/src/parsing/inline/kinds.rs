//! # Inline Kinds
//!
//! Each inline construct owns its pattern, per the "knowledge ownership"
//! rule used for block kinds: the parser never hardcodes delimiters.
//!
//! | Kind       | Pattern                  |
//! |------------|--------------------------|
//! | Bold       | `\*\*(.+?)\*\*`          |
//! | Italic     | `\*(.+?)\*`              |
//! | InlineCode | `` `(.+?)` ``            |
//! | Link       | `\[(.+?)\]\((.+?)\)`     |
//!
//! All patterns are non-greedy and never cross a line terminator: `.` in the
//! table stands for any character except `\r`, `\n`, U+2028 and U+2029.

use std::sync::OnceLock;

use regex::{Captures, Regex};

use super::types::InlineSpan;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineKind {
    Bold,
    Italic,
    InlineCode,
    Link,
}

impl InlineKind {
    /// The order in which kinds are tried on every scan.
    pub const PRIORITY: [InlineKind; 4] = [
        InlineKind::Bold,
        InlineKind::Italic,
        InlineKind::InlineCode,
        InlineKind::Link,
    ];

    pub fn pattern(self) -> &'static str {
        match self {
            InlineKind::Bold => r"\*\*([^\r\n\x{2028}\x{2029}]+?)\*\*",
            InlineKind::Italic => r"\*([^\r\n\x{2028}\x{2029}]+?)\*",
            InlineKind::InlineCode => r"`([^\r\n\x{2028}\x{2029}]+?)`",
            InlineKind::Link => {
                r"\[([^\r\n\x{2028}\x{2029}]+?)\]\(([^\r\n\x{2028}\x{2029}]+?)\)"
            }
        }
    }

    pub fn regex(self) -> &'static Regex {
        static BOLD: OnceLock<Regex> = OnceLock::new();
        static ITALIC: OnceLock<Regex> = OnceLock::new();
        static CODE: OnceLock<Regex> = OnceLock::new();
        static LINK: OnceLock<Regex> = OnceLock::new();

        let cell = match self {
            InlineKind::Bold => &BOLD,
            InlineKind::Italic => &ITALIC,
            InlineKind::InlineCode => &CODE,
            InlineKind::Link => &LINK,
        };
        cell.get_or_init(|| Regex::new(self.pattern()).expect("Invalid inline regex"))
    }

    /// Builds the span for a successful match of this kind's pattern.
    pub fn span(self, caps: &Captures<'_>) -> InlineSpan {
        let group = |i: usize| caps.get(i).map_or("", |m| m.as_str()).to_string();
        match self {
            InlineKind::Bold => InlineSpan::Bold(group(1)),
            InlineKind::Italic => InlineSpan::Italic(group(1)),
            InlineKind::InlineCode => InlineSpan::InlineCode(group(1)),
            InlineKind::Link => InlineSpan::Link {
                text: group(1),
                url: group(2),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patterns_compile() {
        for kind in InlineKind::PRIORITY {
            assert!(!kind.regex().as_str().is_empty());
        }
    }

    #[test]
    fn bold_is_tried_before_italic() {
        assert_eq!(InlineKind::PRIORITY[0], InlineKind::Bold);
        assert_eq!(InlineKind::PRIORITY[1], InlineKind::Italic);
    }

    #[test]
    fn link_span_takes_both_groups() {
        let caps = InlineKind::Link
            .regex()
            .captures("[docs](https://example.com)")
            .unwrap();
        assert_eq!(
            InlineKind::Link.span(&caps),
            InlineSpan::Link {
                text: "docs".into(),
                url: "https://example.com".into()
            }
        );
    }

    #[test]
    fn patterns_do_not_cross_newlines() {
        assert!(InlineKind::Bold.regex().captures("**a\nb**").is_none());
    }

    #[test]
    fn patterns_do_not_cross_lone_carriage_returns() {
        for (kind, text) in [
            (InlineKind::Bold, "**a\rb**"),
            (InlineKind::Italic, "*a\rb*"),
            (InlineKind::InlineCode, "`a\rb`"),
            (InlineKind::Link, "[a\rb](u)"),
            (InlineKind::Link, "[a](u\u{2028}v)"),
        ] {
            assert!(kind.regex().captures(text).is_none(), "{kind:?} matched {text:?}");
        }
    }
}
