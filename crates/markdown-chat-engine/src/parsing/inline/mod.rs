//! # Inline Tokenization
//!
//! Regex-driven inline tokenization with a fixed priority list.
//!
//! ## Architecture
//!
//! Inline parsing is separate from block parsing and runs over the text of
//! one heading, paragraph or list item at a time.
//!
//! Each iteration tries the patterns in priority order against the whole
//! unconsumed remainder and applies the **first pattern that matches
//! anywhere**, not the match that starts earliest. Text before the match is
//! emitted as plain text and scanning resumes after it.
//!
//! ## Modules
//!
//! - **`types`**: `InlineSpan` enum (PlainText, Bold, Italic, InlineCode, Link)
//! - **`kinds`**: `InlineKind` and the owned pattern for each construct
//! - **`parser`**: `parse_inline()` main entry point
//!
//! ## Priority Over Position
//!
//! In `a *b* c **d** e` bold wins the first scan even though the italic match
//! starts earlier, so `*b*` ends up inside the leading plain text.

pub mod kinds;
pub mod parser;
pub mod types;

pub use kinds::InlineKind;
pub use parser::parse_inline;
pub use types::InlineSpan;
