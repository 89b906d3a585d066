//! # Block Segmentation
//!
//! Line-oriented, single forward scan with no backtracking.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line is classified into a
//!    `LineClass` from local facts only, in strict priority order: code fence
//!    marker, heading, ordered item, unordered item, blank, text.
//!
//! 2. **Block Construction** (`builder`): a `BlockBuilder` keeps at most one
//!    open multi-line block (a list run or a code fence) and emits
//!    `BlockNode`s as blocks open and close.
//!
//! ## Modules
//!
//! - **`types`**: Core types (`Block`, `BlockNode`, `HeadingLevel`)
//! - **`kinds`**: Block-specific types with owned markers (CodeFence, Heading, lists)
//! - **`classify`**: `MarkdownLineClassifier` produces `LineClass` for each line
//! - **`builder`**: `BlockBuilder` state machine for block construction
//!
//! ## Key Invariants
//!
//! - Every source line belongs to exactly one block
//! - Code fences are raw zones: lines inside are kept verbatim
//! - Paragraphs are never merged; each text line is its own paragraph
//! - A list run ends on the first line that is not an item of the same list type

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, LineKind, MarkdownLineClassifier};
pub use types::{Block, BlockNode, HeadingLevel};
