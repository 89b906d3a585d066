//! # Snapshot Testing Support
//!
//! Utilities for testing the parser via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: Converts a parsed document to a stable, human-readable
//!   `Snap` outline for `insta` snapshot testing
//! - **`invariants`**: Runtime checks for parser correctness (every line is
//!   covered by exactly one block, block text reconstructs the source lines
//!   apart from stripped markers)

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::{Snap, normalize};
