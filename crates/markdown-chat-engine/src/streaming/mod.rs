//! # Streaming Delivery
//!
//! Simulates an assistant reply arriving incrementally: a complete target
//! string is handed out as ever-longer prefixes, a fixed number of characters
//! per tick, at a fixed cadence.
//!
//! ## Scheduling Model
//!
//! Everything runs on one logical thread. The [`StreamEngine`] owns a virtual
//! clock and a registry of active sessions keyed by target id; time only moves
//! when the caller advances it (or calls `run_blocking`, which sleeps in real
//! time between deadlines). Ticks fire in deadline order, so sessions for
//! different targets interleave deterministically.
//!
//! ## Session Lifecycle
//!
//! ```text
//! Idle --start--> Active --tick--> Active ... --tick (full text)--> Done
//!                   |
//!                   +--cancel / start(same id)--> Idle
//! ```
//!
//! Starting a session for an id that is already streaming cancels the old
//! session first; at most one session exists per id.

pub mod engine;
pub mod session;
pub mod settings;

pub use engine::{StartOutcome, StreamEngine};
pub use session::PartialCallback;
pub use settings::{StreamError, StreamSettings};
