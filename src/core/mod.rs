//! Core building blocks of the state machine.
//!
//! - Normalized state identifiers via `StateName`
//! - Undo/redo history via `History`
//!
//! Nothing in this module knows about the transition table; the machine
//! composes these pieces with a validated configuration.

mod history;
mod state;

pub use history::{History, HistoryMove};
pub use state::{eq_ignore_case, normalize, StateName};
