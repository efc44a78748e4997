//! The state machine: current state, transition table, and undo/redo history.
//!
//! # Key Concepts
//!
//! - **Forward moves**: `change_state` and `trigger` record the state being
//!   left and invalidate any redo history
//! - **History moves**: `undo` and `redo` shift states between the two
//!   history stacks without recording anything else
//! - **Reset**: returns to the initial state and forgets all history

pub mod error;
mod state_machine;

pub use error::MachineError;
pub use state_machine::StateMachine;
