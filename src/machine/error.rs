//! Errors raised by state machine operations.

use thiserror::Error;

/// Errors that can occur when moving a machine between states.
///
/// Both errors leave the machine exactly as it was before the call.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MachineError {
    #[error("Invalid state '{state}': not a configured state")]
    InvalidState { state: String },

    #[error("Invalid transition: no event '{event}' from state '{state}'")]
    InvalidTransition { event: String, state: String },
}
