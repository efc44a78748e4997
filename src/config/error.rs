//! Configuration errors.

use thiserror::Error;

/// Errors that can occur when loading, building, or validating a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("No states defined. Add at least one state")]
    NoStates,

    #[error("State '{name}' is declared more than once (names are case-insensitive)")]
    DuplicateState { name: String },

    #[error("Initial state '{initial}' is not a configured state")]
    UnknownInitialState { initial: String },

    #[error("Transition '{event}' of state '{state}' targets unknown state '{target}'")]
    UnknownTarget {
        state: String,
        event: String,
        target: String,
    },

    #[error("Invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),
}
