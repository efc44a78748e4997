//! Builder API for ergonomic configuration.
//!
//! This module provides fluent builders and a macro for assembling a
//! [`MachineConfig`](crate::config::MachineConfig) in code instead of
//! loading it from JSON.

pub mod machine;
pub mod macros;
pub mod state;

pub use machine::MachineBuilder;
pub use state::StateBuilder;
