//! Statewise: a declarative finite-state machine with undo/redo
//!
//! A machine is built from a static transition table: the initial state and,
//! for every state, the events it reacts to and where each event leads. The
//! machine tracks the current state, applies transitions, and keeps a
//! single-step undo/redo history of state changes.
//!
//! # Core Concepts
//!
//! - **Configuration**: caller-supplied `MachineConfig`, built in code or
//!   loaded from JSON, validated once at construction
//! - **Case-insensitive names**: states and events match regardless of case;
//!   the current state is stored lowercase
//! - **History**: forward moves are undoable; undone moves are redoable until
//!   the next forward move
//!
//! # Example
//!
//! ```rust
//! use statewise::{MachineConfig, StateMachine};
//!
//! let config = MachineConfig::from_json(r#"{
//!     "initial": "normal",
//!     "states": {
//!         "normal":   { "transitions": { "study": "busy" } },
//!         "busy":     { "transitions": { "get_tired": "sleeping", "get_hungry": "hungry" } },
//!         "hungry":   { "transitions": { "eat": "normal" } },
//!         "sleeping": { "transitions": { "get_hungry": "hungry", "get_up": "normal" } }
//!     }
//! }"#).unwrap();
//!
//! let mut machine = StateMachine::new(config).unwrap();
//! machine.trigger("study").unwrap();
//! machine.trigger("get_hungry").unwrap();
//! assert_eq!(machine.current_state(), "hungry");
//!
//! assert!(machine.undo());
//! assert_eq!(machine.current_state(), "busy");
//! assert_eq!(machine.get_states(Some("get_hungry")), vec!["busy", "sleeping"]);
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod machine;

// Re-export commonly used types
pub use config::{ConfigError, MachineConfig, StateConfig};
pub use crate::core::{History, StateName};
pub use machine::{MachineError, StateMachine};
