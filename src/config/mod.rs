//! Declarative machine configuration.
//!
//! A configuration names the initial state and, for every state, the events
//! it reacts to and the state each event leads to. It is supplied once when
//! a machine is constructed and never mutated by the machine.
//!
//! The JSON form mirrors the struct layout:
//!
//! ```json
//! {
//!   "initial": "normal",
//!   "states": {
//!     "normal": { "transitions": { "study": "busy" } },
//!     "busy":   { "transitions": { "get_hungry": "normal" } }
//!   }
//! }
//! ```

use crate::core::{eq_ignore_case, normalize};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub mod error;
mod ordered;

pub use error::ConfigError;

/// Transitions declared on a single state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateConfig {
    /// Event name to target state name, in declaration order
    #[serde(default, with = "ordered")]
    pub transitions: Vec<(String, String)>,
}

impl StateConfig {
    /// Target of the first transition whose event matches case-insensitively.
    pub fn target_for(&self, event: &str) -> Option<&str> {
        self.transitions
            .iter()
            .find(|(name, _)| eq_ignore_case(name, event))
            .map(|(_, target)| target.as_str())
    }

    /// Number of declared transitions matching `event` case-insensitively.
    pub fn count_event(&self, event: &str) -> usize {
        self.transitions
            .iter()
            .filter(|(name, _)| eq_ignore_case(name, event))
            .count()
    }
}

/// Complete machine configuration.
///
/// # Example
///
/// ```rust
/// use statewise::config::MachineConfig;
///
/// let config = MachineConfig::from_json(r#"{
///     "initial": "Off",
///     "states": {
///         "Off": { "transitions": { "toggle": "On" } },
///         "On":  { "transitions": { "toggle": "Off" } }
///     }
/// }"#).unwrap();
///
/// assert_eq!(config.state_names(), vec!["Off", "On"]);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineConfig {
    /// Name of the state a new or reset machine starts in
    pub initial: String,

    /// State name to its transitions, in declaration order
    #[serde(with = "ordered")]
    pub states: Vec<(String, StateConfig)>,
}

impl MachineConfig {
    /// Parse a configuration from JSON.
    ///
    /// Parsing does not validate; see [`MachineConfig::validate`].
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Render the configuration as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Declared state names, original casing, declaration order.
    pub fn state_names(&self) -> Vec<&str> {
        self.states.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// First declared state matching `name` case-insensitively.
    pub fn find_state(&self, name: &str) -> Option<(&str, &StateConfig)> {
        self.states
            .iter()
            .find(|(declared, _)| eq_ignore_case(declared, name))
            .map(|(declared, state)| (declared.as_str(), state))
    }

    pub fn contains_state(&self, name: &str) -> bool {
        self.find_state(name).is_some()
    }

    /// Check the construction contract the machine relies on.
    ///
    /// The initial state and every transition target must name a configured
    /// state, and no two states may share a name case-insensitively.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.states.is_empty() {
            return Err(ConfigError::NoStates);
        }

        let mut seen = HashSet::new();
        for (name, _) in &self.states {
            if !seen.insert(normalize(name)) {
                return Err(ConfigError::DuplicateState { name: name.clone() });
            }
        }

        if !seen.contains(&normalize(&self.initial)) {
            return Err(ConfigError::UnknownInitialState {
                initial: self.initial.clone(),
            });
        }

        for (name, state) in &self.states {
            for (event, target) in &state.transitions {
                if !seen.contains(&normalize(target)) {
                    return Err(ConfigError::UnknownTarget {
                        state: name.clone(),
                        event: event.clone(),
                        target: target.clone(),
                    });
                }
            }
        }

        Ok(())
    }
}
