//! Builder for a single state's transitions.

use crate::config::StateConfig;

/// Builder for the transitions of one state.
///
/// # Example
///
/// ```
/// use statewise::builder::StateBuilder;
///
/// let state = StateBuilder::new()
///     .on("get_tired", "sleeping")
///     .on("get_hungry", "hungry")
///     .build();
///
/// assert_eq!(state.target_for("GET_HUNGRY"), Some("hungry"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct StateBuilder {
    transitions: Vec<(String, String)>,
}

impl StateBuilder {
    /// Create a builder for a state with no transitions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a transition taken when `event` fires.
    pub fn on(mut self, event: impl Into<String>, target: impl Into<String>) -> Self {
        self.transitions.push((event.into(), target.into()));
        self
    }

    pub fn build(self) -> StateConfig {
        StateConfig {
            transitions: self.transitions,
        }
    }
}
