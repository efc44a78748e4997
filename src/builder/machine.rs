//! Builder for constructing state machines.

use crate::builder::state::StateBuilder;
use crate::config::{ConfigError, MachineConfig};
use crate::machine::StateMachine;

/// Builder for constructing state machines with a fluent API.
#[derive(Clone, Debug, Default)]
pub struct MachineBuilder {
    initial: Option<String>,
    states: Vec<(String, StateBuilder)>,
}

impl MachineBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: impl Into<String>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Declare a state and its transitions.
    pub fn state(mut self, name: impl Into<String>, state: StateBuilder) -> Self {
        self.states.push((name.into(), state));
        self
    }

    /// Produce a validated configuration.
    pub fn into_config(self) -> Result<MachineConfig, ConfigError> {
        let initial = self.initial.ok_or(ConfigError::MissingInitialState)?;
        let config = MachineConfig {
            initial,
            states: self
                .states
                .into_iter()
                .map(|(name, state)| (name, state.build()))
                .collect(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Build the state machine.
    /// Returns an error if required fields are missing or the table is inconsistent.
    pub fn build(self) -> Result<StateMachine, ConfigError> {
        StateMachine::new(self.into_config()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_validates_required_fields() {
        let result = MachineBuilder::new()
            .state("normal", StateBuilder::new())
            .build();

        assert!(matches!(result, Err(ConfigError::MissingInitialState)));
    }

    #[test]
    fn builder_requires_states() {
        let result = MachineBuilder::new().initial("normal").build();

        assert!(matches!(result, Err(ConfigError::NoStates)));
    }

    #[test]
    fn builder_rejects_unknown_target() {
        let result = MachineBuilder::new()
            .initial("normal")
            .state("normal", StateBuilder::new().on("study", "busy"))
            .build();

        assert!(matches!(result, Err(ConfigError::UnknownTarget { .. })));
    }

    #[test]
    fn fluent_api_builds_machine() {
        let mut machine = MachineBuilder::new()
            .initial("Normal")
            .state("Normal", StateBuilder::new().on("study", "Busy"))
            .state("Busy", StateBuilder::new().on("rest", "Normal"))
            .build()
            .unwrap();

        assert_eq!(machine.current_state(), "normal");
        machine.trigger("study").unwrap();
        assert_eq!(machine.current_state(), "busy");
        assert_eq!(machine.get_states(None), vec!["Normal", "Busy"]);
    }

    #[test]
    fn into_config_keeps_declaration_order() {
        let config = MachineBuilder::new()
            .initial("b")
            .state("b", StateBuilder::new().on("go", "a"))
            .state("a", StateBuilder::new())
            .into_config()
            .unwrap();

        assert_eq!(config.initial, "b");
        assert_eq!(config.state_names(), vec!["b", "a"]);
    }
}
