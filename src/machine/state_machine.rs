//! State machine driven by a static transition table.

use crate::config::{ConfigError, MachineConfig};
use crate::core::{normalize, History, HistoryMove, StateName};
use crate::machine::error::MachineError;

/// Finite-state machine with single-step undo/redo.
///
/// The machine is constructed from a validated [`MachineConfig`] and starts
/// in its initial state. States and events are matched case-insensitively;
/// the current state is always stored in lowercase.
///
/// # Example
///
/// ```rust
/// use statewise::machine_config;
/// use statewise::StateMachine;
///
/// let config = machine_config! {
///     initial: Idle,
///     states: {
///         Idle => { start => Running },
///         Running => { stop => Idle },
///     }
/// };
///
/// let mut machine = StateMachine::new(config).unwrap();
/// machine.trigger("START").unwrap();
/// assert_eq!(machine.current_state(), "running");
///
/// assert!(machine.undo());
/// assert_eq!(machine.current_state(), "idle");
/// assert!(machine.redo());
/// assert_eq!(machine.current_state(), "running");
/// ```
#[derive(Clone, Debug)]
pub struct StateMachine {
    config: MachineConfig,
    current: StateName,
    history: History,
}

impl StateMachine {
    /// Create a machine in the configuration's initial state.
    ///
    /// Fails if the configuration does not satisfy
    /// [`MachineConfig::validate`].
    pub fn new(config: MachineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let current = StateName::new(&config.initial);
        tracing::debug!(initial = %current, states = config.states.len(), "State machine created");
        Ok(Self {
            config,
            current,
            history: History::new(),
        })
    }

    /// Get current state (pure)
    pub fn current_state(&self) -> &StateName {
        &self.current
    }

    /// Get the configuration the machine was built from (pure)
    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    /// Get undo/redo history (pure)
    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Move directly to `state`.
    ///
    /// The name is matched case-insensitively against the configured states.
    /// On success the state being left becomes undoable and redo history is
    /// discarded.
    pub fn change_state(&mut self, state: &str) -> Result<(), MachineError> {
        if !self.config.contains_state(state) {
            return Err(MachineError::InvalidState {
                state: state.to_string(),
            });
        }
        self.apply_forward(StateName::new(state));
        Ok(())
    }

    /// Fire `event` from the current state.
    ///
    /// Uses the first transition of the current state whose event name
    /// matches case-insensitively. Targets are checked once at construction,
    /// so the resolved state is applied without further lookup.
    pub fn trigger(&mut self, event: &str) -> Result<(), MachineError> {
        let target = self
            .config
            .find_state(self.current.as_str())
            .and_then(|(_, state)| state.target_for(event))
            .map(StateName::new)
            .ok_or_else(|| MachineError::InvalidTransition {
                event: event.to_string(),
                state: self.current.to_string(),
            })?;

        tracing::debug!(event, "Event matched transition");
        self.apply_forward(target);
        Ok(())
    }

    /// Return to the initial state and clear all history.
    pub fn reset(&mut self) {
        let initial = StateName::new(&self.config.initial);
        tracing::debug!(from = %self.current, to = %initial, "Reset to initial state");
        self.current = initial;
        self.history.clear();
    }

    /// List states, optionally filtered by event.
    ///
    /// Without an event, returns every configured state name in declared
    /// casing and declaration order. With an event, returns the lowercase
    /// name of each state once per transition whose event matches
    /// case-insensitively, so a state declaring both `eat` and `EAT` appears
    /// twice.
    pub fn get_states(&self, event: Option<&str>) -> Vec<String> {
        match event {
            None => self
                .config
                .states
                .iter()
                .map(|(name, _)| name.clone())
                .collect(),
            Some(event) => self
                .config
                .states
                .iter()
                .flat_map(|(name, state)| {
                    std::iter::repeat(normalize(name)).take(state.count_event(event))
                })
                .collect(),
        }
    }

    /// Event names declared on the current state, in declaration order.
    pub fn available_events(&self) -> Vec<&str> {
        self.config
            .find_state(self.current.as_str())
            .map(|(_, state)| {
                state
                    .transitions
                    .iter()
                    .map(|(event, _)| event.as_str())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Go back to the previously left state.
    ///
    /// Returns `false`, changing nothing, when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        self.apply_history_move(HistoryMove::Undo)
    }

    /// Go forward to the most recently undone state.
    ///
    /// Returns `false`, changing nothing, when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        self.apply_history_move(HistoryMove::Redo)
    }

    /// Forget undo and redo history; the current state is kept.
    pub fn clear_history(&mut self) {
        tracing::trace!(state = %self.current, "History cleared");
        self.history.clear();
    }

    fn apply_forward(&mut self, target: StateName) {
        tracing::debug!(from = %self.current, to = %target, "State changed");
        if target == self.current {
            // Self-transition: redo is still invalidated, undo gains nothing.
            self.history.discard_redo();
            return;
        }
        let left = std::mem::replace(&mut self.current, target);
        self.history.record(left);
    }

    fn apply_history_move(&mut self, direction: HistoryMove) -> bool {
        match self.history.shift(direction, self.current.clone()) {
            Some(target) => {
                tracing::debug!(?direction, from = %self.current, to = %target, "History move");
                self.current = target;
                true
            }
            None => false,
        }
    }
}
