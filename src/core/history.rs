//! Undo/redo history of visited states.
//!
//! The history holds two stacks: states that were left by forward moves
//! (undo) and states that were left by undo moves (redo). Both stacks keep
//! the most recent entry last.

use super::state::StateName;
use serde::{Deserialize, Serialize};

/// Direction of a move through the history.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HistoryMove {
    /// Back to the most recently left state.
    Undo,
    /// Forward again to the most recently undone state.
    Redo,
}

/// Ordered undo and redo stacks.
///
/// # Example
///
/// ```rust
/// use statewise::core::{History, HistoryMove, StateName};
///
/// let mut history = History::new();
/// history.record(StateName::new("normal"));
///
/// let previous = history.shift(HistoryMove::Undo, StateName::new("busy"));
/// assert_eq!(previous, Some(StateName::new("normal")));
/// assert!(history.can_redo());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct History {
    undo: Vec<StateName>,
    redo: Vec<StateName>,
}

impl History {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the state left by a forward move.
    ///
    /// Any forward move invalidates the redo stack.
    pub fn record(&mut self, left: StateName) {
        self.redo.clear();
        self.undo.push(left);
    }

    /// Drop the redo stack without recording anything.
    pub fn discard_redo(&mut self) {
        self.redo.clear();
    }

    /// Move through the history from `current`.
    ///
    /// Pops the target off the source stack and pushes `current` onto the
    /// opposite stack. Returns `None`, leaving both stacks untouched, when
    /// the source stack is empty.
    pub fn shift(&mut self, direction: HistoryMove, current: StateName) -> Option<StateName> {
        let (from, to) = match direction {
            HistoryMove::Undo => (&mut self.undo, &mut self.redo),
            HistoryMove::Redo => (&mut self.redo, &mut self.undo),
        };
        let target = from.pop()?;
        to.push(current);
        Some(target)
    }

    /// Empty both stacks.
    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// States available for undo, most recent last.
    pub fn undo_stack(&self) -> &[StateName] {
        &self.undo
    }

    /// States available for redo, most recent last.
    pub fn redo_stack(&self) -> &[StateName] {
        &self.redo
    }
}
