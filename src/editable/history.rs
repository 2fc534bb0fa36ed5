//! Command history (undo/redo) over a single document.

use super::command::EditCommand;
use crate::error::EditError;
use crate::model::{Document, Position};

/// Undo and redo stacks of executed commands.
///
/// Commands move between the stacks by value, so each one is held by
/// exactly one stack. History is linear: running a new command discards
/// everything that could have been redone.
#[derive(Debug, Clone)]
pub struct CommandHistory {
    undo_stack: Vec<EditCommand>,
    redo_stack: Vec<EditCommand>,
    max_size: usize,
}

impl Default for CommandHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandHistory {
    /// Create a new history with default max size
    pub fn new() -> Self {
        Self::with_max_size(1000)
    }

    /// Create a new history keeping at most `max_size` undoable commands
    pub fn with_max_size(max_size: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_size: max_size.max(1),
        }
    }

    /// Execute `command`, record it for undo and clear the redo stack.
    ///
    /// If execution fails the command is dropped and both stacks are left
    /// as they were.
    pub fn run(
        &mut self,
        doc: &mut Document,
        mut command: EditCommand,
    ) -> Result<Position, EditError> {
        let caret = command.execute(doc)?;
        self.undo_stack.push(command);
        if !self.redo_stack.is_empty() {
            tracing::debug!(discarded = self.redo_stack.len(), "clearing redo stack");
            self.redo_stack.clear();
        }

        // Trim if exceeded max size
        if self.undo_stack.len() > self.max_size {
            let excess = self.undo_stack.len() - self.max_size;
            self.undo_stack.drain(..excess);
        }
        Ok(caret)
    }

    /// Undo the most recent command. `Ok(None)` when there is nothing to undo.
    pub fn undo(&mut self, doc: &mut Document) -> Result<Option<Position>, EditError> {
        let Some(command) = self.undo_stack.pop() else {
            return Ok(None);
        };
        match command.undo(doc) {
            Ok(caret) => {
                tracing::debug!(
                    undo = self.undo_stack.len(),
                    redo = self.redo_stack.len() + 1,
                    "undo"
                );
                self.redo_stack.push(command);
                Ok(Some(caret))
            }
            Err(e) => {
                self.undo_stack.push(command);
                Err(e)
            }
        }
    }

    /// Re-execute the most recently undone command. `Ok(None)` when there
    /// is nothing to redo.
    pub fn redo(&mut self, doc: &mut Document) -> Result<Option<Position>, EditError> {
        let Some(mut command) = self.redo_stack.pop() else {
            return Ok(None);
        };
        match command.execute(doc) {
            Ok(caret) => {
                tracing::debug!(
                    undo = self.undo_stack.len() + 1,
                    redo = self.redo_stack.len(),
                    "redo"
                );
                self.undo_stack.push(command);
                Ok(Some(caret))
            }
            Err(e) => {
                self.redo_stack.push(command);
                Err(e)
            }
        }
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Drop every recorded command
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    pub fn undo_count(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_count(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }
}
