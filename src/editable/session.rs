//! Editing actions built from commands: typed input, backspace/delete,
//! cut/copy/paste and undo/redo against one document.
//!
//! The session tracks a caret and a selection anchor but does not move
//! them on its own beyond what an edit implies; caret navigation belongs to
//! the presentation layer, which calls [`EditSession::set_caret`] and
//! [`EditSession::select`].

use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use super::command::EditCommand;
use super::history::CommandHistory;
use super::selection::SelectionRegion;
use crate::config::EditorConfig;
use crate::error::{DocumentError, EditError};
use crate::model::{Document, LineChangeListener, ListenerId, Position};

/// One document, its undo history, a caret/anchor pair and a plain-text clipboard
#[derive(Debug)]
pub struct EditSession {
    document: Document,
    history: CommandHistory,
    anchor: Position,
    caret: Position,
    clipboard: String,
}

impl EditSession {
    pub fn new(document: Document, history: CommandHistory) -> Self {
        Self {
            document,
            history,
            anchor: Position::zero(),
            caret: Position::zero(),
            clipboard: String::new(),
        }
    }

    pub fn with_config(document: Document, config: &EditorConfig) -> Self {
        Self::new(document, CommandHistory::with_max_size(config.history_limit))
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    /// Consume the session, returning the document
    pub fn into_document(self) -> Document {
        self.document
    }

    pub fn subscribe<L>(&mut self, listener: &Rc<RefCell<L>>) -> ListenerId
    where
        L: LineChangeListener + 'static,
    {
        self.document.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.document.unsubscribe(id)
    }

    pub fn save(&mut self) -> Result<(), DocumentError> {
        self.document.save()
    }

    pub fn save_as(&mut self, path: impl Into<PathBuf>) -> Result<(), DocumentError> {
        self.document.save_as(path)
    }

    // =========================================================================
    // Caret and selection
    // =========================================================================

    pub fn caret(&self) -> Position {
        self.caret
    }

    pub fn anchor(&self) -> Position {
        self.anchor
    }

    /// Move the caret, collapsing any selection. Clamped to the document.
    pub fn set_caret(&mut self, pos: Position) {
        let pos = self.document.clamp(pos);
        self.caret = pos;
        self.anchor = pos;
    }

    /// Select from `anchor` to `caret`. Both are clamped to the document.
    pub fn select(&mut self, anchor: Position, caret: Position) {
        self.anchor = self.document.clamp(anchor);
        self.caret = self.document.clamp(caret);
    }

    pub fn selection(&self) -> SelectionRegion {
        SelectionRegion::normalize(self.anchor, self.caret)
    }

    pub fn has_selection(&self) -> bool {
        !self.selection().is_empty()
    }

    pub fn selected_text(&self) -> Result<String, EditError> {
        self.selection().text(&self.document)
    }

    // =========================================================================
    // Editing
    // =========================================================================

    /// Insert `text` at the caret, replacing the selection if there is one.
    /// The caret ends up after the inserted text.
    pub fn insert(&mut self, text: &str) -> Result<bool, EditError> {
        let replaced = self.delete_selection()?;
        if text.is_empty() {
            return Ok(replaced);
        }
        let command = EditCommand::insert(&self.document, self.caret, text);
        let caret = self.history.run(&mut self.document, command)?;
        self.collapse_to(caret);
        Ok(true)
    }

    /// Delete the selected text. Returns false when nothing is selected.
    pub fn delete_selection(&mut self) -> Result<bool, EditError> {
        let region = self.selection();
        if region.is_empty() {
            return Ok(false);
        }
        let text = region.text(&self.document)?;
        let command = EditCommand::delete(&self.document, region.start(), text);
        let caret = self.history.run(&mut self.document, command)?;
        self.collapse_to(caret);
        Ok(true)
    }

    /// Delete the selection, or the character (or line break) before the
    /// caret. Does nothing at the start of the document.
    pub fn backspace(&mut self) -> Result<bool, EditError> {
        if self.has_selection() {
            return self.delete_selection();
        }
        let Some(prev) = self.position_before(self.caret) else {
            return Ok(false);
        };
        let text = self.document.text_between(prev, self.caret)?;
        let command = EditCommand::delete(&self.document, prev, text);
        let caret = self.history.run(&mut self.document, command)?;
        self.collapse_to(caret);
        Ok(true)
    }

    /// Delete the selection, or the character (or line break) at the caret.
    /// Does nothing at the end of the document.
    pub fn delete_forward(&mut self) -> Result<bool, EditError> {
        if self.has_selection() {
            return self.delete_selection();
        }
        let Some(next) = self.position_after(self.caret) else {
            return Ok(false);
        };
        let text = self.document.text_between(self.caret, next)?;
        let command = EditCommand::delete(&self.document, self.caret, text);
        let caret = self.history.run(&mut self.document, command)?;
        self.collapse_to(caret);
        Ok(true)
    }

    // =========================================================================
    // Clipboard
    // =========================================================================

    pub fn clipboard(&self) -> &str {
        &self.clipboard
    }

    /// Replace the clipboard with text from outside the session
    pub fn set_clipboard(&mut self, text: impl Into<String>) {
        self.clipboard = text.into();
    }

    /// Copy the selection to the clipboard. Returns false when nothing is
    /// selected, leaving the clipboard as it was.
    pub fn copy(&mut self) -> Result<bool, EditError> {
        if !self.has_selection() {
            return Ok(false);
        }
        self.clipboard = self.selected_text()?;
        Ok(true)
    }

    pub fn cut(&mut self) -> Result<bool, EditError> {
        if !self.copy()? {
            return Ok(false);
        }
        self.delete_selection()
    }

    /// Insert the clipboard at the caret, replacing any selection
    pub fn paste(&mut self) -> Result<bool, EditError> {
        if self.clipboard.is_empty() {
            return Ok(false);
        }
        let text = self.clipboard.clone();
        self.insert(&text)
    }

    // =========================================================================
    // History
    // =========================================================================

    pub fn undo(&mut self) -> Result<bool, EditError> {
        let caret = self.history.undo(&mut self.document)?;
        Ok(self.follow(caret))
    }

    pub fn redo(&mut self) -> Result<bool, EditError> {
        let caret = self.history.redo(&mut self.document)?;
        Ok(self.follow(caret))
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    fn follow(&mut self, caret: Option<Position>) -> bool {
        match caret {
            Some(pos) => {
                self.set_caret(pos);
                true
            }
            None => false,
        }
    }

    fn collapse_to(&mut self, pos: Position) {
        self.caret = pos;
        self.anchor = pos;
    }

    fn position_before(&self, pos: Position) -> Option<Position> {
        if pos.column > 0 {
            Some(Position::new(pos.row, pos.column - 1))
        } else if pos.row > 0 {
            let row = pos.row - 1;
            Some(Position::new(row, self.document.line_len(row)))
        } else {
            None
        }
    }

    fn position_after(&self, pos: Position) -> Option<Position> {
        if pos.column < self.document.line_len(pos.row) {
            Some(Position::new(pos.row, pos.column + 1))
        } else if pos.row + 1 < self.document.line_count() {
            Some(Position::new(pos.row + 1, 0))
        } else {
            None
        }
    }
}
