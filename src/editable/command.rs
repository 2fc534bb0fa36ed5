//! Reversible edit commands.

use crate::error::EditError;
use crate::model::{Document, DocumentId, LineEnding, Position};
use crate::util::normalize_breaks;

/// A single reversible text mutation, bound to the document it was built for.
///
/// The payload never changes after construction. Line breaks in it are
/// stored as `'\n'` whatever form they were given in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditCommand {
    /// Forward inserts `text` at `position`; inverse deletes it again
    Insert {
        document: DocumentId,
        position: Position,
        text: String,
    },
    /// Forward deletes `text` at `position`; inverse re-inserts it
    Delete {
        document: DocumentId,
        position: Position,
        text: String,
        /// Endings of the lines merged away by the last execution
        removed_endings: Vec<LineEnding>,
    },
}

impl EditCommand {
    /// Build an insert command against `document`
    pub fn insert(document: &Document, position: Position, text: impl Into<String>) -> Self {
        Self::Insert {
            document: document.id(),
            position,
            text: canonical(text.into()),
        }
    }

    /// Build a delete command against `document`.
    ///
    /// `text` must be what the document holds at `position` when the
    /// command runs; otherwise execution fails with
    /// [`EditError::PayloadMismatch`].
    pub fn delete(document: &Document, position: Position, text: impl Into<String>) -> Self {
        Self::Delete {
            document: document.id(),
            position,
            text: canonical(text.into()),
            removed_endings: Vec::new(),
        }
    }

    pub fn document(&self) -> DocumentId {
        match self {
            Self::Insert { document, .. } | Self::Delete { document, .. } => *document,
        }
    }

    pub fn position(&self) -> Position {
        match self {
            Self::Insert { position, .. } | Self::Delete { position, .. } => *position,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Self::Insert { text, .. } | Self::Delete { text, .. } => text,
        }
    }

    /// Apply the forward action, returning where the caret belongs afterwards.
    ///
    /// A Delete remembers the endings of the lines it merges so that `undo`
    /// can restore them.
    pub fn execute(&mut self, doc: &mut Document) -> Result<Position, EditError> {
        self.check_target(doc)?;
        match self {
            Self::Insert { position, text, .. } => doc.insert_text(*position, text),
            Self::Delete {
                position,
                text,
                removed_endings,
                ..
            } => {
                *removed_endings = doc.delete_text(*position, text)?;
                Ok(*position)
            }
        }
    }

    /// Apply the inverse action, returning where the caret belongs afterwards
    pub fn undo(&self, doc: &mut Document) -> Result<Position, EditError> {
        self.check_target(doc)?;
        match self {
            Self::Insert { position, text, .. } => {
                doc.delete_text(*position, text)?;
                Ok(*position)
            }
            Self::Delete {
                position,
                text,
                removed_endings,
                ..
            } => doc.insert_text_with_endings(*position, text, removed_endings),
        }
    }

    fn check_target(&self, doc: &Document) -> Result<(), EditError> {
        if self.document() == doc.id() {
            Ok(())
        } else {
            Err(EditError::WrongDocument)
        }
    }
}

fn canonical(text: String) -> String {
    if text.contains('\r') {
        normalize_breaks(&text).into_owned()
    } else {
        text
    }
}
