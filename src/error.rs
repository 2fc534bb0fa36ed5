//! Error types for document I/O and text mutation
//!
//! Every check behind an [`EditError`] runs before the document is touched,
//! so a failed edit never leaves a half-applied mutation behind.

use std::path::PathBuf;

use thiserror::Error;

use crate::model::Position;

/// Errors from loading or saving a document
#[derive(Debug, Error)]
pub enum DocumentError {
    /// Reading or writing the file failed
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `save()` was called on a document that has never had a path
    #[error("document has no file path")]
    NoPath,
}

impl DocumentError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// The underlying I/O error kind, if this is an I/O failure
    pub fn io_kind(&self) -> Option<std::io::ErrorKind> {
        match self {
            Self::Io { source, .. } => Some(source.kind()),
            Self::NoPath => None,
        }
    }
}

/// Errors from coordinate-based mutation of a document
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("row {row} is out of bounds (document has {line_count} lines)")]
    RowOutOfBounds { row: usize, line_count: usize },

    #[error("column {} is past the end of row {} (length {line_len})", position.column, position.row)]
    ColumnOutOfBounds { position: Position, line_len: usize },

    /// A line break was deleted on the last line, where there is nothing to merge
    #[error("no line after row {row} to merge")]
    NoNextLine { row: usize },

    /// The text to delete does not match what the document holds at the position
    #[error("delete payload mismatch at ({}, {}): expected {expected:?}, found {found:?}", position.row, position.column)]
    PayloadMismatch {
        position: Position,
        expected: String,
        found: String,
    },

    /// A command was executed against a document other than the one it was built for
    #[error("command targets a different document")]
    WrongDocument,
}
