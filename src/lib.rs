//! linepad - a line-oriented text buffer
//!
//! This crate provides the document model, reversible edit commands and
//! undo/redo history behind a text editor. Rendering, caret navigation and
//! input handling live in the presentation layer, which observes a
//! [`Document`] through [`LineChangeListener`] and edits it through
//! [`EditCommand`]s run by a [`CommandHistory`].

pub mod cli;
pub mod config;
pub mod config_paths;
pub mod editable;
pub mod error;
pub mod model;
pub mod tracing;
pub mod util;

// Re-export commonly used types
pub use config::EditorConfig;
pub use editable::{CommandHistory, EditCommand, EditSession, SelectionRegion};
pub use error::{DocumentError, EditError};
pub use model::{Document, Line, LineChangeListener, LineEnding, Position};
