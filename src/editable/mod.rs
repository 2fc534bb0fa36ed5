//! Reversible editing on top of the document model.
//!
//! # Architecture
//!
//! - [`EditCommand`]: a single Insert or Delete, bound to one document, that
//!   can apply itself and its exact inverse
//! - [`CommandHistory`]: linear undo/redo stacks that own executed commands
//! - [`SelectionRegion`]: a normalized `[start, end)` range
//! - [`EditSession`]: typed input, backspace/delete and cut/copy/paste
//!   composed from the above
//!
//! # Example
//!
//! ```
//! use linepad::editable::{CommandHistory, EditCommand};
//! use linepad::model::{Document, LineEnding, Position};
//!
//! let mut doc = Document::with_text("hello", LineEnding::Unix);
//! let mut history = CommandHistory::new();
//!
//! let insert = EditCommand::insert(&doc, Position::new(0, 5), " world");
//! history.run(&mut doc, insert).unwrap();
//! assert_eq!(doc.to_text(), "hello world");
//!
//! history.undo(&mut doc).unwrap();
//! assert_eq!(doc.to_text(), "hello");
//! ```

mod command;
mod history;
mod selection;
mod session;

pub use command::EditCommand;
pub use history::CommandHistory;
pub use selection::SelectionRegion;
pub use session::EditSession;
