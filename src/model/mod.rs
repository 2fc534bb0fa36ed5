//! Document model - lines, line endings, coordinates and change notification

pub mod document;
pub mod line;
pub mod line_ending;
pub mod listener;
pub mod position;

pub use document::{Document, DocumentId, LINE_BREAK};
pub use line::Line;
pub use line_ending::{dominant_ending, ending_counts, join_lines, split_lines, LineEnding};
pub use listener::{LineChangeListener, ListenerId, ListenerRegistry};
pub use position::Position;
