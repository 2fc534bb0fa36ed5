//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use linepad::editable::{CommandHistory, EditSession};
use linepad::model::{Document, Line, LineChangeListener, LineEnding, Position};

/// Create a Unix-default document with given text
pub fn test_doc(text: &str) -> Document {
    Document::with_text(text, LineEnding::Unix)
}

/// Create a session over `text` with the caret at (row, column)
pub fn test_session(text: &str, row: usize, column: usize) -> EditSession {
    let mut session = EditSession::new(test_doc(text), CommandHistory::new());
    session.set_caret(Position::new(row, column));
    session
}

/// Create a session over `text` with a selection from anchor to caret
pub fn test_session_with_selection(
    text: &str,
    anchor: (usize, usize),
    caret: (usize, usize),
) -> EditSession {
    let mut session = EditSession::new(test_doc(text), CommandHistory::new());
    session.select(anchor.into(), caret.into());
    session
}

/// Line texts of a document
pub fn lines_of(doc: &Document) -> Vec<String> {
    doc.lines().map(|l| l.text().to_string()).collect()
}

/// Line texts and endings of a document
pub fn shape_of(doc: &Document) -> Vec<(String, LineEnding)> {
    doc.lines()
        .map(|l: &Line| (l.text().to_string(), l.ending()))
        .collect()
}

/// Listener that records every notification it receives
#[derive(Debug, Default)]
pub struct RecordingListener {
    pub events: Vec<(Position, bool)>,
}

impl LineChangeListener for RecordingListener {
    fn on_line_range_changed(&mut self, position: Position, spans_multiple_lines: bool) {
        self.events.push((position, spans_multiple_lines));
    }
}

/// Subscribe a fresh recorder to `doc`
pub fn record(doc: &mut Document) -> Rc<RefCell<RecordingListener>> {
    let recorder = Rc::new(RefCell::new(RecordingListener::default()));
    doc.subscribe(&recorder);
    recorder
}
