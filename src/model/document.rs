//! Document model - an ordered list of lines plus file state
//!
//! All mutation goes through [`Document::insert_text`] and
//! [`Document::delete_text`], which address text by `(row, column)` and
//! notify subscribed listeners once per call.

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use super::line::Line;
use super::line_ending::{join_lines, split_lines, LineEnding};
use super::listener::{LineChangeListener, ListenerId, ListenerRegistry};
use super::position::Position;
use crate::config::EditorConfig;
use crate::error::{DocumentError, EditError};
use crate::util::{byte_index, char_len, char_slice, normalize_breaks, split_keep_separator};

/// The in-memory line-break character used by insert/delete payloads
pub const LINE_BREAK: char = '\n';

static NEXT_DOCUMENT_ID: AtomicU64 = AtomicU64::new(1);

/// Identifies a document for the lifetime of the process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentId(pub u64);

impl DocumentId {
    fn next() -> Self {
        Self(NEXT_DOCUMENT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Document state - the line buffer and associated file metadata
#[derive(Debug)]
pub struct Document {
    id: DocumentId,
    /// Never empty
    lines: Vec<Line>,
    /// Path to the file on disk (None for new/unsaved files)
    file_path: Option<PathBuf>,
    /// Ending given to lines created by splitting
    default_ending: LineEnding,
    /// Whether the buffer has unsaved changes
    is_modified: bool,
    /// Incremented on each successful edit
    revision: u64,
    listeners: ListenerRegistry,
}

impl Document {
    /// Create a new document holding one empty, unterminated line.
    ///
    /// `LineEnding::None` cannot terminate a split line, so it is replaced
    /// by the native ending.
    pub fn new(default_ending: LineEnding) -> Self {
        let default_ending = if default_ending.is_terminated() {
            default_ending
        } else {
            tracing::warn!("Unterminated default line ending, using native ending");
            LineEnding::native()
        };
        Self {
            id: DocumentId::next(),
            lines: vec![Line::new("", LineEnding::None)],
            file_path: None,
            default_ending,
            is_modified: false,
            revision: 0,
            listeners: ListenerRegistry::new(),
        }
    }

    pub fn with_config(config: &EditorConfig) -> Self {
        Self::new(config.line_ending)
    }

    /// Create a document with initial text
    pub fn with_text(text: &str, default_ending: LineEnding) -> Self {
        let mut doc = Self::new(default_ending);
        doc.lines = split_lines(text);
        doc
    }

    /// Load a document from a file path
    pub fn from_file(
        path: impl Into<PathBuf>,
        default_ending: LineEnding,
    ) -> Result<Self, DocumentError> {
        let path = path.into();
        let bytes = read_file(&path)?;
        let mut doc = Self::new(default_ending);
        doc.load_bytes(&bytes);
        doc.file_path = Some(path);
        Ok(doc)
    }

    /// Create an empty document with a target file path.
    ///
    /// Used for a new-file action on a path that does not exist yet; the
    /// file is created on the first save.
    pub fn new_with_path(path: impl Into<PathBuf>, default_ending: LineEnding) -> Self {
        let mut doc = Self::new(default_ending);
        doc.file_path = Some(path.into());
        doc.is_modified = true;
        doc
    }

    /// Replace the contents with `bytes`, split into lines.
    ///
    /// Invalid UTF-8 is replaced rather than rejected.
    pub fn load_bytes(&mut self, bytes: &[u8]) {
        let text = String::from_utf8_lossy(bytes);
        self.lines = split_lines(&text);
        self.is_modified = false;
        tracing::debug!(
            document = self.id.0,
            lines = self.lines.len(),
            bytes = bytes.len(),
            "loaded document contents"
        );
    }

    /// Re-read the document from its file path.
    ///
    /// On failure the current lines are left untouched.
    pub fn reload(&mut self) -> Result<(), DocumentError> {
        let path = self.file_path.clone().ok_or(DocumentError::NoPath)?;
        let bytes = read_file(&path)?;
        self.load_bytes(&bytes);
        tracing::info!("Reloaded {}", path.display());
        Ok(())
    }

    /// Write the document to its file path
    pub fn save(&mut self) -> Result<(), DocumentError> {
        let path = self.file_path.clone().ok_or(DocumentError::NoPath)?;
        self.write_to(&path)
    }

    /// Write the document to `path` and adopt it as the document's path
    pub fn save_as(&mut self, path: impl Into<PathBuf>) -> Result<(), DocumentError> {
        let path = path.into();
        self.write_to(&path)?;
        self.file_path = Some(path);
        Ok(())
    }

    fn write_to(&mut self, path: &Path) -> Result<(), DocumentError> {
        let content = self.to_text();
        std::fs::write(path, content.as_bytes()).map_err(|e| DocumentError::io(path, e))?;
        self.is_modified = false;
        tracing::info!("Saved {} ({} lines)", path.display(), self.lines.len());
        Ok(())
    }

    /// The serialized contents, exactly as `save` writes them
    pub fn to_text(&self) -> String {
        join_lines(&self.lines)
    }

    pub fn id(&self) -> DocumentId {
        self.id
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    pub fn default_ending(&self) -> LineEnding {
        self.default_ending
    }

    pub fn is_modified(&self) -> bool {
        self.is_modified
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Get the display name for this document: the file name, or "Untitled"
    pub fn display_name(&self) -> String {
        self.file_path
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| "Untitled".to_string())
    }

    // =========================================================================
    // Line access
    // =========================================================================

    /// Get the number of lines in the document (at least 1)
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn line(&self, row: usize) -> Option<&Line> {
        self.lines.get(row)
    }

    pub fn line_text(&self, row: usize) -> Option<&str> {
        self.lines.get(row).map(Line::text)
    }

    /// Length of a line in chars (0 past the end of the document)
    pub fn line_len(&self, row: usize) -> usize {
        self.lines.get(row).map_or(0, Line::len)
    }

    pub fn lines(&self) -> impl Iterator<Item = &Line> {
        self.lines.iter()
    }

    /// Char count of the longest line
    pub fn max_line_width(&self) -> usize {
        self.lines.iter().map(Line::len).max().unwrap_or(0)
    }

    /// Position just past the last character of the document
    pub fn end_position(&self) -> Position {
        let row = self.lines.len() - 1;
        Position::new(row, self.line_len(row))
    }

    /// Clamp `pos` to the nearest valid coordinate
    pub fn clamp(&self, pos: Position) -> Position {
        let row = pos.row.min(self.lines.len() - 1);
        Position::new(row, pos.column.min(self.line_len(row)))
    }

    /// Fail unless `pos` addresses a row in the document and a column no
    /// further than the end of that row
    pub fn check_position(&self, pos: Position) -> Result<(), EditError> {
        let line = self.lines.get(pos.row).ok_or(EditError::RowOutOfBounds {
            row: pos.row,
            line_count: self.lines.len(),
        })?;
        let line_len = line.len();
        if pos.column > line_len {
            return Err(EditError::ColumnOutOfBounds {
                position: pos,
                line_len,
            });
        }
        Ok(())
    }

    /// The text between `start` and `end`, with line boundaries as [`LINE_BREAK`]
    pub fn text_between(&self, start: Position, end: Position) -> Result<String, EditError> {
        self.check_position(start)?;
        self.check_position(end)?;
        let (start, end) = if start <= end { (start, end) } else { (end, start) };

        if start.row == end.row {
            let text = self.lines[start.row].text();
            return Ok(char_slice(text, start.column, end.column)
                .unwrap_or_default()
                .to_string());
        }

        let mut out = String::new();
        for row in start.row..=end.row {
            let text = self.lines[row].text();
            if row == start.row {
                out.push_str(char_slice(text, start.column, char_len(text)).unwrap_or_default());
                out.push(LINE_BREAK);
            } else if row == end.row {
                out.push_str(char_slice(text, 0, end.column).unwrap_or_default());
            } else {
                out.push_str(text);
                out.push(LINE_BREAK);
            }
        }
        Ok(out)
    }

    /// Read up to `count` chars forward from `pos`, crossing line boundaries
    /// as [`LINE_BREAK`]. Stops early at the end of the document.
    fn read_forward(&self, pos: Position, count: usize) -> String {
        let mut out = String::new();
        let mut taken = 0;
        let mut row = pos.row;
        let mut column = pos.column;

        while taken < count {
            let line = &self.lines[row];
            let available: Vec<char> =
                line.text().chars().skip(column).take(count - taken).collect();
            taken += available.len();
            out.extend(available);
            if taken == count || row + 1 >= self.lines.len() {
                break;
            }
            out.push(LINE_BREAK);
            taken += 1;
            row += 1;
            column = 0;
        }
        out
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Insert `text` at `pos` and return the position just after it.
    ///
    /// `\r\n` and bare `\r` in `text` are read as [`LINE_BREAK`]. Each
    /// break splits the current line: the text right of the column moves to
    /// a new line below, which inherits the split line's ending, while the
    /// upper line takes the document's default ending.
    pub fn insert_text(&mut self, pos: Position, text: &str) -> Result<Position, EditError> {
        self.insert_text_with_endings(pos, text, &[])
    }

    /// Insert `text` like [`Document::insert_text`], giving the line above
    /// the i-th break `endings[i]` instead of the default ending.
    ///
    /// Feeding back what [`Document::delete_text`] returned restores the
    /// deleted lines exactly.
    pub fn insert_text_with_endings(
        &mut self,
        pos: Position,
        text: &str,
        endings: &[LineEnding],
    ) -> Result<Position, EditError> {
        self.check_position(pos)?;
        let text = normalize_breaks(text);
        if text.is_empty() {
            return Ok(pos);
        }

        let mut cursor = pos;
        let mut breaks = 0;
        for segment in split_keep_separator(&text, LINE_BREAK) {
            if segment.starts_with(LINE_BREAK) {
                let upper = endings.get(breaks).copied().unwrap_or(self.default_ending);
                self.split_line(cursor, upper);
                breaks += 1;
                cursor = Position::new(cursor.row + 1, 0);
            } else {
                self.insert_segment(cursor, segment);
                cursor.column += char_len(segment);
            }
        }

        tracing::debug!(
            document = self.id.0,
            row = pos.row,
            column = pos.column,
            chars = char_len(&text),
            breaks,
            "insert_text"
        );
        self.finish_edit(pos, breaks > 0);
        Ok(cursor)
    }

    /// Delete `text`, which must be exactly what the document holds at `pos`.
    ///
    /// Line breaks in `text` follow the same rules as for insertion. Each
    /// break merges the next line into line `pos.row`, and the merged line
    /// takes the next line's ending. The payload is verified before anything
    /// changes.
    ///
    /// Returns the endings the merged-away lines had, top to bottom, for
    /// [`Document::insert_text_with_endings`].
    pub fn delete_text(
        &mut self,
        pos: Position,
        text: &str,
    ) -> Result<Vec<LineEnding>, EditError> {
        self.check_position(pos)?;
        let text = normalize_breaks(text);
        if text.is_empty() {
            return Ok(Vec::new());
        }

        let expected_len = char_len(&text);
        let found = self.read_forward(pos, expected_len);
        if found != *text {
            let found_len = char_len(&found);
            let ran_off_end = found_len < expected_len && text.starts_with(found.as_str());
            if ran_off_end && text[found.len()..].starts_with(LINE_BREAK) {
                return Err(EditError::NoNextLine {
                    row: self.lines.len() - 1,
                });
            }
            return Err(EditError::PayloadMismatch {
                position: pos,
                expected: text.into_owned(),
                found,
            });
        }

        let mut removed = Vec::new();
        for segment in split_keep_separator(&text, LINE_BREAK) {
            if segment.starts_with(LINE_BREAK) {
                removed.push(self.merge_with_next(pos.row));
            } else {
                self.remove_segment(pos, char_len(segment));
            }
        }

        tracing::debug!(
            document = self.id.0,
            row = pos.row,
            column = pos.column,
            chars = expected_len,
            breaks = removed.len(),
            "delete_text"
        );
        self.finish_edit(pos, !removed.is_empty());
        Ok(removed)
    }

    fn insert_segment(&mut self, pos: Position, segment: &str) {
        let line = self.lines[pos.row].text_mut();
        let at = byte_index(line, pos.column).unwrap_or(line.len());
        line.insert_str(at, segment);
    }

    fn remove_segment(&mut self, pos: Position, chars: usize) {
        let line = self.lines[pos.row].text_mut();
        let from = byte_index(line, pos.column).unwrap_or(line.len());
        let to = byte_index(line, pos.column + chars).unwrap_or(line.len());
        line.replace_range(from..to, "");
    }

    fn split_line(&mut self, pos: Position, upper_ending: LineEnding) {
        let line = &mut self.lines[pos.row];
        let at = byte_index(line.text(), pos.column).unwrap_or(line.text().len());
        let right = line.text_mut().split_off(at);
        let lower_ending = line.ending();
        line.set_ending(upper_ending);
        self.lines.insert(pos.row + 1, Line::new(right, lower_ending));
    }

    /// Returns the ending line `row` had before the merge
    fn merge_with_next(&mut self, row: usize) -> LineEnding {
        let next = self.lines.remove(row + 1);
        let line = &mut self.lines[row];
        let upper_ending = line.ending();
        line.text_mut().push_str(next.text());
        line.set_ending(next.ending());
        upper_ending
    }

    fn finish_edit(&mut self, pos: Position, spans_multiple_lines: bool) {
        self.is_modified = true;
        self.revision = self.revision.wrapping_add(1);
        self.listeners.notify(pos, spans_multiple_lines);
    }

    // =========================================================================
    // Listeners
    // =========================================================================

    /// Register a listener. Only a weak reference is kept.
    pub fn subscribe<L>(&mut self, listener: &Rc<RefCell<L>>) -> ListenerId
    where
        L: LineChangeListener + 'static,
    {
        self.listeners.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new(LineEnding::native())
    }
}

fn read_file(path: &Path) -> Result<Vec<u8>, DocumentError> {
    std::fs::read(path).map_err(|e| {
        tracing::warn!("Failed to read {}: {}", path.display(), e);
        DocumentError::io(path, e)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(text: &str) -> Document {
        Document::with_text(text, LineEnding::Unix)
    }

    fn texts(doc: &Document) -> Vec<&str> {
        doc.lines().map(Line::text).collect()
    }

    // ========================================================================
    // Document creation tests
    // ========================================================================

    #[test]
    fn test_new_document_has_one_empty_line() {
        let doc = Document::new(LineEnding::Unix);
        assert_eq!(doc.line_count(), 1);
        assert_eq!(doc.line_text(0), Some(""));
        assert_eq!(doc.line(0).map(Line::ending), Some(LineEnding::None));
        assert!(doc.file_path().is_none());
        assert!(!doc.is_modified());
    }

    #[test]
    fn test_unterminated_default_ending_falls_back_to_native() {
        let mut doc = Document::new(LineEnding::None);
        assert_eq!(doc.default_ending(), LineEnding::native());

        doc.insert_text(Position::zero(), "a\nb").unwrap();
        assert_eq!(doc.line_count(), 2);
        assert_eq!(doc.to_text(), "a\nb");
    }

    #[test]
    fn test_documents_get_distinct_ids() {
        let a = Document::default();
        let b = Document::default();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_new_with_path_is_modified() {
        let doc = Document::new_with_path("/tmp/newfile.txt", LineEnding::Unix);
        assert_eq!(doc.file_path(), Some(Path::new("/tmp/newfile.txt")));
        assert!(doc.is_modified());
        assert_eq!(doc.display_name(), "newfile.txt");
    }

    #[test]
    fn test_display_name_fallback() {
        assert_eq!(Document::default().display_name(), "Untitled");
    }

    #[test]
    fn test_load_bytes_replaces_lines() {
        let mut doc = doc("old");
        doc.load_bytes(b"ab\ncd");
        assert_eq!(texts(&doc), vec!["ab", "cd"]);
        assert_eq!(doc.line(0).map(Line::ending), Some(LineEnding::Unix));
        assert_eq!(doc.line(1).map(Line::ending), Some(LineEnding::None));
    }

    #[test]
    fn test_load_bytes_lossy_utf8() {
        let mut doc = Document::default();
        doc.load_bytes(b"ok\xff\n");
        assert_eq!(doc.line_text(0), Some("ok\u{FFFD}"));
        assert_eq!(doc.line_count(), 2);
    }

    #[test]
    fn test_max_line_width_counts_chars() {
        let doc = doc("ab\nλλλλ\nxyz");
        assert_eq!(doc.max_line_width(), 4);
    }

    // ========================================================================
    // Insert tests
    // ========================================================================

    #[test]
    fn test_insert_within_line() {
        let mut doc = doc("hello");
        let end = doc.insert_text(Position::new(0, 2), "XY").unwrap();
        assert_eq!(doc.line_text(0), Some("heXYllo"));
        assert_eq!(end, Position::new(0, 4));
    }

    #[test]
    fn test_insert_at_line_end_appends() {
        let mut doc = doc("abc");
        doc.insert_text(Position::new(0, 3), "d").unwrap();
        assert_eq!(doc.line_text(0), Some("abcd"));
    }

    #[test]
    fn test_insert_break_splits_line() {
        let mut doc = doc("hello world");
        let end = doc.insert_text(Position::new(0, 5), "\n").unwrap();
        assert_eq!(texts(&doc), vec!["hello", " world"]);
        assert_eq!(end, Position::new(1, 0));
    }

    #[test]
    fn test_insert_multi_line_text() {
        let mut doc = doc("AZ");
        let end = doc.insert_text(Position::new(0, 1), "b\nc\n\nd").unwrap();
        assert_eq!(texts(&doc), vec!["Ab", "c", "", "dZ"]);
        assert_eq!(end, Position::new(3, 1));
    }

    #[test]
    fn test_split_endings() {
        // Last line is unterminated; splitting it keeps the tail unterminated
        let mut doc = Document::with_text("ab", LineEnding::Dos);
        doc.insert_text(Position::new(0, 1), "\n").unwrap();
        assert_eq!(doc.line(0).map(Line::ending), Some(LineEnding::Dos));
        assert_eq!(doc.line(1).map(Line::ending), Some(LineEnding::None));
        assert_eq!(doc.to_text(), "a\nb");
    }

    #[test]
    fn test_insert_cr_and_crlf_are_line_breaks() {
        let mut doc = doc("abX\ncd");
        let end = doc.insert_text(Position::new(0, 3), "\r").unwrap();
        assert_eq!(texts(&doc), vec!["abX", "", "cd"]);
        assert_eq!(end, Position::new(1, 0));

        let mut pasted = Document::new(LineEnding::Unix);
        let end = pasted.insert_text(Position::zero(), "x\r\ny").unwrap();
        assert_eq!(texts(&pasted), vec!["x", "y"]);
        assert_eq!(end, Position::new(1, 1));
        assert!(pasted.lines().all(|l| !l.text().contains('\r')));
    }

    #[test]
    fn test_insert_multibyte_column() {
        let mut doc = doc("日本");
        doc.insert_text(Position::new(0, 1), "x").unwrap();
        assert_eq!(doc.line_text(0), Some("日x本"));
    }

    #[test]
    fn test_insert_empty_is_noop() {
        let mut doc = doc("abc");
        let end = doc.insert_text(Position::new(0, 1), "").unwrap();
        assert_eq!(end, Position::new(0, 1));
        assert!(!doc.is_modified());
        assert_eq!(doc.revision(), 0);
    }

    #[test]
    fn test_insert_out_of_bounds() {
        let mut doc = doc("abc");
        assert_eq!(
            doc.insert_text(Position::new(0, 4), "x"),
            Err(EditError::ColumnOutOfBounds {
                position: Position::new(0, 4),
                line_len: 3
            })
        );
        assert_eq!(
            doc.insert_text(Position::new(1, 0), "x"),
            Err(EditError::RowOutOfBounds {
                row: 1,
                line_count: 1
            })
        );
        assert_eq!(doc.line_text(0), Some("abc"));
    }

    // ========================================================================
    // Delete tests
    // ========================================================================

    #[test]
    fn test_delete_within_line() {
        let mut doc = doc("hello");
        doc.delete_text(Position::new(0, 1), "ell").unwrap();
        assert_eq!(doc.line_text(0), Some("ho"));
    }

    #[test]
    fn test_delete_break_merges_lines() {
        let mut doc = doc("ab\ncd\nef");
        doc.delete_text(Position::new(0, 2), "\n").unwrap();
        assert_eq!(texts(&doc), vec!["abcd", "ef"]);
        assert_eq!(doc.line(0).map(Line::ending), Some(LineEnding::Unix));
    }

    #[test]
    fn test_delete_cr_payload_merges_lines() {
        let mut doc = doc("abX\n\ncd");
        doc.delete_text(Position::new(0, 3), "\r").unwrap();
        assert_eq!(texts(&doc), vec!["abX", "cd"]);
    }

    #[test]
    fn test_delete_returns_merged_endings() {
        let mut doc = Document::with_text("a\rb\r\nc", LineEnding::Unix);
        let removed = doc.delete_text(Position::new(0, 1), "\nb\n").unwrap();
        assert_eq!(removed, vec![LineEnding::Mac, LineEnding::Dos]);
        assert_eq!(texts(&doc), vec!["ac"]);

        doc.insert_text_with_endings(Position::new(0, 1), "\nb\n", &removed)
            .unwrap();
        assert_eq!(doc.to_text(), "a\rb\nc");
        assert_eq!(doc.line(1).map(Line::ending), Some(LineEnding::Dos));
    }

    #[test]
    fn test_delete_multi_line_span() {
        let mut doc = doc("one\ntwo\nthree");
        doc.delete_text(Position::new(0, 1), "ne\ntwo\nth").unwrap();
        assert_eq!(texts(&doc), vec!["oree"]);
        assert_eq!(doc.line(0).map(Line::ending), Some(LineEnding::None));
    }

    #[test]
    fn test_delete_break_on_last_line_fails() {
        let mut doc = doc("ab\ncd");
        assert_eq!(
            doc.delete_text(Position::new(1, 2), "\n"),
            Err(EditError::NoNextLine { row: 1 })
        );
        assert_eq!(texts(&doc), vec!["ab", "cd"]);
    }

    #[test]
    fn test_delete_payload_mismatch_leaves_document_unchanged() {
        let mut doc = doc("hello");
        let err = doc.delete_text(Position::new(0, 0), "help").unwrap_err();
        assert_eq!(
            err,
            EditError::PayloadMismatch {
                position: Position::new(0, 0),
                expected: "help".to_string(),
                found: "hell".to_string(),
            }
        );
        assert_eq!(doc.line_text(0), Some("hello"));
        assert_eq!(doc.revision(), 0);
    }

    #[test]
    fn test_delete_past_line_end_is_mismatch() {
        let mut doc = doc("ab\ncd");
        // "b" then a break exists, but the payload claims "bc"
        assert!(matches!(
            doc.delete_text(Position::new(0, 1), "bc"),
            Err(EditError::PayloadMismatch { .. })
        ));
    }

    // ========================================================================
    // Text extraction tests
    // ========================================================================

    #[test]
    fn test_text_between_single_line() {
        let doc = doc("hello world");
        assert_eq!(
            doc.text_between(Position::new(0, 6), Position::new(0, 11)).unwrap(),
            "world"
        );
    }

    #[test]
    fn test_text_between_multi_line() {
        let doc = doc("first\nsecond\nthird");
        assert_eq!(
            doc.text_between(Position::new(0, 3), Position::new(2, 2)).unwrap(),
            "st\nsecond\nth"
        );
    }

    #[test]
    fn test_text_between_is_order_insensitive() {
        let doc = doc("ab\ncd");
        let forward = doc.text_between(Position::new(0, 1), Position::new(1, 1));
        let backward = doc.text_between(Position::new(1, 1), Position::new(0, 1));
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_clamp() {
        let doc = doc("ab\ncdef");
        assert_eq!(doc.clamp(Position::new(0, 9)), Position::new(0, 2));
        assert_eq!(doc.clamp(Position::new(7, 1)), Position::new(1, 1));
        assert_eq!(doc.end_position(), Position::new(1, 4));
    }

    #[test]
    fn test_edit_increments_revision_and_marks_modified() {
        let mut doc = doc("abc");
        doc.insert_text(Position::new(0, 0), "x").unwrap();
        doc.delete_text(Position::new(0, 0), "x").unwrap();
        assert_eq!(doc.revision(), 2);
        assert!(doc.is_modified());
    }
}
