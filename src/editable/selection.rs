//! Selection regions.

use crate::error::EditError;
use crate::model::{Document, Position};

/// A normalized, half-open `[start, end)` range of positions.
///
/// `start <= end` always holds in row-major order. The region owns no text;
/// callers rebuild it whenever the selection changes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionRegion {
    start: Position,
    end: Position,
}

impl SelectionRegion {
    /// Order the fixed anchor and the moving caret into a region
    pub fn normalize(anchor: Position, caret: Position) -> Self {
        if anchor <= caret {
            Self {
                start: anchor,
                end: caret,
            }
        } else {
            Self {
                start: caret,
                end: anchor,
            }
        }
    }

    /// Create a collapsed (empty) region at `pos`
    pub fn collapsed(pos: Position) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn end(&self) -> Position {
        self.end
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn is_multi_line(&self) -> bool {
        self.start.row != self.end.row
    }

    /// Check if a position is within this region (end is exclusive)
    pub fn contains(&self, pos: Position) -> bool {
        pos >= self.start && pos < self.end
    }

    /// The selected text, with line boundaries joined by the line-break char
    pub fn text(&self, doc: &Document) -> Result<String, EditError> {
        doc.text_between(self.start, self.end)
    }

    /// Rows touched by the region, inclusive
    pub fn rows(&self) -> std::ops::RangeInclusive<usize> {
        self.start.row..=self.end.row
    }
}
