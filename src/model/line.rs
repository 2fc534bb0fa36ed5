//! A single line of text and its terminator

use super::line_ending::LineEnding;
use crate::util::char_len;

/// One line of a document: its text (without terminator) and how it ends.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    text: String,
    ending: LineEnding,
}

impl Line {
    pub fn new(text: impl Into<String>, ending: LineEnding) -> Self {
        Self {
            text: text.into(),
            ending,
        }
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub(crate) fn text_mut(&mut self) -> &mut String {
        &mut self.text
    }

    #[inline]
    pub fn ending(&self) -> LineEnding {
        self.ending
    }

    #[inline]
    pub fn set_ending(&mut self, ending: LineEnding) {
        self.ending = ending;
    }

    /// Length in chars, excluding the terminator
    #[inline]
    pub fn len(&self) -> usize {
        char_len(&self.text)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
