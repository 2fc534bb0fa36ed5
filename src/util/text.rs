//! Char-column helpers for `String`-backed lines
//!
//! Document columns count `char`s, while `String` indexes bytes. These
//! helpers translate between the two.

use std::borrow::Cow;

/// Number of chars in `text`
#[inline]
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Byte offset of char column `column` in `text`.
///
/// A column equal to the char length maps to `text.len()`. Columns past the
/// end return `None`.
pub fn byte_index(text: &str, column: usize) -> Option<usize> {
    if column == 0 {
        return Some(0);
    }
    let mut indices = text.char_indices().map(|(i, _)| i).chain(Some(text.len()));
    indices.nth(column)
}

/// The chars in `[start, end)` as a string slice.
///
/// Returns `None` when either bound is past the end or `start > end`.
pub fn char_slice(text: &str, start: usize, end: usize) -> Option<&str> {
    if start > end {
        return None;
    }
    let from = byte_index(text, start)?;
    let to = byte_index(text, end)?;
    Some(&text[from..to])
}

/// Rewrite `\r\n` and bare `\r` as `\n`, borrowing when there is nothing
/// to rewrite.
pub fn normalize_breaks(text: &str) -> Cow<'_, str> {
    if !text.contains('\r') {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
}

/// Split `text` on `separator`, yielding the separator itself as its own
/// segment. Empty runs between separators are skipped.
///
/// `"ab\ncd\n\n"` becomes `["ab", "\n", "cd", "\n", "\n"]`.
pub fn split_keep_separator(text: &str, separator: char) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut start = 0;
    for (i, ch) in text.char_indices() {
        if ch == separator {
            if start < i {
                segments.push(&text[start..i]);
            }
            let end = i + ch.len_utf8();
            segments.push(&text[i..end]);
            start = end;
        }
    }
    if start < text.len() {
        segments.push(&text[start..]);
    }
    segments
}
