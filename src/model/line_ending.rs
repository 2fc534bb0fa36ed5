//! Line-ending classification for loading and saving
//!
//! Loading splits raw text into [`Line`]s, recording how each one was
//! terminated. Saving writes each line followed by its ending's marker.

use serde::{Deserialize, Serialize};

use super::line::Line;

#[cfg(target_os = "windows")]
pub const NATIVE_LINE_ENDING: LineEnding = LineEnding::Dos;

#[cfg(not(target_os = "windows"))]
pub const NATIVE_LINE_ENDING: LineEnding = LineEnding::Unix;

/// How a line was terminated in its source text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    /// No terminator (the last line of a file only)
    #[default]
    None,
    /// LF = 0x0A
    Unix,
    /// CR LF
    Dos,
    /// CR = 0x0D
    Mac,
}

impl LineEnding {
    pub const ALL: [LineEnding; 4] = [Self::None, Self::Unix, Self::Dos, Self::Mac];

    /// The platform's native ending for newly created lines
    #[inline]
    pub const fn native() -> Self {
        NATIVE_LINE_ENDING
    }

    /// The terminator exactly as it appears in source text
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "",
            Self::Unix => "\n",
            Self::Dos => "\r\n",
            Self::Mac => "\r",
        }
    }

    /// The terminator written on save.
    ///
    /// Dos lines are written with a bare `\n`; saving is not a
    /// byte-preserving round trip for CR LF files.
    #[inline]
    pub const fn marker(&self) -> &'static str {
        match self {
            Self::None => "",
            Self::Unix | Self::Dos => "\n",
            Self::Mac => "\r",
        }
    }

    #[inline]
    pub const fn is_terminated(&self) -> bool {
        !matches!(self, Self::None)
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Unix => "LF",
            Self::Dos => "CRLF",
            Self::Mac => "CR",
        }
    }
}

/// Split `text` into lines in a single left-to-right pass.
///
/// `\r\n` is Dos, a bare `\r` is Mac, a bare `\n` is Unix. Whatever follows
/// the last terminator (possibly nothing) becomes a final line with
/// [`LineEnding::None`], so the result is never empty.
pub fn split_lines(text: &str) -> Vec<Line> {
    let mut lines = Vec::new();
    let bytes = text.as_bytes();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\r' => {
                let ending = if bytes.get(i + 1) == Some(&b'\n') {
                    LineEnding::Dos
                } else {
                    LineEnding::Mac
                };
                lines.push(Line::new(&text[start..i], ending));
                i += ending.as_str().len();
                start = i;
            }
            b'\n' => {
                lines.push(Line::new(&text[start..i], LineEnding::Unix));
                i += 1;
                start = i;
            }
            _ => i += 1,
        }
    }

    lines.push(Line::new(&text[start..], LineEnding::None));
    lines
}

/// Concatenate each line's text with its save marker
pub fn join_lines(lines: &[Line]) -> String {
    let capacity = lines.iter().map(|l| l.text().len() + 1).sum();
    let mut out = String::with_capacity(capacity);
    for line in lines {
        out.push_str(line.text());
        out.push_str(line.ending().marker());
    }
    out
}

/// Count of lines per terminated ending kind, in [`LineEnding::ALL`] order
/// (the `None` slot counts the unterminated last line, if present)
pub fn ending_counts(lines: &[Line]) -> [usize; 4] {
    let mut counts = [0usize; 4];
    for line in lines {
        let slot = LineEnding::ALL
            .iter()
            .position(|e| *e == line.ending())
            .unwrap_or(0);
        counts[slot] += 1;
    }
    counts
}

/// The most common terminator among `lines`, ignoring the unterminated tail.
/// Ties go to the kind listed first in [`LineEnding::ALL`].
pub fn dominant_ending(lines: &[Line]) -> Option<LineEnding> {
    let counts = ending_counts(lines);
    let mut best: Option<(LineEnding, usize)> = None;
    for (ending, count) in LineEnding::ALL.iter().zip(counts).skip(1) {
        if count == 0 {
            continue;
        }
        if best.map_or(true, |(_, c)| count > c) {
            best = Some((*ending, count));
        }
    }
    best.map(|(ending, _)| ending)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(lines: &[Line]) -> Vec<(&str, LineEnding)> {
        lines.iter().map(|l| (l.text(), l.ending())).collect()
    }

    #[test]
    fn test_split_empty_text() {
        let lines = split_lines("");
        assert_eq!(summary(&lines), vec![("", LineEnding::None)]);
    }

    #[test]
    fn test_split_unix() {
        let lines = split_lines("ab\ncd");
        assert_eq!(
            summary(&lines),
            vec![("ab", LineEnding::Unix), ("cd", LineEnding::None)]
        );
    }

    #[test]
    fn test_split_trailing_terminator_yields_empty_last_line() {
        let lines = split_lines("ab\n");
        assert_eq!(
            summary(&lines),
            vec![("ab", LineEnding::Unix), ("", LineEnding::None)]
        );
    }

    #[test]
    fn test_split_mixed_endings() {
        let lines = split_lines("a\r\nb\rc\nd");
        assert_eq!(
            summary(&lines),
            vec![
                ("a", LineEnding::Dos),
                ("b", LineEnding::Mac),
                ("c", LineEnding::Unix),
                ("d", LineEnding::None),
            ]
        );
    }

    #[test]
    fn test_split_cr_then_lf_pairs() {
        // "\n\r" is a Unix break followed by a Mac break, not a Dos break
        let lines = split_lines("x\n\ry");
        assert_eq!(
            summary(&lines),
            vec![
                ("x", LineEnding::Unix),
                ("", LineEnding::Mac),
                ("y", LineEnding::None),
            ]
        );
    }

    #[test]
    fn test_split_trailing_cr() {
        let lines = split_lines("end\r");
        assert_eq!(
            summary(&lines),
            vec![("end", LineEnding::Mac), ("", LineEnding::None)]
        );
    }

    #[test]
    fn test_markers() {
        assert_eq!(LineEnding::None.marker(), "");
        assert_eq!(LineEnding::Unix.marker(), "\n");
        assert_eq!(LineEnding::Dos.marker(), "\n");
        assert_eq!(LineEnding::Mac.marker(), "\r");
        assert_eq!(LineEnding::Dos.as_str(), "\r\n");
    }

    #[test]
    fn test_join_normalizes_dos() {
        let lines = split_lines("a\r\nb\rc\nd");
        assert_eq!(join_lines(&lines), "a\nb\rc\nd");
    }

    #[test]
    fn test_join_roundtrips_unix() {
        for text in ["", "x", "x\n", "a\nb\nc", "\n\n\n", "tail\n\nend"] {
            assert_eq!(join_lines(&split_lines(text)), text, "round trip of {text:?}");
        }
    }

    #[test]
    fn test_dominant_ending() {
        assert_eq!(dominant_ending(&split_lines("no breaks")), None);
        assert_eq!(
            dominant_ending(&split_lines("a\r\nb\r\nc\nd")),
            Some(LineEnding::Dos)
        );
        assert_eq!(dominant_ending(&split_lines("a\nb\r")), Some(LineEnding::Unix));
    }

    #[test]
    fn test_ending_counts() {
        let counts = ending_counts(&split_lines("a\r\nb\rc\nd\n"));
        // None (empty tail), Unix (c, d), Dos (a), Mac (b)
        assert_eq!(counts, [1, 2, 1, 1]);
    }

    #[test]
    fn test_native_is_terminated() {
        assert!(LineEnding::native().is_terminated());
    }
}
