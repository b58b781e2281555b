//! Source positions: byte-offset ranges and their zero-based row/column
//! translation.
//!
//! Offsets are plain byte indices into the analyzed source text. Rows are
//! separated by `\n` only; `\r\n` input therefore yields columns that count
//! the `\r`, matching how the offsets were produced.

use serde::Serialize;

/// Half-open byte-offset range into the source text.
///
/// Invariant: `start <= end`, both within `0..=source.len()` for the source
/// the range was produced from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceRange {
    pub start: usize,
    pub end: usize,
}

impl SourceRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// Zero-based line/column position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SourceLocation {
    pub row: usize,
    pub col: usize,
}

/// Translates the start of `range` into a zero-based row and column.
///
/// Walks the lines of `source`, consuming `line length + 1` bytes per line
/// (the `+ 1` pays for the terminating newline) until the remaining offset
/// falls inside the current line; the leftover is the column. Offset 0 is
/// `{row: 0, col: 0}`. Total for any offset: positions past the last line
/// report the last row with a column past its end.
pub fn to_location(range: SourceRange, source: &str) -> SourceLocation {
    let mut remaining = range.start;
    let mut row = 0;
    for line in source.split('\n') {
        let width = line.len() + 1;
        if remaining < width {
            break;
        }
        remaining -= width;
        row += 1;
    }
    SourceLocation {
        row,
        col: remaining,
    }
}

/// Returns the exact substring covered by `range`, clamped to the bounds of
/// `source`. A range that does not land on UTF-8 character boundaries yields
/// the empty string rather than a panic.
pub fn slice_text(range: SourceRange, source: &str) -> &str {
    let start = range.start.min(source.len());
    let end = range.end.clamp(start, source.len());
    source.get(start..end).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_zero_is_origin() {
        let loc = to_location(SourceRange::new(0, 1), "hello");
        assert_eq!(loc, SourceLocation { row: 0, col: 0 });
    }

    #[test]
    fn offset_within_first_line() {
        let loc = to_location(SourceRange::new(3, 5), "hello\nworld");
        assert_eq!(loc, SourceLocation { row: 0, col: 3 });
    }

    #[test]
    fn offset_at_start_of_third_line() {
        // "line1\nline2\n" is 12 bytes, so offset 12 opens row 2.
        let source = "line1\nline2\nSymbol.iterator";
        let loc = to_location(SourceRange::new(12, 27), source);
        assert_eq!(loc, SourceLocation { row: 2, col: 0 });
    }

    #[test]
    fn offset_mid_line_counts_columns_from_zero() {
        let source = "ab\ncdef\ng";
        let loc = to_location(SourceRange::new(5, 6), source);
        assert_eq!(loc, SourceLocation { row: 1, col: 2 });
    }

    #[test]
    fn offset_on_newline_belongs_to_its_line() {
        let source = "ab\ncd";
        let loc = to_location(SourceRange::new(2, 3), source);
        assert_eq!(loc, SourceLocation { row: 0, col: 2 });
    }

    #[test]
    fn offset_at_end_of_source_without_trailing_newline() {
        let source = "ab\ncd";
        let loc = to_location(SourceRange::new(5, 5), source);
        assert_eq!(loc, SourceLocation { row: 1, col: 2 });
    }

    #[test]
    fn offset_just_after_trailing_newline() {
        let source = "ab\n";
        let loc = to_location(SourceRange::new(3, 3), source);
        assert_eq!(loc, SourceLocation { row: 1, col: 0 });
    }

    #[test]
    fn location_is_deterministic() {
        let source = "one\ntwo\nthree";
        let range = SourceRange::new(9, 11);
        assert_eq!(to_location(range, source), to_location(range, source));
    }

    #[test]
    fn slice_returns_exact_substring() {
        let source = "a[Symbol.iterator]";
        assert_eq!(slice_text(SourceRange::new(2, 17), source), "Symbol.iterator");
    }

    #[test]
    fn slice_clamps_end_to_source_length() {
        assert_eq!(slice_text(SourceRange::new(3, 100), "hello"), "lo");
    }

    #[test]
    fn slice_clamps_start_past_end_to_empty() {
        assert_eq!(slice_text(SourceRange::new(99, 120), "hello"), "");
    }

    #[test]
    fn slice_of_empty_range_is_empty() {
        assert_eq!(slice_text(SourceRange::new(2, 2), "hello"), "");
    }

    #[test]
    fn slice_off_char_boundary_is_empty_not_panic() {
        // "é" is two bytes; offset 1 splits it.
        assert_eq!(slice_text(SourceRange::new(1, 2), "é"), "");
    }
}
