//! Diagnostic construction: turns a collected match into the located,
//! fragment-annotated error record handed to callers.

use serde::Serialize;

use crate::location::{SourceLocation, slice_text, to_location};
use crate::rules;
use crate::walker::MemberAccessMatch;

/// Lines of context kept on each side of the violation row.
const FRAGMENT_CONTEXT_LINES: usize = 3;

/// One confirmed rule violation, immutable once built.
///
/// Serializes with the field names of the JSON error record consumed by
/// downstream tooling (`nodeLocation`, `errorWord`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
    /// Zero-based position of the offending access.
    pub node_location: SourceLocation,
    /// Position of the first line of `error_sentence`; its column is
    /// always 0 because fragments start at a line boundary.
    pub fragment_location: SourceLocation,
    /// Dedented multi-line source fragment around the violation.
    pub error_sentence: String,
    /// Exact source text of the offending access.
    pub error_word: String,
    /// Rule category that produced this diagnostic.
    pub error_type: &'static str,
}

/// Builds the diagnostic for one collected match against its source text.
pub fn build_diagnostic(matched: &MemberAccessMatch, source: &str) -> Diagnostic {
    let node_location = to_location(matched.range, source);
    let (error_sentence, fragment_location) = extract_fragment(node_location.row, source);
    Diagnostic {
        node_location,
        fragment_location,
        error_sentence,
        error_word: slice_text(matched.range, source).to_string(),
        error_type: rules::MEMBER_EXPRESSION,
    }
}

/// Selects the context window around `row` (up to three lines on each side,
/// clamped to the source), strips the window's common leading-space count
/// from every line, and reports the window's first row.
fn extract_fragment(row: usize, source: &str) -> (String, SourceLocation) {
    // split("\n") yields at least one line, even for empty input.
    let lines: Vec<&str> = source.split('\n').collect();
    let last = lines.len() - 1;
    let row = row.min(last);
    let start = row.saturating_sub(FRAGMENT_CONTEXT_LINES);
    let end = (row + FRAGMENT_CONTEXT_LINES).min(last);
    let window = &lines[start..=end];

    let indent = window
        .iter()
        .map(|line| leading_spaces(line))
        .min()
        .unwrap_or(0);
    let fragment = window
        .iter()
        // indent is the minimum over these same lines, so it is in bounds
        // for each of them.
        .map(|line| &line[indent..])
        .collect::<Vec<_>>()
        .join("\n");

    (fragment, SourceLocation { row: start, col: 0 })
}

fn leading_spaces(line: &str) -> usize {
    line.len() - line.trim_start_matches(' ').len()
}
