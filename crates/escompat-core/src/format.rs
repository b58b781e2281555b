//! Canonical text rendering of a diagnostic list.
//!
//! Pure composition: the caller decides where the string goes. Row and
//! column in the title are the zero-based node location; fragment lines are
//! numbered from the fragment's first source row, one-based for display.

use crate::diagnostic::Diagnostic;

/// Renders diagnostics into annotated text, one block per diagnostic in
/// input order. Total: never fails on a well-formed list, and an empty list
/// renders as the empty string.
pub fn format(diagnostics: &[Diagnostic]) -> String {
    let mut out = String::new();
    for diagnostic in diagnostics {
        out.push_str(&format!(
            "code:{}:{} - error Find invalid api invoke '{}'.\n\n",
            diagnostic.node_location.row, diagnostic.node_location.col, diagnostic.error_word
        ));
        for (offset, line) in diagnostic.error_sentence.split('\n').enumerate() {
            out.push_str(&format!(
                "{} {}\n",
                diagnostic.fragment_location.row + 1 + offset,
                line
            ));
        }
        out.push('\n');
    }
    out
}
