//! Analysis orchestration: parse, walk, build, in one synchronous pass.

use tracing::debug;

use crate::diagnostic::{Diagnostic, build_diagnostic};
use crate::parser::{self, ParseError};
use crate::rules::RuleSet;
use crate::walker;

/// Failure modes of one analysis call.
///
/// All three are fatal for the call: no partial diagnostic list is ever
/// returned. Shape surprises encountered during the walk (a member access
/// without identifier names, say) are "no match", not errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum AnalyzeError {
    /// Rule data entering the boundary is not a structured rule mapping.
    #[error("invalid rule set: {0}")]
    InvalidRuleSet(String),
    /// Source input is not valid text.
    #[error("invalid source: {0}")]
    InvalidSource(String),
    /// The source text is not syntactically valid JavaScript; carries the
    /// parser's position unmodified.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Analyzes one source unit against a rule set.
///
/// Returns every confirmed violation in source order; an empty list means
/// no violations, not a failure. Deterministic: identical inputs produce
/// structurally identical diagnostics, and no state survives the call.
pub fn analyze(source: &str, rules: &RuleSet) -> Result<Vec<Diagnostic>, AnalyzeError> {
    let parsed = parser::parse(source)?;
    let matches = walker::collect_matches(&parsed, rules);
    debug!(
        matched = matches.len(),
        rules = rules.len(),
        "analysis complete"
    );
    Ok(matches
        .iter()
        .map(|matched| build_diagnostic(matched, source))
        .collect())
}

/// [`analyze`] for raw file contents: validates that the bytes are UTF-8
/// before parsing, failing with [`AnalyzeError::InvalidSource`] otherwise.
pub fn analyze_bytes(source: &[u8], rules: &RuleSet) -> Result<Vec<Diagnostic>, AnalyzeError> {
    let text =
        std::str::from_utf8(source).map_err(|e| AnalyzeError::InvalidSource(e.to_string()))?;
    analyze(text, rules)
}
