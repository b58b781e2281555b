//! Core analysis engine for escompat: finds uses of configured
//! "unsupported API" member accesses in JavaScript source, keeping only the
//! ones that would actually execute at runtime (feature-detection probes
//! are deliberately not reported).
//!
//! The pipeline is strictly forward: parse ([`parser`]), walk with rule
//! matching and context classification ([`walker`], [`rules`],
//! [`classifier`]), locate and annotate ([`diagnostic`], [`location`]),
//! render ([`format`]).
//!
//! ```
//! use escompat_core::rules::RuleSet;
//!
//! let rules = RuleSet::from_json_str(
//!     r#"{"memberExpression": [{"object": "Symbol", "property": "iterator"}]}"#,
//! )?;
//! let diagnostics = escompat_core::analyze("a[Symbol.iterator]", &rules)?;
//! assert_eq!(diagnostics.len(), 1);
//! assert_eq!(diagnostics[0].error_word, "Symbol.iterator");
//! # Ok::<(), escompat_core::analysis::AnalyzeError>(())
//! ```

pub mod analysis;
pub mod classifier;
pub mod config;
pub mod diagnostic;
pub mod format;
pub mod location;
pub mod parser;
pub mod rules;
pub mod walker;

pub use analysis::{AnalyzeError, analyze, analyze_bytes};
pub use diagnostic::Diagnostic;
pub use format::format;
pub use rules::RuleSet;
