//! Output rendering for check results

pub mod json;
pub mod pretty;

use escompat_core::Diagnostic;
use std::path::{Path, PathBuf};

/// Outcome of analyzing one file: its findings, or the reason it could not
/// be analyzed.
#[derive(Debug, Clone)]
pub struct FileReport {
    pub path: PathBuf,
    pub diagnostics: Vec<Diagnostic>,
    pub error: Option<String>,
}

impl FileReport {
    pub fn analyzed(path: &Path, diagnostics: Vec<Diagnostic>) -> Self {
        Self {
            path: path.to_path_buf(),
            diagnostics,
            error: None,
        }
    }

    pub fn failed(path: &Path, error: String) -> Self {
        Self {
            path: path.to_path_buf(),
            diagnostics: Vec::new(),
            error: Some(error),
        }
    }
}
