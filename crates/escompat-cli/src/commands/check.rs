//! Check command - analyzes JavaScript files for unsupported API usages

use crate::commands::RuleSelection;
use crate::output::{FileReport, json, pretty};
use anyhow::Result;
use clap::{Args, ValueEnum};
use escompat_core::RuleSet;
use escompat_core::analysis::analyze_bytes;
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;
use tracing::debug;
use walkdir::WalkDir;

const SUPPORTED_EXTENSIONS: &[&str] = &["js", "mjs", "cjs"];

#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum OutputFormat {
    /// Colored per-file rendering with a summary
    #[default]
    Pretty,
    /// The canonical annotated-text rendering, one block per finding
    Text,
    /// Machine-readable report
    Json,
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Files or directories to analyze
    #[arg(value_name = "PATHS", default_values_os_t = vec![PathBuf::from(".")])]
    pub paths: Vec<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t)]
    pub format: OutputFormat,

    #[command(flatten)]
    pub selection: RuleSelection,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl CheckArgs {
    pub fn run(&self) -> Result<()> {
        self.configure_colors();

        let reports = self.execute()?;

        let rendered = match self.format {
            OutputFormat::Pretty => pretty::render(&reports),
            OutputFormat::Text => render_text(&reports),
            OutputFormat::Json => json::render(&reports),
        };
        print!("{rendered}");

        let failed = reports
            .iter()
            .any(|r| !r.diagnostics.is_empty() || r.error.is_some());
        if failed {
            process::exit(1);
        }
        Ok(())
    }

    /// Discovers and analyzes every file, one report per file in discovery
    /// order. Per-file read and analysis failures land in the report rather
    /// than aborting the remaining files.
    pub fn execute(&self) -> Result<Vec<FileReport>> {
        let rules = self.selection.effective_rule_set(&self.config_start_dir())?;
        let files = self.discover_all()?;
        debug!(files = files.len(), rules = rules.len(), "starting check");

        if files.is_empty() {
            eprintln!("No JavaScript files found.");
            return Ok(Vec::new());
        }

        let reports = files
            .par_iter()
            .map(|file| analyze_file(file, &rules))
            .collect();
        Ok(reports)
    }

    fn discover_all(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for path in &self.paths {
            files.extend(discover_files(path)?);
        }
        Ok(files)
    }

    /// Config discovery starts next to the first analyzed path.
    fn config_start_dir(&self) -> PathBuf {
        let first = &self.paths[0];
        if first.is_file() {
            first
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from("."))
        } else {
            first.clone()
        }
    }

    fn configure_colors(&self) {
        if self.no_color || std::env::var("NO_COLOR").is_ok() {
            colored::control::set_override(false);
        }
    }
}

fn analyze_file(path: &Path, rules: &RuleSet) -> FileReport {
    let content = match fs::read(path) {
        Ok(content) => content,
        Err(e) => return FileReport::failed(path, format!("failed to read: {e}")),
    };
    match analyze_bytes(&content, rules) {
        Ok(diagnostics) => FileReport::analyzed(path, diagnostics),
        Err(e) => FileReport::failed(path, e.to_string()),
    }
}

/// Canonical annotated text per file under a path header; file failures
/// render as one-line notices.
fn render_text(reports: &[FileReport]) -> String {
    let mut out = String::new();
    for report in reports {
        if let Some(error) = &report.error {
            out.push_str(&format!("{}: {}\n", report.path.display(), error));
            continue;
        }
        if report.diagnostics.is_empty() {
            continue;
        }
        out.push_str(&format!("{}:\n", report.path.display()));
        out.push_str(&escompat_core::format(&report.diagnostics));
    }
    out
}

fn discover_files(path: &Path) -> Result<Vec<PathBuf>> {
    if !path.exists() {
        anyhow::bail!("Path does not exist: {}", path.display());
    }

    if path.is_file() {
        if is_supported_file(path) {
            return Ok(vec![path.to_path_buf()]);
        }
        return Ok(vec![]);
    }

    let files: Vec<PathBuf> = WalkDir::new(path)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_hidden(e))
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| is_supported_file(e.path()))
        .map(|e| e.path().to_path_buf())
        .collect();

    Ok(files)
}

fn is_supported_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| SUPPORTED_EXTENSIONS.contains(&ext))
        .unwrap_or(false)
}

fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    if entry.depth() == 0 {
        return false;
    }
    entry
        .file_name()
        .to_str()
        .map(|name| name.starts_with('.') || name == "node_modules")
        .unwrap_or(false)
}
