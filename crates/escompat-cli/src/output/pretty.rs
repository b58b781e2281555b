//! Pretty formatter for human-readable terminal output
//!
//! Colored per-file rendering of findings with their source fragments,
//! followed by a run summary.

use crate::output::FileReport;
use colored::Colorize;

/// Renders all file reports followed by a summary line. Files with nothing
/// to say are skipped; an empty run renders a single all-clear line.
pub fn render(reports: &[FileReport]) -> String {
    let mut out = String::new();

    for report in reports {
        if let Some(error) = &report.error {
            out.push_str(&format!(
                "{} {}: {}\n",
                "error:".red().bold(),
                report.path.display(),
                error
            ));
            continue;
        }
        if report.diagnostics.is_empty() {
            continue;
        }

        out.push_str(&format!("{}\n", report.path.display().to_string().bold()));
        for diagnostic in &report.diagnostics {
            out.push_str(&format!(
                "  {} invalid api invoke {}\n",
                "error:".red().bold(),
                format!("'{}'", diagnostic.error_word).cyan()
            ));
            out.push_str(&format!(
                "    {} {}:{}:{}\n",
                "-->".blue(),
                report.path.display(),
                diagnostic.node_location.row,
                diagnostic.node_location.col
            ));
            for (offset, line) in diagnostic.error_sentence.split('\n').enumerate() {
                let number = diagnostic.fragment_location.row + 1 + offset;
                out.push_str(&format!(
                    "    {} {} {}\n",
                    number.to_string().blue(),
                    "|".blue(),
                    line
                ));
            }
            out.push('\n');
        }
    }

    out.push_str(&render_summary(reports));
    out
}

fn render_summary(reports: &[FileReport]) -> String {
    let finding_count: usize = reports.iter().map(|r| r.diagnostics.len()).sum();
    let files_with_findings = reports
        .iter()
        .filter(|r| !r.diagnostics.is_empty())
        .count();
    let error_count = reports.iter().filter(|r| r.error.is_some()).count();

    if finding_count == 0 && error_count == 0 {
        return format!(
            "{} {} file(s) checked, no invalid api usages found\n",
            "✓".green().bold(),
            reports.len()
        );
    }

    let mut summary = format!(
        "Found {} invalid api usage(s) in {} file(s)",
        finding_count, files_with_findings
    );
    if error_count > 0 {
        summary.push_str(&format!(", {} file(s) failed", error_count));
    }
    summary.push('\n');
    summary
}
