//! JSON output formatter for machine-readable reports

use crate::output::FileReport;
use escompat_core::Diagnostic;
use serde::Serialize;

#[derive(Serialize)]
pub struct JsonReport<'a> {
    pub version: &'static str,
    pub summary: JsonSummary,
    pub files: Vec<JsonFileReport<'a>>,
}

#[derive(Serialize)]
pub struct JsonSummary {
    pub total_files: usize,
    pub files_with_findings: usize,
    pub total_findings: usize,
    pub file_errors: usize,
}

#[derive(Serialize)]
pub struct JsonFileReport<'a> {
    pub path: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub findings: Vec<&'a Diagnostic>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'a str>,
}

/// Renders the versioned report; diagnostics keep their historical JSON
/// field names (`nodeLocation`, `errorWord`, ...).
pub fn render(reports: &[FileReport]) -> String {
    let output = JsonReport {
        version: env!("CARGO_PKG_VERSION"),
        summary: JsonSummary {
            total_files: reports.len(),
            files_with_findings: reports
                .iter()
                .filter(|r| !r.diagnostics.is_empty())
                .count(),
            total_findings: reports.iter().map(|r| r.diagnostics.len()).sum(),
            file_errors: reports.iter().filter(|r| r.error.is_some()).count(),
        },
        files: reports
            .iter()
            .map(|r| JsonFileReport {
                path: r.path.display().to_string(),
                findings: r.diagnostics.iter().collect(),
                error: r.error.as_deref(),
            })
            .collect(),
    };
    serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use escompat_core::RuleSet;
    use escompat_core::analyze;
    use escompat_core::rules::MemberAccessRule;
    use std::path::Path;

    fn symbol_iterator() -> RuleSet {
        RuleSet {
            member_expression: vec![MemberAccessRule::new("Symbol", "iterator")],
        }
    }

    #[test]
    fn report_carries_version_and_summary() {
        let diagnostics = analyze("Symbol.iterator()", &symbol_iterator()).unwrap();
        let reports = vec![
            FileReport::analyzed(Path::new("bad.js"), diagnostics),
            FileReport::analyzed(Path::new("fine.js"), Vec::new()),
        ];

        let parsed: serde_json::Value = serde_json::from_str(&render(&reports)).unwrap();

        assert_eq!(parsed["version"], env!("CARGO_PKG_VERSION"));
        assert_eq!(parsed["summary"]["total_files"], 2);
        assert_eq!(parsed["summary"]["files_with_findings"], 1);
        assert_eq!(parsed["summary"]["total_findings"], 1);
        assert_eq!(parsed["summary"]["file_errors"], 0);
    }

    #[test]
    fn findings_keep_historical_field_names() {
        let diagnostics = analyze("a[Symbol.iterator]", &symbol_iterator()).unwrap();
        let reports = vec![FileReport::analyzed(Path::new("bad.js"), diagnostics)];

        let parsed: serde_json::Value = serde_json::from_str(&render(&reports)).unwrap();

        let finding = &parsed["files"][0]["findings"][0];
        assert_eq!(finding["errorWord"], "Symbol.iterator");
        assert_eq!(finding["errorType"], "memberExpression");
        assert_eq!(finding["nodeLocation"]["row"], 0);
        assert_eq!(finding["nodeLocation"]["col"], 2);
    }

    #[test]
    fn file_errors_are_reported_inline() {
        let reports = vec![FileReport::failed(
            Path::new("broken.js"),
            "parse failed".to_string(),
        )];

        let parsed: serde_json::Value = serde_json::from_str(&render(&reports)).unwrap();

        assert_eq!(parsed["summary"]["file_errors"], 1);
        assert_eq!(parsed["files"][0]["error"], "parse failed");
        assert!(parsed["files"][0].get("findings").is_none());
    }
}
