//! End-to-end tests: rule files in, annotated text out.

use escompat_core::rules::MemberAccessRule;
use escompat_core::{AnalyzeError, RuleSet, analyze, format};

const SYMBOL_RULES: &str =
    r#"{"memberExpression": [{"object": "Symbol", "property": "iterator"}]}"#;

#[test]
fn analyze_then_format_a_realistic_module() {
    let source = "\
function toArray(value) {
    if (typeof Symbol.iterator === \"undefined\") {
        return polyfillToArray(value);
    }
    var step;
    var iterator = value[Symbol.iterator]();
    var result = [];
    while (!(step = iterator.next()).done) {
        result.push(step.value);
    }
    return result;
}
";
    let rules = RuleSet::from_json_str(SYMBOL_RULES).unwrap();

    let diagnostics = analyze(source, &rules).unwrap();

    // The typeof probe on line 2 is feature detection; only the indexed
    // access on line 6 executes.
    assert_eq!(diagnostics.len(), 1);
    let diagnostic = &diagnostics[0];
    assert_eq!(diagnostic.error_word, "Symbol.iterator");
    assert_eq!(diagnostic.node_location.row, 5);
    assert_eq!(diagnostic.node_location.col, 25);
    assert_eq!(diagnostic.fragment_location.row, 2);

    let rendered = format(&diagnostics);
    assert!(rendered.starts_with(
        "code:5:25 - error Find invalid api invoke 'Symbol.iterator'.\n\n"
    ));
    // The window is rows 2..=8, numbered from 3, with the shared
    // four-space indent of those lines stripped.
    assert!(rendered.contains("\n3     return polyfillToArray(value);\n"));
    assert!(rendered.contains("\n4 }\n"));
    assert!(rendered.contains("\n6 var iterator = value[Symbol.iterator]();\n"));
    assert!(rendered.contains("\n9     result.push(step.value);\n"));
}

#[test]
fn merged_rule_files_report_in_source_order() {
    let symbol = RuleSet::from_json_str(SYMBOL_RULES).unwrap();
    let object = RuleSet {
        member_expression: vec![MemberAccessRule::new("Object", "assign")],
    };
    let rules = symbol.merge(object);

    let source = "var merged = Object.assign({}, a);\nvar it = list[Symbol.iterator]();\n";
    let diagnostics = analyze(source, &rules).unwrap();

    assert_eq!(diagnostics.len(), 2);
    assert_eq!(diagnostics[0].error_word, "Object.assign");
    assert_eq!(diagnostics[1].error_word, "Symbol.iterator");
}

#[test]
fn formatting_an_empty_result_is_empty() {
    let rules = RuleSet::from_json_str(SYMBOL_RULES).unwrap();
    let diagnostics = analyze("var x = 1;", &rules).unwrap();
    assert!(diagnostics.is_empty());
    assert_eq!(format(&diagnostics), "");
}

#[test]
fn parse_failures_surface_before_any_diagnostics() {
    let rules = RuleSet::from_json_str(SYMBOL_RULES).unwrap();
    let err = analyze("{ invalid +++", &rules).unwrap_err();
    match err {
        AnalyzeError::Parse(parse) => {
            assert!(parse.line >= 1);
            assert!(!parse.to_string().is_empty());
        }
        other => panic!("expected a parse failure, got {other:?}"),
    }
}
