//! Rule sets: which `(object, property)` accesses are disallowed.
//!
//! A rule set is a typed rendition of the on-disk JSON shape: an object with
//! a `memberExpression` array of `{object, property}` entries. Validation
//! happens once at the boundary ([`RuleSet::from_json_value`]); past that
//! point a `RuleSet` is structurally sound by construction and read-only for
//! the duration of an analysis.

use serde::{Deserialize, Serialize};
use swc_ecma_ast::{Expr, MemberExpr, MemberProp};

use crate::analysis::AnalyzeError;

/// Category name reported on diagnostics produced by member-expression
/// rules, matching the key used in rule files.
pub const MEMBER_EXPRESSION: &str = "memberExpression";

/// One disallowed static member access, e.g. `Symbol.iterator`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberAccessRule {
    pub object: String,
    pub property: String,
}

impl MemberAccessRule {
    pub fn new(object: impl Into<String>, property: impl Into<String>) -> Self {
        Self {
            object: object.into(),
            property: property.into(),
        }
    }
}

/// Ordered collection of member-access rules, keyed by category.
///
/// The empty set is the merge identity; analyses run against it report
/// nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    #[serde(rename = "memberExpression", default)]
    pub member_expression: Vec<MemberAccessRule>,
}

impl RuleSet {
    /// Validates and deserializes a rule set from a parsed JSON document.
    ///
    /// The document must be an object; `null`, scalars and arrays fail with
    /// [`AnalyzeError::InvalidRuleSet`], as does a malformed category or
    /// entry. Categories this engine does not know are ignored.
    pub fn from_json_value(value: serde_json::Value) -> Result<Self, AnalyzeError> {
        if !value.is_object() {
            return Err(AnalyzeError::InvalidRuleSet(format!(
                "expected a rule mapping, found {}",
                json_kind(&value)
            )));
        }
        serde_json::from_value(value).map_err(|e| AnalyzeError::InvalidRuleSet(e.to_string()))
    }

    /// Validates and deserializes a rule set from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self, AnalyzeError> {
        let value: serde_json::Value =
            serde_json::from_str(text).map_err(|e| AnalyzeError::InvalidRuleSet(e.to_string()))?;
        Self::from_json_value(value)
    }

    /// Merges `other` into `self`: entries of shared categories concatenate,
    /// this set's entries first. Associative, with [`RuleSet::default`] as
    /// the identity on both sides.
    pub fn merge(mut self, other: RuleSet) -> RuleSet {
        self.member_expression.extend(other.member_expression);
        self
    }

    /// True when some entry equals the pair exactly (case-sensitive).
    pub fn contains(&self, object: &str, property: &str) -> bool {
        self.member_expression
            .iter()
            .any(|rule| rule.object == object && rule.property == property)
    }

    pub fn len(&self) -> usize {
        self.member_expression.len()
    }

    pub fn is_empty(&self) -> bool {
        self.member_expression.is_empty()
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

/// Static API surface introduced after ES5, shipped as the default rule set.
const ES5_BASELINE: &[(&str, &str)] = &[
    ("Symbol", "iterator"),
    ("Symbol", "asyncIterator"),
    ("Symbol", "hasInstance"),
    ("Symbol", "isConcatSpreadable"),
    ("Symbol", "match"),
    ("Symbol", "replace"),
    ("Symbol", "search"),
    ("Symbol", "species"),
    ("Symbol", "split"),
    ("Symbol", "toPrimitive"),
    ("Symbol", "toStringTag"),
    ("Symbol", "unscopables"),
    ("Symbol", "for"),
    ("Symbol", "keyFor"),
    ("Array", "from"),
    ("Array", "of"),
    ("Object", "assign"),
    ("Object", "is"),
    ("Object", "entries"),
    ("Object", "values"),
    ("Object", "fromEntries"),
    ("Object", "getOwnPropertySymbols"),
    ("Object", "setPrototypeOf"),
    ("Number", "isInteger"),
    ("Number", "isSafeInteger"),
    ("Number", "isFinite"),
    ("Number", "isNaN"),
    ("Number", "parseFloat"),
    ("Number", "parseInt"),
    ("Number", "EPSILON"),
    ("Number", "MAX_SAFE_INTEGER"),
    ("Number", "MIN_SAFE_INTEGER"),
    ("Math", "trunc"),
    ("Math", "sign"),
    ("Math", "cbrt"),
    ("Math", "clz32"),
    ("Math", "fround"),
    ("Math", "hypot"),
    ("Math", "imul"),
    ("Math", "log2"),
    ("Math", "log10"),
    ("Math", "log1p"),
    ("Math", "expm1"),
    ("String", "fromCodePoint"),
    ("String", "raw"),
    ("Promise", "all"),
    ("Promise", "allSettled"),
    ("Promise", "any"),
    ("Promise", "race"),
    ("Promise", "resolve"),
    ("Promise", "reject"),
];

/// The built-in rule set: static APIs absent from ES5 runtimes.
pub fn es5_baseline() -> RuleSet {
    RuleSet {
        member_expression: ES5_BASELINE
            .iter()
            .map(|&(object, property)| MemberAccessRule::new(object, property))
            .collect(),
    }
}

/// Extracts the `(object, property)` name pair from a member access.
///
/// The object must be a plain identifier. The property may be a plain
/// identifier (`a.b`) or a computed property whose expression is itself a
/// plain identifier (`a[b]`), mirroring how the tree represents both forms
/// with an identifier in the property slot. Any other shape (string-literal
/// key, nested member, private name) yields `None` and can never match a
/// rule.
pub fn member_access_target(node: &MemberExpr) -> Option<(&str, &str)> {
    let object = match &*node.obj {
        Expr::Ident(ident) => ident.sym.as_ref(),
        _ => return None,
    };
    let property = match &node.prop {
        MemberProp::Ident(ident) => ident.sym.as_ref(),
        MemberProp::Computed(computed) => match &*computed.expr {
            Expr::Ident(ident) => ident.sym.as_ref(),
            _ => return None,
        },
        MemberProp::PrivateName(_) => return None,
    };
    Some((object, property))
}

/// True when the member access resolves to a pair listed in `rules`.
pub fn matches_rules(node: &MemberExpr, rules: &RuleSet) -> bool {
    member_access_target(node)
        .is_some_and(|(object, property)| rules.contains(object, property))
}
