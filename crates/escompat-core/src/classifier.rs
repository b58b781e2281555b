//! Context classification: decides whether a matched member access is an
//! executed usage worth reporting or a feature-detection probe to suppress.
//!
//! The classifier sees only the syntactic kinds of the nodes enclosing a
//! match, ordered root to parent. That chain is captured by the walker at
//! visit time ([`crate::walker`]); nothing here touches the live tree.

/// Syntactic kind of one enclosing node in an ancestor chain.
///
/// Only member accesses and calls influence classification; every other
/// enclosing statement or expression collapses to [`AncestorKind::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AncestorKind {
    /// An `object.property` (or `object[key]`) access expression.
    MemberAccess,
    /// A call expression. `new` expressions are not calls for this purpose.
    Call,
    /// Any other enclosing node.
    Other,
}

/// True when the matched access would actually execute at runtime.
///
/// Either sufficient condition confirms the match; failing both drops it.
/// Dropping is deliberate: an access that only feeds a comparison such as
/// `typeof Symbol.iterator === "undefined"` is feature detection, and the
/// policy here trades recall for precision.
pub fn is_executed_usage(ancestors: &[AncestorKind]) -> bool {
    is_nested_member_object(ancestors) || is_call_target(ancestors)
}

/// Nested-property condition: the immediate parent is itself a member
/// access, so the matched expression is the object of a further property
/// read (`a[Symbol.iterator]` reads the symbol to index with it).
fn is_nested_member_object(ancestors: &[AncestorKind]) -> bool {
    matches!(ancestors.last(), Some(AncestorKind::MemberAccess))
}

/// Call-target condition: the nearest enclosing node is a call, so the
/// access sits in the position the engine will invoke or evaluate as part
/// of performing the call (`Symbol.iterator()`, `foo(Symbol.iterator)`).
/// A callee has no node between itself and its call, so this probes the
/// same chain slot as the member probe.
fn is_call_target(ancestors: &[AncestorKind]) -> bool {
    matches!(ancestors.last(), Some(AncestorKind::Call))
}
