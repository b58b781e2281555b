//! Tree walking: drives a depth-first pass over the parsed program,
//! maintains the ancestor chain, and collects rule matches that classify as
//! executed usages.
//!
//! The chain lives in one reused stack; every match copies it (and the node
//! facts it needs) into an owned [`MemberAccessMatch`] before the walk moves
//! on, so no collected value aliases walker state.

use swc_ecma_ast::{Expr, MemberExpr, SimpleAssignTarget, Stmt};
use swc_ecma_visit::{Visit, VisitWith};
use tracing::trace;

use crate::classifier::{AncestorKind, is_executed_usage};
use crate::location::SourceRange;
use crate::parser::ParsedProgram;
use crate::rules::{RuleSet, member_access_target};

/// Owned snapshot of one member access that matched a rule in an executed
/// context: its source range, the resolved name pair, and the ancestor-kind
/// chain (root to parent) captured at visit time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberAccessMatch {
    pub range: SourceRange,
    pub object: String,
    pub property: String,
    pub ancestors: Vec<AncestorKind>,
}

/// Walks the program and returns every confirmed match in source order.
pub fn collect_matches(parsed: &ParsedProgram, rules: &RuleSet) -> Vec<MemberAccessMatch> {
    let mut collector = MatchCollector {
        parsed,
        rules,
        stack: Vec::new(),
        matches: Vec::new(),
    };
    parsed.program().visit_with(&mut collector);
    collector.matches
}

struct MatchCollector<'a> {
    parsed: &'a ParsedProgram,
    rules: &'a RuleSet,
    stack: Vec<AncestorKind>,
    matches: Vec<MemberAccessMatch>,
}

impl MatchCollector<'_> {
    /// Matcher then classifier; the chain must not yet contain `member`.
    fn inspect_member(&mut self, member: &MemberExpr) {
        let Some((object, property)) = member_access_target(member) else {
            return;
        };
        if !self.rules.contains(object, property) {
            return;
        }
        if !is_executed_usage(&self.stack) {
            trace!(object, property, "suppressing feature-detection usage");
            return;
        }
        self.matches.push(MemberAccessMatch {
            range: self.parsed.span_range(member.span),
            object: object.to_string(),
            property: property.to_string(),
            // The stack keeps mutating as the walk continues.
            ancestors: self.stack.clone(),
        });
    }

    fn expr_kind(expr: &Expr) -> AncestorKind {
        match expr {
            Expr::Member(_) => AncestorKind::MemberAccess,
            Expr::Call(_) => AncestorKind::Call,
            _ => AncestorKind::Other,
        }
    }
}

impl Visit for MatchCollector<'_> {
    fn visit_expr(&mut self, expr: &Expr) {
        // Parentheses do not change the syntactic role of what they wrap
        // and stay out of the chain.
        if matches!(expr, Expr::Paren(_)) {
            expr.visit_children_with(self);
            return;
        }
        if let Expr::Member(member) = expr {
            self.inspect_member(member);
        }
        self.stack.push(Self::expr_kind(expr));
        expr.visit_children_with(self);
        self.stack.pop();
    }

    fn visit_stmt(&mut self, stmt: &Stmt) {
        self.stack.push(AncestorKind::Other);
        stmt.visit_children_with(self);
        self.stack.pop();
    }

    fn visit_simple_assign_target(&mut self, target: &SimpleAssignTarget) {
        // A member access on the left of `=` is an assignment target, not an
        // expression, but its object chain is still read before the store:
        // the inner access of `Symbol.iterator.x = v` executes.
        if let SimpleAssignTarget::Member(member) = target {
            self.inspect_member(member);
            self.stack.push(AncestorKind::MemberAccess);
            member.visit_children_with(self);
            self.stack.pop();
            return;
        }
        target.visit_children_with(self);
    }
}
