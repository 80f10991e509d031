//! Module to simplify expressions.
//!
//! This module provides the [`simplify`] function, which rewrites an expression into the simplest
//! equivalent form it can reach with a fixed set of rules. It does this by repeatedly walking the
//! expression in passes, applying the first matching rule at each node, and normalizing the
//! result after every pass. It stops once a pass changes nothing, or after [`MAX_PASSES`] passes.
//! In the latter case the result is not fully simplified; [`try_simplify`] reports this as
//! [`None`], and [`is_simplified`] never accepts such an expression.
//!
//! The rules are listed in [`rules`]. Trigonometric identities are not among them, so
//! `sin^2(x) + cos^2(x)` is left as is.

pub mod rules;
pub mod step;

use equiv_parser::ast::Expr;
use tracing::{debug, trace, warn};
use super::{normalize, order::strict_eq, step_collector::StepCollector};
use step::Step;

/// The maximum number of passes the simplifier makes over an expression.
pub const MAX_PASSES: usize = 64;

/// Walks the expression once, trying the rules at each node before visiting its children.
///
/// Returns the rewritten expression, and whether any rule was applied.
fn simplify_pass(expr: Expr, step_collector: &mut dyn StepCollector<Step>) -> (Expr, bool) {
    let (expr, mut changed) = match rules::all(&expr, step_collector) {
        Some(new_expr) => (new_expr, true),
        None => (expr, false),
    };

    let expr = expr.map_children(|child| {
        let (child, child_changed) = simplify_pass(child, step_collector);
        // use |= instead of = so an earlier change isn't forgotten
        changed |= child_changed;
        child
    });

    (expr, changed)
}

/// Base implementation of the simplification algorithm.
///
/// Returns the simplified expression, and whether it converged within `max_passes` passes.
fn inner_simplify(
    expr: &Expr,
    step_collector: &mut dyn StepCollector<Step>,
    max_passes: usize,
) -> (Expr, bool) {
    let mut expr = normalize(expr);

    for pass in 0..max_passes {
        let (new_expr, changed) = simplify_pass(expr, step_collector);
        expr = normalize(&new_expr);

        if !changed {
            trace!(pass, "simplification converged");
            return (expr, true);
        }
        debug!(pass, expr = %expr, "simplification pass");
    }

    warn!(expr = %expr, "simplification stopped after {} passes", max_passes);
    (expr, false)
}

/// Simplifies the given expression.
///
/// If the pass budget runs out, the partially simplified expression is returned.
pub fn simplify(expr: &Expr) -> Expr {
    inner_simplify(expr, &mut (), MAX_PASSES).0
}

/// Simplifies the given expression, returning [`None`] if the simplifier did not reach a fixed
/// point within [`MAX_PASSES`] passes.
pub fn try_simplify(expr: &Expr) -> Option<Expr> {
    let (expr, converged) = inner_simplify(expr, &mut (), MAX_PASSES);
    converged.then_some(expr)
}

/// Simplifies the given expression, also returning the steps taken by the simplifier in the
/// order they were applied. This is useful for debugging, and for showing the user why an
/// answer isn't considered simplified.
pub fn simplify_with_steps(expr: &Expr) -> (Expr, Vec<Step>) {
    let mut steps = Vec::new();
    let (expr, _) = inner_simplify(expr, &mut steps, MAX_PASSES);
    (expr, steps)
}

/// Returns true if the expression is already simplified: simplifying its normalized form yields
/// the same expression, up to the order of operands and parentheses. An expression the simplifier
/// can't finish with is not simplified.
pub fn is_simplified(expr: &Expr) -> bool {
    try_simplify(expr).is_some_and(|simplified| strict_eq(expr, &simplified))
}
