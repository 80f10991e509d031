//! Implementation of the simplification rules.
//!
//! Each rule is a function that takes the expression to simplify and returns `Some(expr)` with
//! the rewritten expression if the rule applies, or `None` if it does not. A rule only looks at
//! the root of the expression it is given; the simplifier takes care of visiting every node.

pub mod add;
pub mod distribute;
pub mod function;
pub mod multiply;
pub mod power;
pub mod root;

use equiv_parser::ast::{Expr, ExprKind};
use crate::symbolic::step_collector::StepCollector;
use super::step::Step;

/// If the expression is a sum, calls the given transformation function with the terms.
///
/// Returns `Some(expr)` with the transformed expression if a transformation was applied.
pub(crate) fn do_add(expr: &Expr, f: impl Fn(&[Expr]) -> Option<Expr>) -> Option<Expr> {
    if let ExprKind::Add { terms } = &expr.kind {
        f(terms)
    } else {
        None
    }
}

/// If the expression is a product, calls the given transformation function with the factors.
///
/// Returns `Some(expr)` with the transformed expression if a transformation was applied.
pub(crate) fn do_multiply(expr: &Expr, f: impl Fn(&[Expr]) -> Option<Expr>) -> Option<Expr> {
    if let ExprKind::Mul { terms } = &expr.kind {
        f(terms)
    } else {
        None
    }
}

/// If the expression is a power, calls the given transformation function with the base and the
/// exponent.
///
/// Returns `Some(expr)` with the transformed expression if a transformation was applied.
pub(crate) fn do_power(expr: &Expr, f: impl Fn(&Expr, &Expr) -> Option<Expr>) -> Option<Expr> {
    if let ExprKind::Pow { base, exp } = &expr.kind {
        f(base, exp)
    } else {
        None
    }
}

/// Applies the first rule that matches the root of the expression.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    add::all(expr, step_collector)
        .or_else(|| multiply::all(expr, step_collector))
        .or_else(|| power::all(expr, step_collector))
        .or_else(|| distribute::all(expr, step_collector))
        .or_else(|| root::all(expr, step_collector))
        .or_else(|| function::all(expr, step_collector))
}
