//! Canonical normalization of expressions.
//!
//! Normalization is a cheap, purely structural rewrite: it flattens nested sums and products,
//! folds numeric literals, drops identity operands, removes hints, and sorts the operands of
//! sums and products into the order given by [`cmp_expr`]. Two expressions that differ only by
//! commutativity, associativity or parentheses normalize to the same tree.

use equiv_parser::ast::{Expr, ExprKind};
use crate::primitive::{Fraction, Number};
use super::order::cmp_expr;

/// Returns the canonical form of the given expression.
pub fn normalize(expr: &Expr) -> Expr {
    normalize_owned(expr.clone())
}

fn normalize_owned(expr: Expr) -> Expr {
    match expr.map_children(normalize_owned).kind {
        ExprKind::Add { terms } => normalize_add(terms),
        ExprKind::Mul { terms } => normalize_mul(terms),
        ExprKind::Pow { base, exp } => normalize_pow(*base, *exp),
        ExprKind::Abs { arg } => match arg.kind {
            ExprKind::Int { value } if value.checked_abs().is_some() => Expr::int(value.abs()),
            ExprKind::Float { value } => Expr::float(value.abs()),
            _ => Expr::abs(*arg),
        },
        ExprKind::Var { name, subscript } => Expr::new(ExprKind::Var {
            name,
            subscript: subscript.map(|s| Box::new(s.without_hints())),
        }),
        kind => Expr::new(kind),
    }
}

/// Reads a numeric literal as a [`Number`].
fn literal(expr: &Expr) -> Option<Number> {
    match expr.kind {
        ExprKind::Int { value } => Some(Number::Rational(Fraction::int(value))),
        ExprKind::Float { value } => Some(Number::Float(value)),
        _ => None,
    }
}

/// Moves the operands of nested sums (or products, if `product` is set) up into one list.
fn flatten(operands: Vec<Expr>, product: bool) -> Vec<Expr> {
    let mut out = Vec::with_capacity(operands.len());
    for operand in operands {
        match operand.kind {
            ExprKind::Add { terms } if !product => out.extend(terms),
            ExprKind::Mul { terms } if product => out.extend(terms),
            kind => out.push(Expr::new(kind)),
        }
    }
    out
}

fn normalize_add(terms: Vec<Expr>) -> Expr {
    let mut constant = Number::ZERO;
    let mut rest = Vec::new();
    for term in flatten(terms, false) {
        match literal(&term) {
            Some(n) => constant = constant.add(n),
            None => rest.push(term),
        }
    }

    if !constant.is_zero() {
        rest.push(constant.to_expr());
    }
    rest.sort_by(cmp_expr);

    match rest.len() {
        0 => Expr::int(0),
        1 => rest.remove(0),
        _ => Expr::add(rest),
    }
}

fn normalize_mul(terms: Vec<Expr>) -> Expr {
    let mut coefficient = Number::ONE;
    let mut rest = Vec::new();
    for factor in flatten(terms, true) {
        match literal(&factor) {
            Some(n) => coefficient = coefficient.mul(n),
            None => rest.push(factor),
        }
    }

    if !coefficient.is_one() {
        rest.push(coefficient.to_expr());
    }
    rest.sort_by(cmp_expr);

    match rest.len() {
        0 => Expr::int(1),
        1 => rest.remove(0),
        _ => Expr::mul(rest),
    }
}

fn normalize_pow(base: Expr, exp: Expr) -> Expr {
    match exp.as_int() {
        Some(1) => return base,
        Some(0) => return Expr::int(1),
        _ => (),
    }

    let folded = match (&base.kind, exp.as_int()) {
        (ExprKind::Int { value }, Some(n)) if n > 0 => u32::try_from(n)
            .ok()
            .and_then(|n| value.checked_pow(n))
            .map(Expr::int),
        (ExprKind::Float { value }, Some(n)) if n > 0 => i32::try_from(n)
            .ok()
            .map(|n| Expr::float(value.powi(n))),
        _ => None,
    };
    folded.unwrap_or_else(|| Expr::pow(base, exp))
}

#[cfg(test)]
mod tests {
    use equiv_parser::{parse, ParseOptions};
    use pretty_assertions::assert_eq;
    use super::*;

    fn expr(source: &str) -> Expr {
        parse(source, &ParseOptions::default()).expr.unwrap()
    }

    fn norm(source: &str) -> String {
        normalize(&expr(source)).print()
    }

    #[test]
    fn fold_literals() {
        assert_eq!(norm("2+2"), "4");
        assert_eq!(norm("2x5"), "10*x");
        assert_eq!(norm("1.5 + 1"), "2.5");
        assert_eq!(norm("2^10"), "1024");
        assert_eq!(norm("|-3|"), "3");
    }

    #[test]
    fn flatten_and_sort() {
        assert_eq!(norm("(c+a)+b"), "a+b+c");
        assert_eq!(norm("y(x z)"), "x*y*z");
        assert_eq!(norm("x + 1"), "1+x");
    }

    #[test]
    fn drop_identities() {
        assert_eq!(norm("x + 0"), "x");
        assert_eq!(norm("1x"), "x");
        assert_eq!(norm("x^1"), "x");
        assert_eq!(norm("x^0 + y"), "1+y");
        assert_eq!(norm("-(-x)"), "x");
    }

    #[test]
    fn empty_sum_is_zero() {
        assert_eq!(normalize(&expr("")), Expr::int(0));
    }

    #[test]
    fn keeps_symbolic_structure() {
        assert_eq!(norm("x/2"), "x/2");
        assert_eq!(norm("sqrt(x)"), "sqrt(x)");
        assert_eq!(norm("0x"), "0*x");
    }

    #[test]
    fn strips_hints() {
        assert_eq!(normalize(&expr("((x))")), Expr::var("x"));
        assert_eq!(normalize(&expr("x_{(1)}")), normalize(&expr("x_1")));
    }

    #[test]
    fn normalizes_equation_sides() {
        assert_eq!(norm("y + 0 = 2 + 2"), "y=4");
    }

    #[test]
    fn commutative_forms_agree() {
        assert_eq!(normalize(&expr("x*y + 2")), normalize(&expr("2 + y*x")));
    }

    #[test]
    fn idempotent() {
        for source in ["(a+b)(c+d)", "2x + 3 - x^1", "-(-(-x))", r"\frac{1}{2}x"] {
            let once = normalize(&expr(source));
            assert_eq!(normalize(&once), once, "source: {}", source);
        }
    }
}
