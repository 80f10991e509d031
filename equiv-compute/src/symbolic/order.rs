//! A total order over expressions, used to put the operands of sums and products into a
//! canonical sequence.
//!
//! Nodes are ordered first by the rank of their variant, then by a per-variant key. Numbers sort
//! first, so a product prints with its coefficient in front (`3*x`), and a sum with its constant
//! term in front. Powers sort next to their base.

use equiv_parser::ast::{Expr, ExprKind};
use std::cmp::Ordering;

/// Returns the rank of the variant of the expression.
fn rank(expr: &Expr) -> u8 {
    match &expr.kind {
        ExprKind::Int { .. } | ExprKind::Float { .. } => 0,
        ExprKind::Const { .. } => 1,
        ExprKind::Var { .. } => 2,
        ExprKind::Pow { .. } => 3,
        ExprKind::Mul { .. } => 4,
        ExprKind::Add { .. } => 5,
        ExprKind::Func { .. } => 6,
        ExprKind::Log { .. } => 7,
        ExprKind::Trig { .. } => 8,
        ExprKind::Abs { .. } => 9,
        ExprKind::Equation { .. } => 10,
    }
}

fn is_int(expr: &Expr) -> bool {
    matches!(expr.kind, ExprKind::Int { .. })
}

/// Compares two sequences of expressions lexicographically.
fn cmp_slices<'a>(
    a: impl IntoIterator<Item = &'a Expr>,
    b: impl IntoIterator<Item = &'a Expr>,
) -> Ordering {
    let mut a = a.into_iter();
    let mut b = b.into_iter();
    loop {
        match (a.next(), b.next()) {
            (Some(x), Some(y)) => match cmp_expr(x, y) {
                Ordering::Equal => continue,
                other => return other,
            },
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
        }
    }
}

/// Compares two expressions in canonical order. Hints are ignored.
///
/// A power is ordered by its base first, right after the base itself, so `x*x^2*y` is in order.
pub fn cmp_expr(a: &Expr, b: &Expr) -> Ordering {
    match (&a.kind, &b.kind) {
        (ExprKind::Pow { .. }, ExprKind::Pow { .. }) => (),
        (ExprKind::Pow { base, .. }, _) => return cmp_expr(base, b).then(Ordering::Greater),
        (_, ExprKind::Pow { base, .. }) => return cmp_expr(a, base).then(Ordering::Less),
        _ => (),
    }

    rank(a).cmp(&rank(b)).then_with(|| match (&a.kind, &b.kind) {
        (ExprKind::Int { .. } | ExprKind::Float { .. }, _) => {
            let (x, y) = (a.as_number().unwrap_or_default(), b.as_number().unwrap_or_default());
            x.total_cmp(&y).then_with(|| is_int(a).cmp(&is_int(b)).reverse())
        },
        (ExprKind::Const { name: x }, ExprKind::Const { name: y }) => x.cmp(y),
        (
            ExprKind::Var { name: x, subscript: sx },
            ExprKind::Var { name: y, subscript: sy },
        ) => x.cmp(y).then_with(|| cmp_slices(sx.iter().map(|s| &**s), sy.iter().map(|s| &**s))),
        (ExprKind::Pow { base: bx, exp: ex }, ExprKind::Pow { base: by, exp: ey }) => {
            cmp_expr(bx, by).then_with(|| cmp_expr(ex, ey))
        },
        (ExprKind::Mul { terms: x }, ExprKind::Mul { terms: y })
        | (ExprKind::Add { terms: x }, ExprKind::Add { terms: y }) => {
            x.len().cmp(&y.len()).then_with(|| cmp_slices(x, y))
        },
        (ExprKind::Func { name: nx, arg: ax }, ExprKind::Func { name: ny, arg: ay }) => {
            nx.cmp(ny).then_with(|| cmp_expr(ax, ay))
        },
        (ExprKind::Log { base: bx, arg: ax }, ExprKind::Log { base: by, arg: ay }) => {
            cmp_expr(bx, by).then_with(|| cmp_expr(ax, ay))
        },
        (
            ExprKind::Trig { func: fx, exp: ex, arg: ax },
            ExprKind::Trig { func: fy, exp: ey, arg: ay },
        ) => fx.cmp(fy)
            .then_with(|| cmp_slices(ex.iter().map(|e| &**e), ey.iter().map(|e| &**e)))
            .then_with(|| cmp_expr(ax, ay)),
        (ExprKind::Abs { arg: x }, ExprKind::Abs { arg: y }) => cmp_expr(x, y),
        (
            ExprKind::Equation { lhs: lx, relation: rx, rhs: hx },
            ExprKind::Equation { lhs: ly, relation: ry, rhs: hy },
        ) => rx.cmp(ry)
            .then_with(|| cmp_expr(lx, ly))
            .then_with(|| cmp_expr(hx, hy)),
        // ranks are equal, so the variants are equal
        _ => Ordering::Equal,
    })
}

/// Returns the expression with every hint removed and the operands of every sum and product
/// sorted. Unlike normalization, nothing is flattened, folded or dropped.
pub fn canonical_order(expr: &Expr) -> Expr {
    let expr = Expr::new(expr.kind.clone()).map_children(|child| canonical_order(&child));
    match expr.kind {
        ExprKind::Add { mut terms } => {
            terms.sort_by(cmp_expr);
            Expr::add(terms)
        },
        ExprKind::Mul { mut terms } => {
            terms.sort_by(cmp_expr);
            Expr::mul(terms)
        },
        ExprKind::Var { name, subscript } => Expr::new(ExprKind::Var {
            name,
            subscript: subscript.map(|s| Box::new(s.without_hints())),
        }),
        kind => Expr::new(kind),
    }
}

/// Returns true if the two expressions are structurally identical once hints are ignored and the
/// operands of sums and products are put into canonical order.
pub fn strict_eq(a: &Expr, b: &Expr) -> bool {
    canonical_order(a) == canonical_order(b)
}

#[cfg(test)]
mod tests {
    use equiv_parser::{parse, ParseOptions};
    use pretty_assertions::assert_eq;
    use super::*;

    fn expr(source: &str) -> Expr {
        parse(source, &ParseOptions::default()).expr.unwrap()
    }

    #[test]
    fn numbers_before_symbols() {
        let mut terms = vec![Expr::var("x"), Expr::int(3), Expr::var("a")];
        terms.sort_by(cmp_expr);
        assert_eq!(terms, vec![Expr::int(3), Expr::var("a"), Expr::var("x")]);
    }

    #[test]
    fn powers_follow_their_base() {
        let mut terms = vec![Expr::var("y"), Expr::pow(Expr::var("x"), Expr::int(2)), Expr::var("x")];
        terms.sort_by(cmp_expr);
        assert_eq!(terms, vec![Expr::var("x"), Expr::pow(Expr::var("x"), Expr::int(2)), Expr::var("y")]);
    }

    #[test]
    fn int_and_float_of_same_value_are_ordered() {
        assert_eq!(cmp_expr(&Expr::int(2), &Expr::float(2.0)), Ordering::Less);
    }

    #[test]
    fn canonical_order_ignores_operand_order() {
        assert_eq!(canonical_order(&expr("y*x + 1")), canonical_order(&expr("1 + x*y")));
        assert_eq!(canonical_order(&expr("(x)")), canonical_order(&expr("x")));
    }

    #[test]
    fn canonical_order_does_not_flatten() {
        assert_ne!(canonical_order(&expr("(a+b)+c")), canonical_order(&expr("a+b+c")));
    }

    #[test]
    fn strict_eq_is_not_semantic() {
        assert!(strict_eq(&expr("x*y"), &expr("(y x)")));
        assert!(!strict_eq(&expr("2+2"), &expr("4")));
    }
}
