//! Constructors the parser uses to assemble sums, products and negations while reading input.
//!
//! These keep the tree flat as it is built: `a + b + c` becomes one sum of three terms instead of
//! nested sums, unless the user wrote parentheses.

use super::{Expr, ExprKind};

impl Expr {
    /// Returns `left + right`, appending to `left` if it already is a sum that wasn't written in
    /// parentheses.
    pub fn create_or_append_add(left: Expr, right: Expr) -> Expr {
        match left {
            Expr { kind: ExprKind::Add { mut terms }, hints } if !hints.parens => {
                terms.push(right);
                Expr { kind: ExprKind::Add { terms }, hints }
            },
            left => Expr::add(vec![left, right]),
        }
    }

    /// Returns `left * right`, appending to `left` if it already is a product that wasn't written
    /// in parentheses. Adjacent numeric literals at the end of the product are folded together.
    pub fn create_or_append_mul(left: Expr, right: Expr) -> Expr {
        let (mut terms, hints) = match left {
            Expr { kind: ExprKind::Mul { terms }, hints } if !hints.parens => (terms, hints),
            left => (vec![left], Default::default()),
        };
        terms.push(right);
        fold_trailing_literals(&mut terms);

        if terms.len() == 1 {
            terms.remove(0)
        } else {
            Expr { kind: ExprKind::Mul { terms }, hints }
        }
    }

    /// Returns `left / right`, which is `left` multiplied by the reciprocal of `right`.
    pub fn divide(left: Expr, right: Expr) -> Expr {
        Expr::create_or_append_mul(left, Expr::recip(right))
    }

    /// Returns the negation of `expr`.
    ///
    /// The sign is folded into the expression where possible, so that repeated negation never
    /// nests: a numeric literal is negated directly, a product's leading literal is negated (or
    /// removed, if it was `-1`), and anything else is wrapped once as `-1 * expr`.
    pub fn negate(expr: Expr) -> Expr {
        if expr.hints.parens {
            return Expr::mul(vec![Expr::int(-1), expr]);
        }

        match expr.kind {
            ExprKind::Int { value } => match value.checked_neg() {
                Some(value) => Expr::int(value),
                None => Expr::float(-(value as f64)),
            },
            ExprKind::Float { value } => Expr::float(-value),
            ExprKind::Mul { mut terms } if terms.first().is_some_and(is_plain_literal) => {
                let coefficient = terms.remove(0);
                if !coefficient.is_int(-1) {
                    terms.insert(0, Expr::negate(coefficient));
                }

                if terms.len() == 1 {
                    terms.remove(0)
                } else {
                    Expr { kind: ExprKind::Mul { terms }, hints: expr.hints }
                }
            },
            kind => Expr::mul(vec![Expr::int(-1), Expr { kind, hints: expr.hints }]),
        }
    }
}

/// Returns true if the expression is a numeric literal that wasn't written in parentheses.
fn is_plain_literal(expr: &Expr) -> bool {
    expr.is_number() && !expr.hints.parens
}

/// Multiplies the last two factors together while both are plain numeric literals.
fn fold_trailing_literals(terms: &mut Vec<Expr>) {
    while terms.len() >= 2 {
        let (a, b) = (&terms[terms.len() - 2], &terms[terms.len() - 1]);
        if !is_plain_literal(a) || !is_plain_literal(b) {
            return;
        }

        let product = match (&a.kind, &b.kind) {
            (ExprKind::Int { value: a }, ExprKind::Int { value: b }) => match a.checked_mul(*b) {
                Some(value) => Expr::int(value),
                None => return,
            },
            _ => match (a.as_number(), b.as_number()) {
                (Some(a), Some(b)) => Expr::float(a * b),
                _ => return,
            },
        };

        terms.truncate(terms.len() - 2);
        terms.push(product);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn append_to_unparenthesized_sum() {
        let sum = Expr::add(vec![Expr::var("a"), Expr::var("b")]);
        assert_eq!(
            Expr::create_or_append_add(sum, Expr::var("c")),
            Expr::add(vec![Expr::var("a"), Expr::var("b"), Expr::var("c")]),
        );
    }

    #[test]
    fn parenthesized_sum_is_nested() {
        let sum = Expr::add(vec![Expr::var("a"), Expr::var("b")]).with_parens();
        assert_eq!(
            Expr::create_or_append_add(sum.clone(), Expr::var("c")),
            Expr::add(vec![sum, Expr::var("c")]),
        );
    }

    #[test]
    fn fold_mixed_literals() {
        assert_eq!(Expr::create_or_append_mul(Expr::int(2), Expr::float(0.5)), Expr::float(1.0));
    }

    #[test]
    fn overflowing_fold_is_skipped() {
        let expr = Expr::create_or_append_mul(Expr::int(i64::MAX), Expr::int(2));
        assert_eq!(expr, Expr::mul(vec![Expr::int(i64::MAX), Expr::int(2)]));
    }

    #[test]
    fn negate_parenthesized_wraps() {
        let group = Expr::var("x").with_parens();
        assert_eq!(Expr::negate(group.clone()), Expr::mul(vec![Expr::int(-1), group]));
    }

    #[test]
    fn negate_product_coefficient() {
        let product = Expr::mul(vec![Expr::int(-1), Expr::var("x"), Expr::var("y")]);
        assert_eq!(Expr::negate(product), Expr::mul(vec![Expr::var("x"), Expr::var("y")]));
    }
}
