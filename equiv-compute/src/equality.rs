//! Semantic equality of expressions.
//!
//! Two expressions are equal if they are the same after simplification, or, failing that, if
//! they agree when evaluated at a number of random points (see [`crate::numerical::sample`]).
//!
//! Equations are equal if they describe the same relation: `y = 2x` and `2y - 4x = 0` are equal,
//! as are `x < 1` and `1 > x`, but `x < 1` and `-x < -1` are not.

use equiv_parser::{ast::{Expr, ExprKind}, tokenizer::Relation};
use tracing::trace;
use crate::numerical::{
    sample::{sample_equal, sample_proportional},
    SamplingConfig,
};
use crate::symbolic::{simplify, strict_eq};

/// Returns true if `a` and `b` are mathematically equal, using the default sampling parameters.
pub fn equal(a: &Expr, b: &Expr) -> bool {
    equal_with(a, b, &SamplingConfig::default())
}

/// Returns true if `a` and `b` are mathematically equal.
pub fn equal_with(a: &Expr, b: &Expr, config: &SamplingConfig) -> bool {
    match (&a.kind, &b.kind) {
        (
            ExprKind::Equation { lhs: lhs_a, relation: relation_a, rhs: rhs_a },
            ExprKind::Equation { lhs: lhs_b, relation: relation_b, rhs: rhs_b },
        ) => equations_equal(
            (lhs_a, *relation_a, rhs_a),
            (lhs_b, *relation_b, rhs_b),
            config,
        ),
        (ExprKind::Equation { .. }, _) | (_, ExprKind::Equation { .. }) => false,
        _ => {
            if strict_eq(&simplify(a), &simplify(b)) {
                trace!("equal after simplification");
                return true;
            }
            sample_equal(a, b, config)
        },
    }
}

/// Returns `lhs - rhs`.
fn difference(lhs: &Expr, rhs: &Expr) -> Expr {
    Expr::add(vec![
        lhs.clone(),
        Expr::mul(vec![Expr::int(-1), rhs.clone()]),
    ])
}

fn equations_equal(
    (lhs_a, relation_a, rhs_a): (&Expr, Relation, &Expr),
    (lhs_b, relation_b, rhs_b): (&Expr, Relation, &Expr),
    config: &SamplingConfig,
) -> bool {
    // `a > b` is written the other way around as `b < a`
    let (lhs_b, rhs_b) = if relation_a == relation_b {
        (lhs_b, rhs_b)
    } else if relation_a == relation_b.mirror() {
        (rhs_b, lhs_b)
    } else {
        return false;
    };

    let (diff_a, diff_b) = (difference(lhs_a, rhs_a), difference(lhs_b, rhs_b));
    if strict_eq(&simplify(&diff_a), &simplify(&diff_b)) {
        trace!("equation sides equal after simplification");
        return true;
    }

    // scaling both sides of an inequality by a negative number flips it
    sample_proportional(&diff_a, &diff_b, !relation_a.is_symmetric(), config)
}

#[cfg(test)]
mod tests {
    use equiv_parser::{parse, ParseOptions};
    use super::*;

    fn eq(a: &str, b: &str) -> bool {
        let parse = |source| parse(source, &ParseOptions::default()).expr.unwrap();
        equal(&parse(a), &parse(b))
    }

    #[test]
    fn simplification_fast_path() {
        assert!(eq("2+2", "4"));
        assert!(eq("x+x", "2x"));
        assert!(eq("x*y", "y*x"));
        assert!(eq("2(x+1)", "2x+2"));
    }

    #[test]
    fn sampled_equality() {
        assert!(eq("sin^2 x + cos^2 x", "1"));
        assert!(eq("|x|", "sqrt(x^2)"));
        assert!(!eq("x+1", "x+2"));
        assert!(!eq("sqrt(x)", "x"));
    }

    #[test]
    fn restricted_domains() {
        assert!(eq("arccos(x)", "pi/2 - arcsin(x)"));
        assert!(eq("sqrt(1-x^2)", "sqrt((1-x)(1+x))"));
    }

    #[test]
    fn large_powers_are_compared_quickly() {
        let start = std::time::Instant::now();
        assert!(eq("(a+b+c+d+e+f+g+h)^6", "(h+g+f+e+d+c+b+a)^6"));
        assert!(eq("(a+b+c+d+e+f+g+h)^6", "(a+b+c+d+e+f+g+h)^5 (a+b+c+d+e+f+g+h)"));
        assert!(!eq("(a+b+c+d+e+f+g+h)^6", "(a+b+c+d+e+f+g+h)^5"));
        assert!(start.elapsed() < std::time::Duration::from_secs(5));
    }

    #[test]
    fn equations() {
        assert!(eq("y = 2x", "2x = y"));
        assert!(eq("y = 2x", "2y - 4x = 0"));
        assert!(!eq("y = 2x", "y = 3x"));
        assert!(!eq("y = 2x", "y != 2x"));
    }

    #[test]
    fn inequalities() {
        assert!(eq("x < 1", "1 > x"));
        assert!(eq("x < 1", "-x > -1"));
        assert!(eq("2x <= 2", "x <= 1"));
        assert!(!eq("x < 1", "-x < -1"));
        assert!(!eq("x < 1", "x <= 1"));
    }

    #[test]
    fn equation_and_expression() {
        assert!(!eq("x = 1", "x - 1"));
        assert!(!eq("x", "x = x"));
    }
}
