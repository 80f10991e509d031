//! Simplification rules for square roots.

use equiv_parser::ast::Expr;
use crate::primitive::{extract_square, Fraction, Number};
use crate::symbolic::{
    simplify::{rules::do_power, step::Step},
    step_collector::StepCollector,
};

/// Returns true if the exponent is one half.
fn is_half(exp: &Expr) -> bool {
    Number::from_expr(exp) == Fraction::new(1, 2).map(Number::Rational)
}

/// Moves the square factors of an integer out of its square root.
///
/// `sqrt(12) = 2*sqrt(3)`
/// `sqrt(16) = 4`
pub fn square_root(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_power(expr, |base, exp| {
        if !is_half(exp) {
            return None;
        }

        let n = base.as_int().filter(|n| *n > 1)?;
        match extract_square(n) {
            (1, _) => None,
            (outside, 1) => Some(Expr::int(outside)),
            (outside, inside) => Some(Expr::mul(vec![
                Expr::int(outside),
                Expr::sqrt(Expr::int(inside)),
            ])),
        }
    })?;

    step_collector.push(Step::SquareRoot);
    Some(opt)
}

/// Applies all root rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    square_root(expr, step_collector)
}
