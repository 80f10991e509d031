//! Simplification rules for absolute values, trigonometric functions and logarithms applied to
//! special values.

use equiv_parser::{ast::{Expr, ExprKind}, tokenizer::TrigFn};
use crate::primitive::Number;
use crate::symbolic::{
    order::strict_eq,
    simplify::step::Step,
    step_collector::StepCollector,
};

/// `|-3| = 3`
/// `|-1/2| = 1/2`
pub fn abs_numeric(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let ExprKind::Abs { arg } = &expr.kind else {
        return None;
    };
    let value = Number::from_expr(arg)?;

    step_collector.push(Step::AbsNumeric);
    Some(value.abs().to_expr())
}

/// `sin(0) = 0`
/// `tan(0) = 0`
/// `cos(0) = 1`
pub fn trig_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let ExprKind::Trig { func, exp, arg } = &expr.kind else {
        return None;
    };
    if arg.as_number() != Some(0.0) {
        return None;
    }

    // `0^exp` is only zero for a positive exponent
    let positive_exp = exp.as_ref()
        .map(|exp| Number::from_expr(exp).is_some_and(|n| n.to_f64() > 0.0))
        .unwrap_or(true);
    let value = match func {
        TrigFn::Sin | TrigFn::Tan | TrigFn::ArcSin | TrigFn::ArcTan if positive_exp => Expr::int(0),
        TrigFn::Cos | TrigFn::Sec => Expr::int(1),
        _ => return None,
    };

    step_collector.push(Step::TrigZero);
    Some(value)
}

/// `log_b(1) = 0`
pub fn log_one(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let ExprKind::Log { arg, .. } = &expr.kind else {
        return None;
    };
    if !arg.is_int(1) {
        return None;
    }

    step_collector.push(Step::LogOne);
    Some(Expr::int(0))
}

/// `log_b(b) = 1`
pub fn log_base(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let ExprKind::Log { base, arg } = &expr.kind else {
        return None;
    };
    if !strict_eq(base, arg) {
        return None;
    }

    step_collector.push(Step::LogBase);
    Some(Expr::int(1))
}

/// Applies all function rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    abs_numeric(expr, step_collector)
        .or_else(|| trig_zero(expr, step_collector))
        .or_else(|| log_one(expr, step_collector))
        .or_else(|| log_base(expr, step_collector))
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
    fn absolute_value_of_fraction() {
        let result = abs_numeric(&expr(r"\abs{-\frac{1}{2}}"), &mut ()).unwrap();
        assert_eq!(result, Expr::recip(Expr::int(2)));
        assert_eq!(abs_numeric(&expr("|x|"), &mut ()), None);
    }

    #[test]
    fn trig_of_zero() {
        assert_eq!(trig_zero(&expr("sin 0"), &mut ()), Some(Expr::int(0)));
        assert_eq!(trig_zero(&expr("cos^2 0"), &mut ()), Some(Expr::int(1)));
        assert_eq!(trig_zero(&expr("arctan 0"), &mut ()), Some(Expr::int(0)));
        assert_eq!(trig_zero(&expr("cot 0"), &mut ()), None);
        assert_eq!(trig_zero(&expr("sin 1"), &mut ()), None);
    }

    #[test]
    fn logarithms() {
        assert_eq!(log_one(&expr("ln 1"), &mut ()), Some(Expr::int(0)));
        assert_eq!(log_base(&expr("log_2 2"), &mut ()), Some(Expr::int(1)));
        assert_eq!(log_base(&expr("log 10"), &mut ()), Some(Expr::int(1)));
        assert_eq!(log_base(&expr("log_2 8"), &mut ()), None);
    }
}
