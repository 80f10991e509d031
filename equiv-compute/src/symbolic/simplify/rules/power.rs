//! Simplification rules for powers.

use equiv_parser::ast::{Expr, ExprKind};
use crate::primitive::Number;
use crate::symbolic::{
    product,
    simplify::{rules::do_power, step::Step},
    step_collector::StepCollector,
};

/// `a^0 = 1`
pub fn power_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_power(expr, |_, exp| {
        Number::from_expr(exp)
            .filter(|exp| exp.is_zero())
            .map(|_| Expr::int(1))
    })?;

    step_collector.push(Step::PowerZero);
    Some(opt)
}

/// `0^a = 0`, if `a` is a positive number
pub fn power_zero_left(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_power(expr, |base, exp| {
        let positive = Number::from_expr(exp).is_some_and(|exp| exp.to_f64() > 0.0);
        (base.as_number() == Some(0.0) && positive).then(|| Expr::int(0))
    })?;

    step_collector.push(Step::PowerZeroLeft);
    Some(opt)
}

/// `1^a = 1`
pub fn power_one_left(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_power(expr, |base, _| base.is_int(1).then(|| Expr::int(1)))?;

    step_collector.push(Step::PowerOneLeft);
    Some(opt)
}

/// `a^1 = a`
pub fn power_one(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_power(expr, |base, exp| exp.is_int(1).then(|| base.clone()))?;

    step_collector.push(Step::PowerOne);
    Some(opt)
}

/// `(a^b)^n = a^(b*n)`, if `n` is an integer
///
/// The outer exponent must be an integer: `(x^2)^(1/2)` is `|x|`, not `x`.
pub fn power_power(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_power(expr, |base, exp| {
        exp.as_int()?;
        let (inner_base, inner_exp) = base.as_pow()?;
        Some(Expr::pow(
            inner_base.clone(),
            product(vec![inner_exp.clone(), exp.clone()]),
        ))
    })?;

    step_collector.push(Step::PowerPower);
    Some(opt)
}

/// Evaluates an integer raised to an integer power, keeping negative powers as fractions.
///
/// `2^3 = 8`
/// `2^-2 = 1/4`
/// `(-2)^-1 = -1/2`
pub fn integer(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_power(expr, |base, exp| {
        let (base, exp) = (base.as_int()?, exp.as_int()?);
        let magnitude = u32::try_from(exp.unsigned_abs()).ok()?;
        match exp {
            0.. => base.checked_pow(magnitude).map(Expr::int),
            -1 if base < 0 => Some(Expr::mul(vec![
                Expr::int(-1),
                Expr::recip(Expr::int(base.checked_neg()?)),
            ])),
            -1 => None,
            _ if base == 0 => None,
            _ => base.checked_pow(magnitude).map(|den| Expr::recip(Expr::int(den))),
        }
    })?;

    step_collector.push(Step::Integer);
    Some(opt)
}

/// `(a*b)^n = a^n*b^n`, if `n` is an integer
pub fn power_product(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_power(expr, |base, exp| {
        exp.as_int()?;
        let factors = base.as_mul()?;
        Some(Expr::mul(
            factors.iter()
                .map(|factor| Expr::pow(factor.clone(), exp.clone()))
                .collect(),
        ))
    })?;

    step_collector.push(Step::PowerProduct);
    Some(opt)
}

/// Applies all power rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    if !matches!(expr.kind, ExprKind::Pow { .. }) {
        return None;
    }

    power_zero(expr, step_collector)
        .or_else(|| power_zero_left(expr, step_collector))
        .or_else(|| power_one_left(expr, step_collector))
        .or_else(|| power_one(expr, step_collector))
        .or_else(|| power_power(expr, step_collector))
        .or_else(|| integer(expr, step_collector))
        .or_else(|| power_product(expr, step_collector))
}
