//! Expansion of products and powers of sums.

use equiv_parser::ast::Expr;
use crate::symbolic::{
    product,
    simplify::{rules::{do_multiply, do_power}, step::Step},
    step_collector::StepCollector,
    sum,
};

/// The largest exponent [`expand_power`] expands.
pub const MAX_EXPANDED_POWER: i64 = 6;

/// The most terms an expansion may produce. Larger products and powers of sums are left
/// unexpanded, and are compared by sampling instead.
pub const MAX_EXPANDED_TERMS: usize = 256;

/// Returns the number of terms of the expansion of a product whose factors are sums of the given
/// lengths, or [`None`] if it is more than [`MAX_EXPANDED_TERMS`].
fn expanded_terms(lens: impl IntoIterator<Item = usize>) -> Option<usize> {
    lens.into_iter()
        .try_fold(1usize, |total, len| total.checked_mul(len))
        .filter(|total| *total <= MAX_EXPANDED_TERMS)
}

/// `a*(b+c) = a*b + a*c`
///
/// Only the first sum in the product is distributed over; the others are handled by later
/// passes. Nothing is distributed if multiplying out every sum in the product would give more than
/// [`MAX_EXPANDED_TERMS`] terms.
pub fn distributive_property(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_multiply(expr, |factors| {
        expanded_terms(factors.iter().filter_map(|factor| factor.as_add().map(<[Expr]>::len)))?;
        let idx = factors.iter().position(|factor| factor.as_add().is_some())?;
        let terms = factors[idx].as_add()?;
        let others = factors.iter()
            .enumerate()
            .filter(|(i, _)| *i != idx)
            .map(|(_, factor)| factor.clone())
            .collect::<Vec<_>>();

        Some(sum(terms.iter()
            .map(|term| {
                let mut new_factors = others.clone();
                new_factors.push(term.clone());
                product(new_factors)
            })
            .collect()))
    })?;

    step_collector.push(Step::DistributiveProperty);
    Some(opt)
}

/// `(a+b)^n = (a+b)*(a+b)*...`, for `2 <= n <= 6`
///
/// The resulting product is expanded by [`distributive_property`], so the power is only rewritten
/// if that expansion stays within [`MAX_EXPANDED_TERMS`] terms.
pub fn expand_power(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_power(expr, |base, exp| {
        let len = base.as_add()?.len();
        let n = exp.as_int().filter(|n| (2..=MAX_EXPANDED_POWER).contains(n))?;
        expanded_terms(std::iter::repeat(len).take(n as usize))?;
        Some(Expr::mul(vec![base.clone(); n as usize]))
    })?;

    step_collector.push(Step::ExpandPower);
    Some(opt)
}

/// Applies all expansion rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    distributive_property(expr, step_collector)
        .or_else(|| expand_power(expr, step_collector))
}
