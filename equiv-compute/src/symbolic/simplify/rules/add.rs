//! Simplification rules for expressions involving addition, including combining like terms.

use equiv_parser::ast::Expr;
use crate::primitive::{term_coefficient, Number};
use crate::symbolic::{
    order::canonical_order,
    product,
    simplify::{rules::do_add, step::Step},
    step_collector::StepCollector,
    sum,
};

/// Returns true if the expression is a literal zero.
fn is_zero(expr: &Expr) -> bool {
    expr.as_number() == Some(0.0)
}

/// `0+a = a`
/// `a+0 = a`
pub fn add_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_add(expr, |terms| {
        let new_terms = terms.iter()
            .filter(|term| !is_zero(term))
            .cloned()
            .collect::<Vec<_>>();

        if new_terms.len() == terms.len() {
            None
        } else {
            Some(sum(new_terms))
        }
    })?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    step_collector.push(Step::AddZero);
    Some(opt)
}

/// Sums the terms that are plain numbers, including fractions.
///
/// `1/2 + 1/3 = 5/6`
/// `x + 1/2 + 1 = x + 3/2`
pub fn add_fractions(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_add(expr, |terms| {
        let mut total = Number::ZERO;
        let mut count = 0;
        let mut new_terms = Vec::new();
        for term in terms {
            match Number::from_expr(term) {
                Some(n) => {
                    total = total.add(n);
                    count += 1;
                },
                None => new_terms.push(term.clone()),
            }
        }

        if count < 2 {
            return None;
        }

        if !total.is_zero() {
            new_terms.push(total.to_expr());
        }
        Some(sum(new_terms))
    })?;

    step_collector.push(Step::AddFractions);
    Some(opt)
}

/// Combines like terms: terms whose non-numeric factors are the same.
///
/// `a+a = 2a`
/// `2a+3a = 5a`
/// `x/2 + x/3 = 5x/6`
/// `a-a = 0`
pub fn combine_like_terms(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_add(expr, |terms| {
        // each group is the summed coefficient, the factors shared by its terms, and how many
        // terms it has; factors are kept in canonical order so groups compare with `==`
        let mut groups: Vec<(Number, Expr, usize)> = Vec::new();
        let mut new_terms = Vec::new();

        for term in terms {
            let (coeff, factors) = term_coefficient(term);
            if factors.is_empty() {
                new_terms.push(term.clone());
                continue;
            }

            let factors = canonical_order(&product(factors));
            match groups.iter_mut().find(|(_, other, _)| *other == factors) {
                Some((sum_coeff, _, count)) => {
                    *sum_coeff = sum_coeff.add(coeff);
                    *count += 1;
                },
                None => groups.push((coeff, factors, 1)),
            }
        }

        if groups.iter().all(|(_, _, count)| *count == 1) {
            return None;
        }

        for (coeff, factors, _) in groups {
            if coeff.is_zero() {
                continue;
            }

            let mut term = coeff.to_factors();
            term.push(factors);
            new_terms.push(product(term));
        }
        Some(sum(new_terms))
    })?;

    step_collector.push(Step::CombineLikeTerms);
    Some(opt)
}

/// Applies all addition rules.
///
/// All addition rules reduce the number of terms of the sum.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    add_zero(expr, step_collector)
        .or_else(|| add_fractions(expr, step_collector))
        .or_else(|| combine_like_terms(expr, step_collector))
}
