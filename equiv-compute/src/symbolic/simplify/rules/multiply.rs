//! Simplification rules for expressions involving multiplication, including combining like
//! factors and reducing numeric fractions.

use equiv_parser::ast::Expr;
use crate::primitive::{is_coefficient_factor, split_coefficient, term_coefficient};
use crate::symbolic::{
    order::strict_eq,
    product,
    simplify::{rules::do_multiply, step::Step},
    step_collector::StepCollector,
    sum,
};

/// `0*a = 0`
/// `a*0 = 0`
pub fn multiply_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_multiply(expr, |factors| {
        factors.iter()
            .any(|factor| factor.as_number() == Some(0.0))
            .then(|| Expr::int(0))
    })?;

    step_collector.push(Step::MultiplyZero);
    Some(opt)
}

/// `1*a = a`
/// `a*1 = a`
pub fn multiply_one(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_multiply(expr, |factors| {
        let new_factors = factors.iter()
            .filter(|factor| !factor.is_int(1))
            .cloned()
            .collect::<Vec<_>>();

        if new_factors.len() == factors.len() {
            None
        } else {
            Some(product(new_factors))
        }
    })?;

    step_collector.push(Step::MultiplyOne);
    Some(opt)
}

/// Multiplies the numeric factors of a product together into a single fraction in lowest terms.
///
/// `6/4 = 3/2`
/// `4/2 = 2`
/// `(1/2)*(1/3)*x = x/6`
pub fn reduce_numerical_fraction(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_multiply(expr, |factors| {
        let numeric = factors.iter()
            .filter(|factor| is_coefficient_factor(factor))
            .cloned()
            .collect::<Vec<_>>();
        if numeric.is_empty() {
            return None;
        }

        let (coeff, rest) = split_coefficient(factors);
        let reduced = coeff.to_factors();
        if strict_eq(&Expr::mul(reduced.clone()), &Expr::mul(numeric)) {
            return None;
        }

        let mut new_factors = reduced;
        new_factors.extend(rest);
        Some(product(new_factors))
    })?;

    step_collector.push(Step::ReduceFraction);
    Some(opt)
}

/// Returns true if the exponent is a negative number, or a product with a negative coefficient.
fn is_negative_exponent(exp: &Expr) -> bool {
    term_coefficient(exp).0.is_negative()
}

/// Combines like factors: factors with the same base.
///
/// `a*a = a^2`
/// `a^2*a^3 = a^5`
/// `a*a^-1 = a^0`
///
/// A base that is a sum is only combined when one of its exponents is negative, so that a
/// product of sums is left for the distributive property to expand, while `(a+b)/(a+b)` still
/// cancels.
pub fn combine_like_factors(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_multiply(expr, |factors| {
        let mut groups: Vec<(Expr, Vec<Expr>)> = Vec::new();
        let mut new_factors = Vec::new();

        for factor in factors {
            if is_coefficient_factor(factor) {
                new_factors.push(factor.clone());
                continue;
            }

            let (base, exp) = match factor.as_pow() {
                Some((base, exp)) => (base.clone(), exp.clone()),
                None => (factor.clone(), Expr::int(1)),
            };
            match groups.iter_mut().find(|(other, _)| strict_eq(other, &base)) {
                Some((_, exps)) => exps.push(exp),
                None => groups.push((base, vec![exp])),
            }
        }

        let combinable = |base: &Expr, exps: &[Expr]| {
            exps.len() > 1 && (base.as_add().is_none() || exps.iter().any(is_negative_exponent))
        };
        if !groups.iter().any(|(base, exps)| combinable(base, exps)) {
            return None;
        }

        for (base, exps) in groups {
            if combinable(&base, &exps) {
                new_factors.push(Expr::pow(base, sum(exps)));
            } else {
                new_factors.extend(exps.into_iter().map(|exp| match exp.as_int() {
                    Some(1) => base.clone(),
                    _ => Expr::pow(base.clone(), exp),
                }));
            }
        }
        Some(product(new_factors))
    })?;

    step_collector.push(Step::CombineLikeFactors);
    Some(opt)
}

/// Applies all multiplication rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    multiply_zero(expr, step_collector)
        .or_else(|| multiply_one(expr, step_collector))
        .or_else(|| reduce_numerical_fraction(expr, step_collector))
        .or_else(|| combine_like_factors(expr, step_collector))
}

#[cfg(test)]
mod tests {
    use equiv_parser::{parse, ParseOptions};
    use crate::symbolic::normalize;
    use pretty_assertions::assert_eq;
    use super::*;

    fn expr(source: &str) -> Expr {
        normalize(&parse(source, &ParseOptions::default()).expr.unwrap())
    }

    #[test]
    fn zero_factor() {
        assert_eq!(multiply_zero(&expr("0 x y"), &mut ()), Some(Expr::int(0)));
        assert_eq!(multiply_zero(&expr("x y"), &mut ()), None);
    }

    #[test]
    fn one_factor() {
        let product = Expr::mul(vec![Expr::int(1), Expr::var("x")]);
        assert_eq!(multiply_one(&product, &mut ()), Some(Expr::var("x")));
    }

    #[test]
    fn reduce_fraction() {
        let result = reduce_numerical_fraction(&expr("6x/4"), &mut ()).unwrap();
        assert_eq!(normalize(&result).print(), "3*x/2");
    }

    #[test]
    fn reduce_fraction_to_integer() {
        let result = reduce_numerical_fraction(&expr("4/2"), &mut ()).unwrap();
        assert_eq!(result, Expr::int(2));
    }

    #[test]
    fn reduced_fraction_is_kept() {
        assert_eq!(reduce_numerical_fraction(&expr("3x/2"), &mut ()), None);
        assert_eq!(reduce_numerical_fraction(&expr("-x"), &mut ()), None);
    }

    #[test]
    fn like_factors() {
        let result = combine_like_factors(&expr("x x^2 y"), &mut ()).unwrap();
        assert_eq!(normalize(&result).print(), "x^3*y");
    }

    #[test]
    fn sums_are_not_combined() {
        assert_eq!(combine_like_factors(&expr("(x+1)(x+1)"), &mut ()), None);
    }

    #[test]
    fn sums_cancel() {
        let result = combine_like_factors(&expr("(x+1)/(x+1)"), &mut ()).unwrap();
        assert_eq!(normalize(&result), Expr::int(1));
    }
}
