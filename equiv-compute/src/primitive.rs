//! Exact rational numbers with a floating-point fallback, used as the coefficients of terms
//! during simplification.
//!
//! Integer arithmetic is checked; any operation that would overflow an `i64` falls back to
//! floating-point, so the result is always a usable (if approximate) value.

use equiv_parser::ast::{Expr, ExprKind};
use num_integer::Integer;
use num_traits::checked_pow;
use std::fmt;

/// A fraction `num / den` in lowest terms, with a positive denominator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fraction {
    pub num: i64,
    pub den: i64,
}

impl Fraction {
    /// Creates a fraction in lowest terms. Returns [`None`] if the denominator is zero or the
    /// sign can't be moved to the numerator without overflowing.
    pub fn new(num: i64, den: i64) -> Option<Self> {
        if den == 0 {
            return None;
        }

        let gcd = num.gcd(&den);
        let (mut num, mut den) = (num / gcd, den / gcd);
        if den < 0 {
            num = num.checked_neg()?;
            den = den.checked_neg()?;
        }
        Some(Self { num, den })
    }

    /// Creates the integer `n`.
    pub fn int(n: i64) -> Self {
        Self { num: n, den: 1 }
    }

    /// Returns `self + other`.
    pub fn checked_add(self, other: Self) -> Option<Self> {
        let lcm = (self.den / self.den.gcd(&other.den)).checked_mul(other.den)?;
        let a = self.num.checked_mul(lcm / self.den)?;
        let b = other.num.checked_mul(lcm / other.den)?;
        Self::new(a.checked_add(b)?, lcm)
    }

    /// Returns `self * other`.
    pub fn checked_mul(self, other: Self) -> Option<Self> {
        // cross-reduce first to keep the intermediate products small
        let g1 = self.num.gcd(&other.den).max(1);
        let g2 = other.num.gcd(&self.den).max(1);
        let num = (self.num / g1).checked_mul(other.num / g2)?;
        let den = (self.den / g2).checked_mul(other.den / g1)?;
        Self::new(num, den)
    }

    /// Returns `self ^ exp` for a non-negative exponent.
    pub fn checked_pow(self, exp: u32) -> Option<Self> {
        let num = checked_pow(self.num, exp as usize)?;
        let den = checked_pow(self.den, exp as usize)?;
        Self::new(num, den)
    }

    /// Returns `1 / self`.
    pub fn recip(self) -> Option<Self> {
        Self::new(self.den, self.num)
    }

    /// Returns the absolute value of the fraction.
    pub fn checked_abs(self) -> Option<Self> {
        Some(Self { num: self.num.checked_abs()?, den: self.den })
    }

    /// Returns the value of the fraction as a float.
    pub fn to_f64(self) -> f64 {
        self.num as f64 / self.den as f64
    }

    /// Builds the canonical expression for this fraction: an integer, the reciprocal `den^-1`, or
    /// the product `num * den^-1`.
    pub fn to_expr(self) -> Expr {
        match (self.num, self.den) {
            (num, 1) => Expr::int(num),
            (1, den) => Expr::recip(Expr::int(den)),
            (num, den) => Expr::mul(vec![Expr::int(num), Expr::recip(Expr::int(den))]),
        }
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.den == 1 {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}

/// A numeric coefficient: exact when possible, approximate otherwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Rational(Fraction),
    Float(f64),
}

impl Number {
    /// The number one.
    pub const ONE: Self = Number::Rational(Fraction { num: 1, den: 1 });

    /// The number zero.
    pub const ZERO: Self = Number::Rational(Fraction { num: 0, den: 1 });

    /// Returns the value as a float.
    pub fn to_f64(self) -> f64 {
        match self {
            Number::Rational(frac) => frac.to_f64(),
            Number::Float(value) => value,
        }
    }

    /// Returns `self + other`.
    pub fn add(self, other: Self) -> Self {
        match (self, other) {
            (Number::Rational(a), Number::Rational(b)) => a.checked_add(b)
                .map(Number::Rational)
                .unwrap_or_else(|| Number::Float(a.to_f64() + b.to_f64())),
            (a, b) => Number::Float(a.to_f64() + b.to_f64()),
        }
    }

    /// Returns `self * other`.
    pub fn mul(self, other: Self) -> Self {
        match (self, other) {
            (Number::Rational(a), Number::Rational(b)) => a.checked_mul(b)
                .map(Number::Rational)
                .unwrap_or_else(|| Number::Float(a.to_f64() * b.to_f64())),
            (a, b) => Number::Float(a.to_f64() * b.to_f64()),
        }
    }

    /// Returns the absolute value.
    pub fn abs(self) -> Self {
        match self {
            Number::Rational(frac) => frac.checked_abs()
                .map(Number::Rational)
                .unwrap_or_else(|| Number::Float(frac.to_f64().abs())),
            Number::Float(value) => Number::Float(value.abs()),
        }
    }

    /// Returns true if the number is zero.
    pub fn is_zero(self) -> bool {
        self.to_f64() == 0.0
    }

    /// Returns true if the number is exactly one. A float is never considered exactly one, so
    /// that a float coefficient is kept visible.
    pub fn is_one(self) -> bool {
        self == Self::ONE
    }

    /// Returns true if the number is negative.
    pub fn is_negative(self) -> bool {
        self.to_f64() < 0.0
    }

    /// Reads a numeric literal or a canonical fraction (`n`, `d^-1`, `n * d^-1`).
    pub fn from_expr(expr: &Expr) -> Option<Self> {
        match &expr.kind {
            ExprKind::Int { value } => Some(Number::Rational(Fraction::int(*value))),
            ExprKind::Float { value } => Some(Number::Float(*value)),
            ExprKind::Pow { .. } => recip_of_int(expr)
                .and_then(|den| Fraction::new(1, den))
                .map(Number::Rational),
            ExprKind::Mul { terms } => {
                let (coeff, rest) = split_coefficient(terms);
                rest.is_empty().then_some(coeff)
            },
            _ => None,
        }
    }

    /// Builds the canonical expression for this number.
    pub fn to_expr(self) -> Expr {
        match self {
            Number::Rational(frac) => frac.to_expr(),
            Number::Float(value) => Expr::float(value),
        }
    }

    /// Builds the factors of the canonical expression for this number, to be placed at the front
    /// of a product. The number one has no factors.
    pub fn to_factors(self) -> Vec<Expr> {
        if self.is_one() {
            return Vec::new();
        }

        match self.to_expr() {
            Expr { kind: ExprKind::Mul { terms }, .. } => terms,
            expr => vec![expr],
        }
    }
}

/// If the expression is `d^-1` for a non-zero integer `d`, returns `d`.
pub fn recip_of_int(expr: &Expr) -> Option<i64> {
    let (base, exp) = expr.as_pow()?;
    if !exp.is_int(-1) {
        return None;
    }
    base.as_int().filter(|den| *den != 0)
}

/// Returns true if the factor is part of a numeric coefficient: a numeric literal, or the
/// reciprocal of a non-zero integer.
pub fn is_coefficient_factor(expr: &Expr) -> bool {
    expr.is_number() || recip_of_int(expr).is_some()
}

/// Splits the factors of a product into the product of its numeric coefficient factors and the
/// remaining factors, which keep their order.
///
/// - `3*x` -> `(3, [x])`
/// - `x*2^-1*y` -> `(1/2, [x, y])`
/// - `x` -> `(1, [x])`
pub fn split_coefficient(factors: &[Expr]) -> (Number, Vec<Expr>) {
    let mut coeff = Number::ONE;
    let mut rest = Vec::new();
    for factor in factors {
        match (&factor.kind, recip_of_int(factor)) {
            (ExprKind::Int { value }, _) => coeff = coeff.mul(Number::Rational(Fraction::int(*value))),
            (ExprKind::Float { value }, _) => coeff = coeff.mul(Number::Float(*value)),
            (_, Some(den)) => match Fraction::new(1, den) {
                Some(frac) => coeff = coeff.mul(Number::Rational(frac)),
                None => rest.push(factor.clone()),
            },
            _ => rest.push(factor.clone()),
        }
    }
    (coeff, rest)
}

/// Returns the coefficient and remaining factors of a term of a sum. A term that isn't a product
/// is its own single factor with coefficient one.
pub fn term_coefficient(term: &Expr) -> (Number, Vec<Expr>) {
    match &term.kind {
        ExprKind::Mul { terms } => split_coefficient(terms),
        _ if is_coefficient_factor(term) => split_coefficient(std::slice::from_ref(term)),
        _ => (Number::ONE, vec![term.clone()]),
    }
}

/// Returns `(outside, inside)` such that `n = outside^2 * inside`, where `inside` has no
/// square factor found by trial division. `n` must be positive.
pub fn extract_square(n: i64) -> (i64, i64) {
    use num_integer::Roots;

    let (mut outside, mut inside) = (1i64, n);
    let mut p = 2i64;
    while p <= 100_000 && p * p <= inside {
        while inside % (p * p) == 0 {
            inside /= p * p;
            outside *= p;
        }
        p += 1;
    }

    // whatever trial division didn't reach may still be a perfect square
    let root = inside.sqrt();
    if root > 1 && root * root == inside {
        outside = outside.saturating_mul(root);
        inside = 1;
    }

    (outside, inside)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn fraction_lowest_terms() {
        assert_eq!(Fraction::new(6, -8), Some(Fraction { num: -3, den: 4 }));
        assert_eq!(Fraction::new(1, 0), None);
    }

    #[test]
    fn fraction_arithmetic() {
        let half = Fraction::int(1).recip().unwrap().checked_mul(Fraction::new(1, 2).unwrap()).unwrap();
        assert_eq!(half, Fraction::new(1, 2).unwrap());

        let sum = Fraction::new(1, 2).unwrap().checked_add(Fraction::new(1, 3).unwrap());
        assert_eq!(sum, Fraction::new(5, 6));

        let pow = Fraction::new(-2, 3).unwrap().checked_pow(3);
        assert_eq!(pow, Fraction::new(-8, 27));
    }

    #[test]
    fn overflow_falls_back_to_float() {
        let big = Number::Rational(Fraction::int(i64::MAX));
        assert!(matches!(big.mul(Number::Rational(Fraction::int(2))), Number::Float(_)));
    }

    #[test]
    fn fraction_expressions() {
        assert_eq!(Fraction::new(4, 2).unwrap().to_expr(), Expr::int(2));
        assert_eq!(Fraction::new(1, 3).unwrap().to_expr(), Expr::recip(Expr::int(3)));
        assert_eq!(
            Fraction::new(-5, 6).unwrap().to_expr(),
            Expr::mul(vec![Expr::int(-5), Expr::recip(Expr::int(6))]),
        );
    }

    #[test]
    fn split_product_coefficient() {
        let factors = vec![Expr::var("x"), Expr::recip(Expr::int(2)), Expr::int(3), Expr::var("y")];
        let (coeff, rest) = split_coefficient(&factors);
        assert_eq!(coeff, Number::Rational(Fraction::new(3, 2).unwrap()));
        assert_eq!(rest, vec![Expr::var("x"), Expr::var("y")]);
    }

    #[test]
    fn read_numbers() {
        let frac = Expr::mul(vec![Expr::int(-5), Expr::recip(Expr::int(6))]);
        assert_eq!(Number::from_expr(&frac), Some(Number::Rational(Fraction::new(-5, 6).unwrap())));
        assert_eq!(Number::from_expr(&Expr::var("x")), None);
        assert_eq!(Number::from_expr(&Expr::recip(Expr::int(0))), None);
    }

    #[test]
    fn square_factors() {
        assert_eq!(extract_square(12), (2, 3));
        assert_eq!(extract_square(16), (4, 1));
        assert_eq!(extract_square(7), (1, 7));
        assert_eq!(extract_square(72), (6, 2));
    }
}
