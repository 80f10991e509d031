use std::fmt;

/// Possible simplification steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// `0+a = a`
    AddZero,

    /// `a+a = 2a`
    /// `x/2 + x/3 = 5x/6`
    CombineLikeTerms,

    /// `1/2 + 1/3 = 5/6`
    AddFractions,

    /// `0*a = 0`
    MultiplyZero,

    /// `1*a = a`
    MultiplyOne,

    /// `6/4 = 3/2`
    /// `(1/2)*(1/3) = 1/6`
    ReduceFraction,

    /// `a*a = a^2`
    /// `a^2*a^3 = a^5`
    CombineLikeFactors,

    /// `a^0 = 1`
    PowerZero,

    /// `0^a = 0`, for positive `a`
    PowerZeroLeft,

    /// `1^a = 1`
    PowerOneLeft,

    /// `a^1 = a`
    PowerOne,

    /// `(a^b)^n = a^(b*n)`, for integer `n`
    PowerPower,

    /// `2^-2 = 1/4`
    Integer,

    /// `(a*b)^n = a^n*b^n`, for integer `n`
    PowerProduct,

    /// `a*(b+c) = a*b + a*c`
    DistributiveProperty,

    /// `(a+b)^2 = (a+b)*(a+b)`
    ExpandPower,

    /// `sqrt(12) = 2*sqrt(3)`
    SquareRoot,

    /// `|-3| = 3`
    AbsNumeric,

    /// `sin(0) = 0`
    /// `cos(0) = 1`
    TrigZero,

    /// `log_b(1) = 0`
    LogOne,

    /// `log_b(b) = 1`
    LogBase,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Step::AddZero => "add zero",
            Step::CombineLikeTerms => "combine like terms",
            Step::AddFractions => "add fractions",
            Step::MultiplyZero => "multiply by zero",
            Step::MultiplyOne => "multiply by one",
            Step::ReduceFraction => "reduce fraction",
            Step::CombineLikeFactors => "combine like factors",
            Step::PowerZero => "power of zero",
            Step::PowerZeroLeft => "zero to a power",
            Step::PowerOneLeft => "one to a power",
            Step::PowerOne => "power of one",
            Step::PowerPower => "power of a power",
            Step::Integer => "integer power",
            Step::PowerProduct => "power of a product",
            Step::DistributiveProperty => "distributive property",
            Step::ExpandPower => "expand power",
            Step::SquareRoot => "square root",
            Step::AbsNumeric => "absolute value",
            Step::TrigZero => "trigonometric zero",
            Step::LogOne => "log of one",
            Step::LogBase => "log of base",
        };
        write!(f, "{}", name)
    }
}
