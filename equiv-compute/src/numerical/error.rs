use thiserror::Error;

/// Errors that can occur while evaluating an expression numerically.
///
/// These are internal to equivalence checking: a sample that fails to evaluate is discarded and
/// another is drawn in its place.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    /// A value was divided by zero, or zero was raised to a negative power.
    #[error("division by zero")]
    DivisionByZero,

    /// A logarithm was taken of a non-positive number, or with an invalid base.
    #[error("logarithm out of domain")]
    LogDomain,

    /// A negative number was raised to a fractional power.
    #[error("root of a negative number")]
    RootDomain,

    /// The result is infinite or not a number.
    #[error("result is not a finite number")]
    NonFinite,

    /// The expression uses a variable that has no value in the context.
    #[error("unknown variable `{0}`")]
    UnknownVariable(String),

    /// An equation was evaluated as if it were a value.
    #[error("an equation does not have a value")]
    EquationValue,
}
