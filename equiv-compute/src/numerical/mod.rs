//! Numerical evaluation of expressions.
//!
//! Expressions are evaluated to `f64` in a [`Ctxt`] that gives a value to every variable. This is
//! what equivalence checking falls back on when two expressions can't be shown equal
//! symbolically: see [`sample`].

pub mod ctxt;
pub mod error;
pub mod eval;
pub mod sample;

pub use ctxt::Ctxt;
pub use error::EvalError;
pub use eval::Eval;
pub use sample::SamplingConfig;
