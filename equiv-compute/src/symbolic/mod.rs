//! Algebraic manipulation of expressions.
//!
//! # Canonical form
//!
//! [`normalize`] puts an expression into a canonical form: sums and products are flattened so
//! that `x + (y + z)` becomes a single sum of three terms, numeric literals are folded, and the
//! operands of every sum and product are sorted. This is what makes `x*y` and `y*x` the same
//! tree.
//!
//! Fractions are represented the same way the parser builds them: a product containing an
//! integer numerator and the denominator raised to the power of `-1`. `5/6` is `5 * 6^-1`, and
//! `1/6` is just `6^-1`.
//!
//! # Simplification
//!
//! [`simplify`] goes further, applying a fixed set of algebraic rewriting rules (see
//! [`simplify::rules`]) until none apply. An expression [`is_simplified`] if simplifying it
//! changes nothing but the order of its operands.
//!
//! ```
//! use equiv_compute::symbolic::{is_simplified, simplify};
//! use equiv_parser::{parse, ParseOptions};
//!
//! let expr = parse("x + x + 2(x + 1)", &ParseOptions::default()).expr.unwrap();
//! assert!(!is_simplified(&expr));
//! assert_eq!(simplify(&expr).print(), "2+4*x");
//! ```

pub mod normalize;
pub mod order;
pub mod simplify;
pub mod step_collector;

use equiv_parser::ast::Expr;

pub use normalize::normalize;
pub use order::strict_eq;
pub use simplify::{is_simplified, simplify, simplify_with_steps, try_simplify};
pub use step_collector::StepCollector;

/// Builds a sum of the given terms, without a wrapper node if there are fewer than two.
pub(crate) fn sum(mut terms: Vec<Expr>) -> Expr {
    match terms.len() {
        0 => Expr::int(0),
        1 => terms.remove(0),
        _ => Expr::add(terms),
    }
}

/// Builds a product of the given factors, without a wrapper node if there are fewer than two.
pub(crate) fn product(mut factors: Vec<Expr>) -> Expr {
    match factors.len() {
        0 => Expr::int(1),
        1 => factors.remove(0),
        _ => Expr::mul(factors),
    }
}
