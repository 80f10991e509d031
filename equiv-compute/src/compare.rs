//! Grading one answer against another.
//!
//! [`compare`] checks, in order, that the two expressions use the same variables, that they are
//! mathematically equal, and optionally that the second is written in the same form as the first
//! and is fully simplified. The first check to fail decides the result, which may come with a
//! [`Message`] explaining the likely mistake.

use equiv_parser::{ast::Expr, parse, ParseOptions};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use tracing::debug;
use crate::equality::equal_with;
use crate::numerical::SamplingConfig;
use crate::symbolic::is_simplified;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The letter `x` between two other characters, as left behind by someone who typed `x` for
/// multiplication.
static X_AS_MULTIPLICATION: Lazy<Regex> = Lazy::new(|| Regex::new("(?i).x.").expect("valid x-multiplication pattern"));

/// Additional requirements on the second expression of a comparison.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CompareOptions {
    /// Require both expressions to have the same form, meaning the same tree, operand order and
    /// parentheses.
    pub form: bool,

    /// Require the second expression to be fully simplified.
    pub simplify: bool,
}

/// A diagnostic attached to a failed comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Message {
    /// The variables of the two expressions differ only in letter case.
    WrongCase,

    /// The letter `x` appears to have been typed in place of a multiplication sign.
    XAsMultiplication,

    /// The expressions are equal, but not written in the same form.
    WrongForm,

    /// The expressions are equal, but the second isn't simplified.
    NotSimplified,
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Message::WrongCase => "variables differ only in case",
            Message::XAsMultiplication => "use *, not x, for multiplication",
            Message::WrongForm => "answer is not in the correct form",
            Message::NotSimplified => "answer is not fully expanded and simplified",
        })
    }
}

/// The result of a comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Comparison {
    /// Whether the second expression is accepted.
    pub equal: bool,

    /// An explanation of why it wasn't, if one could be found.
    pub message: Option<Message>,
}

impl Comparison {
    /// A successful comparison.
    pub fn success() -> Self {
        Self { equal: true, message: None }
    }

    /// A failed comparison, with an optional explanation.
    pub fn failure(message: Option<Message>) -> Self {
        Self { equal: false, message }
    }
}

/// Returns true if replacing an `x` with `*` in one expression makes it equal to the other.
fn x_used_as_multiplication(e1: &Expr, e2: &Expr, config: &SamplingConfig) -> bool {
    let uses_x = e1.vars()
        .iter()
        .chain(e2.vars().iter())
        .any(|name| name.to_lowercase().contains('x'));
    if !uses_x {
        return false;
    }

    let replace = |expr: &Expr| {
        let text = X_AS_MULTIPLICATION.replace_all(&expr.print(), "*").into_owned();
        parse(&text, &ParseOptions::default()).expr
    };

    [(e1, e2), (e2, e1)].into_iter().any(|(expr, other)| {
        replace(expr).is_some_and(|candidate| equal_with(&candidate, other, config))
    })
}

/// Compares the second expression against the first, using the default sampling parameters.
///
/// ```
/// use equiv_compute::{compare, CompareOptions, Message};
/// use equiv_parser::{parse, ParseOptions};
///
/// let parse = |source| parse(source, &ParseOptions::default()).expr.unwrap();
///
/// let result = compare(&parse("2x5"), &parse("10"), &CompareOptions::default());
/// assert!(!result.equal);
/// assert_eq!(result.message, Some(Message::XAsMultiplication));
/// ```
pub fn compare(e1: &Expr, e2: &Expr, options: &CompareOptions) -> Comparison {
    compare_with(e1, e2, options, &SamplingConfig::default())
}

/// Compares the second expression against the first.
pub fn compare_with(
    e1: &Expr,
    e2: &Expr,
    options: &CompareOptions,
    config: &SamplingConfig,
) -> Comparison {
    let vars = e1.same_vars(e2);
    if !vars.equal {
        let message = if vars.equal_ignoring_case {
            Some(Message::WrongCase)
        } else if x_used_as_multiplication(e1, e2, config) {
            Some(Message::XAsMultiplication)
        } else {
            None
        };
        debug!(?message, "variables differ");
        return Comparison::failure(message);
    }

    if !equal_with(e1, e2, config) {
        let message = x_used_as_multiplication(e1, e2, config)
            .then_some(Message::XAsMultiplication);
        debug!(?message, "expressions are not equal");
        return Comparison::failure(message);
    }

    if options.form && !e1.same_form(e2) {
        debug!("expressions differ in form");
        return Comparison::failure(Some(Message::WrongForm));
    }

    if options.simplify && !is_simplified(e2) {
        debug!("answer is not simplified");
        return Comparison::failure(Some(Message::NotSimplified));
    }

    Comparison::success()
}
