//! Lexer and parser for math answers written in a LaTeX-like notation.
//!
//! The notation accepts implicit multiplication (`3x`, `2(x+1)`), fractions (`\frac{a}{b}`),
//! roots, absolute values, logarithms, trigonometric functions, subscripted variables, and many
//! aliases for the same symbol (`*`, `\cdot`, `×`, ...). Input is read into an [`ast::Expr`]:
//!
//! ```
//! use equiv_parser::{parse, ParseOptions};
//!
//! let outcome = parse(r"3x^2 - \frac{x}{2}", &ParseOptions::default());
//! assert!(outcome.parsed());
//! assert_eq!(outcome.expr.unwrap().print(), "3*x^2-x/2");
//! ```
//!
//! Input that can't be read never panics; it produces a [`ParseOutcome`] with no expression and
//! a diagnostic explaining what went wrong.

pub mod ast;
pub mod parser;
pub mod tokenizer;

use ast::Expr;
use equiv_error::Error;
use parser::{error::kind, Parser};
use tokenizer::TokenKind;

pub use parser::ParseOptions;

/// The result of reading a piece of input.
#[derive(Debug)]
pub struct ParseOutcome {
    /// The expression that was read, if the input could be read.
    pub expr: Option<Expr>,

    /// The problems found in the input.
    pub diagnostics: Vec<Error>,
}

impl ParseOutcome {
    /// Returns true if the input was read into an expression.
    pub fn parsed(&self) -> bool {
        self.expr.is_some()
    }
}

/// Reads the given input into an expression tree.
pub fn parse(text: &str, options: &ParseOptions) -> ParseOutcome {
    let mut parser = Parser::with_options(text, options);

    // report unrecognized symbols up front, so the diagnostic points at the real culprit instead
    // of wherever the grammar happened to give up
    let invalid = parser.tokens()
        .iter()
        .find(|token| token.kind == TokenKind::Invalid)
        .map(|token| Error::new(vec![token.span.clone()], kind::InvalidSymbol {
            lexeme: token.lexeme.to_owned(),
        }));
    if let Some(err) = invalid {
        return ParseOutcome { expr: None, diagnostics: vec![err] };
    }

    match parser.try_parse_full::<Expr>() {
        Ok(expr) => ParseOutcome { expr: Some(expr), diagnostics: Vec::new() },
        Err(err) => ParseOutcome { expr: None, diagnostics: vec![err] },
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn parse_success() {
        let outcome = parse("2x + 1", &ParseOptions::default());
        assert!(outcome.parsed());
        assert!(outcome.diagnostics.is_empty());
    }

    #[test]
    fn invalid_symbol_is_not_parsed() {
        let outcome = parse("2 + $", &ParseOptions::default());
        assert!(!outcome.parsed());
        assert_eq!(outcome.diagnostics.len(), 1);
        assert!(outcome.diagnostics[0].is::<kind::InvalidSymbol>());
        assert_eq!(outcome.diagnostics[0].spans, vec![4..5]);
    }

    #[test]
    fn grammar_failure_is_not_parsed() {
        for source in ["2 +", "(x", "x = ", "* 3", "sqrt", r"\frac{1}", "|x"] {
            let outcome = parse(source, &ParseOptions::default());
            assert!(!outcome.parsed(), "source: {}", source);
            assert_eq!(outcome.diagnostics.len(), 1, "source: {}", source);
        }
    }

    #[test]
    fn whitespace_insensitive() {
        let a = parse("3x", &ParseOptions::default()).expr.unwrap();
        let b = parse("3 x", &ParseOptions::default()).expr.unwrap();
        assert!(a.same_form(&b));
    }

    #[test]
    fn diagnostics_render() {
        let outcome = parse("(x + 1", &ParseOptions::default());
        let rendered = outcome.diagnostics[0].render("input", "(x + 1");
        assert!(rendered.contains("unclosed parenthesis"));
    }
}
