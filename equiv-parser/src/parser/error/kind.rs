use ariadne::Fmt;
use equiv_attrs::ErrorKind;
use equiv_error::{ErrorKind, EXPR};
use crate::tokenizer::TokenKind;

/// The end of the input was reached unexpectedly.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected end of input",
    labels = [format!("you might need to add another {} here", "expression".fg(EXPR))],
)]
pub struct UnexpectedEof;

/// The end of the input was expected, but something else was found.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expected end of input",
    labels = [format!("I could not understand the remaining {} here", "expression".fg(EXPR))],
)]
pub struct ExpectedEof;

/// An unexpected token was encountered.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected token",
    labels = [format!("expected one of: {}", expected.iter().map(|t| format!("{:?}", t)).collect::<Vec<_>>().join(", "))],
    help = format!("found {:?}", found),
)]
pub struct UnexpectedToken {
    /// The token(s) that were expected.
    pub expected: &'static [TokenKind],

    /// The token that was found.
    pub found: TokenKind,
}

/// A character that isn't part of the notation was found.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unrecognized symbol `{}`", lexeme),
    labels = ["this symbol is not part of any expression"],
    help = "use letters, digits, operators such as `+ - * / ^`, or commands such as `\\frac` and `\\sqrt`",
)]
pub struct InvalidSymbol {
    /// The text of the unrecognized symbol.
    pub lexeme: String,
}

/// A parenthesis was not closed.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unclosed parenthesis",
    labels = ["this parenthesis is not closed"],
    help = "add a closing parenthesis `)` somewhere after this",
)]
pub struct UnclosedParenthesis;

/// A brace was not closed.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unclosed brace",
    labels = ["this brace is not closed"],
    help = "add a closing brace `}` somewhere after this",
)]
pub struct UnclosedBrace;

/// An absolute value bar was not closed.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unclosed absolute value",
    labels = ["this bar is not matched"],
    help = "add a matching `|` after the expression",
)]
pub struct UnclosedBar;

/// There was no expression inside a pair of delimiters.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "missing expression inside delimiters",
    labels = ["add an expression here"],
)]
pub struct EmptyGroup;
