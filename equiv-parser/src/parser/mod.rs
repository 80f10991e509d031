pub mod call;
pub mod equation;
pub mod error;
pub mod primary;
pub mod term;
pub mod token;
pub mod unary;

use equiv_error::ErrorKind;
use error::{kind, Error};
use super::tokenizer::{tokenize_complete, Token, TokenKind};
use std::ops::Range;

/// Options that tune how input is read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Single-letter names that should be read as functions instead of variables, so that `f(x)`
    /// is an application of `f` rather than the product `f*x`.
    pub functions: Vec<String>,
}

/// A high-level parser for math answers. This is the type to use to parse an arbitrary piece of
/// input into an expression tree.
#[derive(Debug, Clone)]
pub struct Parser<'source> {
    /// The tokens that this parser is currently parsing.
    tokens: Box<[Token<'source>]>,

    /// The index of the **next** token to be parsed.
    cursor: usize,

    /// Letters that name functions.
    functions: Box<[String]>,

    /// The number of `|` bars opened and not yet closed.
    open_bars: usize,
}

impl<'source> Parser<'source> {
    /// Create a new parser for the given source.
    pub fn new(source: &'source str) -> Self {
        Self::with_options(source, &ParseOptions::default())
    }

    /// Create a new parser for the given source, reading it with the given options.
    pub fn with_options(source: &'source str, options: &ParseOptions) -> Self {
        Self {
            tokens: tokenize_complete(source),
            cursor: 0,
            functions: options.functions.clone().into_boxed_slice(),
            open_bars: 0,
        }
    }

    /// Returns the tokens of the source.
    pub fn tokens(&self) -> &[Token<'source>] {
        &self.tokens
    }

    /// Returns true if a `|` bar is waiting to be closed. A bar that follows a factor then closes
    /// it, instead of opening another absolute value.
    pub fn in_bars(&self) -> bool {
        self.open_bars > 0
    }

    /// Parses the inside of a `|` absolute value with `f`, keeping track of the open bar.
    pub fn within_bars<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T, Error>) -> Result<T, Error> {
        self.open_bars += 1;
        let result = f(self);
        self.open_bars -= 1;
        result
    }

    /// Returns true if the given letter was declared as a function name.
    pub fn is_function(&self, name: &str) -> bool {
        self.functions.iter().any(|function| function == name)
    }

    /// Creates an error that points at the current token, or the end of the source code if the
    /// cursor is at the end of the stream.
    pub fn error(&self, kind: impl ErrorKind + 'static) -> Error {
        Error::new(vec![self.span()], kind)
    }

    /// Returns a span pointing at the end of the source code.
    pub fn eof_span(&self) -> Range<usize> {
        self.tokens.last().map_or(0..0, |token| token.span.end..token.span.end)
    }

    /// Returns the span of the current token, or the end of the source code if the cursor is at
    /// the end of the stream.
    pub fn span(&self) -> Range<usize> {
        self.tokens[self.cursor.min(self.tokens.len())..]
            .iter()
            .find(|token| !token.is_whitespace())
            .map_or(self.eof_span(), |token| token.span.clone())
    }

    /// Returns the next non-whitespace token without moving the cursor. Returns [`None`] if there
    /// are no more tokens.
    pub fn peek_token(&self) -> Option<&Token<'source>> {
        self.tokens[self.cursor.min(self.tokens.len())..]
            .iter()
            .find(|token| !token.is_whitespace())
    }

    /// Returns the kind of the next non-whitespace token without moving the cursor.
    pub fn peek_kind(&self) -> Option<TokenKind> {
        self.peek_token().map(|token| token.kind)
    }

    /// Returns the next token to be parsed, then advances the cursor. Whitespace tokens are
    /// skipped.
    ///
    /// Returns an EOF error if there are no more tokens.
    pub fn next_token(&mut self) -> Result<Token<'source>, Error> {
        while self.cursor < self.tokens.len() {
            let token = &self.tokens[self.cursor];
            self.cursor += 1;
            if token.is_whitespace() {
                continue;
            } else {
                // cloning is cheap: only Range<_> is cloned
                return Ok(token.clone());
            }
        }

        Err(self.error(kind::UnexpectedEof))
    }

    /// Consumes the next token, failing with [`kind::UnexpectedToken`] if it is not one of the
    /// `expected` kinds. Returns the token's span.
    pub fn expect(&mut self, expected: &'static [TokenKind]) -> Result<Range<usize>, Error> {
        let token = self.next_token()?;
        if expected.contains(&token.kind) {
            return Ok(token.span);
        }

        Err(Error::new(vec![token.span], kind::UnexpectedToken {
            expected,
            found: token.kind,
        }))
    }

    /// Consumes the next token if it has the given kind, returning it.
    pub fn next_if(&mut self, kind: TokenKind) -> Option<Token<'source>> {
        if self.peek_kind() == Some(kind) {
            self.next_token().ok()
        } else {
            None
        }
    }

    /// Returns true if only whitespace remains in the stream.
    pub fn is_at_end(&self) -> bool {
        self.peek_token().is_none()
    }

    /// Speculatively parses a value from the given stream of tokens. This function can be used
    /// in the [`Parse::parse`] implementation of a type with the given [`Parser`], as it will
    /// automatically backtrack the cursor position if parsing fails.
    ///
    /// If parsing is successful, the stream is advanced past the consumed tokens and the parsed
    /// value is returned. Otherwise, the stream is left unchanged and an error is returned.
    pub fn try_parse<T: Parse>(&mut self) -> Result<T, Error> {
        self.try_parse_with_fn(T::parse)
    }

    /// Speculatively parses a value from the given stream of tokens, using a custom parsing
    /// function to parse the value.
    ///
    /// If parsing is successful, the stream is advanced past the consumed tokens and the parsed
    /// value is returned. Otherwise, the stream is left unchanged and an error is returned.
    pub fn try_parse_with_fn<T, F>(&mut self, f: F) -> Result<T, Error>
    where
        F: FnOnce(&mut Parser<'source>) -> Result<T, Error>,
    {
        let start = self.cursor;
        match f(self) {
            Ok(value) => Ok(value),
            err => {
                self.cursor = start;
                err
            },
        }
    }

    /// Attempts to parse a value from the given stream of tokens. All the tokens must be consumed
    /// by the parser; if not, an error is returned.
    pub fn try_parse_full<T: Parse>(&mut self) -> Result<T, Error> {
        let value = T::parse(self)?;
        if self.is_at_end() {
            self.cursor = self.tokens.len();
            Ok(value)
        } else {
            Err(self.error(kind::ExpectedEof))
        }
    }
}

/// Any type that can be parsed from a source of tokens.
pub trait Parse: Sized {
    /// Parses a value from the given stream of tokens, advancing the stream past the consumed
    /// tokens if parsing is successful.
    fn parse(input: &mut Parser) -> Result<Self, Error>;
}

/// The precedence of an operation, in order from lowest precedence (evaluated last) to highest
/// precedence (evaluated first).
///
/// The parser encodes these levels directly in its call structure; the printer uses them to
/// decide where parentheses are needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// Any precedence.
    Any,

    /// Precedence of relations (`=`, `<`, `<=`, ...).
    Relation,

    /// Precedence of addition (`+`) and subtraction (`-`), which separate terms.
    Term,

    /// Precedence of multiplication (`*`), division (`/`) and juxtaposition, which separate
    /// factors.
    Factor,

    /// Precedence of unary subtraction (`-`).
    Neg,

    /// Precedence of exponentiation (`^`).
    Exp,

    /// Precedence of anything that can't be split: literals, variables and function calls.
    Atom,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;
    use crate::ast::{Constant, Expr, ExprKind, Hints};
    use crate::tokenizer::{Relation, TrigFn};

    fn parse(source: &str) -> Expr {
        Parser::new(source).try_parse_full::<Expr>().unwrap()
    }

    fn parse_err(source: &str) -> Error {
        Parser::new(source).try_parse_full::<Expr>().unwrap_err()
    }

    fn int(value: i64) -> Expr {
        Expr::int(value)
    }

    fn var(name: &str) -> Expr {
        Expr::var(name)
    }

    fn parens(expr: Expr) -> Expr {
        expr.with_parens()
    }

    #[test]
    fn literal_int() {
        assert_eq!(parse("16"), int(16));
        assert_eq!(parse("16."), int(16));
    }

    #[test]
    fn literal_float() {
        assert_eq!(parse("3.14"), Expr::float(3.14));
        assert_eq!(parse(".5"), Expr::float(0.5));
    }

    #[test]
    fn huge_integer_becomes_float() {
        assert_eq!(parse("100000000000000000000"), Expr::float(1e20));
    }

    #[test]
    fn empty_input() {
        assert_eq!(parse(""), Expr::add(vec![]));
        assert_eq!(parse("   "), Expr::add(vec![]));
    }

    #[test]
    fn addition_flattens() {
        assert_eq!(parse("1 + x + y"), Expr::add(vec![int(1), var("x"), var("y")]));
    }

    #[test]
    fn subtraction_appends_negation() {
        assert_eq!(parse("a - 2 - b"), Expr::add(vec![
            var("a"),
            int(-2),
            Expr::mul(vec![int(-1), var("b")]),
        ]));
    }

    #[test]
    fn parenthesized_sum_is_not_appended() {
        assert_eq!(parse("(a + b) + c"), Expr::add(vec![
            parens(Expr::add(vec![var("a"), var("b")])),
            var("c"),
        ]));
    }

    #[test]
    fn implicit_multiplication() {
        assert_eq!(parse("3x"), Expr::mul(vec![int(3), var("x")]));
        assert_eq!(parse("3 x"), parse("3x"));
        assert_eq!(parse("2xy"), Expr::mul(vec![int(2), var("x"), var("y")]));
    }

    #[test]
    fn implicit_multiplication_with_group() {
        assert_eq!(parse("2(x + 1)"), Expr::mul(vec![
            int(2),
            parens(Expr::add(vec![var("x"), int(1)])),
        ]));
    }

    #[test]
    fn adjacent_literals_fold() {
        assert_eq!(parse("2*3"), int(6));
        assert_eq!(parse("2*3x"), Expr::mul(vec![int(6), var("x")]));
        assert_eq!(parse("2x5"), Expr::mul(vec![int(2), var("x"), int(5)]));
    }

    #[test]
    fn division_is_reciprocal() {
        assert_eq!(parse("x/2"), Expr::mul(vec![
            var("x"),
            Expr::pow(int(2), int(-1)),
        ]));
    }

    #[test]
    fn frac_is_division() {
        assert_eq!(parse(r"\frac{x}{2}"), parse("x/2"));
        assert_eq!(parse(r"\frac{1}{x+1}"), Expr::mul(vec![
            int(1),
            Expr::pow(Expr::add(vec![var("x"), int(1)]), int(-1)),
        ]));
    }

    #[test]
    fn negative_power() {
        assert_eq!(parse("-2^2"), Expr::mul(vec![
            int(-1),
            Expr::pow(int(2), int(2)),
        ]));
    }

    #[test]
    fn double_negation_collapses() {
        assert_eq!(parse("--x"), var("x"));
        assert_eq!(parse("---x"), Expr::mul(vec![int(-1), var("x")]));
        assert_eq!(parse("--2"), int(2));
    }

    #[test]
    fn negated_product_merges_coefficient() {
        assert_eq!(parse("-x*y"), Expr::mul(vec![int(-1), var("x"), var("y")]));
        assert_eq!(parse("-3x"), Expr::mul(vec![int(-3), var("x")]));
    }

    #[test]
    fn power_is_right_associative() {
        assert_eq!(parse("2^3^4"), Expr::pow(int(2), Expr::pow(int(3), int(4))));
    }

    #[test]
    fn signed_exponent() {
        assert_eq!(parse("x^-1"), Expr::pow(var("x"), int(-1)));
    }

    #[test]
    fn sqrt_is_half_power() {
        let half = Expr::pow(int(2), int(-1));
        assert_eq!(parse("sqrt(x)"), Expr::pow(var("x"), half.clone()));
        assert_eq!(parse(r"\sqrt{x+1}"), Expr::pow(Expr::add(vec![var("x"), int(1)]), half));
    }

    #[test]
    fn absolute_value_spellings() {
        let expected = Expr::new(ExprKind::Abs { arg: Box::new(var("x")) });
        assert_eq!(parse("abs(x)"), expected);
        assert_eq!(parse("|x|"), expected);
        assert_eq!(parse(r"\left|x\right|"), expected);
    }

    #[test]
    fn absolute_values_side_by_side() {
        let abs = |e| Expr::new(ExprKind::Abs { arg: Box::new(e) });
        assert_eq!(parse("|x|+|y|"), Expr::add(vec![abs(var("x")), abs(var("y"))]));
        assert_eq!(parse("|x||y|"), Expr::mul(vec![abs(var("x")), abs(var("y"))]));
    }

    #[test]
    fn bars_after_a_factor_close_the_open_bar() {
        let abs = |e| Expr::new(ExprKind::Abs { arg: Box::new(e) });
        assert_eq!(parse("||x|+1|"), abs(Expr::add(vec![abs(var("x")), int(1)])));
        assert_eq!(
            parse("|x|y|z|"),
            Expr::mul(vec![abs(var("x")), var("y"), abs(var("z"))]),
        );
    }

    #[test]
    fn long_bar_chains_parse_quickly() {
        let source = "|x|x".repeat(40);
        let start = std::time::Instant::now();
        let outcome = crate::parse(&source, &ParseOptions::default());
        assert!(outcome.expr.is_some());
        assert!(start.elapsed() < std::time::Duration::from_secs(2));

        let unclosed = format!("{}|", "|x".repeat(40));
        let start = std::time::Instant::now();
        let _ = crate::parse(&unclosed, &ParseOptions::default());
        assert!(start.elapsed() < std::time::Duration::from_secs(2));
    }

    #[test]
    fn trig_application() {
        assert_eq!(parse("sin x"), Expr::trig(TrigFn::Sin, None, var("x")));
        assert_eq!(parse(r"\cos(x)"), Expr::trig(TrigFn::Cos, None, parens(var("x"))));
    }

    #[test]
    fn trig_argument_is_a_single_factor() {
        assert_eq!(parse("sin 2x"), Expr::mul(vec![
            Expr::trig(TrigFn::Sin, None, int(2)),
            var("x"),
        ]));
    }

    #[test]
    fn trig_exponent() {
        assert_eq!(parse("sin^2 x"), Expr::trig(TrigFn::Sin, Some(int(2)), var("x")));
    }

    #[test]
    fn trig_inverse_exponent() {
        assert_eq!(parse("sin^-1 x"), Expr::trig(TrigFn::ArcSin, None, var("x")));
        assert_eq!(parse("arcsin x"), parse("sin^-1 x"));
    }

    #[test]
    fn logarithms() {
        assert_eq!(parse("ln x"), Expr::log(Expr::constant(Constant::E), var("x")));
        assert_eq!(parse("log x"), Expr::log(int(10), var("x")));
        assert_eq!(parse("log_2 8"), Expr::log(int(2), int(8)));
        assert_eq!(parse("log_{b}(x)"), Expr::log(var("b"), parens(var("x"))));
    }

    #[test]
    fn subscripted_variables() {
        assert_eq!(parse("x_1"), Expr::new(ExprKind::Var {
            name: "x".to_string(),
            subscript: Some(Box::new(int(1))),
        }));
        assert_eq!(parse("x_{n+1}"), Expr::new(ExprKind::Var {
            name: "x".to_string(),
            subscript: Some(Box::new(Expr::add(vec![var("n"), int(1)]))),
        }));
    }

    #[test]
    fn named_constants_and_vars() {
        assert_eq!(parse(r"2\pi"), Expr::mul(vec![int(2), Expr::constant(Constant::Pi)]));
        assert_eq!(parse("θ"), var("theta"));
        assert_eq!(parse(r"\phi"), var("phi"));
    }

    #[test]
    fn braces_do_not_mark_parens() {
        assert_eq!(parse("{x+1}"), Expr::add(vec![var("x"), int(1)]));
        assert_eq!(parse("(x+1)").hints, Hints { parens: true });
    }

    #[test]
    fn declared_function() {
        let options = ParseOptions { functions: vec!["f".to_string()] };
        let expr = Parser::with_options("f(x) + 1", &options).try_parse_full::<Expr>().unwrap();
        assert_eq!(expr, Expr::add(vec![
            Expr::new(ExprKind::Func { name: "f".to_string(), arg: Box::new(var("x")) }),
            int(1),
        ]));

        // without the option, `f` is a variable
        assert_eq!(parse("f(x)"), Expr::mul(vec![var("f"), parens(var("x"))]));
    }

    #[test]
    fn equation() {
        assert_eq!(parse("y = 2x"), Expr::equation(
            var("y"),
            Relation::Eq,
            Expr::mul(vec![int(2), var("x")]),
        ));
        assert_eq!(parse(r"x \le 3"), Expr::equation(var("x"), Relation::LessEq, int(3)));
    }

    #[test]
    fn unclosed_parenthesis() {
        assert!(parse_err("(x + 1").is::<kind::UnclosedParenthesis>());
    }

    #[test]
    fn dangling_operator() {
        assert!(parse_err("x +").is::<kind::UnexpectedEof>());
    }

    #[test]
    fn trailing_garbage() {
        assert!(parse_err("x )").is::<kind::ExpectedEof>());
    }

    #[test]
    fn empty_group() {
        assert!(parse_err("2()").is::<kind::ExpectedEof>());
        assert!(parse_err("()").is::<kind::EmptyGroup>());
    }
}
