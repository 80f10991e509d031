pub mod token;

use logos::{Lexer, Logos};
pub use token::{Relation, Token, TokenKind, TrigFn};

/// Returns an iterator over the token kinds produced by the tokenizer.
pub fn tokenize(input: &str) -> Lexer<TokenKind> {
    TokenKind::lexer(input)
}

/// Returns an owned array containing all of the tokens produced by the tokenizer. This allows us
/// to backtrack in case of an error.
///
/// Lexing never fails: input the tokenizer doesn't recognize becomes [`TokenKind::Invalid`], and
/// it's up to the parser to reject it.
pub fn tokenize_complete(input: &str) -> Box<[Token]> {
    let mut lexer = tokenize(input);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        tokens.push(Token {
            span: lexer.span(),
            kind: result.unwrap_or(TokenKind::Invalid),
            lexeme: lexer.slice(),
        });
    }

    tokens.into_boxed_slice()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    /// Compares the tokens produced by the tokenizer to the raw expected tokens.
    fn compare_tokens<'source, const N: usize>(input: &'source str, expected: [(TokenKind, &'source str); N]) {
        let tokens = tokenize_complete(input);
        let actual = tokens.iter()
            .map(|token| (token.kind, token.lexeme))
            .collect::<Vec<_>>();

        assert_eq!(actual, expected.to_vec());
    }

    /// Returns the kinds of the non-whitespace tokens produced by the tokenizer.
    fn kinds(input: &str) -> Vec<TokenKind> {
        tokenize_complete(input)
            .iter()
            .filter(|token| !token.is_whitespace())
            .map(|token| token.kind)
            .collect()
    }

    #[test]
    fn basic_expr() {
        compare_tokens(
            "1 + 2",
            [
                (TokenKind::Int, "1"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Add, "+"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Int, "2"),
            ],
        );
    }

    #[test]
    fn numbers() {
        compare_tokens(
            "12 3. 4.5 .25",
            [
                (TokenKind::Int, "12"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Int, "3."),
                (TokenKind::Whitespace, " "),
                (TokenKind::Float, "4.5"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Float, ".25"),
            ],
        );
    }

    #[test]
    fn implicit_product() {
        compare_tokens(
            "3x^2",
            [
                (TokenKind::Int, "3"),
                (TokenKind::Letter, "x"),
                (TokenKind::Exp, "^"),
                (TokenKind::Int, "2"),
            ],
        );
    }

    #[test]
    fn multiplication_aliases() {
        assert_eq!(kinds(r"a*b·c×d\cdot e\times f"), vec![
            TokenKind::Letter, TokenKind::Mul,
            TokenKind::Letter, TokenKind::Mul,
            TokenKind::Letter, TokenKind::Mul,
            TokenKind::Letter, TokenKind::Mul,
            TokenKind::Letter, TokenKind::Mul,
            TokenKind::Letter,
        ]);
    }

    #[test]
    fn power_and_minus_aliases() {
        assert_eq!(kinds("x**2 − 1"), vec![
            TokenKind::Letter,
            TokenKind::Exp,
            TokenKind::Int,
            TokenKind::Sub,
            TokenKind::Int,
        ]);
    }

    #[test]
    fn relations() {
        let cases = [
            ("=", Relation::Eq),
            ("<", Relation::Less),
            (">", Relation::Greater),
            ("<=", Relation::LessEq),
            (r"\le", Relation::LessEq),
            ("≤", Relation::LessEq),
            (">=", Relation::GreaterEq),
            (r"\ge", Relation::GreaterEq),
            ("≥", Relation::GreaterEq),
            ("<>", Relation::NotEq),
            (r"\ne", Relation::NotEq),
            ("≠", Relation::NotEq),
            ("/=", Relation::NotEq),
            ("=/=", Relation::NotEq),
            ("!=", Relation::NotEq),
        ];

        for (source, relation) in cases {
            assert_eq!(kinds(source), vec![TokenKind::Sign(relation)], "source: {}", source);
        }
    }

    #[test]
    fn grouping_aliases() {
        assert_eq!(kinds(r"\left( ( \right) ) { \left{ \left\{ } \right} \right\}"), vec![
            TokenKind::OpenParen,
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::CloseParen,
            TokenKind::OpenBrace,
            TokenKind::OpenBrace,
            TokenKind::OpenBrace,
            TokenKind::CloseBrace,
            TokenKind::CloseBrace,
            TokenKind::CloseBrace,
        ]);
    }

    #[test]
    fn bars() {
        assert_eq!(kinds(r"|x| \left|y\right|"), vec![
            TokenKind::Bar,
            TokenKind::Letter,
            TokenKind::Bar,
            TokenKind::LeftBar,
            TokenKind::Letter,
            TokenKind::RightBar,
        ]);
    }

    #[test]
    fn keywords() {
        assert_eq!(kinds(r"\frac sqrt \sqrt abs \abs ln \ln log \log"), vec![
            TokenKind::Frac,
            TokenKind::Sqrt,
            TokenKind::Sqrt,
            TokenKind::Abs,
            TokenKind::Abs,
            TokenKind::Ln,
            TokenKind::Ln,
            TokenKind::Log,
            TokenKind::Log,
        ]);
    }

    #[test]
    fn trig_names() {
        assert_eq!(kinds(r"sin \cos tan \csc sec \cot"), vec![
            TokenKind::Trig(TrigFn::Sin),
            TokenKind::Trig(TrigFn::Cos),
            TokenKind::Trig(TrigFn::Tan),
            TokenKind::Trig(TrigFn::Csc),
            TokenKind::Trig(TrigFn::Sec),
            TokenKind::Trig(TrigFn::Cot),
        ]);
    }

    #[test]
    fn inverse_trig_names() {
        assert_eq!(kinds(r"arcsin arccot \arctan"), vec![
            TokenKind::TrigInv(TrigFn::ArcSin),
            TokenKind::TrigInv(TrigFn::ArcCot),
            TokenKind::Trig(TrigFn::ArcTan),
        ]);
    }

    #[test]
    fn named_symbols() {
        assert_eq!(kinds(r"pi π \pi theta θ \theta phi φ \phi"), vec![
            TokenKind::Pi,
            TokenKind::Pi,
            TokenKind::Pi,
            TokenKind::NamedVar("theta"),
            TokenKind::NamedVar("theta"),
            TokenKind::NamedVar("theta"),
            TokenKind::NamedVar("phi"),
            TokenKind::NamedVar("phi"),
            TokenKind::NamedVar("phi"),
        ]);
    }

    #[test]
    fn maximal_munch() {
        // `sinx` is the function `sin` applied to `x`, but `six` is three letters
        assert_eq!(kinds("sinx six"), vec![
            TokenKind::Trig(TrigFn::Sin),
            TokenKind::Letter,
            TokenKind::Letter,
            TokenKind::Letter,
            TokenKind::Letter,
        ]);
    }

    #[test]
    fn space_command_is_whitespace() {
        compare_tokens(
            r"2\space x",
            [
                (TokenKind::Int, "2"),
                (TokenKind::Whitespace, r"\space"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Letter, "x"),
            ],
        );
    }

    #[test]
    fn invalid_symbols() {
        compare_tokens(
            "2 $ \\",
            [
                (TokenKind::Int, "2"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Invalid, "$"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Invalid, "\\"),
            ],
        );
    }
}
