//! Powers and the smallest pieces of an expression: literals, variables, constants, groups, and
//! invocations such as `sqrt(x)`, `|x|` and `\frac{a}{b}`.

use crate::{
    ast::{Constant, Expr, ExprKind},
    parser::{
        error::{kind, Error},
        term,
        token::{Bar, CloseBrace, CloseParen, RightBar, Underscore},
        unary,
        Parser,
    },
    tokenizer::{Token, TokenKind},
};

/// Parses a primitive, optionally raised to a signed exponent. Exponents associate to the right:
/// `2^3^4` is `2^(3^4)`.
pub fn power(input: &mut Parser) -> Result<Expr, Error> {
    let base = primitive(input)?;
    if input.next_if(TokenKind::Exp).is_some() {
        let exp = unary::negative(input)?;
        Ok(Expr::pow(base, exp))
    } else {
        Ok(base)
    }
}

/// Parses a literal, variable, constant, group or invocation.
pub fn primitive(input: &mut Parser) -> Result<Expr, Error> {
    let token = input.next_token()?;
    match token.kind {
        TokenKind::Letter if input.is_function(token.lexeme) => {
            let arg = paren_group(input, &token)?;
            Ok(Expr::new(ExprKind::Func { name: token.lexeme.to_owned(), arg: Box::new(arg) }))
        },
        TokenKind::Letter => subscriptable(input, token.lexeme),
        TokenKind::NamedVar(name) => subscriptable(input, name),
        TokenKind::Pi => Ok(Expr::constant(Constant::Pi)),
        TokenKind::Int => Ok(int_literal(token.lexeme)),
        TokenKind::Float => Ok(Expr::float(token.lexeme.parse().unwrap_or_default())),
        TokenKind::OpenParen => {
            let inner = delimited(input, &token)?;
            Ok(inner.with_parens())
        },
        TokenKind::OpenBrace => delimited(input, &token),
        TokenKind::Sqrt => Ok(Expr::sqrt(group(input)?)),
        TokenKind::Abs => Ok(Expr::abs(group(input)?)),
        TokenKind::Frac => {
            let numerator = group(input)?;
            let denominator = group(input)?;
            Ok(Expr::divide(numerator, denominator))
        },
        TokenKind::Bar => {
            let arg = input.within_bars(term::additive)?;
            input.try_parse::<Bar>()
                .map_err(|_| Error::new(vec![token.span.clone()], kind::UnclosedBar))?;
            Ok(Expr::abs(arg))
        },
        TokenKind::LeftBar => {
            let arg = term::additive(input)?;
            input.try_parse::<RightBar>()
                .map_err(|_| Error::new(vec![token.span.clone()], kind::UnclosedBar))?;
            Ok(Expr::abs(arg))
        },
        TokenKind::Invalid => Err(Error::new(vec![token.span], kind::InvalidSymbol {
            lexeme: token.lexeme.to_owned(),
        })),
        found => Err(Error::new(vec![token.span], kind::UnexpectedToken {
            expected: &[
                TokenKind::Letter,
                TokenKind::Int,
                TokenKind::Float,
                TokenKind::OpenParen,
                TokenKind::OpenBrace,
            ],
            found,
        })),
    }
}

/// Parses an optional subscript after the name of a variable.
fn subscriptable(input: &mut Parser, name: &str) -> Result<Expr, Error> {
    let subscript = match input.try_parse::<Underscore>() {
        Ok(_) => Some(Box::new(primitive(input)?)),
        Err(_) => None,
    };
    Ok(Expr::new(ExprKind::Var { name: name.to_owned(), subscript }))
}

/// Reads an integer literal, which may end with a dot. Literals too large for an integer are read
/// as floating-point numbers.
fn int_literal(lexeme: &str) -> Expr {
    let digits = lexeme.trim_end_matches('.');
    match digits.parse::<i64>() {
        Ok(value) => Expr::int(value),
        Err(_) => Expr::float(digits.parse().unwrap_or(f64::INFINITY)),
    }
}

/// Parses the rest of a group whose opening delimiter `open` was already consumed, up to and
/// including the matching closing delimiter.
fn delimited(input: &mut Parser, open: &Token) -> Result<Expr, Error> {
    let close = match open.kind {
        TokenKind::OpenParen => TokenKind::CloseParen,
        _ => TokenKind::CloseBrace,
    };
    if input.peek_kind() == Some(close) {
        return Err(input.error(kind::EmptyGroup));
    }

    let inner = term::additive(input)?;
    let closed = match close {
        TokenKind::CloseParen => input.try_parse::<CloseParen>().is_ok(),
        _ => input.try_parse::<CloseBrace>().is_ok(),
    };

    if closed {
        Ok(inner)
    } else if close == TokenKind::CloseParen {
        Err(Error::new(vec![open.span.clone()], kind::UnclosedParenthesis))
    } else {
        Err(Error::new(vec![open.span.clone()], kind::UnclosedBrace))
    }
}

/// Parses the argument of an invocation such as `sqrt` or `\frac`: a group in parentheses or
/// braces. The parentheses belong to the invocation, so no hint is attached.
fn group(input: &mut Parser) -> Result<Expr, Error> {
    let open = input.next_token()?;
    match open.kind {
        TokenKind::OpenParen | TokenKind::OpenBrace => delimited(input, &open),
        found => Err(Error::new(vec![open.span], kind::UnexpectedToken {
            expected: &[TokenKind::OpenParen, TokenKind::OpenBrace],
            found,
        })),
    }
}

/// Parses the parenthesized argument of a declared function.
fn paren_group(input: &mut Parser, name: &Token) -> Result<Expr, Error> {
    match input.peek_kind() {
        Some(TokenKind::OpenParen) => group(input),
        Some(found) => Err(input.error(kind::UnexpectedToken {
            expected: &[TokenKind::OpenParen],
            found,
        })),
        None => Err(Error::new(vec![name.span.clone()], kind::UnexpectedEof)),
    }
}
