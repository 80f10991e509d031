//! Sums and products.

use crate::{
    ast::Expr,
    parser::{call, error::Error, unary, Parser},
    tokenizer::TokenKind,
};

/// Parses a sum of terms separated by `+` or `-`. Subtracting a term adds its negation.
pub fn additive(input: &mut Parser) -> Result<Expr, Error> {
    let mut lhs = multiplicative(input)?;

    loop {
        match input.peek_kind() {
            Some(TokenKind::Add) => {
                input.next_token()?;
                let rhs = multiplicative(input)?;
                lhs = Expr::create_or_append_add(lhs, rhs);
            },
            Some(TokenKind::Sub) => {
                input.next_token()?;
                let rhs = multiplicative(input)?;
                lhs = Expr::create_or_append_add(lhs, Expr::negate(rhs));
            },
            _ => return Ok(lhs),
        }
    }
}

/// Parses a product of factors separated by `*`, `/`, or nothing at all.
///
/// Only a function application or a plain factor can follow another factor without an operator,
/// so `2 -3` is still a difference and not a product. Inside `|...|`, a bar after a factor always
/// closes the absolute value.
pub fn multiplicative(input: &mut Parser) -> Result<Expr, Error> {
    let mut lhs = unary::negative(input)?;

    loop {
        match input.peek_kind() {
            Some(TokenKind::Mul) => {
                input.next_token()?;
                let rhs = unary::negative(input)?;
                lhs = Expr::create_or_append_mul(lhs, rhs);
            },
            Some(TokenKind::Div) => {
                input.next_token()?;
                let rhs = unary::negative(input)?;
                lhs = Expr::divide(lhs, rhs);
            },
            Some(TokenKind::Bar) if input.in_bars() => return Ok(lhs),
            _ => match input.try_parse_with_fn(call::triglog) {
                Ok(rhs) => lhs = Expr::create_or_append_mul(lhs, rhs),
                Err(_) => return Ok(lhs),
            },
        }
    }
}
