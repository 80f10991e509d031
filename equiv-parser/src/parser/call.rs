//! Functions applied to the factor that follows them, such as `sin x`, `ln x` and `log_2 8`.

use crate::{
    ast::{Constant, Expr, ExprKind},
    parser::{error::Error, primary, token::Underscore, unary, Parser},
    tokenizer::TokenKind,
};

/// Parses a trigonometric function or logarithm applied to a factor, or a power if there is no
/// function name.
///
/// The argument is a single signed factor, so `sin 2x` is `(sin 2) * x`.
pub fn triglog(input: &mut Parser) -> Result<Expr, Error> {
    match input.peek_kind() {
        Some(TokenKind::Trig(func)) => {
            input.next_token()?;
            let exp = match input.next_if(TokenKind::Exp) {
                Some(_) => Some(unary::negative(input)?),
                None => None,
            };
            let arg = unary::negative(input)?;

            // `sin^-1 x` is the inverse function, not a reciprocal
            match exp {
                Some(exp) if exp.is_int(-1) && func.inverse() != func => {
                    Ok(Expr::trig(func.inverse(), None, arg))
                },
                exp => Ok(Expr::trig(func, exp, arg)),
            }
        },
        Some(TokenKind::TrigInv(func)) => {
            input.next_token()?;
            let arg = unary::negative(input)?;
            Ok(Expr::trig(func, None, arg))
        },
        Some(TokenKind::Ln) => {
            input.next_token()?;
            let arg = unary::negative(input)?;
            Ok(Expr::log(Expr::constant(Constant::E), arg))
        },
        Some(TokenKind::Log) => {
            input.next_token()?;
            let base = match input.try_parse::<Underscore>() {
                Ok(_) => primary::primitive(input)?,
                Err(_) => Expr::int(10),
            };
            let arg = unary::negative(input)?;
            Ok(Expr::new(ExprKind::Log { base: Box::new(base), arg: Box::new(arg) }))
        },
        _ => primary::power(input),
    }
}
