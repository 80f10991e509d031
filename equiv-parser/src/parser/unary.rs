use crate::{
    ast::Expr,
    parser::{call, error::Error, Parser},
    tokenizer::TokenKind,
};

/// Parses a factor preceded by any number of unary minus signs. Each sign flips the factor's sign
/// in place rather than nesting negations.
pub fn negative(input: &mut Parser) -> Result<Expr, Error> {
    if input.next_if(TokenKind::Sub).is_some() {
        let operand = negative(input)?;
        Ok(Expr::negate(operand))
    } else {
        call::triglog(input)
    }
}
