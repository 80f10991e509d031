use crate::{
    ast::Expr,
    parser::{error::Error, term, Parse, Parser},
    tokenizer::TokenKind,
};

/// Parses a whole answer: a relation between two expressions, a lone expression, or nothing at
/// all. Empty input is the empty sum, `0`.
impl Parse for Expr {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        if input.is_at_end() {
            return Ok(Expr::add(Vec::new()));
        }

        let lhs = term::additive(input)?;
        match input.peek_kind() {
            Some(TokenKind::Sign(relation)) => {
                input.next_token()?;
                let rhs = term::additive(input)?;
                Ok(Expr::equation(lhs, relation, rhs))
            },
            _ => Ok(lhs),
        }
    }
}
