//! Single-token grammar elements, so rules can ask for a token kind by type, e.g.
//! `input.try_parse::<CloseParen>()`.

use crate::{
    parser::{error::Error, Parse, Parser},
    tokenizer::TokenKind,
};
use std::ops::Range;

macro_rules! single_tokens {
    ($($kind:ident),* $(,)?) => {
        $(
            #[doc = concat!("A [`TokenKind::", stringify!($kind), "`] token.")]
            #[derive(Clone, Debug, PartialEq)]
            pub(crate) struct $kind {
                pub(crate) span: Range<usize>,
            }

            impl Parse for $kind {
                fn parse(input: &mut Parser) -> Result<Self, Error> {
                    input.expect(&[TokenKind::$kind]).map(|span| Self { span })
                }
            }
        )*
    };
}

single_tokens!(CloseParen, CloseBrace, Underscore, Bar, RightBar);
