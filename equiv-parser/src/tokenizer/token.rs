use logos::Logos;
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::Serialize;

/// A relation between the two sides of an equation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Relation {
    Eq,
    NotEq,
    Less,
    LessEq,
    Greater,
    GreaterEq,
}

impl Relation {
    /// Returns the canonical text of the relation.
    pub fn as_str(self) -> &'static str {
        match self {
            Relation::Eq => "=",
            Relation::NotEq => "<>",
            Relation::Less => "<",
            Relation::LessEq => "<=",
            Relation::Greater => ">",
            Relation::GreaterEq => ">=",
        }
    }

    /// Returns the relation that holds when the two sides of the equation are swapped.
    ///
    /// For example, `a < b` is the same statement as `b > a`.
    pub fn mirror(self) -> Self {
        match self {
            Relation::Less => Relation::Greater,
            Relation::LessEq => Relation::GreaterEq,
            Relation::Greater => Relation::Less,
            Relation::GreaterEq => Relation::LessEq,
            other => other,
        }
    }

    /// Returns true if the relation is symmetric, meaning that swapping both sides doesn't change
    /// it.
    pub fn is_symmetric(self) -> bool {
        matches!(self, Relation::Eq | Relation::NotEq)
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A direct or inverse trigonometric function.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum TrigFn {
    Sin,
    Cos,
    Tan,
    Csc,
    Sec,
    Cot,
    ArcSin,
    ArcCos,
    ArcTan,
    ArcCsc,
    ArcSec,
    ArcCot,
}

impl TrigFn {
    /// Returns the canonical name of the function.
    pub fn name(self) -> &'static str {
        match self {
            TrigFn::Sin => "sin",
            TrigFn::Cos => "cos",
            TrigFn::Tan => "tan",
            TrigFn::Csc => "csc",
            TrigFn::Sec => "sec",
            TrigFn::Cot => "cot",
            TrigFn::ArcSin => "arcsin",
            TrigFn::ArcCos => "arccos",
            TrigFn::ArcTan => "arctan",
            TrigFn::ArcCsc => "arccsc",
            TrigFn::ArcSec => "arcsec",
            TrigFn::ArcCot => "arccot",
        }
    }

    /// Returns the inverse of a direct trigonometric function. Inverse functions are returned
    /// unchanged.
    pub fn inverse(self) -> Self {
        match self {
            TrigFn::Sin => TrigFn::ArcSin,
            TrigFn::Cos => TrigFn::ArcCos,
            TrigFn::Tan => TrigFn::ArcTan,
            TrigFn::Csc => TrigFn::ArcCsc,
            TrigFn::Sec => TrigFn::ArcSec,
            TrigFn::Cot => TrigFn::ArcCot,
            inverse => inverse,
        }
    }
}

impl fmt::Display for TrigFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Alias for `&'static str`; keeps the `Logos` derive from rewriting the `'static` lifetime.
type StaticStr = &'static str;

/// The different kinds of tokens that can be produced by the tokenizer.
///
/// Notational aliases (Unicode glyphs, backslash-escaped commands, `\left` / `\right` variants)
/// are collapsed into the same token kind here, so the parser never has to care about spelling.
#[derive(Logos, Clone, Copy, Debug, PartialEq)]
pub enum TokenKind {
    #[regex(r"[ \t\n\r]+")]
    #[token(r"\space")]
    Whitespace,

    #[token("+")]
    Add,

    #[token("-")]
    #[token("−")]
    Sub,

    #[token("*")]
    #[token("·")]
    #[token("×")]
    #[token(r"\cdot")]
    #[token(r"\times")]
    Mul,

    #[token("/")]
    Div,

    #[token("^")]
    #[token("**")]
    Exp,

    #[token("=", |_| Relation::Eq)]
    #[token("<>", |_| Relation::NotEq)]
    #[token(r"\ne", |_| Relation::NotEq)]
    #[token("≠", |_| Relation::NotEq)]
    #[token("/=", |_| Relation::NotEq)]
    #[token("=/=", |_| Relation::NotEq)]
    #[token("!=", |_| Relation::NotEq)]
    #[token("<", |_| Relation::Less)]
    #[token("<=", |_| Relation::LessEq)]
    #[token(r"\le", |_| Relation::LessEq)]
    #[token("≤", |_| Relation::LessEq)]
    #[token(">", |_| Relation::Greater)]
    #[token(">=", |_| Relation::GreaterEq)]
    #[token(r"\ge", |_| Relation::GreaterEq)]
    #[token("≥", |_| Relation::GreaterEq)]
    Sign(Relation),

    #[token("(")]
    #[token(r"\left(")]
    OpenParen,

    #[token(")")]
    #[token(r"\right)")]
    CloseParen,

    #[token("{")]
    #[token(r"\left{")]
    #[token(r"\left\{")]
    OpenBrace,

    #[token("}")]
    #[token(r"\right}")]
    #[token(r"\right\}")]
    CloseBrace,

    #[token("_")]
    Underscore,

    #[token("|")]
    Bar,

    #[token(r"\left|")]
    LeftBar,

    #[token(r"\right|")]
    RightBar,

    #[token(r"\frac")]
    #[token(r"\dfrac")]
    Frac,

    #[token("sqrt")]
    #[token(r"\sqrt")]
    Sqrt,

    #[token("abs")]
    #[token(r"\abs")]
    Abs,

    #[token("ln")]
    #[token(r"\ln")]
    Ln,

    #[token("log")]
    #[token(r"\log")]
    Log,

    #[token("sin", |_| TrigFn::Sin)]
    #[token(r"\sin", |_| TrigFn::Sin)]
    #[token("cos", |_| TrigFn::Cos)]
    #[token(r"\cos", |_| TrigFn::Cos)]
    #[token("tan", |_| TrigFn::Tan)]
    #[token(r"\tan", |_| TrigFn::Tan)]
    #[token("csc", |_| TrigFn::Csc)]
    #[token(r"\csc", |_| TrigFn::Csc)]
    #[token("sec", |_| TrigFn::Sec)]
    #[token(r"\sec", |_| TrigFn::Sec)]
    #[token("cot", |_| TrigFn::Cot)]
    #[token(r"\cot", |_| TrigFn::Cot)]
    #[token(r"\arcsin", |_| TrigFn::ArcSin)]
    #[token(r"\arccos", |_| TrigFn::ArcCos)]
    #[token(r"\arctan", |_| TrigFn::ArcTan)]
    #[token(r"\arccsc", |_| TrigFn::ArcCsc)]
    #[token(r"\arcsec", |_| TrigFn::ArcSec)]
    #[token(r"\arccot", |_| TrigFn::ArcCot)]
    Trig(TrigFn),

    #[token("arcsin", |_| TrigFn::ArcSin)]
    #[token("arccos", |_| TrigFn::ArcCos)]
    #[token("arctan", |_| TrigFn::ArcTan)]
    #[token("arccsc", |_| TrigFn::ArcCsc)]
    #[token("arcsec", |_| TrigFn::ArcSec)]
    #[token("arccot", |_| TrigFn::ArcCot)]
    TrigInv(TrigFn),

    #[token("pi")]
    #[token("π")]
    #[token(r"\pi")]
    Pi,

    #[token("theta", |_| "theta")]
    #[token("θ", |_| "theta")]
    #[token(r"\theta", |_| "theta")]
    #[token("phi", |_| "phi")]
    #[token("φ", |_| "phi")]
    #[token(r"\phi", |_| "phi")]
    NamedVar(StaticStr),

    #[regex(r"[a-zA-Z]")]
    Letter,

    #[regex(r"[0-9]+\.?")]
    Int,

    #[regex(r"[0-9]*\.[0-9]+")]
    Float,

    #[regex(r".", priority = 0)]
    Invalid,
}

impl TokenKind {
    /// Returns true if the token represents whitespace.
    pub fn is_whitespace(self) -> bool {
        matches!(self, TokenKind::Whitespace)
    }
}

/// A token produced by the tokenizer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'source> {
    /// The region of the source code that this token originated from.
    pub span: Range<usize>,

    /// The kind of token.
    pub kind: TokenKind,

    /// The raw lexeme that was parsed into this token.
    pub lexeme: &'source str,
}

impl Token<'_> {
    /// Returns true if the token represents whitespace.
    pub fn is_whitespace(&self) -> bool {
        self.kind.is_whitespace()
    }
}
