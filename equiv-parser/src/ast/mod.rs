//! The expression tree produced by the parser.
//!
//! An [`Expr`] is an immutable value: every operation on it (building, normalizing, simplifying)
//! returns a new tree.

pub mod build;
pub mod fmt;
pub mod vars;

use crate::tokenizer::{Relation, TrigFn};

#[cfg(feature = "serde")]
use serde::Serialize;

pub use vars::SameVars;

/// A named mathematical constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Constant {
    /// The ratio of a circle's circumference to its diameter.
    Pi,

    /// Euler's number, the base of the natural logarithm.
    E,
}

impl Constant {
    /// Returns the name of the constant.
    pub fn name(self) -> &'static str {
        match self {
            Constant::Pi => "pi",
            Constant::E => "e",
        }
    }

    /// Returns the value of the constant.
    pub fn value(self) -> f64 {
        match self {
            Constant::Pi => std::f64::consts::PI,
            Constant::E => std::f64::consts::E,
        }
    }
}

/// Structural annotations on a node. Hints take part in form comparison ([`Expr::same_form`]),
/// but never in semantic comparison.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Hints {
    /// The node was explicitly wrapped in parentheses.
    pub parens: bool,
}

impl Hints {
    /// Returns true if no hint is set.
    pub fn is_empty(&self) -> bool {
        !self.parens
    }
}

/// A node of the expression tree.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Expr {
    /// The variant of the node, along with its children.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub kind: ExprKind,

    /// Structural hints attached to the node.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Hints::is_empty"))]
    pub hints: Hints,
}

/// The variants of an expression node.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "nodeType"))]
pub enum ExprKind {
    /// A relation between two expressions, such as `y = 2x` or `x <= 3`.
    Equation {
        lhs: Box<Expr>,
        relation: Relation,
        rhs: Box<Expr>,
    },

    /// A sum of terms. Subtraction is stored as the addition of a negated term.
    Add {
        terms: Vec<Expr>,
    },

    /// A product of factors. Division is stored as multiplication by a reciprocal.
    Mul {
        terms: Vec<Expr>,
    },

    /// A base raised to an exponent. Roots are stored as fractional exponents.
    Pow {
        base: Box<Expr>,
        exp: Box<Expr>,
    },

    /// A variable, optionally subscripted, such as `x` or `x_1`.
    Var {
        name: String,
        subscript: Option<Box<Expr>>,
    },

    /// A named constant.
    Const {
        name: Constant,
    },

    /// An integer literal.
    Int {
        value: i64,
    },

    /// A floating-point literal.
    Float {
        value: f64,
    },

    /// An application of a function the notation doesn't know about, such as `f(x)`.
    Func {
        name: String,
        arg: Box<Expr>,
    },

    /// A logarithm with an explicit base.
    Log {
        base: Box<Expr>,
        arg: Box<Expr>,
    },

    /// A trigonometric function, optionally raised to a power written right after its name, as
    /// in `sin^2 x`.
    Trig {
        func: TrigFn,
        exp: Option<Box<Expr>>,
        arg: Box<Expr>,
    },

    /// An absolute value.
    Abs {
        arg: Box<Expr>,
    },
}

impl Expr {
    /// Creates a node with no hints.
    pub fn new(kind: ExprKind) -> Self {
        Self { kind, hints: Hints::default() }
    }

    /// Creates an integer literal.
    pub fn int(value: i64) -> Self {
        Self::new(ExprKind::Int { value })
    }

    /// Creates a floating-point literal.
    pub fn float(value: f64) -> Self {
        Self::new(ExprKind::Float { value })
    }

    /// Creates a variable with no subscript.
    pub fn var(name: impl Into<String>) -> Self {
        Self::new(ExprKind::Var { name: name.into(), subscript: None })
    }

    /// Creates a named constant.
    pub fn constant(name: Constant) -> Self {
        Self::new(ExprKind::Const { name })
    }

    /// Creates a sum.
    pub fn add(terms: Vec<Expr>) -> Self {
        Self::new(ExprKind::Add { terms })
    }

    /// Creates a product.
    pub fn mul(terms: Vec<Expr>) -> Self {
        Self::new(ExprKind::Mul { terms })
    }

    /// Creates a power.
    pub fn pow(base: Expr, exp: Expr) -> Self {
        Self::new(ExprKind::Pow { base: Box::new(base), exp: Box::new(exp) })
    }

    /// Creates the exponent `1/2`, written as `2^-1`.
    pub fn half() -> Self {
        Self::pow(Self::int(2), Self::int(-1))
    }

    /// Creates the square root of the given expression.
    pub fn sqrt(arg: Expr) -> Self {
        Self::pow(arg, Self::half())
    }

    /// Creates the reciprocal of the given expression.
    pub fn recip(expr: Expr) -> Self {
        Self::pow(expr, Self::int(-1))
    }

    /// Creates a logarithm.
    pub fn log(base: Expr, arg: Expr) -> Self {
        Self::new(ExprKind::Log { base: Box::new(base), arg: Box::new(arg) })
    }

    /// Creates a trigonometric function application.
    pub fn trig(func: TrigFn, exp: Option<Expr>, arg: Expr) -> Self {
        Self::new(ExprKind::Trig { func, exp: exp.map(Box::new), arg: Box::new(arg) })
    }

    /// Creates an absolute value.
    pub fn abs(arg: Expr) -> Self {
        Self::new(ExprKind::Abs { arg: Box::new(arg) })
    }

    /// Creates an equation.
    pub fn equation(lhs: Expr, relation: Relation, rhs: Expr) -> Self {
        Self::new(ExprKind::Equation { lhs: Box::new(lhs), relation, rhs: Box::new(rhs) })
    }

    /// Returns this node marked as explicitly parenthesized.
    pub fn with_parens(mut self) -> Self {
        self.hints.parens = true;
        self
    }

    /// Returns this node with the hints of every node in the tree removed.
    pub fn without_hints(self) -> Self {
        self.map_children(Expr::without_hints).with_hints(Hints::default())
    }

    /// Returns this node with the given hints.
    pub fn with_hints(mut self, hints: Hints) -> Self {
        self.hints = hints;
        self
    }

    /// Returns the integer value of this node, if it is an integer literal.
    pub fn as_int(&self) -> Option<i64> {
        match self.kind {
            ExprKind::Int { value } => Some(value),
            _ => None,
        }
    }

    /// Returns the value of this node, if it is a numeric literal.
    pub fn as_number(&self) -> Option<f64> {
        match self.kind {
            ExprKind::Int { value } => Some(value as f64),
            ExprKind::Float { value } => Some(value),
            _ => None,
        }
    }

    /// Returns true if this node is a numeric literal.
    pub fn is_number(&self) -> bool {
        matches!(self.kind, ExprKind::Int { .. } | ExprKind::Float { .. })
    }

    /// Returns true if this node is the integer literal `value`.
    pub fn is_int(&self, value: i64) -> bool {
        self.as_int() == Some(value)
    }

    /// Returns true if this node is an equation.
    pub fn is_equation(&self) -> bool {
        matches!(self.kind, ExprKind::Equation { .. })
    }

    /// Returns the terms of this node if it is a sum.
    pub fn as_add(&self) -> Option<&[Expr]> {
        match &self.kind {
            ExprKind::Add { terms } => Some(terms),
            _ => None,
        }
    }

    /// Returns the factors of this node if it is a product.
    pub fn as_mul(&self) -> Option<&[Expr]> {
        match &self.kind {
            ExprKind::Mul { terms } => Some(terms),
            _ => None,
        }
    }

    /// Returns the base and exponent of this node if it is a power.
    pub fn as_pow(&self) -> Option<(&Expr, &Expr)> {
        match &self.kind {
            ExprKind::Pow { base, exp } => Some((base, exp)),
            _ => None,
        }
    }

    /// Returns the direct children of this node, in order.
    pub fn children(&self) -> Vec<&Expr> {
        match &self.kind {
            ExprKind::Equation { lhs, rhs, .. } => vec![&**lhs, &**rhs],
            ExprKind::Add { terms } | ExprKind::Mul { terms } => terms.iter().collect(),
            ExprKind::Pow { base, exp } => vec![&**base, &**exp],
            ExprKind::Var { subscript, .. } => subscript.iter().map(|s| &**s).collect(),
            ExprKind::Const { .. } | ExprKind::Int { .. } | ExprKind::Float { .. } => Vec::new(),
            ExprKind::Func { arg, .. } | ExprKind::Abs { arg } => vec![&**arg],
            ExprKind::Log { base, arg } => vec![&**base, &**arg],
            ExprKind::Trig { exp, arg, .. } => exp.iter().map(|e| &**e).chain([&**arg]).collect(),
        }
    }

    /// Rebuilds this node by applying `f` to each of its direct children. The hints of this node
    /// are kept.
    ///
    /// The subscript of a variable is part of the variable's name and is left untouched.
    pub fn map_children(self, mut f: impl FnMut(Expr) -> Expr) -> Self {
        let mut map = |expr: Box<Expr>| Box::new(f(*expr));
        let kind = match self.kind {
            ExprKind::Equation { lhs, relation, rhs } => ExprKind::Equation {
                lhs: map(lhs),
                relation,
                rhs: map(rhs),
            },
            ExprKind::Add { terms } => ExprKind::Add {
                terms: terms.into_iter().map(|term| *map(Box::new(term))).collect(),
            },
            ExprKind::Mul { terms } => ExprKind::Mul {
                terms: terms.into_iter().map(|term| *map(Box::new(term))).collect(),
            },
            ExprKind::Pow { base, exp } => ExprKind::Pow { base: map(base), exp: map(exp) },
            ExprKind::Func { name, arg } => ExprKind::Func { name, arg: map(arg) },
            ExprKind::Log { base, arg } => ExprKind::Log { base: map(base), arg: map(arg) },
            ExprKind::Trig { func, exp, arg } => ExprKind::Trig {
                func,
                exp: exp.map(&mut map),
                arg: map(arg),
            },
            ExprKind::Abs { arg } => ExprKind::Abs { arg: map(arg) },
            leaf @ (ExprKind::Var { .. }
                | ExprKind::Const { .. }
                | ExprKind::Int { .. }
                | ExprKind::Float { .. }) => leaf,
        };
        Self { kind, hints: self.hints }
    }

    /// Returns true if `self` and `other` have exactly the same shape: the same variants, with
    /// children in the same order and the same hints. No normalization is applied.
    pub fn same_form(&self, other: &Expr) -> bool {
        self == other
    }

    /// Returns true if `pred` holds for this node or any node below it.
    pub fn any(&self, pred: &mut impl FnMut(&Expr) -> bool) -> bool {
        pred(self) || self.children().into_iter().any(|child| child.any(pred))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use crate::parser::Parser;
    use super::*;

    fn parse(source: &str) -> Expr {
        Parser::new(source).try_parse_full::<Expr>().unwrap()
    }

    #[test]
    fn same_form_respects_order() {
        assert!(parse("x*y").same_form(&parse("x*y")));
        assert!(!parse("x*y").same_form(&parse("y*x")));
    }

    #[test]
    fn same_form_respects_parens() {
        assert!(!parse("(x)").same_form(&parse("x")));
        assert!(parse("3x").same_form(&parse("3 x")));
    }

    #[test]
    fn without_hints_is_deep() {
        assert_eq!(parse("((x)+(y))").without_hints(), parse("x+y"));
    }

    #[test]
    fn map_children_keeps_hints() {
        let expr = parse("(x+y)").map_children(|child| child);
        assert!(expr.hints.parens);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serialize_tags_node_types() {
        let json = serde_json::to_value(parse("2x")).unwrap();
        assert_eq!(json, serde_json::json!({
            "nodeType": "Mul",
            "terms": [
                { "nodeType": "Int", "value": 2 },
                { "nodeType": "Var", "name": "x", "subscript": null },
            ],
        }));
    }
}
