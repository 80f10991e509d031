//! Human-readable ([`Display`]) and structural ([`Expr::repr`]) renderings of expressions.
//!
//! The printed form uses the same glyphs the tokenizer accepts, so printing and re-parsing an
//! expression yields an equivalent tree.

use std::fmt::{self, Display, Formatter, Write};
use crate::parser::Precedence;
use super::{Constant, Expr, ExprKind};

impl Expr {
    /// Returns the precedence of the operation at the root of this expression, used to decide
    /// where parentheses are needed.
    pub fn precedence(&self) -> Precedence {
        match &self.kind {
            ExprKind::Equation { .. } => Precedence::Relation,
            ExprKind::Add { terms } if terms.len() != 1 => Precedence::Term,
            ExprKind::Add { terms } if terms.len() == 1 => terms[0].precedence(),
            ExprKind::Mul { .. } if self.is_negative() => Precedence::Neg,
            ExprKind::Add { .. } | ExprKind::Mul { .. } => Precedence::Factor,
            ExprKind::Pow { .. } if is_half(self) => Precedence::Atom,
            ExprKind::Pow { .. } => Precedence::Exp,
            ExprKind::Int { .. } | ExprKind::Float { .. } if self.is_negative() => Precedence::Neg,
            _ => Precedence::Atom,
        }
    }

    /// Returns true if this expression prints with a leading minus sign.
    fn is_negative(&self) -> bool {
        match &self.kind {
            ExprKind::Int { value } => *value < 0,
            ExprKind::Float { value } => value.is_sign_negative(),
            ExprKind::Mul { terms } => terms.first().is_some_and(|first| first.is_negative()),
            _ => false,
        }
    }

    /// Returns the printed form of this expression.
    pub fn print(&self) -> String {
        self.to_string()
    }

    /// Returns a structural rendering of this expression that exposes the variant of every node,
    /// such as `Add(Int(2), Mul(Int(3), Var(x)))`.
    pub fn repr(&self) -> String {
        let mut out = String::new();
        // writing to a `String` cannot fail
        let _ = write_repr(self, &mut out);
        out
    }
}

/// Returns true if the expression is a square root, `x^(2^-1)`.
fn is_half(expr: &Expr) -> bool {
    match &expr.kind {
        ExprKind::Pow { exp, .. } => match &exp.kind {
            ExprKind::Pow { base, exp } => base.is_int(2) && exp.is_int(-1),
            _ => false,
        },
        _ => false,
    }
}

/// Writes the expression, wrapped in parentheses if its precedence is not above `min`.
fn fmt_operand(f: &mut Formatter, expr: &Expr, min: Precedence) -> fmt::Result {
    if expr.hints.parens || expr.precedence() <= min {
        write!(f, "(")?;
        fmt_bare(f, expr)?;
        write!(f, ")")
    } else {
        fmt_bare(f, expr)
    }
}

/// Writes the expression as a function argument, always in exactly one pair of parentheses.
fn fmt_arg(f: &mut Formatter, expr: &Expr) -> fmt::Result {
    write!(f, "(")?;
    fmt_bare(f, expr)?;
    write!(f, ")")
}

/// Writes an expression used as a subscript: bare if it is a single token, in braces otherwise.
fn fmt_subscript(f: &mut Formatter, expr: &Expr) -> fmt::Result {
    let single = match &expr.kind {
        ExprKind::Int { value } => *value >= 0,
        ExprKind::Var { subscript: None, .. } | ExprKind::Const { .. } => true,
        _ => false,
    };

    if single && !expr.hints.parens {
        fmt_bare(f, expr)
    } else {
        write!(f, "{{")?;
        fmt_bare(f, expr)?;
        write!(f, "}}")
    }
}

/// Writes the factors of a product, using `/` for reciprocal factors.
fn fmt_product(f: &mut Formatter, terms: &[Expr]) -> fmt::Result {
    let mut numerator = Vec::new();
    let mut denominator = Vec::new();
    for term in terms {
        match &term.kind {
            ExprKind::Pow { base, exp } if exp.is_int(-1) && !term.hints.parens => denominator.push(&**base),
            _ => numerator.push(term),
        }
    }

    let mut numerator = numerator.into_iter().peekable();
    match numerator.peek() {
        Some(first) if first.is_int(-1) && !first.hints.parens => {
            numerator.next();
            write!(f, "-")?;
            if numerator.peek().is_none() {
                write!(f, "1")?;
            }
        },
        Some(_) => (),
        None => write!(f, "1")?,
    }

    for (i, term) in numerator.enumerate() {
        if i > 0 {
            write!(f, "*")?;
        }

        // a negative literal is only allowed to print bare in the leading position
        let min = if i == 0 { Precedence::Term } else { Precedence::Neg };
        fmt_operand(f, term, min)?;
    }

    for term in denominator {
        write!(f, "/")?;
        fmt_operand(f, term, Precedence::Neg)?;
    }

    Ok(())
}

/// Writes the expression without considering its own parentheses hint.
fn fmt_bare(f: &mut Formatter, expr: &Expr) -> fmt::Result {
    match &expr.kind {
        ExprKind::Equation { lhs, relation, rhs } => {
            fmt_operand(f, lhs, Precedence::Relation)?;
            write!(f, "{}", relation)?;
            fmt_operand(f, rhs, Precedence::Relation)
        },
        ExprKind::Add { terms } if terms.is_empty() => write!(f, "0"),
        ExprKind::Add { terms } => {
            for (i, term) in terms.iter().enumerate() {
                if i > 0 && !(term.is_negative() && !term.hints.parens) {
                    write!(f, "+")?;
                }
                fmt_operand(f, term, Precedence::Term)?;
            }
            Ok(())
        },
        ExprKind::Mul { terms } if terms.is_empty() => write!(f, "1"),
        ExprKind::Mul { terms } => fmt_product(f, terms),
        ExprKind::Pow { base, .. } if is_half(expr) => {
            write!(f, "sqrt")?;
            fmt_arg(f, base)
        },
        ExprKind::Pow { base, exp } => {
            fmt_operand(f, base, Precedence::Exp)?;
            write!(f, "^")?;
            if exp.is_negative() && exp.is_number() && !exp.hints.parens {
                fmt_bare(f, exp)
            } else {
                fmt_operand(f, exp, Precedence::Neg)
            }
        },
        ExprKind::Var { name, subscript } => {
            write!(f, "{}", name)?;
            if let Some(subscript) = subscript {
                write!(f, "_")?;
                fmt_subscript(f, subscript)?;
            }
            Ok(())
        },
        ExprKind::Const { name } => write!(f, "{}", name.name()),
        ExprKind::Int { value } => write!(f, "{}", value),
        ExprKind::Float { value } => write!(f, "{}", value),
        ExprKind::Func { name, arg } => {
            write!(f, "{}", name)?;
            fmt_arg(f, arg)
        },
        ExprKind::Log { base, arg } => {
            match &base.kind {
                ExprKind::Const { name: Constant::E } => write!(f, "ln")?,
                ExprKind::Int { value: 10 } => write!(f, "log")?,
                _ => {
                    write!(f, "log_")?;
                    fmt_subscript(f, base)?;
                },
            }
            fmt_arg(f, arg)
        },
        ExprKind::Trig { func, exp, arg } => {
            write!(f, "{}", func)?;
            if let Some(exp) = exp {
                write!(f, "^")?;
                fmt_subscript(f, exp)?;
            }
            fmt_arg(f, arg)
        },
        ExprKind::Abs { arg } => {
            write!(f, "abs")?;
            fmt_arg(f, arg)
        },
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        if self.hints.parens {
            fmt_arg(f, self)
        } else {
            fmt_bare(f, self)
        }
    }
}

/// Writes a comma-separated list of structural renderings.
fn write_repr_list<'a>(exprs: impl IntoIterator<Item = &'a Expr>, out: &mut String) -> fmt::Result {
    for (i, expr) in exprs.into_iter().enumerate() {
        if i > 0 {
            out.write_str(", ")?;
        }
        write_repr(expr, out)?;
    }
    Ok(())
}

/// Writes the structural rendering of the expression.
fn write_repr(expr: &Expr, out: &mut String) -> fmt::Result {
    match &expr.kind {
        ExprKind::Equation { lhs, relation, rhs } => {
            out.write_str("Equation(")?;
            write_repr(lhs, out)?;
            write!(out, ", {}, ", relation)?;
            write_repr(rhs, out)?;
        },
        ExprKind::Add { terms } => {
            out.write_str("Add(")?;
            write_repr_list(terms, out)?;
        },
        ExprKind::Mul { terms } => {
            out.write_str("Mul(")?;
            write_repr_list(terms, out)?;
        },
        ExprKind::Pow { base, exp } => {
            out.write_str("Pow(")?;
            write_repr_list([&**base, &**exp], out)?;
        },
        ExprKind::Var { name, subscript } => {
            write!(out, "Var({}", name)?;
            if let Some(subscript) = subscript {
                out.write_str(", ")?;
                write_repr(subscript, out)?;
            }
        },
        ExprKind::Const { name } => write!(out, "Const({}", name.name())?,
        ExprKind::Int { value } => write!(out, "Int({}", value)?,
        ExprKind::Float { value } => write!(out, "Float({}", value)?,
        ExprKind::Func { name, arg } => {
            write!(out, "Func({}, ", name)?;
            write_repr(arg, out)?;
        },
        ExprKind::Log { base, arg } => {
            out.write_str("Log(")?;
            write_repr_list([&**base, &**arg], out)?;
        },
        ExprKind::Trig { func, exp, arg } => {
            write!(out, "Trig({}, ", func)?;
            write_repr_list(exp.iter().map(|e| &**e).chain([&**arg]), out)?;
        },
        ExprKind::Abs { arg } => {
            out.write_str("Abs(")?;
            write_repr(arg, out)?;
        },
    }

    if expr.hints.parens {
        out.write_str(", parens")?;
    }
    out.write_str(")")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use crate::parser::Parser;
    use super::*;

    fn parse(source: &str) -> Expr {
        Parser::new(source).try_parse_full::<Expr>().unwrap()
    }

    fn print(source: &str) -> String {
        parse(source).print()
    }

    #[test]
    fn print_sum_and_difference() {
        assert_eq!(print("a + b - c - 2"), "a+b-c-2");
    }

    #[test]
    fn print_product_uses_explicit_operator() {
        assert_eq!(print("2x5"), "2*x*5");
        assert_eq!(print("-3xy"), "-3*x*y");
        assert_eq!(print("-x"), "-x");
    }

    #[test]
    fn print_division() {
        assert_eq!(print("x/2"), "x/2");
        assert_eq!(print("1/(x+1)"), "1/(x+1)");
        assert_eq!(print(r"\frac{a}{bc}"), "a/(b*c)");
    }

    #[test]
    fn print_powers() {
        assert_eq!(print("x^2"), "x^2");
        assert_eq!(print("x^-1"), "x^-1");
        assert_eq!(print("(x+1)^2"), "(x+1)^2");
        assert_eq!(print("2^3^4"), "2^3^4");
        assert_eq!(print("-2^2"), "-2^2");
    }

    #[test]
    fn print_roots_and_functions() {
        assert_eq!(print("sqrt(x+1)"), "sqrt(x+1)");
        assert_eq!(print("|x|"), "abs(x)");
        assert_eq!(print("ln x"), "ln(x)");
        assert_eq!(print("log x"), "log(x)");
        assert_eq!(print("log_2 x"), "log_2(x)");
        assert_eq!(print("sin^2 x"), "sin^2(x)");
        assert_eq!(print("arcsin x"), "arcsin(x)");
    }

    #[test]
    fn print_subscripts() {
        assert_eq!(print("x_1 + y_{n+1}"), "x_1+y_{n+1}");
    }

    #[test]
    fn print_keeps_parens_hint() {
        assert_eq!(print("2(x+1)"), "2*(x+1)");
        assert_eq!(print("(x)"), "(x)");
    }

    #[test]
    fn print_equation() {
        assert_eq!(print(r"y \ge 2x"), "y>=2*x");
    }

    #[test]
    fn print_reparses_to_same_tree() {
        for source in ["2x+1", "-x^2+3x-1", "sin^2 x + cos^2 x", "x/(2y)", "log_3 9 - ln x"] {
            let expr = parse(source);
            assert_eq!(parse(&expr.print()).without_hints(), expr.without_hints(), "source: {}", source);
        }
    }

    #[test]
    fn repr_exposes_variants() {
        assert_eq!(parse("2+3x").repr(), "Add(Int(2), Mul(Int(3), Var(x)))");
        assert_eq!(parse("x_1").repr(), "Var(x, Int(1))");
        assert_eq!(parse("sin^2(x)").repr(), "Trig(sin, Int(2), Var(x, parens))");
        assert_eq!(parse("y=pi").repr(), "Equation(Var(y), =, Const(pi))");
    }
}
