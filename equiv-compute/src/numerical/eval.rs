use equiv_parser::{ast::{Expr, ExprKind}, tokenizer::TrigFn};
use super::{ctxt::Ctxt, error::EvalError};

/// Any type that can be evaluated to produce a real number.
pub trait Eval {
    /// Evaluate the expression to produce a value, using the given context.
    fn eval(&self, ctxt: &Ctxt) -> Result<f64, EvalError>;

    /// Evaluate the expression to produce a value, using an empty context.
    fn eval_default(&self) -> Result<f64, EvalError> {
        self.eval(&Ctxt::default())
    }
}

impl Eval for Expr {
    fn eval(&self, ctxt: &Ctxt) -> Result<f64, EvalError> {
        let value = match &self.kind {
            ExprKind::Equation { .. } => return Err(EvalError::EquationValue),
            ExprKind::Add { terms } => terms.iter()
                .map(|term| term.eval(ctxt))
                .sum::<Result<f64, _>>()?,
            ExprKind::Mul { terms } => terms.iter()
                .map(|factor| factor.eval(ctxt))
                .product::<Result<f64, _>>()?,
            ExprKind::Pow { base, exp } => pow(base.eval(ctxt)?, exp.eval(ctxt)?)?,
            ExprKind::Var { .. } => {
                let name = self.var_name().unwrap_or_default();
                ctxt.get_var(&name).ok_or(EvalError::UnknownVariable(name))?
            },
            ExprKind::Const { name } => name.value(),
            ExprKind::Int { value } => *value as f64,
            ExprKind::Float { value } => *value,
            ExprKind::Func { name, arg } => ctxt.call_func(name, arg.eval(ctxt)?),
            ExprKind::Log { base, arg } => log(base.eval(ctxt)?, arg.eval(ctxt)?)?,
            ExprKind::Trig { func, exp, arg } => {
                let value = trig(*func, arg.eval(ctxt)?)?;
                match exp {
                    Some(exp) => pow(value, exp.eval(ctxt)?)?,
                    None => value,
                }
            },
            ExprKind::Abs { arg } => arg.eval(ctxt)?.abs(),
        };

        if value.is_finite() {
            Ok(value)
        } else {
            Err(EvalError::NonFinite)
        }
    }
}

/// Raises `base` to the power of `exp`, rejecting results that aren't real numbers.
fn pow(base: f64, exp: f64) -> Result<f64, EvalError> {
    if base == 0.0 && exp < 0.0 {
        Err(EvalError::DivisionByZero)
    } else if base < 0.0 && exp.fract() != 0.0 {
        Err(EvalError::RootDomain)
    } else {
        Ok(base.powf(exp))
    }
}

/// Takes the logarithm of `arg` in the given `base`.
fn log(base: f64, arg: f64) -> Result<f64, EvalError> {
    if arg <= 0.0 || base <= 0.0 || base == 1.0 {
        return Err(EvalError::LogDomain);
    }
    Ok(arg.ln() / base.ln())
}

/// Divides one by `value`.
fn recip(value: f64) -> Result<f64, EvalError> {
    if value == 0.0 {
        return Err(EvalError::DivisionByZero);
    }
    Ok(value.recip())
}

/// Evaluates a trigonometric function, in radians.
fn trig(func: TrigFn, x: f64) -> Result<f64, EvalError> {
    Ok(match func {
        TrigFn::Sin => x.sin(),
        TrigFn::Cos => x.cos(),
        TrigFn::Tan => x.tan(),
        TrigFn::Csc => recip(x.sin())?,
        TrigFn::Sec => recip(x.cos())?,
        TrigFn::Cot => recip(x.tan())?,
        TrigFn::ArcSin => x.asin(),
        TrigFn::ArcCos => x.acos(),
        TrigFn::ArcTan => x.atan(),
        TrigFn::ArcCsc => recip(x)?.asin(),
        TrigFn::ArcSec => recip(x)?.acos(),
        TrigFn::ArcCot => recip(x)?.atan(),
    })
}
