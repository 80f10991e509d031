//! Equivalence checking by evaluating expressions at random points.
//!
//! Two expressions that agree at many randomly chosen points are considered equal. The points are
//! drawn from a generator seeded by [`SamplingConfig::seed`], so the outcome of a comparison is
//! always the same for the same input.
//!
//! Variables are drawn from ranges that respect the obvious domain of the expressions: those in a
//! logarithm are positive, and those in `arcsin` are in `[-1, 1]`. Domains that are harder to
//! see, such as that of `sqrt(1-x^2)`, are found by narrowing the ranges whenever too many draws
//! fail to evaluate.

use equiv_parser::{ast::{Expr, ExprKind}, tokenizer::TrigFn};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, trace};
use super::{ctxt::Ctxt, eval::Eval};

/// The default number of points both expressions must agree at.
pub const SAMPLE_COUNT: usize = 12;

/// The default number of draws made for each point before giving up on finding one where both
/// expressions can be evaluated.
pub const MAX_RETRIES: usize = 20;

/// Parameters of the sampling algorithm.
#[derive(Debug, Clone, PartialEq)]
pub struct SamplingConfig {
    /// Seed of the random number generator.
    pub seed: u64,

    /// The number of points both expressions must agree at.
    pub samples: usize,

    /// The number of draws made for each point before the ranges are narrowed, or the comparison
    /// gives up.
    pub max_retries: usize,

    /// The relative tolerance within which two values agree.
    pub tolerance: f64,

    /// The inclusive range most variables are drawn from.
    pub range: (f64, f64),

    /// The range drawn from for variables that must stay positive, such as the `x` in
    /// `sqrt(x)` or `ln(x)`. Zero is excluded.
    pub positive_range: (f64, f64),

    /// The factor every range is scaled by when no valid point can be found, so that `sqrt(1-x^2)`
    /// is eventually sampled where it is defined.
    pub narrowing: f64,

    /// The number of times the ranges may be narrowed.
    pub narrowings: usize,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            seed: 0x5eed_cafe,
            samples: SAMPLE_COUNT,
            max_retries: MAX_RETRIES,
            tolerance: 1e-9,
            range: (-10.0, 10.0),
            positive_range: (0.0, 10.0),
            narrowing: 0.1,
            narrowings: 2,
        }
    }
}

impl SamplingConfig {
    /// Returns true if `a` and `b` agree within the configured tolerance.
    pub fn approx_eq(&self, a: f64, b: f64) -> bool {
        (a - b).abs() <= self.tolerance * a.abs().max(b.abs()).max(1.0)
    }

    /// Returns true if `value` is indistinguishable from zero.
    fn is_zero(&self, value: f64) -> bool {
        value.abs() <= self.tolerance
    }
}

/// Restrictions on the values a variable is sampled from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Domain {
    /// The variable appears in a logarithm, or in the base of a power whose exponent isn't an
    /// integer literal, and is only drawn from positive values.
    pub positive: bool,

    /// The variable appears in the argument of `arcsin` or `arccos`, and is only drawn from
    /// `[-1, 1]`.
    pub unit: bool,
}

impl Domain {
    /// Returns the range to draw from, before narrowing.
    fn range(self, config: &SamplingConfig) -> (f64, f64) {
        match (self.positive, self.unit) {
            (true, true) => (0.0, 1.0),
            (true, false) => config.positive_range,
            (false, true) => (-1.0, 1.0),
            (false, false) => config.range,
        }
    }
}

/// Returns the restricted variables of `expr`, with their domains. Variables without any
/// restriction are left out.
pub fn domains(expr: &Expr) -> BTreeMap<String, Domain> {
    let mut domains = BTreeMap::new();
    collect_domains(expr, &mut domains);
    domains
}

fn collect_domains(expr: &Expr, domains: &mut BTreeMap<String, Domain>) {
    let mut restrict = |vars: BTreeSet<String>, f: fn(&mut Domain)| {
        for name in vars {
            f(domains.entry(name).or_default());
        }
    };

    match &expr.kind {
        ExprKind::Pow { base, exp } if exp.as_int().is_none() => {
            restrict(base.vars(), |domain: &mut Domain| domain.positive = true);
        },
        ExprKind::Log { base, arg } => {
            restrict(base.vars(), |domain: &mut Domain| domain.positive = true);
            restrict(arg.vars(), |domain: &mut Domain| domain.positive = true);
        },
        ExprKind::Trig { func: TrigFn::ArcSin | TrigFn::ArcCos, arg, .. } => {
            restrict(arg.vars(), |domain: &mut Domain| domain.unit = true);
        },
        _ => (),
    }

    for child in expr.children() {
        collect_domains(child, domains);
    }
}

/// Draws evaluation contexts for a set of expressions.
struct Sampler<'a> {
    config: &'a SamplingConfig,
    rng: StdRng,
    vars: BTreeSet<String>,
    domains: BTreeMap<String, Domain>,

    /// The factor applied to every range. Starts at 1 and shrinks each time the ranges are
    /// narrowed; it never grows back.
    scale: f64,
    narrowed: usize,
}

impl<'a> Sampler<'a> {
    fn new(config: &'a SamplingConfig, exprs: &[&Expr]) -> Self {
        let mut merged = BTreeMap::<String, Domain>::new();
        for (name, domain) in exprs.iter().flat_map(|expr| domains(expr)) {
            let entry = merged.entry(name).or_default();
            entry.positive |= domain.positive;
            entry.unit |= domain.unit;
        }

        Self {
            config,
            rng: StdRng::seed_from_u64(config.seed),
            vars: exprs.iter().flat_map(|expr| expr.vars()).collect(),
            domains: merged,
            scale: 1.0,
            narrowed: 0,
        }
    }

    /// The number of points to check. Without variables, every point is the same.
    fn samples(&self) -> usize {
        if self.vars.is_empty() { 1 } else { self.config.samples }
    }

    /// Draws a value for every variable.
    fn draw(&mut self) -> Ctxt {
        let mut ctxt = Ctxt::new();
        for name in &self.vars {
            let domain = self.domains.get(name).copied().unwrap_or_default();
            let (low, high) = domain.range(self.config);
            let (low, high) = (low * self.scale, high * self.scale);
            let value = if domain.positive {
                // mirror `[0, high)` to `(0, high]`
                high - self.rng.gen_range(0.0..high)
            } else {
                self.rng.gen_range(low..=high)
            };
            ctxt.add_var(name, value);
        }
        ctxt
    }

    /// Draws contexts until `f` accepts one, returning its result. If the retry budget runs out,
    /// the ranges are narrowed and drawing continues, until no narrowing is left. Returns [`None`]
    /// in that case.
    fn find<T>(&mut self, mut f: impl FnMut(&Ctxt) -> Option<T>) -> Option<T> {
        if self.vars.is_empty() {
            return f(&Ctxt::new());
        }

        loop {
            for _ in 0..self.config.max_retries {
                let ctxt = self.draw();
                if let Some(value) = f(&ctxt) {
                    return Some(value);
                }
            }

            if self.narrowed == self.config.narrowings {
                debug!(scale = self.scale, "no valid sample found");
                return None;
            }
            self.narrowed += 1;
            self.scale *= self.config.narrowing;
            debug!(scale = self.scale, "narrowing sample ranges");
        }
    }
}

/// Evaluates both expressions in the context, discarding the sample if either fails.
fn eval_pair(a: &Expr, b: &Expr, ctxt: &Ctxt) -> Option<(f64, f64)> {
    match (a.eval(ctxt), b.eval(ctxt)) {
        (Ok(x), Ok(y)) => Some((x, y)),
        (Err(err), _) | (_, Err(err)) => {
            trace!(%err, "discarding sample");
            None
        },
    }
}

/// Returns true if `a` and `b` evaluate to the same value at every sampled point.
pub fn sample_equal(a: &Expr, b: &Expr, config: &SamplingConfig) -> bool {
    let mut sampler = Sampler::new(config, &[a, b]);

    for sample in 0..sampler.samples() {
        let Some((x, y)) = sampler.find(|ctxt| eval_pair(a, b, ctxt)) else {
            return false;
        };
        if !config.approx_eq(x, y) {
            trace!(sample, x, y, "sampled values differ");
            return false;
        }
    }

    true
}

/// Returns true if `a` is a constant, non-zero multiple of `b` at every sampled point. If
/// `positive` is set, the multiple must also be positive.
///
/// Points where both expressions are zero say nothing about the ratio and are skipped.
pub fn sample_proportional(a: &Expr, b: &Expr, positive: bool, config: &SamplingConfig) -> bool {
    let mut sampler = Sampler::new(config, &[a, b]);
    let mut expected_ratio = None;

    for sample in 0..sampler.samples() {
        let found = sampler.find(|ctxt| {
            let (x, y) = eval_pair(a, b, ctxt)?;
            match (config.is_zero(x), config.is_zero(y)) {
                (true, true) => {
                    trace!("both sides vanish, discarding sample");
                    None
                },
                (false, false) => Some(Some(x / y)),
                _ => Some(None),
            }
        });

        let Some(ratio) = found.flatten() else {
            return false;
        };
        if positive && ratio < 0.0 {
            trace!(sample, ratio, "ratio changes the direction of the relation");
            return false;
        }

        match expected_ratio {
            None => expected_ratio = Some(ratio),
            Some(expected) if config.approx_eq(ratio, expected) => (),
            Some(expected) => {
                trace!(sample, ratio, expected, "ratio is not constant");
                return false;
            },
        }
    }

    true
}
