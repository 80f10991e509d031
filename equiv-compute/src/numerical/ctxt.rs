use rand::{rngs::StdRng, Rng, SeedableRng};
use std::collections::HashMap;

/// A context to use when evaluating an expression, containing the values of its variables.
///
/// Functions the notation doesn't know about, such as `f(x)`, are evaluated as pseudo-functions:
/// each name is mapped to a fixed, arbitrary function of one argument, so `f(x)` and `f(x)` agree
/// while `f(x)` and `g(x)` almost never do.
#[derive(Debug, Clone, Default)]
pub struct Ctxt {
    /// The variables in the context.
    vars: HashMap<String, f64>,
}

impl Ctxt {
    /// Creates a new empty context.
    pub fn new() -> Ctxt {
        Ctxt::default()
    }

    /// Add a variable to the context.
    pub fn add_var(&mut self, name: &str, value: f64) {
        self.vars.insert(name.to_string(), value);
    }

    /// Get the value of a variable in the context.
    pub fn get_var(&self, name: &str) -> Option<f64> {
        self.vars.get(name).copied()
    }

    /// Returns the variables in the context.
    pub fn get_vars(&self) -> &HashMap<String, f64> {
        &self.vars
    }

    /// Evaluates the pseudo-function named `name` at `x`.
    ///
    /// The function is `a*sin(b*x + c) + d*x`, with coefficients drawn from a generator seeded by
    /// the name.
    pub fn call_func(&self, name: &str, x: f64) -> f64 {
        let mut rng = StdRng::seed_from_u64(fnv1a(name));
        let a = rng.gen_range(0.5..2.0);
        let b = rng.gen_range(0.5..2.0);
        let c = rng.gen_range(-1.0..1.0);
        let d = rng.gen_range(-1.0..1.0);
        a * (b * x + c).sin() + d * x
    }
}

/// 64-bit FNV-1a hash. Unlike [`std::hash::DefaultHasher`], its output is fixed across platforms
/// and releases.
fn fnv1a(name: &str) -> u64 {
    name.bytes().fold(0xcbf2_9ce4_8422_2325, |hash, byte| {
        (hash ^ u64::from(byte)).wrapping_mul(0x0100_0000_01b3)
    })
}
