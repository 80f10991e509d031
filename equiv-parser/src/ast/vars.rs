use std::collections::BTreeSet;
use super::{Expr, ExprKind};

/// The result of comparing the free variables of two expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SameVars {
    /// Both expressions use exactly the same variable names.
    pub equal: bool,

    /// Both expressions use the same variable names once letter case is ignored.
    pub equal_ignoring_case: bool,
}

impl Expr {
    /// Returns the names of the free variables in this expression. A subscripted variable is
    /// named by its printed form, such as `x_1`.
    pub fn vars(&self) -> BTreeSet<String> {
        let mut vars = BTreeSet::new();
        self.collect_vars(&mut vars);
        vars
    }

    fn collect_vars(&self, vars: &mut BTreeSet<String>) {
        match self.var_name() {
            Some(name) => {
                vars.insert(name);
            },
            None => self.children()
                .into_iter()
                .for_each(|child| child.collect_vars(vars)),
        }
    }

    /// If this node is a variable, returns its name, including the printed subscript. Grouping in
    /// the subscript does not change the name: `x_{(1)}` is named `x_1`.
    pub fn var_name(&self) -> Option<String> {
        let ExprKind::Var { name, subscript } = &self.kind else {
            return None;
        };

        Some(match subscript {
            Some(subscript) => Expr::new(ExprKind::Var {
                name: name.clone(),
                subscript: Some(Box::new(subscript.as_ref().clone().without_hints())),
            }).print(),
            None => name.clone(),
        })
    }

    /// Returns true if the variable named `name` occurs in this expression.
    pub fn contains_var(&self, name: &str) -> bool {
        self.vars().contains(name)
    }

    /// Compares the free variables of `self` and `other`.
    pub fn same_vars(&self, other: &Expr) -> SameVars {
        let (a, b) = (self.vars(), other.vars());
        let lower = |vars: &BTreeSet<String>| {
            vars.iter().map(|name| name.to_lowercase()).collect::<BTreeSet<_>>()
        };

        SameVars {
            equal: a == b,
            equal_ignoring_case: lower(&a) == lower(&b),
        }
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

    fn set(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn collects_free_variables() {
        assert_eq!(parse("2x + y^z - sin(theta)").vars(), set(&["theta", "x", "y", "z"]));
        assert_eq!(parse("2 + pi").vars(), set(&[]));
    }

    #[test]
    fn subscripted_names() {
        assert_eq!(parse("x_1 + x_2 + x").vars(), set(&["x", "x_1", "x_2"]));
    }

    #[test]
    fn grouped_subscripts_name_the_same_variable() {
        assert_eq!(parse("x_{(1)}").var_name(), Some("x_1".to_string()));
        assert_eq!(parse("x_{(1)} + x_1").vars(), set(&["x_1"]));

        let result = parse("2x_{(1)}").same_vars(&parse("x_1 + x_1"));
        assert_eq!(result, SameVars { equal: true, equal_ignoring_case: true });
    }

    #[test]
    fn case_is_preserved() {
        assert_eq!(parse("X + x").vars(), set(&["X", "x"]));
    }

    #[test]
    fn same_vars_case() {
        let result = parse("3X").same_vars(&parse("3x"));
        assert_eq!(result, SameVars { equal: false, equal_ignoring_case: true });

        let result = parse("x + y").same_vars(&parse("y - x"));
        assert_eq!(result, SameVars { equal: true, equal_ignoring_case: true });

        let result = parse("x").same_vars(&parse("z"));
        assert_eq!(result, SameVars { equal: false, equal_ignoring_case: false });
    }

    #[test]
    fn same_vars_is_symmetric() {
        let (a, b) = (parse("a + B"), parse("A + b"));
        assert_eq!(a.same_vars(&b), b.same_vars(&a));
    }
}
