//! CP model definition.
//!
//! A [`CpModel`] holds integer/boolean variables, constraints, and an
//! optional linear minimization objective. The constraint vocabulary is
//! the subset of classic CP-SAT primitives the planning formulation
//! needs: clauses, cardinality, linear constraints guarded by enforcement
//! literals, integer equality reification, and element lookups.

use std::collections::HashMap;

use super::variables::{BoolVar, IntVar, Literal};

/// Domain and metadata of one variable.
#[derive(Debug, Clone)]
pub struct VarData {
    /// Diagnostic name.
    pub name: String,
    /// Lower domain bound (inclusive).
    pub lo: i64,
    /// Upper domain bound (inclusive).
    pub hi: i64,
    /// Whether this variable was created as a boolean.
    pub is_bool: bool,
}

/// A constraint over model variables.
#[derive(Debug, Clone)]
pub enum Constraint {
    /// At least one literal is true.
    BoolOr { literals: Vec<Literal> },

    /// At most one literal is true.
    AtMostOne { literals: Vec<Literal> },

    /// Exactly one literal is true.
    ExactlyOne { literals: Vec<Literal> },

    /// `min <= Σ coeff·var <= max`, enforced only when every literal in
    /// `enforce_if` is true.
    Linear {
        terms: Vec<(IntVar, i64)>,
        min: i64,
        max: i64,
        enforce_if: Vec<Literal>,
    },

    /// `literal ⇔ (var == value)`.
    IntEqReif {
        var: IntVar,
        value: i64,
        literal: Literal,
    },

    /// `target == array[index]`, enforced only when every literal in
    /// `enforce_if` is true.
    Element {
        index: IntVar,
        array: Vec<IntVar>,
        target: IntVar,
        enforce_if: Vec<Literal>,
    },
}

/// A constraint programming model.
#[derive(Debug, Clone)]
pub struct CpModel {
    /// Model name, for diagnostics.
    pub name: String,
    vars: Vec<VarData>,
    constraints: Vec<Constraint>,
    objective: Option<Vec<(IntVar, i64)>>,
    constants: HashMap<i64, IntVar>,
}

impl CpModel {
    /// Creates a new empty model.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            vars: Vec::new(),
            constraints: Vec::new(),
            objective: None,
            constants: HashMap::new(),
        }
    }

    /// Creates an integer variable with domain `[lo, hi]`.
    pub fn new_int_var(&mut self, lo: i64, hi: i64, name: impl Into<String>) -> IntVar {
        let var = IntVar(self.vars.len());
        self.vars.push(VarData {
            name: name.into(),
            lo,
            hi,
            is_bool: false,
        });
        var
    }

    /// Creates a boolean variable.
    pub fn new_bool_var(&mut self, name: impl Into<String>) -> BoolVar {
        let var = IntVar(self.vars.len());
        self.vars.push(VarData {
            name: name.into(),
            lo: 0,
            hi: 1,
            is_bool: true,
        });
        BoolVar(var)
    }

    /// Returns a variable fixed to `value`. Constants are interned.
    pub fn new_constant(&mut self, value: i64) -> IntVar {
        if let Some(&var) = self.constants.get(&value) {
            return var;
        }
        let var = self.new_int_var(value, value, format!("const_{value}"));
        self.constants.insert(value, var);
        var
    }

    /// Fixes an existing variable to a single value.
    pub fn fix(&mut self, var: IntVar, value: i64) {
        let data = &mut self.vars[var.0];
        data.lo = value;
        data.hi = value;
    }

    /// Fixes a boolean variable.
    pub fn fix_bool(&mut self, var: BoolVar, value: bool) {
        self.fix(var.0, i64::from(value));
    }

    /// Adds a clause: at least one literal is true.
    pub fn add_bool_or(&mut self, literals: Vec<Literal>) {
        self.constraints.push(Constraint::BoolOr { literals });
    }

    /// Adds `a → b`.
    pub fn add_implication(&mut self, a: Literal, b: Literal) {
        self.add_bool_or(vec![!a, b]);
    }

    /// Adds an at-most-one cardinality constraint.
    pub fn add_at_most_one(&mut self, literals: Vec<Literal>) {
        self.constraints.push(Constraint::AtMostOne { literals });
    }

    /// Adds an exactly-one cardinality constraint.
    pub fn add_exactly_one(&mut self, literals: Vec<Literal>) {
        self.constraints.push(Constraint::ExactlyOne { literals });
    }

    /// Adds `min <= Σ coeff·var <= max` under enforcement literals.
    pub fn add_linear(
        &mut self,
        terms: Vec<(IntVar, i64)>,
        min: i64,
        max: i64,
        enforce_if: Vec<Literal>,
    ) {
        self.constraints.push(Constraint::Linear {
            terms,
            min,
            max,
            enforce_if,
        });
    }

    /// Adds `Σ coeff·var == value` under enforcement literals.
    pub fn add_eq(&mut self, terms: Vec<(IntVar, i64)>, value: i64, enforce_if: Vec<Literal>) {
        self.add_linear(terms, value, value, enforce_if);
    }

    /// Adds `Σ coeff·var <= value` under enforcement literals.
    pub fn add_le(&mut self, terms: Vec<(IntVar, i64)>, value: i64, enforce_if: Vec<Literal>) {
        let (expr_min, _) = self.expr_bounds(&terms);
        self.add_linear(terms, expr_min, value, enforce_if);
    }

    /// Adds `Σ coeff·var >= value` under enforcement literals.
    pub fn add_ge(&mut self, terms: Vec<(IntVar, i64)>, value: i64, enforce_if: Vec<Literal>) {
        let (_, expr_max) = self.expr_bounds(&terms);
        self.add_linear(terms, value, expr_max, enforce_if);
    }

    /// Adds `literal ⇔ (var == value)`.
    pub fn add_int_eq_reif(&mut self, var: IntVar, value: i64, literal: Literal) {
        self.constraints.push(Constraint::IntEqReif {
            var,
            value,
            literal,
        });
    }

    /// Adds `target == array[index]` under enforcement literals.
    pub fn add_element(
        &mut self,
        index: IntVar,
        array: Vec<IntVar>,
        target: IntVar,
        enforce_if: Vec<Literal>,
    ) {
        self.constraints.push(Constraint::Element {
            index,
            array,
            target,
            enforce_if,
        });
    }

    /// Sets a linear minimization objective. An empty term list turns the
    /// model into a satisfaction problem with objective value 0.
    pub fn minimize(&mut self, terms: Vec<(IntVar, i64)>) {
        self.objective = Some(terms);
    }

    /// Current bounds of the expression `Σ coeff·var`.
    pub fn expr_bounds(&self, terms: &[(IntVar, i64)]) -> (i64, i64) {
        let mut min = 0;
        let mut max = 0;
        for &(var, coeff) in terms {
            let data = &self.vars[var.0];
            let a = coeff * data.lo;
            let b = coeff * data.hi;
            min += a.min(b);
            max += a.max(b);
        }
        (min, max)
    }

    /// Validates the model for structural consistency.
    ///
    /// Checks variable references, domain sanity, and element array shapes.
    pub fn validate(&self) -> Result<(), String> {
        for (i, data) in self.vars.iter().enumerate() {
            if data.lo > data.hi {
                return Err(format!(
                    "variable '{}' (#{i}) has empty domain [{}, {}]",
                    data.name, data.lo, data.hi
                ));
            }
        }

        let in_range = |v: IntVar| v.0 < self.vars.len();
        let lit_ok = |l: &Literal| in_range(l.var);

        for (i, c) in self.constraints.iter().enumerate() {
            let ok = match c {
                Constraint::BoolOr { literals }
                | Constraint::AtMostOne { literals }
                | Constraint::ExactlyOne { literals } => literals.iter().all(lit_ok),
                Constraint::Linear {
                    terms, enforce_if, ..
                } => terms.iter().all(|&(v, _)| in_range(v)) && enforce_if.iter().all(lit_ok),
                Constraint::IntEqReif { var, literal, .. } => in_range(*var) && lit_ok(literal),
                Constraint::Element {
                    index,
                    array,
                    target,
                    enforce_if,
                } => {
                    if array.is_empty() {
                        return Err(format!("constraint #{i}: element over empty array"));
                    }
                    in_range(*index)
                        && in_range(*target)
                        && array.iter().all(|&v| in_range(v))
                        && enforce_if.iter().all(lit_ok)
                }
            };
            if !ok {
                return Err(format!("constraint #{i} references an undefined variable"));
            }
        }
        Ok(())
    }

    /// Number of variables.
    pub fn var_count(&self) -> usize {
        self.vars.len()
    }

    /// Number of constraints.
    pub fn constraint_count(&self) -> usize {
        self.constraints.len()
    }

    pub(crate) fn var_data(&self, var: IntVar) -> &VarData {
        &self.vars[var.0]
    }

    pub(crate) fn vars(&self) -> &[VarData] {
        &self.vars
    }

    pub(crate) fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    pub(crate) fn objective(&self) -> Option<&[(IntVar, i64)]> {
        self.objective.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_creation() {
        let mut model = CpModel::new("test");
        let x = model.new_int_var(0, 10, "x");
        let b = model.new_bool_var("b");
        model.add_eq(vec![(x, 1)], 5, vec![b.lit()]);
        model.minimize(vec![(x, 1)]);

        assert_eq!(model.var_count(), 2);
        assert_eq!(model.constraint_count(), 1);
        assert!(model.validate().is_ok());
    }

    #[test]
    fn test_constants_interned() {
        let mut model = CpModel::new("test");
        let a = model.new_constant(7);
        let b = model.new_constant(7);
        let c = model.new_constant(8);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(model.var_count(), 2);
    }

    #[test]
    fn test_fix() {
        let mut model = CpModel::new("test");
        let x = model.new_int_var(0, 10, "x");
        model.fix(x, 4);
        assert_eq!(model.var_data(x).lo, 4);
        assert_eq!(model.var_data(x).hi, 4);

        let b = model.new_bool_var("b");
        model.fix_bool(b, true);
        assert_eq!(model.var_data(b.as_int()).lo, 1);
    }

    #[test]
    fn test_expr_bounds() {
        let mut model = CpModel::new("test");
        let x = model.new_int_var(2, 5, "x");
        let y = model.new_int_var(0, 3, "y");
        let (min, max) = model.expr_bounds(&[(x, 2), (y, -1)]);
        assert_eq!(min, 4 - 3);
        assert_eq!(max, 10);
    }

    #[test]
    fn test_validate_empty_domain() {
        let mut model = CpModel::new("test");
        model.new_int_var(5, 2, "bad");
        assert!(model.validate().is_err());
    }

    #[test]
    fn test_validate_undefined_reference() {
        let mut model = CpModel::new("test");
        let x = model.new_int_var(0, 1, "x");
        // Literal referencing a variable index past the store.
        let ghost = BoolVar(IntVar(99));
        model.add_bool_or(vec![ghost.lit()]);
        let _ = x;
        assert!(model.validate().is_err());
    }

    #[test]
    fn test_validate_empty_element_array() {
        let mut model = CpModel::new("test");
        let i = model.new_int_var(0, 3, "i");
        let t = model.new_int_var(0, 3, "t");
        model.add_element(i, vec![], t, vec![]);
        assert!(model.validate().is_err());
    }
}
