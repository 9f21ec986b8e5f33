//! CP solver interface and the bundled branch-and-bound implementation.
//!
//! [`BranchBoundSolver`] runs a chronological depth-first search with
//! constraint propagation to a fixpoint at every node, a full constraint
//! re-check at leaves, and branch-and-bound pruning on the linear
//! objective. Search order is deterministic: booleans first in creation
//! order (trying `true` before `false`), then integers in creation order
//! by domain bisection (lower half first).

use std::time::Instant;

use tracing::debug;

use super::model::{Constraint, CpModel};
use super::variables::{BoolVar, IntVar, Literal};

/// Status of the solver after execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverStatus {
    /// Proven optimal solution found.
    Optimal,
    /// Feasible (but not necessarily optimal) solution found.
    Feasible,
    /// No feasible solution exists.
    Infeasible,
    /// Model is invalid or malformed.
    ModelInvalid,
    /// No solution found within the time limit.
    Unknown,
}

/// Solver configuration.
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Maximum solve time in milliseconds.
    pub time_limit_ms: u64,
    /// Requested number of parallel workers. The bundled solver searches
    /// sequentially whatever the value; the knob exists so callers can
    /// express intent portably across `CpSolver` implementations.
    pub num_workers: usize,
    /// Stop after finding the first feasible solution.
    pub stop_after_first: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            time_limit_ms: 60_000,
            num_workers: 1,
            stop_after_first: false,
        }
    }
}

/// Solution from a CP solver.
#[derive(Debug, Clone)]
pub struct CpSolution {
    /// Solver status.
    pub status: SolverStatus,
    /// Objective function value, when a solution was found.
    pub objective_value: Option<i64>,
    /// Diagnostic detail for `ModelInvalid`.
    pub message: Option<String>,
    /// Solve time in milliseconds.
    pub solve_time_ms: u64,
    values: Vec<i64>,
}

impl CpSolution {
    /// Creates an empty solution with the given status.
    pub fn empty(status: SolverStatus) -> Self {
        Self {
            status,
            objective_value: None,
            message: None,
            solve_time_ms: 0,
            values: Vec::new(),
        }
    }

    /// Whether a feasible solution was found.
    pub fn is_solution_found(&self) -> bool {
        matches!(self.status, SolverStatus::Optimal | SolverStatus::Feasible)
    }

    /// Assigned value of an integer variable.
    ///
    /// # Panics
    /// Panics if no solution was found.
    pub fn value(&self, var: IntVar) -> i64 {
        self.values[var.index()]
    }

    /// Assigned value of a boolean variable.
    pub fn bool_value(&self, var: BoolVar) -> bool {
        self.value(var.as_int()) != 0
    }
}

/// Trait for CP solver implementations.
///
/// Implementors provide the actual constraint solving logic. A solver
/// value holds no state between calls; the same instance may be reused
/// for any number of independent solves.
pub trait CpSolver {
    /// Solves the model and returns a solution.
    fn solve(&self, model: &CpModel, config: &SolverConfig) -> CpSolution;
}

/// Depth-first branch-and-bound solver with constraint propagation.
#[derive(Debug, Default)]
pub struct BranchBoundSolver;

impl BranchBoundSolver {
    pub fn new() -> Self {
        Self
    }
}

impl CpSolver for BranchBoundSolver {
    fn solve(&self, model: &CpModel, config: &SolverConfig) -> CpSolution {
        let start = Instant::now();

        if let Err(msg) = model.validate() {
            debug!(model = %model.name, error = %msg, "model rejected");
            let mut solution = CpSolution::empty(SolverStatus::ModelInvalid);
            solution.message = Some(msg);
            return solution;
        }

        let mut search = Search::new(model, config, start);
        search.dfs();

        let solve_time_ms = start.elapsed().as_millis() as u64;
        let has_real_objective = model.objective().map(|t| !t.is_empty()).unwrap_or(false);

        let status = match (&search.best, search.timed_out) {
            (Some(_), true) => SolverStatus::Feasible,
            (Some(_), false) => {
                if search.stopped_early && has_real_objective {
                    SolverStatus::Feasible
                } else if model.objective().is_some() {
                    SolverStatus::Optimal
                } else {
                    // Pure satisfaction: report feasibility, optimality is
                    // not a meaningful claim.
                    SolverStatus::Feasible
                }
            }
            (None, true) => SolverStatus::Unknown,
            (None, false) => SolverStatus::Infeasible,
        };

        debug!(
            model = %model.name,
            ?status,
            nodes = search.nodes,
            solve_time_ms,
            "search finished"
        );

        match search.best {
            Some((objective, values)) => CpSolution {
                status,
                objective_value: model.objective().map(|_| objective),
                message: None,
                solve_time_ms,
                values,
            },
            None => CpSolution {
                solve_time_ms,
                ..CpSolution::empty(status)
            },
        }
    }
}

/// Sentinel lower bound for one-sided propagation. Far below any real
/// expression value, far above `i64::MIN` so arithmetic cannot wrap.
const NO_MIN: i64 = i64::MIN / 4;

struct Search<'a> {
    model: &'a CpModel,
    lo: Vec<i64>,
    hi: Vec<i64>,
    deadline_ms: u64,
    started: Instant,
    stop_after_first: bool,
    /// Best solution found so far: (objective, values).
    best: Option<(i64, Vec<i64>)>,
    /// Solutions must have objective <= obj_cap (branch-and-bound).
    obj_cap: i64,
    nodes: u64,
    timed_out: bool,
    stopped_early: bool,
}

impl<'a> Search<'a> {
    fn new(model: &'a CpModel, config: &SolverConfig, started: Instant) -> Self {
        let lo = model.vars().iter().map(|v| v.lo).collect();
        let hi = model.vars().iter().map(|v| v.hi).collect();
        Self {
            model,
            lo,
            hi,
            deadline_ms: config.time_limit_ms,
            started,
            stop_after_first: config.stop_after_first,
            best: None,
            obj_cap: i64::MAX,
            nodes: 0,
            timed_out: false,
            stopped_early: false,
        }
    }

    fn should_stop(&mut self) -> bool {
        if self.timed_out || self.stopped_early {
            return true;
        }
        if self.started.elapsed().as_millis() as u64 >= self.deadline_ms {
            self.timed_out = true;
            return true;
        }
        false
    }

    fn dfs(&mut self) {
        if self.should_stop() {
            return;
        }
        self.nodes += 1;

        if self.propagate().is_err() {
            return;
        }

        let Some(var) = self.pick_branch_var() else {
            self.record_leaf();
            return;
        };

        let (lo, hi) = (self.lo[var], self.hi[var]);
        if self.model.vars()[var].is_bool {
            // Try true first: cardinality constraints resolve faster.
            for value in [1, 0] {
                if value < lo || value > hi {
                    continue;
                }
                let saved = (self.lo.clone(), self.hi.clone());
                self.lo[var] = value;
                self.hi[var] = value;
                self.dfs();
                self.lo = saved.0;
                self.hi = saved.1;
                if self.should_stop() {
                    return;
                }
            }
        } else {
            let mid = lo + (hi - lo) / 2;

            let saved = (self.lo.clone(), self.hi.clone());
            self.hi[var] = mid;
            self.dfs();
            self.lo = saved.0;
            self.hi = saved.1;
            if self.should_stop() {
                return;
            }

            let saved = (self.lo.clone(), self.hi.clone());
            self.lo[var] = mid + 1;
            self.dfs();
            self.lo = saved.0;
            self.hi = saved.1;
        }
    }

    /// First unfixed boolean in creation order, then first unfixed integer.
    fn pick_branch_var(&self) -> Option<usize> {
        let vars = self.model.vars();
        let mut first_int = None;
        for i in 0..vars.len() {
            if self.lo[i] == self.hi[i] {
                continue;
            }
            if vars[i].is_bool {
                return Some(i);
            }
            if first_int.is_none() {
                first_int = Some(i);
            }
        }
        first_int
    }

    fn record_leaf(&mut self) {
        if !self.check_all() {
            return;
        }

        let objective = self
            .model
            .objective()
            .map(|terms| {
                terms
                    .iter()
                    .map(|&(v, c)| c * self.lo[v.index()])
                    .sum::<i64>()
            })
            .unwrap_or(0);

        let improves = match &self.best {
            Some((best_obj, _)) => objective < *best_obj,
            None => true,
        };
        if !improves {
            return;
        }

        self.best = Some((objective, self.lo.clone()));
        self.obj_cap = objective.saturating_sub(1);

        let trivial_objective = self.model.objective().map(|t| t.is_empty()).unwrap_or(true);
        if self.stop_after_first || trivial_objective {
            // Nothing left to improve: either the caller asked for the
            // first solution, or every solution has the same objective.
            self.stopped_early = true;
        }
    }

    // --- propagation ---------------------------------------------------

    fn propagate(&mut self) -> Result<(), ()> {
        loop {
            let mut changed = false;
            for i in 0..self.model.constraints().len() {
                changed |= self.apply_constraint(i)?;
            }
            if let Some(terms) = self.model.objective() {
                if self.obj_cap < i64::MAX && !terms.is_empty() {
                    changed |= self.propagate_linear(&terms.to_vec(), NO_MIN, self.obj_cap)?;
                }
            }
            if !changed {
                return Ok(());
            }
        }
    }

    fn apply_constraint(&mut self, index: usize) -> Result<bool, ()> {
        // Constraints are cloned out to satisfy the borrow checker; they
        // are small (index lists), and models are built once per solve.
        let constraint = self.model.constraints()[index].clone();
        match constraint {
            Constraint::BoolOr { literals } => self.propagate_bool_or(&literals),
            Constraint::AtMostOne { literals } => self.propagate_at_most_one(&literals),
            Constraint::ExactlyOne { literals } => {
                let a = self.propagate_bool_or(&literals)?;
                let b = self.propagate_at_most_one(&literals)?;
                Ok(a | b)
            }
            Constraint::Linear {
                terms,
                min,
                max,
                enforce_if,
            } => match self.enforcement_state(&enforce_if) {
                Enforcement::Active => self.propagate_linear(&terms, min, max),
                Enforcement::Inactive | Enforcement::Undecided => Ok(false),
            },
            Constraint::IntEqReif {
                var,
                value,
                literal,
            } => self.propagate_int_eq_reif(var, value, literal),
            Constraint::Element {
                index: idx,
                array,
                target,
                enforce_if,
            } => match self.enforcement_state(&enforce_if) {
                Enforcement::Active => self.propagate_element(idx, &array, target),
                Enforcement::Inactive | Enforcement::Undecided => Ok(false),
            },
        }
    }

    fn propagate_bool_or(&mut self, literals: &[Literal]) -> Result<bool, ()> {
        let mut unknown = None;
        let mut unknown_count = 0;
        for &lit in literals {
            match self.lit_value(lit) {
                Some(true) => return Ok(false),
                Some(false) => {}
                None => {
                    unknown = Some(lit);
                    unknown_count += 1;
                }
            }
        }
        match unknown_count {
            0 => Err(()),
            1 => self.assign_lit(unknown.unwrap(), true),
            _ => Ok(false),
        }
    }

    fn propagate_at_most_one(&mut self, literals: &[Literal]) -> Result<bool, ()> {
        let mut true_lit = None;
        for &lit in literals {
            if self.lit_value(lit) == Some(true) {
                if true_lit.is_some() {
                    return Err(());
                }
                true_lit = Some(lit);
            }
        }
        let Some(true_lit) = true_lit else {
            return Ok(false);
        };
        let mut changed = false;
        for &lit in literals {
            if lit != true_lit && self.lit_value(lit).is_none() {
                changed |= self.assign_lit(lit, false)?;
            }
        }
        Ok(changed)
    }

    fn propagate_linear(
        &mut self,
        terms: &[(IntVar, i64)],
        min: i64,
        max: i64,
    ) -> Result<bool, ()> {
        let mut sum_min = 0i64;
        let mut sum_max = 0i64;
        for &(var, coeff) in terms {
            let (a, b) = self.term_bounds(var, coeff);
            sum_min += a;
            sum_max += b;
        }
        if sum_min > max || sum_max < min {
            return Err(());
        }

        let mut changed = false;
        for &(var, coeff) in terms {
            if coeff == 0 {
                continue;
            }
            let (tmin, tmax) = self.term_bounds(var, coeff);
            let rest_min = sum_min - tmin;
            let rest_max = sum_max - tmax;
            // coeff * var must lie in [min - rest_max, max - rest_min]
            let lo_needed = min - rest_max;
            let hi_needed = max - rest_min;
            if coeff > 0 {
                changed |= self.tighten_lo(var, div_ceil(lo_needed, coeff))?;
                changed |= self.tighten_hi(var, div_floor(hi_needed, coeff))?;
            } else {
                changed |= self.tighten_lo(var, div_ceil(hi_needed, coeff))?;
                changed |= self.tighten_hi(var, div_floor(lo_needed, coeff))?;
            }
        }
        Ok(changed)
    }

    fn propagate_int_eq_reif(
        &mut self,
        var: IntVar,
        value: i64,
        literal: Literal,
    ) -> Result<bool, ()> {
        let i = var.index();
        match self.lit_value(literal) {
            Some(true) => {
                let a = self.tighten_lo(var, value)?;
                let b = self.tighten_hi(var, value)?;
                Ok(a | b)
            }
            Some(false) => {
                if self.lo[i] == value && self.hi[i] == value {
                    return Err(());
                }
                // Bounds representation can only shave endpoint values.
                let mut changed = false;
                if self.lo[i] == value {
                    changed |= self.tighten_lo(var, value + 1)?;
                }
                if self.hi[i] == value {
                    changed |= self.tighten_hi(var, value - 1)?;
                }
                Ok(changed)
            }
            None => {
                if value < self.lo[i] || value > self.hi[i] {
                    self.assign_lit(literal, false)
                } else if self.lo[i] == value && self.hi[i] == value {
                    self.assign_lit(literal, true)
                } else {
                    Ok(false)
                }
            }
        }
    }

    fn propagate_element(
        &mut self,
        index: IntVar,
        array: &[IntVar],
        target: IntVar,
    ) -> Result<bool, ()> {
        let mut changed = false;
        changed |= self.tighten_lo(index, 0)?;
        changed |= self.tighten_hi(index, array.len() as i64 - 1)?;

        let i = index.index();
        let t = target.index();

        // Shrink the index range while its endpoint entries cannot match
        // the target.
        loop {
            let ilo = self.lo[i] as usize;
            let entry = array[ilo].index();
            if self.hi[entry] < self.lo[t] || self.lo[entry] > self.hi[t] {
                changed |= self.tighten_lo(index, ilo as i64 + 1)?;
            } else {
                break;
            }
        }
        loop {
            let ihi = self.hi[i] as usize;
            let entry = array[ihi].index();
            if self.hi[entry] < self.lo[t] || self.lo[entry] > self.hi[t] {
                changed |= self.tighten_hi(index, ihi as i64 - 1)?;
            } else {
                break;
            }
        }

        // Target must fit the union of the remaining candidate entries.
        let lo_union = (self.lo[i]..=self.hi[i])
            .map(|k| self.lo[array[k as usize].index()])
            .min()
            .ok_or(())?;
        let hi_union = (self.lo[i]..=self.hi[i])
            .map(|k| self.hi[array[k as usize].index()])
            .max()
            .ok_or(())?;
        changed |= self.tighten_lo(target, lo_union)?;
        changed |= self.tighten_hi(target, hi_union)?;

        // Fixed index: equality between target and the selected entry.
        if self.lo[i] == self.hi[i] {
            let entry = array[self.lo[i] as usize];
            let e = entry.index();
            changed |= self.tighten_lo(target, self.lo[e])?;
            changed |= self.tighten_hi(target, self.hi[e])?;
            let (tlo, thi) = (self.lo[t], self.hi[t]);
            changed |= self.tighten_lo(entry, tlo)?;
            changed |= self.tighten_hi(entry, thi)?;
        }
        Ok(changed)
    }

    // --- domain primitives ---------------------------------------------

    fn term_bounds(&self, var: IntVar, coeff: i64) -> (i64, i64) {
        let a = coeff * self.lo[var.index()];
        let b = coeff * self.hi[var.index()];
        (a.min(b), a.max(b))
    }

    fn lit_value(&self, lit: Literal) -> Option<bool> {
        let i = lit.var().index();
        if self.lo[i] == self.hi[i] {
            Some((self.lo[i] != 0) != lit.is_negated())
        } else {
            None
        }
    }

    fn assign_lit(&mut self, lit: Literal, value: bool) -> Result<bool, ()> {
        let target = i64::from(value != lit.is_negated());
        let var = lit.var();
        let a = self.tighten_lo(var, target)?;
        let b = self.tighten_hi(var, target)?;
        Ok(a | b)
    }

    fn tighten_lo(&mut self, var: IntVar, value: i64) -> Result<bool, ()> {
        let i = var.index();
        if value <= self.lo[i] {
            return Ok(false);
        }
        if value > self.hi[i] {
            return Err(());
        }
        self.lo[i] = value;
        Ok(true)
    }

    fn tighten_hi(&mut self, var: IntVar, value: i64) -> Result<bool, ()> {
        let i = var.index();
        if value >= self.hi[i] {
            return Ok(false);
        }
        if value < self.lo[i] {
            return Err(());
        }
        self.hi[i] = value;
        Ok(true)
    }

    // --- leaf verification ----------------------------------------------

    /// Exact re-check of every constraint once all variables are fixed.
    /// Propagation is bounds-based and deliberately incomplete; this is
    /// the soundness backstop.
    fn check_all(&self) -> bool {
        let value = |v: IntVar| self.lo[v.index()];
        let lit_true = |l: Literal| (value(l.var()) != 0) != l.is_negated();

        self.model.constraints().iter().all(|c| match c {
            Constraint::BoolOr { literals } => literals.iter().any(|&l| lit_true(l)),
            Constraint::AtMostOne { literals } => {
                literals.iter().filter(|&&l| lit_true(l)).count() <= 1
            }
            Constraint::ExactlyOne { literals } => {
                literals.iter().filter(|&&l| lit_true(l)).count() == 1
            }
            Constraint::Linear {
                terms,
                min,
                max,
                enforce_if,
            } => {
                if !enforce_if.iter().all(|&l| lit_true(l)) {
                    return true;
                }
                let sum: i64 = terms.iter().map(|&(v, c)| c * value(v)).sum();
                *min <= sum && sum <= *max
            }
            Constraint::IntEqReif {
                var,
                value: v,
                literal,
            } => (value(*var) == *v) == lit_true(*literal),
            Constraint::Element {
                index,
                array,
                target,
                enforce_if,
            } => {
                if !enforce_if.iter().all(|&l| lit_true(l)) {
                    return true;
                }
                let i = value(*index);
                i >= 0
                    && (i as usize) < array.len()
                    && value(array[i as usize]) == value(*target)
            }
        })
    }
}

enum Enforcement {
    Active,
    Inactive,
    Undecided,
}

impl Search<'_> {
    fn enforcement_state(&self, literals: &[Literal]) -> Enforcement {
        let mut undecided = false;
        for &lit in literals {
            match self.lit_value(lit) {
                Some(false) => return Enforcement::Inactive,
                Some(true) => {}
                None => undecided = true,
            }
        }
        if undecided {
            Enforcement::Undecided
        } else {
            Enforcement::Active
        }
    }
}

fn div_floor(a: i64, b: i64) -> i64 {
    let q = a / b;
    if a % b != 0 && (a < 0) != (b < 0) {
        q - 1
    } else {
        q
    }
}

fn div_ceil(a: i64, b: i64) -> i64 {
    let q = a / b;
    if a % b != 0 && (a < 0) == (b < 0) {
        q + 1
    } else {
        q
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solve(model: &CpModel) -> CpSolution {
        BranchBoundSolver::new().solve(model, &SolverConfig::default())
    }

    #[test]
    fn test_satisfaction_clause() {
        let mut model = CpModel::new("test");
        let a = model.new_bool_var("a");
        let b = model.new_bool_var("b");
        model.add_bool_or(vec![a.lit(), b.lit()]);

        let solution = solve(&model);
        assert_eq!(solution.status, SolverStatus::Feasible);
        assert!(solution.bool_value(a) || solution.bool_value(b));
    }

    #[test]
    fn test_minimize_with_reif() {
        let mut model = CpModel::new("test");
        let x = model.new_int_var(0, 10, "x");
        let b = model.new_bool_var("b");
        model.add_int_eq_reif(x, 3, b.lit());
        model.add_bool_or(vec![b.lit()]);
        model.minimize(vec![(x, 1)]);

        let solution = solve(&model);
        assert_eq!(solution.status, SolverStatus::Optimal);
        assert_eq!(solution.value(x), 3);
        assert_eq!(solution.objective_value, Some(3));
    }

    #[test]
    fn test_infeasible() {
        let mut model = CpModel::new("test");
        let x = model.new_int_var(2, 2, "x");
        model.add_eq(vec![(x, 1)], 5, vec![]);

        let solution = solve(&model);
        assert_eq!(solution.status, SolverStatus::Infeasible);
        assert!(!solution.is_solution_found());
    }

    #[test]
    fn test_element_lookup() {
        let mut model = CpModel::new("test");
        let c5 = model.new_constant(5);
        let c7 = model.new_constant(7);
        let c9 = model.new_constant(9);
        let index = model.new_int_var(0, 2, "index");
        let target = model.new_int_var(7, 7, "target");
        model.add_element(index, vec![c5, c7, c9], target, vec![]);
        model.minimize(vec![]);

        let solution = solve(&model);
        assert_eq!(solution.status, SolverStatus::Optimal);
        assert_eq!(solution.value(index), 1);
    }

    #[test]
    fn test_enforced_linear() {
        let mut model = CpModel::new("test");
        let x = model.new_int_var(0, 10, "x");
        let b = model.new_bool_var("b");
        model.add_ge(vec![(x, 1)], 5, vec![b.lit()]);
        model.fix_bool(b, true);
        model.minimize(vec![(x, 1)]);

        let solution = solve(&model);
        assert_eq!(solution.status, SolverStatus::Optimal);
        assert_eq!(solution.value(x), 5);
    }

    #[test]
    fn test_enforcement_released() {
        let mut model = CpModel::new("test");
        let x = model.new_int_var(0, 10, "x");
        let b = model.new_bool_var("b");
        model.add_ge(vec![(x, 1)], 5, vec![b.lit()]);
        model.fix_bool(b, false);
        model.minimize(vec![(x, 1)]);

        let solution = solve(&model);
        assert_eq!(solution.value(x), 0);
    }

    #[test]
    fn test_exactly_one() {
        let mut model = CpModel::new("test");
        let bools: Vec<_> = (0..4).map(|i| model.new_bool_var(format!("b{i}"))).collect();
        model.add_exactly_one(bools.iter().map(|b| b.lit()).collect());
        model.fix_bool(bools[2], true);
        model.minimize(vec![]);

        let solution = solve(&model);
        assert_eq!(solution.status, SolverStatus::Optimal);
        for (i, b) in bools.iter().enumerate() {
            assert_eq!(solution.bool_value(*b), i == 2);
        }
    }

    #[test]
    fn test_at_most_one_conflict() {
        let mut model = CpModel::new("test");
        let a = model.new_bool_var("a");
        let b = model.new_bool_var("b");
        model.fix_bool(a, true);
        model.fix_bool(b, true);
        model.add_at_most_one(vec![a.lit(), b.lit()]);

        let solution = solve(&model);
        assert_eq!(solution.status, SolverStatus::Infeasible);
    }

    #[test]
    fn test_branch_and_bound() {
        let mut model = CpModel::new("test");
        let x = model.new_int_var(0, 20, "x");
        let y = model.new_int_var(0, 20, "y");
        model.add_ge(vec![(x, 1), (y, 1)], 7, vec![]);
        model.minimize(vec![(x, 1), (y, 1)]);

        let solution = solve(&model);
        assert_eq!(solution.status, SolverStatus::Optimal);
        assert_eq!(solution.objective_value, Some(7));
    }

    #[test]
    fn test_empty_objective_is_optimal() {
        let mut model = CpModel::new("test");
        let b = model.new_bool_var("b");
        model.add_bool_or(vec![b.lit()]);
        model.minimize(vec![]);

        let solution = solve(&model);
        assert_eq!(solution.status, SolverStatus::Optimal);
        assert_eq!(solution.objective_value, Some(0));
    }

    #[test]
    fn test_stop_after_first() {
        let mut model = CpModel::new("test");
        let x = model.new_int_var(0, 50, "x");
        model.minimize(vec![(x, 1)]);

        let config = SolverConfig {
            stop_after_first: true,
            ..SolverConfig::default()
        };
        let solution = BranchBoundSolver::new().solve(&model, &config);
        assert_eq!(solution.status, SolverStatus::Feasible);
        assert!(solution.objective_value.is_some());
    }

    #[test]
    fn test_model_invalid() {
        let mut model = CpModel::new("test");
        model.new_int_var(5, 2, "bad");

        let solution = solve(&model);
        assert_eq!(solution.status, SolverStatus::ModelInvalid);
        assert!(solution.message.is_some());
    }

    #[test]
    fn test_negated_literal_enforcement() {
        let mut model = CpModel::new("test");
        let x = model.new_int_var(0, 10, "x");
        let b = model.new_bool_var("b");
        model.add_eq(vec![(x, 1)], 9, vec![!b]);
        model.fix_bool(b, false);
        model.minimize(vec![(x, 1)]);

        let solution = solve(&model);
        assert_eq!(solution.value(x), 9);
    }

    #[test]
    fn test_negative_coefficient_bounds() {
        let mut model = CpModel::new("test");
        let x = model.new_int_var(0, 10, "x");
        let y = model.new_int_var(0, 10, "y");
        // x - y == 4
        model.add_eq(vec![(x, 1), (y, -1)], 4, vec![]);
        model.fix(y, 3);
        model.minimize(vec![]);

        let solution = solve(&model);
        assert_eq!(solution.status, SolverStatus::Optimal);
        assert_eq!(solution.value(x), 7);
    }

    #[test]
    fn test_div_helpers() {
        assert_eq!(div_floor(7, 2), 3);
        assert_eq!(div_floor(-7, 2), -4);
        assert_eq!(div_ceil(7, 2), 4);
        assert_eq!(div_ceil(-7, 2), -3);
        assert_eq!(div_floor(-7, -2), 3);
        assert_eq!(div_ceil(-7, -2), 4);
    }
}
