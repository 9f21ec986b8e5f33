//! Planning pipeline: validate, build, solve, extract.
//!
//! The pipeline is strictly one-shot. [`solve`] validates the dataset,
//! builds the CP model, runs the solver under the configured time limit,
//! and either extracts the operational plan or returns a status envelope
//! explaining why there is none. No state survives the call.

mod builder;
mod extract;

use tracing::{debug, info};

use crate::cp::{BranchBoundSolver, CpSolver, SolverConfig, SolverStatus};
use crate::error::PlanError;
use crate::models::{Dataset, OperationalPlan, PlanStatus, SolveParams};
use crate::validation::validate_dataset;

use builder::PlanModel;

/// Produces an operational plan for the dataset.
///
/// Blocks until the solver returns or the time limit fires. Returns:
///
/// - `Ok` with a populated plan on `OPTIMAL`/`FEASIBLE`,
/// - `Ok` with a status envelope on `INFEASIBLE`/`UNKNOWN`,
/// - `Err` on invalid input, a rejected model, or an extraction failure.
pub fn solve(dataset: &Dataset, params: &SolveParams) -> Result<OperationalPlan, PlanError> {
    validate_dataset(dataset, params.planning_days).map_err(PlanError::InvalidInput)?;

    let plan_model = PlanModel::build(dataset, params);

    let config = SolverConfig {
        time_limit_ms: params.time_limit_seconds.saturating_mul(1000),
        num_workers: params.num_workers,
        stop_after_first: false,
    };
    let solver = BranchBoundSolver::new();
    let solution = solver.solve(&plan_model.model, &config);
    let wall_time_seconds = solution.solve_time_ms as f64 / 1000.0;

    debug!(status = ?solution.status, wall_time_seconds, "solver returned");

    match solution.status {
        SolverStatus::Optimal | SolverStatus::Feasible => {
            let plan = extract::extract_plan(&plan_model, dataset, &solution)
                .map_err(PlanError::Extraction)?;
            info!(
                status = ?plan.status,
                objective = plan.objective_value,
                routes = plan.total_routes,
                maintenance = plan.total_maintenance,
                "plan extracted"
            );
            Ok(plan)
        }
        SolverStatus::Infeasible => Ok(OperationalPlan::envelope(
            PlanStatus::Infeasible,
            "no feasible plan exists for the given dataset",
            wall_time_seconds,
        )),
        SolverStatus::Unknown => Ok(OperationalPlan::envelope(
            PlanStatus::Unknown,
            "time limit reached before any plan was found",
            wall_time_seconds,
        )),
        SolverStatus::ModelInvalid => Err(PlanError::ModelInvalid(
            solution
                .message
                .unwrap_or_else(|| "no diagnostic available".to_string()),
        )),
    }
}
