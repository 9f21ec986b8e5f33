//! Rail fleet operations and maintenance planning.
//!
//! Produces a feasible, cost-minimal operational plan for a homogeneous
//! rail fleet over a multi-day horizon: every day-shift route is covered
//! by exactly one vehicle and every required maintenance task is placed
//! on a capable depot, subject to location capacity, depot manhour
//! budgets, depot specialization, and per-vehicle kilometer limits. The
//! objective minimizes the total deviation of preventive maintenance
//! execution kilometers from their optimal targets.
//!
//! # Modules
//!
//! - **`models`**: Boundary types — `Dataset`, `Vehicle`, `Location`,
//!   `MaintenanceType`, `Route`, `SolveParams`, `OperationalPlan`
//! - **`validation`**: Fail-fast dataset integrity checks
//! - **`cp`**: Constraint programming substrate — model, variables, and a
//!   deterministic branch-and-bound solver
//! - **`planner`**: The pipeline — model building, solving, extraction
//! - **`generator`**: Randomized dataset provider for demos and tests
//!
//! # Example
//!
//! ```
//! use railsched::generator::DatasetGenerator;
//! use railsched::models::SolveParams;
//!
//! let dataset = DatasetGenerator::new()
//!     .with_vehicles(2)
//!     .with_routes_per_day(1)
//!     .with_planning_days(1)
//!     .with_seed(42)
//!     .generate();
//! let params = SolveParams::new().with_planning_days(1).with_time_limit(5);
//!
//! let plan = railsched::solve(&dataset, &params)?;
//! println!("{:?}: {} routes", plan.status, plan.total_routes);
//! # Ok::<(), railsched::PlanError>(())
//! ```
//!
//! # Concurrency
//!
//! One `solve` call is synchronous and self-contained: it owns its model,
//! blocks until the solver finishes or the time limit fires, and leaves
//! no process-wide state behind. Diagnostics are emitted as `tracing`
//! events; the crate never writes to stderr on its own.

pub mod cp;
mod error;
pub mod generator;
pub mod models;
pub mod planner;
pub mod validation;

pub use error::PlanError;
pub use planner::solve;
