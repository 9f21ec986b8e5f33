//! Planning domain models.
//!
//! Core data types for describing a fleet planning problem and its
//! solution. The input side (`Dataset`, `SolveParams`) is what a data
//! provider produces; the output side (`OperationalPlan`) is what a
//! result sink consumes.
//!
//! # Time Representation
//!
//! The horizon of `D` days is discretized into `2·D` shifts indexed from 0.
//! Even indices are day shifts (routes run), odd indices are night shifts
//! (vehicles rest or undergo maintenance).

mod dataset;
mod location;
mod maintenance;
mod plan;
mod route;
mod vehicle;

pub use dataset::{Dataset, SolveParams};
pub use location::Location;
pub use maintenance::{MaintenanceKind, MaintenanceType};
pub use plan::{MaintenanceRecord, OperationalPlan, PlanStatus, RouteAssignment, VehiclePlan};
pub use route::{Route, ShiftKind};
pub use vehicle::{PendingTask, Vehicle};
