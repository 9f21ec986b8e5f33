//! Operational plan (solution) model.
//!
//! The output of one planning run: solver status, objective, and the
//! per-vehicle assignment of routes and maintenance over the horizon.
//! Idle shifts are implicit — a vehicle with no entry for a shift stays
//! where it was.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::MaintenanceKind;

/// Terminal solver status of a planning run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlanStatus {
    /// Proven optimal plan.
    Optimal,
    /// Feasible plan, optimality not proven within the time limit.
    Feasible,
    /// No feasible plan exists.
    Infeasible,
    /// The constructed model was rejected by the solver.
    ModelInvalid,
    /// Time limit reached with no plan found.
    Unknown,
}

impl PlanStatus {
    /// Whether this status carries a usable plan.
    pub fn has_plan(&self) -> bool {
        matches!(self, Self::Optimal | Self::Feasible)
    }
}

/// A complete operational plan for the fleet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationalPlan {
    /// Solver outcome.
    pub status: PlanStatus,
    /// Sum of preventive kilometer deviations, when a plan exists.
    pub objective_value: Option<i64>,
    /// Wall-clock time spent in the solver.
    pub wall_time_seconds: f64,
    /// Diagnostic message for non-plan statuses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Number of route assignments across the fleet.
    pub total_routes: usize,
    /// Number of scheduled maintenance instances across the fleet.
    pub total_maintenance: usize,
    /// Per-vehicle schedules, keyed by vehicle identifier.
    pub vehicles: BTreeMap<String, VehiclePlan>,
}

/// One vehicle's schedule over the horizon.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehiclePlan {
    /// Assigned routes, keyed by route identifier.
    pub routes: BTreeMap<String, RouteAssignment>,
    /// Scheduled maintenance, keyed by instance identifier.
    pub maintenance: BTreeMap<String, MaintenanceRecord>,
}

/// A route executed by a vehicle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteAssignment {
    /// Global shift index the route runs in (always even).
    pub shift: i32,
    pub route_id: String,
    pub start_location: String,
    pub end_location: String,
    /// Route distance, in kilometers.
    pub km: i64,
}

/// A maintenance instance executed on a vehicle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaintenanceRecord {
    /// Maintenance type identifier from the catalog.
    pub maintenance_type: String,
    /// Preventive or corrective.
    pub kind: MaintenanceKind,
    /// First occupied shift.
    pub start_shift: i32,
    /// Last occupied shift (inclusive).
    pub end_shift: i32,
    /// Depot the work is performed at.
    pub depot: String,
    /// Vehicle odometer reading at the start of the work.
    pub km: i64,
}

impl OperationalPlan {
    /// Creates an empty plan shell for a run that produced a solution.
    pub fn with_plan(status: PlanStatus, objective_value: i64, wall_time_seconds: f64) -> Self {
        Self {
            status,
            objective_value: Some(objective_value),
            wall_time_seconds,
            message: None,
            total_routes: 0,
            total_maintenance: 0,
            vehicles: BTreeMap::new(),
        }
    }

    /// Creates the envelope for a run that produced no plan.
    pub fn envelope(status: PlanStatus, message: impl Into<String>, wall_time_seconds: f64) -> Self {
        Self {
            status,
            objective_value: None,
            wall_time_seconds,
            message: Some(message.into()),
            total_routes: 0,
            total_maintenance: 0,
            vehicles: BTreeMap::new(),
        }
    }

    /// Schedule for one vehicle, if present.
    pub fn vehicle(&self, vehicle_id: &str) -> Option<&VehiclePlan> {
        self.vehicles.get(vehicle_id)
    }

    /// Number of scheduled maintenance instances of one kind.
    pub fn maintenance_count(&self, kind: MaintenanceKind) -> usize {
        self.vehicles
            .values()
            .flat_map(|v| v.maintenance.values())
            .filter(|m| m.kind == kind)
            .count()
    }

    /// The vehicle a route was assigned to, if any.
    pub fn vehicle_for_route(&self, route_id: &str) -> Option<&str> {
        self.vehicles
            .iter()
            .find(|(_, plan)| plan.routes.contains_key(route_id))
            .map(|(id, _)| id.as_str())
    }
}

impl VehiclePlan {
    /// The route this vehicle runs in the given shift, if any.
    pub fn route_at_shift(&self, shift: i32) -> Option<&RouteAssignment> {
        self.routes.values().find(|r| r.shift == shift)
    }

    /// The maintenance record covering the given shift, if any.
    pub fn maintenance_at_shift(&self, shift: i32) -> Option<&MaintenanceRecord> {
        self.maintenance
            .values()
            .find(|m| m.start_shift <= shift && shift <= m.end_shift)
    }
}

impl MaintenanceRecord {
    /// Number of shifts this record occupies.
    pub fn duration_shifts(&self) -> i32 {
        self.end_shift - self.start_shift + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_plan() -> OperationalPlan {
        let mut plan = OperationalPlan::with_plan(PlanStatus::Optimal, 100, 0.5);
        let mut v1 = VehiclePlan::default();
        v1.routes.insert(
            "r1".into(),
            RouteAssignment {
                shift: 0,
                route_id: "r1".into(),
                start_location: "depot_1".into(),
                end_location: "depot_2".into(),
                km: 120,
            },
        );
        v1.maintenance.insert(
            "v1_insp".into(),
            MaintenanceRecord {
                maintenance_type: "insp".into(),
                kind: MaintenanceKind::Preventive,
                start_shift: 2,
                end_shift: 3,
                depot: "depot_2".into(),
                km: 120,
            },
        );
        plan.vehicles.insert("v1".into(), v1);
        plan.total_routes = 1;
        plan.total_maintenance = 1;
        plan
    }

    #[test]
    fn test_status_has_plan() {
        assert!(PlanStatus::Optimal.has_plan());
        assert!(PlanStatus::Feasible.has_plan());
        assert!(!PlanStatus::Infeasible.has_plan());
        assert!(!PlanStatus::Unknown.has_plan());
    }

    #[test]
    fn test_plan_queries() {
        let plan = sample_plan();
        assert_eq!(plan.vehicle_for_route("r1"), Some("v1"));
        assert_eq!(plan.vehicle_for_route("r9"), None);
        assert_eq!(plan.maintenance_count(MaintenanceKind::Preventive), 1);
        assert_eq!(plan.maintenance_count(MaintenanceKind::Corrective), 0);

        let v1 = plan.vehicle("v1").unwrap();
        assert!(v1.route_at_shift(0).is_some());
        assert!(v1.route_at_shift(2).is_none());
        let m = v1.maintenance_at_shift(3).unwrap();
        assert_eq!(m.duration_shifts(), 2);
        assert!(v1.maintenance_at_shift(4).is_none());
    }

    #[test]
    fn test_envelope() {
        let plan = OperationalPlan::envelope(PlanStatus::Infeasible, "no feasible plan", 1.2);
        assert_eq!(plan.status, PlanStatus::Infeasible);
        assert_eq!(plan.objective_value, None);
        assert!(plan.vehicles.is_empty());
        assert_eq!(plan.message.as_deref(), Some("no feasible plan"));
    }

    #[test]
    fn test_status_serde_screaming() {
        assert_eq!(
            serde_json::to_string(&PlanStatus::ModelInvalid).unwrap(),
            r#""MODEL_INVALID""#
        );
        let s: PlanStatus = serde_json::from_str(r#""OPTIMAL""#).unwrap();
        assert_eq!(s, PlanStatus::Optimal);
    }

    #[test]
    fn test_plan_serde_round_trip() {
        let plan = sample_plan();
        let json = serde_json::to_string(&plan).unwrap();
        let back: OperationalPlan = serde_json::from_str(&json).unwrap();
        assert_eq!(back, plan);
    }
}
