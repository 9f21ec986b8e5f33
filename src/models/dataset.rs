//! Input dataset and solve parameters.
//!
//! A `Dataset` is the complete description of one planning problem, as
//! produced by a data provider. Locations are keyed in a `BTreeMap` so
//! that the dense index assignment performed by the model builder is
//! deterministic across runs, which in turn makes solving reproducible.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{Location, MaintenanceType, Route, Vehicle};

/// The input to one planning run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    /// Fleet, in provider order.
    pub vehicles: Vec<Vehicle>,
    /// All depots and parkings, keyed by identifier.
    pub locations: BTreeMap<String, Location>,
    /// Maintenance activity catalog.
    pub maintenance_types: Vec<MaintenanceType>,
    /// Day-shift routes to cover.
    pub routes: Vec<Route>,
}

impl Dataset {
    /// Creates an empty dataset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a vehicle.
    pub fn with_vehicle(mut self, vehicle: Vehicle) -> Self {
        self.vehicles.push(vehicle);
        self
    }

    /// Adds a location under the given identifier.
    pub fn with_location(mut self, id: impl Into<String>, location: Location) -> Self {
        self.locations.insert(id.into(), location);
        self
    }

    /// Adds a maintenance type to the catalog.
    pub fn with_maintenance_type(mut self, maintenance_type: MaintenanceType) -> Self {
        self.maintenance_types.push(maintenance_type);
        self
    }

    /// Adds a route.
    pub fn with_route(mut self, route: Route) -> Self {
        self.routes.push(route);
        self
    }

    /// Looks up a location by identifier.
    pub fn location(&self, id: &str) -> Option<&Location> {
        self.locations.get(id)
    }

    /// Looks up a maintenance type by identifier.
    pub fn maintenance_type(&self, id: &str) -> Option<&MaintenanceType> {
        self.maintenance_types.iter().find(|m| m.id() == id)
    }

    /// Identifiers of all depots, in key order.
    pub fn depot_ids(&self) -> Vec<&str> {
        self.locations
            .iter()
            .filter(|(_, l)| l.is_depot())
            .map(|(id, _)| id.as_str())
            .collect()
    }

    /// Sum of all route distances, in kilometers.
    pub fn total_route_km(&self) -> i64 {
        self.routes.iter().map(|r| r.distance_km).sum()
    }
}

/// Knobs for one solve call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveParams {
    /// Hard wall-clock cap on the solver, in seconds.
    pub time_limit_seconds: u64,
    /// Requested search worker count. The bundled solver searches
    /// sequentially regardless; see `cp::SolverConfig`.
    pub num_workers: usize,
    /// Number of days in the planning horizon.
    pub planning_days: i32,
    /// Treat derived preventive instances as mandatory instead of letting
    /// the objective decide whether to schedule them.
    pub force_preventive: bool,
}

impl Default for SolveParams {
    fn default() -> Self {
        Self {
            time_limit_seconds: 60,
            num_workers: 1,
            planning_days: 14,
            force_preventive: false,
        }
    }
}

impl SolveParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the solver time limit (seconds, minimum 1).
    pub fn with_time_limit(mut self, seconds: u64) -> Self {
        self.time_limit_seconds = seconds.max(1);
        self
    }

    /// Sets the requested worker count (minimum 1).
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.num_workers = workers.max(1);
        self
    }

    /// Sets the horizon length in days (minimum 1).
    pub fn with_planning_days(mut self, days: i32) -> Self {
        self.planning_days = days.max(1);
        self
    }

    /// Makes derived preventive instances mandatory.
    pub fn with_forced_preventive(mut self, flag: bool) -> Self {
        self.force_preventive = flag;
        self
    }

    /// Number of shifts in the horizon (`2 * planning_days`).
    pub fn shift_count(&self) -> i32 {
        self.planning_days * 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_builder() {
        let ds = Dataset::new()
            .with_location("depot_1", Location::depot(10, 40))
            .with_location("parking_1", Location::parking(15))
            .with_vehicle(Vehicle::new("v1", "depot_1", 0))
            .with_maintenance_type(MaintenanceType::corrective("c1", 500, 4))
            .with_route(Route::new("r1", 0, "depot_1", "parking_1", 120));

        assert_eq!(ds.vehicles.len(), 1);
        assert_eq!(ds.depot_ids(), vec!["depot_1"]);
        assert!(ds.location("parking_1").is_some());
        assert!(ds.maintenance_type("c1").is_some());
        assert!(ds.maintenance_type("missing").is_none());
        assert_eq!(ds.total_route_km(), 120);
    }

    #[test]
    fn test_depot_ids_sorted() {
        let ds = Dataset::new()
            .with_location("depot_b", Location::depot(1, 8))
            .with_location("depot_a", Location::depot(1, 8))
            .with_location("parking_z", Location::parking(1));
        assert_eq!(ds.depot_ids(), vec!["depot_a", "depot_b"]);
    }

    #[test]
    fn test_solve_params_defaults() {
        let p = SolveParams::default();
        assert_eq!(p.time_limit_seconds, 60);
        assert_eq!(p.num_workers, 1);
        assert_eq!(p.planning_days, 14);
        assert!(!p.force_preventive);
        assert_eq!(p.shift_count(), 28);
    }

    #[test]
    fn test_solve_params_clamping() {
        let p = SolveParams::new()
            .with_time_limit(0)
            .with_workers(0)
            .with_planning_days(0);
        assert_eq!(p.time_limit_seconds, 1);
        assert_eq!(p.num_workers, 1);
        assert_eq!(p.planning_days, 1);
    }
}
