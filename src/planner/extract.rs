//! Result Extractor: materializes a schedule from a solved model.
//!
//! A pure function of the solved model and the input dataset. Consecutive
//! active shifts of one maintenance instance collapse into a single
//! record. The extractor re-checks the invariants it relies on (exactly
//! one vehicle per route, one activity per vehicle-shift, a coherent
//! activity window per instance) and reports any violation as an error
//! instead of producing a corrupt plan.

use crate::cp::{CpSolution, SolverStatus};
use crate::models::{
    Dataset, MaintenanceRecord, OperationalPlan, PlanStatus, RouteAssignment, VehiclePlan,
};

use super::builder::PlanModel;

/// Walks a solved model and produces the operational plan.
pub(crate) fn extract_plan(
    plan_model: &PlanModel,
    dataset: &Dataset,
    solution: &CpSolution,
) -> Result<OperationalPlan, String> {
    let status = match solution.status {
        SolverStatus::Optimal => PlanStatus::Optimal,
        SolverStatus::Feasible => PlanStatus::Feasible,
        other => {
            return Err(format!(
                "extractor called on a model without a solution (status {other:?})"
            ))
        }
    };

    let mut plan = OperationalPlan::with_plan(
        status,
        solution.objective_value.unwrap_or(0),
        solution.solve_time_ms as f64 / 1000.0,
    );

    for vehicle in &dataset.vehicles {
        plan.vehicles
            .insert(vehicle.id.clone(), VehiclePlan::default());
    }

    // Route assignments, with the coverage invariant re-checked.
    for (r, route) in dataset.routes.iter().enumerate() {
        let assigned: Vec<usize> = (0..dataset.vehicles.len())
            .filter(|&v| solution.bool_value(plan_model.assign[&(v, r)]))
            .collect();
        if assigned.len() != 1 {
            return Err(format!(
                "route '{}' is assigned to {} vehicles",
                route.id,
                assigned.len()
            ));
        }
        let vehicle_id = &dataset.vehicles[assigned[0]].id;
        plan.vehicles
            .get_mut(vehicle_id)
            .expect("vehicle entry created above")
            .routes
            .insert(
                route.id.clone(),
                RouteAssignment {
                    shift: route.shift_index(),
                    route_id: route.id.clone(),
                    start_location: route.start_location.clone(),
                    end_location: route.end_location.clone(),
                    km: route.distance_km,
                },
            );
    }

    // Maintenance records.
    for (spec, vars) in plan_model
        .instances
        .iter()
        .zip(&plan_model.instance_vars)
    {
        if !solution.bool_value(vars.done) {
            continue;
        }

        let start_shift = solution.value(vars.start) as i32;
        let end_shift = start_shift + spec.duration - 1;

        // The activity booleans must trace exactly the chosen window.
        for s in 0..plan_model.num_shifts {
            let expected = s >= start_shift && s <= end_shift;
            if solution.bool_value(vars.active[s as usize]) != expected {
                return Err(format!(
                    "instance '{}' has an activity marker at shift {s} outside its window [{start_shift}, {end_shift}]",
                    spec.id
                ));
            }
        }

        let depot_index = solution.value(vars.depot) as usize;
        let depot = plan_model
            .location_ids
            .get(depot_index)
            .ok_or_else(|| {
                format!(
                    "instance '{}' is placed at unknown location index {depot_index}",
                    spec.id
                )
            })?
            .clone();

        let vehicle_id = &dataset.vehicles[spec.vehicle].id;
        plan.vehicles
            .get_mut(vehicle_id)
            .expect("vehicle entry created above")
            .maintenance
            .insert(
                spec.id.clone(),
                MaintenanceRecord {
                    maintenance_type: spec.type_id.clone(),
                    kind: spec.kind,
                    start_shift,
                    end_shift,
                    depot,
                    km: solution.value(vars.km),
                },
            );
    }

    // Exclusivity invariant: one activity per vehicle-shift.
    for vehicle_plan in plan.vehicles.values() {
        for assignment in vehicle_plan.routes.values() {
            if let Some(record) = vehicle_plan.maintenance_at_shift(assignment.shift) {
                return Err(format!(
                    "route '{}' and maintenance '{}' overlap in shift {}",
                    assignment.route_id, record.maintenance_type, assignment.shift
                ));
            }
        }
    }

    plan.total_routes = plan.vehicles.values().map(|v| v.routes.len()).sum();
    plan.total_maintenance = plan.vehicles.values().map(|v| v.maintenance.len()).sum();

    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cp::{BranchBoundSolver, CpSolver, SolverConfig};
    use crate::models::{Location, MaintenanceType, Route, SolveParams, Vehicle};

    fn solved(dataset: &Dataset, params: &SolveParams) -> (OperationalPlan, PlanModel) {
        let plan_model = PlanModel::build(dataset, params);
        let solution = BranchBoundSolver::new().solve(&plan_model.model, &SolverConfig::default());
        assert!(solution.is_solution_found(), "expected a solution");
        let plan = extract_plan(&plan_model, dataset, &solution).expect("extraction");
        (plan, plan_model)
    }

    fn small_dataset() -> Dataset {
        Dataset::new()
            .with_location("depot_1", Location::depot(2, 8))
            .with_location("depot_2", Location::depot(2, 8))
            .with_maintenance_type(MaintenanceType::corrective("c1", 500, 4))
            .with_vehicle(Vehicle::new("v1", "depot_1", 0).with_corrective_task("c1", 0))
            .with_vehicle(Vehicle::new("v2", "depot_1", 0))
            .with_route(Route::new("r1", 0, "depot_1", "depot_2", 50))
    }

    #[test]
    fn test_extracted_plan_shape() {
        let params = SolveParams::new().with_planning_days(1);
        let (plan, _) = solved(&small_dataset(), &params);

        assert_eq!(plan.status, PlanStatus::Optimal);
        assert_eq!(plan.total_routes, 1);
        assert_eq!(plan.total_maintenance, 1);
        assert_eq!(plan.vehicles.len(), 2);

        // The corrective is due at km 0, so v1 cannot take the route.
        assert_eq!(plan.vehicle_for_route("r1"), Some("v2"));
        let v1 = plan.vehicle("v1").unwrap();
        let record = v1.maintenance.get("v1_c1").unwrap();
        assert_eq!(record.km, 0);
        assert_eq!(record.depot, "depot_1");
        assert_eq!(record.start_shift, 0);
        assert_eq!(record.duration_shifts(), 1);
    }

    #[test]
    fn test_route_km_is_distance() {
        let params = SolveParams::new().with_planning_days(1);
        let (plan, _) = solved(&small_dataset(), &params);
        let carrier = plan.vehicle("v2").unwrap();
        assert_eq!(carrier.routes["r1"].km, 50);
        assert_eq!(carrier.routes["r1"].shift, 0);
    }

    #[test]
    fn test_extractor_rejects_unsolved_model() {
        let dataset = small_dataset();
        let params = SolveParams::new().with_planning_days(1);
        let plan_model = PlanModel::build(&dataset, &params);
        let unsolved = CpSolution::empty(SolverStatus::Infeasible);
        assert!(extract_plan(&plan_model, &dataset, &unsolved).is_err());
    }
}
