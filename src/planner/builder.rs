//! Model Builder: translates a dataset into a CP model.
//!
//! Builds the full planning formulation: route coverage, per-shift
//! location and kilometer tracking, and maintenance scheduling with
//! depot capability, location capacity, and depot manhour constraints.
//!
//! Variable creation order doubles as the solver's branching order:
//! route assignments first, then maintenance decisions, then derived
//! state. Location indices are assigned depots-first in ID order, so
//! depot-valued variables get contiguous domains and index assignment
//! is deterministic.

use std::collections::HashMap;

use tracing::debug;

use crate::cp::{BoolVar, CpModel, IntVar};
use crate::models::{Dataset, MaintenanceKind, MaintenanceType, SolveParams};

/// One derived maintenance obligation, ready for scheduling.
#[derive(Debug, Clone)]
pub(crate) struct InstanceSpec {
    /// Stable instance identifier: `<vehicle>_<type>[_<n>]`.
    pub id: String,
    /// Index of the owning vehicle.
    pub vehicle: usize,
    /// Maintenance type identifier.
    pub type_id: String,
    pub kind: MaintenanceKind,
    /// Whether the instance must be performed.
    pub mandatory: bool,
    /// Occupied shifts, precomputed from manhours and the smallest
    /// depot shift budget.
    pub duration: i32,
    /// Labor drawn from the hosting depot in each occupied shift.
    pub per_shift_manhours: i64,
    /// Hard ceiling on the odometer at execution start.
    pub max_km: i64,
    /// Deviation target; present for preventive instances only.
    pub optimal_km: Option<i64>,
    /// Location indices of depots able to perform this instance.
    pub capable_depots: Vec<usize>,
}

/// Decision variables of one maintenance instance.
pub(crate) struct InstanceVars {
    pub done: BoolVar,
    pub start: IntVar,
    pub depot: IntVar,
    pub km: IntVar,
    pub dev: Option<IntVar>,
    /// `start_is[s] ⇔ start == s`, for `s` in `[0, latest_start]`.
    pub start_is: Vec<BoolVar>,
    /// `active[s] ⇔ done ∧ start <= s < start + duration`, per shift.
    pub active: Vec<BoolVar>,
    /// One-hot depot choice, parallel to `InstanceSpec::capable_depots`.
    pub at_depot: Vec<BoolVar>,
}

/// The constructed planning model and its variable tables.
pub(crate) struct PlanModel {
    pub model: CpModel,
    pub num_shifts: i32,
    /// Dense location index → identifier, depots first.
    pub location_ids: Vec<String>,
    /// Route assignment variables, keyed by (vehicle, route) index.
    pub assign: HashMap<(usize, usize), BoolVar>,
    /// Route indices per day shift.
    pub routes_by_shift: HashMap<i32, Vec<usize>>,
    /// `loc_start[v][s]`: location of vehicle `v` at the start of shift
    /// `s`, with one trailing entry for the post-horizon state.
    pub loc_start: Vec<Vec<IntVar>>,
    /// `km_start[v][s]`: odometer of vehicle `v` at the start of shift `s`.
    pub km_start: Vec<Vec<IntVar>>,
    pub instances: Vec<InstanceSpec>,
    pub instance_vars: Vec<InstanceVars>,
}

impl PlanModel {
    /// Builds the CP model for a validated dataset.
    pub fn build(dataset: &Dataset, params: &SolveParams) -> Self {
        let num_shifts = params.shift_count();
        let num_vehicles = dataset.vehicles.len();

        let mut location_ids: Vec<String> = Vec::new();
        for (id, loc) in &dataset.locations {
            if loc.is_depot() {
                location_ids.push(id.clone());
            }
        }
        let depot_count = location_ids.len();
        for (id, loc) in &dataset.locations {
            if !loc.is_depot() {
                location_ids.push(id.clone());
            }
        }
        let num_locations = location_ids.len();
        let location_index: HashMap<String, usize> = location_ids
            .iter()
            .enumerate()
            .map(|(i, id)| (id.clone(), i))
            .collect();

        let mut routes_by_shift: HashMap<i32, Vec<usize>> = HashMap::new();
        for (r, route) in dataset.routes.iter().enumerate() {
            routes_by_shift
                .entry(route.shift_index())
                .or_default()
                .push(r);
        }

        let max_initial_km = dataset
            .vehicles
            .iter()
            .map(|v| v.initial_km)
            .max()
            .unwrap_or(0);
        let km_max = max_initial_km + dataset.total_route_km();

        let nominal_shift_manhours = dataset
            .locations
            .values()
            .filter_map(|l| l.manhours_per_shift())
            .min()
            .unwrap_or(1)
            .max(1);

        let all_instances = derive_instances(
            dataset,
            params,
            &location_ids[..depot_count],
            nominal_shift_manhours,
        );

        let mut model = CpModel::new("fleet_plan");

        // Obligations that cannot fit the horizon make mandatory work
        // impossible; optional ones are simply not derived.
        let mut instances: Vec<InstanceSpec> = Vec::new();
        for spec in all_instances {
            if spec.duration > num_shifts {
                if spec.mandatory {
                    model.add_bool_or(vec![]);
                }
            } else {
                instances.push(spec);
            }
        }

        // --- decision booleans, in branching order ----------------------

        let mut assign: HashMap<(usize, usize), BoolVar> = HashMap::new();
        for (r, route) in dataset.routes.iter().enumerate() {
            for (v, vehicle) in dataset.vehicles.iter().enumerate() {
                let var = model.new_bool_var(format!("assign_{}_{}", vehicle.id, route.id));
                assign.insert((v, r), var);
            }
        }

        struct InstanceBools {
            done: BoolVar,
            start_is: Vec<BoolVar>,
            at_depot: Vec<BoolVar>,
            active: Vec<BoolVar>,
        }

        let mut instance_bools: Vec<InstanceBools> = Vec::new();
        for spec in &instances {
            let latest_start = num_shifts - spec.duration;
            let done = model.new_bool_var(format!("done_{}", spec.id));
            if spec.mandatory {
                model.fix_bool(done, true);
            }
            let start_is = (0..=latest_start)
                .map(|s| model.new_bool_var(format!("start_{}_{s}", spec.id)))
                .collect();
            let at_depot = spec
                .capable_depots
                .iter()
                .map(|d| model.new_bool_var(format!("depot_{}_{}", spec.id, location_ids[*d])))
                .collect();
            let active = (0..num_shifts)
                .map(|s| model.new_bool_var(format!("active_{}_{s}", spec.id)))
                .collect();
            instance_bools.push(InstanceBools {
                done,
                start_is,
                at_depot,
                active,
            });
        }

        // --- state integers ---------------------------------------------

        let mut loc_start: Vec<Vec<IntVar>> = Vec::new();
        let mut km_start: Vec<Vec<IntVar>> = Vec::new();
        for (v, vehicle) in dataset.vehicles.iter().enumerate() {
            let locs = (0..=num_shifts)
                .map(|s| model.new_int_var(0, num_locations as i64 - 1, format!("loc_{v}_{s}")))
                .collect::<Vec<_>>();
            let kms = (0..=num_shifts)
                .map(|s| model.new_int_var(0, km_max, format!("km_{v}_{s}")))
                .collect::<Vec<_>>();
            model.fix(locs[0], location_index[vehicle.initial_location.as_str()] as i64);
            model.fix(kms[0], vehicle.initial_km);
            loc_start.push(locs);
            km_start.push(kms);
        }

        let mut instance_vars: Vec<InstanceVars> = Vec::new();
        for (spec, bools) in instances.iter().zip(instance_bools) {
            let latest_start = num_shifts - spec.duration;
            let start =
                model.new_int_var(0, latest_start as i64, format!("mstart_{}", spec.id));
            let depot =
                model.new_int_var(0, depot_count as i64 - 1, format!("mdepot_{}", spec.id));
            let km = model.new_int_var(0, km_max, format!("mkm_{}", spec.id));
            let dev = spec.optimal_km.map(|opt| {
                model.new_int_var(0, km_max.max(opt), format!("dev_{}", spec.id))
            });
            instance_vars.push(InstanceVars {
                done: bools.done,
                start,
                depot,
                km,
                dev,
                start_is: bools.start_is,
                active: bools.active,
                at_depot: bools.at_depot,
            });
        }

        let mut plan = PlanModel {
            model,
            num_shifts,
            location_ids,
            assign,
            routes_by_shift,
            loc_start,
            km_start,
            instances,
            instance_vars,
        };

        plan.post_route_coverage(dataset);
        plan.post_vehicle_exclusivity(dataset);
        plan.post_location_transitions(dataset, &location_index);
        plan.post_location_capacity(dataset, num_vehicles);
        plan.post_km_accumulation(dataset);
        plan.post_maintenance_constraints(dataset, &location_index);
        plan.post_depot_manhours(dataset);
        plan.post_objective();

        debug!(
            vehicles = num_vehicles,
            routes = dataset.routes.len(),
            instances = plan.instances.len(),
            variables = plan.model.var_count(),
            constraints = plan.model.constraint_count(),
            km_max,
            "planning model built"
        );

        plan
    }

    /// Every route is covered by exactly one vehicle.
    fn post_route_coverage(&mut self, dataset: &Dataset) {
        for r in 0..dataset.routes.len() {
            let literals = (0..dataset.vehicles.len())
                .map(|v| self.assign[&(v, r)].lit())
                .collect();
            self.model.add_exactly_one(literals);
        }
    }

    /// A vehicle does at most one thing per shift: one route or one
    /// active maintenance.
    fn post_vehicle_exclusivity(&mut self, dataset: &Dataset) {
        for v in 0..dataset.vehicles.len() {
            for s in 0..self.num_shifts {
                let mut literals = Vec::new();
                if let Some(routes) = self.routes_by_shift.get(&s) {
                    for &r in routes {
                        literals.push(self.assign[&(v, r)].lit());
                    }
                }
                for (spec, vars) in self.instances.iter().zip(&self.instance_vars) {
                    if spec.vehicle == v {
                        literals.push(vars.active[s as usize].lit());
                    }
                }
                if literals.len() > 1 {
                    self.model.add_at_most_one(literals);
                }
            }
        }
    }

    /// Location state transitions.
    ///
    /// An assigned route moves the vehicle from its start to its end
    /// location; in every other case, including all night shifts and
    /// shifts spent in maintenance, the vehicle stays where it is.
    fn post_location_transitions(
        &mut self,
        dataset: &Dataset,
        location_index: &HashMap<String, usize>,
    ) {
        for v in 0..dataset.vehicles.len() {
            for s in 0..self.num_shifts {
                let cur = self.loc_start[v][s as usize];
                let next = self.loc_start[v][s as usize + 1];
                let routes = self.routes_by_shift.get(&s).cloned().unwrap_or_default();

                if routes.is_empty() {
                    self.model.add_eq(vec![(next, 1), (cur, -1)], 0, vec![]);
                    continue;
                }

                for &r in &routes {
                    let route = &dataset.routes[r];
                    let lit = self.assign[&(v, r)].lit();
                    let start_idx = location_index[route.start_location.as_str()] as i64;
                    let end_idx = location_index[route.end_location.as_str()] as i64;
                    self.model.add_eq(vec![(cur, 1)], start_idx, vec![lit]);
                    self.model.add_eq(vec![(next, 1)], end_idx, vec![lit]);
                }

                let idle = self.model.new_bool_var(format!("idle_{v}_{s}"));
                let mut any_route = vec![idle.lit()];
                for &r in &routes {
                    let lit = self.assign[&(v, r)].lit();
                    self.model.add_implication(idle.lit(), !lit);
                    any_route.push(lit);
                }
                self.model.add_bool_or(any_route);
                self.model
                    .add_eq(vec![(next, 1), (cur, -1)], 0, vec![idle.lit()]);
            }

            // A vehicle in maintenance stays at its depot for the
            // duration.
            for (spec, vars) in self.instances.iter().zip(&self.instance_vars) {
                if spec.vehicle != v {
                    continue;
                }
                for s in 0..self.num_shifts as usize {
                    let cur = self.loc_start[v][s];
                    let next = self.loc_start[v][s + 1];
                    self.model.add_eq(
                        vec![(next, 1), (cur, -1)],
                        0,
                        vec![vars.active[s].lit()],
                    );
                }
            }
        }
    }

    /// Location capacity as a cardinality constraint over reified
    /// residency booleans, per location and shift.
    fn post_location_capacity(&mut self, dataset: &Dataset, num_vehicles: usize) {
        for (l, id) in self.location_ids.clone().iter().enumerate() {
            let capacity = dataset.locations[id].capacity();
            if capacity as usize >= num_vehicles {
                // Can hold the whole fleet; never binding.
                continue;
            }
            for s in 0..=self.num_shifts as usize {
                let mut terms = Vec::new();
                for v in 0..num_vehicles {
                    let here = self.model.new_bool_var(format!("at_{id}_{v}_{s}"));
                    self.model
                        .add_int_eq_reif(self.loc_start[v][s], l as i64, here.lit());
                    terms.push((here.as_int(), 1));
                }
                self.model.add_le(terms, capacity as i64, vec![]);
            }
        }
    }

    /// Kilometer accumulation: an assigned route adds its distance,
    /// everything else leaves the odometer unchanged.
    fn post_km_accumulation(&mut self, dataset: &Dataset) {
        for v in 0..dataset.vehicles.len() {
            for s in 0..self.num_shifts {
                let cur = self.km_start[v][s as usize];
                let next = self.km_start[v][s as usize + 1];
                let mut terms = vec![(next, 1), (cur, -1)];
                if let Some(routes) = self.routes_by_shift.get(&s) {
                    for &r in routes {
                        let distance = dataset.routes[r].distance_km;
                        terms.push((self.assign[&(v, r)].as_int(), -distance));
                    }
                }
                self.model.add_eq(terms, 0, vec![]);
            }
        }
    }

    /// Per-instance maintenance constraints: start/depot channeling,
    /// activity windows, kilometer recording and ceilings, depot
    /// presence, pre-maintenance routing, and deviation linearization.
    fn post_maintenance_constraints(
        &mut self,
        dataset: &Dataset,
        location_index: &HashMap<String, usize>,
    ) {
        for i in 0..self.instances.len() {
            let spec = self.instances[i].clone();
            let done = self.instance_vars[i].done;
            let start = self.instance_vars[i].start;
            let depot = self.instance_vars[i].depot;
            let km = self.instance_vars[i].km;
            let dev = self.instance_vars[i].dev;
            let start_is = self.instance_vars[i].start_is.clone();
            let active = self.instance_vars[i].active.clone();
            let at_depot = self.instance_vars[i].at_depot.clone();
            let v = spec.vehicle;
            let latest_start = self.num_shifts - spec.duration;

            // Start channeling.
            for (s, b) in start_is.iter().enumerate() {
                self.model.add_int_eq_reif(start, s as i64, b.lit());
            }
            self.model
                .add_exactly_one(start_is.iter().map(|b| b.lit()).collect());

            // Depot channeling over the capable set.
            self.model
                .add_exactly_one(at_depot.iter().map(|b| b.lit()).collect());
            let mut channel = vec![(depot, 1)];
            for (k, &d) in spec.capable_depots.iter().enumerate() {
                channel.push((at_depot[k].as_int(), -(d as i64)));
            }
            self.model.add_eq(channel, 0, vec![]);

            // Activity window: active[s] ⇔ done ∧ start ∈ window(s).
            for s in 0..self.num_shifts as usize {
                let window_lo = (s as i32 - spec.duration + 1).max(0) as usize;
                let window_hi = (s as i32).min(latest_start) as usize;
                let act = active[s].lit();

                self.model.add_implication(act, done.lit());
                let mut starts_here = vec![!act];
                for t in window_lo..=window_hi {
                    starts_here.push(start_is[t].lit());
                    self.model
                        .add_bool_or(vec![!done.lit(), !start_is[t].lit(), act]);
                }
                self.model.add_bool_or(starts_here);
            }

            // Kilometer recording at maintenance start, and the ceiling.
            let km_array = self.km_start[v][..self.num_shifts as usize].to_vec();
            self.model
                .add_element(start, km_array, km, vec![done.lit()]);
            self.model
                .add_le(vec![(km, 1)], spec.max_km, vec![done.lit()]);
            self.model.add_eq(vec![(km, 1)], 0, vec![!done]);

            // The vehicle sits at the chosen depot when work begins.
            let loc_array = self.loc_start[v][..self.num_shifts as usize].to_vec();
            self.model
                .add_element(start, loc_array, depot, vec![done.lit()]);

            // A night-shift start requires the preceding day's route, if
            // any was assigned, to terminate at the chosen depot.
            for s in (1..=latest_start).filter(|s| s % 2 == 1) {
                let prev_routes = self
                    .routes_by_shift
                    .get(&(s - 1))
                    .cloned()
                    .unwrap_or_default();
                for r in prev_routes {
                    let route = &dataset.routes[r];
                    let end_idx = location_index[route.end_location.as_str()] as i64;
                    self.model.add_eq(
                        vec![(depot, 1)],
                        end_idx,
                        vec![
                            done.lit(),
                            start_is[s as usize].lit(),
                            self.assign[&(v, r)].lit(),
                        ],
                    );
                }
            }

            // Deviation from the optimal kilometer, preventive only.
            if let (Some(dev), Some(opt)) = (dev, spec.optimal_km) {
                self.model
                    .add_ge(vec![(dev, 1), (km, -1)], -opt, vec![done.lit()]);
                self.model
                    .add_ge(vec![(dev, 1), (km, 1)], opt, vec![done.lit()]);
                self.model.add_eq(vec![(dev, 1)], 0, vec![!done]);
            }
        }
    }

    /// Depot manhour budgets: the labor drawn by instances active at a
    /// depot in a shift may not exceed that depot's per-shift budget.
    fn post_depot_manhours(&mut self, dataset: &Dataset) {
        let mut demands: HashMap<(usize, usize), Vec<(IntVar, i64)>> = HashMap::new();

        for i in 0..self.instances.len() {
            let spec = self.instances[i].clone();
            if spec.per_shift_manhours == 0 {
                continue;
            }
            let active = self.instance_vars[i].active.clone();
            let at_depot = self.instance_vars[i].at_depot.clone();

            for (k, &d) in spec.capable_depots.iter().enumerate() {
                for s in 0..self.num_shifts as usize {
                    let busy_here = self
                        .model
                        .new_bool_var(format!("work_{}_{}_{s}", spec.id, self.location_ids[d]));
                    let act = active[s].lit();
                    let here = at_depot[k].lit();
                    self.model.add_implication(busy_here.lit(), act);
                    self.model.add_implication(busy_here.lit(), here);
                    self.model.add_bool_or(vec![!act, !here, busy_here.lit()]);
                    demands
                        .entry((d, s))
                        .or_default()
                        .push((busy_here.as_int(), spec.per_shift_manhours));
                }
            }
        }

        for ((d, _), terms) in demands {
            let budget = dataset.locations[&self.location_ids[d]]
                .manhours_per_shift()
                .unwrap_or(0);
            self.model.add_le(terms, budget, vec![]);
        }
    }

    /// Minimize the total preventive kilometer deviation.
    fn post_objective(&mut self) {
        let terms = self
            .instance_vars
            .iter()
            .filter_map(|vars| vars.dev.map(|d| (d, 1)))
            .collect();
        self.model.minimize(terms);
    }
}

/// Derives concrete maintenance instances from pending tasks.
///
/// Every pending corrective-kind task is mandatory. Preventive-kind tasks
/// are derived only when still satisfiable (`max_km` not already passed)
/// and due within horizon reach (`optimal_km` attainable), and are
/// optional unless `force_preventive` is set.
fn derive_instances(
    dataset: &Dataset,
    params: &SolveParams,
    depot_ids: &[String],
    nominal_shift_manhours: i64,
) -> Vec<InstanceSpec> {
    let horizon_km_bound = dataset.total_route_km();
    let mut counters: HashMap<String, usize> = HashMap::new();
    let mut instances = Vec::new();

    for (v, vehicle) in dataset.vehicles.iter().enumerate() {
        let tasks = vehicle
            .pending_corrective_tasks
            .iter()
            .chain(&vehicle.pending_preventive_tasks);
        for task in tasks {
            let Some(mtype) = dataset.maintenance_type(&task.maintenance_type_id) else {
                continue;
            };

            let (kind, mandatory, max_km, optimal_km) = match mtype {
                MaintenanceType::Corrective { .. } => (
                    MaintenanceKind::Corrective,
                    true,
                    vehicle.initial_km + task.remaining_km,
                    None,
                ),
                MaintenanceType::Preventive {
                    optimal_km, max_km, ..
                } => {
                    if *max_km < vehicle.initial_km
                        || *optimal_km > vehicle.initial_km + horizon_km_bound
                    {
                        continue;
                    }
                    (
                        MaintenanceKind::Preventive,
                        params.force_preventive,
                        *max_km,
                        Some(*optimal_km),
                    )
                }
            };

            let capable_depots: Vec<usize> = depot_ids
                .iter()
                .enumerate()
                .filter(|(_, id)| {
                    dataset.locations[*id].supports_maintenance(mtype.specialization())
                })
                .map(|(d, _)| d)
                .collect();
            if capable_depots.is_empty() {
                continue;
            }

            let manhours = mtype.manhours();
            let duration = ((manhours + nominal_shift_manhours - 1) / nominal_shift_manhours)
                .max(1) as i32;
            let per_shift_manhours = (manhours + duration as i64 - 1) / duration as i64;

            let base = format!("{}_{}", vehicle.id, mtype.id());
            let n = counters.entry(base.clone()).or_insert(0);
            *n += 1;
            let id = if *n == 1 {
                base
            } else {
                format!("{base}_{n}")
            };

            instances.push(InstanceSpec {
                id,
                vehicle: v,
                type_id: mtype.id().to_string(),
                kind,
                mandatory,
                duration,
                per_shift_manhours,
                max_km,
                optimal_km,
                capable_depots,
            });
        }
    }

    instances
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Location, Route, Vehicle};

    fn two_depot_dataset() -> Dataset {
        Dataset::new()
            .with_location("depot_1", Location::depot(4, 8))
            .with_location(
                "depot_2",
                Location::depot(4, 16).with_specializations(vec!["electrical".into()]),
            )
            .with_location("parking_1", Location::parking(6))
            .with_maintenance_type(MaintenanceType::corrective("c1", 500, 4))
            .with_maintenance_type(MaintenanceType::preventive("p1", 1_000, 1_500, 20))
            .with_vehicle(
                Vehicle::new("v1", "depot_1", 100)
                    .with_corrective_task("c1", 50)
                    .with_preventive_task("p1", 900),
            )
            .with_vehicle(Vehicle::new("v2", "parking_1", 0))
            .with_route(Route::new("r1", 0, "depot_1", "depot_2", 120))
            .with_route(Route::new("r2", 1, "depot_2", "depot_1", 900))
    }

    #[test]
    fn test_location_indexing_depots_first() {
        let plan = PlanModel::build(&two_depot_dataset(), &SolveParams::new().with_planning_days(2));
        assert_eq!(plan.location_ids, vec!["depot_1", "depot_2", "parking_1"]);
    }

    #[test]
    fn test_instance_derivation() {
        let plan = PlanModel::build(&two_depot_dataset(), &SolveParams::new().with_planning_days(2));
        assert_eq!(plan.instances.len(), 2);

        let corrective = &plan.instances[0];
        assert_eq!(corrective.id, "v1_c1");
        assert_eq!(corrective.kind, MaintenanceKind::Corrective);
        assert!(corrective.mandatory);
        assert_eq!(corrective.max_km, 150);
        // 4 manhours at an 8-manhour nominal: one shift.
        assert_eq!(corrective.duration, 1);
        assert_eq!(corrective.per_shift_manhours, 4);
        assert_eq!(corrective.capable_depots, vec![0, 1]);

        let preventive = &plan.instances[1];
        assert_eq!(preventive.kind, MaintenanceKind::Preventive);
        assert!(!preventive.mandatory);
        assert_eq!(preventive.optimal_km, Some(1_000));
        // 20 manhours at an 8-manhour nominal: three shifts, 7 per shift.
        assert_eq!(preventive.duration, 3);
        assert_eq!(preventive.per_shift_manhours, 7);
    }

    #[test]
    fn test_preventive_out_of_reach_not_derived() {
        let ds = two_depot_dataset()
            .with_maintenance_type(MaintenanceType::preventive("p_far", 50_000, 60_000, 4))
            .with_vehicle(Vehicle::new("v3", "depot_1", 0).with_preventive_task("p_far", 50_000));
        let plan = PlanModel::build(&ds, &SolveParams::new().with_planning_days(2));
        assert!(plan.instances.iter().all(|i| i.type_id != "p_far"));
    }

    #[test]
    fn test_overdue_preventive_not_derived() {
        let ds = two_depot_dataset()
            .with_vehicle(Vehicle::new("v3", "depot_1", 2_000).with_preventive_task("p1", 0));
        let plan = PlanModel::build(
            &ds,
            &SolveParams::new()
                .with_planning_days(2)
                .with_forced_preventive(true),
        );
        assert!(plan
            .instances
            .iter()
            .all(|i| !(i.vehicle == 2 && i.type_id == "p1")));
    }

    #[test]
    fn test_force_preventive_flag() {
        let plan = PlanModel::build(
            &two_depot_dataset(),
            &SolveParams::new()
                .with_planning_days(2)
                .with_forced_preventive(true),
        );
        assert!(plan.instances.iter().all(|i| i.mandatory));
    }

    #[test]
    fn test_specialized_capable_set() {
        let ds = two_depot_dataset()
            .with_maintenance_type(
                MaintenanceType::corrective("c_el", 400, 4).with_specialization("electrical"),
            )
            .with_vehicle(Vehicle::new("v3", "depot_2", 0).with_corrective_task("c_el", 200));
        let plan = PlanModel::build(&ds, &SolveParams::new().with_planning_days(2));
        let inst = plan
            .instances
            .iter()
            .find(|i| i.type_id == "c_el")
            .unwrap();
        // Only depot_2 is electrical-capable.
        assert_eq!(inst.capable_depots, vec![1]);
    }

    #[test]
    fn test_repeated_task_ids_disambiguated() {
        let ds = two_depot_dataset().with_vehicle(
            Vehicle::new("v3", "depot_1", 0)
                .with_corrective_task("c1", 100)
                .with_corrective_task("c1", 300),
        );
        let plan = PlanModel::build(&ds, &SolveParams::new().with_planning_days(2));
        let ids: Vec<_> = plan
            .instances
            .iter()
            .filter(|i| i.vehicle == 2)
            .map(|i| i.id.as_str())
            .collect();
        assert_eq!(ids, vec!["v3_c1", "v3_c1_2"]);
    }

    #[test]
    fn test_model_is_structurally_valid() {
        let plan = PlanModel::build(&two_depot_dataset(), &SolveParams::new().with_planning_days(2));
        assert!(plan.model.validate().is_ok());
        assert!(plan.model.var_count() > 0);
        assert!(plan.model.constraint_count() > 0);
    }
}
