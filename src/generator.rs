//! Dummy dataset provider.
//!
//! Generates randomized but internally consistent planning datasets:
//! every location reference resolves, every specialized maintenance type
//! has at least one capable depot, and pending windows fit their type
//! definitions. Intended for demos, benchmarks, and tests; real data
//! providers produce the same `Dataset` type from live systems.
//!
//! Generation is deterministic under a fixed seed.

use rand::prelude::IndexedRandom;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::models::{Dataset, Location, MaintenanceType, Route, Vehicle};

const SPECIALIZATIONS: [&str; 5] = [
    "electrical",
    "mechanical",
    "hydraulic",
    "pneumatic",
    "structural",
];

/// Configurable random dataset generator.
#[derive(Debug, Clone)]
pub struct DatasetGenerator {
    /// Fleet size.
    pub num_vehicles: usize,
    /// Number of depots.
    pub num_depots: usize,
    /// Number of parkings.
    pub num_parkings: usize,
    /// Routes generated per day shift.
    pub routes_per_day: usize,
    /// Horizon length in days.
    pub planning_days: i32,
    /// RNG seed. `None` seeds from the operating system.
    pub seed: Option<u64>,
}

impl Default for DatasetGenerator {
    fn default() -> Self {
        Self {
            num_vehicles: 10,
            num_depots: 2,
            num_parkings: 2,
            routes_per_day: 8,
            planning_days: 14,
            seed: None,
        }
    }
}

impl DatasetGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_vehicles(mut self, n: usize) -> Self {
        self.num_vehicles = n;
        self
    }

    pub fn with_depots(mut self, n: usize) -> Self {
        self.num_depots = n;
        self
    }

    pub fn with_parkings(mut self, n: usize) -> Self {
        self.num_parkings = n;
        self
    }

    pub fn with_routes_per_day(mut self, n: usize) -> Self {
        self.routes_per_day = n;
        self
    }

    pub fn with_planning_days(mut self, days: i32) -> Self {
        self.planning_days = days;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Generates a dataset.
    pub fn generate(&self) -> Dataset {
        let mut rng = match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };

        let mut dataset = Dataset::new();

        // Depots: 1-3 specializations each.
        let mut offered_specs: Vec<String> = Vec::new();
        for i in 0..self.num_depots {
            let count = rng.random_range(1..=3);
            let specs: Vec<String> = SPECIALIZATIONS
                .choose_multiple(&mut rng, count)
                .map(|s| s.to_string())
                .collect();
            for s in &specs {
                if !offered_specs.contains(s) {
                    offered_specs.push(s.clone());
                }
            }
            dataset = dataset.with_location(
                format!("depot_{}", i + 1),
                Location::depot(rng.random_range(10..=15), rng.random_range(40..=100))
                    .with_specializations(specs),
            );
        }

        for i in 0..self.num_parkings {
            dataset = dataset.with_location(
                format!("parking_{}", i + 1),
                Location::parking(rng.random_range(10..=20)),
            );
        }

        // Catalog: five preventive and five corrective types.
        for i in 0..5 {
            let optimal_km = rng.random_range(5_000..=20_000);
            let mut mtype = MaintenanceType::preventive(
                format!("preventive_{}", i + 1),
                optimal_km,
                optimal_km + rng.random_range(1_000..=3_000),
                rng.random_range(4..=24),
            );
            if !offered_specs.is_empty() && rng.random_bool(0.7) {
                mtype = mtype.with_specialization(offered_specs.choose(&mut rng).unwrap().clone());
            }
            dataset = dataset.with_maintenance_type(mtype);
        }
        for i in 0..5 {
            let mut mtype = MaintenanceType::corrective(
                format!("corrective_{}", i + 1),
                rng.random_range(300..=1_000),
                rng.random_range(2..=16),
            )
            .with_safety_critical(rng.random_bool(0.3));
            if !offered_specs.is_empty() && rng.random_bool(0.5) {
                mtype = mtype.with_specialization(offered_specs.choose(&mut rng).unwrap().clone());
            }
            dataset = dataset.with_maintenance_type(mtype);
        }

        let location_ids: Vec<String> = dataset.locations.keys().cloned().collect();
        let corrective_types: Vec<MaintenanceType> = dataset
            .maintenance_types
            .iter()
            .filter(|m| !m.is_preventive())
            .cloned()
            .collect();
        let preventive_types: Vec<MaintenanceType> = dataset
            .maintenance_types
            .iter()
            .filter(|m| m.is_preventive())
            .cloned()
            .collect();

        for i in 0..self.num_vehicles {
            let initial_km = rng.random_range(0..=25_000);
            let mut vehicle = Vehicle::new(
                format!("vehicle_{}", i + 1),
                location_ids.choose(&mut rng).unwrap().clone(),
                initial_km,
            );

            for _ in 0..rng.random_range(0..=2) {
                if let Some(MaintenanceType::Corrective {
                    id, max_km_window, ..
                }) = corrective_types.choose(&mut rng)
                {
                    vehicle = vehicle
                        .with_corrective_task(id.clone(), rng.random_range(50..=*max_km_window));
                }
            }
            for _ in 0..rng.random_range(0..=2) {
                if let Some(MaintenanceType::Preventive { id, optimal_km, .. }) =
                    preventive_types.choose(&mut rng)
                {
                    vehicle = vehicle
                        .with_preventive_task(id.clone(), (*optimal_km - initial_km).max(0));
                }
            }

            dataset = dataset.with_vehicle(vehicle);
        }

        for day in 0..self.planning_days {
            for n in 0..self.routes_per_day {
                dataset = dataset.with_route(Route::new(
                    format!("route_d{}_{}", day, n + 1),
                    day,
                    location_ids.choose(&mut rng).unwrap().clone(),
                    location_ids.choose(&mut rng).unwrap().clone(),
                    rng.random_range(50..=300),
                ));
            }
        }

        dataset
    }
}
