//! Input validation for planning datasets.
//!
//! Checks structural integrity of a dataset before any model
//! construction. Detects:
//! - Duplicate IDs (vehicles, routes, maintenance types)
//! - Unresolved location and maintenance-type references
//! - Specialized maintenance types with no capable depot
//! - Fewer than two depots (no non-trivial route network)
//! - Night-shift routes and routes outside the planning horizon
//! - Nonsensical quantities (capacity < 1, negative kilometers/manhours)
//!
//! All detected issues are collected and returned together so a data
//! provider can fix its output in one pass.

use std::collections::HashSet;

use crate::models::{Dataset, MaintenanceType, ShiftKind};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// A vehicle or route references a location that doesn't exist.
    UnknownLocation,
    /// A pending task references a maintenance type that doesn't exist.
    UnknownMaintenanceType,
    /// A specialized maintenance type has no depot able to perform it.
    NoCapableDepot,
    /// Fewer than two depots in the dataset.
    TooFewDepots,
    /// A route is placed on a night shift.
    NightRoute,
    /// A route's day falls outside the planning horizon.
    DayOutOfRange,
    /// A capacity, distance, kilometer reading, or manhour figure is
    /// outside its allowed range.
    InvalidQuantity,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a dataset against the input contract.
///
/// `planning_days` is the horizon the caller intends to solve over;
/// routes must fall within it.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_dataset(dataset: &Dataset, planning_days: i32) -> ValidationResult {
    let mut errors = Vec::new();

    // Location sanity
    for (id, location) in &dataset.locations {
        if location.capacity() < 1 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidQuantity,
                format!("Location '{}' has capacity {}", id, location.capacity()),
            ));
        }
        if let Some(mh) = location.manhours_per_shift() {
            if mh < 0 {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidQuantity,
                    format!("Depot '{id}' has negative manhours_per_shift {mh}"),
                ));
            }
        }
    }

    let depot_count = dataset.locations.values().filter(|l| l.is_depot()).count();
    if depot_count < 2 {
        errors.push(ValidationError::new(
            ValidationErrorKind::TooFewDepots,
            format!("Dataset has {depot_count} depot(s); at least two are required"),
        ));
    }

    // Maintenance type catalog
    let mut type_ids = HashSet::new();
    for m in &dataset.maintenance_types {
        if !type_ids.insert(m.id()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate maintenance type ID: {}", m.id()),
            ));
        }
        if m.manhours() < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidQuantity,
                format!("Maintenance type '{}' has negative manhours", m.id()),
            ));
        }
        if let MaintenanceType::Preventive {
            id,
            optimal_km,
            max_km,
            ..
        } = m
        {
            if optimal_km > max_km {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidQuantity,
                    format!(
                        "Preventive type '{id}' has optimal_km {optimal_km} > max_km {max_km}"
                    ),
                ));
            }
        }
        if let Some(spec) = m.specialization() {
            let capable = dataset
                .locations
                .values()
                .any(|l| l.supports_maintenance(Some(spec)));
            if !capable {
                errors.push(ValidationError::new(
                    ValidationErrorKind::NoCapableDepot,
                    format!(
                        "Maintenance type '{}' requires specialization '{}' but no depot provides it",
                        m.id(),
                        spec
                    ),
                ));
            }
        }
    }

    // Vehicles
    let mut vehicle_ids = HashSet::new();
    for vehicle in &dataset.vehicles {
        if !vehicle_ids.insert(vehicle.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate vehicle ID: {}", vehicle.id),
            ));
        }
        if vehicle.initial_km < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidQuantity,
                format!(
                    "Vehicle '{}' has negative initial_km {}",
                    vehicle.id, vehicle.initial_km
                ),
            ));
        }
        if !dataset.locations.contains_key(&vehicle.initial_location) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownLocation,
                format!(
                    "Vehicle '{}' starts at unknown location '{}'",
                    vehicle.id, vehicle.initial_location
                ),
            ));
        }
        for task in vehicle
            .pending_corrective_tasks
            .iter()
            .chain(&vehicle.pending_preventive_tasks)
        {
            if !type_ids.contains(task.maintenance_type_id.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownMaintenanceType,
                    format!(
                        "Vehicle '{}' has a pending task for unknown maintenance type '{}'",
                        vehicle.id, task.maintenance_type_id
                    ),
                ));
            }
        }
    }

    // Routes
    let mut route_ids = HashSet::new();
    for route in &dataset.routes {
        if !route_ids.insert(route.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate route ID: {}", route.id),
            ));
        }
        if route.shift != ShiftKind::Day {
            errors.push(ValidationError::new(
                ValidationErrorKind::NightRoute,
                format!("Route '{}' is placed on a night shift", route.id),
            ));
        }
        if route.day < 0 || route.day >= planning_days {
            errors.push(ValidationError::new(
                ValidationErrorKind::DayOutOfRange,
                format!(
                    "Route '{}' runs on day {} outside horizon [0, {})",
                    route.id, route.day, planning_days
                ),
            ));
        }
        if route.distance_km < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidQuantity,
                format!("Route '{}' has negative distance", route.id),
            ));
        }
        for loc in [&route.start_location, &route.end_location] {
            if !dataset.locations.contains_key(loc) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownLocation,
                    format!("Route '{}' references unknown location '{}'", route.id, loc),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Location, Route, Vehicle};

    fn sample_dataset() -> Dataset {
        Dataset::new()
            .with_location("depot_1", Location::depot(10, 40))
            .with_location(
                "depot_2",
                Location::depot(10, 60).with_specializations(vec!["electrical".into()]),
            )
            .with_location("parking_1", Location::parking(15))
            .with_maintenance_type(MaintenanceType::preventive("p1", 10_000, 11_000, 8))
            .with_maintenance_type(
                MaintenanceType::corrective("c1", 500, 4).with_specialization("electrical"),
            )
            .with_vehicle(Vehicle::new("v1", "depot_1", 9_000).with_corrective_task("c1", 300))
            .with_route(Route::new("r1", 0, "depot_1", "depot_2", 120))
    }

    #[test]
    fn test_valid_dataset() {
        assert!(validate_dataset(&sample_dataset(), 14).is_ok());
    }

    #[test]
    fn test_unknown_initial_location() {
        let ds = sample_dataset().with_vehicle(Vehicle::new("v2", "nowhere", 0));
        let errors = validate_dataset(&ds, 14).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::UnknownLocation));
    }

    #[test]
    fn test_unknown_maintenance_type() {
        let ds =
            sample_dataset().with_vehicle(Vehicle::new("v2", "depot_1", 0).with_preventive_task("ghost", 100));
        let errors = validate_dataset(&ds, 14).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::UnknownMaintenanceType));
    }

    #[test]
    fn test_no_capable_depot() {
        let ds = sample_dataset()
            .with_maintenance_type(MaintenanceType::corrective("c2", 400, 4).with_specialization("hydraulic"));
        let errors = validate_dataset(&ds, 14).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NoCapableDepot));
    }

    #[test]
    fn test_too_few_depots() {
        let ds = Dataset::new()
            .with_location("depot_1", Location::depot(10, 40))
            .with_location("parking_1", Location::parking(5));
        let errors = validate_dataset(&ds, 14).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::TooFewDepots));
    }

    #[test]
    fn test_route_day_out_of_range() {
        let ds = sample_dataset().with_route(Route::new("r2", 14, "depot_1", "depot_2", 50));
        let errors = validate_dataset(&ds, 14).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DayOutOfRange));
    }

    #[test]
    fn test_night_route_rejected() {
        let mut route = Route::new("r2", 1, "depot_1", "depot_2", 50);
        route.shift = ShiftKind::Night;
        let ds = sample_dataset().with_route(route);
        let errors = validate_dataset(&ds, 14).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NightRoute));
    }

    #[test]
    fn test_duplicate_ids() {
        let ds = sample_dataset()
            .with_vehicle(Vehicle::new("v1", "depot_1", 0))
            .with_route(Route::new("r1", 1, "depot_2", "depot_1", 80))
            .with_maintenance_type(MaintenanceType::corrective("c1", 300, 2));
        let errors = validate_dataset(&ds, 14).unwrap_err();
        let duplicates = errors
            .iter()
            .filter(|e| e.kind == ValidationErrorKind::DuplicateId)
            .count();
        assert_eq!(duplicates, 3);
    }

    #[test]
    fn test_invalid_quantities() {
        let ds = sample_dataset()
            .with_location("parking_2", Location::parking(0))
            .with_maintenance_type(MaintenanceType::preventive("p2", 12_000, 11_000, 8))
            .with_route(Route::new("r2", 1, "depot_1", "depot_2", -5));
        let errors = validate_dataset(&ds, 14).unwrap_err();
        let bad = errors
            .iter()
            .filter(|e| e.kind == ValidationErrorKind::InvalidQuantity)
            .count();
        assert_eq!(bad, 3);
    }

    #[test]
    fn test_multiple_errors_collected() {
        let ds = Dataset::new()
            .with_location("depot_1", Location::depot(10, 40))
            .with_vehicle(Vehicle::new("v1", "nowhere", 0))
            .with_route(Route::new("r1", 20, "depot_1", "ghost", 50));
        let errors = validate_dataset(&ds, 14).unwrap_err();
        assert!(errors.len() >= 3);
    }
}
