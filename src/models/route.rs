//! Route model.
//!
//! A route is a predefined revenue service run on one day shift, from a
//! start location to an end location over a fixed distance. Every route
//! in the dataset must be covered by exactly one vehicle.

use serde::{Deserialize, Serialize};

/// Day/night classification of a shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShiftKind {
    Day,
    Night,
}

/// A predefined service run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    /// Unique route identifier.
    pub id: String,
    /// Day within the planning horizon, 0-based.
    pub day: i32,
    /// Shift of the day this route runs in. Only day-shift routes exist.
    pub shift: ShiftKind,
    /// Location the route departs from.
    pub start_location: String,
    /// Location the route arrives at.
    pub end_location: String,
    /// Distance covered, in kilometers.
    pub distance_km: i64,
}

impl Route {
    /// Creates a day-shift route.
    pub fn new(
        id: impl Into<String>,
        day: i32,
        start_location: impl Into<String>,
        end_location: impl Into<String>,
        distance_km: i64,
    ) -> Self {
        Self {
            id: id.into(),
            day,
            shift: ShiftKind::Day,
            start_location: start_location.into(),
            end_location: end_location.into(),
            distance_km,
        }
    }

    /// Global shift index of this route (`2 * day` for day shifts).
    pub fn shift_index(&self) -> i32 {
        self.day * 2
    }
}
