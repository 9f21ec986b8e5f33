//! Vehicle model.
//!
//! The fleet is homogeneous: vehicles differ only in where they start,
//! how many kilometers they have accumulated, and which maintenance
//! obligations are pending against them.

use serde::{Deserialize, Serialize};

/// A rail vehicle with its initial state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    /// Unique vehicle identifier.
    pub id: String,
    /// Location at the start of shift 0.
    pub initial_location: String,
    /// Odometer reading at the start of shift 0.
    pub initial_km: i64,
    /// Recorded defects awaiting corrective maintenance.
    #[serde(default)]
    pub pending_corrective_tasks: Vec<PendingTask>,
    /// Preventive maintenance coming due.
    #[serde(default)]
    pub pending_preventive_tasks: Vec<PendingTask>,
}

/// A maintenance obligation pending against one vehicle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingTask {
    /// References an entry in the maintenance type catalog.
    pub maintenance_type_id: String,
    /// Kilometers the vehicle may still run before the task is overdue,
    /// counted from its initial odometer reading.
    pub remaining_km: i64,
}

impl Vehicle {
    /// Creates a vehicle with no pending tasks.
    pub fn new(id: impl Into<String>, initial_location: impl Into<String>, initial_km: i64) -> Self {
        Self {
            id: id.into(),
            initial_location: initial_location.into(),
            initial_km,
            pending_corrective_tasks: Vec::new(),
            pending_preventive_tasks: Vec::new(),
        }
    }

    /// Adds a pending corrective task.
    pub fn with_corrective_task(mut self, type_id: impl Into<String>, remaining_km: i64) -> Self {
        self.pending_corrective_tasks
            .push(PendingTask::new(type_id, remaining_km));
        self
    }

    /// Adds a pending preventive task.
    pub fn with_preventive_task(mut self, type_id: impl Into<String>, remaining_km: i64) -> Self {
        self.pending_preventive_tasks
            .push(PendingTask::new(type_id, remaining_km));
        self
    }

    /// Total number of pending tasks of both kinds.
    pub fn pending_task_count(&self) -> usize {
        self.pending_corrective_tasks.len() + self.pending_preventive_tasks.len()
    }
}

impl PendingTask {
    pub fn new(maintenance_type_id: impl Into<String>, remaining_km: i64) -> Self {
        Self {
            maintenance_type_id: maintenance_type_id.into(),
            remaining_km,
        }
    }
}
