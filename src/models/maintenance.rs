//! Maintenance type catalog.
//!
//! Two kinds of maintenance activity exist:
//!
//! - **Preventive**: scheduled around a per-type optimal kilometer reading,
//!   with a hard `max_km` ceiling. The planning objective minimizes the
//!   deviation of the execution kilometer from `optimal_km`.
//! - **Corrective**: repair of a known defect, due within a kilometer
//!   window counted from when the defect was recorded. The safety-critical
//!   flag is informational at this layer; both variants share the same
//!   hard deadline semantics.

use serde::{Deserialize, Serialize};

/// Classification of a maintenance type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaintenanceKind {
    Preventive,
    Corrective,
}

/// A maintenance activity definition from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MaintenanceType {
    Preventive {
        /// Unique maintenance type identifier.
        id: String,
        /// Kilometer reading at which execution is ideal.
        optimal_km: i64,
        /// Hard ceiling on the execution kilometer reading.
        max_km: i64,
        /// Total labor required.
        manhours: i64,
        /// Required depot specialization, if any.
        specialization: Option<String>,
    },
    Corrective {
        /// Unique maintenance type identifier.
        id: String,
        /// Kilometers a vehicle may still run after the defect is recorded.
        max_km_window: i64,
        /// Total labor required.
        manhours: i64,
        /// Required depot specialization, if any.
        specialization: Option<String>,
        /// Whether the underlying defect is safety-critical.
        safety_critical: bool,
    },
}

impl MaintenanceType {
    /// Creates an unspecialized preventive maintenance type.
    pub fn preventive(id: impl Into<String>, optimal_km: i64, max_km: i64, manhours: i64) -> Self {
        Self::Preventive {
            id: id.into(),
            optimal_km,
            max_km,
            manhours,
            specialization: None,
        }
    }

    /// Creates an unspecialized, non-safety-critical corrective maintenance type.
    pub fn corrective(id: impl Into<String>, max_km_window: i64, manhours: i64) -> Self {
        Self::Corrective {
            id: id.into(),
            max_km_window,
            manhours,
            specialization: None,
            safety_critical: false,
        }
    }

    /// Sets the required depot specialization.
    pub fn with_specialization(mut self, spec: impl Into<String>) -> Self {
        match &mut self {
            Self::Preventive { specialization, .. }
            | Self::Corrective { specialization, .. } => *specialization = Some(spec.into()),
        }
        self
    }

    /// Marks a corrective type as safety-critical. No effect on preventive.
    pub fn with_safety_critical(mut self, flag: bool) -> Self {
        if let Self::Corrective {
            safety_critical, ..
        } = &mut self
        {
            *safety_critical = flag;
        }
        self
    }

    pub fn id(&self) -> &str {
        match self {
            Self::Preventive { id, .. } | Self::Corrective { id, .. } => id,
        }
    }

    pub fn kind(&self) -> MaintenanceKind {
        match self {
            Self::Preventive { .. } => MaintenanceKind::Preventive,
            Self::Corrective { .. } => MaintenanceKind::Corrective,
        }
    }

    pub fn manhours(&self) -> i64 {
        match self {
            Self::Preventive { manhours, .. } | Self::Corrective { manhours, .. } => *manhours,
        }
    }

    pub fn specialization(&self) -> Option<&str> {
        match self {
            Self::Preventive { specialization, .. }
            | Self::Corrective { specialization, .. } => specialization.as_deref(),
        }
    }

    pub fn is_preventive(&self) -> bool {
        self.kind() == MaintenanceKind::Preventive
    }
}
