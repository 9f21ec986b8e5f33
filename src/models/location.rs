//! Location model.
//!
//! A location is a place where vehicles reside between activities: either
//! a depot (maintenance-capable, with a per-shift manhour budget and a set
//! of maintenance specializations) or a parking (storage only). Capacity
//! is a hard upper bound on simultaneously resident vehicles.

use serde::{Deserialize, Serialize};

/// A place where vehicles can be stationed at the start of a shift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Location {
    /// A maintenance-capable site with workshop labor per shift.
    Depot {
        /// Maximum number of vehicles resident at once.
        capacity: i32,
        /// Workshop labor budget, replenished each shift.
        manhours_per_shift: i64,
        /// Maintenance specializations this depot can handle.
        #[serde(default)]
        specialized_maintenance: Vec<String>,
    },
    /// A storage-only site.
    Parking {
        /// Maximum number of vehicles resident at once.
        capacity: i32,
    },
}

impl Location {
    /// Creates a depot with no specializations.
    pub fn depot(capacity: i32, manhours_per_shift: i64) -> Self {
        Self::Depot {
            capacity,
            manhours_per_shift,
            specialized_maintenance: Vec::new(),
        }
    }

    /// Creates a parking.
    pub fn parking(capacity: i32) -> Self {
        Self::Parking { capacity }
    }

    /// Adds maintenance specializations. No effect on parkings.
    pub fn with_specializations(mut self, specs: Vec<String>) -> Self {
        if let Self::Depot {
            specialized_maintenance,
            ..
        } = &mut self
        {
            *specialized_maintenance = specs;
        }
        self
    }

    /// Maximum number of simultaneously resident vehicles.
    pub fn capacity(&self) -> i32 {
        match self {
            Self::Depot { capacity, .. } | Self::Parking { capacity } => *capacity,
        }
    }

    /// Whether maintenance can be performed here.
    pub fn is_depot(&self) -> bool {
        matches!(self, Self::Depot { .. })
    }

    /// Per-shift labor budget. `None` for parkings.
    pub fn manhours_per_shift(&self) -> Option<i64> {
        match self {
            Self::Depot {
                manhours_per_shift, ..
            } => Some(*manhours_per_shift),
            Self::Parking { .. } => None,
        }
    }

    /// Whether this location can host maintenance requiring `specialization`.
    ///
    /// Unspecialized maintenance (`None`) fits any depot; parkings host
    /// no maintenance at all.
    pub fn supports_maintenance(&self, specialization: Option<&str>) -> bool {
        match self {
            Self::Parking { .. } => false,
            Self::Depot {
                specialized_maintenance,
                ..
            } => match specialization {
                None => true,
                Some(s) => specialized_maintenance.iter().any(|x| x == s),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depot_builder() {
        let d = Location::depot(12, 80).with_specializations(vec!["electrical".into()]);
        assert!(d.is_depot());
        assert_eq!(d.capacity(), 12);
        assert_eq!(d.manhours_per_shift(), Some(80));
        assert!(d.supports_maintenance(None));
        assert!(d.supports_maintenance(Some("electrical")));
        assert!(!d.supports_maintenance(Some("hydraulic")));
    }

    #[test]
    fn test_parking() {
        let p = Location::parking(20);
        assert!(!p.is_depot());
        assert_eq!(p.capacity(), 20);
        assert_eq!(p.manhours_per_shift(), None);
        assert!(!p.supports_maintenance(None));
    }

    #[test]
    fn test_specializations_ignored_on_parking() {
        let p = Location::parking(5).with_specializations(vec!["electrical".into()]);
        assert!(!p.supports_maintenance(Some("electrical")));
    }

    #[test]
    fn test_serde_tagging() {
        let d = Location::depot(10, 40);
        let json = serde_json::to_value(&d).unwrap();
        assert_eq!(json["type"], "depot");
        assert_eq!(json["manhours_per_shift"], 40);

        let p: Location = serde_json::from_str(r#"{"type":"parking","capacity":7}"#).unwrap();
        assert_eq!(p, Location::parking(7));
    }
}
