use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Vessel;

/// The latest pull from the carrier, the only unit that is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleSnapshot {
    pub fetched_at: DateTime<Utc>,
    #[serde(default)]
    pub vessels: Vec<Vessel>,
    #[serde(default)]
    pub summary: SnapshotSummary,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotSummary {
    pub total_vessels: usize,
    /// Port cities the vessels were discovered at.
    pub ports: Vec<String>,
}

impl ScheduleSnapshot {
    pub fn new(fetched_at: DateTime<Utc>, vessels: Vec<Vessel>, ports: Vec<String>) -> Self {
        Self {
            fetched_at,
            summary: SnapshotSummary {
                total_vessels: vessels.len(),
                ports,
            },
            vessels,
        }
    }

    pub fn empty(fetched_at: DateTime<Utc>) -> Self {
        Self::new(fetched_at, Vec::new(), Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.vessels.is_empty()
    }

    pub fn vessel_count(&self) -> usize {
        self.vessels.len()
    }
}
