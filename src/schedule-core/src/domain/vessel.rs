use serde::{Deserialize, Serialize};

use crate::{Imo, ServiceName, VesselCall};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vessel {
    pub name: String,
    pub imo: Option<Imo>,
    /// Discharge port cities the vessel was discovered at.
    #[serde(default)]
    pub discovered_at: Vec<String>,
    #[serde(default)]
    pub calls: Vec<VesselCall>,
}

/// Identity used when merging duplicate records. The name is a degraded fallback and may
/// collide between vessels.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum VesselKey {
    Imo(Imo),
    Name(String),
}

impl Vessel {
    pub fn identity(&self) -> VesselKey {
        match &self.imo {
            Some(imo) => VesselKey::Imo(imo.clone()),
            None => VesselKey::Name(self.name.clone()),
        }
    }

    /// Whether any call arrives or departs with `service`.
    pub fn has_service(&self, service: &ServiceName) -> bool {
        self.calls.iter().any(|c| c.has_service(service))
    }
}
