use schedule_core::{ServiceCatalog, ServiceName, UnLocode, Vessel};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, AsRefStr)]
pub enum PortRole {
    Load,
    Discharge,
}

/// One port column of the matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortColumn {
    pub code: UnLocode,
    pub name: String,
    pub role: PortRole,
}

/// Load ports of `service` in rotation order. Services without a curated rotation get the
/// ports inferred from the vessels.
pub fn load_ports(
    service: &ServiceName,
    vessels: &[Vessel],
    catalog: &ServiceCatalog,
) -> Vec<UnLocode> {
    match catalog.load_ports(service) {
        Some(rotation) => rotation.to_vec(),
        None => infer_load_ports(service, vessels, catalog),
    }
}

/// Takes, per vessel, the first non discharge port the service departs from.
pub fn infer_load_ports(
    service: &ServiceName,
    vessels: &[Vessel],
    catalog: &ServiceCatalog,
) -> Vec<UnLocode> {
    let mut ports: Vec<UnLocode> = Vec::new();

    for vessel in vessels {
        let first = vessel
            .calls
            .iter()
            .find(|c| c.outbound_service_is(service) && !catalog.is_discharge_port(service, c.port()));

        if let Some(call) = first {
            if !ports.contains(call.port()) {
                ports.push(call.port().clone());
            }
        }
    }

    ports
}

pub fn port_columns(
    ports: &[UnLocode],
    role: PortRole,
    vessels: &[Vessel],
    catalog: &ServiceCatalog,
) -> Vec<PortColumn> {
    ports
        .iter()
        .map(|code| PortColumn {
            code: code.clone(),
            name: port_name(code, vessels, catalog),
            role,
        })
        .collect()
}

/// Curated name, else the facility name reported by the carrier, else the code.
fn port_name(code: &UnLocode, vessels: &[Vessel], catalog: &ServiceCatalog) -> String {
    catalog
        .port_name(code)
        .map(ToString::to_string)
        .or_else(|| {
            vessels
                .iter()
                .flat_map(|v| v.calls.iter())
                .find(|c| c.port() == code)
                .and_then(|c| c.facility.name.clone())
        })
        .unwrap_or_else(|| code.to_string())
}
