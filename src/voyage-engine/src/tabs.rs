use schedule_core::{ScheduleSnapshot, ServiceCatalog};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceTab {
    pub name: String,
    pub label: String,
    pub vessel_count: usize,
    pub sa_arrivals: usize,
}

#[derive(Default)]
struct ServiceStats<'a> {
    vessels: BTreeSet<&'a str>,
    sa_arrivals: usize,
}

/// Services worth a tab: seen inbound at an SA port and not excluded. Priority services come
/// first in configured order, the rest by vessel count.
pub fn service_tabs(snapshot: Option<&ScheduleSnapshot>, catalog: &ServiceCatalog) -> Vec<ServiceTab> {
    let Some(snapshot) = snapshot else {
        return Vec::new();
    };

    let mut stats: HashMap<&str, ServiceStats<'_>> = HashMap::new();
    for vessel in &snapshot.vessels {
        for call in &vessel.calls {
            let Some(inbound) = &call.inbound else {
                continue;
            };
            let entry = stats.entry(inbound.service_name.as_str()).or_default();
            entry.vessels.insert(vessel.name.as_str());
            if catalog.standard_discharge_ports.contains(call.port()) {
                entry.sa_arrivals += 1;
            }
        }
    }

    let mut tabs: Vec<ServiceTab> = stats
        .into_iter()
        .filter(|(name, s)| s.sa_arrivals > 0 && !catalog.is_excluded_service(name))
        .map(|(name, s)| ServiceTab {
            name: name.to_string(),
            label: catalog.label(name),
            vessel_count: s.vessels.len(),
            sa_arrivals: s.sa_arrivals,
        })
        .collect();

    let priority = |name: &str| catalog.priority_services.iter().position(|p| p == name);
    tabs.sort_by(|a, b| match (priority(&a.name), priority(&b.name)) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => b
            .vessel_count
            .cmp(&a.vessel_count)
            .then_with(|| a.name.cmp(&b.name)),
    });

    tabs
}
