use chrono::{DateTime, Utc};
use schedule_core::{
    Imo, ScheduleError, ScheduleSnapshot, ServiceCatalog, ServiceName, UnLocode, Vessel,
    VoyageNumber,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    PortColumn, PortRole, ResolveOptions, ScheduleCell, SortKey, build_matrix_row,
    compare_vessels, is_active, load_ports, merge_vessels, port_columns, resolve_voyage,
    sort_key, split_windows,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleOptions {
    /// Keep only vessels with at least one delayed cell.
    #[serde(default)]
    pub delayed_only: bool,
}

/// One displayed vessel with its row of cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VesselSchedule {
    pub name: String,
    pub imo: Option<Imo>,
    pub voyage: VoyageNumber,
    pub load_cells: Vec<ScheduleCell>,
    pub discharge_cells: Vec<ScheduleCell>,
}

/// Everything the presentation layer needs to render one service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceSchedule {
    pub service: ServiceName,
    pub label: String,
    pub delayed_only: bool,
    pub load_ports: Vec<PortColumn>,
    pub discharge_ports: Vec<PortColumn>,
    pub primary: Vec<VesselSchedule>,
    pub extended: Vec<VesselSchedule>,
    /// Number of displayed vessels.
    pub total: usize,
}

struct Candidate {
    key: Option<SortKey>,
    schedule: VesselSchedule,
}

impl ServiceSchedule {
    pub fn vessels(&self) -> impl Iterator<Item = &VesselSchedule> {
        self.primary.iter().chain(self.extended.iter())
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

/// Builds the displayed schedule of `service` from `snapshot` as seen at `now`.
///
/// Only an empty service name fails. A missing snapshot yields an empty schedule.
pub fn build_service_schedule(
    snapshot: Option<&ScheduleSnapshot>,
    service: &str,
    catalog: &ServiceCatalog,
    options: ScheduleOptions,
    now: DateTime<Utc>,
) -> Result<ServiceSchedule, ScheduleError> {
    let service = ServiceName::new(service)?;

    let vessels = snapshot.map(|s| s.vessels.as_slice()).unwrap_or_default();
    let merged: Vec<Vessel> = merge_vessels(vessels)
        .into_iter()
        .filter(|v| !catalog.is_excluded_vessel(&v.name) && v.has_service(&service))
        .collect();

    let load_ports = load_ports(&service, &merged, catalog);

    let mut candidates: Vec<Candidate> = merged
        .iter()
        .filter_map(|vessel| candidate(vessel, &service, &load_ports, catalog, options, now))
        .collect();

    candidates.sort_by(|a, b| {
        compare_vessels(
            (a.key, a.schedule.name.as_str()),
            (b.key, b.schedule.name.as_str()),
        )
    });

    let (primary, extended) =
        split_windows(candidates.into_iter().map(|c| c.schedule).collect());

    debug!(
        %service,
        merged = merged.len(),
        displayed = primary.len() + extended.len(),
        "built service schedule"
    );

    Ok(ServiceSchedule {
        label: catalog.label(&service),
        delayed_only: options.delayed_only,
        load_ports: port_columns(&load_ports, PortRole::Load, &merged, catalog),
        discharge_ports: port_columns(
            catalog.discharge_ports(&service),
            PortRole::Discharge,
            &merged,
            catalog,
        ),
        total: primary.len() + extended.len(),
        primary,
        extended,
        service,
    })
}

fn candidate(
    vessel: &Vessel,
    service: &ServiceName,
    load_ports: &[UnLocode],
    catalog: &ServiceCatalog,
    options: ScheduleOptions,
    now: DateTime<Utc>,
) -> Option<Candidate> {
    let resolved = resolve_voyage(vessel, service, catalog, now, ResolveOptions::default())?;

    if !is_active(vessel, service, catalog, now) {
        return None;
    }

    let row = build_matrix_row(vessel, service, &resolved, load_ports, catalog, now);
    if options.delayed_only && !row.has_delay() {
        return None;
    }

    Some(Candidate {
        key: sort_key(vessel, service, &resolved, load_ports, catalog, now),
        schedule: VesselSchedule {
            name: vessel.name.clone(),
            imo: vessel.imo.clone(),
            voyage: resolved.voyage,
            load_cells: row.load_cells,
            discharge_cells: row.discharge_cells,
        },
    })
}
