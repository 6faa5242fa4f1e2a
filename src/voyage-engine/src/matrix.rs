use chrono::{DateTime, Utc};
use schedule_core::{
    EventType, LegTieBreak, ServiceCatalog, ServiceName, UnLocode, Vessel, VesselCall,
    VoyageNumber,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{CellTime, DelayInfo, ResolvedVoyage, delay_for_display};

/// ETA, ETD and delay of one vessel at one port.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleCell {
    pub port: UnLocode,
    pub eta: CellTime,
    pub etd: CellTime,
    /// The larger of the arrival and the departure delay.
    pub delay: DelayInfo,
}

/// All cells of one vessel, in column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatrixRow {
    pub load_cells: Vec<ScheduleCell>,
    pub discharge_cells: Vec<ScheduleCell>,
}

impl ScheduleCell {
    pub fn empty(port: &UnLocode) -> Self {
        Self {
            port: port.clone(),
            eta: CellTime::no_data(),
            etd: CellTime::no_data(),
            delay: DelayInfo::not_delayed(),
        }
    }

    pub fn from_call(port: &UnLocode, call: Option<&VesselCall>, now: DateTime<Utc>) -> Self {
        let Some(call) = call else {
            return Self::empty(port);
        };

        let arrival = delay_for_display(call, EventType::Arrival, now);
        let departure = delay_for_display(call, EventType::Departure, now);

        Self {
            port: port.clone(),
            eta: CellTime::from_event(call.current_event(EventType::Arrival)),
            etd: CellTime::from_event(call.current_event(EventType::Departure)),
            delay: if departure.hours > arrival.hours {
                departure
            } else {
                arrival
            },
        }
    }
}

impl MatrixRow {
    pub fn cells(&self) -> impl Iterator<Item = &ScheduleCell> {
        self.load_cells.iter().chain(self.discharge_cells.iter())
    }

    pub fn has_delay(&self) -> bool {
        self.cells().any(|c| c.delay.is_delayed)
    }
}

/// The call at a discharge port arriving with `service` on `voyage`.
pub fn discharge_call<'a>(
    vessel: &'a Vessel,
    service: &ServiceName,
    voyage: &VoyageNumber,
    port: &UnLocode,
) -> Option<&'a VesselCall> {
    vessel
        .calls
        .iter()
        .find(|c| c.port() == port && c.inbound_voyage(service) == Some(voyage))
}

/// The call at a load port departing with `service` on `voyage`.
pub fn load_call<'a>(
    vessel: &'a Vessel,
    service: &ServiceName,
    voyage: &VoyageNumber,
    port: &UnLocode,
) -> Option<&'a VesselCall> {
    vessel
        .calls
        .iter()
        .find(|c| c.port() == port && c.outbound_voyage(service) == Some(voyage))
}

/// The load port call departing with `service` strictly before `arrival`, whatever its voyage
/// number. Equal departures keep the call seen first.
pub fn leg_correlated_call<'a>(
    vessel: &'a Vessel,
    service: &ServiceName,
    port: &UnLocode,
    arrival: DateTime<Utc>,
    tie_break: LegTieBreak,
) -> Option<&'a VesselCall> {
    vessel
        .calls
        .iter()
        .filter(|c| c.port() == port && c.outbound_service_is(service))
        .filter_map(|c| {
            c.current_departure()
                .filter(|departure| *departure < arrival)
                .map(|departure| (c, departure))
        })
        .fold(None, |best: Option<(&VesselCall, DateTime<Utc>)>, (call, departure)| {
            match (best, tie_break) {
                (Some(b), LegTieBreak::LatestBeforeArrival) if b.1 >= departure => Some(b),
                (Some(b), LegTieBreak::EarliestBeforeArrival) if b.1 <= departure => Some(b),
                _ => Some((call, departure)),
            }
        })
        .map(|(call, _)| call)
}

/// Locates the call supplying a load port cell.
pub fn locate_load_call<'a>(
    vessel: &'a Vessel,
    service: &ServiceName,
    resolved: &ResolvedVoyage,
    port: &UnLocode,
    catalog: &ServiceCatalog,
) -> Option<&'a VesselCall> {
    if catalog.is_leg_correlated(service, port) {
        let call = resolved.earliest_arrival().and_then(|arrival| {
            leg_correlated_call(vessel, service, port, arrival, catalog.leg_tie_break)
        });
        if call.is_none() {
            debug!(
                vessel = %vessel.name,
                %port,
                voyage = %resolved.voyage,
                "no departure found before discharge arrival"
            );
        }
        return call;
    }

    load_call(vessel, service, &resolved.voyage, port).or_else(|| {
        // Voyages of leg correlated services may reuse the inbound number at later load ports.
        if catalog.uses_leg_correlation(service) {
            vessel
                .calls
                .iter()
                .find(|c| c.port() == port && c.inbound_voyage(service) == Some(&resolved.voyage))
        } else {
            None
        }
    })
}

pub fn build_matrix_row(
    vessel: &Vessel,
    service: &ServiceName,
    resolved: &ResolvedVoyage,
    load_ports: &[UnLocode],
    catalog: &ServiceCatalog,
    now: DateTime<Utc>,
) -> MatrixRow {
    let load_cells = load_ports
        .iter()
        .map(|port| {
            let call = locate_load_call(vessel, service, resolved, port, catalog);
            ScheduleCell::from_call(port, call, now)
        })
        .collect();

    let discharge_cells = catalog
        .discharge_ports(service)
        .iter()
        .map(|port| {
            let call = discharge_call(vessel, service, &resolved.voyage, port);
            ScheduleCell::from_call(port, call, now)
        })
        .collect();

    MatrixRow {
        load_cells,
        discharge_cells,
    }
}
