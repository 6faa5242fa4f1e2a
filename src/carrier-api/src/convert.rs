use schedule_core::{
    CallEvent, EventClassifier, EventType, Facility, Imo, ServiceLeg, UnLocode, Vessel,
    VesselCall, VoyageNumber,
};
use tracing::debug;

use crate::{CallSchedule, CarrierService, CarrierVesselCall, PortCallsResponse, VesselScheduleResponse};

/// A vessel seen calling one of the polled cities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredVessel {
    pub imo: Imo,
    pub name: String,
    /// Polled cities the vessel was seen at, in polling order.
    pub cities: Vec<String>,
}

/// Collects the vessels of the port call responses, deduplicated by IMO in first seen order.
/// Entries lacking either an IMO or a name are ignored.
pub fn discovered_vessels<'a>(
    responses: impl IntoIterator<Item = (&'a str, &'a PortCallsResponse)>,
) -> Vec<DiscoveredVessel> {
    let mut vessels: Vec<DiscoveredVessel> = Vec::new();

    for (city, response) in responses {
        let seen = response
            .port_calls
            .iter()
            .flat_map(|p| p.facility_calls.iter())
            .filter_map(|f| f.transport.as_ref()?.vessel.as_ref());

        for vessel in seen {
            let (Some(imo), Some(name)) = (
                vessel.vessel_imo_number.as_deref().and_then(Imo::new),
                vessel.vessel_name.as_deref().filter(|n| !n.trim().is_empty()),
            ) else {
                continue;
            };

            match vessels.iter_mut().find(|v| v.imo == imo) {
                Some(existing) => {
                    if !existing.cities.iter().any(|c| c == city) {
                        existing.cities.push(city.to_string());
                    }
                }
                None => vessels.push(DiscoveredVessel {
                    imo,
                    name: name.trim().to_string(),
                    cities: vec![city.to_string()],
                }),
            }
        }
    }

    vessels
}

impl VesselScheduleResponse {
    /// The name reported with the schedule wins over the one seen during discovery.
    pub fn into_vessel(self, discovered: &DiscoveredVessel) -> Vessel {
        let name = self
            .vessel
            .and_then(|v| v.vessel_name)
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| discovered.name.clone());

        Vessel {
            name,
            imo: Some(discovered.imo.clone()),
            discovered_at: discovered.cities.clone(),
            calls: self
                .vessel_calls
                .into_iter()
                .filter_map(CarrierVesselCall::into_call)
                .collect(),
        }
    }
}

impl CarrierVesselCall {
    /// Calls without a location code cannot be placed in the matrix and are dropped.
    pub fn into_call(self) -> Option<VesselCall> {
        let facility = self.facility.unwrap_or_default();
        let code = facility
            .un_location_code
            .as_deref()
            .map(UnLocode::new)
            .filter(|c| !c.is_empty())?;

        let transport = self.transport.unwrap_or_default();

        Some(VesselCall {
            facility: Facility {
                code,
                name: facility.port_name.or(facility.city_name),
                country_code: facility.country_code,
            },
            inbound: transport.inbound_service.and_then(CarrierService::into_leg),
            outbound: transport.outbound_service.and_then(CarrierService::into_leg),
            events: self
                .call_schedules
                .into_iter()
                .filter_map(CallSchedule::into_event)
                .collect(),
        })
    }
}

impl CarrierService {
    pub fn into_leg(self) -> Option<ServiceLeg> {
        let service_name = self
            .carrier_service_name
            .filter(|n| !n.trim().is_empty())?;

        Some(ServiceLeg {
            service_name,
            service_code: self.carrier_service_code,
            voyage: self.carrier_voyage_number.and_then(VoyageNumber::new),
        })
    }
}

impl CallSchedule {
    pub fn into_event(self) -> Option<CallEvent> {
        let event_type = self
            .transport_event_type_code
            .as_deref()
            .and_then(|c| c.trim().parse::<EventType>().ok());
        let classifier = self
            .event_classifier_code
            .as_deref()
            .and_then(|c| c.trim().parse::<EventClassifier>().ok());

        match (event_type, classifier, self.classifier_date_time) {
            (Some(event_type), Some(classifier), Some(timestamp)) => Some(CallEvent {
                event_type,
                classifier,
                timestamp,
            }),
            _ => {
                debug!(
                    event_type = ?self.transport_event_type_code,
                    classifier = ?self.event_classifier_code,
                    "skipping call schedule entry"
                );
                None
            }
        }
    }
}
