use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

use crate::{ServiceName, UnLocode, VoyageNumber};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
pub enum EventType {
    #[serde(rename = "ARRI")]
    #[strum(serialize = "ARRI")]
    Arrival,
    /// Some feeds report departures as `DEPT`.
    #[serde(rename = "DEPA", alias = "DEPT")]
    #[strum(to_string = "DEPA", serialize = "DEPT")]
    Departure,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
pub enum EventClassifier {
    #[serde(rename = "EST")]
    #[strum(serialize = "EST")]
    Estimated,
    #[serde(rename = "PLN")]
    #[strum(serialize = "PLN")]
    Planned,
    #[serde(rename = "ACT")]
    #[strum(serialize = "ACT")]
    Actual,
}

/// One timestamped milestone of a call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallEvent {
    pub event_type: EventType,
    pub classifier: EventClassifier,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Facility {
    pub code: UnLocode,
    pub name: Option<String>,
    pub country_code: Option<String>,
}

/// The service a vessel arrives or departs with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceLeg {
    pub service_name: String,
    pub service_code: Option<String>,
    pub voyage: Option<VoyageNumber>,
}

/// One stop of a vessel at one facility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VesselCall {
    pub facility: Facility,
    pub inbound: Option<ServiceLeg>,
    pub outbound: Option<ServiceLeg>,
    #[serde(default)]
    pub events: Vec<CallEvent>,
}

impl EventClassifier {
    /// Rank used when picking the event to display, actuals supersede estimates which
    /// supersede plans.
    fn display_rank(&self) -> u8 {
        match self {
            EventClassifier::Actual => 2,
            EventClassifier::Estimated => 1,
            EventClassifier::Planned => 0,
        }
    }
}

impl ServiceLeg {
    pub fn is_service(&self, service: &ServiceName) -> bool {
        service == self.service_name.as_str()
    }
}

impl VesselCall {
    pub fn port(&self) -> &UnLocode {
        &self.facility.code
    }

    pub fn inbound_service_is(&self, service: &ServiceName) -> bool {
        self.inbound.as_ref().is_some_and(|l| l.is_service(service))
    }

    pub fn outbound_service_is(&self, service: &ServiceName) -> bool {
        self.outbound.as_ref().is_some_and(|l| l.is_service(service))
    }

    pub fn has_service(&self, service: &ServiceName) -> bool {
        self.inbound_service_is(service) || self.outbound_service_is(service)
    }

    /// Inbound voyage of the call when it arrives with `service`.
    pub fn inbound_voyage(&self, service: &ServiceName) -> Option<&VoyageNumber> {
        self.inbound
            .as_ref()
            .filter(|l| l.is_service(service))
            .and_then(|l| l.voyage.as_ref())
    }

    /// Outbound voyage of the call when it departs with `service`.
    pub fn outbound_voyage(&self, service: &ServiceName) -> Option<&VoyageNumber> {
        self.outbound
            .as_ref()
            .filter(|l| l.is_service(service))
            .and_then(|l| l.voyage.as_ref())
    }

    pub fn events_of(&self, event_type: EventType) -> impl Iterator<Item = &CallEvent> {
        self.events.iter().filter(move |e| e.event_type == event_type)
    }

    /// The event shown for `event_type`: the newest actual, else the newest estimate, else
    /// the newest plan. Revisions are compared by timestamp, never by list position.
    pub fn current_event(&self, event_type: EventType) -> Option<&CallEvent> {
        self.events_of(event_type)
            .max_by_key(|e| (e.classifier.display_rank(), e.timestamp))
    }

    pub fn current_arrival(&self) -> Option<DateTime<Utc>> {
        self.current_event(EventType::Arrival).map(|e| e.timestamp)
    }

    pub fn current_departure(&self) -> Option<DateTime<Utc>> {
        self.current_event(EventType::Departure).map(|e| e.timestamp)
    }
}
