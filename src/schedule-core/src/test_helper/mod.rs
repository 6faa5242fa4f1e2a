use crate::*;
use chrono::{DateTime, Utc};

mod memory;

pub use memory::*;

/// Parses an RFC 3339 timestamp, panics on malformed input.
pub fn ts(value: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(value)
        .unwrap_or_else(|e| panic!("invalid test timestamp {value}: {e}"))
        .with_timezone(&Utc)
}

pub fn service(name: &str) -> ServiceName {
    ServiceName::new(name).unwrap()
}

pub struct VesselBuilder {
    vessel: Vessel,
}

pub struct CallBuilder {
    call: VesselCall,
}

impl VesselBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            vessel: Vessel {
                name: name.to_string(),
                imo: None,
                discovered_at: Vec::new(),
                calls: Vec::new(),
            },
        }
    }

    pub fn imo(mut self, imo: &str) -> Self {
        self.vessel.imo = Imo::new(imo);
        self
    }

    pub fn discovered_at(mut self, city: &str) -> Self {
        self.vessel.discovered_at.push(city.to_string());
        self
    }

    pub fn call(mut self, call: CallBuilder) -> Self {
        self.vessel.calls.push(call.build());
        self
    }

    pub fn build(self) -> Vessel {
        self.vessel
    }
}

impl CallBuilder {
    pub fn new(port: &str) -> Self {
        Self {
            call: VesselCall {
                facility: Facility {
                    code: UnLocode::new(port),
                    name: None,
                    country_code: Some(port.chars().take(2).collect()),
                },
                inbound: None,
                outbound: None,
                events: Vec::new(),
            },
        }
    }

    pub fn inbound(mut self, service: &str, voyage: &str) -> Self {
        self.call.inbound = Some(leg(service, voyage));
        self
    }

    pub fn outbound(mut self, service: &str, voyage: &str) -> Self {
        self.call.outbound = Some(leg(service, voyage));
        self
    }

    pub fn event(
        mut self,
        event_type: EventType,
        classifier: EventClassifier,
        timestamp: DateTime<Utc>,
    ) -> Self {
        self.call.events.push(CallEvent {
            event_type,
            classifier,
            timestamp,
        });
        self
    }

    pub fn arrival(self, classifier: EventClassifier, timestamp: &str) -> Self {
        self.event(EventType::Arrival, classifier, ts(timestamp))
    }

    pub fn departure(self, classifier: EventClassifier, timestamp: &str) -> Self {
        self.event(EventType::Departure, classifier, ts(timestamp))
    }

    pub fn build(self) -> VesselCall {
        self.call
    }
}

fn leg(service: &str, voyage: &str) -> ServiceLeg {
    ServiceLeg {
        service_name: service.to_string(),
        service_code: None,
        voyage: VoyageNumber::new(voyage),
    }
}
