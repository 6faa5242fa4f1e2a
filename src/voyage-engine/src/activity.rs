use chrono::{DateTime, TimeDelta, Utc};
use schedule_core::{EventType, ServiceCatalog, ServiceName, Vessel};

/// Whether `vessel` is still shown for `service`.
///
/// Active with a future arrival at a discharge port of the service, or when the latest
/// departure from any SA port is within the service's drop-off window. Without any such
/// departure the vessel stays active.
pub fn is_active(
    vessel: &Vessel,
    service: &ServiceName,
    catalog: &ServiceCatalog,
    now: DateTime<Utc>,
) -> bool {
    let upcoming = vessel.calls.iter().any(|c| {
        c.inbound_service_is(service)
            && catalog.is_discharge_port(service, c.port())
            && c.current_arrival().is_some_and(|a| a > now)
    });
    if upcoming {
        return true;
    }

    match last_sa_departure(vessel, catalog) {
        Some(departure) => {
            now - departure <= TimeDelta::days(i64::from(catalog.drop_off_days(service)))
        }
        None => true,
    }
}

/// Latest departure event of any classifier at any SA port, regardless of service.
pub fn last_sa_departure(vessel: &Vessel, catalog: &ServiceCatalog) -> Option<DateTime<Utc>> {
    vessel
        .calls
        .iter()
        .filter(|c| catalog.is_sa_port(c.port()))
        .flat_map(|c| c.events_of(EventType::Departure))
        .map(|e| e.timestamp)
        .max()
}
