use chrono::{DateTime, Utc};
use schedule_core::{ServiceCatalog, ServiceName, UnLocode, Vessel, VoyageNumber};
use serde::Serialize;
use tracing::trace;

#[derive(Debug, Clone, Copy, Default)]
pub struct ResolveOptions<'a> {
    /// Only inbound voyages ending with this suffix are eligible.
    pub voyage_suffix: Option<&'a str>,
}

/// The voyage driving what is displayed for a vessel within one service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedVoyage {
    pub voyage: VoyageNumber,
    /// Discharge port arrivals of the voyage in source order.
    pub arrivals: Vec<DischargeArrival>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DischargeArrival {
    pub port: UnLocode,
    pub arrival: DateTime<Utc>,
}

impl ResolvedVoyage {
    pub fn earliest_arrival(&self) -> Option<DateTime<Utc>> {
        self.arrivals.iter().map(|a| a.arrival).min()
    }
}

impl<'a> ResolveOptions<'a> {
    pub fn with_suffix(suffix: &'a str) -> Self {
        Self {
            voyage_suffix: Some(suffix),
        }
    }

    fn accepts(&self, voyage: &VoyageNumber) -> bool {
        self.voyage_suffix.is_none_or(|s| voyage.ends_with(s))
    }
}

/// Picks the single voyage of `vessel` to display for `service`.
///
/// Among voyages with arrivals after `now` the one with the soonest arrival wins, ties go to
/// the voyage seen first. Without any future arrival the voyage holding the latest past
/// arrival wins. `None` when the vessel never arrives at a discharge port of the service.
pub fn resolve_voyage(
    vessel: &Vessel,
    service: &ServiceName,
    catalog: &ServiceCatalog,
    now: DateTime<Utc>,
    options: ResolveOptions<'_>,
) -> Option<ResolvedVoyage> {
    let groups = discharge_groups(vessel, service, catalog, options);

    let upcoming = groups
        .iter()
        .filter_map(|(voyage, arrivals)| {
            arrivals
                .iter()
                .map(|a| a.arrival)
                .filter(|a| *a > now)
                .min()
                .map(|earliest| (voyage, arrivals, earliest))
        })
        .fold(None, |best: Option<(_, _, DateTime<Utc>)>, candidate| match best {
            Some(b) if b.2 <= candidate.2 => Some(b),
            _ => Some(candidate),
        });

    let chosen = upcoming.map(|(v, a, _)| (v, a)).or_else(|| {
        groups
            .iter()
            .filter_map(|(voyage, arrivals)| {
                arrivals
                    .iter()
                    .map(|a| a.arrival)
                    .filter(|a| *a <= now)
                    .max()
                    .map(|latest| (voyage, arrivals, latest))
            })
            .fold(None, |best: Option<(_, _, DateTime<Utc>)>, candidate| match best {
                Some(b) if b.2 >= candidate.2 => Some(b),
                _ => Some(candidate),
            })
            .map(|(v, a, _)| (v, a))
    });

    let resolved = chosen.map(|(voyage, arrivals)| ResolvedVoyage {
        voyage: voyage.clone(),
        arrivals: arrivals.clone(),
    });

    trace!(
        vessel = %vessel.name,
        %service,
        voyage = ?resolved.as_ref().map(|r| &r.voyage),
        "resolved voyage"
    );

    resolved
}

/// Discharge port arrivals with the service inbound, grouped by voyage in first seen order.
fn discharge_groups(
    vessel: &Vessel,
    service: &ServiceName,
    catalog: &ServiceCatalog,
    options: ResolveOptions<'_>,
) -> Vec<(VoyageNumber, Vec<DischargeArrival>)> {
    let mut groups: Vec<(VoyageNumber, Vec<DischargeArrival>)> = Vec::new();

    for call in &vessel.calls {
        if !catalog.is_discharge_port(service, call.port()) {
            continue;
        }
        let Some(voyage) = call.inbound_voyage(service) else {
            continue;
        };
        if !options.accepts(voyage) {
            continue;
        }
        let Some(arrival) = call.current_arrival() else {
            continue;
        };

        let arrival = DischargeArrival {
            port: call.port().clone(),
            arrival,
        };
        match groups.iter_mut().find(|(v, _)| *v == *voyage) {
            Some((_, arrivals)) => arrivals.push(arrival),
            None => groups.push((voyage.clone(), vec![arrival])),
        }
    }

    groups
}
