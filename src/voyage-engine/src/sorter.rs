use chrono::{DateTime, Utc};
use schedule_core::{ServiceCatalog, ServiceName, SortStrategy, UnLocode, Vessel};
use std::cmp::Ordering;

use crate::{ResolveOptions, ResolvedVoyage, load_call, resolve_voyage};

/// Primary display window.
pub const VESSELS_PER_GRID: usize = 5;
/// Vessels past this position are dropped.
pub const MAX_TOTAL_VESSELS: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortKey {
    Departure(DateTime<Utc>),
    Voyage(u64),
}

/// Display order key of a vessel. `None` sorts last.
pub fn sort_key(
    vessel: &Vessel,
    service: &ServiceName,
    display: &ResolvedVoyage,
    load_ports: &[UnLocode],
    catalog: &ServiceCatalog,
    now: DateTime<Utc>,
) -> Option<SortKey> {
    match catalog.sort_strategy(service) {
        SortStrategy::VoyageNumber => {
            let options = ResolveOptions {
                voyage_suffix: catalog.sort_voyage_suffix(service),
            };
            resolve_voyage(vessel, service, catalog, now, options)
                .map(|r| SortKey::Voyage(r.voyage.numeric_part().unwrap_or(0)))
        }
        SortStrategy::FirstLoadPortDeparture => load_ports
            .iter()
            .find_map(|port| {
                load_call(vessel, service, &display.voyage, port)
                    .and_then(|c| c.current_departure())
            })
            .map(SortKey::Departure),
    }
}

/// Keyed vessels first in key order, then the rest. Equal keys fall back to the name.
pub fn compare_vessels(a: (Option<SortKey>, &str), b: (Option<SortKey>, &str)) -> Ordering {
    match (a.0, b.0) {
        (Some(x), Some(y)) => x.cmp(&y).then_with(|| a.1.cmp(b.1)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.1.cmp(b.1),
    }
}

/// Splits the sorted list into the primary and extended windows, dropping the rest.
pub fn split_windows<T>(mut sorted: Vec<T>) -> (Vec<T>, Vec<T>) {
    sorted.truncate(MAX_TOTAL_VESSELS);
    let extended = sorted.split_off(sorted.len().min(VESSELS_PER_GRID));
    (sorted, extended)
}
