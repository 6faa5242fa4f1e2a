use schedule_core::{Vessel, VesselKey};
use std::collections::HashMap;

/// Combines records sharing an identity key into one vessel per key.
///
/// Output order is the order each key was first seen. Calls are concatenated in encounter
/// order and never deduplicated. Discovery ports are unioned.
pub fn merge_vessels<'a>(vessels: impl IntoIterator<Item = &'a Vessel>) -> Vec<Vessel> {
    let mut merged: Vec<Vessel> = Vec::new();
    let mut index: HashMap<VesselKey, usize> = HashMap::new();

    for vessel in vessels {
        match index.get(&vessel.identity()) {
            Some(&i) => {
                let target = &mut merged[i];
                target.calls.extend(vessel.calls.iter().cloned());
                for city in &vessel.discovered_at {
                    if !target.discovered_at.contains(city) {
                        target.discovered_at.push(city.clone());
                    }
                }
            }
            None => {
                index.insert(vessel.identity(), merged.len());
                merged.push(vessel.clone());
            }
        }
    }

    merged
}
