use chrono::{DateTime, Utc};
use schedule_core::{CallEvent, EventClassifier, EventType, VesselCall};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};

/// Revisions further apart than this are a delay.
pub const DELAY_THRESHOLD_HOURS: i64 = 6;
/// Delays longer than this are major.
pub const MAJOR_DELAY_HOURS: i64 = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DelaySeverity {
    Minor,
    Major,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DelayInfo {
    pub is_delayed: bool,
    pub hours: i64,
    pub severity: Option<DelaySeverity>,
}

impl DelayInfo {
    pub fn not_delayed() -> Self {
        Self::default()
    }

    fn from_hours(hours: i64) -> Self {
        if hours > DELAY_THRESHOLD_HOURS {
            Self {
                is_delayed: true,
                hours,
                severity: Some(if hours > MAJOR_DELAY_HOURS {
                    DelaySeverity::Major
                } else {
                    DelaySeverity::Minor
                }),
            }
        } else {
            Self::not_delayed()
        }
    }
}

/// Compares the earliest and the latest estimate of `event_type`.
///
/// Fewer than two estimates, or any actual for the event type, is never a delay.
pub fn detect_delay(events: &[CallEvent], event_type: EventType) -> DelayInfo {
    let of_type = || events.iter().filter(move |e| e.event_type == event_type);

    if of_type().any(|e| e.classifier == EventClassifier::Actual) {
        return DelayInfo::not_delayed();
    }

    let mut estimates: Vec<DateTime<Utc>> = of_type()
        .filter(|e| e.classifier == EventClassifier::Estimated)
        .map(|e| e.timestamp)
        .collect();

    if estimates.len() < 2 {
        return DelayInfo::not_delayed();
    }
    estimates.sort();

    let (Some(original), Some(current)) = (estimates.first(), estimates.last()) else {
        return DelayInfo::not_delayed();
    };

    DelayInfo::from_hours(rounded_hours(*current - *original))
}

/// Delay shown in a matrix cell: only future estimates are evaluated.
pub fn delay_for_display(call: &VesselCall, event_type: EventType, now: DateTime<Utc>) -> DelayInfo {
    match call.current_event(event_type) {
        Some(e) if e.classifier != EventClassifier::Actual && e.timestamp > now => {
            detect_delay(&call.events, event_type)
        }
        _ => DelayInfo::not_delayed(),
    }
}

/// Whole hours rounded half up.
fn rounded_hours(delta: chrono::TimeDelta) -> i64 {
    (delta.num_seconds().abs() + 1800) / 3600
}
