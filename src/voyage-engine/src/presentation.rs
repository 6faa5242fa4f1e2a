use chrono::{DateTime, Utc};
use schedule_core::{CallEvent, EventClassifier};
use serde::{Deserialize, Serialize};

/// Rendered instead of a date whenever no event is known.
pub const NO_DATA: &str = "-";
/// Day and abbreviated month, `01 Mar`.
pub const DATE_FORMAT: &str = "%d %b";

/// Display ready date of one ETA or ETD.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellTime {
    pub text: String,
    pub timestamp: Option<DateTime<Utc>>,
    pub classifier: Option<EventClassifier>,
    pub is_estimate: bool,
    pub is_actual: bool,
}

impl CellTime {
    pub fn no_data() -> Self {
        Self {
            text: NO_DATA.to_string(),
            timestamp: None,
            classifier: None,
            is_estimate: false,
            is_actual: false,
        }
    }

    pub fn from_event(event: Option<&CallEvent>) -> Self {
        match event {
            Some(e) => Self {
                text: format_date(e.timestamp),
                timestamp: Some(e.timestamp),
                classifier: Some(e.classifier),
                is_estimate: e.classifier != EventClassifier::Actual,
                is_actual: e.classifier == EventClassifier::Actual,
            },
            None => Self::no_data(),
        }
    }

    pub fn has_data(&self) -> bool {
        self.timestamp.is_some()
    }

    /// Classifier code of the shown event, empty without data.
    pub fn status(&self) -> &str {
        self.classifier.as_ref().map(|c| c.as_ref()).unwrap_or("")
    }
}

pub fn format_date(timestamp: DateTime<Utc>) -> String {
    timestamp.format(DATE_FORMAT).to_string()
}
