use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(30 * 60);

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RefreshSettings {
    #[serde(with = "humantime_serde")]
    pub interval: Duration,
    /// Whether the background loop is started with the server.
    pub enabled: bool,
}

impl Default for RefreshSettings {
    fn default() -> Self {
        Self {
            interval: DEFAULT_REFRESH_INTERVAL,
            enabled: true,
        }
    }
}
