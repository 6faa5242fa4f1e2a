use serde::Deserialize;
use std::time::Duration;

/// Connection and discovery settings of the carrier schedule API.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CarrierSettings {
    pub base_url: String,
    pub api_key: String,
    pub carrier_code: String,
    /// Schedules are requested from this many days back.
    pub start_offset_days: u32,
    /// ISO 8601 duration of the requested window, e.g. `P17W`.
    pub date_range: String,
    /// Cities polled for port calls when discovering vessels.
    pub port_cities: Vec<PortCity>,
    #[serde(with = "humantime_serde")]
    pub port_call_delay: Duration,
    #[serde(with = "humantime_serde")]
    pub vessel_delay: Duration,
    #[serde(with = "humantime_serde")]
    pub cache_ttl: Duration,
    pub max_retries: u32,
    #[serde(with = "humantime_serde")]
    pub timeout: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortCity {
    pub city_name: String,
    pub country_code: String,
}

impl PortCity {
    pub fn new(city_name: impl Into<String>, country_code: impl Into<String>) -> Self {
        Self {
            city_name: city_name.into(),
            country_code: country_code.into(),
        }
    }
}

impl Default for CarrierSettings {
    fn default() -> Self {
        Self {
            base_url: "https://api.maersk.com/schedules".into(),
            api_key: String::new(),
            carrier_code: "MAEU".into(),
            start_offset_days: 60,
            date_range: "P17W".into(),
            port_cities: ["Cape Town", "Durban", "Port Elizabeth", "Port Coega"]
                .into_iter()
                .map(|city| PortCity::new(city, "ZA"))
                .collect(),
            port_call_delay: Duration::from_millis(200),
            vessel_delay: Duration::from_millis(500),
            cache_ttl: Duration::from_secs(5 * 60),
            max_retries: 2,
            timeout: Duration::from_secs(60),
        }
    }
}
