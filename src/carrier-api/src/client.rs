use chrono::{NaiveDate, TimeDelta};
use http_client::{
    HeaderMap, HttpClient,
    header::{ACCEPT, HeaderName, HeaderValue},
};
use schedule_core::Imo;
use snafu::ResultExt;
use tracing::instrument;

use crate::{
    CarrierSettings, PortCallsResponse, Result, VesselScheduleResponse,
    error::error::InvalidApiKeySnafu,
};

/// Typed access to the two endpoints of the carrier schedule API.
#[derive(Debug, Clone)]
pub struct CarrierClient {
    http: HttpClient,
    base_url: String,
    carrier_code: String,
    date_range: String,
    start_offset: TimeDelta,
}

impl CarrierClient {
    pub fn new(settings: &CarrierSettings) -> Result<Self> {
        let mut api_key = HeaderValue::from_str(&settings.api_key).context(InvalidApiKeySnafu)?;
        api_key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(HeaderName::from_static("consumer-key"), api_key);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = HttpClient::builder()
            .timeout(settings.timeout)
            .max_retries(settings.max_retries)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            carrier_code: settings.carrier_code.clone(),
            date_range: settings.date_range.clone(),
            start_offset: TimeDelta::days(i64::from(settings.start_offset_days)),
        })
    }

    /// First day of the requested window when asked on `today`.
    pub fn start_date(&self, today: NaiveDate) -> NaiveDate {
        today - self.start_offset
    }

    #[instrument(skip(self))]
    pub async fn port_calls(
        &self,
        city_name: &str,
        country_code: &str,
        today: NaiveDate,
    ) -> Result<PortCallsResponse> {
        let query = [
            ("countryCode", country_code.to_string()),
            ("cityName", city_name.to_string()),
            ("carrierCodes", self.carrier_code.clone()),
            ("startDate", self.start_date(today).to_string()),
            ("dateRange", self.date_range.clone()),
        ];

        Ok(self
            .http
            .get_json(format!("{}/port-calls", self.base_url), &query)
            .await?)
    }

    #[instrument(skip(self, imo), fields(imo = %imo))]
    pub async fn vessel_schedule(
        &self,
        imo: &Imo,
        today: NaiveDate,
    ) -> Result<VesselScheduleResponse> {
        let query = [
            ("vesselIMONumber", imo.to_string()),
            ("carrierCodes", self.carrier_code.clone()),
            ("startDate", self.start_date(today).to_string()),
            ("dateRange", self.date_range.clone()),
        ];

        Ok(self
            .http
            .get_json(format!("{}/vessel-schedules", self.base_url), &query)
            .await?)
    }
}
