use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_with::{DefaultOnNull, serde_as};

use crate::deserialize_utils::opt_flexible_timestamp;

/// Response of the `port-calls` endpoint.
#[serde_as]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortCallsResponse {
    #[serde(default)]
    #[serde_as(as = "DefaultOnNull")]
    pub port_calls: Vec<PortCall>,
}

#[serde_as]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortCall {
    #[serde(default)]
    #[serde_as(as = "DefaultOnNull")]
    pub facility_calls: Vec<FacilityCall>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacilityCall {
    pub transport: Option<FacilityTransport>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacilityTransport {
    pub vessel: Option<CarrierVessel>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarrierVessel {
    #[serde(rename = "vesselIMONumber")]
    pub vessel_imo_number: Option<String>,
    pub vessel_name: Option<String>,
}

/// Response of the `vessel-schedules` endpoint.
#[serde_as]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VesselScheduleResponse {
    pub vessel: Option<CarrierVessel>,
    #[serde(default)]
    #[serde_as(as = "DefaultOnNull")]
    pub vessel_calls: Vec<CarrierVesselCall>,
}

#[serde_as]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarrierVesselCall {
    pub facility: Option<CarrierFacility>,
    pub transport: Option<CallTransport>,
    #[serde(default)]
    #[serde_as(as = "DefaultOnNull")]
    pub call_schedules: Vec<CallSchedule>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarrierFacility {
    #[serde(rename = "UNLocationCode")]
    pub un_location_code: Option<String>,
    pub port_name: Option<String>,
    pub city_name: Option<String>,
    pub country_code: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallTransport {
    pub inbound_service: Option<CarrierService>,
    pub outbound_service: Option<CarrierService>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarrierService {
    pub carrier_service_name: Option<String>,
    pub carrier_service_code: Option<String>,
    pub carrier_voyage_number: Option<String>,
}

/// Codes are kept raw, unknown codes are dropped during conversion.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallSchedule {
    pub transport_event_type_code: Option<String>,
    pub event_classifier_code: Option<String>,
    #[serde(default, deserialize_with = "opt_flexible_timestamp")]
    pub classifier_date_time: Option<DateTime<Utc>>,
}
