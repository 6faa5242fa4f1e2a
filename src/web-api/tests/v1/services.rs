use reqwest::{Method, StatusCode, header};
use voyage_engine::{ServiceSchedule, ServiceTab};
use web_api::error::ErrorDiscriminants;

use super::{helper::*, test_client::ApiClient};

#[tokio::test]
async fn test_services_lists_tabs_of_stored_snapshot() {
    let helper = TestHelper::with_stored(snapshot()).await;

    let tabs: Vec<ServiceTab> = helper.app.get("services").await.unwrap();

    assert_eq!(tabs.len(), 1);
    assert_eq!(tabs[0].name, "SAECS");
    assert_eq!(tabs[0].vessel_count, 2);
    assert_eq!(helper.source.fetch_count(), 0);
}

#[tokio::test]
async fn test_missing_snapshot_is_fetched_once_and_persisted() {
    let helper = TestHelper::with_source(snapshot()).await;

    let _: Vec<ServiceTab> = helper.app.get("services").await.unwrap();
    let _: Vec<ServiceTab> = helper.app.get("services").await.unwrap();

    assert_eq!(helper.source.fetch_count(), 1);
    assert_eq!(helper.store.current(), Some(snapshot()));
}

#[tokio::test]
async fn test_service_schedule_resolves_vessels() {
    let helper = TestHelper::with_stored(snapshot()).await;

    let schedule: ServiceSchedule = helper
        .app
        .get(&ApiClient::service_schedule_path("SAECS", false))
        .await
        .unwrap();

    assert_eq!(schedule.total, 2);
    assert!(schedule.extended.is_empty());
    let voyages: Vec<_> = schedule.primary.iter().map(|v| v.voyage.to_string()).collect();
    assert_eq!(voyages, vec!["201E", "203E"]);
    assert_eq!(schedule.load_ports[0].code.to_string(), "GBLGP");
    assert_eq!(schedule.discharge_ports.len(), 4);
}

#[tokio::test]
async fn test_delayed_only_filters_on_time_vessels() {
    let helper = TestHelper::with_stored(snapshot()).await;

    let schedule: ServiceSchedule = helper
        .app
        .get(&ApiClient::service_schedule_path("SAECS", true))
        .await
        .unwrap();

    assert!(schedule.delayed_only);
    assert_eq!(schedule.total, 0);
}

#[tokio::test]
async fn test_unknown_service_is_an_empty_schedule() {
    let helper = TestHelper::with_stored(snapshot()).await;

    let schedule: ServiceSchedule = helper
        .app
        .get(&ApiClient::service_schedule_path("SAFARI I SERVICE", false))
        .await
        .unwrap();

    assert_eq!(schedule.service.to_string(), "SAFARI I SERVICE");
    assert!(schedule.is_empty());
}

#[tokio::test]
async fn test_blank_service_is_a_bad_request() {
    let helper = TestHelper::with_stored(snapshot()).await;

    let error = helper
        .app
        .get::<ServiceSchedule>(&ApiClient::service_schedule_path("%20", false))
        .await
        .unwrap_err();

    assert_eq!(error.status, StatusCode::BAD_REQUEST);
    assert_eq!(error.error, ErrorDiscriminants::InvalidService);
    assert_eq!(error.description, "An invalid service name was provided");
}

#[tokio::test]
async fn test_unavailable_source_without_stored_snapshot() {
    let helper = TestHelper::new().await;

    let error = helper
        .app
        .get::<ServiceSchedule>(&ApiClient::service_schedule_path("SAECS", false))
        .await
        .unwrap_err();

    assert_eq!(error.status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(error.error, ErrorDiscriminants::SourceUnavailable);
}

#[tokio::test]
async fn test_schedule_csv_is_an_attachment() {
    let helper = TestHelper::with_stored(snapshot()).await;

    let response = helper
        .app
        .do_request(
            "services/SAECS/schedule.csv?delayedOnly=false",
            Method::GET,
            None::<&()>,
        )
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let headers = response.headers();
    assert!(
        headers[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/csv")
    );
    assert!(
        headers[header::CONTENT_DISPOSITION]
            .to_str()
            .unwrap()
            .contains("sa-import-schedule-saecs-2025-02-01.csv")
    );

    let body = response.text().await.unwrap();
    let mut lines = body.lines();
    assert!(lines.next().unwrap().starts_with("Vessel Name,IMO,Service,Voyage"));
    // Two vessels with four load and four discharge columns each.
    assert_eq!(lines.count(), 16);
}
