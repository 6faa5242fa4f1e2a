use reqwest::{Method, StatusCode};
use schedule_core::test_helper::ts;
use web_api::routes::v1::refresh::RefreshState;

use super::helper::*;

#[tokio::test]
async fn test_status_before_any_refresh() {
    let helper = TestHelper::new().await;

    let state: RefreshState = helper.app.get("refresh").await.unwrap();

    assert!(!state.is_running);
    assert!(!state.is_refreshing);
    assert_eq!(state.last_refresh, None);
    assert_eq!(state.time_until_next_refresh, "Unknown");
}

#[tokio::test]
async fn test_forced_refresh_persists_snapshot() {
    let helper = TestHelper::with_source(snapshot()).await;

    let (status, state): (_, RefreshState) = helper
        .app
        .send("refresh", Method::POST, None::<&()>)
        .await
        .unwrap();

    assert_eq!(status, StatusCode::ACCEPTED);
    assert_eq!(state.last_refresh, Some(ts(NOW)));
    assert_eq!(state.next_refresh, Some(ts("2025-02-01T00:30:00Z")));
    assert_eq!(state.time_until_next_refresh, "30m");
    assert_eq!(helper.store.current(), Some(snapshot()));
}

#[tokio::test]
async fn test_failed_refresh_keeps_stored_snapshot() {
    let helper = TestHelper::with_stored(snapshot()).await;

    let (status, state): (_, RefreshState) = helper
        .app
        .send("refresh", Method::POST, None::<&()>)
        .await
        .unwrap();

    assert_eq!(status, StatusCode::ACCEPTED);
    assert_eq!(state.last_refresh, None);
    assert_eq!(helper.store.current(), Some(snapshot()));
}
