use chrono::TimeDelta;
use refresher::RefreshEvent;
use schedule_core::{Clock, ScheduleSnapshot, test_helper::StaticSource};
use std::{sync::Arc, time::Duration};

use crate::helper::*;

#[tokio::test]
async fn test_force_refresh_saves_snapshot_and_notifies() {
    let helper = TestHelper::new(static_source());
    let mut events = helper.refresher.subscribe();
    let now = helper.clock.now();

    assert!(helper.refresher.force_refresh().await);

    assert_eq!(helper.store.current(), Some(snapshot()));
    assert_eq!(events.recv().await.unwrap(), RefreshEvent::Started { at: now });
    assert_eq!(
        events.recv().await.unwrap(),
        RefreshEvent::Completed {
            at: now,
            vessel_count: 2
        }
    );

    let status = helper.refresher.status().await;
    assert!(!status.is_running);
    assert!(!status.is_refreshing);
    assert_eq!(status.last_refresh, Some(now));
    assert_eq!(status.next_refresh, Some(now + TimeDelta::minutes(30)));
}

#[tokio::test]
async fn test_empty_snapshot_is_a_failed_refresh() {
    let source = Arc::new(StaticSource::new(ScheduleSnapshot::empty(
        schedule_core::test_helper::ts("2025-02-01T12:00:00Z"),
    )));
    let helper = TestHelper::new(source);
    let mut events = helper.refresher.subscribe();

    assert!(helper.refresher.force_refresh().await);

    events.recv().await.unwrap();
    assert!(matches!(
        events.recv().await.unwrap(),
        RefreshEvent::Failed { .. }
    ));
    assert_eq!(helper.store.current(), None);
    assert_eq!(helper.refresher.status().await.last_refresh, None);
}

#[tokio::test]
async fn test_source_error_is_reported() {
    let helper = TestHelper::new(Arc::new(StaticSource::failing()));
    let mut events = helper.refresher.subscribe();

    assert!(helper.refresher.force_refresh().await);

    events.recv().await.unwrap();
    let RefreshEvent::Errored { message, .. } = events.recv().await.unwrap() else {
        panic!("expected an errored event");
    };
    assert!(!message.is_empty());
    assert_eq!(helper.store.current(), None);
}

#[tokio::test]
async fn test_refresh_while_refreshing_is_skipped() {
    let source = Arc::new(GatedSource::default());
    let helper = TestHelper::new(source.clone());

    let refresher = helper.refresher.clone();
    let first = tokio::spawn(async move { refresher.force_refresh().await });

    source.wait_started().await;
    assert!(helper.refresher.status().await.is_refreshing);
    assert!(!helper.refresher.force_refresh().await);

    source.release();
    assert!(first.await.unwrap());
    assert!(!helper.refresher.status().await.is_refreshing);
    assert_eq!(helper.store.current(), Some(snapshot()));
}

#[tokio::test(start_paused = true)]
async fn test_loop_refreshes_immediately_and_every_interval() {
    let source = static_source();
    let helper = TestHelper::new(source.clone());
    let mut events = helper.refresher.subscribe();

    helper.refresher.start().await;
    helper.refresher.start().await;

    assert!(matches!(events.recv().await.unwrap(), RefreshEvent::Started { .. }));
    assert!(matches!(events.recv().await.unwrap(), RefreshEvent::Completed { .. }));
    assert_eq!(source.fetch_count(), 1);
    assert!(helper.refresher.status().await.is_running);

    assert!(matches!(events.recv().await.unwrap(), RefreshEvent::Started { .. }));
    assert!(matches!(events.recv().await.unwrap(), RefreshEvent::Completed { .. }));
    assert_eq!(source.fetch_count(), 2);

    helper.refresher.stop().await;
    assert!(!helper.refresher.status().await.is_running);

    tokio::time::sleep(INTERVAL * 3).await;
    assert_eq!(source.fetch_count(), 2);
}

#[tokio::test]
async fn test_time_until_next_refresh_follows_last_refresh() {
    let helper = TestHelper::new(static_source());
    let now = helper.clock.now();

    assert_eq!(helper.refresher.time_until_next_refresh(now).await, "Unknown");

    helper.refresher.force_refresh().await;

    assert_eq!(
        helper
            .refresher
            .time_until_next_refresh(now + TimeDelta::minutes(5))
            .await,
        "25m"
    );
    assert_eq!(
        helper
            .refresher
            .time_until_next_refresh(now + TimeDelta::minutes(31))
            .await,
        "Soon"
    );
}

#[tokio::test]
async fn test_unrepresentable_interval_leaves_next_refresh_unknown() {
    let helper = TestHelper::with_interval(static_source(), Duration::from_secs(u64::MAX));
    let now = helper.clock.now();

    assert!(helper.refresher.force_refresh().await);

    let status = helper.refresher.status().await;
    assert_eq!(status.last_refresh, Some(now));
    assert_eq!(status.next_refresh, None);
    assert_eq!(helper.refresher.time_until_next_refresh(now).await, "Unknown");
}
