use schedule_core::{
    ScheduleSnapshot, SnapshotInbound, SnapshotOutbound,
    test_helper::{CallBuilder, ManualClock, VesselBuilder, ts},
};
use snapshot_store::JsonFileStore;
use std::sync::Arc;
use tempfile::TempDir;

struct TestHelper {
    _dir: TempDir,
    store: JsonFileStore,
}

impl TestHelper {
    fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let clock = ManualClock::new(ts("2025-02-01T12:00:00Z"));
        let store = JsonFileStore::new(dir.path().join("data").join("db.json"), Arc::new(clock));
        Self { _dir: dir, store }
    }
}

fn snapshot() -> ScheduleSnapshot {
    ScheduleSnapshot::new(
        ts("2025-02-01T11:55:00Z"),
        vec![
            VesselBuilder::new("ALPHA")
                .imo("9000001")
                .call(CallBuilder::new("ZADUR").inbound("SAECS", "201E"))
                .build(),
        ],
        vec!["Durban".into()],
    )
}

#[tokio::test]
async fn test_missing_file_has_no_snapshot() {
    let helper = TestHelper::new();
    assert_eq!(helper.store.latest().await.unwrap(), None);
}

#[tokio::test]
async fn test_saved_snapshot_is_latest() {
    let helper = TestHelper::new();

    helper.store.save(&snapshot()).await.unwrap();

    assert_eq!(helper.store.latest().await.unwrap(), Some(snapshot()));
}

#[tokio::test]
async fn test_save_replaces_previous_entry() {
    let helper = TestHelper::new();
    let newer = ScheduleSnapshot::empty(ts("2025-02-02T00:00:00Z"));

    helper.store.save(&snapshot()).await.unwrap();
    helper.store.save(&newer).await.unwrap();

    let contents = std::fs::read_to_string(helper.store.path()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&contents).unwrap();
    let entries = json["schedules"].as_array().unwrap();

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["fetchDate"], "2025-02-01T12:00:00Z");
    assert!(entries[0]["id"].is_string());
    assert_eq!(helper.store.latest().await.unwrap(), Some(newer));
}

#[tokio::test]
async fn test_clear_empties_the_store() {
    let helper = TestHelper::new();

    helper.store.save(&snapshot()).await.unwrap();
    helper.store.clear().await.unwrap();

    assert_eq!(helper.store.latest().await.unwrap(), None);
    assert!(helper.store.path().exists());
}

#[tokio::test]
async fn test_empty_file_has_no_snapshot() {
    let helper = TestHelper::new();
    std::fs::create_dir_all(helper.store.path().parent().unwrap()).unwrap();
    std::fs::write(helper.store.path(), "  \n").unwrap();

    assert_eq!(helper.store.latest().await.unwrap(), None);
}

#[tokio::test]
async fn test_corrupt_file_is_a_store_error() {
    let helper = TestHelper::new();
    std::fs::create_dir_all(helper.store.path().parent().unwrap()).unwrap();
    std::fs::write(helper.store.path(), "{ not json").unwrap();

    let error = helper.store.latest().await.unwrap_err();

    assert!(matches!(error, schedule_core::Error::Store { .. }));
}
