use async_trait::async_trait;
use refresher::Refresher;
use schedule_core::{
    CoreResult, ScheduleSnapshot, ScheduleSource,
    test_helper::{CallBuilder, ManualClock, MemoryStore, StaticSource, VesselBuilder, ts},
};
use std::{sync::Arc, time::Duration};
use tokio::sync::Notify;

pub const INTERVAL: Duration = Duration::from_secs(30 * 60);

pub struct TestHelper {
    pub clock: ManualClock,
    pub store: MemoryStore,
    pub refresher: Refresher<ManualClock>,
}

/// Source that blocks every fetch until released.
#[derive(Default)]
pub struct GatedSource {
    started: Notify,
    release: Notify,
}

impl TestHelper {
    pub fn new(source: Arc<dyn ScheduleSource>) -> Self {
        Self::with_interval(source, INTERVAL)
    }

    pub fn with_interval(source: Arc<dyn ScheduleSource>, interval: Duration) -> Self {
        let clock = ManualClock::new(ts("2025-02-01T12:00:00Z"));
        let store = MemoryStore::default();
        let refresher = Refresher::new(source, Arc::new(store.clone()), clock.clone(), interval);

        Self {
            clock,
            store,
            refresher,
        }
    }
}

impl GatedSource {
    pub async fn wait_started(&self) {
        self.started.notified().await;
    }

    pub fn release(&self) {
        self.release.notify_one();
    }
}

#[async_trait]
impl ScheduleSource for GatedSource {
    async fn fetch_snapshot(&self) -> CoreResult<ScheduleSnapshot> {
        self.started.notify_one();
        self.release.notified().await;
        Ok(snapshot())
    }
}

pub fn snapshot() -> ScheduleSnapshot {
    ScheduleSnapshot::new(
        ts("2025-02-01T11:59:00Z"),
        vec![
            VesselBuilder::new("ALPHA")
                .imo("9000001")
                .call(CallBuilder::new("ZADUR").inbound("SAECS", "201E"))
                .build(),
            VesselBuilder::new("BETA")
                .imo("9000002")
                .call(CallBuilder::new("ZACPT").inbound("MESAWA", "530W"))
                .build(),
        ],
        vec!["Durban".into()],
    )
}

pub fn static_source() -> Arc<StaticSource> {
    Arc::new(StaticSource::new(snapshot()))
}
