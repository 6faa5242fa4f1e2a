use super::test_client::ApiClient;
use refresher::RefreshSettings;
use schedule_core::{
    EventClassifier::*,
    Environment, LogLevel, ScheduleSnapshot, Vessel,
    test_helper::{CallBuilder, ManualClock, MemoryStore, StaticSource, VesselBuilder, ts},
};
use std::{sync::Arc, time::Duration};
use web_api::{
    settings::{ApiSettings, Settings, StoreSettings},
    startup::{App, Components},
};

pub const NOW: &str = "2025-02-01T00:00:00Z";

pub struct TestHelper {
    pub app: ApiClient,
    pub store: MemoryStore,
    pub source: StaticSource,
}

impl TestHelper {
    pub async fn new() -> Self {
        Self::spawn(MemoryStore::default(), StaticSource::failing()).await
    }

    pub async fn with_stored(snapshot: ScheduleSnapshot) -> Self {
        Self::spawn(MemoryStore::with_snapshot(snapshot), StaticSource::failing()).await
    }

    pub async fn with_source(snapshot: ScheduleSnapshot) -> Self {
        Self::spawn(MemoryStore::default(), StaticSource::new(snapshot)).await
    }

    async fn spawn(store: MemoryStore, source: StaticSource) -> Self {
        let app = App::build_with(
            &settings(),
            Components {
                source: Arc::new(source.clone()),
                store: Arc::new(store.clone()),
                clock: Arc::new(ManualClock::new(ts(NOW))),
            },
        )
        .await
        .unwrap();

        let address = format!("http://127.0.0.1:{}/v1", app.port());
        tokio::spawn(async { app.run().await.unwrap() });

        TestHelper {
            app: ApiClient::new(address),
            store,
            source,
        }
    }
}

fn settings() -> Settings {
    Settings {
        log_level: LogLevel::Debug,
        environment: Environment::Test,
        api: ApiSettings {
            ip: "127.0.0.1".into(),
            port: 0,
            num_workers: Some(1),
        },
        carrier: Default::default(),
        store: StoreSettings {
            path: "unused.json".into(),
        },
        refresh: RefreshSettings {
            interval: Duration::from_secs(30 * 60),
            enabled: false,
        },
        catalog: None,
    }
}

/// A SAECS vessel sailing London Gateway to Durban.
pub fn saecs_vessel(name: &str, imo: &str, voyage: &str, arrival: &str) -> Vessel {
    VesselBuilder::new(name)
        .imo(imo)
        .call(
            CallBuilder::new("GBLGP")
                .outbound("SAECS", voyage)
                .departure(Actual, "2025-01-10T00:00:00Z"),
        )
        .call(
            CallBuilder::new("ZADUR")
                .inbound("SAECS", voyage)
                .arrival(Estimated, arrival),
        )
        .build()
}

pub fn snapshot() -> ScheduleSnapshot {
    ScheduleSnapshot::new(
        ts("2025-01-31T23:00:00Z"),
        vec![
            saecs_vessel("ALPHA", "9000001", "201E", "2025-02-14T00:00:00Z"),
            saecs_vessel("BETA", "9000002", "203E", "2025-02-28T00:00:00Z"),
        ],
        vec!["Durban".into()],
    )
}
