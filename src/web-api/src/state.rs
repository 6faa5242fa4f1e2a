use refresher::Refresher;
use schedule_core::{
    Clock, CoreResult, ScheduleSnapshot, ScheduleSource, ServiceCatalog, SnapshotStore,
};
use std::sync::Arc;
use tracing::{info, instrument};

pub type SharedClock = Arc<dyn Clock>;

/// Collaborators shared by all request handlers.
#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn ScheduleSource>,
    pub store: Arc<dyn SnapshotStore>,
    pub clock: SharedClock,
    pub catalog: Arc<ServiceCatalog>,
    pub refresher: Refresher<SharedClock>,
}

impl AppState {
    /// The stored snapshot, or a freshly fetched one when nothing is stored yet. A fetched
    /// snapshot with vessels is persisted.
    #[instrument(skip_all)]
    pub async fn snapshot(&self) -> CoreResult<Option<ScheduleSnapshot>> {
        if let Some(snapshot) = self.store.latest().await? {
            return Ok(Some(snapshot));
        }

        info!("no stored snapshot, fetching from source");
        let snapshot = self.source.fetch_snapshot().await?;
        if !snapshot.is_empty() {
            self.store.save(&snapshot).await?;
        }

        Ok(Some(snapshot))
    }
}
