use crate::*;
use async_trait::async_trait;

#[async_trait]
pub trait SnapshotOutbound {
    async fn latest(&self) -> CoreResult<Option<ScheduleSnapshot>>;
}

#[async_trait]
pub trait ScheduleSource: Send + Sync + 'static {
    /// Pulls a full snapshot. An empty snapshot means nothing was discovered and is not
    /// an error.
    async fn fetch_snapshot(&self) -> CoreResult<ScheduleSnapshot>;
}
