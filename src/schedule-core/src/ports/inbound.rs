use crate::*;
use async_trait::async_trait;

#[async_trait]
pub trait SnapshotInbound {
    /// Replaces the stored snapshot.
    async fn save(&self, snapshot: &ScheduleSnapshot) -> CoreResult<()>;
    async fn clear(&self) -> CoreResult<()>;
}
