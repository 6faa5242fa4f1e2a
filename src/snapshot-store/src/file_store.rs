use async_trait::async_trait;
use chrono::{DateTime, Utc};
use schedule_core::{Clock, CoreResult, ScheduleSnapshot, SnapshotInbound, SnapshotOutbound};
use serde::{Deserialize, Serialize};
use snafu::ResultExt;
use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
    sync::Arc,
};
use tokio::sync::Mutex;
use tracing::{debug, instrument};

use crate::{
    Result,
    error::error::{IoSnafu, JsonSnafu},
};

/// Keeps the latest snapshot as the single entry of a JSON file.
pub struct JsonFileStore {
    path: PathBuf,
    clock: Arc<dyn Clock>,
    write_lock: Mutex<()>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreFile {
    #[serde(default)]
    schedules: Vec<StoredSnapshot>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredSnapshot {
    id: String,
    fetch_date: DateTime<Utc>,
    data: ScheduleSnapshot,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>, clock: Arc<dyn Clock>) -> Self {
        Self {
            path: path.into(),
            clock,
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read(&self) -> Result<StoreFile> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(c) => c,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(StoreFile::default()),
            Err(e) => return Err(e).context(IoSnafu { path: &self.path }),
        };

        if contents.trim().is_empty() {
            return Ok(StoreFile::default());
        }

        serde_json::from_str(&contents).context(JsonSnafu { path: &self.path })
    }

    /// Replaces the file through a rename so readers never see a partial write.
    async fn write(&self, file: &StoreFile) -> Result<()> {
        let _guard = self.write_lock.lock().await;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .context(IoSnafu { path: parent })?;
        }

        let json = serde_json::to_vec_pretty(file).context(JsonSnafu { path: &self.path })?;

        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, json)
            .await
            .context(IoSnafu { path: &tmp })?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .context(IoSnafu { path: &self.path })?;

        Ok(())
    }
}

#[async_trait]
impl SnapshotInbound for JsonFileStore {
    #[instrument(skip_all, fields(vessels = snapshot.vessel_count()))]
    async fn save(&self, snapshot: &ScheduleSnapshot) -> CoreResult<()> {
        let now = self.clock.now();
        let file = StoreFile {
            schedules: vec![StoredSnapshot {
                id: now.to_rfc3339(),
                fetch_date: now,
                data: snapshot.clone(),
            }],
        };

        self.write(&file).await?;
        debug!(path = %self.path.display(), "saved snapshot");
        Ok(())
    }

    async fn clear(&self) -> CoreResult<()> {
        self.write(&StoreFile::default()).await?;
        debug!(path = %self.path.display(), "cleared snapshot store");
        Ok(())
    }
}

#[async_trait]
impl SnapshotOutbound for JsonFileStore {
    async fn latest(&self) -> CoreResult<Option<ScheduleSnapshot>> {
        let file = self.read().await?;
        Ok(file.schedules.into_iter().next().map(|s| s.data))
    }
}
