use crate::*;
use async_trait::async_trait;
use chrono::{DateTime, TimeDelta, Utc};
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    snapshot: Arc<Mutex<Option<ScheduleSnapshot>>>,
}

/// Source returning a fixed snapshot, or failing when none is set.
#[derive(Debug, Default, Clone)]
pub struct StaticSource {
    snapshot: Arc<Mutex<Option<ScheduleSnapshot>>>,
    calls: Arc<AtomicUsize>,
}

#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Arc<Mutex<DateTime<Utc>>>,
}

impl MemoryStore {
    pub fn with_snapshot(snapshot: ScheduleSnapshot) -> Self {
        Self {
            snapshot: Arc::new(Mutex::new(Some(snapshot))),
        }
    }

    pub fn current(&self) -> Option<ScheduleSnapshot> {
        self.snapshot.lock().unwrap().clone()
    }
}

#[async_trait]
impl SnapshotInbound for MemoryStore {
    async fn save(&self, snapshot: &ScheduleSnapshot) -> CoreResult<()> {
        *self.snapshot.lock().unwrap() = Some(snapshot.clone());
        Ok(())
    }

    async fn clear(&self) -> CoreResult<()> {
        *self.snapshot.lock().unwrap() = None;
        Ok(())
    }
}

#[async_trait]
impl SnapshotOutbound for MemoryStore {
    async fn latest(&self) -> CoreResult<Option<ScheduleSnapshot>> {
        Ok(self.current())
    }
}

impl StaticSource {
    pub fn new(snapshot: ScheduleSnapshot) -> Self {
        let source = Self::default();
        source.set(Some(snapshot));
        source
    }

    pub fn failing() -> Self {
        Self::default()
    }

    pub fn set(&self, snapshot: Option<ScheduleSnapshot>) {
        *self.snapshot.lock().unwrap() = snapshot;
    }

    pub fn fetch_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ScheduleSource for StaticSource {
    async fn fetch_snapshot(&self) -> CoreResult<ScheduleSnapshot> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let snapshot = self.snapshot.lock().unwrap().clone();
        snapshot.ok_or_else(|| Error::source_failure("no snapshot configured"))
    }
}

impl ManualClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: Arc::new(Mutex::new(now)),
        }
    }

    pub fn advance(&self, delta: TimeDelta) {
        *self.now.lock().unwrap() += delta;
    }

    pub fn set(&self, now: DateTime<Utc>) {
        *self.now.lock().unwrap() = now;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}
