use chrono::{DateTime, TimeDelta, Utc};
use schedule_core::{Clock, ScheduleSource, SnapshotStore};
use serde::Serialize;
use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};
use tokio::{
    sync::{Mutex, broadcast},
    time::MissedTickBehavior,
};
use tokio_util::sync::CancellationToken;
use tracing::{error, info, instrument, warn};

use crate::settings::DEFAULT_REFRESH_INTERVAL;

const EVENT_CAPACITY: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum RefreshEvent {
    Started {
        at: DateTime<Utc>,
    },
    Completed {
        at: DateTime<Utc>,
        vessel_count: usize,
    },
    /// The source returned no vessels, the stored snapshot is kept.
    Failed {
        at: DateTime<Utc>,
    },
    Errored {
        at: DateTime<Utc>,
        message: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshStatus {
    pub is_running: bool,
    pub is_refreshing: bool,
    pub last_refresh: Option<DateTime<Utc>>,
    pub next_refresh: Option<DateTime<Utc>>,
}

/// Background task pulling a fresh snapshot from the source every interval and saving it
/// to the store. Cloning yields a handle to the same task.
pub struct Refresher<C> {
    inner: Arc<Inner<C>>,
}

struct Inner<C> {
    source: Arc<dyn ScheduleSource>,
    store: Arc<dyn SnapshotStore>,
    clock: C,
    interval: Duration,
    events: broadcast::Sender<RefreshEvent>,
    refreshing: AtomicBool,
    state: Mutex<State>,
}

#[derive(Default)]
struct State {
    cancel: Option<CancellationToken>,
    last_refresh: Option<DateTime<Utc>>,
}

/// Clears the refreshing flag even when the refresh future is dropped.
struct RefreshGuard<'a>(&'a AtomicBool);

impl Drop for RefreshGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

impl<C> Clone for Refresher<C> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<C: Clock> Refresher<C> {
    pub fn new(
        source: Arc<dyn ScheduleSource>,
        store: Arc<dyn SnapshotStore>,
        clock: C,
        interval: Duration,
    ) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        let interval = if interval.is_zero() {
            DEFAULT_REFRESH_INTERVAL
        } else {
            interval
        };

        Self {
            inner: Arc::new(Inner {
                source,
                store,
                clock,
                interval,
                events,
                refreshing: AtomicBool::new(false),
                state: Mutex::new(State::default()),
            }),
        }
    }

    /// Spawns the refresh loop, refreshing right away and then every interval. Does nothing
    /// when the loop already runs.
    pub async fn start(&self) {
        let mut state = self.inner.state.lock().await;
        if state.cancel.is_some() {
            info!("refresh loop already running");
            return;
        }

        let token = CancellationToken::new();
        state.cancel = Some(token.clone());

        info!(interval = ?self.inner.interval, "starting refresh loop");
        tokio::spawn(self.inner.clone().run(token));
    }

    pub async fn stop(&self) {
        if let Some(token) = self.inner.state.lock().await.cancel.take() {
            token.cancel();
            info!("stopped refresh loop");
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<RefreshEvent> {
        self.inner.events.subscribe()
    }

    /// Refreshes now. Returns `false` without refreshing when a refresh is already running.
    pub async fn force_refresh(&self) -> bool {
        info!("forced refresh requested");
        self.inner.refresh().await
    }

    pub async fn status(&self) -> RefreshStatus {
        let state = self.inner.state.lock().await;
        RefreshStatus {
            is_running: state.cancel.is_some(),
            is_refreshing: self.inner.refreshing.load(Ordering::SeqCst),
            last_refresh: state.last_refresh,
            next_refresh: state
                .last_refresh
                .and_then(|l| l.checked_add_signed(self.inner.interval_delta())),
        }
    }

    pub async fn time_until_next_refresh(&self, now: DateTime<Utc>) -> String {
        time_until(self.status().await.next_refresh, now)
    }

    pub fn interval(&self) -> Duration {
        self.inner.interval
    }
}

impl<C: Clock> Inner<C> {
    async fn run(self: Arc<Self>, token: CancellationToken) {
        let mut interval = tokio::time::interval(self.interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = token.cancelled() => break,
                _ = interval.tick() => {
                    self.refresh().await;
                }
            }
        }
    }

    #[instrument(skip_all)]
    async fn refresh(&self) -> bool {
        if self.refreshing.swap(true, Ordering::SeqCst) {
            info!("refresh already in progress, skipping");
            return false;
        }
        let _guard = RefreshGuard(&self.refreshing);

        self.emit(RefreshEvent::Started {
            at: self.clock.now(),
        });

        let event = match self.source.fetch_snapshot().await {
            Ok(snapshot) if snapshot.is_empty() => {
                warn!("refresh returned no vessels");
                RefreshEvent::Failed {
                    at: self.clock.now(),
                }
            }
            Ok(snapshot) => match self.store.save(&snapshot).await {
                Ok(()) => {
                    let at = self.clock.now();
                    self.state.lock().await.last_refresh = Some(at);
                    info!(vessels = snapshot.vessel_count(), "refresh completed");
                    RefreshEvent::Completed {
                        at,
                        vessel_count: snapshot.vessel_count(),
                    }
                }
                Err(e) => {
                    error!("failed to save refreshed snapshot: {e:?}");
                    RefreshEvent::Errored {
                        at: self.clock.now(),
                        message: e.to_string(),
                    }
                }
            },
            Err(e) => {
                error!("failed to fetch snapshot: {e:?}");
                RefreshEvent::Errored {
                    at: self.clock.now(),
                    message: e.to_string(),
                }
            }
        };

        self.emit(event);
        true
    }

    fn emit(&self, event: RefreshEvent) {
        // No subscribers is not an error.
        let _ = self.events.send(event);
    }

    /// Intervals beyond what chrono represents leave the next refresh unknown.
    fn interval_delta(&self) -> TimeDelta {
        TimeDelta::from_std(self.interval).unwrap_or(TimeDelta::MAX)
    }
}

/// Human readable time left until `next`, e.g. `1h 5m`, `12m`, `Soon`.
pub fn time_until(next: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
    let Some(next) = next else {
        return "Unknown".into();
    };

    let remaining = next - now;
    if remaining <= TimeDelta::zero() {
        return "Soon".into();
    }

    let minutes = remaining.num_minutes();
    let hours = minutes / 60;
    if hours > 0 {
        format!("{hours}h {}m", minutes % 60)
    } else {
        format!("{minutes}m")
    }
}
