use async_trait::async_trait;
use chrono::NaiveDate;
use schedule_core::{Clock, CoreResult, ScheduleSnapshot, ScheduleSource, TimedCache, Vessel};
use std::{sync::Arc, time::Duration};
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

use crate::{
    CarrierClient, CarrierSettings, DiscoveredVessel, PortCallsResponse, PortCity, Result,
    discovered_vessels,
};

const CACHE_KEY: &str = "SA_INBOUND";

/// Builds snapshots by discovering the vessels calling the configured port cities and
/// fetching each of their schedules. Snapshots are cached for the configured ttl.
pub struct CarrierScheduleSource {
    client: CarrierClient,
    clock: Arc<dyn Clock>,
    port_cities: Vec<PortCity>,
    port_call_delay: Duration,
    vessel_delay: Duration,
    cache: Mutex<TimedCache<&'static str, ScheduleSnapshot>>,
}

impl CarrierScheduleSource {
    pub fn new(settings: &CarrierSettings, clock: Arc<dyn Clock>) -> Result<Self> {
        Ok(Self {
            client: CarrierClient::new(settings)?,
            clock,
            port_cities: settings.port_cities.clone(),
            port_call_delay: settings.port_call_delay,
            vessel_delay: settings.vessel_delay,
            cache: Mutex::new(TimedCache::new(settings.cache_ttl)),
        })
    }

    pub async fn invalidate_cache(&self) {
        self.cache.lock().await.invalidate(&CACHE_KEY);
    }

    /// Polls every port city, skipping cities whose request fails. Fails only when all of
    /// them do.
    async fn discover(&self, today: NaiveDate) -> CoreResult<Vec<DiscoveredVessel>> {
        let mut responses: Vec<(&str, PortCallsResponse)> = Vec::new();
        let mut last_error = None;

        for (i, city) in self.port_cities.iter().enumerate() {
            if i > 0 {
                tokio::time::sleep(self.port_call_delay).await;
            }

            match self
                .client
                .port_calls(&city.city_name, &city.country_code, today)
                .await
            {
                Ok(response) => responses.push((city.city_name.as_str(), response)),
                Err(e) => {
                    error!(city = %city.city_name, "failed to fetch port calls: {e:?}");
                    last_error = Some(e);
                }
            }
        }

        if responses.is_empty() {
            if let Some(e) = last_error {
                return Err(e.into());
            }
        }

        let vessels = discovered_vessels(responses.iter().map(|(c, r)| (*c, r)));
        info!(
            vessels = vessels.len(),
            cities = responses.len(),
            "discovered vessels"
        );
        Ok(vessels)
    }

    async fn fetch_vessels(&self, discovered: &[DiscoveredVessel], today: NaiveDate) -> Vec<Vessel> {
        let mut vessels = Vec::with_capacity(discovered.len());

        for (i, vessel) in discovered.iter().enumerate() {
            if i > 0 {
                tokio::time::sleep(self.vessel_delay).await;
            }

            match self.client.vessel_schedule(&vessel.imo, today).await {
                Ok(schedule) => vessels.push(schedule.into_vessel(vessel)),
                Err(e) => error!(
                    imo = %vessel.imo,
                    name = %vessel.name,
                    "failed to fetch vessel schedule: {e:?}"
                ),
            }
        }

        vessels
    }
}

#[async_trait]
impl ScheduleSource for CarrierScheduleSource {
    async fn fetch_snapshot(&self) -> CoreResult<ScheduleSnapshot> {
        // Held for the whole pull so concurrent callers share one fetch.
        let mut cache = self.cache.lock().await;

        let now = self.clock.now();
        if let Some(snapshot) = cache.get(&CACHE_KEY, now) {
            debug!("serving cached snapshot");
            return Ok(snapshot.clone());
        }

        let today = now.date_naive();
        let discovered = self.discover(today).await?;
        if discovered.is_empty() {
            warn!("no vessels discovered at the polled port cities");
            return Ok(ScheduleSnapshot::empty(now));
        }

        let vessels = self.fetch_vessels(&discovered, today).await;
        let snapshot = ScheduleSnapshot::new(
            now,
            vessels,
            self.port_cities.iter().map(|c| c.city_name.clone()).collect(),
        );

        info!(
            vessels = snapshot.vessel_count(),
            discovered = discovered.len(),
            "fetched carrier schedules"
        );

        cache.insert(CACHE_KEY, snapshot.clone(), now);
        Ok(snapshot)
    }
}
