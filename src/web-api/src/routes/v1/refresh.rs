use actix_web::{http::StatusCode, web};
use chrono::{DateTime, Utc};
use refresher::RefreshStatus;
use schedule_core::Clock;
use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, error::RefreshInProgressSnafu},
    response::Response,
    state::AppState,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshState {
    pub is_running: bool,
    pub is_refreshing: bool,
    pub last_refresh: Option<DateTime<Utc>>,
    pub next_refresh: Option<DateTime<Utc>>,
    pub time_until_next_refresh: String,
}

/// Runs a refresh now. Responds `409` when one is already running.
#[tracing::instrument(skip(state))]
pub async fn force_refresh(state: web::Data<AppState>) -> Result<Response<RefreshState>> {
    if !state.refresher.force_refresh().await {
        return RefreshInProgressSnafu.fail();
    }

    Ok(Response::new(refresh_state(&state).await).with_status(StatusCode::ACCEPTED))
}

#[tracing::instrument(skip(state))]
pub async fn refresh_status(state: web::Data<AppState>) -> Response<RefreshState> {
    Response::new(refresh_state(&state).await)
}

async fn refresh_state(state: &AppState) -> RefreshState {
    let RefreshStatus {
        is_running,
        is_refreshing,
        last_refresh,
        next_refresh,
    } = state.refresher.status().await;

    RefreshState {
        is_running,
        is_refreshing,
        last_refresh,
        next_refresh,
        time_until_next_refresh: refresher::time_until(next_refresh, state.clock.now()),
    }
}
