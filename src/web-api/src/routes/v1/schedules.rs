use actix_web::{http::StatusCode, web};
use schedule_core::ScheduleSnapshot;

use crate::{
    error::Result,
    response::{Message, Response},
    state::AppState,
};

/// Returns the stored snapshot, `null` when none is stored.
#[tracing::instrument(skip(state))]
pub async fn latest_schedule(
    state: web::Data<AppState>,
) -> Result<Response<Option<ScheduleSnapshot>>> {
    Ok(Response::new(state.store.latest().await?))
}

/// Replaces the stored snapshot.
#[tracing::instrument(skip_all, fields(vessels = snapshot.vessel_count()))]
pub async fn save_schedule(
    state: web::Data<AppState>,
    snapshot: web::Json<ScheduleSnapshot>,
) -> Result<Response<Message>> {
    state.store.save(&snapshot).await?;
    Ok(Response::new(Message::new("Schedules saved")).with_status(StatusCode::CREATED))
}

#[tracing::instrument(skip(state))]
pub async fn clear_schedules(state: web::Data<AppState>) -> Result<Response<Message>> {
    state.store.clear().await?;
    Ok(Response::new(Message::new("Schedules cleared")))
}
