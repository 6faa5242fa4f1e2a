use actix_web::web;
use schedule_core::{Clock, ServiceName};
use voyage_engine::{
    ScheduleOptions, ServiceSchedule, ServiceTab, build_service_schedule, export_csv,
    export_file_name,
};

use crate::{
    error::Result,
    response::{CsvResponse, Response},
    state::AppState,
};

/// Services with SA arrivals in the current snapshot, in tab order.
#[tracing::instrument(skip(state))]
pub async fn services(state: web::Data<AppState>) -> Result<Response<Vec<ServiceTab>>> {
    let snapshot = state.snapshot().await?;
    Ok(Response::new(voyage_engine::service_tabs(
        snapshot.as_ref(),
        &state.catalog,
    )))
}

#[tracing::instrument(skip(state))]
pub async fn service_schedule(
    state: web::Data<AppState>,
    service: web::Path<String>,
    params: web::Query<ScheduleOptions>,
) -> Result<Response<ServiceSchedule>> {
    Ok(Response::new(
        schedule(&state, service.into_inner(), params.into_inner()).await?,
    ))
}

/// The service schedule as a CSV attachment.
#[tracing::instrument(skip(state))]
pub async fn service_schedule_csv(
    state: web::Data<AppState>,
    service: web::Path<String>,
    params: web::Query<ScheduleOptions>,
) -> Result<CsvResponse> {
    let schedule = schedule(&state, service.into_inner(), params.into_inner()).await?;

    Ok(CsvResponse {
        file_name: export_file_name(
            &schedule.service,
            schedule.delayed_only,
            state.clock.now().date_naive(),
        ),
        body: export_csv(&schedule)?,
    })
}

async fn schedule(
    state: &AppState,
    service: String,
    options: ScheduleOptions,
) -> Result<ServiceSchedule> {
    let service = ServiceName::new(service)?;
    let snapshot = state.snapshot().await?;

    Ok(build_service_schedule(
        snapshot.as_ref(),
        &service,
        &state.catalog,
        options,
        state.clock.now(),
    )?)
}
