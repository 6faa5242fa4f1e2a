use actix_cors::Cors;
use actix_web::{
    HttpServer,
    dev::Server,
    middleware::{Compress, Condition},
    web::{self, Data},
};
use carrier_api::CarrierScheduleSource;
use refresher::Refresher;
use schedule_core::{Environment, ScheduleSource, SnapshotStore, SystemClock};
use snapshot_store::JsonFileStore;
use std::{net::TcpListener, sync::Arc};
use tracing_actix_web::TracingLogger;

use crate::{
    error::StartupError,
    routes::v1,
    settings::Settings,
    state::{AppState, SharedClock},
};

const JSON_LIMIT: usize = 10 * 1024 * 1024;

pub struct App {
    server: Server,
    port: u16,
    refresher: Refresher<SharedClock>,
}

/// The collaborators the server is wired with.
pub struct Components {
    pub source: Arc<dyn ScheduleSource>,
    pub store: Arc<dyn SnapshotStore>,
    pub clock: SharedClock,
}

impl App {
    pub async fn build(settings: &Settings) -> Result<Self, StartupError> {
        let clock: SharedClock = Arc::new(SystemClock);
        let source = CarrierScheduleSource::new(&settings.carrier, clock.clone())?;
        let store = JsonFileStore::new(&settings.store.path, clock.clone());

        Self::build_with(
            settings,
            Components {
                source: Arc::new(source),
                store: Arc::new(store),
                clock,
            },
        )
        .await
    }

    pub async fn build_with(
        settings: &Settings,
        components: Components,
    ) -> Result<Self, StartupError> {
        let listener = TcpListener::bind(settings.api.listener_address())?;
        let port = listener.local_addr()?.port();

        let Components {
            source,
            store,
            clock,
        } = components;

        let refresher = Refresher::new(
            source.clone(),
            store.clone(),
            clock.clone(),
            settings.refresh.interval,
        );
        if settings.refresh.enabled {
            refresher.start().await;
        }

        let state = AppState {
            source,
            store,
            clock,
            catalog: Arc::new(settings.catalog()),
            refresher: refresher.clone(),
        };

        let server = create_server(state, listener, settings)?;

        Ok(App {
            server,
            port,
            refresher,
        })
    }

    pub async fn run(self) -> Result<(), StartupError> {
        let result = self.server.await;
        self.refresher.stop().await;
        Ok(result?)
    }

    pub fn port(&self) -> u16 {
        self.port
    }
}

fn create_server(
    state: AppState,
    listener: TcpListener,
    settings: &Settings,
) -> std::io::Result<Server> {
    let not_prod = settings.environment != Environment::Production;
    let state = Data::new(state);

    let mut server = HttpServer::new(move || {
        let scope = web::scope("/v1")
            .route(
                "/schedules",
                web::get().to(v1::schedules::latest_schedule),
            )
            .route("/schedules", web::post().to(v1::schedules::save_schedule))
            .route(
                "/schedules",
                web::delete().to(v1::schedules::clear_schedules),
            )
            .route("/services", web::get().to(v1::services::services))
            .route(
                "/services/{service}/schedule.csv",
                web::get().to(v1::services::service_schedule_csv),
            )
            .route(
                "/services/{service}/schedule",
                web::get().to(v1::services::service_schedule),
            )
            .route("/refresh", web::post().to(v1::refresh::force_refresh))
            .route("/refresh", web::get().to(v1::refresh::refresh_status));

        actix_web::App::new()
            .app_data(state.clone())
            .app_data(web::JsonConfig::default().limit(JSON_LIMIT))
            .wrap(Compress::default())
            .wrap(Condition::new(not_prod, Cors::permissive()))
            .wrap(TracingLogger::default())
            .service(scope)
    })
    .listen(listener)?;

    if let Some(workers) = settings.api.num_workers {
        server = server.workers(workers as usize);
    }

    Ok(server.run())
}
