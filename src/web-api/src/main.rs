#![deny(warnings)]
#![deny(rust_2018_idioms)]

use tracing::info;
use web_api::{error::StartupError, settings::Settings, startup::App, telemetry::init_tracer};

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    let settings = Settings::new()?;

    init_tracer(settings.log_level, settings.environment);

    let app = App::build(&settings).await?;

    info!(port = app.port(), "starting sa-schedule api...");

    app.run().await
}
