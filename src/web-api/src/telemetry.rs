use schedule_core::{Environment, LogLevel};
use tracing_subscriber::{EnvFilter, fmt};

/// Installs the global subscriber. `RUST_LOG` takes precedence over the configured level.
/// Calling this more than once keeps the first subscriber.
pub fn init_tracer(log_level: LogLevel, environment: Environment) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.as_directive()));

    let builder = fmt().with_env_filter(filter);

    let _ = match environment {
        Environment::Local | Environment::Test => builder.pretty().try_init(),
        Environment::Development | Environment::Production => {
            builder.with_ansi(false).try_init()
        }
    };
}
