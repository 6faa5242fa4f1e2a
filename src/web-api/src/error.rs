use actix_web::{HttpResponse, ResponseError, body::BoxBody, http::StatusCode};
use serde::{Deserialize, Serialize};
use snafu::{Location, Snafu};
use strum::EnumDiscriminants;
use tracing::error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu, EnumDiscriminants)]
#[snafu(module, visibility(pub))]
#[strum_discriminants(derive(Deserialize, Serialize))]
pub enum Error {
    #[snafu(display("An invalid service name was provided"))]
    InvalidService {
        #[snafu(implicit)]
        location: Location,
        #[snafu(source)]
        error: schedule_core::ScheduleError,
    },
    #[snafu(display("The schedule source is unavailable"))]
    SourceUnavailable {
        #[snafu(implicit)]
        location: Location,
        #[snafu(source)]
        error: schedule_core::Error,
    },
    #[snafu(display("A refresh is already in progress"))]
    RefreshInProgress {
        #[snafu(implicit)]
        location: Location,
    },
    #[snafu(display("An internal server error occured"))]
    Internal {
        #[snafu(implicit)]
        location: Location,
        #[snafu(source)]
        error: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Failures while starting the server.
#[derive(Debug, Snafu)]
#[snafu(module, visibility(pub))]
pub enum StartupError {
    #[snafu(display("Invalid configuration"))]
    Config {
        #[snafu(implicit)]
        location: Location,
        #[snafu(source)]
        error: config::ConfigError,
    },
    #[snafu(display("Failed to create the carrier client"))]
    Carrier {
        #[snafu(implicit)]
        location: Location,
        #[snafu(source)]
        error: carrier_api::Error,
    },
    #[snafu(display("Server IO error"))]
    Io {
        #[snafu(implicit)]
        location: Location,
        #[snafu(source)]
        error: std::io::Error,
    },
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDiscriminants,
    pub description: String,
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::InvalidService { .. } => StatusCode::BAD_REQUEST,
            Error::SourceUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            Error::RefreshInProgress { .. } => StatusCode::CONFLICT,
            Error::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse<BoxBody> {
        let status = self.status_code();
        if status.is_server_error() {
            error!("{self:?}");
        }

        HttpResponse::build(status).json(ErrorResponse {
            error: self.into(),
            description: self.to_string(),
        })
    }
}

impl From<schedule_core::ScheduleError> for Error {
    #[track_caller]
    fn from(error: schedule_core::ScheduleError) -> Self {
        let location = std::panic::Location::caller();
        Error::InvalidService {
            location: Location::new(location.file(), location.line(), location.column()),
            error,
        }
    }
}

impl From<schedule_core::Error> for Error {
    #[track_caller]
    fn from(error: schedule_core::Error) -> Self {
        let location = std::panic::Location::caller();
        let location = Location::new(location.file(), location.line(), location.column());
        match error {
            schedule_core::Error::Source { .. } => Error::SourceUnavailable { location, error },
            error => Error::Internal {
                location,
                error: Box::new(error),
            },
        }
    }
}

impl From<voyage_engine::Error> for Error {
    #[track_caller]
    fn from(error: voyage_engine::Error) -> Self {
        let location = std::panic::Location::caller();
        Error::Internal {
            location: Location::new(location.file(), location.line(), location.column()),
            error: Box::new(error),
        }
    }
}

macro_rules! startup_from {
    ($ty:ty, $variant:ident) => {
        impl From<$ty> for StartupError {
            #[track_caller]
            fn from(error: $ty) -> Self {
                let location = std::panic::Location::caller();
                StartupError::$variant {
                    location: Location::new(location.file(), location.line(), location.column()),
                    error,
                }
            }
        }
    };
}

startup_from!(config::ConfigError, Config);
startup_from!(carrier_api::Error, Carrier);
startup_from!(std::io::Error, Io);
