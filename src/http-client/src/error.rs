use reqwest::StatusCode;
use snafu::{Location, Snafu};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("HTTP reqwest error"))]
    Reqwest {
        #[snafu(implicit)]
        location: Location,
        #[snafu(source)]
        error: reqwest::Error,
    },
    #[snafu(display("HTTP middleware error"))]
    Middleware {
        #[snafu(implicit)]
        location: Location,
        #[snafu(source)]
        error: reqwest_middleware::Error,
    },
    #[snafu(display("HTTP request failed, status: '{status}', url: '{url}', body: '{body}'"))]
    FailedRequest {
        #[snafu(implicit)]
        location: Location,
        url: String,
        status: StatusCode,
        body: String,
    },
}

impl Error {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Reqwest { error, .. } => error.status(),
            Error::Middleware {
                error: reqwest_middleware::Error::Reqwest(error),
                ..
            } => error.status(),
            Error::Middleware { .. } => None,
            Error::FailedRequest { status, .. } => Some(*status),
        }
    }

    pub fn body(&self) -> Option<&str> {
        match self {
            Error::Reqwest { .. } | Error::Middleware { .. } => None,
            Error::FailedRequest { body, .. } => Some(body),
        }
    }
}

impl From<reqwest::Error> for Error {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        let location = std::panic::Location::caller();
        Error::Reqwest {
            location: Location::new(location.file(), location.line(), location.column()),
            error,
        }
    }
}

impl From<reqwest_middleware::Error> for Error {
    #[track_caller]
    fn from(error: reqwest_middleware::Error) -> Self {
        let location = std::panic::Location::caller();
        Error::Middleware {
            location: Location::new(location.file(), location.line(), location.column()),
            error,
        }
    }
}
