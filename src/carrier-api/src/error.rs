use snafu::{Location, Snafu};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(module, visibility(pub))]
pub enum Error {
    #[snafu(display("Carrier API request failed"))]
    Http {
        #[snafu(implicit)]
        location: Location,
        #[snafu(source)]
        error: http_client::Error,
    },
    #[snafu(display("Invalid carrier API key"))]
    InvalidApiKey {
        #[snafu(implicit)]
        location: Location,
        #[snafu(source)]
        error: http_client::header::InvalidHeaderValue,
    },
}

impl From<http_client::Error> for Error {
    #[track_caller]
    fn from(error: http_client::Error) -> Self {
        let location = std::panic::Location::caller();
        Error::Http {
            location: Location::new(location.file(), location.line(), location.column()),
            error,
        }
    }
}

impl From<Error> for schedule_core::Error {
    #[track_caller]
    fn from(value: Error) -> Self {
        schedule_core::Error::source_failure(value)
    }
}
