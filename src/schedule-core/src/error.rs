use snafu::{Location, Snafu};

pub type BoxedError = Box<dyn std::error::Error + Send + Sync + 'static>;

pub type CoreResult<T> = std::result::Result<T, Error>;

/// Failures of the collaborators surrounding the schedule core.
#[derive(Debug, Snafu)]
#[snafu(module, visibility(pub))]
pub enum Error {
    #[snafu(display("Failed to fetch schedules from the schedule source"))]
    Source {
        #[snafu(implicit)]
        location: Location,
        #[snafu(source)]
        error: BoxedError,
    },
    #[snafu(display("Snapshot store operation failed"))]
    Store {
        #[snafu(implicit)]
        location: Location,
        #[snafu(source)]
        error: BoxedError,
    },
    #[snafu(display("An unexpected error occured"))]
    Unexpected {
        #[snafu(implicit)]
        location: Location,
        #[snafu(source)]
        error: BoxedError,
    },
}

/// Programmer errors raised by the resolution entry points. Missing data is never reported
/// through this type.
#[derive(Debug, Snafu)]
#[snafu(module, visibility(pub))]
pub enum ScheduleError {
    #[snafu(display("A service name is required"))]
    MissingServiceName {
        #[snafu(implicit)]
        location: Location,
    },
}

impl Error {
    #[track_caller]
    pub fn source_failure(error: impl Into<BoxedError>) -> Self {
        let location = std::panic::Location::caller();
        Error::Source {
            location: Location::new(location.file(), location.line(), location.column()),
            error: error.into(),
        }
    }

    #[track_caller]
    pub fn unexpected(error: impl Into<BoxedError>) -> Self {
        let location = std::panic::Location::caller();
        Error::Unexpected {
            location: Location::new(location.file(), location.line(), location.column()),
            error: error.into(),
        }
    }

    #[track_caller]
    pub fn store_failure(error: impl Into<BoxedError>) -> Self {
        let location = std::panic::Location::caller();
        Error::Store {
            location: Location::new(location.file(), location.line(), location.column()),
            error: error.into(),
        }
    }
}
