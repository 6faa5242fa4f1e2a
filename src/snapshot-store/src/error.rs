use snafu::{Location, Snafu};
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(module, visibility(pub))]
pub enum Error {
    #[snafu(display("IO error on snapshot file '{}'", path.display()))]
    Io {
        #[snafu(implicit)]
        location: Location,
        #[snafu(source)]
        error: std::io::Error,
        path: PathBuf,
    },
    #[snafu(display("Snapshot file '{}' is not valid JSON", path.display()))]
    Json {
        #[snafu(implicit)]
        location: Location,
        #[snafu(source)]
        error: serde_json::Error,
        path: PathBuf,
    },
}

impl From<Error> for schedule_core::Error {
    #[track_caller]
    fn from(value: Error) -> Self {
        schedule_core::Error::store_failure(value)
    }
}
