#![deny(warnings)]
#![deny(rust_2018_idioms)]

//! Domain model, reference data and collaborator ports for the SA vessel schedule.

mod cache;
mod clock;
mod domain;
mod error;
mod ports;
mod settings;

#[cfg(feature = "test")]
pub mod test_helper;

pub use cache::*;
pub use clock::*;
pub use domain::*;
pub use error::{BoxedError, CoreResult, Error, ScheduleError};
pub use ports::*;
pub use settings::*;
