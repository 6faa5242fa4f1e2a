#![deny(warnings)]
#![deny(rust_2018_idioms)]

//! Client for the carrier's schedule API and the [`ScheduleSource`] built on top of it.
//!
//! [`ScheduleSource`]: schedule_core::ScheduleSource

mod client;
mod convert;
mod deserialize_utils;
mod error;
mod models;
mod settings;
mod source;

pub use client::CarrierClient;
pub use convert::{DiscoveredVessel, discovered_vessels};
pub use deserialize_utils::parse_timestamp;
pub use error::{Error, Result};
pub use models::*;
pub use settings::{CarrierSettings, PortCity};
pub use source::CarrierScheduleSource;
