#![deny(warnings)]
#![deny(rust_2018_idioms)]

pub mod error;
pub mod response;
pub mod routes;
pub mod settings;
pub mod startup;
pub mod state;
pub mod telemetry;
