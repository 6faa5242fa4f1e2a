#![deny(warnings)]
#![deny(rust_2018_idioms)]

//! Periodic pulls from the schedule source into the snapshot store.

mod refresher;
mod settings;

pub use refresher::*;
pub use settings::RefreshSettings;
