#![deny(warnings)]
#![deny(rust_2018_idioms)]

mod error;
mod file_store;

pub use error::{Error, Result};
pub use file_store::JsonFileStore;
