#![deny(warnings)]
#![deny(rust_2018_idioms)]

//! Voyage resolution and schedule matrix construction.
//!
//! Everything here is a pure function of a snapshot, a service and the current time. Nothing
//! mutates the snapshot it reads.

mod activity;
mod columns;
mod delay;
mod error;
mod export;
mod matrix;
mod merger;
mod presentation;
mod resolver;
mod schedule;
mod sorter;
mod tabs;

pub use activity::*;
pub use columns::*;
pub use delay::*;
pub use error::{Error, Result};
pub use export::*;
pub use matrix::*;
pub use merger::*;
pub use presentation::*;
pub use resolver::*;
pub use schedule::*;
pub use sorter::*;
pub use tabs::*;
