mod call;
mod catalog;
mod ids;
mod snapshot;
mod vessel;

pub use call::*;
pub use catalog::*;
pub use ids::*;
pub use snapshot::*;
pub use vessel::*;
