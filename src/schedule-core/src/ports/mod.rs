mod inbound;
mod outbound;

pub use inbound::*;
pub use outbound::*;

/// Persistence of the single latest snapshot.
pub trait SnapshotStore: SnapshotInbound + SnapshotOutbound + Send + Sync + 'static {}

impl<T> SnapshotStore for T where T: SnapshotInbound + SnapshotOutbound + Send + Sync + 'static {}
