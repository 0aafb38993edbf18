//! Persistence: the session snapshot schema and the stores that hold it.
//!
//! The core never touches storage directly. A [`SnapshotStore`] is injected
//! into [`Game`](crate::game::Game), which saves after every state change.

pub mod snapshot;
pub mod store;

pub use snapshot::{SessionSnapshot, SnapshotError};
pub use store::{FileStore, MemoryStore, SnapshotStore, StoreError};
