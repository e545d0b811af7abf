//! Storage module
//!
//! Durable persistence for the workspace snapshot.

pub mod snapshot_store;

pub use snapshot_store::SnapshotStore;
