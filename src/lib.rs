//! Filebox workspace core
//!
//! The state core of a block-based workspace editor: a typed page/block
//! model, a pure reducer over an immutable workspace snapshot, sequence
//! editing helpers, a template catalog, and JSON snapshot persistence.
//!
//! UI layers construct a [`store::WorkspaceStore`], dispatch
//! [`store::Command`]s against it, and re-render from the snapshot it
//! yields after each command.

pub mod config;
pub mod defaults;
pub mod editor;
pub mod error;
pub mod id;
pub mod model;
pub mod storage;
pub mod store;
pub mod templates;
