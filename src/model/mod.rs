//! Workspace data model
//!
//! Model definitions for pages, blocks, notifications and the aggregate
//! workspace snapshot. All types use serde with camelCase field names,
//! matching the persisted snapshot format.

pub mod block;
pub mod notification;
pub mod page;
pub mod workspace;

pub use block::{
    Block, BlockKind, BlockProperties, BoardColumn, ColumnKind, ReminderOption, TableColumn,
    TableProperties,
};
pub use notification::{Notification, NotificationGroup, NotificationKind, Sender};
pub use page::{PageContent, PageMetadata};
pub use workspace::{ActiveView, EnvVar, UiState, UserProfile, WorkspaceSnapshot};
