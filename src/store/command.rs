//! Typed commands
//!
//! The closed set of requests the reducer accepts. Commands are plain data
//! and serializable, so a UI layer can queue or replay them.

use crate::model::{
    Block, BoardColumn, NotificationGroup, NotificationKind, ReminderOption, Sender, TableColumn,
};
use serde::{Deserialize, Serialize};

/// A request to transform the workspace snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Command {
    /// Make a page current and switch to the pages view.
    SelectPage { page_id: String },
    /// Flip the dark-mode flag.
    ToggleTheme,
    /// Create a page (and its content) under an optional parent. When no
    /// blocks are supplied the page starts with one empty text block.
    AddPage {
        title: String,
        parent_id: Option<String>,
        blocks: Option<Vec<Block>>,
    },
    /// Replace a page's block sequence wholesale.
    UpdatePageBlocks { page_id: String, blocks: Vec<Block> },
    /// Patch one block anywhere in the page's tree, found by id.
    UpdateBlockProperty {
        page_id: String,
        block_id: String,
        patch: PropertyPatch,
    },
    /// Set the title; the icon is replaced only when provided.
    UpdatePageTitle {
        page_id: String,
        title: String,
        icon: Option<String>,
    },
    ToggleSidebarExpanded { page_id: String },
    ToggleFavorite { page_id: String },
    /// Re-home a page. Rejects self-parenting and ancestor cycles.
    SetPageParent {
        page_id: String,
        parent_id: Option<String>,
    },
    /// Remove a page and its content. No-op for unknown ids.
    DeletePage { page_id: String },
    SetUiFlag { patch: UiPatch },
    AddNotification { draft: NotificationDraft },
    MarkNotificationRead { id: String },
    MarkAllNotificationsRead,
    AddEnvVar { key: String, value: String },
    UpdateEnvVar {
        id: String,
        key: Option<String>,
        value: Option<String>,
    },
    RemoveEnvVar { id: String },
}

impl Command {
    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Command::SelectPage { .. } => "SelectPage",
            Command::ToggleTheme => "ToggleTheme",
            Command::AddPage { .. } => "AddPage",
            Command::UpdatePageBlocks { .. } => "UpdatePageBlocks",
            Command::UpdateBlockProperty { .. } => "UpdateBlockProperty",
            Command::UpdatePageTitle { .. } => "UpdatePageTitle",
            Command::ToggleSidebarExpanded { .. } => "ToggleSidebarExpanded",
            Command::ToggleFavorite { .. } => "ToggleFavorite",
            Command::SetPageParent { .. } => "SetPageParent",
            Command::DeletePage { .. } => "DeletePage",
            Command::SetUiFlag { .. } => "SetUiFlag",
            Command::AddNotification { .. } => "AddNotification",
            Command::MarkNotificationRead { .. } => "MarkNotificationRead",
            Command::MarkAllNotificationsRead => "MarkAllNotificationsRead",
            Command::AddEnvVar { .. } => "AddEnvVar",
            Command::UpdateEnvVar { .. } => "UpdateEnvVar",
            Command::RemoveEnvVar { .. } => "RemoveEnvVar",
        }
    }
}

/// A typed patch for one block field.
///
/// `Open` lands on the block itself; every other variant lands in the
/// block's properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PropertyPatch {
    Open(bool),
    Checked(bool),
    Language(String),
    Columns(Vec<TableColumn>),
    Rows(Vec<Vec<String>>),
    BoardColumns(Vec<BoardColumn>),
    Reminder(ReminderOption),
}

/// A typed patch for one UI flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UiPatch {
    SearchOpen(bool),
    SettingsOpen(bool),
    AiOpen(bool),
    TemplatesOpen(bool),
    ActiveView(crate::model::ActiveView),
}

/// Fields for a new notification; id and read flag are assigned by the
/// reducer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationDraft {
    pub kind: NotificationKind,
    pub title: String,
    pub context: String,
    #[serde(default)]
    pub description: Option<String>,
    pub time: String,
    #[serde(default)]
    pub page_id: Option<String>,
    #[serde(default)]
    pub sender: Option<Sender>,
    #[serde(default)]
    pub group: Option<NotificationGroup>,
}
