//! Workspace snapshot
//!
//! The aggregate, immutable state of the workspace at one instant. The
//! snapshot is both the unit the reducer transforms and the unit of
//! persistence.

use crate::model::{Notification, PageContent, PageMetadata};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An environment variable entry. Values are plaintext; this is demo data,
/// not a secrets manager.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvVar {
    pub id: String,
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub avatar: String,
}

/// Which main view the UI is showing.
///
/// Persisted snapshots from older versions may carry views that no longer
/// exist (e.g. a deployment dashboard); anything unrecognized loads as
/// `Pages`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ActiveView {
    #[default]
    Pages,
    Inbox,
}

impl From<String> for ActiveView {
    fn from(value: String) -> Self {
        match value.as_str() {
            "inbox" => ActiveView::Inbox,
            _ => ActiveView::Pages,
        }
    }
}

impl From<ActiveView> for String {
    fn from(view: ActiveView) -> Self {
        match view {
            ActiveView::Pages => "pages".to_string(),
            ActiveView::Inbox => "inbox".to_string(),
        }
    }
}

/// Transient UI flags. Part of the snapshot so panels reopen where the
/// user left them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiState {
    #[serde(default)]
    pub is_search_open: bool,
    #[serde(default)]
    pub is_settings_open: bool,
    #[serde(default)]
    pub is_ai_open: bool,
    #[serde(default)]
    pub is_templates_open: bool,
    #[serde(default)]
    pub active_view: ActiveView,
}

/// The complete workspace state at one instant.
///
/// Maps are BTreeMaps so serialization and remaining-page selection are
/// deterministic.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceSnapshot {
    pub pages: BTreeMap<String, PageMetadata>,
    pub content: BTreeMap<String, PageContent>,
    pub notifications: Vec<Notification>,
    pub env_vars: Vec<EnvVar>,
    pub current_page_id: Option<String>,
    pub is_dark_mode: bool,
    pub user: Option<UserProfile>,
    #[serde(default)]
    pub ui: UiState,
}

impl WorkspaceSnapshot {
    /// Root pages (no parent), in map order.
    pub fn root_pages(&self) -> impl Iterator<Item = &PageMetadata> {
        self.pages.values().filter(|p| p.parent_id.is_none())
    }

    /// Direct children of a page, in map order.
    pub fn children_of<'a>(&'a self, page_id: &'a str) -> impl Iterator<Item = &'a PageMetadata> {
        self.pages
            .values()
            .filter(move |p| p.parent_id.as_deref() == Some(page_id))
    }
}
