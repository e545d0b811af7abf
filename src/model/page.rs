//! Page model
//!
//! Pages form a forest: metadata entries carry an optional parent id, and
//! content entries are keyed 1:1 with page ids. A page and its content are
//! created together and deleted together.

use crate::model::Block;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Page metadata: the sidebar-facing half of a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    pub id: String,
    /// Display glyph, e.g. an emoji.
    pub icon: String,
    pub title: String,
    /// None for root pages.
    pub parent_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub is_expanded: bool,
    #[serde(default)]
    pub is_favorite: bool,
}

/// Page content: cover image plus the ordered block sequence.
///
/// Invariants: at least one block, and block ids are unique across the
/// whole tree (top level and all descendants).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageContent {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    pub blocks: Vec<Block>,
}

impl PageContent {
    pub fn new(id: impl Into<String>, blocks: Vec<Block>) -> Self {
        Self {
            id: id.into(),
            cover_image: None,
            blocks,
        }
    }
}
