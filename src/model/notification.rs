//! Notification model

use serde::{Deserialize, Serialize};

/// Category of an inbox notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Reminder,
    Mention,
    Reply,
    System,
}

/// Temporal bucket used purely for inbox grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationGroup {
    Today,
    Yesterday,
    #[serde(rename = "This Week")]
    ThisWeek,
    Older,
}

/// Who triggered a mention or reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sender {
    pub name: String,
    pub avatar: String,
}

/// An inbox notification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub title: String,
    /// Context label, e.g. the page or channel the event happened in.
    pub context: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Display time string ("2m ago", "Yesterday").
    pub time: String,
    pub read: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender: Option<Sender>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<NotificationGroup>,
}
