//! Snapshot reducer
//!
//! `apply` is the store's whole contract: given the previous snapshot and a
//! command, produce the next snapshot. The input is never mutated; commands
//! against missing identifiers return an explicit error and leave the
//! caller's snapshot as it was.

use crate::config::{DEFAULT_PAGE_ICON, DEFAULT_PAGE_TITLE};
use crate::error::{Result, StoreError};
use crate::id::generate_id;
use crate::model::{
    ActiveView, Block, BlockProperties, EnvVar, Notification, PageContent, PageMetadata,
    TableProperties, WorkspaceSnapshot,
};
use crate::store::command::{Command, NotificationDraft, PropertyPatch, UiPatch};
use crate::store::tree;
use chrono::Utc;
use std::collections::{BTreeMap, HashSet};

/// Apply a command to a snapshot, producing the next snapshot.
pub fn apply(snapshot: &WorkspaceSnapshot, command: Command) -> Result<WorkspaceSnapshot> {
    let mut next = snapshot.clone();

    match command {
        Command::SelectPage { page_id } => {
            if !next.pages.contains_key(&page_id) {
                return Err(StoreError::PageNotFound(page_id));
            }
            next.current_page_id = Some(page_id);
            next.ui.active_view = ActiveView::Pages;
        }

        Command::ToggleTheme => {
            next.is_dark_mode = !next.is_dark_mode;
        }

        Command::AddPage {
            title,
            parent_id,
            blocks,
        } => {
            if let Some(parent_id) = &parent_id {
                let parent = next
                    .pages
                    .get_mut(parent_id)
                    .ok_or_else(|| StoreError::PageNotFound(parent_id.clone()))?;
                parent.is_expanded = true;
            }

            let id = generate_id();
            let blocks = blocks.unwrap_or_else(|| vec![Block::empty_text()]);
            validate_blocks(&id, &blocks)?;

            let now = Utc::now();
            let title = if title.is_empty() {
                DEFAULT_PAGE_TITLE.to_string()
            } else {
                title
            };
            next.pages.insert(
                id.clone(),
                PageMetadata {
                    id: id.clone(),
                    icon: DEFAULT_PAGE_ICON.to_string(),
                    title,
                    parent_id,
                    created_at: now,
                    updated_at: now,
                    is_expanded: false,
                    is_favorite: false,
                },
            );
            next.content
                .insert(id.clone(), PageContent::new(id.clone(), blocks));
            next.current_page_id = Some(id);
            next.ui.active_view = ActiveView::Pages;
        }

        Command::UpdatePageBlocks { page_id, blocks } => {
            validate_blocks(&page_id, &blocks)?;
            let content = next
                .content
                .get_mut(&page_id)
                .ok_or_else(|| StoreError::PageNotFound(page_id.clone()))?;
            content.blocks = blocks;
            touch(&mut next.pages, &page_id);
        }

        Command::UpdateBlockProperty {
            page_id,
            block_id,
            patch,
        } => {
            let content = next
                .content
                .get_mut(&page_id)
                .ok_or_else(|| StoreError::PageNotFound(page_id.clone()))?;
            let found =
                tree::update_block(&mut content.blocks, &block_id, |block| {
                    apply_patch(block, patch)
                });
            if !found {
                return Err(StoreError::BlockNotFound { page_id, block_id });
            }
            touch(&mut next.pages, &page_id);
        }

        Command::UpdatePageTitle {
            page_id,
            title,
            icon,
        } => {
            let page = next
                .pages
                .get_mut(&page_id)
                .ok_or_else(|| StoreError::PageNotFound(page_id.clone()))?;
            page.title = title;
            if let Some(icon) = icon {
                page.icon = icon;
            }
            page.updated_at = Utc::now();
        }

        Command::ToggleSidebarExpanded { page_id } => {
            let page = next
                .pages
                .get_mut(&page_id)
                .ok_or_else(|| StoreError::PageNotFound(page_id.clone()))?;
            page.is_expanded = !page.is_expanded;
        }

        Command::ToggleFavorite { page_id } => {
            let page = next
                .pages
                .get_mut(&page_id)
                .ok_or_else(|| StoreError::PageNotFound(page_id.clone()))?;
            page.is_favorite = !page.is_favorite;
        }

        Command::SetPageParent { page_id, parent_id } => {
            if !next.pages.contains_key(&page_id) {
                return Err(StoreError::PageNotFound(page_id));
            }
            if let Some(parent_id) = &parent_id {
                if !next.pages.contains_key(parent_id) {
                    return Err(StoreError::PageNotFound(parent_id.clone()));
                }
                if *parent_id == page_id || is_descendant(&next.pages, parent_id, &page_id) {
                    return Err(StoreError::ParentCycle(page_id));
                }
                if let Some(parent) = next.pages.get_mut(parent_id) {
                    parent.is_expanded = true;
                }
            }
            if let Some(page) = next.pages.get_mut(&page_id) {
                page.parent_id = parent_id;
                page.updated_at = Utc::now();
            }
        }

        Command::DeletePage { page_id } => {
            if next.pages.remove(&page_id).is_none() {
                tracing::debug!("Delete for unknown page ignored: {}", page_id);
                return Ok(next);
            }
            next.content.remove(&page_id);
            if next.current_page_id.as_deref() == Some(page_id.as_str()) {
                next.current_page_id = next.pages.keys().next().cloned();
            }
        }

        Command::SetUiFlag { patch } => match patch {
            UiPatch::SearchOpen(open) => next.ui.is_search_open = open,
            UiPatch::SettingsOpen(open) => next.ui.is_settings_open = open,
            UiPatch::AiOpen(open) => next.ui.is_ai_open = open,
            UiPatch::TemplatesOpen(open) => next.ui.is_templates_open = open,
            UiPatch::ActiveView(view) => next.ui.active_view = view,
        },

        Command::AddNotification { draft } => {
            next.notifications.insert(0, build_notification(draft));
        }

        Command::MarkNotificationRead { id } => {
            let notification = next
                .notifications
                .iter_mut()
                .find(|n| n.id == id)
                .ok_or(StoreError::NotificationNotFound(id))?;
            notification.read = true;
        }

        Command::MarkAllNotificationsRead => {
            for notification in &mut next.notifications {
                notification.read = true;
            }
        }

        Command::AddEnvVar { key, value } => {
            next.env_vars.push(EnvVar {
                id: generate_id(),
                key,
                value,
            });
        }

        Command::UpdateEnvVar { id, key, value } => {
            let var = next
                .env_vars
                .iter_mut()
                .find(|v| v.id == id)
                .ok_or(StoreError::EnvVarNotFound(id))?;
            if let Some(key) = key {
                var.key = key;
            }
            if let Some(value) = value {
                var.value = value;
            }
        }

        Command::RemoveEnvVar { id } => {
            let index = next
                .env_vars
                .iter()
                .position(|v| v.id == id)
                .ok_or(StoreError::EnvVarNotFound(id))?;
            next.env_vars.remove(index);
        }
    }

    Ok(next)
}

/// Route a patch to its storage location: the open flag lives on the block
/// itself, everything else in the properties union.
fn apply_patch(block: &mut Block, patch: PropertyPatch) {
    match patch {
        PropertyPatch::Open(open) => block.is_open = open,
        PropertyPatch::Checked(checked) => {
            block.properties = Some(BlockProperties::Todo { checked });
        }
        PropertyPatch::Language(language) => {
            block.properties = Some(BlockProperties::Code { language });
        }
        PropertyPatch::Columns(columns) => match &mut block.properties {
            Some(BlockProperties::Table(table)) => table.columns = columns,
            _ => {
                block.properties =
                    Some(BlockProperties::Table(TableProperties::new(columns, vec![])));
            }
        },
        PropertyPatch::Rows(rows) => match &mut block.properties {
            Some(BlockProperties::Table(table)) => table.rows = rows,
            _ => {
                block.properties =
                    Some(BlockProperties::Table(TableProperties::new(vec![], rows)));
            }
        },
        PropertyPatch::BoardColumns(columns) => {
            block.properties = Some(BlockProperties::Board { columns });
        }
        PropertyPatch::Reminder(reminder) => {
            block.properties = Some(BlockProperties::Date { reminder });
        }
    }
}

/// Reject sequences that would break the page invariants: at least one
/// block, and ids unique across the whole tree.
fn validate_blocks(page_id: &str, blocks: &[Block]) -> Result<()> {
    if blocks.is_empty() {
        return Err(StoreError::EmptyBlockSequence(page_id.to_string()));
    }
    if let Some(block_id) = tree::duplicate_id(blocks) {
        return Err(StoreError::DuplicateBlockId {
            page_id: page_id.to_string(),
            block_id,
        });
    }
    Ok(())
}

/// Bump a page's updated-at stamp, if the page still exists.
fn touch(pages: &mut BTreeMap<String, PageMetadata>, page_id: &str) {
    if let Some(page) = pages.get_mut(page_id) {
        page.updated_at = Utc::now();
    }
}

/// Whether `page_id` sits in the ancestor chain of `start_id`. The visited
/// set keeps a malformed persisted chain from looping the walk.
fn is_descendant(pages: &BTreeMap<String, PageMetadata>, start_id: &str, page_id: &str) -> bool {
    let mut visited = HashSet::new();
    let mut cursor = Some(start_id.to_string());
    while let Some(id) = cursor {
        if id == page_id {
            return true;
        }
        if !visited.insert(id.clone()) {
            return false;
        }
        cursor = pages.get(&id).and_then(|p| p.parent_id.clone());
    }
    false
}

fn build_notification(draft: NotificationDraft) -> Notification {
    Notification {
        id: generate_id(),
        kind: draft.kind,
        title: draft.title,
        context: draft.context,
        description: draft.description,
        time: draft.time,
        read: false,
        page_id: draft.page_id,
        sender: draft.sender,
        group: draft.group,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::seed_snapshot;
    use crate::model::{BlockKind, NotificationKind, ReminderOption};
    use crate::store::command::NotificationDraft;

    fn draft(title: &str) -> NotificationDraft {
        NotificationDraft {
            kind: NotificationKind::Reminder,
            title: title.to_string(),
            context: "Home".to_string(),
            description: None,
            time: "Just now".to_string(),
            page_id: None,
            sender: None,
            group: None,
        }
    }

    #[test]
    fn test_apply_never_mutates_input() {
        let snapshot = seed_snapshot();
        let before = snapshot.clone();

        let commands = vec![
            Command::ToggleTheme,
            Command::SelectPage {
                page_id: "root-2".into(),
            },
            Command::AddPage {
                title: "New".into(),
                parent_id: None,
                blocks: None,
            },
            Command::DeletePage {
                page_id: "root-1".into(),
            },
            Command::MarkAllNotificationsRead,
        ];
        for command in commands {
            apply(&snapshot, command).unwrap();
            assert_eq!(snapshot, before);
        }
    }

    #[test]
    fn test_select_page_forces_pages_view() {
        let mut snapshot = seed_snapshot();
        snapshot.ui.active_view = ActiveView::Inbox;
        let next = apply(
            &snapshot,
            Command::SelectPage {
                page_id: "root-2".into(),
            },
        )
        .unwrap();
        assert_eq!(next.current_page_id.as_deref(), Some("root-2"));
        assert_eq!(next.ui.active_view, ActiveView::Pages);
    }

    #[test]
    fn test_select_missing_page_is_not_found() {
        let snapshot = seed_snapshot();
        let err = apply(
            &snapshot,
            Command::SelectPage {
                page_id: "ghost".into(),
            },
        )
        .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_add_page_creates_metadata_and_content() {
        let snapshot = seed_snapshot();
        let next = apply(
            &snapshot,
            Command::AddPage {
                title: "Untitled".into(),
                parent_id: None,
                blocks: None,
            },
        )
        .unwrap();

        let new_id = next.current_page_id.clone().unwrap();
        assert!(!snapshot.pages.contains_key(&new_id));
        let page = &next.pages[&new_id];
        assert_eq!(page.title, "Untitled");
        assert_eq!(page.icon, DEFAULT_PAGE_ICON);
        assert!(page.parent_id.is_none());
        assert!(!page.is_expanded);

        let content = &next.content[&new_id];
        assert_eq!(content.blocks.len(), 1);
        assert_eq!(content.blocks[0].kind, BlockKind::Text);
        assert_eq!(content.blocks[0].content, "");
        assert_eq!(next.ui.active_view, ActiveView::Pages);
    }

    #[test]
    fn test_add_page_expands_parent() {
        let mut snapshot = seed_snapshot();
        snapshot.pages.get_mut("root-2").unwrap().is_expanded = false;
        let next = apply(
            &snapshot,
            Command::AddPage {
                title: "Sub".into(),
                parent_id: Some("root-2".into()),
                blocks: None,
            },
        )
        .unwrap();
        assert!(next.pages["root-2"].is_expanded);
        let new_id = next.current_page_id.unwrap();
        assert_eq!(next.pages[&new_id].parent_id.as_deref(), Some("root-2"));
    }

    #[test]
    fn test_add_page_with_missing_parent_fails() {
        let snapshot = seed_snapshot();
        let err = apply(
            &snapshot,
            Command::AddPage {
                title: "Orphan".into(),
                parent_id: Some("ghost".into()),
                blocks: None,
            },
        )
        .unwrap_err();
        assert!(matches!(err, StoreError::PageNotFound(id) if id == "ghost"));
    }

    #[test]
    fn test_add_page_empty_title_defaults() {
        let snapshot = seed_snapshot();
        let next = apply(
            &snapshot,
            Command::AddPage {
                title: String::new(),
                parent_id: None,
                blocks: None,
            },
        )
        .unwrap();
        let new_id = next.current_page_id.unwrap();
        assert_eq!(next.pages[&new_id].title, DEFAULT_PAGE_TITLE);
    }

    #[test]
    fn test_update_page_blocks_replaces_wholesale() {
        let mut snapshot = seed_snapshot();
        // back-date so the touch is visible even on a coarse clock
        let stale = Utc::now() - chrono::Duration::minutes(5);
        snapshot.pages.get_mut("root-1").unwrap().updated_at = stale;
        let replacement = vec![Block::new(BlockKind::H1, "Hi")];
        let next = apply(
            &snapshot,
            Command::UpdatePageBlocks {
                page_id: "root-1".into(),
                blocks: replacement.clone(),
            },
        )
        .unwrap();
        assert_eq!(next.content["root-1"].blocks, replacement);
        assert!(next.pages["root-1"].updated_at > snapshot.pages["root-1"].updated_at);
        // untouched page shares identical content
        assert_eq!(next.content["root-2"], snapshot.content["root-2"]);
    }

    #[test]
    fn test_update_page_blocks_rejects_empty() {
        let snapshot = seed_snapshot();
        let err = apply(
            &snapshot,
            Command::UpdatePageBlocks {
                page_id: "root-1".into(),
                blocks: vec![],
            },
        )
        .unwrap_err();
        assert!(matches!(err, StoreError::EmptyBlockSequence(_)));
    }

    #[test]
    fn test_update_page_blocks_rejects_duplicate_ids() {
        let snapshot = seed_snapshot();
        let mut a = Block::text("a");
        a.id = "dup".into();
        let mut b = Block::text("b");
        b.id = "dup".into();
        let err = apply(
            &snapshot,
            Command::UpdatePageBlocks {
                page_id: "root-1".into(),
                blocks: vec![a, b],
            },
        )
        .unwrap_err();
        assert!(matches!(err, StoreError::DuplicateBlockId { block_id, .. } if block_id == "dup"));
    }

    #[test]
    fn test_update_nested_block_property() {
        // Seed has a code child "eng-code" inside the toggle on root-2.
        let snapshot = seed_snapshot();
        let next = apply(
            &snapshot,
            Command::UpdateBlockProperty {
                page_id: "root-2".into(),
                block_id: "eng-code".into(),
                patch: PropertyPatch::Language("rust".into()),
            },
        )
        .unwrap();

        let toggle = &next.content["root-2"].blocks[2];
        assert_eq!(
            toggle.children[0].properties,
            Some(BlockProperties::Code {
                language: "rust".into()
            })
        );
        // siblings and ancestors untouched apart from the path to the target
        assert_eq!(
            next.content["root-2"].blocks[0],
            snapshot.content["root-2"].blocks[0]
        );
        assert_eq!(
            next.content["root-2"].blocks[1],
            snapshot.content["root-2"].blocks[1]
        );
        assert_eq!(toggle.content, snapshot.content["root-2"].blocks[2].content);
        assert_eq!(next.content["root-1"], snapshot.content["root-1"]);
    }

    #[test]
    fn test_update_block_property_miss_is_error() {
        let snapshot = seed_snapshot();
        let err = apply(
            &snapshot,
            Command::UpdateBlockProperty {
                page_id: "root-1".into(),
                block_id: "ghost".into(),
                patch: PropertyPatch::Checked(true),
            },
        )
        .unwrap_err();
        assert!(matches!(err, StoreError::BlockNotFound { .. }));
    }

    #[test]
    fn test_open_patch_lands_on_block_not_properties() {
        let snapshot = seed_snapshot();
        let next = apply(
            &snapshot,
            Command::UpdateBlockProperty {
                page_id: "root-2".into(),
                block_id: "eng-toggle".into(),
                patch: PropertyPatch::Open(true),
            },
        )
        .unwrap();
        let toggle = &next.content["root-2"].blocks[2];
        assert!(toggle.is_open);
        assert_eq!(toggle.properties, None);
    }

    #[test]
    fn test_reminder_patch() {
        let snapshot = seed_snapshot();
        let next = apply(
            &snapshot,
            Command::UpdateBlockProperty {
                page_id: "root-1".into(),
                block_id: "b5".into(),
                patch: PropertyPatch::Reminder(ReminderOption::OneDayBefore),
            },
        )
        .unwrap();
        let block = tree::find_block(&next.content["root-1"].blocks, "b5").unwrap();
        assert_eq!(
            block.properties,
            Some(BlockProperties::Date {
                reminder: ReminderOption::OneDayBefore
            })
        );
    }

    #[test]
    fn test_update_page_title_keeps_icon_unless_provided() {
        let snapshot = seed_snapshot();
        let next = apply(
            &snapshot,
            Command::UpdatePageTitle {
                page_id: "root-1".into(),
                title: "Renamed".into(),
                icon: None,
            },
        )
        .unwrap();
        assert_eq!(next.pages["root-1"].title, "Renamed");
        assert_eq!(next.pages["root-1"].icon, snapshot.pages["root-1"].icon);

        let next = apply(
            &next,
            Command::UpdatePageTitle {
                page_id: "root-1".into(),
                title: "Renamed".into(),
                icon: Some("🚀".into()),
            },
        )
        .unwrap();
        assert_eq!(next.pages["root-1"].icon, "🚀");
    }

    #[test]
    fn test_toggle_flags() {
        let snapshot = seed_snapshot();
        let next = apply(
            &snapshot,
            Command::ToggleFavorite {
                page_id: "root-1".into(),
            },
        )
        .unwrap();
        assert!(next.pages["root-1"].is_favorite);

        let next = apply(
            &next,
            Command::ToggleSidebarExpanded {
                page_id: "root-1".into(),
            },
        )
        .unwrap();
        assert_ne!(
            next.pages["root-1"].is_expanded,
            snapshot.pages["root-1"].is_expanded
        );
    }

    #[test]
    fn test_delete_page_removes_content_too() {
        let snapshot = seed_snapshot();
        let next = apply(
            &snapshot,
            Command::DeletePage {
                page_id: "root-1".into(),
            },
        )
        .unwrap();
        assert!(!next.pages.contains_key("root-1"));
        assert!(!next.content.contains_key("root-1"));
    }

    #[test]
    fn test_delete_current_page_moves_selector() {
        let snapshot = seed_snapshot();
        assert_eq!(snapshot.current_page_id.as_deref(), Some("root-1"));
        let next = apply(
            &snapshot,
            Command::DeletePage {
                page_id: "root-1".into(),
            },
        )
        .unwrap();
        let current = next.current_page_id.clone().unwrap();
        assert_ne!(current, "root-1");
        assert!(next.pages.contains_key(&current));
    }

    #[test]
    fn test_delete_last_page_clears_selector() {
        let mut snapshot = seed_snapshot();
        let ids: Vec<String> = snapshot.pages.keys().cloned().collect();
        for id in &ids[1..] {
            snapshot = apply(
                &snapshot,
                Command::DeletePage {
                    page_id: id.clone(),
                },
            )
            .unwrap();
        }
        let next = apply(
            &snapshot,
            Command::DeletePage {
                page_id: ids[0].clone(),
            },
        )
        .unwrap();
        assert!(next.pages.is_empty());
        assert_eq!(next.current_page_id, None);
    }

    #[test]
    fn test_delete_missing_page_is_noop() {
        let snapshot = seed_snapshot();
        let next = apply(
            &snapshot,
            Command::DeletePage {
                page_id: "ghost".into(),
            },
        )
        .unwrap();
        assert_eq!(next, snapshot);
    }

    #[test]
    fn test_set_page_parent_rejects_self_and_cycles() {
        let snapshot = seed_snapshot();
        let with_child = apply(
            &snapshot,
            Command::AddPage {
                title: "Child".into(),
                parent_id: Some("root-2".into()),
                blocks: None,
            },
        )
        .unwrap();
        let child_id = with_child.current_page_id.clone().unwrap();

        let err = apply(
            &with_child,
            Command::SetPageParent {
                page_id: "root-2".into(),
                parent_id: Some("root-2".into()),
            },
        )
        .unwrap_err();
        assert!(matches!(err, StoreError::ParentCycle(_)));

        // root-2 under its own child closes a loop
        let err = apply(
            &with_child,
            Command::SetPageParent {
                page_id: "root-2".into(),
                parent_id: Some(child_id.clone()),
            },
        )
        .unwrap_err();
        assert!(matches!(err, StoreError::ParentCycle(_)));

        // a legal reparent works and detaching works
        let moved = apply(
            &with_child,
            Command::SetPageParent {
                page_id: child_id.clone(),
                parent_id: Some("root-1".into()),
            },
        )
        .unwrap();
        assert_eq!(
            moved.pages[&child_id].parent_id.as_deref(),
            Some("root-1")
        );
        let detached = apply(
            &moved,
            Command::SetPageParent {
                page_id: child_id.clone(),
                parent_id: None,
            },
        )
        .unwrap();
        assert_eq!(detached.pages[&child_id].parent_id, None);
    }

    #[test]
    fn test_notifications() {
        let snapshot = seed_snapshot();
        let next = apply(
            &snapshot,
            Command::AddNotification {
                draft: draft("Reminder: Standup"),
            },
        )
        .unwrap();
        assert_eq!(next.notifications.len(), snapshot.notifications.len() + 1);
        assert_eq!(next.notifications[0].title, "Reminder: Standup");
        assert!(!next.notifications[0].read);

        let id = next.notifications[0].id.clone();
        let next = apply(&next, Command::MarkNotificationRead { id: id.clone() }).unwrap();
        assert!(next.notifications[0].read);

        let next = apply(&next, Command::MarkAllNotificationsRead).unwrap();
        assert!(next.notifications.iter().all(|n| n.read));

        let err = apply(
            &next,
            Command::MarkNotificationRead { id: "ghost".into() },
        )
        .unwrap_err();
        assert!(matches!(err, StoreError::NotificationNotFound(_)));
    }

    #[test]
    fn test_env_var_crud() {
        let snapshot = seed_snapshot();
        let next = apply(
            &snapshot,
            Command::AddEnvVar {
                key: "TOKEN".into(),
                value: "abc".into(),
            },
        )
        .unwrap();
        let var = next.env_vars.last().unwrap().clone();
        assert_eq!(var.key, "TOKEN");

        let next = apply(
            &next,
            Command::UpdateEnvVar {
                id: var.id.clone(),
                key: None,
                value: Some("xyz".into()),
            },
        )
        .unwrap();
        let updated = next.env_vars.iter().find(|v| v.id == var.id).unwrap();
        assert_eq!(updated.key, "TOKEN");
        assert_eq!(updated.value, "xyz");

        let next = apply(
            &next,
            Command::RemoveEnvVar {
                id: var.id.clone(),
            },
        )
        .unwrap();
        assert!(next.env_vars.iter().all(|v| v.id != var.id));

        let err = apply(&next, Command::RemoveEnvVar { id: var.id }).unwrap_err();
        assert!(matches!(err, StoreError::EnvVarNotFound(_)));
    }

    #[test]
    fn test_ui_flags_and_theme() {
        let snapshot = seed_snapshot();
        let next = apply(&snapshot, Command::ToggleTheme).unwrap();
        assert_ne!(next.is_dark_mode, snapshot.is_dark_mode);

        let next = apply(
            &next,
            Command::SetUiFlag {
                patch: UiPatch::SearchOpen(true),
            },
        )
        .unwrap();
        assert!(next.ui.is_search_open);

        let next = apply(
            &next,
            Command::SetUiFlag {
                patch: UiPatch::ActiveView(ActiveView::Inbox),
            },
        )
        .unwrap();
        assert_eq!(next.ui.active_view, ActiveView::Inbox);
    }
}
