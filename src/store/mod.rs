//! Workspace store
//!
//! The canonical state container: owns the current snapshot, applies typed
//! commands through the reducer, persists on every change, and notifies
//! subscribers. The store is constructed explicitly and passed by
//! reference to its collaborators; there is no ambient/global instance.

pub mod command;
pub mod reducer;
pub mod tree;

pub use command::{Command, NotificationDraft, PropertyPatch, UiPatch};

use crate::error::Result;
use crate::model::WorkspaceSnapshot;
use crate::storage::SnapshotStore;
use crate::templates;

type Subscriber = Box<dyn Fn(&WorkspaceSnapshot)>;

/// Single-writer state container for the workspace.
pub struct WorkspaceStore {
    snapshot: WorkspaceSnapshot,
    storage: Option<SnapshotStore>,
    subscribers: Vec<Subscriber>,
}

impl WorkspaceStore {
    /// Create a store over an in-memory snapshot, without persistence.
    pub fn new(snapshot: WorkspaceSnapshot) -> Self {
        Self {
            snapshot,
            storage: None,
            subscribers: Vec::new(),
        }
    }

    /// Create a store backed by durable storage. The initial snapshot is
    /// loaded from disk, falling back to the seed workspace.
    pub fn with_storage(storage: SnapshotStore) -> Self {
        let snapshot = storage.load();
        Self {
            snapshot,
            storage: Some(storage),
            subscribers: Vec::new(),
        }
    }

    /// The current immutable snapshot.
    pub fn snapshot(&self) -> &WorkspaceSnapshot {
        &self.snapshot
    }

    /// Register an observer called with each new snapshot after a
    /// successful dispatch.
    pub fn subscribe(&mut self, subscriber: impl Fn(&WorkspaceSnapshot) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Apply a command. On success the new snapshot replaces the current
    /// one, is persisted (write failures are logged and otherwise
    /// ignored), and subscribers are notified. On error the snapshot is
    /// unchanged.
    pub fn dispatch(&mut self, command: Command) -> Result<()> {
        tracing::debug!("Dispatching command: {}", command.name());

        self.snapshot = reducer::apply(&self.snapshot, command)?;

        if let Some(storage) = &self.storage {
            if let Err(e) = storage.save(&self.snapshot) {
                tracing::warn!("Failed to persist snapshot: {}", e);
            }
        }
        for subscriber in &self.subscribers {
            subscriber(&self.snapshot);
        }
        Ok(())
    }

    /// Instantiate a template onto a page: title/icon first, then the
    /// block sequence, then close the templates panel.
    pub fn apply_template(&mut self, page_id: &str, template_id: &str) -> Result<()> {
        tracing::info!("Applying template '{}' to page {}", template_id, page_id);

        let page = templates::instantiate(template_id);
        self.dispatch(Command::UpdatePageTitle {
            page_id: page_id.to_string(),
            title: page.title,
            icon: Some(page.icon),
        })?;
        self.dispatch(Command::UpdatePageBlocks {
            page_id: page_id.to_string(),
            blocks: page.blocks,
        })?;
        self.dispatch(Command::SetUiFlag {
            patch: UiPatch::TemplatesOpen(false),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::seed_snapshot;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_dispatch_updates_snapshot() {
        let mut store = WorkspaceStore::new(seed_snapshot());
        assert!(!store.snapshot().is_dark_mode);
        store.dispatch(Command::ToggleTheme).unwrap();
        assert!(store.snapshot().is_dark_mode);
    }

    #[test]
    fn test_failed_dispatch_leaves_snapshot_unchanged() {
        let mut store = WorkspaceStore::new(seed_snapshot());
        let before = store.snapshot().clone();
        let err = store
            .dispatch(Command::SelectPage {
                page_id: "ghost".into(),
            })
            .unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(*store.snapshot(), before);
    }

    #[test]
    fn test_subscribers_see_each_new_snapshot() {
        let mut store = WorkspaceStore::new(seed_snapshot());
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        store.subscribe(move |snapshot| sink.borrow_mut().push(snapshot.is_dark_mode));

        store.dispatch(Command::ToggleTheme).unwrap();
        store.dispatch(Command::ToggleTheme).unwrap();
        assert_eq!(*seen.borrow(), vec![true, false]);
    }

    #[test]
    fn test_apply_template_sets_title_and_blocks() {
        let mut store = WorkspaceStore::new(seed_snapshot());
        store
            .dispatch(Command::AddPage {
                title: "Untitled".into(),
                parent_id: None,
                blocks: None,
            })
            .unwrap();
        let page_id = store.snapshot().current_page_id.clone().unwrap();

        store.apply_template(&page_id, "tasks-tracker").unwrap();

        let snapshot = store.snapshot();
        assert_eq!(snapshot.pages[&page_id].title, "Tasks Tracker");
        assert_eq!(snapshot.pages[&page_id].icon, "✅");
        assert!(snapshot.content[&page_id].blocks.len() > 1);
        assert!(!snapshot.ui.is_templates_open);
    }
}
