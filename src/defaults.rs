//! Seed workspace
//!
//! The default snapshot used on first launch and whenever the persisted
//! snapshot cannot be read: two pages with demo content, a small inbox,
//! and placeholder env vars.

use crate::model::{
    Block, BlockKind, BlockProperties, EnvVar, Notification, NotificationGroup, NotificationKind,
    PageContent, PageMetadata, Sender, UiState, UserProfile, WorkspaceSnapshot,
};
use chrono::Utc;
use std::collections::BTreeMap;

/// Build the seed snapshot. Page and block ids are fixed; timestamps are
/// stamped at call time.
pub fn seed_snapshot() -> WorkspaceSnapshot {
    let now = Utc::now();

    let mut pages = BTreeMap::new();
    pages.insert(
        "root-1".to_string(),
        PageMetadata {
            id: "root-1".into(),
            icon: "🏠".into(),
            title: "Home".into(),
            parent_id: None,
            created_at: now,
            updated_at: now,
            is_expanded: true,
            is_favorite: false,
        },
    );
    pages.insert(
        "root-2".to_string(),
        PageMetadata {
            id: "root-2".into(),
            icon: "🚀".into(),
            title: "Engineering".into(),
            parent_id: None,
            created_at: now,
            updated_at: now,
            is_expanded: true,
            is_favorite: false,
        },
    );

    let mut content = BTreeMap::new();
    content.insert("root-1".to_string(), home_content());
    content.insert("root-2".to_string(), engineering_content());

    WorkspaceSnapshot {
        pages,
        content,
        notifications: seed_notifications(),
        env_vars: vec![
            env_var("1", "API_KEY", "demo-api-key"),
            env_var("2", "GEMINI_API_KEY", "demo-gemini-key"),
            env_var("3", "GOOGLE_API_KEY", "demo-google-key"),
        ],
        current_page_id: Some("root-1".into()),
        is_dark_mode: false,
        user: Some(UserProfile {
            name: "Oluqman".into(),
            email: "oluqman@example.com".into(),
            avatar: "https://i.pravatar.cc/150?u=olu".into(),
        }),
        ui: UiState::default(),
    }
}

fn home_content() -> PageContent {
    let mut page = PageContent::new(
        "root-1",
        vec![
            block("b1", BlockKind::H1, "Welcome to Filebox"),
            block(
                "b2",
                BlockKind::Text,
                "This is a demo of a block-based editor.",
            ),
            block(
                "b3",
                BlockKind::Quote,
                "Notion is more than just notes. It's a way of thinking.",
            ),
            block("b4", BlockKind::H2, "Features"),
            todo("b5", "Try the slash command (type /)", false),
            todo("b6", "Try dragging blocks", true),
            todo("b7", "Dark mode toggle", false),
            block("b8", BlockKind::Divider, ""),
            block("b9", BlockKind::Text, "Try typing below..."),
        ],
    );
    page.cover_image = Some("https://picsum.photos/seed/notion/1200/300".into());
    page
}

fn engineering_content() -> PageContent {
    let mut toggle = block("eng-toggle", BlockKind::Toggle, "Backend API Status");
    toggle.children = vec![block(
        "eng-code",
        BlockKind::Code,
        "GET /api/v1/status\n{\n  \"status\": \"ok\"\n}",
    )
    .with_properties(BlockProperties::Code {
        language: "json".into(),
    })];

    PageContent::new(
        "root-2",
        vec![
            block("eng-1", BlockKind::H1, "Engineering Team"),
            block("eng-2", BlockKind::Text, "Central hub for dev docs."),
            toggle,
        ],
    )
}

fn seed_notifications() -> Vec<Notification> {
    vec![
        Notification {
            id: "n1".into(),
            kind: NotificationKind::System,
            title: "Filebox AI".into(),
            context: "Meeting Notes".into(),
            description: Some("I've summarized your meeting notes.".into()),
            time: "2m ago".into(),
            read: false,
            page_id: Some("root-2".into()),
            sender: None,
            group: Some(NotificationGroup::Today),
        },
        Notification {
            id: "n2".into(),
            kind: NotificationKind::Mention,
            title: "Engineering Team".into(),
            context: "API Status".into(),
            description: Some("mentioned you".into()),
            time: "1h ago".into(),
            read: false,
            page_id: Some("root-2".into()),
            sender: Some(Sender {
                name: "Engineering Team".into(),
                avatar: "https://i.pravatar.cc/150?u=eng".into(),
            }),
            group: Some(NotificationGroup::Today),
        },
        Notification {
            id: "n3".into(),
            kind: NotificationKind::System,
            title: "Welcome to Filebox!".into(),
            context: "Home".into(),
            description: Some("Try the new Calendar view.".into()),
            time: "1d ago".into(),
            read: true,
            page_id: Some("root-1".into()),
            sender: None,
            group: Some(NotificationGroup::Yesterday),
        },
    ]
}

fn block(id: &str, kind: BlockKind, content: &str) -> Block {
    let mut block = Block::new(kind, content);
    block.id = id.to_string();
    block
}

fn todo(id: &str, content: &str, checked: bool) -> Block {
    block(id, BlockKind::Todo, content).with_properties(BlockProperties::Todo { checked })
}

fn env_var(id: &str, key: &str, value: &str) -> EnvVar {
    EnvVar {
        id: id.into(),
        key: key.into(),
        value: value.into(),
    }
}
