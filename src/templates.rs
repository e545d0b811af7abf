//! Page templates
//!
//! Hand-authored starting pages. Instantiation is a pure function from a
//! template id to a title/icon pair plus a fresh block sequence; block ids
//! are newly generated on every call, everything else is fixed.

use crate::model::{
    Block, BlockKind, BlockProperties, BoardColumn, ColumnKind, TableColumn, TableProperties,
};

/// The recognized templates. Unrecognized ids fall back to `Docs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    TasksTracker,
    Meeting,
    Roadmap,
    Docs,
    Crm,
    Student,
    Recipe,
    Habit,
}

/// A fully instantiated template, ready to apply to a page.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplatePage {
    pub title: String,
    pub icon: String,
    pub blocks: Vec<Block>,
}

/// Instantiate a template by id.
pub fn instantiate(template_id: &str) -> TemplatePage {
    Template::from_id(template_id).instantiate()
}

impl Template {
    pub fn from_id(id: &str) -> Self {
        match id {
            "tasks-tracker" => Template::TasksTracker,
            "meeting" => Template::Meeting,
            "roadmap" => Template::Roadmap,
            "crm" => Template::Crm,
            "student" => Template::Student,
            "recipe" => Template::Recipe,
            "habit" => Template::Habit,
            _ => Template::Docs,
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            Template::TasksTracker => "tasks-tracker",
            Template::Meeting => "meeting",
            Template::Roadmap => "roadmap",
            Template::Docs => "docs",
            Template::Crm => "crm",
            Template::Student => "student",
            Template::Recipe => "recipe",
            Template::Habit => "habit",
        }
    }

    pub fn instantiate(&self) -> TemplatePage {
        match self {
            Template::TasksTracker => tasks_tracker(),
            Template::Meeting => meeting(),
            Template::Roadmap => roadmap(),
            Template::Docs => docs(),
            Template::Crm => crm(),
            Template::Student => student(),
            Template::Recipe => recipe(),
            Template::Habit => habit(),
        }
    }
}

fn page(title: &str, icon: &str, blocks: Vec<Block>) -> TemplatePage {
    TemplatePage {
        title: title.to_string(),
        icon: icon.to_string(),
        blocks,
    }
}

fn tasks_tracker() -> TemplatePage {
    let table = TableProperties::new(
        vec![
            TableColumn::new("Task name", ColumnKind::Text),
            TableColumn::new("Status", ColumnKind::Status),
            TableColumn::new("Assignee", ColumnKind::Person),
            TableColumn::new("Due date", ColumnKind::Date),
            TableColumn::new("Priority", ColumnKind::Select),
            TableColumn::new("Task type", ColumnKind::MultiSelect),
            TableColumn::new("Description", ColumnKind::Text),
        ],
        vec![
            row(&[
                "Draft launch announcement",
                "Not started",
                "Mira",
                "02/09/2026",
                "Medium",
                "Marketing",
                "Blog + changelog entry",
            ]),
            row(&[
                "Fix sidebar drag flicker",
                "In Progress",
                "Jonas",
                "02/09/2026",
                "High",
                "Bug",
                "Repro in Safari only",
            ]),
            row(&[
                "Review onboarding copy",
                "Not started",
                "Mira",
                "02/09/2026",
                "Medium",
                "Design",
                "Pairs with new empty state",
            ]),
            row(&[
                "Upgrade billing webhooks",
                "Not started",
                "Priya",
                "02/09/2026",
                "Medium",
                "Infra",
                "Stripe API v2 migration",
            ]),
        ],
    );
    page(
        "Tasks Tracker",
        "✅",
        vec![
            Block::text("Stay organized with tasks, your way."),
            Block::new(BlockKind::Table, "").with_properties(BlockProperties::Table(table)),
        ],
    )
}

fn meeting() -> TemplatePage {
    page(
        "Meeting Notes",
        "📅",
        vec![
            Block::new(BlockKind::H2, "Attendees"),
            Block::new(BlockKind::BulletList, "@User1"),
            Block::new(BlockKind::BulletList, "@User2"),
            Block::new(BlockKind::H2, "Agenda"),
            Block::new(BlockKind::Todo, "Review Q3 goals"),
            Block::new(BlockKind::Todo, "Discuss blockers"),
            Block::new(BlockKind::H2, "Action Items"),
            Block::new(BlockKind::Table, ""),
        ],
    )
}

fn roadmap() -> TemplatePage {
    page(
        "Product Roadmap",
        "🗺️",
        vec![
            Block::new(BlockKind::Callout, "This roadmap is a living document."),
            Block::new(BlockKind::H2, "Q4 2024"),
            Block::new(BlockKind::Board, "").with_properties(BlockProperties::Board {
                columns: vec![
                    BoardColumn::new("Up Next", row(&["Dark Mode V2", "Mobile App"])),
                    BoardColumn::new("In Progress", row(&["API Refactor"])),
                    BoardColumn::new("Done", row(&["Launch V1"])),
                ],
            }),
            Block::new(BlockKind::H2, "Timeline"),
            Block::new(BlockKind::Calendar, ""),
        ],
    )
}

fn docs() -> TemplatePage {
    page(
        "Documentation",
        "📚",
        vec![
            Block::new(BlockKind::H1, "Overview"),
            Block::text("Write a brief description of the project here."),
            Block::new(BlockKind::Divider, ""),
            Block::new(BlockKind::H2, "API Reference"),
            Block::new(BlockKind::Code, "npm install filebox-sdk"),
        ],
    )
}

fn crm() -> TemplatePage {
    let table = TableProperties::from_headers(
        row(&["Client Name", "Status", "Value", "Last Contact"]),
        vec![
            row(&["Acme Corp", "Negotiation", "$50k", "Yesterday"]),
            row(&["Globex", "Qualified", "$120k", "2 days ago"]),
        ],
    );
    page(
        "Sales CRM",
        "🤝",
        vec![
            Block::new(BlockKind::H2, "Leads"),
            Block::new(BlockKind::Table, "").with_properties(BlockProperties::Table(table)),
            Block::new(BlockKind::H2, "Resources"),
            Block::new(BlockKind::Embed, "Sales Deck"),
        ],
    )
}

fn student() -> TemplatePage {
    let table = TableProperties::from_headers(
        row(&["Course", "Time", "Location", "Professor"]),
        vec![
            row(&["CS101", "Mon 9am", "Room 304", "Dr. Smith"]),
            row(&["MATH202", "Wed 11am", "Room 102", "Prof. Doe"]),
        ],
    );
    page(
        "Student Dashboard",
        "🎓",
        vec![
            Block::new(BlockKind::H1, "Fall Semester"),
            Block::new(BlockKind::H2, "Course Schedule"),
            Block::new(BlockKind::Table, "").with_properties(BlockProperties::Table(table)),
            Block::new(BlockKind::H2, "Assignments"),
            Block::new(BlockKind::Calendar, ""),
        ],
    )
}

fn recipe() -> TemplatePage {
    page(
        "Recipe Book",
        "🍳",
        vec![
            Block::new(BlockKind::H2, "Favorites"),
            Block::new(BlockKind::Image, "https://picsum.photos/800/400"),
            Block::new(BlockKind::H3, "Spicy Pasta"),
            Block::new(BlockKind::Toggle, "Ingredients").with_children(vec![
                Block::new(BlockKind::BulletList, "Pasta"),
                Block::new(BlockKind::BulletList, "Chili Flakes"),
            ]),
            Block::new(BlockKind::Toggle, "Instructions").with_children(vec![
                Block::new(BlockKind::NumberedList, "Boil water"),
                Block::new(BlockKind::NumberedList, "Cook pasta"),
            ]),
        ],
    )
}

fn habit() -> TemplatePage {
    let table = TableProperties::from_headers(
        row(&["Habit", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]),
        vec![
            row(&["Read 30m", "✓", "✓", "", "✓", "", "", ""]),
            row(&["Workout", "", "✓", "✓", "", "", "✓", ""]),
        ],
    );
    page(
        "Habit Tracker",
        "✅",
        vec![
            Block::new(BlockKind::Quote, "We are what we repeatedly do."),
            Block::new(BlockKind::Table, "").with_properties(BlockProperties::Table(table)),
        ],
    )
}

fn row(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|c| c.to_string()).collect()
}
