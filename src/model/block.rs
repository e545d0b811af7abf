//! Block model
//!
//! A page's content is an ordered sequence of typed blocks. A block may own
//! a nested sequence of child blocks (toggles use this), and collapsible
//! variants carry an open/closed flag. Type-specific data lives in
//! `BlockProperties`, a tagged union that replaces the open-ended property
//! bag of earlier formats while keeping the same wire shape.

use crate::id::generate_id;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The block type tag, selecting one of the supported content variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlockKind {
    Text,
    H1,
    H2,
    H3,
    BulletList,
    NumberedList,
    Todo,
    Toggle,
    Quote,
    Code,
    Divider,
    Image,
    Table,
    Board,
    Calendar,
    Chart,
    Github,
    Jira,
    Video,
    Embed,
    Callout,
    Date,
    Database,
}

/// A single content unit in a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: BlockKind,
    /// Primary text, or a serialized value such as an image URL or date
    /// string depending on the kind.
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<BlockProperties>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Block>,
    /// Open/closed flag for collapsible variants (toggles).
    #[serde(default)]
    pub is_open: bool,
}

impl Block {
    /// Create a block of the given kind with a generated id.
    pub fn new(kind: BlockKind, content: impl Into<String>) -> Self {
        Self {
            id: generate_id(),
            kind,
            content: content.into(),
            properties: None,
            children: Vec::new(),
            is_open: false,
        }
    }

    /// Create a plain text block.
    pub fn text(content: impl Into<String>) -> Self {
        Self::new(BlockKind::Text, content)
    }

    /// The default block every new page starts with.
    pub fn empty_text() -> Self {
        Self::text("")
    }

    pub fn with_properties(mut self, properties: BlockProperties) -> Self {
        self.properties = Some(properties);
        self
    }

    pub fn with_children(mut self, children: Vec<Block>) -> Self {
        self.children = children;
        self
    }
}

/// Type-specific block data.
///
/// Serialized untagged so each variant keeps the flat object shape of the
/// original property bags (`{"checked": true}`, `{"columns": ..}` and so
/// on). The variant is resolved by hand on the way in: tables and boards
/// both carry a `columns` field, and an empty board would otherwise be
/// indistinguishable from an empty table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum BlockProperties {
    Todo { checked: bool },
    Code { language: String },
    Table(TableProperties),
    Board { columns: Vec<BoardColumn> },
    Date { reminder: ReminderOption },
}

// Marker fields pick most variants; `columns` alone needs the element
// shape: table columns carry `type`, board columns carry `items`. Tables
// always persist `rows`, so a bare `columns` array (empty included) is a
// board.
impl<'de> Deserialize<'de> for BlockProperties {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error;

        #[derive(Deserialize)]
        struct BoardRepr {
            columns: Vec<BoardColumn>,
        }

        let value = serde_json::Value::deserialize(deserializer)?;
        let object = value
            .as_object()
            .ok_or_else(|| D::Error::custom("block properties must be an object"))?;

        if let Some(checked) = object.get("checked") {
            let checked = checked
                .as_bool()
                .ok_or_else(|| D::Error::custom("`checked` must be a boolean"))?;
            return Ok(BlockProperties::Todo { checked });
        }
        if let Some(language) = object.get("language") {
            let language = language
                .as_str()
                .ok_or_else(|| D::Error::custom("`language` must be a string"))?
                .to_string();
            return Ok(BlockProperties::Code { language });
        }
        if let Some(reminder) = object.get("reminder") {
            let reminder = serde_json::from_value(reminder.clone()).map_err(D::Error::custom)?;
            return Ok(BlockProperties::Date { reminder });
        }

        let has_columns = object.contains_key("columns");
        let is_table = object.contains_key("rows")
            || object.contains_key("headers")
            || object
                .get("columns")
                .and_then(serde_json::Value::as_array)
                .and_then(|columns| columns.first())
                .map_or(false, |column| column.get("items").is_none());

        if is_table {
            serde_json::from_value(value)
                .map(BlockProperties::Table)
                .map_err(D::Error::custom)
        } else if has_columns {
            let BoardRepr { columns } = serde_json::from_value(value).map_err(D::Error::custom)?;
            Ok(BlockProperties::Board { columns })
        } else {
            Err(D::Error::custom("unrecognized block properties object"))
        }
    }
}

/// Declared type of a table column, driving how cell values are
/// interpreted and rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColumnKind {
    Text,
    Status,
    Person,
    Date,
    Select,
    Priority,
    MultiSelect,
    Tags,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableColumn {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ColumnKind,
}

impl TableColumn {
    pub fn new(name: impl Into<String>, kind: ColumnKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

/// Table data: typed columns plus positional rows (`rows[i][j]` belongs to
/// `columns[j]`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableProperties {
    pub columns: Vec<TableColumn>,
    pub rows: Vec<Vec<String>>,
}

impl TableProperties {
    pub fn new(columns: Vec<TableColumn>, rows: Vec<Vec<String>>) -> Self {
        Self { columns, rows }
    }

    /// Build a table from the legacy `headers` shape: every column is
    /// treated as plain text.
    pub fn from_headers(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let columns = headers
            .into_iter()
            .map(|name| TableColumn::new(name, ColumnKind::Text))
            .collect();
        Self { columns, rows }
    }

    /// Read a cell. Rows shorter than the column list read as empty cells.
    pub fn cell(&self, row: usize, col: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map(String::as_str)
            .unwrap_or("")
    }
}

// Tables are persisted in the typed `columns` shape, but older snapshots
// carry a `headers: string[]` pair instead. Accept both on the way in.
#[derive(Deserialize)]
#[serde(untagged)]
enum TableRepr {
    Typed {
        columns: Vec<TableColumn>,
        #[serde(default)]
        rows: Vec<Vec<String>>,
    },
    Legacy {
        headers: Vec<String>,
        #[serde(default)]
        rows: Vec<Vec<String>>,
    },
}

impl<'de> Deserialize<'de> for TableProperties {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        match TableRepr::deserialize(deserializer)? {
            TableRepr::Typed { columns, rows } => Ok(Self::new(columns, rows)),
            TableRepr::Legacy { headers, rows } => Ok(Self::from_headers(headers, rows)),
        }
    }
}

/// One column of a kanban board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardColumn {
    pub name: String,
    pub items: Vec<String>,
}

impl BoardColumn {
    pub fn new(name: impl Into<String>, items: Vec<String>) -> Self {
        Self {
            name: name.into(),
            items: items.into_iter().collect(),
        }
    }
}

/// Reminder choice on a standalone date block. The date string itself is
/// the block's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReminderOption {
    #[default]
    None,
    OnDay,
    OneDayBefore,
    TwoDaysBefore,
    OneWeekBefore,
}

impl fmt::Display for ReminderOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ReminderOption::None => "None",
            ReminderOption::OnDay => "On day of event (9:00 AM)",
            ReminderOption::OneDayBefore => "1 day before (9:00 AM)",
            ReminderOption::TwoDaysBefore => "2 days before (9:00 AM)",
            ReminderOption::OneWeekBefore => "1 week before (9:00 AM)",
        };
        f.write_str(label)
    }
}
