//! Application configuration constants
//!
//! Central location for the constants and boundaries used throughout the
//! workspace core.

// ===== Persistence =====

/// File name of the persisted workspace snapshot inside the data directory
pub const SNAPSHOT_FILE_NAME: &str = "filebox-state.json";

// ===== Page Defaults =====

/// Icon assigned to newly created pages
pub const DEFAULT_PAGE_ICON: &str = "📄";

/// Title assigned when a page is created with an empty title
pub const DEFAULT_PAGE_TITLE: &str = "Untitled";

// ===== Block Invariants =====

/// A page's content never drops below this many blocks.
/// The editor refuses to delete the last remaining block.
pub const MIN_BLOCKS_PER_PAGE: usize = 1;
