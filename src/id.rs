//! Unique-id helper
//!
//! Ids are a millisecond timestamp plus a random suffix. No collision
//! detection; at workspace scale (tens of pages, tens of blocks per page)
//! the random suffix is plenty.

use chrono::Utc;

/// Generate a new identifier for pages, blocks, notifications and env vars.
pub fn generate_id() -> String {
    let millis = Utc::now().timestamp_millis();
    let suffix: u32 = rand::random::<u32>() & 0x00ff_ffff;
    format!("{millis:x}{suffix:06x}")
}
