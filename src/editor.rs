//! Block sequence editing
//!
//! Sequence-level edits driven by editor interaction. These operate on the
//! top-level block sequence only; nested children are not reachable here.
//! The caller feeds the resulting sequence back through
//! `Command::UpdatePageBlocks` and moves input focus to `focus`.

use crate::config::MIN_BLOCKS_PER_PAGE;
use crate::model::Block;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum EditError {
    /// A page must keep at least one block.
    #[error("cannot delete the last remaining block")]
    LastBlock,

    #[error("block not found: {0}")]
    NotFound(String),
}

/// Result of a sequence edit: the new sequence plus the index of the block
/// that should receive input focus.
#[derive(Debug, Clone, PartialEq)]
pub struct EditOutcome {
    pub blocks: Vec<Block>,
    pub focus: usize,
}

/// Splice a new empty text block immediately after `index` (clamped to the
/// sequence end). Focus moves to the new block.
pub fn insert_after(blocks: &[Block], index: usize) -> EditOutcome {
    let mut blocks = blocks.to_vec();
    let at = index.saturating_add(1).min(blocks.len());
    blocks.insert(at, Block::empty_text());
    EditOutcome { blocks, focus: at }
}

/// Remove a block by id. Refused when the page is down to its last block;
/// otherwise focus moves to the block before the removed one.
pub fn delete_block(blocks: &[Block], block_id: &str) -> Result<EditOutcome, EditError> {
    if blocks.len() <= MIN_BLOCKS_PER_PAGE {
        return Err(EditError::LastBlock);
    }
    let index = blocks
        .iter()
        .position(|b| b.id == block_id)
        .ok_or_else(|| EditError::NotFound(block_id.to_string()))?;

    let mut blocks = blocks.to_vec();
    blocks.remove(index);
    Ok(EditOutcome {
        blocks,
        focus: index.saturating_sub(1),
    })
}

/// Move the focus cursor one block up, clamped at the start. This changes
/// which block receives input, not block positions.
pub fn move_focus_up(index: usize) -> usize {
    index.saturating_sub(1)
}

/// Move the focus cursor one block down, clamped at the end.
pub fn move_focus_down(len: usize, index: usize) -> usize {
    if index + 1 < len {
        index + 1
    } else {
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BlockKind;

    fn sequence(n: usize) -> Vec<Block> {
        (0..n)
            .map(|i| {
                let mut block = Block::text(format!("block {i}"));
                block.id = format!("b{i}");
                block
            })
            .collect()
    }

    #[test]
    fn test_insert_after_grows_by_one() {
        let blocks = sequence(3);
        let outcome = insert_after(&blocks, 1);
        assert_eq!(outcome.blocks.len(), 4);
        assert_eq!(outcome.focus, 2);
        assert_eq!(outcome.blocks[2].content, "");
        assert_eq!(outcome.blocks[2].kind, BlockKind::Text);
        // neighbors kept their order
        assert_eq!(outcome.blocks[1].id, "b1");
        assert_eq!(outcome.blocks[3].id, "b2");
    }

    #[test]
    fn test_insert_after_clamps_past_end() {
        let blocks = sequence(2);
        let outcome = insert_after(&blocks, 99);
        assert_eq!(outcome.blocks.len(), 3);
        assert_eq!(outcome.focus, 2);
    }

    #[test]
    fn test_delete_moves_focus_to_previous() {
        let blocks = sequence(3);
        let outcome = delete_block(&blocks, "b1").unwrap();
        assert_eq!(outcome.blocks.len(), 2);
        assert_eq!(outcome.focus, 0);
        assert!(outcome.blocks.iter().all(|b| b.id != "b1"));
    }

    #[test]
    fn test_delete_first_block_focuses_zero() {
        let blocks = sequence(2);
        let outcome = delete_block(&blocks, "b0").unwrap();
        assert_eq!(outcome.focus, 0);
    }

    #[test]
    fn test_delete_last_remaining_block_is_refused() {
        let blocks = sequence(1);
        assert_eq!(delete_block(&blocks, "b0"), Err(EditError::LastBlock));
    }

    #[test]
    fn test_delete_unknown_block() {
        let blocks = sequence(2);
        assert_eq!(
            delete_block(&blocks, "nope"),
            Err(EditError::NotFound("nope".into()))
        );
    }

    #[test]
    fn test_focus_moves_clamp() {
        assert_eq!(move_focus_up(0), 0);
        assert_eq!(move_focus_up(2), 1);
        assert_eq!(move_focus_down(3, 0), 1);
        assert_eq!(move_focus_down(3, 2), 2);
    }
}
