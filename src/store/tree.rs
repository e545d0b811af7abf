//! Block-tree traversal
//!
//! Depth-first find/update over a page's block tree. A matching id stops
//! the descent; the caller learns explicitly whether the id was found.
//! O(total blocks) per call, which is fine at page scale.

use crate::model::Block;
use std::collections::HashSet;

/// Apply `update` to the block with the given id, wherever it sits in the
/// tree. Returns whether the block was found.
pub fn update_block<F>(blocks: &mut [Block], block_id: &str, update: F) -> bool
where
    F: FnOnce(&mut Block),
{
    let mut update = Some(update);
    update_inner(blocks, block_id, &mut update)
}

fn update_inner<F>(blocks: &mut [Block], block_id: &str, update: &mut Option<F>) -> bool
where
    F: FnOnce(&mut Block),
{
    for block in blocks {
        if block.id == block_id {
            if let Some(update) = update.take() {
                update(block);
            }
            return true;
        }
        if !block.children.is_empty() && update_inner(&mut block.children, block_id, update) {
            return true;
        }
    }
    false
}

/// Find a block by id anywhere in the tree.
pub fn find_block<'a>(blocks: &'a [Block], block_id: &str) -> Option<&'a Block> {
    for block in blocks {
        if block.id == block_id {
            return Some(block);
        }
        if let Some(found) = find_block(&block.children, block_id) {
            return Some(found);
        }
    }
    None
}

/// First id that appears more than once in the tree, if any. Duplicate ids
/// would make update-by-id ambiguous, so sequences are validated before
/// they enter the snapshot.
pub fn duplicate_id(blocks: &[Block]) -> Option<String> {
    let mut seen = HashSet::new();
    duplicate_inner(blocks, &mut seen)
}

fn duplicate_inner(blocks: &[Block], seen: &mut HashSet<String>) -> Option<String> {
    for block in blocks {
        if !seen.insert(block.id.clone()) {
            return Some(block.id.clone());
        }
        if let Some(dup) = duplicate_inner(&block.children, seen) {
            return Some(dup);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BlockKind;

    fn sample_tree() -> Vec<Block> {
        let mut toggle = Block::new(BlockKind::Toggle, "Details");
        toggle.id = "t1".into();
        let mut child = Block::new(BlockKind::Code, "println!()");
        child.id = "c1".into();
        toggle.children = vec![child];

        let mut top = Block::text("hello");
        top.id = "b1".into();
        vec![top, toggle]
    }

    #[test]
    fn test_update_top_level_block() {
        let mut blocks = sample_tree();
        let found = update_block(&mut blocks, "b1", |b| b.content = "edited".into());
        assert!(found);
        assert_eq!(blocks[0].content, "edited");
    }

    #[test]
    fn test_update_nested_block() {
        let mut blocks = sample_tree();
        let found = update_block(&mut blocks, "c1", |b| b.content = "patched".into());
        assert!(found);
        assert_eq!(blocks[1].children[0].content, "patched");
        // siblings untouched
        assert_eq!(blocks[0].content, "hello");
    }

    #[test]
    fn test_update_missing_block_reports_not_found() {
        let mut blocks = sample_tree();
        let before = blocks.clone();
        let found = update_block(&mut blocks, "nope", |b| b.content = "x".into());
        assert!(!found);
        assert_eq!(blocks, before);
    }

    #[test]
    fn test_find_block_descends() {
        let blocks = sample_tree();
        assert_eq!(find_block(&blocks, "c1").unwrap().content, "println!()");
        assert!(find_block(&blocks, "nope").is_none());
    }

    #[test]
    fn test_duplicate_id_detects_nested_clash() {
        let mut blocks = sample_tree();
        assert_eq!(duplicate_id(&blocks), None);
        blocks[1].children[0].id = "b1".into();
        assert_eq!(duplicate_id(&blocks), Some("b1".to_string()));
    }
}
