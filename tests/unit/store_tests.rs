/*!
 * Tests for ordered document storage and index-safe mutation
 */

use std::collections::HashSet;

use coverdraft::document::{Block, BlockId, ParagraphStore};

fn store_with_texts(texts: &[&str]) -> ParagraphStore {
    ParagraphStore::from_blocks(texts.iter().map(|t| Block::authored(*t)).collect())
}

fn texts(store: &ParagraphStore) -> Vec<String> {
    store.blocks().iter().map(|b| b.text.clone()).collect()
}

/// Moving within bounds preserves the multiset of ids and changes only positions
#[test]
fn test_moveTo_withValidIndices_shouldPreserveIdMultiset() {
    let mut store = store_with_texts(&["a", "b", "c", "d"]);
    let before: HashSet<BlockId> = store.ids().into_iter().collect();

    assert!(store.move_to(1, 3));

    let after: HashSet<BlockId> = store.ids().into_iter().collect();
    assert_eq!(before, after);
    assert_eq!(texts(&store), vec!["a", "c", "d", "b"]);
}

/// Splice-move semantics: moving index 0 to index 2 in a 3-element document
/// lands the block at the end
#[test]
fn test_moveTo_withSpliceSemantics_shouldLandAfterRemoval() {
    let mut store = store_with_texts(&["x", "y", "z"]);

    assert!(store.move_to(0, 2));

    assert_eq!(texts(&store), vec!["y", "z", "x"]);
}

#[test]
fn test_moveTo_withSameIndices_shouldLeaveDocumentUnchanged() {
    let mut store = store_with_texts(&["a", "b"]);
    let before = store.blocks().to_vec();

    assert!(!store.move_to(1, 1));

    assert_eq!(store.blocks(), &before[..]);
}

#[test]
fn test_moveTo_withOutOfRangeIndices_shouldLeaveDocumentUnchanged() {
    let mut store = store_with_texts(&["a", "b"]);
    let before = store.blocks().to_vec();

    assert!(!store.move_to(5, 0));
    assert!(!store.move_to(0, 3));

    assert_eq!(store.blocks(), &before[..]);
}

/// The append bound `len` is a valid move target
#[test]
fn test_moveTo_withAppendBound_shouldMoveToEnd() {
    let mut store = store_with_texts(&["b", "a"]);

    assert!(store.move_to(0, 2));

    assert_eq!(texts(&store), vec!["a", "b"]);
}

#[test]
fn test_moveTo_withEmptyDocument_shouldLeaveDocumentUnchanged() {
    let mut store = ParagraphStore::new();
    assert!(!store.move_to(0, 1));
    assert!(store.is_empty());
}

/// Inserting a copy never mutates the source block and assigns a fresh id
#[test]
fn test_insertCopyAt_withVendorBlock_shouldCopyWithFreshId() {
    let mut store = store_with_texts(&["A"]);
    let vendor_block = Block::vendor("acme", "B");
    let vendor_snapshot = vendor_block.clone();

    let inserted = store.insert_copy_at(&vendor_block, 0);

    assert_eq!(vendor_block, vendor_snapshot);
    assert_eq!(store.len(), 2);

    let copy = store.get(0).unwrap();
    assert_eq!(copy.id, inserted);
    assert_ne!(copy.id, vendor_block.id);
    assert_eq!(copy.source_id, Some(vendor_block.id));
    assert_eq!(copy.text, "B");
    assert_eq!(copy.origin, vendor_block.origin);
    assert_eq!(store.get(1).unwrap().text, "A");
}

/// Copying a block that itself has a source keeps pointing at the root source
#[test]
fn test_insertCopyAt_withDerivedBlock_shouldKeepRootLineage() {
    let vendor_block = Block::vendor("acme", "B");
    let mut store = ParagraphStore::new();
    let first_copy_id = store.insert_copy_at(&vendor_block, 0);

    let first_copy = store.get_by_id(first_copy_id).unwrap().clone();
    store.insert_copy_at(&first_copy, 1);

    assert_eq!(store.get(1).unwrap().source_id, Some(vendor_block.id));
}

#[test]
fn test_insertCopyAt_withOversizedIndex_shouldClampToEnd() {
    let mut store = store_with_texts(&["a"]);
    let block = Block::authored("b");

    store.insert_copy_at(&block, 99);

    assert_eq!(texts(&store), vec!["a", "b"]);
}

/// Replacing one block with N changes the length by N - 1 and leaves
/// everything outside the replaced index untouched
#[test]
fn test_replaceAt_withThreeReplacements_shouldGrowByTwo() {
    let mut store = store_with_texts(&["a", "b", "c"]);
    let outside_before = (store.get(0).unwrap().clone(), store.get(2).unwrap().clone());

    let replacements = vec![
        Block::authored("b1"),
        Block::authored("b2"),
        Block::authored("b3"),
    ];
    assert!(store.replace_at(1, replacements));

    assert_eq!(store.len(), 5);
    assert_eq!(texts(&store), vec!["a", "b1", "b2", "b3", "c"]);
    assert_eq!(store.get(0).unwrap(), &outside_before.0);
    assert_eq!(store.get(4).unwrap(), &outside_before.1);
}

#[test]
fn test_replaceAt_withEmptyReplacements_shouldLeaveDocumentUnchanged() {
    let mut store = store_with_texts(&["a", "b"]);
    let before = store.blocks().to_vec();

    assert!(!store.replace_at(0, Vec::new()));

    assert_eq!(store.blocks(), &before[..]);
}

#[test]
fn test_replaceAt_withOutOfRangeIndex_shouldLeaveDocumentUnchanged() {
    let mut store = store_with_texts(&["a"]);
    let before = store.blocks().to_vec();

    assert!(!store.replace_at(1, vec![Block::authored("x")]));

    assert_eq!(store.blocks(), &before[..]);
}

#[test]
fn test_removeAt_withValidIndex_shouldRemoveExactlyOne() {
    let mut store = store_with_texts(&["a", "b", "c"]);

    let removed = store.remove_at(1).unwrap();

    assert_eq!(removed.text, "b");
    assert_eq!(texts(&store), vec!["a", "c"]);
}

#[test]
fn test_removeAt_withOutOfRangeIndex_shouldLeaveDocumentUnchanged() {
    let mut store = store_with_texts(&["a"]);

    assert!(store.remove_at(1).is_none());

    assert_eq!(store.len(), 1);
}

#[test]
fn test_setText_withValidIndex_shouldReplaceTextOnly() {
    let mut store = store_with_texts(&["a", "b"]);
    let id = store.get(0).unwrap().id;

    assert!(store.set_text(0, "edited"));

    assert_eq!(store.get(0).unwrap().text, "edited");
    assert_eq!(store.get(0).unwrap().id, id);
    assert_eq!(store.get(1).unwrap().text, "b");
}

#[test]
fn test_setText_withOutOfRangeIndex_shouldLeaveDocumentUnchanged() {
    let mut store = store_with_texts(&["a"]);

    assert!(!store.set_text(3, "edited"));

    assert_eq!(store.get(0).unwrap().text, "a");
}

/// Ids stay unique through a mixed sequence of operations
#[test]
fn test_operations_withMixedSequence_shouldKeepIdsUnique() {
    let vendor_block = Block::vendor("acme", "V");
    let mut store = store_with_texts(&["a", "b"]);

    store.insert_copy_at(&vendor_block, 1);
    store.insert_copy_at(&vendor_block, 0);
    store.move_to(0, 3);
    store.replace_at(1, vec![Block::authored("r1"), Block::authored("r2")]);

    let ids = store.ids();
    let unique: HashSet<BlockId> = ids.iter().copied().collect();
    assert_eq!(ids.len(), unique.len());
}
