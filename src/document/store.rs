use log::warn;

use super::block::{Block, BlockId};

// @module: Ordered document storage and index-safe mutation

/// The ordered in-progress document.
///
/// Every mutating operation validates its indices before touching the
/// sequence: an out-of-range index leaves the document exactly as it was and
/// reports the violation at log level. Nothing here panics and nothing
/// returns an error to the caller; the contract is "never corrupt the
/// document".
#[derive(Debug, Clone, Default)]
pub struct ParagraphStore {
    blocks: Vec<Block>,
}

impl ParagraphStore {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document from an existing ordered sequence
    pub fn from_blocks(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    /// Number of blocks in the document
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Whether the document has no blocks
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// The ordered sequence
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Block at an index
    pub fn get(&self, index: usize) -> Option<&Block> {
        self.blocks.get(index)
    }

    /// Block with a given id
    pub fn get_by_id(&self, id: BlockId) -> Option<&Block> {
        self.blocks.iter().find(|block| block.id == id)
    }

    /// Position of a block id within the sequence
    pub fn index_of(&self, id: BlockId) -> Option<usize> {
        self.blocks.iter().position(|block| block.id == id)
    }

    /// All ids in sequence order
    pub fn ids(&self) -> Vec<BlockId> {
        self.blocks.iter().map(|block| block.id).collect()
    }

    /// Insert a derived copy of `source` at `index`, clamped to `[0, len]`.
    ///
    /// The copy gets a freshly generated id and its lineage points back at
    /// `source` (or at `source`'s own source if it already has one). `source`
    /// itself is never mutated, so feed entries stay pristine. Returns the id
    /// of the inserted copy.
    pub fn insert_copy_at(&mut self, source: &Block, index: usize) -> BlockId {
        let copy = source.derived_copy();
        let id = copy.id;
        let index = index.min(self.blocks.len());
        self.blocks.insert(index, copy);
        id
    }

    /// Append a block created elsewhere (manual add)
    pub fn push(&mut self, block: Block) -> BlockId {
        let id = block.id;
        self.blocks.push(block);
        id
    }

    /// Move the block at `from` so that it lands at the position `to` would
    /// occupy after the removal (splice-move semantics: moving index 0 to
    /// index 2 in a 3-element document lands the block at the end).
    ///
    /// No-op when `from == to`, when `from` is not an existing position, or
    /// when `to` exceeds the append bound `len`. Returns whether the document
    /// changed.
    pub fn move_to(&mut self, from: usize, to: usize) -> bool {
        if from == to {
            return false;
        }
        if from >= self.blocks.len() {
            warn!(
                "move_to: from index {} out of range (len {})",
                from,
                self.blocks.len()
            );
            return false;
        }
        if to > self.blocks.len() {
            warn!(
                "move_to: to index {} out of range (len {})",
                to,
                self.blocks.len()
            );
            return false;
        }
        let block = self.blocks.remove(from);
        let index = to.min(self.blocks.len());
        self.blocks.insert(index, block);
        true
    }

    /// Splice `replacements` in place of the block at `index`, preserving
    /// their relative order. No-op when `index` is out of range or
    /// `replacements` is empty. Returns whether the document changed.
    pub fn replace_at(&mut self, index: usize, replacements: Vec<Block>) -> bool {
        if index >= self.blocks.len() {
            warn!(
                "replace_at: index {} out of range (len {})",
                index,
                self.blocks.len()
            );
            return false;
        }
        if replacements.is_empty() {
            warn!("replace_at: empty replacement list, leaving document unchanged");
            return false;
        }
        self.blocks.splice(index..=index, replacements);
        true
    }

    /// Remove exactly one block. No-op when `index` is out of range. Returns
    /// the removed block so callers can release per-block state keyed by id.
    pub fn remove_at(&mut self, index: usize) -> Option<Block> {
        if index >= self.blocks.len() {
            warn!(
                "remove_at: index {} out of range (len {})",
                index,
                self.blocks.len()
            );
            return None;
        }
        Some(self.blocks.remove(index))
    }

    /// Replace the text of the block at `index`. No-op when out of range.
    /// Returns whether the document changed.
    pub fn set_text(&mut self, index: usize, text: impl Into<String>) -> bool {
        match self.blocks.get_mut(index) {
            Some(block) => {
                block.text = text.into();
                true
            }
            None => {
                warn!(
                    "set_text: index {} out of range (len {})",
                    index,
                    self.blocks.len()
                );
                false
            }
        }
    }
}
