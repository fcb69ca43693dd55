/*!
 * Assembly controller.
 *
 * This module drives the document in response to user actions: drag-copy
 * from a vendor feed, drag-reorder, manual add/delete, and editing with
 * split-on-blank-line semantics. Drag and edit are modeled as one explicit
 * state machine per document rather than implicit flags on blocks, and every
 * mutation funnels through the index-safe `ParagraphStore` operations.
 */

use std::sync::Arc;
use log::{debug, warn};
use parking_lot::RwLock;

use crate::document::{export, split_edit, Block, BlockId, ParagraphStore, SplitOutcome, VendorFeed};
use crate::providers::Translator;
use crate::translation::{RequestOutcome, TranslationOverlay};

/// What is being dragged over the document
#[derive(Debug, Clone, PartialEq)]
pub enum DragPayload {
    /// A vendor candidate, to be copied in on drop
    VendorCopy {
        /// Vendor name in the feed
        vendor: String,
        /// Position within the vendor's candidate list
        index: usize,
    },
    /// An existing document block, to be moved on drop
    Reorder {
        /// Current position of the dragged block
        from: usize,
    },
}

/// Where a drag was released
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DropZone {
    /// The content area; position is resolved against rendered block
    /// midpoints
    Content {
        /// Vertical pointer offset within the content area
        pointer_y: f32,
    },
    /// The bottom zone; always resolves to end-of-list regardless of pointer
    /// position
    Bottom,
}

/// Controller state, one per open document
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ControllerState {
    /// Nothing in progress
    #[default]
    Idle,
    /// A candidate or document block is being previewed over the document
    Dragging(DragPayload),
    /// Exactly one block has an open text editor
    Editing {
        /// The block being edited
        block_id: BlockId,
        /// The editor's current buffer
        buffer: String,
    },
}

/// Shared hover-highlight context passed to all block renderers.
///
/// Hovering one block highlights every block sharing its lineage; keeping the
/// highlighted id in an explicit shared object avoids ambient module state.
#[derive(Debug, Default)]
pub struct HighlightState {
    highlighted: RwLock<Option<BlockId>>,
}

impl HighlightState {
    /// Set or clear the hovered block
    pub fn set_highlighted(&self, id: Option<BlockId>) {
        *self.highlighted.write() = id;
    }

    /// The currently hovered block, if any
    pub fn highlighted_id(&self) -> Option<BlockId> {
        *self.highlighted.read()
    }
}

/// Lineage answer for the provenance surface
#[derive(Debug, Clone, PartialEq)]
pub struct Provenance {
    /// Vendor candidate this block descends from, if any
    pub source_id: Option<BlockId>,
    /// Generator that produced the text, if vendor-derived
    pub vendor: Option<String>,
}

/// Resolve a content-area drop position: the insertion index is the first
/// rendered block whose vertical midpoint lies below the pointer, or
/// end-of-list if none does.
pub fn resolve_drop_index(midpoints: &[f32], pointer_y: f32) -> usize {
    midpoints
        .iter()
        .position(|&midpoint| pointer_y < midpoint)
        .unwrap_or(midpoints.len())
}

/// Orchestrates document assembly for one session
pub struct AssemblyController {
    /// The ordered document, exclusively owned by this controller
    store: ParagraphStore,

    /// Read-only candidate paragraphs
    feed: VendorFeed,

    /// Per-block translation state
    overlay: TranslationOverlay,

    /// Current drag/edit state
    state: ControllerState,

    /// Shared hover-highlight context
    highlight: Arc<HighlightState>,
}

impl AssemblyController {
    /// Create a controller over a feed and a translator
    pub fn new(feed: VendorFeed, translator: Arc<dyn Translator>, cache_enabled: bool) -> Self {
        Self {
            store: ParagraphStore::new(),
            feed,
            overlay: TranslationOverlay::new(translator, cache_enabled),
            state: ControllerState::Idle,
            highlight: Arc::new(HighlightState::default()),
        }
    }

    /// Forward a source language hint to the translator
    pub fn with_source_hint(mut self, hint: impl Into<String>) -> Self {
        self.overlay = self.overlay.with_source_hint(hint);
        self
    }

    /// Current controller state
    pub fn state(&self) -> &ControllerState {
        &self.state
    }

    /// The ordered document
    pub fn blocks(&self) -> &[Block] {
        self.store.blocks()
    }

    /// The vendor feed
    pub fn feed(&self) -> &VendorFeed {
        &self.feed
    }

    /// The translation overlay
    pub fn overlay(&self) -> &TranslationOverlay {
        &self.overlay
    }

    /// The shared hover-highlight context
    pub fn highlight(&self) -> Arc<HighlightState> {
        Arc::clone(&self.highlight)
    }

    // ---- Drag transitions ----

    /// Start dragging a vendor candidate over the document
    pub fn begin_vendor_drag(&mut self, vendor: &str, index: usize) -> bool {
        if self.feed.candidate(vendor, index).is_none() {
            warn!(
                "begin_vendor_drag: no candidate {} for vendor {}",
                index, vendor
            );
            return false;
        }
        self.close_open_editor();
        self.state = ControllerState::Dragging(DragPayload::VendorCopy {
            vendor: vendor.to_string(),
            index,
        });
        true
    }

    /// Start dragging an existing document block to reorder it.
    ///
    /// An open editor is committed first: committing can split a block and
    /// shift positions, so `from` is validated against the document as it
    /// stands after the commit.
    pub fn begin_reorder_drag(&mut self, from: usize) -> bool {
        self.close_open_editor();
        if from >= self.store.len() {
            warn!("begin_reorder_drag: index {} out of range", from);
            return false;
        }
        self.state = ControllerState::Dragging(DragPayload::Reorder { from });
        true
    }

    /// Abandon the current drag without touching the document
    pub fn cancel_drag(&mut self) {
        if matches!(self.state, ControllerState::Dragging(_)) {
            self.state = ControllerState::Idle;
        }
    }

    /// Release the current drag over a drop zone.
    ///
    /// `midpoints` are the vertical midpoints of the currently rendered
    /// blocks, in document order; they are only consulted for content-area
    /// drops. Returns the id of a newly inserted copy, or `None` for reorders
    /// and for drops that resolved to a no-op.
    pub fn drop(&mut self, zone: DropZone, midpoints: &[f32]) -> Option<BlockId> {
        let payload = match std::mem::take(&mut self.state) {
            ControllerState::Dragging(payload) => payload,
            other => {
                warn!("drop: ignored while not dragging");
                self.state = other;
                return None;
            }
        };

        let target = match zone {
            DropZone::Content { pointer_y } => resolve_drop_index(midpoints, pointer_y),
            DropZone::Bottom => self.store.len(),
        };

        match payload {
            DragPayload::VendorCopy { vendor, index } => {
                let source = self.feed.candidate(&vendor, index)?.clone();
                let id = self.store.insert_copy_at(&source, target);
                debug!("Inserted copy of {} candidate at {}", vendor, target);
                Some(id)
            }
            DragPayload::Reorder { from } => {
                self.store.move_to(from, target);
                None
            }
        }
    }

    // ---- Edit transitions ----

    /// Open the editor on the block at `index`.
    ///
    /// If another block's editor is open it is committed first (implicit
    /// close, including the split check against its buffer). The new buffer
    /// is seeded from the block's *displayed* text: editing while viewing a
    /// translation promotes that translation to become the block's source
    /// text on save.
    pub fn begin_edit(&mut self, index: usize) -> bool {
        self.close_open_editor();

        let Some(block) = self.store.get(index) else {
            warn!("begin_edit: index {} out of range", index);
            return false;
        };
        let block_id = block.id;
        let buffer = self.overlay.display(block_id, &block.text);

        self.state = ControllerState::Editing { block_id, buffer };
        true
    }

    /// The open editor's buffer, if a block is being edited
    pub fn edit_buffer(&self) -> Option<&str> {
        match &self.state {
            ControllerState::Editing { buffer, .. } => Some(buffer),
            _ => None,
        }
    }

    /// Replace the open editor's buffer
    pub fn update_edit_buffer(&mut self, text: impl Into<String>) {
        if let ControllerState::Editing { buffer, .. } = &mut self.state {
            *buffer = text.into();
        }
    }

    /// Apply the open editor's buffer and return to idle.
    ///
    /// A buffer containing two or more paragraphs replaces the edited block
    /// with one fragment per paragraph; otherwise the block's text is
    /// replaced in place. Either way the block's cached translations are
    /// invalidated before the new text becomes current.
    pub fn commit_edit(&mut self) -> bool {
        let (block_id, buffer) = match std::mem::take(&mut self.state) {
            ControllerState::Editing { block_id, buffer } => (block_id, buffer),
            other => {
                self.state = other;
                return false;
            }
        };

        let Some(index) = self.store.index_of(block_id) else {
            warn!("commit_edit: edited block {} no longer in document", block_id);
            return false;
        };
        let Some(original) = self.store.get(index).cloned() else {
            return false;
        };

        match split_edit(&original, &buffer) {
            SplitOutcome::Edit(text) => {
                if text == original.text {
                    return false;
                }
                self.overlay.invalidate(block_id, &text);
                self.store.set_text(index, text)
            }
            SplitOutcome::Split(replacements) => {
                // The original block is destroyed by the replacement
                self.overlay.forget(block_id);
                self.store.replace_at(index, replacements)
            }
        }
    }

    /// Discard the open editor's buffer and return to idle
    pub fn cancel_edit(&mut self) {
        if matches!(self.state, ControllerState::Editing { .. }) {
            self.state = ControllerState::Idle;
        }
    }

    fn close_open_editor(&mut self) {
        if matches!(self.state, ControllerState::Editing { .. }) {
            self.commit_edit();
        }
    }

    // ---- Manual document operations ----

    /// Append an empty user-authored block and open its editor
    pub fn add_block(&mut self) -> BlockId {
        self.close_open_editor();
        let id = self.store.push(Block::authored(""));
        self.state = ControllerState::Editing {
            block_id: id,
            buffer: String::new(),
        };
        id
    }

    /// Delete the block at `index`, releasing its translation state
    pub fn remove_block(&mut self, index: usize) -> bool {
        if let ControllerState::Editing { block_id, .. } = &self.state {
            if self.store.index_of(*block_id) == Some(index) {
                self.state = ControllerState::Idle;
            }
        }

        match self.store.remove_at(index) {
            Some(removed) => {
                self.overlay.forget(removed.id);
                if self.highlight.highlighted_id() == Some(removed.id) {
                    self.highlight.set_highlighted(None);
                }
                true
            }
            None => false,
        }
    }

    // ---- Translation surface ----

    /// Ask for the block at `index` to be displayed in `target_language`
    pub async fn request_view(&self, index: usize, target_language: &str) -> RequestOutcome {
        let Some(block) = self.store.get(index) else {
            warn!("request_view: index {} out of range", index);
            return RequestOutcome::Failed;
        };
        let (id, text) = (block.id, block.text.clone());
        self.overlay.request(id, &text, target_language).await
    }

    /// The text to render for the block at `index`
    pub fn display_text(&self, index: usize) -> Option<String> {
        let block = self.store.get(index)?;
        Some(self.overlay.display(block.id, &block.text))
    }

    // ---- Export and provenance surfaces ----

    /// Serialize the document to its final plain-text form
    pub fn export(&self) -> String {
        export::export(self.store.blocks())
    }

    /// Answer "what vendor/source produced this block" for highlighting UIs
    pub fn provenance(&self, block_id: BlockId) -> Option<Provenance> {
        let block = self.store.get_by_id(block_id)?;
        Some(Provenance {
            source_id: block.source_id,
            vendor: block.origin.vendor_tag().map(str::to_string),
        })
    }

    /// Document blocks sharing lineage with the currently hovered block.
    ///
    /// A block's lineage key is its `source_id` when present, else its own
    /// id, so a vendor candidate and every copy made from it light up
    /// together.
    pub fn highlighted_ids(&self) -> Vec<BlockId> {
        let Some(hovered) = self.highlight.highlighted_id() else {
            return Vec::new();
        };
        let Some(key) = self.lineage_key(hovered) else {
            return Vec::new();
        };

        self.store
            .blocks()
            .iter()
            .filter(|block| block.source_id.unwrap_or(block.id) == key)
            .map(|block| block.id)
            .collect()
    }

    fn lineage_key(&self, id: BlockId) -> Option<BlockId> {
        if let Some(block) = self.store.get_by_id(id) {
            return Some(block.source_id.unwrap_or(block.id));
        }
        // Hover can also originate on a feed candidate
        self.feed
            .find(id)
            .map(|block| block.source_id.unwrap_or(block.id))
    }
}
