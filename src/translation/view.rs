use std::collections::HashMap;
use std::sync::Arc;
use parking_lot::RwLock;

use crate::document::BlockId;
use crate::language_utils;

/// The language currently displayed for a block
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewLanguage {
    /// Show the untranslated source text
    #[default]
    Source,
    /// Show the cached translation for this lowercased language code
    Language(String),
}

impl ViewLanguage {
    /// Parse a raw view code, mapping the sentinel to `Source`
    pub fn parse(code: &str) -> Self {
        if language_utils::is_source_view(code) {
            Self::Source
        } else {
            Self::Language(language_utils::normalize_view_code(code))
        }
    }
}

/// Tracks, per block, which language is currently displayed.
///
/// Blocks with no recorded selection display their source text. A block's
/// selection is reset to source whenever its text changes, so a user never
/// silently views a stale translation against changed source.
#[derive(Debug, Clone, Default)]
pub struct ViewSelector {
    views: Arc<RwLock<HashMap<BlockId, ViewLanguage>>>,
}

impl ViewSelector {
    /// Create a selector with every block on its source view
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently displayed language for a block
    pub fn language_for(&self, block_id: BlockId) -> ViewLanguage {
        self.views
            .read()
            .get(&block_id)
            .cloned()
            .unwrap_or_default()
    }

    /// Set the displayed language for a block
    pub fn set(&self, block_id: BlockId, view: ViewLanguage) {
        self.views.write().insert(block_id, view);
    }

    /// Reset a block to its source view
    pub fn reset(&self, block_id: BlockId) {
        self.views.write().remove(&block_id);
    }

    /// Forget a deleted block entirely
    pub fn forget(&self, block_id: BlockId) {
        self.views.write().remove(&block_id);
    }
}
