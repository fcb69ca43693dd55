/*!
 * Translation overlay orchestration.
 *
 * This module ties the cache, the view selection, and the translator
 * together into the per-block request/invalidate/display contract:
 * - at most one fetch in flight per `(block, language)` pair
 * - a fetch that resolves after its block's text has changed is discarded
 * - failures become per-block error strings, display falls back to source
 */

use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use log::{error, warn};
use parking_lot::{Mutex, RwLock};

use crate::document::BlockId;
use crate::language_utils;
use crate::providers::Translator;
use crate::translation::cache::TranslationCache;
use crate::translation::view::{ViewLanguage, ViewSelector};

/// How a `request` call was resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestOutcome {
    /// Target was the source sentinel, view switched without a fetch
    SourceView,
    /// Served from cache, no fetch issued
    CacheHit,
    /// A fetch for this block and language is already in flight
    AlreadyInFlight,
    /// Fetched, cached, and now displayed
    Translated,
    /// Fetch resolved after the source text changed, result discarded
    Stale,
    /// The translator reported an error, recorded per block
    Failed,
}

/// Per-block translation state over the document
pub struct TranslationOverlay {
    /// Backend the overlay fetches through
    translator: Arc<dyn Translator>,

    /// Fetched translations keyed by block and language
    cache: TranslationCache,

    /// Currently displayed language per block
    views: ViewSelector,

    /// Keys with a fetch currently in flight
    in_flight: Arc<Mutex<HashSet<(BlockId, String)>>>,

    /// Current source text per block, as last seen by the overlay
    sources: Arc<RwLock<HashMap<BlockId, String>>>,

    /// Per-block error message from the most recent failed fetch
    errors: Arc<RwLock<HashMap<BlockId, String>>>,

    /// Source language hint passed to the translator
    source_hint: Option<String>,
}

impl TranslationOverlay {
    /// Create an overlay over the given translator
    pub fn new(translator: Arc<dyn Translator>, cache_enabled: bool) -> Self {
        Self {
            translator,
            cache: TranslationCache::new(cache_enabled),
            views: ViewSelector::new(),
            in_flight: Arc::new(Mutex::new(HashSet::new())),
            sources: Arc::new(RwLock::new(HashMap::new())),
            errors: Arc::new(RwLock::new(HashMap::new())),
            source_hint: None,
        }
    }

    /// Set the source language hint forwarded to the translator
    pub fn with_source_hint(mut self, hint: impl Into<String>) -> Self {
        self.source_hint = Some(hint.into());
        self
    }

    /// Ask for a block to be displayed in `target_language`.
    ///
    /// `text` must be the block's current source text; it doubles as the
    /// snapshot the fetched result is validated against at completion time.
    pub async fn request(
        &self,
        block_id: BlockId,
        text: &str,
        target_language: &str,
    ) -> RequestOutcome {
        if language_utils::is_source_view(target_language) {
            self.views.set(block_id, ViewLanguage::Source);
            return RequestOutcome::SourceView;
        }
        let lang = language_utils::normalize_view_code(target_language);

        self.sources.write().insert(block_id, text.to_string());

        if self.cache.get(block_id, &lang, text).is_some() {
            self.views.set(block_id, ViewLanguage::Language(lang));
            return RequestOutcome::CacheHit;
        }

        {
            let mut in_flight = self.in_flight.lock();
            if !in_flight.insert((block_id, lang.clone())) {
                return RequestOutcome::AlreadyInFlight;
            }
        }

        // No locks held across the await
        let snapshot = text.to_string();
        let result = self
            .translator
            .translate(text, &lang, self.source_hint.as_deref())
            .await;

        self.in_flight.lock().remove(&(block_id, lang.clone()));

        match result {
            Ok(translated) => {
                let current = self.sources.read().get(&block_id).cloned();
                if current.as_deref() != Some(snapshot.as_str()) {
                    warn!(
                        "Discarding stale translation for block {} ({})",
                        block_id, lang
                    );
                    return RequestOutcome::Stale;
                }

                self.cache.store(block_id, &lang, &snapshot, &translated);
                self.views.set(block_id, ViewLanguage::Language(lang));
                self.errors.write().remove(&block_id);
                RequestOutcome::Translated
            }
            Err(e) => {
                error!("Translation failed for block {} ({}): {}", block_id, lang, e);
                self.errors.write().insert(block_id, e.to_string());
                RequestOutcome::Failed
            }
        }
    }

    /// Tell the overlay that a block's source text changed.
    ///
    /// Drops every cached translation for the block, resets its view to
    /// source, and records the new text as current so an in-flight fetch for
    /// the old text is discarded when it resolves.
    pub fn invalidate(&self, block_id: BlockId, new_text: &str) {
        self.cache.invalidate_block(block_id);
        self.views.reset(block_id);
        self.sources.write().insert(block_id, new_text.to_string());
        self.errors.write().remove(&block_id);
    }

    /// Release all state for a deleted block
    pub fn forget(&self, block_id: BlockId) {
        self.cache.invalidate_block(block_id);
        self.views.forget(block_id);
        self.sources.write().remove(&block_id);
        self.errors.write().remove(&block_id);
    }

    /// The text to render for a block: the cached translation for its current
    /// view if present, else the raw source text
    pub fn display(&self, block_id: BlockId, text: &str) -> String {
        match self.views.language_for(block_id) {
            ViewLanguage::Source => text.to_string(),
            ViewLanguage::Language(lang) => self
                .cache
                .lookup(block_id, &lang, text)
                .unwrap_or_else(|| text.to_string()),
        }
    }

    /// The currently displayed language for a block
    pub fn view_language(&self, block_id: BlockId) -> ViewLanguage {
        self.views.language_for(block_id)
    }

    /// Whether any fetch is in flight for a block
    pub fn is_translating(&self, block_id: BlockId) -> bool {
        self.in_flight
            .lock()
            .iter()
            .any(|(id, _)| *id == block_id)
    }

    /// The error message from the most recent failed fetch for a block
    pub fn error_for(&self, block_id: BlockId) -> Option<String> {
        self.errors.read().get(&block_id).cloned()
    }

    /// Cache statistics as (hits, misses, hit rate)
    pub fn cache_stats(&self) -> (usize, usize, f64) {
        self.cache.stats()
    }
}
