/*!
 * Per-block translation caching.
 *
 * This module stores fetched translations keyed by `(block id, target
 * language)` to avoid redundant calls to the translation backend. Each entry
 * remembers the source text it was produced from; a lookup only hits when
 * that snapshot still matches the block's current text, so a cached
 * translation can never be served against edited source.
 */

use std::collections::HashMap;
use std::sync::Arc;
use log::debug;
use parking_lot::RwLock;

use crate::document::BlockId;

/// Cache key combining block identity and target language
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    /// Block the translation belongs to
    block_id: BlockId,

    /// Lowercased target language code
    target_language: String,
}

/// One cached translation together with the source text it was made from
#[derive(Debug, Clone)]
struct CacheEntry {
    /// The translated text
    translated: String,

    /// The block's source text at fetch time
    source_snapshot: String,
}

/// Translation cache for storing and retrieving per-block translations
pub struct TranslationCache {
    /// Internal cache storage
    entries: Arc<RwLock<HashMap<CacheKey, CacheEntry>>>,

    /// Cache hit counter
    hits: Arc<RwLock<usize>>,

    /// Cache miss counter
    misses: Arc<RwLock<usize>>,

    /// Whether fetches may be answered from stored entries. Results are
    /// always recorded so rendering can reach the latest fetch; this flag
    /// gates reuse on the request path only.
    enabled: bool,
}

impl TranslationCache {
    /// Create a new translation cache
    pub fn new(enabled: bool) -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            hits: Arc::new(RwLock::new(0)),
            misses: Arc::new(RwLock::new(0)),
            enabled,
        }
    }

    /// Get a translation for a block on the request path, provided reuse is
    /// enabled and the cached snapshot still matches the block's current
    /// source text. Counts hits and misses.
    pub fn get(&self, block_id: BlockId, target_language: &str, current_text: &str) -> Option<String> {
        if !self.enabled {
            return None;
        }

        let key = CacheKey {
            block_id,
            target_language: target_language.to_string(),
        };
        let entries = self.entries.read();

        match entries.get(&key) {
            Some(entry) if entry.source_snapshot == current_text => {
                let mut hits = self.hits.write();
                *hits += 1;

                debug!(
                    "Cache hit for block {} ({})",
                    block_id, target_language
                );

                Some(entry.translated.clone())
            }
            Some(_) => {
                // Entry exists but was made from older source text
                let mut misses = self.misses.write();
                *misses += 1;

                debug!(
                    "Cache snapshot mismatch for block {} ({})",
                    block_id, target_language
                );

                None
            }
            None => {
                let mut misses = self.misses.write();
                *misses += 1;

                debug!(
                    "Cache miss for block {} ({})",
                    block_id, target_language
                );

                None
            }
        }
    }

    /// Read a translation for rendering, snapshot-checked but independent of
    /// the reuse flag and without touching the hit/miss counters. With reuse
    /// disabled this is how the most recent fetch stays displayable.
    pub fn lookup(&self, block_id: BlockId, target_language: &str, current_text: &str) -> Option<String> {
        let key = CacheKey {
            block_id,
            target_language: target_language.to_string(),
        };
        self.entries
            .read()
            .get(&key)
            .filter(|entry| entry.source_snapshot == current_text)
            .map(|entry| entry.translated.clone())
    }

    /// Store a translation together with the source text it was made from.
    /// Unconditional: a successful fetch must be reachable by `lookup` even
    /// when reuse is disabled.
    pub fn store(
        &self,
        block_id: BlockId,
        target_language: &str,
        source_snapshot: &str,
        translated: &str,
    ) {
        let key = CacheKey {
            block_id,
            target_language: target_language.to_string(),
        };
        let mut entries = self.entries.write();

        entries.insert(
            key,
            CacheEntry {
                translated: translated.to_string(),
                source_snapshot: source_snapshot.to_string(),
            },
        );

        debug!("Cached translation for block {} ({})", block_id, target_language);
    }

    /// Drop every cached entry for a block, across all languages
    pub fn invalidate_block(&self, block_id: BlockId) {
        let mut entries = self.entries.write();
        entries.retain(|key, _| key.block_id != block_id);

        debug!("Invalidated cached translations for block {}", block_id);
    }

    /// Get cache statistics as (hits, misses, hit rate)
    pub fn stats(&self) -> (usize, usize, f64) {
        let hits = *self.hits.read();
        let misses = *self.misses.read();
        let total = hits + misses;

        let hit_rate = if total > 0 {
            hits as f64 / total as f64
        } else {
            0.0
        };

        (hits, misses, hit_rate)
    }

    /// Clear the cache
    pub fn clear(&self) {
        self.entries.write().clear();
        *self.hits.write() = 0;
        *self.misses.write() = 0;

        debug!("Translation cache cleared");
    }

    /// Get the number of entries in the cache
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Check if the cache is empty
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Check if the cache is enabled
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

impl Default for TranslationCache {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Clone for TranslationCache {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
            hits: self.hits.clone(),
            misses: self.misses.clone(),
            enabled: self.enabled,
        }
    }
}
