/*!
 * Per-block translation state.
 *
 * This module keeps translation concerns out of the document model:
 * - `cache`: snapshot-validated storage of fetched translations
 * - `view`: which language each block currently displays
 * - `overlay`: the request/invalidate/display facade with single-flight
 *   de-duplication and completion-time staleness checks
 *
 * Edit operations never reason about in-flight network state; they only call
 * `TranslationOverlay::invalidate` and move on.
 */

pub mod cache;
pub mod overlay;
pub mod view;

pub use cache::TranslationCache;
pub use overlay::{RequestOutcome, TranslationOverlay};
pub use view::{ViewLanguage, ViewSelector};
