/*!
 * # coverdraft - Cover Letter Assembly Engine
 *
 * A Rust library for assembling a final document out of candidate paragraphs
 * produced by independent generators, with an on-demand translation overlay.
 *
 * ## Features
 *
 * - Ordered document of paragraph blocks with provenance lineage
 * - Index-safe mutation: copy-in, reorder, insert, delete, edit
 * - Blank-line splitting of multi-paragraph edits with provenance inheritance
 * - Per-block translation cache with source-change invalidation
 * - Single-flight de-duplication of concurrent translation fetches
 * - Plain-text export of the assembled document
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `document`: Document model and mutation:
 *   - `document::block`: Block unit, provenance, vendor feed
 *   - `document::store`: Ordered store with index-safe operations
 *   - `document::splitter`: Multi-paragraph edit splitting
 *   - `document::export`: Plain-text serialization
 * - `translation`: Per-block translation state:
 *   - `translation::cache`: Snapshot-validated translation cache
 *   - `translation::view`: Displayed-language selection
 *   - `translation::overlay`: Request/invalidate/display orchestration
 * - `providers`: Translation backends behind the `Translator` trait:
 *   - `providers::remote`: HTTP translation endpoint client
 *   - `providers::mock`: Configurable mock for tests
 * - `controller`: Assembly state machine and drop-zone resolution
 * - `language_utils`: View-language code utilities
 * - `errors`: Custom error types for the engine
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod controller;
pub mod document;
pub mod errors;
pub mod language_utils;
pub mod providers;
pub mod translation;

// Re-export main types for easier usage
pub use app_config::Config;
pub use controller::{AssemblyController, ControllerState, DragPayload, DropZone};
pub use document::{Block, BlockId, BlockOrigin, ParagraphStore, VendorFeed};
pub use errors::{AppError, ProviderError, TranslationError};
pub use providers::Translator;
pub use translation::{RequestOutcome, TranslationOverlay};
