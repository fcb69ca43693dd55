/*!
 * Document model and mutation.
 *
 * This module holds the data model for the assembled document and the
 * operations over it:
 * - `block`: the `Block` unit, its provenance, and the read-only vendor feed
 * - `store`: the ordered `ParagraphStore` with index-safe mutation
 * - `splitter`: blank-line splitting of multi-paragraph edits
 * - `export`: plain-text serialization of the document
 */

pub mod block;
pub mod export;
pub mod splitter;
pub mod store;

pub use block::{Block, BlockId, BlockOrigin, VendorFeed};
pub use splitter::{split_edit, SplitOutcome};
pub use store::ParagraphStore;
