use std::collections::HashMap;
use std::fmt;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identity of a block in the assembled document.
///
/// Ids are generated once when a block enters the document (copy-in, manual
/// add, or split) and are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockId(Uuid);

impl BlockId {
    /// Generate a fresh block id
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for BlockId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where a block's text came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind")]
pub enum BlockOrigin {
    /// Copied (possibly via split) from a generator candidate
    Vendor {
        /// Name of the generator that produced the text
        vendor: String,
    },
    /// Typed by the user from scratch
    User,
}

impl BlockOrigin {
    /// The vendor tag, if this is generator-produced text
    pub fn vendor_tag(&self) -> Option<&str> {
        match self {
            Self::Vendor { vendor } => Some(vendor),
            Self::User => None,
        }
    }
}

/// One paragraph-sized unit of text in the assembled document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// Unique id within the document
    pub id: BlockId,

    /// Id of the vendor candidate this block was copied from, if any.
    /// Immutable once set; used for lineage highlighting, never for ordering.
    #[serde(default)]
    pub source_id: Option<BlockId>,

    /// Current text content
    pub text: String,

    /// Provenance of the text
    pub origin: BlockOrigin,

    /// Whether this block was produced by splitting a multi-paragraph edit.
    /// Informational only.
    #[serde(default)]
    pub is_fragment: bool,
}

impl Block {
    /// Create a vendor candidate block, as a generator feed would supply it
    pub fn vendor(vendor: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: BlockId::new(),
            source_id: None,
            text: text.into(),
            origin: BlockOrigin::Vendor {
                vendor: vendor.into(),
            },
            is_fragment: false,
        }
    }

    /// Create a user-authored block with no lineage
    pub fn authored(text: impl Into<String>) -> Self {
        Self {
            id: BlockId::new(),
            source_id: None,
            text: text.into(),
            origin: BlockOrigin::User,
            is_fragment: false,
        }
    }

    /// Derive a document copy of this block: fresh id, lineage pointing back
    /// at the original (or at the original's own source if it already has one),
    /// origin and text preserved. The receiver is left untouched.
    pub fn derived_copy(&self) -> Self {
        Self {
            id: BlockId::new(),
            source_id: self.source_id.or(Some(self.id)),
            text: self.text.clone(),
            origin: self.origin.clone(),
            is_fragment: self.is_fragment,
        }
    }

    /// Whether the block holds only whitespace
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Read-only candidate paragraphs, keyed by vendor name.
///
/// The engine never writes back to a feed; it only reads blocks to produce
/// derived copies.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VendorFeed {
    vendors: HashMap<String, Vec<Block>>,
}

impl VendorFeed {
    /// Create an empty feed
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a vendor's ordered candidate list, replacing any previous one
    pub fn set_candidates(&mut self, vendor: impl Into<String>, blocks: Vec<Block>) {
        self.vendors.insert(vendor.into(), blocks);
    }

    /// The ordered candidates for a vendor, empty if unknown
    pub fn candidates(&self, vendor: &str) -> &[Block] {
        self.vendors.get(vendor).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Candidate at a position within a vendor's list
    pub fn candidate(&self, vendor: &str, index: usize) -> Option<&Block> {
        self.vendors.get(vendor).and_then(|blocks| blocks.get(index))
    }

    /// Look up a candidate anywhere in the feed by id
    pub fn find(&self, id: BlockId) -> Option<&Block> {
        self.vendors
            .values()
            .flat_map(|blocks| blocks.iter())
            .find(|block| block.id == id)
    }

    /// Vendor names present in the feed
    pub fn vendor_names(&self) -> impl Iterator<Item = &str> {
        self.vendors.keys().map(String::as_str)
    }
}
