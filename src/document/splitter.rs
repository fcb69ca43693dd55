use once_cell::sync::Lazy;
use regex::Regex;

use super::block::{Block, BlockId, BlockOrigin};

// @module: Multi-paragraph edit splitting

// @const: Paragraph boundary regex, one or more blank lines
static PARAGRAPH_BREAK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\n[ \t]*\n+").unwrap()
});

/// Result of checking an edit for paragraph boundaries
#[derive(Debug, Clone, PartialEq)]
pub enum SplitOutcome {
    /// Ordinary text edit: at most one logical paragraph, keep the block and
    /// apply the new text as-is
    Edit(String),

    /// The edit contains two or more logical paragraphs: replace the original
    /// block with these, in order
    Split(Vec<Block>),
}

/// Decide whether an edited text represents multiple logical paragraphs and,
/// if so, produce the replacement blocks.
///
/// Segments are the non-empty trimmed pieces between blank-line runs. For
/// each segment, provenance is inherited from the original block when the
/// pre-edit text still contains the segment verbatim; otherwise the segment
/// becomes a user-authored block with no lineage. This is a deliberate
/// substring-containment heuristic, not a diff: a reordered or lightly
/// reworded segment loses its vendor coloring even though most of its words
/// survived.
pub fn split_edit(original: &Block, new_text: &str) -> SplitOutcome {
    let segments: Vec<&str> = PARAGRAPH_BREAK
        .split(new_text)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .collect();

    if segments.len() < 2 {
        return SplitOutcome::Edit(new_text.to_string());
    }

    let replacements = segments
        .into_iter()
        .map(|segment| fragment_from(original, segment))
        .collect();

    SplitOutcome::Split(replacements)
}

/// Build one replacement block for a segment of a split edit
fn fragment_from(original: &Block, segment: &str) -> Block {
    if original.text.contains(segment) {
        Block {
            id: BlockId::new(),
            source_id: original.source_id.or(Some(original.id)),
            text: segment.to_string(),
            origin: original.origin.clone(),
            is_fragment: true,
        }
    } else {
        Block {
            id: BlockId::new(),
            source_id: None,
            text: segment.to_string(),
            origin: BlockOrigin::User,
            is_fragment: true,
        }
    }
}
