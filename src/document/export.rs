use super::block::Block;

/// Serialize the ordered document to a single plain-text blob.
///
/// Block texts are joined with a double newline. Empty or whitespace-only
/// blocks are included as-is, never skipped: the export reflects the document
/// exactly, so two adjacent empty blocks produce a visible run of blank lines
/// in the output.
pub fn export(blocks: &[Block]) -> String {
    blocks
        .iter()
        .map(|block| block.text.as_str())
        .collect::<Vec<_>>()
        .join("\n\n")
}
