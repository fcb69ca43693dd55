/*!
 * Tests for plain-text export fidelity
 */

use coverdraft::document::{export::export, Block};

/// Export then split on the double-newline separator reproduces the original
/// per-block texts in order (for blocks not themselves containing a double
/// newline)
#[test]
fn test_export_withRoundTrip_shouldReproduceBlockTexts() {
    let texts = vec![
        "Dear hiring manager,",
        "I am excited to apply.",
        "A paragraph\nwith a single newline inside.",
        "Sincerely, A. Candidate",
    ];
    let blocks: Vec<Block> = texts.iter().map(|t| Block::authored(*t)).collect();

    let exported = export(&blocks);
    let recovered: Vec<&str> = exported.split("\n\n").collect();

    assert_eq!(recovered, texts);
}

#[test]
fn test_export_withWhitespaceOnlyBlocks_shouldIncludeThemAsIs() {
    let blocks = vec![
        Block::authored("a"),
        Block::authored("   "),
        Block::authored("b"),
    ];

    assert_eq!(export(&blocks), "a\n\n   \n\nb");
}

#[test]
fn test_export_withSingleBlock_shouldHaveNoSeparator() {
    let blocks = vec![Block::authored("only")];
    assert_eq!(export(&blocks), "only");
}
