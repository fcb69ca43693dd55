/*!
 * End-to-end assembly session tests: copy-in, reorder, translate, edit,
 * split, delete, export
 */

use futures::future::join_all;

use coverdraft::document::BlockOrigin;
use coverdraft::providers::mock::MockTranslator;
use coverdraft::translation::RequestOutcome;
use coverdraft::{ControllerState, DropZone};

use crate::common;

/// A full session: assemble from two vendors, reorder, add a closing line,
/// and export the final letter
#[test]
fn test_session_withAssembleReorderAndExport_shouldProduceFinalLetter() {
    let mut controller = common::working_controller();

    controller.begin_vendor_drag("acme", 1);
    controller.drop(DropZone::Bottom, &[]);
    controller.begin_vendor_drag("globex", 0);
    controller.drop(DropZone::Content { pointer_y: 0.0 }, &common::midpoints(1));
    controller.begin_vendor_drag("acme", 2);
    controller.drop(DropZone::Bottom, &[]);

    // Pull the closing up, then send it back to the bottom zone
    controller.begin_reorder_drag(2);
    controller.drop(DropZone::Content { pointer_y: 120.0 }, &common::midpoints(3));
    assert_eq!(controller.blocks()[1].text, "Sincerely, A. Candidate");

    controller.begin_reorder_drag(1);
    controller.drop(DropZone::Bottom, &[]);

    let exported = controller.export();
    assert_eq!(
        exported,
        "To whom it may concern,\n\n\
         I am excited to apply for this position.\n\n\
         Sincerely, A. Candidate"
    );
}

/// Editing while viewing a translation promotes the translation, and the
/// promoted text exports as the new source
#[tokio::test]
async fn test_session_withTranslatePromoteAndExport_shouldExportPromotedText() {
    let mut controller = common::working_controller();
    controller.begin_vendor_drag("acme", 0);
    controller.drop(DropZone::Bottom, &[]);

    let outcome = controller.request_view(0, "fr").await;
    assert_eq!(outcome, RequestOutcome::Translated);

    controller.begin_edit(0);
    controller.commit_edit();

    assert_eq!(controller.export(), "[fr] Dear hiring manager,");
}

/// An edit that introduces a blank line splits the block, and provenance
/// survives on the untouched half
#[test]
fn test_session_withSplitEdit_shouldKeepProvenanceOnUntouchedHalf() {
    let mut controller = common::working_controller();
    controller.begin_vendor_drag("acme", 1);
    controller.drop(DropZone::Bottom, &[]);
    let candidate_id = controller.feed().candidate("acme", 1).unwrap().id;

    controller.begin_edit(0);
    controller.update_edit_buffer(
        "I am excited to apply for this position.\n\nI have admired your work for years.",
    );
    controller.commit_edit();

    assert_eq!(controller.blocks().len(), 2);

    let kept = &controller.blocks()[0];
    assert_eq!(kept.source_id, Some(candidate_id));
    assert!(matches!(&kept.origin, BlockOrigin::Vendor { vendor } if vendor == "acme"));
    assert!(kept.is_fragment);

    let added = &controller.blocks()[1];
    assert_eq!(added.origin, BlockOrigin::User);
    assert_eq!(added.source_id, None);

    assert_eq!(
        controller.export(),
        "I am excited to apply for this position.\n\nI have admired your work for years."
    );
}

/// Translations for several blocks fetch concurrently and independently
#[tokio::test]
async fn test_session_withConcurrentViewRequests_shouldTranslateAllBlocks() {
    let translator = MockTranslator::slow(10);
    let mut controller = common::controller_with(translator.clone());
    for index in 0..3 {
        controller.begin_vendor_drag("acme", index);
        controller.drop(DropZone::Bottom, &[]);
    }

    let outcomes = join_all((0..3).map(|index| controller.request_view(index, "de"))).await;

    assert!(outcomes.iter().all(|o| *o == RequestOutcome::Translated));
    assert_eq!(translator.call_count(), 3);
    for index in 0..3 {
        assert!(controller.display_text(index).unwrap().starts_with("[de] "));
    }
}

/// A failed fetch leaves the letter intact; retrying the same language
/// recovers and overwrites the error
#[tokio::test]
async fn test_session_withTransientTranslatorFailure_shouldRecoverOnRetry() {
    let mut controller = common::controller_with(MockTranslator::fail_first(1));
    controller.begin_vendor_drag("globex", 1);
    controller.drop(DropZone::Bottom, &[]);
    let id = controller.blocks()[0].id;

    assert_eq!(controller.request_view(0, "es").await, RequestOutcome::Failed);
    assert_eq!(
        controller.display_text(0),
        Some("My experience makes me a strong fit.".to_string())
    );
    assert!(controller.overlay().error_for(id).is_some());

    assert_eq!(
        controller.request_view(0, "es").await,
        RequestOutcome::Translated
    );
    assert!(controller.overlay().error_for(id).is_none());
    assert_eq!(
        controller.display_text(0),
        Some("[es] My experience makes me a strong fit.".to_string())
    );

    // The document itself never saw the failure
    assert_eq!(controller.export(), "My experience makes me a strong fit.");
}

/// Deleting a translated block releases its overlay state and the rest of
/// the document is untouched
#[tokio::test]
async fn test_session_withDeleteAfterTranslate_shouldReleaseOverlayState() {
    let mut controller = common::working_controller();
    controller.begin_vendor_drag("acme", 0);
    controller.drop(DropZone::Bottom, &[]);
    controller.begin_vendor_drag("acme", 1);
    controller.drop(DropZone::Bottom, &[]);

    controller.request_view(0, "fr").await;
    let removed_id = controller.blocks()[0].id;

    assert!(controller.remove_block(0));

    assert_eq!(controller.blocks().len(), 1);
    assert!(controller.overlay().error_for(removed_id).is_none());
    assert_eq!(*controller.state(), ControllerState::Idle);
    assert_eq!(
        controller.export(),
        "I am excited to apply for this position."
    );
}
