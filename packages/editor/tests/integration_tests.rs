//! Full-lifecycle tests: load a container, mutate through the session,
//! snapshot, save, and reload.

use posterkit_dom::{
    Document, Frame, NodeKind, Paragraph, RunNode, RunProps, ShapeNode, TextBody,
};
use posterkit_editor::{ops, Session};
use posterkit_model::ElementKind;

fn sample_document() -> Document {
    let mut doc = Document::new(10.0, 10.0);

    let mut title = ShapeNode::new(NodeKind::TextBox, Frame::from_inches(1.0, 0.5, 8.0, 1.0));
    title.body = Some(TextBody {
        word_wrap: true,
        paragraphs: vec![Paragraph {
            defaults: RunProps {
                size_pt: Some(36.0),
                ..RunProps::default()
            },
            runs: vec![RunNode::new("Original Title")],
            ..Paragraph::default()
        }],
        ..TextBody::default()
    });
    doc.push(title);

    doc
}

#[test]
fn test_load_mutate_save_cycle() {
    let dir = tempfile::tempdir().unwrap();
    let container = dir.path().join("board.json");
    sample_document().save(&container).unwrap();

    let mut session = Session::open(&container, dir.path()).unwrap();
    let snapshot = session.snapshot();
    assert_eq!(snapshot.elements.len(), 1);
    let title_id = snapshot.elements[0].id.clone();

    ops::text::set_font_size(&mut session, &title_id, 48.0).unwrap();
    let box_id = ops::content::insert_textbox(
        &mut session,
        ops::content::InsertTextboxArgs {
            left: 1.0,
            top: 3.0,
            width: 4.0,
            height: 1.0,
            text: "Fresh content".to_string(),
            ..ops::content::InsertTextboxArgs::default()
        },
    )
    .unwrap();

    let out = dir.path().join("out.json");
    session.save(&out).unwrap();

    // The mutated state survives a reload.
    let mut reloaded = Session::open(&out, dir.path()).unwrap();
    let snapshot = reloaded.snapshot();
    assert_eq!(snapshot.elements.len(), 2);

    let title = snapshot.element(&title_id).unwrap();
    assert_eq!(title.runs[0].font_size, Some(48.0));

    let inserted = snapshot.element(&box_id).unwrap();
    assert_eq!(inserted.kind, ElementKind::TextBox);
    assert_eq!(inserted.text.as_deref(), Some("Fresh content"));
}

#[test]
fn test_snapshot_reflects_mutations_without_drift() {
    let mut session = Session::from_document(sample_document(), "/tmp/assets");
    let before = session.snapshot();
    let id = before.elements[0].id.clone();

    ops::geometry::move_relative(&mut session, &id, 1.0, 2.0).unwrap();

    let after = session.snapshot();
    assert_eq!(after.elements[0].left, before.elements[0].left + 1.0);
    assert_eq!(after.elements[0].top, before.elements[0].top + 2.0);

    // Re-snapshotting with no further mutations is a fixed point.
    assert_eq!(session.snapshot(), after);
}

#[test]
fn test_new_elements_are_addressable_in_same_batch() {
    let mut session = Session::from_document(sample_document(), "/tmp/assets");

    let id = ops::shape::insert_shape(
        &mut session,
        ops::shape::InsertShapeArgs {
            left: 0.5,
            top: 0.5,
            width: 2.0,
            height: 2.0,
            shape_type: "rectangle".to_string(),
            fill_color: Some("#aabbcc".to_string()),
            ..ops::shape::InsertShapeArgs::default()
        },
    )
    .unwrap();

    // Later operations in the same job see the new id immediately.
    ops::geometry::scale(&mut session, &id, 2.0, true).unwrap();
    ops::layout::send_to_back(&mut session, &id).unwrap();

    let snapshot = session.snapshot();
    assert_eq!(snapshot.elements[0].id, id);
    assert_eq!(snapshot.elements[0].width, 4.0);
}
