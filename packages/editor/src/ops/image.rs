//! Image operations. Non-absolute paths resolve against the session's
//! asset folder; sizes fall back to the image's native aspect.

use crate::errors::{EditError, EditResult};
use crate::session::Session;
use posterkit_dom::{Frame, NodeKind, ShapeNode};

/// Pixels per inch assumed when deriving native image size.
const NATIVE_DPI: f64 = 96.0;

/// Insert a picture at explicit or native-aspect size.
pub fn insert_image(
    session: &mut Session,
    image_path: &str,
    left: f64,
    top: f64,
    width: Option<f64>,
    height: Option<f64>,
    element_id: Option<String>,
) -> EditResult {
    let resolved = session.resolve_asset(image_path);
    if !resolved.is_file() {
        return Err(EditError::AssetNotFound(resolved));
    }

    let (width_in, height_in) = if let (Some(w), Some(h)) = (width, height) {
        (w, h)
    } else {
        let (px_w, px_h) = image::image_dimensions(&resolved).map_err(|err| {
            EditError::Argument(format!(
                "cannot read image '{}': {err}",
                resolved.display()
            ))
        })?;
        let native_w = px_w.max(1) as f64 / NATIVE_DPI;
        let native_h = px_h.max(1) as f64 / NATIVE_DPI;
        match (width, height) {
            (Some(w), None) => (w, w * native_h / native_w),
            (None, Some(h)) => (h * native_w / native_h, h),
            _ => (native_w, native_h),
        }
    };

    let node = ShapeNode::new(
        NodeKind::Picture { source: resolved },
        Frame::from_inches(left, top, width_in, height_in),
    );
    session.register_node(node, element_id)
}

/// Replace a picture's content while preserving its geometry.
///
/// Either points the element at a new file, or — when
/// `new_image_element_id` is given — deletes this element and moves an
/// already-inserted picture into its frame.
pub fn replace_image(
    session: &mut Session,
    id: &str,
    new_image_path: Option<&str>,
    new_image_element_id: Option<&str>,
) -> EditResult {
    if let Some(other) = new_image_element_id {
        let frame = session.get(id)?.frame;
        session.node_ref(other)?;
        session.remove(id)?;
        let node = session.get_mut(other)?;
        node.frame = frame;
        return Ok(format!(
            "Replaced image for element {id} with element {other}"
        ));
    }

    let Some(path) = new_image_path else {
        return Err(EditError::Argument(
            "replace_image needs new_image_path or new_image_element_id".to_string(),
        ));
    };
    let resolved = session.resolve_asset(path);
    if !resolved.is_file() {
        return Err(EditError::AssetNotFound(resolved));
    }

    let node = session.get_mut(id)?;
    match &mut node.kind {
        NodeKind::Picture { source } => {
            *source = resolved;
        }
        _ => {
            return Err(EditError::KindMismatch {
                id: id.to_string(),
                expected: "picture",
            })
        }
    }
    Ok(format!("Replaced image for element {id}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use posterkit_dom::{Document, Emu};

    fn session_with_assets() -> (Session, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let session = Session::from_document(Document::new(10.0, 10.0), dir.path());
        (session, dir)
    }

    fn write_png(dir: &std::path::Path, name: &str, w: u32, h: u32) {
        let img = image::RgbImage::new(w, h);
        img.save(dir.join(name)).unwrap();
    }

    #[test]
    fn test_insert_image_explicit_size() {
        let (mut session, dir) = session_with_assets();
        write_png(dir.path(), "fig.png", 100, 50);

        let id = insert_image(
            &mut session,
            "fig.png",
            1.0,
            2.0,
            Some(4.0),
            Some(2.0),
            None,
        )
        .unwrap();

        let node = session.get(&id).unwrap();
        assert_eq!(node.frame.width, Emu::from_inches(4.0));
        assert_eq!(node.frame.height, Emu::from_inches(2.0));
        assert!(matches!(node.kind, NodeKind::Picture { .. }));
    }

    #[test]
    fn test_insert_image_native_aspect() {
        let (mut session, dir) = session_with_assets();
        write_png(dir.path(), "wide.png", 192, 96);

        let id = insert_image(&mut session, "wide.png", 0.0, 0.0, Some(4.0), None, None)
            .unwrap();

        let node = session.get(&id).unwrap();
        assert_eq!(node.frame.width, Emu::from_inches(4.0));
        assert_eq!(node.frame.height, Emu::from_inches(2.0));
    }

    #[test]
    fn test_missing_asset_is_typed_error() {
        let (mut session, _dir) = session_with_assets();
        let err =
            insert_image(&mut session, "nope.png", 0.0, 0.0, None, None, None).unwrap_err();
        assert!(matches!(err, EditError::AssetNotFound(_)));
    }

    #[test]
    fn test_replace_image_preserves_geometry() {
        let (mut session, dir) = session_with_assets();
        write_png(dir.path(), "a.png", 10, 10);
        write_png(dir.path(), "b.png", 10, 10);

        let id = insert_image(
            &mut session,
            "a.png",
            1.0,
            1.0,
            Some(3.0),
            Some(3.0),
            None,
        )
        .unwrap();
        replace_image(&mut session, &id, Some("b.png"), None).unwrap();

        let node = session.get(&id).unwrap();
        assert_eq!(node.frame.width, Emu::from_inches(3.0));
        match &node.kind {
            NodeKind::Picture { source } => {
                assert!(source.ends_with("b.png"));
            }
            other => panic!("unexpected kind: {other:?}"),
        }
    }

    #[test]
    fn test_replace_with_existing_element() {
        let (mut session, dir) = session_with_assets();
        write_png(dir.path(), "a.png", 10, 10);
        write_png(dir.path(), "b.png", 10, 10);

        let old = insert_image(
            &mut session,
            "a.png",
            1.0,
            1.0,
            Some(2.0),
            Some(2.0),
            None,
        )
        .unwrap();
        let new = insert_image(
            &mut session,
            "b.png",
            5.0,
            5.0,
            Some(1.0),
            Some(1.0),
            None,
        )
        .unwrap();

        replace_image(&mut session, &old, None, Some(&new)).unwrap();

        assert!(session.get(&old).is_err(), "old element deleted");
        let node = session.get(&new).unwrap();
        assert_eq!(node.frame.left, Emu::from_inches(1.0));
        assert_eq!(node.frame.width, Emu::from_inches(2.0));
    }
}
