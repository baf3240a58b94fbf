//! Alignment, paragraph alignment, and z-order operations.

use crate::errors::EditResult;
use crate::session::Session;
use posterkit_dom::{Alignment, Emu};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum XAlign {
    Left,
    Center,
    Right,
}

impl XAlign {
    fn from_name(name: &str) -> XAlign {
        match name.to_ascii_lowercase().as_str() {
            "left" => XAlign::Left,
            "center" => XAlign::Center,
            "right" => XAlign::Right,
            other => {
                tracing::warn!(alignment = other, "unknown x alignment, using left");
                XAlign::Left
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum YAlign {
    Top,
    Middle,
    Bottom,
}

impl YAlign {
    fn from_name(name: &str) -> YAlign {
        match name.to_ascii_lowercase().as_str() {
            "top" => YAlign::Top,
            "middle" => YAlign::Middle,
            "bottom" => YAlign::Bottom,
            other => {
                tracing::warn!(alignment = other, "unknown y alignment, using top");
                YAlign::Top
            }
        }
    }
}

/// Align elements horizontally against a reference element's left
/// edge, center, or right edge. The reference defaults to the first id
/// in the list.
pub fn align_x(
    session: &mut Session,
    ids: &[String],
    alignment: &str,
    reference_id: Option<&str>,
) -> EditResult {
    if ids.is_empty() {
        return Ok("No elements to align.".to_string());
    }
    let align = XAlign::from_name(alignment);
    let reference = reference_id.unwrap_or(&ids[0]);
    let frame = session.get(reference)?.frame;
    let (ref_left, ref_center, ref_right) = (frame.left, frame.center_x(), frame.right());

    for id in ids {
        session.node_ref(id)?;
    }
    for id in ids {
        let node = session.get_mut(id)?;
        node.frame.left = match align {
            XAlign::Left => ref_left,
            XAlign::Center => Emu(ref_center.0 - node.frame.width.0 / 2),
            XAlign::Right => Emu(ref_right.0 - node.frame.width.0),
        };
    }
    Ok(format!("Aligned {} elements horizontally", ids.len()))
}

/// Align elements vertically against a reference element's top edge,
/// vertical middle, or bottom edge.
pub fn align_y(
    session: &mut Session,
    ids: &[String],
    alignment: &str,
    reference_id: Option<&str>,
) -> EditResult {
    if ids.is_empty() {
        return Ok("No elements to align.".to_string());
    }
    let align = YAlign::from_name(alignment);
    let reference = reference_id.unwrap_or(&ids[0]);
    let frame = session.get(reference)?.frame;
    let (ref_top, ref_middle, ref_bottom) = (frame.top, frame.center_y(), frame.bottom());

    for id in ids {
        session.node_ref(id)?;
    }
    for id in ids {
        let node = session.get_mut(id)?;
        node.frame.top = match align {
            YAlign::Top => ref_top,
            YAlign::Middle => Emu(ref_middle.0 - node.frame.height.0 / 2),
            YAlign::Bottom => Emu(ref_bottom.0 - node.frame.height.0),
        };
    }
    Ok(format!("Aligned {} elements vertically", ids.len()))
}

/// Set paragraph alignment for every paragraph of a text element.
pub fn set_text_alignment(session: &mut Session, id: &str, alignment: &str) -> EditResult {
    let align = Alignment::from_name(alignment);
    let node = session.get_mut(id)?;
    let body = super::text_body_mut(node, id)?;
    for para in &mut body.paragraphs {
        para.alignment = Some(align);
    }
    Ok(format!("Set text alignment to {alignment} for element {id}"))
}

/// Move an element behind everything else: a structural reorder to the
/// front of the node sequence.
pub fn send_to_back(session: &mut Session, id: &str) -> EditResult {
    let node_ref = session.node_ref(id)?;
    session.document_mut().send_to_back(node_ref);
    Ok(format!("Sent element {id} to back"))
}
