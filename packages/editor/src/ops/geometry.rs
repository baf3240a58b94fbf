//! Position and size operations.
//!
//! Geometry invariants are advisory: operations will happily produce
//! degenerate frames, and downstream layout review is responsible for
//! flagging them.

use crate::errors::EditResult;
use crate::session::Session;
use posterkit_dom::Emu;

pub fn set_position(
    session: &mut Session,
    id: &str,
    left: Option<f64>,
    top: Option<f64>,
) -> EditResult {
    let node = session.get_mut(id)?;
    if let Some(left) = left {
        node.frame.left = Emu::from_inches(left);
    }
    if let Some(top) = top {
        node.frame.top = Emu::from_inches(top);
    }
    Ok(format!("Set position for {id}"))
}

pub fn set_size(
    session: &mut Session,
    id: &str,
    width: Option<f64>,
    height: Option<f64>,
) -> EditResult {
    let node = session.get_mut(id)?;
    if let Some(width) = width {
        node.frame.width = Emu::from_inches(width);
    }
    if let Some(height) = height {
        node.frame.height = Emu::from_inches(height);
    }
    Ok(format!("Set size for element {id}"))
}

pub fn move_relative(session: &mut Session, id: &str, delta_x: f64, delta_y: f64) -> EditResult {
    let node = session.get_mut(id)?;
    node.frame.left += Emu::from_inches(delta_x);
    node.frame.top += Emu::from_inches(delta_y);
    Ok(format!("Moved element {id}"))
}

/// Proportional scale. With `fixed_center` the element's center point
/// is preserved: left/top are recomputed from the old center and the
/// new size.
pub fn scale(session: &mut Session, id: &str, factor: f64, fixed_center: bool) -> EditResult {
    let node = session.get_mut(id)?;
    let old = node.frame;

    let new_width = old.width.scaled(factor);
    let new_height = old.height.scaled(factor);

    if fixed_center {
        let center_x = old.center_x();
        let center_y = old.center_y();
        node.frame.width = new_width;
        node.frame.height = new_height;
        node.frame.left = Emu(center_x.0 - new_width.0 / 2);
        node.frame.top = Emu(center_y.0 - new_height.0 / 2);
    } else {
        node.frame.width = new_width;
        node.frame.height = new_height;
    }

    Ok(format!("Resized element {id} by {factor}x"))
}

/// Apply one delta to a list of elements. A missing id is logged and
/// skipped; the rest of the group still moves.
pub fn move_group(session: &mut Session, ids: &[String], dx: f64, dy: f64) -> EditResult {
    let mut moved = 0usize;
    for id in ids {
        match move_relative(session, id, dx, dy) {
            Ok(_) => moved += 1,
            Err(err) => {
                tracing::warn!(id = id.as_str(), %err, "skipping element in group move");
            }
        }
    }
    Ok(format!("Moved {moved} of {} elements", ids.len()))
}
