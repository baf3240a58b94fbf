//! # Operation Library
//!
//! The fixed set of mutation operations. Every operation is a function
//! of `(&mut Session, typed args) -> EditResult<String>`: side effects
//! are confined to the session's live document, failures are typed,
//! and the returned string is the human-readable result recorded by
//! the batch executor.

pub mod content;
pub mod geometry;
pub mod image;
pub mod layout;
pub mod shape;
pub mod text;

use crate::errors::{EditError, EditResult};
use posterkit_dom::{ShapeNode, TextBody};

/// Borrow a node's text body, or fail with a kind mismatch.
pub(crate) fn text_body_mut<'a>(
    node: &'a mut ShapeNode,
    id: &str,
) -> EditResult<&'a mut TextBody> {
    node.body.as_mut().ok_or_else(|| EditError::KindMismatch {
        id: id.to_string(),
        expected: "text",
    })
}
