//! # Posterkit Model
//!
//! Canonical snapshot schema for a single-page poster document.
//!
//! The snapshot is the serialization contract consumed by planning and
//! review collaborators: a flat list of positioned, typed elements plus
//! the canvas size, with empty fields pruned. It is always *derived* —
//! the normalizer recomputes it from the live document; nothing patches
//! it incrementally.

mod prune;
mod schema;

pub use prune::prune;
pub use schema::{Element, ElementKind, Poster, Run};
