//! # Posterkit Parser
//!
//! Normalizer from the native live document to the canonical snapshot.
//!
//! The snapshot is never patched in place: whenever an up-to-date view
//! is needed, the whole document is normalized again. Re-running the
//! normalizer over an unmodified document yields identical output.

mod id_allocator;
mod normalizer;
mod style;

pub use id_allocator::IdAllocator;
pub use normalizer::normalize;
pub use style::{resolve_run_style, ResolvedStyle};
