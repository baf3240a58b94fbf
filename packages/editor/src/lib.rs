//! # Posterkit Editor
//!
//! Core mutation engine for a single-page poster document.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ dom: container → live Document              │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: Session lifecycle + operations      │
//! │  - open/save the container                  │
//! │  - id → node registry, id allocation        │
//! │  - operation library (text/geometry/shape/  │
//! │    content/image/layout)                    │
//! │  - wrapped-text height estimation           │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ parser: Document → canonical snapshot       │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **The live document is the source of truth**: the snapshot is a
//!    derived view, recomputed rather than patched.
//! 2. **One session per job**: all mutable state hangs off an owned
//!    [`Session`]; there is no global registry, so concurrent jobs
//!    cannot observe each other's handles.
//! 3. **Operations are total over the registry**: every operation
//!    addresses nodes through the session and fails with a typed
//!    error, never a panic.

mod errors;
mod metrics;
pub mod ops;
mod render;
mod session;

pub use errors::{EditError, EditResult};
pub use metrics::TextMetrics;
pub use render::{render_with_retry, Preview, Renderer, RetryPolicy};
pub use session::Session;
