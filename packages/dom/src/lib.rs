//! # Posterkit DOM
//!
//! The native live document: the mutable in-memory representation that
//! operations edit directly.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ dom: container file → Document (live tree)  │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ parser: Document → canonical Poster snapshot│
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: mutations against Document nodes    │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! The document is deliberately richer than the canonical model: runs
//! keep per-level style options, paragraphs carry default run
//! properties (the second cascade level), and colors may be indirect
//! theme references resolved against the document palette.

mod color;
mod document;
mod error;
mod geometry;
mod node;
mod text;

pub use color::{parse_color, Color, Rgb, Theme, ThemeSlot};
pub use document::{Document, NodeRef};
pub use error::DomError;
pub use geometry::{Emu, Frame, EMU_PER_INCH, EMU_PER_POINT};
pub use node::{DashStyle, NodeKind, Paint, Preset, ShapeNode, Stroke};
pub use text::{Alignment, AutoSize, Paragraph, RunNode, RunProps, TextBody};
