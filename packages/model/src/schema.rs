use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Complete poster snapshot: one canvas, many elements.
///
/// Element order is document order, which doubles as z-order (later
/// elements draw on top).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Poster {
    pub canvas_width: f64,
    pub canvas_height: f64,
    #[serde(default)]
    pub elements: Vec<Element>,
}

impl Poster {
    /// Serialize to JSON with empty fields pruned.
    ///
    /// This is the wire form handed to external collaborators; consumers
    /// must tolerate missing optional fields.
    pub fn to_pruned_value(&self) -> Value {
        let value = serde_json::to_value(self).expect("poster serializes to JSON");
        crate::prune(value)
    }

    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == id)
    }
}

/// Element kind, classified from the native document's discriminators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    TextBox,
    Picture,
    Shape,
    Table,
    Chart,
    Line,
}

/// Single positioned element on the canvas.
///
/// Geometry is in inches, rounded to two decimals. `id` is stable for
/// the lifetime of the editing session; ids carried by the native
/// document are preserved verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ElementKind,
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,

    /// Concatenation of `runs[].text` in order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub runs: Vec<Run>,
    /// First resolved run font size observed, as a quick typography cue.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_font_size: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_dash: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_path: Option<String>,

    /// Free-form metadata (section tags and the like).
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub meta: BTreeMap<String, Value>,
}

impl Element {
    pub fn new(id: impl Into<String>, kind: ElementKind) -> Self {
        Self {
            id: id.into(),
            kind,
            left: 0.0,
            top: 0.0,
            width: 0.0,
            height: 0.0,
            text: None,
            runs: Vec::new(),
            main_font_size: None,
            fill_color: None,
            border_color: None,
            border_width: None,
            border_dash: None,
            image_path: None,
            meta: BTreeMap::new(),
        }
    }
}

/// Contiguous span of text sharing one resolved style.
///
/// Every field except `text` is optional; a missing value means the
/// native document specified nothing at either cascade level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Run {
    #[serde(default)]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub underline: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_level: Option<u8>,
}
