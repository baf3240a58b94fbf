use crate::color::Color;
use crate::geometry::{Emu, Frame};
use crate::text::TextBody;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Preset geometry for auto shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Preset {
    Rectangle,
    RoundedRectangle,
    RightArrow,
    Diamond,
    Oval,
    Star,
    CurvedRightArrow,
    CurvedLeftArrow,
}

impl Preset {
    pub fn from_name(name: &str) -> Option<Preset> {
        let preset = match name.to_ascii_lowercase().as_str() {
            "rectangle" => Preset::Rectangle,
            "rounded_rectangle" => Preset::RoundedRectangle,
            "arrow" => Preset::RightArrow,
            "diamond" => Preset::Diamond,
            "oval" => Preset::Oval,
            "star" => Preset::Star,
            "curved right arrow" => Preset::CurvedRightArrow,
            "curved left arrow" => Preset::CurvedLeftArrow,
            _ => return None,
        };
        Some(preset)
    }
}

/// Dash pattern of a stroke.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DashStyle {
    #[default]
    Solid,
    Dash,
    DashDot,
    LongDash,
}

impl DashStyle {
    /// Parse a dash style name; unknown names fall back to solid.
    pub fn from_name(name: &str) -> DashStyle {
        match name.to_ascii_lowercase().as_str() {
            "solid" => DashStyle::Solid,
            "dash" => DashStyle::Dash,
            "dash_dot" => DashStyle::DashDot,
            "long_dash" => DashStyle::LongDash,
            other => {
                tracing::warn!(dash = other, "unknown dash style, using solid");
                DashStyle::Solid
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DashStyle::Solid => "solid",
            DashStyle::Dash => "dash",
            DashStyle::DashDot => "dash_dot",
            DashStyle::LongDash => "long_dash",
        }
    }
}

/// Solid fill.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paint {
    pub color: Color,
}

/// Outline style of a node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<Emu>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dash: Option<DashStyle>,
}

/// Native discriminator for a node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NodeKind {
    TextBox,
    Picture { source: PathBuf },
    AutoShape { preset: Preset },
    Connector,
    Table,
    Chart,
}

/// One positioned node in the document's shape tree.
///
/// `sp_id` is the engine-assigned native identifier, stable for the
/// node's lifetime. `name` is the element id addressed by operations;
/// the normalizer writes it back onto nodes that lack one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeNode {
    #[serde(default)]
    pub sp_id: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub kind: NodeKind,
    pub frame: Frame,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<Paint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<Stroke>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<TextBody>,
}

impl ShapeNode {
    pub fn new(kind: NodeKind, frame: Frame) -> Self {
        Self {
            sp_id: 0,
            name: None,
            kind,
            frame,
            fill: None,
            line: None,
            body: None,
        }
    }

    pub fn has_text_body(&self) -> bool {
        self.body.is_some()
    }
}
