use crate::color::Color;
use serde::{Deserialize, Serialize};

/// Run-level character properties.
///
/// Every field is optional: a `None` at the run level falls through to
/// the owning paragraph's `defaults`, and no further.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunProps {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_pt: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub underline: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

/// One styled span of text within a paragraph.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunNode {
    pub text: String,
    #[serde(default)]
    pub props: RunProps,
}

impl RunNode {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            props: RunProps::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    Left,
    Center,
    Right,
    Justify,
}

impl Alignment {
    /// Parse an alignment name, falling back to left for unknown input.
    pub fn from_name(name: &str) -> Alignment {
        match name.to_ascii_lowercase().as_str() {
            "left" => Alignment::Left,
            "center" => Alignment::Center,
            "right" => Alignment::Right,
            "justify" => Alignment::Justify,
            other => {
                tracing::warn!(alignment = other, "unknown text alignment, using left");
                Alignment::Left
            }
        }
    }
}

/// One paragraph: a list level, optional alignment, default run
/// properties, and the runs themselves.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alignment: Option<Alignment>,
    /// Paragraph default run properties — the fallback cascade level.
    #[serde(default)]
    pub defaults: RunProps,
    #[serde(default)]
    pub runs: Vec<RunNode>,
}

impl Paragraph {
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.iter().all(|r| r.text.is_empty())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AutoSize {
    #[default]
    None,
    /// Grow the shape to fit its text.
    FitText,
}

/// Text content of a node: ordered paragraphs plus frame-level flags.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextBody {
    #[serde(default)]
    pub word_wrap: bool,
    #[serde(default)]
    pub auto_size: AutoSize,
    #[serde(default)]
    pub paragraphs: Vec<Paragraph>,
}

impl TextBody {
    /// Full text: paragraph texts joined with newlines.
    pub fn text(&self) -> String {
        self.paragraphs
            .iter()
            .map(Paragraph::text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
