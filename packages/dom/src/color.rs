use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Direct RGB color value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);

    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }

    pub fn from_hex(input: &str) -> Option<Rgb> {
        let digits = input.strip_prefix('#')?;
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
        let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
        let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
        Some(Rgb(r, g, b))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}

/// Named slot in the document theme palette.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ThemeSlot {
    Dark1,
    Light1,
    Dark2,
    Light2,
    Accent1,
    Accent2,
    Accent3,
    Accent4,
    Accent5,
    Accent6,
    Hyperlink,
    FollowedHyperlink,
}

/// Document-level named-color table, built once per document.
///
/// Indirect color references resolve through this palette; a reference
/// to a slot the theme does not define resolves to nothing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    #[serde(default)]
    pub palette: BTreeMap<ThemeSlot, Rgb>,
}

impl Theme {
    pub fn resolve(&self, color: &Color) -> Option<Rgb> {
        match color {
            Color::Rgb(rgb) => Some(*rgb),
            Color::Theme(slot) => self.palette.get(slot).copied(),
        }
    }
}

/// Color value as the native document stores it: either a direct RGB
/// value or an indirect reference into the theme palette.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Color {
    Rgb(Rgb),
    Theme(ThemeSlot),
}

/// Parse a user-supplied color string: `#rrggbb`, `rgb(r, g, b)`, or a
/// common color name (case- and space-insensitive).
///
/// Unrecognized input falls back to black; the safe default keeps a
/// whole batch from failing over one bad color literal.
pub fn parse_color(input: &str) -> Rgb {
    let raw = input.trim();

    if let Some(rgb) = Rgb::from_hex(raw) {
        return rgb;
    }
    if let Some(rgb) = parse_rgb_call(raw) {
        return rgb;
    }
    let folded: String = raw
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
        .flat_map(char::to_lowercase)
        .collect();
    if let Some(rgb) = named_color(&folded) {
        return rgb;
    }

    tracing::warn!(color = raw, "unknown color, falling back to black");
    Rgb::BLACK
}

fn parse_rgb_call(raw: &str) -> Option<Rgb> {
    let inner = raw
        .strip_prefix("rgb(")
        .or_else(|| raw.strip_prefix("RGB("))?
        .strip_suffix(')')?;
    let mut parts = inner.split(',').map(|p| p.trim().parse::<u8>());
    let r = parts.next()?.ok()?;
    let g = parts.next()?.ok()?;
    let b = parts.next()?.ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Rgb(r, g, b))
}

fn named_color(name: &str) -> Option<Rgb> {
    let rgb = match name {
        "black" => Rgb(0, 0, 0),
        "white" => Rgb(255, 255, 255),
        "red" => Rgb(255, 0, 0),
        "green" => Rgb(0, 128, 0),
        "lime" => Rgb(0, 255, 0),
        "blue" => Rgb(0, 0, 255),
        "yellow" => Rgb(255, 255, 0),
        "orange" => Rgb(255, 165, 0),
        "purple" => Rgb(128, 0, 128),
        "gray" | "grey" => Rgb(128, 128, 128),
        "lightgray" | "lightgrey" => Rgb(211, 211, 211),
        "darkgray" | "darkgrey" => Rgb(169, 169, 169),
        "silver" => Rgb(192, 192, 192),
        "maroon" => Rgb(128, 0, 0),
        "navy" => Rgb(0, 0, 128),
        "teal" => Rgb(0, 128, 128),
        "olive" => Rgb(128, 128, 0),
        "aqua" | "cyan" => Rgb(0, 255, 255),
        "fuchsia" | "magenta" => Rgb(255, 0, 255),
        "brown" => Rgb(165, 42, 42),
        "pink" => Rgb(255, 192, 203),
        "gold" => Rgb(255, 215, 0),
        "lightyellow" => Rgb(255, 255, 224),
        "lightblue" => Rgb(173, 216, 230),
        "lightgreen" => Rgb(144, 238, 144),
        "deepskyblue" => Rgb(0, 191, 255),
        "steelblue" => Rgb(70, 130, 180),
        "crimson" => Rgb(220, 20, 60),
        "indigo" => Rgb(75, 0, 130),
        "coral" => Rgb(255, 127, 80),
        "salmon" => Rgb(250, 128, 114),
        "khaki" => Rgb(240, 230, 140),
        "lavender" => Rgb(230, 230, 250),
        "beige" => Rgb(245, 245, 220),
        "ivory" => Rgb(255, 255, 240),
        _ => return None,
    };
    Some(rgb)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_round_trip() {
        let rgb = Rgb::from_hex("#ffd700").unwrap();
        assert_eq!(rgb, Rgb(255, 215, 0));
        assert_eq!(rgb.hex(), "#ffd700");
    }

    #[test]
    fn test_parse_color_forms() {
        assert_eq!(parse_color("#FF0000"), Rgb(255, 0, 0));
        assert_eq!(parse_color("rgb(12, 34, 56)"), Rgb(12, 34, 56));
        assert_eq!(parse_color("Deep Sky Blue"), Rgb(0, 191, 255));
        assert_eq!(parse_color("light_gray"), Rgb(211, 211, 211));
    }

    #[test]
    fn test_unknown_color_falls_back_to_black() {
        assert_eq!(parse_color("definitely-not-a-color"), Rgb::BLACK);
    }

    #[test]
    fn test_theme_resolution() {
        let mut theme = Theme::default();
        theme.palette.insert(ThemeSlot::Accent1, Rgb(10, 20, 30));

        assert_eq!(
            theme.resolve(&Color::Theme(ThemeSlot::Accent1)),
            Some(Rgb(10, 20, 30))
        );
        assert_eq!(theme.resolve(&Color::Theme(ThemeSlot::Accent2)), None);
        assert_eq!(
            theme.resolve(&Color::Rgb(Rgb(1, 2, 3))),
            Some(Rgb(1, 2, 3))
        );
    }
}
