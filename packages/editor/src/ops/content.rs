//! Content operations: full-text replace, append, text box insertion,
//! deletion, cloning, and bullet decoration.
//!
//! Replace and append recompute the element height with the estimator
//! and overwrite whatever was there; insertion keeps the requested
//! height when it is larger than the estimate.

use crate::errors::EditResult;
use crate::ops::text::{format_text, TextStyle};
use crate::session::Session;
use posterkit_dom::{
    AutoSize, Emu, Frame, NodeKind, Paragraph, RunNode, ShapeNode, TextBody,
};

/// Uniform style applied by content rewrites. Matches the engine's
/// historical defaults for generated text.
#[derive(Debug, Clone)]
pub struct ContentStyle {
    pub font_size: f64,
    pub font_name: String,
    pub color: String,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
}

impl Default for ContentStyle {
    fn default() -> Self {
        Self {
            font_size: 44.0,
            font_name: "Arial".to_string(),
            color: "black".to_string(),
            bold: false,
            italic: false,
            underline: false,
        }
    }
}

impl ContentStyle {
    fn as_text_style(&self) -> TextStyle {
        TextStyle {
            font_size: Some(self.font_size),
            color: Some(self.color.clone()),
            bold: Some(self.bold),
            italic: Some(self.italic),
            underline: Some(self.underline),
            font_name: Some(self.font_name.clone()),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct InsertTextboxArgs {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    pub text: String,
    pub style: Option<ContentStyle>,
    pub element_id: Option<String>,
}

/// Collapse the caller's escaped newlines and normalize CR variants.
fn normalize_newlines(text: &str) -> String {
    text.replace("\\n", "\n").replace("\r\n", "\n").replace('\r', "\n")
}

/// List level implied by a visible bullet prefix.
fn bullet_level(line: &str) -> Option<u8> {
    let stripped = line.trim_start();
    if stripped.starts_with('•') || stripped.starts_with("- ") {
        Some(0)
    } else if stripped.starts_with('◦') {
        Some(1)
    } else {
        None
    }
}

/// Split a line on `**bold**` markers. Marked spans come back with the
/// bold flag; the concatenation of all parts equals the input line.
fn split_bold_markup(line: &str) -> Vec<(String, bool)> {
    let mut parts = Vec::new();
    let mut rest = line;

    while let Some(open) = rest.find("**") {
        let Some(close_rel) = rest[open + 2..].find("**") else {
            break;
        };
        let close = open + 2 + close_rel;
        if open > 0 {
            parts.push((rest[..open].to_string(), false));
        }
        if close > open + 2 {
            parts.push((rest[open + 2..close].to_string(), true));
        }
        rest = &rest[close + 2..];
    }
    if !rest.is_empty() {
        parts.push((rest.to_string(), false));
    }
    parts
}

/// Append the line's runs to a paragraph, honoring bold markup. New
/// runs inherit the properties of the paragraph's trailing run.
fn push_markup_runs(para: &mut Paragraph, line: &str) {
    let base = para.runs.last().map(|r| r.props.clone());
    for (text, bold) in split_bold_markup(line) {
        let mut props = base.clone().unwrap_or_default();
        if bold {
            props.bold = Some(true);
        }
        para.runs.push(RunNode { text, props });
    }
}

fn build_paragraph(line: &str) -> Paragraph {
    let mut para = Paragraph {
        level: bullet_level(line),
        ..Paragraph::default()
    };
    push_markup_runs(&mut para, line);
    para
}

/// Replace an element's entire text content.
///
/// Clears all paragraphs, rebuilds them from the newline-split input,
/// applies the uniform style, and overwrites the height with the
/// estimator's result.
pub fn set_text_content(
    session: &mut Session,
    id: &str,
    text: &str,
    style: Option<ContentStyle>,
) -> EditResult {
    let style = style.unwrap_or_default();
    let clean = normalize_newlines(text);
    let metrics = session.metrics;

    let node = session.get_mut(id)?;
    let width_in = node.frame.width.inches();
    let body = super::text_body_mut(node, id)?;

    body.word_wrap = true;
    body.auto_size = AutoSize::FitText;
    body.paragraphs = clean.split('\n').map(build_paragraph).collect();

    let height = metrics.estimate_height_in(width_in, style.font_size, &clean);
    node.frame.height = Emu::from_inches(height);

    format_text(session, id, &style.as_text_style(), None)?;
    Ok(format!("Set text content for element {id}"))
}

/// Append paragraphs, using the existing trailing paragraph as the
/// style template, then re-estimate the height over the full text.
pub fn append_text(session: &mut Session, id: &str, text: &str) -> EditResult {
    let clean = normalize_newlines(text);
    let metrics = session.metrics;

    let node = session.get_mut(id)?;
    let width_in = node.frame.width.inches();
    let body = super::text_body_mut(node, id)?;

    // A trailing run-less paragraph would render as a stray blank
    // line; drop it before templating.
    if body
        .paragraphs
        .last()
        .is_some_and(|p| p.runs.is_empty() && p.text().trim().is_empty())
    {
        body.paragraphs.pop();
    }

    let template = body.paragraphs.last().map(|p| {
        let props = if p.defaults.size_pt.is_some() || p.runs.is_empty() {
            p.defaults.clone()
        } else {
            p.runs[0].props.clone()
        };
        (p.level, p.alignment, props)
    });

    let mut lines: Vec<&str> = clean.split('\n').collect();
    if lines.first() == Some(&"") {
        lines.remove(0);
    }

    for line in lines {
        let mut para = Paragraph::default();
        if let Some((level, alignment, props)) = &template {
            para.level = *level;
            para.alignment = *alignment;
            para.defaults = props.clone();
        }
        if let Some(level) = bullet_level(line) {
            para.level = Some(level);
        }
        push_markup_runs(&mut para, line);
        body.paragraphs.push(para);
    }

    let font_pt = body
        .paragraphs
        .last()
        .and_then(|p| {
            p.defaults
                .size_pt
                .or_else(|| p.runs.first().and_then(|r| r.props.size_pt))
        })
        .unwrap_or(44.0);

    let full_text = body.text();
    let height = metrics.estimate_height_in(width_in, font_pt, &full_text);
    node.frame.height = Emu::from_inches(height);

    Ok(format!("Appended text to element {id}"))
}

/// Insert a text box. The width is fixed; the height grows to the
/// estimate when the requested height is too small.
pub fn insert_textbox(session: &mut Session, args: InsertTextboxArgs) -> EditResult {
    let style = args.style.unwrap_or_default();
    let clean = normalize_newlines(&args.text);

    let estimated = session
        .metrics
        .estimate_height_in(args.width, style.font_size, &clean);
    let final_height = args.height.max(estimated);

    let mut node = ShapeNode::new(
        NodeKind::TextBox,
        Frame::from_inches(args.left, args.top, args.width, final_height),
    );
    node.body = Some(TextBody {
        word_wrap: true,
        auto_size: AutoSize::FitText,
        paragraphs: clean.split('\n').map(build_paragraph).collect(),
    });

    let id = session.register_node(node, args.element_id)?;
    format_text(session, &id, &style.as_text_style(), None)?;
    Ok(id)
}

/// Remove an element from the document and the registry.
pub fn delete_element(session: &mut Session, id: &str) -> EditResult {
    session.remove(id)?;
    Ok(format!("Deleted element {id}"))
}

pub fn delete_elements(session: &mut Session, ids: &[String]) -> EditResult {
    for id in ids {
        session.remove(id)?;
    }
    Ok(format!("Deleted {} elements", ids.len()))
}

/// Deep-copy an element to a new position under a fresh id.
pub fn clone_element(
    session: &mut Session,
    source_id: &str,
    new_left: f64,
    new_top: f64,
    new_id: Option<String>,
) -> EditResult {
    let mut copy = session.get(source_id)?.clone();
    copy.name = None;
    copy.frame.left = Emu::from_inches(new_left);
    copy.frame.top = Emu::from_inches(new_top);
    session.register_node(copy, new_id)
}

/// Prefix visible bullet glyphs onto paragraphs that lack one.
pub fn add_bullets(session: &mut Session, id: &str, level: u8) -> EditResult {
    let node = session.get_mut(id)?;
    let body = super::text_body_mut(node, id)?;

    let mut count = 0usize;
    for para in &mut body.paragraphs {
        if para.runs.is_empty() || para.text().trim().is_empty() {
            continue;
        }
        let bullet = match para.level.unwrap_or(level) {
            0 => "• ",
            1 => "◦ ",
            _ => continue,
        };
        let trimmed_start = para.text();
        let trimmed_start = trimmed_start.trim_start();
        if trimmed_start.starts_with('•') || trimmed_start.starts_with('◦') {
            continue;
        }
        let first = &mut para.runs[0];
        first.text = format!("{bullet}{}", first.text);
        count += 1;
    }

    Ok(format!("Added bullets to {count} paragraphs in element {id}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::testutil::{empty_session, text_session};
    use posterkit_dom::RunProps;

    #[test]
    fn test_insert_textbox_keeps_larger_requested_height() {
        // 3in box at 20pt with "A\nB": two lines estimate to about
        // 0.87in, below the requested 1.0in.
        let mut session = empty_session();
        let id = insert_textbox(
            &mut session,
            InsertTextboxArgs {
                left: 1.0,
                top: 1.0,
                width: 3.0,
                height: 1.0,
                text: "A\\nB".to_string(),
                style: Some(ContentStyle {
                    font_size: 20.0,
                    ..ContentStyle::default()
                }),
                ..InsertTextboxArgs::default()
            },
        )
        .unwrap();

        let node = session.get(&id).unwrap();
        assert!((node.frame.height.inches() - 1.0).abs() < 1e-9);
        assert_eq!(node.body.as_ref().unwrap().paragraphs.len(), 2);
        assert_eq!(node.body.as_ref().unwrap().text(), "A\nB");
    }

    #[test]
    fn test_insert_textbox_grows_to_estimate() {
        let mut session = empty_session();
        let long_text = "x".repeat(400);
        let id = insert_textbox(
            &mut session,
            InsertTextboxArgs {
                width: 3.0,
                height: 0.5,
                text: long_text,
                ..InsertTextboxArgs::default()
            },
        )
        .unwrap();

        let node = session.get(&id).unwrap();
        assert!(node.frame.height.inches() > 0.5);
    }

    #[test]
    fn test_inserted_ids_are_unique_and_increasing() {
        let mut session = empty_session();
        let mut previous: u64 = 0;
        for _ in 0..5 {
            let id = insert_textbox(&mut session, InsertTextboxArgs::default()).unwrap();
            let numeric: u64 = id.parse().unwrap();
            assert!(numeric > previous);
            previous = numeric;
        }
    }

    #[test]
    fn test_replace_overwrites_height() {
        let (mut session, id) = text_session(&[("old", RunProps::default())]);

        set_text_content(
            &mut session,
            &id,
            "one line",
            Some(ContentStyle {
                font_size: 20.0,
                ..ContentStyle::default()
            }),
        )
        .unwrap();

        let node = session.get(&id).unwrap();
        // 1 line × 20pt × 1.2 / 72 + 0.2 ≈ 0.533in, replacing the 1in frame.
        assert!((node.frame.height.inches() - 0.5333).abs() < 0.01);
        assert_eq!(node.body.as_ref().unwrap().text(), "one line");
    }

    #[test]
    fn test_replace_applies_uniform_style() {
        let (mut session, id) = text_session(&[("old", RunProps::default())]);

        set_text_content(
            &mut session,
            &id,
            "styled",
            Some(ContentStyle {
                font_size: 30.0,
                color: "#112233".to_string(),
                ..ContentStyle::default()
            }),
        )
        .unwrap();

        let node = session.get(&id).unwrap();
        let run = &node.body.as_ref().unwrap().paragraphs[0].runs[0];
        assert_eq!(run.props.size_pt, Some(30.0));
    }

    #[test]
    fn test_bold_markup_round_trip() {
        let (mut session, id) = text_session(&[("old", RunProps::default())]);

        set_text_content(&mut session, &id, "plain **loud** tail", None).unwrap();

        let node = session.get(&id).unwrap();
        let runs = &node.body.as_ref().unwrap().paragraphs[0].runs;
        let texts: Vec<&str> = runs.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, vec!["plain ", "loud", " tail"]);
        assert_eq!(runs[1].props.bold, Some(true));
    }

    #[test]
    fn test_bullet_lines_get_levels() {
        let (mut session, id) = text_session(&[("old", RunProps::default())]);

        set_text_content(&mut session, &id, "Title\\n• first\\n◦ nested", None).unwrap();

        let node = session.get(&id).unwrap();
        let paragraphs = &node.body.as_ref().unwrap().paragraphs;
        assert_eq!(paragraphs[0].level, None);
        assert_eq!(paragraphs[1].level, Some(0));
        assert_eq!(paragraphs[2].level, Some(1));
    }

    #[test]
    fn test_append_uses_trailing_paragraph_style() {
        let base = RunProps {
            size_pt: Some(18.0),
            name: Some("Georgia".to_string()),
            ..RunProps::default()
        };
        let (mut session, id) = text_session(&[("existing", base)]);

        append_text(&mut session, &id, "more text").unwrap();

        let node = session.get(&id).unwrap();
        let paragraphs = &node.body.as_ref().unwrap().paragraphs;
        assert_eq!(paragraphs.len(), 2);
        assert_eq!(paragraphs[1].defaults.size_pt, Some(18.0));
        assert_eq!(paragraphs[1].defaults.name.as_deref(), Some("Georgia"));
        assert_eq!(node.body.as_ref().unwrap().text(), "existing\nmore text");
    }

    #[test]
    fn test_append_estimates_over_full_text() {
        let base = RunProps {
            size_pt: Some(20.0),
            ..RunProps::default()
        };
        let (mut session, id) = text_session(&[("first", base)]);

        append_text(&mut session, &id, "second").unwrap();

        let node = session.get(&id).unwrap();
        // Two single-wrap lines at 20pt: 2 × 20 × 1.2 / 72 + 0.2 ≈ 0.867in.
        assert!((node.frame.height.inches() - 0.8667).abs() < 0.01);
    }

    #[test]
    fn test_delete_removes_element_and_handle() {
        let (mut session, id) = text_session(&[("x", RunProps::default())]);

        delete_element(&mut session, &id).unwrap();
        assert!(session.get(&id).is_err());
        assert_eq!(session.document().nodes().len(), 0);
    }

    #[test]
    fn test_clone_gets_fresh_id_and_position() {
        let (mut session, id) = text_session(&[("x", RunProps::default())]);

        let clone_id = clone_element(&mut session, &id, 5.0, 6.0, None).unwrap();
        assert_ne!(clone_id, id);

        let clone = session.get(&clone_id).unwrap();
        assert_eq!(clone.frame.left, Emu::from_inches(5.0));
        assert_eq!(clone.frame.top, Emu::from_inches(6.0));
        assert_eq!(clone.body.as_ref().unwrap().text(), "x");
        // Source untouched.
        assert_eq!(
            session.get(&id).unwrap().frame.left,
            Emu::from_inches(1.0)
        );
    }

    #[test]
    fn test_add_bullets_skips_already_bulleted() {
        let (mut session, id) = text_session(&[("plain", RunProps::default())]);
        set_text_content(&mut session, &id, "alpha\\n• beta", None).unwrap();

        let message = add_bullets(&mut session, &id, 0).unwrap();
        assert!(message.contains("1 paragraphs"), "message: {message}");

        let node = session.get(&id).unwrap();
        let body = node.body.as_ref().unwrap();
        assert_eq!(body.paragraphs[0].text(), "• alpha");
        assert_eq!(body.paragraphs[1].text(), "• beta");
    }
}
