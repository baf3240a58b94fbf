//! Text style operations: uniform restyling of an element's runs, and
//! keyword-scoped restyling that splits runs around match spans.

use crate::errors::EditResult;
use crate::session::Session;
use posterkit_dom::{parse_color, Color, Rgb, RunNode, RunProps};

/// Style overrides for the format brush. Omitted fields leave the
/// existing formatting untouched.
#[derive(Debug, Clone, Default)]
pub struct TextStyle {
    pub font_size: Option<f64>,
    pub color: Option<String>,
    pub bold: Option<bool>,
    pub italic: Option<bool>,
    pub underline: Option<bool>,
    pub font_name: Option<String>,
}

fn for_each_run(
    session: &mut Session,
    id: &str,
    apply: impl Fn(&mut RunProps),
) -> EditResult<()> {
    let node = session.get_mut(id)?;
    let body = super::text_body_mut(node, id)?;
    for para in &mut body.paragraphs {
        for run in &mut para.runs {
            apply(&mut run.props);
        }
    }
    Ok(())
}

pub fn set_font_size(session: &mut Session, id: &str, font_size: f64) -> EditResult {
    for_each_run(session, id, |props| props.size_pt = Some(font_size))?;
    Ok(format!("Set font size to {font_size}pt for element {id}"))
}

pub fn set_text_color(session: &mut Session, id: &str, color: &str) -> EditResult {
    let rgb = parse_color(color);
    for_each_run(session, id, move |props| props.color = Some(Color::Rgb(rgb)))?;
    Ok(format!("Set text color to {color} for element {id}"))
}

pub fn set_bold(session: &mut Session, id: &str, bold: bool) -> EditResult {
    for_each_run(session, id, move |props| props.bold = Some(bold))?;
    Ok(format!("Set bold={bold} for element {id}"))
}

pub fn set_italic(session: &mut Session, id: &str, italic: bool) -> EditResult {
    for_each_run(session, id, move |props| props.italic = Some(italic))?;
    Ok(format!("Set italic={italic} for element {id}"))
}

pub fn set_underline(session: &mut Session, id: &str, underline: bool) -> EditResult {
    for_each_run(session, id, move |props| props.underline = Some(underline))?;
    Ok(format!("Set underline={underline} for element {id}"))
}

pub fn set_font_name(session: &mut Session, id: &str, font_name: &str) -> EditResult {
    for_each_run(session, id, |props| props.name = Some(font_name.to_string()))?;
    Ok(format!("Set font family to {font_name} for element {id}"))
}

/// Apply any subset of style overrides to an element.
///
/// With `words` given, only case-insensitive keyword matches are
/// restyled; otherwise the overrides apply to every run.
pub fn format_text(
    session: &mut Session,
    id: &str,
    style: &TextStyle,
    words: Option<&[String]>,
) -> EditResult {
    if let Some(words) = words {
        return format_substrings(session, id, words, style);
    }

    if let Some(size) = style.font_size {
        set_font_size(session, id, size)?;
    }
    if let Some(color) = style.color.as_deref() {
        set_text_color(session, id, color)?;
    }
    if style.bold == Some(true) {
        set_bold(session, id, true)?;
    }
    if style.italic == Some(true) {
        set_italic(session, id, true)?;
    }
    if style.underline == Some(true) {
        set_underline(session, id, true)?;
    }
    if let Some(name) = style.font_name.as_deref() {
        set_font_name(session, id, name)?;
    }
    Ok(format!("Formatted element {id}"))
}

/// Restyle keyword occurrences only.
///
/// Each run is split into before/match/after segments; every segment
/// copies the source run's properties, and the overrides are overlaid
/// on match segments alone. Concatenating the segment texts always
/// reproduces the original run text.
pub fn format_substrings(
    session: &mut Session,
    id: &str,
    keywords: &[String],
    style: &TextStyle,
) -> EditResult {
    let override_color = style.color.as_deref().map(parse_color);
    let node = session.get_mut(id)?;
    let body = super::text_body_mut(node, id)?;

    let mut count = 0usize;
    for para in &mut body.paragraphs {
        let mut segments: Vec<RunNode> = Vec::new();
        for run in &para.runs {
            if run.text.is_empty() {
                continue;
            }

            let spans = merged_match_spans(&run.text, keywords);
            if spans.is_empty() {
                segments.push(run.clone());
                continue;
            }

            let chars: Vec<char> = run.text.chars().collect();
            let mut cursor = 0usize;
            for (start, end) in spans {
                if start > cursor {
                    segments.push(RunNode {
                        text: chars[cursor..start].iter().collect(),
                        props: run.props.clone(),
                    });
                }
                let mut hit = RunNode {
                    text: chars[start..end].iter().collect(),
                    props: run.props.clone(),
                };
                overlay(&mut hit.props, style, override_color);
                segments.push(hit);
                count += 1;
                cursor = end;
            }
            if cursor < chars.len() {
                segments.push(RunNode {
                    text: chars[cursor..].iter().collect(),
                    props: run.props.clone(),
                });
            }
        }
        para.runs = segments;
    }

    Ok(format!(
        "Formatted {count} occurrences of keywords in element {id}"
    ))
}

pub fn batch_set_font_size(session: &mut Session, ids: &[String], size: f64) -> EditResult {
    for id in ids {
        set_font_size(session, id, size)?;
    }
    Ok(format!("Batch set font size for {} elements", ids.len()))
}

pub fn batch_set_color(session: &mut Session, ids: &[String], color: &str) -> EditResult {
    for id in ids {
        set_text_color(session, id, color)?;
    }
    Ok(format!("Batch set color for {} elements", ids.len()))
}

fn overlay(props: &mut RunProps, style: &TextStyle, color: Option<Rgb>) {
    if let Some(size) = style.font_size {
        props.size_pt = Some(size);
    }
    if let Some(name) = &style.font_name {
        props.name = Some(name.clone());
    }
    if let Some(bold) = style.bold {
        props.bold = Some(bold);
    }
    if let Some(italic) = style.italic {
        props.italic = Some(italic);
    }
    if let Some(underline) = style.underline {
        props.underline = Some(underline);
    }
    if let Some(rgb) = color {
        props.color = Some(Color::Rgb(rgb));
    }
}

/// Case-insensitive match spans over the run text, in char indices,
/// with overlapping spans merged.
fn merged_match_spans(text: &str, keywords: &[String]) -> Vec<(usize, usize)> {
    let haystack: Vec<char> = text.chars().map(fold_char).collect();

    let mut matches: Vec<(usize, usize)> = Vec::new();
    for keyword in keywords {
        if keyword.is_empty() {
            continue;
        }
        let needle: Vec<char> = keyword.chars().map(fold_char).collect();
        if needle.is_empty() || needle.len() > haystack.len() {
            continue;
        }
        let mut start = 0usize;
        while start + needle.len() <= haystack.len() {
            if haystack[start..start + needle.len()] == needle[..] {
                matches.push((start, start + needle.len()));
                start += needle.len();
            } else {
                start += 1;
            }
        }
    }

    matches.sort_unstable();
    let mut merged: Vec<(usize, usize)> = Vec::new();
    for (start, end) in matches {
        match merged.last_mut() {
            Some((_, last_end)) if start < *last_end => {
                *last_end = (*last_end).max(end);
            }
            _ => merged.push((start, end)),
        }
    }
    merged
}

/// One-to-one case folding keeps char indices aligned between the
/// haystack and the original text.
fn fold_char(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::testutil::text_session;

    #[test]
    fn test_uniform_styling_touches_every_run() {
        let (mut session, id) = text_session(&[
            ("Hello ", RunProps::default()),
            ("world", RunProps::default()),
        ]);

        set_font_size(&mut session, &id, 28.0).unwrap();
        set_bold(&mut session, &id, true).unwrap();

        let node = session.get(&id).unwrap();
        for para in &node.body.as_ref().unwrap().paragraphs {
            for run in &para.runs {
                assert_eq!(run.props.size_pt, Some(28.0));
                assert_eq!(run.props.bold, Some(true));
            }
        }
    }

    #[test]
    fn test_substring_formatting_round_trip() {
        let (mut session, id) =
            text_session(&[("The Result is clear", RunProps::default())]);

        let style = TextStyle {
            bold: Some(true),
            ..TextStyle::default()
        };
        format_substrings(&mut session, &id, &["Result".to_string()], &style).unwrap();

        let node = session.get(&id).unwrap();
        let runs = &node.body.as_ref().unwrap().paragraphs[0].runs;
        let texts: Vec<&str> = runs.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, vec!["The ", "Result", " is clear"]);
        assert_eq!(runs[0].props.bold, None);
        assert_eq!(runs[1].props.bold, Some(true));
        assert_eq!(runs[2].props.bold, None);

        let joined: String = texts.concat();
        assert_eq!(joined, "The Result is clear");
    }

    #[test]
    fn test_substring_match_is_case_insensitive() {
        let (mut session, id) = text_session(&[("results and RESULTS", RunProps::default())]);

        let style = TextStyle {
            color: Some("#ff0000".to_string()),
            ..TextStyle::default()
        };
        let message =
            format_substrings(&mut session, &id, &["results".to_string()], &style).unwrap();
        assert!(message.contains("2 occurrences"), "message: {message}");

        let node = session.get(&id).unwrap();
        let joined = node.body.as_ref().unwrap().paragraphs[0].text();
        assert_eq!(joined, "results and RESULTS");
    }

    #[test]
    fn test_overlapping_keywords_merge() {
        let (mut session, id) = text_session(&[("abcde", RunProps::default())]);

        let style = TextStyle {
            bold: Some(true),
            ..TextStyle::default()
        };
        format_substrings(
            &mut session,
            &id,
            &["abc".to_string(), "cde".to_string()],
            &style,
        )
        .unwrap();

        let node = session.get(&id).unwrap();
        let runs = &node.body.as_ref().unwrap().paragraphs[0].runs;
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].text, "abcde");
        assert_eq!(runs[0].props.bold, Some(true));
    }

    #[test]
    fn test_segments_copy_source_style() {
        let base = RunProps {
            size_pt: Some(18.0),
            name: Some("Arial".to_string()),
            ..RunProps::default()
        };
        let (mut session, id) = text_session(&[("alpha beta", base)]);

        let style = TextStyle {
            bold: Some(true),
            ..TextStyle::default()
        };
        format_substrings(&mut session, &id, &["beta".to_string()], &style).unwrap();

        let node = session.get(&id).unwrap();
        let runs = &node.body.as_ref().unwrap().paragraphs[0].runs;
        assert_eq!(runs.len(), 2);
        for run in runs {
            assert_eq!(run.props.size_pt, Some(18.0));
            assert_eq!(run.props.name.as_deref(), Some("Arial"));
        }
    }

    #[test]
    fn test_brush_on_picture_is_kind_mismatch() {
        use crate::errors::EditError;
        use posterkit_dom::{Frame, NodeKind, ShapeNode};

        let mut session = crate::ops::testutil::empty_session();
        let picture = ShapeNode::new(
            NodeKind::Picture {
                source: "fig.png".into(),
            },
            Frame::from_inches(0.0, 0.0, 2.0, 2.0),
        );
        let id = session.register_node(picture, None).unwrap();

        let err = set_font_size(&mut session, &id, 20.0).unwrap_err();
        assert!(matches!(err, EditError::KindMismatch { .. }));
    }
}
