use crate::id_allocator::IdAllocator;
use crate::style::resolve_run_style;
use posterkit_dom::{Document, NodeKind, ShapeNode, Theme};
use posterkit_model::{Element, ElementKind, Poster, Run};

/// Normalize the live document into a canonical snapshot.
///
/// Side effect: any node lacking an element id is assigned one — the
/// native `sp_id` when the engine exposes one, else the allocator's
/// next value — and the assignment is written back onto the node so
/// later operations can address it. The allocator also observes every
/// id so freshly allocated ids always exceed the ones already present.
pub fn normalize(doc: &mut Document, ids: &mut IdAllocator) -> Poster {
    let theme = doc.theme.clone();

    for node in doc.nodes_mut() {
        if node.name.is_none() {
            let assigned = if node.sp_id > 0 {
                node.sp_id.to_string()
            } else {
                ids.allocate()
            };
            node.name = Some(assigned);
        }
    }
    for node in doc.nodes() {
        if let Some(name) = node.name.as_deref() {
            ids.observe(name);
        }
    }

    let elements = doc
        .nodes()
        .iter()
        .map(|node| element_from(node, &theme))
        .collect();

    Poster {
        canvas_width: round2(doc.width.inches()),
        canvas_height: round2(doc.height.inches()),
        elements,
    }
}

fn element_from(node: &ShapeNode, theme: &Theme) -> Element {
    let id = node.name.clone().unwrap_or_default();
    let kind = classify(&node.kind);

    let mut elem = Element::new(id, kind);
    elem.left = round2(node.frame.left.inches());
    elem.top = round2(node.frame.top.inches());
    elem.width = round2(node.frame.width.inches());
    elem.height = round2(node.frame.height.inches());

    if matches!(kind, ElementKind::TextBox | ElementKind::Shape) {
        if let Some(body) = &node.body {
            elem.text = Some(body.text());
            for para in &body.paragraphs {
                for run in &para.runs {
                    let style = resolve_run_style(run, para);
                    if elem.main_font_size.is_none() {
                        elem.main_font_size = style.size_pt;
                    }
                    elem.runs.push(Run {
                        text: run.text.clone(),
                        bold: style.bold,
                        italic: style.italic,
                        underline: style.underline,
                        font_name: style.name,
                        font_size: style.size_pt,
                        font_color: style
                            .color
                            .and_then(|c| theme.resolve(&c))
                            .map(|rgb| rgb.hex()),
                        list_level: para.level,
                    });
                }
            }
        }
    }

    if let Some(fill) = &node.fill {
        elem.fill_color = theme.resolve(&fill.color).map(|rgb| rgb.hex());
    }
    if let Some(stroke) = &node.line {
        elem.border_color = stroke
            .color
            .as_ref()
            .and_then(|c| theme.resolve(c))
            .map(|rgb| rgb.hex());
        elem.border_width = stroke.width.map(|w| round2(w.inches()));
        elem.border_dash = stroke.dash.map(|d| d.name().to_string());
    }

    if let NodeKind::Picture { source } = &node.kind {
        elem.image_path = Some(source.to_string_lossy().into_owned());
    }

    elem
}

fn classify(kind: &NodeKind) -> ElementKind {
    match kind {
        NodeKind::TextBox => ElementKind::TextBox,
        NodeKind::Picture { .. } => ElementKind::Picture,
        NodeKind::AutoShape { .. } => ElementKind::Shape,
        NodeKind::Connector => ElementKind::Line,
        NodeKind::Table => ElementKind::Table,
        NodeKind::Chart => ElementKind::Chart,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
