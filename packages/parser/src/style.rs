use posterkit_dom::{Color, Paragraph, RunNode};

/// Fully-resolved character style for one run.
///
/// Produced by the two-level cascade: a run-local value wins, else the
/// owning paragraph's default run properties apply, else the field
/// stays unset. Nothing falls back further.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedStyle {
    pub size_pt: Option<f64>,
    pub bold: Option<bool>,
    pub italic: Option<bool>,
    pub underline: Option<bool>,
    pub name: Option<String>,
    pub color: Option<Color>,
}

/// Resolve a run's effective style against its paragraph.
pub fn resolve_run_style(run: &RunNode, paragraph: &Paragraph) -> ResolvedStyle {
    let local = &run.props;
    let defaults = &paragraph.defaults;

    ResolvedStyle {
        size_pt: local.size_pt.or(defaults.size_pt),
        bold: local.bold.or(defaults.bold),
        italic: local.italic.or(defaults.italic),
        underline: local.underline.or(defaults.underline),
        name: local.name.clone().or_else(|| defaults.name.clone()),
        color: local.color.or(defaults.color),
    }
}
