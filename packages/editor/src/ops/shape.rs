//! Shape and line insertion, plus style patching of existing nodes.

use crate::errors::{EditError, EditResult};
use crate::session::Session;
use posterkit_dom::{
    parse_color, Color, DashStyle, Emu, Frame, NodeKind, Paint, Preset, ShapeNode, Stroke,
};

#[derive(Debug, Clone, Default)]
pub struct InsertShapeArgs {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    pub shape_type: String,
    pub fill_color: Option<String>,
    pub line_color: Option<String>,
    pub line_width: f64,
    pub line_dash: Option<String>,
    pub element_id: Option<String>,
}

/// Insert a new auto shape. No fill color means a transparent shape;
/// no line color means no outline.
pub fn insert_shape(session: &mut Session, args: InsertShapeArgs) -> EditResult {
    let preset = Preset::from_name(&args.shape_type).ok_or_else(|| {
        EditError::Argument(format!("unknown shape type '{}'", args.shape_type))
    })?;

    let mut node = ShapeNode::new(
        NodeKind::AutoShape { preset },
        Frame::from_inches(args.left, args.top, args.width, args.height),
    );

    if let Some(fill) = args.fill_color.as_deref() {
        node.fill = Some(Paint {
            color: Color::Rgb(parse_color(fill)),
        });
    }
    if let Some(line) = args.line_color.as_deref() {
        let mut stroke = Stroke {
            color: Some(Color::Rgb(parse_color(line))),
            ..Stroke::default()
        };
        if args.line_width > 0.0 {
            stroke.width = Some(Emu::from_points(args.line_width));
        }
        if let Some(dash) = args.line_dash.as_deref() {
            stroke.dash = Some(DashStyle::from_name(dash));
        }
        node.line = Some(stroke);
    }

    session.register_node(node, args.element_id)
}

/// Insert a straight connector between two points.
pub fn insert_line(
    session: &mut Session,
    start_x: f64,
    start_y: f64,
    end_x: f64,
    end_y: f64,
    color: &str,
    width_pt: f64,
    dash_style: &str,
    element_id: Option<String>,
) -> EditResult {
    let left = start_x.min(end_x);
    let top = start_y.min(end_y);
    let mut node = ShapeNode::new(
        NodeKind::Connector,
        Frame::from_inches(left, top, (end_x - start_x).abs(), (end_y - start_y).abs()),
    );
    node.line = Some(Stroke {
        color: Some(Color::Rgb(parse_color(color))),
        width: Some(Emu::from_points(width_pt)),
        dash: Some(DashStyle::from_name(dash_style)),
    });

    session.register_node(node, element_id)
}

/// Patch an existing shape's style. Omitted arguments leave prior
/// values unchanged; `shape_type = "rounded_rectangle"` converts a
/// rectangular preset in place.
pub fn set_shape_style(
    session: &mut Session,
    id: &str,
    fill_color: Option<&str>,
    shape_type: Option<&str>,
    line_color: Option<&str>,
    line_width: Option<f64>,
    line_dash: Option<&str>,
) -> EditResult {
    let node = session.get_mut(id)?;

    if let Some(fill) = fill_color {
        node.fill = Some(Paint {
            color: Color::Rgb(parse_color(fill)),
        });
    }

    if shape_type == Some("rounded_rectangle") {
        if let NodeKind::AutoShape { preset } = &mut node.kind {
            if *preset == Preset::Rectangle {
                *preset = Preset::RoundedRectangle;
            }
        }
    }

    if line_color.is_some() || line_width.is_some() || line_dash.is_some() {
        set_line_style(session, id, line_color, line_width, line_dash)?;
    }

    Ok(format!("Set style for element {id}"))
}

/// Patch the outline of a line or shape border.
pub fn set_line_style(
    session: &mut Session,
    id: &str,
    color: Option<&str>,
    width_pt: Option<f64>,
    dash_style: Option<&str>,
) -> EditResult {
    let node = session.get_mut(id)?;
    let stroke = node.line.get_or_insert_with(Stroke::default);

    if let Some(color) = color {
        stroke.color = Some(Color::Rgb(parse_color(color)));
    }
    if let Some(width) = width_pt {
        stroke.width = Some(Emu::from_points(width));
    }
    if let Some(dash) = dash_style {
        stroke.dash = Some(DashStyle::from_name(dash));
    }

    Ok(format!("Updated line style for {id}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::testutil::empty_session;
    use posterkit_dom::Rgb;

    #[test]
    fn test_insert_shape_with_fill_and_border() {
        let mut session = empty_session();
        let id = insert_shape(
            &mut session,
            InsertShapeArgs {
                left: 0.5,
                top: 4.5,
                width: 9.0,
                height: 2.5,
                shape_type: "rectangle".to_string(),
                fill_color: Some("#FFD700".to_string()),
                line_color: Some("black".to_string()),
                line_width: 1.0,
                ..InsertShapeArgs::default()
            },
        )
        .unwrap();

        let node = session.get(&id).unwrap();
        assert!(matches!(
            node.kind,
            NodeKind::AutoShape {
                preset: Preset::Rectangle
            }
        ));
        assert_eq!(
            node.fill.as_ref().unwrap().color,
            Color::Rgb(Rgb(255, 215, 0))
        );
        let stroke = node.line.as_ref().unwrap();
        assert_eq!(stroke.width, Some(Emu::from_points(1.0)));
    }

    #[test]
    fn test_insert_shape_unknown_preset_rejected() {
        let mut session = empty_session();
        let err = insert_shape(
            &mut session,
            InsertShapeArgs {
                shape_type: "blob".to_string(),
                ..InsertShapeArgs::default()
            },
        )
        .unwrap_err();
        assert!(matches!(err, EditError::Argument(_)));
    }

    #[test]
    fn test_no_fill_means_transparent() {
        let mut session = empty_session();
        let id = insert_shape(
            &mut session,
            InsertShapeArgs {
                width: 1.0,
                height: 1.0,
                shape_type: "oval".to_string(),
                ..InsertShapeArgs::default()
            },
        )
        .unwrap();

        let node = session.get(&id).unwrap();
        assert!(node.fill.is_none());
        assert!(node.line.is_none());
    }

    #[test]
    fn test_style_patch_keeps_omitted_fields() {
        let mut session = empty_session();
        let id = insert_shape(
            &mut session,
            InsertShapeArgs {
                width: 2.0,
                height: 1.0,
                shape_type: "rectangle".to_string(),
                fill_color: Some("red".to_string()),
                line_color: Some("blue".to_string()),
                line_width: 2.0,
                ..InsertShapeArgs::default()
            },
        )
        .unwrap();

        set_shape_style(&mut session, &id, None, None, None, Some(4.0), None).unwrap();

        let node = session.get(&id).unwrap();
        assert_eq!(
            node.fill.as_ref().unwrap().color,
            Color::Rgb(Rgb(255, 0, 0)),
            "fill untouched"
        );
        let stroke = node.line.as_ref().unwrap();
        assert_eq!(stroke.color, Some(Color::Rgb(Rgb(0, 0, 255))), "color untouched");
        assert_eq!(stroke.width, Some(Emu::from_points(4.0)));
    }

    #[test]
    fn test_rounded_rectangle_conversion() {
        let mut session = empty_session();
        let id = insert_shape(
            &mut session,
            InsertShapeArgs {
                width: 2.0,
                height: 1.0,
                shape_type: "rectangle".to_string(),
                ..InsertShapeArgs::default()
            },
        )
        .unwrap();

        set_shape_style(
            &mut session,
            &id,
            None,
            Some("rounded_rectangle"),
            None,
            None,
            None,
        )
        .unwrap();

        let node = session.get(&id).unwrap();
        assert!(matches!(
            node.kind,
            NodeKind::AutoShape {
                preset: Preset::RoundedRectangle
            }
        ));
    }

    #[test]
    fn test_insert_line_geometry() {
        let mut session = empty_session();
        let id = insert_line(&mut session, 4.0, 1.0, 1.0, 3.0, "black", 1.5, "dash", None)
            .unwrap();

        let node = session.get(&id).unwrap();
        assert!(matches!(node.kind, NodeKind::Connector));
        assert_eq!(node.frame.left, Emu::from_inches(1.0));
        assert_eq!(node.frame.top, Emu::from_inches(1.0));
        assert_eq!(node.frame.width, Emu::from_inches(3.0));
        assert_eq!(node.frame.height, Emu::from_inches(2.0));
        assert_eq!(node.line.as_ref().unwrap().dash, Some(DashStyle::Dash));
    }
}
