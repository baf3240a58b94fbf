//! Closed dispatch table: operation name → typed argument extraction →
//! library function. Unknown operation names and unknown or mistyped
//! arguments are rejected here, before any mutation runs.

use crate::args::Args;
use crate::error::CommandError;
use crate::parser::Invocation;
use posterkit_editor::ops::content::{ContentStyle, InsertTextboxArgs};
use posterkit_editor::ops::shape::InsertShapeArgs;
use posterkit_editor::ops::text::TextStyle;
use posterkit_editor::ops::{content, geometry, image, layout, shape, text};
use posterkit_editor::Session;

fn content_style(args: &mut Args) -> Result<ContentStyle, CommandError> {
    Ok(ContentStyle {
        font_size: args.f64_or("font_size", 44.0)?,
        font_name: args.str_or("font_name", "Arial")?,
        color: args.str_or("color", "black")?,
        bold: args.bool_or("bold", false)?,
        italic: args.bool_or("italic", false)?,
        underline: args.bool_or("underline", false)?,
    })
}

/// Execute one parsed invocation against the session.
pub fn dispatch(session: &mut Session, invocation: Invocation) -> Result<String, CommandError> {
    let mut args = Args::new(invocation);
    let op = args.op().to_string();

    let result = match op.as_str() {
        // --- text style ---
        "set_text_font_size" => {
            let id = args.req_str("element_id")?;
            let size = args.req_f64("font_size")?;
            args.finish()?;
            text::set_font_size(session, &id, size)?
        }
        "set_text_color" => {
            let id = args.req_str("element_id")?;
            let color = args.req_str("color")?;
            args.finish()?;
            text::set_text_color(session, &id, &color)?
        }
        "set_text_bold" => {
            let id = args.req_str("element_id")?;
            let bold = args.bool_or("bold", true)?;
            args.finish()?;
            text::set_bold(session, &id, bold)?
        }
        "set_text_italic" => {
            let id = args.req_str("element_id")?;
            let italic = args.bool_or("italic", true)?;
            args.finish()?;
            text::set_italic(session, &id, italic)?
        }
        "set_text_underline" => {
            let id = args.req_str("element_id")?;
            let underline = args.bool_or("underline", true)?;
            args.finish()?;
            text::set_underline(session, &id, underline)?
        }
        "set_font_name" => {
            let id = args.req_str("element_id")?;
            let name = args.req_str("font_name")?;
            args.finish()?;
            text::set_font_name(session, &id, &name)?
        }
        "text_format_brush" => {
            let id = args.req_str("element_id")?;
            let style = TextStyle {
                font_size: args.opt_f64("font_size")?,
                color: args.opt_str("color")?,
                bold: args.opt_bool("bold")?,
                italic: args.opt_bool("italic")?,
                underline: args.opt_bool("underline")?,
                font_name: args.opt_str("font_name")?,
            };
            let words = args.opt_list("words")?;
            args.finish()?;
            text::format_text(session, &id, &style, words.as_deref())?
        }
        "highlight_keywords" => {
            let id = args.req_str("element_id")?;
            let keywords = args.req_list("keywords")?;
            let style = TextStyle {
                color: Some(args.str_or("color", "black")?),
                bold: Some(args.bool_or("bold", true)?),
                ..TextStyle::default()
            };
            args.finish()?;
            text::format_substrings(session, &id, &keywords, &style)?
        }
        "batch_set_font_size" => {
            let ids = args.req_list("element_ids")?;
            let size = args.req_f64("size")?;
            args.finish()?;
            text::batch_set_font_size(session, &ids, size)?
        }
        "batch_set_color" => {
            let ids = args.req_list("element_ids")?;
            let color = args.req_str("color")?;
            args.finish()?;
            text::batch_set_color(session, &ids, &color)?
        }

        // --- geometry ---
        "set_element_position" => {
            let id = args.req_str("element_id")?;
            let left = args.opt_f64("left")?;
            let top = args.opt_f64("top")?;
            args.finish()?;
            geometry::set_position(session, &id, left, top)?
        }
        "set_element_size" => {
            let id = args.req_str("element_id")?;
            let width = args.opt_f64("width")?;
            let height = args.opt_f64("height")?;
            args.finish()?;
            geometry::set_size(session, &id, width, height)?
        }
        "move_element_relative" => {
            let id = args.req_str("element_id")?;
            let dx = args.f64_or("delta_x", 0.0)?;
            let dy = args.f64_or("delta_y", 0.0)?;
            args.finish()?;
            geometry::move_relative(session, &id, dx, dy)?
        }
        "resize_element_proportionally" => {
            let id = args.req_str("element_id")?;
            let factor = args.req_f64("scale")?;
            let fixed_center = args.bool_or("fixed_center", false)?;
            args.finish()?;
            geometry::scale(session, &id, factor, fixed_center)?
        }
        "move_group" => {
            let ids = args.req_list("element_ids")?;
            let dx = args.f64_or("dx", 0.0)?;
            let dy = args.f64_or("dy", 0.0)?;
            args.finish()?;
            geometry::move_group(session, &ids, dx, dy)?
        }

        // --- shapes ---
        "insert_shape" => {
            let params = InsertShapeArgs {
                left: args.req_f64("left")?,
                top: args.req_f64("top")?,
                width: args.req_f64("width")?,
                height: args.req_f64("height")?,
                shape_type: args.req_str("shape_type")?,
                fill_color: args.opt_str("fill_color")?,
                line_color: args.opt_str("line_color")?,
                line_width: args.f64_or("line_width", 0.0)?,
                line_dash: args.opt_str("line_dash")?,
                element_id: args.opt_str("element_id")?,
            };
            args.finish()?;
            shape::insert_shape(session, params)?
        }
        "insert_line" => {
            let start_x = args.req_f64("start_x")?;
            let start_y = args.req_f64("start_y")?;
            let end_x = args.req_f64("end_x")?;
            let end_y = args.req_f64("end_y")?;
            let color = args.str_or("color", "black")?;
            let width = args.f64_or("width", 1.0)?;
            let dash = args.str_or("dash_style", "solid")?;
            let element_id = args.opt_str("element_id")?;
            args.finish()?;
            shape::insert_line(
                session, start_x, start_y, end_x, end_y, &color, width, &dash, element_id,
            )?
        }
        "set_shape_style" => {
            let id = args.req_str("element_id")?;
            let fill = args.opt_str("fill_color")?;
            let shape_type = args.opt_str("shape_type")?;
            let line_color = args.opt_str("line_color")?;
            let line_width = args.opt_f64("line_width")?;
            let line_dash = args.opt_str("line_dash")?;
            args.finish()?;
            shape::set_shape_style(
                session,
                &id,
                fill.as_deref(),
                shape_type.as_deref(),
                line_color.as_deref(),
                line_width,
                line_dash.as_deref(),
            )?
        }
        "set_line_style" => {
            let id = args.req_str("element_id")?;
            let color = args.opt_str("color")?;
            let width = args.opt_f64("width")?;
            let dash = args.opt_str("dash_style")?;
            args.finish()?;
            shape::set_line_style(session, &id, color.as_deref(), width, dash.as_deref())?
        }

        // --- layout ---
        "align_elements_x_axis" => {
            let ids = args.req_list("element_ids")?;
            let alignment = args.str_or("alignment", "left")?;
            let reference = args.opt_str("reference_id")?;
            args.finish()?;
            layout::align_x(session, &ids, &alignment, reference.as_deref())?
        }
        "align_elements_y_axis" => {
            let ids = args.req_list("element_ids")?;
            let alignment = args.str_or("alignment", "top")?;
            let reference = args.opt_str("reference_id")?;
            args.finish()?;
            layout::align_y(session, &ids, &alignment, reference.as_deref())?
        }
        "set_text_alignment" => {
            let id = args.req_str("element_id")?;
            let alignment = args.str_or("alignment", "left")?;
            args.finish()?;
            layout::set_text_alignment(session, &id, &alignment)?
        }
        "send_to_back_by_id" => {
            let id = args.req_str("element_id")?;
            args.finish()?;
            layout::send_to_back(session, &id)?
        }

        // --- content ---
        "set_text_content" => {
            let id = args.req_str("element_id")?;
            let body = args.req_str("text")?;
            let style = content_style(&mut args)?;
            args.finish()?;
            content::set_text_content(session, &id, &body, Some(style))?
        }
        "append_text" => {
            let id = args.req_str("element_id")?;
            let body = args.req_str("text")?;
            args.finish()?;
            content::append_text(session, &id, &body)?
        }
        "add_bullet_point" => {
            let id = args.req_str("element_id")?;
            let level = args.f64_or("level", 0.0)? as u8;
            args.finish()?;
            content::add_bullets(session, &id, level)?
        }
        "insert_textbox" => {
            let params = InsertTextboxArgs {
                left: args.req_f64("left")?,
                top: args.req_f64("top")?,
                width: args.req_f64("width")?,
                height: args.req_f64("height")?,
                text: args.str_or("text", "")?,
                style: Some(content_style(&mut args)?),
                element_id: args.opt_str("element_id")?,
            };
            args.finish()?;
            content::insert_textbox(session, params)?
        }
        "delete_element" => {
            let id = args.req_str("element_id")?;
            args.finish()?;
            content::delete_element(session, &id)?
        }
        "batch_delete_elements" => {
            let ids = args.req_list("element_ids")?;
            args.finish()?;
            content::delete_elements(session, &ids)?
        }
        "clone_element" => {
            let source = args.req_str("source_id")?;
            let left = args.req_f64("new_left")?;
            let top = args.req_f64("new_top")?;
            let new_id = args.opt_str("new_id")?;
            args.finish()?;
            content::clone_element(session, &source, left, top, new_id)?
        }

        // --- images ---
        "insert_image" => {
            let path = args.req_str("image_path")?;
            let left = args.req_f64("left")?;
            let top = args.req_f64("top")?;
            let width = args.opt_f64("width")?;
            let height = args.opt_f64("height")?;
            let element_id = args.opt_str("element_id")?;
            args.finish()?;
            image::insert_image(session, &path, left, top, width, height, element_id)?
        }
        "replace_image" => {
            let id = args.req_str("element_id")?;
            let path = args.opt_str("new_image_path")?;
            let other = args.opt_str("new_image_element_id")?;
            args.finish()?;
            image::replace_image(session, &id, path.as_deref(), other.as_deref())?
        }

        unknown => return Err(CommandError::UnknownOperation(unknown.to_string())),
    };

    Ok(result)
}
