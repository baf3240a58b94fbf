//! Wrapped-text height estimation.
//!
//! A heuristic, not a shaping engine: lines are estimated from an
//! average character width, so the result is only as good as the
//! constants. They are empirically tuned for one assumed font and kept
//! configurable rather than treated as ground truth.

/// Estimator configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextMetrics {
    /// Average glyph advance as a fraction of the font size.
    pub avg_char_width_factor: f64,
    /// Line pitch as a multiple of the font size.
    pub line_height_factor: f64,
    /// Horizontal inset subtracted from the box width, in points.
    pub horizontal_inset_pt: f64,
    /// Vertical padding added to the estimate, in inches.
    pub vertical_pad_in: f64,
}

impl Default for TextMetrics {
    fn default() -> Self {
        Self {
            avg_char_width_factor: 0.55,
            line_height_factor: 1.2,
            horizontal_inset_pt: 7.2,
            vertical_pad_in: 0.2,
        }
    }
}

impl TextMetrics {
    /// Estimated wrapped line count for `text` laid out in a box
    /// `width_in` inches wide at `font_pt` points.
    ///
    /// Paragraphs are the explicit-newline splits of `text`; an empty
    /// paragraph still occupies one line.
    pub fn wrapped_lines(&self, width_in: f64, font_pt: f64, text: &str) -> usize {
        let mut safe_width_pt = width_in * 72.0 - self.horizontal_inset_pt;
        if safe_width_pt < 10.0 {
            safe_width_pt = 10.0;
        }

        let mut chars_per_line = safe_width_pt / (font_pt * self.avg_char_width_factor);
        if chars_per_line < 1.0 {
            chars_per_line = 1.0;
        }

        text.split('\n')
            .map(|paragraph| {
                let chars = paragraph.chars().count();
                if chars == 0 {
                    1
                } else {
                    (chars as f64 / chars_per_line).ceil() as usize
                }
            })
            .sum()
    }

    /// Estimated box height in inches.
    pub fn estimate_height_in(&self, width_in: f64, font_pt: f64, text: &str) -> f64 {
        let lines = self.wrapped_lines(width_in, font_pt, text) as f64;
        lines * font_pt * self.line_height_factor / 72.0 + self.vertical_pad_in
    }
}
