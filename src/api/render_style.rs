use serde::{Deserialize, Serialize};

use crate::render::Color;

const SLATE_300: Color = Color::rgb(0.796, 0.835, 0.882);
const SLATE_400: Color = Color::rgb(0.580, 0.639, 0.722);
const SLATE_900: Color = Color::rgb(0.059, 0.090, 0.165);
const ACCENT: Color = Color::rgb(0.220, 0.741, 0.973);
const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);

/// Colors, stroke widths and font sizes of every chart element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderStyle {
    pub grid_line_color: Color,
    pub grid_line_width: f64,
    pub axis_label_color: Color,
    pub axis_label_font_size_px: f64,
    pub area_fill_color: Color,
    pub line_color: Color,
    pub line_width: f64,
    pub marker_fill_color: Color,
    pub marker_stroke_color: Color,
    pub marker_stroke_width: f64,
    pub marker_radius_px: f64,
    pub focus_line_color: Color,
    pub focus_line_width: f64,
    pub focus_dot_color: Color,
    pub focus_dot_radius_px: f64,
    pub selection_fill_color: Color,
    pub selection_border_color: Color,
    pub tooltip_background_color: Color,
    pub tooltip_border_color: Color,
    pub tooltip_title_color: Color,
    pub tooltip_text_color: Color,
    pub placeholder_color: Color,
    pub placeholder_font_size_px: f64,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            grid_line_color: SLATE_400.with_alpha(0.15),
            grid_line_width: 1.0,
            axis_label_color: SLATE_300,
            axis_label_font_size_px: 11.0,
            area_fill_color: ACCENT.with_alpha(0.15),
            line_color: ACCENT,
            line_width: 2.0,
            marker_fill_color: ACCENT,
            marker_stroke_color: WHITE,
            marker_stroke_width: 1.5,
            marker_radius_px: 4.5,
            focus_line_color: SLATE_300.with_alpha(0.6),
            focus_line_width: 1.0,
            focus_dot_color: ACCENT,
            focus_dot_radius_px: 4.0,
            selection_fill_color: ACCENT.with_alpha(0.12),
            selection_border_color: ACCENT.with_alpha(0.6),
            tooltip_background_color: SLATE_900.with_alpha(0.92),
            tooltip_border_color: SLATE_400.with_alpha(0.35),
            tooltip_title_color: WHITE,
            tooltip_text_color: SLATE_300,
            placeholder_color: SLATE_400,
            placeholder_font_size_px: 13.0,
        }
    }
}
