use crate::error::{ChartError, ChartResult};

use super::{ChartEngineConfig, RenderStyle, TooltipConfig};

pub(super) fn validate_config(config: &ChartEngineConfig) -> ChartResult<()> {
    if !config.fallback_viewport.is_valid() {
        return Err(ChartError::InvalidViewport {
            width: config.fallback_viewport.width,
            height: config.fallback_viewport.height,
        });
    }
    config.padding.validate()?;
    config.interaction.validate()?;
    if config.value_tick_intervals == 0 {
        return Err(ChartError::InvalidConfig(
            "value tick intervals must be >= 1".to_owned(),
        ));
    }
    for (name, value) in [
        ("x_label_offset_px", config.x_label_offset_px),
        ("y_label_offset_px", config.y_label_offset_px),
    ] {
        require_non_negative(name, value)?;
    }
    if config.empty_message.trim().is_empty() {
        return Err(ChartError::InvalidConfig(
            "empty-state message must not be blank".to_owned(),
        ));
    }
    if config.loading_message.trim().is_empty() {
        return Err(ChartError::InvalidConfig(
            "loading message must not be blank".to_owned(),
        ));
    }
    validate_tooltip_config(config.tooltip)?;
    validate_render_style(config.style)
}

pub(super) fn validate_tooltip_config(config: TooltipConfig) -> ChartResult<()> {
    for (name, value) in [
        ("offset_px", config.offset_px),
        ("edge_margin_px", config.edge_margin_px),
        ("padding_px", config.padding_px),
        ("column_gap_px", config.column_gap_px),
        ("min_width_px", config.min_width_px),
    ] {
        require_non_negative(name, value)?;
    }
    for (name, value) in [
        ("title_font_size_px", config.title_font_size_px),
        ("font_size_px", config.font_size_px),
        ("row_height_px", config.row_height_px),
    ] {
        require_positive(name, value)?;
    }
    Ok(())
}

pub(super) fn validate_render_style(style: RenderStyle) -> ChartResult<()> {
    for color in [
        style.grid_line_color,
        style.axis_label_color,
        style.area_fill_color,
        style.line_color,
        style.marker_fill_color,
        style.marker_stroke_color,
        style.focus_line_color,
        style.focus_dot_color,
        style.selection_fill_color,
        style.selection_border_color,
        style.tooltip_background_color,
        style.tooltip_border_color,
        style.tooltip_title_color,
        style.tooltip_text_color,
        style.placeholder_color,
    ] {
        color.validate()?;
    }
    for (name, value) in [
        ("grid_line_width", style.grid_line_width),
        ("axis_label_font_size_px", style.axis_label_font_size_px),
        ("line_width", style.line_width),
        ("marker_radius_px", style.marker_radius_px),
        ("focus_line_width", style.focus_line_width),
        ("focus_dot_radius_px", style.focus_dot_radius_px),
        ("placeholder_font_size_px", style.placeholder_font_size_px),
    ] {
        require_positive(name, value)?;
    }
    require_non_negative("marker_stroke_width", style.marker_stroke_width)
}

fn require_positive(name: &str, value: f64) -> ChartResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ChartError::InvalidConfig(format!(
            "`{name}` must be finite and > 0"
        )));
    }
    Ok(())
}

fn require_non_negative(name: &str, value: f64) -> ChartResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(ChartError::InvalidConfig(format!(
            "`{name}` must be finite and >= 0"
        )));
    }
    Ok(())
}
