use crate::core::{ProjectedWindow, Viewport, date_label_indices, value_ticks};
use crate::extensions::place_event_markers;
use crate::render::{
    CanvasLayerKind, CirclePrimitive, Color, LinePrimitive, PathPrimitive, RectPrimitive, RenderFrame,
    Renderer, TextHAlign, TextPrimitive,
};

use super::label_format::{format_date, format_price};
use super::{ChartEngine, ChartEngineConfig, TooltipView};

/// Price labels sit slightly below their grid line.
const VALUE_LABEL_BASELINE_SHIFT_PX: f64 = 4.0;

impl<R: Renderer> ChartEngine<R> {
    /// Materializes the full scene for the current state.
    ///
    /// Returns `None` while no surface is mounted. Without loaded points, or
    /// while loading, the frame only carries a placeholder message.
    #[must_use]
    pub fn build_render_frame(&self) -> Option<RenderFrame> {
        let viewport = self.surface?;
        let mut frame = RenderFrame::new(viewport);
        let Some(projected) = self.projected_window() else {
            let message = if self.loading {
                &self.config.loading_message
            } else {
                &self.config.empty_message
            };
            push_placeholder(&mut frame, viewport, message, &self.config);
            return Some(frame);
        };

        push_grid_and_axis(&mut frame, &projected, &self.config);
        push_series(&mut frame, &projected, &self.config);

        let style = self.config.style;
        frame.layer_mut(CanvasLayerKind::Markers).circles.extend(
            place_event_markers(&self.markers, &projected)
                .into_iter()
                .map(|marker| {
                    CirclePrimitive::new(
                        marker.x,
                        marker.y,
                        style.marker_radius_px,
                        style.marker_fill_color,
                    )
                    .with_stroke(style.marker_stroke_width, style.marker_stroke_color)
                }),
        );

        let hovered = self.interaction.hover().map(|target| target.local_index);
        push_focus(&mut frame, &projected, hovered, &self.config);

        if let Some(selection) = self.interaction.drag() {
            let plot = projected.plot();
            frame.layer_mut(CanvasLayerKind::Overlay).rects.push(
                RectPrimitive::new(
                    selection.left(),
                    plot.top,
                    selection.width(),
                    plot.height,
                    style.selection_fill_color,
                )
                .with_border(1.0, style.selection_border_color),
            );
        }
        if let Some(tooltip) = self.tooltip_for(&projected) {
            push_tooltip(&mut frame, &tooltip, &self.config);
        }
        Some(frame)
    }
}

fn push_placeholder(
    frame: &mut RenderFrame,
    viewport: Viewport,
    message: &str,
    config: &ChartEngineConfig,
) {
    frame.layer_mut(CanvasLayerKind::Overlay).texts.push(TextPrimitive::new(
        message.to_owned(),
        viewport.width_px() / 2.0,
        viewport.height_px() / 2.0,
        config.style.placeholder_font_size_px,
        config.style.placeholder_color,
        TextHAlign::Center,
    ));
}

fn push_grid_and_axis(
    frame: &mut RenderFrame,
    projected: &ProjectedWindow,
    config: &ChartEngineConfig,
) {
    let style = config.style;
    let plot = projected.plot();

    for tick in value_ticks(&projected.mapper, config.value_tick_intervals) {
        frame.layer_mut(CanvasLayerKind::Grid).lines.push(LinePrimitive::new(
            plot.left,
            tick.y,
            plot.right(),
            tick.y,
            style.grid_line_width,
            style.grid_line_color,
        ));
        frame.layer_mut(CanvasLayerKind::Axis).texts.push(TextPrimitive::new(
            format_price(tick.value),
            plot.left - config.y_label_offset_px,
            tick.y + VALUE_LABEL_BASELINE_SHIFT_PX,
            style.axis_label_font_size_px,
            style.axis_label_color,
            TextHAlign::Right,
        ));
    }

    let axis = frame.layer_mut(CanvasLayerKind::Axis);
    for index in date_label_indices(projected.points.len()) {
        let Some(point) = projected.points.get(index) else {
            continue;
        };
        axis.texts.push(TextPrimitive::new(
            format_date(point.point.date),
            point.x,
            plot.bottom() + config.x_label_offset_px,
            style.axis_label_font_size_px,
            style.axis_label_color,
            TextHAlign::Center,
        ));
    }
}

fn push_series(frame: &mut RenderFrame, projected: &ProjectedWindow, config: &ChartEngineConfig) {
    let style = config.style;
    let plot = projected.plot();
    let line: Vec<(f64, f64)> = projected.points.iter().map(|p| (p.x, p.y)).collect();
    if line.is_empty() {
        return;
    }

    // Close the area along the bottom edge of the plot.
    let mut area = line.clone();
    area.push((plot.right(), plot.bottom()));
    area.push((plot.left, plot.bottom()));
    frame
        .layer_mut(CanvasLayerKind::Area)
        .paths
        .push(PathPrimitive::filled_polygon(area, style.area_fill_color));
    frame
        .layer_mut(CanvasLayerKind::Line)
        .paths
        .push(PathPrimitive::polyline(line, style.line_width, style.line_color));
}

/// Focus line and dot are always emitted; without a hover target they are
/// fully transparent.
fn push_focus(
    frame: &mut RenderFrame,
    projected: &ProjectedWindow,
    hover_local_index: Option<usize>,
    config: &ChartEngineConfig,
) {
    let style = config.style;
    let plot = projected.plot();
    let focused = hover_local_index.and_then(|index| projected.points.get(index));
    let (x, y, visible) = match focused {
        Some(point) => (point.x, point.y, true),
        None => (plot.left, plot.top, false),
    };
    let opacity = |color: Color| {
        if visible {
            color
        } else {
            color.with_alpha(0.0)
        }
    };

    let layer = frame.layer_mut(CanvasLayerKind::Focus);
    layer.lines.push(LinePrimitive::new(
        x,
        plot.top,
        x,
        plot.bottom(),
        style.focus_line_width,
        opacity(style.focus_line_color),
    ));
    layer.circles.push(CirclePrimitive::new(
        x,
        y,
        style.focus_dot_radius_px,
        opacity(style.focus_dot_color),
    ));
}

fn push_tooltip(frame: &mut RenderFrame, tooltip: &TooltipView, config: &ChartEngineConfig) {
    let style = config.style;
    let geometry = config.tooltip;
    let layer = frame.layer_mut(CanvasLayerKind::Overlay);

    layer.rects.push(
        RectPrimitive::new(
            tooltip.left,
            tooltip.top,
            tooltip.width,
            tooltip.height,
            style.tooltip_background_color,
        )
        .with_border(1.0, style.tooltip_border_color)
        .with_corner_radius(4.0),
    );

    let text_left = tooltip.left + geometry.padding_px;
    let text_right = tooltip.right() - geometry.padding_px;
    layer.texts.push(TextPrimitive::new(
        tooltip.content.title.clone(),
        text_left,
        tooltip.top + geometry.padding_px + geometry.title_font_size_px,
        geometry.title_font_size_px,
        style.tooltip_title_color,
        TextHAlign::Left,
    ));
    for (row_index, row) in tooltip.content.rows.iter().enumerate() {
        let baseline = tooltip.top
            + geometry.padding_px
            + geometry.row_height_px * (row_index + 1) as f64
            + geometry.font_size_px;
        layer.texts.push(TextPrimitive::new(
            row.label.clone(),
            text_left,
            baseline,
            geometry.font_size_px,
            style.tooltip_text_color,
            TextHAlign::Left,
        ));
        layer.texts.push(TextPrimitive::new(
            row.value.clone(),
            text_right,
            baseline,
            geometry.font_size_px,
            style.tooltip_title_color,
            TextHAlign::Right,
        ));
    }
}
