use serde::{Deserialize, Serialize};

use crate::core::{DataPoint, Viewport};

use super::TooltipConfig;
use super::label_format::{format_date, format_percent, format_price, format_ratio, format_score};

/// Average glyph advance as a fraction of the font size, used for the
/// deterministic size estimate.
const GLYPH_WIDTH_RATIO: f64 = 0.6;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TooltipRow {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TooltipContent {
    pub title: String,
    pub rows: Vec<TooltipRow>,
}

impl TooltipContent {
    /// Formats the hovered observation: date title plus one row per metric.
    #[must_use]
    pub fn for_point(point: &DataPoint) -> Self {
        let row = |label: &str, value: String| TooltipRow {
            label: label.to_owned(),
            value,
        };
        Self {
            title: format_date(point.date),
            rows: vec![
                row("Close", format_price(point.close_price)),
                row("Change", format_percent(point.change_percent)),
                row("5D Return", format_percent(point.return_5d)),
                row("Volume Ratio", format_ratio(point.volume_ratio)),
                row("Score", format_score(point.score)),
            ],
        }
    }
}

/// Positioned tooltip box in surface pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipView {
    pub content: TooltipContent,
    /// Pixel position of the hovered point.
    pub anchor_x: f64,
    pub anchor_y: f64,
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl TooltipView {
    #[must_use]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

pub(super) fn build_tooltip_view(
    point: &DataPoint,
    anchor_x: f64,
    anchor_y: f64,
    viewport: Viewport,
    config: TooltipConfig,
) -> TooltipView {
    let content = TooltipContent::for_point(point);
    let (width, height) = estimate_tooltip_size(&content, config);
    let (left, top) = resolve_tooltip_position(anchor_x, anchor_y, width, height, viewport, config);
    TooltipView {
        content,
        anchor_x,
        anchor_y,
        left,
        top,
        width,
        height,
    }
}

fn estimate_text_width(text: &str, font_size_px: f64) -> f64 {
    text.chars().count() as f64 * font_size_px * GLYPH_WIDTH_RATIO
}

pub(super) fn estimate_tooltip_size(content: &TooltipContent, config: TooltipConfig) -> (f64, f64) {
    let title_width = estimate_text_width(&content.title, config.title_font_size_px);
    let label_width = content
        .rows
        .iter()
        .map(|row| estimate_text_width(&row.label, config.font_size_px))
        .fold(0.0, f64::max);
    let value_width = content
        .rows
        .iter()
        .map(|row| estimate_text_width(&row.value, config.font_size_px))
        .fold(0.0, f64::max);
    let body_width = if content.rows.is_empty() {
        0.0
    } else {
        label_width + config.column_gap_px + value_width
    };

    let width = (title_width.max(body_width) + config.padding_px * 2.0).max(config.min_width_px);
    let height = config.padding_px * 2.0 + config.row_height_px * (content.rows.len() + 1) as f64;
    (width, height)
}

/// Places the box right of and above the anchor, flipping to the left or
/// below when the preferred side would overflow, then clamps it into the
/// surface while keeping the edge margin.
pub(super) fn resolve_tooltip_position(
    anchor_x: f64,
    anchor_y: f64,
    width: f64,
    height: f64,
    viewport: Viewport,
    config: TooltipConfig,
) -> (f64, f64) {
    let margin = config.edge_margin_px;
    let offset = config.offset_px;
    let surface_width = viewport.width_px();
    let surface_height = viewport.height_px();

    let mut left = anchor_x + offset;
    if left + width > surface_width - margin {
        left = anchor_x - offset - width;
    }
    let mut top = anchor_y - height - offset;
    if top < margin {
        top = anchor_y + offset;
    }

    let max_left = (surface_width - width - margin).max(margin);
    let max_top = (surface_height - height - margin).max(margin);
    (left.clamp(margin, max_left), top.clamp(margin, max_top))
}

#[cfg(test)]
mod tests {
    use super::{TooltipContent, estimate_tooltip_size, resolve_tooltip_position};
    use crate::api::TooltipConfig;
    use crate::core::{DataPoint, Viewport};
    use chrono::NaiveDate;

    fn viewport() -> Viewport {
        Viewport::new(640, 320)
    }

    #[test]
    fn content_lists_every_metric_with_placeholders() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 8).expect("valid date");
        let point = DataPoint::new(date, 1234.5).with_score(72.24);
        let content = TooltipContent::for_point(&point);
        assert_eq!(content.title, "2024-03-08");
        let values: Vec<&str> = content.rows.iter().map(|row| row.value.as_str()).collect();
        assert_eq!(values, ["1,234.50", "—", "—", "—", "72.2"]);
    }

    #[test]
    fn size_respects_minimum_width() {
        let content = TooltipContent {
            title: "x".to_owned(),
            rows: Vec::new(),
        };
        let config = TooltipConfig::default();
        let (width, height) = estimate_tooltip_size(&content, config);
        assert_eq!(width, config.min_width_px);
        assert_eq!(height, config.padding_px * 2.0 + config.row_height_px);
    }

    #[test]
    fn preferred_position_is_up_and_right() {
        let config = TooltipConfig::default();
        let (left, top) = resolve_tooltip_position(100.0, 200.0, 150.0, 100.0, viewport(), config);
        assert_eq!(left, 112.0);
        assert_eq!(top, 88.0);
    }

    #[test]
    fn flips_left_near_right_edge() {
        let config = TooltipConfig::default();
        let (left, _) = resolve_tooltip_position(600.0, 200.0, 150.0, 100.0, viewport(), config);
        assert_eq!(left, 600.0 - 12.0 - 150.0);
    }

    #[test]
    fn flips_below_near_top_edge() {
        let config = TooltipConfig::default();
        let (_, top) = resolve_tooltip_position(100.0, 30.0, 150.0, 100.0, viewport(), config);
        assert_eq!(top, 42.0);
    }

    #[test]
    fn oversized_box_is_pinned_to_margin() {
        let config = TooltipConfig::default();
        let (left, top) = resolve_tooltip_position(10.0, 10.0, 900.0, 900.0, viewport(), config);
        assert_eq!((left, top), (8.0, 8.0));
    }
}
