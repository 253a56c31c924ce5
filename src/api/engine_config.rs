use serde::{Deserialize, Serialize};

use crate::core::{PlotPadding, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::interaction::InteractionTuning;

use super::RenderStyle;

/// Tooltip geometry used for placement and size estimation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TooltipConfig {
    /// Gap between the hovered point and the tooltip box.
    pub offset_px: f64,
    /// Minimum distance kept from the surface edges.
    pub edge_margin_px: f64,
    pub padding_px: f64,
    pub title_font_size_px: f64,
    pub font_size_px: f64,
    pub row_height_px: f64,
    /// Horizontal gap between a row label and its value.
    pub column_gap_px: f64,
    pub min_width_px: f64,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            offset_px: 12.0,
            edge_margin_px: 8.0,
            padding_px: 8.0,
            title_font_size_px: 13.0,
            font_size_px: 12.0,
            row_height_px: 18.0,
            column_gap_px: 16.0,
            min_width_px: 140.0,
        }
    }
}

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load chart setup
/// without inventing their own ad-hoc format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartEngineConfig {
    pub viewport: Viewport,
    /// Surface size used when the host reports a zero-sized surface.
    #[serde(default = "default_fallback_viewport")]
    pub fallback_viewport: Viewport,
    #[serde(default)]
    pub padding: PlotPadding,
    #[serde(default)]
    pub interaction: InteractionTuning,
    #[serde(default = "default_value_tick_intervals")]
    pub value_tick_intervals: usize,
    #[serde(default = "default_x_label_offset_px")]
    pub x_label_offset_px: f64,
    #[serde(default = "default_y_label_offset_px")]
    pub y_label_offset_px: f64,
    #[serde(default)]
    pub tooltip: TooltipConfig,
    #[serde(default)]
    pub style: RenderStyle,
    #[serde(default = "default_empty_message")]
    pub empty_message: String,
    /// Placeholder shown between `show_loading` and the next `load`.
    #[serde(default = "default_loading_message")]
    pub loading_message: String,
}

impl ChartEngineConfig {
    /// Creates a config with default padding, tuning and style.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            fallback_viewport: default_fallback_viewport(),
            padding: PlotPadding::default(),
            interaction: InteractionTuning::default(),
            value_tick_intervals: default_value_tick_intervals(),
            x_label_offset_px: default_x_label_offset_px(),
            y_label_offset_px: default_y_label_offset_px(),
            tooltip: TooltipConfig::default(),
            style: RenderStyle::default(),
            empty_message: default_empty_message(),
            loading_message: default_loading_message(),
        }
    }

    #[must_use]
    pub fn with_padding(mut self, padding: PlotPadding) -> Self {
        self.padding = padding;
        self
    }

    #[must_use]
    pub fn with_interaction_tuning(mut self, tuning: InteractionTuning) -> Self {
        self.interaction = tuning;
        self
    }

    #[must_use]
    pub fn with_value_tick_intervals(mut self, intervals: usize) -> Self {
        self.value_tick_intervals = intervals;
        self
    }

    #[must_use]
    pub fn with_tooltip(mut self, tooltip: TooltipConfig) -> Self {
        self.tooltip = tooltip;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: RenderStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = message.into();
        self
    }

    #[must_use]
    pub fn with_loading_message(mut self, message: impl Into<String>) -> Self {
        self.loading_message = message.into();
        self
    }

    /// Serializes config to pretty JSON.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to parse config: {e}")))
    }

    /// Surface size to use for a host-reported size, substituting the
    /// fallback for zero-sized surfaces.
    #[must_use]
    pub fn effective_viewport(&self, reported: Viewport) -> Viewport {
        if reported.is_valid() {
            reported
        } else {
            self.fallback_viewport
        }
    }
}

fn default_fallback_viewport() -> Viewport {
    Viewport::new(640, 320)
}

fn default_value_tick_intervals() -> usize {
    4
}

fn default_x_label_offset_px() -> f64 {
    20.0
}

fn default_y_label_offset_px() -> f64 {
    6.0
}

fn default_empty_message() -> String {
    "No price history loaded".to_owned()
}

fn default_loading_message() -> String {
    "Loading...".to_owned()
}
