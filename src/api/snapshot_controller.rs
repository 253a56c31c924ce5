use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

use super::{ChartEngine, EngineSnapshot};

impl<R: Renderer> ChartEngine<R> {
    /// Builds a deterministic snapshot useful for regression tests.
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            viewport: self.surface,
            series_len: self.series.len(),
            window: self.window,
            summary: self.window_summary(),
            reset_zoom_visible: self.reset_zoom_visible,
            loading: self.loading,
            interaction_mode: self.interaction.mode(),
            hover: self.interaction.hover(),
            drag: self.interaction.drag(),
            markers: self.markers.iter().collect(),
        }
    }

    /// Serializes snapshot as pretty JSON for fixture-based regression checks.
    pub fn snapshot_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }
}
