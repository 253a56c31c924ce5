use crate::extensions::{PluginContext, PluginEvent};
use crate::render::Renderer;

use super::ChartEngine;

impl<R: Renderer> ChartEngine<R> {
    pub(super) fn plugin_context(&self) -> PluginContext {
        PluginContext {
            viewport: self.surface,
            series_len: self.series.len(),
            markers_len: self.markers.len(),
            window: self.window,
            reset_zoom_visible: self.reset_zoom_visible,
            interaction_mode: self.interaction.mode(),
            hover: self.interaction.hover(),
        }
    }

    pub(super) fn emit_plugin_event(&mut self, event: PluginEvent) {
        if self.plugins.is_empty() {
            return;
        }
        let context = self.plugin_context();
        for plugin in &mut self.plugins {
            plugin.on_event(event, context);
        }
    }
}
