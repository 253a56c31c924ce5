use tracing::{debug, trace};

use crate::core::{Series, ViewWindow, resolve_pan_window, resolve_zoom_window};
use crate::error::ChartResult;
use crate::extensions::{EventMarkers, PluginEvent};
use crate::render::Renderer;

use super::ChartEngine;

impl<R: Renderer> ChartEngine<R> {
    /// Replaces the series and markers and shows the full range.
    ///
    /// An empty series switches to the placeholder state in which every
    /// window operation is a no-op until the next load. Any drag or hover in
    /// progress is dropped.
    pub fn load(&mut self, series: Series, markers: EventMarkers) -> ChartResult<()> {
        self.interaction.reset();
        self.loading = false;
        self.window = series.full_window();
        self.series = series;
        self.markers = markers;
        debug!(
            points = self.series.len(),
            markers = self.markers.len(),
            "series loaded"
        );

        self.set_reset_zoom_visible(false);
        self.emit_plugin_event(PluginEvent::Loaded {
            series_len: self.series.len(),
            markers_len: self.markers.len(),
        });
        self.emit_window_changed();
        self.render()
    }

    /// Replaces the chart with the loading placeholder while the host fetches
    /// a new series.
    ///
    /// The current series stays loaded but is neither drawn nor interactive
    /// until the next `load`.
    pub fn show_loading(&mut self) -> ChartResult<()> {
        if !self.loading {
            let had_hover = self.interaction.hover().is_some();
            self.interaction.reset();
            self.loading = true;
            debug!("loading placeholder shown");
            if had_hover {
                self.emit_plugin_event(PluginEvent::HoverChanged { target: None });
            }
        }
        self.render()
    }

    /// Restores the full range. Returns `true` when the window changed.
    pub fn reset_zoom(&mut self) -> ChartResult<bool> {
        let Some(full) = self.series.full_window() else {
            return Ok(false);
        };
        self.commit_window(full)
    }

    /// Clamps and reorders an absolute index range, then commits it.
    ///
    /// Ranges that collapse to a single point on a multi-point series are
    /// ignored. Returns `true` when the window changed.
    pub fn zoom_to_window(&mut self, abs_start: i64, abs_end: i64) -> ChartResult<bool> {
        let Some(next) = resolve_zoom_window(self.series.len(), abs_start, abs_end) else {
            trace!(abs_start, abs_end, "zoom request rejected");
            return Ok(false);
        };
        self.commit_window(next)
    }

    /// Shifts the window by `delta` points keeping its length.
    pub fn pan_window(&mut self, delta: i64) -> ChartResult<bool> {
        let Some(window) = self.window else {
            return Ok(false);
        };
        let Some(next) = resolve_pan_window(window, self.series.len(), delta) else {
            return Ok(false);
        };
        self.commit_window(next)
    }

    pub(super) fn commit_window(&mut self, next: ViewWindow) -> ChartResult<bool> {
        if self.window == Some(next) {
            return Ok(false);
        }
        self.window = Some(next);
        // Local hover indices refer to the previous window.
        self.interaction.clear_hover();
        debug!(start = next.start, end = next.end, "view window committed");

        self.set_reset_zoom_visible(!next.is_full(self.series.len()));
        self.emit_window_changed();
        self.render()?;
        Ok(true)
    }

    fn set_reset_zoom_visible(&mut self, visible: bool) {
        if self.reset_zoom_visible == visible {
            return;
        }
        self.reset_zoom_visible = visible;
        self.emit_plugin_event(PluginEvent::ResetZoomVisibilityChanged { visible });
    }

    fn emit_window_changed(&mut self) {
        if let Some(window) = self.window {
            self.emit_plugin_event(PluginEvent::WindowChanged {
                start: window.start,
                end: window.end,
            });
        }
    }
}
