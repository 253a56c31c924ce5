use crate::core::{ProjectedWindow, Series, ViewWindow, Viewport, WindowSummary};
use crate::extensions::{EventMarkers, PlacedMarker, place_event_markers};
use crate::interaction::{DragSelection, HoverTarget, InteractionMode};
use crate::render::Renderer;

use super::tooltip::build_tooltip_view;
use super::{ChartEngine, ChartEngineConfig, TooltipView};

impl<R: Renderer> ChartEngine<R> {
    #[must_use]
    pub fn config(&self) -> &ChartEngineConfig {
        &self.config
    }

    /// Mounted surface size, `None` while unmounted.
    #[must_use]
    pub fn viewport(&self) -> Option<Viewport> {
        self.surface
    }

    #[must_use]
    pub fn series(&self) -> &Series {
        &self.series
    }

    #[must_use]
    pub fn markers(&self) -> &EventMarkers {
        &self.markers
    }

    /// Current view window, `None` when no points are loaded.
    #[must_use]
    pub fn window(&self) -> Option<ViewWindow> {
        self.window
    }

    /// Whether the host should offer a "reset zoom" control.
    #[must_use]
    pub fn reset_zoom_visible(&self) -> bool {
        self.reset_zoom_visible
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn interaction_mode(&self) -> InteractionMode {
        self.interaction.mode()
    }

    #[must_use]
    pub fn hover(&self) -> Option<HoverTarget> {
        self.interaction.hover()
    }

    #[must_use]
    pub fn drag_selection(&self) -> Option<DragSelection> {
        self.interaction.drag()
    }

    #[must_use]
    pub fn window_summary(&self) -> Option<WindowSummary> {
        self.series.summary(self.window?)
    }

    /// Projection of the current window onto the mounted surface.
    ///
    /// `None` while the loading placeholder is shown.
    #[must_use]
    pub fn projected_window(&self) -> Option<ProjectedWindow> {
        if self.loading {
            return None;
        }
        ProjectedWindow::build(
            &self.series,
            self.window?,
            self.surface?,
            self.config.padding,
        )
    }

    #[must_use]
    pub fn visible_markers(&self) -> Vec<PlacedMarker> {
        self.projected_window()
            .map(|projected| place_event_markers(&self.markers, &projected))
            .unwrap_or_default()
    }

    /// Tooltip for the hovered point, positioned inside the surface.
    #[must_use]
    pub fn tooltip(&self) -> Option<TooltipView> {
        let projected = self.projected_window()?;
        self.tooltip_for(&projected)
    }

    pub(super) fn tooltip_for(&self, projected: &ProjectedWindow) -> Option<TooltipView> {
        let hover = self.interaction.hover()?;
        let point = projected.points.get(hover.local_index)?;
        Some(build_tooltip_view(
            &point.point,
            point.x,
            point.y,
            self.surface?,
            self.config.tooltip,
        ))
    }
}
