use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{ProjectedWindow, resolve_wheel_zoom_window};
use crate::error::ChartResult;
use crate::extensions::PluginEvent;
use crate::interaction::{
    HoverTarget, InteractionMode, PointerMoveOutcome, PointerUpOutcome, WheelDirection,
};
use crate::render::Renderer;

use super::ChartEngine;

/// Result of one wheel event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WheelOutcome {
    /// The host must suppress its default scroll for this event.
    pub prevent_default: bool,
    pub zoomed: bool,
}

impl<R: Renderer> ChartEngine<R> {
    /// Pointer moved over the surface.
    ///
    /// While dragging this only tracks the selection band; otherwise the
    /// nearest visible point becomes the hover focus.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> ChartResult<()> {
        let Some(projected) = self.projected_window() else {
            return Ok(());
        };
        match self.interaction.on_pointer_move(x, projected.plot()) {
            PointerMoveOutcome::DragTracked(selection) => {
                trace!(anchor_x = selection.anchor_x, current_x = selection.current_x, "drag tracked");
            }
            PointerMoveOutcome::ResolveHover { x } => {
                trace!(x, y, "resolving hover");
                self.resolve_hover(&projected, x);
            }
            PointerMoveOutcome::Ignored => {
                trace!(x, "non-finite pointer position ignored");
                return Ok(());
            }
        }
        self.render()
    }

    /// Pointer left the surface: hide focus and tooltip.
    pub fn pointer_leave(&mut self) -> ChartResult<()> {
        if self.surface.is_none() {
            return Ok(());
        }
        let had_hover = self.interaction.hover().is_some();
        self.interaction.on_pointer_leave();
        if had_hover {
            self.emit_plugin_event(PluginEvent::HoverChanged { target: None });
        }
        self.render()
    }

    /// Starts a drag-select when the press lands inside the plot area.
    /// Returns `true` when a drag started.
    pub fn pointer_down(&mut self, x: f64, y: f64) -> ChartResult<bool> {
        let Some(projected) = self.projected_window() else {
            return Ok(false);
        };
        let had_hover = self.interaction.hover().is_some();
        if !self.interaction.on_pointer_down(x, y, projected.plot()) {
            return Ok(false);
        }
        debug!(x, "drag started");
        if had_hover {
            self.emit_plugin_event(PluginEvent::HoverChanged { target: None });
        }
        self.emit_plugin_event(PluginEvent::DragStarted { x });
        self.render()?;
        Ok(true)
    }

    /// Ends a drag. Short drags act as a click that inspects the point under
    /// the pointer; longer ones zoom to the selected band.
    ///
    /// Returns `true` when the window changed.
    pub fn pointer_up(&mut self, x: f64) -> ChartResult<bool> {
        let Some(projected) = self.projected_window() else {
            return Ok(false);
        };
        let threshold = self.config.interaction.drag_threshold_px;
        let zoomed = match self.interaction.on_pointer_up(x, projected.plot(), threshold) {
            PointerUpOutcome::Ignored => return Ok(false),
            PointerUpOutcome::Click { x } => {
                trace!(x, "drag below threshold treated as click");
                self.resolve_hover(&projected, x);
                false
            }
            PointerUpOutcome::Select { from_x, to_x } => {
                self.zoom_to_selection(&projected, from_x, to_x)?
            }
        };
        debug!(zoomed, "drag ended");
        self.emit_plugin_event(PluginEvent::DragEnded { zoomed });
        if !zoomed {
            self.render()?;
        }
        Ok(zoomed)
    }

    /// Zooms one step around the point under `x`.
    ///
    /// Positive `delta_y` (scrolling down) zooms out, negative zooms in. The
    /// default scroll is suppressed whenever the surface shows data, even
    /// when the window is already at a zoom limit.
    pub fn wheel(&mut self, x: f64, delta_y: f64) -> ChartResult<WheelOutcome> {
        let Some(projected) = self.projected_window() else {
            return Ok(WheelOutcome::default());
        };
        let mut outcome = WheelOutcome {
            prevent_default: true,
            zoomed: false,
        };
        if self.interaction.mode() == InteractionMode::Dragging || !x.is_finite() {
            trace!(x, "wheel ignored");
            return Ok(outcome);
        }
        let Some(direction) = WheelDirection::from_delta(delta_y) else {
            return Ok(outcome);
        };

        let tuning = self.config.interaction;
        let local_index = projected.mapper.to_index(x);
        let center_abs = projected.window.to_absolute(local_index);
        let next = resolve_wheel_zoom_window(
            projected.window,
            self.series.len(),
            center_abs,
            tuning.wheel_factor(direction),
            tuning.min_wheel_window_len,
        );
        if let Some(next) = next {
            trace!(?direction, center_abs, start = next.start, end = next.end, "wheel zoom");
            outcome.zoomed = self.commit_window(next)?;
        }
        Ok(outcome)
    }

    fn resolve_hover(&mut self, projected: &ProjectedWindow, x: f64) {
        let Some(nearest) = projected.nearest(x) else {
            return;
        };
        let target = HoverTarget {
            local_index: nearest.local_index,
            absolute_index: nearest.absolute_index,
        };
        let previous = self.interaction.hover();
        self.interaction.set_hover(target);
        if previous != self.interaction.hover() {
            self.emit_plugin_event(PluginEvent::HoverChanged {
                target: self.interaction.hover(),
            });
        }
    }

    fn zoom_to_selection(
        &mut self,
        projected: &ProjectedWindow,
        from_x: f64,
        to_x: f64,
    ) -> ChartResult<bool> {
        let from = projected.mapper.to_index(from_x);
        let to = projected.mapper.to_index(to_x);
        let (lo, hi) = (from.min(to), from.max(to));
        if hi - lo < 1 {
            trace!(lo, hi, "selection narrower than two points");
            return Ok(false);
        }
        let start = projected.window.to_absolute(lo);
        let end = projected.window.to_absolute(hi);
        self.zoom_to_window(start as i64, end as i64)
    }
}
