use serde::{Deserialize, Serialize};

use crate::core::PlotRect;
use crate::error::{ChartError, ChartResult};

/// Pointer-driven chart state.
///
/// Wheel zoom is not a state: it runs as one atomic transaction from `Idle`
/// or `Hovering`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionMode {
    Idle,
    Hovering,
    Dragging,
}

/// Tunable constants for wheel zoom and click/drag disambiguation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionTuning {
    /// Window length multiplier for one zoom-in wheel step (< 1).
    pub wheel_zoom_in_factor: f64,
    /// Window length multiplier for one zoom-out wheel step (> 1).
    pub wheel_zoom_out_factor: f64,
    /// Shortest window a wheel zoom may produce.
    pub min_wheel_window_len: usize,
    /// Horizontal drag distance below which a release counts as a click.
    pub drag_threshold_px: f64,
}

impl Default for InteractionTuning {
    fn default() -> Self {
        Self {
            wheel_zoom_in_factor: 0.8,
            wheel_zoom_out_factor: 1.2,
            min_wheel_window_len: 2,
            drag_threshold_px: 6.0,
        }
    }
}

impl InteractionTuning {
    pub fn validate(self) -> ChartResult<Self> {
        if !self.wheel_zoom_in_factor.is_finite()
            || self.wheel_zoom_in_factor <= 0.0
            || self.wheel_zoom_in_factor >= 1.0
        {
            return Err(ChartError::InvalidConfig(
                "wheel zoom-in factor must be finite and in (0, 1)".to_owned(),
            ));
        }
        if !self.wheel_zoom_out_factor.is_finite() || self.wheel_zoom_out_factor <= 1.0 {
            return Err(ChartError::InvalidConfig(
                "wheel zoom-out factor must be finite and > 1".to_owned(),
            ));
        }
        if self.min_wheel_window_len < 2 {
            return Err(ChartError::InvalidConfig(
                "minimum wheel window length must be >= 2".to_owned(),
            ));
        }
        if !self.drag_threshold_px.is_finite() || self.drag_threshold_px < 0.0 {
            return Err(ChartError::InvalidConfig(
                "drag threshold must be finite and >= 0".to_owned(),
            ));
        }
        Ok(self)
    }

    #[must_use]
    pub fn wheel_factor(self, direction: WheelDirection) -> f64 {
        match direction {
            WheelDirection::ZoomIn => self.wheel_zoom_in_factor,
            WheelDirection::ZoomOut => self.wheel_zoom_out_factor,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WheelDirection {
    ZoomIn,
    ZoomOut,
}

impl WheelDirection {
    /// Scrolling down (positive delta) zooms out, scrolling up zooms in.
    #[must_use]
    pub fn from_delta(delta_y: f64) -> Option<Self> {
        if delta_y > 0.0 {
            Some(Self::ZoomOut)
        } else if delta_y < 0.0 {
            Some(Self::ZoomIn)
        } else {
            None
        }
    }
}

/// Point currently under the hover focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoverTarget {
    pub local_index: usize,
    pub absolute_index: usize,
}

/// Horizontal selection band tracked while dragging.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragSelection {
    pub anchor_x: f64,
    pub current_x: f64,
}

impl DragSelection {
    #[must_use]
    pub fn left(self) -> f64 {
        self.anchor_x.min(self.current_x)
    }

    #[must_use]
    pub fn width(self) -> f64 {
        (self.current_x - self.anchor_x).abs()
    }
}

/// What the engine has to do after a pointer move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerMoveOutcome {
    /// Resolve the nearest point at `x` and show it.
    ResolveHover { x: f64 },
    /// The drag band moved; hover stays suppressed.
    DragTracked(DragSelection),
    /// The pointer position was not a finite coordinate.
    Ignored,
}

/// Result of releasing the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerUpOutcome {
    /// No drag was in progress.
    Ignored,
    /// Release within the drag threshold: inspect the point at `x`.
    Click { x: f64 },
    /// Zoom to the band between both pixel positions.
    Select { from_x: f64, to_x: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionState {
    mode: InteractionMode,
    hover: Option<HoverTarget>,
    drag: Option<DragSelection>,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self {
            mode: InteractionMode::Idle,
            hover: None,
            drag: None,
        }
    }
}

impl InteractionState {
    #[must_use]
    pub fn mode(self) -> InteractionMode {
        self.mode
    }

    #[must_use]
    pub fn hover(self) -> Option<HoverTarget> {
        self.hover
    }

    #[must_use]
    pub fn drag(self) -> Option<DragSelection> {
        self.drag
    }

    pub fn on_pointer_move(&mut self, x: f64, plot: PlotRect) -> PointerMoveOutcome {
        if !x.is_finite() {
            return PointerMoveOutcome::Ignored;
        }
        if let (InteractionMode::Dragging, Some(drag)) = (self.mode, self.drag.as_mut()) {
            drag.current_x = plot.clamp_x(x);
            return PointerMoveOutcome::DragTracked(*drag);
        }
        PointerMoveOutcome::ResolveHover { x }
    }

    /// Commits the hover target resolved for the last pointer move.
    pub fn set_hover(&mut self, target: HoverTarget) {
        if self.mode == InteractionMode::Dragging {
            return;
        }
        self.mode = InteractionMode::Hovering;
        self.hover = Some(target);
    }

    /// Leaving the surface ends hovering; a drag keeps tracking until release.
    pub fn on_pointer_leave(&mut self) {
        self.clear_hover();
    }

    /// Drops the hover focus, for example after the window changed under it.
    pub fn clear_hover(&mut self) {
        self.hover = None;
        if self.mode == InteractionMode::Hovering {
            self.mode = InteractionMode::Idle;
        }
    }

    /// Starts a drag when the press lands inside the plot area.
    pub fn on_pointer_down(&mut self, x: f64, y: f64, plot: PlotRect) -> bool {
        if self.mode == InteractionMode::Dragging || !plot.contains(x, y) {
            return false;
        }
        self.mode = InteractionMode::Dragging;
        self.hover = None;
        self.drag = Some(DragSelection {
            anchor_x: x,
            current_x: x,
        });
        true
    }

    pub fn on_pointer_up(&mut self, x: f64, plot: PlotRect, threshold_px: f64) -> PointerUpOutcome {
        let Some(drag) = self.drag.take() else {
            return PointerUpOutcome::Ignored;
        };
        self.mode = InteractionMode::Idle;
        // A release without a usable position drops the selection.
        if !x.is_finite() {
            return PointerUpOutcome::Click { x: drag.anchor_x };
        }
        let end_x = plot.clamp_x(x);
        if (end_x - drag.anchor_x).abs() < threshold_px {
            PointerUpOutcome::Click { x: end_x }
        } else {
            PointerUpOutcome::Select {
                from_x: drag.anchor_x,
                to_x: end_x,
            }
        }
    }

    /// Drops hover and any in-progress drag.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
