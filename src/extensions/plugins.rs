use serde::{Deserialize, Serialize};

use crate::core::{ViewWindow, Viewport};
use crate::interaction::{HoverTarget, InteractionMode};

/// Read-only state snapshot passed to plugin hooks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PluginContext {
    pub viewport: Option<Viewport>,
    pub series_len: usize,
    pub markers_len: usize,
    pub window: Option<ViewWindow>,
    pub reset_zoom_visible: bool,
    pub interaction_mode: InteractionMode,
    pub hover: Option<HoverTarget>,
}

/// Event stream exposed to plugins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PluginEvent {
    Loaded { series_len: usize, markers_len: usize },
    WindowChanged { start: usize, end: usize },
    /// Host-facing signal for showing or hiding a "reset zoom" control.
    ResetZoomVisibilityChanged { visible: bool },
    HoverChanged { target: Option<HoverTarget> },
    DragStarted { x: f64 },
    DragEnded { zoomed: bool },
    Resized { width: u32, height: u32 },
    Rendered,
}

/// Extension hook interface for host-side observers.
///
/// Plugins see events and engine context but never mutate the window
/// directly; zoom changes go through the engine API.
pub trait ChartPlugin {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: PluginEvent, context: PluginContext);
}
