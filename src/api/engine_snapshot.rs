use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::{ViewWindow, Viewport, WindowSummary};
use crate::interaction::{DragSelection, HoverTarget, InteractionMode};

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub viewport: Option<Viewport>,
    pub series_len: usize,
    pub window: Option<ViewWindow>,
    pub summary: Option<WindowSummary>,
    pub reset_zoom_visible: bool,
    pub loading: bool,
    pub interaction_mode: InteractionMode,
    pub hover: Option<HoverTarget>,
    pub drag: Option<DragSelection>,
    /// Marker dates in the order they were supplied.
    pub markers: Vec<NaiveDate>,
}
