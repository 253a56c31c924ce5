use serde::{Deserialize, Serialize};

/// Drawing layers of one chart frame, bottom to top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CanvasLayerKind {
    Grid,
    Axis,
    Area,
    Line,
    Markers,
    Focus,
    Overlay,
}

impl CanvasLayerKind {
    /// Canonical paint order; every frame carries exactly these layers.
    pub const ORDER: [CanvasLayerKind; 7] = [
        CanvasLayerKind::Grid,
        CanvasLayerKind::Axis,
        CanvasLayerKind::Area,
        CanvasLayerKind::Line,
        CanvasLayerKind::Markers,
        CanvasLayerKind::Focus,
        CanvasLayerKind::Overlay,
    ];
}
