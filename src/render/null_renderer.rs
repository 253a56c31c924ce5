use crate::error::ChartResult;
use crate::render::{CanvasLayerKind, RenderFrame, Renderer};

/// No-op renderer used by tests and headless engine usage.
///
/// It still validates frame content so tests can catch invalid geometry before
/// a real backend is involved.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub render_count: usize,
    pub last_line_count: usize,
    pub last_text_count: usize,
    pub last_circle_count: usize,
    pub last_path_count: usize,
    pub last_marker_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.render_count += 1;
        self.last_line_count = frame.line_count();
        self.last_text_count = frame.text_count();
        self.last_circle_count = frame.circle_count();
        self.last_path_count = frame.path_count();
        self.last_marker_count = frame
            .layer(CanvasLayerKind::Markers)
            .map_or(0, |layer| layer.circles.len());
        Ok(())
    }
}
