use tracing::trace;

use crate::error::ChartResult;
use crate::render::{FrameCounts, RenderFrame, Renderer};

/// Headless renderer that validates and counts frames without drawing.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_counts: FrameCounts,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_counts = frame.counts();
        trace!(
            lines = self.last_counts.lines,
            rects = self.last_counts.rects,
            texts = self.last_counts.texts,
            "null renderer consumed frame"
        );
        Ok(())
    }
}
