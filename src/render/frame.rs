use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{LinePrimitive, RectPrimitive, TextPrimitive};

/// Draw commands for one chart pass.
///
/// Backends paint lines, then rectangles, then texts, each list in order.
/// Every bar contributes its border rectangle immediately before its fill.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub lines: Vec<LinePrimitive>,
    pub rects: Vec<RectPrimitive>,
    pub texts: Vec<TextPrimitive>,
}

/// Number of primitives per kind in a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FrameCounts {
    pub lines: usize,
    pub rects: usize,
    pub texts: usize,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            lines: Vec::new(),
            rects: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn counts(&self) -> FrameCounts {
        FrameCounts {
            lines: self.lines.len(),
            rects: self.rects.len(),
            texts: self.texts.len(),
        }
    }

    /// Checks the surface and every primitive. Errors name the offending
    /// primitive by kind and position.
    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for (index, line) in self.lines.iter().enumerate() {
            line.validate().map_err(|err| locate(err, "line", index))?;
        }
        for (index, rect) in self.rects.iter().enumerate() {
            rect.validate().map_err(|err| locate(err, "rect", index))?;
        }
        for (index, text) in self.texts.iter().enumerate() {
            text.validate().map_err(|err| locate(err, "text", index))?;
        }
        Ok(())
    }
}

fn locate(err: ChartError, kind: &str, index: usize) -> ChartError {
    match err {
        ChartError::InvalidData(message) => {
            ChartError::InvalidData(format!("{kind} #{index}: {message}"))
        }
        other => other,
    }
}
