use crate::core::{Rect, TextMeasurer};
use crate::render::{
    Color, LinePrimitive, RectPrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive,
};

use super::BarChart;

impl<R: Renderer, M: TextMeasurer> BarChart<R, M> {
    /// Materializes the current scale, layout and bar geometry as draw commands.
    ///
    /// Draw order: Y-axis title, axes, bars (border then fill), category
    /// labels, tick labels. Empty names and zero-area rectangles are skipped.
    #[must_use]
    pub fn build_render_frame(&self) -> RenderFrame {
        let config = &self.config;
        let layout = &self.layout;
        let label_font = config.label_font();
        let mut frame = RenderFrame::new(config.viewport);

        if let Some(title) = &layout.y_axis_title {
            frame.texts.push(
                TextPrimitive::new(
                    title.text.clone(),
                    title.anchor.x,
                    title.anchor.y,
                    config.title_font(),
                    config.axis_label_color,
                    TextHAlign::Left,
                )
                .with_rotation_deg(title.rotation_deg),
            );
        }

        for axis in [layout.y_axis, layout.x_axis] {
            frame.lines.push(LinePrimitive::new(
                axis.start.x,
                axis.start.y,
                axis.end.x,
                axis.end.y,
                config.axis_line_width,
                config.axis_line_color,
            ));
        }

        for bar in &self.bars {
            let Some(entry) = self.series.get(bar.index) else {
                continue;
            };
            push_rounded_rect(&mut frame, bar.border, entry.border_color, config.bar_corner_radius);
            push_rounded_rect(&mut frame, bar.fill, entry.fill_color, config.bar_corner_radius);
        }

        for label in layout.category_labels.iter().filter(|label| !label.text.is_empty()) {
            frame.texts.push(
                TextPrimitive::new(
                    label.text.clone(),
                    label.anchor.x,
                    label.anchor.y,
                    label_font,
                    config.axis_label_color,
                    TextHAlign::Left,
                )
                .with_rotation_deg(label.rotation_deg),
            );
        }

        for tick in &layout.tick_labels {
            frame.texts.push(TextPrimitive::new(
                tick.text.clone(),
                tick.anchor.x,
                tick.anchor.y,
                label_font,
                config.axis_label_color,
                TextHAlign::Left,
            ));
        }

        frame
    }
}

fn push_rounded_rect(frame: &mut RenderFrame, rect: Rect, color: Color, corner_radius: f64) {
    if rect.width() <= 0.0 || rect.height() <= 0.0 {
        return;
    }
    frame.rects.push(
        RectPrimitive::new(rect.left, rect.top, rect.width(), rect.height(), color)
            .with_corner_radius(corner_radius),
    );
}
