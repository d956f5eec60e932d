//! Cairo/Pango backend: an offscreen or host-context renderer plus a text
//! measurer that shares its font mapping, so reserved label space matches
//! what gets drawn.

use std::f64::consts::{FRAC_PI_2, PI};

use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;
use tracing::trace;

use crate::core::{FontSpec, FontWeight, TextExtent, TextMeasurer};
use crate::error::{ChartError, ChartResult};
use crate::render::{
    Color, LinePrimitive, RectPrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive,
};

const FONT_FAMILY: &str = "Sans";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub lines_drawn: usize,
    pub rects_drawn: usize,
    pub texts_drawn: usize,
}

/// Renderers that can also paint into a context owned by the host, such as a
/// widget draw callback or a PDF surface.
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()>;
}

/// Renders frames into an owned ARGB image surface.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    clear_color: Color,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidData(format!(
                "cairo surface size must be > 0, got {width}x{height}"
            )));
        }
        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| backend_error("create image surface", err))?;
        Ok(Self {
            surface,
            clear_color: Color::rgb(1.0, 1.0, 1.0),
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    /// Background painted before every frame.
    pub fn set_clear_color(&mut self, color: Color) -> ChartResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    /// Encodes the owned surface as PNG.
    pub fn write_png<W: std::io::Write>(&self, writer: &mut W) -> ChartResult<()> {
        self.surface
            .write_to_png(writer)
            .map_err(|err| ChartError::Backend(format!("encode png: {err}")))
    }

    fn paint(&mut self, context: &Context, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;

        set_source(context, self.clear_color);
        context
            .paint()
            .map_err(|err| backend_error("clear surface", err))?;

        let stats = CairoRenderStats {
            lines_drawn: stroke_lines(context, &frame.lines)?,
            rects_drawn: fill_rects(context, &frame.rects)?,
            texts_drawn: show_texts(context, &frame.texts)?,
        };
        trace!(
            lines = stats.lines_drawn,
            rects = stats.rects_drawn,
            texts = stats.texts_drawn,
            "cairo frame painted"
        );
        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        let context =
            Context::new(&self.surface).map_err(|err| backend_error("create context", err))?;
        self.paint(&context, frame)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()> {
        self.paint(context, frame)
    }
}

/// Measures text with the same Pango font mapping the renderer draws with.
///
/// Width is the logical advance; height is the ink height, so digits report
/// their glyph bounds rather than the font's line spacing.
#[derive(Debug)]
pub struct PangoTextMeasurer {
    context: Context,
}

impl PangoTextMeasurer {
    pub fn new() -> ChartResult<Self> {
        let surface = ImageSurface::create(Format::ARgb32, 1, 1)
            .map_err(|err| backend_error("create measurement surface", err))?;
        let context =
            Context::new(&surface).map_err(|err| backend_error("create measurement context", err))?;
        Ok(Self { context })
    }
}

impl TextMeasurer for PangoTextMeasurer {
    fn measure(&self, text: &str, font: FontSpec) -> TextExtent {
        if text.is_empty() {
            return TextExtent::default();
        }
        let layout = pangocairo::functions::create_layout(&self.context);
        layout.set_font_description(Some(&font_description(font)));
        layout.set_text(text);
        let (ink, logical) = layout.pixel_extents();
        TextExtent {
            width: f64::from(logical.width()),
            height: f64::from(ink.height()),
        }
    }
}

fn stroke_lines(context: &Context, lines: &[LinePrimitive]) -> ChartResult<usize> {
    for line in lines {
        set_source(context, line.color);
        context.set_line_width(line.stroke_width);
        context.move_to(line.x1, line.y1);
        context.line_to(line.x2, line.y2);
        context
            .stroke()
            .map_err(|err| backend_error("stroke line", err))?;
    }
    Ok(lines.len())
}

fn fill_rects(context: &Context, rects: &[RectPrimitive]) -> ChartResult<usize> {
    for rect in rects {
        rounded_rect_path(context, rect);
        set_source(context, rect.fill_color);
        context
            .fill()
            .map_err(|err| backend_error("fill rectangle", err))?;
    }
    Ok(rects.len())
}

/// Texts are anchored at their baseline and rotated around that anchor.
fn show_texts(context: &Context, texts: &[TextPrimitive]) -> ChartResult<usize> {
    for text in texts {
        let layout = pangocairo::functions::create_layout(context);
        layout.set_font_description(Some(&font_description(text.font)));
        layout.set_text(&text.text);

        let (width, _) = layout.pixel_size();
        let width = f64::from(width);
        let dx = match text.h_align {
            TextHAlign::Left => 0.0,
            TextHAlign::Center => -width / 2.0,
            TextHAlign::Right => -width,
        };
        let ascent = f64::from(layout.baseline()) / f64::from(pango::SCALE);

        context
            .save()
            .map_err(|err| backend_error("save context", err))?;
        context.translate(text.x, text.y);
        context.rotate(text.rotation_deg.to_radians());
        set_source(context, text.color);
        context.move_to(dx, -ascent);
        pangocairo::functions::show_layout(context, &layout);
        context
            .restore()
            .map_err(|err| backend_error("restore context", err))?;
    }
    Ok(texts.len())
}

fn font_description(font: FontSpec) -> FontDescription {
    let mut description = FontDescription::new();
    description.set_family(FONT_FAMILY);
    description.set_absolute_size(font.size_px * f64::from(pango::SCALE));
    description.set_weight(match font.weight {
        FontWeight::Light => pango::Weight::Light,
        FontWeight::Regular => pango::Weight::Normal,
        FontWeight::Bold => pango::Weight::Bold,
    });
    description
}

fn set_source(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

/// Corner radius is clamped to half the shorter side.
fn rounded_rect_path(context: &Context, rect: &RectPrimitive) {
    let radius = rect
        .corner_radius
        .min(rect.width / 2.0)
        .min(rect.height / 2.0);
    if radius <= 0.0 {
        context.rectangle(rect.x, rect.y, rect.width, rect.height);
        return;
    }

    let (left, top) = (rect.x, rect.y);
    let (right, bottom) = (rect.x + rect.width, rect.y + rect.height);
    context.new_sub_path();
    context.arc(right - radius, top + radius, radius, -FRAC_PI_2, 0.0);
    context.arc(right - radius, bottom - radius, radius, 0.0, FRAC_PI_2);
    context.arc(left + radius, bottom - radius, radius, FRAC_PI_2, PI);
    context.arc(left + radius, top + radius, radius, PI, 3.0 * FRAC_PI_2);
    context.close_path();
}

fn backend_error(action: &str, err: cairo::Error) -> ChartError {
    ChartError::Backend(format!("cairo failed to {action}: {err}"))
}
