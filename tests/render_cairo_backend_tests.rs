#![cfg(feature = "cairo-backend")]

use bar_chart_rs::core::{FontSpec, TextMeasurer, Viewport};
use bar_chart_rs::render::{CairoContextRenderer, CairoRenderer, Color, PangoTextMeasurer};
use bar_chart_rs::{BarChart, BarChartConfig, ChartError};
use cairo::{Context, Format, ImageSurface};

const GREEN: Color = Color::rgb(0.33, 0.54, 0.02);

fn quarter_chart(width: u32, height: u32) -> BarChart<CairoRenderer, PangoTextMeasurer> {
    let renderer = CairoRenderer::new(width as i32, height as i32).expect("renderer");
    let measurer = PangoTextMeasurer::new().expect("measurer");
    let config = BarChartConfig::new(Viewport::new(width, height));
    let mut chart = BarChart::new(renderer, measurer, config).expect("chart init");
    for (name, value) in [("Jan", 25), ("Feb", 50), ("Mar", 75), ("Apr", 100)] {
        chart.add(name, value, GREEN).expect("add entry");
    }
    chart
}

#[test]
fn cairo_renderer_rejects_invalid_surface_size() {
    let err = CairoRenderer::new(0, 480).expect_err("invalid width must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn pango_measurer_reports_positive_extents() {
    let measurer = PangoTextMeasurer::new().expect("measurer");
    let font = FontSpec::new(12.0);

    let narrow = measurer.measure("1", font);
    let wide = measurer.measure("1000", font);

    assert!(narrow.width > 0.0);
    assert!(wide.width > narrow.width);
    assert!(measurer.text_height("888", font) > 0.0);
    assert_eq!(measurer.text_width("", font), 0.0);
}

#[test]
fn cairo_renderer_draws_axes_bars_and_labels() {
    let mut chart = quarter_chart(400, 500);
    chart.set_y_axis_title(Some("Sales"));
    chart.set_current_fraction(1.0);

    chart.render().expect("render");
    let renderer = chart.into_renderer();
    let stats = renderer.last_stats();

    assert_eq!(stats.lines_drawn, 2);
    assert_eq!(stats.rects_drawn, 8);
    // Title plus four category labels, ticks depend on font metrics.
    assert!(stats.texts_drawn >= 5);
}

#[test]
fn cairo_renderer_can_draw_on_external_context() {
    let mut chart = quarter_chart(320, 240);
    chart.set_current_fraction(0.5);
    let frame = chart.build_render_frame();
    let mut renderer = chart.into_renderer();

    let surface = ImageSurface::create(Format::ARgb32, 320, 240).expect("surface");
    let context = Context::new(&surface).expect("context");
    renderer
        .render_on_cairo_context(&context, &frame)
        .expect("render on context");

    assert_eq!(renderer.last_stats().lines_drawn, 2);
    assert_eq!(renderer.last_stats().rects_drawn, 8);
}

#[test]
fn rendered_surface_encodes_as_png() {
    let mut chart = quarter_chart(200, 160);
    chart.set_current_fraction(1.0);
    chart.render().expect("render");

    let mut png = Vec::new();
    chart
        .renderer()
        .write_png(&mut png)
        .expect("png encoding");

    assert!(png.starts_with(&[0x89, b'P', b'N', b'G']));
}
