use bar_chart_rs::core::{
    DataEntry, DataSeries, FontSpec, HeuristicTextMeasurer, LayoutConfig, LayoutEngine, Padding,
    ScaleComputer, Viewport,
};
use bar_chart_rs::render::{Color, NullRenderer};
use bar_chart_rs::{BarChart, BarChartConfig};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

const GREEN: Color = Color::rgb(0.33, 0.54, 0.02);

fn series_1k() -> DataSeries {
    (0..1_000)
        .map(|i| DataEntry::new(format!("c{i}"), (i * 37 % 1_000) as i64 - 100, GREEN))
        .collect()
}

fn layout_config() -> LayoutConfig {
    LayoutConfig {
        padding: Padding::uniform(20.0),
        x_axis_label_top_padding: 4.0,
        y_axis_label_right_padding: 6.0,
        y_axis_title_padding: 6.0,
        axis_stroke_width: 2.0,
        bar_padding: 1.0,
        border_width: 1.0,
    }
}

fn bench_scale_compute_1k(c: &mut Criterion) {
    let series = series_1k();
    let measurer = HeuristicTextMeasurer::default();
    let computer = ScaleComputer::new(&measurer, FontSpec::new(12.0));

    c.bench_function("scale_compute_1k", |b| {
        b.iter(|| {
            let _ = computer.compute_for_surface(black_box(&series), black_box(1_080.0), 24.0);
        })
    });
}

fn bench_layout_1k(c: &mut Criterion) {
    let series = series_1k();
    let measurer = HeuristicTextMeasurer::default();
    let scale = ScaleComputer::new(&measurer, FontSpec::new(12.0)).compute_for_surface(
        &series, 1_080.0, 24.0,
    );
    let config = layout_config();

    c.bench_function("layout_1k", |b| {
        b.iter(|| {
            let _ = LayoutEngine::layout(
                black_box(&series),
                black_box(&scale),
                black_box(Viewport::new(1920, 1080)),
                &config,
                None,
            );
        })
    });
}

fn bench_bars_at_1k(c: &mut Criterion) {
    let series = series_1k();
    let measurer = HeuristicTextMeasurer::default();
    let scale = ScaleComputer::new(&measurer, FontSpec::new(12.0)).compute_for_surface(
        &series, 1_080.0, 24.0,
    );
    let layout = LayoutEngine::layout(
        &series,
        &scale,
        Viewport::new(1920, 1080),
        &layout_config(),
        None,
    );

    c.bench_function("bars_at_1k", |b| {
        b.iter(|| {
            let _ = layout.bars_at(black_box(0.63));
        })
    });
}

fn bench_chart_frame_1k(c: &mut Criterion) {
    let config = BarChartConfig::new(Viewport::new(1920, 1080)).with_padding(Padding::uniform(20.0));
    let mut chart = BarChart::new(
        NullRenderer::default(),
        HeuristicTextMeasurer::default(),
        config,
    )
    .expect("chart init");
    for entry in series_1k().iter() {
        chart
            .add(entry.name.clone(), entry.value, entry.fill_color)
            .expect("add entry");
    }

    c.bench_function("chart_frame_1k", |b| {
        b.iter(|| {
            chart.set_current_fraction(black_box(0.5));
            chart.render().expect("render");
        })
    });
}

criterion_group!(
    benches,
    bench_scale_compute_1k,
    bench_layout_1k,
    bench_bars_at_1k,
    bench_chart_frame_1k
);
criterion_main!(benches);
