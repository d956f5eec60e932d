//! Headless walkthrough of a four-month chart: builds the chart, starts the
//! growth animation after a short delay, pumps a 60 Hz frame clock until the
//! animation settles and prints the final snapshot as JSON.

use std::time::Duration;

use bar_chart_rs::animation::QueuedFrameScheduler;
use bar_chart_rs::core::{HeuristicTextMeasurer, Padding, Viewport};
use bar_chart_rs::render::{Color, NullRenderer};
use bar_chart_rs::{BarChart, BarChartConfig, ChartResult};
use tracing::info;

const FRAME_INTERVAL: Duration = Duration::from_millis(16);
const START_DELAY: Duration = Duration::from_millis(500);

fn main() -> ChartResult<()> {
    let _ = bar_chart_rs::telemetry::init_default_tracing();

    let config =
        BarChartConfig::new(Viewport::new(400, 500)).with_padding(Padding::uniform(50.0));
    let mut chart = BarChart::new(NullRenderer::default(), HeuristicTextMeasurer::default(), config)?;

    let green = Color::from_argb(0xFF55_8A06);
    for (name, value) in [("Jan", 25), ("Feb", 50), ("Mar", 75), ("Apr", 100)] {
        chart.add(name, value, green)?;
    }
    chart.set_y_axis_title(Some("Sales"));
    chart.render()?;

    let mut scheduler = QueuedFrameScheduler::new();
    let mut now = START_DELAY;
    chart.animate_graph(now, &mut scheduler);
    while let Some(generation) = scheduler.take_next() {
        now += FRAME_INTERVAL;
        chart.on_frame(generation, now, &mut scheduler);
        if chart.needs_render() {
            chart.render()?;
        }
    }

    info!(
        frames = chart.recompute_stats().frames_rendered,
        fraction = chart.current_fraction(),
        "animation settled"
    );
    println!("{}", chart.snapshot_json_pretty()?);
    Ok(())
}
