use std::time::Duration;

use bar_chart_rs::animation::{AnimationController, AnimationFrame, Easing};
use bar_chart_rs::core::{
    AxisScale, DataEntry, DataSeries, LayoutConfig, LayoutEngine, Viewport, tick_values,
};
use bar_chart_rs::render::Color;
use proptest::prelude::*;

const GREEN: Color = Color::rgb(0.33, 0.54, 0.02);

fn series_of(values: &[i64]) -> DataSeries {
    values
        .iter()
        .enumerate()
        .map(|(i, value)| DataEntry::new(format!("c{i}"), *value, GREEN))
        .collect()
}

fn scale(min: i64, max: i64) -> AxisScale {
    AxisScale {
        min,
        max,
        max_y_label_width: 20.0,
        max_category_label_width: 12.0,
        ..AxisScale::empty()
    }
}

proptest! {
    #[test]
    fn ticks_are_monotone_and_pinned_to_the_domain(
        min in -1_000_000i64..=0,
        span in 1i64..2_000_000,
        count in 3usize..64
    ) {
        let max = min + span;
        let ticks = tick_values(min, max, count);

        prop_assert_eq!(ticks.len(), count);
        prop_assert_eq!(ticks.first().copied(), Some(min));
        prop_assert_eq!(ticks.last().copied(), Some(max));
        prop_assert!(ticks.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn slots_split_the_plot_width_evenly(
        count in 1usize..=1000,
        width in 200u32..4000,
        bar_padding in 0.0f64..4.0
    ) {
        let series = series_of(&vec![1; count]);
        let config = LayoutConfig {
            bar_padding,
            ..LayoutConfig::default()
        };
        let layout = LayoutEngine::layout(
            &series,
            &scale(0, 1),
            Viewport::new(width, 300),
            &config,
            None,
        );

        let available = f64::from(width) - layout.y_axis_x - bar_padding;
        prop_assert_eq!(layout.slots.len(), count);
        prop_assert!((layout.slot_width * count as f64 - available).abs() <= 1e-6);
        for slot in &layout.slots {
            prop_assert!((slot.width() - (layout.slot_width - bar_padding)).abs() <= 1e-9);
        }
    }

    #[test]
    fn bar_height_tracks_fraction_of_value(
        value in 1i64..1_000_000,
        headroom in 0i64..1_000_000,
        fraction in 0.0f64..=1.0
    ) {
        let max = value + headroom;
        let series = series_of(&[value, max]);
        let layout = LayoutEngine::layout(
            &series,
            &scale(0, max),
            Viewport::new(800, 600),
            &LayoutConfig::default(),
            None,
        );
        let baseline = layout.baseline;

        let start = layout.bars_at(0.0);
        prop_assert!(start.iter().all(|bar| bar.border.height() == 0.0));

        let full = layout.bars_at(1.0);
        let expected = baseline * value as f64 / max as f64;
        prop_assert!((full[0].border.height() - expected).abs() <= 1e-6 * baseline);
        prop_assert!((full[1].border.height() - baseline).abs() <= 1e-6 * baseline);

        let partial = layout.bars_at(fraction);
        prop_assert!(partial[0].border.height() <= full[0].border.height() + 1e-9);
        prop_assert!((partial[0].border.height() - expected * fraction).abs() <= 1e-6 * baseline);
    }

    #[test]
    fn bar_height_is_monotone_in_fraction(
        value in 1i64..10_000,
        a in 0.0f64..=1.0,
        b in 0.0f64..=1.0
    ) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let series = series_of(&[value]);
        let layout = LayoutEngine::layout(
            &series,
            &scale(0, value),
            Viewport::new(640, 480),
            &LayoutConfig::default(),
            None,
        );

        let low_height = layout.bars_at(low)[0].border.height();
        let high_height = layout.bars_at(high)[0].border.height();
        prop_assert!(low_height <= high_height + 1e-9);
        prop_assert!(layout.bars_at(low)[0].fill.height() >= 0.0);
    }

    #[test]
    fn animation_fraction_never_decreases(
        duration_ms in 1u64..2_000,
        steps in proptest::collection::vec(0u64..120, 1..80)
    ) {
        let mut controller = AnimationController::new(Duration::from_millis(duration_ms), Easing::default());
        let generation = controller.start(Duration::ZERO);

        let mut now = 0;
        let mut previous = 0.0;
        for step in steps {
            now += step;
            match controller.on_frame(generation, Duration::from_millis(now)) {
                AnimationFrame::Advanced { fraction, finished } => {
                    prop_assert!(fraction >= previous);
                    prop_assert!((0.0..=1.0).contains(&fraction));
                    prop_assert_eq!(finished, now >= duration_ms);
                    if finished {
                        prop_assert_eq!(fraction, 1.0);
                    }
                    previous = fraction;
                }
                AnimationFrame::Idle => prop_assert!(now >= duration_ms),
                AnimationFrame::Stale => prop_assert!(false, "single run cannot go stale"),
            }
        }
    }
}
