use approx::assert_relative_eq;
use bar_chart_rs::core::{
    AxisScale, DataEntry, DataSeries, FontSpec, HeuristicTextMeasurer, ScaleComputer, TextExtent,
    TextMeasurer,
};
use bar_chart_rs::render::Color;

const GREEN: Color = Color::rgb(0.33, 0.54, 0.02);

fn series(values: &[(&str, i64)]) -> DataSeries {
    values
        .iter()
        .map(|(name, value)| DataEntry::new(*name, *value, GREEN))
        .collect()
}

fn quarter_series() -> DataSeries {
    series(&[("Jan", 25), ("Feb", 50), ("Mar", 75), ("Apr", 100)])
}

/// 6px advance per glyph and a 35px digit height at 10px.
fn measurer() -> HeuristicTextMeasurer {
    HeuristicTextMeasurer::new(0.6, 3.5)
}

/// Capital `W` is four times wider than any other glyph.
struct WideCapitalMeasurer;

impl TextMeasurer for WideCapitalMeasurer {
    fn measure(&self, text: &str, _font: FontSpec) -> TextExtent {
        let width = text
            .chars()
            .map(|ch| if ch == 'W' { 20.0 } else { 5.0 })
            .sum();
        TextExtent {
            width,
            height: 10.0,
        }
    }
}

#[test]
fn quarter_scenario_produces_even_ticks() {
    let measurer = measurer();
    let computer = ScaleComputer::new(&measurer, FontSpec::new(10.0));

    let scale = computer.compute(&quarter_series(), 500.0, 35.0, 22.0);

    assert_eq!(scale.min, 0);
    assert_eq!(scale.max, 100);
    assert_eq!(scale.tick_values.as_slice(), &[0, 25, 50, 75, 100]);
    assert_relative_eq!(scale.max_category_label_width, 18.0);
    assert_relative_eq!(scale.max_y_label_width, 18.0);
    assert_relative_eq!(scale.label_line_height, 35.0);
}

#[test]
fn surface_variant_reserves_current_category_width() {
    let measurer = measurer();
    let computer = ScaleComputer::new(&measurer, FontSpec::new(10.0));

    let explicit = computer.compute(&quarter_series(), 500.0, 35.0, 18.0 + 4.0);
    let derived = computer.compute_for_surface(&quarter_series(), 500.0, 4.0);

    assert_eq!(explicit, derived);
}

#[test]
fn surface_too_small_emits_no_ticks_but_keeps_domain() {
    let measurer = measurer();
    let computer = ScaleComputer::new(&measurer, FontSpec::new(10.0));

    let scale = computer.compute(&quarter_series(), 150.0, 35.0, 22.0);

    assert!(scale.tick_values.is_empty());
    assert!(!scale.has_ticks());
    assert_eq!((scale.min, scale.max), (0, 100));
}

#[test]
fn negative_value_lowers_min_and_widens_label_column() {
    let measurer = measurer();
    let computer = ScaleComputer::new(&measurer, FontSpec::new(10.0));
    let mut data = quarter_series();
    data.add(DataEntry::new("May", -1000, GREEN));

    let scale = computer.compute(&data, 500.0, 35.0, 22.0);

    assert_eq!(scale.min, -1000);
    assert_eq!(scale.tick_values.first(), Some(&-1000));
    assert_eq!(scale.tick_values.last(), Some(&100));
    // "-1000" is wider than "100".
    assert_relative_eq!(scale.max_y_label_width, 30.0);
}

#[test]
fn final_tick_is_forced_to_max_even_when_step_is_uneven() {
    let measurer = measurer();
    let computer = ScaleComputer::new(&measurer, FontSpec::new(10.0));

    // (1000 - 22) / 70 - 1 = 12.97 -> 12 ticks, step = floor(100 / 11) = 9.
    let scale = computer.compute(&quarter_series(), 1000.0, 35.0, 22.0);

    assert_eq!(scale.tick_values.len(), 12);
    assert_eq!(scale.tick_values[1], 9);
    assert_eq!(scale.tick_values[10], 90);
    assert_eq!(scale.tick_values[11], 100);
}

#[test]
fn widest_category_is_chosen_by_character_count() {
    let computer = ScaleComputer::new(&WideCapitalMeasurer, FontSpec::new(10.0));
    let data = series(&[("WWW", 1), ("iiii", 2)]);

    // "WWW" renders at 60px but "iiii" has more characters.
    assert_relative_eq!(computer.max_category_label_width(&data), 20.0);
}

#[test]
fn first_of_equally_long_categories_is_measured() {
    let computer = ScaleComputer::new(&WideCapitalMeasurer, FontSpec::new(10.0));
    let data = series(&[("abc", 1), ("WWW", 2)]);

    assert_relative_eq!(computer.max_category_label_width(&data), 15.0);
}

#[test]
fn empty_series_yields_empty_scale() {
    let measurer = measurer();
    let computer = ScaleComputer::new(&measurer, FontSpec::new(10.0));

    let scale = computer.compute(&DataSeries::new(), 500.0, 35.0, 0.0);

    assert_eq!(scale, AxisScale::empty());
}
