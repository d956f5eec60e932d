use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::animation::Easing;
use crate::core::{FontSpec, FontWeight, LayoutConfig, Padding, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Construction-time chart configuration.
///
/// Serializable so hosts can keep chart themes in JSON. Every field except
/// `viewport` has a default, so partial documents load.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarChartConfig {
    pub viewport: Viewport,
    #[serde(default)]
    pub padding: Padding,
    #[serde(default = "default_axis_label_color")]
    pub axis_label_color: Color,
    #[serde(default = "default_axis_label_font_size_px")]
    pub axis_label_font_size_px: f64,
    #[serde(default = "default_axis_line_color")]
    pub axis_line_color: Color,
    #[serde(default = "default_axis_line_width")]
    pub axis_line_width: f64,
    #[serde(default = "default_x_axis_label_top_padding")]
    pub x_axis_label_top_padding: f64,
    #[serde(default = "default_y_axis_label_right_padding")]
    pub y_axis_label_right_padding: f64,
    #[serde(default = "default_y_axis_title_padding")]
    pub y_axis_title_padding: f64,
    #[serde(default = "default_border_width")]
    pub border_width: f64,
    #[serde(default = "default_bar_corner_radius")]
    pub bar_corner_radius: f64,
    #[serde(default = "default_bar_padding")]
    pub bar_padding: f64,
    #[serde(default = "default_animation_duration_ms")]
    pub animation_duration_ms: u64,
    #[serde(default)]
    pub easing: Easing,
}

impl BarChartConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            padding: Padding::default(),
            axis_label_color: default_axis_label_color(),
            axis_label_font_size_px: default_axis_label_font_size_px(),
            axis_line_color: default_axis_line_color(),
            axis_line_width: default_axis_line_width(),
            x_axis_label_top_padding: default_x_axis_label_top_padding(),
            y_axis_label_right_padding: default_y_axis_label_right_padding(),
            y_axis_title_padding: default_y_axis_title_padding(),
            border_width: default_border_width(),
            bar_corner_radius: default_bar_corner_radius(),
            bar_padding: default_bar_padding(),
            animation_duration_ms: default_animation_duration_ms(),
            easing: Easing::default(),
        }
    }

    #[must_use]
    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    #[must_use]
    pub fn with_axis_label_style(mut self, color: Color, font_size_px: f64) -> Self {
        self.axis_label_color = color;
        self.axis_label_font_size_px = font_size_px;
        self
    }

    #[must_use]
    pub fn with_axis_line_style(mut self, color: Color, width: f64) -> Self {
        self.axis_line_color = color;
        self.axis_line_width = width;
        self
    }

    /// Sets X-axis label top, Y-axis label right and Y-axis title paddings.
    #[must_use]
    pub fn with_axis_label_paddings(
        mut self,
        x_axis_label_top: f64,
        y_axis_label_right: f64,
        y_axis_title: f64,
    ) -> Self {
        self.x_axis_label_top_padding = x_axis_label_top;
        self.y_axis_label_right_padding = y_axis_label_right;
        self.y_axis_title_padding = y_axis_title;
        self
    }

    #[must_use]
    pub fn with_bar_style(mut self, bar_padding: f64, border_width: f64, corner_radius: f64) -> Self {
        self.bar_padding = bar_padding;
        self.border_width = border_width;
        self.bar_corner_radius = corner_radius;
        self
    }

    #[must_use]
    pub fn with_animation(mut self, duration_ms: u64, easing: Easing) -> Self {
        self.animation_duration_ms = duration_ms;
        self.easing = easing;
        self
    }

    #[must_use]
    pub fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_duration_ms)
    }

    #[must_use]
    pub fn label_font(&self) -> FontSpec {
        FontSpec::new(self.axis_label_font_size_px).with_weight(FontWeight::Light)
    }

    #[must_use]
    pub fn title_font(&self) -> FontSpec {
        FontSpec::new(self.axis_label_font_size_px).with_weight(FontWeight::Bold)
    }

    #[must_use]
    pub fn layout_config(&self) -> LayoutConfig {
        LayoutConfig {
            padding: self.padding,
            x_axis_label_top_padding: self.x_axis_label_top_padding,
            y_axis_label_right_padding: self.y_axis_label_right_padding,
            y_axis_title_padding: self.y_axis_title_padding,
            axis_stroke_width: self.axis_line_width,
            bar_padding: self.bar_padding,
            border_width: self.border_width,
        }
    }

    /// Space kept under the category labels when sizing the tick column.
    #[must_use]
    pub fn reserved_below_labels(&self) -> f64 {
        self.x_axis_label_top_padding + self.padding.bottom
    }

    /// Rejects non-finite values and invalid styles; clamps negative spacing
    /// to zero.
    pub fn sanitized(self) -> ChartResult<Self> {
        if !self.padding.is_finite() {
            return Err(ChartError::InvalidData(
                "padding must be finite".to_owned(),
            ));
        }
        self.axis_label_color.validate()?;
        self.axis_line_color.validate()?;
        self.easing.validate()?;
        if !self.axis_label_font_size_px.is_finite() || self.axis_label_font_size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "axis label font size must be finite and > 0".to_owned(),
            ));
        }
        if !self.axis_line_width.is_finite() || self.axis_line_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "axis line width must be finite and > 0".to_owned(),
            ));
        }

        let mut config = self;
        let padding = config.padding.clamped_non_negative();
        if padding != config.padding {
            warn!(padding = ?config.padding, "negative padding clamped to zero");
            config.padding = padding;
        }
        for (name, value) in [
            ("x_axis_label_top_padding", &mut config.x_axis_label_top_padding),
            ("y_axis_label_right_padding", &mut config.y_axis_label_right_padding),
            ("y_axis_title_padding", &mut config.y_axis_title_padding),
            ("border_width", &mut config.border_width),
            ("bar_corner_radius", &mut config.bar_corner_radius),
            ("bar_padding", &mut config.bar_padding),
        ] {
            *value = clamp_spacing(name, *value)?;
        }
        Ok(config)
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse chart config: {e}")))
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize chart config: {e}")))
    }
}

fn clamp_spacing(name: &str, value: f64) -> ChartResult<f64> {
    if !value.is_finite() {
        return Err(ChartError::InvalidData(format!("{name} must be finite")));
    }
    if value < 0.0 {
        warn!(field = name, value, "negative spacing clamped to zero");
        return Ok(0.0);
    }
    Ok(value)
}

fn default_axis_label_color() -> Color {
    Color::from_argb(0xFF66_6666)
}

fn default_axis_label_font_size_px() -> f64 {
    12.0
}

fn default_axis_line_color() -> Color {
    Color::from_argb(0xFF33_3333)
}

fn default_axis_line_width() -> f64 {
    2.0
}

fn default_x_axis_label_top_padding() -> f64 {
    4.0
}

fn default_y_axis_label_right_padding() -> f64 {
    6.0
}

fn default_y_axis_title_padding() -> f64 {
    6.0
}

fn default_border_width() -> f64 {
    2.0
}

fn default_bar_corner_radius() -> f64 {
    3.0
}

fn default_bar_padding() -> f64 {
    8.0
}

fn default_animation_duration_ms() -> u64 {
    800
}
