//! Text measurement boundary used by scale and layout computation.
//!
//! Axis reservations depend on rendered label sizes, but shaping belongs to the
//! host. Layout code therefore talks to a small [`TextMeasurer`] trait that a
//! backend (Pango, a web canvas, a test double) implements.

use serde::{Deserialize, Serialize};

/// Typeface weight requested for a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontWeight {
    Light,
    #[default]
    Regular,
    Bold,
}

/// Font inputs relevant to measurement and drawing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FontSpec {
    pub size_px: f64,
    #[serde(default)]
    pub weight: FontWeight,
}

impl FontSpec {
    #[must_use]
    pub const fn new(size_px: f64) -> Self {
        Self {
            size_px,
            weight: FontWeight::Regular,
        }
    }

    #[must_use]
    pub const fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }
}

/// Pixel extent of a single line of text.
///
/// `height` is the tight glyph-bounds height, not the font's line spacing.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TextExtent {
    pub width: f64,
    pub height: f64,
}

pub trait TextMeasurer {
    /// Measures `text` as a single line.
    fn measure(&self, text: &str, font: FontSpec) -> TextExtent;

    fn text_width(&self, text: &str, font: FontSpec) -> f64 {
        self.measure(text, font).width
    }

    fn text_height(&self, text: &str, font: FontSpec) -> f64 {
        self.measure(text, font).height
    }
}

impl<T: TextMeasurer + ?Sized> TextMeasurer for &T {
    fn measure(&self, text: &str, font: FontSpec) -> TextExtent {
        (**self).measure(text, font)
    }
}

/// Font-free measurer with a fixed advance and glyph height per em.
///
/// The defaults (0.6em advance, 0.7em digit height) are close enough for
/// headless layout and tests; real hosts should supply shaped metrics.
/// Font weight is ignored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeuristicTextMeasurer {
    pub advance_em: f64,
    pub height_em: f64,
}

impl HeuristicTextMeasurer {
    #[must_use]
    pub const fn new(advance_em: f64, height_em: f64) -> Self {
        Self {
            advance_em,
            height_em,
        }
    }
}

impl Default for HeuristicTextMeasurer {
    fn default() -> Self {
        Self::new(0.6, 0.7)
    }
}

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, font: FontSpec) -> TextExtent {
        let glyphs = text.chars().count();
        if glyphs == 0 {
            return TextExtent::default();
        }
        TextExtent {
            width: self.advance_em * font.size_px * glyphs as f64,
            height: self.height_em * font.size_px,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heuristic_width_scales_with_glyph_count() {
        let measurer = HeuristicTextMeasurer::new(0.5, 1.0);
        let font = FontSpec::new(10.0);
        assert_eq!(measurer.text_width("abcd", font), 20.0);
        assert_eq!(measurer.text_height("abcd", font), 10.0);
    }

    #[test]
    fn empty_text_has_no_extent() {
        let measurer = HeuristicTextMeasurer::default();
        assert_eq!(
            measurer.measure("", FontSpec::new(12.0)),
            TextExtent::default()
        );
    }
}
