//! Text measurement for single-line widgets.
//!
//! Widgets never rasterise glyphs themselves; they only need to know how wide
//! a run of text is and how tall a line is. [`FontMetrics`] is that seam:
//! [`CosmicMetrics`] shapes with cosmic-text, [`MonoMetrics`] uses a fixed
//! advance per grapheme (terminals, tests).

pub mod cosmic;
pub mod graphemes;

pub use cosmic::CosmicMetrics;
pub use graphemes::{grapheme_count, next_grapheme_boundary, prev_grapheme_boundary};

pub trait FontMetrics {
    /// Nominal font size in pixels.
    fn font_size(&self) -> f32;
    /// Height of one line box in pixels.
    fn line_height(&self) -> f32;
    /// Advance width of `text` laid out on a single line.
    fn text_width(&self, text: &str) -> f32;
}

/// Fixed advance per grapheme cluster.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MonoMetrics {
    pub advance: f32,
    pub line_height: f32,
}

impl MonoMetrics {
    pub fn new(advance: f32, line_height: f32) -> Self {
        Self {
            advance,
            line_height,
        }
    }
}

impl FontMetrics for MonoMetrics {
    fn font_size(&self) -> f32 {
        self.line_height
    }
    fn line_height(&self) -> f32 {
        self.line_height
    }
    fn text_width(&self, text: &str) -> f32 {
        grapheme_count(text) as f32 * self.advance
    }
}
