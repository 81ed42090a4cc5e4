//! Font metrics used to center the placeholder text vertically
//!
//! Follows the canvas convention where `ascent` is negative (above the
//! baseline) and `descent` positive (below it).

use ab_glyph::{Font, PxScale, ScaleFont};

/// Ascent/descent provider for a font at a pixel size
pub trait TextMetrics: std::fmt::Debug + Send + Sync {
    /// Distance from the baseline to the top of the tallest glyphs, `<= 0`
    fn ascent(&self, size: f32) -> f32;
    /// Distance from the baseline to the bottom of descenders, `>= 0`
    fn descent(&self, size: f32) -> f32;

    /// Baseline that puts the text's visual midline on `center_y`
    fn centered_baseline(&self, center_y: f32, size: f32) -> f32 {
        center_y - (self.ascent(size) + self.descent(size)) * 0.5
    }
}

/// Metrics proportional to the text size, tuned for common sans-serif faces
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProportionalMetrics {
    pub ascent_ratio: f32,
    pub descent_ratio: f32,
}

impl Default for ProportionalMetrics {
    fn default() -> Self {
        Self {
            ascent_ratio: -0.928,
            descent_ratio: 0.244,
        }
    }
}

impl TextMetrics for ProportionalMetrics {
    fn ascent(&self, size: f32) -> f32 {
        self.ascent_ratio * size
    }

    fn descent(&self, size: f32) -> f32 {
        self.descent_ratio * size
    }
}

/// Metrics read from an actual font
pub struct GlyphMetrics<F> {
    font: F,
}

impl<F> std::fmt::Debug for GlyphMetrics<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlyphMetrics").finish_non_exhaustive()
    }
}

impl<F: Font> GlyphMetrics<F> {
    pub fn new(font: F) -> Self {
        Self { font }
    }
}

impl GlyphMetrics<ab_glyph::FontVec> {
    /// Load metrics from raw font file bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, ab_glyph::InvalidFont> {
        ab_glyph::FontVec::try_from_vec(bytes).map(Self::new)
    }
}

impl<F: Font + Send + Sync> TextMetrics for GlyphMetrics<F> {
    fn ascent(&self, size: f32) -> f32 {
        // ab_glyph measures upwards as positive
        -self.font.as_scaled(PxScale::from(size)).ascent()
    }

    fn descent(&self, size: f32) -> f32 {
        -self.font.as_scaled(PxScale::from(size)).descent()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proportional_signs_follow_canvas_convention() {
        let m = ProportionalMetrics::default();
        assert!(m.ascent(20.0) < 0.0);
        assert!(m.descent(20.0) > 0.0);
        assert_eq!(m.ascent(0.0), 0.0);
    }

    #[test]
    fn centered_baseline_sits_below_center() {
        let m = ProportionalMetrics::default();
        let baseline = m.centered_baseline(100.0, 40.0);
        // (ascent + descent) = -27.36, half = -13.68
        assert!((baseline - 113.68).abs() < 1e-3);
    }

    #[test]
    fn invalid_font_bytes_are_rejected() {
        assert!(GlyphMetrics::from_bytes(vec![0, 1, 2, 3]).is_err());
    }
}
