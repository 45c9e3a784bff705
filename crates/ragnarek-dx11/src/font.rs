//! Metric-only font atlas.
//!
//! No glyph bitmaps are rasterised: every character advances by a fixed
//! fraction of the pixel size and samples the white texture, so layout is
//! exact and text shows as solid blocks.

use ragnarek_core::{FontAtlas, GlyphInfo, TextureId, Vec2};

const ADVANCE: f32 = 0.55;

#[derive(Debug, Clone, Copy, Default)]
pub struct MetricFont;

impl FontAtlas for MetricFont {
    fn glyph(&self, ch: char, size_px: f32) -> Option<GlyphInfo> {
        let w = size_px * ADVANCE;
        // Blank glyphs still advance.
        let size = if ch.is_whitespace() { Vec2::ZERO } else { Vec2::new(w, size_px) };
        Some(GlyphInfo {
            uv_min:    Vec2::ZERO,
            uv_max:    Vec2::ZERO,
            size,
            advance_x: w,
            offset_y:  0.0,
        })
    }
    fn texture(&self) -> TextureId { TextureId::WHITE }
    fn measure(&self, text: &str, size_px: f32) -> f32 {
        text.chars().count() as f32 * size_px * ADVANCE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measure_matches_per_glyph_advance() {
        let f = MetricFont;
        let per_glyph: f32 = "a b".chars().filter_map(|c| f.glyph(c, 20.0)).map(|g| g.advance_x).sum();
        assert_eq!(f.measure("a b", 20.0), per_glyph);
        assert_eq!(f.measure("", 20.0), 0.0);
    }

    #[test]
    fn spaces_have_no_quad() {
        let g = MetricFont.glyph(' ', 12.0);
        assert_eq!(g.map(|g| g.size), Some(Vec2::ZERO));
    }
}
