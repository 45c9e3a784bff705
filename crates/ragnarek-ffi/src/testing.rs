//! Headless frame helpers for the boundary tests.

use ragnarek_core::{Context, FontAtlas, GlyphInfo, TextureId, Vec2};

pub(crate) struct TestFont;

impl FontAtlas for TestFont {
    fn glyph(&self, _ch: char, size_px: f32) -> Option<GlyphInfo> {
        Some(GlyphInfo {
            uv_min:    Vec2::ZERO,
            uv_max:    Vec2::ONE,
            size:      Vec2::new(6.0, size_px),
            advance_x: 6.0,
            offset_y:  0.0,
        })
    }
    fn texture(&self) -> TextureId { TextureId::FONT }
}

pub(crate) fn context() -> Context {
    let mut ctx = Context::new();
    ctx.set_display_size(Vec2::new(800.0, 600.0));
    ctx
}
