//! What a backend needs from the engine, and what it must provide back.

use crate::draw_list::{DrawList, TextureId};
use crate::{Color, Vec2};

/// Output of one [`Context::frame`](crate::Context::frame): the merged main
/// and popup layers plus the viewport they were laid out for.
pub struct RenderFrame<'a> {
    pub draw_list:    &'a DrawList,
    pub display_size: Vec2,
    pub scale_factor: f32,
}

impl RenderFrame<'_> {
    /// Nothing to submit this frame.
    pub fn is_empty(&self) -> bool {
        self.draw_list.cmd_buf.iter().all(|c| c.elem_count == 0)
    }
}

/// Placement of one glyph inside the font texture.
#[derive(Debug, Clone, Copy)]
pub struct GlyphInfo {
    pub uv_min:    Vec2,
    pub uv_max:    Vec2,
    /// Quad size in pixels at the requested font size.
    pub size:      Vec2,
    pub advance_x: f32,
    /// Distance from the top of the line to the top of the quad.
    pub offset_y:  f32,
}

/// Supplies glyph metrics and the texture they live in. Shared with the
/// engine by reference for the duration of a frame.
pub trait FontAtlas: Send + Sync {
    /// `None` when the atlas has no glyph for `ch`.
    fn glyph(&self, ch: char, size_px: f32) -> Option<GlyphInfo>;

    fn texture(&self) -> TextureId;

    /// Width of `text` on one line. Missing glyphs count a quarter em.
    fn measure(&self, text: &str, size_px: f32) -> f32 {
        text.chars()
            .map(|c| self.glyph(c, size_px).map_or(size_px * 0.25, |g| g.advance_x))
            .sum()
    }
}

/// A GPU backend able to draw [`RenderFrame`]s.
///
/// `begin_frame` binds and clears the target, `render` draws, `end_frame`
/// finishes whatever the backend owns (a host that presents the swap chain
/// itself may leave it empty).
pub trait Renderer {
    fn begin_frame(&mut self, clear: Color);
    fn render(&mut self, frame: RenderFrame<'_>);
    fn end_frame(&mut self);

    /// Upload tightly packed RGBA8 pixels. Ids below 2 are reserved for the
    /// white and font textures.
    fn create_texture(&mut self, width: u32, height: u32, rgba: &[u8]) -> TextureId;
    fn destroy_texture(&mut self, id: TextureId);

    fn display_size(&self) -> Vec2;
    fn scale_factor(&self) -> f32 { 1.0 }
    fn font_atlas(&self) -> &dyn FontAtlas;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TestFont;

    #[test]
    fn missing_glyphs_measure_a_quarter_em() {
        struct Sparse;
        impl FontAtlas for Sparse {
            fn glyph(&self, ch: char, size_px: f32) -> Option<GlyphInfo> {
                TestFont.glyph(ch, size_px).filter(|_| ch != '?')
            }
            fn texture(&self) -> TextureId { TextureId::FONT }
        }
        assert_eq!(Sparse.measure("ab?", 16.0), TestFont::ADVANCE * 2.0 + 4.0);
    }

    #[test]
    fn empty_frames_have_no_elements() {
        let dl = DrawList::default();
        let frame = RenderFrame { draw_list: &dl, display_size: Vec2::ZERO, scale_factor: 1.0 };
        assert!(frame.is_empty());
    }
}
