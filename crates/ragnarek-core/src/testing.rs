//! Headless helpers shared by the unit tests.

use crate::{
    renderer::{FontAtlas, GlyphInfo},
    Context, MouseButton, TextureId, Ui, Vec2, WindowFlags,
};

/// Every glyph is `ADVANCE` pixels wide and one font size tall.
pub(crate) struct TestFont;

impl TestFont {
    pub(crate) const ADVANCE: f32 = 6.0;
}

impl FontAtlas for TestFont {
    fn glyph(&self, _ch: char, size_px: f32) -> Option<GlyphInfo> {
        Some(GlyphInfo {
            uv_min:    Vec2::ZERO,
            uv_max:    Vec2::ONE,
            size:      Vec2::new(Self::ADVANCE, size_px),
            advance_x: Self::ADVANCE,
            offset_y:  0.0,
        })
    }
    fn texture(&self) -> TextureId { TextureId::FONT }
}

pub(crate) fn context() -> Context {
    let mut ctx = Context::new();
    ctx.set_display_size(Vec2::new(1920.0, 1080.0));
    ctx
}

/// Run one frame inside a fixed, untitled 400×600 window at the origin.
/// Content starts at (0, 0).
pub(crate) fn in_window<R>(ctx: &mut Context, f: impl FnOnce(&mut Ui<'_>) -> R) -> R {
    let mut out = None;
    let _ = ctx.frame(&TestFont, 1.0, |ui| {
        ui.set_next_window_pos(Vec2::ZERO);
        ui.set_next_window_size(Vec2::new(400.0, 600.0));
        ui.begin("test", WindowFlags::NO_MOVE | WindowFlags::NO_TITLE_BAR);
        out = Some(f(ui));
        ui.end();
    });
    out.unwrap_or_else(|| unreachable!("frame closure always runs"))
}

pub(crate) fn move_to(ctx: &mut Context, p: Vec2) {
    ctx.input_mut().set_mouse_pos(p);
}

/// Queue a full click (press + release) at `p` for the next frame.
pub(crate) fn click_at(ctx: &mut Context, p: Vec2) {
    let input = ctx.input_mut();
    input.set_mouse_pos(p);
    input.set_mouse_button(MouseButton::Left, true);
    input.set_mouse_button(MouseButton::Left, false);
}
