//! Free-standing text placement.

use crate::{ui::Ui, Color, Rect, Vec2};

/// Draw `text` aligned inside `rect` without touching the layout.
/// `align` runs from (0, 0) top-left to (1, 1) bottom-right; text larger
/// than the rectangle starts at its top-left corner and is clipped.
pub fn text_center(ui: &mut Ui<'_>, rect: Rect, color: Color, text: &str, align: Vec2) {
    if ui.ctx.current_window().is_none() { return; }
    let slack = rect.size() - ui.text_size(text);
    let pos   = Vec2::new(rect.min.x + slack.x * align.x, rect.min.y + slack.y * align.y).max(rect.min);

    ui.ctx.draw_list.push_clip_rect(rect);
    ui.draw_text(text, pos, color);
    ui.ctx.draw_list.pop_clip_rect();
}

#[cfg(test)]
mod tests {
    use crate::testing::{context, in_window, TestFont};
    use crate::{Color, Rect, Vec2};

    #[test]
    fn centred_inside_rect() {
        let mut ctx = context();
        let (first, cursor) = in_window(&mut ctx, |ui| {
            let before = ui.draw_list().vtx_buf.len();
            ui.text_center(Rect::new(Vec2::ZERO, Vec2::new(100.0, 40.0)), Color::WHITE, "ab", Vec2::splat(0.5));
            (Vec2::from(ui.draw_list().vtx_buf[before].pos), ui.cursor_pos())
        });
        let w = 2.0 * TestFont::ADVANCE;
        assert_eq!(first, Vec2::new((100.0 - w) * 0.5, (40.0 - 12.0) * 0.5));
        assert_eq!(cursor, Vec2::ZERO, "layout is untouched");
    }

    #[test]
    fn oversized_text_starts_at_the_corner() {
        let mut ctx = context();
        let first = in_window(&mut ctx, |ui| {
            let before = ui.draw_list().vtx_buf.len();
            ui.text_center(Rect::new(Vec2::splat(10.0), Vec2::splat(14.0)), Color::WHITE, "wide", Vec2::splat(0.5));
            Vec2::from(ui.draw_list().vtx_buf[before].pos)
        });
        assert_eq!(first, Vec2::splat(10.0));
    }

    #[test]
    fn outside_a_window_nothing_is_drawn() {
        let mut ctx = context();
        let frame = ctx.frame(&TestFont, 1.0, |ui| {
            ui.text_center(Rect::new(Vec2::ZERO, Vec2::splat(50.0)), Color::WHITE, "x", Vec2::ZERO);
        });
        assert!(frame.draw_list.is_empty());
    }
}
