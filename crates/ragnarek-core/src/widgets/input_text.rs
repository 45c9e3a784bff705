//! Single-line text field with a placeholder hint.

use crate::{
    id::parse_label,
    input::{Key, MouseButton},
    style::StyleColor,
    ui::Ui,
    Rect, Vec2,
};

/// Frames per caret blink phase.
const BLINK_FRAMES: u64 = 30;

/// Returns `true` when `buf` was edited this frame.
pub fn input_text_hint(ui: &mut Ui<'_>, label: &str, hint: &str, buf: &mut String, size: Vec2) -> bool {
    let (_, id_src) = parse_label(label);
    let id = ui.ctx.make_id(id_src);

    let fs = ui.font_size();
    let fp = ui.ctx.style.frame_padding;
    let w  = if size.x > 0.0 { size.x } else { ui.available_width() };
    let h  = if size.y > 0.0 { size.y } else { fs + fp.1 * 2.0 };
    let Some(pos) = ui.layout_next(Vec2::new(w, h)) else { return false };
    let rect = Rect::from_min_size(pos, Vec2::new(w, h));

    let (hovered, _, _) = ui.ctx.button_behavior(id, rect);
    if ui.ctx.focus_item == Some(id)
        && ui.ctx.input.mouse_clicked(MouseButton::Left)
        && !rect.contains(ui.ctx.input.mouse_pos)
    {
        ui.ctx.focus_item = None;
    }
    let focused = ui.ctx.focus_item == Some(id);

    let mut changed = false;
    if focused {
        let input = &ui.ctx.input;
        if !input.text_input.is_empty() {
            buf.push_str(&input.text_input);
            changed = true;
        }
        if input.key_pressed(Key::Backspace) && buf.pop().is_some() {
            changed = true;
        }
        if input.key_pressed(Key::Enter) || input.key_pressed(Key::Escape) {
            ui.ctx.focus_item = None;
        }
    }

    // ── Drawing ───────────────────────────────────────────────────────────────

    let bg = if focused      { ui.color(StyleColor::FrameBgActive) }
             else if hovered { ui.color(StyleColor::FrameBgHovered) }
             else            { ui.color(StyleColor::FrameBg) };
    let rounding = ui.ctx.style.frame_rounding;
    ui.ctx.draw_list.filled_rect(rect, rounding, bg);
    if focused {
        let accent = ui.color(StyleColor::Accent);
        ui.ctx.draw_list.rect_outline(rect, 1.0, accent);
    }

    let text_pos = Vec2::new(rect.min.x + fp.0, rect.min.y + (h - fs) * 0.5);
    ui.ctx.draw_list.push_clip_rect(rect);
    if buf.is_empty() {
        let tc = ui.color(StyleColor::TextInactive);
        ui.draw_text(hint, text_pos, tc);
    } else {
        let tc = ui.color(StyleColor::Text);
        ui.draw_text(buf, text_pos, tc);
    }
    if focused && (ui.ctx.input.frame_count / BLINK_FRAMES) % 2 == 0 {
        let x  = (text_pos.x + ui.text_width(buf)).min(rect.max.x - fp.0);
        let cc = ui.color(StyleColor::Text);
        ui.ctx.draw_list.line(Vec2::new(x, text_pos.y), Vec2::new(x, text_pos.y + fs), 1.0, cc);
    }
    ui.ctx.draw_list.pop_clip_rect();
    changed
}

#[cfg(test)]
mod tests {
    use crate::testing::{click_at, context, in_window};
    use crate::{Context, Key, Vec2};

    fn draw(ctx: &mut Context, buf: &mut String) -> bool {
        in_window(ctx, |ui| ui.input_text_hint("##search", "Search", buf, Vec2::ZERO))
    }

    #[test]
    fn typing_requires_focus() {
        let mut ctx = context();
        let mut buf = String::new();
        ctx.input_mut().add_text('a');
        assert!(!draw(&mut ctx, &mut buf));
        assert!(buf.is_empty());

        click_at(&mut ctx, Vec2::new(50.0, 10.0));
        draw(&mut ctx, &mut buf);
        ctx.input_mut().add_text('a');
        ctx.input_mut().add_text('k');
        assert!(draw(&mut ctx, &mut buf));
        assert_eq!(buf, "ak");
    }

    #[test]
    fn backspace_and_enter() {
        let mut ctx = context();
        let mut buf = String::from("awp");
        click_at(&mut ctx, Vec2::new(50.0, 10.0));
        draw(&mut ctx, &mut buf);

        ctx.input_mut().set_key(Key::Backspace, true);
        assert!(draw(&mut ctx, &mut buf));
        assert_eq!(buf, "aw");

        ctx.input_mut().set_key(Key::Enter, true);
        draw(&mut ctx, &mut buf);
        ctx.input_mut().add_text('x');
        assert!(!draw(&mut ctx, &mut buf));
        assert_eq!(buf, "aw");
    }

    #[test]
    fn clicking_elsewhere_drops_focus() {
        let mut ctx = context();
        let mut buf = String::new();
        click_at(&mut ctx, Vec2::new(50.0, 10.0));
        draw(&mut ctx, &mut buf);
        click_at(&mut ctx, Vec2::new(50.0, 300.0));
        draw(&mut ctx, &mut buf);
        ctx.input_mut().add_text('z');
        assert!(!draw(&mut ctx, &mut buf));
    }
}
