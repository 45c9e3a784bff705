//! Checkbox rows, optionally carrying colour swatches.
//!
//! Row layout: `label ............ [swatch] [swatch] [box]`

use crate::{
    flags::ColorEditFlags,
    id::parse_label,
    style::StyleColor,
    ui::Ui,
    widgets::color_picker::swatch_popup,
    Rect, Vec2,
};

const BOX: f32         = 16.0;
const SWATCH: Vec2     = Vec2 { x: 22.0, y: 14.0 };
const SWATCH_GAP: f32  = 6.0;

pub fn checkbox(ui: &mut Ui<'_>, label: &str, v: &mut bool) -> bool {
    checkbox_picker(ui, label, v, &mut [], ColorEditFlags::empty())
}

/// Checkbox followed by one swatch per entry of `colors`.
/// Returns `true` when the box toggled or any colour changed.
pub fn checkbox_picker(
    ui:     &mut Ui<'_>,
    label:  &str,
    v:      &mut bool,
    colors: &mut [&mut [f32]],
    flags:  ColorEditFlags,
) -> bool {
    let (text, id_src) = parse_label(label);
    let id = ui.ctx.make_id(id_src);

    let size = Vec2::new(ui.available_width(), ui.ctx.style.row_height);
    let Some(pos) = ui.layout_next(size) else { return false };
    let row = Rect::from_min_size(pos, size);
    let mid = row.center().y;

    let box_rect = Rect::from_min_size(Vec2::new(row.max.x - BOX, mid - BOX * 0.5), Vec2::splat(BOX));
    let swatches_w = colors.len() as f32 * (SWATCH.x + SWATCH_GAP);

    // The label and the box toggle; the swatches in between do not.
    let (hovered, clicked) = if colors.is_empty() {
        let (h, _, c) = ui.ctx.button_behavior(id, row);
        (h, c)
    } else {
        let label_end = box_rect.min.x - swatches_w - SWATCH_GAP;
        let label_rect = Rect::new(row.min, Vec2::new(label_end, row.max.y));
        let (h1, _, c1) = ui.ctx.button_behavior(id, label_rect);
        let (h2, _, c2) = ui.ctx.button_behavior(id.with("##box"), box_rect);
        (h1 || h2, c1 || c2)
    };
    if clicked { *v = !*v; }

    // ── Drawing ───────────────────────────────────────────────────────────────

    let tc = if *v          { ui.color(StyleColor::Text) }
             else if hovered { ui.color(StyleColor::TextHovered) }
             else            { ui.color(StyleColor::TextInactive) };
    let fs = ui.font_size();
    ui.draw_text(text, Vec2::new(row.min.x, mid - fs * 0.5), tc);

    let rounding = ui.ctx.style.frame_rounding;
    if *v {
        let accent = ui.color(StyleColor::CheckMark);
        ui.ctx.draw_list.filled_rect(box_rect, rounding, accent);
        let (c, s) = (box_rect.center(), BOX);
        let mark = ui.color(StyleColor::Text);
        ui.ctx.draw_list.line(c + Vec2::new(-s * 0.25, 0.0), c + Vec2::new(-s * 0.05, s * 0.2), 2.0, mark);
        ui.ctx.draw_list.line(c + Vec2::new(-s * 0.05, s * 0.2), c + Vec2::new(s * 0.28, -s * 0.2), 2.0, mark);
    } else {
        let bg = if hovered { ui.color(StyleColor::FrameBgHovered) } else { ui.color(StyleColor::FrameBg) };
        ui.ctx.draw_list.filled_rect(box_rect, rounding, bg);
    }

    // ── Swatches ──────────────────────────────────────────────────────────────

    let mut changed = clicked;
    let mut x = box_rect.min.x - swatches_w;
    for (i, col) in colors.iter_mut().enumerate() {
        let rect = Rect::from_min_size(Vec2::new(x, mid - SWATCH.y * 0.5), SWATCH);
        let sid  = id.with(&format!("##color{}", i + 1));
        changed |= swatch_popup(ui, sid, rect, col, flags);
        x += SWATCH.x + SWATCH_GAP;
    }
    changed
}

#[cfg(test)]
mod tests {
    use crate::testing::{click_at, context, in_window, move_to};
    use crate::{ColorEditFlags, MouseButton, Vec2};

    #[test]
    fn clicking_the_label_toggles() {
        let mut ctx = context();
        let mut v = false;
        click_at(&mut ctx, Vec2::new(10.0, 15.0));
        assert!(in_window(&mut ctx, |ui| ui.checkbox("Delay Shot", &mut v)));
        assert!(v);
        assert!(!in_window(&mut ctx, |ui| ui.checkbox("Delay Shot", &mut v)));
        assert!(v);
    }

    #[test]
    fn clicked_variant_still_toggles() {
        let mut ctx = context();
        let mut v = true;
        click_at(&mut ctx, Vec2::new(392.0, 15.0));
        in_window(&mut ctx, |ui| ui.checkbox_clicked("Magic Bullet", &mut v));
        assert!(!v);
    }

    #[test]
    fn swatch_click_opens_picker_without_toggling() {
        let mut ctx = context();
        let mut v = false;
        let mut col = [0.49f32, 0.4, 1.0, 0.5];
        // Swatch area sits left of the box at the row's right edge.
        click_at(&mut ctx, Vec2::new(400.0 - 16.0 - 28.0 + 5.0, 15.0));
        in_window(&mut ctx, |ui| {
            ui.checkbox_picker("Freestanding", &mut v, &mut col, ColorEditFlags::ALPHA_BAR)
        });
        assert!(!v);
        assert!(ctx.open_popup.is_some());
    }

    #[test]
    fn press_on_label_release_on_box_does_not_toggle() {
        let mut ctx = context();
        let mut v = false;
        let mut col = [0.49f32, 0.4, 1.0];
        let mut row = |ctx: &mut crate::Context, v: &mut bool| {
            in_window(ctx, |ui| ui.checkbox_picker("Freestanding", v, &mut col, ColorEditFlags::empty()))
        };

        move_to(&mut ctx, Vec2::new(10.0, 15.0));
        ctx.input_mut().set_mouse_button(MouseButton::Left, true);
        assert!(!row(&mut ctx, &mut v));
        move_to(&mut ctx, Vec2::new(392.0, 15.0));
        ctx.input_mut().set_mouse_button(MouseButton::Left, false);
        assert!(!row(&mut ctx, &mut v));
        assert!(!v);

        click_at(&mut ctx, Vec2::new(392.0, 15.0));
        assert!(row(&mut ctx, &mut v));
        assert!(v);
    }

    #[test]
    fn double_picker_ids_are_distinct() {
        let mut ctx = context();
        let mut v = false;
        let (mut a, mut b) = ([1.0f32; 4], [0.5f32; 4]);
        click_at(&mut ctx, Vec2::new(400.0 - 16.0 - 56.0 + 5.0, 15.0));
        in_window(&mut ctx, |ui| {
            ui.checkbox_double_picker("Radar", &mut v, &mut a, &mut b, ColorEditFlags::empty())
        });
        let first = ctx.open_popup;
        click_at(&mut ctx, Vec2::new(400.0 - 16.0 - 28.0 + 5.0, 15.0));
        in_window(&mut ctx, |ui| {
            ui.checkbox_double_picker("Radar", &mut v, &mut a, &mut b, ColorEditFlags::empty())
        });
        assert!(first.is_some() && ctx.open_popup.is_some());
        assert_ne!(first, ctx.open_popup);
    }
}
