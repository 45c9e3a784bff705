//! Colour widgets.
//!
//! - `color_edit`    – label, optional channel fields and a swatch that
//!                     opens the picker in a popup
//! - `color_picker4` – the picker body drawn inline
//! - `color_button`  – a bare swatch button
//!
//! Every colour is a slice of 3 (RGB) or 4 (RGBA) floats in 0..1.

use crate::{
    draw_list::DrawList,
    flags::ColorEditFlags,
    id::{parse_label, Id},
    input::MouseButton,
    style::StyleColor,
    ui::Ui,
    Color, Rect, Vec2,
};

const SWATCH:      Vec2 = Vec2 { x: 22.0, y: 14.0 };
const FIELD_W:     f32  = 34.0;
const PICKER_W:    f32  = 180.0;
const POPUP_PAD:   f32  = 8.0;
const BAR_W:       f32  = 14.0;
const GAP:         f32  = 6.0;
const PREVIEW_H:   f32  = 16.0;
const CHECKER:     f32  = 5.0;

// ─── Color edit ──────────────────────────────────────────────────────────────

pub fn color_edit(ui: &mut Ui<'_>, label: &str, col: &mut [f32], flags: ColorEditFlags) -> bool {
    let (text, id_src) = parse_label(label);
    let id = ui.ctx.make_id(id_src);

    let channels = if col.len() >= 4 && !flags.contains(ColorEditFlags::NO_ALPHA) { 4 } else { 3.min(col.len()) };
    let inputs   = !flags.contains(ColorEditFlags::NO_INPUTS);
    let fields_w = if inputs { (FIELD_W + 4.0) * channels as f32 } else { 0.0 };
    let labelled = !text.is_empty() && !flags.contains(ColorEditFlags::NO_LABEL);

    let size = if labelled {
        Vec2::new(ui.available_width(), ui.ctx.style.row_height)
    } else {
        Vec2::new(fields_w + SWATCH.x, SWATCH.y + 4.0)
    };
    let Some(pos) = ui.layout_next(size) else { return false };
    let row = Rect::from_min_size(pos, size);
    let mid = row.center().y;

    if labelled {
        let hovered = ui.ctx.is_mouse_hovering(row);
        let tc = if ui.ctx.is_popup_open(id) { ui.color(StyleColor::Text) }
                 else if hovered             { ui.color(StyleColor::TextHovered) }
                 else                        { ui.color(StyleColor::TextInactive) };
        let fs = ui.font_size();
        ui.draw_text(text, Vec2::new(row.min.x, mid - fs * 0.5), tc);
    }

    let mut changed = false;
    let swatch = Rect::from_min_size(Vec2::new(row.max.x - SWATCH.x, mid - SWATCH.y * 0.5), SWATCH);

    if inputs {
        let mut x = swatch.min.x - fields_w;
        for ch in 0..channels {
            let field = Rect::from_min_size(Vec2::new(x, mid - 10.0), Vec2::new(FIELD_W, 20.0));
            changed |= channel_field(ui, id.with(&format!("#ch{ch}")), field, &mut col[ch]);
            x += FIELD_W + 4.0;
        }
    }

    changed |= swatch_popup(ui, id, swatch, col, flags);
    changed
}

/// Horizontal drag over one 0..1 channel, shown as 0..255.
fn channel_field(ui: &mut Ui<'_>, id: Id, rect: Rect, v: &mut f32) -> bool {
    let (hovered, held, _) = ui.ctx.button_behavior(id, rect);
    let mut changed = false;
    if held {
        let dx = ui.ctx.input.mouse_delta.x;
        if dx != 0.0 {
            *v = (*v + dx / 255.0).clamp(0.0, 1.0);
            changed = true;
        }
    }
    let bg = if hovered || held { ui.color(StyleColor::FrameBgHovered) } else { ui.color(StyleColor::FrameBg) };
    let rounding = ui.ctx.style.frame_rounding;
    ui.ctx.draw_list.filled_rect(rect, rounding, bg);

    let s  = format!("{}", (*v * 255.0).round() as i32);
    let ts = ui.text_size(&s);
    let tc = ui.color(StyleColor::Text);
    ui.draw_text(&s, rect.min + (rect.size() - ts) * 0.5, tc);
    changed
}

/// Swatch at a fixed rect that toggles a picker popup below it.
pub(crate) fn swatch_popup(ui: &mut Ui<'_>, id: Id, rect: Rect, col: &mut [f32], flags: ColorEditFlags) -> bool {
    let (hovered, _, clicked) = ui.ctx.button_behavior(id, rect);
    draw_swatch(ui, rect, Color::from_slice(col), flags, hovered);

    let mut open = ui.ctx.is_popup_open(id);
    if clicked && !flags.contains(ColorEditFlags::NO_PICKER) {
        if open { ui.ctx.close_popup(); } else { ui.ctx.open_popup(id); }
        open = !open;
    }
    if !open { return false; }

    let fs      = ui.font_size();
    let body_h  = body_height(PICKER_W, flags, has_alpha(col, flags), fs);
    let size    = Vec2::new(PICKER_W + POPUP_PAD * 2.0, body_h + POPUP_PAD * 2.0);
    let display = ui.ctx.input.display_size;
    let mut min = Vec2::new(rect.max.x - size.x, rect.max.y + 4.0);
    if display.x > 0.0 { min.x = min.x.clamp(0.0, (display.x - size.x).max(0.0)); }
    let popup = Rect::from_min_size(min, size);

    let mouse = ui.ctx.input.mouse_pos;
    if ui.ctx.input.mouse_clicked(MouseButton::Left) && !popup.contains(mouse) && !rect.contains(mouse) {
        ui.ctx.close_popup();
        return false;
    }

    ui.ctx.begin_popup(id, popup, (POPUP_PAD, POPUP_PAD));
    let bg       = ui.color(StyleColor::PopupBg);
    let border   = ui.color(StyleColor::Border);
    let rounding = ui.ctx.style.frame_rounding;
    ui.ctx.draw_list.filled_rect(popup, rounding, bg);
    ui.ctx.draw_list.rect_outline(popup, 1.0, border);
    let changed = picker_body(ui, id, popup.min + Vec2::splat(POPUP_PAD), PICKER_W, col, flags, None);
    ui.ctx.end_popup();
    changed
}

// ─── Full picker ─────────────────────────────────────────────────────────────

pub fn color_picker4(
    ui:      &mut Ui<'_>,
    label:   &str,
    col:     &mut [f32; 4],
    flags:   ColorEditFlags,
    ref_col: Option<[f32; 4]>,
) -> bool {
    let (text, id_src) = parse_label(label);
    let id = ui.ctx.make_id(id_src);

    let fs      = ui.font_size();
    let width   = ui.available_width().min(PICKER_W + 40.0);
    let label_h = if text.is_empty() || flags.contains(ColorEditFlags::NO_LABEL) { 0.0 } else { fs + 4.0 };
    let body_h  = body_height(width, flags, has_alpha(col, flags), fs);
    let Some(pos) = ui.layout_next(Vec2::new(width, label_h + body_h)) else { return false };

    if label_h > 0.0 {
        let tc = ui.color(StyleColor::Text);
        ui.draw_text(text, pos, tc);
    }
    picker_body(ui, id, pos + Vec2::new(0.0, label_h), width, col, flags, ref_col.map(Color::from))
}

// ─── Swatch button ───────────────────────────────────────────────────────────

pub fn color_button(ui: &mut Ui<'_>, desc_id: &str, col: [f32; 4], flags: ColorEditFlags, mut size: Vec2) -> bool {
    let id = ui.ctx.make_id(desc_id);
    let default = ui.font_size() + ui.ctx.style.frame_padding.1 * 2.0;
    if size.x <= 0.0 { size.x = default; }
    if size.y <= 0.0 { size.y = default; }

    let Some(pos) = ui.layout_next(size) else { return false };
    let rect = Rect::from_min_size(pos, size);
    let (hovered, _, clicked) = ui.ctx.button_behavior(id, rect);
    draw_swatch(ui, rect, Color::from(col), flags, hovered);
    clicked
}

// ─── Shared pieces ───────────────────────────────────────────────────────────

fn has_alpha(col: &[f32], flags: ColorEditFlags) -> bool {
    col.len() >= 4 && !flags.contains(ColorEditFlags::NO_ALPHA)
}

fn draw_swatch(ui: &mut Ui<'_>, rect: Rect, col: Color, flags: ColorEditFlags, hovered: bool) {
    let rounding = ui.ctx.style.frame_rounding;
    let preview_alpha = flags.intersects(ColorEditFlags::ALPHA_PREVIEW | ColorEditFlags::ALPHA_PREVIEW_HALF)
        && !flags.contains(ColorEditFlags::NO_ALPHA);
    if preview_alpha && col.a < 1.0 {
        checker(&mut ui.ctx.draw_list, rect);
        ui.ctx.draw_list.filled_rect(rect, 0.0, col);
    } else {
        ui.ctx.draw_list.filled_rect(rect, rounding, col.with_alpha(1.0));
    }
    if !flags.contains(ColorEditFlags::NO_BORDER) {
        let border = if hovered { ui.color(StyleColor::TextHovered) } else { ui.color(StyleColor::Border) };
        ui.ctx.draw_list.rect_outline(rect, 1.0, border);
    }
}

fn checker(draw: &mut DrawList, rect: Rect) {
    draw.filled_rect(rect, 0.0, Color::from_rgb8(204, 204, 204, 1.0));
    let dark = Color::from_rgb8(128, 128, 128, 1.0);
    let (cols, rows) = ((rect.width() / CHECKER).ceil() as usize, (rect.height() / CHECKER).ceil() as usize);
    for y in 0..rows {
        for x in (y % 2..cols).step_by(2) {
            let cell = Rect::from_min_size(rect.min + Vec2::new(x as f32, y as f32) * CHECKER, Vec2::splat(CHECKER));
            draw.filled_rect(cell.intersect(rect), 0.0, dark);
        }
    }
}

fn body_height(width: f32, flags: ColorEditFlags, alpha: bool, fs: f32) -> f32 {
    let bars = if alpha && flags.contains(ColorEditFlags::ALPHA_BAR) { 2.0 } else { 1.0 };
    let mut h = width - (BAR_W + GAP) * bars;
    if !flags.contains(ColorEditFlags::NO_SIDE_PREVIEW) { h += GAP + PREVIEW_H; }
    if flags.contains(ColorEditFlags::DISPLAY_HEX)      { h += GAP + fs; }
    h
}

/// SV square, hue strip, optional alpha strip, preview and hex readout.
fn picker_body(
    ui:      &mut Ui<'_>,
    id:      Id,
    origin:  Vec2,
    width:   f32,
    col:     &mut [f32],
    flags:   ColorEditFlags,
    ref_col: Option<Color>,
) -> bool {
    let alpha     = has_alpha(col, flags);
    let alpha_bar = alpha && flags.contains(ColorEditFlags::ALPHA_BAR);
    let bars      = if alpha_bar { 2.0 } else { 1.0 };
    let sv_size   = width - (BAR_W + GAP) * bars;

    let sv_rect    = Rect::from_min_size(origin, Vec2::splat(sv_size));
    let hue_rect   = Rect::from_min_size(Vec2::new(sv_rect.max.x + GAP, origin.y), Vec2::new(BAR_W, sv_size));
    let alpha_rect = Rect::from_min_size(Vec2::new(hue_rect.max.x + GAP, origin.y), Vec2::new(BAR_W, sv_size));

    let mut color = Color::from_slice(col);
    let (mut h, mut s, mut v) = color.to_hsv();
    // Hue is undefined for greys; keep the last one the user picked.
    if s <= 0.0 || v <= 0.0 {
        if let Some(st) = ui.ctx.get_storage(id) { h = st.float[0]; }
    }

    let mouse = ui.ctx.input.mouse_pos;
    let mut changed = false;

    let (_, held, _) = ui.ctx.button_behavior(id.with("#sv"), sv_rect);
    if held {
        s = ((mouse.x - sv_rect.min.x) / sv_size).clamp(0.0, 1.0);
        v = 1.0 - ((mouse.y - sv_rect.min.y) / sv_size).clamp(0.0, 1.0);
        changed = true;
    }
    let (_, held, _) = ui.ctx.button_behavior(id.with("#hue"), hue_rect);
    if held {
        h = ((mouse.y - hue_rect.min.y) / sv_size).clamp(0.0, 0.9999);
        changed = true;
    }
    if alpha_bar {
        let (_, held, _) = ui.ctx.button_behavior(id.with("#alpha"), alpha_rect);
        if held {
            color.a = 1.0 - ((mouse.y - alpha_rect.min.y) / sv_size).clamp(0.0, 1.0);
            changed = true;
        }
    }
    ui.ctx.get_storage_mut(id).float[0] = h;

    if changed {
        color = Color::from_hsv(h, s, v).with_alpha(color.a);
        color.write_slice(col);
    }

    // ── Drawing ───────────────────────────────────────────────────────────────

    let hue_col = Color::from_hsv(h, 1.0, 1.0);
    let draw = &mut ui.ctx.draw_list;
    draw.filled_rect_multicolor(sv_rect, Color::WHITE, hue_col, hue_col, Color::WHITE);
    draw.filled_rect_multicolor(sv_rect, Color::TRANSPARENT, Color::TRANSPARENT, Color::BLACK, Color::BLACK);
    let marker = sv_rect.min + Vec2::new(s * sv_size, (1.0 - v) * sv_size);
    draw.filled_circle(marker, 5.0, Color::WHITE, 12);
    draw.filled_circle(marker, 3.5, color.with_alpha(1.0), 12);

    for i in 0..6 {
        let (t0, t1) = (i as f32 / 6.0, (i + 1) as f32 / 6.0);
        let (c0, c1) = (Color::from_hsv(t0, 1.0, 1.0), Color::from_hsv(t1 % 1.0, 1.0, 1.0));
        let seg = Rect::new(
            Vec2::new(hue_rect.min.x, hue_rect.min.y + sv_size * t0),
            Vec2::new(hue_rect.max.x, hue_rect.min.y + sv_size * t1),
        );
        draw.filled_rect_multicolor(seg, c0, c0, c1, c1);
    }
    let hy = hue_rect.min.y + h * sv_size;
    draw.line(Vec2::new(hue_rect.min.x - 2.0, hy), Vec2::new(hue_rect.max.x + 2.0, hy), 2.0, Color::WHITE);

    if alpha_bar {
        checker(draw, alpha_rect);
        let opaque = color.with_alpha(1.0);
        draw.filled_rect_multicolor(alpha_rect, opaque, opaque, opaque.with_alpha(0.0), opaque.with_alpha(0.0));
        let ay = alpha_rect.min.y + (1.0 - color.a) * sv_size;
        draw.line(Vec2::new(alpha_rect.min.x - 2.0, ay), Vec2::new(alpha_rect.max.x + 2.0, ay), 2.0, Color::WHITE);
    }

    let mut y = sv_rect.max.y + GAP;
    if !flags.contains(ColorEditFlags::NO_SIDE_PREVIEW) {
        let shown = if alpha { color } else { color.with_alpha(1.0) };
        match ref_col {
            Some(original) => {
                let half = width * 0.5;
                draw.filled_rect(Rect::from_min_size(Vec2::new(origin.x, y), Vec2::new(half, PREVIEW_H)), 0.0, shown);
                draw.filled_rect(Rect::from_min_size(Vec2::new(origin.x + half, y), Vec2::new(half, PREVIEW_H)), 0.0, original);
            }
            None => draw.filled_rect(Rect::from_min_size(Vec2::new(origin.x, y), Vec2::new(width, PREVIEW_H)), 0.0, shown),
        }
        y += PREVIEW_H + GAP;
    }

    if flags.contains(ColorEditFlags::DISPLAY_HEX) {
        let hex = hex_string(color, alpha);
        let tc  = ui.color(StyleColor::Text);
        ui.draw_text(&hex, Vec2::new(origin.x, y), tc);
    }

    changed
}

/// `#RRGGBB` or `#RRGGBBAA`.
pub fn hex_string(c: Color, alpha: bool) -> String {
    let ch = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    if alpha {
        format!("#{:02X}{:02X}{:02X}{:02X}", ch(c.r), ch(c.g), ch(c.b), ch(c.a))
    } else {
        format!("#{:02X}{:02X}{:02X}", ch(c.r), ch(c.g), ch(c.b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{click_at, context, in_window, move_to};
    use crate::{Context, MouseButton};

    const PICKER: ColorEditFlags = ColorEditFlags::NO_SIDE_PREVIEW
        .union(ColorEditFlags::ALPHA_BAR)
        .union(ColorEditFlags::NO_INPUTS)
        .union(ColorEditFlags::ALPHA_PREVIEW)
        .union(ColorEditFlags::DISPLAY_HEX);

    fn edit(ctx: &mut Context, col: &mut [f32; 4]) -> bool {
        in_window(ctx, |ui| ui.color_edit4("Accent Color", col, PICKER))
    }

    #[test]
    fn hex_readout() {
        assert_eq!(hex_string(Color::from_rgb8(112, 109, 214, 1.0), false), "#706DD6");
        assert_eq!(hex_string(Color::from_rgb8(255, 0, 0, 0.5), true), "#FF000080");
    }

    #[test]
    fn swatch_click_opens_popup_and_outside_click_closes_it() {
        let mut ctx = context();
        let mut col = [0.44, 0.43, 0.84, 1.0];
        edit(&mut ctx, &mut col);

        // Swatch sits at the right edge of the 400-wide row.
        let swatch = Vec2::new(400.0 - SWATCH.x * 0.5, 15.0);
        click_at(&mut ctx, swatch);
        edit(&mut ctx, &mut col);
        assert!(ctx.open_popup.is_some());
        assert!(!ctx.popup_rects_prev.is_empty());

        click_at(&mut ctx, Vec2::new(5.0, 500.0));
        edit(&mut ctx, &mut col);
        assert!(ctx.open_popup.is_none());
    }

    #[test]
    fn dragging_the_sv_square_changes_the_colour() {
        let mut ctx = context();
        let mut col = [1.0, 0.0, 0.0, 1.0];
        let swatch = Vec2::new(400.0 - SWATCH.x * 0.5, 15.0);
        click_at(&mut ctx, swatch);
        edit(&mut ctx, &mut col);
        let popup = ctx.popup_rects_prev[0];

        // Bottom-left of the SV square is black.
        let p = popup.min + Vec2::new(POPUP_PAD + 1.0, popup.height() - 1.0);
        move_to(&mut ctx, p);
        edit(&mut ctx, &mut col);
        ctx.input_mut().set_mouse_button(MouseButton::Left, true);
        let sv_bottom = popup.min.y + POPUP_PAD + PICKER_W - (BAR_W + GAP) * 2.0 - 1.0;
        move_to(&mut ctx, Vec2::new(popup.min.x + POPUP_PAD + 1.0, sv_bottom));
        assert!(edit(&mut ctx, &mut col));
        assert!(col[0] < 0.05 && col[1] < 0.05 && col[2] < 0.05);
        assert_eq!(col[3], 1.0);
    }

    #[test]
    fn three_channel_slices_never_grow_alpha() {
        let mut ctx = context();
        let mut rgb = [0.1f32, 0.2, 0.3];
        in_window(&mut ctx, |ui| ui.color_edit3("##rgb", &mut rgb, ColorEditFlags::empty()));
        assert_eq!(rgb, [0.1, 0.2, 0.3]);
    }

    #[test]
    fn color_button_reports_press() {
        let mut ctx = context();
        click_at(&mut ctx, Vec2::splat(5.0));
        assert!(in_window(&mut ctx, |ui| ui.color_button("##c", [1.0; 4], ColorEditFlags::empty(), Vec2::ZERO)));
    }
}
