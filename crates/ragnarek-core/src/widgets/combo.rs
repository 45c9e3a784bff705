//! Combo boxes and selectables.
//!
//! The box sits under its label. The item list is a popup dropped below the
//! box, at most `max_items` rows tall and scrolled with the mouse wheel when
//! the items do not fit.

use crate::{
    flags::{ComboFlags, SelectableFlags},
    id::parse_label,
    input::MouseButton,
    style::StyleColor,
    ui::Ui,
    Rect, Vec2,
};

const LABEL_GAP: f32 = 4.0;
const POPUP_GAP: f32 = 2.0;
const POPUP_PAD: f32 = 4.0;

fn item_height(ui: &Ui<'_>) -> f32 { ui.font_size() + ui.ctx.style.frame_padding.1 * 2.0 }

pub fn begin_combo(
    ui:      &mut Ui<'_>,
    label:   &str,
    preview: &str,
    val:     i32,
    multi:   bool,
    flags:   ComboFlags,
) -> bool {
    let (text, id_src) = parse_label(label);
    let id = ui.ctx.make_id(id_src);

    let fs      = ui.font_size();
    let fp      = ui.ctx.style.frame_padding;
    let item_h  = item_height(ui);
    let label_h = if text.is_empty() { 0.0 } else { fs + LABEL_GAP };
    let width   = ui.available_width();
    let Some(pos) = ui.layout_next(Vec2::new(width, label_h + item_h)) else { return false };

    let box_rect = Rect::from_min_size(Vec2::new(pos.x, pos.y + label_h), Vec2::new(width, item_h));
    let (hovered, _, clicked) = ui.ctx.button_behavior(id, box_rect);

    let mut open = ui.ctx.is_popup_open(id);
    if clicked {
        if open { ui.ctx.close_popup(); } else { ui.ctx.open_popup(id); }
        open = !open;
    }

    // ── Box ───────────────────────────────────────────────────────────────────

    if label_h > 0.0 {
        let tc = ui.color(StyleColor::TextInactive);
        ui.draw_text(text, pos, tc);
    }
    let bg = if hovered || open { ui.color(StyleColor::FrameBgHovered) } else { ui.color(StyleColor::FrameBg) };
    let rounding = ui.ctx.style.frame_rounding;
    ui.ctx.draw_list.filled_rect(box_rect, rounding, bg);

    let tc = ui.color(StyleColor::TextHovered);
    ui.ctx.draw_list.push_clip_rect(Rect::new(box_rect.min, box_rect.max - Vec2::new(fs + fp.0, 0.0)));
    ui.draw_text(preview, Vec2::new(box_rect.min.x + fp.0, box_rect.min.y + fp.1), tc);
    ui.ctx.draw_list.pop_clip_rect();

    let a  = Vec2::new(box_rect.max.x - fp.0 - fs * 0.5, box_rect.center().y);
    let hw = fs * 0.3;
    let ac = ui.color(StyleColor::Text);
    if open {
        ui.ctx.draw_list.triangle_filled(a + Vec2::new(-hw, hw * 0.5), a + Vec2::new(hw, hw * 0.5), a + Vec2::new(0.0, -hw * 0.5), ac);
    } else {
        ui.ctx.draw_list.triangle_filled(a + Vec2::new(-hw, -hw * 0.5), a + Vec2::new(hw, -hw * 0.5), a + Vec2::new(0.0, hw * 0.5), ac);
    }

    if !open { return false; }

    // ── Popup ─────────────────────────────────────────────────────────────────

    let max_items = if val > 0 { Some(val as usize) } else { flags.max_visible_items() };
    let max_h     = max_items.map(|n| n.max(1) as f32 * item_h);
    let stored    = ui.ctx.get_storage(id).map_or(0.0, |s| s.float[0]);
    let content_h = if stored > 0.0 { stored } else { max_h.unwrap_or(item_h * 8.0) };
    let visible_h = max_h.map_or(content_h, |m| content_h.min(m));

    let popup = Rect::from_min_size(
        Vec2::new(box_rect.min.x, box_rect.max.y + POPUP_GAP),
        Vec2::new(width, visible_h + POPUP_PAD * 2.0),
    );

    let mouse = ui.ctx.input.mouse_pos;
    if ui.ctx.input.mouse_clicked(MouseButton::Left) && !popup.contains(mouse) && !box_rect.contains(mouse) {
        ui.ctx.close_popup();
        return false;
    }

    let max_scroll = (content_h - visible_h).max(0.0);
    let wheel      = if popup.contains(mouse) { ui.ctx.input.mouse_wheel } else { 0.0 };
    let storage    = ui.ctx.get_storage_mut(id);
    storage.float[1] = (storage.float[1] - wheel * item_h).clamp(0.0, max_scroll);
    let scroll = storage.float[1];

    ui.ctx.begin_popup(id, popup, (POPUP_PAD, POPUP_PAD));
    ui.ctx.popup_multi = multi;
    let popup_bg = ui.color(StyleColor::PopupBg);
    let border   = ui.color(StyleColor::Border);
    ui.ctx.draw_list.filled_rect(popup, rounding, popup_bg);
    ui.ctx.draw_list.rect_outline(popup, 1.0, border);

    if let Some(l) = ui.ctx.current_layout_mut() {
        l.cursor.y      -= scroll;
        l.origin.y      -= scroll;
        l.content_max.y -= scroll;
    }
    true
}

pub fn end_combo(ui: &mut Ui<'_>) {
    let Some(frame) = ui.ctx.end_popup() else { return };
    ui.ctx.popup_multi = false;
    let content_h = frame.layout.content_max.y - frame.layout.origin.y;
    ui.ctx.get_storage_mut(frame.id).float[0] = content_h.max(0.0);
}

/// Full-width row; zero size components take the available width and the
/// default row height. Choosing an item closes the enclosing popup unless
/// `DONT_CLOSE_POPUPS` is set or the popup was opened as a multi-select.
pub fn selectable(ui: &mut Ui<'_>, label: &str, selected: bool, flags: SelectableFlags, size: Vec2) -> bool {
    let (text, id_src) = parse_label(label);
    let id = ui.ctx.make_id(id_src);

    let fp = ui.ctx.style.frame_padding;
    let w  = if size.x > 0.0 { size.x } else { ui.available_width() };
    let h  = if size.y > 0.0 { size.y } else { item_height(ui) };
    let Some(pos) = ui.layout_next(Vec2::new(w, h)) else { return false };
    let rect = Rect::from_min_size(pos, Vec2::new(w, h));
    let (hovered, held, clicked) = ui.ctx.button_behavior(id, rect);

    if hovered || selected {
        let bg = if held && hovered { ui.color(StyleColor::HeaderActive) }
                 else if hovered    { ui.color(StyleColor::HeaderHovered) }
                 else               { ui.color(StyleColor::Header) };
        let rounding = ui.ctx.style.frame_rounding;
        ui.ctx.draw_list.filled_rect(rect, rounding, bg);
    }
    let tc = if selected     { ui.color(StyleColor::Text) }
             else if hovered { ui.color(StyleColor::TextHovered) }
             else            { ui.color(StyleColor::TextInactive) };
    let fs = ui.font_size();
    ui.draw_text(text, Vec2::new(pos.x + fp.0, pos.y + (h - fs) * 0.5), tc);

    if clicked
        && ui.ctx.in_popup()
        && !flags.contains(SelectableFlags::DONT_CLOSE_POPUPS)
        && !ui.ctx.popup_multi
    {
        ui.ctx.close_popup();
    }
    clicked
}

/// Single-choice combo over `items`. Returns `true` when `current` changed.
pub fn combo(ui: &mut Ui<'_>, label: &str, current: &mut usize, items: &[&str], max_items: i32) -> bool {
    let preview = items.get(*current).copied().unwrap_or("");
    if !begin_combo(ui, label, preview, max_items, false, ComboFlags::empty()) {
        return false;
    }
    let mut changed = false;
    for (i, item) in items.iter().enumerate() {
        if selectable(ui, &format!("{item}##{i}"), i == *current, SelectableFlags::empty(), Vec2::ZERO) && i != *current {
            *current = i;
            changed  = true;
        }
    }
    end_combo(ui);
    changed
}

/// Preview text of a multi-select: the chosen labels, comma separated.
pub(crate) fn multi_preview(values: &[bool], labels: &[&str]) -> String {
    let chosen: Vec<&str> = labels.iter().zip(values).filter(|(_, v)| **v).map(|(l, _)| *l).collect();
    if chosen.is_empty() { "None".to_owned() } else { chosen.join(", ") }
}

/// Multi-select combo: every row toggles its flag and the list stays open.
pub fn multi_combo(ui: &mut Ui<'_>, label: &str, values: &mut [bool], labels: &[&str]) {
    let preview = multi_preview(values, labels);
    if !begin_combo(ui, label, &preview, 0, true, ComboFlags::empty()) {
        return;
    }
    for (i, (v, l)) in values.iter_mut().zip(labels).enumerate() {
        ui.selectable_toggle(&format!("{l}##{i}"), v, SelectableFlags::DONT_CLOSE_POPUPS, Vec2::ZERO);
    }
    end_combo(ui);
}

#[cfg(test)]
mod tests {
    use super::multi_preview;
    use crate::testing::{click_at, context, in_window};
    use crate::{ComboFlags, Context, Vec2};

    const ITEMS: [&str; 3] = ["Head", "Chest", "Legs"];

    // Label line 12 + gap 4, box 22 tall, popup 2 below the box, padded by 4.
    const BOX_Y:   f32 = 27.0;
    const FIRST_Y: f32 = 16.0 + 22.0 + 2.0 + 4.0;

    fn draw_combo(ctx: &mut Context, current: &mut usize) -> bool {
        in_window(ctx, |ui| ui.combo("Hitbox", current, &ITEMS, 0))
    }

    #[test]
    fn click_opens_and_choosing_closes() {
        let mut ctx = context();
        let mut current = 0;
        click_at(&mut ctx, Vec2::new(100.0, BOX_Y));
        assert!(!draw_combo(&mut ctx, &mut current));
        assert!(ctx.open_popup.is_some());

        click_at(&mut ctx, Vec2::new(100.0, FIRST_Y + 22.0 + 11.0));
        assert!(draw_combo(&mut ctx, &mut current));
        assert_eq!(current, 1);
        assert!(ctx.open_popup.is_none());
    }

    #[test]
    fn clicking_outside_closes_without_choosing() {
        let mut ctx = context();
        let mut current = 2;
        click_at(&mut ctx, Vec2::new(100.0, BOX_Y));
        draw_combo(&mut ctx, &mut current);

        click_at(&mut ctx, Vec2::new(100.0, 500.0));
        assert!(!draw_combo(&mut ctx, &mut current));
        assert_eq!(current, 2);
        assert!(ctx.open_popup.is_none());
    }

    #[test]
    fn multi_select_toggles_and_stays_open() {
        let mut ctx = context();
        let mut values = [false; 3];
        let draw = |ctx: &mut Context, values: &mut [bool; 3]| {
            in_window(ctx, |ui| ui.multi_combo("Hitboxes", values, &ITEMS));
        };
        click_at(&mut ctx, Vec2::new(100.0, BOX_Y));
        draw(&mut ctx, &mut values);

        click_at(&mut ctx, Vec2::new(100.0, FIRST_Y + 11.0));
        draw(&mut ctx, &mut values);
        click_at(&mut ctx, Vec2::new(100.0, FIRST_Y + 44.0 + 11.0));
        draw(&mut ctx, &mut values);

        assert_eq!(values, [true, false, true]);
        assert!(ctx.open_popup.is_some());
        assert_eq!(multi_preview(&values, &ITEMS), "Head, Legs");
    }

    #[test]
    fn empty_multi_selection_previews_none() {
        assert_eq!(multi_preview(&[false, false], &["a", "b"]), "None");
    }

    #[test]
    fn popup_height_is_capped_by_visible_items() {
        let mut ctx = context();
        let items: Vec<String> = (0..30).map(|i| format!("Item {i}")).collect();
        let refs: Vec<&str> = items.iter().map(String::as_str).collect();
        let mut current = 0;

        click_at(&mut ctx, Vec2::new(100.0, BOX_Y));
        for _ in 0..2 {
            in_window(&mut ctx, |ui| {
                if ui.begin_combo("List", refs[current], 0, false, ComboFlags::HEIGHT_SMALL) {
                    for (i, r) in refs.iter().enumerate() {
                        if ui.selectable(r, i == current, crate::SelectableFlags::empty(), Vec2::ZERO) { current = i; }
                    }
                    ui.end_combo();
                }
            });
        }
        let popup = ctx.popup_rects_prev.first().copied().unwrap_or(crate::Rect::ZERO);
        assert_eq!(popup.height(), 4.0 * 22.0 + 8.0);
    }

    #[test]
    fn explicit_item_count_overrides_flags() {
        let mut ctx = context();
        let mut current = 0;
        click_at(&mut ctx, Vec2::new(100.0, BOX_Y));
        in_window(&mut ctx, |ui| ui.combo("Hitbox", &mut current, &ITEMS, 2));
        let popup = ctx.popup_rects_prev.first().copied().unwrap_or(crate::Rect::ZERO);
        assert_eq!(popup.height(), 2.0 * 22.0 + 8.0);
    }
}
