//! Key-binding button.
//!
//! Clicking the button arms it; the next key or mouse press becomes the new
//! binding and Escape cancels. The armed state lives in the widget storage.

use crate::{
    id::parse_label,
    input::Key,
    style::StyleColor,
    ui::Ui,
    Rect, Vec2,
};

const BUTTON_W: f32 = 70.0;

/// Display name of a virtual-key code: mouse buttons and letters are
/// named, every other code prints as a number.
pub fn key_name(vk: i32) -> String {
    match vk {
        0        => "None".to_owned(),
        1        => "LMB".to_owned(),
        2        => "RMB".to_owned(),
        65..=90  => char::from(vk as u8).to_string(),
        _        => format!("Key {vk}"),
    }
}

/// Returns `true` when `key` was rebound.
pub fn keybind(ui: &mut Ui<'_>, label: &str, key: &mut i32, show_label: bool) -> bool {
    let (text, id_src) = parse_label(label);
    let id = ui.ctx.make_id(id_src);

    let fp    = ui.ctx.style.frame_padding;
    let h     = ui.font_size() + fp.1 * 2.0;
    let width = if show_label { ui.available_width() } else { BUTTON_W };
    let Some(pos) = ui.layout_next(Vec2::new(width, h)) else { return false };
    let button = Rect::from_min_size(Vec2::new(pos.x + width - BUTTON_W, pos.y), Vec2::new(BUTTON_W, h));

    let (hovered, _, clicked) = ui.ctx.button_behavior(id, button);
    let awaiting = ui.ctx.get_storage(id).map_or(false, |s| s.active);

    let mut changed = false;
    let mut armed   = awaiting;
    if awaiting {
        if ui.ctx.input.key_pressed(Key::Escape) {
            armed = false;
        } else if let Some(&vk) = ui.ctx.input.vk_pressed.first() {
            armed = false;
            // A capturing press on the button itself must not re-arm it on release.
            if ui.ctx.active_item == Some(id) {
                ui.ctx.active_item = None;
            }
            if vk != *key {
                *key    = vk;
                changed = true;
            }
        }
    } else if clicked {
        armed = true;
    }
    ui.ctx.get_storage_mut(id).active = armed;

    // ── Drawing ───────────────────────────────────────────────────────────────

    if show_label && !text.is_empty() {
        let fs = ui.font_size();
        let tc = ui.color(StyleColor::TextInactive);
        ui.draw_text(text, Vec2::new(pos.x, pos.y + (h - fs) * 0.5), tc);
    }
    let bg = if armed        { ui.color(StyleColor::FrameBgActive) }
             else if hovered { ui.color(StyleColor::FrameBgHovered) }
             else            { ui.color(StyleColor::FrameBg) };
    let rounding = ui.ctx.style.frame_rounding;
    ui.ctx.draw_list.filled_rect(button, rounding, bg);

    let name = if armed { "...".to_owned() } else { key_name(*key) };
    let tc   = if armed { ui.color(StyleColor::Accent) } else { ui.color(StyleColor::TextHovered) };
    let ts   = ui.text_size(&name);
    ui.draw_text(&name, button.min + (button.size() - ts) * 0.5, tc);
    changed
}
