//! Slider widgets.
//!
//! Layout: label on the left and the formatted value on the right of a
//! text line, with a thin track and a round grab underneath.

use crate::{
    flags::SliderFlags,
    format::{format_value, split_pair},
    id::{parse_label, Id},
    style::StyleColor,
    ui::Ui,
    Rect, Vec2,
};

const TRACK_H:   f32 = 4.0;
const GRAB_R:    f32 = 6.0;
const TRACK_GAP: f32 = 8.0;

fn height(ui: &Ui<'_>) -> f32 { ui.font_size() + TRACK_GAP + GRAB_R * 2.0 + 4.0 }

/// Shared float slider. `width` of `None` takes the available width.
fn slider_scalar(
    ui:     &mut Ui<'_>,
    id:     Id,
    text:   &str,
    v:      &mut f64,
    min:    f64,
    max:    f64,
    format: &str,
    flags:  SliderFlags,
    width:  Option<f32>,
) -> bool {
    let w = width.unwrap_or_else(|| ui.available_width());
    let h = height(ui);
    let Some(pos) = ui.layout_next(Vec2::new(w, h)) else { return false };

    let fs    = ui.font_size();
    let track = Rect::from_min_size(
        Vec2::new(pos.x + GRAB_R, pos.y + fs + TRACK_GAP + GRAB_R - TRACK_H * 0.5),
        Vec2::new((w - GRAB_R * 2.0).max(1.0), TRACK_H),
    );
    let hit = Rect::new(Vec2::new(pos.x, pos.y + fs), pos + Vec2::new(w, h));

    let (hovered, held, _) = ui.ctx.button_behavior(id, hit);
    let mut changed = false;

    if held && max != min {
        let t = ((ui.ctx.input.mouse_pos.x - track.min.x) / track.width()).clamp(0.0, 1.0) as f64;
        let new_v = min + t * (max - min);
        if new_v != *v {
            *v = new_v;
            changed = true;
        }
    }
    if flags.contains(SliderFlags::ALWAYS_CLAMP) {
        let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
        let clamped = v.clamp(lo, hi);
        if clamped != *v { *v = clamped; changed = true; }
    }

    // ── Drawing ───────────────────────────────────────────────────────────────

    let active = held || hovered;
    let tc = if active { ui.color(StyleColor::Text) } else { ui.color(StyleColor::TextInactive) };
    ui.draw_text(text, pos, tc);

    let value = format_value(format, *v);
    let vw    = ui.text_width(&value);
    let vc    = ui.color(StyleColor::TextHovered);
    ui.draw_text(&value, Vec2::new(pos.x + w - vw, pos.y), vc);

    let t = if max != min { ((*v - min) / (max - min)).clamp(0.0, 1.0) as f32 } else { 0.0 };
    let grab_x = track.min.x + track.width() * t;
    let bg   = ui.color(StyleColor::FrameBg);
    let fill = if held { ui.color(StyleColor::SliderGrabActive) } else { ui.color(StyleColor::SliderGrab) };
    let draw = &mut ui.ctx.draw_list;
    draw.filled_rect(track, TRACK_H * 0.5, bg);
    draw.filled_rect(Rect::new(track.min, Vec2::new(grab_x, track.max.y)), TRACK_H * 0.5, fill);
    draw.filled_circle(Vec2::new(grab_x, track.center().y), GRAB_R, fill, 16);

    changed
}

pub fn slider_float(
    ui:     &mut Ui<'_>,
    label:  &str,
    v:      &mut f32,
    min:    f32,
    max:    f32,
    format: &str,
    flags:  SliderFlags,
) -> bool {
    let (text, id_src) = parse_label(label);
    let id  = ui.ctx.make_id(id_src);
    let fmt = if format.is_empty() { "%.3f" } else { format };
    let mut x = *v as f64;
    let changed = slider_scalar(ui, id, text, &mut x, min as f64, max as f64, fmt, flags, None);
    if changed { *v = x as f32; }
    changed
}

pub fn slider_int(
    ui:     &mut Ui<'_>,
    label:  &str,
    v:      &mut i32,
    min:    i32,
    max:    i32,
    format: &str,
    flags:  SliderFlags,
) -> bool {
    let (text, id_src) = parse_label(label);
    let id  = ui.ctx.make_id(id_src);
    let fmt = if format.is_empty() { "%d" } else { format };
    let mut x = *v as f64;
    slider_scalar(ui, id, text, &mut x, min as f64, max as f64, fmt, flags, None);
    let rounded = x.round() as i32;
    let changed = rounded != *v;
    *v = rounded;
    changed
}

/// Label line followed by independent "min" and "max" sliders side by side.
/// Nothing forces `lo <= hi`.
#[allow(clippy::too_many_arguments)]
pub fn range_slider_float(
    ui:     &mut Ui<'_>,
    label:  &str,
    lo:     &mut f32,
    hi:     &mut f32,
    min:    f32,
    max:    f32,
    format: &str,
    _power: f32,
) -> bool {
    if ui.ctx.current_window().is_none() { return false; }
    let (text, id_src) = parse_label(label);

    let tc = ui.color(StyleColor::TextInactive);
    ui.text_colored(tc, text);

    let fmt = if format.is_empty() { "%.3f" } else { format };
    let (fmt_lo, fmt_hi) = split_pair(fmt);
    let spacing = ui.ctx.style.item_spacing.0;
    let half    = ((ui.available_width() - spacing) * 0.5).max(1.0);

    ui.push_id(id_src);
    let id_lo = ui.ctx.make_id("##min");
    let id_hi = ui.ctx.make_id("##max");

    let mut changed = false;
    let mut a = *lo as f64;
    if slider_scalar(ui, id_lo, "min", &mut a, min as f64, max as f64, fmt_lo, SliderFlags::empty(), Some(half)) {
        *lo = a as f32;
        changed = true;
    }
    ui.same_line_with(spacing);
    let mut b = *hi as f64;
    if slider_scalar(ui, id_hi, "max", &mut b, min as f64, max as f64, fmt_hi, SliderFlags::empty(), Some(half)) {
        *hi = b as f32;
        changed = true;
    }
    ui.pop_id();
    changed
}

#[cfg(test)]
mod tests {
    use crate::testing::{context, in_window, move_to};
    use crate::{Context, MouseButton, SliderFlags, Vec2};

    fn press_at(ctx: &mut Context, p: Vec2) {
        move_to(ctx, p);
        ctx.input_mut().set_mouse_button(MouseButton::Left, true);
    }

    #[test]
    fn dragging_to_the_right_edge_reaches_max() {
        let mut ctx = context();
        let mut fov = 90;
        press_at(&mut ctx, Vec2::new(399.0, 25.0));
        let changed = in_window(&mut ctx, |ui| {
            ui.slider_int("Field Of View", &mut fov, -180, 180, "%d", SliderFlags::empty())
        });
        assert!(changed);
        assert_eq!(fov, 180);
    }

    #[test]
    fn idle_slider_reports_no_change() {
        let mut ctx = context();
        let mut v = 0.25f32;
        assert!(!in_window(&mut ctx, |ui| ui.slider_float("x", &mut v, 0.0, 1.0, "%.2f", SliderFlags::empty())));
        assert_eq!(v, 0.25);
    }

    #[test]
    fn always_clamp_pulls_values_into_range() {
        let mut ctx = context();
        let mut v = 5.0f32;
        assert!(in_window(&mut ctx, |ui| ui.slider_float("x", &mut v, 0.0, 1.0, "", SliderFlags::ALWAYS_CLAMP)));
        assert_eq!(v, 1.0);

        let mut w = 5.0f32;
        in_window(&mut ctx, |ui| ui.slider_float("y", &mut w, 0.0, 1.0, "", SliderFlags::empty()));
        assert_eq!(w, 5.0);
    }

    #[test]
    fn range_halves_move_independently() {
        let mut ctx = context();
        let (mut lo, mut hi) = (-100.0f32, 100.0f32);

        // The label line is one font size tall; the min slider starts below it.
        let fs = ctx.style().font_size;
        press_at(&mut ctx, Vec2::new(180.0, fs + 20.0));
        let changed = in_window(&mut ctx, |ui| {
            ui.range_slider_float("Hit Chance", &mut lo, &mut hi, -100.0, 100.0, "%.1f, %.1f", 1.0)
        });
        assert!(changed);
        assert!(lo > 90.0, "min slider dragged to its right end, got {lo}");
        assert_eq!(hi, 100.0);
    }

    #[test]
    fn inverted_range_is_left_alone() {
        let mut ctx = context();
        let (mut lo, mut hi) = (80.0f32, 20.0f32);
        for _ in 0..2 {
            let changed = in_window(&mut ctx, |ui| {
                ui.range_slider_float("Hit Chance", &mut lo, &mut hi, 0.0, 100.0, "%.1f, %.1f", 1.0)
            });
            assert!(!changed);
        }
        assert_eq!((lo, hi), (80.0, 20.0));
    }

    #[test]
    fn range_ids_are_scoped_by_label() {
        let mut ctx = context();
        in_window(&mut ctx, |ui| {
            ui.push_id("Hit Chance");
            let a = ui.ctx.make_id("##min");
            ui.pop_id();
            ui.push_id("Damage");
            let b = ui.ctx.make_id("##min");
            ui.pop_id();
            assert_ne!(a, b);
        });
    }
}
