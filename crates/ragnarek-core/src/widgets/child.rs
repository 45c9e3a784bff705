//! Child panels: titled, rounded sub-regions with their own cursor.
//!
//! A child is positioned at the parent's cursor when it begins and placed
//! into the parent's layout as a single item when it ends. Names with a
//! `##` prefix draw no title strip and use the window padding instead of
//! the panel padding.

use crate::{
    context::{FrameKind, WindowFrame},
    flags::ChildFlags,
    id::parse_label,
    layout::Layout,
    style::StyleColor,
    ui::Ui,
    Rect, Vec2, WindowFlags,
};

/// Resolve one requested extent: positive is absolute, zero fills the
/// available space, negative leaves that much space free.
fn resolve(requested: f32, avail: f32) -> f32 {
    if requested > 0.0 { requested } else { (avail + requested).max(1.0) }
}

pub fn begin_child(
    ui:           &mut Ui<'_>,
    name:         &str,
    size:         Vec2,
    child_flags:  ChildFlags,
    window_flags: WindowFlags,
) -> bool {
    if ui.ctx.current_window().is_none() { return false; }

    let (title, id_src) = parse_label(name);
    let id     = ui.ctx.make_id(id_src);
    let titled = !title.is_empty();
    let avail  = ui.content_region_avail();
    let pos    = ui.cursor_screen_pos();

    let width = resolve(size.x, avail.x);
    let auto_height = size.y <= 0.0 || child_flags.contains(ChildFlags::AUTO_RESIZE_Y);
    let height = if auto_height {
        match ui.ctx.get_storage(id) {
            Some(s) if s.active => s.float[0],
            _                   => avail.y.max(1.0),
        }
    } else {
        size.y
    };
    let rect = Rect::from_min_size(pos, Vec2::new(width, height));

    // ── Drawing ───────────────────────────────────────────────────────────────

    let style     = &ui.ctx.style;
    let rounding  = style.child_rounding;
    let title_h   = if titled { style.child_title_height } else { 0.0 };
    let padding   = if titled { style.child_padding } else { style.window_padding };
    let bg        = style.color(StyleColor::ChildBg);
    let border    = style.color(StyleColor::Border);
    let separator = style.color(StyleColor::Separator);
    let tc        = style.color(StyleColor::Text);

    if !window_flags.contains(WindowFlags::NO_BACKGROUND) {
        ui.ctx.draw_list.filled_rect(rect, rounding, bg);
    }
    if child_flags.contains(ChildFlags::BORDER) {
        ui.ctx.draw_list.rect_outline(rect, 1.0, border);
    }

    ui.ctx.draw_list.push_clip_rect(rect);
    if titled {
        let fs = ui.font_size();
        ui.draw_text(title, Vec2::new(rect.min.x + padding.0, rect.min.y + (title_h - fs) * 0.5), tc);
        ui.ctx.draw_list.filled_rect(
            Rect::from_min_size(Vec2::new(rect.min.x, rect.min.y + title_h - 1.0), Vec2::new(width, 1.0)),
            0.0,
            separator,
        );
    }

    let start  = Vec2::new(rect.min.x + padding.0, rect.min.y + title_h + padding.1);
    let layout = Layout::new(start, width - padding.0 * 2.0);
    ui.ctx.id_stack.push(id);
    ui.ctx.window_stack.push(WindowFrame { id, kind: FrameKind::Child, rect, layout });
    true
}

pub fn end_child(ui: &mut Ui<'_>) {
    if ui.ctx.current_window().map(|f| f.kind) != Some(FrameKind::Child) {
        log::debug!("end_child() without a matching begin_child()");
        return;
    }
    let Some(frame) = ui.ctx.window_stack.pop() else { return };
    ui.ctx.draw_list.pop_clip_rect();
    ui.ctx.id_stack.pop();

    // Content height for next frame's auto-sized panel.
    let bottom_pad = if frame.layout.origin.y > frame.rect.min.y { ui.ctx.style.child_padding.1 } else { 0.0 };
    let content_h  = frame.layout.content_max.y - frame.rect.min.y + bottom_pad;
    let storage    = ui.ctx.get_storage_mut(frame.id);
    storage.float[0] = content_h.max(1.0);
    storage.active   = true;

    ui.layout_next(frame.rect.size());
}

#[cfg(test)]
mod tests {
    use crate::testing::{context, in_window};
    use crate::{ChildFlags, Vec2, WindowFlags};

    #[test]
    fn child_without_window_is_skipped() {
        let mut ctx = context();
        let _ = ctx.frame(&crate::testing::TestFont, 1.0, |ui| {
            assert!(!ui.begin_child("Orphan", Vec2::new(100.0, 100.0), ChildFlags::empty(), WindowFlags::empty()));
            ui.end_child();
        });
    }

    #[test]
    fn explicit_size_and_parent_placement() {
        let mut ctx = context();
        in_window(&mut ctx, |ui| {
            assert!(ui.begin_child("##container", Vec2::new(200.0, 150.0), ChildFlags::empty(), WindowFlags::empty()));
            assert_eq!(ui.window_size(), Vec2::new(200.0, 150.0));
            ui.end_child();
            let r = ui.item_rect();
            assert_eq!(r.size(), Vec2::new(200.0, 150.0));
            assert_eq!(ui.cursor_pos(), Vec2::new(0.0, 150.0));
        });
    }

    #[test]
    fn zero_height_panel_sizes_to_last_frames_content() {
        let mut ctx = context();
        let panel = |ui: &mut crate::Ui<'_>| {
            ui.begin_child("General", Vec2::new(180.0, 0.0), ChildFlags::empty(), WindowFlags::empty());
            ui.dummy(Vec2::new(10.0, 40.0));
            ui.dummy(Vec2::new(10.0, 40.0));
            ui.end_child();
            ui.item_rect().height()
        };
        in_window(&mut ctx, panel);
        let h = in_window(&mut ctx, panel);
        let s = crate::Style::default();
        assert_eq!(h, s.child_title_height + s.child_padding.1 * 2.0 + 80.0);
    }

    #[test]
    fn same_names_in_different_panels_get_distinct_ids() {
        let mut ctx = context();
        in_window(&mut ctx, |ui| {
            ui.begin_child("Anti Aim", Vec2::new(100.0, 100.0), ChildFlags::empty(), WindowFlags::empty());
            let a = ui.ctx.make_id("Enabled");
            ui.end_child();
            ui.begin_child("General", Vec2::new(100.0, 100.0), ChildFlags::empty(), WindowFlags::empty());
            let b = ui.ctx.make_id("Enabled");
            ui.end_child();
            assert_ne!(a, b);
        });
    }
}
