//! Window widget – begin / end pair.

use crate::{
    context::{FrameKind, WindowFrame, WindowState},
    id::parse_label,
    input::MouseButton,
    layout::Layout,
    style::StyleColor,
    ui::Ui,
    Rect, Vec2, WindowFlags,
};

const TITLE_BAR_H:  f32  = 22.0;
const DEFAULT_POS:  Vec2 = Vec2 { x: 20.0,  y: 20.0  };
const DEFAULT_SIZE: Vec2 = Vec2 { x: 300.0, y: 200.0 };

pub fn begin(ui: &mut Ui<'_>, name: &str, flags: WindowFlags) -> bool {
    let (title, id_src) = parse_label(name);
    let win_id   = ui.ctx.make_id(id_src);
    let drag_id  = win_id.with("#move");
    let next_pos  = ui.ctx.next_window_pos.take();
    let next_size = ui.ctx.next_window_size.take();
    let display   = ui.ctx.input.display_size;
    let dragging  = ui.ctx.is_active(drag_id);
    let delta     = ui.ctx.input.mouse_delta;

    let ws = ui.ctx.windows.entry(win_id).or_insert_with(|| WindowState {
        pos:   DEFAULT_POS,
        size:  DEFAULT_SIZE,
        flags,
    });
    if let Some(p) = next_pos  { ws.pos  = p; }
    if let Some(s) = next_size { ws.size = s; }
    ws.flags = flags;

    if dragging && !flags.contains(WindowFlags::NO_MOVE) {
        ws.pos += delta;
        ws.pos.x = ws.pos.x.clamp(40.0 - ws.size.x, (display.x - 40.0).max(0.0));
        ws.pos.y = ws.pos.y.clamp(0.0, (display.y - 40.0).max(0.0));
    }
    let rect = ws.rect();

    // ── Drawing ───────────────────────────────────────────────────────────────

    let rounding = ui.ctx.style.window_rounding;
    let padding  = ui.ctx.style.window_padding;
    if !flags.contains(WindowFlags::NO_BACKGROUND) {
        let bg = ui.color(StyleColor::WindowBg);
        ui.ctx.draw_list.filled_rect(rect, rounding, bg);
    }

    let titled = !flags.contains(WindowFlags::NO_TITLE_BAR);
    ui.ctx.draw_list.push_clip_rect(rect);
    if titled {
        let bar = Rect::from_min_size(rect.min, Vec2::new(rect.width(), TITLE_BAR_H));
        let bar_col = ui.color(StyleColor::Header);
        ui.ctx.draw_list.filled_rect(bar, 0.0, bar_col);
        let tc = ui.color(StyleColor::Text);
        let fs = ui.font_size();
        ui.draw_text(title, Vec2::new(rect.min.x + 8.0, rect.min.y + (TITLE_BAR_H - fs) * 0.5), tc);
    }

    let content_start = Vec2::new(
        rect.min.x + padding.0,
        rect.min.y + if titled { TITLE_BAR_H } else { 0.0 } + padding.1,
    );
    let layout = Layout::new(content_start, rect.width() - padding.0 * 2.0);
    ui.ctx.id_stack.push(win_id);
    ui.ctx.window_stack.push(WindowFrame { id: win_id, kind: FrameKind::Window, rect, layout });
    true
}

pub fn end(ui: &mut Ui<'_>) {
    if ui.ctx.current_window().map(|f| f.kind) != Some(FrameKind::Window) {
        log::debug!("end() without a matching begin()");
        return;
    }
    let Some(frame) = ui.ctx.window_stack.pop() else { return };
    let movable = ui.ctx.windows.get(&frame.id)
        .map_or(false, |w| !w.flags.contains(WindowFlags::NO_MOVE));

    // A press on empty window space starts a drag.
    if movable
        && ui.ctx.active_item.is_none()
        && ui.ctx.input.mouse_clicked(MouseButton::Left)
        && ui.ctx.is_mouse_hovering(frame.rect)
    {
        ui.ctx.active_item = Some(frame.id.with("#move"));
    }

    ui.ctx.draw_list.pop_clip_rect();
    ui.ctx.id_stack.pop();
}
