//! Per-frame context – owns all mutable GUI state.

use std::collections::HashMap;
use ahash::RandomState;

/// HashMap with a fixed-seed ahash hasher.
type FxMap<K, V> = HashMap<K, V, RandomState>;

fn new_fxmap<K, V>() -> FxMap<K, V> {
    HashMap::with_hasher(RandomState::with_seeds(0x7261676e, 0x6172656b, 0x0d3d1100, 0x5ca1ab1e))
}

use crate::{
    draw_list::DrawList,
    id::Id,
    input::{InputState, MouseButton},
    layout::Layout,
    renderer::RenderFrame,
    style::Style,
    Rect, Vec2, WindowFlags,
};

// ─── Persistent window state ─────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct WindowState {
    pub pos:   Vec2,
    pub size:  Vec2,
    pub flags: WindowFlags,
}

impl WindowState {
    pub fn rect(&self) -> Rect { Rect::from_min_size(self.pos, self.size) }
}

// ─── Persistent per-widget storage ───────────────────────────────────────────

/// Small state blob stored for a widget between frames.
#[derive(Debug, Clone, Default)]
pub struct WidgetStorage {
    pub float:  [f32; 4],
    pub int:    [i32; 4],
    pub string: String,
    pub active: bool,
    pub open:   bool,
}

// ─── Container stack ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FrameKind { Window, Child, Popup }

/// One open container (window, child panel or popup) with its own cursor.
#[derive(Debug)]
pub(crate) struct WindowFrame {
    pub id:     Id,
    pub kind:   FrameKind,
    pub rect:   Rect,
    pub layout: Layout,
}

// ─── Context ─────────────────────────────────────────────────────────────────

/// The central state container. Create one per render target.
///
/// ```rust,ignore
/// let mut ctx = Context::new();
/// ctx.input_mut().set_mouse_pos(Vec2::new(100.0, 200.0));
/// let frame = ctx.frame(&font, 1.0, |ui| { /* widgets */ });
/// renderer.render(frame);
/// ```
#[derive(Debug)]
pub struct Context {
    pub(crate) style:          Style,
    pub(crate) input:          InputState,
    pub(crate) draw_list:      DrawList,
    /// Overlay layer for open popups, composited on top in `end_frame`.
    /// Swapped with `draw_list` while a popup is being built.
    pub(crate) popup_list:     DrawList,

    // Persistent state maps (keyed by widget/window ID)
    pub(crate) windows:        FxMap<Id, WindowState>,
    pub(crate) widget_storage: FxMap<Id, WidgetStorage>,

    pub(crate) window_stack:   Vec<WindowFrame>,

    // Interaction tracking
    pub(crate) hot_item:    Option<Id>,   // hovered this frame
    pub(crate) active_item: Option<Id>,   // pressed / being dragged
    pub(crate) focus_item:  Option<Id>,   // keyboard focus

    pub(crate) id_stack: Vec<Id>,

    // Popups: at most one is open at a time.
    pub(crate) open_popup:       Option<Id>,
    pub(crate) popup_drawn:      bool,
    /// The open popup stays up when one of its items is chosen.
    pub(crate) popup_multi:      bool,
    pub(crate) popup_rects:      Vec<Rect>,
    pub(crate) popup_rects_prev: Vec<Rect>,

    pub(crate) next_window_pos:  Option<Vec2>,
    pub(crate) next_window_size: Option<Vec2>,

    pub(crate) delta_time: f32,
}

impl Default for Context {
    fn default() -> Self { Self::new() }
}

impl Context {
    pub fn new() -> Self {
        Self {
            style:            Style::default(),
            input:            InputState::default(),
            draw_list:        DrawList::default(),
            popup_list:       DrawList::default(),
            windows:          new_fxmap(),
            widget_storage:   new_fxmap(),
            window_stack:     Vec::new(),
            hot_item:         None,
            active_item:      None,
            focus_item:       None,
            id_stack:         Vec::new(),
            open_popup:       None,
            popup_drawn:      false,
            popup_multi:      false,
            popup_rects:      Vec::new(),
            popup_rects_prev: Vec::new(),
            next_window_pos:  None,
            next_window_size: None,
            delta_time:       1.0 / 60.0,
        }
    }

    // ── Configuration ─────────────────────────────────────────────────────────

    pub fn style(&self) -> &Style { &self.style }
    pub fn style_mut(&mut self) -> &mut Style { &mut self.style }
    pub fn set_display_size(&mut self, sz: Vec2) { self.input.display_size = sz; }
    pub fn set_delta_time(&mut self, dt: f32)    { self.delta_time = dt.max(0.0); }
    pub fn input_mut(&mut self) -> &mut InputState { &mut self.input }
    pub fn input(&self)         -> &InputState     { &self.input }

    // ── Frame lifecycle ───────────────────────────────────────────────────────

    /// Begin a new frame. Call this before any widget methods.
    pub fn new_frame(&mut self) {
        self.draw_list.clear();
        self.popup_list.clear();
        self.window_stack.clear();
        self.id_stack.clear();
        self.hot_item    = None;
        self.popup_drawn = false;
        self.sync_alpha();
    }

    /// Finish the frame: composite the popup layer, roll per-frame state over
    /// and clear this frame's input edges.
    pub fn end_frame(&mut self) -> RenderFrame<'_> {
        if !self.window_stack.is_empty() {
            log::warn!("{} container(s) still open at end of frame", self.window_stack.len());
            self.unwind();
        }

        let mut popups = std::mem::take(&mut self.popup_list);
        self.draw_list.append(&mut popups);
        self.popup_list = popups;

        self.popup_rects_prev = std::mem::take(&mut self.popup_rects);
        if !self.popup_drawn { self.open_popup = None; }
        if !self.input.mouse_down(MouseButton::Left) { self.active_item = None; }
        self.input.end_frame();

        RenderFrame {
            draw_list:    &self.draw_list,
            display_size: self.input.display_size,
            scale_factor: 1.0,
        }
    }

    /// Close containers left open by an unbalanced caller.
    fn unwind(&mut self) {
        while let Some(frame) = self.window_stack.last() {
            match frame.kind {
                FrameKind::Popup => { self.end_popup(); }
                _ => {
                    self.window_stack.pop();
                    self.draw_list.pop_clip_rect();
                    self.id_stack.pop();
                }
            }
        }
    }

    /// Propagate `style.alpha` into both draw layers.
    pub(crate) fn sync_alpha(&mut self) {
        self.draw_list.set_alpha(self.style.alpha);
        self.popup_list.set_alpha(self.style.alpha);
    }

    // ── ID helpers ────────────────────────────────────────────────────────────

    pub fn push_id(&mut self, s: &str) { let id = self.make_id(s); self.id_stack.push(id); }
    pub fn pop_id(&mut self) { self.id_stack.pop(); }

    pub(crate) fn make_id(&self, label_id: &str) -> Id {
        let base = Id::new(label_id);
        self.id_stack.last().map_or(base, |&scope| scope.combine(base))
    }

    // ── Interaction helpers ───────────────────────────────────────────────────

    pub(crate) fn is_active(&self, id: Id) -> bool { self.active_item == Some(id) }

    /// Widgets outside the popup layer are not hoverable where last frame's
    /// popups covered the screen.
    pub(crate) fn hover_blocked(&self) -> bool {
        !self.in_popup() && self.popup_rects_prev.iter().any(|r| r.contains(self.input.mouse_pos))
    }

    pub(crate) fn is_mouse_hovering(&self, rect: Rect) -> bool {
        let mouse = self.input.mouse_pos;
        rect.contains(mouse)
            && self.draw_list.clip_rect().map_or(true, |c| c.contains(mouse))
            && !self.hover_blocked()
    }

    /// Test a rect against the mouse and update hot/active.
    /// Returns `(hovered, held, clicked)`.
    ///
    /// A press and a release inside the same frame count as a click.
    pub(crate) fn button_behavior(&mut self, id: Id, rect: Rect) -> (bool, bool, bool) {
        let hovered = self.is_mouse_hovering(rect)
            && self.active_item.map_or(true, |a| a == id);
        if hovered { self.hot_item = Some(id); }

        if hovered && self.input.mouse_clicked(MouseButton::Left) {
            self.active_item = Some(id);
            self.focus_item  = Some(id);
        }

        let active  = self.active_item == Some(id);
        let clicked = active && hovered && self.input.mouse_released(MouseButton::Left);
        (hovered, active, clicked)
    }

    // ── Popups ────────────────────────────────────────────────────────────────

    pub(crate) fn in_popup(&self) -> bool {
        self.window_stack.iter().any(|f| f.kind == FrameKind::Popup)
    }

    pub(crate) fn is_popup_open(&self, id: Id) -> bool { self.open_popup == Some(id) }
    pub(crate) fn open_popup(&mut self, id: Id)  { self.open_popup = Some(id); }

    pub(crate) fn close_popup(&mut self) { self.open_popup = None; }

    /// Start emitting into the popup layer inside `rect`.
    pub(crate) fn begin_popup(&mut self, id: Id, rect: Rect, padding: (f32, f32)) {
        if !self.in_popup() {
            std::mem::swap(&mut self.draw_list, &mut self.popup_list);
        }
        self.popup_drawn = true;
        self.popup_rects.push(rect);
        self.draw_list.push_clip_rect(rect);
        self.id_stack.push(id);

        let start  = rect.min + Vec2::new(padding.0, padding.1);
        let layout = Layout::new(start, rect.width() - padding.0 * 2.0);
        self.window_stack.push(WindowFrame { id, kind: FrameKind::Popup, rect, layout });
    }

    /// Close the innermost popup; returns its finished frame.
    pub(crate) fn end_popup(&mut self) -> Option<WindowFrame> {
        if self.window_stack.last().map(|f| f.kind) != Some(FrameKind::Popup) {
            log::debug!("end_popup without a matching begin");
            return None;
        }
        let frame = self.window_stack.pop();
        self.draw_list.pop_clip_rect();
        self.id_stack.pop();
        if !self.in_popup() {
            std::mem::swap(&mut self.draw_list, &mut self.popup_list);
        }
        frame
    }

    // ── Widget storage ────────────────────────────────────────────────────────

    pub(crate) fn get_storage(&self, id: Id) -> Option<&WidgetStorage> {
        self.widget_storage.get(&id)
    }
    pub(crate) fn get_storage_mut(&mut self, id: Id) -> &mut WidgetStorage {
        self.widget_storage.entry(id).or_default()
    }

    // ── Current container helpers ─────────────────────────────────────────────

    pub(crate) fn current_window(&self) -> Option<&WindowFrame> {
        self.window_stack.last()
    }

    pub(crate) fn current_layout_mut(&mut self) -> Option<&mut Layout> {
        self.window_stack.last_mut().map(|w| &mut w.layout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Rect { Rect::new(Vec2::ZERO, Vec2::splat(20.0)) }

    #[test]
    fn press_and_release_in_one_frame_is_a_click() {
        let mut ctx = Context::new();
        ctx.input.set_mouse_pos(Vec2::splat(5.0));
        ctx.input.set_mouse_button(MouseButton::Left, true);
        ctx.input.set_mouse_button(MouseButton::Left, false);
        ctx.new_frame();
        let (hovered, _, clicked) = ctx.button_behavior(Id::new("b"), square());
        assert!(hovered && clicked);
        let _ = ctx.end_frame();
        assert!(ctx.active_item.is_none());
    }

    #[test]
    fn click_spread_over_frames_fires_on_release() {
        let mut ctx = Context::new();
        let id = Id::new("b");
        ctx.input.set_mouse_pos(Vec2::splat(5.0));
        ctx.input.set_mouse_button(MouseButton::Left, true);
        ctx.new_frame();
        let (_, held, clicked) = ctx.button_behavior(id, square());
        assert!(held && !clicked);
        let _ = ctx.end_frame();
        assert!(ctx.is_active(id), "held item stays active across frames");

        ctx.input.set_mouse_button(MouseButton::Left, false);
        ctx.new_frame();
        let (_, _, clicked) = ctx.button_behavior(id, square());
        assert!(clicked);
        let _ = ctx.end_frame();
        assert!(ctx.active_item.is_none());
    }

    #[test]
    fn releasing_outside_does_not_click() {
        let mut ctx = Context::new();
        let id = Id::new("b");
        ctx.input.set_mouse_pos(Vec2::splat(5.0));
        ctx.input.set_mouse_button(MouseButton::Left, true);
        ctx.new_frame();
        ctx.button_behavior(id, square());
        let _ = ctx.end_frame();

        ctx.input.set_mouse_pos(Vec2::splat(50.0));
        ctx.input.set_mouse_button(MouseButton::Left, false);
        ctx.new_frame();
        let (hovered, _, clicked) = ctx.button_behavior(id, square());
        assert!(!hovered && !clicked);
    }

    #[test]
    fn last_frames_popup_blocks_hover_underneath() {
        let mut ctx = Context::new();
        let popup = Id::new("popup");
        ctx.new_frame();
        ctx.open_popup(popup);
        ctx.begin_popup(popup, square(), (0.0, 0.0));
        ctx.end_popup();
        let _ = ctx.end_frame();
        assert!(ctx.is_popup_open(popup));

        ctx.input.set_mouse_pos(Vec2::splat(5.0));
        ctx.new_frame();
        let (hovered, _, _) = ctx.button_behavior(Id::new("under"), square());
        assert!(!hovered);
    }

    #[test]
    fn popup_closes_when_no_longer_drawn() {
        let mut ctx = Context::new();
        let popup = Id::new("popup");
        ctx.new_frame();
        ctx.open_popup(popup);
        let _ = ctx.end_frame();
        assert!(!ctx.is_popup_open(popup));
    }

    #[test]
    fn popup_layer_lands_on_top() {
        let mut ctx = Context::new();
        ctx.new_frame();
        ctx.begin_popup(Id::new("p"), square(), (0.0, 0.0));
        ctx.draw_list.filled_rect(square(), 0.0, crate::Color::rgb(1.0, 0.0, 0.0));
        ctx.end_popup();
        ctx.draw_list.filled_rect(square(), 0.0, crate::Color::rgb(0.0, 0.0, 1.0));
        let frame = ctx.end_frame();
        let cols: Vec<u32> = frame.draw_list.vtx_buf.iter().map(|v| v.col).collect();
        assert_eq!(cols.first().copied(), Some(crate::Color::rgb(0.0, 0.0, 1.0).to_rgba_u32()));
        assert_eq!(cols.last().copied(),  Some(crate::Color::rgb(1.0, 0.0, 0.0).to_rgba_u32()));
    }
}
