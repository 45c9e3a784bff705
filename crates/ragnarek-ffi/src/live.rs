//! Widget calls forwarded to the `Ui` bound on the current thread.
//!
//! A C caller has no `Ui` to pass, so the host binds one around the code
//! that calls into C:
//!
//! ```ignore
//! ctx.frame(&font, 1.0, |ui| ragnarek_ffi::bind(ui, || unsafe { draw_menu_from_c() }));
//! ```
//!
//! With nothing bound every call takes the skip path: `false`, no effect.

use std::cell::Cell;
use std::ptr;

use ragnarek_core::{
    ChildFlags, Color, ColorEditFlags, ComboFlags, EspPreview, Rect, SelectableFlags, SliderFlags, TextureId, Ui,
    Vec2, WindowFlags,
};

use crate::WidgetApi;

thread_local! {
    static BOUND: Cell<*mut ()> = const { Cell::new(ptr::null_mut()) };
}

/// Restores the previous binding, also when the callback unwinds.
struct Rebind(*mut ());

impl Drop for Rebind {
    fn drop(&mut self) { BOUND.with(|b| b.set(self.0)); }
}

/// Make `ui` the target of [`LiveWidgets`] on this thread while `f` runs.
/// Bindings nest; the outer one is restored afterwards.
pub fn bind<R>(ui: &mut Ui<'_>, f: impl FnOnce() -> R) -> R {
    let prev = BOUND.with(|b| b.replace(ui as *mut Ui<'_> as *mut ()));
    let _restore = Rebind(prev);
    f()
}

pub fn is_bound() -> bool {
    BOUND.with(|b| !b.get().is_null())
}

fn with_ui<R>(f: impl FnOnce(&mut Ui<'_>) -> R) -> Option<R> {
    let p = BOUND.with(|b| b.get());
    if p.is_null() {
        log::trace!("widget call with no bound Ui");
        return None;
    }
    // SAFETY: `p` was stored by `bind` from a `&mut Ui` that is not otherwise
    // used until `bind` returns, and is cleared before that borrow ends.
    let ui = unsafe { &mut *(p as *mut Ui<'_>) };
    Some(f(ui))
}

#[derive(Debug, Default, Clone, Copy)]
pub struct LiveWidgets;

impl WidgetApi for LiveWidgets {
    fn begin_child(&mut self, name: &str, size: Vec2, child_flags: ChildFlags, window_flags: WindowFlags) -> bool {
        with_ui(|ui| ui.begin_child(name, size, child_flags, window_flags)).unwrap_or(false)
    }

    fn end_child(&mut self) {
        with_ui(|ui| ui.end_child());
    }

    fn tab(&mut self, selected: bool, id: u32, icon: &str, size: Vec2) -> bool {
        with_ui(|ui| ui.tab(selected, id, icon, size)).unwrap_or(false)
    }

    fn checkbox(&mut self, label: &str, v: &mut bool) -> bool {
        with_ui(|ui| ui.checkbox(label, v)).unwrap_or(false)
    }

    fn checkbox_clicked(&mut self, label: &str, v: &mut bool) {
        with_ui(|ui| ui.checkbox_clicked(label, v));
    }

    fn checkbox_picker(&mut self, label: &str, v: &mut bool, col: &mut [f32; 3], flags: ColorEditFlags) -> bool {
        with_ui(|ui| ui.checkbox_picker(label, v, col, flags)).unwrap_or(false)
    }

    fn checkbox_double_picker(
        &mut self,
        label: &str,
        v:     &mut bool,
        col1:  &mut [f32; 3],
        col2:  &mut [f32; 3],
        flags: ColorEditFlags,
    ) -> bool {
        with_ui(|ui| ui.checkbox_double_picker(label, v, col1, col2, flags)).unwrap_or(false)
    }

    fn slider_int(&mut self, label: &str, v: &mut i32, min: i32, max: i32, format: &str, flags: SliderFlags) -> bool {
        with_ui(|ui| ui.slider_int(label, v, min, max, format, flags)).unwrap_or(false)
    }

    fn slider_float(&mut self, label: &str, v: &mut f32, min: f32, max: f32, format: &str, flags: SliderFlags) -> bool {
        with_ui(|ui| ui.slider_float(label, v, min, max, format, flags)).unwrap_or(false)
    }

    fn range_slider_float(
        &mut self,
        label:  &str,
        lo:     &mut f32,
        hi:     &mut f32,
        min:    f32,
        max:    f32,
        format: &str,
        power:  f32,
    ) -> bool {
        with_ui(|ui| ui.range_slider_float(label, lo, hi, min, max, format, power)).unwrap_or(false)
    }

    fn color_edit4(&mut self, label: &str, col: &mut [f32; 4], flags: ColorEditFlags) -> bool {
        with_ui(|ui| ui.color_edit4(label, col, flags)).unwrap_or(false)
    }

    fn color_picker4(&mut self, label: &str, col: &mut [f32; 4], flags: ColorEditFlags, ref_col: Option<[f32; 4]>) -> bool {
        with_ui(|ui| ui.color_picker4(label, col, flags, ref_col)).unwrap_or(false)
    }

    fn color_button(&mut self, desc_id: &str, col: [f32; 4], flags: ColorEditFlags, size: Vec2) -> bool {
        with_ui(|ui| ui.color_button(desc_id, col, flags, size)).unwrap_or(false)
    }

    fn selectable(&mut self, label: &str, selected: bool, flags: SelectableFlags, size: Vec2) -> bool {
        with_ui(|ui| ui.selectable(label, selected, flags, size)).unwrap_or(false)
    }

    fn selectable_ptr(&mut self, label: &str, selected: &mut bool, flags: SelectableFlags, size: Vec2) -> bool {
        with_ui(|ui| ui.selectable_toggle(label, selected, flags, size)).unwrap_or(false)
    }

    fn begin_combo(&mut self, label: &str, preview: &str, val: i32, multi: bool, flags: ComboFlags) -> bool {
        with_ui(|ui| ui.begin_combo(label, preview, val, multi, flags)).unwrap_or(false)
    }

    fn end_combo(&mut self) {
        with_ui(|ui| ui.end_combo());
    }

    fn multi_combo(&mut self, label: &str, values: &mut [bool], labels: &[&str]) {
        with_ui(|ui| ui.multi_combo(label, values, labels));
    }

    fn combo_array(&mut self, label: &str, current: &mut i32, items: &[&str], popup_max_height: i32) -> bool {
        let mut index = usize::try_from(*current).unwrap_or(usize::MAX);
        let changed = with_ui(|ui| ui.combo(label, &mut index, items, popup_max_height)).unwrap_or(false);
        if changed {
            *current = i32::try_from(index).unwrap_or(*current);
        }
        changed
    }

    fn keybind(&mut self, label: &str, key: &mut i32, show_label: bool) -> bool {
        with_ui(|ui| ui.keybind(label, key, show_label)).unwrap_or(false)
    }

    fn text_center(&mut self, rect: Rect, color: Color, text: &str, align: Vec2) {
        with_ui(|ui| ui.text_center(rect, color, text, align));
    }

    fn icon_box(&mut self, icon: &str, size: Vec2, bg: Color, icon_col: Color, border: Color) -> bool {
        with_ui(|ui| ui.icon_box(icon, size, bg, icon_col, border)).unwrap_or(false)
    }

    fn color_button_simple(&mut self, name: &str, size: Vec2, bg: Color) -> bool {
        with_ui(|ui| ui.color_button_simple(name, size, bg)).unwrap_or(false)
    }

    fn esp_preview(&mut self, texture: Option<TextureId>, esp: &EspPreview) {
        with_ui(|ui| ui.esp_preview(texture, esp));
    }
}

// ─── C entry points ──────────────────────────────────────────────────────────

c_surface!(#[cfg_attr(not(feature = "stub"), no_mangle)] LiveWidgets);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{context, TestFont};

    #[test]
    fn unbound_calls_take_the_skip_path() {
        let mut on = false;
        assert!(!is_bound());
        assert!(!LiveWidgets.begin_child("c", Vec2::ZERO, ChildFlags::empty(), WindowFlags::empty()));
        assert!(!LiveWidgets.checkbox("x", &mut on));
        assert!(!on);
    }

    #[test]
    fn bound_calls_draw_into_the_frame() {
        let mut ctx = context();
        let frame = ctx.frame(&TestFont, 1.0, |ui| {
            ui.begin("host", WindowFlags::empty());
            bind(ui, || {
                assert!(is_bound());
                assert!(LiveWidgets.begin_child("panel", Vec2::new(200.0, 100.0), ChildFlags::BORDER, WindowFlags::empty()));
                LiveWidgets.text_center(
                    Rect::new(Vec2::ZERO, Vec2::new(50.0, 20.0)),
                    Color::WHITE,
                    "ok",
                    Vec2::splat(0.5),
                );
                LiveWidgets.end_child();
            });
            ui.end();
        });
        assert!(!frame.draw_list.vtx_buf.is_empty());
        assert!(!is_bound());
    }

    #[test]
    fn bindings_nest() {
        let mut ctx = context();
        let _ = ctx.frame(&TestFont, 1.0, |outer| {
            let outer_ptr = outer as *mut Ui<'_> as *mut ();
            bind(outer, || {
                let mut other = context();
                let _ = other.frame(&TestFont, 1.0, |inner| bind(inner, || ()));
                assert_eq!(BOUND.with(|b| b.get()), outer_ptr);
            });
        });
    }

    #[test]
    fn combo_array_keeps_out_of_range_index_when_unchanged() {
        let mut ctx = context();
        let mut current = -1;
        let _ = ctx.frame(&TestFont, 1.0, |ui| {
            ui.begin("host", WindowFlags::empty());
            bind(ui, || assert!(!LiveWidgets.combo_array("pick", &mut current, &["a", "b"], 0)));
            ui.end();
        });
        assert_eq!(current, -1);
    }
}
