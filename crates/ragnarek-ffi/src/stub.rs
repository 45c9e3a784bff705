//! Link-time placeholder: same entry points, no toolkit behind them.

use ragnarek_core::{
    ChildFlags, Color, ColorEditFlags, ComboFlags, EspPreview, Rect, SelectableFlags, SliderFlags, TextureId, Vec2,
    WindowFlags,
};

use crate::WidgetApi;

/// Leaves every argument untouched. Containers report open, buttons that
/// echo a selection state return it, everything else reports no change.
#[derive(Debug, Default, Clone, Copy)]
pub struct StubWidgets;

impl WidgetApi for StubWidgets {
    fn begin_child(&mut self, _: &str, _: Vec2, _: ChildFlags, _: WindowFlags) -> bool { true }
    fn end_child(&mut self) {}

    fn tab(&mut self, selected: bool, _: u32, _: &str, _: Vec2) -> bool { selected }

    fn checkbox(&mut self, _: &str, _: &mut bool) -> bool { false }
    fn checkbox_clicked(&mut self, _: &str, _: &mut bool) {}
    fn checkbox_picker(&mut self, _: &str, _: &mut bool, _: &mut [f32; 3], _: ColorEditFlags) -> bool { false }
    fn checkbox_double_picker(
        &mut self,
        _: &str,
        _: &mut bool,
        _: &mut [f32; 3],
        _: &mut [f32; 3],
        _: ColorEditFlags,
    ) -> bool {
        false
    }

    fn slider_int(&mut self, _: &str, _: &mut i32, _: i32, _: i32, _: &str, _: SliderFlags) -> bool { false }
    fn slider_float(&mut self, _: &str, _: &mut f32, _: f32, _: f32, _: &str, _: SliderFlags) -> bool { false }
    fn range_slider_float(&mut self, _: &str, _: &mut f32, _: &mut f32, _: f32, _: f32, _: &str, _: f32) -> bool {
        false
    }

    fn color_edit4(&mut self, _: &str, _: &mut [f32; 4], _: ColorEditFlags) -> bool { false }
    fn color_picker4(&mut self, _: &str, _: &mut [f32; 4], _: ColorEditFlags, _: Option<[f32; 4]>) -> bool { false }
    fn color_button(&mut self, _: &str, _: [f32; 4], _: ColorEditFlags, _: Vec2) -> bool { false }

    fn selectable(&mut self, _: &str, selected: bool, _: SelectableFlags, _: Vec2) -> bool { selected }
    fn selectable_ptr(&mut self, _: &str, _: &mut bool, _: SelectableFlags, _: Vec2) -> bool { false }

    fn begin_combo(&mut self, _: &str, _: &str, _: i32, _: bool, _: ComboFlags) -> bool { false }
    fn end_combo(&mut self) {}
    fn multi_combo(&mut self, _: &str, _: &mut [bool], _: &[&str]) {}
    fn combo_array(&mut self, _: &str, _: &mut i32, _: &[&str], _: i32) -> bool { false }

    fn keybind(&mut self, _: &str, _: &mut i32, _: bool) -> bool { false }

    fn text_center(&mut self, _: Rect, _: Color, _: &str, _: Vec2) {}
    fn icon_box(&mut self, _: &str, _: Vec2, _: Color, _: Color, _: Color) -> bool { false }
    fn color_button_simple(&mut self, _: &str, _: Vec2, _: Color) -> bool { false }

    fn esp_preview(&mut self, _: Option<TextureId>, _: &EspPreview) {}
}

// ─── C entry points ──────────────────────────────────────────────────────────

c_surface!(#[cfg_attr(feature = "stub", no_mangle)] StubWidgets);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_placeholder_contract() {
        let mut s = StubWidgets;
        assert!(s.begin_child("c", Vec2::ZERO, ChildFlags::empty(), WindowFlags::empty()));
        assert!(s.tab(true, 0, "a", Vec2::ZERO));
        assert!(!s.tab(false, 0, "a", Vec2::ZERO));
        assert!(s.selectable("x", true, SelectableFlags::empty(), Vec2::ZERO));

        let mut on = true;
        let mut key = 65;
        assert!(!s.checkbox("x", &mut on));
        assert!(!s.selectable_ptr("x", &mut on, SelectableFlags::empty(), Vec2::ZERO));
        assert!(!s.keybind("k", &mut key, true));
        assert!(on);
        assert_eq!(key, 65);
    }
}
