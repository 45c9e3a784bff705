//! The widget calls reachable from C, as one Rust interface.

use ragnarek_core::{
    ChildFlags, Color, ColorEditFlags, ComboFlags, EspPreview, Rect, SelectableFlags, SliderFlags, TextureId, Vec2,
    WindowFlags,
};

/// Every entry point of the C surface maps onto exactly one method here.
/// [`LiveWidgets`](crate::LiveWidgets) draws through the bound `Ui`;
/// [`StubWidgets`](crate::StubWidgets) does nothing.
pub trait WidgetApi {
    fn begin_child(&mut self, name: &str, size: Vec2, child_flags: ChildFlags, window_flags: WindowFlags) -> bool;
    fn end_child(&mut self);

    fn tab(&mut self, selected: bool, id: u32, icon: &str, size: Vec2) -> bool;

    fn checkbox(&mut self, label: &str, v: &mut bool) -> bool;
    fn checkbox_clicked(&mut self, label: &str, v: &mut bool);
    fn checkbox_picker(&mut self, label: &str, v: &mut bool, col: &mut [f32; 3], flags: ColorEditFlags) -> bool;
    fn checkbox_double_picker(
        &mut self,
        label: &str,
        v:     &mut bool,
        col1:  &mut [f32; 3],
        col2:  &mut [f32; 3],
        flags: ColorEditFlags,
    ) -> bool;

    fn slider_int(&mut self, label: &str, v: &mut i32, min: i32, max: i32, format: &str, flags: SliderFlags) -> bool;
    fn slider_float(&mut self, label: &str, v: &mut f32, min: f32, max: f32, format: &str, flags: SliderFlags) -> bool;
    #[allow(clippy::too_many_arguments)]
    fn range_slider_float(
        &mut self,
        label:  &str,
        lo:     &mut f32,
        hi:     &mut f32,
        min:    f32,
        max:    f32,
        format: &str,
        power:  f32,
    ) -> bool;

    fn color_edit4(&mut self, label: &str, col: &mut [f32; 4], flags: ColorEditFlags) -> bool;
    fn color_picker4(&mut self, label: &str, col: &mut [f32; 4], flags: ColorEditFlags, ref_col: Option<[f32; 4]>) -> bool;
    fn color_button(&mut self, desc_id: &str, col: [f32; 4], flags: ColorEditFlags, size: Vec2) -> bool;

    fn selectable(&mut self, label: &str, selected: bool, flags: SelectableFlags, size: Vec2) -> bool;
    fn selectable_ptr(&mut self, label: &str, selected: &mut bool, flags: SelectableFlags, size: Vec2) -> bool;

    fn begin_combo(&mut self, label: &str, preview: &str, val: i32, multi: bool, flags: ComboFlags) -> bool;
    fn end_combo(&mut self);
    fn multi_combo(&mut self, label: &str, values: &mut [bool], labels: &[&str]);
    /// `current` is an index into `items`; out-of-range values show an empty preview.
    fn combo_array(&mut self, label: &str, current: &mut i32, items: &[&str], popup_max_height: i32) -> bool;

    fn keybind(&mut self, label: &str, key: &mut i32, show_label: bool) -> bool;

    fn text_center(&mut self, rect: Rect, color: Color, text: &str, align: Vec2);
    fn icon_box(&mut self, icon: &str, size: Vec2, bg: Color, icon_col: Color, border: Color) -> bool;
    fn color_button_simple(&mut self, name: &str, size: Vec2, bg: Color) -> bool;

    fn esp_preview(&mut self, texture: Option<TextureId>, esp: &EspPreview);
}
