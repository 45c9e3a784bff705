//! The flat C surface, generated once per [`WidgetApi`](crate::WidgetApi)
//! implementation.
//!
//! `c_surface!(#[attrs] Impl)` expands to the 24 `extern "C"` entry points
//! forwarding to `Impl` and a `signatures()` table built from their function
//! pointer types. Expanding it for both implementations keeps the two symbol
//! sets identical; the attributes decide which set is exported unmangled.

/// Name and function-pointer type of one entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signature {
    pub name: &'static str,
    pub ty:   &'static str,
}

pub(crate) fn signature<F: Copy>(name: &'static str, _f: F) -> Signature {
    Signature { name, ty: std::any::type_name::<F>() }
}

macro_rules! c_surface {
    ($(#[$export:meta])* $api:path) => {
        use ::std::ffi::{c_char, c_float, c_int, c_void};

        $(#[$export])*
        pub unsafe extern "C" fn ragnarek_begin_child(
            name: *const c_char, size_x: c_float, size_y: c_float, child_flags: u32, window_flags: u32,
        ) -> bool {
            $crate::raw::guard("ragnarek_begin_child", false, || {
                $crate::WidgetApi::begin_child(
                    &mut $api,
                    &$crate::raw::text(name),
                    ::ragnarek_core::Vec2::new(size_x, size_y),
                    ::ragnarek_core::ChildFlags::from_bits_truncate(child_flags),
                    ::ragnarek_core::WindowFlags::from_bits_truncate(window_flags),
                )
            })
        }

        $(#[$export])*
        pub unsafe extern "C" fn ragnarek_end_child() {
            $crate::raw::guard("ragnarek_end_child", (), || $crate::WidgetApi::end_child(&mut $api))
        }

        $(#[$export])*
        pub unsafe extern "C" fn ragnarek_tab(
            selected: bool, id: u32, icon: *const c_char, size_x: c_float, size_y: c_float,
        ) -> bool {
            $crate::raw::guard("ragnarek_tab", false, || {
                $crate::WidgetApi::tab(
                    &mut $api, selected, id, &$crate::raw::text(icon), ::ragnarek_core::Vec2::new(size_x, size_y),
                )
            })
        }

        $(#[$export])*
        pub unsafe extern "C" fn ragnarek_checkbox(label: *const c_char, value: *mut bool) -> bool {
            $crate::raw::guard("ragnarek_checkbox", false, || {
                let Some(v) = $crate::raw::out(value) else { return false };
                $crate::WidgetApi::checkbox(&mut $api, &$crate::raw::text(label), v)
            })
        }

        $(#[$export])*
        pub unsafe extern "C" fn ragnarek_checkbox_clicked(label: *const c_char, value: *mut bool) {
            $crate::raw::guard("ragnarek_checkbox_clicked", (), || {
                let Some(v) = $crate::raw::out(value) else { return };
                $crate::WidgetApi::checkbox_clicked(&mut $api, &$crate::raw::text(label), v)
            })
        }

        $(#[$export])*
        pub unsafe extern "C" fn ragnarek_checkbox_picker(
            label: *const c_char, value: *mut bool, color: *mut c_float, flags: u32,
        ) -> bool {
            $crate::raw::guard("ragnarek_checkbox_picker", false, || {
                let (Some(v), Some(col)) = ($crate::raw::out(value), $crate::raw::array::<3>(color)) else { return false };
                $crate::WidgetApi::checkbox_picker(
                    &mut $api, &$crate::raw::text(label), v, col,
                    ::ragnarek_core::ColorEditFlags::from_bits_truncate(flags),
                )
            })
        }

        $(#[$export])*
        pub unsafe extern "C" fn ragnarek_checkbox_double_picker(
            label: *const c_char, value: *mut bool, color1: *mut c_float, color2: *mut c_float, flags: u32,
        ) -> bool {
            $crate::raw::guard("ragnarek_checkbox_double_picker", false, || {
                let (Some(v), Some(c1), Some(c2)) =
                    ($crate::raw::out(value), $crate::raw::array::<3>(color1), $crate::raw::array::<3>(color2))
                else { return false };
                $crate::WidgetApi::checkbox_double_picker(
                    &mut $api, &$crate::raw::text(label), v, c1, c2,
                    ::ragnarek_core::ColorEditFlags::from_bits_truncate(flags),
                )
            })
        }

        $(#[$export])*
        pub unsafe extern "C" fn ragnarek_slider_int(
            label: *const c_char, value: *mut c_int, min: c_int, max: c_int, format: *const c_char, flags: u32,
        ) -> bool {
            $crate::raw::guard("ragnarek_slider_int", false, || {
                let Some(v) = $crate::raw::out(value) else { return false };
                $crate::WidgetApi::slider_int(
                    &mut $api, &$crate::raw::text(label), v, min, max, &$crate::raw::text(format),
                    ::ragnarek_core::SliderFlags::from_bits_truncate(flags),
                )
            })
        }

        $(#[$export])*
        pub unsafe extern "C" fn ragnarek_slider_float(
            label: *const c_char, value: *mut c_float, min: c_float, max: c_float, format: *const c_char, flags: u32,
        ) -> bool {
            $crate::raw::guard("ragnarek_slider_float", false, || {
                let Some(v) = $crate::raw::out(value) else { return false };
                $crate::WidgetApi::slider_float(
                    &mut $api, &$crate::raw::text(label), v, min, max, &$crate::raw::text(format),
                    ::ragnarek_core::SliderFlags::from_bits_truncate(flags),
                )
            })
        }

        $(#[$export])*
        pub unsafe extern "C" fn ragnarek_range_slider_float(
            label: *const c_char, v1: *mut c_float, v2: *mut c_float, min: c_float, max: c_float,
            format: *const c_char, power: c_float,
        ) -> bool {
            $crate::raw::guard("ragnarek_range_slider_float", false, || {
                let (Some(lo), Some(hi)) = ($crate::raw::out(v1), $crate::raw::out(v2)) else { return false };
                $crate::WidgetApi::range_slider_float(
                    &mut $api, &$crate::raw::text(label), lo, hi, min, max, &$crate::raw::text(format), power,
                )
            })
        }

        $(#[$export])*
        pub unsafe extern "C" fn ragnarek_color_edit4(label: *const c_char, color: *mut c_float, flags: u32) -> bool {
            $crate::raw::guard("ragnarek_color_edit4", false, || {
                let Some(col) = $crate::raw::array::<4>(color) else { return false };
                $crate::WidgetApi::color_edit4(
                    &mut $api, &$crate::raw::text(label), col,
                    ::ragnarek_core::ColorEditFlags::from_bits_truncate(flags),
                )
            })
        }

        $(#[$export])*
        pub unsafe extern "C" fn ragnarek_color_picker4(
            label: *const c_char, color: *mut c_float, flags: u32, ref_color: *const c_float,
        ) -> bool {
            $crate::raw::guard("ragnarek_color_picker4", false, || {
                let Some(col) = $crate::raw::array::<4>(color) else { return false };
                $crate::WidgetApi::color_picker4(
                    &mut $api, &$crate::raw::text(label), col,
                    ::ragnarek_core::ColorEditFlags::from_bits_truncate(flags),
                    $crate::raw::read_array::<4>(ref_color),
                )
            })
        }

        $(#[$export])*
        pub unsafe extern "C" fn ragnarek_color_button(
            desc_id: *const c_char, color: *mut c_float, flags: u32, size_x: c_float, size_y: c_float,
        ) -> bool {
            $crate::raw::guard("ragnarek_color_button", false, || {
                let Some(col) = $crate::raw::read_array::<4>(color) else { return false };
                $crate::WidgetApi::color_button(
                    &mut $api, &$crate::raw::text(desc_id), col,
                    ::ragnarek_core::ColorEditFlags::from_bits_truncate(flags),
                    ::ragnarek_core::Vec2::new(size_x, size_y),
                )
            })
        }

        $(#[$export])*
        pub unsafe extern "C" fn ragnarek_selectable(
            label: *const c_char, selected: bool, flags: u32, size_x: c_float, size_y: c_float,
        ) -> bool {
            $crate::raw::guard("ragnarek_selectable", false, || {
                $crate::WidgetApi::selectable(
                    &mut $api, &$crate::raw::text(label), selected,
                    ::ragnarek_core::SelectableFlags::from_bits_truncate(flags),
                    ::ragnarek_core::Vec2::new(size_x, size_y),
                )
            })
        }

        $(#[$export])*
        pub unsafe extern "C" fn ragnarek_selectable_ptr(
            label: *const c_char, selected: *mut bool, flags: u32, size_x: c_float, size_y: c_float,
        ) -> bool {
            $crate::raw::guard("ragnarek_selectable_ptr", false, || {
                let Some(sel) = $crate::raw::out(selected) else { return false };
                $crate::WidgetApi::selectable_ptr(
                    &mut $api, &$crate::raw::text(label), sel,
                    ::ragnarek_core::SelectableFlags::from_bits_truncate(flags),
                    ::ragnarek_core::Vec2::new(size_x, size_y),
                )
            })
        }

        $(#[$export])*
        pub unsafe extern "C" fn ragnarek_begin_combo(
            label: *const c_char, preview_value: *const c_char, val: c_int, multi: bool, flags: u32,
        ) -> bool {
            $crate::raw::guard("ragnarek_begin_combo", false, || {
                $crate::WidgetApi::begin_combo(
                    &mut $api, &$crate::raw::text(label), &$crate::raw::text(preview_value), val, multi,
                    ::ragnarek_core::ComboFlags::from_bits_truncate(flags),
                )
            })
        }

        $(#[$export])*
        pub unsafe extern "C" fn ragnarek_end_combo() {
            $crate::raw::guard("ragnarek_end_combo", (), || $crate::WidgetApi::end_combo(&mut $api))
        }

        $(#[$export])*
        pub unsafe extern "C" fn ragnarek_multi_combo(
            label: *const c_char, variables: *mut bool, labels: *const *const c_char, count: c_int,
        ) {
            $crate::raw::guard("ragnarek_multi_combo", (), || {
                let (Some(values), Some(names)) =
                    ($crate::raw::slice(variables, count), $crate::raw::text_list(labels, count))
                else { return };
                let names: Vec<&str> = names.iter().map(|s| s.as_ref()).collect();
                $crate::WidgetApi::multi_combo(&mut $api, &$crate::raw::text(label), values, &names)
            })
        }

        $(#[$export])*
        pub unsafe extern "C" fn ragnarek_combo_array(
            label: *const c_char, current_item: *mut c_int, items: *const *const c_char, items_count: c_int,
            popup_max_height: c_int,
        ) -> bool {
            $crate::raw::guard("ragnarek_combo_array", false, || {
                let (Some(current), Some(items)) =
                    ($crate::raw::out(current_item), $crate::raw::text_list(items, items_count))
                else { return false };
                let items: Vec<&str> = items.iter().map(|s| s.as_ref()).collect();
                $crate::WidgetApi::combo_array(&mut $api, &$crate::raw::text(label), current, &items, popup_max_height)
            })
        }

        $(#[$export])*
        pub unsafe extern "C" fn ragnarek_keybind(label: *const c_char, key: *mut c_int, show_label: bool) -> bool {
            $crate::raw::guard("ragnarek_keybind", false, || {
                let Some(k) = $crate::raw::out(key) else { return false };
                $crate::WidgetApi::keybind(&mut $api, &$crate::raw::text(label), k, show_label)
            })
        }

        $(#[$export])*
        pub unsafe extern "C" fn ragnarek_text_center(
            p_min_x: c_float, p_min_y: c_float, p_max_x: c_float, p_max_y: c_float, color: u32,
            text: *const c_char, align_x: c_float, align_y: c_float,
        ) {
            $crate::raw::guard("ragnarek_text_center", (), || {
                $crate::WidgetApi::text_center(
                    &mut $api,
                    ::ragnarek_core::Rect::new(
                        ::ragnarek_core::Vec2::new(p_min_x, p_min_y),
                        ::ragnarek_core::Vec2::new(p_max_x, p_max_y),
                    ),
                    ::ragnarek_core::Color::from_rgba_u32(color),
                    &$crate::raw::text(text),
                    ::ragnarek_core::Vec2::new(align_x, align_y),
                )
            })
        }

        $(#[$export])*
        pub unsafe extern "C" fn ragnarek_icon_box(
            icon: *const c_char, size_x: c_float, size_y: c_float, color_bg: u32, color_icon: u32, color_border: u32,
        ) -> bool {
            $crate::raw::guard("ragnarek_icon_box", false, || {
                $crate::WidgetApi::icon_box(
                    &mut $api,
                    &$crate::raw::text(icon),
                    ::ragnarek_core::Vec2::new(size_x, size_y),
                    ::ragnarek_core::Color::from_rgba_u32(color_bg),
                    ::ragnarek_core::Color::from_rgba_u32(color_icon),
                    ::ragnarek_core::Color::from_rgba_u32(color_border),
                )
            })
        }

        $(#[$export])*
        pub unsafe extern "C" fn ragnarek_color_button_simple(
            name: *const c_char, size_x: c_float, size_y: c_float, color_bg: u32,
        ) -> bool {
            $crate::raw::guard("ragnarek_color_button_simple", false, || {
                $crate::WidgetApi::color_button_simple(
                    &mut $api,
                    &$crate::raw::text(name),
                    ::ragnarek_core::Vec2::new(size_x, size_y),
                    ::ragnarek_core::Color::from_rgba_u32(color_bg),
                )
            })
        }

        #[allow(clippy::too_many_arguments)]
        $(#[$export])*
        pub unsafe extern "C" fn ragnarek_esp_preview(
            player_preview: *mut c_void,
            nickname: *mut bool, nick_color: *mut c_float,
            weapon: *mut bool, weapon_color: *mut c_float,
            hp: *mut c_int, hp_color: *mut c_float,
            zoom: *mut bool, zoom_color: *mut c_float,
            bomb: *mut bool, bomb_color: *mut c_float,
            c4: *mut bool, c4_color: *mut c_float,
            money: *mut bool, money_color: *mut c_float,
            hit: *mut bool, hit_color: *mut c_float,
            esp_box: *mut bool, box_color: *mut c_float,
            hp_line: *mut bool, hp_line_color: *mut c_float,
        ) {
            $crate::raw::guard("ragnarek_esp_preview", (), || {
                let element = |on: *mut bool, col: *mut c_float| -> Option<(bool, [f32; 4])> {
                    Some((*on.as_ref()?, $crate::raw::read_array::<4>(col)?))
                };
                let esp = (|| {
                    Some(::ragnarek_core::EspPreview {
                        nickname: element(nickname, nick_color)?,
                        weapon:   element(weapon, weapon_color)?,
                        zoom:     element(zoom, zoom_color)?,
                        bomb:     element(bomb, bomb_color)?,
                        c4:       element(c4, c4_color)?,
                        money:    element(money, money_color)?,
                        hit:      element(hit, hit_color)?,
                        esp_box:  element(esp_box, box_color)?,
                        hp_line:  element(hp_line, hp_line_color)?,
                        hp:       *hp.as_ref()?,
                        hp_color: $crate::raw::read_array::<4>(hp_color)?,
                    })
                })();
                let Some(esp) = esp else { return };
                let texture = (!player_preview.is_null()).then(|| ::ragnarek_core::TextureId(player_preview as usize));
                $crate::WidgetApi::esp_preview(&mut $api, texture, &esp)
            })
        }

        /// Every entry point of this set, in header order.
        pub fn signatures() -> Vec<$crate::Signature> {
            use $crate::surface::signature as sig;
            type Cstr = *const c_char;
            vec![
                sig("ragnarek_begin_child", ragnarek_begin_child as unsafe extern "C" fn(Cstr, c_float, c_float, u32, u32) -> bool),
                sig("ragnarek_end_child", ragnarek_end_child as unsafe extern "C" fn()),
                sig("ragnarek_tab", ragnarek_tab as unsafe extern "C" fn(bool, u32, Cstr, c_float, c_float) -> bool),
                sig("ragnarek_checkbox", ragnarek_checkbox as unsafe extern "C" fn(Cstr, *mut bool) -> bool),
                sig("ragnarek_checkbox_clicked", ragnarek_checkbox_clicked as unsafe extern "C" fn(Cstr, *mut bool)),
                sig("ragnarek_checkbox_picker", ragnarek_checkbox_picker as unsafe extern "C" fn(Cstr, *mut bool, *mut c_float, u32) -> bool),
                sig("ragnarek_checkbox_double_picker", ragnarek_checkbox_double_picker as unsafe extern "C" fn(Cstr, *mut bool, *mut c_float, *mut c_float, u32) -> bool),
                sig("ragnarek_slider_int", ragnarek_slider_int as unsafe extern "C" fn(Cstr, *mut c_int, c_int, c_int, Cstr, u32) -> bool),
                sig("ragnarek_slider_float", ragnarek_slider_float as unsafe extern "C" fn(Cstr, *mut c_float, c_float, c_float, Cstr, u32) -> bool),
                sig("ragnarek_range_slider_float", ragnarek_range_slider_float as unsafe extern "C" fn(Cstr, *mut c_float, *mut c_float, c_float, c_float, Cstr, c_float) -> bool),
                sig("ragnarek_color_edit4", ragnarek_color_edit4 as unsafe extern "C" fn(Cstr, *mut c_float, u32) -> bool),
                sig("ragnarek_color_picker4", ragnarek_color_picker4 as unsafe extern "C" fn(Cstr, *mut c_float, u32, *const c_float) -> bool),
                sig("ragnarek_color_button", ragnarek_color_button as unsafe extern "C" fn(Cstr, *mut c_float, u32, c_float, c_float) -> bool),
                sig("ragnarek_selectable", ragnarek_selectable as unsafe extern "C" fn(Cstr, bool, u32, c_float, c_float) -> bool),
                sig("ragnarek_selectable_ptr", ragnarek_selectable_ptr as unsafe extern "C" fn(Cstr, *mut bool, u32, c_float, c_float) -> bool),
                sig("ragnarek_begin_combo", ragnarek_begin_combo as unsafe extern "C" fn(Cstr, Cstr, c_int, bool, u32) -> bool),
                sig("ragnarek_end_combo", ragnarek_end_combo as unsafe extern "C" fn()),
                sig("ragnarek_multi_combo", ragnarek_multi_combo as unsafe extern "C" fn(Cstr, *mut bool, *const Cstr, c_int)),
                sig("ragnarek_combo_array", ragnarek_combo_array as unsafe extern "C" fn(Cstr, *mut c_int, *const Cstr, c_int, c_int) -> bool),
                sig("ragnarek_keybind", ragnarek_keybind as unsafe extern "C" fn(Cstr, *mut c_int, bool) -> bool),
                sig("ragnarek_text_center", ragnarek_text_center as unsafe extern "C" fn(c_float, c_float, c_float, c_float, u32, Cstr, c_float, c_float)),
                sig("ragnarek_icon_box", ragnarek_icon_box as unsafe extern "C" fn(Cstr, c_float, c_float, u32, u32, u32) -> bool),
                sig("ragnarek_color_button_simple", ragnarek_color_button_simple as unsafe extern "C" fn(Cstr, c_float, c_float, u32) -> bool),
                sig(
                    "ragnarek_esp_preview",
                    ragnarek_esp_preview as unsafe extern "C" fn(
                        *mut c_void,
                        *mut bool, *mut c_float, *mut bool, *mut c_float, *mut c_int, *mut c_float,
                        *mut bool, *mut c_float, *mut bool, *mut c_float, *mut bool, *mut c_float,
                        *mut bool, *mut c_float, *mut bool, *mut c_float, *mut bool, *mut c_float,
                        *mut bool, *mut c_float,
                    ),
                ),
            ]
        }
    };
}
