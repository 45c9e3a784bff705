//! Visual style / theming.

use crate::Color;

// ─── StyleColor indices ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum StyleColor {
    WindowBg = 0,
    ChildBg,
    PopupBg,
    Border,
    FrameBg,
    FrameBgHovered,
    FrameBgActive,
    /// Labels of active / enabled items and titles.
    Text,
    TextHovered,
    /// Labels of idle items.
    TextInactive,
    Button,
    ButtonHovered,
    ButtonActive,
    CheckMark,
    SliderGrab,
    SliderGrabActive,
    Header,
    HeaderHovered,
    HeaderActive,
    Separator,
    Accent,
    // Sentinel – always last
    COUNT,
}

// ─── StyleVar ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StyleVar {
    WindowPadding(f32, f32),
    ChildPadding(f32, f32),
    ItemSpacing(f32, f32),
    FramePadding(f32, f32),
    WindowRounding(f32),
    ChildRounding(f32),
    FrameRounding(f32),
    GrabMinSize(f32),
    Alpha(f32),
}

/// Previous value of a pushed [`StyleVar`]; hand it back to [`Style::pop_var`].
#[derive(Debug, Clone, Copy)]
#[must_use = "pass the restore value to pop_var"]
pub struct StyleVarRestore(pub(crate) StyleVar);

// ─── Style ───────────────────────────────────────────────────────────────────

/// Colours and metrics every widget reads.
#[derive(Debug, Clone)]
pub struct Style {
    pub colors: [Color; StyleColor::COUNT as usize],

    // Layout
    pub window_padding:  (f32, f32),
    pub window_rounding: f32,
    /// Padding inside titled child panels.
    pub child_padding:   (f32, f32),
    pub child_rounding:  f32,
    /// Height of a child panel's title strip.
    pub child_title_height: f32,
    pub item_spacing:    (f32, f32),
    pub frame_padding:   (f32, f32),
    pub frame_rounding:  f32,
    pub grab_min_size:   f32,
    /// Height of one interactive row (checkbox, combo, keybind …).
    pub row_height:      f32,
    pub alpha:           f32,
    pub font_size:       f32,
}

impl Default for Style {
    fn default() -> Self { Self::ragnarek() }
}

impl Style {
    /// The overlay's stock dark-violet palette.
    pub fn ragnarek() -> Self {
        use StyleColor as SC;
        let accent     = Color::from_rgb8(112, 109, 214, 1.0);
        let widget     = Color::from_rgb8(28, 28, 35, 1.0);
        let selectable = Color::from_rgb8(37, 37, 47, 1.0);

        let mut colors = [Color::TRANSPARENT; SC::COUNT as usize];
        colors[SC::WindowBg         as usize] = Color::from_rgb8(21, 21, 21, 1.0);
        colors[SC::ChildBg          as usize] = Color::from_rgb8(23, 24, 25, 1.0);
        colors[SC::PopupBg          as usize] = Color::from_rgb8(21, 21, 22, 1.0);
        colors[SC::Border           as usize] = Color::from_rgb8(23, 24, 25, 1.0);
        colors[SC::FrameBg          as usize] = widget;
        colors[SC::FrameBgHovered   as usize] = selectable;
        colors[SC::FrameBgActive    as usize] = selectable;
        colors[SC::Text             as usize] = Color::WHITE;
        colors[SC::TextHovered      as usize] = Color::from_rgb8(89, 95, 105, 1.0);
        colors[SC::TextInactive     as usize] = Color::from_rgb8(50, 54, 59, 1.0);
        colors[SC::Button           as usize] = widget;
        colors[SC::ButtonHovered    as usize] = selectable;
        colors[SC::ButtonActive     as usize] = accent;
        colors[SC::CheckMark        as usize] = accent;
        colors[SC::SliderGrab       as usize] = accent;
        colors[SC::SliderGrabActive as usize] = accent.lerp(Color::WHITE, 0.25);
        colors[SC::Header           as usize] = selectable;
        colors[SC::HeaderHovered    as usize] = selectable.lerp(Color::WHITE, 0.05);
        colors[SC::HeaderActive     as usize] = accent.with_alpha(0.6);
        colors[SC::Separator        as usize] = widget;
        colors[SC::Accent           as usize] = accent;
        Self {
            colors,
            window_padding:     (0.0, 0.0),
            window_rounding:    8.0,
            child_padding:      (15.0, 12.0),
            child_rounding:     6.0,
            child_title_height: 38.0,
            item_spacing:       (20.0, 0.0),
            frame_padding:      (8.0, 5.0),
            frame_rounding:     4.0,
            grab_min_size:      10.0,
            row_height:         30.0,
            alpha:              1.0,
            font_size:          12.0,
        }
    }

    /// Convenience accessor.
    #[inline] pub fn color(&self, c: StyleColor) -> Color { self.colors[c as usize] }

    /// Colour with the global alpha already folded in, for draw calls made
    /// outside the draw list (e.g. backend clear colours).
    #[inline]
    pub fn color_alpha(&self, c: StyleColor) -> Color {
        let col = self.colors[c as usize];
        col.with_alpha(col.a * self.alpha)
    }

    #[inline] pub fn set_color(&mut self, c: StyleColor, col: Color) { self.colors[c as usize] = col; }

    /// Apply a temporary override, returning the value to restore.
    pub fn push_var(&mut self, var: StyleVar) -> StyleVarRestore {
        use std::mem::replace;
        let old = match var {
            StyleVar::WindowPadding(x, y) => { let (a, b) = replace(&mut self.window_padding, (x, y)); StyleVar::WindowPadding(a, b) }
            StyleVar::ChildPadding(x, y)  => { let (a, b) = replace(&mut self.child_padding,  (x, y)); StyleVar::ChildPadding(a, b) }
            StyleVar::ItemSpacing(x, y)   => { let (a, b) = replace(&mut self.item_spacing,   (x, y)); StyleVar::ItemSpacing(a, b) }
            StyleVar::FramePadding(x, y)  => { let (a, b) = replace(&mut self.frame_padding,  (x, y)); StyleVar::FramePadding(a, b) }
            StyleVar::WindowRounding(v)   => StyleVar::WindowRounding(replace(&mut self.window_rounding, v)),
            StyleVar::ChildRounding(v)    => StyleVar::ChildRounding(replace(&mut self.child_rounding, v)),
            StyleVar::FrameRounding(v)    => StyleVar::FrameRounding(replace(&mut self.frame_rounding, v)),
            StyleVar::GrabMinSize(v)      => StyleVar::GrabMinSize(replace(&mut self.grab_min_size, v)),
            StyleVar::Alpha(v)            => StyleVar::Alpha(replace(&mut self.alpha, v.clamp(0.0, 1.0))),
        };
        StyleVarRestore(old)
    }

    pub fn pop_var(&mut self, r: StyleVarRestore) {
        let _ = self.push_var(r.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_pop_restore_previous_value() {
        let mut s = Style::ragnarek();
        let r = s.push_var(StyleVar::ItemSpacing(4.0, 4.0));
        assert_eq!(s.item_spacing, (4.0, 4.0));
        s.pop_var(r);
        assert_eq!(s.item_spacing, (20.0, 0.0));
    }

    #[test]
    fn nested_alpha_pushes_unwind_in_order() {
        let mut s = Style::ragnarek();
        let a = s.push_var(StyleVar::Alpha(0.5));
        let b = s.push_var(StyleVar::Alpha(0.25));
        assert_eq!(s.alpha, 0.25);
        s.pop_var(b);
        assert_eq!(s.alpha, 0.5);
        s.pop_var(a);
        assert_eq!(s.alpha, 1.0);
    }

    #[test]
    fn stock_palette_uses_violet_accent() {
        let s = Style::default();
        assert_eq!(s.color(StyleColor::Accent).to_rgba_u32(), Color::from_rgb8(112, 109, 214, 1.0).to_rgba_u32());
        assert_eq!(s.window_padding, (0.0, 0.0));
    }
}
