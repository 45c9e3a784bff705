//! Editable menu palette.
//!
//! Colours are kept as raw RGBA channel arrays so the settings page can bind
//! them straight to colour-edit widgets; [`Theme::apply_to`] pushes them into
//! the engine style once per frame.

use ragnarek_core::{Color, Style, StyleColor};

fn rgb8(r: u8, g: u8, b: u8) -> [f32; 4] {
    [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0]
}

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub accent:       [f32; 4],
    pub background:   [f32; 4],
    pub border:       [f32; 4],
    pub child:        [f32; 4],
    pub widget:       [f32; 4],
    pub selectable:   [f32; 4],
    pub popup:        [f32; 4],
    pub text_active:  [f32; 4],
    pub text_hovered: [f32; 4],
    pub text_default: [f32; 4],
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent:       rgb8(112, 109, 214),
            background:   rgb8(21, 21, 21),
            border:       rgb8(23, 24, 25),
            child:        rgb8(23, 24, 25),
            widget:       rgb8(28, 28, 35),
            selectable:   rgb8(37, 37, 47),
            popup:        rgb8(21, 21, 22),
            text_active:  rgb8(255, 255, 255),
            text_hovered: rgb8(89, 95, 105),
            text_default: rgb8(50, 54, 59),
        }
    }
}

impl Theme {
    /// Accent with its alpha forced opaque; the accent picker hides alpha.
    pub fn accent_color(&self) -> Color { Color::from(self.accent).with_alpha(1.0) }

    pub fn apply_to(&self, style: &mut Style) {
        use StyleColor as SC;
        let accent     = self.accent_color();
        let widget     = Color::from(self.widget);
        let selectable = Color::from(self.selectable);

        style.set_color(SC::WindowBg,         Color::from(self.background));
        style.set_color(SC::Border,           Color::from(self.border));
        style.set_color(SC::ChildBg,          Color::from(self.child));
        style.set_color(SC::PopupBg,          Color::from(self.popup));
        style.set_color(SC::FrameBg,          widget);
        style.set_color(SC::FrameBgHovered,   selectable);
        style.set_color(SC::FrameBgActive,    selectable);
        style.set_color(SC::Button,           widget);
        style.set_color(SC::ButtonHovered,    selectable);
        style.set_color(SC::ButtonActive,     accent);
        style.set_color(SC::Separator,        widget);
        style.set_color(SC::Header,           selectable);
        style.set_color(SC::HeaderHovered,    selectable.lerp(Color::WHITE, 0.05));
        style.set_color(SC::HeaderActive,     accent.with_alpha(0.6));
        style.set_color(SC::CheckMark,        accent);
        style.set_color(SC::SliderGrab,       accent);
        style.set_color(SC::SliderGrabActive, accent.lerp(Color::WHITE, 0.25));
        style.set_color(SC::Accent,           accent);
        style.set_color(SC::Text,             Color::from(self.text_active));
        style.set_color(SC::TextHovered,      Color::from(self.text_hovered));
        style.set_color(SC::TextInactive,     Color::from(self.text_default));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_matches_the_stock_palette() {
        let mut style = Style::default();
        let stock = style.clone();
        Theme::default().apply_to(&mut style);
        for c in [StyleColor::WindowBg, StyleColor::ChildBg, StyleColor::Accent, StyleColor::TextInactive] {
            let (a, b) = (style.color(c), stock.color(c));
            assert!((a.r - b.r).abs() < 1e-6 && (a.g - b.g).abs() < 1e-6 && (a.b - b.b).abs() < 1e-6, "{c:?}");
        }
    }

    #[test]
    fn accent_alpha_is_ignored() {
        let mut theme = Theme::default();
        theme.accent[3] = 0.2;
        let mut style = Style::default();
        theme.apply_to(&mut style);
        assert_eq!(style.color(StyleColor::Accent).a, 1.0);
    }
}
