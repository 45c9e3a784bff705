//! Top-centred status strip: `name | developer | ping | time`.
//!
//! Disabling it slides the strip off the right edge of the screen; it is
//! not drawn at all once fully off-screen.

use ragnarek_core::{Corners, Rect, StyleColor, Ui, Vec2, WindowFlags};

use crate::settings::InfoBarText;

pub const HEIGHT:     f32 = 45.0;
pub const TOP:        f32 = 5.0;
pub const SLIDE_RATE: f32 = 8.0;
const STRIPE: Rect = Rect { min: Vec2 { x: 0.0, y: 10.0 }, max: Vec2 { x: 4.0, y: 35.0 } };

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InfoBar {
    /// Left edge in screen space; `None` until first placed.
    x: Option<f32>,
}

impl InfoBar {
    pub fn new() -> Self { Self::default() }

    pub fn x(&self) -> Option<f32> { self.x }

    /// Strip width for `text`: every segment, three separators and eight
    /// item spacings.
    pub fn width(ui: &Ui<'_>, text: &InfoBarText) -> f32 {
        let sep  = ui.text_size("|").x;
        let segs: f32 = text.segments().iter().map(|s| ui.text_size(s).x).sum();
        segs + sep * 3.0 + ui.style().item_spacing.0 * 8.0
    }

    /// Move the strip towards its target and report whether it is on screen.
    pub fn advance(&mut self, screen_w: f32, width: f32, enabled: bool, dt: f32) -> bool {
        let centred = (screen_w - width) * 0.5;
        let target  = if enabled { centred } else { screen_w };
        let x = self.x.get_or_insert(centred);
        let t = (dt * SLIDE_RATE).clamp(0.0, 1.0);
        *x += (target - *x) * t;
        *x <= screen_w - 2.0
    }

    pub fn draw(&mut self, ui: &mut Ui<'_>, text: &InfoBarText) {
        let screen_w = ui.display_size().x;
        let width    = Self::width(ui, text);
        let dt       = ui.delta_time();
        if !self.advance(screen_w, width, text.enabled, dt) {
            return;
        }
        let x = self.x.unwrap_or(screen_w);

        ui.set_next_window_pos(Vec2::new(x, TOP));
        ui.set_next_window_size(Vec2::new(width, HEIGHT));
        if ui.begin("##info-bar", WindowFlags::NO_BACKGROUND | WindowFlags::NO_DECORATION) {
            let pos      = ui.window_pos();
            let bg       = ui.style().color(StyleColor::WindowBg);
            let accent   = ui.style().color(StyleColor::Accent);
            let dim      = ui.style().color(StyleColor::TextInactive);
            let rounding = ui.style().child_rounding;
            let bar_r    = ui.style().window_rounding;

            let draw = ui.draw_list();
            draw.filled_rect(Rect::from_min_size(pos, Vec2::new(width, HEIGHT)), rounding, bg);
            draw.filled_rect_corners(STRIPE.translate(pos), bar_r, Corners::RIGHT, accent);
            draw.filled_rect_corners(
                STRIPE.translate(pos + Vec2::new(width - STRIPE.width(), 0.0)),
                bar_r,
                Corners::LEFT,
                accent,
            );

            let spacing = ui.style().item_spacing.0;
            let fs      = ui.text_size("|").y;
            ui.set_cursor_pos(Vec2::new(spacing, (HEIGHT - fs) * 0.5));
            ui.begin_group();
            let segments = text.segments();
            for (i, seg) in segments.iter().enumerate() {
                ui.text_colored(if i == 0 { accent } else { dim }, seg);
                ui.same_line();
                if i + 1 < segments.len() {
                    ui.text_colored(dim, "|");
                    ui.same_line();
                }
            }
            ui.end_group();
        }
        ui.end();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_centred() {
        let mut bar = InfoBar::new();
        assert!(bar.advance(1920.0, 320.0, true, 0.016));
        assert_eq!(bar.x(), Some(800.0));
    }

    #[test]
    fn disabled_strip_slides_off_and_hides() {
        let mut bar = InfoBar::new();
        bar.advance(1920.0, 320.0, true, 0.016);

        assert!(bar.advance(1920.0, 320.0, false, 0.05));
        let x = bar.x().unwrap_or_default();
        assert!(x > 800.0 && x < 1920.0, "moving right, got {x}");

        let mut visible = true;
        for _ in 0..200 {
            visible = bar.advance(1920.0, 320.0, false, 0.05);
        }
        assert!(!visible);
    }

    #[test]
    fn re_enabling_slides_back() {
        let mut bar = InfoBar::new();
        bar.advance(1920.0, 320.0, false, 1.0);
        assert!(!bar.advance(1920.0, 320.0, false, 1.0));
        assert!(bar.advance(1920.0, 320.0, true, 1.0));
        assert_eq!(bar.x(), Some(800.0));
    }
}
