//! The main menu window: sidebar with logo and tabs, a fading page area
//! with two columns of panels, and the info bar on top of everything.

use ragnarek_core::{ChildFlags, Corners, Rect, StyleColor, StyleVar, Ui, Vec2, WindowFlags};

use crate::{
    fade::TabFader,
    info_bar::InfoBar,
    pages::{Assets, Panel, PAGES},
    settings::Settings,
};

pub const MENU_SIZE: Vec2 = Vec2 { x: 860.0, y: 620.0 };
pub const SIDEBAR_W: f32  = 100.0;
pub const TAB_SIZE:  f32  = 47.0;
const LOGO_SIZE:     Vec2 = Vec2 { x: 38.0, y: 43.0 };

pub struct Menu {
    pub settings: Settings,
    pub assets:   Assets,
    page:         usize,
    fader:        TabFader,
    info_bar:     InfoBar,
    placed:       bool,
}

impl Menu {
    pub fn new(assets: Assets) -> Self {
        Self {
            settings: Settings::default(),
            assets,
            page:     0,
            fader:    TabFader::new(0),
            info_bar: InfoBar::new(),
            placed:   false,
        }
    }

    /// Selected tab.
    #[inline] pub fn page(&self) -> usize { self.page }
    /// Page whose panels are drawn; lags `page` while fading.
    #[inline] pub fn shown_page(&self) -> usize { self.fader.active() }
    #[inline] pub fn fade_alpha(&self) -> f32 { self.fader.alpha() }

    pub fn select(&mut self, page: usize) {
        self.page = page.min(PAGES.len() - 1);
    }

    /// Column width: the window minus the sidebar and three gaps, halved.
    pub fn column_width(spacing: f32) -> f32 {
        (MENU_SIZE.x - (SIDEBAR_W + spacing * 3.0)) * 0.5
    }

    /// Build one frame of the menu.
    pub fn draw(&mut self, ui: &mut Ui<'_>) {
        self.settings.theme.apply_to(ui.style_mut());

        if !self.placed {
            ui.set_next_window_pos((ui.display_size() - MENU_SIZE) * 0.5);
            self.placed = true;
        }
        ui.set_next_window_size(MENU_SIZE);
        if ui.begin("RAGNAREK", WindowFlags::NO_DECORATION) {
            self.sidebar(ui);
            self.content(ui);
        }
        ui.end();

        self.info_bar.draw(ui, &self.settings.info_bar);
    }

    fn sidebar(&mut self, ui: &mut Ui<'_>) {
        let pos      = ui.window_pos();
        let rounding = ui.style().window_rounding;
        let border   = ui.style().color(StyleColor::Border);
        let line     = ui.style().color(StyleColor::FrameBg);
        let accent   = self.settings.theme.accent_color();

        let draw = ui.draw_list();
        draw.filled_rect_corners(
            Rect::from_min_size(pos, Vec2::new(SIDEBAR_W, MENU_SIZE.y)),
            rounding,
            Corners::LEFT,
            border,
        );
        draw.line(pos + Vec2::new(0.0, SIDEBAR_W), pos + Vec2::new(SIDEBAR_W, SIDEBAR_W), 1.0, line);

        match self.assets.logo {
            Some(tex) => {
                ui.set_cursor_pos((Vec2::splat(SIDEBAR_W) - LOGO_SIZE) * 0.5);
                ui.image(tex, LOGO_SIZE, accent);
            }
            None => {
                let header = Rect::from_min_size(pos, Vec2::splat(SIDEBAR_W));
                ui.text_center(header, accent, "R", Vec2::splat(0.5));
            }
        }

        ui.set_cursor_pos(Vec2::new((SIDEBAR_W - TAB_SIZE) * 0.5, SIDEBAR_W + TAB_SIZE * 0.5));
        ui.begin_group();
        for (i, page) in PAGES.iter().enumerate() {
            if ui.tab(self.page == i, i as u32 + 1, page.icon, Vec2::splat(TAB_SIZE)) && self.page != i {
                log::debug!("menu: tab {} -> {}", self.page, i);
                self.page = i;
            }
        }
        ui.end_group();
    }

    fn content(&mut self, ui: &mut Ui<'_>) {
        let spacing = ui.style().item_spacing.0;
        let alpha   = self.fader.update(self.page, ui.delta_time());
        let style_a = ui.style().alpha;

        ui.set_cursor_pos(Vec2::new(SIDEBAR_W + spacing, 0.0));
        let tok  = ui.push_style_var(StyleVar::Alpha(alpha * style_a));
        let size = Vec2::new(MENU_SIZE.x - SIDEBAR_W - spacing, MENU_SIZE.y);
        if ui.begin_child("##container", size, ChildFlags::empty(), WindowFlags::NO_BACKGROUND) {
            let page  = PAGES[self.fader.active()];
            let width = Self::column_width(spacing);
            ui.set_cursor_pos(Vec2::new(0.0, spacing));
            self.column(ui, page.columns[0], width, spacing);
            ui.same_line();
            self.column(ui, page.columns[1], width, spacing);
        }
        ui.end_child();
        ui.pop_style_var(tok);
    }

    fn column(&mut self, ui: &mut Ui<'_>, panels: &[Panel], width: f32, spacing: f32) {
        ui.begin_group();
        for panel in panels {
            if ui.begin_child(panel.title, Vec2::new(width, 0.0), ChildFlags::empty(), WindowFlags::empty()) {
                (panel.draw)(ui, &mut self.settings, &self.assets);
            }
            ui.end_child();
            ui.dummy(Vec2::new(0.0, spacing));
        }
        ui.end_group();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{context, TestFont};
    use ragnarek_core::{Color, Context, MouseButton};

    fn frame(ctx: &mut Context, menu: &mut Menu) {
        let _ = ctx.frame(&TestFont, 1.0, |ui| menu.draw(ui));
    }

    /// Centre of tab `i` once the menu is centred on a 1920×1080 display.
    fn tab_centre(i: usize) -> Vec2 {
        let origin = (Vec2::new(1920.0, 1080.0) - MENU_SIZE) * 0.5;
        origin + Vec2::new(SIDEBAR_W * 0.5, SIDEBAR_W + TAB_SIZE * (i as f32 + 1.0))
    }

    #[test]
    fn columns_fill_the_page_area() {
        assert_eq!(Menu::column_width(20.0), 350.0);
    }

    #[test]
    fn starts_on_first_page_and_fades_in() {
        let mut ctx  = context();
        let mut menu = Menu::new(Assets::default());
        ctx.set_delta_time(0.125);
        frame(&mut ctx, &mut menu);
        assert_eq!(menu.page(), 0);
        assert_eq!(menu.fade_alpha(), 0.5);
    }

    #[test]
    fn clicking_a_tab_fades_over_to_its_page() {
        let mut ctx  = context();
        let mut menu = Menu::new(Assets::default());
        ctx.set_delta_time(1.0);
        frame(&mut ctx, &mut menu);
        assert_eq!(menu.fade_alpha(), 1.0);

        ctx.set_delta_time(0.125);
        let input = ctx.input_mut();
        input.set_mouse_pos(tab_centre(2));
        input.set_mouse_button(MouseButton::Left, true);
        input.set_mouse_button(MouseButton::Left, false);
        frame(&mut ctx, &mut menu);
        assert_eq!(menu.page(), 2);
        assert_eq!(menu.shown_page(), 0, "old page stays while fading out");

        ctx.input_mut().set_mouse_pos(Vec2::ZERO);
        for _ in 0..2 { frame(&mut ctx, &mut menu); }
        assert_eq!(menu.shown_page(), 2);
    }

    #[test]
    fn theme_is_pushed_into_the_style_every_frame() {
        let mut ctx  = context();
        let mut menu = Menu::new(Assets::default());
        menu.settings.theme.accent = [1.0, 0.0, 0.0, 0.2];
        frame(&mut ctx, &mut menu);
        assert_eq!(ctx.style().color(StyleColor::Accent), Color::from([1.0, 0.0, 0.0, 1.0]));
    }

    #[test]
    fn select_clamps_to_last_page() {
        let mut menu = Menu::new(Assets::default());
        menu.select(42);
        assert_eq!(menu.page(), PAGES.len() - 1);
    }
}
