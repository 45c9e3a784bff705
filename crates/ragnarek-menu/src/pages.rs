//! Sidebar pages as data.
//!
//! Each page is a tab icon and two columns of panels. A panel is a titled
//! child region whose body is a plain function over the settings.

use ragnarek_core::{ColorEditFlags, SliderFlags, TextureId, Ui, Vec2};

use crate::settings::{Players, Settings};

/// Textures the pages may show. Owned by the backend, borrowed here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Assets {
    pub logo:          Option<TextureId>,
    pub preview_model: Option<TextureId>,
}

pub type DrawPanel = fn(&mut Ui<'_>, &mut Settings, &Assets);

#[derive(Clone, Copy)]
pub struct Panel {
    pub title: &'static str,
    pub draw:  DrawPanel,
}

#[derive(Clone, Copy)]
pub struct Page {
    /// Glyph in the icon font.
    pub icon:    &'static str,
    pub columns: [&'static [Panel]; 2],
}

impl Page {
    pub fn is_empty(&self) -> bool { self.columns.iter().all(|c| c.is_empty()) }
}

const EMPTY: Page = Page { icon: "", columns: [&[], &[]] };

pub const PAGES: [Page; 7] = [
    Page {
        icon: "c",
        columns: [
            &[
                Panel { title: "Weapons",   draw: weapons },
                Panel { title: "Additions", draw: additions },
                Panel { title: "Anti Aim",  draw: anti_aim },
            ],
            &[
                Panel { title: "General",   draw: general },
                Panel { title: "Selection", draw: selection },
                Panel { title: "Extended",  draw: extended },
            ],
        ],
    },
    Page { icon: "a", ..EMPTY },
    Page {
        icon: "b",
        columns: [
            &[
                Panel { title: "Players", draw: players },
                Panel { title: "Models",  draw: models },
                Panel { title: "World",   draw: world },
            ],
            &[
                Panel { title: "ESP Preview",         draw: esp_preview },
                Panel { title: "ESP Manage Elements", draw: esp_elements },
            ],
        ],
    },
    Page { icon: "o", ..EMPTY },
    Page { icon: "v", ..EMPTY },
    Page { icon: "f", ..EMPTY },
    Page {
        icon: "e",
        columns: [
            &[
                Panel { title: "GUI",    draw: gui },
                Panel { title: "Styles", draw: styles },
                Panel { title: "Others", draw: others },
            ],
            &[
                Panel { title: "Miscellaneous", draw: miscellaneous },
            ],
        ],
    },
];

/// Flags shared by every swatch in the menu.
pub fn picker_flags() -> ColorEditFlags {
    ColorEditFlags::NO_SIDE_PREVIEW
        | ColorEditFlags::ALPHA_BAR
        | ColorEditFlags::NO_INPUTS
        | ColorEditFlags::ALPHA_PREVIEW
        | ColorEditFlags::DISPLAY_HEX
}

const ON_OFF: [&str; 2] = ["Disabled", "Enabled"];

// ─── Rage ────────────────────────────────────────────────────────────────────

fn weapons(ui: &mut Ui<'_>, s: &mut Settings, _: &Assets) {
    ui.combo("Select Weapon", &mut s.rage.weapon, &["AWP", "AK47", "M4A1"], 3);
    ui.checkbox("Enable Config", &mut s.rage.enable_config);
}

fn additions(ui: &mut Ui<'_>, s: &mut Settings, _: &Assets) {
    let r = &mut s.rage;
    ui.combo("History", &mut r.history, &["Low", "Normal", "High"], 3);
    ui.checkbox("Delay Shot", &mut r.delay_shot);
    ui.checkbox("Duck Peek Assist", &mut r.duck_peek_assist);
    ui.checkbox_clicked("Quick Peek Assist", &mut r.quick_peek_assist);
    ui.checkbox("Speed Up Fire Rate", &mut r.speed_up_fire_rate);
    ui.checkbox_clicked("Magic Bullet", &mut r.magic_bullet);
}

fn anti_aim(ui: &mut Ui<'_>, s: &mut Settings, _: &Assets) {
    let a = &mut s.anti_aim;
    ui.checkbox("Enabled", &mut a.enabled);
    ui.combo("Pitch", &mut a.pitch, &ON_OFF, 2);
    ui.combo("Yaw", &mut a.yaw, &ON_OFF, 2);
    ui.checkbox("Slow Walk", &mut a.slow_walk);
    ui.checkbox_picker("Freestanding", &mut a.freestanding, &mut a.freestanding_color, picker_flags());
}

fn general(ui: &mut Ui<'_>, s: &mut Settings, _: &Assets) {
    let a = &mut s.aimbot;
    ui.checkbox_clicked("Enabled", &mut a.enabled);
    ui.checkbox_clicked("Silent Aimbot", &mut a.silent);
    ui.checkbox("Automatic Fire", &mut a.automatic_fire);
    ui.checkbox("Penetrate Walls", &mut a.penetrate_walls);
    ui.slider_int("Field Of View", &mut a.field_of_view, -180, 180, "%d", SliderFlags::empty());
    ui.range_slider_float("Hit Chance", &mut a.hit_chance.0, &mut a.hit_chance.1, -100.0, 100.0, "%.1f, %.1f", 1.0);
    ui.range_slider_float("Damage", &mut a.damage.0, &mut a.damage.1, 0.0, 10.0, "%.1f, %.1f", 1.0);
}

fn selection(ui: &mut Ui<'_>, s: &mut Settings, _: &Assets) {
    let sel = &mut s.selection;
    ui.combo("Target", &mut sel.target, &["Hit Chance", "Default"], 2);
    ui.multi_combo("Hitboxes", &mut sel.hitboxes, &["Head", "Chest", "Stomach", "Body", "Legs"]);
    ui.combo("Multipoint", &mut sel.multipoint, &["Select", "Defect"], 2);
    ui.checkbox_clicked("Auto Stop", &mut sel.auto_stop);
    ui.checkbox("Auto Scope", &mut sel.auto_scope);
}

fn extended(ui: &mut Ui<'_>, s: &mut Settings, _: &Assets) {
    ui.combo("Mode", &mut s.extended.mode, &["Automatic", "Yourself"], 2);
    ui.keybind("Click on me to bind", &mut s.extended.key, true);
}

// ─── Visuals ─────────────────────────────────────────────────────────────────

fn players(ui: &mut Ui<'_>, s: &mut Settings, _: &Assets) {
    let p = &mut s.players;
    ui.checkbox("Enabled", &mut p.enabled);
    ui.checkbox("Teammates", &mut p.teammates);
    ui.checkbox("Behind Walls", &mut p.behind_walls);
    ui.checkbox_clicked("Bullet Tracers", &mut p.bullet_tracers);
    ui.checkbox_clicked("Offscreen ESP", &mut p.offscreen_esp);
    ui.checkbox_picker("Sounds", &mut p.sounds, &mut p.sounds_color, picker_flags());
    let (c1, c2) = &mut p.radar_colors;
    ui.checkbox_double_picker("Radar", &mut p.radar, c1, c2, picker_flags());

    if ui.input_text_hint("##note", "Enter your text here", &mut p.note, Vec2::new(0.0, 35.0)) {
        clip_note(&mut p.note);
    }
}

fn clip_note(note: &mut String) {
    if let Some((cut, _)) = note.char_indices().nth(Players::NOTE_MAX) {
        note.truncate(cut);
    }
}

fn models(ui: &mut Ui<'_>, s: &mut Settings, _: &Assets) {
    let m = &mut s.models;
    ui.keybind("Enemies", &mut m.enemies, true);
    ui.keybind("Teammates", &mut m.teammates, true);
    ui.keybind("Local Player", &mut m.local_player, true);
    ui.keybind("Ragdolls", &mut m.ragdolls, true);
}

fn world(ui: &mut Ui<'_>, s: &mut Settings, _: &Assets) {
    let w = &mut s.world;
    ui.checkbox_clicked("Bomb", &mut w.bomb);
    ui.checkbox_clicked("Weapons", &mut w.weapons);
    ui.range_slider_float("The Radius Of Vision", &mut w.radius.0, &mut w.radius.1, -10000.0, 10000.0, "%.1f, %.1f", 1.0);
}

fn esp_preview(ui: &mut Ui<'_>, s: &mut Settings, assets: &Assets) {
    ui.esp_preview(assets.preview_model, &s.esp);
}

fn esp_elements(ui: &mut Ui<'_>, s: &mut Settings, _: &Assets) {
    let e = &mut s.esp;
    let f = picker_flags();
    ui.checkbox_picker("Show Nickname", &mut e.nickname.0, &mut e.nickname.1, f);
    ui.checkbox_picker("Show Zoomed", &mut e.zoom.0, &mut e.zoom.1, f);
    ui.checkbox_picker("Show Weapon", &mut e.weapon.0, &mut e.weapon.1, f);
    ui.checkbox_picker("Show Money", &mut e.money.0, &mut e.money.1, f);
    ui.checkbox_picker("Show Bomb", &mut e.bomb.0, &mut e.bomb.1, f);
    ui.checkbox_picker("Show Box", &mut e.esp_box.0, &mut e.esp_box.1, f);
    ui.checkbox_picker("Show Hit", &mut e.hit.0, &mut e.hit.1, f);
    ui.checkbox_double_picker("Show HP", &mut e.hp_line.0, &mut e.hp_color, &mut e.hp_line.1, f);
    ui.checkbox_picker("Show C4", &mut e.c4.0, &mut e.c4.1, f);
}

// ─── Settings ────────────────────────────────────────────────────────────────

fn gui(ui: &mut Ui<'_>, s: &mut Settings, _: &Assets) {
    ui.color_edit4("Accent Color", &mut s.theme.accent, picker_flags() | ColorEditFlags::NO_ALPHA);
    ui.checkbox("Info Bar", &mut s.info_bar.enabled);
}

fn styles(ui: &mut Ui<'_>, s: &mut Settings, _: &Assets) {
    let t = &mut s.theme;
    ui.color_edit4("Background", &mut t.background, picker_flags());
    ui.color_edit4("Border", &mut t.border, picker_flags());
    ui.color_edit4("Child", &mut t.child, picker_flags());
}

fn others(ui: &mut Ui<'_>, s: &mut Settings, _: &Assets) {
    let t = &mut s.theme;
    ui.color_edit4("Color Element's", &mut t.widget, picker_flags());
    ui.color_edit4("Color Selectable", &mut t.selectable, picker_flags());
    ui.color_edit4("Color Popup's", &mut t.popup, picker_flags());
}

fn miscellaneous(ui: &mut Ui<'_>, s: &mut Settings, _: &Assets) {
    let t = &mut s.theme;
    ui.color_edit4("Text Active", &mut t.text_active, picker_flags());
    ui.color_edit4("Text Hovered", &mut t.text_hovered, picker_flags());
    ui.color_edit4("Text Default", &mut t.text_default, picker_flags());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{context, TestFont};
    use ragnarek_core::{ChildFlags, WindowFlags};

    #[test]
    fn seven_tabs_in_sidebar_order() {
        let icons: Vec<&str> = PAGES.iter().map(|p| p.icon).collect();
        assert_eq!(icons, ["c", "a", "b", "o", "v", "f", "e"]);
    }

    #[test]
    fn only_rage_visuals_and_settings_have_panels() {
        let populated: Vec<usize> = (0..PAGES.len()).filter(|&i| !PAGES[i].is_empty()).collect();
        assert_eq!(populated, [0, 2, 6]);
    }

    #[test]
    fn every_panel_draws_headless_without_touching_defaults() {
        let mut ctx      = context();
        let mut settings = Settings::default();
        let assets       = Assets::default();
        let _ = ctx.frame(&TestFont, 1.0, |ui| {
            ui.begin("menu", WindowFlags::NO_DECORATION);
            for page in &PAGES {
                for panel in page.columns.iter().flat_map(|c| c.iter()) {
                    ui.begin_child(panel.title, Vec2::new(350.0, 0.0), ChildFlags::empty(), WindowFlags::empty());
                    (panel.draw)(ui, &mut settings, &assets);
                    ui.end_child();
                }
            }
            ui.end();
        });
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn long_notes_are_cut_on_char_boundaries() {
        let mut note = "é".repeat(Players::NOTE_MAX + 6);
        clip_note(&mut note);
        assert_eq!(note.chars().count(), Players::NOTE_MAX);

        let mut short = "short".to_owned();
        clip_note(&mut short);
        assert_eq!(short, "short");
    }
}
