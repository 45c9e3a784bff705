//! Every value the menu edits, with its start-up default.
//!
//! Nothing is persisted: a fresh process always starts from
//! [`Settings::default`]. Groups follow the panels that edit them.

use ragnarek_core::EspPreview;

use crate::theme::Theme;

/// Purple used by the freestanding, sound and radar swatches.
const SWATCH: [f32; 3] = [124.0 / 255.0, 103.0 / 255.0, 1.0];

fn swatch(alpha: f32) -> [f32; 4] { [SWATCH[0], SWATCH[1], SWATCH[2], alpha] }

// ─── Rage page ───────────────────────────────────────────────────────────────

/// "Weapons" and "Additions" panels.
#[derive(Debug, Clone, PartialEq)]
pub struct Rage {
    pub weapon:             usize,
    pub enable_config:      bool,
    pub history:            usize,
    pub delay_shot:         bool,
    pub duck_peek_assist:   bool,
    pub quick_peek_assist:  bool,
    pub speed_up_fire_rate: bool,
    pub magic_bullet:       bool,
}

impl Default for Rage {
    fn default() -> Self {
        Self {
            weapon:             0,
            enable_config:      true,
            history:            0,
            delay_shot:         true,
            duck_peek_assist:   false,
            quick_peek_assist:  false,
            speed_up_fire_rate: true,
            magic_bullet:       false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AntiAim {
    pub enabled:            bool,
    pub pitch:              usize,
    pub yaw:                usize,
    pub slow_walk:          bool,
    pub freestanding:       bool,
    pub freestanding_color: [f32; 4],
}

impl Default for AntiAim {
    fn default() -> Self {
        Self {
            enabled:            true,
            pitch:              0,
            yaw:                0,
            slow_walk:          false,
            freestanding:       false,
            freestanding_color: swatch(0.5),
        }
    }
}

/// "General" panel.
#[derive(Debug, Clone, PartialEq)]
pub struct Aimbot {
    pub enabled:         bool,
    pub silent:          bool,
    pub automatic_fire:  bool,
    pub penetrate_walls: bool,
    pub field_of_view:   i32,
    pub hit_chance:      (f32, f32),
    pub damage:          (f32, f32),
}

impl Default for Aimbot {
    fn default() -> Self {
        Self {
            enabled:         true,
            silent:          false,
            automatic_fire:  true,
            penetrate_walls: true,
            field_of_view:   90,
            hit_chance:      (-100.0, 100.0),
            damage:          (0.0, 10.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub target:     usize,
    pub hitboxes:   [bool; 5],
    pub multipoint: usize,
    pub auto_stop:  bool,
    pub auto_scope: bool,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            target:     0,
            hitboxes:   [false, true, true, true, false],
            multipoint: 0,
            auto_stop:  true,
            auto_scope: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extended {
    pub mode: usize,
    pub key:  i32,
}

// ─── Visuals page ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct Players {
    pub enabled:         bool,
    pub teammates:       bool,
    pub behind_walls:    bool,
    pub bullet_tracers:  bool,
    pub offscreen_esp:   bool,
    pub sounds:          bool,
    pub sounds_color:    [f32; 4],
    pub radar:           bool,
    pub radar_colors:    ([f32; 4], [f32; 4]),
    pub note:            String,
}

impl Players {
    /// Longest note the text field accepts, in characters.
    pub const NOTE_MAX: usize = 44;
}

impl Default for Players {
    fn default() -> Self {
        Self {
            enabled:        true,
            teammates:      false,
            behind_walls:   false,
            bullet_tracers: true,
            offscreen_esp:  false,
            sounds:         false,
            sounds_color:   swatch(0.5),
            radar:          false,
            radar_colors:   (swatch(1.0), swatch(0.5)),
            note:           String::new(),
        }
    }
}

/// Model keybinds; zero means unbound.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Models {
    pub enemies:      i32,
    pub teammates:    i32,
    pub local_player: i32,
    pub ragdolls:     i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct World {
    pub bomb:    bool,
    pub weapons: bool,
    pub radius:  (f32, f32),
}

impl Default for World {
    fn default() -> Self {
        Self { bomb: true, weapons: false, radius: (-9000.0, 9000.0) }
    }
}

// ─── Info bar ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct InfoBarText {
    pub enabled:   bool,
    pub name:      String,
    pub developer: String,
    pub ping:      String,
    pub time:      String,
}

impl Default for InfoBarText {
    fn default() -> Self {
        Self {
            enabled:   true,
            name:      "RAGNAREK".to_owned(),
            developer: "Bloodysharp".to_owned(),
            ping:      "80ms".to_owned(),
            time:      "4:30am".to_owned(),
        }
    }
}

impl InfoBarText {
    pub fn segments(&self) -> [&str; 4] {
        [&self.name, &self.developer, &self.ping, &self.time]
    }
}

// ─── Settings ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Settings {
    pub rage:      Rage,
    pub anti_aim:  AntiAim,
    pub aimbot:    Aimbot,
    pub selection: Selection,
    pub extended:  Extended,
    pub players:   Players,
    pub models:    Models,
    pub world:     World,
    pub esp:       EspPreview,
    pub theme:     Theme,
    pub info_bar:  InfoBarText,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_first_launch() {
        let s = Settings::default();
        assert!(s.rage.enable_config && s.rage.delay_shot && !s.rage.magic_bullet);
        assert_eq!(s.aimbot.field_of_view, 90);
        assert_eq!(s.aimbot.hit_chance, (-100.0, 100.0));
        assert_eq!(s.selection.hitboxes, [false, true, true, true, false]);
        assert_eq!(s.world.radius, (-9000.0, 9000.0));
        assert_eq!(s.esp.hp, 85);
        assert_eq!(s.anti_aim.freestanding_color[3], 0.5);
        assert_eq!(s.info_bar.segments(), ["RAGNAREK", "Bloodysharp", "80ms", "4:30am"]);
    }
}
