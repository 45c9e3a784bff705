//! Window and swap-chain settings.

use ragnarek_core::{Color, Vec2};

#[derive(Debug, Clone, PartialEq)]
pub struct WindowConfig {
    pub title:       String,
    pub class_name:  String,
    pub width:       u32,
    pub height:      u32,
    /// Back-buffer clear colour, premultiplied by its alpha before use.
    pub clear_color: Color,
    pub vsync:       bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title:       "RAGNAREK".to_owned(),
            class_name:  "RagnarekOverlay".to_owned(),
            width:       1920,
            height:      1080,
            clear_color: Color::from_rgb8(26, 27, 31, 1.0),
            vsync:       true,
        }
    }
}

impl WindowConfig {
    #[inline] pub fn size(&self) -> Vec2 { Vec2::new(self.width as f32, self.height as f32) }

    /// Interval handed to `Present`.
    #[inline] pub fn sync_interval(&self) -> u32 { u32::from(self.vsync) }

    pub fn premultiplied_clear(&self) -> [f32; 4] {
        let c = self.clear_color;
        [c.r * c.a, c.g * c.a, c.b * c.a, c.a]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = WindowConfig::default();
        assert_eq!((cfg.width, cfg.height), (1920, 1080));
        assert_eq!(cfg.sync_interval(), 1);
        let [r, g, b, a] = cfg.premultiplied_clear().map(|c| (c * 255.0).round() as u8);
        assert_eq!((r, g, b, a), (26, 27, 31, 255));
    }

    #[test]
    fn clear_colour_is_premultiplied() {
        let cfg = WindowConfig { clear_color: Color::new(1.0, 0.5, 0.0, 0.5), ..Default::default() };
        assert_eq!(cfg.premultiplied_clear(), [0.5, 0.25, 0.0, 0.5]);
    }
}
