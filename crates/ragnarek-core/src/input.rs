//! Keyboard and mouse input state.

use crate::Vec2;

// ─── MouseButton ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton { Left = 0, Right = 1, Middle = 2 }

impl MouseButton {
    pub const ALL: [Self; 3] = [Self::Left, Self::Right, Self::Middle];

    /// Win32 virtual-key code for this button (`VK_LBUTTON` …).
    #[inline]
    pub fn virtual_key(self) -> i32 {
        match self { Self::Left => 0x01, Self::Right => 0x02, Self::Middle => 0x04 }
    }
}

// ─── Key ─────────────────────────────────────────────────────────────────────

/// Named keys the widgets react to. Anything else reaches the UI only as a
/// raw virtual-key code (see [`InputState::press_virtual_key`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Key {
    Backspace, Delete, Enter, Tab,
    Left, Right, Home, End,
    Escape, Space,
    A, C, V, X,
    // Sentinel
    COUNT,
}

impl Key {
    /// Map a Win32 virtual-key code onto a named key.
    pub fn from_virtual_key(vk: i32) -> Option<Self> {
        Some(match vk {
            0x08 => Self::Backspace,
            0x2E => Self::Delete,
            0x0D => Self::Enter,
            0x09 => Self::Tab,
            0x25 => Self::Left,
            0x27 => Self::Right,
            0x24 => Self::Home,
            0x23 => Self::End,
            0x1B => Self::Escape,
            0x20 => Self::Space,
            0x41 => Self::A,
            0x43 => Self::C,
            0x56 => Self::V,
            0x58 => Self::X,
            _ => return None,
        })
    }
}

// ─── Modifiers ───────────────────────────────────────────────────────────────

bitflags::bitflags! {
    #[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Modifiers: u8 {
        const CTRL  = 1 << 0;
        const SHIFT = 1 << 1;
        const ALT   = 1 << 2;
        const SUPER = 1 << 3;
    }
}

// ─── InputState ──────────────────────────────────────────────────────────────

/// Input accumulated by the backend between two frames.
///
/// Backends call the setters whenever an OS event arrives; widgets read the
/// result during the next frame. Per-frame edges (clicks, releases, typed
/// text, key presses) are cleared by [`InputState::end_frame`], after every
/// widget has had a chance to see them.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    // Mouse
    pub mouse_pos:       Vec2,
    pub mouse_delta:     Vec2,
    pub mouse_wheel:     f32,
    pub mouse_down:      [bool; 3],
    pub mouse_clicked:   [bool; 3],  // rose this frame
    pub mouse_released:  [bool; 3],  // fell this frame

    // Keyboard / text
    pub keys_down:    [bool; Key::COUNT as usize],
    pub keys_pressed: [bool; Key::COUNT as usize],
    pub modifiers:    Modifiers,
    pub text_input:   String,   // UTF-8 characters typed this frame
    /// Raw virtual-key codes pressed this frame, in arrival order.
    pub vk_pressed:   Vec<i32>,

    // Display
    pub display_size: Vec2,
    pub frame_count:  u64,
}

impl InputState {
    /// Called by the context once the frame's widgets have run.
    pub fn end_frame(&mut self) {
        self.mouse_clicked  = [false; 3];
        self.mouse_released = [false; 3];
        self.keys_pressed   = [false; Key::COUNT as usize];
        self.mouse_delta    = Vec2::ZERO;
        self.mouse_wheel    = 0.0;
        self.text_input.clear();
        self.vk_pressed.clear();
        self.frame_count   += 1;
    }

    // ── event setters ─────────────────────────────────────────────────────────

    pub fn set_mouse_pos(&mut self, pos: Vec2) {
        self.mouse_delta += pos - self.mouse_pos;
        self.mouse_pos    = pos;
    }

    pub fn set_mouse_button(&mut self, btn: MouseButton, down: bool) {
        let i = btn as usize;
        if down && !self.mouse_down[i] {
            self.mouse_clicked[i] = true;
            self.vk_pressed.push(btn.virtual_key());
        }
        if !down && self.mouse_down[i] { self.mouse_released[i] = true; }
        self.mouse_down[i] = down;
    }

    pub fn add_mouse_wheel(&mut self, y: f32) { self.mouse_wheel += y; }

    pub fn set_key(&mut self, key: Key, down: bool) {
        let i = key as usize;
        if down && !self.keys_down[i] { self.keys_pressed[i] = true; }
        self.keys_down[i] = down;
    }

    /// Record a key-down for a raw virtual-key code. Named keys are updated
    /// as well, so backends only need this one entry point for keyboards.
    pub fn press_virtual_key(&mut self, vk: i32) {
        if let Some(k) = Key::from_virtual_key(vk) {
            if self.keys_down[k as usize] { return; } // auto-repeat
            self.set_key(k, true);
        }
        self.vk_pressed.push(vk);
    }

    pub fn release_virtual_key(&mut self, vk: i32) {
        if let Some(k) = Key::from_virtual_key(vk) { self.set_key(k, false); }
    }

    pub fn add_text(&mut self, ch: char) {
        if !ch.is_control() { self.text_input.push(ch); }
    }

    // ── query helpers ─────────────────────────────────────────────────────────

    #[inline] pub fn mouse_down(&self, btn: MouseButton)     -> bool { self.mouse_down[btn as usize] }
    #[inline] pub fn mouse_clicked(&self, btn: MouseButton)  -> bool { self.mouse_clicked[btn as usize] }
    #[inline] pub fn mouse_released(&self, btn: MouseButton) -> bool { self.mouse_released[btn as usize] }

    #[inline] pub fn key_down(&self, k: Key)    -> bool { self.keys_down[k as usize] }
    #[inline] pub fn key_pressed(&self, k: Key) -> bool { self.keys_pressed[k as usize] }

    #[inline] pub fn ctrl(&self)  -> bool { self.modifiers.contains(Modifiers::CTRL)  }
    #[inline] pub fn shift(&self) -> bool { self.modifiers.contains(Modifiers::SHIFT) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_survive_until_end_of_frame() {
        let mut input = InputState::default();
        input.set_mouse_button(MouseButton::Left, true);
        input.set_mouse_button(MouseButton::Left, false);
        assert!(input.mouse_clicked(MouseButton::Left));
        assert!(input.mouse_released(MouseButton::Left));
        assert!(!input.mouse_down(MouseButton::Left));

        input.end_frame();
        assert!(!input.mouse_clicked(MouseButton::Left));
        assert!(!input.mouse_released(MouseButton::Left));
        assert_eq!(input.frame_count, 1);
    }

    #[test]
    fn virtual_keys_feed_named_keys_and_raw_queue() {
        let mut input = InputState::default();
        input.press_virtual_key(0x1B);
        input.press_virtual_key(0x46); // 'F'
        assert!(input.key_pressed(Key::Escape));
        assert_eq!(input.vk_pressed, vec![0x1B, 0x46]);

        // Held escape auto-repeats without producing a new edge.
        input.end_frame();
        input.press_virtual_key(0x1B);
        assert!(!input.key_pressed(Key::Escape));
        assert!(input.vk_pressed.is_empty());
    }

    #[test]
    fn mouse_presses_are_reported_as_virtual_keys() {
        let mut input = InputState::default();
        input.set_mouse_button(MouseButton::Right, true);
        assert_eq!(input.vk_pressed, vec![0x02]);
    }

    #[test]
    fn control_characters_are_not_text() {
        let mut input = InputState::default();
        input.add_text('\u{8}');
        input.add_text('a');
        assert_eq!(input.text_input, "a");
    }
}
