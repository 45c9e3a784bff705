//! Window events, decoupled from the Win32 message numbers.
//!
//! The window procedure turns messages into [`WindowEvent`]s; the frame loop
//! drains them into the engine's input state before building the frame.

use ragnarek_core::{Context, MouseButton, Vec2};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WindowEvent {
    MouseMove(Vec2),
    Mouse { button: MouseButton, down: bool },
    /// Wheel notches, positive away from the user.
    Wheel(f32),
    Key { vk: i32, down: bool },
    Char(char),
    Resized { width: u32, height: u32 },
    /// A quit message was seen; the loop should stop.
    Quit,
}

/// What the caller should do with the window after applying events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Applied {
    pub resize: Option<(u32, u32)>,
    pub quit:   bool,
}

/// Feed `events` to `ctx` in arrival order.
pub fn apply(ctx: &mut Context, events: impl IntoIterator<Item = WindowEvent>) -> Applied {
    let mut out = Applied::default();
    for ev in events {
        match ev {
            WindowEvent::Resized { width, height } => {
                if width > 0 && height > 0 {
                    ctx.set_display_size(Vec2::new(width as f32, height as f32));
                    out.resize = Some((width, height));
                }
            }
            WindowEvent::Quit => out.quit = true,
            ev => {
                let input = ctx.input_mut();
                match ev {
                    WindowEvent::MouseMove(p)            => input.set_mouse_pos(p),
                    WindowEvent::Mouse { button, down }  => input.set_mouse_button(button, down),
                    WindowEvent::Wheel(d)                => input.add_mouse_wheel(d),
                    WindowEvent::Key { vk, down: true }  => input.press_virtual_key(vk),
                    WindowEvent::Key { vk, down: false } => input.release_virtual_key(vk),
                    WindowEvent::Char(c)                 => input.add_text(c),
                    WindowEvent::Resized { .. } | WindowEvent::Quit => {}
                }
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use ragnarek_core::Key;

    #[test]
    fn input_events_reach_the_context() {
        let mut ctx = Context::new();
        let out = apply(&mut ctx, [
            WindowEvent::MouseMove(Vec2::new(10.0, 20.0)),
            WindowEvent::Mouse { button: MouseButton::Left, down: true },
            WindowEvent::Key { vk: 0x1B, down: true },
            WindowEvent::Char('x'),
            WindowEvent::Wheel(-1.0),
        ]);
        let input = ctx.input();
        assert_eq!(input.mouse_pos, Vec2::new(10.0, 20.0));
        assert!(input.mouse_clicked(MouseButton::Left));
        assert!(input.key_pressed(Key::Escape));
        assert_eq!(input.vk_pressed, [0x01, 0x1B]);
        assert_eq!(input.text_input, "x");
        assert_eq!(input.mouse_wheel, -1.0);
        assert_eq!(out, Applied::default());
    }

    #[test]
    fn last_non_zero_resize_wins() {
        let mut ctx = Context::new();
        let out = apply(&mut ctx, [
            WindowEvent::Resized { width: 800, height: 600 },
            WindowEvent::Resized { width: 0, height: 0 },
        ]);
        assert_eq!(out.resize, Some((800, 600)));
        assert_eq!(ctx.input().display_size, Vec2::new(800.0, 600.0));
    }

    #[test]
    fn quit_is_reported() {
        let mut ctx = Context::new();
        assert!(apply(&mut ctx, [WindowEvent::Quit]).quit);
    }
}
