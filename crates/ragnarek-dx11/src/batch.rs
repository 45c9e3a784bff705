//! Backend-neutral pieces of draw-list submission.

use ragnarek_core::{DrawCmd, Rect, Vec2};

/// Column-major orthographic projection mapping pixels to clip space, with
/// the origin at the top-left corner.
pub fn ortho_projection(display: Vec2) -> [[f32; 4]; 4] {
    let (l, r, t, b) = (0.0, display.x, 0.0, display.y);
    [
        [2.0 / (r - l),     0.0,               0.0, 0.0],
        [0.0,               2.0 / (t - b),     0.0, 0.0],
        [0.0,               0.0,               0.5, 0.0],
        [(r + l) / (l - r), (t + b) / (b - t), 0.5, 1.0],
    ]
}

/// Integer scissor rectangle `(left, top, right, bottom)` for `cmd`, clamped
/// to the display. `None` when nothing would be drawn.
pub fn scissor(cmd: &DrawCmd, display: Vec2) -> Option<(i32, i32, i32, i32)> {
    if cmd.elem_count == 0 { return None; }
    let clip = cmd.clip_rect.intersect(Rect::from_min_size(Vec2::ZERO, display));
    if clip.is_empty() { return None; }
    Some((
        clip.min.x.floor() as i32,
        clip.min.y.floor() as i32,
        clip.max.x.ceil() as i32,
        clip.max.y.ceil() as i32,
    ))
}

/// New capacity for a dynamic buffer holding `needed` elements, or `None`
/// when `current` is already large enough.
pub fn grow(current: usize, needed: usize, slack: usize) -> Option<usize> {
    (needed > current).then_some(needed + slack)
}
