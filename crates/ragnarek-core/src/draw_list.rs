//! Draw-command accumulator – the bridge between the widget layer and renderers.
//!
//! Widgets emit filled shapes, lines and glyph quads; the backend uploads
//! `vtx_buf` / `idx_buf` once per frame and issues one indexed draw per
//! [`DrawCmd`].

use crate::{Color, Rect, Vec2};

// ─── Vertex ──────────────────────────────────────────────────────────────────

/// A single render vertex with position, UV, and a packed RGBA colour.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[repr(C)]
pub struct DrawVert {
    /// Screen-space position.
    pub pos: [f32; 2],
    /// Normalised texture coordinates.
    pub uv:  [f32; 2],
    /// 0xAABBGGRR packed colour.
    pub col: u32,
}

// SAFETY: all fields are plain scalar types with no padding surprises.
unsafe impl bytemuck::Pod      for DrawVert {}
unsafe impl bytemuck::Zeroable for DrawVert {}

/// 16-bit index type. Each command addresses at most 65 536 vertices past
/// its `vtx_offset`.
pub type DrawIdx = u16;

const MAX_CMD_VERTS: usize = DrawIdx::MAX as usize + 1;

// ─── TextureId ───────────────────────────────────────────────────────────────

/// Opaque handle to a GPU texture / atlas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TextureId(pub usize);

impl TextureId {
    pub const WHITE: Self = Self(0);
    pub const FONT:  Self = Self(1);
}

// ─── Corners ─────────────────────────────────────────────────────────────────

bitflags::bitflags! {
    /// Which corners of a rectangle get rounded.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Corners: u8 {
        const TOP_LEFT     = 1 << 0;
        const TOP_RIGHT    = 1 << 1;
        const BOTTOM_RIGHT = 1 << 2;
        const BOTTOM_LEFT  = 1 << 3;
        const LEFT  = Self::TOP_LEFT.bits()  | Self::BOTTOM_LEFT.bits();
        const RIGHT = Self::TOP_RIGHT.bits() | Self::BOTTOM_RIGHT.bits();
        const ALL   = Self::LEFT.bits()      | Self::RIGHT.bits();
    }
}

// ─── DrawCmd ─────────────────────────────────────────────────────────────────

/// A single batched render command.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCmd {
    /// Scissor / clip rectangle in screen pixels.
    pub clip_rect:  Rect,
    pub texture_id: TextureId,
    /// Number of indices to draw (always a multiple of 3).
    pub elem_count: u32,
    /// First index of this command in `idx_buf`.
    pub idx_offset: u32,
    /// Value added to each index.
    pub vtx_offset: u32,
}

// ─── DrawList ────────────────────────────────────────────────────────────────

/// CPU-side vertex / index / command buffer.
///
/// Cleared at the beginning of every frame.
#[derive(Debug)]
pub struct DrawList {
    pub vtx_buf: Vec<DrawVert>,
    pub idx_buf: Vec<DrawIdx>,
    pub cmd_buf: Vec<DrawCmd>,

    clip_stack: Vec<Rect>,
    tex_stack:  Vec<TextureId>,
    /// Multiplied into the alpha of every emitted colour.
    alpha:      f32,
}

impl Default for DrawList {
    fn default() -> Self {
        Self {
            vtx_buf:    Vec::new(),
            idx_buf:    Vec::new(),
            cmd_buf:    Vec::new(),
            clip_stack: Vec::new(),
            tex_stack:  Vec::new(),
            alpha:      1.0,
        }
    }
}

impl DrawList {
    pub fn clear(&mut self) {
        self.vtx_buf.clear();
        self.idx_buf.clear();
        self.cmd_buf.clear();
        self.clip_stack.clear();
        self.tex_stack.clear();
    }

    pub fn is_empty(&self) -> bool { self.idx_buf.is_empty() }

    /// Global alpha applied to everything drawn from now on.
    pub fn set_alpha(&mut self, alpha: f32) { self.alpha = alpha.clamp(0.0, 1.0); }
    pub fn alpha(&self) -> f32 { self.alpha }

    // ─── clip stack ──────────────────────────────────────────────────────────

    pub fn push_clip_rect(&mut self, rect: Rect) {
        let clip = match self.clip_stack.last() {
            Some(&parent) => rect.intersect(parent),
            None          => rect,
        };
        self.clip_stack.push(clip);
        self.add_draw_cmd();
    }

    pub fn pop_clip_rect(&mut self) {
        self.clip_stack.pop();
        self.add_draw_cmd();
    }

    pub fn clip_rect(&self) -> Option<Rect> { self.clip_stack.last().copied() }

    // ─── texture stack ───────────────────────────────────────────────────────

    pub fn push_texture(&mut self, id: TextureId) {
        self.tex_stack.push(id);
        self.add_draw_cmd();
    }

    pub fn pop_texture(&mut self) {
        self.tex_stack.pop();
        self.add_draw_cmd();
    }

    // ─── layers ──────────────────────────────────────────────────────────────

    /// Move every command of `other` on top of this list, leaving `other` empty.
    pub fn append(&mut self, other: &mut DrawList) {
        let vtx_base = self.vtx_buf.len() as u32;
        let idx_base = self.idx_buf.len() as u32;
        for cmd in other.cmd_buf.drain(..) {
            if cmd.elem_count == 0 { continue; }
            self.cmd_buf.push(DrawCmd {
                idx_offset: cmd.idx_offset + idx_base,
                vtx_offset: cmd.vtx_offset + vtx_base,
                ..cmd
            });
        }
        self.vtx_buf.append(&mut other.vtx_buf);
        self.idx_buf.append(&mut other.idx_buf);
        other.clear();
    }

    // ─── internal command management ─────────────────────────────────────────

    fn add_draw_cmd(&mut self) {
        let clip = self.clip_stack.last().copied().unwrap_or(Rect {
            min: Vec2::ZERO,
            max: Vec2::splat(f32::MAX),
        });
        let tex = self.tex_stack.last().copied().unwrap_or(TextureId::WHITE);
        let cmd = DrawCmd {
            clip_rect:  clip,
            texture_id: tex,
            elem_count: 0,
            idx_offset: self.idx_buf.len() as u32,
            vtx_offset: self.vtx_buf.len() as u32,
        };
        match self.cmd_buf.last_mut() {
            // Reuse a command nothing was drawn with yet.
            Some(last) if last.elem_count == 0 => *last = cmd,
            _ => self.cmd_buf.push(cmd),
        }
    }

    /// Make room for `vtx_count` vertices in the current command, opening a
    /// new one when there is none yet or the 16-bit index range would overflow.
    fn prim_reserve(&mut self, vtx_count: usize) {
        let needs_cmd = match self.cmd_buf.last() {
            None      => true,
            Some(cmd) => self.vtx_buf.len() - cmd.vtx_offset as usize + vtx_count > MAX_CMD_VERTS,
        };
        if needs_cmd {
            if let Some(last) = self.cmd_buf.last().filter(|c| c.elem_count > 0).cloned() {
                // Same clip/texture, fresh vertex window.
                self.cmd_buf.push(DrawCmd {
                    elem_count: 0,
                    idx_offset: self.idx_buf.len() as u32,
                    vtx_offset: self.vtx_buf.len() as u32,
                    ..last
                });
            } else {
                self.add_draw_cmd();
            }
        }
    }

    #[inline]
    fn pack(&self, col: Color) -> u32 {
        col.with_alpha(col.a * self.alpha).to_rgba_u32()
    }

    fn add_vert(&mut self, pos: Vec2, uv: Vec2, col: u32) {
        self.vtx_buf.push(DrawVert { pos: pos.into(), uv: uv.into(), col });
    }

    fn add_idx(&mut self, base: u32, a: u32, b: u32, c: u32) {
        let Some(cmd) = self.cmd_buf.last_mut() else { return };
        let rel = base - cmd.vtx_offset;
        self.idx_buf.extend_from_slice(&[
            (rel + a) as DrawIdx,
            (rel + b) as DrawIdx,
            (rel + c) as DrawIdx,
        ]);
        cmd.elem_count += 3;
    }

    fn add_quad(&mut self, p: [Vec2; 4], uv: [Vec2; 4], col: u32) {
        self.prim_reserve(4);
        let base = self.vtx_buf.len() as u32;
        for (p, uv) in p.into_iter().zip(uv) { self.add_vert(p, uv, col); }
        self.add_idx(base, 0, 1, 2);
        self.add_idx(base, 0, 2, 3);
    }

    // ─── Filled primitives ───────────────────────────────────────────────────

    /// Solid filled rectangle.
    pub fn filled_rect(&mut self, rect: Rect, rounding: f32, col: Color) {
        self.filled_rect_corners(rect, rounding, Corners::ALL, col);
    }

    /// Filled rectangle rounding only the selected corners.
    pub fn filled_rect_corners(&mut self, rect: Rect, rounding: f32, corners: Corners, col: Color) {
        if rect.is_empty() { return; }
        let c = self.pack(col);
        if rounding < 0.5 || corners.is_empty() {
            self.fill_rect_raw(rect, c);
        } else {
            self.fill_rounded_rect(rect, rounding, corners, c);
        }
    }

    /// Four-colour gradient rectangle (corners clockwise from top-left).
    pub fn filled_rect_multicolor(&mut self, r: Rect, tl: Color, tr: Color, br: Color, bl: Color) {
        if r.is_empty() { return; }
        self.prim_reserve(4);
        let base = self.vtx_buf.len() as u32;
        let uv   = Vec2::ZERO;
        let (tl, tr, br, bl) = (self.pack(tl), self.pack(tr), self.pack(br), self.pack(bl));
        self.add_vert(r.min,                        uv, tl);
        self.add_vert(Vec2::new(r.max.x, r.min.y),  uv, tr);
        self.add_vert(r.max,                        uv, br);
        self.add_vert(Vec2::new(r.min.x, r.max.y),  uv, bl);
        self.add_idx(base, 0, 1, 2);
        self.add_idx(base, 0, 2, 3);
    }

    fn fill_rect_raw(&mut self, r: Rect, col: u32) {
        let uv = Vec2::ZERO; // white pixel UV
        self.add_quad(
            [r.min, Vec2::new(r.max.x, r.min.y), r.max, Vec2::new(r.min.x, r.max.y)],
            [uv; 4],
            col,
        );
    }

    fn fill_rounded_rect(&mut self, r: Rect, rounding: f32, corners: Corners, col: u32) {
        use std::f32::consts::PI;
        const SEGS: usize = 8;

        let rounding = rounding.min(r.width() * 0.5).min(r.height() * 0.5);
        let radius = |c: Corners| if corners.contains(c) { rounding } else { 0.0 };
        let radii = [
            radius(Corners::TOP_LEFT),
            radius(Corners::TOP_RIGHT),
            radius(Corners::BOTTOM_RIGHT),
            radius(Corners::BOTTOM_LEFT),
        ];
        let centers = [
            Vec2::new(r.min.x + radii[0], r.min.y + radii[0]),
            Vec2::new(r.max.x - radii[1], r.min.y + radii[1]),
            Vec2::new(r.max.x - radii[2], r.max.y - radii[2]),
            Vec2::new(r.min.x + radii[3], r.max.y - radii[3]),
        ];
        let arcs = [(PI, 1.5 * PI), (1.5 * PI, 2.0 * PI), (0.0, 0.5 * PI), (0.5 * PI, PI)];

        let total = (SEGS + 1) * 4;
        self.prim_reserve(total + 1);
        let uv   = Vec2::ZERO;
        let base = self.vtx_buf.len() as u32;
        self.add_vert(r.center(), uv, col);
        for (ci, &(start, end)) in arcs.iter().enumerate() {
            for s in 0..=SEGS {
                let t  = start + (end - start) * (s as f32 / SEGS as f32);
                let pt = centers[ci] + Vec2::new(t.cos(), t.sin()) * radii[ci];
                self.add_vert(pt, uv, col);
            }
        }
        for i in 0..total as u32 {
            let next = if i + 2 > total as u32 { 1 } else { i + 2 };
            self.add_idx(base, 0, i + 1, next);
        }
    }

    /// Outlined rectangle (4 quads).
    pub fn rect_outline(&mut self, rect: Rect, thickness: f32, col: Color) {
        if rect.is_empty() { return; }
        let c = self.pack(col);
        let t = thickness;
        self.fill_rect_raw(Rect::from_min_size(rect.min, Vec2::new(rect.width(), t)), c);
        self.fill_rect_raw(Rect::from_min_size(Vec2::new(rect.min.x, rect.max.y - t), Vec2::new(rect.width(), t)), c);
        self.fill_rect_raw(Rect::from_min_size(rect.min, Vec2::new(t, rect.height())), c);
        self.fill_rect_raw(Rect::from_min_size(Vec2::new(rect.max.x - t, rect.min.y), Vec2::new(t, rect.height())), c);
    }

    /// A line segment rendered as a quad.
    pub fn line(&mut self, a: Vec2, b: Vec2, thickness: f32, col: Color) {
        let d   = b - a;
        let len = d.length();
        if len < 0.01 { return; }
        let c = self.pack(col);
        let n = Vec2::new(-d.y, d.x) * (thickness * 0.5 / len);
        self.add_quad([a + n, a - n, b - n, b + n], [Vec2::ZERO; 4], c);
    }

    /// Filled circle approximation (N-gon).
    pub fn filled_circle(&mut self, center: Vec2, radius: f32, col: Color, segments: usize) {
        let c    = self.pack(col);
        let uv   = Vec2::ZERO;
        let segs = segments.max(6);
        self.prim_reserve(segs + 2);
        let base = self.vtx_buf.len() as u32;
        self.add_vert(center, uv, c);
        for i in 0..=segs {
            let a  = 2.0 * std::f32::consts::PI * i as f32 / segs as f32;
            let pt = center + Vec2::new(a.cos(), a.sin()) * radius;
            self.add_vert(pt, uv, c);
        }
        for i in 0..segs as u32 {
            self.add_idx(base, 0, i + 1, i + 2);
        }
    }

    pub fn triangle_filled(&mut self, a: Vec2, b: Vec2, c_pt: Vec2, col: Color) {
        let c  = self.pack(col);
        let uv = Vec2::ZERO;
        self.prim_reserve(3);
        let base = self.vtx_buf.len() as u32;
        self.add_vert(a,    uv, c);
        self.add_vert(b,    uv, c);
        self.add_vert(c_pt, uv, c);
        self.add_idx(base, 0, 1, 2);
    }

    /// Render a textured quad (e.g. an image).
    pub fn image_quad(
        &mut self,
        texture: TextureId,
        p_min: Vec2, p_max: Vec2,
        uv_min: Vec2, uv_max: Vec2,
        col: Color,
    ) {
        let c = self.pack(col);
        self.push_texture(texture);
        self.add_quad(
            [p_min, Vec2::new(p_max.x, p_min.y), p_max, Vec2::new(p_min.x, p_max.y)],
            [uv_min, Vec2::new(uv_max.x, uv_min.y), uv_max, Vec2::new(uv_min.x, uv_max.y)],
            c,
        );
        self.pop_texture();
    }

    /// Emit one pre-positioned quad per glyph: `(pos_min, pos_max, uv_min, uv_max)`.
    pub fn add_text_raw(&mut self, glyphs: &[(Vec2, Vec2, Vec2, Vec2)], col: Color) {
        let c = self.pack(col);
        for &(p_min, p_max, uv_min, uv_max) in glyphs {
            self.add_quad(
                [p_min, Vec2::new(p_max.x, p_min.y), p_max, Vec2::new(p_min.x, p_max.y)],
                [uv_min, Vec2::new(uv_max.x, uv_min.y), uv_max, Vec2::new(uv_min.x, uv_max.y)],
                c,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit() -> Rect { Rect::new(Vec2::ZERO, Vec2::splat(10.0)) }

    #[test]
    fn first_primitive_opens_a_command() {
        let mut dl = DrawList::default();
        dl.filled_rect(unit(), 0.0, Color::WHITE);
        assert_eq!(dl.cmd_buf.len(), 1);
        assert_eq!(dl.cmd_buf[0].elem_count, 6);
        assert_eq!(dl.idx_buf, vec![0, 1, 2, 0, 2, 3]);
    }

    #[test]
    fn clip_changes_split_commands_and_indices_are_relative() {
        let mut dl = DrawList::default();
        dl.filled_rect(unit(), 0.0, Color::WHITE);
        dl.push_clip_rect(Rect::new(Vec2::ZERO, Vec2::splat(5.0)));
        dl.filled_rect(unit(), 0.0, Color::WHITE);
        dl.pop_clip_rect();

        let drawn: Vec<_> = dl.cmd_buf.iter().filter(|c| c.elem_count > 0).collect();
        assert_eq!(drawn.len(), 2);
        assert_eq!(drawn[1].vtx_offset, 4);
        assert_eq!(drawn[1].idx_offset, 6);
        assert_eq!(&dl.idx_buf[6..], &[0, 1, 2, 0, 2, 3]);
        assert_eq!(drawn[1].clip_rect.max, Vec2::splat(5.0));
    }

    #[test]
    fn nested_clips_intersect() {
        let mut dl = DrawList::default();
        dl.push_clip_rect(Rect::new(Vec2::ZERO, Vec2::splat(10.0)));
        dl.push_clip_rect(Rect::new(Vec2::splat(5.0), Vec2::splat(20.0)));
        assert_eq!(dl.clip_rect(), Some(Rect::new(Vec2::splat(5.0), Vec2::splat(10.0))));
    }

    #[test]
    fn large_lists_never_overflow_sixteen_bit_indices() {
        let mut dl = DrawList::default();
        for _ in 0..20_000 {
            dl.filled_rect(unit(), 0.0, Color::WHITE);
        }
        assert!(dl.cmd_buf.len() >= 2);
        for cmd in &dl.cmd_buf {
            let start = cmd.idx_offset as usize;
            let end   = start + cmd.elem_count as usize;
            for &i in &dl.idx_buf[start..end] {
                assert!((cmd.vtx_offset as usize + i as usize) < dl.vtx_buf.len());
            }
        }
    }

    #[test]
    fn global_alpha_scales_vertex_colours() {
        let mut dl = DrawList::default();
        dl.set_alpha(0.5);
        dl.filled_rect(unit(), 0.0, Color::WHITE);
        let a = dl.vtx_buf[0].col >> 24;
        assert!((126..=128).contains(&a), "alpha byte was {a}");
    }

    #[test]
    fn append_rebases_offsets() {
        let mut main  = DrawList::default();
        let mut popup = DrawList::default();
        main.filled_rect(unit(), 0.0, Color::WHITE);
        popup.filled_rect(unit(), 0.0, Color::BLACK);
        main.append(&mut popup);

        assert!(popup.is_empty());
        let last = main.cmd_buf.last().cloned().unwrap_or_else(|| panic!("no command"));
        assert_eq!(last.vtx_offset, 4);
        assert_eq!(last.idx_offset, 6);
        assert_eq!(main.vtx_buf.len(), 8);
    }

    #[test]
    fn rounded_rect_with_left_corners_only() {
        let mut dl = DrawList::default();
        dl.filled_rect_corners(Rect::new(Vec2::ZERO, Vec2::new(100.0, 50.0)), 8.0, Corners::LEFT, Color::WHITE);
        let max_x = dl.vtx_buf.iter().map(|v| v.pos[0]).fold(f32::MIN, f32::max);
        assert_eq!(max_x, 100.0);
        assert!(dl.vtx_buf.iter().any(|v| v.pos == [100.0, 0.0]), "right corners stay square");
    }
}
