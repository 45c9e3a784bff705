//! Screen-space vectors, rectangles and colours.

use std::ops::{Add, AddAssign, Div, Mul, Sub};

/// Point or extent in pixels, y pointing down.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self::splat(0.0);
    pub const ONE:  Self = Self::splat(1.0);

    #[inline] pub const fn new(x: f32, y: f32) -> Self { Self { x, y } }
    #[inline] pub const fn splat(v: f32) -> Self { Self { x: v, y: v } }

    #[inline] pub fn length(self) -> f32 { self.x.hypot(self.y) }

    /// Component-wise minimum.
    #[inline] pub fn min(self, o: Self) -> Self { Self::new(self.x.min(o.x), self.y.min(o.y)) }
    /// Component-wise maximum.
    #[inline] pub fn max(self, o: Self) -> Self { Self::new(self.x.max(o.x), self.y.max(o.y)) }
}

impl Add for Vec2 {
    type Output = Self;
    #[inline] fn add(self, o: Self) -> Self { Self::new(self.x + o.x, self.y + o.y) }
}

impl AddAssign for Vec2 {
    #[inline] fn add_assign(&mut self, o: Self) { *self = *self + o; }
}

impl Sub for Vec2 {
    type Output = Self;
    #[inline] fn sub(self, o: Self) -> Self { Self::new(self.x - o.x, self.y - o.y) }
}

impl Mul<f32> for Vec2 {
    type Output = Self;
    #[inline] fn mul(self, k: f32) -> Self { Self::new(self.x * k, self.y * k) }
}

impl Div<f32> for Vec2 {
    type Output = Self;
    #[inline] fn div(self, k: f32) -> Self { Self::new(self.x / k, self.y / k) }
}

impl Div for Vec2 {
    type Output = Self;
    #[inline] fn div(self, o: Self) -> Self { Self::new(self.x / o.x, self.y / o.y) }
}

impl From<(f32, f32)> for Vec2 {
    #[inline] fn from((x, y): (f32, f32)) -> Self { Self::new(x, y) }
}

impl From<[f32; 2]> for Vec2 {
    #[inline] fn from([x, y]: [f32; 2]) -> Self { Self::new(x, y) }
}

impl From<Vec2> for [f32; 2] {
    #[inline] fn from(v: Vec2) -> Self { [v.x, v.y] }
}

// ─── Rect ────────────────────────────────────────────────────────────────────

/// Half-open pixel rectangle: `min` inside, `max` outside.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub const ZERO: Self = Self { min: Vec2::ZERO, max: Vec2::ZERO };

    #[inline] pub fn new(min: Vec2, max: Vec2) -> Self { Self { min, max } }
    #[inline] pub fn from_min_size(min: Vec2, size: Vec2) -> Self { Self { min, max: min + size } }

    #[inline] pub fn width(self)  -> f32  { self.max.x - self.min.x }
    #[inline] pub fn height(self) -> f32  { self.max.y - self.min.y }
    #[inline] pub fn size(self)   -> Vec2 { self.max - self.min }
    #[inline] pub fn center(self) -> Vec2 { (self.min + self.max) * 0.5 }

    /// True when the rectangle covers no pixel.
    #[inline] pub fn is_empty(self) -> bool { self.width() <= 0.0 || self.height() <= 0.0 }

    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        (self.min.x..self.max.x).contains(&p.x) && (self.min.y..self.max.y).contains(&p.y)
    }

    #[inline] pub fn translate(self, by: Vec2) -> Self { Self::new(self.min + by, self.max + by) }

    /// Overlap of both rectangles; empty when they are disjoint.
    #[inline] pub fn intersect(self, o: Self) -> Self { Self::new(self.min.max(o.min), self.max.min(o.max)) }
}

// ─── Color ───────────────────────────────────────────────────────────────────

/// Straight-alpha RGBA, each channel in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE:       Self = Self::new(1.0, 1.0, 1.0, 1.0);
    pub const BLACK:       Self = Self::new(0.0, 0.0, 0.0, 1.0);
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    #[inline] pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self { Self { r, g, b, a } }
    #[inline] pub const fn rgb(r: f32, g: f32, b: f32) -> Self { Self::new(r, g, b, 1.0) }
    #[inline] pub fn with_alpha(self, a: f32) -> Self { Self { a, ..self } }

    /// 8-bit channels with a float alpha, the way the palette is written down.
    #[inline]
    pub fn from_rgb8(r: u8, g: u8, b: u8, a: f32) -> Self {
        let c = |v: u8| f32::from(v) / 255.0;
        Self::new(c(r), c(g), c(b), a)
    }

    /// Packed `0xAABBGGRR`, the vertex colour layout.
    pub fn to_rgba_u32(self) -> u32 {
        let q = |v: f32| (v.clamp(0.0, 1.0) * 255.0) as u32;
        q(self.r) | q(self.g) << 8 | q(self.b) << 16 | q(self.a) << 24
    }

    pub fn from_rgba_u32(c: u32) -> Self {
        let ch = |shift: u32| ((c >> shift) & 0xFF) as f32 / 255.0;
        Self::new(ch(0), ch(8), ch(16), ch(24))
    }

    #[inline]
    pub fn lerp(self, to: Self, t: f32) -> Self {
        let m = |a: f32, b: f32| a + (b - a) * t;
        Self::new(m(self.r, to.r), m(self.g, to.g), m(self.b, to.b), m(self.a, to.a))
    }

    /// Hue, saturation and value, each in `0.0..=1.0`.
    pub fn to_hsv(self) -> (f32, f32, f32) {
        let max = self.r.max(self.g).max(self.b);
        let min = self.r.min(self.g).min(self.b);
        let chroma = max - min;
        let sat = if max > 0.0 { chroma / max } else { 0.0 };
        if chroma <= 0.0 {
            return (0.0, sat, max);
        }
        let sector = if max == self.r {
            (self.g - self.b) / chroma
        } else if max == self.g {
            (self.b - self.r) / chroma + 2.0
        } else {
            (self.r - self.g) / chroma + 4.0
        };
        ((sector / 6.0).rem_euclid(1.0), sat, max)
    }

    pub fn from_hsv(h: f32, s: f32, v: f32) -> Self {
        if s <= 0.0 {
            return Self::rgb(v, v, v);
        }
        let h6 = h.rem_euclid(1.0) * 6.0;
        let f = h6.fract();
        let (p, q, t) = (v * (1.0 - s), v * (1.0 - s * f), v * (1.0 - s * (1.0 - f)));
        match h6 as u32 {
            0 => Self::rgb(v, t, p),
            1 => Self::rgb(q, v, p),
            2 => Self::rgb(p, v, t),
            3 => Self::rgb(p, q, v),
            4 => Self::rgb(t, p, v),
            _ => Self::rgb(v, p, q),
        }
    }

    /// Read an RGB or RGBA slice; a missing alpha is opaque.
    pub fn from_slice(c: &[f32]) -> Self {
        let at = |i: usize, or: f32| c.get(i).copied().unwrap_or(or);
        Self::new(at(0, 0.0), at(1, 0.0), at(2, 0.0), at(3, 1.0))
    }

    /// Store into an RGB or RGBA slice, leaving extra channels out.
    pub fn write_slice(self, out: &mut [f32]) {
        out.iter_mut().zip([self.r, self.g, self.b, self.a]).for_each(|(d, s)| *d = s);
    }
}

impl From<[f32; 4]> for Color {
    #[inline] fn from([r, g, b, a]: [f32; 4]) -> Self { Self::new(r, g, b, a) }
}

impl From<[f32; 3]> for Color {
    #[inline] fn from([r, g, b]: [f32; 3]) -> Self { Self::rgb(r, g, b) }
}

impl From<Color> for [f32; 4] {
    #[inline] fn from(c: Color) -> Self { [c.r, c.g, c.b, c.a] }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packing_puts_red_in_the_low_byte() {
        let c = Color::from_rgb8(112, 109, 214, 1.0);
        let packed = c.to_rgba_u32();
        assert_eq!(packed, 0xFF_D6_6D_70);
        assert_eq!(Color::from_rgba_u32(packed).to_rgba_u32(), packed);
    }

    #[test]
    fn slices_keep_their_channel_count() {
        let mut rgb = [0.0f32; 3];
        Color::new(0.25, 0.5, 0.75, 0.1).write_slice(&mut rgb);
        assert_eq!(rgb, [0.25, 0.5, 0.75]);
        assert_eq!(Color::from_slice(&rgb).a, 1.0);
    }

    #[test]
    fn hsv_of_primaries() {
        let (h, s, v) = Color::rgb(0.0, 1.0, 0.0).to_hsv();
        assert!((h - 1.0 / 3.0).abs() < 1e-5 && s == 1.0 && v == 1.0);
        let back = Color::from_hsv(h, s, v);
        assert!((back.g - 1.0).abs() < 1e-5 && back.r.abs() < 1e-5);
        assert_eq!(Color::rgb(1.0, 0.0, 0.0).to_hsv().0, 0.0);
    }

    #[test]
    fn rects_are_half_open() {
        let a = Rect::new(Vec2::ZERO, Vec2::splat(10.0));
        let b = Rect::new(Vec2::splat(5.0), Vec2::splat(20.0));
        let i = a.intersect(b);
        assert_eq!(i.min, Vec2::splat(5.0));
        assert!(i.contains(Vec2::splat(9.0)));
        assert!(!i.contains(Vec2::splat(10.0)));
        assert!(a.intersect(Rect::new(Vec2::splat(30.0), Vec2::splat(40.0))).is_empty());
    }
}
