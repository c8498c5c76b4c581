//! Linear RGB colors and their packed 32-bit representations.
//!
//! All lighting math runs on [`Color`] (one `f32` per channel, nominally in
//! `[0, 1]` but allowed to exceed it until clamped). Pixel buffers store
//! packed `u32` values whose channel order is given by a [`ColorFormat`].

use std::ops::{Add, AddAssign, Mul};

/// Channel order of a packed 32-bit pixel, most significant byte first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorFormat {
    #[default]
    Argb8888,
    Rgba8888,
    Abgr8888,
    Bgra8888,
}

impl ColorFormat {
    /// Bit shifts of the (r, g, b, a) channels.
    const fn shifts(self) -> (u32, u32, u32, u32) {
        match self {
            ColorFormat::Argb8888 => (16, 8, 0, 24),
            ColorFormat::Rgba8888 => (24, 16, 8, 0),
            ColorFormat::Abgr8888 => (0, 8, 16, 24),
            ColorFormat::Bgra8888 => (8, 16, 24, 0),
        }
    }
}

/// Linear RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);
    pub const RED: Color = Color::new(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::new(0.0, 1.0, 0.0);
    pub const BLUE: Color = Color::new(0.0, 0.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    pub const fn gray(v: f32) -> Self {
        Self::new(v, v, v)
    }

    /// Creates a color from 8-bit channels.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    /// Component-wise product, used to filter light through a surface color.
    pub fn modulate(self, other: Color) -> Self {
        Self::new(self.r * other.r, self.g * other.g, self.b * other.b)
    }

    pub fn scale(self, s: f32) -> Self {
        Self::new(self.r * s, self.g * s, self.b * s)
    }

    /// Clamps every channel to `[0, 1]`.
    pub fn clamp(self) -> Self {
        Self::new(
            self.r.clamp(0.0, 1.0),
            self.g.clamp(0.0, 1.0),
            self.b.clamp(0.0, 1.0),
        )
    }

    pub fn lerp(self, other: Color, t: f32) -> Self {
        Self::new(
            self.r + (other.r - self.r) * t,
            self.g + (other.g - self.g) * t,
            self.b + (other.b - self.b) * t,
        )
    }

    /// Weighted sum of three colors, e.g. with barycentric weights.
    pub fn blend3(colors: &[Color; 3], weights: [f32; 3]) -> Self {
        colors[0].scale(weights[0]) + colors[1].scale(weights[1]) + colors[2].scale(weights[2])
    }

    /// Packs into a 32-bit pixel. Channels are clamped, alpha is opaque.
    pub fn pack(self, format: ColorFormat) -> u32 {
        let (rs, gs, bs, a_s) = format.shifts();
        let c = self.clamp();
        let to_u8 = |v: f32| (v * 255.0).round() as u32;
        (to_u8(c.r) << rs) | (to_u8(c.g) << gs) | (to_u8(c.b) << bs) | (0xFF << a_s)
    }

    /// Unpacks a 32-bit pixel, ignoring alpha.
    pub fn unpack(pixel: u32, format: ColorFormat) -> Self {
        let (rs, gs, bs, _) = format.shifts();
        let channel = |shift: u32| ((pixel >> shift) & 0xFF) as u8;
        Self::from_rgb8(channel(rs), channel(gs), channel(bs))
    }
}

impl Add for Color {
    type Output = Color;

    fn add(self, rhs: Color) -> Color {
        Color::new(self.r + rhs.r, self.g + rhs.g, self.b + rhs.b)
    }
}

impl AddAssign for Color {
    fn add_assign(&mut self, rhs: Color) {
        *self = *self + rhs;
    }
}

impl Mul for Color {
    type Output = Color;

    fn mul(self, rhs: Color) -> Color {
        self.modulate(rhs)
    }
}

impl Mul<f32> for Color {
    type Output = Color;

    fn mul(self, rhs: f32) -> Color {
        self.scale(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_respects_channel_order() {
        let c = Color::from_rgb8(0x11, 0x22, 0x33);
        assert_eq!(c.pack(ColorFormat::Argb8888), 0xFF112233);
        assert_eq!(c.pack(ColorFormat::Rgba8888), 0x112233FF);
        assert_eq!(c.pack(ColorFormat::Abgr8888), 0xFF332211);
        assert_eq!(c.pack(ColorFormat::Bgra8888), 0x332211FF);
    }

    #[test]
    fn unpack_inverts_pack() {
        let c = Color::from_rgb8(200, 10, 99);
        for format in [
            ColorFormat::Argb8888,
            ColorFormat::Rgba8888,
            ColorFormat::Abgr8888,
            ColorFormat::Bgra8888,
        ] {
            assert_eq!(Color::unpack(c.pack(format), format), c);
        }
    }

    #[test]
    fn pack_clamps_out_of_range() {
        let c = Color::new(2.0, -1.0, 0.5);
        assert_eq!(c.pack(ColorFormat::Argb8888), 0xFFFF0080);
    }

    #[test]
    fn modulate_is_component_wise() {
        let c = Color::new(0.5, 1.0, 0.25).modulate(Color::new(0.5, 0.2, 4.0));
        assert_eq!(c, Color::new(0.25, 0.2, 1.0));
    }
}
