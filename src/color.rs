//! RGB colors and the hue/saturation/brightness conversion used for ring palettes

use serde::{Deserialize, Serialize};

/// Opaque 24-bit color. There is no alpha: every write replaces the pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const MAGENTA: Color = Color::rgb(255, 0, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// HSB (a.k.a. HSV) to RGB conversion
    /// hue: any real, only the fractional part is used; saturation, brightness: 0-1
    ///
    /// Single-precision throughout with round-half-up per channel, so the
    /// results match the AWT `Color.HSBtoRGB` values bit for bit.
    pub fn from_hsb(hue: f32, saturation: f32, brightness: f32) -> Self {
        if saturation == 0.0 {
            let v = channel(brightness);
            return Self::rgb(v, v, v);
        }

        let h = (hue - hue.floor()) * 6.0;
        let f = h - h.floor();
        let p = brightness * (1.0 - saturation);
        let q = brightness * (1.0 - saturation * f);
        let t = brightness * (1.0 - (saturation * (1.0 - f)));

        let (r, g, b) = match h as i32 {
            0 => (brightness, t, p),
            1 => (q, brightness, p),
            2 => (p, brightness, t),
            3 => (p, q, brightness),
            4 => (t, p, brightness),
            _ => (brightness, p, q),
        };

        Self::rgb(channel(r), channel(g), channel(b))
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::rgb(r, g, b)
    }
}

impl From<Color> for (u8, u8, u8) {
    fn from(c: Color) -> Self {
        (c.r, c.g, c.b)
    }
}

#[inline]
fn channel(v: f32) -> u8 {
    (v * 255.0 + 0.5) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hsb_ring_palette_matches_awt() {
        let expected = [
            (204, 41, 41),
            (204, 139, 41),
            (171, 204, 41),
            (73, 204, 41),
            (41, 204, 106),
            (41, 204, 204),
            (41, 106, 204),
            (73, 41, 204),
            (171, 41, 204),
            (204, 41, 139),
        ];
        for (i, want) in expected.iter().enumerate() {
            let got = Color::from_hsb(i as f32 / 10.0, 0.8, 0.8);
            assert_eq!(<(u8, u8, u8)>::from(got), *want, "ring {}", i);
        }
    }

    #[test]
    fn test_hsb_zero_saturation_is_gray() {
        assert_eq!(Color::from_hsb(0.3, 0.0, 1.0), Color::WHITE);
        assert_eq!(Color::from_hsb(0.7, 0.0, 0.0), Color::BLACK);
        assert_eq!(Color::from_hsb(0.0, 0.0, 0.5), Color::rgb(128, 128, 128));
    }

    #[test]
    fn test_hsb_hue_wraps() {
        assert_eq!(Color::from_hsb(1.25, 1.0, 1.0), Color::from_hsb(0.25, 1.0, 1.0));
        assert_eq!(Color::from_hsb(0.0, 1.0, 1.0), Color::RED);
    }
}
