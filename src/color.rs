use serde::{Deserialize, Serialize};

/// 8-bit RGB pixel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::gray(0);
    pub const WHITE: Color = Color::gray(255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Same intensity on all three channels.
    pub const fn gray(illum: u8) -> Self {
        Self::new(illum, illum, illum)
    }

    pub fn is_gray(&self) -> bool {
        self.r == self.g && self.g == self.b
    }

    /// Rec.601 luma, rounded.
    pub fn luma(&self) -> u8 {
        let y = 299 * self.r as u32 + 587 * self.g as u32 + 114 * self.b as u32;
        ((y + 500) / 1000) as u8
    }
}

impl From<u8> for Color {
    fn from(illum: u8) -> Self {
        Color::gray(illum)
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Color::new(r, g, b)
    }
}

impl From<Color> for [u8; 3] {
    fn from(c: Color) -> Self {
        [c.r, c.g, c.b]
    }
}

impl From<image::Rgb<u8>> for Color {
    fn from(px: image::Rgb<u8>) -> Self {
        Color::from(px.0)
    }
}

impl From<Color> for image::Rgb<u8> {
    fn from(c: Color) -> Self {
        image::Rgb(c.into())
    }
}
