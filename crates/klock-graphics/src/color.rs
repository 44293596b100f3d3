/// Straight (non-premultiplied) RGBA color with components in `0.0..=1.0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color(pub f32, pub f32, pub f32, pub f32);

impl Color {
    pub const BLACK: Color = Color(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Color = Color(1.0, 1.0, 1.0, 1.0);

    /// Builds a color from a packed `0xAARRGGBB` value.
    pub const fn from_argb(argb: u32) -> Self {
        let a = ((argb >> 24) & 0xff) as f32 / 255.0;
        let r = ((argb >> 16) & 0xff) as f32 / 255.0;
        let g = ((argb >> 8) & 0xff) as f32 / 255.0;
        let b = (argb & 0xff) as f32 / 255.0;
        Color(r, g, b, a)
    }

    /// Components clamped into the displayable range.
    pub fn to_rgba(self) -> [f32; 4] {
        [
            self.0.clamp(0.0, 1.0),
            self.1.clamp(0.0, 1.0),
            self.2.clamp(0.0, 1.0),
            self.3.clamp(0.0, 1.0),
        ]
    }

    /// Quantizes to 8-bit RGBA.
    pub fn to_rgba8(self) -> [u8; 4] {
        let rgba = self.to_rgba();
        [
            (rgba[0] * 255.0).round() as u8,
            (rgba[1] * 255.0).round() as u8,
            (rgba[2] * 255.0).round() as u8,
            (rgba[3] * 255.0).round() as u8,
        ]
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}
