//! Color representation and conversion to 8-bit channels

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color(pub f32, pub f32, pub f32, pub f32);

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self(r, g, b, 1.0)
    }

    pub const fn from_rgba_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    pub const fn from_rgb_u8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba_u8(r, g, b, 255)
    }

    /// Parses `#rrggbb` or `#rrggbbaa` (the leading `#` is optional).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        let channel = |index: usize| {
            digits
                .get(index * 2..index * 2 + 2)
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
        };
        match digits.len() {
            6 => Some(Self::from_rgb_u8(channel(0)?, channel(1)?, channel(2)?)),
            8 => Some(Self::from_rgba_u8(
                channel(0)?,
                channel(1)?,
                channel(2)?,
                channel(3)?,
            )),
            _ => None,
        }
    }

    pub fn with_alpha(&self, alpha: f32) -> Self {
        Self(self.0, self.1, self.2, alpha)
    }

    /// Channels clamped to `0.0..=1.0`.
    pub fn to_array(&self) -> [f32; 4] {
        [
            self.0.clamp(0.0, 1.0),
            self.1.clamp(0.0, 1.0),
            self.2.clamp(0.0, 1.0),
            self.3.clamp(0.0, 1.0),
        ]
    }

    pub fn to_rgba8(&self) -> [u8; 4] {
        self.to_array().map(|channel| (channel * 255.0).round() as u8)
    }

    pub fn lerp(self, other: Color, t: f32) -> Color {
        let lerp = |start: f32, end: f32| start + (end - start) * t;
        Color(
            lerp(self.0, other.0),
            lerp(self.1, other.1),
            lerp(self.2, other.2),
            lerp(self.3, other.3),
        )
    }

    // Common color constants
    pub const BLACK: Color = Color(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Color = Color(1.0, 1.0, 1.0, 1.0);
    pub const RED: Color = Color(1.0, 0.0, 0.0, 1.0);
    pub const GREEN: Color = Color(0.0, 1.0, 0.0, 1.0);
    pub const BLUE: Color = Color(0.0, 0.0, 1.0, 1.0);
    pub const TRANSPARENT: Color = Color(0.0, 0.0, 0.0, 0.0);
}

#[cfg(test)]
mod tests {
    use super::Color;

    #[test]
    fn parses_hex_with_and_without_alpha() {
        assert_eq!(Color::from_hex("#ff0000"), Some(Color::RED));
        assert_eq!(
            Color::from_hex("00000080").map(|c| c.to_rgba8()),
            Some([0, 0, 0, 128])
        );
        assert_eq!(Color::from_hex("#fff"), None);
        assert_eq!(Color::from_hex("#zz0000"), None);
    }

    #[test]
    fn rgba8_clamps_out_of_range_channels() {
        assert_eq!(Color(1.5, -0.2, 0.5, 1.0).to_rgba8(), [255, 0, 128, 255]);
    }
}
