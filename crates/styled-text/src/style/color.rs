//! Color handles.

/// An sRGB color with alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const GRAY: Color = Color::rgb(128, 128, 128);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const CLEAR: Color = Color::rgba(0, 0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parses `#rrggbb` or `#rrggbbaa`.
    ///
    /// ```rust
    /// use styled_text::Color;
    ///
    /// assert_eq!(Color::from_hex("#ff8000"), Some(Color::rgb(255, 128, 0)));
    /// assert_eq!(Color::from_hex("orange"), None);
    /// ```
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#')?;
        if !digits.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(digits.get(i..i + 2)?, 16).ok();
        match digits.len() {
            6 => Some(Self::rgb(channel(0)?, channel(2)?, channel(4)?)),
            8 => Some(Self::rgba(channel(0)?, channel(2)?, channel(4)?, channel(6)?)),
            _ => None,
        }
    }

    /// Nearest color in the terminal's 256-color palette.
    ///
    /// Translucent colors are blended over black first. A fully transparent
    /// color returns `None` so the terminal's own color shows through.
    pub fn to_console(self) -> Option<console::Color> {
        if self.a == 0 {
            return None;
        }
        let blend = |channel: u8| (channel as u16 * self.a as u16 / 255) as u8;
        let index = palette_index(blend(self.r), blend(self.g), blend(self.b));
        Some(console::Color::Color256(index))
    }
}

/// Neutral colors use the 24-step gray ramp (`8 + 10 * i`); the rest use
/// the 6x6x6 cube. Both round to the nearest level.
fn palette_index(r: u8, g: u8, b: u8) -> u8 {
    if r == g && g == b {
        return match r {
            0..=3 => 16,
            247..=255 => 231,
            gray => 232 + ((gray as u16 - 3) / 10).min(23) as u8,
        };
    }
    let level = |channel: u8| ((channel as u16 * 5 + 127) / 255) as u8;
    16 + 36 * level(r) + 6 * level(g) + level(b)
}
