//! Colors as they appear in a character identity

use image::Rgba;

/// 8-bit RGBA color. Integral channels keep it `Eq + Hash` so it can be part
/// of a cache key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TextColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Default for TextColor {
    fn default() -> Self {
        crate::constants::DEFAULT_FG
    }
}

impl std::fmt::Display for TextColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}

impl TextColor {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Fully transparent black
    pub const fn transparent() -> Self {
        Self { r: 0, g: 0, b: 0, a: 0 }
    }

    pub fn is_transparent(&self) -> bool {
        self.a == 0
    }

    /// Look up one of the 16 ANSI colors; indices past 15 wrap.
    pub fn ansi(index: u8) -> Self {
        ANSI_PALETTE[(index % 16) as usize]
    }

    pub fn to_rgba(self) -> Rgba<u8> {
        Rgba([self.r, self.g, self.b, self.a])
    }
}

impl From<Rgba<u8>> for TextColor {
    fn from(px: Rgba<u8>) -> Self {
        let [r, g, b, a] = px.0;
        Self { r, g, b, a }
    }
}

impl From<TextColor> for Rgba<u8> {
    fn from(color: TextColor) -> Self {
        color.to_rgba()
    }
}

// 16-color ANSI palette
pub const ANSI_PALETTE: [TextColor; 16] = [
    // Basic 8 colors
    TextColor::rgb(0, 0, 0),       // Black
    TextColor::rgb(204, 0, 0),     // Red
    TextColor::rgb(0, 204, 0),     // Green
    TextColor::rgb(204, 204, 0),   // Yellow
    TextColor::rgb(0, 0, 204),     // Blue
    TextColor::rgb(204, 0, 204),   // Magenta
    TextColor::rgb(0, 204, 204),   // Cyan
    TextColor::rgb(204, 204, 204), // White
    // Bright colors
    TextColor::rgb(102, 102, 102), // Bright Black (Gray)
    TextColor::rgb(255, 0, 0),     // Bright Red
    TextColor::rgb(0, 255, 0),     // Bright Green
    TextColor::rgb(255, 255, 0),   // Bright Yellow
    TextColor::rgb(0, 0, 255),     // Bright Blue
    TextColor::rgb(255, 0, 255),   // Bright Magenta
    TextColor::rgb(0, 255, 255),   // Bright Cyan
    TextColor::rgb(255, 255, 255), // Bright White
];
