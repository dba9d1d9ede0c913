// src/config.rs
use crate::color::TextColor;
use crate::constants::{DEFAULT_BG, DEFAULT_CELL_HEIGHT, DEFAULT_CELL_WIDTH, DEFAULT_FG};
use crate::error::{GlyphError, GlyphResult};

#[derive(Clone, Debug, PartialEq)]
pub struct FontConfig {
    /// Glyph cell width in pixels
    pub cell_width: u32,
    /// Glyph cell height in pixels
    pub cell_height: u32,
    pub default_fg: TextColor,
    pub default_bg: TextColor,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            cell_width: DEFAULT_CELL_WIDTH,
            cell_height: DEFAULT_CELL_HEIGHT,
            default_fg: DEFAULT_FG,
            default_bg: DEFAULT_BG,
        }
    }
}

impl FontConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cell_size(mut self, width: u32, height: u32) -> Self {
        self.cell_width = width;
        self.cell_height = height;
        self
    }

    pub fn with_foreground_color(mut self, color: TextColor) -> Self {
        self.default_fg = color;
        self
    }

    pub fn with_background_color(mut self, color: TextColor) -> Self {
        self.default_bg = color;
        self
    }

    pub fn with_colors(mut self, fg: TextColor, bg: TextColor) -> Self {
        self.default_fg = fg;
        self.default_bg = bg;
        self
    }

    pub fn validate(&self) -> GlyphResult<()> {
        if self.cell_width == 0 {
            return Err(GlyphError::ConfigurationError {
                field: "cell_width".to_string(),
                value: self.cell_width.to_string(),
            });
        }
        if self.cell_height == 0 {
            return Err(GlyphError::ConfigurationError {
                field: "cell_height".to_string(),
                value: self.cell_height.to_string(),
            });
        }
        Ok(())
    }
}
