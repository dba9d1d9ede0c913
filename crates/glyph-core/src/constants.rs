// src/constants.rs
use crate::color::TextColor;

// Cell constants
pub const DEFAULT_CELL_WIDTH: u32 = 8;
pub const DEFAULT_CELL_HEIGHT: u32 = 16;

// Color constants
pub const DEFAULT_FG: TextColor = TextColor { r: 255, g: 255, b: 255, a: 255 };
pub const DEFAULT_BG: TextColor = TextColor { r: 0, g: 0, b: 0, a: 255 };

/// Character used by [`TextCharacter::default`](crate::TextCharacter)
pub const DEFAULT_CHAR: char = ' ';

// Decoration constants
/// Alpha at or above which a sheet pixel counts as part of the glyph
pub const GLYPH_ALPHA_THRESHOLD: u8 = 128;
/// Thickness of underline / strike-through strokes, per 16 pixels of cell height
pub const LINE_THICKNESS_PER_16PX: u32 = 1;
