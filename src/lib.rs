//! Glyphsheet - sprite-sheet fonts for character-grid displays
//!
//! This crate re-exports the glyph pipeline from `glyph-core` and adds
//! ready-made loaders for common tileset layouts:
//! - Code Page 437 16x16 sheets

pub mod error;
pub mod tileset;

// Re-export main types for convenience
pub use error::{TilesetError, TilesetResult};
pub use glyph_core::*;
pub use tileset::{cp437_registry, Cp437Tileset, CP437_GRID};
