// src/error.rs
use glyph_core::GlyphError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TilesetError {
    #[error("Tileset sheet {width}x{height} is not divisible into a {grid}x{grid} grid")]
    UnevenSheet { width: u32, height: u32, grid: u32 },

    #[error(transparent)]
    Glyph(#[from] GlyphError),
}

pub type TilesetResult<T> = Result<T, TilesetError>;
