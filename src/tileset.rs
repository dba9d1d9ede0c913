//! Code Page 437 tilesets: the 16x16 glyph grid used by most roguelike sheets

use std::path::Path;
use std::sync::Arc;

use glyph_core::{
    CharacterMetadata, ColorizingTransformer, FontConfig, MetadataRegistry,
    RegionCache, SpriteFont, SpriteSheet, TextColor, TransformerChain,
};
use image::RgbaImage;

use crate::error::{TilesetError, TilesetResult};

/// Cells per row and per column
pub const CP437_GRID: u32 = 16;

/// CP437 in sheet order, one row of the sheet per line. Control codes use
/// their graphical forms; 0x00 stays NUL so it does not collide with space.
const CP437_ROWS: [&str; 16] = [
    "\0☺☻♥♦♣♠•◘○◙♂♀♪♫☼",
    "►◄↕‼¶§▬↨↑↓→←∟↔▲▼",
    " !\"#$%&'()*+,-./",
    "0123456789:;<=>?",
    "@ABCDEFGHIJKLMNO",
    "PQRSTUVWXYZ[\\]^_",
    "`abcdefghijklmno",
    "pqrstuvwxyz{|}~⌂",
    "ÇüéâäàåçêëèïîìÄÅ",
    "ÉæÆôöòûùÿÖÜ¢£¥₧ƒ",
    "áíóúñÑªº¿⌐¬½¼¡«»",
    "░▒▓│┤╡╢╖╕╣║╗╝╜╛┐",
    "└┴┬├─┼╞╟╚╔╩╦╠═╬╧",
    "╨╤╥╙╘╒╓╫╪┘┌█▄▌▐▀",
    "αßΓπΣσµτΦΘΩδ∞φε∩",
    "≡±≥≤⌠⌡÷≈°∙·√ⁿ²■\u{a0}",
];

/// Untagged metadata for all 256 CP437 glyphs
pub fn cp437_registry() -> MetadataRegistry {
    CP437_ROWS
        .iter()
        .enumerate()
        .flat_map(|(row, line)| {
            line.chars()
                .enumerate()
                .map(move |(column, ch)| (ch, CharacterMetadata::new(column as u32, row as u32)))
        })
        .collect()
}

/// Builds [`SpriteFont`]s from CP437 sheets. The cell size is derived from the
/// sheet; glyphs are colorized with each character's colors. Every font built
/// gets a fresh [`RegionCache`] of its own.
#[derive(Clone, Debug, Default)]
pub struct Cp437Tileset {
    config: FontConfig,
}

impl Cp437Tileset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_colors(mut self, fg: TextColor, bg: TextColor) -> Self {
        self.config = self.config.with_colors(fg, bg);
        self
    }

    pub fn build(&self, sheet: SpriteSheet) -> TilesetResult<SpriteFont> {
        let (width, height) = (sheet.width(), sheet.height());
        if width == 0 || height == 0 || width % CP437_GRID != 0 || height % CP437_GRID != 0 {
            return Err(TilesetError::UnevenSheet {
                width,
                height,
                grid: CP437_GRID,
            });
        }

        let config = self
            .config
            .clone()
            .with_cell_size(width / CP437_GRID, height / CP437_GRID);
        let chain = TransformerChain::new().with(ColorizingTransformer::new());

        Ok(SpriteFont::new(
            sheet,
            cp437_registry(),
            config,
            chain,
            Arc::new(RegionCache::new()),
        )?)
    }

    pub fn from_image(&self, image: RgbaImage) -> TilesetResult<SpriteFont> {
        self.build(SpriteSheet::from_image(image))
    }

    pub fn from_bytes(&self, bytes: &[u8]) -> TilesetResult<SpriteFont> {
        self.build(SpriteSheet::from_bytes(bytes)?)
    }

    pub fn open(&self, path: impl AsRef<Path>) -> TilesetResult<SpriteFont> {
        self.build(SpriteSheet::open(path)?)
    }
}
