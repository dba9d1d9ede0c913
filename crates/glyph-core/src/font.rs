//! Sprite-sheet backed font: metadata lookup, cached cropping and decoration

use std::sync::Arc;

use crate::cache::RegionCache;
use crate::character::TextCharacter;
use crate::config::FontConfig;
use crate::error::{GlyphError, GlyphResult};
use crate::metadata::{CharacterMetadata, MetadataRegistry};
use crate::sheet::{GlyphRegion, SpriteSheet};
use crate::transform::{transformer_for, TransformerChain};

/// What the rendering layer needs from a font
pub trait Font {
    /// Cell width in pixels
    fn width(&self) -> u32;

    /// Cell height in pixels
    fn height(&self) -> u32;

    fn has_data_for_char(&self, character: char) -> bool;

    /// Every metadata record for `character`; empty if there are none
    fn fetch_metadata_for_char(&self, character: char) -> &[CharacterMetadata];

    /// The fully decorated region to draw for `character`
    ///
    /// `tags` only pick the metadata record on a cache miss; they are not part
    /// of the cache key. Once an identity is cached, later fetches return that
    /// region whatever tags they pass. Give tag variants distinct identities
    /// (e.g. different fonts) when both must be drawn.
    fn fetch_region_for_char(&self, character: &TextCharacter, tags: &[&str]) -> GlyphResult<GlyphRegion>;
}

/// Font whose glyphs are cells of a [`SpriteSheet`]
///
/// Everything except the cache is immutable after construction, and the cache
/// synchronizes internally, so a `SpriteFont` can be shared freely.
#[derive(Debug)]
pub struct SpriteFont {
    sheet: SpriteSheet,
    metadata: MetadataRegistry,
    config: FontConfig,
    chain: TransformerChain,
    cache: Arc<RegionCache>,
}

impl SpriteFont {
    /// Build a font, checking the configuration and that every metadata record
    /// points at a cell that lies inside the sheet. The font claims `cache`
    /// until it is dropped; a cache already held by another font is rejected.
    pub fn new(
        sheet: SpriteSheet,
        metadata: MetadataRegistry,
        config: FontConfig,
        chain: TransformerChain,
        cache: Arc<RegionCache>,
    ) -> GlyphResult<Self> {
        config.validate()?;

        if let Some((column, row)) = metadata.max_cell() {
            let (width, height) = (config.cell_width, config.cell_height);
            let fits = column
                .checked_mul(width)
                .zip(row.checked_mul(height))
                .is_some_and(|(x, y)| sheet.contains_region(x, y, width, height));
            if !fits {
                return Err(GlyphError::ConfigurationError {
                    field: "metadata".to_string(),
                    value: format!(
                        "cell ({}, {}) outside {}x{} sheet",
                        column,
                        row,
                        sheet.width(),
                        sheet.height()
                    ),
                });
            }
        }

        if !cache.claim() {
            return Err(GlyphError::ConfigurationError {
                field: "cache".to_string(),
                value: "region cache already owned by another font".to_string(),
            });
        }

        tracing::debug!(
            "Creating SpriteFont: cell={}x{}, glyphs={}, chain={}",
            config.cell_width,
            config.cell_height,
            metadata.len(),
            chain.len()
        );

        Ok(Self {
            sheet,
            metadata,
            config,
            chain,
            cache,
        })
    }

    pub fn config(&self) -> &FontConfig {
        &self.config
    }

    pub fn cache(&self) -> &Arc<RegionCache> {
        &self.cache
    }

    /// `character` with this font's default colors and no modifiers
    pub fn character(&self, character: char) -> TextCharacter {
        TextCharacter::builder()
            .character(character)
            .foreground_color(self.config.default_fg)
            .background_color(self.config.default_bg)
            .build()
    }

    fn crop_and_transform(&self, meta: &CharacterMetadata, character: &TextCharacter) -> GlyphResult<GlyphRegion> {
        let (width, height) = (self.config.cell_width, self.config.cell_height);
        let image = self
            .sheet
            .crop(meta.column * width, meta.row * height, width, height)?;
        Ok(self.chain.apply(image, character))
    }
}

impl Drop for SpriteFont {
    fn drop(&mut self) {
        self.cache.release();
    }
}

impl Font for SpriteFont {
    fn width(&self) -> u32 {
        self.config.cell_width
    }

    fn height(&self) -> u32 {
        self.config.cell_height
    }

    fn has_data_for_char(&self, character: char) -> bool {
        self.metadata.contains(character)
    }

    fn fetch_metadata_for_char(&self, character: char) -> &[CharacterMetadata] {
        self.metadata.get(character)
    }

    fn fetch_region_for_char(&self, character: &TextCharacter, tags: &[&str]) -> GlyphResult<GlyphRegion> {
        let meta = match self.metadata.resolve(character.character(), tags) {
            Ok(meta) => meta,
            Err(err) => {
                if !err.is_missing_glyph() {
                    tracing::warn!("Glyph lookup failed: {}", err);
                }
                return Err(err);
            }
        };

        let base = self.cache.get_or_populate(character, || {
            // The chain only ever sees the undecorated identity, so every
            // modifier combination of one character shares a single base region.
            let undecorated = character.with_modifiers([]);
            if undecorated == *character {
                return self.crop_and_transform(meta, character).map(Arc::new);
            }
            self.cache
                .get_or_populate(&undecorated, || self.crop_and_transform(meta, &undecorated))
        })?;

        // Decorate a private copy; the cached base stays undecorated
        let region = character
            .modifiers()
            .iter()
            .fold(GlyphRegion::clone(&base), |region, modifier| {
                transformer_for(*modifier).transform(region, character)
            });
        Ok(region)
    }
}
