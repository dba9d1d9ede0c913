use super::RegionTransformer;
use crate::character::TextCharacter;
use crate::constants::GLYPH_ALPHA_THRESHOLD;
use crate::sheet::GlyphRegion;

/// Recolors a sheet glyph with the character's colors: opaque pixels take the
/// foreground, the rest the background.
///
/// Meant for the font chain. Because colors are part of the cache key, each
/// color combination is colorized once.
#[derive(Clone, Copy, Debug)]
pub struct ColorizingTransformer {
    threshold: u8,
}

impl Default for ColorizingTransformer {
    fn default() -> Self {
        Self {
            threshold: GLYPH_ALPHA_THRESHOLD,
        }
    }
}

impl ColorizingTransformer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Alpha at or above which a pixel counts as part of the glyph
    pub fn with_threshold(threshold: u8) -> Self {
        Self { threshold }
    }
}

impl RegionTransformer for ColorizingTransformer {
    fn transform(&self, mut region: GlyphRegion, character: &TextCharacter) -> GlyphRegion {
        let fg = character.foreground().to_rgba();
        let bg = character.background().to_rgba();
        for px in region.pixels_mut() {
            *px = if px.0[3] >= self.threshold { fg } else { bg };
        }
        region
    }
}
