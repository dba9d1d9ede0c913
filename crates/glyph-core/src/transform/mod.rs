//! Region transformers
//!
//! A transformer is a pure function from a glyph region and the character it
//! is being drawn for to a new region. Two groups exist:
//!
//! - the font's chain, run once per cache miss; its output is what the cache holds
//! - the modifier transformers, run on every fetch and never cached

use std::fmt;
use std::sync::Arc;

use crate::character::TextCharacter;
use crate::sheet::GlyphRegion;

pub mod colorize;
pub mod modifiers;

pub use colorize::ColorizingTransformer;
pub use modifiers::{
    transformer_for, CrossedOutTransformer, HiddenTransformer, HorizontalFlipper,
    UnderlineTransformer, VerticalFlipper,
};

/// Single-method capability implemented by every region effect
pub trait RegionTransformer: Send + Sync {
    /// Produce the transformed region. `region` is owned by the caller, never a
    /// cached buffer.
    fn transform(&self, region: GlyphRegion, character: &TextCharacter) -> GlyphRegion;
}

impl<F> RegionTransformer for F
where
    F: Fn(GlyphRegion, &TextCharacter) -> GlyphRegion + Send + Sync,
{
    fn transform(&self, region: GlyphRegion, character: &TextCharacter) -> GlyphRegion {
        self(region, character)
    }
}

/// Identity transformer
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOpTransformer;

impl RegionTransformer for NoOpTransformer {
    fn transform(&self, region: GlyphRegion, _character: &TextCharacter) -> GlyphRegion {
        region
    }
}

/// Ordered list of transformers applied front to back
#[derive(Clone, Default)]
pub struct TransformerChain {
    transformers: Vec<Arc<dyn RegionTransformer>>,
}

impl fmt::Debug for TransformerChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransformerChain")
            .field("len", &self.transformers.len())
            .finish()
    }
}

impl TransformerChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, transformer: impl RegionTransformer + 'static) -> Self {
        self.transformers.push(Arc::new(transformer));
        self
    }

    pub fn push(&mut self, transformer: Arc<dyn RegionTransformer>) {
        self.transformers.push(transformer);
    }

    pub fn len(&self) -> usize {
        self.transformers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transformers.is_empty()
    }

    /// Each transformer consumes the previous one's output
    pub fn apply(&self, region: GlyphRegion, character: &TextCharacter) -> GlyphRegion {
        self.transformers
            .iter()
            .fold(region, |region, transformer| transformer.transform(region, character))
    }
}

impl FromIterator<Arc<dyn RegionTransformer>> for TransformerChain {
    fn from_iter<T: IntoIterator<Item = Arc<dyn RegionTransformer>>>(iter: T) -> Self {
        Self {
            transformers: iter.into_iter().collect(),
        }
    }
}

/// Thickness of a decoration stroke for a cell of `height` pixels
pub(crate) fn line_thickness(height: u32) -> u32 {
    (height * crate::constants::LINE_THICKNESS_PER_16PX / 16).max(1)
}
