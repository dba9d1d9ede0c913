//! Glyph Core - sprite-sheet backed glyph rendering for character grids
//!
//! Given a logical character (code point, colors, style modifiers) this crate
//! produces the pixel region to draw for it: metadata lookup, cropping of the
//! sprite sheet, an ordered chain of region transformers, caching of the
//! result, and per-fetch modifier decoration.

pub mod cache;
pub mod character;
pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod font;
pub mod geometry;
pub mod metadata;
pub mod sheet;
pub mod transform;

// Re-export main types
pub use cache::{CacheStats, RegionCache};
pub use character::{Modifier, TextCharacter, TextCharacterBuilder};
pub use color::{TextColor, ANSI_PALETTE};
pub use config::FontConfig;
pub use error::{GlyphError, GlyphResult};
pub use font::{Font, SpriteFont};
pub use geometry::{Boundable, DefaultBoundable, Movable, Position, Rect, Size};
pub use metadata::{CharacterMetadata, MetadataRegistry};
pub use sheet::{GlyphRegion, SpriteSheet};
pub use transform::{ColorizingTransformer, NoOpTransformer, RegionTransformer, TransformerChain};
