// src/error.rs
use thiserror::Error;

/// Errors raised while resolving, cropping or configuring glyphs
///
/// Every variant stems from static configuration (sheet, metadata, cell size),
/// so nothing is retried internally.
#[derive(Error, Debug)]
pub enum GlyphError {
    // Lookup Errors
    #[error("No metadata exists for '{character}'")]
    MissingGlyph { character: char },

    /// The tag filter matched zero records or more than one
    #[error("Expected exactly 1 metadata entry for '{character}' with tags [{}], found {matches}", .tags.join(", "))]
    AmbiguousGlyph {
        character: char,
        tags: Vec<String>,
        matches: usize,
    },

    // Sheet Errors
    #[error("Region {width}x{height} at ({x}, {y}) lies outside the {sheet_width}x{sheet_height} sprite sheet")]
    RegionOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        sheet_width: u32,
        sheet_height: u32,
    },

    #[error("Failed to load sprite sheet: {source}")]
    SheetLoadFailed {
        #[from]
        source: image::ImageError,
    },

    // Configuration Errors
    #[error("Invalid configuration: {field} = {value}")]
    ConfigurationError { field: String, value: String },
}

impl GlyphError {
    /// True when the caller can recover by substituting a fallback glyph
    pub fn is_missing_glyph(&self) -> bool {
        matches!(self, GlyphError::MissingGlyph { .. })
    }
}

pub type GlyphResult<T> = Result<T, GlyphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ambiguous_message_lists_tags() {
        let err = GlyphError::AmbiguousGlyph {
            character: 'a',
            tags: vec!["bold".to_string(), "smallcaps".to_string()],
            matches: 2,
        };
        assert_eq!(
            err.to_string(),
            "Expected exactly 1 metadata entry for 'a' with tags [bold, smallcaps], found 2"
        );
        assert!(!err.is_missing_glyph());
    }

    #[test]
    fn test_missing_glyph_is_recoverable() {
        let err = GlyphError::MissingGlyph { character: 'z' };
        assert!(err.is_missing_glyph());
        assert_eq!(err.to_string(), "No metadata exists for 'z'");
    }
}
