//! Sprite-sheet cell metadata keyed by code point

use std::collections::{BTreeSet, HashMap};

use crate::error::{GlyphError, GlyphResult};

/// Location of one glyph variant on the sheet, plus the tags that tell it
/// apart from other variants of the same code point
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CharacterMetadata {
    /// Sheet column, in cells
    pub column: u32,
    /// Sheet row, in cells
    pub row: u32,
    pub tags: BTreeSet<String>,
}

impl CharacterMetadata {
    pub fn new(column: u32, row: u32) -> Self {
        Self {
            column,
            row,
            tags: BTreeSet::new(),
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    /// True if every requested tag is present on this record
    pub fn matches_tags(&self, tags: &[&str]) -> bool {
        tags.iter().all(|tag| self.tags.contains(*tag))
    }
}

#[derive(Clone, Debug, Default)]
pub struct MetadataRegistry {
    entries: HashMap<char, Vec<CharacterMetadata>>,
}

impl MetadataRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, character: char, metadata: CharacterMetadata) {
        self.entries.entry(character).or_default().push(metadata);
    }

    /// Builder form of [`insert`](Self::insert)
    pub fn with(mut self, character: char, metadata: CharacterMetadata) -> Self {
        self.insert(character, metadata);
        self
    }

    pub fn contains(&self, character: char) -> bool {
        self.entries.contains_key(&character)
    }

    /// All records for `character`; empty when none exist
    pub fn get(&self, character: char) -> &[CharacterMetadata] {
        self.entries.get(&character).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of code points with at least one record
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, &CharacterMetadata)> {
        self.entries
            .iter()
            .flat_map(|(ch, metas)| metas.iter().map(move |meta| (*ch, meta)))
    }

    /// Highest (column, row) referenced by any record
    pub fn max_cell(&self) -> Option<(u32, u32)> {
        self.iter().fold(None, |acc, (_, meta)| match acc {
            None => Some((meta.column, meta.row)),
            Some((c, r)) => Some((c.max(meta.column), r.max(meta.row))),
        })
    }

    /// Pick the single record for `character` whose tags are a superset of
    /// `tags`. Zero or several candidates are both an error; there is no
    /// first-match fallback.
    pub fn resolve(&self, character: char, tags: &[&str]) -> GlyphResult<&CharacterMetadata> {
        let metas = self
            .entries
            .get(&character)
            .ok_or(GlyphError::MissingGlyph { character })?;

        let matching: Vec<&CharacterMetadata> =
            metas.iter().filter(|meta| meta.matches_tags(tags)).collect();
        match matching.as_slice() {
            [meta] => Ok(*meta),
            _ => Err(GlyphError::AmbiguousGlyph {
                character,
                tags: tags.iter().map(|tag| tag.to_string()).collect(),
                matches: matching.len(),
            }),
        }
    }
}

impl FromIterator<(char, CharacterMetadata)> for MetadataRegistry {
    fn from_iter<T: IntoIterator<Item = (char, CharacterMetadata)>>(iter: T) -> Self {
        let mut registry = Self::new();
        for (ch, meta) in iter {
            registry.insert(ch, meta);
        }
        registry
    }
}
