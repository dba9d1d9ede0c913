//! Character identity: code point, colors and style modifiers

use std::collections::BTreeSet;

use crate::color::TextColor;
use crate::constants::{DEFAULT_BG, DEFAULT_CHAR, DEFAULT_FG};

/// Style attributes that can be attached to a [`TextCharacter`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Modifier {
    /// Selected through metadata tags, not drawn by a transformer
    Bold,
    /// Selected through metadata tags, not drawn by a transformer
    Italic,
    Underline,
    CrossedOut,
    /// Blinking is driven by the renderer's timer; the glyph itself is unchanged
    Blink,
    Hidden,
    VerticalFlip,
    HorizontalFlip,
}

impl Modifier {
    pub const ALL: [Modifier; 8] = [
        Modifier::Bold,
        Modifier::Italic,
        Modifier::Underline,
        Modifier::CrossedOut,
        Modifier::Blink,
        Modifier::Hidden,
        Modifier::VerticalFlip,
        Modifier::HorizontalFlip,
    ];
}

/// Immutable logical character. Equality and hashing are structural, with the
/// modifiers compared as a set, so a `TextCharacter` is used verbatim as the
/// region cache key.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TextCharacter {
    character: char,
    foreground: TextColor,
    background: TextColor,
    modifiers: BTreeSet<Modifier>,
}

impl Default for TextCharacter {
    fn default() -> Self {
        Self {
            character: DEFAULT_CHAR,
            foreground: DEFAULT_FG,
            background: DEFAULT_BG,
            modifiers: BTreeSet::new(),
        }
    }
}

impl TextCharacter {
    pub fn new(
        character: char,
        foreground: TextColor,
        background: TextColor,
        modifiers: impl IntoIterator<Item = Modifier>,
    ) -> Self {
        Self {
            character,
            foreground,
            background,
            modifiers: modifiers.into_iter().collect(),
        }
    }

    /// Plain character with default colors and no modifiers
    pub fn of(character: char) -> Self {
        Self { character, ..Self::default() }
    }

    pub fn builder() -> TextCharacterBuilder {
        TextCharacterBuilder::default()
    }

    pub fn character(&self) -> char {
        self.character
    }

    pub fn foreground(&self) -> TextColor {
        self.foreground
    }

    pub fn background(&self) -> TextColor {
        self.background
    }

    pub fn modifiers(&self) -> &BTreeSet<Modifier> {
        &self.modifiers
    }

    pub fn has_modifier(&self, modifier: Modifier) -> bool {
        self.modifiers.contains(&modifier)
    }

    pub fn is_bold(&self) -> bool {
        self.has_modifier(Modifier::Bold)
    }

    pub fn is_italic(&self) -> bool {
        self.has_modifier(Modifier::Italic)
    }

    pub fn is_underlined(&self) -> bool {
        self.has_modifier(Modifier::Underline)
    }

    pub fn is_crossed_out(&self) -> bool {
        self.has_modifier(Modifier::CrossedOut)
    }

    pub fn is_blinking(&self) -> bool {
        self.has_modifier(Modifier::Blink)
    }

    pub fn is_hidden(&self) -> bool {
        self.has_modifier(Modifier::Hidden)
    }

    // The `with_*` family never touches `self`; a changed character is a new identity.

    pub fn with_character(&self, character: char) -> Self {
        Self { character, ..self.clone() }
    }

    pub fn with_foreground_color(&self, foreground: TextColor) -> Self {
        Self { foreground, ..self.clone() }
    }

    pub fn with_background_color(&self, background: TextColor) -> Self {
        Self { background, ..self.clone() }
    }

    pub fn with_modifiers(&self, modifiers: impl IntoIterator<Item = Modifier>) -> Self {
        Self {
            modifiers: modifiers.into_iter().collect(),
            ..self.clone()
        }
    }
}

/// Builder for [`TextCharacter`]
#[derive(Clone, Debug, Default)]
pub struct TextCharacterBuilder {
    inner: TextCharacter,
}

impl TextCharacterBuilder {
    pub fn character(mut self, character: char) -> Self {
        self.inner.character = character;
        self
    }

    pub fn foreground_color(mut self, color: TextColor) -> Self {
        self.inner.foreground = color;
        self
    }

    pub fn background_color(mut self, color: TextColor) -> Self {
        self.inner.background = color;
        self
    }

    pub fn modifier(mut self, modifier: Modifier) -> Self {
        self.inner.modifiers.insert(modifier);
        self
    }

    pub fn modifiers(mut self, modifiers: impl IntoIterator<Item = Modifier>) -> Self {
        self.inner.modifiers.extend(modifiers);
        self
    }

    pub fn build(self) -> TextCharacter {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::ANSI_PALETTE;
    use std::collections::HashSet;

    #[test]
    fn test_default_character() {
        let ch = TextCharacter::default();
        assert_eq!(ch.character(), ' ');
        assert_eq!(ch.foreground(), DEFAULT_FG);
        assert_eq!(ch.background(), DEFAULT_BG);
        assert!(ch.modifiers().is_empty());
    }

    #[test]
    fn test_modifier_queries() {
        assert!(TextCharacter::builder().modifier(Modifier::Bold).build().is_bold());
        assert!(TextCharacter::builder().modifier(Modifier::Italic).build().is_italic());
        assert!(TextCharacter::builder().modifier(Modifier::Underline).build().is_underlined());
        assert!(TextCharacter::builder().modifier(Modifier::CrossedOut).build().is_crossed_out());
        assert!(TextCharacter::builder().modifier(Modifier::Blink).build().is_blinking());
        assert!(TextCharacter::builder().modifier(Modifier::Hidden).build().is_hidden());
        assert!(!TextCharacter::of('x').is_bold());
    }

    #[test]
    fn test_modifier_order_does_not_matter() {
        let a = TextCharacter::new('a', DEFAULT_FG, DEFAULT_BG, [Modifier::Underline, Modifier::Blink]);
        let b = TextCharacter::new('a', DEFAULT_FG, DEFAULT_BG, [Modifier::Blink, Modifier::Underline, Modifier::Blink]);
        assert_eq!(a, b);

        let mut set = HashSet::new();
        set.insert(a);
        assert!(set.contains(&b));
    }

    #[test]
    fn test_with_methods_produce_new_identity() {
        let original = TextCharacter::builder()
            .character('a')
            .foreground_color(ANSI_PALETTE[1])
            .background_color(ANSI_PALETTE[4])
            .modifier(Modifier::Underline)
            .build();

        let changed = original.with_character('b');
        assert_eq!(original.character(), 'a');
        assert_eq!(changed.character(), 'b');
        assert_ne!(original, changed);

        assert_eq!(original.with_foreground_color(ANSI_PALETTE[2]).foreground(), ANSI_PALETTE[2]);
        assert_eq!(original.with_background_color(ANSI_PALETTE[3]).background(), ANSI_PALETTE[3]);
        assert!(original.with_modifiers([]).modifiers().is_empty());
        assert!(original.is_underlined());
    }

    #[test]
    fn test_differs_by_any_field() {
        let base = TextCharacter::of('a');
        assert_ne!(base, base.with_foreground_color(ANSI_PALETTE[9]));
        assert_ne!(base, base.with_background_color(ANSI_PALETTE[9]));
        assert_ne!(base, base.with_modifiers([Modifier::Hidden]));
        assert_eq!(base, base.with_character('a'));
    }
}
