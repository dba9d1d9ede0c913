//! Transformers applied per fetch for each style modifier

use image::imageops;

use super::{line_thickness, NoOpTransformer, RegionTransformer};
use crate::character::{Modifier, TextCharacter};
use crate::sheet::GlyphRegion;

/// The transformer drawn for `modifier`. The match is exhaustive, so adding a
/// modifier without a transformer does not compile.
pub fn transformer_for(modifier: Modifier) -> &'static dyn RegionTransformer {
    match modifier {
        Modifier::Underline => &UnderlineTransformer,
        Modifier::CrossedOut => &CrossedOutTransformer,
        Modifier::VerticalFlip => &VerticalFlipper,
        Modifier::HorizontalFlip => &HorizontalFlipper,
        Modifier::Hidden => &HiddenTransformer,
        // Variant selection for bold/italic happens through metadata tags
        Modifier::Blink | Modifier::Bold | Modifier::Italic => &NoOpTransformer,
    }
}

fn fill_rows(region: &mut GlyphRegion, rows: std::ops::Range<u32>, character: &TextCharacter) {
    let color = character.foreground().to_rgba();
    for y in rows {
        for x in 0..region.width() {
            region.put_pixel(x, y, color);
        }
    }
}

/// Paints a foreground stroke along the bottom of the cell
#[derive(Clone, Copy, Debug, Default)]
pub struct UnderlineTransformer;

impl RegionTransformer for UnderlineTransformer {
    fn transform(&self, mut region: GlyphRegion, character: &TextCharacter) -> GlyphRegion {
        let height = region.height();
        let thickness = line_thickness(height).min(height);
        fill_rows(&mut region, height - thickness..height, character);
        region
    }
}

/// Paints a foreground stroke through the vertical middle of the cell
#[derive(Clone, Copy, Debug, Default)]
pub struct CrossedOutTransformer;

impl RegionTransformer for CrossedOutTransformer {
    fn transform(&self, mut region: GlyphRegion, character: &TextCharacter) -> GlyphRegion {
        let height = region.height();
        let thickness = line_thickness(height).min(height);
        let top = (height - thickness) / 2;
        fill_rows(&mut region, top..top + thickness, character);
        region
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct VerticalFlipper;

impl RegionTransformer for VerticalFlipper {
    fn transform(&self, mut region: GlyphRegion, _character: &TextCharacter) -> GlyphRegion {
        imageops::flip_vertical_in_place(&mut region);
        region
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct HorizontalFlipper;

impl RegionTransformer for HorizontalFlipper {
    fn transform(&self, mut region: GlyphRegion, _character: &TextCharacter) -> GlyphRegion {
        imageops::flip_horizontal_in_place(&mut region);
        region
    }
}

/// Replaces the whole cell with the background color
#[derive(Clone, Copy, Debug, Default)]
pub struct HiddenTransformer;

impl RegionTransformer for HiddenTransformer {
    fn transform(&self, mut region: GlyphRegion, character: &TextCharacter) -> GlyphRegion {
        let bg = character.background().to_rgba();
        region.pixels_mut().for_each(|px| *px = bg);
        region
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::TextColor;
    use image::Rgba;

    const FG: TextColor = TextColor::rgb(200, 100, 50);
    const BG: TextColor = TextColor::rgb(1, 2, 3);
    const BLANK: Rgba<u8> = Rgba([0, 0, 0, 0]);

    fn character() -> TextCharacter {
        TextCharacter::builder()
            .character('a')
            .foreground_color(FG)
            .background_color(BG)
            .build()
    }

    fn blank(width: u32, height: u32) -> GlyphRegion {
        GlyphRegion::from_pixel(width, height, BLANK)
    }

    #[test]
    fn test_underline_paints_bottom_row() {
        let out = UnderlineTransformer.transform(blank(8, 16), &character());
        for x in 0..8 {
            assert_eq!(*out.get_pixel(x, 15), FG.to_rgba());
            assert_eq!(*out.get_pixel(x, 14), BLANK);
        }
    }

    #[test]
    fn test_crossed_out_paints_middle() {
        let out = CrossedOutTransformer.transform(blank(8, 16), &character());
        assert_eq!(*out.get_pixel(3, 7), FG.to_rgba());
        assert_eq!(*out.get_pixel(3, 8), BLANK);
        assert_eq!(*out.get_pixel(3, 15), BLANK);
    }

    #[test]
    fn test_flips() {
        let mut region = blank(2, 2);
        region.put_pixel(0, 0, Rgba([9, 9, 9, 255]));

        let v = VerticalFlipper.transform(region.clone(), &character());
        assert_eq!(v.get_pixel(0, 1).0, [9, 9, 9, 255]);
        assert_eq!(*v.get_pixel(0, 0), BLANK);

        let h = HorizontalFlipper.transform(region, &character());
        assert_eq!(h.get_pixel(1, 0).0, [9, 9, 9, 255]);
        assert_eq!(*h.get_pixel(0, 0), BLANK);
    }

    #[test]
    fn test_hidden_fills_background() {
        let mut region = blank(4, 4);
        region.put_pixel(1, 1, FG.to_rgba());
        let out = HiddenTransformer.transform(region, &character());
        assert!(out.pixels().all(|px| *px == BG.to_rgba()));
    }

    #[test]
    fn test_every_modifier_has_a_transformer() {
        let region = blank(4, 4);
        for modifier in Modifier::ALL {
            let out = transformer_for(modifier).transform(region.clone(), &character());
            assert_eq!(out.dimensions(), (4, 4), "{modifier:?} changed the cell size");
        }
    }

    #[test]
    fn test_blink_bold_italic_are_identity() {
        let mut region = blank(3, 3);
        region.put_pixel(2, 1, FG.to_rgba());
        for modifier in [Modifier::Blink, Modifier::Bold, Modifier::Italic] {
            assert_eq!(transformer_for(modifier).transform(region.clone(), &character()), region);
        }
    }
}
