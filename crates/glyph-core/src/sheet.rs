//! Decoded sprite sheets and the glyph regions cut from them

use std::path::Path;
use std::sync::Arc;

use image::{ImageReader, RgbaImage};

use crate::error::{GlyphError, GlyphResult};

/// An owned pixel buffer holding exactly one glyph cell
pub type GlyphRegion = RgbaImage;

/// Immutable sprite sheet shared between fonts
#[derive(Clone)]
pub struct SpriteSheet {
    image: Arc<RgbaImage>,
}

impl std::fmt::Debug for SpriteSheet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpriteSheet")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}

impl SpriteSheet {
    pub fn from_image(image: RgbaImage) -> Self {
        Self { image: Arc::new(image) }
    }

    /// Decode an encoded image (PNG etc.) held in memory
    pub fn from_bytes(bytes: &[u8]) -> GlyphResult<Self> {
        let decoded = image::load_from_memory(bytes)?;
        Ok(Self::from_image(decoded.to_rgba8()))
    }

    pub fn open(path: impl AsRef<Path>) -> GlyphResult<Self> {
        let path = path.as_ref();
        let decoded = ImageReader::open(path)
            .map_err(image::ImageError::IoError)?
            .with_guessed_format()
            .map_err(image::ImageError::IoError)?
            .decode()?;
        tracing::debug!("Loaded sprite sheet {} ({}x{})", path.display(), decoded.width(), decoded.height());
        Ok(Self::from_image(decoded.to_rgba8()))
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// True if the `width`x`height` region at (`x`, `y`) lies fully inside the sheet
    pub fn contains_region(&self, x: u32, y: u32, width: u32, height: u32) -> bool {
        let right = x.checked_add(width);
        let bottom = y.checked_add(height);
        matches!((right, bottom), (Some(r), Some(b)) if r <= self.width() && b <= self.height())
    }

    /// Copy a region out of the sheet. Unlike `image::imageops::crop`, a region
    /// that does not fit is an error rather than silently clamped.
    pub fn crop(&self, x: u32, y: u32, width: u32, height: u32) -> GlyphResult<GlyphRegion> {
        if !self.contains_region(x, y, width, height) {
            return Err(GlyphError::RegionOutOfBounds {
                x,
                y,
                width,
                height,
                sheet_width: self.width(),
                sheet_height: self.height(),
            });
        }
        Ok(image::imageops::crop_imm(self.image.as_ref(), x, y, width, height).to_image())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    /// Each pixel encodes its own coordinates
    fn coordinate_sheet(width: u32, height: u32) -> SpriteSheet {
        SpriteSheet::from_image(RgbaImage::from_fn(width, height, |x, y| Rgba([x as u8, y as u8, 0, 255])))
    }

    #[test]
    fn test_crop_copies_region() {
        let sheet = coordinate_sheet(32, 64);
        let region = sheet.crop(16, 48, 8, 16).unwrap();
        assert_eq!(region.dimensions(), (8, 16));
        assert_eq!(region.get_pixel(0, 0).0, [16, 48, 0, 255]);
        assert_eq!(region.get_pixel(7, 15).0, [23, 63, 0, 255]);
    }

    #[test]
    fn test_crop_out_of_bounds() {
        let sheet = coordinate_sheet(16, 16);
        assert!(sheet.crop(8, 8, 8, 8).is_ok());
        let err = sheet.crop(9, 8, 8, 8).unwrap_err();
        assert!(matches!(err, GlyphError::RegionOutOfBounds { x: 9, sheet_width: 16, .. }));
        assert!(sheet.crop(u32::MAX, 0, 2, 2).is_err());
    }

    #[test]
    fn test_from_bytes_rejects_garbage() {
        let err = SpriteSheet::from_bytes(b"definitely not a png").unwrap_err();
        assert!(matches!(err, GlyphError::SheetLoadFailed { .. }));
    }

    #[test]
    fn test_from_bytes_roundtrips_png() {
        let original = RgbaImage::from_pixel(4, 2, Rgba([9, 8, 7, 255]));
        let mut bytes = std::io::Cursor::new(Vec::new());
        original.write_to(&mut bytes, image::ImageFormat::Png).unwrap();

        let sheet = SpriteSheet::from_bytes(bytes.get_ref()).unwrap();
        assert_eq!((sheet.width(), sheet.height()), (4, 2));
        assert_eq!(sheet.image().get_pixel(3, 1).0, [9, 8, 7, 255]);
    }
}
