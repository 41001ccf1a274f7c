//! Pixel alpha access and image decoding.
//!
//! The bounding box scanner only ever reads the alpha channel, so it is
//! written against the minimal [`AlphaSource`] trait rather than a
//! concrete image type. This keeps the scanner testable with synthetic
//! in-memory sources, independent of any decoding or canvas API.

use image::RgbaImage;

use crate::types::{Dimensions, MaskError};

/// Read-only access to the alpha channel of a raster image.
///
/// Implementations must return stable values: calling
/// [`alpha_at`](Self::alpha_at) twice for the same coordinates must
/// yield the same result within one scan.
pub trait AlphaSource {
    /// Image dimensions in pixels.
    fn dimensions(&self) -> Dimensions;

    /// Alpha value of the pixel at `(x, y)`, in `[0, 255]`.
    ///
    /// Callers only pass coordinates within
    /// [`dimensions`](Self::dimensions).
    fn alpha_at(&self, x: u32, y: u32) -> u8;
}

impl AlphaSource for RgbaImage {
    fn dimensions(&self) -> Dimensions {
        Dimensions {
            width: self.width(),
            height: self.height(),
        }
    }

    fn alpha_at(&self, x: u32, y: u32) -> u8 {
        self.get_pixel(x, y).0[3]
    }
}

/// Decode raw image bytes into an RGBA image.
///
/// Supports PNG, JPEG, BMP, and WebP formats (whatever the `image` crate
/// can decode). Formats without an alpha channel decode with all pixels
/// fully opaque, which makes the generated mask cover the whole image.
///
/// # Errors
///
/// Returns [`MaskError::EmptyInput`] if `bytes` is empty.
/// Returns [`MaskError::ImageDecode`] if the image format is
/// unrecognized or the data is corrupt.
pub fn decode_rgba(bytes: &[u8]) -> Result<RgbaImage, MaskError> {
    if bytes.is_empty() {
        return Err(MaskError::EmptyInput);
    }

    let img = image::load_from_memory(bytes)?;
    Ok(img.to_rgba8())
}
