//! spritemask-core: Pure collision mask generation (sans-IO).
//!
//! Computes pixel-tight collision rectangles for 2D sprites from image
//! transparency, and validates hand-edited collision polygons before
//! they are handed to a physics engine:
//!
//! - [`generate`] / [`mask::bounding_box_mask`]: scan an image's alpha
//!   channel from the four borders inward and emit the tightest
//!   bounding rectangle as a single-polygon collision mask;
//! - [`convex::is_valid_collision_polygon`]: classify a vertex list as
//!   a valid strictly-convex collision shape.
//!
//! This crate has **no I/O dependencies** -- it operates on in-memory
//! byte slices and pixel sources and returns structured data. File and
//! terminal interaction lives in the `spritemask` CLI crate.

pub mod alpha;
pub mod bounds;
pub mod convex;
pub mod mask;
pub mod types;

pub use alpha::{AlphaSource, decode_rgba};
pub use bounds::scan_bounds;
pub use convex::{is_convex, is_valid_collision_mask, is_valid_collision_polygon};
pub use mask::{bounding_box_mask, full_image_mask};
pub use types::{
    BoundingBox, Dimensions, MaskConfig, MaskError, MaskResult, Point, Polygon, Rectangle,
};

/// Generate the automatic collision mask for raw image bytes.
///
/// Decodes the image (PNG, JPEG, BMP, WebP), scans the alpha channel
/// for the tightest bounding box of pixels at or above
/// `config.alpha_threshold`, and returns it as a single-rectangle
/// collision mask. With `config.full_image_fallback` set, a fully
/// transparent image yields a mask covering the whole image instead of
/// an error.
///
/// # Errors
///
/// Returns [`MaskError::EmptyInput`] if `image_bytes` is empty.
/// Returns [`MaskError::ImageDecode`] if the image cannot be decoded.
/// Returns [`MaskError::InvalidImage`] if either dimension is zero.
/// Returns [`MaskError::NoOpaquePixel`] if no pixel qualifies and the
/// full-image fallback is disabled.
pub fn generate(image_bytes: &[u8], config: &MaskConfig) -> Result<MaskResult, MaskError> {
    let img = alpha::decode_rgba(image_bytes)?;

    match mask::bounding_box_mask(&img, config.alpha_threshold) {
        Err(MaskError::NoOpaquePixel) if config.full_image_fallback => {
            Ok(mask::full_image_mask(Dimensions {
                width: img.width(),
                height: img.height(),
            }))
        }
        other => other,
    }
}
