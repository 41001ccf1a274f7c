//! Bounding box extraction: scan the alpha channel from the four image
//! borders inward.
//!
//! Finds the tightest axis-aligned rectangle enclosing every pixel whose
//! alpha is at or above the transparency threshold. Scanning inward from
//! each border (and restricting the horizontal scans to the vertical
//! range already found) avoids a full `width * height` pass in the
//! common case where the sprite content is much smaller than the image.

use crate::alpha::AlphaSource;
use crate::types::{BoundingBox, MaskError};

/// Scan `source` for the tightest bounding box of pixels with
/// `alpha >= threshold`.
///
/// Scan order:
///
/// 1. rows top-to-bottom (columns left-to-right within each row) until
///    the first qualifying pixel: its row is `min_y`;
/// 2. rows bottom-to-top: `max_y`;
/// 3. columns left-to-right, reading only rows in `[min_y, max_y]`:
///    `min_x`;
/// 4. columns right-to-left, same restricted range: `max_x`.
///
/// # Errors
///
/// Returns [`MaskError::InvalidImage`] if either dimension is zero.
/// Returns [`MaskError::NoOpaquePixel`] if the first row scan finds no
/// qualifying pixel; no column scan is performed in that case.
/// Returns [`MaskError::DegenerateBounds`] if a later scan fails to
/// reproduce a qualifying pixel (only possible with an alpha source
/// that returns inconsistent values).
pub fn scan_bounds<S: AlphaSource>(source: &S, threshold: u8) -> Result<BoundingBox, MaskError> {
    let dimensions = source.dimensions();
    let (width, height) = (dimensions.width, dimensions.height);
    if width == 0 || height == 0 {
        return Err(MaskError::InvalidImage { width, height });
    }

    let Some(min_y) = (0..height).find(|&y| row_has_opaque(source, y, width, threshold)) else {
        return Err(MaskError::NoOpaquePixel);
    };

    let max_y = (0..height)
        .rev()
        .find(|&y| row_has_opaque(source, y, width, threshold))
        .ok_or(MaskError::DegenerateBounds)?;

    let min_x = (0..width)
        .find(|&x| column_has_opaque(source, x, min_y, max_y, threshold))
        .ok_or(MaskError::DegenerateBounds)?;

    let max_x = (0..width)
        .rev()
        .find(|&x| column_has_opaque(source, x, min_y, max_y, threshold))
        .ok_or(MaskError::DegenerateBounds)?;

    if max_x < min_x || max_y < min_y {
        return Err(MaskError::DegenerateBounds);
    }

    Ok(BoundingBox {
        min_x,
        min_y,
        max_x,
        max_y,
    })
}

/// Whether any pixel in row `y` qualifies, scanning left-to-right.
fn row_has_opaque<S: AlphaSource>(source: &S, y: u32, width: u32, threshold: u8) -> bool {
    (0..width).any(|x| source.alpha_at(x, y) >= threshold)
}

/// Whether any pixel in column `x` within rows `[min_y, max_y]`
/// qualifies, scanning top-to-bottom.
fn column_has_opaque<S: AlphaSource>(
    source: &S,
    x: u32,
    min_y: u32,
    max_y: u32,
    threshold: u8,
) -> bool {
    (min_y..=max_y).any(|y| source.alpha_at(x, y) >= threshold)
}
