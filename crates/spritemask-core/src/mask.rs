//! Collision mask construction from scanned bounds.
//!
//! Converts a pixel bounding box into the mask representation consumed
//! by physics collaborators: a rectangle (center + extents) and its
//! four-corner polygon, positioned in image coordinates.

use crate::alpha::AlphaSource;
use crate::bounds::scan_bounds;
use crate::types::{Dimensions, MaskError, MaskResult, Rectangle};

/// Compute the automatic collision mask for a pixel source: a single
/// rectangle polygon tightly enclosing all pixels with
/// `alpha >= threshold`.
///
/// # Errors
///
/// Propagates the scan errors of [`scan_bounds`]:
/// [`MaskError::InvalidImage`], [`MaskError::NoOpaquePixel`], and
/// [`MaskError::DegenerateBounds`].
pub fn bounding_box_mask<S: AlphaSource>(
    source: &S,
    threshold: u8,
) -> Result<MaskResult, MaskError> {
    let bounds = scan_bounds(source, threshold)?;
    let rectangle = Rectangle::from(bounds);

    Ok(MaskResult {
        polygons: vec![rectangle.to_polygon()],
        bounds: rectangle,
        dimensions: source.dimensions(),
    })
}

/// The fallback mask covering the whole image: a `width` x `height`
/// rectangle centered at `(width / 2, height / 2)`.
///
/// Used when a sprite has no opaque content but still needs a collision
/// shape (the original editor's default mask).
#[must_use]
pub fn full_image_mask(dimensions: Dimensions) -> MaskResult {
    let rectangle = Rectangle {
        width: f64::from(dimensions.width),
        height: f64::from(dimensions.height),
        center_x: f64::from(dimensions.width) / 2.0,
        center_y: f64::from(dimensions.height) / 2.0,
    };

    MaskResult {
        polygons: vec![rectangle.to_polygon()],
        bounds: rectangle,
        dimensions,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::{MaskConfig, Point, RgbaImage};

    const THRESHOLD: u8 = MaskConfig::DEFAULT_ALPHA_THRESHOLD;

    /// Build an RGBA image with the given opaque pixel coordinates.
    fn image_with_opaque(width: u32, height: u32, opaque: &[(u32, u32)]) -> RgbaImage {
        let mut img = RgbaImage::new(width, height);
        for &(x, y) in opaque {
            img.put_pixel(x, y, image::Rgba([255, 255, 255, 255]));
        }
        img
    }

    #[test]
    fn reference_region_produces_expected_rectangle() {
        // 10x10 image, qualifying region x in [2, 5], y in [3, 6]:
        // width 4, height 4, center (4, 5).
        let mut opaque = Vec::new();
        for y in 3..=6 {
            for x in 2..=5 {
                opaque.push((x, y));
            }
        }
        let img = image_with_opaque(10, 10, &opaque);

        let result = bounding_box_mask(&img, THRESHOLD).unwrap();
        assert_eq!(
            result.bounds,
            Rectangle {
                width: 4.0,
                height: 4.0,
                center_x: 4.0,
                center_y: 5.0,
            },
        );
        assert_eq!(result.dimensions.width, 10);
        assert_eq!(result.dimensions.height, 10);
    }

    #[test]
    fn mask_polygon_corners_enclose_the_region() {
        let mut opaque = Vec::new();
        for y in 3..=6 {
            for x in 2..=5 {
                opaque.push((x, y));
            }
        }
        let img = image_with_opaque(10, 10, &opaque);

        let result = bounding_box_mask(&img, THRESHOLD).unwrap();
        assert_eq!(result.polygons.len(), 1);
        assert_eq!(
            result.polygons[0].vertices(),
            &[
                Point::new(2.0, 3.0),
                Point::new(6.0, 3.0),
                Point::new(6.0, 7.0),
                Point::new(2.0, 7.0),
            ],
        );
    }

    #[test]
    fn single_pixel_produces_unit_rectangle_at_half_pixel_center() {
        let img = image_with_opaque(10, 10, &[(7, 2)]);
        let result = bounding_box_mask(&img, THRESHOLD).unwrap();
        assert_eq!(
            result.bounds,
            Rectangle {
                width: 1.0,
                height: 1.0,
                center_x: 7.5,
                center_y: 2.5,
            },
        );
    }

    #[test]
    fn transparent_image_propagates_no_opaque_pixel() {
        let img = RgbaImage::new(5, 5);
        let result = bounding_box_mask(&img, THRESHOLD);
        assert!(matches!(result, Err(MaskError::NoOpaquePixel)));
    }

    #[test]
    fn full_image_mask_covers_the_image() {
        let result = full_image_mask(Dimensions {
            width: 32,
            height: 48,
        });
        assert_eq!(
            result.bounds,
            Rectangle {
                width: 32.0,
                height: 48.0,
                center_x: 16.0,
                center_y: 24.0,
            },
        );
        assert_eq!(
            result.polygons[0].vertices(),
            &[
                Point::new(0.0, 0.0),
                Point::new(32.0, 0.0),
                Point::new(32.0, 48.0),
                Point::new(0.0, 48.0),
            ],
        );
    }
}
