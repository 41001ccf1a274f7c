//! Shared types for collision mask generation and validation.

use serde::{Deserialize, Serialize};

/// Re-export `RgbaImage` so downstream crates can reference decoded
/// images without depending on `image` directly.
pub use image::RgbaImage;

/// A 2D point in image coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal position (pixels from left edge).
    pub x: f64,
    /// Vertical position (pixels from top edge).
    pub y: f64,
}

impl Point {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An ordered sequence of vertices forming a closed collision polygon.
///
/// Insertion order is significant: consecutive vertices (wrapping from
/// the last back to the first) define the polygon's edges and winding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon(Vec<Point>);

impl Polygon {
    /// Create a new polygon from a vector of vertices.
    #[must_use]
    pub const fn new(vertices: Vec<Point>) -> Self {
        Self(vertices)
    }

    /// Create an axis-aligned `width` x `height` rectangle centered on
    /// the origin.
    ///
    /// Vertices run clockwise in screen coordinates (y down), starting
    /// at the top-left corner. Use [`translate`](Self::translate) to
    /// position the rectangle.
    #[must_use]
    pub fn rectangle(width: f64, height: f64) -> Self {
        let half_w = width / 2.0;
        let half_h = height / 2.0;
        Self(vec![
            Point::new(-half_w, -half_h),
            Point::new(half_w, -half_h),
            Point::new(half_w, half_h),
            Point::new(-half_w, half_h),
        ])
    }

    /// Translate every vertex by `(dx, dy)`.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        for v in &mut self.0 {
            v.x += dx;
            v.y += dy;
        }
    }

    /// Returns `true` if the polygon has no vertices.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of vertices.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns a slice of all vertices.
    #[must_use]
    pub fn vertices(&self) -> &[Point] {
        &self.0
    }

    /// Consumes the polygon and returns the underlying vertex vector.
    #[must_use]
    pub fn into_vertices(self) -> Vec<Point> {
        self.0
    }
}

/// Image dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// The tightest axis-aligned pixel rectangle enclosing all opaque pixels.
///
/// All four coordinates are inclusive pixel indices, so
/// `min_x <= max_x < width` and `min_y <= max_y < height`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Leftmost qualifying column.
    pub min_x: u32,
    /// Topmost qualifying row.
    pub min_y: u32,
    /// Rightmost qualifying column.
    pub max_x: u32,
    /// Bottommost qualifying row.
    pub max_y: u32,
}

impl BoundingBox {
    /// Width in pixels (inclusive bounds, so `max_x - min_x + 1`).
    #[must_use]
    pub const fn width(self) -> u32 {
        self.max_x - self.min_x + 1
    }

    /// Height in pixels (inclusive bounds, so `max_y - min_y + 1`).
    #[must_use]
    pub const fn height(self) -> u32 {
        self.max_y - self.min_y + 1
    }

    /// Horizontal center: `(min_x + max_x + 1) / 2`.
    ///
    /// The `+1` places the center on the pixel grid's half-pixel
    /// boundary (a single pixel at column 3 has its center at 3.5).
    #[must_use]
    pub fn center_x(self) -> f64 {
        (f64::from(self.min_x) + f64::from(self.max_x) + 1.0) / 2.0
    }

    /// Vertical center: `(min_y + max_y + 1) / 2`, same half-pixel
    /// convention as [`center_x`](Self::center_x).
    #[must_use]
    pub fn center_y(self) -> f64 {
        (f64::from(self.min_y) + f64::from(self.max_y) + 1.0) / 2.0
    }
}

/// A mask rectangle expressed as center point plus extents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
    /// Horizontal center in image coordinates.
    pub center_x: f64,
    /// Vertical center in image coordinates.
    pub center_y: f64,
}

impl Rectangle {
    /// Convert to a four-corner polygon positioned at the center.
    #[must_use]
    pub fn to_polygon(self) -> Polygon {
        let mut polygon = Polygon::rectangle(self.width, self.height);
        polygon.translate(self.center_x, self.center_y);
        polygon
    }
}

impl From<BoundingBox> for Rectangle {
    fn from(bounds: BoundingBox) -> Self {
        Self {
            width: f64::from(bounds.width()),
            height: f64::from(bounds.height()),
            center_x: bounds.center_x(),
            center_y: bounds.center_y(),
        }
    }
}

/// Configuration for mask generation.
///
/// All parameters have defaults matching the original editor behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaskConfig {
    /// Alpha value below which a pixel is considered transparent.
    ///
    /// The default of 64/255 (~25%) intentionally includes pixels from
    /// translucent visual effects (glow, anti-aliased edges) while
    /// excluding near-fully-transparent noise.
    pub alpha_threshold: u8,

    /// When `true`, a fully transparent image produces a mask covering
    /// the whole image instead of failing with
    /// [`MaskError::NoOpaquePixel`].
    pub full_image_fallback: bool,
}

impl MaskConfig {
    /// Default transparency threshold (64/255, ~25%).
    pub const DEFAULT_ALPHA_THRESHOLD: u8 = 64;
}

impl Default for MaskConfig {
    fn default() -> Self {
        Self {
            alpha_threshold: Self::DEFAULT_ALPHA_THRESHOLD,
            full_image_fallback: false,
        }
    }
}

/// Result of mask generation.
///
/// A collision mask is a list of convex polygons; automatic generation
/// produces a single rectangle, but hand-edited masks may carry several.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaskResult {
    /// The mask polygons, positioned in image coordinates.
    pub polygons: Vec<Polygon>,

    /// The bounding rectangle the polygons were derived from.
    pub bounds: Rectangle,

    /// Dimensions of the source image in pixels.
    pub dimensions: Dimensions,
}

/// Errors that can occur during mask generation.
#[derive(Debug, thiserror::Error)]
pub enum MaskError {
    /// Failed to decode the input image.
    #[error("failed to decode image: {0}")]
    ImageDecode(#[from] image::ImageError),

    /// The input image bytes were empty.
    #[error("input image data is empty")]
    EmptyInput,

    /// The image has a zero dimension.
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidImage {
        /// Reported image width.
        width: u32,
        /// Reported image height.
        height: u32,
    },

    /// No pixel's alpha reached the transparency threshold.
    ///
    /// Expected for blank sprites; callers typically fall back to a
    /// full-image mask (see `MaskConfig::full_image_fallback`).
    #[error("no pixel with alpha at or above the transparency threshold")]
    NoOpaquePixel,

    /// The computed bounding box has zero or negative area.
    ///
    /// Should be unreachable once an opaque pixel was found, but kept as
    /// a reported failure so malformed alpha sources can never produce a
    /// zero-size rectangle.
    #[error("computed bounding box has no area")]
    DegenerateBounds,
}
