//! Convexity and validity checks for physics collision polygons.
//!
//! A polygon that is concave, self-duplicating, or degenerate will crash
//! or misbehave in a physics engine's triangulation, so shapes are
//! classified before being handed over. All checks are boolean: malformed
//! input yields `false`, never an error.
//!
//! Cross products are compared with strict `> 0`, so an exactly-zero
//! cross product (a collinear edge pair) counts as a winding mismatch
//! against an otherwise consistently turning polygon. No epsilon is
//! applied; near-collinear edge pairs with a tiny nonzero cross product
//! keep their computed sign.

use crate::types::{Point, Polygon};

/// Whether the polygon is strictly convex.
///
/// Builds the edge list from consecutive vertices (wrapping from the
/// last back to the first) and requires every consecutive edge pair,
/// including the wrap-around pair, to agree with the first pair's
/// `cross > 0` sign. Fewer than 3 edges is never convex.
#[must_use]
pub fn is_convex(polygon: &Polygon) -> bool {
    let vertices = polygon.vertices();
    let n = vertices.len();
    if n < 3 {
        return false;
    }

    let edge = |i: usize| -> (f64, f64) {
        let a = vertices[i];
        let b = vertices[(i + 1) % n];
        (b.x - a.x, b.y - a.y)
    };

    let sign = cross(edge(0), edge(1)) > 0.0;
    (1..n).all(|i| (cross(edge(i), edge((i + 1) % n)) > 0.0) == sign)
}

/// Whether the polygon is a valid convex collision shape.
///
/// Passes iff the polygon [`is_convex`], no two vertices exactly
/// coincide, and the vertices do not all share one `x` or one `y`
/// coordinate (a degenerate line). Duplicate detection is exact
/// coordinate equality, not tolerance-based.
#[must_use]
pub fn is_valid_collision_polygon(polygon: &Polygon) -> bool {
    is_convex(polygon)
        && !has_duplicate_vertex(polygon.vertices())
        && !is_degenerate_line(polygon.vertices())
}

/// Whether every polygon of a multi-polygon collision mask is valid.
///
/// An empty mask is considered valid (nothing to collide with).
#[must_use]
pub fn is_valid_collision_mask(polygons: &[Polygon]) -> bool {
    polygons.iter().all(is_valid_collision_polygon)
}

/// 2D cross product of two edge vectors.
fn cross(a: (f64, f64), b: (f64, f64)) -> f64 {
    a.0.mul_add(b.1, -(a.1 * b.0))
}

/// Whether any two vertices have exactly equal coordinates.
///
/// O(n^2), acceptable since editors cap collision polygons at a handful
/// of vertices; correct for arbitrary n regardless.
fn has_duplicate_vertex(vertices: &[Point]) -> bool {
    vertices
        .iter()
        .enumerate()
        .any(|(i, a)| vertices[i + 1..].iter().any(|b| a == b))
}

/// Whether all vertices share the same `x` or the same `y` coordinate.
#[allow(clippy::float_cmp)]
fn is_degenerate_line(vertices: &[Point]) -> bool {
    let Some(first) = vertices.first() else {
        return false;
    };
    vertices.iter().all(|v| v.x == first.x) || vertices.iter().all(|v| v.y == first.y)
}
