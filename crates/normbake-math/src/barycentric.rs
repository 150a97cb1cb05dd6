//! Barycentric coordinate solvers.
//!
//! Weights are always returned as `[wa, wb, wc]` for corners `a, b, c`
//! and sum to one.

use glam::{Vec2, Vec3};
use normbake_types::constants::{DEGENERATE_LENGTH_SQ, DEGENERATE_UV_DETERMINANT};

/// Solves the barycentric weights of `p` against a UV-space triangle.
///
/// Returns `None` when the triangle is degenerate in UV space
/// (`|det| < DEGENERATE_UV_DETERMINANT`). Points outside the triangle
/// still get weights; use [`is_inside`] to reject them.
#[inline]
pub fn barycentric_2d(p: Vec2, a: Vec2, b: Vec2, c: Vec2) -> Option<[f32; 3]> {
    let ab = b - a;
    let ac = c - a;
    let ap = p - a;

    let det = ab.x * ac.y - ac.x * ab.y;
    if det.abs() < DEGENERATE_UV_DETERMINANT {
        return None;
    }

    let v = (ap.x * ac.y - ac.x * ap.y) / det;
    let w = (ab.x * ap.y - ap.x * ab.y) / det;
    Some([1.0 - v - w, v, w])
}

/// Solves the barycentric weights of a point lying in the plane of a 3D triangle.
///
/// Uses the dot-product form (Cramer's rule on the edge Gram matrix).
/// Returns `None` for zero-area triangles.
#[inline]
pub fn barycentric_3d(p: Vec3, a: Vec3, b: Vec3, c: Vec3) -> Option<[f32; 3]> {
    let ac = c - a;
    let ab = b - a;
    let ap = p - a;

    let d00 = ac.dot(ac);
    let d01 = ac.dot(ab);
    let d02 = ac.dot(ap);
    let d11 = ab.dot(ab);
    let d12 = ab.dot(ap);

    let denom = d00 * d11 - d01 * d01;
    if denom.abs() < DEGENERATE_LENGTH_SQ || !denom.is_finite() {
        return None;
    }
    let inv_denom = 1.0 / denom;

    // u weighs c, v weighs b
    let u = (d11 * d02 - d01 * d12) * inv_denom;
    let v = (d00 * d12 - d01 * d02) * inv_denom;
    Some([1.0 - u - v, v, u])
}

/// Returns true if no weight is negative.
#[inline]
pub fn is_inside(weights: [f32; 3]) -> bool {
    weights[0] >= 0.0 && weights[1] >= 0.0 && weights[2] >= 0.0
}

/// Blends three corner values by barycentric weights.
#[inline]
pub fn interpolate(weights: [f32; 3], a: Vec3, b: Vec3, c: Vec3) -> Vec3 {
    a * weights[0] + b * weights[1] + c * weights[2]
}
