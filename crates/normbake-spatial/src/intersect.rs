//! Ray/triangle intersection.

use normbake_math::Vec3;
use normbake_types::constants::RAY_TRIANGLE_EPSILON;

use crate::index::Ray;

/// Möller–Trumbore intersection, double-sided.
///
/// Returns the distance along the ray, if it lies in `[0, max_distance]`.
/// Edges and corners count as inside.
#[inline]
pub fn intersect_triangle(ray: &Ray, a: Vec3, b: Vec3, c: Vec3, max_distance: f32) -> Option<f32> {
    let e1 = b - a;
    let e2 = c - a;

    let pvec = ray.direction.cross(e2);
    let det = e1.dot(pvec);
    // Scale by edge lengths so tiny triangles are not rejected as parallel
    let scale = (e1.length_squared() * e2.length_squared()).sqrt();
    if det.abs() <= RAY_TRIANGLE_EPSILON * scale {
        return None; // Parallel or degenerate
    }
    let inv_det = 1.0 / det;

    let tvec = ray.origin - a;
    let u = tvec.dot(pvec) * inv_det;
    if !(0.0..=1.0).contains(&u) {
        return None;
    }

    let qvec = tvec.cross(e1);
    let v = ray.direction.dot(qvec) * inv_det;
    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    let t = e2.dot(qvec) * inv_det;
    if t < 0.0 || t > max_distance {
        return None;
    }
    Some(t)
}
