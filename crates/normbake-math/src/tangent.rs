//! Tangent-space construction.
//!
//! A triangle's tangent follows the direction of increasing U across its
//! surface. Per sample, that tangent is Gram-Schmidt orthonormalized against
//! the interpolated vertex normal and completed with `bitangent = N × T`
//! (right-handed, +V up), which is the basis normal maps are encoded in.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use normbake_types::constants::DEGENERATE_LENGTH_SQ;

/// Computes the unit tangent of a triangle from its positions and UVs.
///
/// With `e1 = B - A`, `e2 = C - A`, `d1 = uvB - uvA`, `d2 = uvC - uvA`:
///
/// ```text
/// f = 1 / (d1.x * d2.y - d2.x * d1.y)
/// T = normalize(f * (d2.y * e1 - d1.y * e2))
/// ```
///
/// A zero-area UV triangle makes `f` non-finite; `f = 1.0` is used
/// instead. A zero-length result stays zero.
pub fn triangle_tangent(positions: [Vec3; 3], uvs: [Vec2; 3]) -> Vec3 {
    let e1 = positions[1] - positions[0];
    let e2 = positions[2] - positions[0];
    let d1 = uvs[1] - uvs[0];
    let d2 = uvs[2] - uvs[0];

    let mut f = 1.0 / (d1.x * d2.y - d2.x * d1.y);
    if !f.is_finite() {
        f = 1.0;
    }

    (f * (d2.y * e1 - d1.y * e2)).normalize_or_zero()
}

/// An orthonormal (tangent, bitangent, normal) basis at one surface sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TangentFrame {
    /// +U direction, orthogonal to `normal`.
    pub tangent: Vec3,
    /// +V direction, `normal × tangent`.
    pub bitangent: Vec3,
    /// Unit surface normal.
    pub normal: Vec3,
}

impl TangentFrame {
    /// Builds a frame from a unit normal and a (possibly non-orthogonal) tangent.
    ///
    /// The tangent loses its component along the normal and is renormalized.
    /// When nothing is left of it (tangent parallel to the normal, or a zero
    /// tangent from a degenerate triangle) an arbitrary unit vector orthogonal
    /// to the normal takes its place.
    pub fn from_normal_tangent(normal: Vec3, tangent: Vec3) -> Self {
        let projected = tangent - normal * normal.dot(tangent);
        let tangent = if projected.length_squared() > DEGENERATE_LENGTH_SQ && projected.is_finite() {
            projected.normalize()
        } else {
            normal.any_orthonormal_vector()
        };
        let bitangent = normal.cross(tangent).normalize_or_zero();

        Self {
            tangent,
            bitangent,
            normal,
        }
    }

    /// Expresses a world-space direction in this frame.
    #[inline]
    pub fn to_tangent_space(&self, v: Vec3) -> Vec3 {
        Vec3::new(self.tangent.dot(v), self.bitangent.dot(v), self.normal.dot(v))
    }
}
