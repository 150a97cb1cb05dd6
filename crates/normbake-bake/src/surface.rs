//! Reference surface normal at a hit point.

use normbake_math::{barycentric_3d, interpolate, Vec3};
use normbake_mesh::Mesh;
use normbake_spatial::RayHit;

/// Smooth reference normal at a hit: the reference vertex normals blended by
/// the hit point's barycentric weights.
///
/// Falls back to the hit triangle's flat normal when the triangle is
/// degenerate or the blend cancels out. Returns `None` if the hit names a
/// triangle the mesh does not have (the index was built from another mesh).
pub fn hit_surface_normal(reference: &Mesh, hit: &RayHit) -> Option<Vec3> {
    let t = hit.triangle.index();
    if t >= reference.triangle_count() {
        return None;
    }
    if !reference.has_normals() {
        return Some(hit.face_normal);
    }

    let [a, b, c] = reference.triangle(t);
    let [pa, pb, pc] = reference.triangle_positions(t);

    let smooth = barycentric_3d(hit.point, pa, pb, pc)
        .map(|w| {
            interpolate(
                w,
                reference.normal(a as usize),
                reference.normal(b as usize),
                reference.normal(c as usize),
            )
            .normalize_or_zero()
        })
        .filter(|n| *n != Vec3::ZERO && n.is_finite());

    Some(smooth.unwrap_or(hit.face_normal))
}
