//! Vertex normal generation from triangle mesh data.
//!
//! Computes area-weighted vertex normals by accumulating
//! face cross products from each adjacent triangle.

use std::borrow::Cow;

use normbake_math::Vec3;

use crate::mesh::Mesh;

/// Recompute vertex normals from triangle geometry (area-weighted).
///
/// Each triangle's unnormalized cross product (magnitude = 2 × area) is
/// accumulated at its three vertex indices, following the mesh's own
/// winding. The result is normalized; vertices touched only by degenerate
/// triangles keep a zero normal.
///
/// Allocates the normal channels if the mesh had none.
pub fn compute_vertex_normals(mesh: &mut Mesh) {
    let n = mesh.vertex_count();

    mesh.normal_x.clear();
    mesh.normal_y.clear();
    mesh.normal_z.clear();
    mesh.normal_x.resize(n, 0.0);
    mesh.normal_y.resize(n, 0.0);
    mesh.normal_z.resize(n, 0.0);

    // Accumulate area-weighted face normals
    for t in 0..mesh.triangle_count() {
        let [ia, ib, ic] = mesh.triangle(t);
        let [pa, pb, pc] = mesh.triangle_positions(t);
        let face = (pb - pa).cross(pc - pa);

        for i in [ia as usize, ib as usize, ic as usize] {
            mesh.normal_x[i] += face.x;
            mesh.normal_y[i] += face.y;
            mesh.normal_z[i] += face.z;
        }
    }

    // Normalize
    for i in 0..n {
        let normal = mesh.normal(i);
        if normal.length_squared() > 1e-20 {
            mesh.set_normal(i, normal.normalize());
        } else {
            mesh.set_normal(i, Vec3::ZERO);
        }
    }
}

/// Computes vertex normals only if the mesh has none.
///
/// Returns true if normals were generated. Idempotent: a second call is a no-op.
pub fn ensure_normals(mesh: &mut Mesh) -> bool {
    if mesh.has_normals() {
        return false;
    }
    compute_vertex_normals(mesh);
    true
}

/// Borrows the mesh if it already has normals, otherwise returns
/// an owned copy with generated normals. The input is never modified.
pub fn with_normals(mesh: &Mesh) -> Cow<'_, Mesh> {
    if mesh.has_normals() {
        Cow::Borrowed(mesh)
    } else {
        let mut owned = mesh.clone();
        compute_vertex_normals(&mut owned);
        Cow::Owned(owned)
    }
}
