//! Position-welded smoothed normals.
//!
//! Hard edges and UV seams split vertices: two triangles meeting at the same
//! point often reference different vertex indices with different normals.
//! Cage rays steered by those normals fan apart at the seam and leave gaps.
//! The table below welds vertices by quantized position and averages the
//! normals of every triangle touching each welded point.
//!
//! The smoothed normals only steer ray direction; the tangent basis of the
//! output is always built from the mesh's own normals.

use std::collections::HashMap;

use normbake_math::Vec3;
use normbake_types::constants::WELD_PRECISION;

use crate::mesh::Mesh;

/// Quantized position used as the weld key.
pub type WeldKey = (i64, i64, i64);

/// Quantizes a position to the weld grid (1e-4 units).
#[inline]
pub fn weld_key(p: Vec3) -> WeldKey {
    (
        (p.x * WELD_PRECISION).round() as i64,
        (p.y * WELD_PRECISION).round() as i64,
        (p.z * WELD_PRECISION).round() as i64,
    )
}

/// Area-weighted normals accumulated per welded position.
///
/// Built once per bake from the target mesh.
#[derive(Debug, Clone)]
pub struct SmoothedNormalTable {
    /// Normalized normal per weld key.
    by_key: HashMap<WeldKey, Vec3>,
    /// Smoothed normal per original vertex index.
    per_vertex: Vec<Vec3>,
}

impl SmoothedNormalTable {
    /// Builds the table from a mesh's positions and triangles.
    ///
    /// Each triangle contributes `(C - B) × (A - B)` (magnitude = 2 × area)
    /// to the keys of its three corners; degenerate triangles contribute zero.
    pub fn build(mesh: &Mesh) -> Self {
        let n = mesh.vertex_count();

        let mut keys = Vec::with_capacity(n);
        let mut by_key: HashMap<WeldKey, Vec3> = HashMap::new();
        for i in 0..n {
            let key = weld_key(mesh.position(i));
            by_key.entry(key).or_insert(Vec3::ZERO);
            keys.push(key);
        }

        for t in 0..mesh.triangle_count() {
            let [ia, ib, ic] = mesh.triangle(t);
            let [pa, pb, pc] = mesh.triangle_positions(t);
            let face = (pc - pb).cross(pa - pb);

            for i in [ia, ib, ic] {
                if let Some(acc) = by_key.get_mut(&keys[i as usize]) {
                    *acc += face;
                }
            }
        }

        for normal in by_key.values_mut() {
            *normal = normal.normalize_or_zero();
        }

        let per_vertex = keys.iter().map(|key| by_key[key]).collect();

        Self { by_key, per_vertex }
    }

    /// Returns the smoothed normal of vertex `i`.
    #[inline]
    pub fn normal_for_vertex(&self, i: usize) -> Vec3 {
        self.per_vertex[i]
    }

    /// Looks up the smoothed normal at a position, if any vertex welds there.
    pub fn normal_at(&self, p: Vec3) -> Option<Vec3> {
        self.by_key.get(&weld_key(p)).copied()
    }

    /// Smoothed normals in vertex order.
    pub fn per_vertex(&self) -> &[Vec3] {
        &self.per_vertex
    }

    /// Number of distinct welded positions.
    pub fn welded_count(&self) -> usize {
        self.by_key.len()
    }
}
