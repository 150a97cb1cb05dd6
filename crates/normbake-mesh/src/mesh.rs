//! Core triangle mesh type with SoA (Structure of Arrays) layout.
//!
//! The SoA layout stores each coordinate channel contiguously:
//! - `pos_x: [x0, x1, x2, ...]`
//! - `pos_y: [y0, y1, y2, ...]`
//! - `pos_z: [z0, z1, z2, ...]`
//!
//! Normals and UVs are optional attributes: an empty channel means the
//! attribute is absent. The index buffer is optional too; without it,
//! consecutive vertex triples form the triangles.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use normbake_math::{Vec2, Vec3};
use normbake_types::{BakeError, BakeResult};
use serde::{Deserialize, Serialize};

/// A triangle mesh stored in Structure-of-Arrays layout.
///
/// Positions are in world space: any object or scene-graph transform has
/// already been applied by the loader.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Mesh {
    // --- Vertex data (SoA) ---
    /// X coordinates of all vertices.
    pub pos_x: Vec<f32>,
    /// Y coordinates of all vertices.
    pub pos_y: Vec<f32>,
    /// Z coordinates of all vertices.
    pub pos_z: Vec<f32>,

    /// X components of vertex normals (empty when absent).
    #[serde(default)]
    pub normal_x: Vec<f32>,
    /// Y components of vertex normals.
    #[serde(default)]
    pub normal_y: Vec<f32>,
    /// Z components of vertex normals.
    #[serde(default)]
    pub normal_z: Vec<f32>,

    /// U texture coordinates (empty when absent).
    #[serde(default)]
    pub uv_u: Vec<f32>,
    /// V texture coordinates.
    #[serde(default)]
    pub uv_v: Vec<f32>,

    // --- Triangle data ---
    /// Triangle indices, flat `[t0v0, t0v1, t0v2, t1v0, ...]`.
    /// Empty for non-indexed meshes.
    #[serde(default)]
    pub indices: Vec<u32>,
}

impl Mesh {
    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.pos_x.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        if self.is_indexed() {
            self.indices.len() / 3
        } else {
            self.vertex_count() / 3
        }
    }

    /// Returns true if triangles come from an index buffer.
    #[inline]
    pub fn is_indexed(&self) -> bool {
        !self.indices.is_empty()
    }

    /// Returns true if the mesh carries per-vertex normals.
    #[inline]
    pub fn has_normals(&self) -> bool {
        !self.normal_x.is_empty()
    }

    /// Returns true if the mesh carries per-vertex UVs.
    #[inline]
    pub fn has_uvs(&self) -> bool {
        !self.uv_u.is_empty()
    }

    /// Returns the position of vertex `i`.
    #[inline]
    pub fn position(&self, i: usize) -> Vec3 {
        Vec3::new(self.pos_x[i], self.pos_y[i], self.pos_z[i])
    }

    /// Returns the normal of vertex `i`. Panics if the mesh has no normals.
    #[inline]
    pub fn normal(&self, i: usize) -> Vec3 {
        Vec3::new(self.normal_x[i], self.normal_y[i], self.normal_z[i])
    }

    /// Returns the UV of vertex `i`. Panics if the mesh has no UVs.
    #[inline]
    pub fn uv(&self, i: usize) -> Vec2 {
        Vec2::new(self.uv_u[i], self.uv_v[i])
    }

    /// Returns the three vertex indices of triangle `t`.
    #[inline]
    pub fn triangle(&self, t: usize) -> [u32; 3] {
        let base = t * 3;
        if self.is_indexed() {
            [self.indices[base], self.indices[base + 1], self.indices[base + 2]]
        } else {
            let base = base as u32;
            [base, base + 1, base + 2]
        }
    }

    /// Returns the three corner positions of triangle `t`.
    #[inline]
    pub fn triangle_positions(&self, t: usize) -> [Vec3; 3] {
        let [a, b, c] = self.triangle(t);
        [
            self.position(a as usize),
            self.position(b as usize),
            self.position(c as usize),
        ]
    }

    /// Returns the unit geometric normal `(B - A) × (C - A)` of triangle `t`.
    ///
    /// Zero for degenerate triangles.
    #[inline]
    pub fn face_normal(&self, t: usize) -> Vec3 {
        let [a, b, c] = self.triangle_positions(t);
        (b - a).cross(c - a).normalize_or_zero()
    }

    /// Sets the position of vertex `i`.
    #[inline]
    pub fn set_position(&mut self, i: usize, x: f32, y: f32, z: f32) {
        self.pos_x[i] = x;
        self.pos_y[i] = y;
        self.pos_z[i] = z;
    }

    /// Sets the normal of vertex `i`.
    #[inline]
    pub fn set_normal(&mut self, i: usize, n: Vec3) {
        self.normal_x[i] = n.x;
        self.normal_y[i] = n.y;
        self.normal_z[i] = n.z;
    }

    /// Drops the normal attribute.
    pub fn clear_normals(&mut self) {
        self.normal_x.clear();
        self.normal_y.clear();
        self.normal_z.clear();
    }

    /// Creates an empty mesh with pre-allocated capacity for all attributes.
    pub fn with_capacity(vertex_capacity: usize, triangle_capacity: usize) -> Self {
        Self {
            pos_x: Vec::with_capacity(vertex_capacity),
            pos_y: Vec::with_capacity(vertex_capacity),
            pos_z: Vec::with_capacity(vertex_capacity),
            normal_x: Vec::with_capacity(vertex_capacity),
            normal_y: Vec::with_capacity(vertex_capacity),
            normal_z: Vec::with_capacity(vertex_capacity),
            uv_u: Vec::with_capacity(vertex_capacity),
            uv_v: Vec::with_capacity(vertex_capacity),
            indices: Vec::with_capacity(triangle_capacity * 3),
        }
    }

    /// Validates mesh integrity.
    ///
    /// Checks:
    /// - Position channels have the same length
    /// - Optional channels are either empty or one entry per vertex
    /// - The index count is divisible by 3 (or the vertex count, when unindexed)
    /// - Triangle indices are within bounds
    ///
    /// Degenerate triangles are accepted; the baker has defined fallbacks for them.
    pub fn validate(&self) -> BakeResult<()> {
        let n = self.pos_x.len();

        if self.pos_y.len() != n || self.pos_z.len() != n {
            return Err(BakeError::InvalidMesh(
                "Position arrays have inconsistent lengths".into(),
            ));
        }

        let normal_lens = [self.normal_x.len(), self.normal_y.len(), self.normal_z.len()];
        if normal_lens.iter().any(|&len| len != normal_lens[0]) || (normal_lens[0] != 0 && normal_lens[0] != n)
        {
            return Err(BakeError::InvalidMesh(format!(
                "Normal arrays have lengths {:?}, expected 0 or {}",
                normal_lens, n
            )));
        }

        if self.uv_u.len() != self.uv_v.len() || (!self.uv_u.is_empty() && self.uv_u.len() != n) {
            return Err(BakeError::InvalidMesh(format!(
                "UV arrays have lengths [{}, {}], expected 0 or {}",
                self.uv_u.len(),
                self.uv_v.len(),
                n
            )));
        }

        if self.is_indexed() {
            if self.indices.len() % 3 != 0 {
                return Err(BakeError::InvalidMesh(
                    "Index count is not divisible by 3".into(),
                ));
            }
            for (i, &idx) in self.indices.iter().enumerate() {
                if idx as usize >= n {
                    return Err(BakeError::InvalidMesh(format!(
                        "Index {} at position {} is out of range (vertex count: {})",
                        idx, i, n
                    )));
                }
            }
        } else if n % 3 != 0 {
            return Err(BakeError::InvalidMesh(format!(
                "Non-indexed mesh has {} vertices, not a multiple of 3",
                n
            )));
        }

        Ok(())
    }

    /// Constructs a mesh from interleaved AoS buffers.
    ///
    /// `positions` is `[x0, y0, z0, x1, ...]`, `normals` likewise, `uvs` is
    /// `[u0, v0, u1, v1, ...]`. Omitted attributes stay absent.
    pub fn from_interleaved(
        positions: &[f32],
        normals: Option<&[f32]>,
        uvs: Option<&[f32]>,
        indices: Option<&[u32]>,
    ) -> BakeResult<Self> {
        if positions.len() % 3 != 0 {
            return Err(BakeError::InvalidMesh(
                "Interleaved positions length not divisible by 3".into(),
            ));
        }

        let n = positions.len() / 3;
        let tri_count = indices.map_or(n / 3, |idx| idx.len() / 3);
        let mut mesh = Self::with_capacity(n, tri_count);

        for p in positions.chunks_exact(3) {
            mesh.pos_x.push(p[0]);
            mesh.pos_y.push(p[1]);
            mesh.pos_z.push(p[2]);
        }

        if let Some(normals) = normals {
            if normals.len() != n * 3 {
                return Err(BakeError::InvalidMesh(format!(
                    "Interleaved normals length {} != {}",
                    normals.len(),
                    n * 3
                )));
            }
            for nrm in normals.chunks_exact(3) {
                mesh.normal_x.push(nrm[0]);
                mesh.normal_y.push(nrm[1]);
                mesh.normal_z.push(nrm[2]);
            }
        }

        if let Some(uvs) = uvs {
            if uvs.len() != n * 2 {
                return Err(BakeError::InvalidMesh(format!(
                    "Interleaved UVs length {} != {}",
                    uvs.len(),
                    n * 2
                )));
            }
            for uv in uvs.chunks_exact(2) {
                mesh.uv_u.push(uv[0]);
                mesh.uv_v.push(uv[1]);
            }
        }

        if let Some(indices) = indices {
            mesh.indices = indices.to_vec();
        }

        mesh.validate()?;
        Ok(mesh)
    }

    /// Returns a copy with every triangle's winding reversed.
    ///
    /// Normals are negated so they keep agreeing with the new winding.
    pub fn with_flipped_winding(&self) -> Self {
        let mut flipped = self.clone();

        if flipped.is_indexed() {
            for tri in flipped.indices.chunks_exact_mut(3) {
                tri.swap(1, 2);
            }
        } else {
            for t in 0..flipped.triangle_count() {
                let b = t * 3 + 1;
                let c = t * 3 + 2;
                for channel in [
                    &mut flipped.pos_x,
                    &mut flipped.pos_y,
                    &mut flipped.pos_z,
                    &mut flipped.normal_x,
                    &mut flipped.normal_y,
                    &mut flipped.normal_z,
                    &mut flipped.uv_u,
                    &mut flipped.uv_v,
                ] {
                    if !channel.is_empty() {
                        channel.swap(b, c);
                    }
                }
            }
        }

        for channel in [&mut flipped.normal_x, &mut flipped.normal_y, &mut flipped.normal_z] {
            for v in channel.iter_mut() {
                *v = -*v;
            }
        }

        flipped
    }

    /// Hash of the positions and topology.
    ///
    /// Two meshes with the same fingerprint produce the same spatial index,
    /// so cached indices key on it. Normals and UVs do not participate.
    pub fn geometry_fingerprint(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.vertex_count().hash(&mut hasher);
        for channel in [&self.pos_x, &self.pos_y, &self.pos_z] {
            for v in channel {
                v.to_bits().hash(&mut hasher);
            }
        }
        self.indices.hash(&mut hasher);
        hasher.finish()
    }
}
