//! The spatial index contract.

use normbake_math::Vec3;
use normbake_mesh::Mesh;
use normbake_types::{BakeResult, TriangleId};

use crate::intersect::intersect_triangle;

/// A ray with a unit-length direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Creates a ray, normalizing `direction` so hit distances are world units.
    #[inline]
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    /// Point at distance `t` along the ray.
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// One ray/triangle intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Intersection point in world space.
    pub point: Vec3,
    /// Distance travelled from the ray origin.
    pub distance: f32,
    /// Triangle that was hit, in the indexed mesh's triangle order.
    pub triangle: TriangleId,
    /// Unit geometric normal of the hit triangle, `(B - A) × (C - A)`.
    pub face_normal: Vec3,
}

/// Trait for ray-query acceleration over a triangle mesh.
///
/// Hits are double-sided (back faces are reported, classified by the
/// caller through `face_normal`) and come in no particular order.
pub trait SpatialIndex: Send + Sync {
    /// Build the index from a mesh's positions and triangles.
    fn build(mesh: &Mesh) -> BakeResult<Self>
    where
        Self: Sized;

    /// Replace the contents of `hits` with every intersection whose
    /// distance lies in `[0, max_distance]`.
    fn query_into(&self, ray: &Ray, max_distance: f32, hits: &mut Vec<RayHit>);

    /// Allocating convenience wrapper around [`query_into`](Self::query_into).
    fn query(&self, ray: &Ray, max_distance: f32) -> Vec<RayHit> {
        let mut hits = Vec::new();
        self.query_into(ray, max_distance, &mut hits);
        hits
    }

    /// Number of triangles indexed.
    fn triangle_count(&self) -> usize;

    /// Returns the index strategy name.
    fn name(&self) -> &str;
}

/// Triangle corners and face normals copied out of a mesh.
///
/// Indices own their geometry so they outlive the mesh they were built from.
#[derive(Debug, Clone, Default)]
pub struct TriangleSoup {
    pub corners: Vec<[Vec3; 3]>,
    pub face_normals: Vec<Vec3>,
}

impl TriangleSoup {
    /// Copies triangles out of a validated mesh.
    pub fn from_mesh(mesh: &Mesh) -> BakeResult<Self> {
        mesh.validate()?;
        let count = mesh.triangle_count();
        let mut corners = Vec::with_capacity(count);
        let mut face_normals = Vec::with_capacity(count);
        for t in 0..count {
            corners.push(mesh.triangle_positions(t));
            face_normals.push(mesh.face_normal(t));
        }
        Ok(Self {
            corners,
            face_normals,
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.corners.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.corners.is_empty()
    }

    /// Tests one triangle and builds the hit record.
    #[inline]
    pub fn hit(&self, t: usize, ray: &Ray, max_distance: f32) -> Option<RayHit> {
        let [a, b, c] = self.corners[t];
        let distance = intersect_triangle(ray, a, b, c, max_distance)?;
        Some(RayHit {
            point: ray.at(distance),
            distance,
            triangle: TriangleId(t as u32),
            face_normal: self.face_normals[t],
        })
    }
}
