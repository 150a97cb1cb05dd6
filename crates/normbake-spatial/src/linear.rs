//! Brute-force index: every query tests every triangle.
//!
//! Too slow for real reference meshes, but trivially correct, which makes
//! it the yardstick the BVH is checked against.

use normbake_mesh::Mesh;
use normbake_types::BakeResult;

use crate::index::{Ray, RayHit, SpatialIndex, TriangleSoup};

pub struct LinearIndex {
    soup: TriangleSoup,
}

impl SpatialIndex for LinearIndex {
    fn build(mesh: &Mesh) -> BakeResult<Self> {
        Ok(Self {
            soup: TriangleSoup::from_mesh(mesh)?,
        })
    }

    fn query_into(&self, ray: &Ray, max_distance: f32, hits: &mut Vec<RayHit>) {
        hits.clear();
        hits.extend((0..self.soup.len()).filter_map(|t| self.soup.hit(t, ray, max_distance)));
    }

    fn triangle_count(&self) -> usize {
        self.soup.len()
    }

    fn name(&self) -> &str {
        "linear"
    }
}
