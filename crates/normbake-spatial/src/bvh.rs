//! Bounding volume hierarchy over the reference mesh.
//!
//! Triangles are split at the median centroid along the longest axis of the
//! centroid bounds until a leaf holds at most [`MAX_LEAF_SIZE`] triangles.
//! Nodes live in one flat array, children ahead of their parent.

use normbake_mesh::Mesh;
use normbake_types::BakeResult;

use crate::aabb::Aabb;
use crate::index::{Ray, RayHit, SpatialIndex, TriangleSoup};

/// Largest number of triangles stored in a leaf.
pub const MAX_LEAF_SIZE: usize = 4;

/// Initial traversal stack capacity. The stack grows past this if needed.
const STACK_CAPACITY: usize = 64;

#[derive(Debug, Clone, Copy)]
struct BvhNode {
    aabb: Aabb,
    /// Child node indices; negative for leaves.
    left: i32,
    right: i32,
    /// Range of `order` covered by this node.
    start: u32,
    count: u32,
}

impl BvhNode {
    #[inline]
    fn is_leaf(&self) -> bool {
        self.left < 0
    }
}

/// BVH spatial index.
pub struct BvhIndex {
    soup: TriangleSoup,
    nodes: Vec<BvhNode>,
    root: usize,
    /// Triangle indices, permuted so each leaf owns a contiguous range.
    order: Vec<u32>,
}

impl BvhIndex {
    /// Number of nodes (interior + leaf).
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Depth of the deepest leaf (a lone root is depth 1).
    pub fn depth(&self) -> usize {
        fn walk(nodes: &[BvhNode], i: usize) -> usize {
            let node = &nodes[i];
            if node.is_leaf() {
                1
            } else {
                1 + walk(nodes, node.left as usize).max(walk(nodes, node.right as usize))
            }
        }
        if self.nodes.is_empty() {
            0
        } else {
            walk(&self.nodes, self.root)
        }
    }
}

/// Builds the subtree over `order[start..end]` and returns its node index.
///
/// Children are pushed before their parent.
fn build_range(
    nodes: &mut Vec<BvhNode>,
    order: &mut [u32],
    bounds: &[Aabb],
    start: usize,
    end: usize,
) -> usize {
    let aabb = order[start..end]
        .iter()
        .fold(Aabb::EMPTY, |acc, &t| acc.union(&bounds[t as usize]));
    let count = end - start;

    if count <= MAX_LEAF_SIZE {
        nodes.push(BvhNode {
            aabb,
            left: -1,
            right: -1,
            start: start as u32,
            count: count as u32,
        });
        return nodes.len() - 1;
    }

    let centroid_bounds = order[start..end].iter().fold(Aabb::EMPTY, |mut acc, &t| {
        acc.grow(bounds[t as usize].center());
        acc
    });
    let axis = centroid_bounds.longest_axis();
    order[start..end].sort_unstable_by(|&a, &b| {
        bounds[a as usize].center()[axis]
            .total_cmp(&bounds[b as usize].center()[axis])
            .then(a.cmp(&b))
    });

    let mid = (start + end) / 2;
    let left = build_range(nodes, order, bounds, start, mid);
    let right = build_range(nodes, order, bounds, mid, end);
    nodes.push(BvhNode {
        aabb,
        left: left as i32,
        right: right as i32,
        start: start as u32,
        count: count as u32,
    });
    nodes.len() - 1
}

impl SpatialIndex for BvhIndex {
    fn build(mesh: &Mesh) -> BakeResult<Self> {
        let soup = TriangleSoup::from_mesh(mesh)?;
        let count = soup.len();
        let bounds: Vec<Aabb> = soup.corners.iter().map(|c| Aabb::from_points(c)).collect();

        let mut order: Vec<u32> = (0..count as u32).collect();
        let mut nodes = Vec::with_capacity((2 * count / MAX_LEAF_SIZE).max(1));
        let root = if count > 0 {
            build_range(&mut nodes, &mut order, &bounds, 0, count)
        } else {
            0
        };
        let bvh = Self {
            soup,
            nodes,
            root,
            order,
        };

        tracing::debug!(
            triangles = count,
            nodes = bvh.nodes.len(),
            "built bvh index"
        );
        Ok(bvh)
    }

    fn query_into(&self, ray: &Ray, max_distance: f32, hits: &mut Vec<RayHit>) {
        hits.clear();
        if self.nodes.is_empty() {
            return;
        }

        let mut stack = Vec::with_capacity(STACK_CAPACITY);
        stack.push(self.root);

        while let Some(i) = stack.pop() {
            let node = &self.nodes[i];
            if !node.aabb.intersects_ray(ray, max_distance) {
                continue;
            }

            if node.is_leaf() {
                let start = node.start as usize;
                for &t in &self.order[start..start + node.count as usize] {
                    if let Some(hit) = self.soup.hit(t as usize, ray, max_distance) {
                        hits.push(hit);
                    }
                }
            } else {
                stack.push(node.right as usize);
                stack.push(node.left as usize);
            }
        }
    }

    fn triangle_count(&self) -> usize {
        self.soup.len()
    }

    fn name(&self) -> &str {
        "bvh"
    }
}
