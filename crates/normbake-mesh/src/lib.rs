//! # normbake-mesh
//!
//! Triangle mesh representation with Structure-of-Arrays (SoA) layout,
//! plus the geometry preprocessing the baker runs before sampling.
//!
//! ## Key Types
//!
//! - [`Mesh`]: Positions, optional normals/UVs and an optional index
//!   buffer in contiguous SoA arrays.
//! - [`SmoothedNormalTable`]: Position-welded, area-weighted normals used
//!   to steer cage rays across hard edges.
//! - Procedural generators for tests and benchmarks (quad grids, bumped
//!   grids, UV spheres).

pub mod generators;
pub mod mesh;
pub mod normals;
pub mod smoothing;

pub use mesh::Mesh;
pub use normals::{compute_vertex_normals, ensure_normals};
pub use smoothing::SmoothedNormalTable;
