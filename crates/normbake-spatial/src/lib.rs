//! # normbake-spatial
//!
//! Ray queries against the reference mesh.
//!
//! The baker only depends on the [`SpatialIndex`] contract: build once per
//! mesh, then answer "every triangle this bounded ray crosses" as many times
//! as there are texels. Implementations are immutable after `build`, so one
//! index can serve many bakes (see [`IndexCache`]).
//!
//! # Implementations
//! - [`BvhIndex`]: Bounding volume hierarchy, the default.
//! - [`LinearIndex`]: Tests every triangle; reference for cross-checking.

pub mod aabb;
pub mod bvh;
pub mod cache;
pub mod index;
pub mod intersect;
pub mod linear;

pub use bvh::BvhIndex;
pub use cache::IndexCache;
pub use index::{Ray, RayHit, SpatialIndex, TriangleSoup};
pub use linear::LinearIndex;
