//! # normbake-math
//!
//! Geometry math shared by the normbake crates.
//!
//! Provides:
//! - Re-exports of `glam` types (`Vec2`, `Vec3`, etc.)
//! - Barycentric solvers in UV space (2D) and world space (3D)
//! - Per-triangle tangents and per-sample orthonormal tangent frames

pub mod barycentric;
pub mod tangent;

// Re-export glam types as the canonical math types for normbake.
pub use glam::{Vec2, Vec3, Vec4};

pub use barycentric::{barycentric_2d, barycentric_3d, interpolate, is_inside};
pub use tangent::{triangle_tangent, TangentFrame};
