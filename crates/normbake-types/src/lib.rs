//! # normbake-types
//!
//! Shared types, identifiers, error types, and numeric constants
//! for the normbake normal-map baking engine.
//!
//! This crate has zero domain logic: it defines the vocabulary
//! that all other normbake crates share.

pub mod constants;
pub mod error;
pub mod ids;

pub use error::{BakeError, BakeResult};
pub use ids::{MeshRole, TriangleId, VertexId};
