//! Error types for the normbake engine.
//!
//! All crates return `BakeResult<T>` from fallible operations.

use thiserror::Error;

use crate::ids::MeshRole;

/// Unified error type for the normbake engine and its host collaborators.
#[derive(Debug, Error)]
pub enum BakeError {
    /// The mesh cannot be textured because it has no UV coordinates.
    #[error("The {mesh} mesh has no UV coordinates")]
    MissingUvs { mesh: MeshRole },

    /// The mesh has no triangles to bake from or onto.
    #[error("The {mesh} mesh has no triangles")]
    EmptyMesh { mesh: MeshRole },

    /// Mesh data is malformed or inconsistent.
    #[error("Invalid mesh: {0}")]
    InvalidMesh(String),

    /// A bake option is out of its valid range.
    #[error("Invalid option `{option}`: {value}")]
    InvalidOption { option: &'static str, value: String },

    /// The spatial index was built from a different mesh than the reference.
    #[error("Spatial index covers {index} triangles, but the reference mesh has {reference}")]
    IndexMismatch { index: usize, reference: usize },

    /// Unexpected failure while a scheduling tick was running.
    /// The partial buffer is discarded.
    #[error("Bake failed during tick {tick}: {reason}")]
    Runtime { tick: u32, reason: String },

    /// The result was requested before the bake reached `Complete`.
    #[error("Bake is not complete (state: {state})")]
    NotComplete { state: String },

    /// A loaded file contained no usable mesh.
    #[error("No mesh found in {0}")]
    NoMeshFound(String),

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization failure.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl BakeError {
    /// Returns true for errors raised before any baking work starts.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            BakeError::MissingUvs { .. }
                | BakeError::EmptyMesh { .. }
                | BakeError::InvalidMesh(_)
                | BakeError::InvalidOption { .. }
                | BakeError::IndexMismatch { .. }
        )
    }
}

/// Convenience alias for `Result<T, BakeError>`.
pub type BakeResult<T> = Result<T, BakeError>;
