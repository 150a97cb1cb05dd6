//! Input validation, run before any baking work.

use normbake_mesh::Mesh;
use normbake_spatial::SpatialIndex;
use normbake_types::{BakeError, BakeResult, MeshRole};

use crate::config::BakeOptions;

/// Rejects options and meshes the engine cannot bake.
///
/// Nothing here touches the spatial index, so a failing check costs no
/// ray queries.
pub fn validate_inputs(reference: &Mesh, target: &Mesh, options: &BakeOptions) -> BakeResult<()> {
    options.validate()?;
    validate_mesh(target, MeshRole::Target)?;
    if !target.has_uvs() {
        return Err(BakeError::MissingUvs {
            mesh: MeshRole::Target,
        });
    }
    validate_mesh(reference, MeshRole::Reference)?;
    Ok(())
}

/// Structural checks plus "has at least one triangle".
pub fn validate_mesh(mesh: &Mesh, role: MeshRole) -> BakeResult<()> {
    mesh.validate().map_err(|e| match e {
        BakeError::InvalidMesh(msg) => BakeError::InvalidMesh(format!("{role} mesh: {msg}")),
        other => other,
    })?;
    if mesh.triangle_count() == 0 {
        return Err(BakeError::EmptyMesh { mesh: role });
    }
    Ok(())
}

/// Checks that `index` covers exactly the reference mesh's triangles.
pub fn validate_index(reference: &Mesh, index: &dyn SpatialIndex) -> BakeResult<()> {
    if index.triangle_count() != reference.triangle_count() {
        return Err(BakeError::IndexMismatch {
            index: index.triangle_count(),
            reference: reference.triangle_count(),
        });
    }
    Ok(())
}
