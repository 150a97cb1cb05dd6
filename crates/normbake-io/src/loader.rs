//! Mesh loading.
//!
//! Supported formats, chosen by file extension:
//! - `.obj`: Wavefront OBJ; the first object with faces is used.
//!   Faces are triangulated and attributes re-indexed to one index per corner.
//! - `.json`: a serialized [`Mesh`].

use std::io;
use std::path::Path;

use normbake_mesh::Mesh;
use normbake_types::{BakeError, BakeResult};

/// Loads a mesh, dispatching on the file extension.
pub fn load_mesh(path: &Path) -> BakeResult<Mesh> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    let mesh = match extension.as_deref() {
        Some("obj") => load_obj(path)?,
        Some("json") => load_json(path)?,
        _ => {
            return Err(BakeError::Serialization(format!(
                "Unsupported mesh format: {} (expected .obj or .json)",
                path.display()
            )))
        }
    };

    tracing::debug!(
        path = %path.display(),
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        normals = mesh.has_normals(),
        uvs = mesh.has_uvs(),
        "loaded mesh"
    );
    Ok(mesh)
}

fn load_obj(path: &Path) -> BakeResult<Mesh> {
    let (models, _materials) = tobj::load_obj(path, &tobj::GPU_LOAD_OPTIONS).map_err(|e| match e {
        tobj::LoadError::OpenFileFailed => BakeError::Io(io::Error::new(
            io::ErrorKind::NotFound,
            format!("cannot open {}", path.display()),
        )),
        other => BakeError::Serialization(format!("{}: {other}", path.display())),
    })?;

    let model = models
        .into_iter()
        .find(|m| !m.mesh.indices.is_empty())
        .ok_or_else(|| BakeError::NoMeshFound(path.display().to_string()))?;
    let obj = &model.mesh;

    let normals = (!obj.normals.is_empty()).then_some(&obj.normals[..]);
    let uvs = (!obj.texcoords.is_empty()).then_some(&obj.texcoords[..]);
    let mesh = Mesh::from_interleaved(&obj.positions, normals, uvs, Some(&obj.indices[..]))?;
    mesh.validate()?;
    Ok(mesh)
}

fn load_json(path: &Path) -> BakeResult<Mesh> {
    let text = std::fs::read_to_string(path)?;
    let mesh: Mesh = serde_json::from_str(&text)
        .map_err(|e| BakeError::Serialization(format!("{}: {e}", path.display())))?;
    if mesh.vertex_count() == 0 {
        return Err(BakeError::NoMeshFound(path.display().to_string()));
    }
    mesh.validate()?;
    Ok(mesh)
}

/// Writes a mesh as JSON, readable by [`load_mesh`].
pub fn save_mesh_json(mesh: &Mesh, path: &Path) -> BakeResult<()> {
    let json = serde_json::to_string(mesh).map_err(|e| BakeError::Serialization(e.to_string()))?;
    std::fs::write(path, json)?;
    Ok(())
}
