//! Reuse of a spatial index across bakes of the same reference mesh.

use normbake_mesh::Mesh;
use normbake_types::BakeResult;

use crate::index::SpatialIndex;

/// Holds the index of the most recently baked reference mesh.
///
/// The cached index is rebuilt whenever the mesh's geometry fingerprint
/// changes, so editing positions or topology can never serve a stale index.
pub struct IndexCache<I: SpatialIndex> {
    entry: Option<(u64, I)>,
    builds: u32,
}

impl<I: SpatialIndex> IndexCache<I> {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self {
            entry: None,
            builds: 0,
        }
    }

    /// Returns the index for `mesh`, building it if the cache is empty or stale.
    pub fn get_or_build(&mut self, mesh: &Mesh) -> BakeResult<&I> {
        let fingerprint = mesh.geometry_fingerprint();
        let entry = match self.entry.take() {
            Some((cached, index)) if cached == fingerprint => (cached, index),
            _ => {
                tracing::debug!(fingerprint, "building spatial index for reference mesh");
                let index = I::build(mesh)?;
                self.builds += 1;
                (fingerprint, index)
            }
        };
        Ok(&self.entry.insert(entry).1)
    }

    /// Returns true if the cached index was built from `mesh`'s current geometry.
    pub fn is_cached_for(&self, mesh: &Mesh) -> bool {
        matches!(&self.entry, Some((cached, _)) if *cached == mesh.geometry_fingerprint())
    }

    /// Drops the cached index.
    pub fn invalidate(&mut self) {
        self.entry = None;
    }

    /// Number of index builds performed so far.
    pub fn build_count(&self) -> u32 {
        self.builds
    }
}

impl<I: SpatialIndex> Default for IndexCache<I> {
    fn default() -> Self {
        Self::new()
    }
}
