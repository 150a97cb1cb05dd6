//! Per-bake counters.

use serde::{Deserialize, Serialize};

/// Counters accumulated over one bake.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BakeStats {
    /// Texel centers examined inside target triangle UV bounds.
    pub texels_tested: u64,
    /// Texels that received a baked normal.
    pub texels_written: u64,
    /// Cage rays cast into the spatial index.
    pub rays_cast: u64,
    /// Hits discarded because they struck a back face.
    pub backface_rejected: u64,
    /// Rays that produced no usable hit.
    pub misses: u64,
}

impl BakeStats {
    /// Fraction of cast rays that resolved to a reference surface.
    pub fn hit_rate(&self) -> f64 {
        if self.rays_cast == 0 {
            0.0
        } else {
            (self.rays_cast - self.misses) as f64 / self.rays_cast as f64
        }
    }
}
