//! Bake configuration.
//!
//! Parameters that control one bake: output resolution, cage extent and
//! the two ray-steering switches.

use serde::{Deserialize, Serialize};

use normbake_types::constants::{MAX_TEXTURE_SIZE, MIN_CAGE_DISTANCE};
use normbake_types::{BakeError, BakeResult};

/// Configuration for a normal map bake.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BakeOptions {
    /// Edge length of the square output texture, in texels. Power of two.
    pub size: u32,

    /// How far in front of the target surface rays start (world units).
    pub max_front: f32,

    /// How far behind the target surface rays keep searching (world units).
    pub max_rear: f32,

    /// Discard hits on reference triangles facing away from the cage.
    pub ignore_backface: bool,

    /// Steer rays with position-welded smoothed normals instead of the
    /// target's own normals. Closes gaps along hard edges and UV seams.
    pub use_average_normals: bool,
}

impl Default for BakeOptions {
    fn default() -> Self {
        Self {
            size: 1024,
            max_front: 0.1,
            max_rear: 0.1,
            ignore_backface: true,
            use_average_normals: true,
        }
    }
}

impl BakeOptions {
    /// Small, fast bake for previews.
    pub fn preview() -> Self {
        Self {
            size: 256,
            ..Default::default()
        }
    }

    /// Production-resolution bake.
    pub fn high_quality() -> Self {
        Self {
            size: 4096,
            ..Default::default()
        }
    }

    /// Same options at another resolution.
    pub fn with_size(self, size: u32) -> Self {
        Self { size, ..self }
    }

    /// Same options with another cage extent.
    pub fn with_cage(self, max_front: f32, max_rear: f32) -> Self {
        Self {
            max_front,
            max_rear,
            ..self
        }
    }

    /// Checks every option against its valid range.
    pub fn validate(&self) -> BakeResult<()> {
        if self.size == 0 || !self.size.is_power_of_two() || self.size > MAX_TEXTURE_SIZE {
            return Err(BakeError::InvalidOption {
                option: "size",
                value: format!("{} (expected a power of two up to {MAX_TEXTURE_SIZE})", self.size),
            });
        }
        check_distance("max_front", self.max_front)?;
        check_distance("max_rear", self.max_rear)?;
        Ok(())
    }

    /// `max_front`, clamped up to the smallest usable cage distance.
    #[inline]
    pub fn effective_front(&self) -> f32 {
        self.max_front.max(MIN_CAGE_DISTANCE)
    }

    /// `max_rear`, clamped up to the smallest usable cage distance.
    #[inline]
    pub fn effective_rear(&self) -> f32 {
        self.max_rear.max(MIN_CAGE_DISTANCE)
    }
}

fn check_distance(option: &'static str, value: f32) -> BakeResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(BakeError::InvalidOption {
            option,
            value: format!("{value} (expected a finite distance > 0)"),
        })
    }
}
