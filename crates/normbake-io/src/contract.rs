//! Bake job and summary contract types.
//!
//! A job is a TOML file naming the two meshes, the output image and the
//! bake options. A summary is what a finished bake reports back.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use normbake_bake::{BakeOptions, BakeStats};
use normbake_types::{BakeError, BakeResult};

/// One bake, as described in a job file.
///
/// ```toml
/// reference = "statue_high.obj"
/// target = "statue_low.obj"
/// output = "statue_normal.png"
///
/// [options]
/// size = 2048
/// max_front = 0.05
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BakeJob {
    /// High-detail mesh rays are cast against.
    pub reference: PathBuf,
    /// Low-detail mesh whose UVs lay out the texture.
    pub target: PathBuf,
    /// Output image (`.png`) or raw RGBA dump (any other extension).
    pub output: PathBuf,
    /// Bake options; omitted fields take their defaults.
    #[serde(default)]
    pub options: BakeOptions,
}

impl BakeJob {
    /// Parses a job from TOML text.
    pub fn from_toml_str(text: &str) -> BakeResult<Self> {
        toml::from_str(text).map_err(|e| BakeError::Serialization(format!("Bake job: {e}")))
    }

    /// Loads a job file. Relative paths inside it resolve against the
    /// file's own directory.
    pub fn load(path: &Path) -> BakeResult<Self> {
        let text = std::fs::read_to_string(path)?;
        let job = Self::from_toml_str(&text)?;
        Ok(match path.parent() {
            Some(dir) => job.relative_to(dir),
            None => job,
        })
    }

    /// Serializes the job back to TOML.
    pub fn to_toml_string(&self) -> BakeResult<String> {
        toml::to_string(self).map_err(|e| BakeError::Serialization(format!("Bake job: {e}")))
    }

    /// Resolves relative paths against `dir`.
    pub fn relative_to(self, dir: &Path) -> Self {
        let resolve = |p: PathBuf| if p.is_relative() { dir.join(p) } else { p };
        Self {
            reference: resolve(self.reference),
            target: resolve(self.target),
            output: resolve(self.output),
            options: self.options,
        }
    }
}

/// Outcome of a finished bake, serializable for pipelines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BakeSummary {
    /// Where the image was written.
    pub output: PathBuf,
    /// Texture edge length.
    pub size: u32,
    /// Scheduler ticks, preprocessing included.
    pub ticks: u32,
    /// Wall-clock time summed over all ticks (seconds).
    pub wall_time: f64,
    pub stats: BakeStats,
}

impl BakeSummary {
    pub fn to_json(&self) -> BakeResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| BakeError::Serialization(e.to_string()))
    }
}
