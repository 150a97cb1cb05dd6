//! Benchmark scenarios: procedural reference/target pairs and options.
//!
//! 1. **Flat plane**: identical planes; every ray hits, output is neutral
//! 2. **Bumped plane**: a dense grid with a raised center onto a single quad
//! 3. **Sphere shell**: a fine sphere onto a coarse one
//! 4. **Cube on sphere**: hard-edged cube target, smooth sphere reference;
//!    exercises averaged ray directions across split corners

use serde::{Deserialize, Serialize};

use normbake_bake::BakeOptions;
use normbake_mesh::generators::{bumped_grid, hard_cube, quad_grid, uv_sphere};
use normbake_mesh::Mesh;

/// Which benchmark scenario to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScenarioKind {
    FlatPlane,
    BumpedPlane,
    SphereShell,
    CubeOnSphere,
}

impl ScenarioKind {
    /// Returns all scenario kinds.
    pub fn all() -> &'static [ScenarioKind] {
        &[
            ScenarioKind::FlatPlane,
            ScenarioKind::BumpedPlane,
            ScenarioKind::SphereShell,
            ScenarioKind::CubeOnSphere,
        ]
    }

    /// Returns a human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            ScenarioKind::FlatPlane => "flat_plane",
            ScenarioKind::BumpedPlane => "bumped_plane",
            ScenarioKind::SphereShell => "sphere_shell",
            ScenarioKind::CubeOnSphere => "cube_on_sphere",
        }
    }

    /// Looks a scenario up by [`name`](Self::name).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|kind| kind.name() == name)
    }
}

/// A fully specified benchmark scenario.
pub struct Scenario {
    pub kind: ScenarioKind,
    /// High-detail mesh rays are cast against.
    pub reference: Mesh,
    /// Low-detail mesh providing the UV layout.
    pub target: Mesh,
    pub options: BakeOptions,
}

impl Scenario {
    /// Two identical 16×16 planes at 512².
    pub fn flat_plane() -> Self {
        let mesh = quad_grid(16, 16, 1.0, 1.0);
        Self {
            kind: ScenarioKind::FlatPlane,
            reference: mesh.clone(),
            target: mesh,
            options: BakeOptions::default().with_size(512),
        }
    }

    /// A 64×64 grid with a bump in the middle, baked onto one quad at 512².
    pub fn bumped_plane() -> Self {
        Self {
            kind: ScenarioKind::BumpedPlane,
            reference: bumped_grid(64, 64, 1.0, 1.0, 0.05),
            target: quad_grid(1, 1, 1.0, 1.0),
            options: BakeOptions::default().with_size(512).with_cage(0.1, 0.1),
        }
    }

    /// A 64×96 sphere onto a 12×16 sphere of the same radius at 512².
    pub fn sphere_shell() -> Self {
        Self {
            kind: ScenarioKind::SphereShell,
            reference: uv_sphere(1.0, 64, 96),
            target: uv_sphere(1.0, 12, 16),
            options: BakeOptions::default().with_size(512).with_cage(0.1, 0.1),
        }
    }

    /// A sphere of radius 0.6 onto a unit cube at 512².
    pub fn cube_on_sphere() -> Self {
        Self {
            kind: ScenarioKind::CubeOnSphere,
            reference: uv_sphere(0.6, 48, 64),
            target: hard_cube(1.0),
            options: BakeOptions::default().with_size(512).with_cage(0.5, 0.5),
        }
    }

    /// Create a scenario from its kind.
    pub fn from_kind(kind: ScenarioKind) -> Self {
        match kind {
            ScenarioKind::FlatPlane => Self::flat_plane(),
            ScenarioKind::BumpedPlane => Self::bumped_plane(),
            ScenarioKind::SphereShell => Self::sphere_shell(),
            ScenarioKind::CubeOnSphere => Self::cube_on_sphere(),
        }
    }

    /// Same scenario at another texture size.
    pub fn with_size(mut self, size: u32) -> Self {
        self.options.size = size;
        self
    }
}
