//! Bake event types.
//!
//! Events are small value types carrying just enough data to follow a bake
//! from a log or a progress display.

use serde::{Deserialize, Serialize};

/// A bake event, tagged with the scheduler tick that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BakeEvent {
    /// Scheduler tick (0 is the preprocessing tick).
    pub tick: u32,
    /// Event payload.
    pub kind: EventKind,
}

/// Lifecycle phase of a bake task, as seen by telemetry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BakePhase {
    Idle,
    Preprocessing,
    Baking,
    Complete,
    Failed,
}

/// Event payload variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EventKind {
    /// The task moved to a new phase.
    PhaseChanged { from: BakePhase, to: BakePhase },

    /// One baking tick finished.
    TickCompleted {
        /// Target triangles rasterized so far.
        triangles_done: u32,
        /// Target triangle count.
        triangles_total: u32,
        /// Wall-clock time spent in this tick (seconds).
        wall_time: f64,
    },

    /// The bake finished and the buffer is available.
    Complete {
        /// Wall-clock time summed over all ticks (seconds).
        wall_time: f64,
        /// Texels that received a baked normal.
        texels_written: u64,
    },

    /// The bake was rejected; the partial buffer was discarded.
    Failed { reason: String },
}

impl BakeEvent {
    /// Creates a new event for the given tick.
    pub fn new(tick: u32, kind: EventKind) -> Self {
        Self { tick, kind }
    }

    /// Returns true for `Complete` and `Failed` events.
    pub fn is_terminal(&self) -> bool {
        matches!(self.kind, EventKind::Complete { .. } | EventKind::Failed { .. })
    }
}
