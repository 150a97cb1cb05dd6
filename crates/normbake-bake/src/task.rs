//! The progressive bake task.
//!
//! A task is a small state machine:
//!
//! ```text
//! Idle ──step──▶ Preprocessing ──▶ Baking(1) ──step──▶ Baking(2) … ──▶ Complete
//!                                      └──────── runtime error ────────▶ Failed
//! ```
//!
//! The first `step` prepares the meshes (generated normals, smoothed-normal
//! table). Every later `step` rasterizes whole target triangles until its
//! wall-clock budget is spent, always at least one. The output buffer is
//! handed out only once the task is `Complete`.

use std::borrow::Cow;
use std::fmt;
use std::time::{Duration, Instant};

use normbake_mesh::normals::with_normals;
use normbake_mesh::{Mesh, SmoothedNormalTable};
use normbake_spatial::SpatialIndex;
use normbake_telemetry::{BakeEvent, BakePhase, EventBus, EventKind};
use normbake_types::{BakeError, BakeResult};

use crate::buffer::NormalMapBuffer;
use crate::cage::CageRayCaster;
use crate::config::BakeOptions;
use crate::raster::{BakeScratch, Rasterizer};
use crate::stats::BakeStats;
use crate::validate::{validate_index, validate_inputs};

/// Lifecycle state of a [`BakeTask`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BakeState {
    Idle,
    Preprocessing,
    /// Rasterizing; `tick` counts baking ticks run so far.
    Baking { tick: u32 },
    Complete,
    Failed,
}

impl BakeState {
    fn phase(self) -> BakePhase {
        match self {
            BakeState::Idle => BakePhase::Idle,
            BakeState::Preprocessing => BakePhase::Preprocessing,
            BakeState::Baking { .. } => BakePhase::Baking,
            BakeState::Complete => BakePhase::Complete,
            BakeState::Failed => BakePhase::Failed,
        }
    }

    /// Returns true for `Complete` and `Failed`.
    pub fn is_terminal(self) -> bool {
        matches!(self, BakeState::Complete | BakeState::Failed)
    }
}

impl fmt::Display for BakeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BakeState::Idle => f.write_str("idle"),
            BakeState::Preprocessing => f.write_str("preprocessing"),
            BakeState::Baking { tick } => write!(f, "baking (tick {tick})"),
            BakeState::Complete => f.write_str("complete"),
            BakeState::Failed => f.write_str("failed"),
        }
    }
}

/// Result of one scheduler tick.
#[derive(Debug, Clone)]
pub struct StepReport {
    /// Tick number (0 is the preprocessing tick).
    pub tick: u32,
    /// Fraction of target triangles rasterized, in `[0, 1]`.
    pub progress: f32,
    pub triangles_done: u32,
    pub triangles_total: u32,
    /// True once the task is `Complete`.
    pub done: bool,
    /// Wall-clock time for this tick (seconds).
    pub wall_time: f64,
}

/// Meshes ready for rasterization.
struct Prepared<'a> {
    reference: Cow<'a, Mesh>,
    target: Cow<'a, Mesh>,
    smoothed: Option<SmoothedNormalTable>,
}

/// One bake of `reference` onto `target`'s UV layout.
///
/// Inputs are borrowed read-only; normals are generated on private copies
/// when a mesh lacks them.
pub struct BakeTask<'a> {
    reference: &'a Mesh,
    target: &'a Mesh,
    index: &'a dyn SpatialIndex,
    options: BakeOptions,
    state: BakeState,
    prepared: Option<Prepared<'a>>,
    buffer: Option<NormalMapBuffer>,
    next_triangle: usize,
    tick: u32,
    scratch: BakeScratch,
    stats: BakeStats,
    wall_time: f64,
    failure: Option<String>,
    events: Option<EventBus>,
}

impl<'a> BakeTask<'a> {
    /// Validates the inputs and creates an idle task. No baking work and no
    /// index queries happen here.
    ///
    /// `index` must have been built from `reference`; a triangle count
    /// mismatch is rejected.
    pub fn new(
        reference: &'a Mesh,
        target: &'a Mesh,
        index: &'a dyn SpatialIndex,
        options: BakeOptions,
    ) -> BakeResult<Self> {
        validate_inputs(reference, target, &options)?;
        validate_index(reference, index)?;
        Ok(Self {
            reference,
            target,
            index,
            options,
            state: BakeState::Idle,
            prepared: None,
            buffer: None,
            next_triangle: 0,
            tick: 0,
            scratch: BakeScratch::default(),
            stats: BakeStats::default(),
            wall_time: 0.0,
            failure: None,
            events: None,
        })
    }

    /// Attaches an event bus; it is flushed at the end of every tick and
    /// finalized when the bake completes or fails.
    pub fn with_event_bus(mut self, bus: EventBus) -> Self {
        self.events = Some(bus);
        self
    }

    /// Detaches the event bus.
    pub fn take_event_bus(&mut self) -> Option<EventBus> {
        self.events.take()
    }

    pub fn state(&self) -> BakeState {
        self.state
    }

    pub fn options(&self) -> &BakeOptions {
        &self.options
    }

    pub fn stats(&self) -> &BakeStats {
        &self.stats
    }

    /// Total wall-clock time spent inside `step` (seconds).
    pub fn wall_time(&self) -> f64 {
        self.wall_time
    }

    /// Fraction of target triangles rasterized.
    pub fn progress(&self) -> f32 {
        match self.state {
            BakeState::Complete => 1.0,
            _ => self.next_triangle as f32 / self.target.triangle_count() as f32,
        }
    }

    /// Runs one tick of at most roughly `budget` wall-clock time.
    ///
    /// After `Complete`, further calls return a finished report. After
    /// `Failed`, they return the runtime error again.
    pub fn step(&mut self, budget: Duration) -> BakeResult<StepReport> {
        match self.state {
            BakeState::Idle => Ok(self.preprocess()),
            BakeState::Preprocessing | BakeState::Baking { .. } => self.bake_tick(budget),
            BakeState::Complete => Ok(self.report(0.0)),
            BakeState::Failed => Err(BakeError::Runtime {
                tick: self.tick,
                reason: self.failure.clone().unwrap_or_default(),
            }),
        }
    }

    /// Hands out the finished buffer.
    pub fn result(mut self) -> BakeResult<NormalMapBuffer> {
        match (self.state, self.buffer.take()) {
            (BakeState::Complete, Some(buffer)) => Ok(buffer),
            (state, _) => Err(BakeError::NotComplete {
                state: state.to_string(),
            }),
        }
    }

    fn preprocess(&mut self) -> StepReport {
        let start = Instant::now();
        self.transition(BakeState::Preprocessing);

        let reference = with_normals(self.reference);
        let target = with_normals(self.target);
        let smoothed = self
            .options
            .use_average_normals
            .then(|| SmoothedNormalTable::build(&target));

        tracing::info!(
            size = self.options.size,
            target_triangles = target.triangle_count(),
            reference_triangles = reference.triangle_count(),
            index = self.index.name(),
            generated_target_normals = matches!(target, Cow::Owned(_)),
            generated_reference_normals = matches!(reference, Cow::Owned(_)),
            "bake started"
        );

        self.prepared = Some(Prepared {
            reference,
            target,
            smoothed,
        });
        self.buffer = Some(NormalMapBuffer::new(self.options.size));
        self.transition(BakeState::Baking { tick: 0 });

        let wall_time = start.elapsed().as_secs_f64();
        self.wall_time += wall_time;
        self.flush_events();
        self.report(wall_time)
    }

    fn bake_tick(&mut self, budget: Duration) -> BakeResult<StepReport> {
        let start = Instant::now();
        self.tick += 1;
        let tick = self.tick;
        self.state = BakeState::Baking { tick };

        let outcome = self.rasterize_until(start, budget);
        let wall_time = start.elapsed().as_secs_f64();
        self.wall_time += wall_time;

        if let Err(error) = outcome {
            let reason = match &error {
                BakeError::Runtime { reason, .. } => reason.clone(),
                other => other.to_string(),
            };
            tracing::warn!(tick, %reason, "bake failed, discarding partial buffer");
            self.buffer = None;
            self.prepared = None;
            self.failure = Some(reason.clone());
            self.transition(BakeState::Failed);
            self.emit(EventKind::Failed { reason: reason.clone() });
            self.finalize_events();
            return Err(BakeError::Runtime { tick, reason });
        }

        let total = self.target.triangle_count();
        self.emit(EventKind::TickCompleted {
            triangles_done: self.next_triangle as u32,
            triangles_total: total as u32,
            wall_time,
        });
        tracing::debug!(
            tick,
            triangles_done = self.next_triangle,
            triangles_total = total,
            texels_written = self.stats.texels_written,
            "bake tick"
        );

        if self.next_triangle >= total {
            self.transition(BakeState::Complete);
            self.emit(EventKind::Complete {
                wall_time: self.wall_time,
                texels_written: self.stats.texels_written,
            });
            tracing::info!(
                ticks = tick,
                wall_time = self.wall_time,
                texels_written = self.stats.texels_written,
                rays_cast = self.stats.rays_cast,
                misses = self.stats.misses,
                backface_rejected = self.stats.backface_rejected,
                "bake complete"
            );
            self.finalize_events();
        } else {
            self.flush_events();
        }
        Ok(self.report(wall_time))
    }

    /// Rasterizes whole triangles until the budget runs out.
    fn rasterize_until(&mut self, start: Instant, budget: Duration) -> BakeResult<()> {
        let (Some(prepared), Some(buffer)) = (self.prepared.as_ref(), self.buffer.as_mut()) else {
            return Err(BakeError::Runtime {
                tick: self.tick,
                reason: "bake task was not preprocessed".into(),
            });
        };

        let rasterizer = Rasterizer {
            target: &prepared.target,
            reference: &prepared.reference,
            smoothed: prepared.smoothed.as_ref(),
            caster: CageRayCaster::new(self.index, &self.options),
            tick: self.tick,
        };

        let total = prepared.target.triangle_count();
        while self.next_triangle < total {
            rasterizer.rasterize_triangle(self.next_triangle, buffer, &mut self.scratch, &mut self.stats)?;
            self.next_triangle += 1;
            if start.elapsed() >= budget {
                break;
            }
        }
        Ok(())
    }

    fn report(&self, wall_time: f64) -> StepReport {
        StepReport {
            tick: self.tick,
            progress: self.progress(),
            triangles_done: self.next_triangle as u32,
            triangles_total: self.target.triangle_count() as u32,
            done: self.state == BakeState::Complete,
            wall_time,
        }
    }

    fn transition(&mut self, to: BakeState) {
        let from = self.state;
        self.state = to;
        if from.phase() != to.phase() {
            self.emit(EventKind::PhaseChanged {
                from: from.phase(),
                to: to.phase(),
            });
        }
    }

    fn emit(&self, kind: EventKind) {
        if let Some(bus) = &self.events {
            bus.emit(BakeEvent::new(self.tick, kind));
        }
    }

    fn flush_events(&mut self) {
        if let Some(bus) = &mut self.events {
            bus.flush();
        }
    }

    /// Flushes and finalizes the sinks; runs once, on the terminal transition.
    fn finalize_events(&mut self) {
        if let Some(bus) = &mut self.events {
            bus.finalize();
        }
    }
}
