//! Pluggable event sinks.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use crate::events::{BakeEvent, EventKind};

/// Trait for event consumers.
pub trait EventSink: Send {
    /// Process a single event.
    fn handle(&mut self, event: &BakeEvent);

    /// Called when the bake ends.
    fn finalize(&mut self) {}

    /// Returns a human-readable name for this sink.
    fn name(&self) -> &str;
}

/// Records events in memory.
///
/// Clones share the same storage, so a clone kept by the caller can read
/// what the copy registered on the bus received.
#[derive(Clone, Default)]
pub struct VecSink {
    events: Arc<Mutex<Vec<BakeEvent>>>,
    finalized: Arc<AtomicBool>,
}

impl VecSink {
    /// Creates an empty vec sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded events.
    pub fn events(&self) -> Vec<BakeEvent> {
        match self.events.lock() {
            Ok(events) => events.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn len(&self) -> usize {
        self.events().len()
    }

    /// True once the bus has finalized this sink.
    pub fn is_finalized(&self) -> bool {
        self.finalized.load(Ordering::Acquire)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl EventSink for VecSink {
    fn handle(&mut self, event: &BakeEvent) {
        match self.events.lock() {
            Ok(mut events) => events.push(event.clone()),
            Err(poisoned) => poisoned.into_inner().push(event.clone()),
        }
    }

    fn finalize(&mut self) {
        self.finalized.store(true, Ordering::Release);
    }

    fn name(&self) -> &str {
        "vec_sink"
    }
}

/// Logs events through `tracing`.
///
/// Per-tick events go to `debug`; phase changes and outcomes go to `info`
/// (`warn` for failures).
#[derive(Debug, Default)]
pub struct TracingSink;

impl TracingSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for TracingSink {
    fn handle(&mut self, event: &BakeEvent) {
        match &event.kind {
            EventKind::PhaseChanged { from, to } => {
                tracing::info!(tick = event.tick, ?from, ?to, "bake phase changed");
            }
            EventKind::TickCompleted {
                triangles_done,
                triangles_total,
                wall_time,
            } => {
                tracing::debug!(
                    tick = event.tick,
                    triangles_done,
                    triangles_total,
                    wall_time,
                    "bake tick completed"
                );
            }
            EventKind::Complete {
                wall_time,
                texels_written,
            } => {
                tracing::info!(tick = event.tick, wall_time, texels_written, "bake complete");
            }
            EventKind::Failed { reason } => {
                tracing::warn!(tick = event.tick, %reason, "bake failed");
            }
        }
    }

    fn name(&self) -> &str {
        "tracing_sink"
    }
}
