//! # normbake-telemetry
//!
//! Event bus for bake telemetry. A bake task emits structured events
//! (phase changes, per-tick progress, completion, failure) that pluggable
//! sinks consume: an in-memory recorder for tests, a `tracing` logger for
//! hosts.

pub mod bus;
pub mod events;
pub mod sinks;

pub use bus::EventBus;
pub use events::{BakeEvent, BakePhase, EventKind};
pub use sinks::{EventSink, TracingSink, VecSink};
