//! # normbake-bake
//!
//! Bakes the surface detail of a high-resolution reference mesh into a
//! tangent-space normal map laid out by a low-resolution target mesh's UVs.
//!
//! For every texel covered by a target triangle, a ray is cast from the
//! outer cage surface back through the target along its normal. The nearest
//! reference surface it meets supplies a normal, which is re-expressed in
//! the target's tangent frame and encoded into RGBA8.
//!
//! Work is split into ticks: a [`BakeTask`] advances one wall-clock budget
//! at a time, so a host can interleave baking with its own event loop.
//! [`bake`] runs a task to completion; [`BakeFuture`] drives one from any
//! async executor.
//!
//! ```text
//! let mut task = BakeTask::new(&reference, &target, &index, options)?;
//! loop {
//!     let report = task.step(budget)?;
//!     show(report.progress);
//!     if report.done { break; }
//! }
//! let buffer = task.result()?;
//! ```

pub mod buffer;
pub mod cage;
pub mod config;
pub mod driver;
pub mod future;
pub mod raster;
pub mod stats;
pub mod surface;
pub mod task;
pub mod validate;

pub use buffer::{encode_normal, NormalMapBuffer};
pub use config::BakeOptions;
pub use driver::{bake, bake_with_index};
pub use future::BakeFuture;
pub use stats::BakeStats;
pub use task::{BakeState, BakeTask, StepReport};
