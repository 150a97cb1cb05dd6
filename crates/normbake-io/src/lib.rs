//! # normbake-io
//!
//! The file boundary of the baker: mesh loading, normal map export and the
//! serializable job/summary contract used by the CLI and pipelines.

pub mod contract;
pub mod export;
pub mod loader;

pub use contract::{BakeJob, BakeSummary};
pub use export::{write_png, write_raw};
pub use loader::{load_mesh, save_mesh_json};
