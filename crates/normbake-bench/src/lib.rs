//! # normbake-bench
//!
//! Benchmark suite for the normbake engine.
//!
//! Procedural bake scenarios, a runner that times index construction and
//! every scheduler tick, and CSV export for regression tracking.

pub mod metrics;
pub mod runner;
pub mod scenarios;

pub use metrics::BenchmarkMetrics;
pub use runner::BenchmarkRunner;
pub use scenarios::{Scenario, ScenarioKind};
