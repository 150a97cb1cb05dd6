//! Benchmark runner: bakes scenarios and collects metrics.

use std::time::{Duration, Instant};

use normbake_bake::BakeTask;
use normbake_spatial::SpatialIndex;
use normbake_types::constants::DEFAULT_TICK_BUDGET_MS;
use normbake_types::BakeResult;

use crate::metrics::BenchmarkMetrics;
use crate::scenarios::Scenario;

/// Runs benchmark scenarios and collects metrics.
pub struct BenchmarkRunner;

impl BenchmarkRunner {
    /// Bake a scenario with index type `I` at the default tick budget.
    pub fn run<I: SpatialIndex>(scenario: &Scenario) -> BakeResult<BenchmarkMetrics> {
        Self::run_with_budget::<I>(scenario, Duration::from_millis(DEFAULT_TICK_BUDGET_MS))
    }

    /// Bake a scenario with index type `I`, timing every tick.
    pub fn run_with_budget<I: SpatialIndex>(
        scenario: &Scenario,
        budget: Duration,
    ) -> BakeResult<BenchmarkMetrics> {
        let build_start = Instant::now();
        let index = I::build(&scenario.reference)?;
        let index_build_time = build_start.elapsed().as_secs_f64();

        let mut task = BakeTask::new(
            &scenario.reference,
            &scenario.target,
            &index,
            scenario.options.clone(),
        )?;

        let mut tick_times: Vec<f64> = Vec::new();
        loop {
            let report = task.step(budget)?;
            tick_times.push(report.wall_time);
            if report.done {
                break;
            }
        }

        let stats = *task.stats();
        let total_wall_time = task.wall_time();
        let avg_tick = if tick_times.is_empty() {
            0.0
        } else {
            tick_times.iter().sum::<f64>() / tick_times.len() as f64
        };
        let min_tick = tick_times.iter().copied().fold(f64::MAX, f64::min);
        let max_tick = tick_times.iter().copied().fold(0.0, f64::max);

        tracing::info!(
            scenario = scenario.kind.name(),
            index = index.name(),
            total_wall_time,
            ticks = tick_times.len(),
            "benchmark finished"
        );

        Ok(BenchmarkMetrics {
            scenario: scenario.kind.name().to_string(),
            index: index.name().to_string(),
            reference_triangles: scenario.reference.triangle_count(),
            target_triangles: scenario.target.triangle_count(),
            size: scenario.options.size,
            index_build_time,
            total_wall_time,
            ticks: tick_times.len() as u32,
            avg_tick_time: avg_tick,
            min_tick_time: min_tick,
            max_tick_time: max_tick,
            rays_cast: stats.rays_cast,
            texels_written: stats.texels_written,
            hit_rate: stats.hit_rate(),
        })
    }
}
