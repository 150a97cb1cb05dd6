//! Benchmark metrics: data collected during a benchmark run.

use serde::{Deserialize, Serialize};

/// Metrics collected from one scenario run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkMetrics {
    /// Scenario name.
    pub scenario: String,
    /// Spatial index strategy.
    pub index: String,
    pub reference_triangles: usize,
    pub target_triangles: usize,
    /// Texture edge length.
    pub size: u32,
    /// Spatial index construction time (seconds).
    pub index_build_time: f64,
    /// Wall-clock time of all ticks (seconds).
    pub total_wall_time: f64,
    /// Scheduler ticks, preprocessing included.
    pub ticks: u32,
    /// Average tick time (seconds).
    pub avg_tick_time: f64,
    pub min_tick_time: f64,
    pub max_tick_time: f64,
    pub rays_cast: u64,
    pub texels_written: u64,
    /// Fraction of rays that resolved to a reference surface.
    pub hit_rate: f64,
}

impl BenchmarkMetrics {
    /// CSV header matching [`to_csv_row`](Self::to_csv_row).
    pub fn to_csv_header() -> String {
        "scenario,index,reference_triangles,target_triangles,size,index_build_ms,total_wall_time_s,ticks,avg_tick_ms,min_tick_ms,max_tick_ms,rays_cast,texels_written,hit_rate".to_string()
    }

    /// Format this metrics instance as a CSV data row.
    pub fn to_csv_row(&self) -> String {
        format!(
            "{},{},{},{},{},{:.4},{:.6},{},{:.4},{:.4},{:.4},{},{},{:.4}",
            self.scenario,
            self.index,
            self.reference_triangles,
            self.target_triangles,
            self.size,
            self.index_build_time * 1000.0,
            self.total_wall_time,
            self.ticks,
            self.avg_tick_time * 1000.0,
            self.min_tick_time * 1000.0,
            self.max_tick_time * 1000.0,
            self.rays_cast,
            self.texels_written,
            self.hit_rate,
        )
    }

    /// Format multiple metrics as a complete CSV string.
    pub fn to_csv(metrics: &[BenchmarkMetrics]) -> String {
        let mut csv = Self::to_csv_header();
        for m in metrics {
            csv.push('\n');
            csv.push_str(&m.to_csv_row());
        }
        csv
    }

    /// Rays per second over the whole bake.
    pub fn rays_per_second(&self) -> f64 {
        if self.total_wall_time > 0.0 {
            self.rays_cast as f64 / self.total_wall_time
        } else {
            0.0
        }
    }
}
