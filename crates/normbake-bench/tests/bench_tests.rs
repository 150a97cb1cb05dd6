//! Integration tests for normbake-bench.

use normbake_bench::metrics::BenchmarkMetrics;
use normbake_bench::runner::BenchmarkRunner;
use normbake_bench::scenarios::{Scenario, ScenarioKind};
use normbake_spatial::{BvhIndex, LinearIndex};

// ─── Scenario Tests ───────────────────────────────────────────

#[test]
fn flat_plane_setup() {
    let s = Scenario::flat_plane();
    assert_eq!(s.kind, ScenarioKind::FlatPlane);
    assert_eq!(s.reference, s.target);
    assert_eq!(s.target.triangle_count(), 512); // 16×16×2
}

#[test]
fn bumped_plane_setup() {
    let s = Scenario::bumped_plane();
    assert_eq!(s.target.triangle_count(), 2);
    assert_eq!(s.reference.triangle_count(), 64 * 64 * 2);
    assert!(s.reference.pos_z.iter().any(|&z| z > 0.0));
}

#[test]
fn scenario_names_round_trip() {
    assert_eq!(ScenarioKind::all().len(), 4);
    for &kind in ScenarioKind::all() {
        assert_eq!(ScenarioKind::from_name(kind.name()), Some(kind));
    }
    assert_eq!(ScenarioKind::from_name("teapot"), None);
}

#[test]
fn scenarios_have_valid_inputs() {
    for &kind in ScenarioKind::all() {
        let s = Scenario::from_kind(kind);
        assert!(s.options.validate().is_ok(), "{}", kind.name());
        assert!(s.reference.validate().is_ok());
        assert!(s.target.validate().is_ok());
        assert!(s.target.has_uvs());
    }
}

// ─── Runner Tests ─────────────────────────────────────────────

#[test]
fn run_flat_plane() {
    let scenario = Scenario::flat_plane().with_size(32);
    let metrics = BenchmarkRunner::run::<BvhIndex>(&scenario).unwrap();

    assert_eq!(metrics.scenario, "flat_plane");
    assert_eq!(metrics.index, "bvh");
    assert_eq!(metrics.size, 32);
    assert!(metrics.ticks >= 2);
    assert!(metrics.texels_written > 0);
    assert!(metrics.hit_rate > 0.9);
}

#[test]
fn run_all_scenarios_small() {
    for &kind in ScenarioKind::all() {
        let scenario = Scenario::from_kind(kind).with_size(16);
        let metrics = BenchmarkRunner::run::<BvhIndex>(&scenario).unwrap();
        assert_eq!(metrics.scenario, kind.name());
        assert!(metrics.total_wall_time >= 0.0);
        assert!(metrics.min_tick_time <= metrics.max_tick_time);
    }
}

#[test]
fn linear_and_bvh_cast_the_same_rays() {
    let scenario = Scenario::bumped_plane().with_size(16);
    let bvh = BenchmarkRunner::run::<BvhIndex>(&scenario).unwrap();
    let linear = BenchmarkRunner::run::<LinearIndex>(&scenario).unwrap();
    assert_eq!(linear.index, "linear");
    assert_eq!(bvh.rays_cast, linear.rays_cast);
    assert_eq!(bvh.texels_written, linear.texels_written);
}

// ─── Metrics Tests ────────────────────────────────────────────

fn sample_metrics() -> BenchmarkMetrics {
    BenchmarkMetrics {
        scenario: "test".into(),
        index: "bvh".into(),
        reference_triangles: 8192,
        target_triangles: 2,
        size: 512,
        index_build_time: 0.002,
        total_wall_time: 1.5,
        ticks: 100,
        avg_tick_time: 0.015,
        min_tick_time: 0.01,
        max_tick_time: 0.02,
        rays_cast: 300_000,
        texels_written: 262_144,
        hit_rate: 1.0,
    }
}

#[test]
fn metrics_csv_output() {
    let metrics = sample_metrics();
    let header = BenchmarkMetrics::to_csv_header();
    let row = metrics.to_csv_row();
    assert_eq!(header.split(',').count(), row.split(',').count());
    assert!(row.starts_with("test,bvh,8192,2,512,"));

    let csv = BenchmarkMetrics::to_csv(&[metrics.clone(), metrics]);
    assert_eq!(csv.lines().count(), 3);
}

#[test]
fn metrics_json_round_trip() {
    let metrics = sample_metrics();
    let json = serde_json::to_string(&metrics).unwrap();
    let recovered: BenchmarkMetrics = serde_json::from_str(&json).unwrap();
    assert_eq!(recovered.rays_cast, 300_000);
    assert!((metrics.rays_per_second() - 200_000.0).abs() < 1e-6);
}
