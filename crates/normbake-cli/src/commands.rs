//! CLI command implementations.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use normbake_bake::validate::validate_mesh;
use normbake_bake::BakeTask;
use normbake_bench::metrics::BenchmarkMetrics;
use normbake_bench::runner::BenchmarkRunner;
use normbake_bench::scenarios::{Scenario, ScenarioKind};
use normbake_io::contract::{BakeJob, BakeSummary};
use normbake_io::export::write_normal_map;
use normbake_io::loader::load_mesh;
use normbake_spatial::{BvhIndex, LinearIndex, SpatialIndex};
use normbake_telemetry::{EventBus, TracingSink};
use normbake_types::constants::DEFAULT_TICK_BUDGET_MS;
use normbake_types::MeshRole;

use crate::BakeArgs;

type CliResult = Result<(), Box<dyn std::error::Error>>;

/// Merges the job file (if any) with command-line overrides.
fn resolve_job(args: &BakeArgs) -> Result<BakeJob, Box<dyn std::error::Error>> {
    let base = match &args.job {
        Some(path) => Some(BakeJob::load(path)?),
        None => None,
    };

    let pick = |flag: &Option<PathBuf>, from_job: Option<&PathBuf>, name: &str| {
        flag.clone()
            .or_else(|| from_job.cloned())
            .ok_or_else(|| format!("missing --{name} (or a --job file naming it)"))
    };

    let mut options = base.as_ref().map(|j| j.options.clone()).unwrap_or_default();
    if let Some(size) = args.size {
        options.size = size;
    }
    if let Some(front) = args.max_front {
        options.max_front = front;
    }
    if let Some(rear) = args.max_rear {
        options.max_rear = rear;
    }
    if args.keep_backfaces {
        options.ignore_backface = false;
    }
    if args.no_average_normals {
        options.use_average_normals = false;
    }

    Ok(BakeJob {
        reference: pick(&args.reference, base.as_ref().map(|j| &j.reference), "reference")?,
        target: pick(&args.target, base.as_ref().map(|j| &j.target), "target")?,
        output: pick(&args.output, base.as_ref().map(|j| &j.output), "output")?,
        options,
    })
}

/// Bake a normal map.
pub fn bake(args: &BakeArgs) -> CliResult {
    let job = resolve_job(args)?;

    println!("normbake");
    println!("────────");
    println!("Reference: {}", job.reference.display());
    println!("Target:    {}", job.target.display());
    println!("Output:    {}", job.output.display());
    println!(
        "Options:   {0}×{0}, cage +{1}/-{2}, backfaces {3}, averaged normals {4}",
        job.options.size,
        job.options.max_front,
        job.options.max_rear,
        if job.options.ignore_backface { "ignored" } else { "kept" },
        if job.options.use_average_normals { "on" } else { "off" },
    );
    println!();

    let reference = load_mesh(&job.reference)?;
    let target = load_mesh(&job.target)?;
    println!(
        "Loaded {} reference / {} target triangles",
        reference.triangle_count(),
        target.triangle_count()
    );

    let index = BvhIndex::build(&reference)?;
    let bus = EventBus::new().with_sink(Box::new(TracingSink::new()));
    let mut task = BakeTask::new(&reference, &target, &index, job.options.clone())?.with_event_bus(bus);

    let budget = Duration::from_millis(DEFAULT_TICK_BUDGET_MS);
    let mut ticks = 0;
    let mut last_percent = None;
    loop {
        let report = task.step(budget)?;
        ticks += 1;
        let percent = (report.progress * 100.0) as u32;
        if last_percent != Some(percent) {
            print!("\rBaking… {percent:>3}%");
            std::io::stdout().flush()?;
            last_percent = Some(percent);
        }
        if report.done {
            break;
        }
    }
    println!();

    let stats = *task.stats();
    let wall_time = task.wall_time();
    let buffer = task.result()?;
    write_normal_map(&buffer, &job.output)?;

    println!("  Wall time:      {wall_time:.3}s ({ticks} ticks)");
    println!("  Texels written: {}", stats.texels_written);
    println!("  Rays cast:      {}", stats.rays_cast);
    println!("  Hit rate:       {:.1}%", stats.hit_rate() * 100.0);
    println!("Normal map written to: {}", job.output.display());

    if let Some(path) = &args.summary {
        let summary = BakeSummary {
            output: job.output.clone(),
            size: job.options.size,
            ticks,
            wall_time,
            stats,
        };
        std::fs::write(path, summary.to_json()?)?;
        println!("Summary written to: {}", path.display());
    }

    Ok(())
}

/// Run benchmark suite.
pub fn benchmark(
    scenario_name: &str,
    size: Option<u32>,
    include_linear: bool,
    output_path: Option<&Path>,
) -> CliResult {
    println!("normbake Benchmark Suite");
    println!("════════════════════════");
    println!();

    let kinds: Vec<ScenarioKind> = if scenario_name == "all" {
        ScenarioKind::all().to_vec()
    } else {
        match ScenarioKind::from_name(scenario_name) {
            Some(kind) => vec![kind],
            None => {
                let available: Vec<&str> = ScenarioKind::all().iter().map(|k| k.name()).collect();
                return Err(format!(
                    "Unknown scenario: '{scenario_name}'. Available: {}, all",
                    available.join(", ")
                )
                .into());
            }
        }
    };

    let mut all_metrics = Vec::new();

    for &kind in &kinds {
        let mut scenario = Scenario::from_kind(kind);
        if let Some(size) = size {
            scenario = scenario.with_size(size);
        }

        println!(
            "Running: {} ({} reference tris, {} target tris, {}²)",
            kind.name(),
            scenario.reference.triangle_count(),
            scenario.target.triangle_count(),
            scenario.options.size,
        );

        let mut runs = vec![BenchmarkRunner::run::<BvhIndex>(&scenario)?];
        if include_linear {
            runs.push(BenchmarkRunner::run::<LinearIndex>(&scenario)?);
        }

        for metrics in runs {
            println!("  [{}]", metrics.index);
            println!("    Index build:  {:.3}ms", metrics.index_build_time * 1000.0);
            println!("    Wall time:    {:.3}s ({} ticks)", metrics.total_wall_time, metrics.ticks);
            println!("    Rays/s:       {:.0}", metrics.rays_per_second());
            println!("    Hit rate:     {:.1}%", metrics.hit_rate * 100.0);
            all_metrics.push(metrics);
        }
        println!();
    }

    let csv = BenchmarkMetrics::to_csv(&all_metrics);
    if let Some(path) = output_path {
        std::fs::write(path, &csv)?;
        println!("Results written to: {}", path.display());
    } else {
        println!("CSV Output:");
        println!("{csv}");
    }

    Ok(())
}

/// Validate a mesh or bake job.
pub fn validate(path: &Path) -> CliResult {
    println!("normbake Validator");
    println!("──────────────────");
    println!();

    let is_job = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("toml"));

    if is_job {
        println!("Validating bake job: {}", path.display());
        let job = BakeJob::load(path)?;
        report_check("Options", job.options.validate());

        match load_mesh(&job.reference) {
            Ok(reference) => {
                report_check("Reference mesh", validate_mesh(&reference, MeshRole::Reference));
            }
            Err(e) => println!("❌ Reference mesh: {e}"),
        }

        match load_mesh(&job.target) {
            Ok(target) => {
                report_check("Target mesh", validate_mesh(&target, MeshRole::Target));
                if !target.has_uvs() {
                    println!("❌ Target mesh has no UV coordinates.");
                }
            }
            Err(e) => println!("❌ Target mesh: {e}"),
        }
    } else {
        println!("Validating mesh: {}", path.display());
        // Loading runs the structural checks
        match load_mesh(path) {
            Ok(mesh) => println!(
                "✅ Mesh is valid ({} verts, {} tris, normals: {}, uvs: {}).",
                mesh.vertex_count(),
                mesh.triangle_count(),
                yes_no(mesh.has_normals()),
                yes_no(mesh.has_uvs()),
            ),
            Err(e) => println!("❌ Mesh validation failed: {e}"),
        }
    }

    Ok(())
}

fn report_check(label: &str, result: normbake_types::BakeResult<()>) {
    match result {
        Ok(()) => println!("✅ {label} OK."),
        Err(e) => println!("❌ {label}: {e}"),
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}
