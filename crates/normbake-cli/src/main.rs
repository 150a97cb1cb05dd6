//! normbake CLI: baking, validation and benchmarking.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "normbake")]
#[command(version, about = "normbake: tangent-space normal map baker")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Bake a normal map from a reference mesh onto a target mesh's UVs.
    Bake(BakeArgs),

    /// Run the benchmark suite.
    Benchmark {
        /// Which scenario to run (flat_plane, bumped_plane, sphere_shell, cube_on_sphere, all).
        #[arg(short, long, default_value = "all")]
        scenario: String,

        /// Override the texture size of every scenario.
        #[arg(long)]
        size: Option<u32>,

        /// Also run the brute-force index for comparison.
        #[arg(long)]
        linear: bool,

        /// Output CSV file path.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate a mesh (.obj, .json) or a bake job (.toml).
    Validate {
        /// Path to mesh or job file.
        path: PathBuf,
    },
}

#[derive(Args)]
pub struct BakeArgs {
    /// Bake job file (TOML). Command-line options below override it.
    #[arg(short, long)]
    pub job: Option<PathBuf>,

    /// High-detail mesh (.obj or .json).
    #[arg(short, long)]
    pub reference: Option<PathBuf>,

    /// Low-detail mesh with UVs (.obj or .json).
    #[arg(short, long)]
    pub target: Option<PathBuf>,

    /// Output image (.png) or raw RGBA file.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Texture edge length (power of two).
    #[arg(long)]
    pub size: Option<u32>,

    /// Cage distance in front of the target surface.
    #[arg(long)]
    pub max_front: Option<f32>,

    /// Cage distance behind the target surface.
    #[arg(long)]
    pub max_rear: Option<f32>,

    /// Accept hits on back faces.
    #[arg(long)]
    pub keep_backfaces: bool,

    /// Cast rays along the target's own normals instead of welded averages.
    #[arg(long)]
    pub no_average_normals: bool,

    /// Write a JSON summary of the bake to this path.
    #[arg(long)]
    pub summary: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Bake(args) => commands::bake(&args),
        Commands::Benchmark {
            scenario,
            size,
            linear,
            output,
        } => commands::benchmark(&scenario, size, linear, output.as_deref()),
        Commands::Validate { path } => commands::validate(&path),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
