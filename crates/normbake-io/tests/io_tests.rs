//! Integration tests for normbake-io.

use std::path::{Path, PathBuf};

use normbake_bake::{BakeOptions, BakeStats, NormalMapBuffer};
use normbake_io::contract::{BakeJob, BakeSummary};
use normbake_io::export::{write_normal_map, write_png, write_raw};
use normbake_io::loader::{load_mesh, save_mesh_json};
use normbake_mesh::generators::quad_grid;
use normbake_types::BakeError;

fn scratch_path(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("normbake-io-tests-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir.join(name)
}

const QUAD_OBJ: &str = "\
o quad
v -0.5 -0.5 0.0
v 0.5 -0.5 0.0
v 0.5 0.5 0.0
v -0.5 0.5 0.0
vt 0.0 0.0
vt 1.0 0.0
vt 1.0 1.0
vt 0.0 1.0
vn 0.0 0.0 1.0
f 1/1/1 2/2/1 3/3/1 4/4/1
";

// ─── Loader Tests ─────────────────────────────────────────────

#[test]
fn load_obj_triangulates_and_keeps_attributes() {
    let path = scratch_path("quad.obj");
    std::fs::write(&path, QUAD_OBJ).unwrap();

    let mesh = load_mesh(&path).unwrap();
    assert_eq!(mesh.vertex_count(), 4);
    assert_eq!(mesh.triangle_count(), 2);
    assert!(mesh.has_uvs());
    assert!(mesh.has_normals());
    assert!(mesh.validate().is_ok());
}

#[test]
fn obj_without_faces_has_no_mesh() {
    let path = scratch_path("points.obj");
    std::fs::write(&path, "v 0 0 0\nv 1 0 0\nv 0 1 0\n").unwrap();

    match load_mesh(&path) {
        Err(BakeError::NoMeshFound(p)) => assert!(p.ends_with("points.obj")),
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn missing_obj_is_an_io_error() {
    let err = load_mesh(Path::new("/definitely/not/here.obj")).unwrap_err();
    assert!(matches!(err, BakeError::Io(_)));
}

#[test]
fn json_mesh_round_trip() {
    let mesh = quad_grid(3, 2, 2.0, 1.0);
    let path = scratch_path("grid.json");
    save_mesh_json(&mesh, &path).unwrap();

    let loaded = load_mesh(&path).unwrap();
    assert_eq!(loaded, mesh);
}

#[test]
fn empty_json_mesh_has_no_mesh() {
    let path = scratch_path("empty.json");
    std::fs::write(&path, r#"{ "pos_x": [], "pos_y": [], "pos_z": [] }"#).unwrap();
    assert!(matches!(load_mesh(&path), Err(BakeError::NoMeshFound(_))));
}

#[test]
fn unsupported_extension_rejected() {
    let err = load_mesh(Path::new("mesh.fbx")).unwrap_err();
    assert!(matches!(err, BakeError::Serialization(_)));
}

// ─── Contract Tests ───────────────────────────────────────────

#[test]
fn job_parses_with_default_options() {
    let job = BakeJob::from_toml_str(
        r#"
        reference = "high.obj"
        target = "low.obj"
        output = "normal.png"

        [options]
        size = 512
        ignore_backface = false
        "#,
    )
    .unwrap();

    assert_eq!(job.reference, PathBuf::from("high.obj"));
    assert_eq!(job.options.size, 512);
    assert!(!job.options.ignore_backface);
    assert_eq!(job.options.max_front, BakeOptions::default().max_front);
}

#[test]
fn job_without_options_table() {
    let job = BakeJob::from_toml_str("reference = \"a.obj\"\ntarget = \"b.obj\"\noutput = \"c.png\"\n").unwrap();
    assert_eq!(job.options, BakeOptions::default());
}

#[test]
fn job_missing_field_rejected() {
    let err = BakeJob::from_toml_str("reference = \"a.obj\"\n").unwrap_err();
    assert!(matches!(err, BakeError::Serialization(_)));
}

#[test]
fn job_toml_round_trip() {
    let job = BakeJob {
        reference: "high.obj".into(),
        target: "low.json".into(),
        output: "out.png".into(),
        options: BakeOptions::preview(),
    };
    let text = job.to_toml_string().unwrap();
    assert_eq!(BakeJob::from_toml_str(&text).unwrap(), job);
}

#[test]
fn job_paths_resolve_against_job_file() {
    let path = scratch_path("job.toml");
    std::fs::write(&path, "reference = \"high.obj\"\ntarget = \"/abs/low.obj\"\noutput = \"out.png\"\n").unwrap();

    let job = BakeJob::load(&path).unwrap();
    let dir = path.parent().unwrap();
    assert_eq!(job.reference, dir.join("high.obj"));
    assert_eq!(job.target, PathBuf::from("/abs/low.obj"));
    assert_eq!(job.output, dir.join("out.png"));
}

#[test]
fn summary_serializes() {
    let summary = BakeSummary {
        output: "out.png".into(),
        size: 64,
        ticks: 3,
        wall_time: 0.02,
        stats: BakeStats {
            texels_written: 100,
            rays_cast: 120,
            ..Default::default()
        },
    };
    let json = summary.to_json().unwrap();
    assert!(json.contains("texels_written"));
    let recovered: BakeSummary = serde_json::from_str(&json).unwrap();
    assert_eq!(recovered, summary);
}

// ─── Export Tests ─────────────────────────────────────────────

#[test]
fn png_export_preserves_texels() {
    let mut buffer = NormalMapBuffer::new(8);
    buffer.write(2, 0, [10, 200, 30]);
    let path = scratch_path("map.png");
    write_png(&buffer, &path).unwrap();

    let image = image::open(&path).unwrap().to_rgba8();
    assert_eq!(image.dimensions(), (8, 8));
    assert_eq!(image.as_raw().as_slice(), buffer.as_bytes());
    assert_eq!(image.get_pixel(2, 7).0, [10, 200, 30, 255]);
}

#[test]
fn raw_export_is_plain_rgba() {
    let buffer = NormalMapBuffer::new(4);
    let path = scratch_path("map.rgba");
    write_raw(&buffer, &path).unwrap();
    assert_eq!(std::fs::read(&path).unwrap(), buffer.as_bytes());
}

#[test]
fn export_dispatches_on_extension() {
    let buffer = NormalMapBuffer::new(4);
    let png = scratch_path("dispatch.PNG");
    let raw = scratch_path("dispatch.bin");
    write_normal_map(&buffer, &png).unwrap();
    write_normal_map(&buffer, &raw).unwrap();

    assert_eq!(&std::fs::read(&png).unwrap()[1..4], b"PNG");
    assert_eq!(std::fs::read(&raw).unwrap().len(), 4 * 4 * 4);
}
