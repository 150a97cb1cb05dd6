//! Integration tests for normbake-mesh.

use normbake_math::Vec3;
use normbake_mesh::generators::{bumped_grid, hard_cube, quad_grid, uv_sphere};
use normbake_mesh::normals::{compute_vertex_normals, ensure_normals, with_normals};
use normbake_mesh::smoothing::{weld_key, SmoothedNormalTable};
use normbake_mesh::Mesh;

// ─── Mesh Tests ───────────────────────────────────────────────

fn make_single_triangle() -> Mesh {
    Mesh {
        pos_x: vec![0.0, 1.0, 0.0],
        pos_y: vec![0.0, 0.0, 1.0],
        pos_z: vec![0.0, 0.0, 0.0],
        normal_x: vec![0.0, 0.0, 0.0],
        normal_y: vec![0.0, 0.0, 0.0],
        normal_z: vec![1.0, 1.0, 1.0],
        uv_u: vec![0.0, 1.0, 0.0],
        uv_v: vec![0.0, 0.0, 1.0],
        indices: vec![0, 1, 2],
    }
}

#[test]
fn basic_counts() {
    let mesh = make_single_triangle();
    assert_eq!(mesh.vertex_count(), 3);
    assert_eq!(mesh.triangle_count(), 1);
    assert!(mesh.has_normals());
    assert!(mesh.has_uvs());
}

#[test]
fn position_access() {
    let mesh = make_single_triangle();
    assert_eq!(mesh.position(1), Vec3::new(1.0, 0.0, 0.0));
}

#[test]
fn unindexed_triangles_are_consecutive_triples() {
    let mut mesh = make_single_triangle();
    mesh.indices.clear();
    assert!(!mesh.is_indexed());
    assert_eq!(mesh.triangle_count(), 1);
    assert_eq!(mesh.triangle(0), [0, 1, 2]);
    assert!(mesh.validate().is_ok());
}

#[test]
fn face_normal_follows_winding() {
    let mesh = make_single_triangle();
    assert_eq!(mesh.face_normal(0), Vec3::Z);
    assert_eq!(mesh.with_flipped_winding().face_normal(0), Vec3::NEG_Z);
}

#[test]
fn validate_ok() {
    assert!(make_single_triangle().validate().is_ok());
}

#[test]
fn validate_catches_inconsistent_lengths() {
    let mut mesh = make_single_triangle();
    mesh.pos_y.push(99.0);
    assert!(mesh.validate().is_err());
}

#[test]
fn validate_catches_partial_normals() {
    let mut mesh = make_single_triangle();
    mesh.normal_z.pop();
    assert!(mesh.validate().is_err());
}

#[test]
fn validate_catches_oob_index() {
    let mut mesh = make_single_triangle();
    mesh.indices[2] = 99;
    assert!(mesh.validate().is_err());
}

#[test]
fn validate_accepts_missing_optional_attributes() {
    let mut mesh = make_single_triangle();
    mesh.clear_normals();
    mesh.uv_u.clear();
    mesh.uv_v.clear();
    assert!(mesh.validate().is_ok());
    assert!(!mesh.has_normals());
    assert!(!mesh.has_uvs());
}

#[test]
fn from_interleaved() {
    let positions = vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
    let uvs = vec![0.0, 0.0, 1.0, 0.0, 0.0, 1.0];
    let mesh = Mesh::from_interleaved(&positions, None, Some(&uvs), Some(&[0, 1, 2])).unwrap();
    assert_eq!(mesh.vertex_count(), 3);
    assert_eq!(mesh.pos_x, vec![0.0, 1.0, 0.0]);
    assert_eq!(mesh.uv_u, vec![0.0, 1.0, 0.0]);
    assert!(!mesh.has_normals());
}

#[test]
fn from_interleaved_rejects_short_uvs() {
    let positions = vec![0.0; 9];
    let uvs = vec![0.0; 4];
    assert!(Mesh::from_interleaved(&positions, None, Some(&uvs), None).is_err());
}

#[test]
fn flipped_unindexed_mesh_swaps_attributes() {
    let mut mesh = make_single_triangle();
    mesh.indices.clear();
    let flipped = mesh.with_flipped_winding();
    assert_eq!(flipped.position(1), mesh.position(2));
    assert_eq!(flipped.uv(1), mesh.uv(2));
    assert_eq!(flipped.normal(0), Vec3::NEG_Z);
}

#[test]
fn fingerprint_tracks_geometry_only() {
    let mesh = quad_grid(2, 2, 1.0, 1.0);
    let mut moved = mesh.clone();
    let mut recolored = mesh.clone();

    moved.set_position(4, 0.0, 0.0, 0.25);
    recolored.uv_u[0] = 0.75;

    assert_ne!(mesh.geometry_fingerprint(), moved.geometry_fingerprint());
    assert_eq!(mesh.geometry_fingerprint(), recolored.geometry_fingerprint());
}

#[test]
fn mesh_serialization_keeps_absent_attributes_absent() {
    let mut mesh = make_single_triangle();
    mesh.clear_normals();
    let json = serde_json::to_string(&mesh).unwrap();
    let recovered: Mesh = serde_json::from_str(&json).unwrap();
    assert_eq!(mesh, recovered);
    assert!(!recovered.has_normals());
}

// ─── Normal Tests ─────────────────────────────────────────────

#[test]
fn computed_normals_of_flat_grid_face_up() {
    let mut mesh = quad_grid(4, 4, 1.0, 1.0);
    mesh.clear_normals();
    compute_vertex_normals(&mut mesh);
    for i in 0..mesh.vertex_count() {
        assert!((mesh.normal(i) - Vec3::Z).length() < 1e-6);
    }
}

#[test]
fn ensure_normals_is_idempotent() {
    let mut mesh = quad_grid(2, 2, 1.0, 1.0);
    mesh.clear_normals();
    assert!(ensure_normals(&mut mesh));
    let first = mesh.clone();
    assert!(!ensure_normals(&mut mesh));
    assert_eq!(first, mesh);
}

#[test]
fn with_normals_leaves_input_untouched() {
    let mut mesh = quad_grid(2, 2, 1.0, 1.0);
    mesh.clear_normals();
    let prepared = with_normals(&mesh);
    assert!(prepared.has_normals());
    assert!(!mesh.has_normals());
}

#[test]
fn degenerate_triangle_leaves_zero_normal() {
    let positions = vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 2.0, 0.0, 0.0];
    let mut mesh = Mesh::from_interleaved(&positions, None, None, None).unwrap();
    compute_vertex_normals(&mut mesh);
    assert_eq!(mesh.normal(0), Vec3::ZERO);
}

#[test]
fn sphere_faces_point_outward() {
    let mesh = uv_sphere(2.0, 8, 16);
    for t in 0..mesh.triangle_count() {
        let [a, b, c] = mesh.triangle_positions(t);
        let centroid = (a + b + c) / 3.0;
        assert!(mesh.face_normal(t).dot(centroid) > 0.0, "triangle {t} faces inward");
    }
}

// ─── Smoothing Tests ──────────────────────────────────────────

#[test]
fn weld_key_merges_nearby_points() {
    let a = Vec3::new(0.1, 0.2, 0.3);
    let b = a + Vec3::splat(1e-6);
    let c = a + Vec3::splat(1e-3);
    assert_eq!(weld_key(a), weld_key(b));
    assert_ne!(weld_key(a), weld_key(c));
}

#[test]
fn hard_cube_corners_weld_to_diagonals() {
    let cube = hard_cube(2.0);
    let table = SmoothedNormalTable::build(&cube);
    assert_eq!(table.welded_count(), 8);

    for i in 0..cube.vertex_count() {
        let p = cube.position(i);
        let got = table.normal_for_vertex(i);
        // Split corners share one normal, leaning into the corner's octant.
        assert_eq!(Some(got), table.normal_at(p));
        assert!(got.dot(p.normalize()) > 0.9, "vertex {i}: {got:?}");
    }
}

#[test]
fn smoothing_flat_grid_is_plus_z() {
    let grid = quad_grid(3, 3, 1.0, 1.0);
    let table = SmoothedNormalTable::build(&grid);
    assert_eq!(table.per_vertex().len(), grid.vertex_count());
    for n in table.per_vertex() {
        assert!((*n - Vec3::Z).length() < 1e-6);
    }
    assert_eq!(table.normal_at(grid.position(0)), Some(table.normal_for_vertex(0)));
}

#[test]
fn smoothing_ignores_degenerate_neighbors() {
    // A valid triangle plus a zero-area sliver sharing vertex 0's position.
    let positions = vec![
        0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, //
        0.0, 0.0, 0.0, 0.5, 0.0, 0.0, 1.0, 0.0, 0.0,
    ];
    let mesh = Mesh::from_interleaved(&positions, None, None, None).unwrap();
    let table = SmoothedNormalTable::build(&mesh);
    assert!((table.normal_for_vertex(3) - Vec3::Z).length() < 1e-6);
}

// ─── Generator Tests ──────────────────────────────────────────

#[test]
fn quad_grid_counts() {
    let mesh = quad_grid(20, 20, 2.0, 2.0);
    assert_eq!(mesh.vertex_count(), 441);
    assert_eq!(mesh.triangle_count(), 800);
    assert!(mesh.validate().is_ok());
}

#[test]
fn quad_grid_faces_plus_z() {
    let mesh = quad_grid(2, 2, 1.0, 1.0);
    for t in 0..mesh.triangle_count() {
        assert!((mesh.face_normal(t) - Vec3::Z).length() < 1e-6);
    }
}

#[test]
fn quad_grid_uvs_span_unit_square() {
    let mesh = quad_grid(2, 2, 1.0, 1.0);
    let last = mesh.vertex_count() - 1;
    assert_eq!(mesh.uv(0).to_array(), [0.0, 1.0]);
    assert_eq!(mesh.uv(last).to_array(), [1.0, 0.0]);
}

#[test]
fn bumped_grid_only_tilts_near_center() {
    let mesh = bumped_grid(8, 8, 1.0, 1.0, 0.125);
    assert!((mesh.position(40).z - 0.125).abs() < 1e-6);
    // Corner vertex is far from the bump.
    assert_eq!(mesh.normal(0), Vec3::Z);
    // A ring-one neighbor tilts.
    assert!(mesh.normal(41).z < 0.999);
}

#[test]
fn hard_cube_counts() {
    let cube = hard_cube(1.0);
    assert_eq!(cube.vertex_count(), 24);
    assert_eq!(cube.triangle_count(), 12);
    for t in 0..cube.triangle_count() {
        let [a, b, c] = cube.triangle_positions(t);
        let centroid = (a + b + c) / 3.0;
        assert!(cube.face_normal(t).dot(centroid) > 0.0);
    }
}
