//! Integration tests for normbake-math.

use normbake_math::{
    barycentric_2d, barycentric_3d, interpolate, is_inside, triangle_tangent, TangentFrame, Vec2,
    Vec3,
};

fn approx_eq(a: Vec3, b: Vec3, tol: f32) -> bool {
    (a - b).length() < tol
}

// ─── Barycentric Tests ────────────────────────────────────────

#[test]
fn barycentric_2d_corners() {
    let a = Vec2::new(0.0, 0.0);
    let b = Vec2::new(1.0, 0.0);
    let c = Vec2::new(0.0, 1.0);

    let w = barycentric_2d(a, a, b, c).unwrap();
    assert_eq!(w, [1.0, 0.0, 0.0]);
    let w = barycentric_2d(b, a, b, c).unwrap();
    assert_eq!(w, [0.0, 1.0, 0.0]);
    let w = barycentric_2d(c, a, b, c).unwrap();
    assert_eq!(w, [0.0, 0.0, 1.0]);
}

#[test]
fn barycentric_2d_centroid() {
    let a = Vec2::new(0.0, 0.0);
    let b = Vec2::new(3.0, 0.0);
    let c = Vec2::new(0.0, 3.0);
    let w = barycentric_2d(Vec2::new(1.0, 1.0), a, b, c).unwrap();
    for wi in w {
        assert!((wi - 1.0 / 3.0).abs() < 1e-6);
    }
    assert!(is_inside(w));
}

#[test]
fn barycentric_2d_outside_point() {
    let a = Vec2::new(0.0, 0.0);
    let b = Vec2::new(1.0, 0.0);
    let c = Vec2::new(0.0, 1.0);
    let w = barycentric_2d(Vec2::new(1.0, 1.0), a, b, c).unwrap();
    assert!(!is_inside(w));
}

#[test]
fn barycentric_2d_degenerate_is_none() {
    let a = Vec2::new(0.0, 0.0);
    let b = Vec2::new(1.0, 1.0);
    let c = Vec2::new(2.0, 2.0);
    assert!(barycentric_2d(Vec2::new(0.5, 0.5), a, b, c).is_none());
}

#[test]
fn barycentric_3d_matches_interpolation() {
    let a = Vec3::new(0.0, 0.0, 1.0);
    let b = Vec3::new(2.0, 0.0, 1.0);
    let c = Vec3::new(0.0, 4.0, 1.0);
    let expected = [0.2, 0.5, 0.3];
    let p = interpolate(expected, a, b, c);

    let w = barycentric_3d(p, a, b, c).unwrap();
    for (got, want) in w.iter().zip(expected) {
        assert!((got - want).abs() < 1e-5, "got {got}, want {want}");
    }
}

#[test]
fn barycentric_3d_degenerate_is_none() {
    let a = Vec3::ZERO;
    let b = Vec3::X;
    let c = Vec3::X * 2.0;
    assert!(barycentric_3d(Vec3::X * 0.5, a, b, c).is_none());
}

// ─── Tangent Tests ────────────────────────────────────────────

#[test]
fn tangent_follows_u_axis() {
    let positions = [Vec3::ZERO, Vec3::X, Vec3::Y];
    let uvs = [Vec2::ZERO, Vec2::X, Vec2::Y];
    let t = triangle_tangent(positions, uvs);
    assert!(approx_eq(t, Vec3::X, 1e-6));
}

#[test]
fn tangent_follows_rotated_uvs() {
    // U runs along world +Y here.
    let positions = [Vec3::ZERO, Vec3::X, Vec3::Y];
    let uvs = [Vec2::ZERO, Vec2::Y, Vec2::X];
    let t = triangle_tangent(positions, uvs);
    assert!(approx_eq(t, Vec3::Y, 1e-6));
}

#[test]
fn tangent_degenerate_uvs_stay_finite() {
    let positions = [Vec3::ZERO, Vec3::X, Vec3::Y];
    let uvs = [Vec2::ZERO, Vec2::ZERO, Vec2::ZERO];
    let t = triangle_tangent(positions, uvs);
    assert!(t.is_finite());
}

#[test]
fn frame_is_orthonormal() {
    let normal = Vec3::new(0.0, 0.3, 1.0).normalize();
    let frame = TangentFrame::from_normal_tangent(normal, Vec3::X + Vec3::Z * 0.4);

    assert!((frame.tangent.length() - 1.0).abs() < 1e-5);
    assert!((frame.bitangent.length() - 1.0).abs() < 1e-5);
    assert!(frame.tangent.dot(frame.normal).abs() < 1e-5);
    assert!(frame.bitangent.dot(frame.normal).abs() < 1e-5);
    assert!(frame.tangent.dot(frame.bitangent).abs() < 1e-5);
}

#[test]
fn frame_is_right_handed() {
    let frame = TangentFrame::from_normal_tangent(Vec3::Z, Vec3::X);
    assert!(approx_eq(frame.bitangent, Vec3::Y, 1e-6));
}

#[test]
fn frame_recovers_from_parallel_tangent() {
    let frame = TangentFrame::from_normal_tangent(Vec3::Z, Vec3::Z);
    assert!((frame.tangent.length() - 1.0).abs() < 1e-5);
    assert!(frame.tangent.dot(Vec3::Z).abs() < 1e-5);
}

#[test]
fn normal_projects_to_plus_z() {
    let normal = Vec3::new(0.2, -0.5, 0.8).normalize();
    let frame = TangentFrame::from_normal_tangent(normal, Vec3::X);
    let local = frame.to_tangent_space(normal);
    assert!(approx_eq(local, Vec3::Z, 1e-5));
}

#[test]
fn frame_serialization() {
    let frame = TangentFrame::from_normal_tangent(Vec3::Z, Vec3::X);
    let json = serde_json::to_string(&frame).unwrap();
    let recovered: TangentFrame = serde_json::from_str(&json).unwrap();
    assert_eq!(frame, recovered);
}
