//! Procedural mesh generators for tests and benchmarks.
//!
//! These generators produce deterministic, resolution-configurable meshes
//! with outward (counter-clockwise) winding, unit normals and UVs in `[0, 1]`.

use normbake_math::Vec3;

use crate::mesh::Mesh;
use crate::normals::compute_vertex_normals;

/// Generates a flat rectangular quad grid in the XY plane, facing +Z.
///
/// The grid spans `[-width/2, width/2]` in X and `[-height/2, height/2]` in Y,
/// centered at the origin at Z=0. U grows with +X and V grows with +Y, so
/// the tangent frame of every triangle is (+X, +Y, +Z).
///
/// # Arguments
/// - `cols`: Number of quads along X (vertex count = cols + 1).
/// - `rows`: Number of quads along Y (vertex count = rows + 1).
/// - `width`: Total width.
/// - `height`: Total height.
///
/// # Example
/// ```
/// use normbake_mesh::generators::quad_grid;
/// let mesh = quad_grid(2, 2, 1.0, 1.0);
/// assert_eq!(mesh.vertex_count(), 9);  // 3×3 vertices
/// assert_eq!(mesh.triangle_count(), 8); // 2×2 quads × 2 tris each
/// ```
pub fn quad_grid(cols: usize, rows: usize, width: f32, height: f32) -> Mesh {
    let verts_x = cols + 1;
    let verts_y = rows + 1;
    let vertex_count = verts_x * verts_y;
    let tri_count = cols * rows * 2;

    let mut mesh = Mesh::with_capacity(vertex_count, tri_count);

    let half_w = width / 2.0;
    let half_h = height / 2.0;

    // Generate vertices, top row first
    for j in 0..verts_y {
        for i in 0..verts_x {
            let u = i as f32 / cols as f32;
            let v = j as f32 / rows as f32;

            mesh.pos_x.push(-half_w + u * width);
            mesh.pos_y.push(half_h - v * height);
            mesh.pos_z.push(0.0);

            mesh.normal_x.push(0.0);
            mesh.normal_y.push(0.0);
            mesh.normal_z.push(1.0);

            mesh.uv_u.push(u);
            mesh.uv_v.push(1.0 - v);
        }
    }

    // Generate triangles (two per quad)
    for j in 0..rows {
        for i in 0..cols {
            let top_left = (j * verts_x + i) as u32;
            let top_right = top_left + 1;
            let bot_left = top_left + verts_x as u32;
            let bot_right = bot_left + 1;

            // Upper-left triangle
            mesh.indices.extend_from_slice(&[top_left, bot_left, top_right]);
            // Lower-right triangle
            mesh.indices.extend_from_slice(&[top_right, bot_left, bot_right]);
        }
    }

    mesh
}

/// Generates a quad grid whose center vertex is raised by `bump_height`
/// along +Z, with normals recomputed from the displaced geometry.
///
/// Only triangles touching the center vertex tilt; every other vertex keeps
/// an exact +Z normal.
pub fn bumped_grid(cols: usize, rows: usize, width: f32, height: f32, bump_height: f32) -> Mesh {
    let mut mesh = quad_grid(cols, rows, width, height);
    let center = (rows / 2) * (cols + 1) + cols / 2;
    let p = mesh.position(center);
    mesh.set_position(center, p.x, p.y, p.z + bump_height);
    compute_vertex_normals(&mut mesh);
    mesh
}

/// Generates a UV sphere centered at the origin.
///
/// # Arguments
/// - `radius`: Sphere radius.
/// - `stacks`: Number of horizontal slices (latitude divisions).
/// - `slices`: Number of vertical slices (longitude divisions).
pub fn uv_sphere(radius: f32, stacks: usize, slices: usize) -> Mesh {
    let vertex_count = (stacks + 1) * (slices + 1);
    let tri_count = stacks * slices * 2;
    let mut mesh = Mesh::with_capacity(vertex_count, tri_count);

    for i in 0..=stacks {
        let phi = std::f32::consts::PI * i as f32 / stacks as f32; // 0 to PI
        let sin_phi = phi.sin();
        let cos_phi = phi.cos();

        for j in 0..=slices {
            let theta = 2.0 * std::f32::consts::PI * j as f32 / slices as f32;

            let x = sin_phi * theta.cos();
            let y = cos_phi;
            let z = sin_phi * theta.sin();

            mesh.pos_x.push(radius * x);
            mesh.pos_y.push(radius * y);
            mesh.pos_z.push(radius * z);

            // Normal = position on the unit sphere
            mesh.normal_x.push(x);
            mesh.normal_y.push(y);
            mesh.normal_z.push(z);

            mesh.uv_u.push(j as f32 / slices as f32);
            mesh.uv_v.push(1.0 - i as f32 / stacks as f32);
        }
    }

    for i in 0..stacks {
        for j in 0..slices {
            let a = (i * (slices + 1) + j) as u32;
            let b = a + (slices + 1) as u32;

            // Skip degenerate triangles at poles
            if i != 0 {
                mesh.indices.extend_from_slice(&[a, a + 1, b]);
            }
            if i != stacks - 1 {
                mesh.indices.extend_from_slice(&[a + 1, b + 1, b]);
            }
        }
    }

    mesh
}

/// Generates an axis-aligned cube with hard edges.
///
/// Every face owns its four vertices (24 in total) so corners are split
/// three ways with three different normals. Faces are laid out in a 3×2
/// UV atlas.
pub fn hard_cube(size: f32) -> Mesh {
    let h = size / 2.0;
    // (normal, u axis, v axis) with u × v = normal
    let faces = [
        (Vec3::X, Vec3::NEG_Z, Vec3::Y),
        (Vec3::NEG_X, Vec3::Z, Vec3::Y),
        (Vec3::Y, Vec3::X, Vec3::NEG_Z),
        (Vec3::NEG_Y, Vec3::X, Vec3::Z),
        (Vec3::Z, Vec3::X, Vec3::Y),
        (Vec3::NEG_Z, Vec3::NEG_X, Vec3::Y),
    ];
    let corners = [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)];
    let cell_w = 1.0 / 3.0;
    let cell_h = 1.0 / 2.0;

    let mut mesh = Mesh::with_capacity(24, 12);
    for (f, (normal, u_axis, v_axis)) in faces.iter().enumerate() {
        let base = mesh.vertex_count() as u32;
        let origin_u = (f % 3) as f32 * cell_w;
        let origin_v = (f / 3) as f32 * cell_h;

        for (su, sv) in corners {
            let p = (*normal + *u_axis * su + *v_axis * sv) * h;
            mesh.pos_x.push(p.x);
            mesh.pos_y.push(p.y);
            mesh.pos_z.push(p.z);
            mesh.normal_x.push(normal.x);
            mesh.normal_y.push(normal.y);
            mesh.normal_z.push(normal.z);
            mesh.uv_u.push(origin_u + (su + 1.0) * 0.5 * cell_w);
            mesh.uv_v.push(origin_v + (sv + 1.0) * 0.5 * cell_h);
        }

        mesh.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    mesh
}
