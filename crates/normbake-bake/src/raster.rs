//! Per-triangle UV rasterization.
//!
//! Walks the texels whose centers fall inside one target triangle in UV
//! space, casts a cage ray for each and writes the encoded tangent-space
//! normal. Texels whose ray resolves to nothing keep their current value.

use normbake_math::{barycentric_2d, interpolate, is_inside, triangle_tangent, TangentFrame, Vec2, Vec3};
use normbake_mesh::{Mesh, SmoothedNormalTable};
use normbake_spatial::RayHit;
use normbake_types::{BakeError, BakeResult};

use crate::buffer::{encode_normal, NormalMapBuffer};
use crate::cage::CageRayCaster;
use crate::stats::BakeStats;
use crate::surface::hit_surface_normal;

/// Scratch state reused across triangles and ticks of one bake.
#[derive(Debug, Default)]
pub struct BakeScratch {
    pub hits: Vec<RayHit>,
}

/// Everything one triangle needs, borrowed from the task.
///
/// Both meshes must carry per-vertex normals.
pub struct Rasterizer<'a> {
    pub target: &'a Mesh,
    pub reference: &'a Mesh,
    pub smoothed: Option<&'a SmoothedNormalTable>,
    pub caster: CageRayCaster<'a>,
    /// Tick reported by runtime errors.
    pub tick: u32,
}

/// Texel range `[lo, hi]` covered by `[min, max]` in UV units, clamped
/// to the texture. `None` when the range misses the texture.
#[inline]
fn texel_span(min: f32, max: f32, size: u32) -> Option<(u32, u32)> {
    let size_f = size as f32;
    let lo = ((min * size_f).floor() as i64).max(0);
    let hi = ((max * size_f).ceil() as i64).min(size as i64 - 1);
    (lo <= hi).then_some((lo as u32, hi as u32))
}

impl Rasterizer<'_> {
    /// Bakes every texel of target triangle `t` into `buffer`.
    pub fn rasterize_triangle(
        &self,
        t: usize,
        buffer: &mut NormalMapBuffer,
        scratch: &mut BakeScratch,
        stats: &mut BakeStats,
    ) -> BakeResult<()> {
        let target = self.target;
        let [ia, ib, ic] = target.triangle(t).map(|i| i as usize);

        let uv = [target.uv(ia), target.uv(ib), target.uv(ic)];
        let pos = [target.position(ia), target.position(ib), target.position(ic)];
        let nrm = [target.normal(ia), target.normal(ib), target.normal(ic)];
        let smooth = self.smoothed.map(|table| {
            [
                table.normal_for_vertex(ia),
                table.normal_for_vertex(ib),
                table.normal_for_vertex(ic),
            ]
        });
        let tangent = triangle_tangent(pos, uv);

        let size = buffer.size();
        let uv_min = uv[0].min(uv[1]).min(uv[2]);
        let uv_max = uv[0].max(uv[1]).max(uv[2]);
        let (Some((x0, x1)), Some((y0, y1))) = (
            texel_span(uv_min.x, uv_max.x, size),
            texel_span(uv_min.y, uv_max.y, size),
        ) else {
            return Ok(());
        };

        let size_f = size as f32;
        for y in y0..=y1 {
            for x in x0..=x1 {
                stats.texels_tested += 1;
                let center = Vec2::new((x as f32 + 0.5) / size_f, (y as f32 + 0.5) / size_f);

                // The determinant does not depend on the sample point
                let Some(w) = barycentric_2d(center, uv[0], uv[1], uv[2]) else {
                    return Ok(());
                };
                if !is_inside(w) {
                    continue;
                }

                let point = interpolate(w, pos[0], pos[1], pos[2]);
                let normal = interpolate(w, nrm[0], nrm[1], nrm[2]).normalize_or_zero();
                if normal == Vec3::ZERO || !point.is_finite() {
                    continue;
                }
                let direction = smooth
                    .map(|s| interpolate(w, s[0], s[1], s[2]).normalize_or_zero())
                    .filter(|d| *d != Vec3::ZERO)
                    .unwrap_or(normal);

                let Some(hit) = self.caster.cast(point, direction, &mut scratch.hits, stats) else {
                    stats.misses += 1;
                    continue;
                };

                let hit_normal =
                    hit_surface_normal(self.reference, &hit).ok_or_else(|| BakeError::Runtime {
                        tick: self.tick,
                        reason: format!(
                            "spatial index reported triangle {} but the reference mesh has {}",
                            hit.triangle.0,
                            self.reference.triangle_count()
                        ),
                    })?;

                let frame = TangentFrame::from_normal_tangent(normal, tangent);
                buffer.write(x, y, encode_normal(frame.to_tangent_space(hit_normal)));
                stats.texels_written += 1;
            }
        }

        Ok(())
    }
}
