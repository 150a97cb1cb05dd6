//! Cage ray casting.
//!
//! The cage is the target surface pushed out by `max_front` along the ray
//! direction. Rays start on the cage and travel back through the target,
//! stopping `max_rear` behind it.

use normbake_math::Vec3;
use normbake_spatial::{Ray, RayHit, SpatialIndex};

use crate::config::BakeOptions;
use crate::stats::BakeStats;

/// Casts cage rays into a reference mesh's spatial index.
pub struct CageRayCaster<'a> {
    index: &'a dyn SpatialIndex,
    front: f32,
    rear: f32,
    ignore_backface: bool,
}

impl<'a> CageRayCaster<'a> {
    pub fn new(index: &'a dyn SpatialIndex, options: &BakeOptions) -> Self {
        Self {
            index,
            front: options.effective_front(),
            rear: options.effective_rear(),
            ignore_backface: options.ignore_backface,
        }
    }

    /// The ray for a surface sample at `point` with unit direction `direction`,
    /// and its maximum travel.
    #[inline]
    pub fn ray_for(&self, point: Vec3, direction: Vec3) -> (Ray, f32) {
        let ray = Ray::new(point + direction * self.front, -direction);
        (ray, self.front + self.rear)
    }

    /// Casts one ray and resolves the hit that supplies the baked normal.
    ///
    /// `hits` is scratch space reused across calls.
    pub fn cast(
        &self,
        point: Vec3,
        direction: Vec3,
        hits: &mut Vec<RayHit>,
        stats: &mut BakeStats,
    ) -> Option<RayHit> {
        let (ray, max_distance) = self.ray_for(point, direction);
        self.index.query_into(&ray, max_distance, hits);
        stats.rays_cast += 1;
        select_best_hit(hits, &ray, self.ignore_backface, stats)
    }
}

/// A hit is a back face when the ray travels along the triangle's normal,
/// i.e. it strikes the triangle from behind.
#[inline]
pub fn is_backface(ray_direction: Vec3, face_normal: Vec3) -> bool {
    ray_direction.dot(face_normal) > 0.0
}

/// Picks the nearest acceptable hit; equal distances go to the lowest
/// triangle index.
pub fn select_best_hit(
    hits: &[RayHit],
    ray: &Ray,
    ignore_backface: bool,
    stats: &mut BakeStats,
) -> Option<RayHit> {
    let mut best: Option<RayHit> = None;
    for hit in hits {
        if ignore_backface && is_backface(ray.direction, hit.face_normal) {
            stats.backface_rejected += 1;
            continue;
        }
        let closer = match &best {
            None => true,
            Some(b) => (hit.distance, hit.triangle) < (b.distance, b.triangle),
        };
        if closer {
            best = Some(*hit);
        }
    }
    best
}
