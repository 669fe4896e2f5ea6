use crate::{Float, Point3f, Ray, Vec3f};
use std::mem::swap;

/// Axis-aligned bounding box. The empty box is the degenerate interval
/// (+inf, -inf), which absorbs into any finite union.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Aabb {
    pub min: Point3f,
    pub max: Point3f,
}

impl Aabb {
    pub fn with_bounds(min: Point3f, max: Point3f) -> Self {
        Self { min, max }
    }

    pub fn empty() -> Self {
        Self {
            min: Point3f::new(std::f32::INFINITY, std::f32::INFINITY, std::f32::INFINITY),
            max: Point3f::new(std::f32::NEG_INFINITY, std::f32::NEG_INFINITY, std::f32::NEG_INFINITY),
        }
    }

    pub fn join(&self, other: &Self) -> Self {
        Self::with_bounds(
            Point3f::new(
                self.min.x.min(other.min.x),
                self.min.y.min(other.min.y),
                self.min.z.min(other.min.z),
            ),
            Point3f::new(
                self.max.x.max(other.max.x),
                self.max.y.max(other.max.y),
                self.max.z.max(other.max.z),
            ),
        )
    }

    pub fn join_point(&self, point: Point3f) -> Self {
        Self::with_bounds(
            Point3f::new(
                self.min.x.min(point.x),
                self.min.y.min(point.y),
                self.min.z.min(point.z),
            ),
            Point3f::new(
                self.max.x.max(point.x),
                self.max.y.max(point.y),
                self.max.z.max(point.z),
            ),
        )
    }

    pub fn centroid(&self) -> Point3f {
        self.min + self.diagonal() / 2.0
    }

    pub fn diagonal(&self) -> Vec3f {
        self.max - self.min
    }

    pub fn contains(&self, p: Point3f, eps: Float) -> bool {
        p.x >= self.min.x - eps && p.x <= self.max.x + eps
            && p.y >= self.min.y - eps && p.y <= self.max.y + eps
            && p.z >= self.min.z - eps && p.z <= self.max.z + eps
    }

    /// Slab test. The interval is narrowed per axis and rejected as soon as
    /// it becomes empty (`t_min >= t_max`).
    pub fn hit(&self, ray: &Ray, t_min: Float, t_max: Float) -> bool {
        let mut t_min = t_min;
        let mut t_max = t_max;
        for a in 0..3 {
            let inv_d = 1.0 / ray.dir[a];
            let mut t0 = (self.min[a] - ray.origin[a]) * inv_d;
            let mut t1 = (self.max[a] - ray.origin[a]) * inv_d;
            if inv_d < 0.0 {
                swap(&mut t0, &mut t1);
            }
            t_min = if t0 > t_min { t0 } else { t_min };
            t_max = if t1 < t_max { t1 } else { t_max };
            if t_min >= t_max {
                return false;
            }
        }
        true
    }
}
