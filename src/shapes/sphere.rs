use crate::aabb::Aabb;
use crate::interaction::{Interaction, MaterialId};
use crate::math::{self, lerp};
use crate::{Float, Point2f, Point3f, Ray, Vec3f, PI};
use cgmath::InnerSpace;

/// Linear translation applied over the shutter interval [0, 1].
#[derive(Copy, Clone, Debug)]
pub struct Motion {
    pub start: Vec3f,
    pub end: Vec3f,
}

impl Motion {
    pub fn offset_at(&self, time: Float) -> Vec3f {
        Vec3f::new(
            lerp(time, self.start.x, self.end.x),
            lerp(time, self.start.y, self.end.y),
            lerp(time, self.start.z, self.end.z),
        )
    }
}

pub struct Sphere {
    pub center: Point3f,
    pub radius: Float,
    pub material: MaterialId,
    pub motion: Option<Motion>,
}

impl Sphere {
    pub fn new(center: Point3f, radius: Float, material: MaterialId) -> Self {
        Self { center, radius, material, motion: None }
    }

    pub fn moving(center: Point3f, radius: Float, material: MaterialId, motion: Motion) -> Self {
        Self { center, radius, material, motion: Some(motion) }
    }

    fn center_at(&self, time: Float) -> Point3f {
        match &self.motion {
            Some(motion) => self.center + motion.offset_at(time),
            None => self.center,
        }
    }

    pub fn intersect(&self, ray: &Ray, t_min: Float, t_max: Float) -> Option<Interaction> {
        let center = self.center_at(ray.time);
        let oc = ray.origin - center;
        let a = ray.dir.magnitude2();
        let b = 2.0 * oc.dot(ray.dir);
        let c = oc.magnitude2() - self.radius * self.radius;

        let (t0, t1) = math::quadratic(a, b, c)?;
        // prefer the near root, fall back to the far one
        for &t in &[t0, t1] {
            if t > t_min && t < t_max {
                let p = ray.at(t);
                let n = (p - center) / self.radius;
                return Some(Interaction::new(t, p, n, Self::uv(n), ray.time, self.material));
            }
        }
        None
    }

    pub fn bounding_box(&self) -> Aabb {
        let r = Vec3f::new(self.radius, self.radius, self.radius);
        let bounds = Aabb::with_bounds(self.center - r, self.center + r);
        match &self.motion {
            Some(motion) => {
                let at_start = Aabb::with_bounds(
                    self.center + motion.start - r,
                    self.center + motion.start + r,
                );
                let at_end = Aabb::with_bounds(
                    self.center + motion.end - r,
                    self.center + motion.end + r,
                );
                bounds.join(&at_start).join(&at_end)
            }
            None => bounds,
        }
    }

    /// Spherical parametrization of a point on the unit sphere.
    fn uv(p: Vec3f) -> Point2f {
        let phi = p.z.atan2(p.x);
        let theta = p.y.max(-1.0).min(1.0).asin();
        Point2f::new(
            1.0 - (phi + PI) / (2.0 * PI),
            (theta + PI / 2.0) / PI,
        )
    }
}
