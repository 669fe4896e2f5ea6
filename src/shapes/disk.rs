use crate::aabb::Aabb;
use crate::interaction::{Interaction, MaterialId};
use crate::{Float, Point2f, Point3f, Ray, Vec3f};
use cgmath::MetricSpace;

const PAD: Float = 1e-5;

/// Disk in the y = center.y plane, normal +y.
pub struct Disk {
    pub center: Point3f,
    pub radius: Float,
    pub material: MaterialId,
}

impl Disk {
    pub fn new(center: Point3f, radius: Float, material: MaterialId) -> Self {
        Self { center, radius, material }
    }

    pub fn intersect(&self, ray: &Ray, t_min: Float, t_max: Float) -> Option<Interaction> {
        // plane intersection, then the radial cutoff
        let t = (self.center.y - ray.origin.y) / ray.dir.y;
        if !(t > t_min && t < t_max) {
            return None;
        }
        let p = ray.at(t);
        if p.distance2(self.center) > self.radius * self.radius {
            return None;
        }
        Some(Interaction::new(
            t,
            p,
            Vec3f::new(0.0, 1.0, 0.0),
            Self::uv(p, self.radius),
            ray.time,
            self.material,
        ))
    }

    pub fn bounding_box(&self) -> Aabb {
        Aabb::with_bounds(
            Point3f::new(self.center.x - self.radius, self.center.y - PAD, self.center.z - self.radius),
            Point3f::new(self.center.x + self.radius, self.center.y + PAD, self.center.z + self.radius),
        )
    }

    fn uv(p: Point3f, radius: Float) -> Point2f {
        let theta = p.z.atan2(p.x);
        Point2f::new(radius * theta.cos(), radius * theta.sin())
    }
}
