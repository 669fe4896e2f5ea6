use crate::aabb::Aabb;
use crate::interaction::{Interaction, MaterialId};
use crate::math;
use crate::shapes::{Disk, FlipNormal, Primitive, PrimitiveSet};
use crate::{Float, Point2f, Point3f, Ray, Vec3f, PI};

/// Open lateral surface of a cylinder around the y axis, between y_min and
/// y_max.
pub struct Cylinder {
    pub radius: Float,
    pub y_min: Float,
    pub y_max: Float,
    pub material: MaterialId,
}

impl Cylinder {
    pub fn new(radius: Float, y_min: Float, y_max: Float, material: MaterialId) -> Self {
        Self { radius, y_min, y_max, material }
    }

    pub fn intersect(&self, ray: &Ray, t_min: Float, t_max: Float) -> Option<Interaction> {
        // x^2 + z^2 = r^2, y unconstrained until the height check
        let a = ray.dir.x * ray.dir.x + ray.dir.z * ray.dir.z;
        let b = 2.0 * (ray.dir.x * ray.origin.x + ray.dir.z * ray.origin.z);
        let c = ray.origin.x * ray.origin.x + ray.origin.z * ray.origin.z
            - self.radius * self.radius;

        let (t0, t1) = math::quadratic(a, b, c)?;
        for &t in &[t0, t1] {
            if t > t_min && t < t_max {
                let p = ray.at(t);
                if p.y >= self.y_min && p.y <= self.y_max {
                    return Some(Interaction::new(
                        t,
                        p,
                        self.normal(p),
                        self.uv(p),
                        ray.time,
                        self.material,
                    ));
                }
            }
        }
        None
    }

    pub fn bounding_box(&self) -> Aabb {
        Aabb::with_bounds(
            Point3f::new(-self.radius, self.y_min, -self.radius),
            Point3f::new(self.radius, self.y_max, self.radius),
        )
    }

    fn normal(&self, p: Point3f) -> Vec3f {
        Vec3f::new(p.x / self.radius, 0.0, p.z / self.radius)
    }

    fn uv(&self, p: Point3f) -> Point2f {
        let theta = p.z.atan2(p.x);
        Point2f::new(
            1.0 - (theta + PI) / (2.0 * PI),
            (p.y - self.y_min) / (self.y_max - self.y_min),
        )
    }
}

/// Cylinder closed by disk caps; the three faces live in a nested primitive
/// set and the nearest sub-hit wins.
pub struct CappedCylinder {
    pub radius: Float,
    pub y_min: Float,
    pub y_max: Float,
    faces: PrimitiveSet,
}

impl CappedCylinder {
    pub fn new(radius: Float, y_min: Float, y_max: Float, material: MaterialId) -> Self {
        let top = Primitive::Disk(Disk::new(Point3f::new(0.0, y_max, 0.0), radius, material));
        let bottom = Primitive::FlipNormal(FlipNormal::new(Primitive::Disk(Disk::new(
            Point3f::new(0.0, y_min, 0.0),
            radius,
            material,
        ))));
        let side = Primitive::Cylinder(Cylinder::new(radius, y_min, y_max, material));

        Self {
            radius,
            y_min,
            y_max,
            faces: PrimitiveSet::new(vec![top, bottom, side]),
        }
    }

    pub fn intersect(&self, ray: &Ray, t_min: Float, t_max: Float) -> Option<Interaction> {
        self.faces.intersect(ray, t_min, t_max)
    }

    pub fn bounding_box(&self) -> Aabb {
        Aabb::with_bounds(
            Point3f::new(-self.radius, self.y_min, -self.radius),
            Point3f::new(self.radius, self.y_max, self.radius),
        )
    }
}
